//! Predicate evaluator

use crate::character::Attributes;
use crate::condition::ast::{AstNode, ConditionValue, Operator, SingleCondition, Subject};

/// What a predicate is evaluated against
#[derive(Debug, Clone, Copy)]
pub struct ConditionContext<'a> {
    /// Age the character is about to enter
    pub age: u32,
    pub attributes: &'a Attributes,
}

impl<'a> ConditionContext<'a> {
    pub fn new(age: u32, attributes: &'a Attributes) -> Self {
        Self { age, attributes }
    }

    #[inline]
    fn get(&self, subject: Subject) -> i64 {
        match subject {
            Subject::Age => i64::from(self.age),
            Subject::Stat(stat) => i64::from(self.attributes.get(stat)),
        }
    }
}

/// Evaluate an AST against a context
pub fn check(ast: &AstNode, ctx: &ConditionContext<'_>) -> bool {
    match ast {
        AstNode::Single(cond) => check_single(cond, ctx),
        AstNode::And(left, right) => check(left, ctx) && check(right, ctx),
        AstNode::Or(left, right) => check(left, ctx) || check(right, ctx),
    }
}

fn check_single(cond: &SingleCondition, ctx: &ConditionContext<'_>) -> bool {
    let pv = ctx.get(cond.subject);

    match (&cond.value, cond.operator) {
        (ConditionValue::Integer(cv), Operator::Greater) => pv > *cv,
        (ConditionValue::Integer(cv), Operator::Less) => pv < *cv,
        (ConditionValue::Integer(cv), Operator::GreaterEqual) => pv >= *cv,
        (ConditionValue::Integer(cv), Operator::LessEqual) => pv <= *cv,
        (ConditionValue::Integer(cv), Operator::Equal) => pv == *cv,
        (ConditionValue::Integer(cv), Operator::NotEqual) => pv != *cv,
        (ConditionValue::List(list), Operator::In) => list.contains(&pv),
        (ConditionValue::List(list), Operator::NotIn) => !list.contains(&pv),

        // The parser rejects every other pairing
        _ => false,
    }
}
