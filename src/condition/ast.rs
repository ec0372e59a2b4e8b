//! Abstract Syntax Tree for applicability predicates

use crate::character::Stat;

/// AST node for predicate expressions
#[derive(Debug, Clone, PartialEq)]
pub enum AstNode {
    /// Single comparison like "age>=18"
    Single(SingleCondition),
    /// AND operation
    And(Box<AstNode>, Box<AstNode>),
    /// OR operation
    Or(Box<AstNode>, Box<AstNode>),
}

/// Single comparison expression
#[derive(Debug, Clone, PartialEq)]
pub struct SingleCondition {
    pub subject: Subject,
    pub operator: Operator,
    pub value: ConditionValue,
}

/// What a comparison reads from the character
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Subject {
    /// The age being entered, not the current one
    Age,
    Stat(Stat),
}

/// Comparison operators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    /// Greater than (>)
    Greater,
    /// Less than (<)
    Less,
    /// Greater than or equal (>=)
    GreaterEqual,
    /// Less than or equal (<=)
    LessEqual,
    /// Equal (=)
    Equal,
    /// Not equal (!=)
    NotEqual,
    /// Value is one of the list (?)
    In,
    /// Value is none of the list (!)
    NotIn,
}

impl Operator {
    /// Whether the operator takes a list operand
    #[inline]
    pub fn takes_list(self) -> bool {
        matches!(self, Operator::In | Operator::NotIn)
    }
}

/// Right-hand side of a comparison
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConditionValue {
    Integer(i64),
    List(Vec<i64>),
}
