//! Predicate string parser

use crate::character::Stat;
use crate::condition::ast::{AstNode, ConditionValue, Operator, SingleCondition, Subject};
use crate::error::{KowLifeError, Result};
use once_cell::sync::Lazy;
use regex::Regex;

/// `<subject><op><value>`; alternation is leftmost-first so `>=` wins over `>`
static SINGLE_CONDITION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?i)([a-z]+)\s*(>=|<=|!=|>|<|=|\?|!)\s*(.+)$")
        .expect("single condition pattern is valid")
});

/// Parse a predicate string into an AST
pub fn parse(condition: &str) -> Result<AstNode> {
    let condition = condition.trim();
    if condition.is_empty() {
        return Err(KowLifeError::InvalidCondition(
            "Empty condition".to_string(),
        ));
    }

    let tokens = tokenize(condition)?;
    parse_tokens(&tokens)
}

#[derive(Debug, Clone, PartialEq)]
enum Token {
    Condition(String),
    And,
    Or,
    OpenParen,
    CloseParen,
}

fn flush(current: &mut String, tokens: &mut Vec<Token>) {
    let text = current.trim();
    if !text.is_empty() {
        tokens.push(Token::Condition(text.to_string()));
    }
    current.clear();
}

fn tokenize(condition: &str) -> Result<Vec<Token>> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut paren_depth: i32 = 0;

    for c in condition.chars() {
        match c {
            '(' => {
                flush(&mut current, &mut tokens);
                tokens.push(Token::OpenParen);
                paren_depth += 1;
            }
            ')' => {
                flush(&mut current, &mut tokens);
                tokens.push(Token::CloseParen);
                paren_depth -= 1;
                if paren_depth < 0 {
                    return Err(KowLifeError::InvalidCondition(
                        "Unbalanced parentheses".to_string(),
                    ));
                }
            }
            '&' => {
                flush(&mut current, &mut tokens);
                tokens.push(Token::And);
            }
            '|' => {
                flush(&mut current, &mut tokens);
                tokens.push(Token::Or);
            }
            _ => current.push(c),
        }
    }
    flush(&mut current, &mut tokens);

    if paren_depth != 0 {
        return Err(KowLifeError::InvalidCondition(
            "Unbalanced parentheses".to_string(),
        ));
    }

    Ok(tokens)
}

/// Whether `tokens[0]` opens a group that closes at the last token
fn wrapped_in_parens(tokens: &[Token]) -> bool {
    if tokens.len() < 2
        || tokens[0] != Token::OpenParen
        || tokens[tokens.len() - 1] != Token::CloseParen
    {
        return false;
    }
    let mut depth = 0;
    for (i, token) in tokens.iter().enumerate() {
        match token {
            Token::OpenParen => depth += 1,
            Token::CloseParen => {
                depth -= 1;
                if depth == 0 && i != tokens.len() - 1 {
                    return false;
                }
            }
            _ => {}
        }
    }
    true
}

fn parse_tokens(tokens: &[Token]) -> Result<AstNode> {
    if tokens.is_empty() {
        return Err(KowLifeError::InvalidCondition(
            "Empty token list".to_string(),
        ));
    }

    // OR binds looser than AND; split on the first top-level occurrence
    let mut paren_depth = 0;
    let mut or_pos = None;
    let mut and_pos = None;

    for (i, token) in tokens.iter().enumerate() {
        match token {
            Token::OpenParen => paren_depth += 1,
            Token::CloseParen => paren_depth -= 1,
            Token::Or if paren_depth == 0 && or_pos.is_none() => or_pos = Some(i),
            Token::And if paren_depth == 0 && and_pos.is_none() => and_pos = Some(i),
            _ => {}
        }
    }

    if let Some(pos) = or_pos {
        let left = parse_tokens(&tokens[..pos])?;
        let right = parse_tokens(&tokens[pos + 1..])?;
        return Ok(AstNode::Or(Box::new(left), Box::new(right)));
    }

    if let Some(pos) = and_pos {
        let left = parse_tokens(&tokens[..pos])?;
        let right = parse_tokens(&tokens[pos + 1..])?;
        return Ok(AstNode::And(Box::new(left), Box::new(right)));
    }

    if wrapped_in_parens(tokens) {
        return parse_tokens(&tokens[1..tokens.len() - 1]);
    }

    if let [Token::Condition(cond)] = tokens {
        return parse_single_condition(cond);
    }

    Err(KowLifeError::InvalidCondition(format!(
        "Cannot parse tokens: {:?}",
        tokens
    )))
}

fn parse_subject(name: &str) -> Result<Subject> {
    if name.eq_ignore_ascii_case("age") {
        Ok(Subject::Age)
    } else {
        name.parse::<Stat>().map(Subject::Stat)
    }
}

fn parse_operator(op: &str) -> Result<Operator> {
    let operator = match op {
        ">" => Operator::Greater,
        "<" => Operator::Less,
        ">=" => Operator::GreaterEqual,
        "<=" => Operator::LessEqual,
        "=" => Operator::Equal,
        "!=" => Operator::NotEqual,
        "?" => Operator::In,
        "!" => Operator::NotIn,
        other => {
            return Err(KowLifeError::InvalidCondition(format!(
                "Unknown operator: {}",
                other
            )))
        }
    };
    Ok(operator)
}

fn parse_single_condition(condition: &str) -> Result<AstNode> {
    let caps = SINGLE_CONDITION.captures(condition).ok_or_else(|| {
        KowLifeError::InvalidCondition(format!("No operator found in: {}", condition))
    })?;

    let subject = parse_subject(&caps[1])?;
    let operator = parse_operator(&caps[2])?;
    let value = parse_value(&caps[3])?;

    let list_value = matches!(value, ConditionValue::List(_));
    if operator.takes_list() != list_value {
        return Err(KowLifeError::InvalidCondition(format!(
            "Operand does not fit operator in: {}",
            condition
        )));
    }

    Ok(AstNode::Single(SingleCondition {
        subject,
        operator,
        value,
    }))
}

fn parse_value(value_str: &str) -> Result<ConditionValue> {
    let value_str = value_str.trim();

    if let Some(inner) = value_str
        .strip_prefix('[')
        .and_then(|rest| rest.strip_suffix(']'))
    {
        let values: std::result::Result<Vec<i64>, _> = inner
            .split(',')
            .map(|s| s.trim().parse::<i64>())
            .collect();

        return values.map(ConditionValue::List).map_err(|_| {
            KowLifeError::InvalidCondition(format!("Invalid list: {}", value_str))
        });
    }

    value_str
        .parse::<i64>()
        .map(ConditionValue::Integer)
        .map_err(|_| KowLifeError::InvalidCondition(format!("Invalid value: {}", value_str)))
}
