//! Predicate parsing cache

use crate::condition::ast::AstNode;
use crate::condition::evaluator::ConditionContext;
use crate::condition::parser;
use crate::error::Result;
use ahash::AHashMap;
use once_cell::sync::Lazy;
use parking_lot::RwLock;

/// Global predicate cache keyed by the raw predicate text
static CONDITION_CACHE: Lazy<RwLock<AHashMap<String, AstNode>>> = Lazy::new(|| {
    let map = AHashMap::with_capacity(64);
    RwLock::new(map)
});

/// Get or parse a predicate string, using the cache for repeats
#[inline]
pub fn get_or_parse(condition: &str) -> Result<AstNode> {
    {
        let cache = CONDITION_CACHE.read();
        if let Some(ast) = cache.get(condition) {
            return Ok(ast.clone());
        }
    }

    let ast = parser::parse(condition)?;

    {
        let mut cache = CONDITION_CACHE.write();
        cache.insert(condition.to_string(), ast.clone());
    }

    Ok(ast)
}

/// Check a predicate against a context. An empty predicate always holds.
#[inline]
pub fn check_condition(condition: &str, ctx: &ConditionContext<'_>) -> Result<bool> {
    if condition.trim().is_empty() {
        return Ok(true);
    }

    let ast = get_or_parse(condition)?;
    Ok(crate::condition::evaluator::check(&ast, ctx))
}

/// Clear the predicate cache
pub fn clear_cache() {
    let mut cache = CONDITION_CACHE.write();
    cache.clear();
}

/// Whether `condition` has a cached AST
pub fn is_cached(condition: &str) -> bool {
    CONDITION_CACHE.read().contains_key(condition)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::character::Attributes;

    #[test]
    fn test_cache_hit() {
        let attrs = Attributes::default();
        let ctx = ConditionContext::new(40, &attrs);

        assert!(check_condition("age>=39 & age<=41", &ctx).unwrap());
        assert!(is_cached("age>=39 & age<=41"));
        assert!(check_condition("age>=39 & age<=41", &ctx).unwrap());
    }

    #[test]
    fn test_invalid_not_cached() {
        let attrs = Attributes::default();
        let ctx = ConditionContext::new(40, &attrs);

        assert!(check_condition("age>>", &ctx).is_err());
        assert!(!is_cached("age>>"));
    }

    #[test]
    fn test_empty_condition() {
        let attrs = Attributes::default();
        let ctx = ConditionContext::new(0, &attrs);
        assert!(check_condition("", &ctx).unwrap());
        assert!(check_condition("   ", &ctx).unwrap());
    }
}
