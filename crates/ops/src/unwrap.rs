//! Deferred-value and callable unwrapping
//!
//! Procedures may declare a field directly, as a deferred value resolving
//! to it, or as a factory callable producing either. These operators reduce
//! all of those spellings to the effective value type.

use reshape_core::ShapeType;

/// Recursively unwrap deferred wrappers to the resolved value type
///
/// `Deferred<Deferred<T>>` reduces to `T`; unions unwrap branch-wise;
/// anything else is returned unchanged. Idempotent, and bounded by the
/// nesting depth of the input tree.
pub fn unwrap_async(ty: ShapeType) -> ShapeType {
    match ty {
        ShapeType::Deferred(inner) => unwrap_async(*inner),
        ShapeType::Union(alts) => ShapeType::union(alts.into_iter().map(unwrap_async)),
        other => other,
    }
}

/// Reduce a callable-or-value to its effective value type
///
/// A callable reduces to the async-unwrapped result of calling it; unions
/// reduce branch-wise; a plain value is returned unchanged.
pub fn unwrap_callable(ty: ShapeType) -> ShapeType {
    match ty {
        ShapeType::Callable(result) => unwrap_async(*result),
        ShapeType::Union(alts) => ShapeType::union(alts.into_iter().map(unwrap_callable)),
        other => other,
    }
}

/// The async return type of a callable, if the input is one
///
/// Unlike [`unwrap_callable`], a non-callable input is a `None` rather than
/// a pass-through: this is the strict form for call sites that require a
/// factory.
pub fn infer_async_return(ty: &ShapeType) -> Option<ShapeType> {
    match ty {
        ShapeType::Callable(result) => Some(unwrap_async((**result).clone())),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unwrap_async_single_level() {
        let t = ShapeType::deferred(ShapeType::Int);
        assert_eq!(unwrap_async(t), ShapeType::Int);
    }

    #[test]
    fn test_unwrap_async_nested() {
        let t = ShapeType::deferred(ShapeType::deferred(ShapeType::deferred(ShapeType::Text)));
        assert_eq!(unwrap_async(t), ShapeType::Text);
    }

    #[test]
    fn test_unwrap_async_non_deferred_unchanged() {
        assert_eq!(unwrap_async(ShapeType::Int), ShapeType::Int);
        let obj = ShapeType::Object(Default::default());
        assert_eq!(unwrap_async(obj.clone()), obj);
    }

    #[test]
    fn test_unwrap_async_idempotent() {
        let t = ShapeType::deferred(ShapeType::deferred(ShapeType::Bool));
        let once = unwrap_async(t);
        let twice = unwrap_async(once.clone());
        assert_eq!(once, twice);
    }

    #[test]
    fn test_unwrap_async_distributes_over_union() {
        // T | Deferred<T> reduces to T
        let t = ShapeType::maybe_deferred(ShapeType::Int);
        assert_eq!(unwrap_async(t), ShapeType::Int);
    }

    #[test]
    fn test_unwrap_async_union_of_distinct_branches() {
        let t = ShapeType::Union(vec![
            ShapeType::deferred(ShapeType::Int),
            ShapeType::Text,
        ]);
        assert_eq!(
            unwrap_async(t),
            ShapeType::Union(vec![ShapeType::Int, ShapeType::Text])
        );
    }

    #[test]
    fn test_unwrap_async_does_not_enter_lists() {
        // A list of deferred values is still a list of deferred values
        let t = ShapeType::list(ShapeType::deferred(ShapeType::Int));
        assert_eq!(unwrap_async(t.clone()), t);
    }

    #[test]
    fn test_unwrap_callable_sync() {
        let t = ShapeType::callable(ShapeType::Text);
        assert_eq!(unwrap_callable(t), ShapeType::Text);
    }

    #[test]
    fn test_unwrap_callable_async() {
        let t = ShapeType::callable(ShapeType::deferred(ShapeType::Text));
        assert_eq!(unwrap_callable(t), ShapeType::Text);
    }

    #[test]
    fn test_unwrap_callable_distributes_over_union() {
        // (() => Deferred<int>) | string -> int | string
        let u = ShapeType::Union(vec![
            ShapeType::callable(ShapeType::deferred(ShapeType::Int)),
            ShapeType::Text,
        ]);
        assert_eq!(
            unwrap_callable(u),
            ShapeType::Union(vec![ShapeType::Int, ShapeType::Text])
        );
    }

    #[test]
    fn test_unwrap_callable_union_collapses_identical_branches() {
        let u = ShapeType::Union(vec![
            ShapeType::callable(ShapeType::Int),
            ShapeType::Int,
        ]);
        assert_eq!(unwrap_callable(u), ShapeType::Int);
    }

    #[test]
    fn test_unwrap_callable_plain_value_unchanged() {
        assert_eq!(unwrap_callable(ShapeType::Bool), ShapeType::Bool);
        // A deferred value that is not a callable is NOT unwrapped here
        let t = ShapeType::deferred(ShapeType::Bool);
        assert_eq!(unwrap_callable(t.clone()), t);
    }

    #[test]
    fn test_infer_async_return_requires_callable() {
        let t = ShapeType::callable(ShapeType::deferred(ShapeType::Int));
        assert_eq!(infer_async_return(&t), Some(ShapeType::Int));
        assert_eq!(infer_async_return(&ShapeType::Int), None);
    }
}
