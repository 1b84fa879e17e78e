//! Field selection by type predicate
//!
//! Routers use this to project a procedure map down to the procedures of
//! one kind, e.g. "the fields whose value type is callable".

use reshape_core::{ShapeDescriptor, ShapeType};

/// Keep the fields whose value type matches the predicate
///
/// Value types and optionality of the surviving fields are unchanged and
/// input order is preserved.
pub fn filter<P>(shape: &ShapeDescriptor, predicate: P) -> ShapeDescriptor
where
    P: Fn(&ShapeType) -> bool,
{
    shape
        .iter()
        .filter(|f| predicate(&f.ty))
        .cloned()
        .collect()
}

/// Names of the fields whose value type matches the predicate, in order
pub fn filter_keys<P>(shape: &ShapeDescriptor, predicate: P) -> Vec<String>
where
    P: Fn(&ShapeType) -> bool,
{
    shape
        .iter()
        .filter(|f| predicate(&f.ty))
        .map(|f| f.name.clone())
        .collect()
}
