//! Optionality classification and deep-optional
//!
//! This module is the single source of truth for "which fields of a shape
//! are optional". A field is optional iff its declared value type admits
//! the absent sentinel `Undefined`, or it carries the optional flag (the
//! descriptor-level spelling of the same fact). `Null` never counts.

use reshape_core::{FieldDef, ShapeDescriptor, ShapeType};
use std::collections::BTreeSet;

/// Check whether a value type admits the absent sentinel
///
/// True for `Undefined` itself and for a union with any undefined-admitting
/// branch. Every other type, including `Null`, is considered present.
pub fn admits_undefined(ty: &ShapeType) -> bool {
    match ty {
        ShapeType::Undefined => true,
        ShapeType::Union(alts) => alts.iter().any(admits_undefined),
        _ => false,
    }
}

/// Names of the optional fields of a shape
///
/// The result is the set consumed by [`crate::merge`] when computing result
/// optionality, so the classification here is authoritative.
pub fn undefined_keys(shape: &ShapeDescriptor) -> BTreeSet<String> {
    shape
        .iter()
        .filter(|f| f.optional || admits_undefined(&f.ty))
        .map(|f| f.name.clone())
        .collect()
}

/// Recursively mark every field of a shape optional
///
/// Object shapes have each field marked optional and its value type
/// recursed into; unions apply branch-wise, so an object alternative is
/// deep-optionalized while scalar alternatives pass through; any other
/// input is returned unchanged (base case). Descriptors are owned trees,
/// so the recursion is bounded by the nesting depth of the input.
pub fn deep_optional(ty: ShapeType) -> ShapeType {
    match ty {
        ShapeType::Object(desc) => {
            let fields = desc
                .into_iter()
                .map(|f| FieldDef {
                    name: f.name,
                    ty: deep_optional(f.ty),
                    optional: true,
                })
                .collect::<ShapeDescriptor>();
            ShapeType::Object(fields)
        }
        ShapeType::Union(alts) => ShapeType::union(alts.into_iter().map(deep_optional)),
        other => other,
    }
}
