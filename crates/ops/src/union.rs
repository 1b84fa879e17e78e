//! Key tools over unions of shapes
//!
//! A union of context shapes ("one of these objects") is awkward to
//! consume downstream. These operators apply the same rule independently
//! to every alternative and recombine the results: `union_keys` reduces to
//! a set of names, `unify` reduces to a single merged descriptor.

use crate::normalize::normalize;
use reshape_core::{FieldDef, ShapeDescriptor, ShapeType};
use std::collections::{BTreeMap, BTreeSet};

/// The field names reachable across a union of shapes
///
/// Open shapes cannot enumerate their names, so their presence degrades
/// the whole result to [`KeySet::AnyString`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeySet {
    /// A concrete, enumerable set of names
    Exact(BTreeSet<String>),
    /// Any string is a valid key
    AnyString,
}

impl KeySet {
    /// Check whether any string is accepted
    pub fn is_any(&self) -> bool {
        matches!(self, KeySet::AnyString)
    }

    /// Check whether a name is in the set
    pub fn contains(&self, name: &str) -> bool {
        match self {
            KeySet::Exact(names) => names.contains(name),
            KeySet::AnyString => true,
        }
    }
}

// Fan a (possibly nested) union out into its alternatives. Anything that
// is not a union is a one-alternative union of itself.
fn alternatives(ty: &ShapeType) -> Vec<&ShapeType> {
    match ty {
        ShapeType::Union(alts) => alts.iter().flat_map(alternatives).collect(),
        other => vec![other],
    }
}

/// The union of field names across every alternative of a union shape
///
/// Object alternatives contribute their names; an open alternative makes
/// the result [`KeySet::AnyString`]; other alternatives have no enumerable
/// string keys and contribute nothing.
pub fn union_keys(ty: &ShapeType) -> KeySet {
    let mut names = BTreeSet::new();
    for alt in alternatives(ty) {
        match alt {
            ShapeType::Object(desc) => names.extend(desc.names().map(String::from)),
            ShapeType::Open(_) => return KeySet::AnyString,
            _ => {}
        }
    }
    KeySet::Exact(names)
}

/// Unify a union of object shapes into one normalized shape
///
/// Every alternative's fields contribute. A name declared by several
/// alternatives with differing types gets the union of those types. A
/// field is optional in the result iff some alternative declares it
/// optional, or some alternative omits it entirely (the unified shape
/// cannot guarantee presence). Non-object alternatives contribute no
/// fields; callers are expected to pass unions of object shapes.
pub fn unify(ty: &ShapeType) -> ShapeDescriptor {
    let shapes: Vec<&ShapeDescriptor> = alternatives(ty)
        .into_iter()
        .filter_map(ShapeType::as_object)
        .collect();
    let total = shapes.len();

    let mut out = ShapeDescriptor::new();
    let mut seen: BTreeMap<String, usize> = BTreeMap::new();
    for desc in &shapes {
        for field in desc.iter() {
            *seen.entry(field.name.clone()).or_insert(0) += 1;
            let combined = match out.get(&field.name) {
                None => field.clone(),
                Some(existing) => FieldDef {
                    name: field.name.clone(),
                    ty: ShapeType::union([existing.ty.clone(), field.ty.clone()]),
                    optional: existing.optional || field.optional,
                },
            };
            out.insert(combined);
        }
    }

    let unified: ShapeDescriptor = out
        .into_iter()
        .map(|mut field| {
            if seen.get(&field.name) != Some(&total) {
                field.optional = true;
            }
            field
        })
        .collect();

    match normalize(ShapeType::Object(unified)) {
        ShapeType::Object(desc) => desc,
        // normalize never changes the Object variant
        _ => ShapeDescriptor::new(),
    }
}
