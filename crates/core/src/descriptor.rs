//! Shape descriptors
//!
//! This module defines:
//! - FieldDef: A named field with a value type and an optionality flag
//! - ShapeDescriptor: An ordered collection of fields describing an object
//!
//! Field order is preserved from insertion because the normalizer and the
//! field filter are order-preserving for display. Equality between
//! descriptors is order-insensitive: order never affects operator results.
//!
//! Field names within one descriptor are unique by producer contract;
//! `insert` enforces this by replacing an existing field in place.

use crate::shape::ShapeType;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single named field of a shape
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDef {
    /// Field name, unique within its descriptor
    pub name: String,
    /// Declared value type
    pub ty: ShapeType,
    /// Whether the field may be absent
    pub optional: bool,
}

impl FieldDef {
    /// Create a required field
    pub fn new(name: impl Into<String>, ty: ShapeType) -> Self {
        Self {
            name: name.into(),
            ty,
            optional: false,
        }
    }

    /// Create an optional field
    pub fn optional(name: impl Into<String>, ty: ShapeType) -> Self {
        Self {
            name: name.into(),
            ty,
            optional: true,
        }
    }
}

impl fmt::Display for FieldDef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.optional {
            write!(f, "{}?: {}", self.name, self.ty)
        } else {
            write!(f, "{}: {}", self.name, self.ty)
        }
    }
}

/// An object shape: ordered mapping from field name to (type, optionality)
///
/// # Examples
///
/// ```
/// use reshape_core::{ShapeDescriptor, ShapeType};
///
/// let user = ShapeDescriptor::new()
///     .field("id", ShapeType::Int)
///     .optional_field("nickname", ShapeType::Text);
///
/// assert!(user.contains("id"));
/// assert_eq!(user.to_string(), "{id: int, nickname?: string}");
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ShapeDescriptor {
    fields: Vec<FieldDef>,
}

impl ShapeDescriptor {
    /// Create an empty descriptor
    pub fn new() -> Self {
        Self { fields: Vec::new() }
    }

    /// Builder: append a required field
    pub fn field(mut self, name: impl Into<String>, ty: ShapeType) -> Self {
        self.insert(FieldDef::new(name, ty));
        self
    }

    /// Builder: append an optional field
    pub fn optional_field(mut self, name: impl Into<String>, ty: ShapeType) -> Self {
        self.insert(FieldDef::optional(name, ty));
        self
    }

    /// Insert a field, replacing any existing field of the same name in place
    pub fn insert(&mut self, field: FieldDef) {
        match self.fields.iter_mut().find(|f| f.name == field.name) {
            Some(existing) => *existing = field,
            None => self.fields.push(field),
        }
    }

    /// Look up a field by name
    pub fn get(&self, name: &str) -> Option<&FieldDef> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Check whether a field with this name exists
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Field names in insertion order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|f| f.name.as_str())
    }

    /// Fields in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &FieldDef> {
        self.fields.iter()
    }

    /// Number of fields
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Check whether the descriptor has no fields
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

// Field order is irrelevant for every operator, so equality ignores it
impl PartialEq for ShapeDescriptor {
    fn eq(&self, other: &Self) -> bool {
        self.fields.len() == other.fields.len()
            && self.fields.iter().all(|f| other.get(&f.name) == Some(f))
    }
}

impl Eq for ShapeDescriptor {}

impl FromIterator<FieldDef> for ShapeDescriptor {
    fn from_iter<I: IntoIterator<Item = FieldDef>>(iter: I) -> Self {
        let mut desc = ShapeDescriptor::new();
        for field in iter {
            desc.insert(field);
        }
        desc
    }
}

impl IntoIterator for ShapeDescriptor {
    type Item = FieldDef;
    type IntoIter = std::vec::IntoIter<FieldDef>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.into_iter()
    }
}

impl<'a> IntoIterator for &'a ShapeDescriptor {
    type Item = &'a FieldDef;
    type IntoIter = std::slice::Iter<'a, FieldDef>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.iter()
    }
}

impl fmt::Display for ShapeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, field) in self.fields.iter().enumerate() {
            if i != 0 {
                write!(f, ", ")?;
            }
            write!(f, "{field}")?;
        }
        write!(f, "}}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_descriptor() {
        let d = ShapeDescriptor::new();
        assert!(d.is_empty());
        assert_eq!(d.len(), 0);
        assert_eq!(d.to_string(), "{}");
    }

    #[test]
    fn test_builder_and_lookup() {
        let d = ShapeDescriptor::new()
            .field("a", ShapeType::Int)
            .optional_field("b", ShapeType::Text);

        assert_eq!(d.len(), 2);
        assert!(d.contains("a"));
        assert!(d.contains("b"));
        assert!(!d.contains("c"));

        let a = d.get("a").unwrap();
        assert_eq!(a.ty, ShapeType::Int);
        assert!(!a.optional);

        let b = d.get("b").unwrap();
        assert!(b.optional);
    }

    #[test]
    fn test_insert_replaces_in_place() {
        let mut d = ShapeDescriptor::new();
        d.insert(FieldDef::new("a", ShapeType::Int));
        d.insert(FieldDef::new("b", ShapeType::Text));
        d.insert(FieldDef::optional("a", ShapeType::Bool));

        assert_eq!(d.len(), 2);
        // "a" keeps its original position
        let names: Vec<&str> = d.names().collect();
        assert_eq!(names, vec!["a", "b"]);
        let a = d.get("a").unwrap();
        assert_eq!(a.ty, ShapeType::Bool);
        assert!(a.optional);
    }

    #[test]
    fn test_insertion_order_preserved() {
        let d = ShapeDescriptor::new()
            .field("z", ShapeType::Int)
            .field("a", ShapeType::Int)
            .field("m", ShapeType::Int);
        let names: Vec<&str> = d.names().collect();
        assert_eq!(names, vec!["z", "a", "m"]);
    }

    #[test]
    fn test_equality_is_order_insensitive() {
        let d1 = ShapeDescriptor::new()
            .field("a", ShapeType::Int)
            .field("b", ShapeType::Text);
        let d2 = ShapeDescriptor::new()
            .field("b", ShapeType::Text)
            .field("a", ShapeType::Int);
        assert_eq!(d1, d2);
    }

    #[test]
    fn test_inequality_on_optionality() {
        let d1 = ShapeDescriptor::new().field("a", ShapeType::Int);
        let d2 = ShapeDescriptor::new().optional_field("a", ShapeType::Int);
        assert_ne!(d1, d2);
    }

    #[test]
    fn test_inequality_on_extra_field() {
        let d1 = ShapeDescriptor::new().field("a", ShapeType::Int);
        let d2 = ShapeDescriptor::new()
            .field("a", ShapeType::Int)
            .field("b", ShapeType::Int);
        assert_ne!(d1, d2);
    }

    #[test]
    fn test_from_iterator_dedups_by_name() {
        let d = ShapeDescriptor::from_iter([
            FieldDef::new("a", ShapeType::Int),
            FieldDef::new("a", ShapeType::Text),
        ]);
        assert_eq!(d.len(), 1);
        assert_eq!(d.get("a").unwrap().ty, ShapeType::Text);
    }

    #[test]
    fn test_display() {
        let d = ShapeDescriptor::new()
            .field("id", ShapeType::Int)
            .optional_field("tag", ShapeType::Text);
        assert_eq!(d.to_string(), "{id: int, tag?: string}");
    }

    #[test]
    fn test_serde_roundtrip() {
        let d = ShapeDescriptor::new()
            .field("a", ShapeType::list(ShapeType::Int))
            .optional_field("b", ShapeType::maybe(ShapeType::Text));
        let json = serde_json::to_string(&d).unwrap();
        let back: ShapeDescriptor = serde_json::from_str(&json).unwrap();
        assert_eq!(d, back);
    }

    mod props {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn insert_keeps_names_unique(names in prop::collection::vec("[a-d]", 0..8)) {
                let mut d = ShapeDescriptor::new();
                for n in &names {
                    d.insert(FieldDef::new(n.clone(), ShapeType::Int));
                }
                let mut unique: Vec<&str> = d.names().collect();
                unique.sort_unstable();
                unique.dedup();
                prop_assert_eq!(unique.len(), d.len());
            }

            #[test]
            fn get_returns_last_inserted(names in prop::collection::vec("[a-b]", 1..6)) {
                let mut d = ShapeDescriptor::new();
                for (i, n) in names.iter().enumerate() {
                    d.insert(FieldDef::new(n.clone(), ShapeType::Literal(i.to_string())));
                }
                for n in &names {
                    let last = names.iter().rposition(|x| x == n).unwrap();
                    prop_assert_eq!(
                        &d.get(n).unwrap().ty,
                        &ShapeType::Literal(last.to_string())
                    );
                }
            }
        }
    }

    #[test]
    fn test_iteration() {
        let d = ShapeDescriptor::new()
            .field("a", ShapeType::Int)
            .field("b", ShapeType::Text);
        let tys: Vec<&ShapeType> = d.iter().map(|f| &f.ty).collect();
        assert_eq!(tys, vec![&ShapeType::Int, &ShapeType::Text]);

        let owned: Vec<FieldDef> = d.clone().into_iter().collect();
        assert_eq!(owned.len(), 2);

        let borrowed: Vec<&FieldDef> = (&d).into_iter().collect();
        assert_eq!(borrowed.len(), 2);
    }
}
