//! Value types for shape fields
//!
//! This module defines:
//! - ShapeType: Unified enum describing the value type of a field
//!
//! ## Type Equality
//!
//! Union and intersection operands form a set: operand order and duplicates
//! are not significant for equality.
//! `Union([Int, Text]) == Union([Text, Int])`.
//!
//! ## Optionality convention
//!
//! `Undefined` is the "absent" sentinel. A type that admits `Undefined`
//! (directly or through a union branch) marks its field optional. `Null` is
//! an ordinary value and never contributes optionality.

use crate::descriptor::ShapeDescriptor;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Value type of a single shape field
///
/// A `ShapeType` is an owned tree. Composite variants box their children,
/// so a descriptor can never contain itself: recursive operators over this
/// enum terminate by construction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum ShapeType {
    /// The "absent" sentinel; a field admitting it is optional
    Undefined,
    /// Explicit null value (never implies optionality)
    Null,
    /// Boolean scalar
    Bool,
    /// Integer scalar
    Int,
    /// Floating point scalar
    Float,
    /// UTF-8 string scalar
    Text,
    /// A single string-literal type (e.g. a fixed message)
    Literal(String),
    /// Date/time value; the normalizer passes it through unchanged
    DateTime,
    /// Ordered sequence of one element type; normalizer pass-through
    List(Box<ShapeType>),
    /// Composite object shape
    Object(ShapeDescriptor),
    /// Open string-keyed map: any field name maps to the element type
    Open(Box<ShapeType>),
    /// Deferred (future/promise-like) wrapper around a resolved type
    Deferred(Box<ShapeType>),
    /// Callable producing the boxed result type
    Callable(Box<ShapeType>),
    /// One-of alternatives
    Union(Vec<ShapeType>),
    /// All-of combination, produced by intersecting shapes
    Intersection(Vec<ShapeType>),
}

// Operands of a union or intersection compare as a set
fn same_operand_set(a: &[ShapeType], b: &[ShapeType]) -> bool {
    a.iter().all(|x| b.contains(x)) && b.iter().all(|x| a.contains(x))
}

impl PartialEq for ShapeType {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (ShapeType::Undefined, ShapeType::Undefined) => true,
            (ShapeType::Null, ShapeType::Null) => true,
            (ShapeType::Bool, ShapeType::Bool) => true,
            (ShapeType::Int, ShapeType::Int) => true,
            (ShapeType::Float, ShapeType::Float) => true,
            (ShapeType::Text, ShapeType::Text) => true,
            (ShapeType::Literal(a), ShapeType::Literal(b)) => a == b,
            (ShapeType::DateTime, ShapeType::DateTime) => true,
            (ShapeType::List(a), ShapeType::List(b)) => a == b,
            (ShapeType::Object(a), ShapeType::Object(b)) => a == b,
            (ShapeType::Open(a), ShapeType::Open(b)) => a == b,
            (ShapeType::Deferred(a), ShapeType::Deferred(b)) => a == b,
            (ShapeType::Callable(a), ShapeType::Callable(b)) => a == b,
            (ShapeType::Union(a), ShapeType::Union(b)) => same_operand_set(a, b),
            (ShapeType::Intersection(a), ShapeType::Intersection(b)) => same_operand_set(a, b),
            // Different variants are never equal
            _ => false,
        }
    }
}

impl Eq for ShapeType {}

impl ShapeType {
    /// Get the variant name as a string
    pub fn type_name(&self) -> &'static str {
        match self {
            ShapeType::Undefined => "Undefined",
            ShapeType::Null => "Null",
            ShapeType::Bool => "Bool",
            ShapeType::Int => "Int",
            ShapeType::Float => "Float",
            ShapeType::Text => "Text",
            ShapeType::Literal(_) => "Literal",
            ShapeType::DateTime => "DateTime",
            ShapeType::List(_) => "List",
            ShapeType::Object(_) => "Object",
            ShapeType::Open(_) => "Open",
            ShapeType::Deferred(_) => "Deferred",
            ShapeType::Callable(_) => "Callable",
            ShapeType::Union(_) => "Union",
            ShapeType::Intersection(_) => "Intersection",
        }
    }

    /// Check if this is the absent sentinel
    pub fn is_undefined(&self) -> bool {
        matches!(self, ShapeType::Undefined)
    }

    /// Check if this is a composite object shape
    pub fn is_object(&self) -> bool {
        matches!(self, ShapeType::Object(_))
    }

    /// Check if this is a sequence type
    pub fn is_list(&self) -> bool {
        matches!(self, ShapeType::List(_))
    }

    /// Check if this is an open string-keyed map
    pub fn is_open(&self) -> bool {
        matches!(self, ShapeType::Open(_))
    }

    /// Check if this is a deferred wrapper
    pub fn is_deferred(&self) -> bool {
        matches!(self, ShapeType::Deferred(_))
    }

    /// Check if this is a callable
    pub fn is_callable(&self) -> bool {
        matches!(self, ShapeType::Callable(_))
    }

    /// Check if this is a union of alternatives
    pub fn is_union(&self) -> bool {
        matches!(self, ShapeType::Union(_))
    }

    /// Check if this is an intersection
    pub fn is_intersection(&self) -> bool {
        matches!(self, ShapeType::Intersection(_))
    }

    /// Get the descriptor if this is an Object shape
    pub fn as_object(&self) -> Option<&ShapeDescriptor> {
        match self {
            ShapeType::Object(d) => Some(d),
            _ => None,
        }
    }

    /// Get the union alternatives if this is a Union
    pub fn as_union(&self) -> Option<&[ShapeType]> {
        match self {
            ShapeType::Union(alts) => Some(alts),
            _ => None,
        }
    }

    // ========================================================================
    // Constructors for composite types
    // ========================================================================

    /// Sequence of `element`
    pub fn list(element: ShapeType) -> Self {
        ShapeType::List(Box::new(element))
    }

    /// Open string-keyed map with values of `element`
    pub fn open(element: ShapeType) -> Self {
        ShapeType::Open(Box::new(element))
    }

    /// Deferred wrapper around `resolved`
    pub fn deferred(resolved: ShapeType) -> Self {
        ShapeType::Deferred(Box::new(resolved))
    }

    /// Callable producing `result`
    pub fn callable(result: ShapeType) -> Self {
        ShapeType::Callable(Box::new(result))
    }

    /// Union of the given alternatives
    ///
    /// Nested unions are flattened and duplicate operands dropped; a
    /// single-operand union collapses to the operand itself.
    pub fn union(operands: impl IntoIterator<Item = ShapeType>) -> Self {
        let mut flat: Vec<ShapeType> = Vec::new();
        for op in operands {
            match op {
                ShapeType::Union(inner) => {
                    for t in inner {
                        if !flat.contains(&t) {
                            flat.push(t);
                        }
                    }
                }
                t => {
                    if !flat.contains(&t) {
                        flat.push(t);
                    }
                }
            }
        }
        if flat.len() == 1 {
            flat.pop().unwrap_or(ShapeType::Undefined)
        } else {
            ShapeType::Union(flat)
        }
    }

    /// Intersection of the given operands
    ///
    /// Nested intersections are flattened and duplicate operands dropped; a
    /// single-operand intersection collapses to the operand itself.
    pub fn intersection(operands: impl IntoIterator<Item = ShapeType>) -> Self {
        let mut flat: Vec<ShapeType> = Vec::new();
        for op in operands {
            match op {
                ShapeType::Intersection(inner) => {
                    for t in inner {
                        if !flat.contains(&t) {
                            flat.push(t);
                        }
                    }
                }
                t => {
                    if !flat.contains(&t) {
                        flat.push(t);
                    }
                }
            }
        }
        if flat.len() == 1 {
            flat.pop().unwrap_or(ShapeType::Undefined)
        } else {
            ShapeType::Intersection(flat)
        }
    }

    /// `value | null | undefined`
    pub fn maybe(value: ShapeType) -> Self {
        ShapeType::union([value, ShapeType::Null, ShapeType::Undefined])
    }

    /// `value | Deferred<value>`
    pub fn maybe_deferred(value: ShapeType) -> Self {
        let wrapped = ShapeType::deferred(value.clone());
        ShapeType::union([value, wrapped])
    }

    /// Open map whose entries may be absent: `{[string]: value | undefined}`
    pub fn dict(value: ShapeType) -> Self {
        ShapeType::open(ShapeType::union([value, ShapeType::Undefined]))
    }

    /// Render as a serde_json value (for debugging and snapshots)
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or(serde_json::Value::Null)
    }
}

impl From<ShapeDescriptor> for ShapeType {
    fn from(d: ShapeDescriptor) -> Self {
        ShapeType::Object(d)
    }
}

impl fmt::Display for ShapeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShapeType::Undefined => write!(f, "undefined"),
            ShapeType::Null => write!(f, "null"),
            ShapeType::Bool => write!(f, "bool"),
            ShapeType::Int => write!(f, "int"),
            ShapeType::Float => write!(f, "float"),
            ShapeType::Text => write!(f, "string"),
            ShapeType::Literal(s) => write!(f, "\"{s}\""),
            ShapeType::DateTime => write!(f, "datetime"),
            ShapeType::List(t) => write!(f, "[{t}]"),
            ShapeType::Object(d) => write!(f, "{d}"),
            ShapeType::Open(t) => write!(f, "{{[string]: {t}}}"),
            ShapeType::Deferred(t) => write!(f, "Deferred<{t}>"),
            ShapeType::Callable(t) => write!(f, "() => {t}"),
            ShapeType::Union(ops) => {
                if ops.is_empty() {
                    return write!(f, "never");
                }
                for (i, t) in ops.iter().enumerate() {
                    if i != 0 {
                        write!(f, " | ")?;
                    }
                    write!(f, "{t}")?;
                }
                Ok(())
            }
            ShapeType::Intersection(ops) => {
                if ops.is_empty() {
                    return write!(f, "unknown");
                }
                for (i, t) in ops.iter().enumerate() {
                    if i != 0 {
                        write!(f, " & ")?;
                    }
                    write!(f, "{t}")?;
                }
                Ok(())
            }
        }
    }
}
