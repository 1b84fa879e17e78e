//! Core data model for the reshape schema algebra
//!
//! This crate defines the foundational types used throughout the system:
//! - ShapeType: Unified enum for every value type a field can carry
//! - ShapeDescriptor: Ordered field-name to (type, optionality) mapping
//! - FieldDef: A single named field within a descriptor
//! - CollisionError: The diagnostic carried when two shapes share a field name
//!
//! Descriptors are immutable in spirit: every operator in `reshape-ops`
//! returns a new descriptor rather than mutating its input.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod descriptor;
pub mod error;
pub mod shape;

// Re-export commonly used types at the crate root
pub use descriptor::{FieldDef, ShapeDescriptor};
pub use error::{CollisionError, Result};
pub use shape::ShapeType;
