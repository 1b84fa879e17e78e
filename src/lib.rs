//! Reshape - schema-shape transformation algebra for RPC frameworks
//!
//! Reshape derives new object shapes from existing ones so a router or
//! procedure builder never has to restate them: merging context shapes
//! through middleware, guarding user procedures against built-in names,
//! unwrapping deferred and callable value types, and unifying unions of
//! alternative shapes into one.
//!
//! # Quick Start
//!
//! ```
//! use reshape::{merge, ShapeDescriptor, ShapeType};
//!
//! let base = ShapeDescriptor::new()
//!     .field("user", ShapeType::Text)
//!     .optional_field("session", ShapeType::Int);
//!
//! let patch = ShapeDescriptor::new().field("session", ShapeType::Text);
//!
//! let ctx = merge(&base, &patch);
//! assert_eq!(ctx.get("session").unwrap().ty, ShapeType::Text);
//! // the base side knew the field may be unset; the overwrite keeps that
//! assert!(ctx.get("session").unwrap().optional);
//! ```
//!
//! # Architecture
//!
//! The data model (`ShapeDescriptor`, `ShapeType`, `CollisionError`) lives
//! in `reshape-core`; the operators live in `reshape-ops`. Every operator
//! is a pure, terminating function returning a new descriptor — there is
//! no shared state and no runtime behavior beyond the functions themselves.

// Re-export the public API from the member crates
pub use reshape_core::*;
pub use reshape_ops::*;
