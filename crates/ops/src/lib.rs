//! Shape operators
//!
//! A closed set of independent, composable operators over
//! [`reshape_core::ShapeDescriptor`] and [`reshape_core::ShapeType`].
//! Each operator is a pure, terminating function from input descriptor(s)
//! to an output descriptor; callers pick and chain them as needed.
//!
//! - `optional`: optionality classification and deep-optional
//! - `merge`: right-biased merge and the collision guard
//! - `unwrap`: deferred-value and callable unwrapping
//! - `normalize`: intersection flattening and display normalization
//! - `filter`: field selection by type predicate
//! - `union`: key enumeration and unification over unions of shapes

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod filter;
pub mod merge;
pub mod normalize;
pub mod optional;
pub mod union;
pub mod unwrap;

// Re-export the operator surface at the crate root
pub use filter::{filter, filter_keys};
pub use merge::{guard, merge};
pub use normalize::normalize;
pub use optional::{admits_undefined, deep_optional, undefined_keys};
pub use union::{union_keys, unify, KeySet};
pub use unwrap::{infer_async_return, unwrap_async, unwrap_callable};
