//! Shape merge and the collision guard
//!
//! `merge` is the right-biased overwrite used to patch a procedure's
//! context shape through middleware. `guard` is the disjoint variant used
//! when joining user-defined procedures onto a router's built-in surface:
//! a shared field name is a hard diagnostic, not a silent overwrite.

use crate::optional::undefined_keys;
use reshape_core::{CollisionError, FieldDef, Result, ShapeDescriptor};

/// Merge two shapes, right-biased
///
/// Every field of `base` and `patch` appears in the result. Where both
/// declare a field, `patch`'s value type wins. A result field is optional
/// iff it is classified optional in `base` or in `patch` — overwriting a
/// value type does not erase the other side's knowledge that the field may
/// be unset.
///
/// Field order: `base` order first, then `patch`-only fields in `patch`
/// order.
pub fn merge(base: &ShapeDescriptor, patch: &ShapeDescriptor) -> ShapeDescriptor {
    let mut optional = undefined_keys(base);
    optional.extend(undefined_keys(patch));

    let mut out = ShapeDescriptor::new();
    for field in base.iter() {
        let ty = match patch.get(&field.name) {
            Some(winner) => winner.ty.clone(),
            None => field.ty.clone(),
        };
        out.insert(FieldDef {
            name: field.name.clone(),
            ty,
            optional: optional.contains(&field.name),
        });
    }
    for field in patch.iter() {
        if !base.contains(&field.name) {
            out.insert(FieldDef {
                name: field.name.clone(),
                ty: field.ty.clone(),
                optional: optional.contains(&field.name),
            });
        }
    }
    out
}

/// Join two shapes whose field names must not overlap
///
/// Disjoint inputs produce the structural intersection: both sides
/// contribute their fields unchanged. A shared field name produces a
/// [`CollisionError`] naming the first colliding field in `left` order;
/// the diagnostic is returned as data and surfaced wherever the caller
/// uses the result.
pub fn guard(left: &ShapeDescriptor, right: &ShapeDescriptor) -> Result<ShapeDescriptor> {
    for field in left.iter() {
        if right.contains(&field.name) {
            return Err(CollisionError::new(&field.name));
        }
    }

    let mut out = ShapeDescriptor::new();
    for field in left.iter().chain(right.iter()) {
        out.insert(field.clone());
    }
    Ok(out)
}
