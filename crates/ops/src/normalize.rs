//! Shape normalization
//!
//! Chained operators leave intersection markers behind (the guard's
//! disjoint join, union unification). `normalize` forces those residues
//! into plain object shapes so downstream display and equality see one
//! flat descriptor.
//!
//! Two value-type categories are exempt and pass through untouched:
//! sequences and date/time values. Decomposing either field-by-field would
//! wrongly treat its internal structure as object fields.

use reshape_core::{FieldDef, ShapeDescriptor, ShapeType};

/// Normalize a value type
///
/// - `List` and `DateTime` pass through unchanged
/// - `Object` is rebuilt field by field, order preserved
/// - `Intersection` of object shapes is flattened into one merged shape
/// - `Union` normalizes each branch independently
/// - Everything else is identity
pub fn normalize(ty: ShapeType) -> ShapeType {
    match ty {
        passthrough @ (ShapeType::List(_) | ShapeType::DateTime) => passthrough,
        ShapeType::Object(desc) => ShapeType::Object(desc.into_iter().collect()),
        ShapeType::Union(alts) => ShapeType::union(alts.into_iter().map(normalize)),
        ShapeType::Intersection(ops) => flatten_intersection(ops),
        other => other,
    }
}

// An intersection of object shapes becomes one object: every operand
// contributes its fields; a name declared by several operands keeps the
// common type, or the intersection of the differing types. The field is
// optional only if every declaring operand allows absence. Non-object
// operands block flattening and the intersection is kept, normalized.
fn flatten_intersection(ops: Vec<ShapeType>) -> ShapeType {
    let normalized: Vec<ShapeType> = ops.into_iter().map(normalize).collect();
    if !normalized.iter().all(ShapeType::is_object) {
        return ShapeType::intersection(normalized);
    }

    let mut out = ShapeDescriptor::new();
    for op in normalized {
        let ShapeType::Object(desc) = op else {
            continue;
        };
        for field in desc.into_iter() {
            let combined = match out.get(&field.name) {
                None => field,
                Some(existing) => {
                    let ty = if existing.ty == field.ty {
                        field.ty
                    } else {
                        ShapeType::intersection([existing.ty.clone(), field.ty])
                    };
                    FieldDef {
                        name: field.name,
                        ty,
                        optional: existing.optional && field.optional,
                    }
                }
            };
            out.insert(combined);
        }
    }
    ShapeType::Object(out)
}
