//! Scalar-array (spread) parameters: one slot per element.

use qbind_ir::{ParamOccurrence, ParameterShape};
use serde_json::Value;

use super::{PassCx, Resolved};
use crate::placeholder::write_group;
use crate::{InterpError, InterpResult};

/// Resolve a scalar-array occurrence.
///
/// With values, every element gets a fresh slot and a binding. Without
/// values the length is unknown, so a single placeholder slot stands in for
/// the whole array. A shape assigned earlier in the pass is reused verbatim,
/// whatever its length.
pub(crate) fn resolve(
    cx: &mut PassCx<'_>,
    occ: &ParamOccurrence,
    existing: Option<(&[u32], bool)>,
) -> InterpResult<Resolved> {
    let mut bindings = Vec::new();
    let (indices, required) = match existing {
        Some((indices, required)) => (indices.to_vec(), required || occ.required),
        None => {
            let indices = match cx.values() {
                Some(values) => {
                    let elements: &[Value] = match values.get(&occ.name) {
                        Some(Value::Array(items)) => items,
                        Some(_) => {
                            return Err(InterpError::ShapeMismatch {
                                name: occ.name.clone(),
                                expected: "an array",
                            })
                        }
                        None => &[],
                    };
                    elements
                        .iter()
                        .map(|element| {
                            let index = cx.next_index();
                            bindings.push(cx.bind(index, Some(element)));
                            index
                        })
                        .collect()
                }
                None => vec![cx.next_index()],
            };
            (indices, occ.required)
        }
    };

    let mut replacement = String::new();
    write_group(cx.syntax(), &indices, &mut replacement);

    Ok(Resolved {
        replacement,
        bindings,
        shape: ParameterShape::ScalarArray {
            name: occ.name.clone(),
            required,
            assigned_index: indices,
        },
    })
}
