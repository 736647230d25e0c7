//! Scalar parameters: one slot per name.

use qbind_ir::{ParamOccurrence, ParameterShape};

use super::{PassCx, Resolved};

/// Resolve a scalar occurrence.
///
/// `existing` is the `(index, required)` of the name's shape from an earlier
/// occurrence in this pass. A reused slot keeps its index and never rebinds;
/// the shape is required if any occurrence is.
pub(crate) fn resolve(
    cx: &mut PassCx<'_>,
    occ: &ParamOccurrence,
    existing: Option<(u32, bool)>,
) -> Resolved {
    let mut bindings = Vec::new();
    let (index, required) = match existing {
        Some((index, required)) => (index, required || occ.required),
        None => {
            let index = cx.next_index();
            if let Some(values) = cx.values() {
                bindings.push(cx.bind(index, values.get(&occ.name)));
            }
            (index, occ.required)
        }
    };

    Resolved {
        replacement: cx.syntax().placeholder(index),
        bindings,
        shape: ParameterShape::Scalar {
            name: occ.name.clone(),
            required,
            assigned_index: index,
        },
    }
}
