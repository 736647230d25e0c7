//! Object (pick) parameters: one slot per distinct sub-field.

use qbind_ir::{Binding, DictField, ParamKey, ParamOccurrence, ParameterShape, SlotDict};
use serde_json::Value;

use super::{PassCx, Resolved};
use crate::placeholder::write_group;
use crate::values::record_field;
use crate::{InterpError, InterpResult};

/// Resolve an object occurrence against the name's slot dict so far.
///
/// The replacement lists this occurrence's keys in declared order, which may
/// differ from the dict's first-seen order.
pub(crate) fn resolve(
    cx: &mut PassCx<'_>,
    occ: &ParamOccurrence,
    keys: &[ParamKey],
    mut dict: SlotDict,
) -> InterpResult<Resolved> {
    let record = match cx.values().and_then(|values| values.get(&occ.name)) {
        Some(record) if !record.is_object() => {
            return Err(InterpError::ShapeMismatch {
                name: occ.name.clone(),
                expected: "an object",
            })
        }
        record => record,
    };

    let mut bindings = Vec::new();
    let sink = cx.values().map(|_| &mut bindings);
    let indices = assign_keys(cx, keys, &mut dict, record, sink);

    let mut replacement = String::new();
    write_group(cx.syntax(), &indices, &mut replacement);

    Ok(Resolved {
        replacement,
        bindings,
        shape: ParameterShape::Dict {
            name: occ.name.clone(),
            dict,
        },
    })
}

/// Reuse or allocate one slot per key, returning the indices in key order.
///
/// A reused key ORs in this occurrence's `required` flag. When `sink` is
/// given, each newly allocated slot binds its field of `record`.
pub(super) fn assign_keys(
    cx: &mut PassCx<'_>,
    keys: &[ParamKey],
    dict: &mut SlotDict,
    record: Option<&Value>,
    mut sink: Option<&mut Vec<Binding>>,
) -> Vec<u32> {
    keys.iter()
        .map(|key| {
            if let Some(field) = dict.get_mut(&key.name) {
                field.required |= key.required;
                return field.assigned_index;
            }

            let index = cx.next_index();
            dict.push(DictField {
                name: key.name.clone(),
                assigned_index: index,
                required: key.required,
            });
            if let Some(bindings) = sink.as_deref_mut() {
                bindings.push(cx.bind(index, record.and_then(|r| record_field(r, &key.name))));
            }
            index
        })
        .collect()
}
