//! Object-array (pick-spread) parameters.
//!
//! The two modes deliberately differ. A shape-only pass describes the record
//! template: one slot per distinct key, reused across occurrences like an
//! object parameter. A value-bearing pass describes the fully expanded set:
//! every (record, key) pair gets a fresh slot, with no reuse, since the
//! array length is only known now.

use qbind_ir::{ParamKey, ParamOccurrence, ParameterShape, SlotDict};
use serde_json::Value;

use super::object::assign_keys;
use super::{PassCx, Resolved};
use crate::placeholder::write_group;
use crate::values::record_field;
use crate::{InterpError, InterpResult};

pub(crate) fn resolve(
    cx: &mut PassCx<'_>,
    occ: &ParamOccurrence,
    keys: &[ParamKey],
    mut dict: SlotDict,
) -> InterpResult<Resolved> {
    let mut replacement = String::new();

    let Some(values) = cx.values() else {
        let indices = assign_keys(cx, keys, &mut dict, None, None);
        write_group(cx.syntax(), &indices, &mut replacement);
        return Ok(Resolved {
            replacement,
            bindings: Vec::new(),
            shape: ParameterShape::DictArray {
                name: occ.name.clone(),
                dict,
            },
        });
    };

    let mismatch = || InterpError::ShapeMismatch {
        name: occ.name.clone(),
        expected: "an array of objects",
    };
    let records: &[Value] = match values.get(&occ.name) {
        Some(Value::Array(items)) => items,
        Some(_) => return Err(mismatch()),
        None => &[],
    };

    let mut bindings = Vec::with_capacity(records.len() * keys.len());
    let mut indices = Vec::with_capacity(keys.len());
    for (i, record) in records.iter().enumerate() {
        if !record.is_object() {
            return Err(mismatch());
        }
        indices.clear();
        for key in keys {
            let index = cx.next_index();
            bindings.push(cx.bind(index, record_field(record, &key.name)));
            indices.push(index);
        }
        if i > 0 {
            replacement.push_str(", ");
        }
        write_group(cx.syntax(), &indices, &mut replacement);
    }
    if records.is_empty() {
        // Empty set.
        write_group(cx.syntax(), &[], &mut replacement);
    }

    Ok(Resolved {
        replacement,
        bindings,
        shape: ParameterShape::DictArray {
            name: occ.name.clone(),
            dict,
        },
    })
}
