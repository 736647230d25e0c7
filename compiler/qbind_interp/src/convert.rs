//! Runtime value to typed binding conversion.

use qbind_ir::{Binding, TypedValue};
use serde_json::{Number, Value};

/// Convert one runtime value into the binding for `slot`.
///
/// Total over all inputs: numbers, strings and booleans map to their typed
/// branch, everything else (null, arrays, objects) is bound as its compact
/// JSON encoding. Object keys encode in sorted order, so the encoding is
/// deterministic.
pub fn convert_value(value: &Value, slot: impl Into<String>) -> Binding {
    let typed = match value {
        Value::Number(n) => convert_number(n),
        Value::String(s) => TypedValue::StringValue(s.clone()),
        Value::Bool(b) => TypedValue::BooleanValue(*b),
        Value::Null | Value::Array(_) | Value::Object(_) => {
            TypedValue::StringValue(value.to_string())
        }
    };
    Binding::new(slot, typed)
}

/// Binding for a slot whose value was not supplied.
pub fn null_binding(slot: impl Into<String>) -> Binding {
    Binding::new(slot, TypedValue::IsNull(true))
}

#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    reason = "guarded by the fract and range checks"
)]
fn convert_number(n: &Number) -> TypedValue {
    if let Some(i) = n.as_i64() {
        return TypedValue::LongValue(i);
    }
    if n.is_u64() {
        // Beyond i64::MAX: keep every digit.
        return TypedValue::StringValue(n.to_string());
    }
    match n.as_f64() {
        Some(f) if f.fract() == 0.0 && f >= i64::MIN as f64 && f < i64::MAX as f64 => {
            TypedValue::LongValue(f as i64)
        }
        Some(f) => TypedValue::DoubleValue(f),
        None => TypedValue::StringValue(n.to_string()),
    }
}
