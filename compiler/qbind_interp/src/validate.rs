//! Required-value checks run before a value-bearing pass.
//!
//! A parameter or sub-field declared required must have a non-null value.
//! Structural mismatches (an object where an array was expected) are left to
//! the resolvers, which know the expected shape at the point of use.

use qbind_ir::{ParamKey, ParamOccurrence, Selection};
use serde_json::Value;

use crate::values::record_field;
use crate::{InterpError, InterpResult, ParamValues};

/// Check every occurrence's required parameters and sub-fields against
/// `values`. Reports the first violation in source order.
pub fn validate_required(params: &[ParamOccurrence], values: &ParamValues) -> InterpResult<()> {
    for occ in params {
        let value = values.get(&occ.name);
        if occ.required && value.is_none() {
            return Err(InterpError::MissingRequiredParameter {
                name: occ.name.clone(),
            });
        }

        match &occ.selection {
            Selection::Scalar | Selection::ScalarArray => {}
            Selection::Object { keys } => match value {
                Some(record) if record.is_object() => check_record(&occ.name, keys, record)?,
                Some(_) => {}
                None => {
                    if let Some(key) = keys.iter().find(|k| k.required) {
                        return Err(missing_field(&occ.name, key));
                    }
                }
            },
            Selection::ObjectArray { keys } => {
                if let Some(Value::Array(records)) = value {
                    for record in records.iter().filter(|r| r.is_object()) {
                        check_record(&occ.name, keys, record)?;
                    }
                }
            }
        }
    }
    Ok(())
}

fn check_record(param: &str, keys: &[ParamKey], record: &Value) -> InterpResult<()> {
    match keys
        .iter()
        .find(|k| k.required && record_field(record, &k.name).is_none())
    {
        Some(key) => Err(missing_field(param, key)),
        None => Ok(()),
    }
}

fn missing_field(param: &str, key: &ParamKey) -> InterpError {
    InterpError::MissingRequiredField {
        param: param.to_owned(),
        field: key.name.clone(),
    }
}
