//! Runtime parameter values supplied at bind time.

use rustc_hash::FxHashMap;
use serde_json::Value;

use crate::{InterpError, InterpResult};

/// Parameter name to runtime value.
///
/// Values are plain JSON: a scalar, an array of scalars, an object (record),
/// or an array of objects.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ParamValues {
    values: FxHashMap<String, Value>,
}

impl ParamValues {
    pub fn new() -> Self {
        ParamValues::default()
    }

    /// Build from a JSON object keyed by parameter name.
    pub fn from_json(value: Value) -> InterpResult<Self> {
        match value {
            Value::Object(map) => Ok(map.into_iter().collect()),
            _ => Err(InterpError::ValuesNotObject),
        }
    }

    pub fn insert(&mut self, name: impl Into<String>, value: Value) {
        self.values.insert(name.into(), value);
    }

    /// Value for `name`. An explicit JSON `null` is reported as absent.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.values.get(name).filter(|v| !v.is_null())
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, Value)> for ParamValues {
    fn from_iter<I: IntoIterator<Item = (K, Value)>>(iter: I) -> Self {
        ParamValues {
            values: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

/// Field `field` of a record value, with JSON `null` reported as absent.
pub(crate) fn record_field<'v>(record: &'v Value, field: &str) -> Option<&'v Value> {
    record.get(field).filter(|v| !v.is_null())
}
