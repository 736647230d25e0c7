//! Bindings and the result of an interpolation pass.

use crate::ParameterShape;

/// A typed value for one positional slot.
///
/// Serializes as a single-key object (`{"longValue": 1}`), the parameter
/// format of Data-API style execution clients.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum TypedValue {
    StringValue(String),
    LongValue(i64),
    DoubleValue(f64),
    BooleanValue(bool),
    /// The parameter was optional and not supplied.
    IsNull(bool),
}

/// A concrete value bound to one positional slot.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Binding {
    /// Slot identifier, e.g. `param1`.
    pub name: String,
    pub value: TypedValue,
}

impl Binding {
    pub fn new(name: impl Into<String>, value: TypedValue) -> Self {
        Binding {
            name: name.into(),
            value,
        }
    }
}

/// Output of one interpolation pass.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InterpolatedQuery {
    /// Query text with every occurrence replaced by positional placeholders.
    pub query: String,
    /// One shape per distinct parameter name, in first-seen order.
    ///
    /// Empty for value-bearing passes, whose bindings supersede it.
    pub mapping: Vec<ParameterShape>,
    pub bindings: Vec<Binding>,
}
