//! Parameter occurrences as produced by the upstream query parser.

use crate::Location;

/// A declared sub-field of an object or object-array parameter.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ParamKey {
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub required: bool,
}

impl ParamKey {
    pub fn new(name: impl Into<String>, required: bool) -> Self {
        ParamKey {
            name: name.into(),
            required,
        }
    }
}

/// Structural kind of one parameter occurrence.
///
/// The set is closed: the interpolation driver matches on it exhaustively.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "type", rename_all = "snake_case"))]
pub enum Selection {
    /// `:id`
    Scalar,
    /// `:ids` expanded to `(p1, p2, ...)`
    ScalarArray,
    /// `:user(name, email)` expanded to `(p_name, p_email)`
    Object { keys: Vec<ParamKey> },
    /// `:users((name, email)...)` expanded to one group per record
    ObjectArray { keys: Vec<ParamKey> },
}

impl Selection {
    /// Short human-readable name, used in diagnostics.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Selection::Scalar => "scalar",
            Selection::ScalarArray => "scalar array",
            Selection::Object { .. } => "object",
            Selection::ObjectArray { .. } => "object array",
        }
    }
}

/// One mention of a named parameter in the query text.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ParamOccurrence {
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub required: bool,
    pub selection: Selection,
    pub location: Location,
}

impl ParamOccurrence {
    pub fn new(
        name: impl Into<String>,
        required: bool,
        selection: Selection,
        location: Location,
    ) -> Self {
        ParamOccurrence {
            name: name.into(),
            required,
            selection,
            location,
        }
    }
}

/// A parsed query: its text plus every parameter occurrence in it.
///
/// Occurrences are listed in source order and their locations never overlap.
#[derive(Clone, Debug, Default, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct QueryAst {
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub name: Option<String>,
    pub text: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub params: Vec<ParamOccurrence>,
}

impl QueryAst {
    pub fn new(text: impl Into<String>, params: Vec<ParamOccurrence>) -> Self {
        QueryAst {
            name: None,
            text: text.into(),
            params,
        }
    }
}
