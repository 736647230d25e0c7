//! Error types for interpolation passes.
//!
//! Two categories share one enum:
//!
//! - **Contract violations**: the parsed query handed to the engine is
//!   malformed (overlapping or out-of-range locations, one name used with two
//!   shapes). These are defects in the upstream parser and abort the pass.
//! - **Caller errors**: the supplied values do not satisfy the query
//!   (required parameter missing, array where an object was expected).
//!
//! Unsupported value types are never errors; see [`crate::convert_value`].

use thiserror::Error;

/// Result of an interpolation operation.
pub type InterpResult<T> = Result<T, InterpError>;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum InterpError {
    // Contract violations
    #[error("interval {a}..={b} is out of bounds for query text of {len} bytes")]
    IntervalOutOfBounds { a: u32, b: u32, len: usize },

    #[error("interval {a}..={b} overlaps the previous interval ending at {prev_b}")]
    IntervalOverlap { a: u32, b: u32, prev_b: u32 },

    #[error("interval {a}..={b} does not fall on UTF-8 character boundaries")]
    IntervalNotCharBoundary { a: u32, b: u32 },

    #[error("parameter `{name}` is used as {found} but was first used as {expected}")]
    ConflictingShape {
        name: String,
        expected: &'static str,
        found: &'static str,
    },

    // Caller errors
    #[error("missing value for required parameter `{name}`")]
    MissingRequiredParameter { name: String },

    #[error("missing value for required field `{field}` of parameter `{param}`")]
    MissingRequiredField { param: String, field: String },

    #[error("parameter `{name}` expects {expected}")]
    ShapeMismatch { name: String, expected: &'static str },

    #[error("parameter values must be a JSON object keyed by parameter name")]
    ValuesNotObject,

    #[error("parameter `{name}` has an array shape and cannot be bound from a precomputed mapping")]
    TemplateNotBindable { name: String },
}

impl InterpError {
    /// Whether this error indicates a malformed parsed query rather than bad
    /// caller input.
    pub fn is_contract_violation(&self) -> bool {
        matches!(
            self,
            InterpError::IntervalOutOfBounds { .. }
                | InterpError::IntervalOverlap { .. }
                | InterpError::IntervalNotCharBoundary { .. }
                | InterpError::ConflictingShape { .. }
        )
    }
}
