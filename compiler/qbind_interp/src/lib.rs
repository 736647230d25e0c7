//! Named-to-positional SQL parameter interpolation.
//!
//! This crate rewrites a parsed query (`QueryAst`) so every named parameter
//! occurrence becomes a positional placeholder, and either binds runtime
//! values to the resulting slots or, with no values, describes the slot
//! layout as a reusable shape map.
//!
//! # Pipeline Position
//!
//! ```text
//! Parser → QueryAst → **Interpolate** → InterpolatedQuery → execution client
//! ```
//!
//! # What Happens During a Pass
//!
//! 1. **Validation** (`validate`): in bind mode, required parameters and
//!    sub-fields are checked against the values
//! 2. **Resolution** (`resolve`): each occurrence is dispatched to the
//!    resolver for its shape, which reuses or allocates slot indices
//!    - scalar: one slot per name
//!    - scalar array: one slot per element (one placeholder without values)
//!    - object: one slot per distinct sub-field
//!    - object array: one slot group per record (a template without values)
//! 3. **Splicing** (`splice`): all replacements are applied to the original
//!    text in one pass
//!
//! # Example
//!
//! ```text
//! select * from books where id in :ids      { "ids": [1, 2, 3] }
//!   → select * from books where id in (:param1, :param2, :param3)
//!     param1 = 1, param2 = 2, param3 = 3
//! ```
//!
//! # Tracing
//!
//! Enable with `RUST_LOG=qbind_interp=debug` (one event per pass) or
//! `RUST_LOG=qbind_interp=trace` (one event per occurrence).

mod convert;
mod error;
mod interpolate;
mod placeholder;
mod prepared;
mod resolve;
mod splice;
mod validate;
mod values;

#[cfg(test)]
mod test_helpers;

pub use convert::{convert_value, null_binding};
pub use error::{InterpError, InterpResult};
pub use interpolate::{interpolate, Interpolator};
pub use placeholder::{Dialect, PlaceholderSyntax};
pub use prepared::{bind_mapping, PreparedQuery};
pub use splice::{splice, Interval};
pub use validate::validate_required;
pub use values::ParamValues;

pub use qbind_ir::{
    Binding, DictField, InterpolatedQuery, Location, ParamKey, ParamOccurrence, ParameterShape,
    QueryAst, Selection, ShapeMap, SlotDict, TypedValue,
};
