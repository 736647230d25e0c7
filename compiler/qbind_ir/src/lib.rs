//! qbind IR - Parsed Query and Parameter Shape Types
//!
//! This crate contains the data model shared by the interpolation engine and
//! its front ends:
//! - Locations of parameter occurrences in the query text
//! - Parameter occurrences and their selections (the upstream parser's output)
//! - Parameter shapes and the shape map (how names map to positional slots)
//! - Bindings and the interpolated query (the engine's output)
//!
//! # Serialization
//!
//! With the `serde` feature enabled, every type round-trips through JSON in
//! the format the upstream parser emits and downstream clients consume.
//!
//! # Design Philosophy
//!
//! - **Plain Data**: No type here carries behavior beyond lookups; the engine
//!   lives in `qbind_interp`.
//! - **First-Seen Order**: The shape map iterates in the order names were
//!   first seen, so output is deterministic.

mod binding;
mod location;
mod param;
mod shape;

pub use binding::{Binding, InterpolatedQuery, TypedValue};
pub use location::Location;
pub use param::{ParamKey, ParamOccurrence, QueryAst, Selection};
pub use shape::{DictField, ParameterShape, ShapeMap, SlotDict};
