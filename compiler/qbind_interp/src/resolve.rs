//! Shape resolvers: index assignment and binding generation per shape.
//!
//! Each resolver handles one [`Selection`](qbind_ir::Selection) variant. The
//! driver owns a [`PassCx`] for the duration of one pass and lends it to the
//! resolver for each occurrence; the resolver allocates indices from it and
//! hands back the replacement text, any new bindings, and the updated shape.
//!
//! Bindings are emitted once per distinct slot: a slot reused by a later
//! occurrence of the same name never binds again.

pub(crate) mod object;
pub(crate) mod object_array;
pub(crate) mod scalar;
pub(crate) mod scalar_array;

use qbind_ir::{Binding, ParameterShape};
use serde_json::Value;

use crate::{convert_value, null_binding, ParamValues, PlaceholderSyntax};

/// Mutable state of one interpolation pass.
pub(crate) struct PassCx<'a> {
    syntax: &'a dyn PlaceholderSyntax,
    values: Option<&'a ParamValues>,
    /// Last allocated index; 0 before the first allocation.
    counter: u32,
}

impl<'a> PassCx<'a> {
    pub(crate) fn new(syntax: &'a dyn PlaceholderSyntax, values: Option<&'a ParamValues>) -> Self {
        PassCx {
            syntax,
            values,
            counter: 0,
        }
    }

    /// Allocate the next positional index.
    pub(crate) fn next_index(&mut self) -> u32 {
        self.counter += 1;
        self.counter
    }

    /// Number of indices allocated so far.
    pub(crate) fn allocated(&self) -> u32 {
        self.counter
    }

    /// Runtime values, when this is a value-bearing pass.
    pub(crate) fn values(&self) -> Option<&'a ParamValues> {
        self.values
    }

    pub(crate) fn syntax(&self) -> &'a dyn PlaceholderSyntax {
        self.syntax
    }

    pub(crate) fn bind(&self, index: u32, value: Option<&Value>) -> Binding {
        bind_slot(self.syntax, index, value)
    }
}

/// Binding for slot `index`; absent and `null` values bind as null.
pub(crate) fn bind_slot(
    syntax: &dyn PlaceholderSyntax,
    index: u32,
    value: Option<&Value>,
) -> Binding {
    let slot = syntax.slot_name(index);
    match value {
        Some(v) if !v.is_null() => convert_value(v, slot),
        _ => null_binding(slot),
    }
}

/// What a resolver produces for one occurrence.
#[derive(Debug)]
pub(crate) struct Resolved {
    pub replacement: String,
    pub bindings: Vec<Binding>,
    pub shape: ParameterShape,
}
