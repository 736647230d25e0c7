//! Positional placeholder syntax.
//!
//! The engine never hard-codes how a slot is spelled in the rewritten query.
//! Every pass renders placeholders through a [`PlaceholderSyntax`], so one
//! shape map can target different execution backends.

use std::fmt::Write;

/// How positional slots are written into query text and named in bindings.
///
/// Slot indices start at 1.
pub trait PlaceholderSyntax {
    /// Append the placeholder for `index` to `out`.
    fn write_placeholder(&self, index: u32, out: &mut String);

    /// Identifier of the slot in a [`qbind_ir::Binding`].
    fn slot_name(&self, index: u32) -> String;

    /// Placeholder for `index` as an owned string.
    fn placeholder(&self, index: u32) -> String {
        let mut out = String::new();
        self.write_placeholder(index, &mut out);
        out
    }
}

/// Built-in placeholder styles.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Dialect {
    /// `:param1`, bound as `param1`.
    Colon { prefix: String },
    /// `$1` (PostgreSQL), bound as `1`.
    Dollar,
    /// `?1` (SQLite numbered), bound as `1`.
    QuestionNumbered,
    /// `@p1` (SQL Server), bound as `p1`.
    At { prefix: String },
}

impl Dialect {
    /// Default slot name prefix for the named dialects.
    pub const DEFAULT_PREFIX: &'static str = "param";

    pub fn colon() -> Self {
        Dialect::Colon {
            prefix: Self::DEFAULT_PREFIX.to_owned(),
        }
    }

    /// Parse a dialect name as accepted on the command line.
    ///
    /// `prefix` applies only to the named dialects (`colon`, `at`).
    pub fn from_name(name: &str, prefix: Option<&str>) -> Option<Self> {
        let prefix = prefix.unwrap_or(Self::DEFAULT_PREFIX).to_owned();
        match name {
            "colon" => Some(Dialect::Colon { prefix }),
            "dollar" => Some(Dialect::Dollar),
            "question" => Some(Dialect::QuestionNumbered),
            "at" => Some(Dialect::At { prefix }),
            _ => None,
        }
    }
}

impl Default for Dialect {
    fn default() -> Self {
        Dialect::colon()
    }
}

impl PlaceholderSyntax for Dialect {
    fn write_placeholder(&self, index: u32, out: &mut String) {
        // Writing to a String cannot fail.
        let _ = match self {
            Dialect::Colon { prefix } => write!(out, ":{prefix}{index}"),
            Dialect::Dollar => write!(out, "${index}"),
            Dialect::QuestionNumbered => write!(out, "?{index}"),
            Dialect::At { prefix } => write!(out, "@{prefix}{index}"),
        };
    }

    fn slot_name(&self, index: u32) -> String {
        match self {
            Dialect::Colon { prefix } | Dialect::At { prefix } => format!("{prefix}{index}"),
            Dialect::Dollar | Dialect::QuestionNumbered => index.to_string(),
        }
    }
}

/// Write `(p1, p2, ...)` for the given indices; `()` when empty.
pub(crate) fn write_group(syntax: &dyn PlaceholderSyntax, indices: &[u32], out: &mut String) {
    out.push('(');
    for (i, &index) in indices.iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        syntax.write_placeholder(index, out);
    }
    out.push(')');
}
