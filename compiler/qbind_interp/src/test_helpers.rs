//! Builders for parsed queries and values in unit tests.

use qbind_ir::{Location, ParamKey, ParamOccurrence, QueryAst, Selection};
use serde_json::Value;

use crate::ParamValues;

/// Build a `QueryAst` by locating each `:name` in `text`, in order.
///
/// Each occurrence's location covers exactly the `:name` token.
pub(crate) fn query(text: &str, params: &[(&str, bool, Selection)]) -> QueryAst {
    let mut cursor = 0usize;
    let mut occurrences = Vec::with_capacity(params.len());
    for (name, required, selection) in params {
        let needle = format!(":{name}");
        let start = loop {
            let Some(found) = text[cursor..].find(&needle) else {
                panic!("`{needle}` not found in {text:?} after byte {cursor}");
            };
            let start = cursor + found;
            let end = start + needle.len();
            let at_boundary = text[end..]
                .chars()
                .next()
                .map_or(true, |c| !(c.is_alphanumeric() || c == '_'));
            cursor = end;
            if at_boundary {
                break start;
            }
        };
        let a = u32::try_from(start).unwrap_or_else(|_| panic!("offset overflow"));
        let b = u32::try_from(cursor - 1).unwrap_or_else(|_| panic!("offset overflow"));
        occurrences.push(ParamOccurrence::new(
            *name,
            *required,
            selection.clone(),
            Location::new(a, b),
        ));
    }
    QueryAst::new(text, occurrences)
}

pub(crate) fn keys(fields: &[(&str, bool)]) -> Vec<ParamKey> {
    fields.iter()
        .map(|(name, required)| ParamKey::new(*name, *required))
        .collect()
}

pub(crate) fn values(json: Value) -> ParamValues {
    match ParamValues::from_json(json) {
        Ok(v) => v,
        Err(e) => panic!("test values must be an object: {e}"),
    }
}
