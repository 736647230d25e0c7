//! The interpolation driver.
//!
//! One pass walks the parsed query's occurrences in source order, dispatches
//! each to the resolver for its selection, threads the index counter and
//! shape map through a [`PassCx`], and splices every replacement into the
//! text at the end.
//!
//! Shape-only passes ([`Interpolator::compute_shape`]) and value-bearing
//! passes ([`Interpolator::bind`]) share this single core, so both modes
//! agree on index assignment for every shape except the object array, whose
//! bound form is expanded per record.

use qbind_ir::{
    InterpolatedQuery, ParamOccurrence, ParameterShape, QueryAst, Selection, ShapeMap, SlotDict,
};

use crate::resolve::{object, object_array, scalar, scalar_array, PassCx, Resolved};
use crate::splice::{splice, Interval};
use crate::validate::validate_required;
use crate::{Dialect, InterpError, InterpResult, ParamValues, PlaceholderSyntax};

/// Runs interpolation passes with a fixed placeholder syntax.
#[derive(Clone, Debug, Default)]
pub struct Interpolator<S = Dialect> {
    syntax: S,
}

impl<S: PlaceholderSyntax> Interpolator<S> {
    pub fn new(syntax: S) -> Self {
        Interpolator { syntax }
    }

    pub fn syntax(&self) -> &S {
        &self.syntax
    }

    /// Rewrite `query` without values, returning its shape map.
    pub fn compute_shape(&self, query: &QueryAst) -> InterpResult<InterpolatedQuery> {
        self.run(query, None)
    }

    /// Rewrite `query` and bind `values` to every slot.
    ///
    /// Required parameters and sub-fields are checked before any rewriting.
    pub fn bind(&self, query: &QueryAst, values: &ParamValues) -> InterpResult<InterpolatedQuery> {
        validate_required(&query.params, values)?;
        self.run(query, Some(values))
    }

    #[tracing::instrument(level = "debug", skip_all, fields(
        query = query.name.as_deref().unwrap_or("<anonymous>"),
        occurrences = query.params.len(),
        bind = values.is_some(),
    ))]
    fn run(&self, query: &QueryAst, values: Option<&ParamValues>) -> InterpResult<InterpolatedQuery> {
        let mut cx = PassCx::new(&self.syntax, values);
        let mut shapes = ShapeMap::new();
        let mut bindings = Vec::new();
        let mut intervals = Vec::with_capacity(query.params.len());

        for occ in &query.params {
            let Resolved {
                replacement,
                bindings: new_bindings,
                shape,
            } = dispatch(&mut cx, occ, shapes.get(&occ.name))?;

            tracing::trace!(
                name = %occ.name,
                kind = occ.selection.kind_name(),
                location = ?occ.location,
                %replacement,
                "resolved occurrence"
            );

            bindings.extend(new_bindings);
            intervals.push(Interval::new(occ.location.a, occ.location.b, replacement));
            shapes.insert(shape);
        }

        let text = splice(&query.text, intervals)?;

        tracing::debug!(
            slots = cx.allocated(),
            parameters = shapes.len(),
            bindings = bindings.len(),
            "interpolation pass complete"
        );

        Ok(InterpolatedQuery {
            query: text,
            mapping: if values.is_none() {
                shapes.into_shapes()
            } else {
                Vec::new()
            },
            bindings,
        })
    }
}

/// Route one occurrence to the resolver for its selection.
///
/// A name first seen with one selection and later with another is a parser
/// defect; the pass aborts with `ConflictingShape`.
fn dispatch(
    cx: &mut PassCx<'_>,
    occ: &ParamOccurrence,
    existing: Option<&ParameterShape>,
) -> InterpResult<Resolved> {
    let conflict = |found: &ParameterShape| InterpError::ConflictingShape {
        name: occ.name.clone(),
        expected: found.kind_name(),
        found: occ.selection.kind_name(),
    };

    match &occ.selection {
        Selection::Scalar => {
            let existing = match existing {
                None => None,
                Some(ParameterShape::Scalar {
                    assigned_index,
                    required,
                    ..
                }) => Some((*assigned_index, *required)),
                Some(other) => return Err(conflict(other)),
            };
            Ok(scalar::resolve(cx, occ, existing))
        }
        Selection::ScalarArray => {
            let existing = match existing {
                None => None,
                Some(ParameterShape::ScalarArray {
                    assigned_index,
                    required,
                    ..
                }) => Some((assigned_index.as_slice(), *required)),
                Some(other) => return Err(conflict(other)),
            };
            scalar_array::resolve(cx, occ, existing)
        }
        Selection::Object { keys } => {
            let dict = match existing {
                None => SlotDict::new(),
                Some(ParameterShape::Dict { dict, .. }) => dict.clone(),
                Some(other) => return Err(conflict(other)),
            };
            object::resolve(cx, occ, keys, dict)
        }
        Selection::ObjectArray { keys } => {
            let dict = match existing {
                None => SlotDict::new(),
                Some(ParameterShape::DictArray { dict, .. }) => dict.clone(),
                Some(other) => return Err(conflict(other)),
            };
            object_array::resolve(cx, occ, keys, dict)
        }
    }
}

/// Interpolate with the default `:paramN` syntax.
///
/// Without `values` this is a shape-only pass and the result carries the
/// shape map; with `values` the result carries bindings instead.
pub fn interpolate(
    query: &QueryAst,
    values: Option<&ParamValues>,
) -> InterpResult<InterpolatedQuery> {
    let interpolator = Interpolator::<Dialect>::default();
    match values {
        Some(values) => interpolator.bind(query, values),
        None => interpolator.compute_shape(query),
    }
}

#[cfg(test)]
mod tests;
