//! Prepared queries: compute the shape once, bind many value sets.
//!
//! When every parameter is a scalar or an object, slot assignment does not
//! depend on the values, so the shape-only text is final and bindings come
//! straight from the shape map. Array shapes change slot count with the
//! values and are rebound by re-running the full pass.

use qbind_ir::{Binding, InterpolatedQuery, ParameterShape, QueryAst};

use crate::resolve::bind_slot;
use crate::validate::validate_required;
use crate::values::record_field;
use crate::{Dialect, InterpError, InterpResult, Interpolator, ParamValues, PlaceholderSyntax};

/// A parsed query with its shape computed once.
#[derive(Clone, Debug)]
pub struct PreparedQuery<S = Dialect> {
    ast: QueryAst,
    interpolator: Interpolator<S>,
    shape: InterpolatedQuery,
}

impl<S: PlaceholderSyntax> PreparedQuery<S> {
    /// Run the shape-only pass over `ast`.
    pub fn new(ast: QueryAst, syntax: S) -> InterpResult<Self> {
        let interpolator = Interpolator::new(syntax);
        let shape = interpolator.compute_shape(&ast)?;
        Ok(PreparedQuery {
            ast,
            interpolator,
            shape,
        })
    }

    pub fn ast(&self) -> &QueryAst {
        &self.ast
    }

    /// Query text of the shape-only pass.
    pub fn query(&self) -> &str {
        &self.shape.query
    }

    pub fn mapping(&self) -> &[ParameterShape] {
        &self.shape.mapping
    }

    /// Whether [`bind`](Self::bind) can reuse the precomputed text.
    pub fn is_template_bindable(&self) -> bool {
        self.shape.mapping.iter().all(|shape| {
            matches!(
                shape,
                ParameterShape::Scalar { .. } | ParameterShape::Dict { .. }
            )
        })
    }

    /// Bind one value set.
    ///
    /// Produces the same text and bindings as a fresh value-bearing pass.
    pub fn bind(&self, values: &ParamValues) -> InterpResult<InterpolatedQuery> {
        if !self.is_template_bindable() {
            tracing::debug!("array shapes present, re-running interpolation pass");
            return self.interpolator.bind(&self.ast, values);
        }

        validate_required(&self.ast.params, values)?;
        let bindings = bind_mapping(&self.shape.mapping, values, self.interpolator.syntax())?;
        Ok(InterpolatedQuery {
            query: self.shape.query.clone(),
            mapping: Vec::new(),
            bindings,
        })
    }
}

/// Bind `values` against a precomputed shape map.
///
/// Bindings come back in slot order, as a value-bearing pass emits them.
/// Array shapes are refused with `TemplateNotBindable`: their slot count
/// depends on the values, so the query text has to be regenerated.
pub fn bind_mapping(
    mapping: &[ParameterShape],
    values: &ParamValues,
    syntax: &dyn PlaceholderSyntax,
) -> InterpResult<Vec<Binding>> {
    let mut slots: Vec<(u32, Binding)> = Vec::new();
    for shape in mapping {
        match shape {
            ParameterShape::Scalar {
                name,
                assigned_index,
                ..
            } => {
                let binding = bind_slot(syntax, *assigned_index, values.get(name));
                slots.push((*assigned_index, binding));
            }
            ParameterShape::Dict { name, dict } => {
                let record = match values.get(name) {
                    Some(record) if !record.is_object() => {
                        return Err(InterpError::ShapeMismatch {
                            name: name.clone(),
                            expected: "an object",
                        })
                    }
                    record => record,
                };
                for field in dict {
                    let value = record.and_then(|r| record_field(r, &field.name));
                    slots.push((
                        field.assigned_index,
                        bind_slot(syntax, field.assigned_index, value),
                    ));
                }
            }
            ParameterShape::ScalarArray { name, .. } | ParameterShape::DictArray { name, .. } => {
                return Err(InterpError::TemplateNotBindable { name: name.clone() })
            }
        }
    }
    slots.sort_by_key(|(index, _)| *index);
    Ok(slots.into_iter().map(|(_, binding)| binding).collect())
}
