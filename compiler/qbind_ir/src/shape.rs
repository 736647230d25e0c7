//! Parameter shapes: how each named parameter maps to positional slots.
//!
//! A shape is computed once per distinct parameter name during an
//! interpolation pass. Shape-only passes return the full [`ShapeMap`] so a
//! caller can later bind many value sets without re-deriving index
//! assignment.

use rustc_hash::FxHashMap;

/// One sub-field slot of an object or object-array parameter.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DictField {
    pub name: String,
    pub assigned_index: u32,
    pub required: bool,
}

/// Sub-field slots keyed by field name, in first-seen order.
///
/// Objects rarely have more than a handful of fields, so lookup is a linear
/// scan over a `Vec` rather than a hash map.
#[derive(Clone, Debug, Default, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct SlotDict {
    fields: Vec<DictField>,
}

impl SlotDict {
    pub fn new() -> Self {
        SlotDict { fields: Vec::new() }
    }

    pub fn get(&self, name: &str) -> Option<&DictField> {
        self.fields.iter().find(|f| f.name == name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut DictField> {
        self.fields.iter_mut().find(|f| f.name == name)
    }

    /// Record a new field. The caller guarantees `name` is not present yet.
    pub fn push(&mut self, field: DictField) {
        debug_assert!(self.get(&field.name).is_none(), "duplicate dict field");
        self.fields.push(field);
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DictField> {
        self.fields.iter()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl FromIterator<DictField> for SlotDict {
    fn from_iter<I: IntoIterator<Item = DictField>>(iter: I) -> Self {
        let mut dict = SlotDict::new();
        for field in iter {
            dict.push(field);
        }
        dict
    }
}

impl<'a> IntoIterator for &'a SlotDict {
    type Item = &'a DictField;
    type IntoIter = std::slice::Iter<'a, DictField>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.iter()
    }
}

/// Slot assignment for one named parameter.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "type", rename_all = "snake_case"))]
pub enum ParameterShape {
    /// A single positional slot.
    Scalar {
        name: String,
        required: bool,
        assigned_index: u32,
    },
    /// One slot per array element seen when the shape was first assigned.
    ///
    /// A shape computed without values holds exactly one slot.
    #[cfg_attr(feature = "serde", serde(rename = "spread"))]
    ScalarArray {
        name: String,
        required: bool,
        assigned_index: Vec<u32>,
    },
    /// One slot per distinct sub-field.
    #[cfg_attr(feature = "serde", serde(rename = "pick"))]
    Dict { name: String, dict: SlotDict },
    /// Slot template for one record; expanded per element at bind time.
    #[cfg_attr(feature = "serde", serde(rename = "pick_spread"))]
    DictArray { name: String, dict: SlotDict },
}

impl ParameterShape {
    pub fn name(&self) -> &str {
        match self {
            ParameterShape::Scalar { name, .. }
            | ParameterShape::ScalarArray { name, .. }
            | ParameterShape::Dict { name, .. }
            | ParameterShape::DictArray { name, .. } => name,
        }
    }

    /// Short human-readable name, matching [`crate::Selection::kind_name`].
    pub fn kind_name(&self) -> &'static str {
        match self {
            ParameterShape::Scalar { .. } => "scalar",
            ParameterShape::ScalarArray { .. } => "scalar array",
            ParameterShape::Dict { .. } => "object",
            ParameterShape::DictArray { .. } => "object array",
        }
    }

    /// Every slot index this shape owns, in assignment order.
    pub fn slot_indices(&self) -> Vec<u32> {
        match self {
            ParameterShape::Scalar { assigned_index, .. } => vec![*assigned_index],
            ParameterShape::ScalarArray { assigned_index, .. } => assigned_index.clone(),
            ParameterShape::Dict { dict, .. } | ParameterShape::DictArray { dict, .. } => {
                dict.iter().map(|f| f.assigned_index).collect()
            }
        }
    }
}

/// Parameter name to shape, iterated in first-seen order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ShapeMap {
    shapes: Vec<ParameterShape>,
    by_name: FxHashMap<String, usize>,
}

impl ShapeMap {
    pub fn new() -> Self {
        ShapeMap::default()
    }

    pub fn get(&self, name: &str) -> Option<&ParameterShape> {
        self.by_name.get(name).map(|&idx| &self.shapes[idx])
    }

    /// Insert or replace the shape for `shape.name()`.
    ///
    /// Replacing keeps the name's original first-seen position.
    pub fn insert(&mut self, shape: ParameterShape) {
        if let Some(&idx) = self.by_name.get(shape.name()) {
            self.shapes[idx] = shape;
        } else {
            self.by_name
                .insert(shape.name().to_owned(), self.shapes.len());
            self.shapes.push(shape);
        }
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ParameterShape> {
        self.shapes.iter()
    }

    /// Consume the map, yielding shapes in first-seen order.
    pub fn into_shapes(self) -> Vec<ParameterShape> {
        self.shapes
    }
}

impl FromIterator<ParameterShape> for ShapeMap {
    fn from_iter<I: IntoIterator<Item = ParameterShape>>(iter: I) -> Self {
        let mut map = ShapeMap::new();
        for shape in iter {
            map.insert(shape);
        }
        map
    }
}

impl<'a> IntoIterator for &'a ShapeMap {
    type Item = &'a ParameterShape;
    type IntoIter = std::slice::Iter<'a, ParameterShape>;

    fn into_iter(self) -> Self::IntoIter {
        self.shapes.iter()
    }
}
