use std::fmt;

use serde_json::Value;

use crate::grade::{classify, Category};
use crate::model::{display_value, Feature, FeatureCollection, FeatureId};
use crate::selection::Selection;

use super::RenderOptions;

/// Handle to one rendered shape. The generation changes on every rebuild, so
/// handles into a discarded layer never address a live shape.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ShapeId {
    pub generation: u64,
    pub index: usize,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Style {
    pub category: Category,
    pub weight: f64,
}

impl Style {
    pub fn color(&self) -> &'static str { self.category.css_name() }
}

/// Plain key/value rows shown when a road is hovered.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Popup {
    rows: Vec<(String, String)>,
}

impl Popup {
    pub(crate) fn for_feature(feature: &Feature, selection: &Selection) -> Self {
        let road_id = feature.fid.as_ref()
            .map(FeatureId::to_string)
            .unwrap_or_else(|| "N/A".to_string());
        let length = match &feature.len {
            Some(len) => format!("{}m", display_value(Some(len))),
            None => "N/A".to_string(),
        };

        Self {
            rows: vec![
                ("Road ID".to_string(), road_id),
                (selection.title(), display_value(selection.resolve(feature))),
                ("EVNK".to_string(), display_value(feature.evnk.as_ref())),
                ("ENNK".to_string(), display_value(feature.ennk.as_ref())),
                ("Length".to_string(), length),
            ],
        }
    }

    pub fn rows(&self) -> &[(String, String)] { &self.rows }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.rows.iter().find(|(k, _)| k == key).map(|(_, v)| v.as_str())
    }
}

impl fmt::Display for Popup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (key, value) in &self.rows {
            writeln!(f, "{key}: {value}")?;
        }
        Ok(())
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum HoverState {
    #[default]
    Idle,
    Hovered,
}

/// A styled road as handed to the map surface.
#[derive(Clone, Debug, PartialEq)]
pub struct RoadShape {
    pub id: ShapeId,
    pub fid: Option<FeatureId>,
    pub geometry: Value,
    pub style: Style,
    pub popup: Popup,
    pub hover: HoverState,
}

/// One complete rendering of a feature collection: exactly one shape per feature.
#[derive(Clone, Debug, PartialEq)]
pub struct RoadLayer {
    generation: u64,
    shapes: Vec<RoadShape>,
}

impl RoadLayer {
    pub(crate) fn build(
        generation: u64,
        collection: &FeatureCollection,
        selection: &Selection,
        options: &RenderOptions,
    ) -> Self {
        let shapes = collection.iter().enumerate()
            .map(|(index, feature)| RoadShape {
                id: ShapeId { generation, index },
                fid: feature.fid.clone(),
                geometry: feature.geometry.clone(),
                style: Style {
                    category: classify(selection.resolve_grade(feature)),
                    weight: options.default_weight,
                },
                popup: Popup::for_feature(feature, selection),
                hover: HoverState::Idle,
            })
            .collect();

        Self { generation, shapes }
    }

    pub fn generation(&self) -> u64 { self.generation }

    pub fn shapes(&self) -> &[RoadShape] { &self.shapes }

    pub fn len(&self) -> usize { self.shapes.len() }

    pub fn is_empty(&self) -> bool { self.shapes.is_empty() }

    /// The shape behind `id`, if `id` belongs to this layer.
    pub fn shape(&self, id: ShapeId) -> Option<&RoadShape> {
        if id.generation != self.generation { return None }
        self.shapes.get(id.index)
    }

    pub(crate) fn shape_mut(&mut self, id: ShapeId) -> Option<&mut RoadShape> {
        if id.generation != self.generation { return None }
        self.shapes.get_mut(id.index)
    }
}
