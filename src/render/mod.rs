//! Road layer lifecycle on a map surface.
//!
//! Every change of collection or selection discards the previous layer and
//! builds a new one from scratch. Shapes of a discarded layer are addressed by
//! a stale generation and no longer react to pointer events.

mod geojson;
mod interaction;
mod layer;
mod surface;

use tracing::debug;

use crate::config::ViewConfig;
use crate::model::FeatureCollection;
use crate::selection::Selection;

pub use interaction::AnnotationRequest;
pub use layer::{HoverState, Popup, RoadLayer, RoadShape, ShapeId, Style};
pub use surface::{MapSurface, MemorySurface};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RenderOptions {
    pub default_weight: f64,
    pub emphasized_weight: f64,
    /// Whether clicking a road requests an annotation form for it.
    pub annotations: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self { default_weight: 5.0, emphasized_weight: 8.0, annotations: true }
    }
}

impl From<&ViewConfig> for RenderOptions {
    fn from(config: &ViewConfig) -> Self {
        Self {
            default_weight: config.default_weight,
            emphasized_weight: config.emphasized_weight,
            annotations: config.annotations,
        }
    }
}

/// Owns the road layer on a map surface.
#[derive(Debug, Default)]
pub struct RoadLayerRenderer {
    options: RenderOptions,
    next_generation: u64,
    layer: Option<RoadLayer>,
    hovered: Option<ShapeId>,
}

impl RoadLayerRenderer {
    pub fn new(options: RenderOptions) -> Self {
        Self { options, ..Self::default() }
    }

    pub fn options(&self) -> &RenderOptions { &self.options }

    /// The layer currently on the surface.
    pub fn layer(&self) -> Option<&RoadLayer> { self.layer.as_ref() }

    pub fn hovered(&self) -> Option<ShapeId> { self.hovered }

    /// Replace whatever is on the surface with a fresh layer for
    /// `collection` styled by `selection`.
    pub fn render<S: MapSurface + ?Sized>(
        &mut self,
        surface: &mut S,
        collection: &FeatureCollection,
        selection: &Selection,
    ) -> &RoadLayer {
        self.clear(surface);

        let generation = self.next_generation;
        self.next_generation += 1;

        let layer = RoadLayer::build(generation, collection, selection, &self.options);
        debug!(
            generation,
            shapes = layer.len(),
            dimension = selection.dimension(),
            sub_dimension = selection.sub_dimension().unwrap_or_default(),
            "rebuilt road layer"
        );
        surface.add_layer(&layer);
        self.layer.insert(layer)
    }

    /// Remove the current layer, dismissing any open hover first.
    pub fn clear<S: MapSurface + ?Sized>(&mut self, surface: &mut S) {
        if let Some(id) = self.hovered {
            self.pointer_leave(surface, id);
        }
        if let Some(old) = self.layer.take() {
            debug!(generation = old.generation(), "removing road layer");
            surface.remove_layer(old.generation());
        }
    }
}
