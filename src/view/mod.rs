//! A road-map view: dataset, selection and road layer kept in step.

use crate::aggregate::{aggregate_with, AggregateTable};
use crate::config::ViewConfig;
use crate::model::FeatureCollection;
use crate::render::{AnnotationRequest, MapSurface, RenderOptions, RoadLayer, RoadLayerRenderer, ShapeId};
use crate::schema::selector_options;
use crate::selection::Selection;

/// Drives one map surface. Every change to the collection or the selection
/// re-renders the road layer before returning.
#[derive(Debug)]
pub struct RoadView<S: MapSurface> {
    config: ViewConfig,
    surface: S,
    collection: FeatureCollection,
    selection: Selection,
    renderer: RoadLayerRenderer,
}

impl<S: MapSurface> RoadView<S> {
    pub fn new(surface: S, collection: FeatureCollection, config: ViewConfig) -> Self {
        let mut selection = Selection::with_policy(config.default_dimension.clone(), config.discovery);
        selection.refresh(&collection);
        let renderer = RoadLayerRenderer::new(RenderOptions::from(&config));

        let mut view = Self { config, surface, collection, selection, renderer };
        view.rerender();
        view
    }

    pub fn config(&self) -> &ViewConfig { &self.config }

    pub fn surface(&self) -> &S { &self.surface }

    pub fn collection(&self) -> &FeatureCollection { &self.collection }

    pub fn selection(&self) -> &Selection { &self.selection }

    pub fn layer(&self) -> Option<&RoadLayer> { self.renderer.layer() }

    /// Options for the dimension selector.
    pub fn dimension_options(&self) -> Vec<String> {
        selector_options(&self.collection, self.config.discovery)
    }

    /// Options for the sub-type selector; empty unless the sentinel is selected.
    pub fn sub_dimension_options(&self) -> &[String] { self.selection.sub_options() }

    /// Average grades over the whole collection, independent of the selection.
    pub fn averages(&self) -> AggregateTable {
        aggregate_with(&self.collection, self.config.sub_key_naming)
    }

    pub fn set_collection(&mut self, collection: FeatureCollection) {
        self.collection = collection;
        self.selection.refresh(&self.collection);
        self.rerender();
    }

    pub fn set_dimension(&mut self, dimension: &str) {
        self.selection.set_dimension(dimension, &self.collection);
        self.rerender();
    }

    pub fn set_sub_dimension(&mut self, sub_dimension: &str) -> bool {
        let changed = self.selection.set_sub_dimension(sub_dimension);
        if changed { self.rerender() }
        changed
    }

    pub fn pointer_enter(&mut self, id: ShapeId) -> bool {
        self.renderer.pointer_enter(&mut self.surface, id)
    }

    pub fn pointer_leave(&mut self, id: ShapeId) -> bool {
        self.renderer.pointer_leave(&mut self.surface, id)
    }

    pub fn click(&self, id: ShapeId) -> Option<AnnotationRequest> {
        self.renderer.click(id)
    }

    /// Handle of the shape drawn for the feature at `index` in the collection.
    pub fn shape_id(&self, index: usize) -> Option<ShapeId> {
        self.layer()?.shapes().get(index).map(|shape| shape.id)
    }

    fn rerender(&mut self) {
        self.renderer.render(&mut self.surface, &self.collection, &self.selection);
    }
}
