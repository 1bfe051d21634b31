use super::layer::{Popup, RoadLayer, ShapeId};

/// The shared map the road layer is drawn on.
///
/// Only [`RoadLayerRenderer`](super::RoadLayerRenderer) writes to a surface;
/// callers hand it the surface explicitly for every render and interaction.
pub trait MapSurface {
    fn add_layer(&mut self, layer: &RoadLayer);

    fn remove_layer(&mut self, generation: u64);

    fn set_weight(&mut self, shape: ShapeId, weight: f64);

    fn open_popup(&mut self, shape: ShapeId, popup: &Popup);

    fn close_popup(&mut self, shape: ShapeId);
}

/// In-process surface that keeps what a map would display.
#[derive(Debug, Default)]
pub struct MemorySurface {
    layers: Vec<RoadLayer>,
    popup: Option<(ShapeId, Popup)>,
}

impl MemorySurface {
    pub fn new() -> Self { Self::default() }

    pub fn layers(&self) -> &[RoadLayer] { &self.layers }

    /// Topmost layer, i.e. the one added last.
    pub fn current(&self) -> Option<&RoadLayer> { self.layers.last() }

    pub fn popup(&self) -> Option<(ShapeId, &Popup)> {
        self.popup.as_ref().map(|(id, popup)| (*id, popup))
    }
}

impl MapSurface for MemorySurface {
    fn add_layer(&mut self, layer: &RoadLayer) {
        self.layers.push(layer.clone());
    }

    fn remove_layer(&mut self, generation: u64) {
        self.layers.retain(|layer| layer.generation() != generation);
        if self.popup.as_ref().is_some_and(|(id, _)| id.generation == generation) {
            self.popup = None;
        }
    }

    fn set_weight(&mut self, shape: ShapeId, weight: f64) {
        if let Some(s) = self.layers.iter_mut().find_map(|layer| layer.shape_mut(shape)) {
            s.style.weight = weight;
        }
    }

    fn open_popup(&mut self, shape: ShapeId, popup: &Popup) {
        self.popup = Some((shape, popup.clone()));
    }

    fn close_popup(&mut self, shape: ShapeId) {
        if self.popup.as_ref().is_some_and(|(id, _)| *id == shape) {
            self.popup = None;
        }
    }
}
