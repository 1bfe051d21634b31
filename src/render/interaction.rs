//! Per-road hover and click behaviour.

use tracing::debug;

use crate::model::FeatureId;

use super::layer::{HoverState, ShapeId};
use super::surface::MapSurface;
use super::RoadLayerRenderer;

/// Request to open the annotation form for a road.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AnnotationRequest {
    pub fid: FeatureId,
}

impl RoadLayerRenderer {
    /// Emphasise the shape and open its popup.
    /// Returns `false` for shapes that are not part of the current layer.
    pub fn pointer_enter<S: MapSurface + ?Sized>(&mut self, surface: &mut S, id: ShapeId) -> bool {
        if self.hovered == Some(id) { return true }
        if self.layer.as_ref().and_then(|layer| layer.shape(id)).is_none() {
            debug!(?id, "pointer-enter on a shape outside the current layer");
            return false;
        }

        // A missed pointer-leave must not leave a second shape emphasised.
        if let Some(previous) = self.hovered {
            self.pointer_leave(surface, previous);
        }

        let emphasized = self.options.emphasized_weight;
        let Some(shape) = self.layer.as_mut().and_then(|layer| layer.shape_mut(id)) else { return false };
        shape.hover = HoverState::Hovered;
        shape.style.weight = emphasized;
        surface.set_weight(id, emphasized);
        surface.open_popup(id, &shape.popup);
        self.hovered = Some(id);
        true
    }

    /// Restore the default weight and dismiss the popup.
    ///
    /// Always clears the surface for the hovered shape, even if its layer is
    /// being torn down, so emphasis and popup never outlive the hover.
    pub fn pointer_leave<S: MapSurface + ?Sized>(&mut self, surface: &mut S, id: ShapeId) -> bool {
        if self.hovered != Some(id) {
            debug!(?id, "pointer-leave on a shape that is not hovered");
            return false;
        }

        let default_weight = self.options.default_weight;
        if let Some(shape) = self.layer.as_mut().and_then(|layer| layer.shape_mut(id)) {
            shape.hover = HoverState::Idle;
            shape.style.weight = default_weight;
        }
        surface.set_weight(id, default_weight);
        surface.close_popup(id);
        self.hovered = None;
        true
    }

    /// Signal that the user wants to annotate this road.
    /// Nothing is signalled when annotations are off, the shape is stale, or
    /// the road has no identifier.
    pub fn click(&self, id: ShapeId) -> Option<AnnotationRequest> {
        if !self.options.annotations { return None }

        let shape = self.layer.as_ref().and_then(|layer| layer.shape(id));
        let Some(shape) = shape else {
            debug!(?id, "click on a shape outside the current layer");
            return None;
        };
        let fid = shape.fid.clone()?;
        Some(AnnotationRequest { fid })
    }

    /// Hover state of a shape in the current layer.
    pub fn hover_state(&self, id: ShapeId) -> Option<HoverState> {
        self.layer.as_ref().and_then(|layer| layer.shape(id)).map(|shape| shape.hover)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::model::FeatureCollection;
    use crate::render::{MemorySurface, RenderOptions};
    use crate::selection::Selection;

    fn roads() -> FeatureCollection {
        FeatureCollection::from_geojson_value(&json!({"features": [
            {"properties": {"fid": 11, "len": 40, "eemi_grade": {"gw": 2.0}}},
            {"properties": {"eemi_grade": {"gw": 3.0}}},
        ]}), "eemi_grade").unwrap()
    }

    fn rendered() -> (RoadLayerRenderer, MemorySurface, ShapeId, ShapeId) {
        let mut surface = MemorySurface::new();
        let mut renderer = RoadLayerRenderer::default();
        let layer = renderer.render(&mut surface, &roads(), &Selection::new("gw"));
        let (a, b) = (layer.shapes()[0].id, layer.shapes()[1].id);
        (renderer, surface, a, b)
    }

    fn weight(surface: &MemorySurface, id: ShapeId) -> f64 {
        surface.current().unwrap().shape(id).unwrap().style.weight
    }

    #[test]
    fn hover_emphasises_and_opens_popup() {
        let (mut renderer, mut surface, a, _) = rendered();

        assert!(renderer.pointer_enter(&mut surface, a));
        assert_eq!(weight(&surface, a), 8.0);
        assert_eq!(renderer.hover_state(a), Some(HoverState::Hovered));
        let (open, popup) = surface.popup().unwrap();
        assert_eq!(open, a);
        assert_eq!(popup.get("Road ID"), Some("11"));
        assert_eq!(popup.get("Length"), Some("40m"));

        assert!(renderer.pointer_leave(&mut surface, a));
        assert_eq!(weight(&surface, a), 5.0);
        assert_eq!(renderer.hover_state(a), Some(HoverState::Idle));
        assert!(surface.popup().is_none());
    }

    #[test]
    fn entering_another_shape_releases_the_first() {
        let (mut renderer, mut surface, a, b) = rendered();
        renderer.pointer_enter(&mut surface, a);
        renderer.pointer_enter(&mut surface, b);

        assert_eq!(weight(&surface, a), 5.0);
        assert_eq!(weight(&surface, b), 8.0);
        assert_eq!(surface.popup().unwrap().0, b);
        assert_eq!(renderer.hovered(), Some(b));
    }

    #[test]
    fn leave_without_enter_is_ignored() {
        let (mut renderer, mut surface, a, _) = rendered();
        assert!(!renderer.pointer_leave(&mut surface, a));
        assert_eq!(weight(&surface, a), 5.0);
    }

    #[test]
    fn rebuild_dismisses_hover_and_stales_old_handles() {
        let (mut renderer, mut surface, a, _) = rendered();
        renderer.pointer_enter(&mut surface, a);

        let fresh = renderer.render(&mut surface, &roads(), &Selection::new("gw")).shapes()[0].id;
        assert_ne!(fresh, a);
        assert!(surface.popup().is_none());
        assert_eq!(renderer.hovered(), None);
        assert_eq!(weight(&surface, fresh), 5.0);

        assert!(!renderer.pointer_enter(&mut surface, a));
        assert!(!renderer.pointer_leave(&mut surface, a));
        assert_eq!(renderer.click(a), None);
        assert!(surface.popup().is_none());
    }

    #[test]
    fn click_signals_fid() {
        let (renderer, _, a, b) = rendered();
        assert_eq!(renderer.click(a), Some(AnnotationRequest { fid: FeatureId::new("11") }));
        assert_eq!(renderer.click(b), None);
    }

    #[test]
    fn click_is_inert_without_annotations() {
        let mut surface = MemorySurface::new();
        let mut renderer = RoadLayerRenderer::new(RenderOptions { annotations: false, ..RenderOptions::default() });
        let a = renderer.render(&mut surface, &roads(), &Selection::new("gw")).shapes()[0].id;
        assert_eq!(renderer.click(a), None);
        assert_eq!(renderer.hovered(), None);
    }
}
