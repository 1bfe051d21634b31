use roadgrade_core::{MemorySurface, RoadView, ShapeId, LEGEND};
use serde::Serialize;
use wasm_bindgen::{JsValue, prelude::wasm_bindgen};

use crate::common::*;

#[derive(Serialize)]
struct Average<'a> {
    name: &'a str,
    value: f64,
}

#[derive(Serialize)]
struct LegendRow {
    label: &'static str,
    color: &'static str,
}

/// Road map view for a Leaflet page.
///
/// The page draws `layer()` as a GeoJSON layer and forwards `mouseover`,
/// `mouseout` and `click` with the feature's `id` and the `generation` the
/// layer was drawn with. Any call that changes the data or the selection
/// rebuilds the layer, which the page then redraws.
#[wasm_bindgen]
pub struct WasmRoadView {
    inner: RoadView<MemorySurface>,
}

#[wasm_bindgen]
impl WasmRoadView {
    /// Construct a view from a roads FeatureCollection (object or JSON text)
    /// and an optional JSON view configuration.
    #[wasm_bindgen(constructor)]
    pub fn new(roads: JsValue, config: Option<String>) -> Result<WasmRoadView, JsValue> {
        let config = parse_config(config).map_err(js_err)?;
        let roads = js_to_roads(roads, &config).map_err(js_err)?;
        Ok(WasmRoadView { inner: RoadView::new(MemorySurface::new(), roads, config) })
    }

    /// Replace the dataset, e.g. after a refetch.
    pub fn set_roads(&mut self, roads: JsValue) -> Result<(), JsValue> {
        let roads = js_to_roads(roads, self.inner.config()).map_err(js_err)?;
        self.inner.set_collection(roads);
        Ok(())
    }

    pub fn dimension(&self) -> String { self.inner.selection().dimension().to_string() }

    pub fn sub_dimension(&self) -> Option<String> {
        self.inner.selection().sub_dimension().map(str::to_string)
    }

    pub fn dimension_options(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(&self.inner.dimension_options()).map_err(|e| e.into())
    }

    pub fn sub_dimension_options(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(self.inner.sub_dimension_options()).map_err(|e| e.into())
    }

    pub fn set_dimension(&mut self, dimension: String) {
        self.inner.set_dimension(&dimension);
    }

    /// Returns false if `sub_dimension` is not among the current options.
    pub fn set_sub_dimension(&mut self, sub_dimension: String) -> bool {
        self.inner.set_sub_dimension(&sub_dimension)
    }

    /// Generation of the layer currently drawn; pointer events carry it back.
    pub fn generation(&self) -> Option<u32> {
        self.inner.layer().map(|layer| layer.generation() as u32)
    }

    /// Styled GeoJSON of the current layer (`stroke`, `stroke-width`, `popup`).
    pub fn layer(&self) -> Result<JsValue, JsValue> {
        json_to_js(&self.inner.surface().to_geojson()).map_err(js_err)
    }

    /// Returns the popup text to show, or undefined for a stale feature.
    pub fn pointer_enter(&mut self, generation: u32, index: usize) -> Option<String> {
        let id = shape_id(generation, index);
        if !self.inner.pointer_enter(id) { return None }
        self.inner.surface().popup().map(|(_, popup)| popup.to_string())
    }

    pub fn pointer_leave(&mut self, generation: u32, index: usize) -> bool {
        self.inner.pointer_leave(shape_id(generation, index))
    }

    /// Road id to open the annotation form for, if any.
    pub fn click(&self, generation: u32, index: usize) -> Option<String> {
        self.inner.click(shape_id(generation, index)).map(|request| request.fid.to_string())
    }

    /// Average per evaluation, as `[{ name, value }]` for the sidebar table and chart.
    pub fn averages(&self) -> Result<JsValue, JsValue> {
        let table = self.inner.averages();
        let rows: Vec<Average> = table.iter().map(|(name, value)| Average { name, value }).collect();
        serde_wasm_bindgen::to_value(&rows).map_err(|e| e.into())
    }

    pub fn legend(&self) -> Result<JsValue, JsValue> {
        let rows: Vec<LegendRow> = LEGEND.iter()
            .map(|&(label, category)| LegendRow { label, color: category.css_name() })
            .collect();
        serde_wasm_bindgen::to_value(&rows).map_err(|e| e.into())
    }
}

fn shape_id(generation: u32, index: usize) -> ShapeId {
    ShapeId { generation: generation as u64, index }
}
