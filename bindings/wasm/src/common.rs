use anyhow::{anyhow, Context, Result};
use wasm_bindgen::JsValue;

use roadgrade_core::{FeatureCollection, ViewConfig};

pub(crate) fn js_err(e: impl ToString) -> JsValue {
    JsValue::from_str(&e.to_string())
}

/// Accept either a GeoJSON object or its JSON text.
pub(crate) fn js_to_roads(roads: JsValue, config: &ViewConfig) -> Result<FeatureCollection> {
    let value: serde_json::Value = match roads.as_string() {
        Some(text) => serde_json::from_str(&text).context("roads text is not valid JSON")?,
        None => serde_wasm_bindgen::from_value(roads)
            .map_err(|e| anyhow!("roads must be a GeoJSON object: {e}"))?,
    };
    Ok(FeatureCollection::from_geojson_value(&value, &config.bundle_property)?)
}

pub(crate) fn parse_config(config: Option<String>) -> Result<ViewConfig> {
    match config.as_deref() {
        Some(text) => ViewConfig::from_json_str(text),
        None => Ok(ViewConfig::default()),
    }
}

/// Hand JSON to JavaScript as text parsed on the JS side, which keeps large
/// feature collections out of per-field conversions.
pub(crate) fn json_to_js(value: &serde_json::Value) -> Result<JsValue> {
    let text = serde_json::to_string(value).context("Failed to serialize JSON to string")?;
    js_sys::JSON::parse(&text).map_err(|e| anyhow!("Failed to parse JSON string: {:?}", e))
}
