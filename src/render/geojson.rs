use serde_json::{json, Map, Value};

use super::layer::RoadLayer;
use super::surface::MemorySurface;

impl RoadLayer {
    /// Export the layer as a GeoJSON FeatureCollection.
    /// Geometry is passed through untouched; properties carry the stroke style
    /// (`stroke`, `stroke-width`), the grade category and the popup rows.
    pub fn to_geojson(&self) -> Value {
        let features: Vec<Value> = self.shapes().iter().map(|shape| {
            let mut properties = Map::new();
            if let Some(fid) = &shape.fid {
                properties.insert("fid".to_string(), json!(fid.as_str()));
            }
            properties.insert("category".to_string(), json!(shape.style.category));
            properties.insert("stroke".to_string(), json!(shape.style.color()));
            properties.insert("stroke-width".to_string(), json!(shape.style.weight));

            let popup: Map<String, Value> = shape.popup.rows().iter()
                .map(|(k, v)| (k.clone(), json!(v)))
                .collect();
            properties.insert("popup".to_string(), Value::Object(popup));

            json!({
                "type": "Feature",
                "id": shape.id.index,
                "geometry": shape.geometry,
                "properties": properties,
            })
        }).collect();

        json!({
            "type": "FeatureCollection",
            "features": features,
        })
    }
}

impl MemorySurface {
    /// GeoJSON of the topmost layer; an empty collection if nothing is drawn.
    pub fn to_geojson(&self) -> Value {
        match self.current() {
            Some(layer) => layer.to_geojson(),
            None => json!({"type": "FeatureCollection", "features": []}),
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::model::FeatureCollection;
    use crate::render::{MemorySurface, RoadLayerRenderer};
    use crate::selection::Selection;

    #[test]
    fn export_carries_style_and_geometry() {
        let geometry = json!({"type": "LineString", "coordinates": [[10.89, 48.34], [10.9, 48.35]]});
        let fc = FeatureCollection::from_geojson_value(&json!({"features": [
            {"geometry": geometry.clone(), "properties": {"fid": "r-1", "eemi_grade": {"gw": 4.7}}},
        ]}), "eemi_grade").unwrap();

        let mut surface = MemorySurface::new();
        RoadLayerRenderer::default().render(&mut surface, &fc, &Selection::new("gw"));

        let out = surface.to_geojson();
        let feature = &out["features"][0];
        assert_eq!(out["type"], "FeatureCollection");
        assert_eq!(feature["geometry"], geometry);
        assert_eq!(feature["properties"]["fid"], "r-1");
        assert_eq!(feature["properties"]["category"], "category_5");
        assert_eq!(feature["properties"]["stroke"], "red");
        assert_eq!(feature["properties"]["stroke-width"], 5.0);
        assert_eq!(feature["properties"]["popup"]["GW"], "4.7");
    }

    #[test]
    fn empty_surface_exports_empty_collection() {
        let out = MemorySurface::new().to_geojson();
        assert_eq!(out["features"].as_array().map(Vec::len), Some(0));
    }
}
