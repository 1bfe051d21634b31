use std::{fmt, sync::Arc};

use serde_json::Value;

use super::bundle::EvaluationBundle;

/// Road identifier (`fid`), normalised to text whether the source held a
/// number or a string.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FeatureId(Arc<str>);

impl FeatureId {
    pub fn new(id: impl Into<Arc<str>>) -> Self { Self(id.into()) }

    pub fn as_str(&self) -> &str { &self.0 }

    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::String(s) if !s.is_empty() => Some(Self::new(s.as_str())),
            Value::Number(n) => Some(Self::new(n.to_string())),
            _ => None,
        }
    }
}

impl fmt::Display for FeatureId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(&self.0) }
}

/// One road segment.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Feature {
    pub fid: Option<FeatureId>,
    pub name: Option<String>,
    pub geometry: Value, // Opaque, passed through to the map surface
    pub evnk: Option<Value>,
    pub ennk: Option<Value>,
    pub len: Option<Value>,
    pub evaluation: Option<EvaluationBundle>,
}

impl Feature {
    /// Read a feature from a GeoJSON `Feature` object.
    /// Returns `None` if `value` is not an object at all.
    pub(crate) fn from_value(value: &Value, bundle_property: &str) -> Option<Self> {
        let object = value.as_object()?;
        let empty = serde_json::Map::new();
        let props = object.get("properties")
            .and_then(Value::as_object)
            .unwrap_or(&empty);

        let scalar = |key: &str| props.get(key).filter(|v| !v.is_null()).cloned();

        Some(Self {
            fid: props.get("fid").and_then(FeatureId::from_value),
            name: props.get("name").and_then(Value::as_str).map(str::to_owned),
            geometry: object.get("geometry").cloned().unwrap_or(Value::Null),
            evnk: scalar("evnk"),
            ennk: scalar("ennk"),
            len: scalar("len"),
            evaluation: props.get(bundle_property).and_then(EvaluationBundle::from_value),
        })
    }
}

/// Render a raw property value the way the map popup shows it.
/// Absent and `null` values become `N/A`; whole numbers drop the fraction.
pub fn display_value(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => "N/A".to_string(),
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => match n.as_f64() {
            Some(x) => format!("{x}"),
            None => n.to_string(),
        },
        Some(other) => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn reads_properties_and_passes_geometry_through() {
        let geometry = json!({"type": "LineString", "coordinates": [[10.0, 48.0], [10.1, 48.1]]});
        let value = json!({
            "type": "Feature",
            "geometry": geometry.clone(),
            "properties": {
                "fid": 17, "name": "B2", "evnk": "7531001", "ennk": "7531002", "len": 812.5,
                "eemi_grade": {"gw": 2.1}
            }
        });
        let feature = Feature::from_value(&value, "eemi_grade").unwrap();
        assert_eq!(feature.fid, Some(FeatureId::new("17")));
        assert_eq!(feature.name.as_deref(), Some("B2"));
        assert_eq!(feature.geometry, geometry);
        assert_eq!(feature.len, Some(json!(812.5)));
        assert_eq!(feature.evaluation.unwrap().grade("gw"), Some(2.1));
    }

    #[test]
    fn missing_properties_degrade_to_empty_feature() {
        let feature = Feature::from_value(&json!({"type": "Feature"}), "eemi_grade").unwrap();
        assert_eq!(feature.fid, None);
        assert_eq!(feature.geometry, Value::Null);
        assert!(feature.evaluation.is_none());
    }

    #[test]
    fn non_object_bundle_is_absent() {
        let value = json!({"properties": {"fid": "a", "eemi_grade": "pending"}});
        let feature = Feature::from_value(&value, "eemi_grade").unwrap();
        assert!(feature.evaluation.is_none());
    }

    #[test]
    fn bundle_property_is_configurable() {
        let value = json!({"properties": {"grades": {"gw": 1}}});
        assert!(Feature::from_value(&value, "eemi_grade").unwrap().evaluation.is_none());
        assert!(Feature::from_value(&value, "grades").unwrap().evaluation.is_some());
    }

    #[test]
    fn non_object_feature_is_rejected() {
        assert!(Feature::from_value(&json!("road"), "eemi_grade").is_none());
    }

    #[test]
    fn display_value_formats() {
        assert_eq!(display_value(None), "N/A");
        assert_eq!(display_value(Some(&Value::Null)), "N/A");
        assert_eq!(display_value(Some(&json!(3.0))), "3");
        assert_eq!(display_value(Some(&json!(2.25))), "2.25");
        assert_eq!(display_value(Some(&json!(12))), "12");
        assert_eq!(display_value(Some(&json!("K 1234"))), "K 1234");
    }
}
