use std::{fs, path::Path};

use serde_json::Value;

use crate::error::{Error, Result};
use super::feature::Feature;

/// Ordered road features as delivered by the roads endpoint.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FeatureCollection {
    features: Vec<Feature>,
}

impl FeatureCollection {
    pub fn new(features: Vec<Feature>) -> Self {
        Self { features }
    }

    /// Read a GeoJSON `FeatureCollection` document.
    /// `bundle_property` names the feature property holding the evaluation bundle.
    pub fn from_geojson_value(value: &Value, bundle_property: &str) -> Result<Self> {
        let object = value.as_object()
            .ok_or_else(|| Error::Shape("document is not a JSON object".to_string()))?;

        let entries = match object.get("features") {
            None | Some(Value::Null) => return Ok(Self::default()),
            Some(Value::Array(entries)) => entries,
            Some(_) => return Err(Error::Shape("`features` is not an array".to_string())),
        };

        let features = entries.iter().enumerate()
            .map(|(i, entry)| Feature::from_value(entry, bundle_property)
                .ok_or_else(|| Error::Shape(format!("feature {i} is not an object"))))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { features })
    }

    pub fn from_geojson_bytes(bytes: &[u8], bundle_property: &str) -> Result<Self> {
        let value: Value = serde_json::from_slice(bytes)?;
        Self::from_geojson_value(&value, bundle_property)
    }

    pub fn from_geojson_file(path: &Path, bundle_property: &str) -> Result<Self> {
        Self::from_geojson_bytes(&fs::read(path)?, bundle_property)
    }

    /// Representative sample used for schema discovery.
    pub fn first(&self) -> Option<&Feature> { self.features.first() }

    pub fn get(&self, index: usize) -> Option<&Feature> { self.features.get(index) }

    pub fn features(&self) -> &[Feature] { &self.features }

    pub fn iter(&self) -> std::slice::Iter<'_, Feature> { self.features.iter() }

    pub fn len(&self) -> usize { self.features.len() }

    pub fn is_empty(&self) -> bool { self.features.is_empty() }
}

impl<'a> IntoIterator for &'a FeatureCollection {
    type Item = &'a Feature;
    type IntoIter = std::slice::Iter<'a, Feature>;

    fn into_iter(self) -> Self::IntoIter { self.features.iter() }
}
