//! Discovery of evaluation dimensions from the dataset itself.
//!
//! There is no schema for evaluation bundles, so the available dimensions are
//! read off the features. [`DiscoveryPolicy::SampleFirst`] trusts the first
//! feature as representative; dimensions that only later features carry are not
//! discovered under that policy.

use ahash::AHashSet;
use serde::Deserialize;

use crate::model::{EvaluationBundle, FeatureCollection, SUB_TYPE_KEY};

/// How dimension names are collected from a feature collection.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiscoveryPolicy {
    /// Keys of the first feature's bundle only.
    #[default]
    SampleFirst,
    /// Union of keys over every feature, in first-seen order.
    UnionAll,
}

impl DiscoveryPolicy {
    /// Top-level dimension names, excluding the sub-type key.
    pub fn dimensions(self, collection: &FeatureCollection) -> Vec<String> {
        self.collect(collection, |bundle| bundle.dimensions().collect())
    }

    /// Names nested under the sub-type key.
    pub fn sub_dimensions(self, collection: &FeatureCollection) -> Vec<String> {
        self.collect(collection, |bundle| bundle.sub_dimensions().collect())
    }

    /// Whether the sampled bundles carry a sub-type map at all.
    pub fn has_sub_types(self, collection: &FeatureCollection) -> bool {
        self.bundles(collection).any(EvaluationBundle::has_sub_types)
    }

    fn bundles<'a>(self, collection: &'a FeatureCollection) -> Box<dyn Iterator<Item = &'a EvaluationBundle> + 'a> {
        match self {
            DiscoveryPolicy::SampleFirst => Box::new(
                collection.first().and_then(|f| f.evaluation.as_ref()).into_iter()
            ),
            DiscoveryPolicy::UnionAll => Box::new(
                collection.iter().filter_map(|f| f.evaluation.as_ref())
            ),
        }
    }

    fn collect<'a>(
        self,
        collection: &'a FeatureCollection,
        keys: impl Fn(&'a EvaluationBundle) -> Vec<&'a str>,
    ) -> Vec<String> {
        let mut seen = AHashSet::new();
        let mut out = Vec::new();
        for bundle in self.bundles(collection) {
            for key in keys(bundle) {
                if seen.insert(key) { out.push(key.to_string()) }
            }
        }
        out
    }
}

/// Dimension names of the first feature's bundle.
pub fn discover_dimensions(collection: &FeatureCollection) -> Vec<String> {
    DiscoveryPolicy::SampleFirst.dimensions(collection)
}

/// Sub-dimension names of the first feature's bundle; empty if it has none.
pub fn discover_sub_dimensions(collection: &FeatureCollection) -> Vec<String> {
    DiscoveryPolicy::SampleFirst.sub_dimensions(collection)
}

/// Options for the dimension selector: the discovered dimensions, followed by
/// the sub-type sentinel when sub-types are present.
pub fn selector_options(collection: &FeatureCollection, policy: DiscoveryPolicy) -> Vec<String> {
    let mut options = policy.dimensions(collection);
    if policy.has_sub_types(collection) {
        options.push(SUB_TYPE_KEY.to_string());
    }
    options
}

#[cfg(test)]
mod tests {
    use serde_json::{json, Value};

    use super::*;

    fn collection(bundles: &[Value]) -> FeatureCollection {
        let features: Vec<Value> = bundles.iter()
            .map(|b| json!({"type": "Feature", "properties": {"eemi_grade": b}}))
            .collect();
        FeatureCollection::from_geojson_value(&json!({"features": features}), "eemi_grade").unwrap()
    }

    #[test]
    fn first_feature_dimensions() {
        let fc = collection(&[json!({"gw": 3, "sub_type_grades": {"a": 1}})]);
        assert_eq!(discover_dimensions(&fc), ["gw"]);
        assert_eq!(discover_sub_dimensions(&fc), ["a"]);
    }

    #[test]
    fn empty_collection_yields_nothing() {
        let fc = FeatureCollection::default();
        assert!(discover_dimensions(&fc).is_empty());
        assert!(discover_sub_dimensions(&fc).is_empty());
        assert!(selector_options(&fc, DiscoveryPolicy::SampleFirst).is_empty());
    }

    #[test]
    fn first_feature_without_bundle_yields_nothing() {
        let fc = collection(&[json!(null), json!({"gw": 2})]);
        assert!(discover_dimensions(&fc).is_empty());
        assert!(discover_sub_dimensions(&fc).is_empty());
    }

    #[test]
    fn later_dimensions_are_not_sampled() {
        let fc = collection(&[json!({"gw": 1}), json!({"gw": 2, "zw": 3, "sub_type_grades": {"b": 1}})]);
        assert_eq!(discover_dimensions(&fc), ["gw"]);
        assert!(discover_sub_dimensions(&fc).is_empty());
    }

    #[test]
    fn union_policy_collects_every_feature_in_first_seen_order() {
        let fc = collection(&[
            json!({"gw": 1, "sub_type_grades": {"a": 1}}),
            json!({"zw": 3, "gw": 2, "sub_type_grades": {"b": 1, "a": 2}}),
            json!(null),
        ]);
        let policy = DiscoveryPolicy::UnionAll;
        assert_eq!(policy.dimensions(&fc), ["gw", "zw"]);
        assert_eq!(policy.sub_dimensions(&fc), ["a", "b"]);
    }

    #[test]
    fn selector_appends_sentinel_only_with_sub_types() {
        let with = collection(&[json!({"gw": 1, "bw": 2, "sub_type_grades": {"a": 1}})]);
        assert_eq!(selector_options(&with, DiscoveryPolicy::SampleFirst), ["gw", "bw", "sub_type_grades"]);

        let without = collection(&[json!({"gw": 1})]);
        assert_eq!(selector_options(&without, DiscoveryPolicy::SampleFirst), ["gw"]);
    }

    #[test]
    fn policy_deserializes_from_snake_case() {
        let p: DiscoveryPolicy = serde_json::from_value(json!("union_all")).unwrap();
        assert_eq!(p, DiscoveryPolicy::UnionAll);
    }
}
