//! The user's current choice of evaluation dimension.

use serde_json::Value;
use tracing::{debug, warn};

use crate::model::{Feature, FeatureCollection, SUB_TYPE_KEY};
use crate::schema::DiscoveryPolicy;

/// Selected dimension and, under the sub-type sentinel, the selected sub-dimension.
///
/// The sub-dimension and its options are only populated while the dimension
/// is [`SUB_TYPE_KEY`]; every other dimension clears them.
#[derive(Debug, Clone, PartialEq)]
pub struct Selection {
    dimension: String,
    sub_dimension: Option<String>,
    sub_options: Vec<String>,
    policy: DiscoveryPolicy,
}

impl Selection {
    pub fn new(default_dimension: impl Into<String>) -> Self {
        Self::with_policy(default_dimension, DiscoveryPolicy::default())
    }

    pub fn with_policy(default_dimension: impl Into<String>, policy: DiscoveryPolicy) -> Self {
        Self {
            dimension: default_dimension.into(),
            sub_dimension: None,
            sub_options: Vec::new(),
            policy,
        }
    }

    pub fn dimension(&self) -> &str { &self.dimension }

    pub fn sub_dimension(&self) -> Option<&str> { self.sub_dimension.as_deref() }

    /// Options for the second selector; empty unless the sentinel is selected.
    pub fn sub_options(&self) -> &[String] { &self.sub_options }

    pub fn is_sub_type(&self) -> bool { self.dimension == SUB_TYPE_KEY }

    /// Select a dimension. Selecting the sentinel defaults the sub-dimension to
    /// the first discovered one; any other dimension clears it.
    pub fn set_dimension(&mut self, dimension: impl Into<String>, collection: &FeatureCollection) {
        let dimension = dimension.into();
        if dimension != SUB_TYPE_KEY && !collection.is_empty()
            && !self.policy.dimensions(collection).iter().any(|d| *d == dimension)
        {
            warn!(dimension = %dimension, "selected dimension was not discovered in the dataset");
        }
        self.dimension = dimension;
        self.refresh(collection);
    }

    /// Pick a sub-dimension from [`Selection::sub_options`].
    /// Returns `false` and leaves the selection alone if it is not one of them.
    pub fn set_sub_dimension(&mut self, sub_dimension: &str) -> bool {
        if !self.sub_options.iter().any(|s| s == sub_dimension) {
            debug!(sub_dimension, "ignoring sub-dimension outside the current options");
            return false;
        }
        self.sub_dimension = Some(sub_dimension.to_string());
        true
    }

    /// Re-derive the sub-dimension options, e.g. after the collection changed.
    pub fn refresh(&mut self, collection: &FeatureCollection) {
        if self.is_sub_type() {
            self.sub_options = self.policy.sub_dimensions(collection);
            self.sub_dimension = self.sub_options.first().cloned();
        } else {
            self.sub_options.clear();
            self.sub_dimension = None;
        }
    }

    /// Raw value of the selected grade for `feature`.
    pub fn resolve<'a>(&self, feature: &'a Feature) -> Option<&'a Value> {
        let bundle = feature.evaluation.as_ref()?;
        if self.is_sub_type() {
            bundle.sub_raw(self.sub_dimension.as_deref()?)
        } else {
            bundle.raw(&self.dimension)
        }
    }

    /// Numeric value of the selected grade for `feature`.
    pub fn resolve_grade(&self, feature: &Feature) -> Option<f64> {
        self.resolve(feature).and_then(Value::as_f64)
    }

    /// Popup heading for the selected grade.
    pub fn title(&self) -> String {
        if self.is_sub_type() {
            format!("Sub-Type: {}", self.sub_dimension.as_deref().unwrap_or_default().to_uppercase())
        } else {
            self.dimension.to_uppercase()
        }
    }
}
