mod bundle;
mod collection;
mod feature;

pub use bundle::{EvaluationBundle, SUB_TYPE_KEY};
pub use collection::FeatureCollection;
pub use feature::{display_value, Feature, FeatureId};
