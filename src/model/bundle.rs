use serde_json::{Map, Value};

/// Distinguished bundle key whose value nests the sub-type grades.
pub const SUB_TYPE_KEY: &str = "sub_type_grades";

/// Grades attached to a single road, keyed by evaluation dimension.
///
/// Entries keep the order of the source document. Values are stored raw so a
/// popup can show whatever the dataset holds; only numbers count as grades.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EvaluationBundle {
    entries: Map<String, Value>,
}

impl EvaluationBundle {
    pub fn new(entries: Map<String, Value>) -> Self {
        Self { entries }
    }

    /// Returns `None` unless `value` is a JSON object.
    pub fn from_value(value: &Value) -> Option<Self> {
        value.as_object().map(|entries| Self::new(entries.clone()))
    }

    /// Top-level dimension names, excluding the sub-type key.
    pub fn dimensions(&self) -> impl Iterator<Item = &str> {
        self.entries.keys()
            .map(String::as_str)
            .filter(|key| *key != SUB_TYPE_KEY)
    }

    pub fn raw(&self, key: &str) -> Option<&Value> {
        if key == SUB_TYPE_KEY { return None }
        self.entries.get(key)
    }

    pub fn grade(&self, key: &str) -> Option<f64> {
        self.raw(key).and_then(Value::as_f64)
    }

    /// Numeric top-level grades, in bundle order.
    pub fn grades(&self) -> impl Iterator<Item = (&str, f64)> {
        self.entries.iter()
            .filter(|(key, _)| key.as_str() != SUB_TYPE_KEY)
            .filter_map(|(key, value)| value.as_f64().map(|grade| (key.as_str(), grade)))
    }

    /// The nested sub-type map, if the sub-type key holds an object.
    pub fn sub_type_grades(&self) -> Option<&Map<String, Value>> {
        self.entries.get(SUB_TYPE_KEY).and_then(Value::as_object)
    }

    pub fn has_sub_types(&self) -> bool {
        self.sub_type_grades().is_some()
    }

    pub fn sub_dimensions(&self) -> impl Iterator<Item = &str> {
        self.sub_type_grades()
            .into_iter()
            .flat_map(|subs| subs.keys().map(String::as_str))
    }

    pub fn sub_raw(&self, key: &str) -> Option<&Value> {
        self.sub_type_grades().and_then(|subs| subs.get(key))
    }

    pub fn sub_grade(&self, key: &str) -> Option<f64> {
        self.sub_raw(key).and_then(Value::as_f64)
    }

    /// Numeric sub-type grades, in bundle order.
    pub fn sub_grades(&self) -> impl Iterator<Item = (&str, f64)> {
        self.sub_type_grades()
            .into_iter()
            .flat_map(|subs| subs.iter())
            .filter_map(|(key, value)| value.as_f64().map(|grade| (key.as_str(), grade)))
    }
}
