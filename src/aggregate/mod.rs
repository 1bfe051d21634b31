//! Per-dimension averages over a whole feature collection.

use std::fmt;

use ahash::AHashMap;
use serde::Deserialize;

use crate::model::{FeatureCollection, SUB_TYPE_KEY};

/// How sub-type grades are keyed in the aggregate table.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubKeyNaming {
    /// Sub-type grades use their own name; a name shared with a top-level
    /// dimension is averaged together with it.
    #[default]
    Merge,
    /// Sub-type grades are keyed `sub_type_grades.<name>`.
    Namespaced,
}

/// Arithmetic mean per dimension, in first-encountered order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AggregateTable {
    index: AHashMap<String, usize>,
    rows: Vec<(String, f64)>,
}

impl AggregateTable {
    pub fn get(&self, name: &str) -> Option<f64> {
        self.index.get(name).map(|&i| self.rows[i].1)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.rows.iter().map(|(name, mean)| (name.as_str(), *mean))
    }

    pub fn len(&self) -> usize { self.rows.len() }

    pub fn is_empty(&self) -> bool { self.rows.is_empty() }
}

impl fmt::Display for AggregateTable {
    /// Sidebar layout: upper-cased name, mean to two decimals.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self.rows.iter()
            .map(|(name, _)| name.len())
            .chain(std::iter::once("EVALUATION".len()))
            .max()
            .unwrap_or(0);
        writeln!(f, "{:<width$}  AVERAGE", "EVALUATION")?;
        for (name, mean) in &self.rows {
            writeln!(f, "{:<width$}  {mean:.2}", name.to_uppercase())?;
        }
        Ok(())
    }
}

#[derive(Default)]
struct Accumulator {
    index: AHashMap<String, usize>,
    sums: Vec<(String, f64, u32)>,
}

impl Accumulator {
    fn add(&mut self, key: &str, grade: f64) {
        let i = match self.index.get(key) {
            Some(&i) => i,
            None => {
                self.sums.push((key.to_string(), 0.0, 0));
                self.index.insert(key.to_string(), self.sums.len() - 1);
                self.sums.len() - 1
            }
        };
        let entry = &mut self.sums[i];
        entry.1 += grade;
        entry.2 += 1;
    }

    fn finish(self) -> AggregateTable {
        let rows: Vec<(String, f64)> = self.sums.into_iter()
            .filter(|&(_, _, count)| count > 0)
            .map(|(name, sum, count)| (name, sum / count as f64))
            .collect();
        let index = rows.iter().enumerate()
            .map(|(i, (name, _))| (name.clone(), i))
            .collect();
        AggregateTable { index, rows }
    }
}

/// Mean of every numeric grade, top-level and nested, over all features.
/// Keys that never hold a number are omitted.
pub fn aggregate(collection: &FeatureCollection) -> AggregateTable {
    aggregate_with(collection, SubKeyNaming::Merge)
}

pub fn aggregate_with(collection: &FeatureCollection, naming: SubKeyNaming) -> AggregateTable {
    let mut acc = Accumulator::default();

    for bundle in collection.iter().filter_map(|f| f.evaluation.as_ref()) {
        for (key, grade) in bundle.grades() {
            acc.add(key, grade);
        }
        for (key, grade) in bundle.sub_grades() {
            match naming {
                SubKeyNaming::Merge => acc.add(key, grade),
                SubKeyNaming::Namespaced => acc.add(&format!("{SUB_TYPE_KEY}.{key}"), grade),
            }
        }
    }

    acc.finish()
}
