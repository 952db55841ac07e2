use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::core::series::SeriesSpec;

/// Per-tick model reporter values, keyed by reporter name in registration order.
///
/// A simulation records one value per reporter each step; the chart reads the
/// most recent value of the reporter named like each series.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ModelReporters {
    values: IndexMap<String, Vec<f64>>,
}

impl ModelReporters {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, name: impl Into<String>, value: f64) {
        self.values.entry(name.into()).or_default().push(value);
    }

    #[must_use]
    pub fn latest(&self, name: &str) -> Option<f64> {
        self.values.get(name).and_then(|history| history.last().copied())
    }

    #[must_use]
    pub fn history(&self, name: &str) -> &[f64] {
        self.values.get(name).map(Vec::as_slice).unwrap_or_default()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// One value per series, in series order: the reporter's latest sample, or `0.0`
/// when no reporter with that label has recorded anything.
#[must_use]
pub fn current_values(series: &[SeriesSpec], reporters: &ModelReporters) -> Vec<f64> {
    series
        .iter()
        .map(|spec| reporters.latest(&spec.label).unwrap_or(0.0))
        .collect()
}
