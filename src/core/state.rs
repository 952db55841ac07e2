use std::fmt;

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::core::series::{Dataset, SeriesSpec};

/// X-axis identifier recorded for one simulation tick.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TickLabel(String);

impl TickLabel {
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TickLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<u64> for TickLabel {
    fn from(step: u64) -> Self {
        Self(step.to_string())
    }
}

impl From<u32> for TickLabel {
    fn from(step: u32) -> Self {
        Self(step.to_string())
    }
}

impl From<usize> for TickLabel {
    fn from(step: usize) -> Self {
        Self(step.to_string())
    }
}

impl From<i64> for TickLabel {
    fn from(step: i64) -> Self {
        Self(step.to_string())
    }
}

impl From<&str> for TickLabel {
    fn from(text: &str) -> Self {
        Self(text.to_owned())
    }
}

impl From<String> for TickLabel {
    fn from(text: String) -> Self {
        Self(text)
    }
}

impl From<DateTime<Utc>> for TickLabel {
    fn from(time: DateTime<Utc>) -> Self {
        Self(time.to_rfc3339_opts(SecondsFormat::Secs, true))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChartPhase {
    /// No sample recorded since construction or the last reset.
    Empty,
    /// At least one sample recorded.
    Populated,
}

/// How a value vector lined up against the configured datasets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AppendOutcome {
    /// Values written into datasets.
    pub appended: usize,
    /// Datasets left without a value for this tick.
    pub missing: usize,
    /// Trailing values beyond the last dataset.
    pub ignored: usize,
}

impl AppendOutcome {
    #[must_use]
    pub fn is_exact(self) -> bool {
        self.missing == 0 && self.ignored == 0
    }
}

/// Mutable runtime data of one chart: shared tick labels plus one dataset per series.
///
/// After every fully-supplied append, `labels.len()` equals every dataset's
/// point count. A short value vector leaves the trailing datasets one sample
/// behind; nothing pads them back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartState {
    pub labels: Vec<TickLabel>,
    pub datasets: Vec<Dataset>,
}

impl ChartState {
    #[must_use]
    pub fn from_series(series: &[SeriesSpec]) -> Self {
        Self {
            labels: Vec::new(),
            datasets: series.iter().map(Dataset::from_spec).collect(),
        }
    }

    /// Records one tick: the label once, then `values[i]` into dataset `i`.
    pub fn append_sample(&mut self, label: TickLabel, values: &[f64]) -> AppendOutcome {
        self.labels.push(label);

        let appended = values.len().min(self.datasets.len());
        for (dataset, value) in self.datasets.iter_mut().zip(values) {
            dataset.points.push(*value);
        }

        AppendOutcome {
            appended,
            missing: self.datasets.len() - appended,
            ignored: values.len() - appended,
        }
    }

    /// Drops every label and point, keeping the dataset configuration.
    pub fn clear(&mut self) {
        self.labels.clear();
        for dataset in &mut self.datasets {
            dataset.points.clear();
        }
    }

    #[must_use]
    pub fn is_aligned(&self) -> bool {
        self.datasets
            .iter()
            .all(|dataset| dataset.points.len() == self.labels.len())
    }

    #[must_use]
    pub fn phase(&self) -> ChartPhase {
        if self.labels.is_empty() {
            ChartPhase::Empty
        } else {
            ChartPhase::Populated
        }
    }

    #[must_use]
    pub fn sample_count(&self) -> usize {
        self.labels.len()
    }

    #[must_use]
    pub fn series_count(&self) -> usize {
        self.datasets.len()
    }
}
