//! Per-node resource utilization snapshots.

use serde::{Deserialize, Deserializer, Serialize};

/// Utilization of the four resource classes on one node, as fractions.
///
/// A percentage is NaN when its capacity denominator is zero (e.g. a node
/// that declares no memory). Structured output keeps those values as-is;
/// only the table view sanitizes them. JSON writes NaN as `null`, and `null`
/// reads back as NaN.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResourceSummary {
    pub name: String,
    #[serde(default, deserialize_with = "percent_or_nan")]
    pub cpu_percent: f64,
    #[serde(default, deserialize_with = "percent_or_nan")]
    pub memory_percent: f64,
    #[serde(default, deserialize_with = "percent_or_nan")]
    pub storage_percent: f64,
    #[serde(default, deserialize_with = "percent_or_nan")]
    pub volume_percent: f64,
    /// Human-readable notes on discrepancies between recorded and actual usage
    #[serde(default)]
    pub diffs: Vec<String>,
}

impl ResourceSummary {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Replace every NaN percentage with `0.0`, leaving everything else untouched.
    pub fn sanitize(mut self) -> Self {
        self.cpu_percent = sanitize_percent(self.cpu_percent);
        self.memory_percent = sanitize_percent(self.memory_percent);
        self.storage_percent = sanitize_percent(self.storage_percent);
        self.volume_percent = sanitize_percent(self.volume_percent);
        self
    }
}

fn percent_or_nan<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(f64::NAN))
}

/// NaN becomes exactly `0.0`; any other value passes through.
pub fn sanitize_percent(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value
    }
}
