//! Static metric configuration consumed by the assembler.
//!
//! A [MetricConfig] describes one metric the surrounding receiver knows how
//! to scrape: its description, unit, and exactly one payload kind. The
//! assembler reads the kind when a metric record is first created and the
//! declared value type every time an observation is coerced onto a data
//! point. With the `serde` feature enabled the types deserialize from the
//! lowercase keys receiver configurations use (`gauge`/`sum`, `int`/`double`,
//! `delta`/`cumulative`).

use crate::data::Temporality;

/// Static description of one scraped metric.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
pub struct MetricConfig {
    /// The description of the metric.
    #[cfg_attr(feature = "serde", serde(default))]
    pub description: String,
    /// The unit in which the metric reports.
    #[cfg_attr(feature = "serde", serde(default))]
    pub unit: String,
    /// The payload kind, exactly one of gauge or sum.
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub kind: MetricKind,
}

impl MetricConfig {
    /// The declared value type of the metric, regardless of its kind.
    pub fn value_type(&self) -> ValueType {
        match &self.kind {
            MetricKind::Gauge(gauge) => gauge.value_type,
            MetricKind::Sum(sum) => sum.value_type,
        }
    }
}

/// The payload kind of a configured metric.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum MetricKind {
    /// An instantaneous measurement.
    Gauge(GaugeConfig),
    /// An accumulated measurement.
    Sum(SumConfig),
}

/// Configuration for a gauge metric.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
pub struct GaugeConfig {
    /// The value type of the gauge's data points.
    pub value_type: ValueType,
}

/// Configuration for a sum metric.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
pub struct SumConfig {
    /// The aggregation temporality of the sum.
    pub aggregation: Aggregation,
    /// Whether the sum only moves in one direction.
    #[cfg_attr(feature = "serde", serde(default))]
    pub monotonic: bool,
    /// The value type of the sum's data points.
    pub value_type: ValueType,
}

/// The value type data points of a metric are coerced onto.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum ValueType {
    /// Integer-valued data points.
    Int,
    /// Double-valued data points.
    Double,
}

/// The configured aggregation temporality of a sum metric.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum Aggregation {
    /// Accumulates from a fixed start time.
    #[default]
    Cumulative,
    /// Resets each collection cycle.
    Delta,
}

impl From<Aggregation> for Temporality {
    fn from(aggregation: Aggregation) -> Self {
        match aggregation {
            Aggregation::Cumulative => Temporality::Cumulative,
            Aggregation::Delta => Temporality::Delta,
        }
    }
}
