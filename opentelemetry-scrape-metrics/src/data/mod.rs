//! Types for receiver-assembled metric payloads.
//!
//! These mirror the OpenTelemetry metrics data model from the point of view
//! of a scraping receiver: payloads are built up one observation at a time,
//! every data point carries its own timestamp pair, and point values are
//! tagged as integer or double according to the metric's declared value
//! type.

use std::borrow::Cow;
use std::time::SystemTime;

use opentelemetry::{InstrumentationScope, KeyValue};

use crate::resource::Resource;

mod temporality;
pub use temporality::Temporality;

/// The timestamp pair stamped on every data point produced in one collection
/// cycle.
///
/// Both timestamps are fixed when the assembler for the cycle is created;
/// `start_time` marks the beginning of the measurement window and `time` the
/// moment the scrape completed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CollectionWindow {
    /// The time when the measurement window started.
    pub start_time: SystemTime,
    /// The time when the observations were collected.
    pub time: SystemTime,
}

impl CollectionWindow {
    /// Create a window whose start and collection time are both `time`.
    pub fn starting_at(time: SystemTime) -> Self {
        CollectionWindow {
            start_time: time,
            time,
        }
    }
}

/// A collection of [ScopeMetrics] and the associated [Resource] they were
/// scraped from.
#[derive(Debug, Clone)]
pub struct ResourceMetrics {
    /// The entity the metrics describe.
    pub resource: Resource,
    /// The collection of metrics grouped by instrumentation scope.
    pub scope_metrics: Vec<ScopeMetrics>,
}

/// A collection of metrics produced under one instrumentation scope.
#[derive(Default, Debug, Clone)]
pub struct ScopeMetrics {
    /// The [InstrumentationScope] of the receiver that assembled the metrics.
    pub scope: InstrumentationScope,
    /// The list of metrics assembled under the scope.
    pub metrics: Vec<Metric>,
}

/// A named time series assembled from scraped observations.
#[derive(Debug, Clone)]
pub struct Metric {
    /// The name of the metric.
    pub name: Cow<'static, str>,
    /// The description of the metric, which can be used in documentation.
    pub description: Cow<'static, str>,
    /// The unit in which the metric reports.
    pub unit: Cow<'static, str>,
    /// The accumulated data points.
    pub data: MetricData,
}

/// The typed payload of a [Metric].
///
/// The payload kind is fixed when the metric record is created and never
/// changes afterwards.
#[derive(Debug, Clone)]
pub enum MetricData {
    /// Instantaneous measurements.
    Gauge(Gauge),
    /// Accumulated measurements.
    Sum(Sum),
}

impl MetricData {
    /// The data points accumulated so far, regardless of payload kind.
    pub fn data_points(&self) -> &[NumberDataPoint] {
        match self {
            MetricData::Gauge(gauge) => &gauge.data_points,
            MetricData::Sum(sum) => &sum.data_points,
        }
    }
}

impl From<Gauge> for MetricData {
    fn from(value: Gauge) -> Self {
        MetricData::Gauge(value)
    }
}

impl From<Sum> for MetricData {
    fn from(value: Sum) -> Self {
        MetricData::Sum(value)
    }
}

/// A measurement of the current value of a metric.
#[derive(Default, Debug, Clone)]
pub struct Gauge {
    /// Individual observations in append order.
    pub data_points: Vec<NumberDataPoint>,
}

/// The sum of all measurements of values from a metric.
#[derive(Debug, Clone)]
pub struct Sum {
    /// Individual observations in append order.
    pub data_points: Vec<NumberDataPoint>,
    /// Describes if the sum is reported as the change from the last report
    /// time, or the cumulative changes since a fixed start time.
    pub temporality: Temporality,
    /// Whether this sum only increases or decreases.
    pub is_monotonic: bool,
}

/// A single data point in a time series.
#[derive(Debug, Clone, PartialEq)]
pub struct NumberDataPoint {
    /// The set of key value pairs recorded with the observation.
    pub attributes: Vec<KeyValue>,
    /// The time when the measurement window started.
    pub start_time: SystemTime,
    /// The time when the observation was collected.
    pub time: SystemTime,
    /// The observed value.
    pub value: NumberValue,
}

/// The value of a [NumberDataPoint], typed per the metric's declared value
/// type.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NumberValue {
    /// An integer-valued observation.
    I64(i64),
    /// A double-valued observation.
    F64(f64),
}

impl From<i64> for NumberValue {
    fn from(value: i64) -> Self {
        NumberValue::I64(value)
    }
}

impl From<f64> for NumberValue {
    fn from(value: f64) -> Self {
        NumberValue::F64(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use opentelemetry::KeyValue;
    use std::time::SystemTime;

    #[test]
    fn collection_window_fixes_both_timestamps() {
        let now = SystemTime::now();
        let window = CollectionWindow::starting_at(now);
        assert_eq!(window.start_time, now);
        assert_eq!(window.time, now);
    }

    #[test]
    fn data_points_are_reachable_through_either_payload() {
        let now = SystemTime::now();
        let point = NumberDataPoint {
            attributes: vec![KeyValue::new("key", "value")],
            start_time: now,
            time: now,
            value: NumberValue::I64(7),
        };

        let gauge: MetricData = Gauge {
            data_points: vec![point.clone()],
        }
        .into();
        assert_eq!(gauge.data_points(), &[point.clone()]);

        let sum: MetricData = Sum {
            data_points: vec![point.clone()],
            temporality: Temporality::Delta,
            is_monotonic: false,
        }
        .into();
        assert_eq!(sum.data_points(), &[point]);
    }
}
