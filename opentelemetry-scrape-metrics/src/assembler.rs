//! Get-or-create assembly of metric payloads for one collection cycle.

use std::collections::HashMap;
use std::time::SystemTime;

use opentelemetry::{otel_debug, otel_warn, InstrumentationScope, KeyValue};

use crate::config::{MetricConfig, MetricKind};
use crate::data::{
    CollectionWindow, Gauge, Metric, MetricData, NumberDataPoint, ResourceMetrics, ScopeMetrics,
    Sum,
};
use crate::error::{AssemblyError, AssemblyResult};
use crate::resource::Resource;
use crate::value::RawValue;

/// Derives the lookup key identifying one resource group.
///
/// The resource-identifying attribute values are joined with `,` and
/// `suffix` is appended verbatim, with no delimiter before it. Empty inputs
/// yield the empty string. Callers must derive the key the same way for the
/// same logical resource throughout a collection cycle, since it is the sole
/// identity used for resource deduplication.
pub fn resource_key<S: AsRef<str>>(values: &[S], suffix: &str) -> String {
    let mut key = values
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join(",");
    key.push_str(suffix);
    key
}

/// Position of an indexed metric inside the payload under assembly.
///
/// Groups and metrics are append-only for the assembler's lifetime, so the
/// positions stay valid once recorded.
#[derive(Debug, Clone, Copy)]
struct MetricSlot {
    resource: usize,
    scope: usize,
    metric: usize,
}

/// Assembles one collection cycle's observations into an ordered,
/// resource-grouped metrics payload.
///
/// Resource groups are indexed by a caller-computed key (see
/// [resource_key]) and metric records by `(resource key, metric name)`; both
/// indexes are append-only and live as long as the assembler. The caller is
/// expected to probe with [MetricAssembler::resource] /
/// [MetricAssembler::metric] before creating, so each logical resource and
/// metric is created exactly once per cycle.
#[derive(Debug)]
pub struct MetricAssembler {
    scope: InstrumentationScope,
    window: CollectionWindow,
    resource_metrics: Vec<ResourceMetrics>,
    resources_by_key: HashMap<String, usize>,
    metrics_by_resource: HashMap<String, HashMap<String, MetricSlot>>,
}

impl MetricAssembler {
    /// Create an empty assembler for a cycle collected at `collection_time`.
    ///
    /// `scope` is stamped on the scope container of every resource group
    /// created by this assembler; `collection_time` fixes both halves of the
    /// [CollectionWindow] copied onto every data point.
    pub fn new(scope: InstrumentationScope, collection_time: SystemTime) -> Self {
        MetricAssembler {
            scope,
            window: CollectionWindow::starting_at(collection_time),
            resource_metrics: Vec::new(),
            resources_by_key: HashMap::new(),
            metrics_by_resource: HashMap::new(),
        }
    }

    /// The instrumentation scope stamped on assembled scope containers.
    pub fn scope(&self) -> &InstrumentationScope {
        &self.scope
    }

    /// The timestamp pair copied onto every assembled data point.
    pub fn window(&self) -> CollectionWindow {
        self.window
    }

    /// The number of resource groups assembled so far.
    pub fn len(&self) -> usize {
        self.resource_metrics.len()
    }

    /// Returns `true` if no resource group has been created yet.
    pub fn is_empty(&self) -> bool {
        self.resource_metrics.is_empty()
    }

    /// Look up the resource group created under `key`, if any.
    pub fn resource(&self, key: &str) -> Option<&ResourceMetrics> {
        self.resources_by_key
            .get(key)
            .map(|index| &self.resource_metrics[*index])
    }

    /// Append a new resource group and index it under `key`.
    ///
    /// The group's [Resource] is built from `attributes` (order-independent,
    /// de-duplicated by key) and seeded with one scope container carrying
    /// the assembler's scope. Creation order is emission order. Callers are
    /// expected to check [MetricAssembler::resource] first: creating twice
    /// under one key leaves both groups in the payload while lookups resolve
    /// to the latest.
    pub fn create_resource<T>(&mut self, key: &str, attributes: T) -> &ResourceMetrics
    where
        T: IntoIterator<Item = KeyValue>,
    {
        if self.resources_by_key.contains_key(key) {
            otel_warn!(
                name: "MetricAssemblerDuplicateResourceKey",
                message = "a resource group was already created under this key; the earlier group stays in the payload but is no longer reachable through lookups",
                resource_key = key
            );
        }
        self.resource_metrics.push(ResourceMetrics {
            resource: Resource::new(attributes),
            scope_metrics: vec![ScopeMetrics {
                scope: self.scope.clone(),
                metrics: Vec::new(),
            }],
        });
        let index = self.resource_metrics.len() - 1;
        self.resources_by_key.insert(key.to_owned(), index);
        &self.resource_metrics[index]
    }

    /// Look up the metric record created under `(resource_key, name)`.
    ///
    /// Returns `None` when either the resource key or the metric name is
    /// unindexed.
    pub fn metric(&self, resource_key: &str, name: &str) -> Option<&Metric> {
        let slot = self.metrics_by_resource.get(resource_key)?.get(name)?;
        Some(&self.resource_metrics[slot.resource].scope_metrics[slot.scope].metrics[slot.metric])
    }

    /// Append a new metric record under an existing resource group.
    ///
    /// Fails with [AssemblyError::ResourceNotFound] when no group was
    /// created under `resource_key`. The record takes its name, description,
    /// and unit from `config`, and its payload shape from `config`'s kind;
    /// the kind (and for sums, temporality and monotonicity) never changes
    /// afterwards.
    pub fn create_metric(
        &mut self,
        resource_key: &str,
        name: &str,
        config: &MetricConfig,
    ) -> AssemblyResult<&Metric> {
        let resource_index = *self
            .resources_by_key
            .get(resource_key)
            .ok_or_else(|| AssemblyError::ResourceNotFound(name.to_owned()))?;

        let data = match &config.kind {
            MetricKind::Gauge(_) => MetricData::Gauge(Gauge::default()),
            MetricKind::Sum(sum) => MetricData::Sum(Sum {
                data_points: Vec::new(),
                temporality: sum.aggregation.into(),
                is_monotonic: sum.monotonic,
            }),
        };

        let scopes = &mut self.resource_metrics[resource_index].scope_metrics;
        // Every group is seeded with one scope container at creation;
        // metrics attach to the most recently added one.
        let scope_index = scopes.len() - 1;
        let metrics = &mut scopes[scope_index].metrics;
        metrics.push(Metric {
            name: name.to_owned().into(),
            description: config.description.clone().into(),
            unit: config.unit.clone().into(),
            data,
        });
        let slot = MetricSlot {
            resource: resource_index,
            scope: scope_index,
            metric: metrics.len() - 1,
        };
        self.metrics_by_resource
            .entry(resource_key.to_owned())
            .or_default()
            .insert(name.to_owned(), slot);

        Ok(&self.resource_metrics[slot.resource].scope_metrics[slot.scope].metrics[slot.metric])
    }

    /// Append one observation to an existing metric record.
    ///
    /// Fails with [AssemblyError::MetricNotFound] when `(resource_key,
    /// name)` is unindexed, whether because the resource was never created
    /// or the metric was never created under it. On success the data point
    /// is stamped with the assembler's [CollectionWindow], carries
    /// `attributes`, and holds `value` coerced onto the value type declared
    /// in `config` (see [RawValue::coerce]). The payload appended to is
    /// selected by the record's stored kind, not by re-reading `config`.
    pub fn add_data_point<T>(
        &mut self,
        resource_key: &str,
        name: &str,
        config: &MetricConfig,
        value: RawValue,
        attributes: T,
    ) -> AssemblyResult<&NumberDataPoint>
    where
        T: IntoIterator<Item = KeyValue>,
    {
        let slot = *self
            .metrics_by_resource
            .get(resource_key)
            .and_then(|metrics| metrics.get(name))
            .ok_or_else(|| AssemblyError::MetricNotFound(name.to_owned()))?;

        let point = NumberDataPoint {
            attributes: attributes.into_iter().collect(),
            start_time: self.window.start_time,
            time: self.window.time,
            value: value.coerce(config.value_type()),
        };

        let metric = &mut self.resource_metrics[slot.resource].scope_metrics[slot.scope].metrics
            [slot.metric];
        let points = match &mut metric.data {
            MetricData::Gauge(gauge) => &mut gauge.data_points,
            MetricData::Sum(sum) => &mut sum.data_points,
        };
        points.push(point);
        let index = points.len() - 1;
        Ok(&points[index])
    }

    /// Hand off the assembled payload, consuming the assembler.
    ///
    /// Resource groups appear in creation order, each with its accumulated
    /// metrics and data points.
    pub fn finish(self) -> Vec<ResourceMetrics> {
        otel_debug!(
            name: "MetricAssemblerPayloadFinished",
            resource_count = self.resource_metrics.len()
        );
        self.resource_metrics
    }
}
