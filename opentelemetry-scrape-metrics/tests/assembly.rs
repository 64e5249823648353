//! End-to-end assembly of a multi-device collection cycle, driving the
//! get-or-create surface the way a scrape loop does.

use std::time::SystemTime;

use opentelemetry::{InstrumentationScope, Key, KeyValue, Value};
use opentelemetry_scrape_metrics::data::{MetricData, NumberValue, Temporality};
use opentelemetry_scrape_metrics::{
    resource_key, Aggregation, GaugeConfig, MetricAssembler, MetricConfig, MetricKind, RawValue,
    SumConfig, ValueType,
};

fn octets_config() -> MetricConfig {
    MetricConfig {
        description: "Octets received on the interface.".to_owned(),
        unit: "By".to_owned(),
        kind: MetricKind::Sum(SumConfig {
            aggregation: Aggregation::Cumulative,
            monotonic: true,
            value_type: ValueType::Int,
        }),
    }
}

fn load_config() -> MetricConfig {
    MetricConfig {
        description: "Current processor load.".to_owned(),
        unit: "1".to_owned(),
        kind: MetricKind::Gauge(GaugeConfig {
            value_type: ValueType::Double,
        }),
    }
}

#[test]
fn assembles_a_full_collection_cycle() {
    let collection_time = SystemTime::now();
    let scope = InstrumentationScope::builder("snmp-scraper")
        .with_version("0.1.0")
        .build();
    let mut assembler = MetricAssembler::new(scope, collection_time);

    let octets_cfg = octets_config();
    let load_cfg = load_config();
    let devices = [("10.0.0.5", ".1", 532_i64, 0.41), ("10.0.0.6", ".2", 918, 0.77)];

    for (address, suffix, octets, load) in devices {
        let key = resource_key(&[address], suffix);
        if assembler.resource(&key).is_none() {
            assembler.create_resource(&key, [KeyValue::new("device.id", address)]);
        }

        if assembler.metric(&key, "interface.in.octets").is_none() {
            assembler
                .create_metric(&key, "interface.in.octets", &octets_cfg)
                .unwrap();
        }
        assembler
            .add_data_point(
                &key,
                "interface.in.octets",
                &octets_cfg,
                RawValue::Integer(octets),
                [KeyValue::new("direction", "in")],
            )
            .unwrap();

        if assembler.metric(&key, "processor.load").is_none() {
            assembler
                .create_metric(&key, "processor.load", &load_cfg)
                .unwrap();
        }
        assembler
            .add_data_point(&key, "processor.load", &load_cfg, RawValue::Float(load), [])
            .unwrap();
    }

    let payload = assembler.finish();
    assert_eq!(payload.len(), 2);

    for (group, (address, _, octets, load)) in payload.iter().zip(devices) {
        assert_eq!(
            group.resource.get(&Key::new("device.id")),
            Some(Value::from(address))
        );
        assert_eq!(group.scope_metrics.len(), 1);
        let scope_metrics = &group.scope_metrics[0];
        assert_eq!(scope_metrics.scope.name(), "snmp-scraper");
        assert_eq!(scope_metrics.scope.version(), Some("0.1.0"));
        assert_eq!(scope_metrics.metrics.len(), 2);

        let octets_metric = &scope_metrics.metrics[0];
        assert_eq!(octets_metric.name, "interface.in.octets");
        assert_eq!(octets_metric.unit, "By");
        match &octets_metric.data {
            MetricData::Sum(sum) => {
                assert_eq!(sum.temporality, Temporality::Cumulative);
                assert!(sum.is_monotonic);
                assert_eq!(sum.data_points.len(), 1);
                assert_eq!(sum.data_points[0].value, NumberValue::I64(octets));
                assert_eq!(sum.data_points[0].start_time, collection_time);
                assert_eq!(sum.data_points[0].time, collection_time);
                assert_eq!(
                    sum.data_points[0].attributes,
                    vec![KeyValue::new("direction", "in")]
                );
            }
            other => panic!("expected sum payload, got {other:?}"),
        }

        let load_metric = &scope_metrics.metrics[1];
        assert_eq!(load_metric.name, "processor.load");
        match &load_metric.data {
            MetricData::Gauge(gauge) => {
                assert_eq!(gauge.data_points.len(), 1);
                assert_eq!(gauge.data_points[0].value, NumberValue::F64(load));
            }
            other => panic!("expected gauge payload, got {other:?}"),
        }
    }
}

#[test]
fn repeat_observations_reuse_the_same_record() {
    let scope = InstrumentationScope::builder("snmp-scraper").build();
    let mut assembler = MetricAssembler::new(scope, SystemTime::now());
    let config = octets_config();

    // Two rows of the same conceptual table land on one metric record.
    let key = resource_key(&["10.0.0.5"], ".1");
    for row in [1_i64, 2] {
        if assembler.resource(&key).is_none() {
            assembler.create_resource(&key, [KeyValue::new("device.id", "10.0.0.5")]);
        }
        if assembler.metric(&key, "interface.in.octets").is_none() {
            assembler
                .create_metric(&key, "interface.in.octets", &config)
                .unwrap();
        }
        assembler
            .add_data_point(
                &key,
                "interface.in.octets",
                &config,
                RawValue::Integer(100 * row),
                [KeyValue::new("interface.index", row.to_string())],
            )
            .unwrap();
    }

    let payload = assembler.finish();
    assert_eq!(payload.len(), 1);
    assert_eq!(payload[0].scope_metrics.len(), 1);
    assert_eq!(payload[0].scope_metrics[0].metrics.len(), 1);

    let points = payload[0].scope_metrics[0].metrics[0].data.data_points();
    assert_eq!(points.len(), 2);
    assert_eq!(points[0].value, NumberValue::I64(100));
    assert_eq!(points[1].value, NumberValue::I64(200));
}
