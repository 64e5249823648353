//! # OpenTelemetry Scrape Metrics
//!
//! Building blocks for scrape-based metrics receivers. A receiver that polls
//! many devices (or sub-components of devices) discovers its resources and
//! metrics while walking the remote system, one observation at a time. This
//! crate provides the [`MetricAssembler`], which turns that stream of
//! observations into an OpenTelemetry-shaped payload: resource groups are
//! deduplicated by a caller-computed key, metric records are deduplicated by
//! `(resource key, metric name)`, and raw integer/float observations are
//! coerced onto the metric's declared value type.
//!
//! The assembler covers a single collection cycle: it is created with the
//! cycle's collection timestamp, fed get-or-create calls while the scrape
//! runs, and consumed by [`MetricAssembler::finish`] to hand the payload to
//! the emission pipeline. All state is owned by the instance and mutated
//! through `&mut self`, so sequential single-writer use is enforced by the
//! borrow checker rather than by convention.
//!
//! ## Getting started
//!
//! ```
//! use std::time::SystemTime;
//!
//! use opentelemetry::{InstrumentationScope, KeyValue};
//! use opentelemetry_scrape_metrics::{
//!     resource_key, Aggregation, MetricAssembler, MetricConfig, MetricKind, RawValue, SumConfig,
//!     ValueType,
//! };
//!
//! let scope = InstrumentationScope::builder("snmp-scraper").build();
//! let mut assembler = MetricAssembler::new(scope, SystemTime::now());
//!
//! // One resource group per polled interface, keyed by its index path.
//! let key = resource_key(&["10.0.0.5"], ".1");
//! if assembler.resource(&key).is_none() {
//!     assembler.create_resource(&key, [KeyValue::new("device.id", "10.0.0.5")]);
//! }
//!
//! let config = MetricConfig {
//!     description: "Octets received on the interface.".to_owned(),
//!     unit: "By".to_owned(),
//!     kind: MetricKind::Sum(SumConfig {
//!         aggregation: Aggregation::Cumulative,
//!         monotonic: true,
//!         value_type: ValueType::Int,
//!     }),
//! };
//! if assembler.metric(&key, "interface.in.octets").is_none() {
//!     assembler
//!         .create_metric(&key, "interface.in.octets", &config)
//!         .unwrap();
//! }
//! assembler
//!     .add_data_point(
//!         &key,
//!         "interface.in.octets",
//!         &config,
//!         RawValue::Integer(532),
//!         [KeyValue::new("direction", "in")],
//!     )
//!     .unwrap();
//!
//! let payload = assembler.finish();
//! assert_eq!(payload.len(), 1);
//! ```
#![warn(
    future_incompatible,
    missing_debug_implementations,
    missing_docs,
    nonstandard_style,
    rust_2018_idioms,
    unreachable_pub,
    unused
)]
#![allow(clippy::needless_doctest_main)]
#![cfg_attr(docsrs, feature(doc_cfg), deny(rustdoc::broken_intra_doc_links))]
#![doc(
    html_logo_url = "https://raw.githubusercontent.com/open-telemetry/opentelemetry-rust/main/assets/logo.svg"
)]
#![cfg_attr(test, deny(warnings))]

mod assembler;
mod config;
pub mod data;
mod error;
pub mod resource;
mod value;

pub use assembler::{resource_key, MetricAssembler};
pub use config::{Aggregation, GaugeConfig, MetricConfig, MetricKind, SumConfig, ValueType};
pub use error::{AssemblyError, AssemblyResult};
pub use resource::Resource;
pub use value::RawValue;
