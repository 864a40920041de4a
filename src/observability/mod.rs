//! Tracing with file-based OTLP export.
//!
//! Wires the `tracing` macros used throughout the crate into an
//! OpenTelemetry pipeline that writes spans as OTLP JSON lines to a rotating
//! file under the plugin data directory:
//!
//! ```text
//! tracing → tracing-opentelemetry → OpenTelemetry SDK → rotating JSON file
//! ```
//!
//! The trace level comes from the `trace_level` plugin configuration option
//! (default `"info"`). Initialization is best-effort: if the data directory
//! cannot be created the plugin simply runs without traces.
//!
//! # Modules
//!
//! - [`export`]: The OTLP file exporter and span serialization
//! - [`rotate`]: Size-capped rotating file writer

mod export;
mod rotate;

use crate::Config;
use opentelemetry::trace::TracerProvider as _;
use opentelemetry_sdk::resource::Resource;
use tracing_opentelemetry::OpenTelemetryLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Name of the trace output file inside the data directory.
const TRACE_FILE: &str = "zboard-otlp.json";

/// Initializes the tracing subscriber with file-based OTLP export.
///
/// Safe to call more than once; only the first call installs a subscriber.
pub fn init_tracing(config: &Config) {
    let level = config
        .trace_level
        .clone()
        .unwrap_or_else(|| "info".to_string());

    let data_dir = crate::infrastructure::paths::data_dir();
    if std::fs::create_dir_all(&data_dir).is_err() {
        // No data directory means no traces; the board works regardless.
        return;
    }

    let resource = Resource::new(vec![opentelemetry::KeyValue::new("service.name", "zboard")]);

    let provider = export::create_tracer_provider(data_dir.join(TRACE_FILE), resource);
    let tracer = provider.tracer("zboard");
    let otel_layer = OpenTelemetryLayer::new(tracer);

    let subscriber = tracing_subscriber::registry()
        .with(EnvFilter::new(level))
        .with(otel_layer);

    let _ = subscriber.try_init();
}
