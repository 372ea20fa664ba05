//! Tracing subscriber setup.

use super::{tracer, SERVICE_NAME, TRACE_FILE};
use crate::infrastructure::paths::resolve_data_dir;
use crate::Config;
use opentelemetry::trace::TracerProvider as _;
use opentelemetry::KeyValue;
use opentelemetry_sdk::resource::Resource;
use tracing_opentelemetry::OpenTelemetryLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Installs the global subscriber: an [`EnvFilter`] plus the OpenTelemetry
/// layer writing to `<data_dir>/custom-board-otlp.json`.
///
/// The filter comes from `RUST_LOG` when set, else `config.trace_level`,
/// else `"info"`. Tracing is optional: if the data directory cannot be
/// created, or a subscriber is already installed, this does nothing.
///
/// ```rust
/// use custom_board::observability::init_tracing;
/// use custom_board::Config;
///
/// let config = Config {
///     trace_level: Some("debug".to_string()),
///     data_dir: Some(std::env::temp_dir().display().to_string()),
///     ..Default::default()
/// };
/// init_tracing(&config);
/// ```
pub fn init_tracing(config: &Config) {
    let data_dir = resolve_data_dir(config.data_dir.as_deref());
    if std::fs::create_dir_all(&data_dir).is_err() {
        return;
    }

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(config.trace_level.as_deref().unwrap_or("info"))
    });

    let resource = Resource::new(vec![
        KeyValue::new("service.name", SERVICE_NAME),
        KeyValue::new("service.version", env!("CARGO_PKG_VERSION")),
    ]);
    let provider =
        tracer::create_tracer_provider(data_dir.join(TRACE_FILE), resource, SERVICE_NAME);
    let otel_layer = OpenTelemetryLayer::new(provider.tracer(SERVICE_NAME));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(otel_layer)
        .try_init();
}
