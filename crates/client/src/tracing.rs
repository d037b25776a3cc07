//! Log and trace pipeline for the `ptero-cli` process.
//!
//! Responsibilities:
//! - Install the global subscriber: `EnvFilter` plus a human-readable layer on stderr.
//! - Optionally export spans over OTLP/gRPC, so each `cleanup_run` span arrives
//!   with its `run_id`, `identity`, `panel` and `dry_run` attributes.
//! - Carry the W3C trace context onto every panel request.
//!
//! Does NOT handle:
//! - Metrics (see `metrics` and `metrics_exporter`).
//!
//! Invariants:
//! - Logs never go to stdout; stdout carries command output only.
//! - Without an OTLP endpoint no exporter is built and the guard is inert.

use std::collections::HashMap;
use std::time::Duration;

use opentelemetry::KeyValue;
use opentelemetry::propagation::TextMapPropagator;
use opentelemetry::trace::TracerProvider;
use opentelemetry_sdk::Resource;
use opentelemetry_sdk::propagation::TraceContextPropagator;
use opentelemetry_sdk::trace::{BatchSpanProcessor, SdkTracerProvider};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Service name reported when none is configured.
pub const DEFAULT_SERVICE_NAME: &str = "ptero-cli";

const TRACER_NAME: &str = "ptero-cleanup";
const EXPORT_TIMEOUT: Duration = Duration::from_secs(5);

/// Where logs and spans go.
#[derive(Debug, Clone, Default)]
pub struct TracingConfig {
    otlp_endpoint: Option<String>,
    service_name: Option<String>,
}

impl TracingConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Export spans to this collector (e.g. `http://localhost:4317`).
    pub fn with_otlp_endpoint(mut self, endpoint: Option<String>) -> Self {
        self.otlp_endpoint = endpoint.filter(|e| !e.trim().is_empty());
        self
    }

    /// Override the reported service name.
    pub fn with_service_name(mut self, name: Option<String>) -> Self {
        self.service_name = name.filter(|n| !n.trim().is_empty());
        self
    }

    /// The service name spans are attributed to.
    pub fn service_name(&self) -> &str {
        self.service_name.as_deref().unwrap_or(DEFAULT_SERVICE_NAME)
    }

    /// Whether spans will be exported.
    pub fn exports_spans(&self) -> bool {
        self.otlp_endpoint.is_some()
    }

    /// Install the global subscriber.
    ///
    /// # Errors
    /// Returns [`TracingError::InitError`] if the OTLP exporter cannot be built.
    pub fn init(&self) -> Result<TracingGuard, TracingError> {
        let provider = self
            .otlp_endpoint
            .as_deref()
            .map(|endpoint| self.tracer_provider(endpoint))
            .transpose()?;

        let otel_layer = provider
            .as_ref()
            .map(|p| tracing_opentelemetry::layer().with_tracer(p.tracer(TRACER_NAME)));

        tracing_subscriber::registry()
            .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
            .with(otel_layer)
            .with(fmt::layer().with_writer(std::io::stderr))
            .init();

        Ok(TracingGuard { provider })
    }

    fn resource(&self) -> Resource {
        Resource::builder()
            .with_attributes([
                KeyValue::new("service.name", self.service_name().to_string()),
                KeyValue::new("service.namespace", "ptero-cleanup"),
                KeyValue::new("service.version", env!("CARGO_PKG_VERSION")),
            ])
            .build()
    }

    fn tracer_provider(&self, endpoint: &str) -> Result<SdkTracerProvider, TracingError> {
        use opentelemetry_otlp::{Protocol, WithExportConfig};

        let exporter = opentelemetry_otlp::SpanExporter::builder()
            .with_tonic()
            .with_endpoint(endpoint)
            .with_timeout(EXPORT_TIMEOUT)
            .with_protocol(Protocol::Grpc)
            .build()
            .map_err(|e| TracingError::InitError(e.to_string()))?;

        Ok(SdkTracerProvider::builder()
            .with_span_processor(BatchSpanProcessor::builder(exporter).build())
            .with_resource(self.resource())
            .build())
    }
}

/// Keeps the exporter alive; call [`TracingGuard::shutdown`] before exit to flush spans.
pub struct TracingGuard {
    provider: Option<SdkTracerProvider>,
}

impl TracingGuard {
    /// Flush pending spans and stop the exporter.
    pub fn shutdown(&self) {
        if let Some(provider) = &self.provider
            && let Err(e) = provider.shutdown()
        {
            eprintln!("Failed to flush traces: {}", e);
        }
    }
}

/// Errors that can occur during tracing initialization.
#[derive(Debug, thiserror::Error)]
pub enum TracingError {
    #[error("Failed to initialize OpenTelemetry: {0}")]
    InitError(String),
}

/// Add the current span's `traceparent` to a panel request.
pub fn inject_trace_context(builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
    let mut headers = HashMap::new();
    TraceContextPropagator::new().inject_context(&opentelemetry::Context::current(), &mut headers);

    headers
        .into_iter()
        .fold(builder, |builder, (key, value)| builder.header(key, value))
}
