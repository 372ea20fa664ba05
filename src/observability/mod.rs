//! Tracing with file-based OTLP export.
//!
//! ```text
//! tracing macros → tracing-opentelemetry → OpenTelemetry SDK → FileSpanExporter → JSON lines
//! ```
//!
//! Spans land in `custom-board-otlp.json` inside the data directory
//! (`~/.local/share/zellij/custom-board` by default), one OTLP document per
//! line. The file rotates at 5 MB and keeps three numbered backups.
//!
//! # Modules
//!
//! - [`init`]: Subscriber setup and level resolution
//! - [`tracer`]: Tracer provider with the file exporter
//! - [`span_formatter`]: OTLP JSON encoding
//! - [`file_writer`]: Rotating trace file

mod file_writer;
mod init;
mod span_formatter;
mod tracer;

pub use init::init_tracing;

/// `service.name` resource attribute and instrumentation scope.
pub const SERVICE_NAME: &str = "CustomBoard";

/// Trace file name inside the data directory.
pub const TRACE_FILE: &str = "custom-board-otlp.json";
