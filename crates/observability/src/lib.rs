//! Tracing/logging setup shared by the job board binaries.

/// Initialize process-wide tracing.
///
/// Safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    tracing::init(tracing::LogFormat::Json);
}

/// Initialize tracing with human-readable output (interactive tools).
pub fn init_pretty() {
    tracing::init(tracing::LogFormat::Pretty);
}

/// Subscriber configuration (filters, formats).
pub mod tracing;
