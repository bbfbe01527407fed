//! Process-wide logging setup for native shopfront binaries.

/// Initialize tracing/logging with the default filter.
///
/// Safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    tracing::init(tracing::DEFAULT_FILTER);
}

/// Tracing subscriber configuration (filters, JSON output).
pub mod tracing;
