//! Diagnostic reporting for non-fatal resolution failures.

/// A sink for one-line diagnostics.
///
/// The platform resolver reports "could not resolve" conditions through
/// this trait rather than an ambient global logger, so callers can
/// substitute their own sink (tests typically record into a `Vec`).
pub trait DiagnosticSink {
    /// Reports a single diagnostic message.
    fn diagnostic(&self, message: &str);
}

/// Forwards diagnostics to `tracing` at WARN level.
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn diagnostic(&self, message: &str) {
        tracing::warn!(target: "horizon_paths::platform", "{}", message);
    }
}
