use business::domain::logger::Logger;
use tracing::{debug, error, info, warn};

/// Target every application-layer event is emitted under, so it can be
/// filtered with `RUST_LOG=product_catalog=debug`.
pub const LOG_TARGET: &str = "product_catalog";

/// `Logger` port backed by the global `tracing` subscriber.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn info(&self, message: &str) {
        info!(target: LOG_TARGET, "{}", message);
    }
    fn warn(&self, message: &str) {
        warn!(target: LOG_TARGET, "{}", message);
    }
    fn error(&self, message: &str) {
        error!(target: LOG_TARGET, "{}", message);
    }
    fn debug(&self, message: &str) {
        debug!(target: LOG_TARGET, "{}", message);
    }
}
