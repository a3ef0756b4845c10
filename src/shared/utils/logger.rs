use log::{debug, error, info};
use std::sync::Once;

static INIT: Once = Once::new();

/// Initialize the logging system
/// This should be called once at application startup
pub fn init_logger() {
    INIT.call_once(|| {
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info) // Default level
            .filter_module("anidex", log::LevelFilter::Debug) // More verbose for our binary
            .filter_module("anidex_lib", log::LevelFilter::Debug)
            .filter_module("reqwest", log::LevelFilter::Warn) // Reduce HTTP noise
            .filter_module("hyper", log::LevelFilter::Warn)
            .filter_module("tokio", log::LevelFilter::Warn)
            .format_timestamp_secs()
            .format_target(false)
            .format_module_path(false)
            .init();

        info!("Logging system initialized");
    });
}

/// Structured logging helpers for common patterns
pub struct LogContext;

impl LogContext {
    /// Log catalog API calls
    pub fn api_call(operation: &str, status: &str, duration_ms: Option<u64>) {
        match duration_ms {
            Some(duration) => info!("API: {} {} in {}ms", operation, status, duration),
            None => debug!("API: Starting {}", operation),
        }
    }

    /// Log errors with context
    pub fn error_with_context(error: &dyn std::error::Error, context: &str) {
        error!("{}: {}", context, error);
    }
}

/// Helper for timing operations
pub struct TimedOperation {
    start: std::time::Instant,
    operation: String,
}

impl TimedOperation {
    pub fn new(operation: &str) -> Self {
        LogContext::api_call(operation, "started", None);
        Self {
            start: std::time::Instant::now(),
            operation: operation.to_string(),
        }
    }

    pub fn finish(self) -> u64 {
        let duration = self.start.elapsed().as_millis() as u64;
        LogContext::api_call(&self.operation, "succeeded", Some(duration));
        duration
    }

    pub fn fail(self, error: &dyn std::error::Error) -> u64 {
        let duration = self.start.elapsed().as_millis() as u64;
        LogContext::error_with_context(
            error,
            &format!("API: {} failed after {}ms", self.operation, duration),
        );
        duration
    }
}
