//! Structured request logging with correlation tracking
//!
//! Every handled request gets a correlation id that is also carried in the
//! caller's [`Accountability`](crate::icons::Accountability), so log lines
//! from the registry and the host client can be tied back to the request.

use log::{error, info, warn};
use serde_json::{Value, json};
use std::time::{Duration, Instant};

/// Logger for HTTP requests handled by the icon service
#[derive(Debug, Clone)]
pub struct RequestLogger {
    request_logging: bool,
}

/// Context for a single request
#[derive(Debug, Clone)]
pub struct RequestContext {
    /// Unique correlation ID for this request
    pub correlation_id: String,
    /// Route name, e.g. `list` or `by-value`
    pub route: String,
    /// Start time for performance tracking
    pub start_time: Instant,
}

impl RequestContext {
    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }
}

impl RequestLogger {
    pub fn new(request_logging: bool) -> Self {
        Self { request_logging }
    }

    /// Start tracking a new request
    pub fn start_request(&self, route: &str) -> RequestContext {
        let context = RequestContext {
            correlation_id: uuid::Uuid::new_v4().to_string(),
            route: route.to_string(),
            start_time: Instant::now(),
        };

        if self.request_logging {
            let log_data = json!({
                "event": "request_started",
                "correlation_id": context.correlation_id,
                "route": context.route,
                "timestamp": chrono::Utc::now().to_rfc3339()
            });
            info!("Request Started: {}", log_data);
        }

        context
    }

    /// Complete a request and log its outcome
    pub fn complete_request(&self, context: &RequestContext, status_code: u16, details: Value) {
        let log_data = json!({
            "event": "request_completed",
            "correlation_id": context.correlation_id,
            "route": context.route,
            "status_code": status_code,
            "duration_ms": context.elapsed().as_millis(),
            "details": details,
            "timestamp": chrono::Utc::now().to_rfc3339()
        });

        // Failures are always logged, successes only when enabled
        if status_code >= 500 {
            error!("Request Failed: {}", log_data);
        } else if status_code >= 400 {
            warn!("Request Rejected: {}", log_data);
        } else if self.request_logging {
            info!("Request Completed: {}", log_data);
        }
    }
}

impl Default for RequestLogger {
    fn default() -> Self {
        Self::new(true)
    }
}
