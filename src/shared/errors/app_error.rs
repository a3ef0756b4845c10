use serde::Serialize;
use thiserror::Error;

/// Failures surfaced to callers of the catalog client.
///
/// Rate limiting is the only condition the client handles itself; everything
/// else reaches the caller unchanged. An entity that does not exist upstream is
/// not an error at all: detail lookups return `Ok(None)` for that case.
#[derive(Error, Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", content = "message")]
pub enum CatalogError {
    /// The request never produced an HTTP response (DNS, connect, timeout, TLS).
    #[error("Transport error: {0}")]
    Transport(String),

    /// Still throttled after the configured number of retries.
    #[error("Rate limit exhausted after {attempts} attempts: {reason}")]
    RateLimitExhausted { attempts: u32, reason: String },

    /// Any other GraphQL error, or a payload that does not match its contract.
    #[error("Upstream error: {0}")]
    Upstream(String),

    /// The caller abandoned the call before it completed.
    #[error("Request cancelled")]
    Cancelled,
}

impl CatalogError {
    pub fn is_rate_limit_exhausted(&self) -> bool {
        matches!(self, CatalogError::RateLimitExhausted { .. })
    }
}

impl From<reqwest::Error> for CatalogError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            CatalogError::Transport(format!("Request timeout: {}", err))
        } else if err.is_connect() {
            CatalogError::Transport(format!("Failed to connect to catalog service: {}", err))
        } else {
            CatalogError::Transport(err.to_string())
        }
    }
}

impl From<serde_json::Error> for CatalogError {
    fn from(err: serde_json::Error) -> Self {
        CatalogError::Upstream(format!("Malformed catalog response: {}", err))
    }
}

// Result type alias for convenience
pub type AppResult<T> = Result<T, CatalogError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serde_json_error_becomes_upstream() {
        let err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let converted: CatalogError = err.into();
        assert!(matches!(converted, CatalogError::Upstream(msg) if msg.starts_with("Malformed")));
    }

    #[test]
    fn test_errors_serialize_with_type_tag() {
        let json = serde_json::to_value(CatalogError::Upstream("boom".into())).unwrap();
        assert_eq!(json["type"], "Upstream");
        assert_eq!(json["message"], "boom");

        let json = serde_json::to_value(CatalogError::RateLimitExhausted {
            attempts: 6,
            reason: "HTTP 429".into(),
        })
        .unwrap();
        assert_eq!(json["type"], "RateLimitExhausted");
        assert_eq!(json["message"]["attempts"], 6);
    }

    #[test]
    fn test_display_messages() {
        let err = CatalogError::RateLimitExhausted {
            attempts: 3,
            reason: "Too Many Requests".into(),
        };
        assert_eq!(
            err.to_string(),
            "Rate limit exhausted after 3 attempts: Too Many Requests"
        );
        assert!(err.is_rate_limit_exhausted());
        assert!(!CatalogError::Cancelled.is_rate_limit_exhausted());
    }
}
