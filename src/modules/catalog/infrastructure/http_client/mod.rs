pub mod retry_policy;
pub mod transport;

pub use retry_policy::{is_rate_limit_message, is_rate_limit_status, RetryPolicy};
pub use transport::{GraphqlRequest, GraphqlTransport, RawResponse, ReqwestTransport};

#[cfg(test)]
pub use transport::MockGraphqlTransport;
