pub mod adapters;
pub mod http_client;

pub use adapters::anilist::CatalogClient;
pub use http_client::{GraphqlRequest, GraphqlTransport, RawResponse, ReqwestTransport, RetryPolicy};
