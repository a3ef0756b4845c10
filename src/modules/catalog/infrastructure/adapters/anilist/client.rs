//! AniList catalog client
//!
//! Builds the GraphQL request for each operation, sends it through a
//! [`GraphqlTransport`], retries throttled attempts with exponential backoff and
//! decodes the payload into the catalog's view types.

use chrono::{Local, NaiveDate};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::collections::BTreeSet;
use std::sync::Arc;
use tokio::time::sleep;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

use super::{mapper::AniListMapper, models::*, queries::*};
use crate::modules::catalog::domain::{
    MediaDetail, MediaFilter, MediaPage, MediaStatus, SeasonCursor,
};
use crate::modules::catalog::infrastructure::http_client::{
    is_rate_limit_message, is_rate_limit_status, GraphqlRequest, GraphqlTransport, RawResponse,
    ReqwestTransport, RetryPolicy,
};
use crate::shared::config::CatalogConfig;
use crate::shared::errors::{AppResult, CatalogError};
use crate::shared::utils::TimedOperation;

/// Sort applied to the upcoming-season listing
pub const UPCOMING_SORT: &str = "POPULARITY_DESC";
pub const UPCOMING_PER_PAGE: u32 = 20;

/// Outcome of a single request that did not fail outright
enum Attempt {
    Success(Value),
    RateLimited(String),
}

/// Read-only client for the AniList catalog.
///
/// Cloning is cheap and clones share the HTTP connection pool. The client
/// keeps no per-call state, so concurrent calls never interfere; each call
/// owns its own retry counter and delay.
#[derive(Clone)]
pub struct CatalogClient {
    transport: Arc<dyn GraphqlTransport>,
    retry_policy: RetryPolicy,
    mapper: AniListMapper,
    cancellation: CancellationToken,
}

impl CatalogClient {
    /// Client talking to `config.endpoint` over HTTP
    pub fn new(config: &CatalogConfig) -> AppResult<Self> {
        let transport = ReqwestTransport::from_config(config)?;
        Ok(Self::with_transport(
            Arc::new(transport),
            config.retry_policy.clone(),
        ))
    }

    pub fn with_transport(transport: Arc<dyn GraphqlTransport>, retry_policy: RetryPolicy) -> Self {
        Self {
            transport,
            retry_policy,
            mapper: AniListMapper::new(),
            cancellation: CancellationToken::new(),
        }
    }

    /// Copy of this client whose calls give up with [`CatalogError::Cancelled`]
    /// once `token` is cancelled, e.g. when the view that asked navigates away.
    pub fn with_cancellation(&self, token: CancellationToken) -> Self {
        Self {
            cancellation: token,
            ..self.clone()
        }
    }

    pub fn retry_policy(&self) -> &RetryPolicy {
        &self.retry_policy
    }

    /// One page of anime matching `filter`
    pub async fn list_media(&self, filter: &MediaFilter) -> AppResult<MediaPage> {
        let variables = media_list_variables(filter);
        let data: PageData = self
            .execute("list_media", MEDIA_LIST_QUERY, Some(variables))
            .await?;

        let page = self.mapper.to_page(data.page);
        if !page.page_info.is_consistent() {
            log::debug!("Catalog: inconsistent page info {:?}", page.page_info);
        }
        Ok(page)
    }

    /// Full detail for one anime; `None` when the catalog has no such entry
    pub async fn get_media_by_id(&self, id: i32) -> AppResult<Option<MediaDetail>> {
        let data: MediaData = self
            .execute(
                "get_media_by_id",
                MEDIA_DETAIL_QUERY,
                Some(media_detail_variables(id)),
            )
            .await?;

        match data.media {
            Some(media) => Ok(Some(self.mapper.to_detail(media))),
            None => {
                log::info!("Catalog: No anime found for ID '{}'", id);
                Ok(None)
            }
        }
    }

    /// Every genre known to the catalog
    pub async fn list_genres(&self) -> AppResult<BTreeSet<String>> {
        let data: GenreCollectionData = self
            .execute("list_genres", GENRE_COLLECTION_QUERY, None)
            .await?;
        Ok(data.genres.into_iter().collect())
    }

    /// Most popular unreleased anime of the season after the current one
    pub async fn list_upcoming(&self) -> AppResult<MediaPage> {
        self.list_upcoming_at(Local::now().date_naive()).await
    }

    /// [`list_upcoming`](Self::list_upcoming) as seen on `today`
    pub async fn list_upcoming_at(&self, today: NaiveDate) -> AppResult<MediaPage> {
        self.list_media(&Self::upcoming_filter(today)).await
    }

    pub fn upcoming_filter(today: NaiveDate) -> MediaFilter {
        let next = SeasonCursor::upcoming(&today);
        MediaFilter::new()
            .with_season(next.season)
            .with_season_year(next.year)
            .with_status(MediaStatus::NotYetReleased)
            .with_sort(UPCOMING_SORT)
            .with_per_page(UPCOMING_PER_PAGE)
    }

    /// Run one operation end to end and decode its `data` object
    async fn execute<T>(&self, operation: &str, query: &str, variables: Option<Value>) -> AppResult<T>
    where
        T: DeserializeOwned,
    {
        let request = GraphqlRequest::new(query, variables);
        let timer = TimedOperation::new(operation);

        let result = self
            .execute_with_retry(operation, &request)
            .await
            .and_then(|data| {
                serde_json::from_value(data).map_err(|e| {
                    CatalogError::Upstream(format!("Unexpected {} payload: {}", operation, e))
                })
            });

        match &result {
            Ok(_) => {
                timer.finish();
            }
            Err(CatalogError::Cancelled) => {
                log::info!("Catalog: {} cancelled by caller", operation);
            }
            Err(e) => {
                timer.fail(e);
            }
        }
        result
    }

    /// Send `request` until it is not throttled, the retry budget is spent or
    /// the caller cancels.
    async fn execute_with_retry(&self, operation: &str, request: &GraphqlRequest) -> AppResult<Value> {
        let mut delay = self.retry_policy.initial_delay;
        let mut remaining = self.retry_policy.max_retries;
        let mut attempts: u32 = 0;

        loop {
            if self.cancellation.is_cancelled() {
                return Err(CatalogError::Cancelled);
            }
            attempts += 1;

            match self.attempt(request).await? {
                Attempt::Success(data) => {
                    if attempts > 1 {
                        debug!(
                            "{} succeeded on attempt {} after {} retries",
                            operation,
                            attempts,
                            attempts - 1
                        );
                    }
                    return Ok(data);
                }
                Attempt::RateLimited(reason) if remaining == 0 => {
                    warn!(
                        "{} still rate limited on attempt {} ({}), giving up",
                        operation, attempts, reason
                    );
                    return Err(CatalogError::RateLimitExhausted { attempts, reason });
                }
                Attempt::RateLimited(reason) => {
                    warn!(
                        "{} rate limited on attempt {}/{} ({}), retrying in {:?}",
                        operation,
                        attempts,
                        self.retry_policy.max_attempts(),
                        reason,
                        delay
                    );

                    tokio::select! {
                        biased;
                        _ = self.cancellation.cancelled() => return Err(CatalogError::Cancelled),
                        _ = sleep(delay) => {}
                    }

                    delay = self.retry_policy.next_delay(delay);
                    remaining -= 1;
                }
            }
        }
    }

    /// One request. Transport failures and non-throttling GraphQL errors are
    /// returned as `Err`; throttling is reported so the caller can back off.
    async fn attempt(&self, request: &GraphqlRequest) -> AppResult<Attempt> {
        let response = tokio::select! {
            biased;
            _ = self.cancellation.cancelled() => return Err(CatalogError::Cancelled),
            response = self.transport.send(request) => response?,
        };

        Self::classify(response)
    }

    fn classify(response: RawResponse) -> AppResult<Attempt> {
        let RawResponse { status, body } = response;

        if is_rate_limit_status(status) {
            return Ok(Attempt::RateLimited(format!("HTTP {}", status)));
        }

        let envelope: AniListResponse = serde_json::from_str(&body).map_err(|e| {
            CatalogError::Upstream(format!(
                "Invalid catalog response (HTTP {}): {}",
                status.as_u16(),
                e
            ))
        })?;

        if let Some(errors) = envelope.errors.filter(|errors| !errors.is_empty()) {
            if let Some(throttled) = errors.iter().find(|e| is_rate_limit_message(&e.message)) {
                return Ok(Attempt::RateLimited(throttled.message.clone()));
            }

            let messages: Vec<String> = errors.into_iter().map(|e| e.message).collect();
            return Err(CatalogError::Upstream(messages.join("; ")));
        }

        match envelope.data {
            Some(data) if !data.is_null() => Ok(Attempt::Success(data)),
            _ => Err(CatalogError::Upstream(format!(
                "Catalog response contained no data (HTTP {})",
                status.as_u16()
            ))),
        }
    }
}
