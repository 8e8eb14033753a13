use consts::{API_BASE, MATCHES_LIMIT_RANGE, MATCHES_MAX_AGE_SECS};
use futures::future::{FutureExt, LocalBoxFuture};
use reqwest::{header::CACHE_CONTROL, Url};
use thiserror::Error;

use super::types::{Match, Tier};

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Failed to build URL: {0}")]
    Url(String),
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("API {0}")]
    Status(u16),
    #[error("Failed to parse response: {0}")]
    Parse(String),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MatchQuery {
    pub tier: Tier,
    pub limit: u32,
}

impl MatchQuery {
    /// `limit` is clamped into the range the API accepts
    pub fn new(tier: Tier, limit: u32) -> Self {
        Self {
            tier,
            limit: limit.clamp(*MATCHES_LIMIT_RANGE.start(), *MATCHES_LIMIT_RANGE.end()),
        }
    }
}

/// Anything that can produce a batch of matches for a list view
pub trait MatchesSource {
    fn fetch(&self, path: &str, query: MatchQuery)
        -> LocalBoxFuture<'static, Result<Vec<Match>, FetchError>>;
}

#[derive(Clone, Debug)]
pub struct MatchesClient {
    base: Url,
    http: reqwest::Client,
}

impl Default for MatchesClient {
    fn default() -> Self {
        Self::new(API_BASE.clone())
    }
}

impl MatchesClient {
    pub fn new(base: Url) -> Self {
        Self {
            base,
            http: reqwest::Client::new(),
        }
    }

    pub fn base(&self) -> &Url {
        &self.base
    }

    pub fn matches_url(&self, path: &str, query: MatchQuery) -> Result<Url, FetchError> {
        let mut url = self
            .base
            .join(path)
            .map_err(|e| FetchError::Url(e.to_string()))?;

        // tier and limit replace whatever the path already carried
        let retained: Vec<(String, String)> = url
            .query_pairs()
            .filter(|(key, _)| key != "tier" && key != "limit")
            .map(|(key, value)| (key.into_owned(), value.into_owned()))
            .collect();

        url.query_pairs_mut()
            .clear()
            .extend_pairs(retained)
            .append_pair("tier", query.tier.as_str())
            .append_pair("limit", &query.limit.to_string());

        Ok(url)
    }

    pub async fn fetch_matches(
        &self,
        path: &str,
        query: MatchQuery,
    ) -> Result<Vec<Match>, FetchError> {
        let url = self.matches_url(path, query)?;
        log::debug!("fetching matches from {url}");

        let response = self
            .http
            .get(url)
            .header(CACHE_CONTROL, format!("max-age={MATCHES_MAX_AGE_SECS}"))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        let body = response.bytes().await?;
        serde_json::from_slice(&body).map_err(|e| FetchError::Parse(e.to_string()))
    }
}

impl MatchesSource for MatchesClient {
    fn fetch(
        &self,
        path: &str,
        query: MatchQuery,
    ) -> LocalBoxFuture<'static, Result<Vec<Match>, FetchError>> {
        let client = self.clone();
        let path = path.to_string();
        async move { client.fetch_matches(&path, query).await }.boxed_local()
    }
}
