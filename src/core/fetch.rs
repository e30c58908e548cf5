use crate::domain::model::FetchResult;
use crate::domain::ports::DataSource;
use crate::utils::error::Result;
use async_trait::async_trait;
use futures::future::try_join_all;
use std::time::Duration;

pub const DEFAULT_FETCH_DELAY: Duration = Duration::from_millis(100);

/// Pretends to fetch a URL: waits a fixed delay and reports success.
#[derive(Debug, Clone)]
pub struct SimulatedSource {
    delay: Duration,
}

impl SimulatedSource {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

impl Default for SimulatedSource {
    fn default() -> Self {
        Self::new(DEFAULT_FETCH_DELAY)
    }
}

#[async_trait]
impl DataSource for SimulatedSource {
    async fn fetch(&self, url: &str) -> Result<FetchResult> {
        tracing::debug!("Fetching {}", url);
        tokio::time::sleep(self.delay).await;
        Ok(FetchResult::success(url))
    }
}

/// Fetches every URL concurrently and returns the results in input order.
///
/// Stops at the first error and returns it.
pub async fn fetch_all<D: DataSource + ?Sized>(
    source: &D,
    urls: &[String],
) -> Result<Vec<FetchResult>> {
    tracing::debug!("Gathering {} fetches", urls.len());
    try_join_all(urls.iter().map(|url| source.fetch(url))).await
}
