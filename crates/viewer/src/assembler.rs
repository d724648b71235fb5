use std::{future::Future, sync::Arc, time::Duration};

use futures::pin_mut;
use tokio::select;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};
use types::{Order, OrderDetails};

use crate::{
    CachedRecord, OrderViewModel, RecordCache, RecordKey, RecordKind, RecordSource, ViewerError,
};

/// Fetches both records of an order concurrently and merges them into an
/// [`OrderViewModel`].
pub struct OrderViewAssembler<S> {
    source: S,
    cache: Option<Arc<dyn RecordCache>>,
    timeout: Option<Duration>,
}

impl<S: RecordSource> OrderViewAssembler<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            cache: None,
            timeout: None,
        }
    }

    pub fn with_cache(mut self, cache: Arc<dyn RecordCache>) -> Self {
        self.cache = Some(cache);
        self
    }

    /// Bounds how long each record fetch may take. Without it a hung backend
    /// suspends the assembly indefinitely.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Resolves only once both records are available. An order record failure
    /// is returned as soon as it happens; a details failure only once the order
    /// record has succeeded, so the order record's error always wins.
    pub async fn assemble(&self, hash: &str) -> Result<OrderViewModel, ViewerError> {
        if hash.is_empty() {
            return Err(ViewerError::InvalidHash);
        }

        let order = self.order(hash);
        let details = self.order_details(hash);
        pin_mut!(order, details);

        let (order, details) = select! {
            order = &mut order => (order?, details.await?),
            details_result = &mut details => match details_result {
                Ok(details) => (order.await?, details),
                Err(err) => {
                    order.await?;
                    return Err(err);
                }
            },
        };

        if order.hash != hash {
            warn!("Requested order {hash} but the backend returned {}", order.hash);
        }

        info!("Assembled order {hash}");

        Ok(OrderViewModel::new(order, details))
    }

    /// Same as [`Self::assemble`], but gives up as soon as `token` is
    /// cancelled, dropping any in-flight request.
    pub async fn assemble_until(
        &self,
        hash: &str,
        token: &CancellationToken,
    ) -> Result<OrderViewModel, ViewerError> {
        select! {
            biased;

            _ = token.cancelled() => {
                debug!("Assembly of order {hash} cancelled");
                Err(ViewerError::Cancelled)
            }

            view = self.assemble(hash) => view,
        }
    }

    async fn order(&self, hash: &str) -> Result<Order, ViewerError> {
        let key = RecordKey::new(RecordKind::Order, hash);

        if let Some(CachedRecord::Order(order)) = self.cached(&key) {
            return Ok(order);
        }

        let order = self
            .timed(RecordKind::Order, self.source.order(hash))
            .await?;
        self.store(key, CachedRecord::Order(order.clone()));

        Ok(order)
    }

    async fn order_details(&self, hash: &str) -> Result<OrderDetails, ViewerError> {
        let key = RecordKey::new(RecordKind::Details, hash);

        if let Some(CachedRecord::Details(details)) = self.cached(&key) {
            return Ok(details);
        }

        let details = self
            .timed(RecordKind::Details, self.source.order_details(hash))
            .await?;
        self.store(key, CachedRecord::Details(details.clone()));

        Ok(details)
    }

    async fn timed<T>(
        &self,
        record: RecordKind,
        fetch: impl Future<Output = Result<T, ViewerError>>,
    ) -> Result<T, ViewerError> {
        match self.timeout {
            Some(timeout) => tokio::time::timeout(timeout, fetch)
                .await
                .map_err(|_| ViewerError::Timeout { record })?,
            None => fetch.await,
        }
    }

    fn cached(&self, key: &RecordKey) -> Option<CachedRecord> {
        let record = self.cache.as_ref()?.get(key);

        if record.is_some() {
            debug!("Using cached {} for {}", key.kind, key.hash);
        }

        record
    }

    fn store(&self, key: RecordKey, record: CachedRecord) {
        if let Some(cache) = &self.cache {
            cache.insert(key, record);
        }
    }
}
