use std::{
    sync::atomic::{AtomicUsize, Ordering},
    time::Duration,
};

use async_trait::async_trait;
use types::{Order, OrderAsset, OrderDetails, OrderStatus, OrderType};

use crate::{RecordKind, RecordSource, ViewerError};

pub fn asset(
    start_amount: f64,
    settled_amount: Option<f64>,
    price: f64,
    symbol: &str,
) -> OrderAsset {
    OrderAsset {
        start_amount,
        end_amount: start_amount,
        settled_amount,
        symbol: symbol.to_string(),
        price,
    }
}

pub fn order(hash: &str, input: OrderAsset, output: OrderAsset) -> Order {
    Order {
        hash: hash.to_string(),
        chain_id: 1,
        created_at: 1_700_000_000,
        ty: OrderType::Dutch,
        status: OrderStatus::Open,
        input,
        output,
        fee: None,
        recipient: "0x1111111111111111111111111111111111111111".to_string(),
        signature: "0xabcdef".to_string(),
        tx: None,
    }
}

pub fn details() -> OrderDetails {
    OrderDetails {
        decay_start_time: 1_700_000_000,
        decay_end_time: 1_700_000_060,
        exclusive_filler: "0x0000000000000000000000000000000000000000".to_string(),
        exclusivity_override_bps: 0,
        reactor: "0x6000da47483062A0D734Ba3dc7576Ce6A0B645C4".to_string(),
        swapper: "0x2222222222222222222222222222222222222222".to_string(),
        nonce: "42".to_string(),
        deadline: 1_700_000_120,
        additional_validation_contract: "0x0000000000000000000000000000000000000000".to_string(),
        additional_validation_data: "0x".to_string(),
    }
}

pub fn not_found(record: RecordKind) -> ViewerError {
    ViewerError::Network {
        record,
        status: Some(404),
        reason: "404 Not Found".to_string(),
    }
}

/// In-memory [`RecordSource`] answering every call with the same canned result.
pub struct FakeSource {
    order: Result<Order, ViewerError>,
    details: Result<OrderDetails, ViewerError>,
    order_delay: Duration,
    details_delay: Duration,
    pub calls: AtomicUsize,
    pub completed: AtomicUsize,
}

impl FakeSource {
    pub fn new() -> Self {
        Self {
            order: Err(not_found(RecordKind::Order)),
            details: Err(not_found(RecordKind::Details)),
            order_delay: Duration::ZERO,
            details_delay: Duration::ZERO,
            calls: AtomicUsize::new(0),
            completed: AtomicUsize::new(0),
        }
    }

    pub fn with_order(mut self, order: Result<Order, ViewerError>) -> Self {
        self.order = order;
        self
    }

    pub fn with_details(mut self, details: Result<OrderDetails, ViewerError>) -> Self {
        self.details = details;
        self
    }

    pub fn with_delays(mut self, order_delay: Duration, details_delay: Duration) -> Self {
        self.order_delay = order_delay;
        self.details_delay = details_delay;
        self
    }

    async fn answer<T: Clone>(
        &self,
        delay: Duration,
        result: &Result<T, ViewerError>,
    ) -> Result<T, ViewerError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        tokio::time::sleep(delay).await;
        self.completed.fetch_add(1, Ordering::SeqCst);

        match result {
            Ok(record) => Ok(record.clone()),
            Err(err) => Err(duplicate(err)),
        }
    }
}

#[async_trait]
impl RecordSource for FakeSource {
    async fn order(&self, _hash: &str) -> Result<Order, ViewerError> {
        self.answer(self.order_delay, &self.order).await
    }

    async fn order_details(&self, _hash: &str) -> Result<OrderDetails, ViewerError> {
        self.answer(self.details_delay, &self.details).await
    }
}

fn duplicate(err: &ViewerError) -> ViewerError {
    match err {
        ViewerError::Network {
            record,
            status,
            reason,
        } => ViewerError::Network {
            record: *record,
            status: *status,
            reason: reason.clone(),
        },
        ViewerError::Parse { record, .. } => ViewerError::Parse {
            record: *record,
            source: serde_json::from_str::<serde_json::Value>("").unwrap_err(),
        },
        ViewerError::IncompleteData {
            record,
            field,
            problem,
        } => ViewerError::IncompleteData {
            record: *record,
            field: field.clone(),
            problem: *problem,
        },
        ViewerError::Timeout { record } => ViewerError::Timeout { record: *record },
        ViewerError::Cancelled => ViewerError::Cancelled,
        ViewerError::InvalidHash => ViewerError::InvalidHash,
    }
}
