use async_trait::async_trait;
use serde::de::{DeserializeOwned, Error as _};
use serde_json::Value;
use tracing::debug;
use types::{Order, OrderDetails};

use crate::{RecordKind, ViewerError};

pub const DEFAULT_BASE_URL: &str = "http://localhost:3000/data";

/// Backend holding the two records of every order, keyed by order hash.
#[async_trait]
pub trait RecordSource: Send + Sync {
    async fn order(&self, hash: &str) -> Result<Order, ViewerError>;

    async fn order_details(&self, hash: &str) -> Result<OrderDetails, ViewerError>;
}

/// Reads the records from the static JSON layout written by the indexer:
/// `{base_url}/orders/{hash}/data.json` and `{base_url}/orders/{hash}/details.json`.
#[derive(Debug, Clone)]
pub struct HttpRecordSource {
    base_url: String,
    client: reqwest::Client,
}

impl HttpRecordSource {
    pub fn new(base_url: &str) -> Self {
        Self::with_client(base_url, reqwest::Client::new())
    }

    pub fn with_client(base_url: &str, client: reqwest::Client) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        }
    }

    pub fn record_url(&self, record: RecordKind, hash: &str) -> String {
        format!("{}/orders/{}/{}", self.base_url, hash, record.file_name())
    }

    async fn fetch_record<T: DeserializeOwned>(
        &self,
        record: RecordKind,
        hash: &str,
    ) -> Result<T, ViewerError> {
        if hash.is_empty() {
            return Err(ViewerError::InvalidHash);
        }

        let url = self.record_url(record, hash);
        debug!("Fetching {record} from {url}");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|err| ViewerError::network(record, err))?;

        let body = response
            .bytes()
            .await
            .map_err(|err| ViewerError::network(record, err))?;

        decode_record(record, &body)
    }
}

#[async_trait]
impl RecordSource for HttpRecordSource {
    async fn order(&self, hash: &str) -> Result<Order, ViewerError> {
        self.fetch_record(RecordKind::Order, hash).await
    }

    async fn order_details(&self, hash: &str) -> Result<OrderDetails, ViewerError> {
        self.fetch_record(RecordKind::Details, hash).await
    }
}

/// Parses a record body, checking the fields the amount derivation relies on
/// before decoding it into its typed form.
pub fn decode_record<T: DeserializeOwned>(
    record: RecordKind,
    body: &[u8],
) -> Result<T, ViewerError> {
    let value: Value =
        serde_json::from_slice(body).map_err(|source| ViewerError::Parse { record, source })?;

    if !value.is_object() {
        return Err(ViewerError::Parse {
            record,
            source: serde_json::Error::custom("expected a JSON object"),
        });
    }

    if record == RecordKind::Order {
        check_asset(&value, "input")?;
        check_asset(&value, "output")?;
    }

    serde_json::from_value(value).map_err(|source| ViewerError::Parse { record, source })
}

fn check_asset(order: &Value, side: &str) -> Result<(), ViewerError> {
    let incomplete = |field: String, problem| ViewerError::IncompleteData {
        record: RecordKind::Order,
        field,
        problem,
    };

    let asset = order
        .get(side)
        .ok_or_else(|| incomplete(side.to_string(), "is missing"))?;

    for field in ["startAmount", "price"] {
        match asset.get(field) {
            None | Some(Value::Null) => {
                return Err(incomplete(format!("{side}.{field}"), "is missing"))
            }
            Some(v) if !v.is_number() => {
                return Err(incomplete(format!("{side}.{field}"), "is not a number"))
            }
            _ => {}
        }
    }

    if asset["price"].as_f64().is_some_and(|p| p < 0.0) {
        return Err(incomplete(format!("{side}.price"), "is negative"));
    }

    Ok(())
}
