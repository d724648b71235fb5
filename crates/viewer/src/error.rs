use std::fmt;

/// Which of the two records backing an order view a failure belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordKind {
    Order,
    Details,
}

impl RecordKind {
    /// Name of the JSON document holding this record under `orders/{hash}/`.
    pub fn file_name(&self) -> &'static str {
        match self {
            RecordKind::Order => "data.json",
            RecordKind::Details => "details.json",
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordKind::Order => f.write_str("order"),
            RecordKind::Details => f.write_str("order details"),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ViewerError {
    #[error("Failed to fetch {record}: {reason}")]
    Network {
        record: RecordKind,
        status: Option<u16>,
        reason: String,
    },

    #[error("Failed to parse {record}: {source}")]
    Parse {
        record: RecordKind,
        #[source]
        source: serde_json::Error,
    },

    #[error("Incomplete {record}: `{field}` {problem}")]
    IncompleteData {
        record: RecordKind,
        field: String,
        problem: &'static str,
    },

    #[error("Timed out waiting for {record}")]
    Timeout { record: RecordKind },

    #[error("Order view assembly was cancelled")]
    Cancelled,

    #[error("Order hash must not be empty")]
    InvalidHash,
}

impl ViewerError {
    /// The record that produced this error, if it is tied to one.
    pub fn record(&self) -> Option<RecordKind> {
        match self {
            ViewerError::Network { record, .. }
            | ViewerError::Parse { record, .. }
            | ViewerError::IncompleteData { record, .. }
            | ViewerError::Timeout { record } => Some(*record),
            ViewerError::Cancelled | ViewerError::InvalidHash => None,
        }
    }

    pub(crate) fn network(record: RecordKind, err: reqwest::Error) -> Self {
        ViewerError::Network {
            record,
            status: err.status().map(|s| s.as_u16()),
            reason: err.to_string(),
        }
    }
}
