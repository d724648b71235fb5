use std::fmt;

use serde::{Deserialize, Serialize};

use crate::OrderAsset;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderType {
    Dutch,
    DutchLimit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OrderStatus {
    Open,
    Filled,
    Cancelled,
    Expired,
    Error,
    InsufficientFunds,
}

impl fmt::Display for OrderType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrderType::Dutch => write!(f, "Dutch"),
            OrderType::DutchLimit => write!(f, "DutchLimit"),
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let status = match self {
            OrderStatus::Open => "open",
            OrderStatus::Filled => "filled",
            OrderStatus::Cancelled => "cancelled",
            OrderStatus::Expired => "expired",
            OrderStatus::Error => "error",
            OrderStatus::InsufficientFunds => "insufficient-funds",
        };

        f.write_str(status)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub hash: String,
    pub chain_id: u64,
    pub created_at: u64,
    #[serde(rename = "type")]
    pub ty: OrderType,
    pub status: OrderStatus,
    pub input: OrderAsset,
    pub output: OrderAsset,
    #[serde(default)]
    pub fee: Option<OrderAsset>,
    pub recipient: String,
    pub signature: String,
    #[serde(default)]
    pub tx: Option<String>,
}
