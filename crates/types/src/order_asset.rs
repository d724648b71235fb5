use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderAsset {
    pub start_amount: f64,
    pub end_amount: f64,
    #[serde(default)]
    pub settled_amount: Option<f64>,
    pub symbol: String,
    pub price: f64,
}

/// Display amount of an [`OrderAsset`] and its value in USD.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedAmount {
    pub amount: f64,
    pub usd_value: f64,
}

impl OrderAsset {
    /// Picks the settled amount once the order has been filled, the start
    /// amount otherwise, and prices it. `end_amount` is never used here.
    pub fn resolve(&self) -> ResolvedAmount {
        debug_assert!(
            self.price.is_finite() && self.price >= 0.0,
            "price must be finite and non-negative, got {}",
            self.price
        );

        let amount = self.settled_amount.unwrap_or(self.start_amount);

        ResolvedAmount {
            amount,
            usd_value: amount * self.price,
        }
    }
}
