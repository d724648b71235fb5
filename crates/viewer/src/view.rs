use std::fmt;

use serde::Serialize;
use types::{Order, OrderAsset, OrderDetails};

const TITLE_WIDTH: usize = 20;

/// Both records of an order merged together with the amounts derived from
/// them, ready to be rendered.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderViewModel {
    pub order: Order,
    pub details: OrderDetails,
    pub from_amount: f64,
    pub from_usd_value: f64,
    pub to_amount: f64,
    pub to_usd_value: f64,
}

impl OrderViewModel {
    pub fn new(order: Order, details: OrderDetails) -> Self {
        let from = order.input.resolve();
        let to = order.output.resolve();

        Self {
            from_amount: from.amount,
            from_usd_value: from.usd_value,
            to_amount: to.amount,
            to_usd_value: to.usd_value,
            order,
            details,
        }
    }

    pub fn summary(&self) -> String {
        format!(
            "From {} {} (${:.2}) to {} {} (${:.2})",
            self.from_amount,
            self.order.input.symbol,
            self.from_usd_value,
            self.to_amount,
            self.order.output.symbol,
            self.to_usd_value
        )
    }

    pub fn fields(&self) -> Vec<Field> {
        let order = &self.order;
        let details = &self.details;

        let mut fields = vec![
            Field::new("Created at", order.created_at),
            Field::new("Decay start", details.decay_start_time),
            Field::new("Decay end", details.decay_end_time),
            Field::new("Decay duration", format!("{}s", details.decay_duration())),
            Field::new("Deadline", details.deadline),
            Field::new("Type", order.ty),
            Field::new("Status", order.status),
            Field::new("Swapper", &details.swapper),
            Field::new("Recipient", &order.recipient),
            Field::new("Signature", &order.signature),
        ];

        if details.has_exclusive_filler() {
            fields.push(Field::new("Exclusive filler", &details.exclusive_filler));
        } else {
            fields.push(Field::new("Exclusive filler", "None"));
        }

        fields.push(Field::new("Reactor", &details.reactor));

        if let Some(fee) = &order.fee {
            fields.push(Field::new("Fee", asset_content(fee)));
        }

        if let Some(tx) = &order.tx {
            fields.push(Field::new("Settlement tx", tx));
        }

        fields
    }
}

impl fmt::Display for OrderViewModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.order.hash)?;
        writeln!(f, "{}", self.summary())?;
        writeln!(f)?;

        for field in self.fields() {
            writeln!(f, "{field}")?;
        }

        Ok(())
    }
}

fn asset_content(asset: &OrderAsset) -> String {
    let resolved = asset.resolve();

    format!(
        "{} {} (${:.2})",
        resolved.amount, asset.symbol, resolved.usd_value
    )
}

/// A titled line of the rendered order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub title: &'static str,
    pub content: String,
}

impl Field {
    pub fn new(title: &'static str, content: impl fmt::Display) -> Self {
        Self {
            title,
            content: content.to_string(),
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:<width$}{}", self.title, self.content, width = TITLE_WIDTH)
    }
}
