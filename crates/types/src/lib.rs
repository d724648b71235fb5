mod order;
mod order_asset;
mod order_details;

pub use order::{Order, OrderStatus, OrderType};
pub use order_asset::{OrderAsset, ResolvedAmount};
pub use order_details::OrderDetails;
