use backoffice_forms::Address;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Lifecycle states an order moves through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    #[default]
    Pending,
    Confirmed,
    Shipped,
    Delivered,
    Cancelled,
}

/// One status transition. Immutable once appended.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusChange {
    pub status: OrderStatus,
    pub changed_at: Option<DateTime<Utc>>,
    pub note: Option<String>,
}

/// One line item on an order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    #[serde(default)]
    pub product_id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default = "default_quantity")]
    pub quantity: u32,
    #[serde(default)]
    pub price: Decimal,
    pub size: Option<String>,
}

fn default_quantity() -> u32 {
    1
}

/// A placed order with its line items and status history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    #[serde(alias = "_id")]
    pub id: String,
    #[serde(default)]
    pub items: Vec<OrderItem>,
    #[serde(default)]
    pub status: OrderStatus,
    #[serde(default)]
    pub status_history: Vec<StatusChange>,
    pub shipping_address: Option<Address>,
    #[serde(default)]
    pub total: Decimal,
    pub payment_method: Option<String>,
    pub user: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
}

impl Order {
    /// Appends a status change and makes it current. The history is
    /// append-only; earlier entries are never rewritten.
    pub fn record_status(&mut self, status: OrderStatus, at: DateTime<Utc>) {
        self.status = status;
        self.status_history.push(StatusChange {
            status,
            changed_at: Some(at),
            note: None,
        });
    }
}
