use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Wholesale enquiry captured by the storefront's bulk-order form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BulkOrder {
    #[serde(alias = "_id")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    pub phone: Option<String>,
    pub product: Option<String>,
    #[serde(default)]
    pub quantity: u64,
    #[serde(default)]
    pub message: String,
    pub status: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
}
