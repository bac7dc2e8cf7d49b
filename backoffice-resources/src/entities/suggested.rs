use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Product suggestion surfaced to shoppers, curated by admins.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestedProduct {
    #[serde(alias = "_id")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    pub image: Option<String>,
    pub price: Option<Decimal>,
    pub url: Option<String>,
}
