use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Inbound WhatsApp enquiry. Read-only: leads are captured by the
/// storefront and only ever browsed here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WhatsappLead {
    #[serde(alias = "_id")]
    pub id: String,
    #[serde(default)]
    pub phone: String,
    pub name: Option<String>,
    pub message: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
}
