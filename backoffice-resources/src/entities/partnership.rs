use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Review verdict on a partnership request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PartnershipStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
}

/// Inbound request from a prospective partner, reviewed by admins.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartnershipRequest {
    #[serde(alias = "_id")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    pub phone: Option<String>,
    pub company: Option<String>,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub status: PartnershipStatus,
    pub created_at: Option<DateTime<Utc>>,
}
