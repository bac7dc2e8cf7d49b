use serde::{Deserialize, Serialize};

/// Customer testimonial, shown on the storefront once approved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Testimonial {
    #[serde(alias = "_id")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub message: String,
    pub rating: Option<u8>,
    pub image: Option<String>,
    #[serde(default)]
    pub approved: bool,
}
