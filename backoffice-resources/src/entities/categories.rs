use serde::{Deserialize, Serialize};

/// Product category. `parent` is the id of the enclosing category, absent
/// at the top level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    #[serde(alias = "_id")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub image: Option<String>,
    pub parent: Option<String>,
}
