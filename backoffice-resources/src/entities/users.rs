use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Admin-visible account record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(alias = "_id")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    pub phone: Option<String>,
    #[serde(default)]
    pub roles: Vec<String>,
    #[serde(default)]
    pub verified: bool,
    pub created_at: Option<DateTime<Utc>>,
}

impl User {
    pub fn has_role(&self, role: &str) -> bool {
        self.roles.iter().any(|r| r == role)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decodes_a_sparse_backend_record() {
        let user: User = serde_json::from_value(json!({
            "_id": "u1",
            "email": "admin@example.com",
            "createdAt": "2026-01-15T10:30:00Z"
        }))
        .unwrap();

        assert_eq!(user.id, "u1");
        assert_eq!(user.name, "");
        assert!(user.roles.is_empty());
        assert!(!user.verified);
        assert!(user.created_at.is_some());
    }

    #[test]
    fn test_role_lookup() {
        let user: User = serde_json::from_value(json!({
            "id": "u2", "roles": ["admin", "support"]
        }))
        .unwrap();
        assert!(user.has_role("admin"));
        assert!(!user.has_role("root"));
    }
}
