//! Signed-in user profile

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Profile of the signed-in administrator, as returned by `GET /users/me`.
///
/// Replaced wholesale on every successful profile fetch, never patched field
/// by field. Roles are display data only; the backend is the authority on
/// what this user may actually do.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    #[serde(alias = "_id")]
    pub id: String,
    pub email: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub roles: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl UserProfile {
    pub fn has_role(&self, role: &str) -> bool {
        self.roles.iter().any(|r| r == role)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserializes_camel_case_and_mongo_id() {
        let profile: UserProfile = serde_json::from_str(
            r#"{"_id":"u1","email":"admin@example.com","name":"Admin","roles":["admin"],"createdAt":"2024-03-01T10:00:00Z"}"#,
        )
        .unwrap();

        assert_eq!(profile.id, "u1");
        assert!(profile.has_role("admin"));
        assert!(!profile.has_role("editor"));
        assert!(profile.created_at.is_some());
    }

    #[test]
    fn test_tolerates_minimal_payload() {
        let profile: UserProfile =
            serde_json::from_str(r#"{"id":"u2","email":"ops@example.com"}"#).unwrap();

        assert_eq!(profile.name, "");
        assert!(profile.roles.is_empty());
        assert_eq!(profile.country, None);
    }
}
