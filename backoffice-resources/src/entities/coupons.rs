use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// How a coupon's `value` is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CouponKind {
    /// `value` is a percentage off the order total.
    #[default]
    Percent,
    /// `value` is a flat amount off.
    Flat,
}

/// Discount code.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Coupon {
    #[serde(alias = "_id")]
    pub id: String,
    #[serde(default)]
    pub code: String,
    #[serde(default, rename = "type")]
    pub kind: CouponKind,
    #[serde(default)]
    pub value: Decimal,
    pub expires_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub active: bool,
}

impl Coupon {
    /// Whether the coupon has passed its expiry. Coupons without one never
    /// expire.
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expires_at.is_some_and(|at| at < now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_kind_uses_the_wire_name_type() {
        let coupon: Coupon = serde_json::from_value(json!({
            "_id": "c1", "code": "SUMMER20", "type": "flat", "value": 200.0
        }))
        .unwrap();
        assert_eq!(coupon.kind, CouponKind::Flat);

        let value = serde_json::to_value(&coupon).unwrap();
        assert_eq!(value["type"], "flat");
        assert!(value.get("kind").is_none());
    }

    #[test]
    fn test_expiry() {
        let coupon: Coupon = serde_json::from_value(json!({
            "id": "c2", "code": "OLD", "expiresAt": "2025-01-01T00:00:00Z"
        }))
        .unwrap();
        assert!(coupon.is_expired("2026-01-01T00:00:00Z".parse().unwrap()));
        assert!(!coupon.is_expired("2024-06-01T00:00:00Z".parse().unwrap()));

        let evergreen: Coupon =
            serde_json::from_value(json!({ "id": "c3", "code": "KEEP" })).unwrap();
        assert!(!evergreen.is_expired(Utc::now()));
    }
}
