use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Catalog product.
///
/// Image-bearing updates go through
/// [`update_multipart`](crate::ResourceClient::update_multipart) with
/// repeated `images[]` form keys; plain field edits are ordinary JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    #[serde(alias = "_id")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub price: Decimal,
    pub discounted_price: Option<Decimal>,
    #[serde(default)]
    pub sizes: Vec<String>,
    #[serde(default)]
    pub images: Vec<String>,
    pub category: Option<String>,
    #[serde(default)]
    pub stock: i64,
    #[serde(default)]
    pub featured: bool,
}

impl Product {
    /// The price a buyer actually pays.
    pub fn effective_price(&self) -> Decimal {
        self.discounted_price.unwrap_or(self.price)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::prelude::FromPrimitive;
    use serde_json::json;

    #[test]
    fn test_decodes_numeric_prices() {
        let product: Product = serde_json::from_value(json!({
            "_id": "p1",
            "name": "Linen Shirt",
            "price": 1499.0,
            "discountedPrice": 999.5,
            "sizes": ["S", "M"],
            "images": ["a.jpg"]
        }))
        .unwrap();

        assert_eq!(product.price, Decimal::from_f64(1499.0).unwrap());
        assert_eq!(
            product.effective_price(),
            Decimal::from_f64(999.5).unwrap()
        );
    }

    #[test]
    fn test_effective_price_without_discount() {
        let product: Product = serde_json::from_value(json!({
            "id": "p2", "price": 250.0
        }))
        .unwrap();
        assert_eq!(product.effective_price(), product.price);
        assert_eq!(product.stock, 0);
    }
}
