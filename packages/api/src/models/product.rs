use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ApiError;
use crate::models::{as_f64, as_i64, as_text};

/// An ingredient in the user's inventory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub price: f64,
    pub category_id: i64,
    /// Joined category name when the backend includes the relation.
    #[serde(default)]
    pub category_name: Option<String>,
}

/// Body for product creation. Serialized with the backend's snake_case keys.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductDraft {
    pub name: String,
    pub price: f64,
    pub category_id: i64,
}

/// Partial update: only present fields are sent.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductUpdate {
    pub name: Option<String>,
    pub price: Option<f64>,
    pub category_id: Option<i64>,
}

impl ProductUpdate {
    pub(crate) fn to_body(&self) -> Value {
        let mut body = serde_json::Map::new();
        if let Some(name) = &self.name {
            body.insert("name".into(), Value::from(name.clone()));
        }
        if let Some(price) = self.price {
            body.insert("price".into(), Value::from(price));
        }
        if let Some(category_id) = self.category_id {
            body.insert("category_id".into(), Value::from(category_id));
        }
        Value::Object(body)
    }
}

/// `id` and `name` are required; `price` coerces numeric strings and defaults
/// to 0, `category_id` defaults to 0, the joined name is optional.
pub fn map_product(value: &Value) -> Result<Product, ApiError> {
    Ok(Product {
        id: as_i64(&value["id"]).ok_or_else(|| ApiError::payload("producto sin id"))?,
        name: as_text(&value["name"]).ok_or_else(|| ApiError::payload("producto sin nombre"))?,
        price: as_f64(&value["price"]).unwrap_or(0.0),
        category_id: as_i64(&value["category_id"]).unwrap_or(0),
        category_name: as_text(&value["category"]["name"]),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_map_product_coerces_string_price() {
        let product = map_product(&json!({
            "id": 9, "name": "Tomate", "price": "1.75",
            "category_id": 2, "category": {"name": "Verduras"}
        }))
        .unwrap();
        assert_eq!(product.price, 1.75);
        assert_eq!(product.category_name.as_deref(), Some("Verduras"));
    }

    #[test]
    fn test_map_product_defaults() {
        let product = map_product(&json!({"id": 9, "name": "Tomate"})).unwrap();
        assert_eq!(product.price, 0.0);
        assert_eq!(product.category_id, 0);
        assert!(product.category_name.is_none());
    }

    #[test]
    fn test_update_body_only_present_fields() {
        let update = ProductUpdate {
            price: Some(2.5),
            ..Default::default()
        };
        assert_eq!(update.to_body(), json!({"price": 2.5}));
    }
}
