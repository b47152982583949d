//! Entity records mirrored from backend JSON.
//!
//! Each entity has an explicit mapping function from `serde_json::Value`.
//! Required fields (`id`, `name`, a review's `rating`) fail loudly as
//! [`ApiError::Payload`](crate::ApiError); every optional field has a
//! documented fallback, matching the coercions the backend's consumers have
//! always relied on (numeric strings for prices, `content` standing in for
//! `description`, `share` for `is_public`, and so on).

use serde_json::Value;

mod category;
mod product;
mod recipe;
mod review;
mod user;

pub use category::{map_category, Category, CategoryDraft};
pub use product::{map_product, Product, ProductDraft, ProductUpdate};
pub use recipe::{map_recipe, Recipe, RecipeImage, RecipeIngredient, RecipeUpdate};
pub use review::{map_review, Review};
pub use user::{map_user, User};

/// Number or numeric string.
pub(crate) fn as_f64(value: &Value) -> Option<f64> {
    value
        .as_f64()
        .or_else(|| value.as_str()?.trim().parse().ok())
}

pub(crate) fn as_i64(value: &Value) -> Option<i64> {
    value
        .as_i64()
        .or_else(|| value.as_str()?.trim().parse().ok())
}

pub(crate) fn as_u32(value: &Value) -> Option<u32> {
    as_f64(value).map(|n| if n.is_sign_negative() { 0 } else { n as u32 })
}

/// Non-empty string field.
pub(crate) fn as_text(value: &Value) -> Option<String> {
    let s = value.as_str()?;
    if s.is_empty() {
        None
    } else {
        Some(s.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_numeric_coercions() {
        assert_eq!(as_f64(&json!(2.5)), Some(2.5));
        assert_eq!(as_f64(&json!("2.50")), Some(2.5));
        assert_eq!(as_f64(&json!("x")), None);
        assert_eq!(as_i64(&json!("7")), Some(7));
        assert_eq!(as_u32(&json!(-3)), Some(0));
        assert_eq!(as_u32(&json!("45")), Some(45));
    }
}
