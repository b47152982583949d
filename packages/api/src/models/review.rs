use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ApiError;
use crate::models::{as_f64, as_i64, as_text};

/// A rating with an optional comment, left on a community recipe.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    pub id: i64,
    pub rating: f64,
    pub comment: Option<String>,
    pub user_id: Option<i64>,
    pub recipe_id: Option<i64>,
    /// `user.name` when the relation is joined, flat `name` otherwise.
    pub reviewer_name: Option<String>,
    pub created_at: Option<String>,
}

impl Review {
    pub fn display_name(&self) -> &str {
        self.reviewer_name.as_deref().unwrap_or("Usuario Anónimo")
    }

    pub fn initials(&self) -> String {
        self.display_name()
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .collect()
    }
}

/// `id` and `rating` are required; everything else is optional.
pub fn map_review(value: &Value) -> Result<Review, ApiError> {
    Ok(Review {
        id: as_i64(&value["id"]).ok_or_else(|| ApiError::payload("reseña sin id"))?,
        rating: as_f64(&value["rating"])
            .ok_or_else(|| ApiError::payload("reseña sin puntuación"))?,
        comment: as_text(&value["comment"]),
        user_id: as_i64(&value["user_id"]),
        recipe_id: as_i64(&value["recipe_id"]),
        reviewer_name: as_text(&value["user"]["name"]).or_else(|| as_text(&value["name"])),
        created_at: as_text(&value["created_at"]),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_map_review_joined_user() {
        let review = map_review(&json!({
            "id": 1, "rating": 5, "comment": "Buenísima",
            "user": {"name": "Ana María"}, "created_at": "2024-05-01"
        }))
        .unwrap();
        assert_eq!(review.display_name(), "Ana María");
        assert_eq!(review.initials(), "AM");
    }

    #[test]
    fn test_map_review_flat_name_and_anonymous() {
        let review = map_review(&json!({"id": 2, "rating": 3, "name": "Luis"})).unwrap();
        assert_eq!(review.display_name(), "Luis");

        let review = map_review(&json!({"id": 3, "rating": 4})).unwrap();
        assert_eq!(review.display_name(), "Usuario Anónimo");
    }

    #[test]
    fn test_map_review_requires_rating() {
        assert!(matches!(
            map_review(&json!({"id": 2})),
            Err(ApiError::Payload(_))
        ));
    }
}
