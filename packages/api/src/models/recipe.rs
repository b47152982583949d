use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::config::ApiConfig;
use crate::error::ApiError;
use crate::models::{as_f64, as_i64, as_text, as_u32};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeImage {
    /// Absent for images previewed locally before upload.
    pub id: Option<i64>,
    pub url: String,
}

/// One line of a recipe's ingredient list, flattened from the backend's
/// nested `product` relation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeIngredient {
    pub id: i64,
    pub product_id: i64,
    pub quantity: f64,
    pub product_name: String,
    pub product_price: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    pub id: i64,
    pub name: String,
    pub description: String,
    /// Markdown body.
    pub instructions: String,
    pub preparation_time: u32,
    pub difficulty: String,
    pub servings: u32,
    pub price: Option<f64>,
    pub calories: Option<f64>,
    pub images: Vec<RecipeImage>,
    /// Visibility flag: whether the recipe appears in the community feed.
    pub is_public: bool,
    pub user_id: i64,
    pub average_rating: Option<f64>,
    pub total_ratings: Option<u32>,
    pub ingredients: Vec<RecipeIngredient>,
}

impl Recipe {
    pub fn cover_image(&self) -> Option<&str> {
        self.images.first().map(|img| img.url.as_str())
    }
}

/// Partial update body for `PUT /recipe/{id}`. The backend calls the
/// instructions field `content`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecipeUpdate {
    pub name: String,
    pub content: String,
    pub price: Option<f64>,
    pub calories: Option<f64>,
}

/// `id` and `name` are required. Fallbacks: `description` ← `content` ← `""`;
/// `difficulty` defaults to `"Fácil"`; `preparation_time`/`servings` default
/// to 0 and coerce numeric strings; visibility is `share` (truthy) OR
/// `is_public`; aggregate rating reads `rating`/`total` with
/// `average_rating`/`total_ratings` as alternates; image URLs resolve
/// against the storage base.
pub fn map_recipe(value: &Value, config: &ApiConfig) -> Result<Recipe, ApiError> {
    let id = as_i64(&value["id"]).ok_or_else(|| ApiError::payload("receta sin id"))?;
    let name = as_text(&value["name"]).ok_or_else(|| ApiError::payload("receta sin nombre"))?;

    let images = match &value["image"] {
        Value::Array(items) => items
            .iter()
            .filter_map(|img| {
                Some(RecipeImage {
                    id: as_i64(&img["id"]),
                    url: config.resolve_image_url(&as_text(&img["url"])?),
                })
            })
            .collect(),
        _ => Vec::new(),
    };

    let ingredients = match &value["ingredients"] {
        Value::Array(items) => items
            .iter()
            .filter_map(|line| {
                Some(RecipeIngredient {
                    id: as_i64(&line["id"])?,
                    product_id: as_i64(&line["product_id"])?,
                    quantity: as_f64(&line["quantity"]).unwrap_or(1.0),
                    product_name: as_text(&line["product"]["name"]).unwrap_or_default(),
                    product_price: as_f64(&line["product"]["price"]).unwrap_or(0.0),
                })
            })
            .collect(),
        _ => Vec::new(),
    };

    let share = match &value["share"] {
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0),
        _ => false,
    };

    Ok(Recipe {
        id,
        name,
        description: as_text(&value["description"])
            .or_else(|| as_text(&value["content"]))
            .unwrap_or_default(),
        instructions: as_text(&value["instructions"]).unwrap_or_default(),
        preparation_time: as_u32(&value["preparation_time"]).unwrap_or(0),
        difficulty: as_text(&value["difficulty"]).unwrap_or_else(|| "Fácil".to_string()),
        servings: as_u32(&value["servings"]).unwrap_or(0),
        price: as_f64(&value["price"]),
        calories: as_f64(&value["calories"]),
        images,
        is_public: share || value["is_public"].as_bool().unwrap_or(false),
        user_id: as_i64(&value["user_id"]).unwrap_or(0),
        average_rating: as_f64(&value["rating"]).or_else(|| as_f64(&value["average_rating"])),
        total_ratings: as_u32(&value["total"]).or_else(|| as_u32(&value["total_ratings"])),
        ingredients,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn config() -> ApiConfig {
        ApiConfig {
            base_url: "https://api.example/api".into(),
            storage_base_url: "https://api.example".into(),
        }
    }

    #[test]
    fn test_map_recipe_fallbacks() {
        let recipe = map_recipe(
            &json!({
                "id": 12,
                "name": "Sopa de tomate",
                "content": "Una sopa sencilla",
                "preparation_time": "30",
                "share": 1,
                "rating": 4.2,
                "total": 8
            }),
            &config(),
        )
        .unwrap();

        assert_eq!(recipe.description, "Una sopa sencilla");
        assert_eq!(recipe.preparation_time, 30);
        assert_eq!(recipe.difficulty, "Fácil");
        assert!(recipe.is_public);
        assert_eq!(recipe.average_rating, Some(4.2));
        assert_eq!(recipe.total_ratings, Some(8));
        assert!(recipe.images.is_empty());
    }

    #[test]
    fn test_map_recipe_resolves_image_urls() {
        let recipe = map_recipe(
            &json!({
                "id": 1,
                "name": "Ensalada",
                "image": [
                    {"id": 7, "url": "storage/recipes/7.jpg"},
                    {"id": 8, "url": "https://cdn.example/8.jpg"}
                ]
            }),
            &config(),
        )
        .unwrap();

        assert_eq!(
            recipe.cover_image(),
            Some("https://api.example/storage/recipes/7.jpg")
        );
        assert_eq!(recipe.images[1].url, "https://cdn.example/8.jpg");
    }

    #[test]
    fn test_map_recipe_ingredients() {
        let recipe = map_recipe(
            &json!({
                "id": 1,
                "name": "Ensalada",
                "is_public": true,
                "ingredients": [{
                    "id": 5, "product_id": 9, "quantity": 2,
                    "product": {"id": 9, "name": "Tomate", "price": "1.75"}
                }]
            }),
            &config(),
        )
        .unwrap();

        assert!(recipe.is_public);
        assert_eq!(recipe.ingredients.len(), 1);
        assert_eq!(recipe.ingredients[0].product_name, "Tomate");
        assert_eq!(recipe.ingredients[0].product_price, 1.75);
    }

    #[test]
    fn test_map_recipe_requires_id_and_name() {
        assert!(matches!(
            map_recipe(&json!({"name": "x"}), &config()),
            Err(ApiError::Payload(_))
        ));
        assert!(matches!(
            map_recipe(&json!({"id": 1}), &config()),
            Err(ApiError::Payload(_))
        ));
    }
}
