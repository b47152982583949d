use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ApiError;
use crate::models::{as_i64, as_text};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// Body for category create/update.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryDraft {
    pub name: String,
    pub description: Option<String>,
}

pub fn map_category(value: &Value) -> Result<Category, ApiError> {
    Ok(Category {
        id: as_i64(&value["id"]).ok_or_else(|| ApiError::payload("categoría sin id"))?,
        name: as_text(&value["name"]).ok_or_else(|| ApiError::payload("categoría sin nombre"))?,
        description: as_text(&value["description"]),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_map_category() {
        let cat = map_category(&json!({"id": 3, "name": "Verduras"})).unwrap();
        assert_eq!(cat.id, 3);
        assert_eq!(cat.name, "Verduras");
        assert!(cat.description.is_none());
    }

    #[test]
    fn test_map_category_requires_name() {
        assert!(matches!(
            map_category(&json!({"id": 3})),
            Err(ApiError::Payload(_))
        ));
    }
}
