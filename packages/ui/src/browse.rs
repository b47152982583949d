//! Filtering, sorting and stats for the recipe list views.
//!
//! The views fetch a collection once and keep it as the source of truth;
//! every search/filter/sort change derives a fresh view synchronously from
//! the full list.

use std::cmp::Ordering;

use api::Recipe;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortBy {
    #[default]
    Newest,
    Rating,
    Popular,
    Time,
    Name,
}

impl SortBy {
    pub fn label(self) -> &'static str {
        match self {
            SortBy::Newest => "Más recientes",
            SortBy::Rating => "Mejor calificadas",
            SortBy::Popular => "Más populares",
            SortBy::Time => "Tiempo de preparación",
            SortBy::Name => "Nombre A-Z",
        }
    }

    pub fn from_key(key: &str) -> Self {
        match key {
            "rating" => SortBy::Rating,
            "popular" => SortBy::Popular,
            "time" => SortBy::Time,
            "name" => SortBy::Name,
            _ => SortBy::Newest,
        }
    }

    pub fn key(self) -> &'static str {
        match self {
            SortBy::Newest => "newest",
            SortBy::Rating => "rating",
            SortBy::Popular => "popular",
            SortBy::Time => "time",
            SortBy::Name => "name",
        }
    }
}

/// Filter/sort settings of a recipe list view.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecipeFilter {
    /// Case-insensitive match over name and description.
    pub search: String,
    pub difficulty: Option<String>,
    /// `Some(true)` keeps public recipes, `Some(false)` private ones.
    pub visibility: Option<bool>,
    pub sort: SortBy,
}

impl RecipeFilter {
    pub fn apply(&self, recipes: &[Recipe]) -> Vec<Recipe> {
        let needle = self.search.trim().to_lowercase();
        let mut filtered: Vec<Recipe> = recipes
            .iter()
            .filter(|r| {
                needle.is_empty()
                    || r.name.to_lowercase().contains(&needle)
                    || r.description.to_lowercase().contains(&needle)
            })
            .filter(|r| {
                self.difficulty
                    .as_ref()
                    .is_none_or(|d| &r.difficulty == d)
            })
            .filter(|r| self.visibility.is_none_or(|public| r.is_public == public))
            .cloned()
            .collect();

        match self.sort {
            SortBy::Newest => filtered.sort_by(|a, b| b.id.cmp(&a.id)),
            SortBy::Rating => filtered.sort_by(|a, b| {
                let (a, b) = (
                    a.average_rating.unwrap_or(0.0),
                    b.average_rating.unwrap_or(0.0),
                );
                b.partial_cmp(&a).unwrap_or(Ordering::Equal)
            }),
            SortBy::Popular => filtered.sort_by(|a, b| {
                b.total_ratings
                    .unwrap_or(0)
                    .cmp(&a.total_ratings.unwrap_or(0))
            }),
            SortBy::Time => filtered.sort_by(|a, b| a.preparation_time.cmp(&b.preparation_time)),
            SortBy::Name => {
                filtered.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()))
            }
        }
        filtered
    }
}

/// How many recipes are shared with the community.
pub fn public_count(recipes: &[Recipe]) -> usize {
    recipes.iter().filter(|r| r.is_public).count()
}

/// Mean of the nonzero aggregate ratings.
pub fn average_rating(recipes: &[Recipe]) -> f64 {
    let rated: Vec<f64> = recipes
        .iter()
        .filter_map(|r| r.average_rating)
        .filter(|rating| *rating > 0.0)
        .collect();
    if rated.is_empty() {
        0.0
    } else {
        rated.iter().sum::<f64>() / rated.len() as f64
    }
}

/// Recipes rated 4.5 or better.
pub fn favourite_count(recipes: &[Recipe]) -> usize {
    recipes
        .iter()
        .filter(|r| r.average_rating.is_some_and(|rating| rating >= 4.5))
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recipe(id: i64, name: &str, difficulty: &str, public: bool) -> Recipe {
        Recipe {
            id,
            name: name.into(),
            description: format!("Descripción de {name}"),
            instructions: String::new(),
            preparation_time: id as u32 * 10,
            difficulty: difficulty.into(),
            servings: 2,
            price: None,
            calories: None,
            images: Vec::new(),
            is_public: public,
            user_id: 1,
            average_rating: None,
            total_ratings: None,
            ingredients: Vec::new(),
        }
    }

    fn sample() -> Vec<Recipe> {
        let mut tortilla = recipe(1, "Tortilla", "Fácil", true);
        tortilla.average_rating = Some(4.8);
        tortilla.total_ratings = Some(12);
        let mut paella = recipe(2, "Paella", "Difícil", false);
        paella.average_rating = Some(3.5);
        paella.total_ratings = Some(30);
        let gazpacho = recipe(3, "Gazpacho", "Fácil", true);
        vec![tortilla, paella, gazpacho]
    }

    #[test]
    fn test_search_matches_name_and_description() {
        let filter = RecipeFilter {
            search: "paella".into(),
            ..Default::default()
        };
        let result = filter.apply(&sample());
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].name, "Paella");

        let filter = RecipeFilter {
            search: "descripción de gazpacho".into(),
            ..Default::default()
        };
        assert_eq!(filter.apply(&sample()).len(), 1);
    }

    #[test]
    fn test_difficulty_and_visibility_filters() {
        let filter = RecipeFilter {
            difficulty: Some("Fácil".into()),
            ..Default::default()
        };
        assert_eq!(filter.apply(&sample()).len(), 2);

        let filter = RecipeFilter {
            visibility: Some(false),
            ..Default::default()
        };
        let result = filter.apply(&sample());
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].name, "Paella");
    }

    #[test]
    fn test_sort_orders() {
        let newest = RecipeFilter::default().apply(&sample());
        assert_eq!(newest[0].id, 3);

        let filter = RecipeFilter {
            sort: SortBy::Rating,
            ..Default::default()
        };
        assert_eq!(filter.apply(&sample())[0].name, "Tortilla");

        let filter = RecipeFilter {
            sort: SortBy::Popular,
            ..Default::default()
        };
        assert_eq!(filter.apply(&sample())[0].name, "Paella");

        let filter = RecipeFilter {
            sort: SortBy::Time,
            ..Default::default()
        };
        assert_eq!(filter.apply(&sample())[0].id, 1);

        let filter = RecipeFilter {
            sort: SortBy::Name,
            ..Default::default()
        };
        assert_eq!(filter.apply(&sample())[0].name, "Gazpacho");
    }

    #[test]
    fn test_stats() {
        let recipes = sample();
        assert_eq!(public_count(&recipes), 2);
        assert_eq!(favourite_count(&recipes), 1);
        let avg = average_rating(&recipes);
        assert!((avg - 4.15).abs() < 1e-9);
    }

    #[test]
    fn test_visibility_toggle_twice_restores_public_count() {
        let mut recipes = sample();
        let before = public_count(&recipes);

        let toggle = |recipes: &mut Vec<Recipe>| {
            let mut toggled = recipes[0].clone();
            toggled.is_public = !toggled.is_public;
            crate::collection::upsert_by_id(recipes, toggled, |r| r.id);
        };

        toggle(&mut recipes);
        assert_ne!(public_count(&recipes), before);

        toggle(&mut recipes);
        assert_eq!(public_count(&recipes), before);
    }
}
