use serde_json::json;

use crate::client::Client;
use crate::error::ApiError;
use crate::models::{map_recipe, map_review, Recipe, RecipeUpdate, Review};

impl Client {
    /// `GET /recipe` — the authenticated user's recipes.
    pub async fn list_my_recipes(&self) -> Result<Vec<Recipe>, ApiError> {
        self.get("/recipe")
            .await?
            .list_data("No se pudieron cargar tus recetas")?
            .iter()
            .map(|r| map_recipe(r, self.config()))
            .collect()
    }

    /// `GET /recipe/comunity` — the community feed. The backend route is
    /// spelled "comunity".
    pub async fn list_public_recipes(&self) -> Result<Vec<Recipe>, ApiError> {
        self.get("/recipe/comunity")
            .await?
            .list_data("No se pudieron cargar las recetas públicas")?
            .iter()
            .map(|r| map_recipe(r, self.config()))
            .collect()
    }

    /// `GET /recipes` — every recipe visible to the caller.
    pub async fn list_all_recipes(&self) -> Result<Vec<Recipe>, ApiError> {
        self.get("/recipes")
            .await?
            .list_data("No se pudieron cargar las recetas")?
            .iter()
            .map(|r| map_recipe(r, self.config()))
            .collect()
    }

    /// `GET /recipe/{id}`.
    pub async fn get_recipe(&self, id: i64) -> Result<Recipe, ApiError> {
        let data = self
            .get(&format!("/recipe/{id}"))
            .await?
            .require_data("Receta no encontrada")?;
        map_recipe(&data, self.config())
    }

    /// `POST /recipe` — the AI generation endpoint. Takes the selected
    /// ingredient names and the budget; returns the generated recipe.
    pub async fn generate_recipe(
        &self,
        ingredients: &[String],
        budget: f64,
    ) -> Result<Recipe, ApiError> {
        let data = self
            .post_json("/recipe", &json!({"ingredients": ingredients, "budget": budget}))
            .await?
            .require_data("Error al generar la receta con IA")?;
        map_recipe(&data, self.config())
    }

    /// `PUT /recipe/{id}`.
    pub async fn update_recipe(&self, id: i64, update: &RecipeUpdate) -> Result<(), ApiError> {
        self.put_json(&format!("/recipe/{id}"), update)
            .await?
            .require_success("Error al actualizar la receta")?;
        Ok(())
    }

    /// `DELETE /recipe/{id}`.
    pub async fn delete_recipe(&self, id: i64) -> Result<(), ApiError> {
        self.delete(&format!("/recipe/{id}"))
            .await?
            .require_success("Error al eliminar la receta")?;
        Ok(())
    }

    /// `PUT /recipe/share/{id}` — toggle the community visibility flag.
    pub async fn toggle_share(&self, id: i64) -> Result<(), ApiError> {
        self.put_json(&format!("/recipe/share/{id}"), &json!({"id": id}))
            .await?
            .require_success("Error al actualizar la visibilidad")?;
        Ok(())
    }

    /// `GET /recipe/email/{id}` — send the recipe as PDF to the owner's
    /// email.
    pub async fn email_recipe(&self, id: i64) -> Result<(), ApiError> {
        self.get(&format!("/recipe/email/{id}"))
            .await?
            .require_success("Error al enviar la receta por correo")?;
        Ok(())
    }

    /// `GET /review/{recipe_id}`.
    pub async fn list_reviews(&self, recipe_id: i64) -> Result<Vec<Review>, ApiError> {
        self.get(&format!("/review/{recipe_id}"))
            .await?
            .list_data("No se pudieron cargar las reseñas")?
            .iter()
            .map(map_review)
            .collect()
    }

    /// `POST /review`. The body carries the recipe id under `id`.
    pub async fn create_review(
        &self,
        recipe_id: i64,
        rating: f64,
        comment: Option<&str>,
    ) -> Result<Review, ApiError> {
        let data = self
            .post_json(
                "/review",
                &json!({"id": recipe_id, "rating": rating, "comment": comment}),
            )
            .await?
            .require_data("Error al crear la reseña")?;
        map_review(&data)
    }

    /// `POST /recipe/upload/{id}` — multipart upload of one image file.
    pub async fn upload_image(
        &self,
        recipe_id: i64,
        file_name: &str,
        bytes: Vec<u8>,
    ) -> Result<(), ApiError> {
        let part = reqwest::multipart::Part::bytes(bytes).file_name(file_name.to_string());
        let form = reqwest::multipart::Form::new().part("image", part);
        self.post_multipart(&format!("/recipe/upload/{recipe_id}"), form)
            .await?
            .require_success("No se pudo subir la imagen")?;
        Ok(())
    }

    /// `DELETE /recipe/image/{image_id}`.
    pub async fn delete_image(&self, image_id: i64) -> Result<(), ApiError> {
        self.delete(&format!("/recipe/image/{image_id}"))
            .await?
            .require_success("No se pudo eliminar la imagen")?;
        Ok(())
    }
}
