use crate::client::Client;
use crate::error::ApiError;
use crate::models::{map_category, Category, CategoryDraft};

impl Client {
    /// `GET /category`.
    pub async fn list_categories(&self) -> Result<Vec<Category>, ApiError> {
        self.get("/category")
            .await?
            .list_data("No se pudieron cargar las categorías")?
            .iter()
            .map(map_category)
            .collect()
    }

    /// `GET /category/{id}`.
    pub async fn get_category(&self, id: i64) -> Result<Category, ApiError> {
        let data = self
            .get(&format!("/category/{id}"))
            .await?
            .require_data("Categoría no encontrada")?;
        map_category(&data)
    }

    /// `GET /category/search?q=`.
    pub async fn search_categories(&self, query: &str) -> Result<Vec<Category>, ApiError> {
        self.get_query("/category/search", &[("q", query)])
            .await?
            .list_data("No se pudieron buscar las categorías")?
            .iter()
            .map(map_category)
            .collect()
    }

    /// `POST /category`.
    pub async fn create_category(&self, draft: &CategoryDraft) -> Result<Category, ApiError> {
        let data = self
            .post_json("/category", draft)
            .await?
            .require_data("Error al crear la categoría")?;
        map_category(&data)
    }

    /// `PUT /category/{id}`.
    pub async fn update_category(
        &self,
        id: i64,
        draft: &CategoryDraft,
    ) -> Result<Category, ApiError> {
        let data = self
            .put_json(&format!("/category/{id}"), draft)
            .await?
            .require_data("Error al actualizar la categoría")?;
        map_category(&data)
    }

    /// `DELETE /category/{id}`.
    pub async fn delete_category(&self, id: i64) -> Result<(), ApiError> {
        self.delete(&format!("/category/{id}"))
            .await?
            .require_success("Error al eliminar la categoría")?;
        Ok(())
    }
}
