use crate::client::Client;
use crate::error::ApiError;
use crate::models::{map_product, Product, ProductDraft, ProductUpdate};

impl Client {
    /// `GET /product`.
    pub async fn list_products(&self) -> Result<Vec<Product>, ApiError> {
        self.get("/product")
            .await?
            .list_data("No se pudieron cargar los ingredientes")?
            .iter()
            .map(map_product)
            .collect()
    }

    /// `GET /product/{id}`.
    pub async fn get_product(&self, id: i64) -> Result<Product, ApiError> {
        let data = self
            .get(&format!("/product/{id}"))
            .await?
            .require_data("Producto no encontrado")?;
        map_product(&data)
    }

    /// `GET /product/search?q=`.
    pub async fn search_products(&self, query: &str) -> Result<Vec<Product>, ApiError> {
        self.get_query("/product/search", &[("q", query)])
            .await?
            .list_data("No se pudieron buscar los ingredientes")?
            .iter()
            .map(map_product)
            .collect()
    }

    /// `POST /product`.
    pub async fn create_product(&self, draft: &ProductDraft) -> Result<Product, ApiError> {
        let data = self
            .post_json("/product", draft)
            .await?
            .require_data("Error al crear el producto")?;
        map_product(&data)
    }

    /// `PUT /product/{id}`. Only the fields present in `update` are sent.
    pub async fn update_product(
        &self,
        id: i64,
        update: &ProductUpdate,
    ) -> Result<Product, ApiError> {
        let data = self
            .put_json(&format!("/product/{id}"), &update.to_body())
            .await?
            .require_data("Error al actualizar el producto")?;
        map_product(&data)
    }

    /// `DELETE /product/{id}`.
    pub async fn delete_product(&self, id: i64) -> Result<(), ApiError> {
        self.delete(&format!("/product/{id}"))
            .await?
            .require_success("Error al eliminar el producto")?;
        Ok(())
    }
}
