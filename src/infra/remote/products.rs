use async_trait::async_trait;
use serde_json::json;

use crate::{
    application::repos::{NewProduct, ProductPatch, ProductsRepo, RepoError},
    domain::entities::ProductRecord,
};

use super::{RemoteRepositories, eq, map_remote_error, utc_now_string};

const TABLE: &str = "productos";

#[async_trait]
impl ProductsRepo for RemoteRepositories {
    async fn list(&self) -> Result<Vec<ProductRecord>, RepoError> {
        let query = [
            ("select", "*".to_string()),
            ("activo", eq("true")),
            ("order", "created_at.desc".to_string()),
        ];
        self.client()
            .select(TABLE, &query)
            .await
            .map_err(map_remote_error)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<ProductRecord>, RepoError> {
        let query = [
            ("select", "*".to_string()),
            ("id", eq(id)),
            ("limit", "1".to_string()),
        ];
        let mut rows: Vec<ProductRecord> = self
            .client()
            .select(TABLE, &query)
            .await
            .map_err(map_remote_error)?;
        Ok(if rows.is_empty() {
            None
        } else {
            Some(rows.swap_remove(0))
        })
    }

    async fn create(&self, draft: NewProduct) -> Result<ProductRecord, RepoError> {
        let row = json!({
            "nombre": draft.nombre,
            "descripcion": draft.descripcion,
            "precio": draft.precio,
            "categoria": draft.categoria.as_str(),
            "imagen_url": draft.imagen_url,
            "badge": draft.badge,
            "disponible": draft.disponible,
            "destacado": draft.destacado,
            "activo": true,
            "created_at": utc_now_string()?,
        });
        self.client()
            .insert(TABLE, row)
            .await
            .map_err(map_remote_error)
    }

    async fn update(&self, id: i64, patch: ProductPatch) -> Result<ProductRecord, RepoError> {
        let mut body = serde_json::to_value(&patch)
            .map_err(|err| RepoError::Decode(err.to_string()))?;
        body["updated_at"] = json!(utc_now_string()?);

        let mut rows: Vec<ProductRecord> = self
            .client()
            .update(TABLE, &[("id", eq(id))], &body)
            .await
            .map_err(map_remote_error)?;
        if rows.is_empty() {
            return Err(RepoError::NotFound);
        }
        Ok(rows.swap_remove(0))
    }

    async fn soft_delete(&self, id: i64) -> Result<(), RepoError> {
        let body = json!({
            "activo": false,
            "updated_at": utc_now_string()?,
        });
        let rows: Vec<ProductRecord> = self
            .client()
            .update(TABLE, &[("id", eq(id))], &body)
            .await
            .map_err(map_remote_error)?;
        if rows.is_empty() {
            return Err(RepoError::NotFound);
        }
        Ok(())
    }
}
