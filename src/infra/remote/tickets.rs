use async_trait::async_trait;
use serde_json::json;
use uuid::Uuid;

use crate::{
    application::repos::{NewTicket, RepoError, TicketsRepo},
    domain::{entities::TicketRecord, types::TicketStatus},
};

use super::{RemoteRepositories, eq, map_remote_error, utc_now_string};

const TABLE: &str = "pqrs";

#[async_trait]
impl TicketsRepo for RemoteRepositories {
    async fn list(&self) -> Result<Vec<TicketRecord>, RepoError> {
        let query = [
            ("select", "*".to_string()),
            ("order", "created_at.desc".to_string()),
        ];
        self.client()
            .select(TABLE, &query)
            .await
            .map_err(map_remote_error)
    }

    async fn create(&self, draft: NewTicket) -> Result<TicketRecord, RepoError> {
        let row = json!({
            "nombre": draft.nombre,
            "correo": draft.correo,
            "telefono": draft.telefono,
            "tipo": draft.tipo.as_str(),
            "descripcion": draft.descripcion,
            "estado": TicketStatus::Pendiente.as_str(),
        });
        self.client()
            .insert(TABLE, row)
            .await
            .map_err(map_remote_error)
    }

    async fn update_status(
        &self,
        id: Uuid,
        estado: TicketStatus,
        respuesta: Option<String>,
    ) -> Result<TicketRecord, RepoError> {
        let mut body = json!({
            "estado": estado.as_str(),
            "updated_at": utc_now_string()?,
        });
        if let Some(respuesta) = respuesta {
            body["respuesta"] = json!(respuesta);
        }

        let mut rows: Vec<TicketRecord> = self
            .client()
            .update(TABLE, &[("id", eq(id))], &body)
            .await
            .map_err(map_remote_error)?;
        if rows.is_empty() {
            return Err(RepoError::NotFound);
        }
        Ok(rows.swap_remove(0))
    }
}
