//! PQRS ticket board view-model store.

use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::application::outcome::Mutation;
use crate::application::repos::{NewTicket, TicketsRepo};
use crate::domain::{entities::TicketRecord, types::TicketStatus};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TicketStats {
    pub total: usize,
    pub pendientes: usize,
    pub en_proceso: usize,
    pub resueltos: usize,
}

pub struct TicketBoard {
    repo: Arc<dyn TicketsRepo>,
    items: Vec<TicketRecord>,
    loading: bool,
    error: Option<String>,
}

impl TicketBoard {
    pub fn new(repo: Arc<dyn TicketsRepo>) -> Self {
        Self {
            repo,
            items: Vec::new(),
            loading: false,
            error: None,
        }
    }

    pub fn items(&self) -> &[TicketRecord] {
        &self.items
    }

    pub fn loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// A connection failure keeps whatever is already in memory and records
    /// the error; tickets have no offline fixture set.
    pub async fn load(&mut self) {
        self.loading = true;
        self.error = None;

        match self.repo.list().await {
            Ok(items) => {
                debug!(count = items.len(), "tickets loaded");
                self.items = items;
            }
            Err(err) => {
                warn!(error = %err, "failed to load tickets");
                self.error = Some(format!("Error de conexión: {err}"));
            }
        }

        self.loading = false;
    }

    /// Visitor submission; the new ticket is prepended so the board stays
    /// newest-first.
    pub async fn submit(&mut self, draft: NewTicket) -> Mutation<TicketRecord> {
        self.loading = true;
        let outcome = match self.repo.create(draft).await {
            Ok(record) => {
                self.items.insert(0, record.clone());
                Mutation::ok(record)
            }
            Err(err) => {
                self.error = Some("Error enviando PQRS".to_string());
                Mutation::failed(err.to_string())
            }
        };
        self.loading = false;
        outcome
    }

    /// Admin status change; any status is reachable from any other.
    pub async fn set_status(
        &mut self,
        id: Uuid,
        estado: TicketStatus,
        respuesta: Option<String>,
    ) -> Mutation<TicketRecord> {
        self.loading = true;
        let outcome = match self.repo.update_status(id, estado, respuesta).await {
            Ok(record) => {
                if let Some(existing) = self.items.iter_mut().find(|item| item.id == id) {
                    *existing = record.clone();
                }
                Mutation::ok(record)
            }
            Err(err) => {
                self.error = Some("Error actualizando PQRS".to_string());
                Mutation::failed(err.to_string())
            }
        };
        self.loading = false;
        outcome
    }

    /// Pure derivation; repeated calls without mutation return identical
    /// results.
    pub fn stats(&self) -> TicketStats {
        let count =
            |status: TicketStatus| self.items.iter().filter(|item| item.estado == status).count();
        TicketStats {
            total: self.items.len(),
            pendientes: count(TicketStatus::Pendiente),
            en_proceso: count(TicketStatus::EnProceso),
            resueltos: count(TicketStatus::Resuelto),
        }
    }
}
