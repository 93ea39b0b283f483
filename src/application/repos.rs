//! Repository traits describing the remote-store adapters.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::domain::entities::{
    AdminUserRecord, InventoryRecord, ProductRecord, TicketRecord,
};
use crate::domain::types::{
    InventorySource, ProductCategory, TicketKind, TicketStatus, Warehouse,
};

#[derive(Debug, Error)]
pub enum RepoError {
    /// Transport or connectivity failure reaching the remote store.
    #[error("connection error: {0}")]
    Connection(String),
    /// The remote refused the request; the body is surfaced verbatim so
    /// validation rejections reach the user unchanged.
    #[error("remote rejected request (status {status}): {message}")]
    Rejected { status: u16, message: String },
    #[error("resource not found")]
    NotFound,
    #[error("failed to decode remote response: {0}")]
    Decode(String),
}

impl RepoError {
    /// True for failures worth retrying on a lower rung of a fallback
    /// ladder; `NotFound` from a healthy remote is not one of them, except
    /// that policy-filtered writes are indistinguishable from missing rows
    /// (the representation comes back empty either way), so callers decide
    /// per operation.
    pub fn is_connection(&self) -> bool {
        matches!(self, RepoError::Connection(_))
    }
}

#[derive(Debug, Clone)]
pub struct NewProduct {
    pub nombre: String,
    pub descripcion: String,
    pub precio: i64,
    pub categoria: ProductCategory,
    pub imagen_url: Option<String>,
    pub badge: Option<String>,
    pub disponible: bool,
    pub destacado: bool,
}

/// Partial update; `None` fields are left untouched by the remote merge.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ProductPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nombre: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub descripcion: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub precio: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub categoria: Option<ProductCategory>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub imagen_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub badge: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disponible: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destacado: Option<bool>,
}

#[derive(Debug, Clone)]
pub struct NewTicket {
    pub nombre: String,
    pub correo: String,
    pub telefono: Option<String>,
    pub tipo: TicketKind,
    pub descripcion: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InventoryPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cantidad_disponible: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cantidad_minima: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub precio_referencia: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ubicacion: Option<Warehouse>,
}

/// Inventory read result with its provenance, so placeholder data is never
/// mistaken for live rows.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InventorySnapshot {
    pub source: InventorySource,
    pub items: Vec<InventoryRecord>,
}

#[async_trait]
pub trait ProductsRepo: Send + Sync {
    /// Active products only, most recently created first. Zero rows is a
    /// valid result, not an error.
    async fn list(&self) -> Result<Vec<ProductRecord>, RepoError>;

    /// Lookup by id bypassing the active filter; soft-deleted rows are
    /// still returned here.
    async fn find_by_id(&self, id: i64) -> Result<Option<ProductRecord>, RepoError>;

    async fn create(&self, draft: NewProduct) -> Result<ProductRecord, RepoError>;

    /// Merge-patch by id; stamps `updated_at`. `NotFound` when no row
    /// matches the id.
    async fn update(&self, id: i64, patch: ProductPatch) -> Result<ProductRecord, RepoError>;

    /// Soft delete: flips `activo` off and stamps `updated_at`. The row
    /// stays queryable via `find_by_id` but drops out of `list`.
    async fn soft_delete(&self, id: i64) -> Result<(), RepoError>;
}

#[async_trait]
pub trait TicketsRepo: Send + Sync {
    /// All tickets, most recently created first.
    async fn list(&self) -> Result<Vec<TicketRecord>, RepoError>;

    /// Visitor submission; the persisted row starts in `Pendiente`.
    async fn create(&self, draft: NewTicket) -> Result<TicketRecord, RepoError>;

    /// Admin status change; `respuesta` is merged only when given.
    async fn update_status(
        &self,
        id: Uuid,
        estado: TicketStatus,
        respuesta: Option<String>,
    ) -> Result<TicketRecord, RepoError>;
}

#[async_trait]
pub trait InventoryRepo: Send + Sync {
    /// Resilience ladder: primary client, then the direct transport, then
    /// the built-in fixture set. Never fails; the snapshot's `source` says
    /// which rung answered.
    async fn list(&self) -> InventorySnapshot;

    /// Merge-patch addressed by `producto_id` (not the record's own id).
    /// Tries the direct transport when the primary path fails; errors only
    /// when both rungs fail.
    async fn update_by_product(
        &self,
        producto_id: i64,
        patch: InventoryPatch,
    ) -> Result<Vec<InventoryRecord>, RepoError>;

    /// Hard delete addressed by `producto_id`, with the same two-rung
    /// fallback as `update_by_product`.
    async fn delete_by_product(&self, producto_id: i64) -> Result<(), RepoError>;
}

#[async_trait]
pub trait AdminUsersRepo: Send + Sync {
    /// Case-insensitive, trimmed email match. Zero rows is `Ok(None)`.
    async fn find_by_email(&self, email: &str) -> Result<Option<AdminUserRecord>, RepoError>;

    /// Best-effort `last_login` stamp; callers treat failure as non-fatal.
    async fn touch_last_login(&self, id: Uuid) -> Result<(), RepoError>;
}
