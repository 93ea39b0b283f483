//! Domain entities mirrored from the remote tables.
//!
//! Field names match the hosted store's column names so serde maps rows 1:1.

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

use crate::domain::types::{ProductCategory, TicketKind, TicketStatus, Warehouse};

/// Shown when a product row carries no image reference.
pub const DEFAULT_PRODUCT_IMAGE: &str =
    "https://images.unsplash.com/photo-1628088062854-d1870b4553da?w=500&q=80";

/// Row of the `productos` table. Deleting a product is a soft delete:
/// `activo` flips to `false` and the row stays queryable by id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductRecord {
    pub id: i64,
    pub nombre: String,
    pub descripcion: String,
    /// Whole currency units (COP), no minor units.
    pub precio: i64,
    pub categoria: ProductCategory,
    #[serde(default)]
    pub imagen_url: Option<String>,
    #[serde(default)]
    pub badge: Option<String>,
    #[serde(default = "default_true")]
    pub disponible: bool,
    #[serde(default)]
    pub destacado: bool,
    #[serde(default = "default_true")]
    pub activo: bool,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub updated_at: Option<OffsetDateTime>,
}

impl ProductRecord {
    pub fn image_or_default(&self) -> &str {
        self.imagen_url.as_deref().unwrap_or(DEFAULT_PRODUCT_IMAGE)
    }
}

fn default_true() -> bool {
    true
}

/// Product columns embedded into inventory rows by the remote join.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductSummary {
    pub id: i64,
    pub nombre: String,
    #[serde(default)]
    pub descripcion: Option<String>,
    #[serde(default)]
    pub categoria: Option<String>,
    #[serde(default)]
    pub imagen: Option<String>,
}

/// Row of the `inventario` table. Mutations address rows by `producto_id`,
/// not by the record's own `id`, and deletion is a hard delete.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryRecord {
    pub id: i64,
    pub producto_id: i64,
    pub cantidad_disponible: u32,
    pub cantidad_minima: u32,
    #[serde(default)]
    pub precio_referencia: Option<i64>,
    pub ubicacion: Warehouse,
    #[serde(default)]
    pub productos: Option<ProductSummary>,
}

impl InventoryRecord {
    /// Recomputed on every call; the low-stock state is never stored.
    pub fn is_low_stock(&self) -> bool {
        self.cantidad_disponible <= self.cantidad_minima
    }

    pub fn is_available(&self) -> bool {
        self.cantidad_disponible > 0
    }
}

/// Row of the `pqrs` table. Tickets are created by anonymous visitors and
/// only ever mutated (status/response) by an admin; there is no delete.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TicketRecord {
    pub id: Uuid,
    pub nombre: String,
    pub correo: String,
    #[serde(default)]
    pub telefono: Option<String>,
    pub tipo: TicketKind,
    pub descripcion: String,
    pub estado: TicketStatus,
    #[serde(default)]
    pub respuesta: Option<String>,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

/// Row of the `admin_users` table. Provisioned out-of-band; read during
/// login. `password_hash` is the stored credential the login flow compares
/// against (see `application::session` for the security caveat).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdminUserRecord {
    pub id: Uuid,
    pub email: String,
    pub password_hash: String,
    pub nombre: String,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub active: Option<bool>,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub last_login: Option<OffsetDateTime>,
}

impl AdminUserRecord {
    pub fn view(&self) -> AdminUserView {
        AdminUserView {
            id: self.id,
            email: self.email.clone(),
            nombre: self.nombre.clone(),
            role: self.role.clone().unwrap_or_else(|| "admin".to_string()),
        }
    }
}

/// The subset of an admin user the rest of the application sees after login.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdminUserView {
    pub id: Uuid,
    pub email: String,
    pub nombre: String,
    pub role: String,
}

/// Persisted client-held session state. Purely client-trust: not validated
/// by the remote beyond the initial login call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionRecord {
    pub is_active: bool,
    pub user: AdminUserView,
    #[serde(with = "time::serde::rfc3339")]
    pub login_time: OffsetDateTime,
}

#[cfg(test)]
mod tests {
    use time::macros::datetime;

    use super::*;

    fn inventory(disponible: u32, minima: u32) -> InventoryRecord {
        InventoryRecord {
            id: 1,
            producto_id: 7,
            cantidad_disponible: disponible,
            cantidad_minima: minima,
            precio_referencia: Some(9500),
            ubicacion: Warehouse::Pasto,
            productos: None,
        }
    }

    #[test]
    fn low_stock_is_at_or_below_minimum() {
        assert!(inventory(3, 5).is_low_stock());
        assert!(inventory(5, 5).is_low_stock());
        assert!(!inventory(6, 5).is_low_stock());
    }

    #[test]
    fn zero_quantity_is_unavailable_and_low() {
        let record = inventory(0, 2);
        assert!(!record.is_available());
        assert!(record.is_low_stock());
    }

    #[test]
    fn product_image_falls_back_to_default() {
        let mut product = ProductRecord {
            id: 1,
            nombre: "Queso Campesino 500g".to_string(),
            descripcion: "Queso fresco artesanal".to_string(),
            precio: 9000,
            categoria: crate::domain::types::ProductCategory::Queso,
            imagen_url: None,
            badge: Some("Bestseller".to_string()),
            disponible: true,
            destacado: false,
            activo: true,
            created_at: datetime!(2025-01-10 08:00 UTC),
            updated_at: None,
        };
        assert_eq!(product.image_or_default(), DEFAULT_PRODUCT_IMAGE);
        product.imagen_url = Some("https://example.com/q.jpg".to_string());
        assert_eq!(product.image_or_default(), "https://example.com/q.jpg");
    }

    #[test]
    fn admin_view_defaults_role() {
        let record = AdminUserRecord {
            id: Uuid::nil(),
            email: "ana@lacteos.co".to_string(),
            password_hash: "x".to_string(),
            nombre: "Ana".to_string(),
            role: None,
            active: None,
            last_login: None,
        };
        assert_eq!(record.view().role, "admin");
    }

    #[test]
    fn inventory_row_parses_with_embedded_product() {
        let json = r#"{
            "id": 2,
            "producto_id": 10,
            "cantidad_disponible": 7,
            "cantidad_minima": 4,
            "precio_referencia": 16500,
            "ubicacion": "Bodega La Florida",
            "productos": {"id": 10, "nombre": "Queso Campesino"}
        }"#;
        let record: InventoryRecord = serde_json::from_str(json).expect("parse row");
        assert_eq!(record.ubicacion, Warehouse::LaFlorida);
        assert_eq!(
            record.productos.as_ref().map(|p| p.nombre.as_str()),
            Some("Queso Campesino")
        );
    }
}
