//! Fixed inventory records served when both remote rungs fail, so the
//! dashboard stays populated in a fully offline or misconfigured
//! deployment. Callers can always tell these apart from live rows via
//! `InventorySource::Fixture`.

use crate::domain::{
    entities::{InventoryRecord, ProductSummary},
    types::Warehouse,
};

#[rustfmt::skip]
const ROWS: &[(i64, i64, u32, u32, i64, Warehouse, &str, &str, &str)] = &[
    (1, 1, 25, 5, 15000, Warehouse::Pasto, "Leche Entera Premium", "Leche fresca de alta calidad", "Lácteos"),
    (2, 10, 7, 4, 16500, Warehouse::LaFlorida, "Queso Campesino", "Queso artesanal tradicional", "Quesos"),
    (3, 2, 12, 3, 8500, Warehouse::Pasto, "Yogurt Natural", "Yogurt sin azúcar añadida", "Lácteos"),
    (4, 3, 0, 2, 12000, Warehouse::LaFlorida, "Mantequilla Artesanal", "Mantequilla casera premium", "Lácteos"),
    (5, 4, 8, 5, 22000, Warehouse::Pasto, "Queso Mozzarella", "Queso mozzarella fresco", "Quesos"),
    (6, 5, 15, 4, 6500, Warehouse::LaFlorida, "Leche Deslactosada", "Leche sin lactosa", "Lácteos"),
    (7, 6, 3, 5, 18000, Warehouse::LaFlorida, "Crema de Leche", "Crema espesa para cocinar", "Lácteos"),
    (8, 7, 20, 6, 9500, Warehouse::Pasto, "Kumis Tradicional", "Bebida láctea fermentada", "Bebidas"),
    (9, 8, 0, 3, 14000, Warehouse::LaFlorida, "Queso Doble Crema", "Queso cremoso premium", "Quesos"),
    (10, 9, 30, 8, 7200, Warehouse::Pasto, "Suero Costeño", "Suero fresco tradicional", "Lácteos"),
];

/// Deterministic, never empty.
pub fn sample_inventory() -> Vec<InventoryRecord> {
    ROWS.iter()
        .map(
            |&(id, producto_id, disponible, minima, precio, ubicacion, nombre, descripcion, categoria)| {
                InventoryRecord {
                    id,
                    producto_id,
                    cantidad_disponible: disponible,
                    cantidad_minima: minima,
                    precio_referencia: Some(precio),
                    ubicacion,
                    productos: Some(ProductSummary {
                        id: producto_id,
                        nombre: nombre.to_string(),
                        descripcion: Some(descripcion.to_string()),
                        categoria: Some(categoria.to_string()),
                        imagen: None,
                    }),
                }
            },
        )
        .collect()
}
