//! Built-in product catalog: seeds an empty remote table and doubles as the
//! last-resort display set when both the remote and the local cache are
//! unavailable at startup.

use time::OffsetDateTime;
use time::macros::datetime;

use crate::application::repos::NewProduct;
use crate::domain::{entities::ProductRecord, types::ProductCategory};

const IMG_QUESO_FRESCO: &str =
    "https://images.unsplash.com/photo-1486297678162-eb2a19b0a32d?w=500&q=80";
const IMG_QUESO_CREMA: &str =
    "https://images.unsplash.com/photo-1552767059-ce182ead6c1b?w=500&q=80";
const IMG_YOGURT: &str =
    "https://images.unsplash.com/photo-1571212515416-cd2c2c9c4e8d?w=500&q=80";
const IMG_QUESADILLA: &str =
    "https://images.unsplash.com/photo-1559181567-c3190ca9959b?w=500&q=80";
const IMG_CREMA: &str =
    "https://images.unsplash.com/photo-1628088062854-d1870b4553da?w=500&q=80";
const IMG_AREQUIPE: &str =
    "https://images.unsplash.com/photo-1481391319762-47dff72954d9?w=500&q=80";
const IMG_CALABAZA: &str =
    "https://images.unsplash.com/photo-1570197788417-0e82375c9371?w=500&q=80";
const IMG_TORTA: &str =
    "https://images.unsplash.com/photo-1578985545062-69928b1d9587?w=500&q=80";
const IMG_TORTA_QUESO: &str =
    "https://images.unsplash.com/photo-1565958011703-44f9829ba187?w=500&q=80";
const IMG_FRESAS: &str =
    "https://images.unsplash.com/photo-1464454709131-ffd692591ee5?w=500&q=80";
const IMG_ARCOIRIS: &str =
    "https://images.unsplash.com/photo-1488477181946-6428a0291777?w=500&q=80";

const DESC_QUESO_FRESCO: &str =
    "Queso fresco artesanal de sabor suave y textura cremosa, perfecto para acompañar con pan o frutas.";
const DESC_QUESO_CREMA: &str =
    "Queso cremoso y untable con alto contenido graso, ideal para untar en tostadas o preparar salsas.";
const DESC_YOGURT: &str =
    "Yogurt casero cremoso y natural, rico en probióticos, perfecto solo o con frutas y miel.";
const DESC_QUESADILLA: &str =
    "Deliciosas quesadillas caseras crujientes, perfectas como snack o acompañamiento.";
const DESC_AREQUIPE: &str =
    "Dulce de leche artesanal cremoso y suave, perfecto para postres o untar.";
const DESC_CALABAZA: &str =
    "Conserva dulce tradicional de calabaza, con textura suave y sabor casero auténtico.";

#[rustfmt::skip]
const CATALOG: &[(&str, i64, ProductCategory, &str, &str, &str)] = &[
    ("Quesos Campesinos 500g", 9000, ProductCategory::Queso, DESC_QUESO_FRESCO, "Bestseller", IMG_QUESO_FRESCO),
    ("Quesos Campesinos 320g", 7000, ProductCategory::Queso, DESC_QUESO_FRESCO, "Popular", IMG_QUESO_FRESCO),
    ("Queso Doble Crema 2400g", 45000, ProductCategory::Queso, DESC_QUESO_CREMA, "Premium", IMG_QUESO_CREMA),
    ("Queso Doble Crema 900g", 19000, ProductCategory::Queso, DESC_QUESO_CREMA, "Gourmet", IMG_QUESO_CREMA),
    ("Queso Doble Crema 400g", 11000, ProductCategory::Queso, DESC_QUESO_CREMA, "Favorito", IMG_QUESO_CREMA),
    ("Yogurt Natural 1750ml", 12000, ProductCategory::Yogurt, DESC_YOGURT, "Orgánico", IMG_YOGURT),
    ("Yogurt Natural 1000ml", 8500, ProductCategory::Yogurt, DESC_YOGURT, "Bestseller", IMG_YOGURT),
    ("Yogurt Natural 150ml", 2000, ProductCategory::Yogurt, DESC_YOGURT, "Individual", IMG_YOGURT),
    ("Quesadillas 100g", 2500, ProductCategory::Otros, DESC_QUESADILLA, "Crujiente", IMG_QUESADILLA),
    ("Quesadillas 50g", 1000, ProductCategory::Otros, DESC_QUESADILLA, "Mini", IMG_QUESADILLA),
    ("Crema de Leche 1 Litro", 14000, ProductCategory::Otros, "Crema fresca y espesa, ideal para preparaciones culinarias, postres y café.", "Premium", IMG_CREMA),
    ("Arequipe Casero 50g", 2000, ProductCategory::Postres, DESC_AREQUIPE, "Artesanal", IMG_AREQUIPE),
    ("Arequipe Casero 250g", 8000, ProductCategory::Postres, DESC_AREQUIPE, "Bestseller", IMG_AREQUIPE),
    ("Dulce de Calabaza 50g", 2000, ProductCategory::Postres, DESC_CALABAZA, "Tradicional", IMG_CALABAZA),
    ("Dulce de Calabaza 250g", 8000, ProductCategory::Postres, DESC_CALABAZA, "Casero", IMG_CALABAZA),
    ("Torta Casera", 17000, ProductCategory::Postres, "Torta tradicional esponjosa y húmeda, preparada con ingredientes frescos y receta familiar.", "Especial", IMG_TORTA),
    ("Torta de Queso", 22000, ProductCategory::Postres, "Cheesecake cremoso con base de galleta, suave textura y sabor equilibrado.", "Gourmet", IMG_TORTA_QUESO),
    ("Fresas con Crema", 3500, ProductCategory::Postres, "Fresas frescas acompañadas de crema batida, postre refrescante y natural.", "Fresco", IMG_FRESAS),
    ("Postre Arcoíris", 3500, ProductCategory::Postres, "Postre colorido en capas con diferentes sabores y texturas, visualmente atractivo y delicioso.", "Colorido", IMG_ARCOIRIS),
];

const SEED_CREATED_AT: OffsetDateTime = datetime!(2024-01-01 00:00 UTC);

/// Drafts used to seed an empty remote table.
pub fn drafts() -> Vec<NewProduct> {
    CATALOG
        .iter()
        .map(
            |&(nombre, precio, categoria, descripcion, badge, imagen)| NewProduct {
                nombre: nombre.to_string(),
                descripcion: descripcion.to_string(),
                precio,
                categoria,
                imagen_url: Some(imagen.to_string()),
                badge: Some(badge.to_string()),
                disponible: true,
                destacado: false,
            },
        )
        .collect()
}

/// Locally-identified records for offline display. Ids are synthetic and
/// never written back to the remote.
pub fn records() -> Vec<ProductRecord> {
    CATALOG
        .iter()
        .enumerate()
        .map(|(index, &(nombre, precio, categoria, descripcion, badge, imagen))| {
            ProductRecord {
                id: index as i64 + 1,
                nombre: nombre.to_string(),
                descripcion: descripcion.to_string(),
                precio,
                categoria,
                imagen_url: Some(imagen.to_string()),
                badge: Some(badge.to_string()),
                disponible: true,
                destacado: false,
                activo: true,
                created_at: SEED_CREATED_AT,
                updated_at: None,
            }
        })
        .collect()
}
