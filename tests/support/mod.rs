//! Shared row builders for the integration suites.

#![allow(dead_code)]

use serde_json::{Value, json};

pub fn product_row(id: i64, nombre: &str, activo: bool) -> Value {
    json!({
        "id": id,
        "nombre": nombre,
        "descripcion": "Producto artesanal",
        "precio": 12_000,
        "categoria": "queso",
        "imagen_url": null,
        "badge": null,
        "disponible": true,
        "destacado": false,
        "activo": activo,
        "created_at": "2024-03-01T08:00:00Z",
        "updated_at": null
    })
}

pub fn inventory_row(id: i64, producto_id: i64, disponible: u32, minima: u32) -> Value {
    json!({
        "id": id,
        "producto_id": producto_id,
        "cantidad_disponible": disponible,
        "cantidad_minima": minima,
        "precio_referencia": 15_000,
        "ubicacion": "Bodega Pasto",
        "productos": {
            "id": producto_id,
            "nombre": "Queso Campesino",
            "descripcion": "Queso fresco",
            "categoria": "queso",
            "imagen": null
        }
    })
}

pub fn admin_row(id: &str, email: &str, password: &str, active: bool) -> Value {
    json!({
        "id": id,
        "email": email,
        "password_hash": password,
        "nombre": "Ana Coral",
        "role": "admin",
        "active": active,
        "last_login": null
    })
}

pub fn ticket_row(id: &str, estado: &str) -> Value {
    json!({
        "id": id,
        "nombre": "Luis Mora",
        "correo": "luis@example.com",
        "telefono": null,
        "tipo": "Queja",
        "descripcion": "El pedido llegó incompleto",
        "estado": estado,
        "respuesta": null,
        "created_at": "2024-03-02T10:30:00Z"
    })
}
