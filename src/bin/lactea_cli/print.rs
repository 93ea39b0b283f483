//! Output helpers shared by the handlers.

use serde::Serialize;

use lactea::domain::entities::{InventoryRecord, ProductRecord, TicketRecord};
use lactea::domain::types::InventorySource;

/// Pretty-prints any serializable payload as JSON.
pub fn print_json<T: Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(body) => println!("{body}"),
        Err(err) => eprintln!("could not render output: {err}"),
    }
}

/// Formats whole Colombian pesos with dot thousands separators.
pub fn format_cop(amount: i64) -> String {
    let negative = amount < 0;
    let digits = amount.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 6);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }
    let sign = if negative { "-" } else { "" };
    format!("{sign}${grouped} COP")
}

pub fn product_lines(items: &[ProductRecord]) {
    for p in items {
        let flags = match (p.disponible, p.destacado) {
            (true, true) => "disponible, destacado",
            (true, false) => "disponible",
            (false, _) => "agotado",
        };
        println!(
            "#{:<4} {:<30} {:>14}  {:<8} [{flags}]",
            p.id,
            p.nombre,
            format_cop(p.precio),
            p.categoria.as_str(),
        );
    }
}

pub fn ticket_lines(items: &[TicketRecord]) {
    for t in items {
        println!(
            "{}  {:<10} {:<11} {} <{}>",
            t.id,
            t.tipo.as_str(),
            t.estado.as_str(),
            t.nombre,
            t.correo,
        );
    }
}

fn stock_label(item: &InventoryRecord) -> &'static str {
    if !item.is_available() {
        "Agotado"
    } else if item.is_low_stock() {
        "Stock bajo"
    } else {
        "Disponible"
    }
}

pub fn inventory_lines(source: InventorySource, items: &[InventoryRecord]) {
    match source {
        InventorySource::Live => {}
        InventorySource::Direct => {
            eprintln!("aviso: datos obtenidos por la ruta directa de respaldo");
        }
        InventorySource::Fixture => {
            eprintln!("aviso: el servicio remoto no respondió, mostrando datos de muestra");
        }
    }
    for item in items {
        let name = item
            .productos
            .as_ref()
            .map_or("(producto desconocido)", |p| p.nombre.as_str());
        let precio = item
            .precio_referencia
            .map_or_else(|| "-".to_owned(), format_cop);
        println!(
            "producto #{:<4} {:<30} {:>4}/{:<4} {:>14}  {:<18} {}",
            item.producto_id,
            name,
            item.cantidad_disponible,
            item.cantidad_minima,
            precio,
            item.ubicacion.as_str(),
            stock_label(item),
        );
    }
}
