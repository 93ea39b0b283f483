//! Shared domain enumerations aligned with the remote store's column values.
//!
//! Serde renames are pinned to the exact literals the hosted tables persist
//! (Spanish, mixed casing), so wire rows round-trip without translation.

use serde::{Deserialize, Serialize};

use crate::domain::error::DomainError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductCategory {
    Queso,
    Yogurt,
    Postres,
    Otros,
}

impl ProductCategory {
    pub const ALL: [ProductCategory; 4] = [
        ProductCategory::Queso,
        ProductCategory::Yogurt,
        ProductCategory::Postres,
        ProductCategory::Otros,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ProductCategory::Queso => "queso",
            ProductCategory::Yogurt => "yogurt",
            ProductCategory::Postres => "postres",
            ProductCategory::Otros => "otros",
        }
    }
}

impl TryFrom<&str> for ProductCategory {
    type Error = DomainError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "queso" => Ok(ProductCategory::Queso),
            "yogurt" => Ok(ProductCategory::Yogurt),
            "postres" => Ok(ProductCategory::Postres),
            "otros" => Ok(ProductCategory::Otros),
            other => Err(DomainError::validation(format!(
                "unknown categoria `{other}`"
            ))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TicketKind {
    #[serde(rename = "Petición")]
    Peticion,
    #[serde(rename = "Queja")]
    Queja,
    #[serde(rename = "Reclamo")]
    Reclamo,
    #[serde(rename = "Sugerencia")]
    Sugerencia,
}

impl TicketKind {
    pub fn as_str(self) -> &'static str {
        match self {
            TicketKind::Peticion => "Petición",
            TicketKind::Queja => "Queja",
            TicketKind::Reclamo => "Reclamo",
            TicketKind::Sugerencia => "Sugerencia",
        }
    }
}

impl TryFrom<&str> for TicketKind {
    type Error = DomainError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "Petición" | "Peticion" => Ok(TicketKind::Peticion),
            "Queja" => Ok(TicketKind::Queja),
            "Reclamo" => Ok(TicketKind::Reclamo),
            "Sugerencia" => Ok(TicketKind::Sugerencia),
            other => Err(DomainError::validation(format!("unknown tipo `{other}`"))),
        }
    }
}

/// Ticket workflow states. The workflow is ordered for display purposes only;
/// any state is reachable from any other state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TicketStatus {
    #[serde(rename = "Pendiente")]
    Pendiente,
    #[serde(rename = "En proceso")]
    EnProceso,
    #[serde(rename = "Resuelto")]
    Resuelto,
}

impl TicketStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            TicketStatus::Pendiente => "Pendiente",
            TicketStatus::EnProceso => "En proceso",
            TicketStatus::Resuelto => "Resuelto",
        }
    }
}

impl TryFrom<&str> for TicketStatus {
    type Error = DomainError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "Pendiente" => Ok(TicketStatus::Pendiente),
            "En proceso" | "En Proceso" => Ok(TicketStatus::EnProceso),
            "Resuelto" => Ok(TicketStatus::Resuelto),
            other => Err(DomainError::validation(format!("unknown estado `{other}`"))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Warehouse {
    #[serde(rename = "Bodega Pasto")]
    Pasto,
    #[serde(rename = "Bodega La Florida")]
    LaFlorida,
}

impl Warehouse {
    pub fn as_str(self) -> &'static str {
        match self {
            Warehouse::Pasto => "Bodega Pasto",
            Warehouse::LaFlorida => "Bodega La Florida",
        }
    }
}

impl TryFrom<&str> for Warehouse {
    type Error = DomainError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "Bodega Pasto" => Ok(Warehouse::Pasto),
            "Bodega La Florida" => Ok(Warehouse::LaFlorida),
            other => Err(DomainError::validation(format!(
                "unknown ubicacion `{other}`"
            ))),
        }
    }
}

/// Provenance of an inventory snapshot, so callers can tell live rows from
/// the offline fixture set instead of silently conflating them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InventorySource {
    /// Primary remote-client path answered.
    Live,
    /// Primary path failed; the direct transport fallback answered.
    Direct,
    /// Both remote rungs failed; built-in sample records.
    Fixture,
}

impl InventorySource {
    pub fn as_str(self) -> &'static str {
        match self {
            InventorySource::Live => "live",
            InventorySource::Direct => "direct",
            InventorySource::Fixture => "fixture",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ticket_status_round_trips_remote_literals() {
        for status in [
            TicketStatus::Pendiente,
            TicketStatus::EnProceso,
            TicketStatus::Resuelto,
        ] {
            let parsed = TicketStatus::try_from(status.as_str()).expect("known literal");
            assert_eq!(parsed, status);
        }
    }

    #[test]
    fn en_proceso_serializes_with_space() {
        let json = serde_json::to_string(&TicketStatus::EnProceso).expect("serialize");
        assert_eq!(json, "\"En proceso\"");
    }

    #[test]
    fn category_rejects_unknown_value() {
        let err = ProductCategory::try_from("bebidas").expect_err("unknown literal");
        assert_eq!(
            err,
            DomainError::validation("unknown categoria `bebidas`")
        );
        assert!(err.to_string().contains("bebidas"));
    }

    #[test]
    fn warehouse_rejects_unknown_value() {
        let err = Warehouse::try_from("Bodega Ipiales").expect_err("unknown literal");
        assert!(matches!(err, DomainError::Validation { .. }));
    }

    #[test]
    fn warehouse_round_trips() {
        let json = serde_json::to_string(&Warehouse::LaFlorida).expect("serialize");
        assert_eq!(json, "\"Bodega La Florida\"");
        let back: Warehouse = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, Warehouse::LaFlorida);
    }
}
