//! Inventory board view-model store.
//!
//! Reads ride the repository's resilience ladder and never fail; the board
//! records which rung answered so the presentation layer can flag fixture
//! data. Mutations address rows by `producto_id`, matching the remote's
//! update/delete contract.

pub mod fixtures;

use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, warn};

use crate::application::outcome::Mutation;
use crate::application::repos::{InventoryPatch, InventoryRepo};
use crate::domain::{entities::InventoryRecord, types::InventorySource};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct InventoryStats {
    pub total: usize,
    pub disponibles: usize,
    pub agotados: usize,
    pub stock_bajo: usize,
}

pub struct InventoryBoard {
    repo: Arc<dyn InventoryRepo>,
    items: Vec<InventoryRecord>,
    source: InventorySource,
    loading: bool,
    error: Option<String>,
}

impl InventoryBoard {
    pub fn new(repo: Arc<dyn InventoryRepo>) -> Self {
        Self {
            repo,
            items: Vec::new(),
            source: InventorySource::Live,
            loading: false,
            error: None,
        }
    }

    pub fn items(&self) -> &[InventoryRecord] {
        &self.items
    }

    /// Which ladder rung produced the current collection.
    pub fn source(&self) -> InventorySource {
        self.source
    }

    pub fn loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Never fails: the ladder bottoms out in the fixture set.
    pub async fn load(&mut self) {
        self.loading = true;
        self.error = None;

        let snapshot = self.repo.list().await;
        debug!(
            source = snapshot.source.as_str(),
            count = snapshot.items.len(),
            "inventory loaded"
        );
        self.source = snapshot.source;
        self.items = snapshot.items;

        self.loading = false;
    }

    /// Merge-patch the rows for `producto_id` locally after a successful
    /// round-trip. The remote answer may carry several rows; local state
    /// applies the same patch to every matching row.
    pub async fn update_stock(
        &mut self,
        producto_id: i64,
        patch: InventoryPatch,
    ) -> Mutation<Vec<InventoryRecord>> {
        match self.repo.update_by_product(producto_id, patch.clone()).await {
            Ok(rows) => {
                for item in self
                    .items
                    .iter_mut()
                    .filter(|item| item.producto_id == producto_id)
                {
                    apply_patch(item, &patch);
                }
                Mutation::ok(rows)
            }
            Err(err) => {
                warn!(producto_id, error = %err, "inventory update failed on every rung");
                self.error = Some(err.to_string());
                Mutation::failed(err.to_string())
            }
        }
    }

    pub async fn remove(&mut self, producto_id: i64) -> Mutation<()> {
        match self.repo.delete_by_product(producto_id).await {
            Ok(()) => {
                self.items.retain(|item| item.producto_id != producto_id);
                Mutation::ok_empty()
            }
            Err(err) => {
                warn!(producto_id, error = %err, "inventory delete failed on every rung");
                self.error = Some(err.to_string());
                Mutation::failed(err.to_string())
            }
        }
    }

    /// Pure derivation; `stock_bajo` is recomputed from the quantities on
    /// every call, never stored.
    pub fn stats(&self) -> InventoryStats {
        InventoryStats {
            total: self.items.len(),
            disponibles: self.items.iter().filter(|item| item.is_available()).count(),
            agotados: self.items.iter().filter(|item| !item.is_available()).count(),
            stock_bajo: self.items.iter().filter(|item| item.is_low_stock()).count(),
        }
    }
}

fn apply_patch(record: &mut InventoryRecord, patch: &InventoryPatch) {
    if let Some(cantidad) = patch.cantidad_disponible {
        record.cantidad_disponible = cantidad;
    }
    if let Some(minima) = patch.cantidad_minima {
        record.cantidad_minima = minima;
    }
    if let Some(precio) = patch.precio_referencia {
        record.precio_referencia = Some(precio);
    }
    if let Some(ubicacion) = patch.ubicacion {
        record.ubicacion = ubicacion;
    }
}

#[cfg(test)]
mod tests {
    use crate::application::repos::{InventorySnapshot, RepoError};
    use crate::domain::types::Warehouse;

    use super::*;

    fn board_with(items: Vec<InventoryRecord>) -> InventoryBoard {
        struct NoRepo;

        #[async_trait::async_trait]
        impl InventoryRepo for NoRepo {
            async fn list(&self) -> InventorySnapshot {
                unreachable!("pure test")
            }
            async fn update_by_product(
                &self,
                _: i64,
                _: InventoryPatch,
            ) -> Result<Vec<InventoryRecord>, RepoError> {
                unreachable!("pure test")
            }
            async fn delete_by_product(&self, _: i64) -> Result<(), RepoError> {
                unreachable!("pure test")
            }
        }

        let mut board = InventoryBoard::new(Arc::new(NoRepo));
        board.items = items;
        board
    }

    #[test]
    fn stats_recompute_low_stock_from_quantities() {
        let board = board_with(fixtures::sample_inventory());
        let stats = board.stats();
        assert_eq!(stats.total, 10);
        assert_eq!(stats.agotados, 2);
        assert_eq!(stats.disponibles, 8);
        // Two out-of-stock rows plus one at 3/5; zero-quantity rows also
        // satisfy cantidad_disponible <= cantidad_minima.
        assert_eq!(stats.stock_bajo, 3);
    }

    #[test]
    fn patch_merges_only_present_fields() {
        let mut record = fixtures::sample_inventory().remove(0);
        let before_minimum = record.cantidad_minima;
        apply_patch(
            &mut record,
            &InventoryPatch {
                cantidad_disponible: Some(3),
                ubicacion: Some(Warehouse::LaFlorida),
                ..InventoryPatch::default()
            },
        );
        assert_eq!(record.cantidad_disponible, 3);
        assert_eq!(record.cantidad_minima, before_minimum);
        assert_eq!(record.ubicacion, Warehouse::LaFlorida);
    }
}
