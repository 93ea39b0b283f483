use async_trait::async_trait;
use tracing::warn;

use crate::{
    application::{
        inventory::fixtures,
        repos::{InventoryPatch, InventoryRepo, InventorySnapshot, RepoError},
    },
    domain::{entities::InventoryRecord, types::InventorySource},
};

use super::{RemoteRepositories, eq, map_remote_error};

const TABLE: &str = "inventario";
const SELECT_WITH_PRODUCT: &str = "*,productos(id,nombre,descripcion,categoria,imagen)";

fn list_query() -> [(&'static str, String); 1] {
    [("select", SELECT_WITH_PRODUCT.to_string())]
}

#[async_trait]
impl InventoryRepo for RemoteRepositories {
    async fn list(&self) -> InventorySnapshot {
        match self.client().select(TABLE, &list_query()).await {
            Ok(items) => {
                return InventorySnapshot {
                    source: InventorySource::Live,
                    items,
                };
            }
            Err(err) => {
                warn!(error = %err, "primary inventory read failed, trying direct transport");
            }
        }

        match self.direct().select(TABLE, &list_query()).await {
            Ok(items) => InventorySnapshot {
                source: InventorySource::Direct,
                items,
            },
            Err(err) => {
                warn!(error = %err, "direct inventory read failed, serving fixture records");
                InventorySnapshot {
                    source: InventorySource::Fixture,
                    items: fixtures::sample_inventory(),
                }
            }
        }
    }

    async fn update_by_product(
        &self,
        producto_id: i64,
        patch: InventoryPatch,
    ) -> Result<Vec<InventoryRecord>, RepoError> {
        let body =
            serde_json::to_value(&patch).map_err(|err| RepoError::Decode(err.to_string()))?;
        let filter = [("producto_id", eq(producto_id))];

        // A policy-filtered PATCH answers 200 with zero representation rows,
        // indistinguishable from a missing record, so empty results fall
        // through to the direct rung as well.
        match self.client().update(TABLE, &filter, &body).await {
            Ok(rows) if !rows.is_empty() => return Ok(rows),
            Ok(_) => {
                warn!(producto_id, "primary inventory update matched no rows, trying direct transport");
            }
            Err(err) => {
                warn!(producto_id, error = %err, "primary inventory update failed, trying direct transport");
            }
        }

        let rows: Vec<InventoryRecord> = self
            .direct()
            .update(TABLE, &filter, &body)
            .await
            .map_err(map_remote_error)?;
        if rows.is_empty() {
            return Err(RepoError::NotFound);
        }
        Ok(rows)
    }

    async fn delete_by_product(&self, producto_id: i64) -> Result<(), RepoError> {
        let filter = [("producto_id", eq(producto_id))];

        match self.client().delete(TABLE, &filter).await {
            Ok(()) => Ok(()),
            Err(err) => {
                warn!(producto_id, error = %err, "primary inventory delete failed, trying direct transport");
                self.direct()
                    .delete(TABLE, &filter)
                    .await
                    .map_err(map_remote_error)
            }
        }
    }
}
