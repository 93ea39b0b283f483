//! Product catalog view-model store.
//!
//! Owns the in-memory product collection plus loading/error flags. The
//! remote store is the source of truth; the local cache file is a
//! last-resort mirror used only when the remote is unreachable at startup.
//! Mutations are optimistic in the last-write-wins sense: local state is
//! patched after each successful round-trip, with no version check against
//! concurrent admin edits (the remote exposes no version column to check).

pub mod seed;

use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, warn};

use crate::application::outcome::Mutation;
use crate::application::repos::{NewProduct, ProductPatch, ProductsRepo, RepoError};
use crate::domain::{entities::ProductRecord, types::ProductCategory};
use crate::infra::local::ProductCache;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductStats {
    pub total: usize,
    pub disponibles: usize,
    pub destacados: usize,
    pub categorias: usize,
    pub por_categoria: Vec<(ProductCategory, usize)>,
}

#[derive(Debug, Clone, Default)]
pub struct ProductFilter {
    pub categoria: Option<ProductCategory>,
    pub disponible: Option<bool>,
    pub destacado: Option<bool>,
    pub busqueda: Option<String>,
}

pub struct ProductCatalog {
    repo: Arc<dyn ProductsRepo>,
    cache: Arc<dyn ProductCache>,
    items: Vec<ProductRecord>,
    loading: bool,
    error: Option<String>,
}

impl ProductCatalog {
    pub fn new(repo: Arc<dyn ProductsRepo>, cache: Arc<dyn ProductCache>) -> Self {
        Self {
            repo,
            cache,
            items: Vec::new(),
            loading: false,
            error: None,
        }
    }

    pub fn items(&self) -> &[ProductRecord] {
        &self.items
    }

    pub fn loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Load the catalog: remote first, then the cache file, then the
    /// built-in seed set. An empty remote table is seeded best-effort so a
    /// fresh deployment starts populated.
    pub async fn load(&mut self) {
        self.loading = true;
        self.error = None;

        match self.repo.list().await {
            Ok(items) if !items.is_empty() => {
                if let Err(err) = self.cache.save(&items).await {
                    warn!(error = %err, "failed to mirror products to local cache");
                }
                debug!(count = items.len(), "products loaded from remote");
                self.items = items;
            }
            Ok(_) => {
                debug!("remote product table is empty, seeding built-in catalog");
                self.items = self.seed_remote().await;
            }
            Err(err) => {
                warn!(error = %err, "failed to load products from remote");
                self.error = Some("Error cargando productos".to_string());
                self.items = match self.cache.load().await {
                    Ok(Some(cached)) if !cached.is_empty() => cached,
                    Ok(_) => seed::records(),
                    Err(cache_err) => {
                        warn!(error = %cache_err, "product cache unreadable");
                        seed::records()
                    }
                };
            }
        }

        self.loading = false;
    }

    async fn seed_remote(&self) -> Vec<ProductRecord> {
        let mut created = Vec::new();
        for draft in seed::drafts() {
            match self.repo.create(draft).await {
                Ok(record) => created.push(record),
                Err(err) => {
                    warn!(error = %err, "seeding remote catalog failed");
                    break;
                }
            }
        }
        if created.is_empty() {
            return seed::records();
        }
        created
    }

    pub async fn add(&mut self, draft: NewProduct) -> Mutation<ProductRecord> {
        match self.repo.create(draft).await {
            Ok(record) => {
                self.items.insert(0, record.clone());
                Mutation::ok(record)
            }
            Err(err) => {
                self.error = Some("Error al agregar producto".to_string());
                Mutation::failed(err.to_string())
            }
        }
    }

    pub async fn update(&mut self, id: i64, patch: ProductPatch) -> Mutation<ProductRecord> {
        match self.repo.update(id, patch).await {
            Ok(record) => {
                if let Some(existing) = self.items.iter_mut().find(|item| item.id == id) {
                    *existing = record.clone();
                }
                Mutation::ok(record)
            }
            Err(err) => {
                self.error = Some("Error al actualizar producto".to_string());
                Mutation::failed(err.to_string())
            }
        }
    }

    /// Soft delete: the remote keeps the row with `activo = false`; the
    /// local collection drops it, matching what `list` would return.
    pub async fn remove(&mut self, id: i64) -> Mutation<()> {
        match self.repo.soft_delete(id).await {
            Ok(()) => {
                self.items.retain(|item| item.id != id);
                Mutation::ok_empty()
            }
            Err(err @ RepoError::NotFound) => {
                self.error = Some("Producto no encontrado".to_string());
                Mutation::failed(err.to_string())
            }
            Err(err) => {
                self.error = Some("Error al eliminar producto".to_string());
                Mutation::failed(err.to_string())
            }
        }
    }

    /// Pure derivation over the in-memory collection.
    pub fn stats(&self) -> ProductStats {
        let por_categoria: Vec<(ProductCategory, usize)> = ProductCategory::ALL
            .iter()
            .map(|&categoria| {
                let count = self
                    .items
                    .iter()
                    .filter(|item| item.categoria == categoria)
                    .count();
                (categoria, count)
            })
            .collect();
        ProductStats {
            total: self.items.len(),
            disponibles: self.items.iter().filter(|item| item.disponible).count(),
            destacados: self.items.iter().filter(|item| item.destacado).count(),
            categorias: por_categoria.iter().filter(|(_, count)| *count > 0).count(),
            por_categoria,
        }
    }

    /// In-memory filtering; `busqueda` is a case-insensitive substring
    /// match over name and description.
    pub fn filter(&self, filter: &ProductFilter) -> Vec<&ProductRecord> {
        let needle = filter.busqueda.as_ref().map(|query| query.to_lowercase());
        self.items
            .iter()
            .filter(|item| {
                if let Some(categoria) = filter.categoria {
                    if item.categoria != categoria {
                        return false;
                    }
                }
                if let Some(disponible) = filter.disponible {
                    if item.disponible != disponible {
                        return false;
                    }
                }
                if let Some(destacado) = filter.destacado {
                    if item.destacado != destacado {
                        return false;
                    }
                }
                if let Some(needle) = &needle {
                    return item.nombre.to_lowercase().contains(needle)
                        || item.descripcion.to_lowercase().contains(needle);
                }
                true
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog_with(items: Vec<ProductRecord>) -> ProductCatalog {
        // Repo and cache are never called by the pure methods under test.
        struct NoRepo;
        struct NoCache;

        #[async_trait::async_trait]
        impl ProductsRepo for NoRepo {
            async fn list(&self) -> Result<Vec<ProductRecord>, RepoError> {
                unreachable!("pure test")
            }
            async fn find_by_id(&self, _: i64) -> Result<Option<ProductRecord>, RepoError> {
                unreachable!("pure test")
            }
            async fn create(&self, _: NewProduct) -> Result<ProductRecord, RepoError> {
                unreachable!("pure test")
            }
            async fn update(&self, _: i64, _: ProductPatch) -> Result<ProductRecord, RepoError> {
                unreachable!("pure test")
            }
            async fn soft_delete(&self, _: i64) -> Result<(), RepoError> {
                unreachable!("pure test")
            }
        }

        #[async_trait::async_trait]
        impl ProductCache for NoCache {
            async fn load(
                &self,
            ) -> Result<Option<Vec<ProductRecord>>, crate::infra::local::LocalStoreError>
            {
                unreachable!("pure test")
            }
            async fn save(
                &self,
                _: &[ProductRecord],
            ) -> Result<(), crate::infra::local::LocalStoreError> {
                unreachable!("pure test")
            }
        }

        let mut catalog = ProductCatalog::new(Arc::new(NoRepo), Arc::new(NoCache));
        catalog.items = items;
        catalog
    }

    #[test]
    fn stats_count_by_category_and_flags() {
        let mut items = seed::records();
        items[0].destacado = true;
        items[1].disponible = false;
        let catalog = catalog_with(items);

        let stats = catalog.stats();
        assert_eq!(stats.total, 19);
        assert_eq!(stats.disponibles, 18);
        assert_eq!(stats.destacados, 1);
        assert_eq!(stats.categorias, 4);
        let quesos = stats
            .por_categoria
            .iter()
            .find(|(categoria, _)| *categoria == ProductCategory::Queso)
            .map(|(_, count)| *count);
        assert_eq!(quesos, Some(5));
    }

    #[test]
    fn filter_matches_search_in_name_or_description() {
        let catalog = catalog_with(seed::records());
        let filter = ProductFilter {
            busqueda: Some("AREQUIPE".to_string()),
            ..ProductFilter::default()
        };
        let hits = catalog.filter(&filter);
        assert_eq!(hits.len(), 2);
        assert!(hits.iter().all(|item| item.nombre.contains("Arequipe")));
    }

    #[test]
    fn filter_combines_category_and_availability() {
        let mut items = seed::records();
        items[5].disponible = false; // a yogurt
        let catalog = catalog_with(items);

        let filter = ProductFilter {
            categoria: Some(ProductCategory::Yogurt),
            disponible: Some(true),
            ..ProductFilter::default()
        };
        assert_eq!(catalog.filter(&filter).len(), 2);
    }
}
