use std::sync::Arc;

use lactea::application::products::{ProductCatalog, ProductFilter};
use lactea::application::repos::{NewProduct, ProductPatch, ProductsRepo};
use lactea::infra::local::ProductCache;

use crate::args::ProductsCmd;
use crate::handlers::{CliError, Ctx, finish};
use crate::print::{print_json, product_lines};

pub async fn handle(ctx: &mut Ctx, cmd: ProductsCmd) -> Result<(), CliError> {
    match cmd {
        ProductsCmd::List {
            categoria,
            disponible,
            destacado,
            busqueda,
        } => {
            let mut catalog = catalog(ctx);
            catalog.load().await;
            warn_if_degraded(&catalog);
            let filter = ProductFilter {
                categoria: categoria.map(Into::into),
                disponible,
                destacado,
                busqueda,
            };
            let matched: Vec<_> = catalog.filter(&filter).into_iter().cloned().collect();
            product_lines(&matched);
            Ok(())
        }
        ProductsCmd::Add {
            nombre,
            descripcion,
            precio,
            categoria,
            imagen_url,
            badge,
            destacado,
        } => {
            ctx.require_session().await?;
            let mut catalog = catalog(ctx);
            catalog.load().await;
            let created = finish(
                catalog
                    .add(NewProduct {
                        nombre,
                        descripcion,
                        precio,
                        categoria: categoria.into(),
                        imagen_url,
                        badge,
                        disponible: true,
                        destacado,
                    })
                    .await,
            )?;
            if let Some(record) = created {
                print_json(&record);
            }
            Ok(())
        }
        ProductsCmd::Update {
            id,
            nombre,
            descripcion,
            precio,
            categoria,
            imagen_url,
            badge,
            disponible,
            destacado,
        } => {
            ctx.require_session().await?;
            let mut catalog = catalog(ctx);
            catalog.load().await;
            let patch = ProductPatch {
                nombre,
                descripcion,
                precio,
                categoria: categoria.map(Into::into),
                imagen_url,
                badge,
                disponible,
                destacado,
            };
            let updated = finish(catalog.update(id, patch).await)?;
            if let Some(record) = updated {
                print_json(&record);
            }
            Ok(())
        }
        ProductsCmd::Remove { id } => {
            ctx.require_session().await?;
            let mut catalog = catalog(ctx);
            catalog.load().await;
            finish(catalog.remove(id).await)?;
            println!("producto #{id} desactivado");
            Ok(())
        }
        ProductsCmd::Stats => {
            let mut catalog = catalog(ctx);
            catalog.load().await;
            warn_if_degraded(&catalog);
            print_json(&catalog.stats());
            Ok(())
        }
    }
}

fn catalog(ctx: &Ctx) -> ProductCatalog {
    let repo: Arc<dyn ProductsRepo> = ctx.repos.clone();
    let cache: Arc<dyn ProductCache> = ctx.product_cache.clone();
    ProductCatalog::new(repo, cache)
}

fn warn_if_degraded(catalog: &ProductCatalog) {
    if let Some(error) = catalog.error() {
        eprintln!("aviso: {error}; mostrando datos locales");
    }
}
