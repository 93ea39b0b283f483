use std::sync::Arc;

use lactea::application::inventory::InventoryBoard;
use lactea::application::repos::{InventoryPatch, InventoryRepo};

use crate::args::InventoryCmd;
use crate::handlers::{CliError, Ctx, finish};
use crate::print::{inventory_lines, print_json};

pub async fn handle(ctx: &mut Ctx, cmd: InventoryCmd) -> Result<(), CliError> {
    ctx.require_session().await?;
    let mut board = board(ctx);
    board.load().await;
    match cmd {
        InventoryCmd::List => {
            inventory_lines(board.source(), board.items());
            Ok(())
        }
        InventoryCmd::UpdateStock {
            producto_id,
            cantidad_disponible,
            cantidad_minima,
            precio_referencia,
            ubicacion,
        } => {
            let patch = InventoryPatch {
                cantidad_disponible,
                cantidad_minima,
                precio_referencia,
                ubicacion: ubicacion.map(Into::into),
            };
            let rows = finish(board.update_stock(producto_id, patch).await)?;
            if let Some(rows) = rows {
                print_json(&rows);
            }
            Ok(())
        }
        InventoryCmd::Remove { producto_id } => {
            finish(board.remove(producto_id).await)?;
            println!("inventario del producto #{producto_id} eliminado");
            Ok(())
        }
        InventoryCmd::Stats => {
            print_json(&board.stats());
            Ok(())
        }
    }
}

fn board(ctx: &Ctx) -> InventoryBoard {
    InventoryBoard::new(Arc::clone(&ctx.repos) as Arc<dyn InventoryRepo>)
}
