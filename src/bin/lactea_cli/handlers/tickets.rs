use std::sync::Arc;

use uuid::Uuid;

use lactea::application::repos::TicketsRepo;
use lactea::application::tickets::TicketBoard;

use crate::args::{StatusArg, TicketsCmd};
use crate::handlers::{CliError, Ctx, finish};
use crate::print::{print_json, ticket_lines};

pub async fn handle(ctx: &mut Ctx, cmd: TicketsCmd) -> Result<(), CliError> {
    ctx.require_session().await?;
    let mut board = board(ctx);
    match cmd {
        TicketsCmd::List => {
            board.load().await;
            if let Some(error) = board.error() {
                return Err(CliError::Failed(error.to_owned()));
            }
            ticket_lines(board.items());
            Ok(())
        }
        TicketsCmd::SetStatus {
            id,
            estado,
            respuesta,
        } => set_status(&mut board, id, estado, respuesta).await,
        TicketsCmd::Stats => {
            board.load().await;
            if let Some(error) = board.error() {
                return Err(CliError::Failed(error.to_owned()));
            }
            print_json(&board.stats());
            Ok(())
        }
    }
}

async fn set_status(
    board: &mut TicketBoard,
    id: Uuid,
    estado: StatusArg,
    respuesta: Option<String>,
) -> Result<(), CliError> {
    board.load().await;
    let updated = finish(board.set_status(id, estado.into(), respuesta).await)?;
    if let Some(record) = updated {
        print_json(&record);
    }
    Ok(())
}

fn board(ctx: &Ctx) -> TicketBoard {
    TicketBoard::new(Arc::clone(&ctx.repos) as Arc<dyn TicketsRepo>)
}
