use std::io::{self, BufRead, Write};
use std::sync::Arc;

use lactea::application::feedback::FeedbackForm;
use lactea::application::repos::{NewTicket, TicketsRepo};
use lactea::application::tickets::TicketBoard;

use crate::args::FeedbackCmd;
use crate::handlers::{CliError, Ctx, finish};
use crate::print::print_json;

const MAX_ATTEMPTS: usize = 3;

pub async fn handle(ctx: &mut Ctx, cmd: FeedbackCmd) -> Result<(), CliError> {
    let FeedbackCmd::Submit {
        nombre,
        correo,
        telefono,
        tipo,
        descripcion,
    } = cmd;

    let mut board = TicketBoard::new(Arc::clone(&ctx.repos) as Arc<dyn TicketsRepo>);
    let mut form = FeedbackForm::new(&mut board);

    let stdin = io::stdin();
    let mut verified = false;
    for attempt in 1..=MAX_ATTEMPTS {
        println!("código de verificación: {}", form.challenge().code());
        print!("escribe el código: ");
        io::stdout().flush()?;
        let mut input = String::new();
        stdin.lock().read_line(&mut input)?;
        if form.verify(&input) {
            verified = true;
            break;
        }
        if attempt < MAX_ATTEMPTS {
            eprintln!("código incorrecto, generando uno nuevo");
            form.refresh_challenge();
        }
    }
    if !verified {
        return Err(CliError::Failed(
            "verificación fallida, intenta nuevamente".to_owned(),
        ));
    }

    let created = finish(
        form.submit(NewTicket {
            nombre,
            correo,
            telefono,
            tipo: tipo.into(),
            descripcion,
        })
        .await,
    )?;
    if let Some(record) = created {
        println!("PQRS registrada:");
        print_json(&record);
    }
    Ok(())
}
