//! `lactea-cli`: storefront catalog queries and the admin dashboard
//! operations against the remote data service.

#![deny(clippy::all, clippy::pedantic)]

mod args;
mod handlers;
mod print;

use clap::Parser;

use lactea::{config, infra::telemetry};

use crate::args::{Cli, Commands};
use crate::handlers::{CliError, Ctx};

#[tokio::main]
async fn main() -> Result<(), CliError> {
    let cli = Cli::parse();
    let settings = config::load(cli.config_file.as_ref(), &cli.overrides())?;
    telemetry::init(&settings.logging)?;

    let mut ctx = Ctx::build(&settings)?;

    match cli.command {
        Commands::Login { email, password } => {
            handlers::session::login(&mut ctx, &email, &password).await
        }
        Commands::Logout => handlers::session::logout(&mut ctx).await,
        Commands::Whoami => handlers::session::whoami(&mut ctx).await,
        Commands::Products(args) => handlers::products::handle(&mut ctx, args.action).await,
        Commands::Tickets(args) => handlers::tickets::handle(&mut ctx, args.action).await,
        Commands::Inventory(args) => handlers::inventory::handle(&mut ctx, args.action).await,
        Commands::Feedback(args) => handlers::feedback::handle(&mut ctx, args.action).await,
    }
}
