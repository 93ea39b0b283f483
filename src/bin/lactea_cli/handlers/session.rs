use crate::handlers::{CliError, Ctx};
use crate::print::print_json;

pub async fn login(ctx: &mut Ctx, email: &str, password: &str) -> Result<(), CliError> {
    let user = ctx.sessions.login(email, password).await?;
    println!("sesión iniciada como {} ({})", user.nombre, user.email);
    Ok(())
}

pub async fn logout(ctx: &mut Ctx) -> Result<(), CliError> {
    ctx.sessions.logout().await;
    println!("sesión cerrada");
    Ok(())
}

pub async fn whoami(ctx: &mut Ctx) -> Result<(), CliError> {
    match ctx.sessions.restore().await {
        Some(user) => print_json(&user),
        None => println!("sin sesión activa"),
    }
    Ok(())
}
