use clap::Args;
use serde_json::json;

use crate::auth::{generate_jwt, JwtKeys};
use crate::cli::OutputFormat;
use crate::config;

#[derive(Args, Debug)]
pub struct TokenArgs {
    #[arg(help = "User id to embed in the token")]
    pub user_id: i32,

    #[arg(long, default_value = "trainer", help = "Username claim")]
    pub username: String,

    #[arg(long, help = "Lifetime in hours (defaults to SECURITY_JWT_EXPIRY_HOURS)")]
    pub expiry_hours: Option<u64>,
}

/// Sign a token with the same secret the server reads from its environment
pub fn handle(args: TokenArgs, output_format: OutputFormat) -> anyhow::Result<()> {
    let security = &config::config().security;
    let keys = JwtKeys::new(
        &security.jwt_secret,
        args.expiry_hours.unwrap_or(security.jwt_expiry_hours),
    );

    let token = generate_jwt(&keys, args.user_id, args.username.clone())?;

    match output_format {
        OutputFormat::Json => println!(
            "{}",
            serde_json::to_string_pretty(&json!({
                "token": token,
                "userId": args.user_id,
                "username": args.username,
            }))?
        ),
        OutputFormat::Text => println!("{}", token),
    }
    Ok(())
}
