pub mod client;
pub mod commands;
pub mod utils;

use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};

#[derive(Parser)]
#[command(name = "pokedex")]
#[command(about = "Pokedex CLI - likes and views from the command line")]
#[command(version)]
pub struct Cli {
    #[arg(long, global = true, help = "Output raw JSON instead of text")]
    pub json: bool,

    #[arg(
        long,
        global = true,
        env = "POKEDEX_API_URL",
        default_value = "http://localhost:3000",
        help = "Base URL of the Pokedex API"
    )]
    pub server: String,

    #[arg(long, global = true, env = "POKEDEX_TOKEN", help = "Bearer token for protected routes")]
    pub token: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Mint a JWT for a user id using the local JWT_SECRET")]
    Token(commands::token::TokenArgs),

    #[command(about = "Like, list and unlike Pokemon")]
    Like {
        #[command(subcommand)]
        cmd: commands::like::LikeCommands,
    },

    #[command(about = "Record and list Pokemon page views")]
    View {
        #[command(subcommand)]
        cmd: commands::view::ViewCommands,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    Text,
    Json,
}

impl OutputFormat {
    pub fn from_cli(cli: &Cli) -> Self {
        if cli.json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }
}

pub async fn run(cli: Cli) -> anyhow::Result<()> {
    let output_format = OutputFormat::from_cli(&cli);

    match cli.command {
        Commands::Token(args) => commands::token::handle(args, output_format),
        Commands::Like { cmd } => {
            let client = client::ApiClient::new(&cli.server, cli.token)?;
            commands::like::handle(cmd, &client, output_format).await
        }
        Commands::View { cmd } => {
            let client = client::ApiClient::new(&cli.server, cli.token)?;
            commands::view::handle(cmd, &client, output_format).await
        }
    }
}
