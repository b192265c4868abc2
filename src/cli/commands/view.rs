use clap::Subcommand;
use serde_json::json;

use crate::cli::client::ApiClient;
use crate::cli::utils::{output_success, output_value};
use crate::cli::OutputFormat;

#[derive(Subcommand, Debug)]
pub enum ViewCommands {
    #[command(about = "Record a view of a Pokemon's page")]
    Add {
        #[arg(help = "Pokemon id")]
        pokemon_id: i32,
    },

    #[command(about = "List views (everyone's unless --user-id is given)")]
    List {
        #[arg(long, help = "Only this user's views")]
        user_id: Option<i32>,
    },
}

pub async fn handle(cmd: ViewCommands, client: &ApiClient, output_format: OutputFormat) -> anyhow::Result<()> {
    match cmd {
        ViewCommands::Add { pokemon_id } => {
            let view = client.post("/api/view", json!({ "pokemonId": pokemon_id })).await?;
            output_success(output_format, &format!("Viewed pokemon {}", pokemon_id), &view)
        }
        ViewCommands::List { user_id } => {
            let query: Vec<(&str, String)> = user_id.map(|id| ("userId", id.to_string())).into_iter().collect();
            let views = client.get("/api/view", &query).await?;
            output_value(output_format, &views)
        }
    }
}
