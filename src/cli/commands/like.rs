use clap::Subcommand;
use serde_json::json;

use crate::cli::client::ApiClient;
use crate::cli::utils::{output_success, output_value};
use crate::cli::OutputFormat;

#[derive(Subcommand, Debug)]
pub enum LikeCommands {
    #[command(about = "Like a Pokemon as the token's user")]
    Add {
        #[arg(help = "Pokemon id")]
        pokemon_id: i32,
    },

    #[command(about = "List likes (your own unless --user-id is given)")]
    List {
        #[arg(long, help = "List another user's likes")]
        user_id: Option<i32>,
    },

    #[command(about = "Remove all of your likes for a Pokemon")]
    Remove {
        #[arg(help = "Pokemon id")]
        pokemon_id: i32,
    },
}

pub async fn handle(cmd: LikeCommands, client: &ApiClient, output_format: OutputFormat) -> anyhow::Result<()> {
    match cmd {
        LikeCommands::Add { pokemon_id } => {
            let like = client.post("/api/like", json!({ "pokemonId": pokemon_id })).await?;
            output_success(output_format, &format!("Liked pokemon {}", pokemon_id), &like)
        }
        LikeCommands::List { user_id } => {
            let query: Vec<(&str, String)> = user_id.map(|id| ("userId", id.to_string())).into_iter().collect();
            let likes = client.get("/api/like", &query).await?;
            output_value(output_format, &likes)
        }
        LikeCommands::Remove { pokemon_id } => {
            let result = client.delete(&format!("/api/like/{}", pokemon_id)).await?;
            let count = result.get("deletedCount").and_then(|v| v.as_u64()).unwrap_or(0);
            output_success(
                output_format,
                &format!("Removed {} like(s) for pokemon {}", count, pokemon_id),
                &result,
            )
        }
    }
}
