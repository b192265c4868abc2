use serde_json::Value;

use crate::cli::OutputFormat;

/// Print an API response: pretty JSON, or one line per Like/View record
pub fn output_value(output_format: OutputFormat, value: &Value) -> anyhow::Result<()> {
    match output_format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(value)?),
        OutputFormat::Text => println!("{}", format_text(value)),
    }
    Ok(())
}

/// Print a one-line confirmation, or the JSON payload when `--json` is set
pub fn output_success(output_format: OutputFormat, message: &str, data: &Value) -> anyhow::Result<()> {
    match output_format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(data)?),
        OutputFormat::Text => println!("✓ {}", message),
    }
    Ok(())
}

pub fn format_text(value: &Value) -> String {
    match value {
        Value::Array(records) if records.is_empty() => "(none)".to_string(),
        Value::Array(records) => records.iter().map(format_record).collect::<Vec<_>>().join("\n"),
        other => format_record(other),
    }
}

fn format_record(record: &Value) -> String {
    match (record.get("id"), record.get("pokemonId"), record.get("userId")) {
        (Some(id), Some(pokemon), Some(user)) => {
            let at = record.get("createdAt").and_then(Value::as_str).unwrap_or("-");
            format!("#{:<6} pokemon {:<6} user {:<6} {}", id, pokemon, user, at)
        }
        _ => record.to_string(),
    }
}
