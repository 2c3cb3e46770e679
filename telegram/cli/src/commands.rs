//! Subcommand implementations. Each runs one client operation and returns
//! the text to print.

use serde_json::{Value, json};
use telegram_lib::types::Update;
use telegram_lib::{BotClient, Params};

use crate::error::CliError;

/// Parses a `key=value` option. The value is read as JSON when it parses,
/// otherwise kept as a string (`parse_mode=HTML` → `"HTML"`).
pub fn parse_option(raw: &str) -> Result<(String, Value), String> {
    let (key, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected KEY=VALUE, got '{raw}'"))?;
    let key = key.trim();
    if key.is_empty() {
        return Err(format!("empty key in '{raw}'"));
    }

    let value = serde_json::from_str(value).unwrap_or_else(|_| Value::String(value.to_string()));
    Ok((key.to_string(), value))
}

fn to_params(options: Vec<(String, Value)>) -> Params {
    options.into_iter().collect()
}

pub async fn send(
    client: &BotClient,
    chat_id: i64,
    text: &str,
    parse_mode: Option<String>,
    options: Vec<(String, Value)>,
) -> Result<String, CliError> {
    let mut params = Params::new();
    if let Some(mode) = parse_mode {
        params.insert("parse_mode".into(), json!(mode));
    }
    params.extend(to_params(options));

    let result = client.send_message(chat_id, text, params).await?;

    // The message is already sent; only `message_id` is read back.
    Ok(match result.get("message_id").and_then(Value::as_i64) {
        Some(id) => format!("Message sent. ID: {id}"),
        None => format!("Message sent. Result: {result}"),
    })
}

pub async fn updates(
    client: &BotClient,
    offset: Option<i64>,
    limit: Option<u32>,
    options: Vec<(String, Value)>,
) -> Result<String, CliError> {
    let mut params = Params::new();
    if let Some(offset) = offset {
        params.insert("offset".into(), json!(offset));
    }
    if let Some(limit) = limit {
        params.insert("limit".into(), json!(limit));
    }
    params.extend(to_params(options));

    let result = client.get_updates(params).await?;
    let updates: Vec<Update> = serde_json::from_value(result)?;

    if updates.is_empty() {
        return Ok("No pending updates.".to_string());
    }

    let lines: Vec<String> = updates
        .iter()
        .map(|update| match update.any_message() {
            Some(message) => format!(
                "{}\tchat {}\t{}",
                update.update_id,
                message.chat.id,
                message.text.as_deref().unwrap_or("<no text>")
            ),
            None => format!("{}\t<non-message update>", update.update_id),
        })
        .collect();

    Ok(lines.join("\n"))
}

pub async fn delete(client: &BotClient, chat_id: i64, message_id: i64) -> Result<String, CliError> {
    let deleted = client.delete_message(chat_id, message_id).await?;
    Ok(if deleted {
        format!("Message {message_id} deleted.")
    } else {
        format!("Message {message_id} was not deleted.")
    })
}

pub async fn webhook(
    client: &BotClient,
    url: &str,
    options: Vec<(String, Value)>,
) -> Result<String, CliError> {
    let set = client.set_webhook(url, to_params(options)).await?;
    Ok(if set {
        format!("Webhook set to {url}.")
    } else {
        "Webhook was not set.".to_string()
    })
}
