use anyhow::{Context, Result, anyhow};
use serde::Serialize;
use serde_json::Value;

use crate::config::ClientConfig;
use crate::http_client::http_client;
use crate::model::PlayerData;

const ERROR_BODY_SNIPPET: usize = 160;

#[derive(Debug, Serialize)]
struct PlayerRequest<'a> {
    player_name: &'a str,
}

pub fn fetch_player_data(config: &ClientConfig, name: &str) -> Result<PlayerData> {
    let client = http_client(config.request_timeout)?;

    let resp = client
        .post(&config.player_api_url)
        .json(&PlayerRequest { player_name: name })
        .send()
        .context("request failed")?;
    let status = resp.status();
    let body = resp.text().context("failed reading body")?;
    if !status.is_success() {
        return Err(anyhow!("http {}: {}", status, snippet(&body)));
    }

    parse_player_response_json(&body, name)
}

/// Parses the `{"result": ...}` envelope. An absent, null or empty result is
/// reported as "not found"; a result carrying only an `error` string is
/// reported with the backend's message.
pub fn parse_player_response_json(raw: &str, name: &str) -> Result<PlayerData> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed == "null" {
        return Err(not_found(name));
    }

    let root: Value = serde_json::from_str(trimmed).context("invalid player json")?;
    let result = match root.get("result") {
        None | Some(Value::Null) => return Err(not_found(name)),
        Some(result) => result,
    };
    let Some(fields) = result.as_object() else {
        return Err(anyhow!("unexpected result shape"));
    };
    if fields.is_empty() {
        return Err(not_found(name));
    }
    if !fields.contains_key("player_profile")
        && let Some(message) = fields.get("error").and_then(Value::as_str)
    {
        return Err(anyhow!("{}", message.trim()));
    }

    let data: PlayerData =
        serde_json::from_value(result.clone()).context("invalid player payload")?;
    if is_blank(&data) {
        return Err(not_found(name));
    }
    Ok(data)
}

pub fn not_found_message(name: &str) -> String {
    format!("No player data found for \"{name}\"")
}

fn not_found(name: &str) -> anyhow::Error {
    anyhow!(not_found_message(name))
}

fn is_blank(data: &PlayerData) -> bool {
    data.player_profile.name.is_none()
        && data.formats.is_empty()
        && data.achievements.is_empty()
        && data.summary.is_none()
}

fn snippet(body: &str) -> String {
    let flat = body.split_whitespace().collect::<Vec<_>>().join(" ");
    if flat.chars().count() <= ERROR_BODY_SNIPPET {
        return flat;
    }
    let mut out: String = flat.chars().take(ERROR_BODY_SNIPPET).collect();
    out.push('…');
    out
}
