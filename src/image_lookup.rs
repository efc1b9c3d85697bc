use std::time::Duration;

use anyhow::{Context, Result, anyhow};
use reqwest::StatusCode;
use reqwest::Url;
use serde_json::Value;

use crate::config::ClientConfig;
use crate::http_client::http_client;

const LOOKUP_TIMEOUT: Duration = Duration::from_secs(10);

/// Best-effort portrait lookup against a page-summary style endpoint.
/// `Ok(None)` means the endpoint answered but had no image.
pub fn lookup_thumbnail(config: &ClientConfig, name: &str) -> Result<Option<String>> {
    let Some(base) = config.image_lookup_url.as_deref() else {
        return Ok(None);
    };
    let url = build_lookup_url(base, name)?;
    let client = http_client(config.request_timeout)?;

    let resp = client
        .get(url)
        .timeout(lookup_timeout(config))
        .send()
        .context("request failed")?;
    let status = resp.status();
    if status == StatusCode::NOT_FOUND {
        return Ok(None);
    }
    let body = resp.text().context("failed reading body")?;
    if !status.is_success() {
        return Err(anyhow!("http {status}"));
    }
    Ok(parse_thumbnail_json(&body))
}

/// The portrait is optional, so it never waits as long as the player request.
pub fn lookup_timeout(config: &ClientConfig) -> Duration {
    config.request_timeout.min(LOOKUP_TIMEOUT)
}

pub fn build_lookup_url(base: &str, name: &str) -> Result<Url> {
    let title = name.split_whitespace().collect::<Vec<_>>().join("_");
    if title.is_empty() {
        return Err(anyhow!("empty lookup name"));
    }
    let mut url = Url::parse(base.trim()).context("invalid image lookup url")?;
    url.path_segments_mut()
        .map_err(|_| anyhow!("image lookup url cannot take a path"))?
        .pop_if_empty()
        .push(&title);
    Ok(url)
}

pub fn parse_thumbnail_json(raw: &str) -> Option<String> {
    let root: Value = serde_json::from_str(raw.trim()).ok()?;
    ["thumbnail", "originalimage"]
        .iter()
        .filter_map(|key| root.get(*key))
        .filter_map(|image| image.get("source").and_then(Value::as_str))
        .map(str::trim)
        .find(|source| !source.is_empty())
        .map(str::to_string)
}
