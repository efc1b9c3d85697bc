use std::collections::HashMap;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

pub const PLACEHOLDER: &str = "-";

/// Fixed display order for the formats the backend knows about. Unknown
/// formats are appended alphabetically.
pub const FORMAT_ORDER: [&str; 4] = ["Test", "ODI", "T20I", "IPL"];

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlayerData {
    #[serde(default, deserialize_with = "lenient_section")]
    pub player_profile: PlayerProfile,
    #[serde(default, deserialize_with = "lenient_section")]
    pub player_info: PlayerInfo,
    #[serde(default, deserialize_with = "lenient_formats")]
    pub formats: HashMap<String, FormatStats>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub summary: Option<String>,
    #[serde(default, deserialize_with = "lenient_strings")]
    pub achievements: Vec<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub image_url: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub note: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlayerProfile {
    #[serde(default, deserialize_with = "lenient_text")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub also_known_as: Option<String>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub age_as_of_jan_2025: Option<f64>,
    #[serde(default, deserialize_with = "lenient_section")]
    pub origin: PlayerOrigin,
    #[serde(default, deserialize_with = "lenient_text")]
    pub background: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlayerOrigin {
    #[serde(default, deserialize_with = "lenient_text")]
    pub country: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub state: Option<String>,
    #[serde(default, deserialize_with = "lenient_strings")]
    pub teams: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlayerInfo {
    #[serde(default, deserialize_with = "lenient_text")]
    pub role: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub batting_handedness: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub bowling_style: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FormatStats {
    #[serde(default, deserialize_with = "lenient_section")]
    pub batting: BattingSummary,
    #[serde(default, deserialize_with = "lenient_section")]
    pub bowling: BowlingSummary,
    #[serde(default, deserialize_with = "lenient_section")]
    pub fielding: FieldingSummary,
    #[serde(default, deserialize_with = "lenient_rows")]
    pub batting_vs_opponents: Vec<OpponentStats>,
    #[serde(default, deserialize_with = "lenient_rows")]
    pub bowling_vs_opponents: Vec<OpponentStats>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BattingSummary {
    #[serde(default, deserialize_with = "lenient_number")]
    pub matches: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub innings: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub runs: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub average: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub strike_rate: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub fifties: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub hundreds: Option<f64>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub high_score: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BowlingSummary {
    #[serde(default, deserialize_with = "lenient_number")]
    pub matches: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub innings_bowled: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub wickets: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub average: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub economy: Option<f64>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub best: Option<String>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub four_wicket_hauls: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub five_wicket_hauls: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FieldingSummary {
    #[serde(default, deserialize_with = "lenient_number")]
    pub catches: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub stumpings: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub run_outs: Option<f64>,
}

/// One row of a batting-vs or bowling-vs breakdown. Batting rows leave the
/// bowling fields empty and vice versa.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OpponentStats {
    #[serde(default, deserialize_with = "lenient_text")]
    pub opponent: Option<String>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub matches: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub runs: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub average: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub strike_rate: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub fifties: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub hundreds: Option<f64>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub high_score: Option<String>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub wickets: Option<f64>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub best: Option<String>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub economy: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub four_wicket_hauls: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub five_wicket_hauls: Option<f64>,
}

impl PlayerData {
    pub fn format_names(&self) -> Vec<String> {
        let mut names: Vec<String> = FORMAT_ORDER
            .iter()
            .filter(|name| self.formats.contains_key(**name))
            .map(|name| name.to_string())
            .collect();
        let mut extra: Vec<String> = self
            .formats
            .keys()
            .filter(|key| !FORMAT_ORDER.contains(&key.as_str()))
            .cloned()
            .collect();
        extra.sort();
        names.extend(extra);
        names
    }

    pub fn format_at(&self, index: usize) -> Option<(String, &FormatStats)> {
        let name = self.format_names().into_iter().nth(index)?;
        let stats = self.formats.get(&name)?;
        Some((name, stats))
    }

    /// Name used for the thumbnail lookup: the profile name when the backend
    /// supplied one, otherwise whatever the user searched for.
    pub fn lookup_name<'a>(&'a self, query: &'a str) -> &'a str {
        self.player_profile
            .name
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .unwrap_or(query)
    }
}

/// Runs from a high-score string such as `"105*"`; malformed input yields 0.
pub fn high_score_runs(raw: &str) -> u64 {
    raw.trim()
        .trim_end_matches('*')
        .trim()
        .parse::<u64>()
        .unwrap_or(0)
}

/// Wickets from a best-figures string such as `"4/20"`; malformed input yields 0.
pub fn best_bowling_wickets(raw: &str) -> u64 {
    raw.split('/')
        .next()
        .map(str::trim)
        .and_then(|head| head.parse::<u64>().ok())
        .unwrap_or(0)
}

pub fn display_number(value: Option<f64>) -> String {
    match value {
        Some(v) if v.is_finite() && v.fract() == 0.0 && v.abs() < 1e15 => {
            format!("{}", v as i64)
        }
        Some(v) if v.is_finite() => format!("{v:.2}"),
        _ => PLACEHOLDER.to_string(),
    }
}

pub fn display_text(value: Option<&str>) -> String {
    match value.map(str::trim) {
        Some(text) if !text.is_empty() => text.to_string(),
        _ => PLACEHOLDER.to_string(),
    }
}

/// Object-shaped sections; anything else (null, "did not bowl", 0) is empty.
fn section_from_value<T: DeserializeOwned>(value: Value) -> Option<T> {
    match value {
        Value::Object(_) => serde_json::from_value(value).ok(),
        _ => None,
    }
}

fn lenient_section<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + DeserializeOwned,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.and_then(section_from_value).unwrap_or_default())
}

fn lenient_rows<'de, D>(deserializer: D) -> Result<Vec<OpponentStats>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Array(items)) => items.into_iter().filter_map(section_from_value).collect(),
        _ => Vec::new(),
    })
}

// Formats that are not objects are left out, so no empty tab appears.
fn lenient_formats<'de, D>(deserializer: D) -> Result<HashMap<String, FormatStats>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Object(entries)) => entries
            .into_iter()
            .filter_map(|(name, stats)| Some((name, section_from_value::<FormatStats>(stats)?)))
            .collect(),
        _ => HashMap::new(),
    })
}

fn lenient_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
        _ => None,
    })
}

fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(s)) => Some(s),
        Some(Value::Number(n)) => Some(n.to_string()),
        Some(Value::Bool(b)) => Some(b.to_string()),
        _ => None,
    })
}

fn lenient_strings<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Array(items)) => items
            .into_iter()
            .filter_map(|item| match item {
                Value::String(s) => Some(s),
                Value::Number(n) => Some(n.to_string()),
                _ => None,
            })
            .collect(),
        Some(Value::String(s)) if !s.trim().is_empty() => vec![s],
        _ => Vec::new(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn high_score_strips_not_out_marker() {
        assert_eq!(high_score_runs("105*"), 105);
        assert_eq!(high_score_runs("48"), 48);
        assert_eq!(high_score_runs(" 183 "), 183);
        assert_eq!(high_score_runs(""), 0);
        assert_eq!(high_score_runs("n/a"), 0);
        assert_eq!(high_score_runs("*"), 0);
    }

    #[test]
    fn best_bowling_takes_wickets_prefix() {
        assert_eq!(best_bowling_wickets("4/20"), 4);
        assert_eq!(best_bowling_wickets("10/74"), 10);
        assert_eq!(best_bowling_wickets("3"), 3);
        assert_eq!(best_bowling_wickets("/20"), 0);
        assert_eq!(best_bowling_wickets("four/20"), 0);
        assert_eq!(best_bowling_wickets(""), 0);
    }

    #[test]
    fn display_helpers_use_placeholder() {
        assert_eq!(display_number(None), "-");
        assert_eq!(display_number(Some(42.0)), "42");
        assert_eq!(display_number(Some(48.456)), "48.46");
        assert_eq!(display_text(None), "-");
        assert_eq!(display_text(Some("   ")), "-");
        assert_eq!(display_text(Some("6/45")), "6/45");
    }
}
