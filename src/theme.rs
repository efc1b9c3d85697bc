use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use ratatui::style::{Color, Modifier, Style};
use serde::{Deserialize, Serialize};

const PREFS_DIR: &str = "cricket_terminal";
const PREFS_FILE: &str = "prefs.json";
const PREFS_VERSION: u32 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn palette(self) -> Palette {
        match self {
            Theme::Dark => Palette {
                theme: self,
                base: Style::default().fg(Color::White),
                muted: Style::default().fg(Color::DarkGray),
                accent: Style::default().fg(Color::Yellow),
                heading: Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
                error: Style::default()
                    .fg(Color::LightRed)
                    .add_modifier(Modifier::BOLD),
                highlight: Style::default().fg(Color::White).bg(Color::Blue),
                border: Style::default().fg(Color::Gray),
                batting: Color::Green,
                bowling: Color::Magenta,
            },
            Theme::Light => Palette {
                theme: self,
                base: Style::default().fg(Color::Black).bg(Color::White),
                muted: Style::default().fg(Color::Gray).bg(Color::White),
                accent: Style::default().fg(Color::Blue).bg(Color::White),
                heading: Style::default()
                    .fg(Color::Blue)
                    .bg(Color::White)
                    .add_modifier(Modifier::BOLD),
                error: Style::default()
                    .fg(Color::Red)
                    .bg(Color::White)
                    .add_modifier(Modifier::BOLD),
                highlight: Style::default().fg(Color::Black).bg(Color::LightBlue),
                border: Style::default().fg(Color::DarkGray).bg(Color::White),
                batting: Color::Green,
                bowling: Color::Red,
            },
        }
    }
}

/// Render-time styling handed to every component.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub theme: Theme,
    pub base: Style,
    pub muted: Style,
    pub accent: Style,
    pub heading: Style,
    pub error: Style,
    pub highlight: Style,
    pub border: Style,
    pub batting: Color,
    pub bowling: Color,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct PrefsFile {
    version: u32,
    theme: Theme,
}

/// Theme preference backed by a small JSON file. Falls back to the
/// terminal's advertised background when nothing usable is stored.
#[derive(Debug, Clone)]
pub struct ThemeStore {
    path: Option<PathBuf>,
    theme: Theme,
}

impl ThemeStore {
    pub fn load() -> Self {
        Self::load_from(prefs_path(), system_theme())
    }

    pub fn load_from(path: Option<PathBuf>, fallback: Theme) -> Self {
        let theme = path
            .as_deref()
            .and_then(read_prefs)
            .unwrap_or(fallback);
        Self { path, theme }
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn palette(&self) -> Palette {
        self.theme.palette()
    }

    /// Session override that is not written back.
    pub fn force(&mut self, theme: Theme) {
        self.theme = theme;
    }

    pub fn set(&mut self, theme: Theme) -> Result<()> {
        self.theme = theme;
        self.save()
    }

    pub fn toggle(&mut self) -> Result<Theme> {
        let next = self.theme.toggled();
        self.set(next)?;
        Ok(next)
    }

    fn save(&self) -> Result<()> {
        let Some(path) = self.path.as_ref() else {
            return Ok(());
        };
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir).context("create prefs dir")?;
        }
        let prefs = PrefsFile {
            version: PREFS_VERSION,
            theme: self.theme,
        };
        let json = serde_json::to_string_pretty(&prefs).context("serialize prefs")?;
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, json).context("write prefs")?;
        if let Err(err) = fs::rename(&tmp, path) {
            let _ = fs::remove_file(&tmp);
            return Err(err).context("swap prefs");
        }
        Ok(())
    }
}

fn read_prefs(path: &Path) -> Option<Theme> {
    let raw = fs::read_to_string(path).ok()?;
    let prefs = serde_json::from_str::<PrefsFile>(&raw).ok()?;
    if prefs.version != PREFS_VERSION {
        return None;
    }
    Some(prefs.theme)
}

pub fn system_theme() -> Theme {
    std::env::var("COLORFGBG")
        .ok()
        .and_then(|raw| theme_from_colorfgbg(&raw))
        .unwrap_or(Theme::Dark)
}

/// Interprets the `fg;bg` (or `fg;default;bg`) hint many terminals export.
pub fn theme_from_colorfgbg(raw: &str) -> Option<Theme> {
    let bg = raw.rsplit(';').next()?.trim().parse::<u8>().ok()?;
    match bg {
        7 | 9..=15 => Some(Theme::Light),
        0..=6 | 8 => Some(Theme::Dark),
        _ => None,
    }
}

fn prefs_path() -> Option<PathBuf> {
    prefs_path_from(
        std::env::var("XDG_CONFIG_HOME").ok(),
        std::env::var("HOME").ok(),
    )
}

fn prefs_path_from(xdg_config_home: Option<String>, home: Option<String>) -> Option<PathBuf> {
    if let Some(base) = xdg_config_home
        && !base.trim().is_empty()
    {
        return Some(PathBuf::from(base).join(PREFS_DIR).join(PREFS_FILE));
    }
    let home = home.filter(|home| !home.trim().is_empty())?;
    Some(
        PathBuf::from(home)
            .join(".config")
            .join(PREFS_DIR)
            .join(PREFS_FILE),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn colorfgbg_hint() {
        assert_eq!(theme_from_colorfgbg("15;0"), Some(Theme::Dark));
        assert_eq!(theme_from_colorfgbg("0;15"), Some(Theme::Light));
        assert_eq!(theme_from_colorfgbg("0;default;7"), Some(Theme::Light));
        assert_eq!(theme_from_colorfgbg("garbage"), None);
    }

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!(Theme::parse(" Dark "), Some(Theme::Dark));
        assert_eq!(Theme::parse("LIGHT"), Some(Theme::Light));
        assert_eq!(Theme::parse("blue"), None);
    }

    #[test]
    fn prefs_path_prefers_xdg_then_home() {
        let xdg = prefs_path_from(Some("/xdg".to_string()), Some("/home/u".to_string()));
        assert_eq!(xdg, Some(PathBuf::from("/xdg").join(PREFS_DIR).join(PREFS_FILE)));

        let home = prefs_path_from(Some("  ".to_string()), Some("/home/u".to_string()));
        assert_eq!(
            home,
            Some(
                PathBuf::from("/home/u")
                    .join(".config")
                    .join(PREFS_DIR)
                    .join(PREFS_FILE)
            )
        );

        assert_eq!(prefs_path_from(None, Some(String::new())), None);
        assert_eq!(prefs_path_from(None, None), None);
    }
}
