use std::collections::VecDeque;
use std::time::{Duration, Instant};

use crate::model::{FormatStats, PlayerData};

const MAX_LOGS: usize = 200;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageStatus {
    Empty,
    Searching,
    Error,
    Displaying,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Search,
    Browse,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Thumbnail {
    Idle,
    Pending,
    Found(String),
    Missing,
}

#[derive(Debug, Clone)]
pub struct AppState {
    pub input: String,
    pub focus: Focus,
    pub query: Option<String>,
    pub request_id: u64,
    pub loading: bool,
    pub loading_since: Option<Instant>,
    pub data: Option<PlayerData>,
    pub error: Option<String>,
    pub thumbnail: Thumbnail,
    pub selected_format: usize,
    pub opponent_scroll: u16,
    pub logs: VecDeque<String>,
    pub help_overlay: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone)]
pub enum Delta {
    PlayerLoaded {
        request_id: u64,
        data: Box<PlayerData>,
    },
    PlayerFailed {
        request_id: u64,
        message: String,
    },
    ThumbnailResolved {
        request_id: u64,
        url: Option<String>,
    },
    Log(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProviderCommand {
    FetchPlayer { request_id: u64, name: String },
}

impl AppState {
    pub fn new() -> Self {
        Self {
            input: String::new(),
            focus: Focus::Search,
            query: None,
            request_id: 0,
            loading: false,
            loading_since: None,
            data: None,
            error: None,
            thumbnail: Thumbnail::Idle,
            selected_format: 0,
            opponent_scroll: 0,
            logs: VecDeque::with_capacity(MAX_LOGS),
            help_overlay: false,
        }
    }

    pub fn status(&self) -> PageStatus {
        if self.loading {
            PageStatus::Searching
        } else if self.error.is_some() {
            PageStatus::Error
        } else if self.data.is_some() {
            PageStatus::Displaying
        } else {
            PageStatus::Empty
        }
    }

    /// Starts a search for the trimmed input. Returns the command for the
    /// fetch worker, or `None` when nothing should be requested (blank input,
    /// or the same name is already in flight).
    pub fn submit_search(&mut self) -> Option<ProviderCommand> {
        let name = self.input.trim().to_string();
        if name.is_empty() {
            return None;
        }
        if self.loading && self.query.as_deref() == Some(name.as_str()) {
            return None;
        }

        self.request_id += 1;
        self.query = Some(name.clone());
        self.data = None;
        self.error = None;
        self.thumbnail = Thumbnail::Idle;
        self.opponent_scroll = 0;
        self.loading = true;
        self.loading_since = Some(Instant::now());
        self.focus = Focus::Browse;
        self.push_log(format!("[INFO] Searching \"{name}\" (request {})", self.request_id));

        Some(ProviderCommand::FetchPlayer {
            request_id: self.request_id,
            name,
        })
    }

    pub fn loading_elapsed(&self, now: Instant) -> Duration {
        self.loading_since
            .map(|since| now.saturating_duration_since(since))
            .unwrap_or(Duration::ZERO)
    }

    pub fn push_input_char(&mut self, ch: char) {
        if !ch.is_control() {
            self.input.push(ch);
        }
    }

    pub fn pop_input_char(&mut self) {
        self.input.pop();
    }

    pub fn format_names(&self) -> Vec<String> {
        self.data
            .as_ref()
            .map(PlayerData::format_names)
            .unwrap_or_default()
    }

    pub fn selected_format(&self) -> Option<(String, &FormatStats)> {
        self.data.as_ref()?.format_at(self.selected_format)
    }

    pub fn select_next_format(&mut self) {
        let total = self.format_names().len();
        if total == 0 {
            return;
        }
        self.selected_format = (self.selected_format + 1) % total;
        self.opponent_scroll = 0;
    }

    pub fn select_prev_format(&mut self) {
        let total = self.format_names().len();
        if total == 0 {
            return;
        }
        self.selected_format = if self.selected_format == 0 {
            total - 1
        } else {
            self.selected_format - 1
        };
        self.opponent_scroll = 0;
    }

    pub fn scroll_opponents_down(&mut self) {
        let max_rows = self
            .selected_format()
            .map(|(_, stats)| {
                stats
                    .batting_vs_opponents
                    .len()
                    .max(stats.bowling_vs_opponents.len())
            })
            .unwrap_or(0);
        let max_scroll = max_rows.saturating_sub(1).min(u16::MAX as usize) as u16;
        if self.opponent_scroll < max_scroll {
            self.opponent_scroll += 1;
        }
    }

    pub fn scroll_opponents_up(&mut self) {
        self.opponent_scroll = self.opponent_scroll.saturating_sub(1);
    }

    pub fn push_log(&mut self, msg: impl Into<String>) {
        self.logs.push_back(msg.into());
        while self.logs.len() > MAX_LOGS {
            self.logs.pop_front();
        }
    }

    fn is_current(&self, request_id: u64) -> bool {
        request_id == self.request_id
    }
}

pub fn apply_delta(state: &mut AppState, delta: Delta) {
    match delta {
        Delta::PlayerLoaded { request_id, data } => {
            if !state.is_current(request_id) {
                state.push_log(format!("[INFO] Dropped stale response (request {request_id})"));
                return;
            }
            let formats = data.formats.len();
            let name = state.query.clone().unwrap_or_default();
            state.data = Some(*data);
            state.error = None;
            state.loading = false;
            state.loading_since = None;
            state.selected_format = 0;
            state.opponent_scroll = 0;
            state.thumbnail = Thumbnail::Pending;
            state.push_log(format!("[INFO] Loaded \"{name}\" ({formats} formats)"));
        }
        Delta::PlayerFailed {
            request_id,
            message,
        } => {
            if !state.is_current(request_id) {
                state.push_log(format!("[INFO] Dropped stale error (request {request_id})"));
                return;
            }
            state.push_log(format!("[WARN] Lookup failed: {message}"));
            state.error = Some(message);
            state.data = None;
            state.loading = false;
            state.loading_since = None;
            state.thumbnail = Thumbnail::Idle;
        }
        Delta::ThumbnailResolved { request_id, url } => {
            if !state.is_current(request_id) || state.data.is_none() {
                return;
            }
            state.thumbnail = match url {
                Some(url) => Thumbnail::Found(url),
                None => Thumbnail::Missing,
            };
        }
        Delta::Log(msg) => state.push_log(msg),
    }
}
