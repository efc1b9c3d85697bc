use std::time::{Duration, Instant};

use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use crate::model::PlayerData;
use crate::state::{AppState, Focus, PageStatus};
use crate::theme::Palette;
use crate::ui::achievements::render_achievements;
use crate::ui::format_stats::render_format_stats;
use crate::ui::profile::render_profile;
use crate::ui::summary::render_summary;

pub const LOADING_MESSAGES: [&str; 5] = [
    "Fetching player details...",
    "Fetching achievements...",
    "Fetching stats...",
    "Fetching opponent-wise stats...",
    "Converting data into stats...",
];
const LOADER_STEP: Duration = Duration::from_secs(9);
const SPINNER: [&str; 4] = ["|", "/", "-", "\\"];

const FEATURES: [(&str, &str); 3] = [
    (
        "Player Profiles",
        "Background, roles and teams for any cricketer.",
    ),
    (
        "Advanced Stats",
        "Batting, bowling and fielding across Test, ODI, T20I and IPL.",
    ),
    (
        "Opponent Breakdowns",
        "How a player fares against every side they have faced.",
    ),
];

pub fn loading_message(elapsed: Duration) -> &'static str {
    let step = (elapsed.as_secs() / LOADER_STEP.as_secs()) as usize;
    LOADING_MESSAGES[step % LOADING_MESSAGES.len()]
}

pub fn error_line(message: &str) -> String {
    format!("Error: {message}")
}

pub fn render_page(frame: &mut Frame, area: Rect, state: &AppState, palette: &Palette, now: Instant) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(1)])
        .split(area);

    render_search_box(frame, chunks[0], state, palette);

    let body = chunks[1];
    match state.status() {
        PageStatus::Empty => render_landing(frame, body, palette),
        PageStatus::Searching => render_loader(frame, body, state, palette, now),
        PageStatus::Error => {
            let message = state.error.as_deref().unwrap_or_default();
            let paragraph = Paragraph::new(error_line(message))
                .style(palette.error)
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true });
            frame.render_widget(paragraph, centered_line(body));
        }
        PageStatus::Displaying => {
            if let Some(data) = state.data.as_ref() {
                render_player(frame, body, state, data, palette);
            }
        }
    }
}

fn render_search_box(frame: &mut Frame, area: Rect, state: &AppState, palette: &Palette) {
    let focused = state.focus == Focus::Search;
    let can_submit = !state.input.trim().is_empty();

    let mut spans = Vec::new();
    if state.input.is_empty() {
        spans.push(Span::styled("Enter player name", palette.muted));
    } else {
        spans.push(Span::styled(state.input.clone(), palette.base));
    }
    if focused {
        spans.push(Span::styled("▏", palette.accent));
    }
    let hint_style = if can_submit { palette.accent } else { palette.muted };
    spans.push(Span::styled("   [Enter] Search", hint_style));

    let border = if focused { palette.accent } else { palette.border };
    let input = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .title("Player Info Lookup")
            .borders(Borders::ALL)
            .border_style(border),
    );
    frame.render_widget(input, area);
}

fn render_landing(frame: &mut Frame, area: Rect, palette: &Palette) {
    let mut lines = vec![
        Line::from(Span::styled("Welcome to Cricket Terminal", palette.heading)),
        Line::from(""),
        Line::from(Span::styled(
            "Track players, analyze matchups and dig into performances.",
            palette.base,
        )),
        Line::from(""),
    ];
    for (title, desc) in FEATURES {
        lines.push(Line::from(Span::styled(title, palette.accent)));
        lines.push(Line::from(Span::styled(desc, palette.muted)));
        lines.push(Line::from(""));
    }
    lines.push(Line::from(Span::styled(
        "Type a name and press Enter to begin.",
        palette.base,
    )));

    let paragraph = Paragraph::new(Text::from(lines))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).border_style(palette.border));
    frame.render_widget(paragraph, area);
}

fn render_loader(frame: &mut Frame, area: Rect, state: &AppState, palette: &Palette, now: Instant) {
    let elapsed = state.loading_elapsed(now);
    let spinner = SPINNER[(elapsed.as_millis() / 250) as usize % SPINNER.len()];
    let name = state.query.as_deref().unwrap_or_default();
    let lines = vec![
        Line::from(Span::styled(format!("{spinner} Loading {name}"), palette.accent)),
        Line::from(""),
        Line::from(Span::styled(loading_message(elapsed), palette.base)),
        Line::from(Span::styled(
            format!("{}s elapsed", elapsed.as_secs()),
            palette.muted,
        )),
    ];
    let paragraph = Paragraph::new(Text::from(lines)).alignment(Alignment::Center);
    frame.render_widget(paragraph, centered_block(area, 4));
}

fn render_player(frame: &mut Frame, area: Rect, state: &AppState, data: &PlayerData, palette: &Palette) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(16),
            Constraint::Min(12),
            Constraint::Length(1),
        ])
        .split(area);

    let top = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(rows[0]);
    render_profile(frame, top[0], data, &state.thumbnail, palette);

    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(top[1]);
    render_achievements(frame, right[0], &data.achievements, palette);
    render_summary(frame, right[1], data.summary.as_deref(), palette);

    render_format_stats(
        frame,
        rows[1],
        &data.format_names(),
        state.selected_format,
        state.selected_format(),
        state.opponent_scroll,
        palette,
    );

    if let Some(note) = data.note.as_deref().filter(|note| !note.trim().is_empty()) {
        let footer = Paragraph::new(note.trim().to_string())
            .style(palette.muted.add_modifier(Modifier::ITALIC))
            .alignment(Alignment::Center);
        frame.render_widget(footer, rows[2]);
    }
}

fn centered_line(area: Rect) -> Rect {
    centered_block(area, 1)
}

fn centered_block(area: Rect, height: u16) -> Rect {
    let height = height.min(area.height);
    Rect {
        x: area.x,
        y: area.y + (area.height - height) / 2,
        width: area.width,
        height,
    }
}
