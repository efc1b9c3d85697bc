use std::time::Instant;

use chrono::Datelike;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::state::{AppState, Focus, PageStatus};
use crate::theme::Palette;

pub mod achievements;
pub mod format_stats;
pub mod page;
pub mod profile;
pub mod summary;

const CONSOLE_LINES: usize = 3;

pub fn draw(frame: &mut Frame, state: &AppState, palette: &Palette, now: Instant) {
    let area = frame.size();
    frame.render_widget(Block::default().style(palette.base), area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(1),
            Constraint::Length(CONSOLE_LINES as u16 + 2),
            Constraint::Length(1),
        ])
        .split(area);

    let header = Paragraph::new(header_text(state, palette))
        .style(palette.heading)
        .block(Block::default().borders(Borders::BOTTOM).border_style(palette.border));
    frame.render_widget(header, chunks[0]);

    page::render_page(frame, chunks[1], state, palette, now);

    let console = Paragraph::new(console_text(state))
        .style(palette.muted)
        .block(
            Block::default()
                .title("Console")
                .borders(Borders::ALL)
                .border_style(palette.border),
        );
    frame.render_widget(console, chunks[2]);

    let footer = Paragraph::new(footer_text(state, chrono::Local::now().year())).style(palette.muted);
    frame.render_widget(footer, chunks[3]);

    if state.help_overlay {
        render_help_overlay(frame, area, palette);
    }
}

pub fn header_text(state: &AppState, palette: &Palette) -> String {
    let line1 = format!(
        "  (o)  CRICKET TERMINAL | {} | theme: {}",
        status_label(state.status()),
        palette.theme.label()
    );
    let line2 = "  /|\\".to_string();
    format!("{line1}\n{line2}")
}

pub fn footer_text(state: &AppState, year: i32) -> String {
    let keys = match state.focus {
        Focus::Search => "Type name | Enter Search | Esc Browse | Ctrl-C Quit",
        Focus::Browse => {
            "/ Search | ←/→ Format | j/k Scroll | t Theme | ? Help | q Quit"
        }
    };
    format!("{keys}   © {year} Cricket Terminal")
}

pub fn console_text(state: &AppState) -> String {
    if state.logs.is_empty() {
        return "No messages yet".to_string();
    }
    let start = state.logs.len().saturating_sub(CONSOLE_LINES);
    state
        .logs
        .iter()
        .skip(start)
        .cloned()
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn status_label(status: PageStatus) -> &'static str {
    match status {
        PageStatus::Empty => "READY",
        PageStatus::Searching => "SEARCHING",
        PageStatus::Error => "ERROR",
        PageStatus::Displaying => "PLAYER",
    }
}

fn render_help_overlay(frame: &mut Frame, area: Rect, palette: &Palette) {
    let popup_area = centered_rect(60, 60, area);
    frame.render_widget(Clear, popup_area);

    let text = [
        "Cricket Terminal - Help",
        "",
        "Search box:",
        "  type         Edit player name",
        "  Enter        Search",
        "  Esc          Leave search box",
        "",
        "Browse:",
        "  / or s       Focus search box",
        "  ←/→ or h/l   Switch format",
        "  j/k or ↑/↓   Scroll opponent tables",
        "  t            Toggle light/dark theme",
        "  ?            Toggle help",
        "  q            Quit",
        "",
        "Ctrl-C quits from anywhere.",
    ]
    .join("\n");

    let help = Paragraph::new(text)
        .block(
            Block::default()
                .title("Help")
                .borders(Borders::ALL)
                .border_style(palette.accent),
        )
        .style(palette.base);
    frame.render_widget(help, popup_area);
}

fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1]);

    horizontal[1]
}
