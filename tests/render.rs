use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use ratatui::Terminal;
use ratatui::backend::TestBackend;

use cricket_terminal::player_fetch::parse_player_response_json;
use cricket_terminal::state::{AppState, Delta, ProviderCommand, apply_delta};
use cricket_terminal::theme::Theme;
use cricket_terminal::ui;

fn render(state: &AppState, theme: Theme) -> String {
    let backend = TestBackend::new(160, 60);
    let mut terminal = Terminal::new(backend).expect("test terminal");
    let palette = theme.palette();
    terminal
        .draw(|f| ui::draw(f, state, &palette, Instant::now()))
        .expect("draw should succeed");
    let buffer = terminal.backend().buffer();
    let width = buffer.area.width as usize;
    buffer
        .content
        .chunks(width)
        .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}

fn loaded_state() -> AppState {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("tests");
    path.push("fixtures");
    path.push("player_full.json");
    let raw = fs::read_to_string(path).expect("fixture file should be readable");
    let data = parse_player_response_json(&raw, "rohan").expect("fixture should parse");

    let mut state = AppState::new();
    state.input = "Rohan Mehta".to_string();
    let cmd = state.submit_search().expect("command");
    let ProviderCommand::FetchPlayer { request_id, .. } = cmd;
    apply_delta(
        &mut state,
        Delta::PlayerLoaded {
            request_id,
            data: Box::new(data),
        },
    );
    state
}

#[test]
fn empty_state_shows_landing() {
    let screen = render(&AppState::new(), Theme::Dark);
    assert!(screen.contains("Welcome to Cricket Terminal"));
    assert!(screen.contains("Enter player name"));
}

#[test]
fn searching_state_shows_loader() {
    let mut state = AppState::new();
    state.input = "Rohan".to_string();
    state.submit_search().expect("command");
    let screen = render(&state, Theme::Light);
    assert!(screen.contains("Loading Rohan"));
    assert!(screen.contains("Fetching player details..."));
}

#[test]
fn error_state_shows_one_line_message() {
    let mut state = AppState::new();
    state.input = "Ghost".to_string();
    let ProviderCommand::FetchPlayer { request_id, .. } = state.submit_search().expect("command");
    apply_delta(
        &mut state,
        Delta::PlayerFailed {
            request_id,
            message: "No player data found for \"Ghost\"".to_string(),
        },
    );
    let screen = render(&state, Theme::Dark);
    assert!(screen.contains("Error: No player data found for \"Ghost\""));
}

#[test]
fn displaying_state_renders_all_sections() {
    let state = loaded_state();
    let screen = render(&state, Theme::Dark);
    assert!(screen.contains("Rohan Mehta"));
    assert!(screen.contains("Achievements"));
    assert!(screen.contains("Summary"));
    assert!(screen.contains("Test Stats"));
    assert!(screen.contains("Batting vs Opponents"));
    assert!(screen.contains("Australia"));
    assert!(screen.contains("All data is accurate up to January 2025."));
}

#[test]
fn formats_without_breakdowns_render() {
    let mut state = loaded_state();
    state.select_next_format();
    state.select_next_format();
    let screen = render(&state, Theme::Light);
    assert!(screen.contains("T20I Stats"));
    assert!(screen.contains("No opponent breakdown"));
}

#[test]
fn help_overlay_renders() {
    let mut state = AppState::new();
    state.help_overlay = true;
    let screen = render(&state, Theme::Dark);
    assert!(screen.contains("Cricket Terminal - Help"));
}

#[test]
fn tiny_terminal_does_not_panic() {
    let state = loaded_state();
    let backend = TestBackend::new(20, 8);
    let mut terminal = Terminal::new(backend).expect("test terminal");
    let palette = Theme::Dark.palette();
    terminal
        .draw(|f| ui::draw(f, &state, &palette, Instant::now()))
        .expect("draw should succeed");
}
