use std::io;
use std::sync::mpsc;
use std::time::{Duration, Instant};

use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
    KeyModifiers,
};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::prelude::*;

use cricket_terminal::config::ClientConfig;
use cricket_terminal::provider::{HttpProfileSource, spawn_provider};
use cricket_terminal::state::{AppState, Delta, Focus, ProviderCommand, apply_delta};
use cricket_terminal::theme::ThemeStore;
use cricket_terminal::ui;

struct App {
    state: AppState,
    theme: ThemeStore,
    should_quit: bool,
    cmd_tx: Option<mpsc::Sender<ProviderCommand>>,
}

impl App {
    fn new(cmd_tx: Option<mpsc::Sender<ProviderCommand>>, theme: ThemeStore) -> Self {
        Self {
            state: AppState::new(),
            theme,
            should_quit: false,
            cmd_tx,
        }
    }

    fn on_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }
        match self.state.focus {
            Focus::Search => self.on_search_key(key),
            Focus::Browse => self.on_browse_key(key),
        }
    }

    fn on_search_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter => self.submit(),
            KeyCode::Esc => self.state.focus = Focus::Browse,
            KeyCode::Backspace => self.state.pop_input_char(),
            KeyCode::Char(ch) if key.modifiers.difference(KeyModifiers::SHIFT).is_empty() => {
                self.state.push_input_char(ch)
            }
            _ => {}
        }
    }

    fn on_browse_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('/') | KeyCode::Char('s') => {
                self.state.help_overlay = false;
                self.state.focus = Focus::Search;
            }
            KeyCode::Enter => self.submit(),
            KeyCode::Char('l') | KeyCode::Right | KeyCode::Tab => self.state.select_next_format(),
            KeyCode::Char('h') | KeyCode::Left | KeyCode::BackTab => {
                self.state.select_prev_format()
            }
            KeyCode::Char('j') | KeyCode::Down => self.state.scroll_opponents_down(),
            KeyCode::Char('k') | KeyCode::Up => self.state.scroll_opponents_up(),
            KeyCode::Char('t') | KeyCode::Char('T') => self.toggle_theme(),
            KeyCode::Char('?') => self.state.help_overlay = !self.state.help_overlay,
            KeyCode::Esc => self.state.help_overlay = false,
            _ => {}
        }
    }

    fn submit(&mut self) {
        let Some(cmd) = self.state.submit_search() else {
            return;
        };
        let ProviderCommand::FetchPlayer { request_id, .. } = &cmd;
        let request_id = *request_id;

        let sent = match &self.cmd_tx {
            Some(tx) => tx.send(cmd).is_ok(),
            None => false,
        };
        if !sent {
            apply_delta(
                &mut self.state,
                Delta::PlayerFailed {
                    request_id,
                    message: "fetch worker unavailable".to_string(),
                },
            );
        }
    }

    fn toggle_theme(&mut self) {
        match self.theme.toggle() {
            Ok(theme) => self
                .state
                .push_log(format!("[INFO] Theme: {}", theme.label())),
            Err(err) => self
                .state
                .push_log(format!("[WARN] Theme not saved: {err:#}")),
        }
    }
}

fn main() -> io::Result<()> {
    let _ = dotenvy::from_filename(".env.local");
    let _ = dotenvy::from_filename(".env");

    let config = ClientConfig::from_env();
    let mut theme = ThemeStore::load();
    if let Some(forced) = config.forced_theme {
        theme.force(forced);
    }

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = ratatui::backend::CrosstermBackend::new(stdout);
    let mut terminal = ratatui::Terminal::new(backend)?;

    let (tx, rx) = mpsc::channel();
    let (cmd_tx, cmd_rx) = mpsc::channel();
    let api_url = config.player_api_url.clone();
    spawn_provider(HttpProfileSource::new(config), tx, cmd_rx);

    let mut app = App::new(Some(cmd_tx), theme);
    app.state
        .push_log(format!("[INFO] Player API: {api_url}"));
    let res = run_app(&mut terminal, &mut app, rx);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("error: {err}");
    }
    Ok(())
}

fn run_app<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    rx: mpsc::Receiver<Delta>,
) -> io::Result<()> {
    let tick_rate = Duration::from_millis(250);
    let mut last_tick = Instant::now();

    loop {
        while let Ok(delta) = rx.try_recv() {
            apply_delta(&mut app.state, delta);
        }

        let palette = app.theme.palette();
        terminal.draw(|f| ui::draw(f, &app.state, &palette, Instant::now()))?;

        let timeout = tick_rate
            .checked_sub(last_tick.elapsed())
            .unwrap_or(Duration::ZERO);
        if event::poll(timeout)?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            app.on_key(key);
        }

        if last_tick.elapsed() >= tick_rate {
            last_tick = Instant::now();
        }

        if app.should_quit {
            return Ok(());
        }
    }
}
