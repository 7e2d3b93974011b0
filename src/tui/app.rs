use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;
use std::io::stdout;
use std::path::Path;
use std::time::Duration;
use tracing::{debug, info, instrument, warn};

use crate::site::Site;
use crate::theme::ThemeStore;

use super::state::BrowserState;
use super::ui::render;

/// Run the gallery browser over a site directory
#[instrument(skip_all, fields(site = %site_path.display()))]
pub fn run_browser(site_path: &Path) -> Result<()> {
    info!("starting browser");

    let site = Site::open(site_path)?;
    let theme_store = match ThemeStore::default_location() {
        Ok(store) => Some(store),
        Err(e) => {
            warn!(error = %e, "theme preference will not be saved");
            None
        }
    };
    let mut state = BrowserState::new(site, theme_store)?;
    if state.site.projects().is_empty() {
        state.set_status_message("No projects yet. Add some with 'folio update'");
    }

    // Setup terminal
    debug!("setting up terminal");
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let result = run_app(&mut terminal, &mut state);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    info!("browser closed");
    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    state: &mut BrowserState,
) -> Result<()> {
    loop {
        terminal.draw(|frame| render(frame, state))?;

        if event::poll(Duration::from_secs(1))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    if let KeyAction::Quit = handle_key(key.code, state)? {
                        return Ok(());
                    }
                }
            }
        }

        // Drain pending events so rapid typing in the query box does not lag
        while event::poll(Duration::ZERO)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    if let KeyAction::Quit = handle_key(key.code, state)? {
                        return Ok(());
                    }
                }
            }
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
enum KeyAction {
    Quit,
    Continue,
}

/// Handle a key press. Returns KeyAction indicating what to do next.
fn handle_key(code: KeyCode, state: &mut BrowserState) -> Result<KeyAction> {
    // Help overlay swallows everything until closed
    if state.show_help {
        if matches!(code, KeyCode::Char('?') | KeyCode::Esc | KeyCode::Char('q')) {
            state.show_help = false;
        }
        return Ok(KeyAction::Continue);
    }

    // Query box captures typing while editing
    if state.search.editing {
        match code {
            KeyCode::Esc => state.cancel_search(),
            KeyCode::Enter => state.finish_search(),
            KeyCode::Backspace => state.search_backspace(),
            KeyCode::Char(c) => state.search_char(c),
            _ => {}
        }
        return Ok(KeyAction::Continue);
    }

    state.clear_status_message();

    match code {
        KeyCode::Char('q') => return Ok(KeyAction::Quit),
        KeyCode::Char('j') | KeyCode::Down => state.move_down(),
        KeyCode::Char('k') | KeyCode::Up => state.move_up(),
        KeyCode::Tab => state.toggle_focus(),
        KeyCode::Enter | KeyCode::Char(' ') => state.activate(),
        KeyCode::Char('/') => state.start_search(),
        KeyCode::Esc => state.cancel_search(),
        KeyCode::Char('c') => state.clear_all(),
        KeyCode::Char(']') => state.next_tab(),
        KeyCode::Char('[') => state.previous_tab(),
        KeyCode::Char('x') => state.close_active_tab(),
        KeyCode::Char('v') => state.next_view(),
        KeyCode::Char('t') => state.toggle_theme()?,
        KeyCode::Char('?') => state.show_help = true,
        _ => {}
    }

    Ok(KeyAction::Continue)
}
