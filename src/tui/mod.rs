// File: ./src/tui/mod.rs
pub mod action;
pub mod state;
pub mod view;

use crate::cli::Cli;
use crate::logging;
use crate::tui::action::map_key;
use crate::tui::state::AppState;
use crate::tui::view::draw;
use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind, MouseEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::Backend, backend::CrosstermBackend};
use std::{io, time::Duration};
use tracing::{debug, error, info};

pub fn run(cli: &Cli) -> Result<()> {
    let config = cli.resolve_config()?;

    if let Some(path) = cli.log_file.clone().or_else(logging::default_log_path)
        && let Err(e) = logging::init(&path, &config.log_level)
    {
        // Not fatal
        eprintln!("Logging disabled: {:#}", e);
    }
    info!(sort = %config.sort_by, start_empty = config.start_empty, "farpack starting");

    // Panic Hook: give the terminal back before printing
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = restore_terminal();
        error!("PANIC: {}", panic_info);
        default_hook(panic_info);
    }));

    let mut app_state = AppState::from_config(&config);

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = event_loop(&mut terminal, &mut app_state);

    restore_terminal()?;
    terminal.show_cursor()?;

    if let Err(e) = &res {
        error!("event loop failed: {:#}", e);
    }
    info!(items = app_state.store.len(), "farpack exiting");
    res
}

fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture)?;
    Ok(())
}

fn event_loop<B: Backend>(terminal: &mut Terminal<B>, app_state: &mut AppState) -> Result<()> {
    while !app_state.should_quit {
        terminal.draw(|f| draw(f, app_state))?;

        // Short poll so the bounce emphasis clears on time
        if !event::poll(Duration::from_millis(50))? {
            continue;
        }
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                match map_key(app_state, key) {
                    Some(action) => app_state.apply(action),
                    None => debug!(code = ?key.code, "unmapped key"),
                }
            }
            Event::Mouse(mouse_event) => match mouse_event.kind {
                MouseEventKind::ScrollDown => app_state.next(),
                MouseEventKind::ScrollUp => app_state.previous(),
                _ => {}
            },
            _ => {} // Resize is handled by the next draw
        }
    }
    Ok(())
}
