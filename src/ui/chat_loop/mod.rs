//! Terminal lifecycle and the main event loop.
//!
//! The loop owns the terminal and the [`App`]: it polls crossterm events
//! with a short timeout, drains delayed-reply deliveries between polls, and
//! redraws every tick. Teardown cancels the responder token first so no
//! reply timer can fire into a disposed UI.

mod keys;

pub use keys::{handle_key, handle_paste, LoopAction};

use std::{error::Error, io, time::Duration};

use ratatui::crossterm::{
    event::{self, DisableBracketedPaste, EnableBracketedPaste, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tokio::sync::mpsc;

use crate::core::app::App;
use crate::core::config::Config;
use crate::core::responder::{ReplyDelivery, ResponderService};
use crate::ui::renderer::ui;

const EVENT_POLL_INTERVAL: Duration = Duration::from_millis(50);

type Tui = Terminal<CrosstermBackend<io::Stdout>>;

pub async fn run_chat(
    theme_override: Option<String>,
    log_file: Option<String>,
) -> Result<(), Box<dyn Error>> {
    let config = Config::load()?;
    let (responder, mut reply_rx) = ResponderService::new();
    let mut app = App::new(
        config,
        Some(Config::config_path()),
        responder,
        log_file,
        theme_override.as_deref(),
    );

    let mut terminal = setup_terminal()?;
    let result = run_event_loop(&mut terminal, &mut app, &mut reply_rx).await;

    // Pending reply timers must die before the UI state does.
    app.session.shutdown();
    restore_terminal(&mut terminal)?;
    result
}

fn setup_terminal() -> Result<Tui, Box<dyn Error>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableBracketedPaste)?;
    let backend = CrosstermBackend::new(stdout);
    Ok(Terminal::new(backend)?)
}

fn restore_terminal(terminal: &mut Tui) -> Result<(), Box<dyn Error>> {
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        DisableBracketedPaste,
        LeaveAlternateScreen
    )?;
    terminal.show_cursor()?;
    Ok(())
}

async fn run_event_loop(
    terminal: &mut Tui,
    app: &mut App,
    reply_rx: &mut mpsc::UnboundedReceiver<ReplyDelivery>,
) -> Result<(), Box<dyn Error>> {
    loop {
        terminal.draw(|f| ui(f, app))?;

        // Fold in every reply whose timer has fired since the last tick.
        while let Ok(delivery) = reply_rx.try_recv() {
            app.conversation().apply_delivery(delivery);
        }

        if event::poll(EVENT_POLL_INTERVAL)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if handle_key(app, key) == LoopAction::Quit {
                        break;
                    }
                }
                Event::Paste(pasted) => handle_paste(app, &pasted),
                _ => {}
            }
        }

        if app.ui.exit_requested {
            break;
        }
    }
    Ok(())
}
