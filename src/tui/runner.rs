use std::io::{self, Stdout};
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tokio::sync::mpsc::UnboundedReceiver;
use tracing::info;

use crate::config::SessionConfig;
use crate::host::{HostShell, NoopHost, TerminalHost};
use crate::session::{Session, WalletEvent};
use crate::tui::app::App;
use crate::tui::events::EventHandler;
use crate::tui::ui;

const TICK_RATE: Duration = Duration::from_millis(250);

/// Run one interactive session until the user quits.
pub async fn run(config: SessionConfig, no_host: bool) -> Result<()> {
    let (session, wallet_rx) = Session::new(config);
    let mut events = EventHandler::new(TICK_RATE);

    let chrome = if no_host { None } else { TerminalHost::detect() };
    if chrome.is_none() {
        info!("host shell absent, button chrome disabled");
    }
    let host: Arc<dyn HostShell> = match &chrome {
        Some(chrome) => chrome.clone(),
        None => Arc::new(NoopHost),
    };

    let mut app = App::new(session, host, chrome, events.sender());

    let mut terminal = setup_terminal().context("Failed to setup terminal")?;
    let result = run_loop(&mut terminal, &mut app, &mut events, wallet_rx).await;

    app.teardown();
    restore_terminal(&mut terminal).context("Failed to restore terminal")?;

    result
}

async fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App,
    events: &mut EventHandler,
    mut wallet_rx: UnboundedReceiver<WalletEvent>,
) -> Result<()> {
    loop {
        terminal.draw(|frame| ui::draw(frame, app))?;

        tokio::select! {
            maybe_event = events.next() => match maybe_event {
                Some(event) => app.handle_event(event),
                None => break,
            },
            Some(event) = wallet_rx.recv() => app.apply_wallet_event(event),
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;
    Ok(())
}
