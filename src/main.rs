use std::io;

use color_eyre::Result;
use crossterm::{
    cursor::Show,
    event::{Event, EventStream, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use ratatui::{backend::CrosstermBackend, Terminal};

use opsdesk::api::DEFAULT_API_URL;
use opsdesk::app::App;
use opsdesk::ui;

/// Environment variable overriding the backend base URL.
const API_URL_ENV: &str = "OPSDESK_API_URL";

/// Environment variable enabling file logging, e.g. `OPSDESK_LOG=debug`.
const LOG_ENV: &str = "OPSDESK_LOG";

const LOG_FILE: &str = "opsdesk.log";

fn main() -> Result<()> {
    color_eyre::install()?;
    setup_panic_hook();
    init_logging();

    let base_url = std::env::var(API_URL_ENV).unwrap_or_else(|_| DEFAULT_API_URL.to_string());

    let runtime = tokio::runtime::Runtime::new()?;
    let _guard = runtime.enter();

    let mut app = App::new(&base_url)?;

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let result = runtime.block_on(run_app(&mut terminal, &mut app));

    restore_terminal(&mut terminal)?;
    result
}

/// Stderr is owned by the TUI, so logs go to a file and only when asked.
fn init_logging() {
    let Ok(filter) = std::env::var(LOG_ENV) else {
        return;
    };
    let Ok(file) = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(LOG_FILE)
    else {
        return;
    };
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(filter))
        .with_writer(file)
        .with_ansi(false)
        .init();
}

/// Restore the terminal on panic so the error is readable.
fn setup_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, Show);
        original_hook(panic_info);
    }));
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<()> {
    let mut event_stream = EventStream::new();

    // The loop owns the receiver; spawned tasks keep senders.
    let mut message_rx = app
        .take_receiver()
        .ok_or_else(|| color_eyre::eyre::eyre!("message receiver already taken"))?;

    app.on_start();

    loop {
        terminal.draw(|frame| ui::draw(frame, app))?;

        tokio::select! {
            event_result = event_stream.next() => {
                match event_result {
                    Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => {
                        app.handle_key(key);
                    }
                    Some(Ok(_)) => {}
                    Some(Err(e)) => {
                        tracing::error!(error = %e, "terminal event stream failed");
                        return Err(e.into());
                    }
                    None => return Ok(()),
                }
            }
            msg = message_rx.recv() => {
                if let Some(msg) = msg {
                    app.handle_message(msg);
                }
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}
