use std::io;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use ratatui::Terminal;
use ratatui::crossterm::event;
use ratatui::crossterm::event::{
    DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
};
use ratatui::crossterm::execute;
use ratatui::crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::prelude::CrosstermBackend;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

use resume_parser_core::{ExtractionService, HttpExtractionService};

mod action;
mod app;
mod backend;
mod config_file;
mod input;
mod logging;
mod theme;
mod tui_event;
mod view;

use app::App;
use config_file::CliOverrides;

/// Resume Parser: extract key information from a resume PDF in the terminal.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Resume PDF to select at startup
    pdf_path: Option<PathBuf>,

    /// Extraction endpoint URL
    #[arg(long)]
    endpoint: Option<String>,

    /// Request timeout in seconds
    #[arg(long)]
    timeout: Option<u64>,

    /// Config file to use instead of the default cascade
    #[arg(long)]
    config: Option<PathBuf>,

    /// Log level or filter directive (overridden by RUST_LOG)
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let args = Args::parse();

    // Resolve config from CLI flags > env vars > config file > defaults
    let file_config = config_file::load_config(args.config.as_deref());
    let cli = CliOverrides {
        endpoint: args.endpoint.clone(),
        timeout_secs: args.timeout,
        log_level: args.log_level.clone(),
    };
    let settings = config_file::resolve(&cli, |k| std::env::var(k).ok(), &file_config);

    let log_dir = settings
        .log_dir
        .clone()
        .unwrap_or_else(logging::default_log_dir);
    // Keep the guard alive so buffered log lines are flushed on exit.
    let _log_guard = match logging::init(&settings.log_level, &log_dir) {
        Ok(guard) => Some(guard),
        Err(e) => {
            eprintln!("file logging disabled: {e}");
            None
        }
    };
    tracing::info!(
        endpoint = %settings.endpoint,
        timeout_secs = settings.timeout.as_secs(),
        "starting resume parser"
    );

    let service: Arc<dyn ExtractionService> = Arc::new(HttpExtractionService::new(
        settings.endpoint.clone(),
        settings.timeout,
    )?);

    // Initialize terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(
        stdout,
        EnterAlternateScreen,
        EnableMouseCapture,
        EnableBracketedPaste
    )?;

    // Install panic hook that restores terminal before printing panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(
            io::stdout(),
            LeaveAlternateScreen,
            DisableMouseCapture,
            DisableBracketedPaste
        );
        original_hook(panic_info);
    }));

    let backend_terminal = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend_terminal)?;

    // Drain any stray input events (e.g. Enter keypress from launching the command)
    while event::poll(Duration::from_millis(50)).unwrap_or(false) {
        let _ = event::read();
    }

    let mut app = App::new(theme::Theme::default());

    // A path on the command line goes through the same route as the picker
    if let Some(path) = &args.pdf_path {
        app.select_path(path);
    }

    // Set up backend command channel
    let (event_tx, mut event_rx) = mpsc::unbounded_channel();
    let (cmd_tx, cmd_rx) = mpsc::unbounded_channel::<tui_event::BackendCommand>();
    let cancel = CancellationToken::new();

    app.backend_cmd_tx = Some(cmd_tx);

    tokio::spawn(backend::listen(service, cmd_rx, event_tx, cancel.clone()));

    // Also handle Ctrl+C at the OS level for clean shutdown
    let cancel_for_signal = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            cancel_for_signal.cancel();
        }
    });

    // Main event loop
    let tick_rate = Duration::from_millis(100);

    loop {
        terminal.draw(|f| app.view(f))?;

        tokio::select! {
            maybe_event = event_rx.recv() => {
                if let Some(backend_event) = maybe_event {
                    app.handle_backend_event(backend_event);
                    // Drain any additional queued backend events
                    while let Ok(evt) = event_rx.try_recv() {
                        app.handle_backend_event(evt);
                    }
                }
            }
            _ = cancel.cancelled() => {
                app.should_quit = true;
            }
            // Terminal input events
            _ = async {
                if event::poll(tick_rate).unwrap_or(false)
                    && let Ok(evt) = event::read()
                {
                    let action = input::map_event(&evt, &app.input_mode);
                    app.update(action);
                }
            } => {}
        }

        app.update(action::Action::Tick);

        if app.should_quit {
            cancel.cancel();
            break;
        }
    }

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture,
        DisableBracketedPaste
    )?;
    tracing::info!("exiting");

    Ok(())
}
