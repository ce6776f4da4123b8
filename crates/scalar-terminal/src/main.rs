// crates/scalar-terminal/src/main.rs

use std::path::{Path, PathBuf};
use std::{io, time::{Duration, Instant}};

use anyhow::{Context, Result};
use chrono::Utc;
use clap::Parser;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use scalar_core::Direction;
use tokio::sync::mpsc;
use tracing::info;

use scalar_terminal::app::{App, InputMode};
use scalar_terminal::config::{ClientConfig, FormVariant};
use scalar_terminal::logging::init_logging;
use scalar_terminal::network::{ApiEvent, ApiRequest, ApiWorker, HttpMarketApi};
use scalar_terminal::ui;

#[derive(Parser)]
#[command(name = "scalar-terminal")]
#[command(about = "Terminal for viewing and trading a scalar market")]
struct Cli {
    /// TOML config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Backend base URL (overrides the config file)
    #[arg(short, long)]
    base_url: Option<String>,

    /// Order form to show
    #[arg(short, long, value_enum)]
    variant: Option<FormVariant>,

    /// Enable debug logging (to a file, see --log-dir)
    #[arg(short, long)]
    debug: bool,

    /// Directory for log files
    #[arg(long)]
    log_dir: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = resolve_config(&cli)?;

    // Setup logging
    if cli.debug || config.log_dir.is_some() {
        let level = if cli.debug { "debug" } else { config.log_level.as_str() };
        let dir = config.log_dir.as_deref().unwrap_or_else(|| Path::new("."));
        init_logging(level, dir);
    }
    info!("Starting scalar-terminal against {} ({:?} form)", config.base_url, config.variant);

    let api = HttpMarketApi::new(&config.base_url, config.request_timeout())
        .context("building HTTP client")?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create app and run
    let app = App::new(config.variant, &config.base_url);
    let res = run_app(&mut terminal, app, api).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        println!("Error: {:?}", err);
    }

    Ok(())
}

fn resolve_config(cli: &Cli) -> Result<ClientConfig> {
    let mut config = match &cli.config {
        Some(path) => ClientConfig::load(path)?,
        None => ClientConfig::default(),
    };

    if let Some(base_url) = &cli.base_url {
        config.base_url = base_url.clone();
    }
    if let Some(variant) = cli.variant {
        config.variant = variant;
    }
    if let Some(dir) = &cli.log_dir {
        config.log_dir = Some(dir.clone());
    }

    config.validate()?;
    Ok(config)
}

async fn run_app<B: Backend>(
    terminal: &mut Terminal<B>,
    mut app: App,
    api: HttpMarketApi,
) -> Result<()> {
    // Create channels for network communication
    let (tx_to_network, rx_from_app) = mpsc::unbounded_channel::<ApiRequest>();
    let (tx_to_app, mut rx_from_network) = mpsc::unbounded_channel::<ApiEvent>();

    app.set_network_sender(tx_to_network);

    let worker = ApiWorker::new(api, tx_to_app);
    let network_handle = tokio::spawn(worker.run(rx_from_app));

    // Mount: the one market fetch
    app.start();

    loop {
        terminal.draw(|f| ui::draw(f, &app))?;

        // Handle events with timeout
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    handle_key(&mut app, key);
                }
            }
        }

        while let Ok(event) = rx_from_network.try_recv() {
            app.handle_api_event(event, Instant::now(), Utc::now());
        }

        app.on_tick(Instant::now(), Utc::now());

        if app.should_quit {
            break;
        }
    }

    // Cleanup
    app.shutdown();
    network_handle.abort();
    Ok(())
}

fn handle_key(app: &mut App, key: KeyEvent) {
    app.hint = None;

    match app.input_mode {
        InputMode::Normal => match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                app.quit();
            }
            KeyCode::F(1) => {
                app.toggle_help();
            }
            KeyCode::Esc if app.show_help => {
                app.toggle_help();
            }

            // Focus
            KeyCode::Tab | KeyCode::Down | KeyCode::Char('j') => {
                app.next_field();
            }
            KeyCode::BackTab | KeyCode::Up | KeyCode::Char('k') => {
                app.prev_field();
            }

            // Field actions
            KeyCode::Enter => {
                app.activate();
            }
            KeyCode::Left => {
                app.adjust(false);
            }
            KeyCode::Right => {
                app.adjust(true);
            }
            KeyCode::Char('l') | KeyCode::Char('L') => {
                app.set_direction(Direction::Long);
            }
            KeyCode::Char('s') | KeyCode::Char('S') => {
                app.set_direction(Direction::Short);
            }

            // Order hotkey
            KeyCode::Char('o') | KeyCode::Char('O') => {
                app.submit();
            }

            _ => {}
        },

        InputMode::Editing => match key.code {
            KeyCode::Enter => {
                app.submit_input();
            }
            KeyCode::Esc => {
                app.cancel_input();
            }
            KeyCode::Backspace => {
                app.delete_char();
            }
            KeyCode::Char(c) => {
                app.enter_char(c);
            }
            _ => {}
        },
    }
}
