use anyhow::{Context, Result};
use clap::Parser;
use proud100::app::App;
use proud100::cli::Cli;
use proud100::config::Config;
use proud100::styles::init_theme;
use proud100::utils::{get_log_dir, LOG_FILE};
use tracing::info;

/// Set up panic hook to restore terminal state on panic
fn setup_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = crossterm::terminal::disable_raw_mode();
        let _ = crossterm::execute!(std::io::stdout(), crossterm::terminal::LeaveAlternateScreen);
        original_hook(panic_info);
    }));
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Subcommands print and exit without the TUI
    if cli.execute()? {
        return Ok(());
    }

    setup_panic_hook();

    let log_dir = get_log_dir();
    std::fs::create_dir_all(&log_dir)
        .with_context(|| format!("Failed to create log directory: {:?}", log_dir))?;
    let log_file = log_dir.join(LOG_FILE);

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    let file_appender = tracing_appender::rolling::never(&log_dir, LOG_FILE);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(non_blocking)
        .with_ansi(false)
        .init();

    eprintln!("Logs are being written to: {:?}", log_file);

    let config_path = cli.config_path();
    let config = Config::load_or_create(&config_path).context("Failed to load configuration")?;

    let no_color = cli.no_colors || std::env::var_os("NO_COLOR").is_some();
    init_theme(config.effective_theme(no_color));

    info!(config = ?config_path, screen = ?cli.screen, "starting");
    let mut app = App::new(config, config_path, cli.screen, no_color)?;
    let result = app.run();

    // Flush logs before exit
    drop(guard);

    result
}
