use habit_calendar::{app::AppSettings, storage::config::Config};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

mod cli;
use cli::{parse_cli_mode, run_agenda_mode, run_replay, run_summary, CliMode, USAGE};

fn main() -> anyhow::Result<()> {
    let config = Config::load_or_create()?;
    let _guard = setup_logging(&config);

    let cli_mode = match parse_cli_mode() {
        Ok(mode) => mode,
        Err(err) => {
            eprintln!("Error: {}", err);
            println!("{}", USAGE);
            return Ok(());
        }
    };

    let settings = AppSettings::from_config(&config)?;

    match cli_mode {
        CliMode::Help => {
            println!("{}", USAGE);
            Ok(())
        }
        CliMode::Summary => run_summary(settings),
        CliMode::AgendaDate(date) => run_agenda_mode(date, settings),
        CliMode::Replay(path) => run_replay(&path, settings),
    }
}

fn setup_logging(config: &Config) -> WorkerGuard {
    let log_dir = Config::config_dir();
    std::fs::create_dir_all(&log_dir).ok();

    let file_appender = tracing_appender::rolling::daily(log_dir, "habit-calendar.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_target(false)
        .init();

    tracing::info!("habit-calendar started");
    guard
}
