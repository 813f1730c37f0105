//! Pokedex binary entrypoint kept minimal. The TUI lives in `app`, the one-shot mode in `args`.

use std::fmt;
use std::process::ExitCode;
use std::sync::OnceLock;

use clap::Parser;

use pokedex::args::{Args, determine_log_level, run_one_shot};
use pokedex::sources::PokeApiClient;

struct PokedexTimer;

impl tracing_subscriber::fmt::time::FormatTime for PokedexTimer {
    fn format_time(&self, w: &mut tracing_subscriber::fmt::format::Writer<'_>) -> fmt::Result {
        w.write_str(&pokedex::util::log_timestamp())
    }
}

static LOG_GUARD: OnceLock<tracing_appender::non_blocking::WorkerGuard> = OnceLock::new();

/// Initialize tracing writing to `~/.config/pokedex/logs/pokedex.log`, falling back to stderr.
fn init_logging(level: &str) {
    let mut log_path = pokedex::theme::logs_dir();
    log_path.push("pokedex.log");
    let env_filter = || {
        tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level))
    };
    match std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
    {
        Ok(file) => {
            let (non_blocking, guard) = tracing_appender::non_blocking(file);
            tracing_subscriber::fmt()
                .with_env_filter(env_filter())
                .with_target(false)
                .with_ansi(false)
                .with_writer(non_blocking)
                .with_timer(PokedexTimer)
                .init();
            let _ = LOG_GUARD.set(guard);
            tracing::info!(path = %log_path.display(), "logging initialized");
        }
        Err(e) => {
            tracing_subscriber::fmt()
                .with_env_filter(env_filter())
                .with_target(false)
                .with_ansi(true)
                .with_writer(std::io::stderr)
                .with_timer(PokedexTimer)
                .init();
            tracing::warn!(error = %e, "failed to open log file; using stderr");
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(&determine_log_level(&args));

    let settings_path = pokedex::theme::ensure_settings_file();
    let mut settings = pokedex::theme::settings();
    args.apply_overrides(&mut settings);
    tracing::info!(
        settings = %settings_path.display(),
        base_url = %settings.api_base_url,
        page_size = settings.page_size,
        language = %settings.description_language,
        "Pokedex starting"
    );

    if let Some(action) = args.one_shot() {
        let provider = PokeApiClient::new(&settings.api_base_url, settings.http_timeout());
        let (ok, _) = run_one_shot(
            &action,
            provider,
            settings.controller_config(),
            std::io::stdout(),
        )
        .await;
        return if ok { ExitCode::SUCCESS } else { ExitCode::FAILURE };
    }

    if let Err(err) = pokedex::app::run(settings).await {
        tracing::error!(error = ?err, "Application error");
        eprintln!("pokedex: {err}");
        return ExitCode::FAILURE;
    }
    tracing::info!("Pokedex exited");
    ExitCode::SUCCESS
}
