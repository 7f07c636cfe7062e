use tracing_subscriber::EnvFilter;
use wlr::commands::Cli;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Structured logging is only wired up when explicitly requested so that
    // normal command output stays clean.
    if std::env::var("WLR_DEBUG").is_ok() || std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::fmt().with_env_filter(EnvFilter::from_default_env()).init();
    }

    Cli::menu().await
}
