use duely::commands::Cli;
use duely::msg_error;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    if let Err(err) = Cli::menu().await {
        msg_error!(err);
        std::process::exit(1);
    }
}
