use clap::Parser;
use lambda_inventory::{run, Settings};

#[tokio::main]
async fn main() {
    let settings = Settings::parse();

    tracing_subscriber::fmt()
        .with_max_level(settings.log_level())
        .init();

    if let Err(err) = run(&settings).await {
        tracing::error!(error = ?err, "{err}");
        std::process::exit(1);
    }
}
