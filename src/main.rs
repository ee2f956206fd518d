use std::process;

use payment_status::{run, run_async, Config, Result};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    if let Err(err) = run_app().await {
        eprintln!("Error: {}", err);
        process::exit(1);
    }
}

async fn run_app() -> Result<()> {
    let config = Config::from_env()?;
    if config.use_async {
        run_async(&config.input, std::io::stdout(), config.mode).await
    } else {
        run(&config.input, std::io::stdout().lock(), config.mode)
    }
}
