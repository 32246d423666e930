use std::path::Path;
use std::process;

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use smex::cli::Cli;
use smex::export;
use smex::secrets::AwsSecretStore;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "smex=info".into()))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        error!("{}", e);
        process::exit(1);
    }
}

async fn run(cli: Cli) -> smex::Result<()> {
    let store = AwsSecretStore::connect(&cli.region, &cli.access_key, &cli.secret_key).await;

    let outcome = export::export_to_csv(&store, Path::new(".")).await?;
    info!(rows = outcome.rows, "export complete");

    println!("file {} created.", outcome.file_name);
    Ok(())
}
