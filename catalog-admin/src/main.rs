//! catalog-admin — command line administration for the product catalog
//!
//! Browses the category tree, resolves inherited attributes and manages
//! categories, attributes and products through the catalog REST API.

mod cli;
mod commands;
mod logger;
mod render;

use catalog_client::ClientError;
use clap::Parser;
use cli::Cli;
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    // Load .env file before clap reads its env fallbacks
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    if let Err(e) =
        logger::init_logger_with_file(&cli.log_level, cli.log_json, cli.log_dir.as_deref())
    {
        eprintln!("Failed to initialize logging: {e}");
        return ExitCode::FAILURE;
    }

    match commands::run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            report(&e);
            ExitCode::FAILURE
        }
    }
}

/// Print a failure the way the user should see it
fn report(err: &anyhow::Error) {
    match err.downcast_ref::<ClientError>() {
        Some(client_err) => {
            tracing::debug!(
                error = %client_err,
                code = %client_err.code(),
                category = ?client_err.category(),
                "Command failed"
            );
            eprintln!("error: {}", client_err.user_message());
        }
        None => eprintln!("error: {err:#}"),
    }
}
