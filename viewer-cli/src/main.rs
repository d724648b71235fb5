use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use cli::Cli;
use dotenv::dotenv;
use tokio::signal;
use tokio_util::sync::CancellationToken;
use tracing::info;
use tracing_subscriber::{
    filter::LevelFilter, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer,
};
use viewer::{HttpRecordSource, OrderViewAssembler, ViewerError};

mod cli;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();

    let cli = Cli::parse();

    let stdout_log = tracing_subscriber::fmt::layer()
        .compact()
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_filter(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .from_env_lossy(),
        );

    tracing_subscriber::registry().with(stdout_log).init();

    let mut assembler = OrderViewAssembler::new(HttpRecordSource::new(&cli.base_url));

    if let Some(secs) = cli.timeout_secs {
        assembler = assembler.with_timeout(Duration::from_secs(secs));
    }

    let token = CancellationToken::new();
    let cloned_token = token.clone();

    tokio::spawn(async move {
        wait_shutdown_signal().await;
        cloned_token.cancel();
    });

    info!("Loading order {}", cli.hash);

    let view = match assembler.assemble_until(&cli.hash, &token).await {
        Ok(view) => view,
        Err(ViewerError::Cancelled) => {
            info!("Interrupted before order {} was loaded", cli.hash);
            return Ok(());
        }
        Err(err) => {
            return Err(err).with_context(|| format!("Unable to display order {}", cli.hash));
        }
    };

    if cli.json {
        let json = serde_json::to_string_pretty(&view).context("Failed to serialize order view")?;
        println!("{json}");
    } else {
        print!("{view}");
    }

    Ok(())
}

async fn wait_shutdown_signal() {
    match signal::ctrl_c().await {
        Ok(()) => {}
        Err(err) => {
            eprintln!("Unable to listen for shutdown signal: {}", err);
        }
    }
}
