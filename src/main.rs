//! brewsight CLI
//!
//! Assembles the survey dataset from the configured feeds and prints a
//! personalized comparison report as pretty JSON on stdout.

use anyhow::Context;
use brewsight::assembler::DatasetAssembler;
use brewsight::cache::MemoryCache;
use brewsight::config::AppConfig;
use brewsight::fetch::ReqwestTransport;
use brewsight::identity::{FileIdentity, FixedIdentity, IdentityProvider};
use brewsight::personalize::participant_status;
use clap::Parser;
use serde::Serialize;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "brewsight", version, about = "Coffee survey comparison reports")]
struct Cli {
    /// Configuration file (TOML); defaults to the platform config dir
    #[arg(short, long, env = "BREWSIGHT_CONFIG")]
    config: Option<PathBuf>,

    /// Fail instead of degrading to the built-in sample dataset
    #[arg(long)]
    no_fallback: bool,

    /// Participant identifier; defaults to the locally persisted one
    #[arg(short, long, env = "BREWSIGHT_PARTICIPANT_ID")]
    participant_id: Option<String>,
}

#[derive(Serialize)]
struct Output {
    status: brewsight::personalize::ParticipantStatus,
    data_quality: brewsight::models::DataQuality,
    report: brewsight::stats::ComparisonReport,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let cli = Cli::parse();
    info!("Starting brewsight");
    info!("Version: {}", env!("CARGO_PKG_VERSION"));

    let config = AppConfig::load(cli.config.as_deref()).context("loading configuration")?;

    let participant_id = match cli.participant_id {
        Some(id) => FixedIdentity(id).participant_id(),
        None => FileIdentity::default_location().and_then(|i| i.participant_id()),
    };

    let transport = ReqwestTransport::new().context("building HTTP client")?;
    let assembler =
        DatasetAssembler::new(transport, config).with_cache(Box::new(MemoryCache::new()));

    let dataset = assembler
        .assemble(!cli.no_fallback)
        .await
        .context("assembling survey dataset")?;

    let status = participant_status(&dataset, participant_id.as_deref());
    let report = brewsight::participant_report(&dataset, participant_id.as_deref());

    let output = Output {
        status,
        data_quality: dataset.data_quality,
        report,
    };
    println!("{}", serde_json::to_string_pretty(&output)?);

    Ok(())
}
