//! CLI entry-point for submitting survey answers.

use std::fs;

use anyhow::{Context, Result};
use clap::Args as ClapArgs;
use tracing::{info, instrument};

use crate::{api::types::ParticipateRequest, config::Settings};

/// Args for the `participate` sub-command.
#[derive(Debug, Clone, ClapArgs)]
pub struct Args {
    /// Survey identifier.
    pub survey_id: i64,
    /// Path to an answers JSON document.
    #[arg(long)]
    pub file: String,
}

#[instrument(skip(args, settings))]
pub async fn run(args: Args, settings: Settings) -> Result<()> {
    let raw = fs::read_to_string(&args.file).with_context(|| format!("read {}", args.file))?;
    let request: ParticipateRequest = serde_json::from_str(&raw)?;

    let api = super::build_client(&settings)?;
    api.participate(args.survey_id, &request).await?;
    info!(survey_id = args.survey_id, "answers submitted");
    Ok(())
}
