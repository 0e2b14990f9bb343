//! CLI entry-point for commissioning a survey.

use std::fs;

use anyhow::{Context, Result};
use clap::Args as ClapArgs;
use serde_json::json;
use tracing::{info, instrument};

use crate::{api::types::CreateSurveyRequest, config::Settings, pricing};

/// Args for the `create` sub-command.
#[derive(Debug, Clone, ClapArgs)]
pub struct Args {
    /// Path to a survey definition JSON document.
    #[arg(long)]
    pub file: String,
    /// Only print the quote, without submitting.
    #[arg(long)]
    pub dry_run: bool,
}

#[instrument(skip(args, settings))]
pub async fn run(args: Args, settings: Settings) -> Result<()> {
    let raw = fs::read_to_string(&args.file).with_context(|| format!("read {}", args.file))?;
    let request: CreateSurveyRequest = serde_json::from_str(&raw)?;

    let quote = pricing::point_quote(
        request.questions.len() as i64,
        request.max_response,
        request.reward as f64,
    );
    info!(
        total = quote.total,
        fee = quote.fee,
        "quoted point budget for draft"
    );

    if args.dry_run {
        return super::print_json(&quote);
    }

    let api = super::build_client(&settings)?;
    let survey = api.create_survey(&request).await?;
    super::print_json(&json!({ "survey": survey, "quote": quote }))
}
