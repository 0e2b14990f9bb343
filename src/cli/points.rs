//! CLI entry-point for the point balance and ledger.

use anyhow::Result;
use clap::Args as ClapArgs;
use serde_json::json;
use tracing::instrument;

use crate::config::Settings;

/// Args for the `points` sub-command.
#[derive(Debug, Clone, ClapArgs)]
pub struct Args {
    /// Only print the balance.
    #[arg(long)]
    pub balance_only: bool,
}

#[instrument(skip(args, settings))]
pub async fn run(args: Args, settings: Settings) -> Result<()> {
    let api = super::build_client(&settings)?;

    let balance = api.point_balance().await?;
    if args.balance_only {
        return super::print_json(&json!({ "balance": balance }));
    }

    let history = api.point_history().await?;
    super::print_json(&json!({ "balance": balance, "history": history }))
}
