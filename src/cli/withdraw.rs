//! CLI entry-point for cash withdrawals.

use anyhow::Result;
use clap::{Args as ClapArgs, Subcommand};
use tracing::{info, instrument};

use crate::{api::types::WithdrawalRequest, config::Settings};

/// Args for the `withdraw` sub-command.
#[derive(Debug, Clone, ClapArgs)]
pub struct Args {
    #[command(subcommand)]
    pub action: Action,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Action {
    /// Request a withdrawal against the point balance.
    Request {
        #[arg(long)]
        amount: i64,
        #[arg(long)]
        bank_code: String,
        #[arg(long)]
        account: String,
        /// Password re-check, when the server requires one.
        #[arg(long)]
        password: Option<String>,
    },
    /// Show one withdrawal.
    Show { withdrawal_id: i64 },
    /// List the caller's withdrawal history.
    List,
}

#[instrument(skip(args, settings))]
pub async fn run(args: Args, settings: Settings) -> Result<()> {
    let api = super::build_client(&settings)?;
    match args.action {
        Action::Request {
            amount,
            bank_code,
            account,
            password,
        } => {
            let withdrawal = api
                .request_withdrawal(&WithdrawalRequest {
                    amount,
                    bank_code,
                    account,
                    password,
                })
                .await?;
            info!(
                withdrawal_id = withdrawal.withdrawal_id,
                "withdrawal requested"
            );
            super::print_json(&withdrawal)
        }
        Action::Show { withdrawal_id } => {
            super::print_json(&api.withdrawal_detail(withdrawal_id).await?)
        }
        Action::List => super::print_json(&api.withdrawal_history().await?),
    }
}
