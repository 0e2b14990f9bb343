//! CLI entry-point for checkout payments.

use anyhow::Result;
use clap::{Args as ClapArgs, Subcommand};
use tracing::{info, instrument};

use crate::{api::types::PaymentConfirmRequest, config::Settings};

/// Args for the `pay` sub-command.
#[derive(Debug, Clone, ClapArgs)]
pub struct Args {
    #[command(subcommand)]
    pub action: Action,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Action {
    /// Confirm a checkout using the values from the success redirect.
    Confirm {
        #[arg(long)]
        order_id: String,
        #[arg(long)]
        order_name: String,
        #[arg(long)]
        amount: i64,
        #[arg(long)]
        payment_key: String,
    },
    /// Show one payment.
    Show { payment_id: i64 },
    /// List the caller's payment history.
    List,
}

#[instrument(skip(args, settings))]
pub async fn run(args: Args, settings: Settings) -> Result<()> {
    let api = super::build_client(&settings)?;
    match args.action {
        Action::Confirm {
            order_id,
            order_name,
            amount,
            payment_key,
        } => {
            let payment = api
                .confirm_payment(&PaymentConfirmRequest {
                    order_id,
                    order_name,
                    amount,
                    payment_key,
                })
                .await?;
            info!(payment_id = payment.payment_id, "payment confirmed");
            super::print_json(&payment)
        }
        Action::Show { payment_id } => super::print_json(&api.payment_detail(payment_id).await?),
        Action::List => super::print_json(&api.payment_history().await?),
    }
}
