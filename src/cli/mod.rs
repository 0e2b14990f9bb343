//! Command-line interface wiring for the FormPoint toolkit.

use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::{
    api::ApiClient,
    auth::Session,
    config::Settings,
};

pub mod account;
pub mod admin;
pub mod create;
pub mod login;
pub mod participate;
pub mod pay;
pub mod points;
pub mod quote;
pub mod stats;
pub mod surveys;
pub mod watch;
pub mod withdraw;

/// Top-level CLI definition.
#[derive(Debug, Parser)]
#[command(author, version, about = "Survey rewards platform client", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    /// Parse CLI arguments from the environment.
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Dispatch the selected sub-command.
    pub async fn dispatch(self, settings: Settings) -> Result<()> {
        match self.command {
            Commands::Quote(args) => quote::run(args),
            Commands::Login(args) => login::run(args, settings).await,
            Commands::Account(args) => account::run(args, settings).await,
            Commands::Surveys(args) => surveys::run_board(args, settings).await,
            Commands::Survey(args) => surveys::run_detail(args, settings).await,
            Commands::Create(args) => create::run(args, settings).await,
            Commands::Participate(args) => participate::run(args, settings).await,
            Commands::Stats(args) => stats::run(args, settings).await,
            Commands::Points(args) => points::run(args, settings).await,
            Commands::Pay(args) => pay::run(args, settings).await,
            Commands::Withdraw(args) => withdraw::run(args, settings).await,
            Commands::Watch(args) => watch::run(args, settings).await,
            Commands::Admin(args) => admin::run(args, settings).await,
        }
    }
}

/// Supported sub-commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Quote the point budget for a survey draft.
    Quote(quote::Args),
    /// Sign in and print the access token.
    Login(login::Args),
    /// Account management: signup, profile, recovery.
    Account(account::Args),
    /// Browse the survey board and home rails.
    Surveys(surveys::BoardArgs),
    /// Show one survey with its questions.
    Survey(surveys::DetailArgs),
    /// Commission a survey from a JSON definition.
    Create(create::Args),
    /// Submit answers for a survey from a JSON file.
    Participate(participate::Args),
    /// Survey statistics: participants, answers, breakdowns.
    Stats(stats::Args),
    /// Point balance and history.
    Points(points::Args),
    /// Confirm and inspect checkout payments.
    Pay(pay::Args),
    /// Request and inspect cash withdrawals.
    Withdraw(withdraw::Args),
    /// Follow live participation statistics for a survey.
    Watch(watch::Args),
    /// Admin statistics: daily aggregates, ledgers, graphs.
    Admin(admin::Args),
}

/// Build an API client sharing one session across both services.
pub(crate) fn build_client(settings: &Settings) -> Result<Arc<ApiClient>> {
    let session = Session::new(settings.access_token.clone());
    Ok(Arc::new(ApiClient::new(settings, session)?))
}

/// Print a value as pretty JSON on stdout.
pub(crate) fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
