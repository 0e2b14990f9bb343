//! CLI entry-point for signing in.

use anyhow::Result;
use clap::Args as ClapArgs;
use tracing::{info, instrument};

use crate::{api::types::LoginRequest, config::Settings};

/// Args for the `login` sub-command.
#[derive(Debug, Clone, ClapArgs)]
pub struct Args {
    /// Account username.
    #[arg(long)]
    pub username: String,
    /// Account password.
    #[arg(long)]
    pub password: String,
}

#[instrument(skip(args, settings))]
pub async fn run(args: Args, settings: Settings) -> Result<()> {
    let api = super::build_client(&settings)?;
    let response = api
        .login(&LoginRequest {
            username: args.username,
            password: args.password,
        })
        .await?;

    info!(user = %response.username, "signed in; export FORMPOINT_ACCESS_TOKEN to reuse the token");
    super::print_json(&response)
}
