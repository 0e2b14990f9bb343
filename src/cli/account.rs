//! CLI entry-point for account management.

use std::fs;

use anyhow::{Context, Result};
use clap::{Args as ClapArgs, Subcommand};
use tracing::instrument;

use crate::{
    api::types::{SignupRequest, UserUpdateRequest},
    config::Settings,
};

/// Args for the `account` sub-command.
#[derive(Debug, Clone, ClapArgs)]
pub struct Args {
    #[command(subcommand)]
    pub action: Action,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Action {
    /// Register a new account from a JSON file.
    Signup {
        /// Path to a signup request JSON document.
        #[arg(long)]
        file: String,
    },
    /// Show the authenticated profile.
    Info,
    /// Update profile fields from a JSON file.
    Update {
        /// Path to an update request JSON document.
        #[arg(long)]
        file: String,
    },
    /// Sign out and invalidate the refresh cookie.
    Logout,
    /// Delete the authenticated account.
    Delete,
    /// Recover a masked username by email.
    FindId {
        #[arg(long)]
        email: String,
    },
    /// Send a password-reset mail.
    SendResetMail {
        #[arg(long)]
        username: String,
        #[arg(long)]
        email: String,
    },
    /// Validate a password-reset token.
    CheckToken {
        #[arg(long)]
        token: String,
    },
    /// Set a new password with a valid reset token.
    ResetPassword {
        #[arg(long)]
        token: String,
        #[arg(long)]
        password: String,
    },
    /// Re-verify the current password.
    CheckPassword {
        #[arg(long)]
        password: String,
    },
}

#[instrument(skip(args, settings))]
pub async fn run(args: Args, settings: Settings) -> Result<()> {
    let api = super::build_client(&settings)?;
    match args.action {
        Action::Signup { file } => {
            let raw = fs::read_to_string(&file).with_context(|| format!("read {file}"))?;
            let request: SignupRequest = serde_json::from_str(&raw)?;
            super::print_json(&api.signup(&request).await?)
        }
        Action::Info => super::print_json(&api.user_info().await?),
        Action::Update { file } => {
            let raw = fs::read_to_string(&file).with_context(|| format!("read {file}"))?;
            let request: UserUpdateRequest = serde_json::from_str(&raw)?;
            super::print_json(&api.update_user(&request).await?)
        }
        Action::Logout => super::print_json(&api.logout().await?),
        Action::Delete => super::print_json(&api.delete_user().await?),
        Action::FindId { email } => super::print_json(&api.find_id(&email).await?),
        Action::SendResetMail { username, email } => {
            super::print_json(&api.send_reset_mail(&username, &email).await?)
        }
        Action::CheckToken { token } => super::print_json(&api.check_reset_token(&token).await?),
        Action::ResetPassword { token, password } => {
            super::print_json(&api.reset_password(&token, &password).await?)
        }
        Action::CheckPassword { password } => {
            super::print_json(&api.check_password(&password).await?)
        }
    }
}
