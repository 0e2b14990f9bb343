//! CLI entry-point for admin statistics.

use anyhow::Result;
use clap::{Args as ClapArgs, Subcommand};
use tracing::instrument;

use crate::{
    api::admin::{GraphInterval, PointLogQuery},
    config::Settings,
};

/// Args for the `admin` sub-command.
#[derive(Debug, Clone, ClapArgs)]
pub struct Args {
    #[command(subcommand)]
    pub action: Action,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Action {
    /// Daily platform aggregates for one date (YYYY-MM-DD).
    Daily {
        #[arg(long)]
        date: String,
    },
    /// Point ledger logs with optional filters.
    Logs {
        #[arg(long)]
        user: Option<i64>,
        #[arg(long)]
        nickname: Option<String>,
        /// Point type filter: GET or USE.
        #[arg(long)]
        kind: Option<String>,
        #[arg(long, default_value_t = 0)]
        page: i64,
        #[arg(long, default_value_t = 20)]
        size: i64,
    },
    /// Aggregated dashboard series.
    Graph {
        #[arg(long, value_enum, default_value = "daily")]
        interval: GraphInterval,
    },
}

#[instrument(skip(args, settings))]
pub async fn run(args: Args, settings: Settings) -> Result<()> {
    let api = super::build_client(&settings)?;
    match args.action {
        Action::Daily { date } => super::print_json(&api.daily_statistics(&date).await?),
        Action::Logs {
            user,
            nickname,
            kind,
            page,
            size,
        } => {
            let query = PointLogQuery {
                user_id: user,
                nickname,
                point_type: kind,
                page,
                size,
            };
            super::print_json(&api.point_logs(&query).await?)
        }
        Action::Graph { interval } => super::print_json(&api.point_graph(interval).await?),
    }
}
