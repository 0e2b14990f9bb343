//! CLI entry-points for browsing the survey board.

use anyhow::Result;
use clap::Args as ClapArgs;
use serde_json::json;
use tracing::instrument;

use crate::{
    api::{
        surveys::HomeRail,
        types::{SortType, SurveySearch},
    },
    config::Settings,
};

/// Args for the `surveys` sub-command.
#[derive(Debug, Clone, ClapArgs)]
pub struct BoardArgs {
    /// Title substring to search for.
    #[arg(long)]
    pub title: Option<String>,
    /// Interest category id.
    #[arg(long)]
    pub interest: Option<i64>,
    /// Sort order for the board.
    #[arg(long, value_enum)]
    pub sort: Option<SortType>,
    /// Zero-based page number.
    #[arg(long)]
    pub page: Option<i64>,
    /// Page size.
    #[arg(long)]
    pub size: Option<i64>,
    /// Show a curated home rail instead of the board.
    #[arg(long, value_enum)]
    pub rail: Option<HomeRail>,
    /// Show surveys commissioned by the caller.
    #[arg(long, conflicts_with = "rail")]
    pub mine: bool,
    /// Show surveys the caller participated in.
    #[arg(long, conflicts_with_all = ["rail", "mine"])]
    pub participated: bool,
    /// List all interest categories.
    #[arg(long, conflicts_with_all = ["rail", "mine", "participated"])]
    pub interests: bool,
    /// Show the caller's top interest categories.
    #[arg(long, conflicts_with_all = ["rail", "mine", "participated", "interests"])]
    pub my_interests: bool,
}

#[instrument(skip(args, settings))]
pub async fn run_board(args: BoardArgs, settings: Settings) -> Result<()> {
    let api = super::build_client(&settings)?;

    if args.interests {
        return super::print_json(&api.interests().await?);
    }
    if args.my_interests {
        return super::print_json(&api.my_interests().await?);
    }
    if let Some(rail) = args.rail {
        return super::print_json(&api.home_rail(rail).await?);
    }
    if args.mine {
        return super::print_json(&api.my_surveys().await?);
    }
    if args.participated {
        let page = api
            .participated_surveys(args.page.unwrap_or(0), args.size.unwrap_or(20))
            .await?;
        return super::print_json(&page);
    }

    let filter = SurveySearch {
        title: args.title,
        interest_id: args.interest,
        sort_type: args.sort,
        page: args.page,
        size: args.size,
    };
    super::print_json(&api.search_surveys(&filter).await?)
}

/// Args for the `survey` sub-command.
#[derive(Debug, Clone, ClapArgs)]
pub struct DetailArgs {
    /// Survey identifier.
    pub survey_id: i64,
    /// Also check whether the caller already participated.
    #[arg(long)]
    pub participation: bool,
    /// Close the survey early instead of showing it.
    #[arg(long, conflicts_with = "participation")]
    pub close: bool,
}

#[instrument(skip(args, settings))]
pub async fn run_detail(args: DetailArgs, settings: Settings) -> Result<()> {
    let api = super::build_client(&settings)?;

    if args.close {
        api.close_survey(args.survey_id).await?;
        tracing::info!(survey_id = args.survey_id, "survey closed");
        return Ok(());
    }

    let detail = api.survey_detail(args.survey_id).await?;
    let questions = api.survey_questions(args.survey_id).await?;
    let participated = if args.participation {
        Some(api.has_participated(args.survey_id).await?)
    } else {
        None
    };

    super::print_json(&json!({
        "detail": detail,
        "questions": questions,
        "participated": participated,
    }))
}
