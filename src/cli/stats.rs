//! CLI entry-point for survey statistics.

use anyhow::Result;
use clap::{Args as ClapArgs, Subcommand};
use tracing::instrument;

use crate::{api::types::SubjectiveFilter, config::Settings};

/// Args for the `stats` sub-command.
#[derive(Debug, Clone, ClapArgs)]
pub struct Args {
    #[command(subcommand)]
    pub action: Action,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Action {
    /// Participation snapshot with demographic distributions.
    Participants { survey_id: i64 },
    /// Per-question answer statistics.
    Answers { survey_id: i64 },
    /// Demographics of respondents who picked one choice.
    Choice {
        survey_id: i64,
        /// Question number within the survey.
        #[arg(long)]
        question: i64,
        /// Choice number within the question.
        #[arg(long)]
        choice: i64,
    },
    /// Subjective answers for one question, filtered and paged.
    Subjective {
        survey_id: i64,
        /// Question number within the survey.
        #[arg(long)]
        question: i64,
        #[arg(long)]
        work_type: Option<String>,
        #[arg(long)]
        age_group: Option<String>,
        #[arg(long)]
        gender: Option<String>,
        #[arg(long)]
        page: Option<i64>,
        #[arg(long)]
        size: Option<i64>,
    },
    /// Refund breakdown before closing a survey.
    Refund { survey_id: i64 },
}

#[instrument(skip(args, settings))]
pub async fn run(args: Args, settings: Settings) -> Result<()> {
    let api = super::build_client(&settings)?;
    match args.action {
        Action::Participants { survey_id } => {
            super::print_json(&api.participant_statistics(survey_id).await?)
        }
        Action::Answers { survey_id } => {
            super::print_json(&api.answer_statistics(survey_id).await?)
        }
        Action::Choice {
            survey_id,
            question,
            choice,
        } => super::print_json(&api.choice_participants(survey_id, question, choice).await?),
        Action::Subjective {
            survey_id,
            question,
            work_type,
            age_group,
            gender,
            page,
            size,
        } => {
            let filter = SubjectiveFilter {
                work_type,
                age_group,
                gender,
                page,
                size,
            };
            super::print_json(&api.subjective_answers(survey_id, question, &filter).await?)
        }
        Action::Refund { survey_id } => super::print_json(&api.refund_preview(survey_id).await?),
    }
}
