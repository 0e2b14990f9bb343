//! CLI entry-point for quoting the point budget of a survey draft.

use anyhow::Result;
use clap::Args as ClapArgs;

use crate::pricing;

/// Args for the `quote` sub-command.
#[derive(Debug, Clone, ClapArgs)]
pub struct Args {
    /// Number of questions in the draft.
    #[arg(long)]
    pub questions: i64,
    /// Maximum number of responses to collect.
    #[arg(long)]
    pub responses: i64,
    /// Points rewarded per response.
    #[arg(long)]
    pub reward: f64,
}

pub fn run(args: Args) -> Result<()> {
    let quote = pricing::point_quote(args.questions, args.responses, args.reward);
    super::print_json(&quote)
}
