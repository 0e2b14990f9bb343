//! CLI entry-point for the live statistics feed.

use anyhow::Result;
use chrono::Utc;
use clap::Args as ClapArgs;
use tracing::{info, instrument};

use crate::{config::Settings, realtime};

/// Args for the `watch` sub-command.
#[derive(Debug, Clone, ClapArgs)]
pub struct Args {
    /// Survey identifier to follow.
    pub survey_id: i64,
}

#[instrument(skip(args, settings))]
pub async fn run(args: Args, settings: Settings) -> Result<()> {
    let api = super::build_client(&settings)?;
    let mut feed = realtime::open_statistics_feed(api, settings.ws_url(), args.survey_id);

    info!(survey_id = args.survey_id, "following live statistics, ctrl-c to stop");
    loop {
        tokio::select! {
            _ = tokio::signal::ctrl_c() => break,
            alive = feed.changed() => {
                if !alive {
                    break;
                }
                let state = feed.state();
                if let Some(snapshot) = &state.snapshot {
                    info!(
                        at = %Utc::now().to_rfc3339(),
                        connected = state.connected,
                        "snapshot replaced"
                    );
                    super::print_json(snapshot)?;
                }
            }
        }
    }

    feed.close();
    info!("statistics feed closed");
    Ok(())
}
