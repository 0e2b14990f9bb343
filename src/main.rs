//! Entry point wiring CLI dispatch to the client toolkit.

use anyhow::Result;
use formpoint::{cli::Cli, config::Settings, logging};
use tracing::debug;

#[tokio::main]
async fn main() -> Result<()> {
    logging::init_tracing()?;
    let settings = Settings::load()?;
    let cli = Cli::parse();

    debug!(?cli, "starting command");
    cli.dispatch(settings).await
}
