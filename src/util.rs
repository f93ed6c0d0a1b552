//! Miscellaneous utilities.

use std::str::FromStr;

use anyhow::Context;
use tracing::{debug, Level};
use tracing_subscriber::util::SubscriberInitExt;

use crate::CIResult;

/// Initializes the logger.
pub fn init_logger(level: &str) -> CIResult<()> {
    let level = Level::from_str(level)?;

    let builder = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true)
        .with_max_level(level);

    if level <= Level::INFO {
        builder
            .without_time()
            .finish()
            .try_init()
            .context("failed to initialize the logger")?;
    } else {
        builder
            .with_timer(tracing_subscriber::fmt::time::uptime())
            .finish()
            .try_init()
            .context("failed to initialize the logger")?;
    }

    debug!("initialized logger with log level: {}", level);

    Ok(())
}

/// Gets a human readable String for Duration.
pub fn human_duration(duration: std::time::Duration) -> String {
    let secs = duration.as_secs();
    if secs >= 60 {
        format!("{}m {:02}s", secs / 60, secs % 60)
    } else {
        format!("{}.{:02}s", secs, duration.subsec_nanos() / 10_000_000)
    }
}
