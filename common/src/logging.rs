use std::str::FromStr;

use anyhow::{anyhow, Context};
use once_cell::sync::OnceCell;
use tracing_subscriber::EnvFilter;

static INITIALIZED: OnceCell<()> = OnceCell::new();

/// Initializes the global tracing subscriber with the given env filter
/// directive. Calling this more than once is a no-op, which keeps it usable
/// from tests.
pub fn init(level: &str) -> anyhow::Result<()> {
    INITIALIZED.get_or_try_init(|| {
        let env_filter = EnvFilter::from_str(level).context("failed to parse log level")?;

        tracing_subscriber::fmt()
            .with_file(true)
            .with_line_number(true)
            .with_env_filter(env_filter)
            .try_init()
            .map_err(|err| anyhow!("failed to set global subscriber: {err}"))
    })?;

    Ok(())
}

#[cfg(test)]
mod tests;
