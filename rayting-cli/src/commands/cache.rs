use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use super::Session;
use crate::error::CliError;

/// Remove cached lists and remembered views for the current backend.
pub(crate) fn run_cache_clear(session: &mut Session) -> Result<(), CliError> {
    session.kv.clear()?;
    log::info!(
        "{} Cleared cache for {}",
        "\u{2714}".if_supports_color(Stdout, |t| t.green()),
        session.api.value,
    );
    Ok(())
}

/// Print the cache file for the current backend.
pub(crate) fn run_cache_path(session: &Session) {
    println!("{}", session.kv.path().display());
}
