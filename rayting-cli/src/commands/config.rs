use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use rayting_lib::settings::{
    self, API_URL_ENV, DEFAULT_API_URL, resolve_api_url, save_api_url, settings_path,
};

use crate::error::CliError;

/// Show current settings and their sources.
pub(crate) fn run_config_show(api_override: Option<&str>) {
    let path = settings_path();
    let api = resolve_api_url(api_override);

    log::info!(
        "{}",
        "J-Rayting Configuration".if_supports_color(Stdout, |t| t.bold()),
    );
    log::info!("");

    if path.exists() {
        log::info!(
            "  Config file: {} {}",
            path.display().if_supports_color(Stdout, |t| t.cyan()),
            "(exists)".if_supports_color(Stdout, |t| t.green()),
        );
    } else {
        log::info!(
            "  Config file: {} {}",
            path.display().if_supports_color(Stdout, |t| t.cyan()),
            "(not found)".if_supports_color(Stdout, |t| t.dimmed()),
        );
    }
    log::info!("");

    log::info!(
        "  {} {} {}",
        "api_url:".if_supports_color(Stdout, |t| t.cyan()),
        api.value,
        format!("({})", api.source).if_supports_color(Stdout, |t| t.dimmed()),
    );
    log::info!(
        "  {} {}",
        "cache:".if_supports_color(Stdout, |t| t.cyan()),
        rayting_client::cache::state_path(&api.value).display(),
    );

    if let Some(contents) = settings::load_settings_string() {
        log::debug!("settings.toml:\n{}", contents);
    }
    log::info!("");
    log::info!(
        "Precedence: --api-url, then ${}, then the config file, then {}",
        API_URL_ENV,
        DEFAULT_API_URL
    );
}

/// Print the config file path.
pub(crate) fn run_config_path() {
    println!("{}", settings_path().display());
}

/// Save or clear the backend URL.
pub(crate) fn run_config_set_url(url: Option<&str>) -> Result<(), CliError> {
    let path = save_api_url(url)?;
    match url {
        Some(_) => log::info!(
            "{} Saved backend URL to {}",
            "\u{2714}".if_supports_color(Stdout, |t| t.green()),
            path.display(),
        ),
        None => log::info!(
            "{} Cleared backend URL in {}",
            "\u{2714}".if_supports_color(Stdout, |t| t.green()),
            path.display(),
        ),
    }
    Ok(())
}
