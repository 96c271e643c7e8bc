//! rayting CLI
//!
//! Command-line interface for browsing and curating the J-Rayting catalog.

mod cli_types;
mod commands;
mod display;
mod error;
mod logging;
mod spinner;

use clap::Parser;

use cli_types::{CacheAction, Cli, Commands, ConfigAction};
use commands::{Session, with_item_type};
use error::CliError;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = logging::init(cli.quiet, cli.verbose, cli.logfile.as_deref()) {
        eprintln!("Could not open log file: {}", e);
        std::process::exit(1);
    }

    if let Err(e) = run(cli) {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let api_url = cli.api_url.as_deref();

    match cli.command {
        Commands::Config { action } => match action {
            ConfigAction::Show => commands::config::run_config_show(api_url),
            ConfigAction::Path => commands::config::run_config_path(),
            ConfigAction::SetUrl { url } => commands::config::run_config_set_url(url.as_deref())?,
        },
        Commands::Filters { collection } => {
            with_item_type!(collection, T => commands::filters::run_filters::<T>())
        }
        command => {
            let mut session = Session::open(api_url, cli.quiet)?;
            dispatch(&mut session, command)?;
        }
    }
    Ok(())
}

fn dispatch(session: &mut Session, command: Commands) -> Result<(), CliError> {
    match command {
        Commands::List {
            collection,
            selection,
            remember,
            limit,
        } => with_item_type!(collection, T => {
            commands::list::run_list::<T>(session, &selection, remember, limit)
        }),
        Commands::Show {
            collection,
            id,
            offline,
        } => with_item_type!(collection, T => commands::show::run_show::<T>(session, id, offline)),
        Commands::Export {
            collection,
            out,
            selection,
        } => with_item_type!(collection, T => {
            commands::list::run_export::<T>(session, &selection, &out)
        }),
        Commands::Add { collection, json } => commands::save::run_add(session, collection, &json),
        Commands::Edit {
            collection,
            id,
            json,
        } => commands::save::run_edit(session, collection, id, &json),
        Commands::Delete {
            collection,
            id,
            yes,
        } => commands::save::run_delete(session, collection, id, yes),
        Commands::Analytics {
            collection,
            dimension,
        } => commands::analytics::run_analytics(session, collection, &dimension),
        Commands::Cache { action } => match action {
            CacheAction::Clear => commands::cache::run_cache_clear(session),
            CacheAction::Path => {
                commands::cache::run_cache_path(session);
                Ok(())
            }
        },
        Commands::Config { .. } | Commands::Filters { .. } => Ok(()),
    }
}
