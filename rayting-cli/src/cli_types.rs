//! CLI type definitions: command enums and argument structs.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use rayting_catalog::Collection;
use rayting_lib::Direction;

#[derive(Parser)]
#[command(name = "rayting")]
#[command(about = "Browse and curate the J-Rayting catalog of films, books and shows", long_about = None)]
pub(crate) struct Cli {
    /// Backend API base URL (overrides $RAYTING_API_URL and settings.toml)
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Only show warnings and errors (suppress normal output)
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Enable verbose/debug logging (timestamps + debug-level messages)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Write log output to a file (ANSI codes stripped)
    #[arg(long, global = true)]
    pub logfile: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Search, filter and sort flags shared by `list` and `export`.
#[derive(Args, Clone, Default)]
pub(crate) struct SelectionArgs {
    /// Case-insensitive text search over titles (and authors for books)
    #[arg(short, long)]
    pub search: Option<String>,

    /// Filter on a dimension, e.g. `rating=A+,A` or `genre=Horror` (repeatable)
    #[arg(short, long = "filter", value_name = "DIM=V1,V2")]
    pub filters: Vec<String>,

    /// Sort field (see `rayting filters <collection>`)
    #[arg(long)]
    pub sort: Option<String>,

    /// Sort direction
    #[arg(short, long)]
    pub direction: Option<Direction>,

    /// Shareable query string, e.g. `search=alien&rating=A%2B&sortBy=score`
    #[arg(short, long, value_name = "QS")]
    pub query: Option<String>,

    /// Start from the remembered search, filters and sort
    #[arg(long)]
    pub restore: bool,

    /// Use the local cache only; do not contact the backend
    #[arg(long)]
    pub offline: bool,

    /// Read items from a saved JSON list instead of the backend
    #[arg(long, value_name = "PATH", conflicts_with = "offline")]
    pub file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// List items after search, filters and sort
    List {
        /// films, books or shows
        collection: Collection,

        #[command(flatten)]
        selection: SelectionArgs,

        /// Remember this search, filters and sort for next time
        #[arg(long)]
        remember: bool,

        /// Show at most this many items
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Show every field of one item
    Show {
        collection: Collection,
        id: i64,

        /// Use the local cache only; do not contact the backend
        #[arg(long)]
        offline: bool,
    },

    /// Export the visible list to CSV (or a JSON list for `.json` files)
    Export {
        collection: Collection,

        /// Output file
        #[arg(short, long)]
        out: PathBuf,

        #[command(flatten)]
        selection: SelectionArgs,
    },

    /// List filter dimensions, sort fields and offered values
    Filters { collection: Collection },

    /// Create an item from a JSON file (`-` for stdin)
    Add {
        collection: Collection,

        /// JSON object with the item's fields
        #[arg(long)]
        json: PathBuf,
    },

    /// Update an item from a JSON file (`-` for stdin)
    Edit {
        collection: Collection,
        id: i64,

        /// JSON object with the fields to send
        #[arg(long)]
        json: PathBuf,
    },

    /// Delete an item
    Delete {
        collection: Collection,
        id: i64,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Show pre-aggregated analytics for one dimension
    Analytics {
        collection: Collection,

        /// e.g. year, film-year, rt-score, genre (films); year, type, form,
        /// author (books); summary, year, genre (shows)
        dimension: String,
    },

    /// Manage settings
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Manage the local cache
    Cache {
        #[command(subcommand)]
        action: CacheAction,
    },
}

#[derive(Subcommand)]
pub(crate) enum ConfigAction {
    /// Show current settings and their sources
    Show,

    /// Print the settings file path
    Path,

    /// Save the backend URL (omit URL to clear it)
    SetUrl { url: Option<String> },
}

#[derive(Subcommand)]
pub(crate) enum CacheAction {
    /// Remove cached items and remembered state for the current backend
    Clear,

    /// Print the cache file path for the current backend
    Path,
}
