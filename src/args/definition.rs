//! Command-line argument definition and processing.

use clap::Parser;

use crate::theme::Settings;

/// Pokedex - browse Pokémon from the terminal
#[derive(Parser, Debug)]
#[command(name = "pokedex")]
#[command(version)]
#[command(about = "Browse Pokémon from the terminal: paged grid, type filter, search and details", long_about = None)]
pub struct Args {
    /// Print page N (0-based) of the listing and exit
    #[arg(long, value_name = "N")]
    pub page: Option<u32>,

    /// Print every Pokémon of a type and exit
    #[arg(long = "type", value_name = "NAME")]
    pub type_name: Option<String>,

    /// Look up one Pokémon by name or id, print it and exit
    #[arg(short, long, value_name = "QUERY")]
    pub search: Option<String>,

    /// Print the detail block of one Pokémon and exit
    #[arg(short, long, value_name = "ID")]
    pub detail: Option<u32>,

    /// Print the available types and exit
    #[arg(long)]
    pub list_types: bool,

    /// Description language code (overrides settings.conf)
    #[arg(long, value_name = "CODE")]
    pub language: Option<String>,

    /// Cards per page (overrides settings.conf)
    #[arg(long, value_name = "N", value_parser = clap::value_parser!(u32).range(1..))]
    pub page_size: Option<u32>,

    /// Provider base URL (overrides settings.conf)
    #[arg(long, value_name = "URL")]
    pub base_url: Option<String>,

    /// Set the logging level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    pub log_level: String,

    /// Enable verbose output (equivalent to --log-level debug)
    #[arg(short, long)]
    pub verbose: bool,
}

/// A command-line request answered without starting the TUI.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum OneShot {
    /// Print one page of the listing.
    Page(u32),
    /// Print all members of a type.
    Type(String),
    /// Print a single search result.
    Search(String),
    /// Print a detail block.
    Detail(u32),
    /// Print the type options.
    ListTypes,
}

impl Args {
    /// What: Pick the one-shot action requested on the command line.
    ///
    /// Output:
    /// - `None` when the TUI should start.
    ///
    /// Details:
    /// - With several flags, the first of detail, search, type, page, list-types wins.
    #[must_use]
    pub fn one_shot(&self) -> Option<OneShot> {
        if let Some(id) = self.detail {
            return Some(OneShot::Detail(id));
        }
        if let Some(q) = &self.search {
            return Some(OneShot::Search(q.clone()));
        }
        if let Some(t) = &self.type_name {
            return Some(OneShot::Type(t.clone()));
        }
        if let Some(p) = self.page {
            return Some(OneShot::Page(p));
        }
        self.list_types.then_some(OneShot::ListTypes)
    }

    /// What: Apply command-line overrides on top of file settings.
    pub fn apply_overrides(&self, settings: &mut Settings) {
        if let Some(lang) = &self.language {
            settings.description_language = lang.to_ascii_lowercase();
        }
        if let Some(n) = self.page_size {
            settings.page_size = n;
        }
        if let Some(url) = &self.base_url {
            settings.api_base_url = url.trim_end_matches('/').to_string();
        }
    }
}

/// What: Determine the log level based on command-line arguments.
///
/// Details:
/// - Verbose flag overrides `--log-level`.
#[must_use]
pub fn determine_log_level(args: &Args) -> String {
    if args.verbose {
        "debug".to_string()
    } else {
        args.log_level.clone()
    }
}
