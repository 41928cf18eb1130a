//! Command-line interface definitions and parsing
//!
//! # Commands
//!
//! - **browse**: Interactive catalog browser (default)
//! - **search**: One-shot filter, printed as cards, JSON or CSV
//! - **show**: Detail card for one item
//! - **validate**: Check an inventory document
//! - **url**: Encode filter flags as a share string
//! - **config**: Inspect and edit the configuration
//! - **completions**: Shell completion scripts
//!
//! Filter flags can be combined with `--state`, which seeds the filters from
//! a share string; individual flags then override the seeded values.
//!
//! # Examples
//!
//! ```
//! use clap::Parser;
//! use vitrine::cli::{Cli, Commands};
//!
//! let cli = Cli::parse_from(["vitrine", "search", "-c", "Garden", "--in-stock"]);
//! if let Some(Commands::Search { filter, .. }) = cli.command {
//!     let state = filter.to_state();
//!     assert_eq!(state.categories, vec!["Garden"]);
//!     assert!(state.in_stock_only);
//! }
//! ```

use crate::config::OutputFormat;
use crate::filters::{FilterState, SortMode, codec};
use clap::{Command, CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use std::io::Write;

/// Filter flags shared by `search` and `url`
#[derive(Parser, Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterArgs {
    /// Free-text search over names and descriptions
    #[arg(short = 'Q', long = "query", value_name = "TEXT")]
    pub query: Option<String>,

    /// Category to include (repeatable, or comma-separated)
    #[arg(short = 'c', long = "category", value_name = "NAME")]
    pub categories: Vec<String>,

    /// Minimum price (inclusive)
    #[arg(long = "min", value_name = "PRICE")]
    pub min: Option<String>,

    /// Maximum price (inclusive)
    #[arg(long = "max", value_name = "PRICE")]
    pub max: Option<String>,

    /// Only show items in stock
    #[arg(long = "in-stock")]
    pub in_stock: bool,

    /// Sort order (newest, price_asc, price_desc, name_asc, name_desc)
    #[arg(long = "sort", value_name = "MODE")]
    pub sort: Option<SortMode>,

    /// Start from a share string (e.g. "?q=lamp&stock=1")
    #[arg(long = "state", value_name = "QUERY")]
    pub state: Option<String>,
}

impl FilterArgs {
    /// Build the normalized filter state these flags describe
    #[must_use]
    pub fn to_state(&self) -> FilterState {
        let mut state = self
            .state
            .as_deref()
            .map(codec::decode)
            .unwrap_or_default();

        if let Some(query) = &self.query {
            state.query.clone_from(query);
        }
        if !self.categories.is_empty() {
            state.categories.clone_from(&self.categories);
        }
        if let Some(min) = &self.min {
            state.price_min.clone_from(min);
        }
        if let Some(max) = &self.max {
            state.price_max.clone_from(max);
        }
        if self.in_stock {
            state.in_stock_only = true;
        }
        if let Some(sort) = self.sort {
            state.sort = sort;
        }
        state.normalized()
    }
}

/// Configuration management subcommands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum ConfigCommands {
    /// Print the current configuration
    Show,

    /// Print the config file location
    Path,

    /// Run the interactive setup again
    Init,

    /// Set the default inventory file or URL
    #[command(name = "set-inventory")]
    SetInventory {
        /// Path, URL, or `-` for stdin
        #[arg(value_name = "LOCATION")]
        location: String,
    },
}

/// Main CLI structure for parsing command-line arguments
#[derive(Parser, Debug)]
#[command(name = "vitrine")]
#[command(about = "Browse and filter a product catalog", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Suppress informational output (only print results)
    #[arg(short = 'q', long = "quiet", global = true)]
    pub quiet: bool,

    /// Log debug output to stderr
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    /// Inventory file, URL, or `-` for stdin (overrides config)
    #[arg(long = "inventory", value_name = "PATH|URL", global = true)]
    pub inventory: Option<String>,
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Open the interactive browser (default)
    #[command(visible_alias = "b")]
    Browse {
        /// Start from a share string (e.g. "?cat=Garden&sort=price_asc")
        #[arg(long = "state", value_name = "QUERY")]
        state: Option<String>,
    },

    /// Filter the inventory and print the result
    #[command(visible_alias = "s")]
    Search {
        #[command(flatten)]
        filter: FilterArgs,

        /// Output format (overrides config)
        #[arg(long = "format", value_enum)]
        format: Option<OutputFormat>,
    },

    /// Show every field of one item
    Show {
        /// Item id
        id: String,
    },

    /// Load and validate an inventory document
    Validate {
        /// Inventory file or URL (defaults to the configured inventory)
        #[arg(value_name = "PATH|URL")]
        path: Option<String>,
    },

    /// Print the share string for a set of filters
    Url {
        #[command(flatten)]
        filter: FilterArgs,
    },

    /// Manage configuration settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completion scripts
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },
}

impl Cli {
    /// Parse command line arguments
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Get the command, defaulting to Browse if none specified
    #[must_use]
    pub fn get_command(&self) -> Commands {
        self.command
            .clone()
            .unwrap_or(Commands::Browse { state: None })
    }

    /// The clap command tree, for completions
    #[must_use]
    pub fn command_tree() -> Command {
        Self::command()
    }
}

/// Write a static completion script for `shell`
pub fn generate_completions<W: Write>(shell: Shell, buf: &mut W) {
    let mut cmd = Cli::command_tree();
    let name = cmd.get_name().to_string();
    clap_complete::generate(shell, &mut cmd, name, buf);
}
