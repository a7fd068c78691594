//! CLI command implementations.

pub mod config;
pub mod filter;
pub mod resolve;
pub mod slug;

use clap::{Args, Subcommand};

/// Arguments for the slug command.
#[derive(Args)]
pub struct SlugArgs {
    /// Names to slugify.
    #[arg(required = true)]
    pub text: Vec<String>,
}

/// Arguments for the filter command.
#[derive(Args)]
pub struct FilterArgs {
    /// Catalog JSON export (default: configured path or sample data).
    #[arg(long)]
    pub catalog: Option<String>,

    /// JSON file with the filter state.
    #[arg(short, long, conflicts_with = "query")]
    pub filters: Option<String>,

    /// Catalog page query string, e.g. "speedMin=25&foldable=yes".
    #[arg(short, long)]
    pub query: Option<String>,

    /// Sort order: name, price_asc, price_desc, speed, range, newest.
    #[arg(short, long)]
    pub sort: Option<String>,

    /// Show only the first N models.
    #[arg(short, long)]
    pub limit: Option<usize>,
}

/// Arguments for the resolve command.
#[derive(Args)]
pub struct ResolveArgs {
    #[command(subcommand)]
    pub command: ResolveCommand,

    /// Catalog JSON export (default: configured path or sample data).
    #[arg(long, global = true)]
    pub catalog: Option<String>,
}

#[derive(Subcommand)]
pub enum ResolveCommand {
    /// Resolve brand slugs.
    Brand {
        /// Brand slugs.
        #[arg(required = true)]
        slugs: Vec<String>,
    },
    /// Resolve a model from its brand and model slugs.
    Model {
        /// Brand slug.
        brand: String,
        /// Model slug.
        model: String,
    },
    /// Resolve business slugs.
    Business {
        /// Business slugs.
        #[arg(required = true)]
        slugs: Vec<String>,
    },
    /// Resolve category slugs.
    Category {
        /// Category slugs.
        #[arg(required = true)]
        slugs: Vec<String>,
    },
    /// List businesses in a city.
    City {
        /// City slug.
        slug: String,
    },
}

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration.
    Show,
    /// Get a config value.
    Get {
        /// Config key (dot-separated).
        key: String,
    },
    /// Initialize a new config file.
    Init {
        /// Force overwrite existing config.
        #[arg(short, long)]
        force: bool,
    },
    /// Validate the config file.
    Validate,
}
