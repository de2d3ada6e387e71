//! CLI command implementations.

pub mod basket;
pub mod catalog;
pub mod config;
pub mod render;

use clap::{Args, Subcommand};

/// Arguments for the render command.
#[derive(Args)]
pub struct RenderArgs {
    #[command(subcommand)]
    pub command: RenderCommand,

    /// Write the page to a file instead of stdout.
    #[arg(short, long, global = true)]
    pub out: Option<String>,
}

#[derive(Subcommand)]
pub enum RenderCommand {
    /// Render the home page.
    Home {
        /// Selected category tab (0-based).
        #[arg(short, long, default_value = "0")]
        tab: usize,

        /// Products to put in the basket first.
        #[arg(short, long)]
        add: Vec<String>,
    },
    /// Render the checkout page.
    Checkout {
        /// Products to add, in order. Repeat an id to add it again.
        #[arg(short, long)]
        add: Vec<String>,

        /// Products to remove afterwards (every unit).
        #[arg(short, long)]
        remove: Vec<String>,
    },
    /// Render the order confirmation for a completed session.
    Success {
        /// Checkout session id.
        #[arg(short, long)]
        session: String,

        /// Render for a phone or tablet viewport.
        #[arg(long)]
        compact: bool,

        /// Expand the order summary (compact viewport only).
        #[arg(long)]
        expanded: bool,

        /// Signed-in shopper's display name.
        #[arg(long)]
        shopper: Option<String>,
    },
}

/// Arguments for the catalog command.
#[derive(Args)]
pub struct CatalogArgs {
    #[command(subcommand)]
    pub command: CatalogCommand,
}

#[derive(Subcommand)]
pub enum CatalogCommand {
    /// List products, optionally for one category.
    List {
        /// Category id.
        #[arg(long)]
        category: Option<String>,
    },
    /// List categories.
    Categories,
}

/// Arguments for the basket command.
#[derive(Args)]
pub struct BasketArgs {
    #[command(subcommand)]
    pub command: BasketCommand,
}

#[derive(Subcommand)]
pub enum BasketCommand {
    /// Apply adds then removes and print the grouped basket.
    Simulate {
        /// Products to add, in order.
        #[arg(short, long)]
        add: Vec<String>,

        /// Products to remove afterwards (every unit).
        #[arg(short, long)]
        remove: Vec<String>,

        /// Open a checkout session for the result.
        #[arg(long)]
        checkout: bool,
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
    /// Initialize a new config file.
    Init {
        /// Force overwrite existing config.
        #[arg(short, long)]
        force: bool,
    },
    /// Validate the config file.
    Validate,
}
