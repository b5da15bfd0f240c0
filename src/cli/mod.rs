pub mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::site::amazon;

#[derive(Parser)]
#[command(name = "shopscout")]
#[command(about = "Search a shopping site in a real browser and save matching listings", long_about = None)]
pub struct Cli {
    /// Config file to use instead of ~/.config/shopscout/config.toml
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run a search and save the matching products
    Search {
        /// Search text; every word must appear in a product name
        query: String,

        /// Base URL of the site to search
        #[arg(short, long, default_value = amazon::BASE_URL)]
        site: String,

        /// Backend route the results are posted to
        #[arg(short, long)]
        route: Option<String>,

        /// Post results to the backend after saving
        #[arg(long)]
        submit: bool,

        /// Results file path
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Show the browser window
        #[arg(long)]
        headed: bool,
    },
    /// List supported sites
    Sites,
}
