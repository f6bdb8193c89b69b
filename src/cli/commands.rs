//! CLI command definitions

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "holidays")]
#[command(about = "Keep a personal list of holidays", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a new holidays directory
    Init {
        /// Directory to initialize (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,
    },

    /// List saved holidays
    #[command(alias = "ls")]
    List,

    /// Show a single holiday
    Show {
        /// Key or unique key prefix
        key: String,
    },

    /// Add a holiday
    Add {
        /// Date of the holiday (YYYY-MM-DD)
        #[arg(short, long)]
        date: NaiveDate,

        /// Description
        #[arg(long)]
        descr: String,
    },

    /// Edit a holiday; omitted fields keep their current value
    Edit {
        /// Key or unique key prefix
        key: String,

        /// New date (YYYY-MM-DD)
        #[arg(short, long)]
        date: Option<NaiveDate>,

        /// New description
        #[arg(long)]
        descr: Option<String>,
    },

    /// Delete a holiday
    #[command(alias = "rm")]
    Delete {
        /// Key or unique key prefix
        key: String,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// View or modify configuration
    Config {
        /// Config key to get or set
        key: Option<String>,

        /// Value to set (if provided, sets the key)
        value: Option<String>,

        /// List all configuration
        #[arg(short, long)]
        list: bool,
    },
}
