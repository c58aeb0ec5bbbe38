use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "jsondir", bin_name = "jsondir", version)]
#[command(about = "Inspect and edit a directory of JSON records", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Store root directory (overrides config and JSONDIR_ROOT)
    #[arg(short, long, global = true, help_heading = "Options")]
    pub root: Option<PathBuf>,

    /// Config file to load [default: jsondir.toml, if present]
    #[arg(short, long, global = true, help_heading = "Options")]
    pub config: Option<PathBuf>,

    /// Verbose output (debug logging)
    #[arg(short, long, global = true, help_heading = "Options")]
    pub verbose: bool,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Write a record (JSON from the argument or stdin)
    #[command(alias = "w")]
    Write {
        collection: String,
        resource: String,
        /// JSON document; read from stdin when omitted
        json: Option<String>,
    },

    /// Print a single record
    #[command(alias = "r")]
    Read { collection: String, resource: String },

    /// Print every record in a collection
    #[command(alias = "ls")]
    List { collection: String },

    /// Delete a record, or the whole collection when no resource is given
    #[command(alias = "rm")]
    Delete {
        collection: String,
        resource: Option<String>,
    },

    /// Write the sample `users` collection
    Seed,
}
