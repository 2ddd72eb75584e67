//! CLI argument parsing for fe

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "fe")]
#[command(author, version, about = "Render form element definitions to HTML", long_about = None)]
pub struct Cli {
    /// Path to config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Log level (TRACE, DEBUG, INFO, WARN, ERROR)
    #[arg(short = 'l', long = "log-level", global = true)]
    pub log_level: Option<String>,

    /// Directory of extra `{type}.hbs` templates (overrides config)
    #[arg(short = 't', long = "template-dir", global = true)]
    pub template_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Render elements from JSON or YAML files
    Render {
        /// Files holding one element or a list of elements
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Sort each file's elements by their `order` field first
        #[arg(short, long)]
        sort: bool,

        /// Report failing elements and keep rendering the rest
        #[arg(short = 'k', long)]
        keep_going: bool,
    },

    /// List registered element types
    Types,

    /// Print the template source for an element type
    Show {
        /// Element type
        #[arg(required = true)]
        element_type: String,
    },
}
