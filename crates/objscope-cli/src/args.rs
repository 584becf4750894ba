use crate::types::OutputFormat;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "objscope")]
#[command(about = "Browse arbitrary object graphs as a lazy tree", long_about = None)]
#[command(version)]
pub struct Cli {
    #[arg(long, default_value = "~/.objscope", global = true)]
    pub data_dir: String,

    #[arg(long, default_value = "plain", global = true)]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print an expanded tree of a JSON document
    Show {
        /// JSON file to browse
        file: PathBuf,

        /// Root name shown in the tree
        #[arg(long, default_value = "root")]
        name: String,

        /// Levels to expand below the root
        #[arg(long, default_value = "2")]
        depth: usize,

        /// Hide callable members
        #[arg(long)]
        no_callables: bool,

        /// Hide members named __like_this__
        #[arg(long)]
        no_special: bool,

        /// Hide the root row and list its children at top level
        #[arg(long)]
        hide_root: bool,
    },

    /// Browse a JSON document interactively
    Browse {
        /// JSON file to browse
        file: PathBuf,

        /// Root name shown in the tree
        #[arg(long, default_value = "root")]
        name: String,
    },

    /// Browse a built-in sample graph interactively
    Demo,
}
