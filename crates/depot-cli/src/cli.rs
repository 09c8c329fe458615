//! CLI argument definitions for depot.
//!
//! Each command corresponds to a handler in the [`super::commands`] module.

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "depot",
    version,
    about = "An in-memory package manager with transactional installs",
    long_about = "depot installs packages from a local catalog, keeps a reverse-dependency \
                  index so removals stay safe, moves pinned dependency chains together on \
                  update, and can undo the most recent operation."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Install packages and their dependencies
    Install {
        /// Package specs (name or name==version) or groups (@name)
        #[arg(required = true)]
        specs: Vec<String>,
    },

    /// Remove installed packages
    Remove {
        /// Package names or groups (@name)
        #[arg(required = true)]
        names: Vec<String>,
    },

    /// Update a package and every pinned dependency that moves with it
    Update {
        /// Package name, or name==version to target a specific version
        spec: String,
        /// Show the update chain without applying it
        #[arg(long)]
        dry_run: bool,
    },

    /// List installed packages
    List,

    /// Undo the most recent install, removal or update
    Undo,

    /// Display the dependency tree
    Tree {
        /// Root package (default: every installed package)
        name: Option<String>,
        /// Show dependents instead of dependencies
        #[arg(long, requires = "name")]
        inverted: bool,
        /// Maximum depth to display
        #[arg(long)]
        depth: Option<usize>,
    },

    /// Verify the installed set and the reverse-dependency index
    Check,
}

pub fn parse() -> Cli {
    Cli::parse()
}
