use crate::config::Requisite;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "courseplan")]
#[command(about = "Order courses so every prerequisite comes first")]
#[command(version = "0.1.0")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the course order, or `None` if prerequisites form a cycle
    Order {
        #[command(flatten)]
        plan: PlanArgs,
        /// Print the result as JSON
        #[arg(long)]
        json: bool,
        /// On a cycle, print the cycle and unresolved courses to stderr
        #[arg(long)]
        explain: bool,
        /// Exit with status 2 when no order exists
        #[arg(long)]
        fail_on_cycle: bool,
    },

    /// Check whether a valid order exists
    Check {
        #[command(flatten)]
        plan: PlanArgs,
    },

    /// Run the Ohpe/Ohja/Tira/Jym example
    Demo,
}

/// Where courses and requisites come from. File entries are applied first.
#[derive(Args, Debug, Default)]
pub struct PlanArgs {
    /// JSON plan file with `courses` and `requisites`
    #[arg(long, short)]
    pub file: Option<PathBuf>,
    /// Register a course (repeatable)
    #[arg(long = "course", short = 'c')]
    pub courses: Vec<String>,
    /// Add a requisite as BEFORE:AFTER (repeatable)
    #[arg(long = "requires", short = 'r')]
    pub requires: Vec<Requisite>,
}
