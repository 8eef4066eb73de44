use clap::{Args, Subcommand, ValueEnum};

use super::subcommands::{AssignmentCommands, PlanCommands};

/// Top-level commands.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Initialize a Stride project in the current directory.
    Init(InitArgs),
    /// Assignment management.
    Assignment {
        #[command(subcommand)]
        action: AssignmentCommands,
    },
    /// Seven-day study plan.
    Plan {
        #[command(subcommand)]
        action: PlanCommands,
    },
    /// Print the JSON schema of a stored or computed document.
    Schema(SchemaArgs),
}

#[derive(Clone, Debug, Args)]
pub struct InitArgs {
    /// Directory to initialize (defaults to --project or the current directory)
    pub path: Option<String>,
}

#[derive(Clone, Debug, Args)]
pub struct SchemaArgs {
    /// Document to describe
    #[arg(value_enum)]
    pub kind: SchemaKind,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum SchemaKind {
    Assignment,
    Overrides,
    Plan,
}
