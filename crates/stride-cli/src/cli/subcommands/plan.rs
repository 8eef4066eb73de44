use clap::Subcommand;

/// Study plan commands. Chunks are addressed by key (`<assignment-id>|<index>`).
#[derive(Clone, Debug, Subcommand)]
pub enum PlanCommands {
    /// Show the seven-day plan.
    Show {
        /// Compute the plan as of this RFC 3339 instant instead of now
        #[arg(long)]
        now: Option<String>,
    },
    /// Mark a chunk done.
    Done {
        key: String,
        /// Mark the chunk not done instead
        #[arg(long)]
        undo: bool,
    },
    /// Flip a chunk's done state.
    Toggle { key: String },
    /// Move a chunk to another day in the window.
    Move { key: String, date: String },
    /// Drop every override for a chunk.
    Reset {
        key: String,
        /// Only return the chunk to its default day; keep the done flag
        #[arg(long)]
        day_only: bool,
    },
    /// Remove overrides that no longer match any chunk.
    Prune,
}
