use clap::Subcommand;

/// Assignment entity commands.
#[derive(Clone, Debug, Subcommand)]
pub enum AssignmentCommands {
    /// Add an assignment.
    Add {
        #[arg(long)]
        title: String,
        /// Due date: RFC 3339 timestamp or YYYY-MM-DD (end of that day)
        #[arg(long)]
        due: String,
        #[arg(long)]
        course: Option<String>,
        #[arg(long)]
        notes: Option<String>,
        /// Estimated effort in minutes
        #[arg(long)]
        estimate: Option<u32>,
    },
    /// Update an assignment. Pass an empty string to clear course or notes.
    Update {
        id: String,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        due: Option<String>,
        #[arg(long)]
        course: Option<String>,
        #[arg(long)]
        notes: Option<String>,
        #[arg(long)]
        estimate: Option<u32>,
        /// Drop the estimate and fall back to the default
        #[arg(long, conflicts_with = "estimate")]
        clear_estimate: bool,
    },
    /// Get an assignment by ID.
    Get { id: String },
    /// Delete an assignment and its plan overrides.
    Delete { id: String },
    /// List assignments.
    List {
        #[arg(long)]
        course: Option<String>,
        #[arg(long)]
        search: Option<String>,
        /// Sort key: due, course, title, created
        #[arg(long)]
        sort: Option<String>,
        /// Only assignments whose due time has passed
        #[arg(long, conflicts_with = "upcoming")]
        overdue: bool,
        /// Only assignments still ahead
        #[arg(long)]
        upcoming: bool,
        #[arg(long)]
        limit: Option<u32>,
    },
}
