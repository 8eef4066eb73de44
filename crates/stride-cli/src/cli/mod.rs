use clap::Parser;

pub mod global;
pub mod root_commands;
pub mod subcommands;

pub use global::{ColorMode, GlobalFlags, OutputFormat};
pub use root_commands::Commands;

/// Top-level CLI parser for the `stride` binary.
#[derive(Debug, Parser)]
#[command(name = "stride", version, about = "Stride - assignments and a seven-day study plan")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, table, raw
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Max rows for list commands (overrides general.default_limit)
    #[arg(short, long, global = true)]
    pub limit: Option<u32>,

    /// Only log errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Log at debug level (STRIDE_LOG takes precedence)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Project root (defaults to the nearest directory containing .stride)
    #[arg(short, long, global = true)]
    pub project: Option<String>,

    /// Table colors: auto, always, never
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorMode,
}

impl Cli {
    /// Extract ergonomic global flags struct for command handlers.
    #[must_use]
    pub fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            limit: self.limit,
            quiet: self.quiet,
            project: self.project.clone(),
            color: self.color,
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, Parser};

    use super::subcommands::{AssignmentCommands, PlanCommands};
    use super::{Cli, Commands, GlobalFlags, OutputFormat};

    #[test]
    fn clap_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_flags_parse_before_subcommand() {
        let cli = Cli::try_parse_from([
            "stride", "--format", "table", "--limit", "10", "--verbose", "plan", "show",
        ])
        .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Table);
        assert_eq!(cli.limit, Some(10));
        assert!(cli.verbose);
        assert!(matches!(
            cli.command,
            Commands::Plan {
                action: PlanCommands::Show { .. }
            }
        ));
    }

    #[test]
    fn global_flags_parse_after_subcommand() {
        let cli = Cli::try_parse_from(["stride", "assignment", "list", "--format", "raw", "--quiet"])
            .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Raw);
        assert!(cli.quiet);
        assert!(matches!(
            cli.command,
            Commands::Assignment {
                action: AssignmentCommands::List { .. }
            }
        ));
    }

    #[test]
    fn output_format_rejects_invalid_value() {
        let parsed = Cli::try_parse_from(["stride", "--format", "xml", "plan", "show"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn overdue_and_upcoming_conflict() {
        let parsed =
            Cli::try_parse_from(["stride", "assignment", "list", "--overdue", "--upcoming"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn add_requires_title_and_due() {
        assert!(Cli::try_parse_from(["stride", "assignment", "add", "--title", "x"]).is_err());
        let cli = Cli::try_parse_from([
            "stride",
            "assignment",
            "add",
            "--title",
            "Lab",
            "--due",
            "2026-10-22",
            "--estimate",
            "90",
        ])
        .expect("cli should parse");
        match cli.command {
            Commands::Assignment {
                action: AssignmentCommands::Add { estimate, .. },
            } => assert_eq!(estimate, Some(90)),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn plan_move_takes_key_and_date() {
        let cli = Cli::try_parse_from(["stride", "plan", "move", "asg-1|0", "2026-10-21"])
            .expect("cli should parse");
        assert!(matches!(
            cli.command,
            Commands::Plan {
                action: PlanCommands::Move { .. }
            }
        ));
    }

    #[test]
    fn global_flags_extraction_copies_values() {
        let cli = Cli::try_parse_from(["stride", "--project", "/tmp/demo", "plan", "show"])
            .expect("cli should parse");
        let flags: GlobalFlags = cli.global_flags();
        assert_eq!(flags.project.as_deref(), Some("/tmp/demo"));
    }
}
