use clap::{ArgAction, Parser, Subcommand};
use coursenav::history::HistoryMode;

/// Returns the version string, including git hash and commit date for non-release builds.
/// Format: "0.3.2" for releases, "0.3.2@abc1234 2024-01-15 14:30" for dev builds
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const GIT_COMMIT_DATE: &str = env!("GIT_COMMIT_DATE");
    const IS_RELEASE: &str = env!("IS_RELEASE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{} {}", VERSION, GIT_HASH, GIT_COMMIT_DATE)
        }
    })
}

#[derive(Parser, Debug)]
#[command(name = "coursenav", bin_name = "coursenav", version = get_version())]
#[command(
    about = "Step through lessons with the state kept in the URL",
    long_about = None
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Record writes as new history entries
    #[arg(long, global = true, conflicts_with = "replace")]
    pub push: bool,

    /// Overwrite the current history entry
    #[arg(long, global = true)]
    pub replace: bool,

    /// Verbose logging to stderr (-v debug, -vv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// The history mode forced by flags, if any.
    pub fn mode_override(&self) -> Option<HistoryMode> {
        if self.push {
            Some(HistoryMode::Push)
        } else if self.replace {
            Some(HistoryMode::Replace)
        } else {
            None
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the current location and lesson
    #[command(display_order = 1)]
    Show,

    /// Go to a location (always a new history entry)
    #[command(alias = "o", display_order = 2)]
    Open {
        /// Path, query (?day=3) or full URL
        href: String,
    },

    /// Set lesson params (levelId, day, lesson)
    #[command(display_order = 3)]
    Set {
        /// Assignments like day=7 lesson=GRAMMAR (empty value resets)
        #[arg(required = true, num_args = 1..)]
        assignments: Vec<String>,
    },

    /// Move between lesson days
    #[command(display_order = 4)]
    Day {
        #[command(subcommand)]
        action: DayCommand,
    },

    /// Go back one history entry
    #[command(alias = "b", display_order = 10)]
    Back,

    /// Go forward one history entry
    #[command(alias = "f", display_order = 11)]
    Forward,

    /// List history entries
    #[command(alias = "h", display_order = 12)]
    History,

    /// Get or set configuration
    #[command(display_order = 20)]
    Config {
        /// Configuration key (history-mode, history-limit)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}

#[derive(Subcommand, Debug, Clone, Copy)]
pub enum DayCommand {
    /// Next day (stays on the last one)
    Next,
    /// Previous day (stays on the first one)
    Prev,
    /// Back to day 1
    Reset,
    /// Jump to a day
    Seek {
        #[arg(allow_negative_numbers = true)]
        day: i64,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_day_seek() {
        let cli = Cli::try_parse_from(["coursenav", "day", "seek", "12"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Commands::Day {
                action: DayCommand::Seek { day: 12 }
            })
        ));
    }

    #[test]
    fn push_and_replace_conflict() {
        assert!(Cli::try_parse_from(["coursenav", "--push", "--replace", "back"]).is_err());
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["coursenav", "set", "day=2", "--push", "-vv"]).unwrap();
        assert_eq!(cli.mode_override(), Some(HistoryMode::Push));
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn set_requires_assignments() {
        assert!(Cli::try_parse_from(["coursenav", "set"]).is_err());
    }

    #[test]
    fn no_command_is_allowed() {
        let cli = Cli::try_parse_from(["coursenav"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.mode_override(), None);
    }
}
