//! CLI argument definitions for ringboard.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "ringboard",
    version,
    about = "Horse show class manager - track the running order in every ring",
    long_about = "Track which class is running in every ring of a horse show.\n\n\
                  Editors import the class list, move each ring forward as classes\n\
                  finish and fix names; viewers see what is running now and next."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Settings file (default: platform config folder).
    #[arg(long = "config", value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Directory holding the stored show and accounts.
    #[arg(long = "data-dir", value_name = "DIR", global = true)]
    pub data_dir: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Create an account.
    Register(RegisterArgs),

    /// Show the class now running and up next in every ring.
    Board(LoginArgs),

    /// List the running order of one ring, or of all rings.
    Classes(ClassesArgs),

    /// Replace the whole show from an import file.
    Import(ImportArgs),

    /// Move a ring on to its next class.
    Next(AreaTarget),

    /// Move a ring back to its previous class.
    Prev(AreaTarget),

    /// Jump a ring straight to a class.
    Jump(JumpArgs),

    /// Rename or remove rings.
    #[command(subcommand)]
    Area(AreaCommand),

    /// Rename or remove classes.
    #[command(subcommand)]
    Class(ClassCommand),
}

#[derive(Args)]
pub struct RegisterArgs {
    /// Name for the new account.
    #[arg(value_name = "USERNAME")]
    pub username: String,

    /// Password for the new account.
    #[arg(long = "password", env = "RINGBOARD_PASSWORD", hide_env_values = true)]
    pub password: String,
}

/// Credentials for viewer commands.
#[derive(Args)]
pub struct LoginArgs {
    /// Account name.
    #[arg(long = "user", short = 'u', env = "RINGBOARD_USER")]
    pub user: String,

    /// Account password.
    #[arg(long = "password", env = "RINGBOARD_PASSWORD", hide_env_values = true)]
    pub password: String,
}

/// Credentials plus the master key for editor commands.
#[derive(Args)]
pub struct EditorLogin {
    #[command(flatten)]
    pub login: LoginArgs,

    /// Key unlocking editor access.
    #[arg(
        long = "master-key",
        env = "RINGBOARD_MASTER_KEY",
        hide_env_values = true
    )]
    pub master_key: String,
}

#[derive(Args)]
pub struct ClassesArgs {
    #[command(flatten)]
    pub login: LoginArgs,

    /// Ring to list (default: all rings).
    #[arg(value_name = "AREA")]
    pub area: Option<String>,
}

#[derive(Args)]
pub struct ImportArgs {
    #[command(flatten)]
    pub editor: EditorLogin,

    /// Import file with `[Ring Name]` headers, or `-` for stdin.
    #[arg(value_name = "FILE")]
    pub input: PathBuf,
}

#[derive(Args)]
pub struct AreaTarget {
    #[command(flatten)]
    pub editor: EditorLogin,

    #[arg(value_name = "AREA")]
    pub area: String,
}

#[derive(Args)]
pub struct JumpArgs {
    #[command(flatten)]
    pub editor: EditorLogin,

    #[arg(value_name = "AREA")]
    pub area: String,

    /// Class position as shown on the board (1 = first class).
    #[arg(value_name = "POSITION", value_parser = parse_position)]
    pub position: usize,
}

#[derive(Subcommand)]
pub enum AreaCommand {
    /// Give a ring a new name.
    Rename {
        #[command(flatten)]
        editor: EditorLogin,
        #[arg(value_name = "OLD")]
        old_name: String,
        #[arg(value_name = "NEW")]
        new_name: String,
    },
    /// Delete a ring and all of its classes.
    Remove {
        #[command(flatten)]
        editor: EditorLogin,
        #[arg(value_name = "AREA")]
        name: String,
        /// Confirm the removal.
        #[arg(long = "yes", short = 'y')]
        yes: bool,
    },
}

#[derive(Subcommand)]
pub enum ClassCommand {
    /// Give a class a new name.
    Rename {
        #[command(flatten)]
        editor: EditorLogin,
        #[arg(value_name = "AREA")]
        area: String,
        #[arg(value_name = "POSITION", value_parser = parse_position)]
        position: usize,
        #[arg(value_name = "NEW")]
        new_name: String,
    },
    /// Delete a class from a ring's running order.
    Remove {
        #[command(flatten)]
        editor: EditorLogin,
        #[arg(value_name = "AREA")]
        area: String,
        #[arg(value_name = "POSITION", value_parser = parse_position)]
        position: usize,
        /// Confirm the removal.
        #[arg(long = "yes", short = 'y')]
        yes: bool,
    },
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

/// Parse a 1-based class position into a 0-based index.
pub fn parse_position(value: &str) -> Result<usize, String> {
    let position: usize = value
        .trim()
        .parse()
        .map_err(|_| format!("'{value}' is not a class position"))?;
    position
        .checked_sub(1)
        .ok_or_else(|| "class positions start at 1".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn positions_are_one_based() {
        assert_eq!(parse_position("1"), Ok(0));
        assert_eq!(parse_position(" 3 "), Ok(2));
        assert!(parse_position("0").is_err());
        assert!(parse_position("first").is_err());
    }

    #[test]
    fn parses_jump_command() {
        let cli = Cli::try_parse_from([
            "ringboard",
            "jump",
            "--user",
            "steward",
            "--password",
            "pw",
            "--master-key",
            "emily",
            "Main Ring",
            "2",
        ])
        .unwrap();
        match cli.command {
            Command::Jump(args) => {
                assert_eq!(args.area, "Main Ring");
                assert_eq!(args.position, 1);
                assert_eq!(args.editor.login.user, "steward");
            }
            _ => panic!("expected jump"),
        }
    }
}
