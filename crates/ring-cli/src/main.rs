//! Ringboard CLI.

use clap::{ColorChoice, Parser};
use ring_cli::cli::{Cli, Command, LogFormatArg, LogLevelArg};
use ring_cli::commands::{
    Workspace, error_message, run_area, run_board, run_class, run_classes, run_import, run_jump,
    run_next, run_prev, run_register,
};
use ring_cli::logging::{LogConfig, LogFormat, init_logging};
use std::io::{self, IsTerminal};
use tracing::level_filters::LevelFilter;

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let exit_code = match run(&cli) {
        Ok(()) => 0,
        Err(error) => {
            tracing::debug!("command failed: {error:?}");
            eprintln!("error: {}", error_message(&error));
            1
        }
    };
    std::process::exit(exit_code);
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let workspace = Workspace::open(cli.config.as_deref(), cli.data_dir.as_deref())?;
    match &cli.command {
        Command::Register(args) => run_register(&workspace, args),
        Command::Board(login) => run_board(&workspace, login),
        Command::Classes(args) => run_classes(&workspace, args),
        Command::Import(args) => run_import(&workspace, args),
        Command::Next(args) => run_next(&workspace, args),
        Command::Prev(args) => run_prev(&workspace, args),
        Command::Jump(args) => run_jump(&workspace, args),
        Command::Area(command) => run_area(&workspace, command),
        Command::Class(command) => run_class(&workspace, command),
    }
}

/// Build logging configuration from CLI flags with consistent precedence.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let mut config = LogConfig {
        level_filter: cli.verbosity.tracing_level_filter(),
        ..LogConfig::default()
    };
    config.use_env_filter = !(cli.verbosity.is_present() || cli.log_level.is_some());
    if let Some(level) = cli.log_level {
        config.level_filter = match level {
            LogLevelArg::Error => LevelFilter::ERROR,
            LogLevelArg::Warn => LevelFilter::WARN,
            LogLevelArg::Info => LevelFilter::INFO,
            LogLevelArg::Debug => LevelFilter::DEBUG,
            LogLevelArg::Trace => LevelFilter::TRACE,
        };
    }
    config.format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    config.log_file = cli.log_file.clone();
    config.with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    config
}
