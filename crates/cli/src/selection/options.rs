//! Applying environment, toolchain and argument options to an invocation.

use cargo_cmdline_core::command_line::{CommandLine, EnvironmentVariables};
use cargo_cmdline_core::error::Error::EnvironmentFormat;
use cargo_cmdline_core::error::Result;

use crate::cli_args::Args;

/// Parses `NAME=VALUE` pairs into environment overrides.
///
/// # Errors
///
/// Returns [`EnvironmentFormat`] if a pair has no `=` or an empty name.
pub fn parse_environment(pairs: &[String], explicit: bool) -> Result<EnvironmentVariables> {
    let mut environment = if explicit {
        EnvironmentVariables::explicit()
    } else {
        EnvironmentVariables::inherit()
    };

    for pair in pairs {
        match pair.split_once('=') {
            Some((name, value)) if !name.is_empty() => {
                environment = environment.with_env(name, value);
            }
            _ => return Err(EnvironmentFormat(pair.clone())),
        }
    }

    Ok(environment)
}

/// Applies the toolchain, environment and argument options from `args`.
///
/// Prepended and positional arguments keep the order they were given in.
///
/// # Errors
///
/// Returns an error if an environment override is malformed.
pub fn apply_options(command_line: CommandLine, args: &Args) -> Result<CommandLine> {
    let mut command_line = command_line
        .with_backtrace_mode(args.backtrace)
        .with_all_features(args.all_features)
        .with_nocapture(args.nocapture)
        .with_environment_variables(parse_environment(&args.env, args.explicit_env)?);

    // Both insert at the front of their section, so go back to front
    for argument in args.prepend.iter().rev() {
        command_line = command_line.prepend_argument(argument);
    }
    for argument in args.positional.iter().rev() {
        command_line = command_line.with_positional_argument(argument);
    }

    Ok(command_line)
}
