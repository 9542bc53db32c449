//! Flattening a [`CommandLine`] into a program, argument vector and environment.
//!
//! This is the mapping a launcher applies: the channel becomes a `+<toolchain>`
//! selector, `all_features` becomes `--all-features` in front of the separator,
//! `nocapture` becomes a `--nocapture` program argument and the backtrace mode
//! becomes `RUST_BACKTRACE`. Nothing is spawned here; the result is used for
//! previews and handed over as is.

use std::fmt::{Display, Formatter};
use std::path::PathBuf;

use crate::arguments::{split_on_double_dash, SEPARATOR};
use crate::command_line::{CommandLine, EnvironmentVariables};

pub const ALL_FEATURES_FLAG: &str = "--all-features";
pub const NOCAPTURE_FLAG: &str = "--nocapture";
pub const BACKTRACE_VARIABLE: &str = "RUST_BACKTRACE";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: String,
    pub working_directory: PathBuf,
    pub arguments: Vec<String>,
    pub environment: EnvironmentVariables,
}

impl Invocation {
    #[must_use]
    pub fn from_command_line(command_line: &CommandLine, program: &str) -> Self {
        let command_line = if command_line.nocapture {
            command_line.with_positional_argument(NOCAPTURE_FLAG)
        } else {
            command_line.clone()
        };

        let mut arguments = Vec::new();
        if let Some(toolchain) = command_line.channel.toolchain() {
            arguments.push(format!("+{toolchain}"));
        }
        arguments.push(command_line.command.to_string());

        let (pre, post) = split_on_double_dash(&command_line.additional_arguments);
        arguments.extend_from_slice(pre);
        if command_line.all_features && !pre.iter().any(|argument| argument == ALL_FEATURES_FLAG) {
            arguments.push(ALL_FEATURES_FLAG.to_string());
        }
        if command_line
            .additional_arguments
            .iter()
            .any(|argument| argument == SEPARATOR)
        {
            arguments.push(SEPARATOR.to_string());
            arguments.extend_from_slice(post);
        }

        let mut environment = command_line.environment_variables.clone();
        if let Some(value) = command_line.backtrace_mode.env_value() {
            environment = environment.with_env(BACKTRACE_VARIABLE, value);
        }

        Self {
            program: program.to_string(),
            working_directory: command_line.working_directory,
            arguments,
            environment,
        }
    }
}

impl Display for Invocation {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        formatter.write_str(&quote(&self.program))?;
        for argument in &self.arguments {
            write!(formatter, " {}", quote(argument))?;
        }
        Ok(())
    }
}

/// Quotes `value` for a POSIX shell when it is not a plain word.
#[must_use]
pub fn quote(value: &str) -> String {
    let is_plain = !value.is_empty()
        && value
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || "-_./:=+,@%".contains(c));

    if is_plain {
        value.to_string()
    } else {
        format!("'{}'", value.replace('\'', r"'\''"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::CargoCommand;
    use crate::command_line::{BacktraceMode, Channel, EnvironmentMode};

    fn command_line(command: CargoCommand, arguments: &[&str]) -> CommandLine {
        CommandLine::new(command, "/projects/demo").with_arguments(arguments.to_vec())
    }

    #[test]
    fn test_plain_invocation() {
        let invocation = Invocation::from_command_line(
            &command_line(CargoCommand::Run, &["--package", "app", "--bin", "app"]),
            "cargo",
        );
        assert_eq!(invocation.arguments, ["run", "--package", "app", "--bin", "app"]);
        assert_eq!(invocation.to_string(), "cargo run --package app --bin app");
        assert!(invocation.environment.is_empty());
    }

    #[test]
    fn test_channel_selector_comes_first() {
        let line = command_line(CargoCommand::Build, &[]).with_channel(Channel::Nightly);
        let invocation = Invocation::from_command_line(&line, "cargo");
        assert_eq!(invocation.arguments, ["+nightly", "build"]);
    }

    #[test]
    fn test_all_features_before_separator() {
        let line = command_line(CargoCommand::Run, &["--release", "--", "serve"])
            .with_all_features(true);
        let invocation = Invocation::from_command_line(&line, "cargo");
        assert_eq!(
            invocation.arguments,
            ["run", "--release", "--all-features", "--", "serve"]
        );
    }

    #[test]
    fn test_all_features_not_repeated() {
        let line = command_line(CargoCommand::Build, &["--all-features"]).with_all_features(true);
        let invocation = Invocation::from_command_line(&line, "cargo");
        assert_eq!(invocation.arguments, ["build", "--all-features"]);
    }

    #[test]
    fn test_nocapture_is_positional() {
        let line = command_line(CargoCommand::Test, &["--lib", "--", "parser"]).with_nocapture(true);
        let invocation = Invocation::from_command_line(&line, "cargo");
        assert_eq!(
            invocation.arguments,
            ["test", "--lib", "--", "--nocapture", "parser"]
        );
    }

    #[test]
    fn test_nocapture_already_present() {
        let line = command_line(CargoCommand::Test, &["--", "--nocapture"]).with_nocapture(true);
        let invocation = Invocation::from_command_line(&line, "cargo");
        assert_eq!(invocation.arguments, ["test", "--", "--nocapture"]);
    }

    #[test]
    fn test_backtrace_environment() {
        let line = command_line(CargoCommand::Run, &[])
            .with_backtrace_mode(BacktraceMode::Full)
            .with_environment_variables(EnvironmentVariables::explicit().with_env("A", "1"));
        let invocation = Invocation::from_command_line(&line, "cargo");

        assert_eq!(invocation.environment.mode, EnvironmentMode::Explicit);
        let variables: Vec<(&str, &str)> = invocation
            .environment
            .envs
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
            .collect();
        assert_eq!(variables, [("A", "1"), ("RUST_BACKTRACE", "full")]);
    }

    #[test]
    fn test_quote() {
        assert_eq!(quote("--bin"), "--bin");
        assert_eq!(quote("+nightly"), "+nightly");
        assert_eq!(quote("hello world"), "'hello world'");
        assert_eq!(quote(""), "''");
        assert_eq!(quote("it's"), r"'it'\''s'");
    }

    #[test]
    fn test_display_quotes_arguments() {
        let invocation = Invocation::from_command_line(
            &command_line(CargoCommand::Run, &["--", "two words"]),
            "cargo",
        );
        assert_eq!(invocation.to_string(), "cargo run -- 'two words'");
    }
}
