//! The cargo command line model.
//!
//! A [`CommandLine`] holds everything needed to invoke cargo: the subcommand, the
//! directory cargo resolves the workspace from, the arguments and the toolchain
//! and environment settings. Values are never mutated in place; every
//! transformation consumes or borrows a value and returns a new one.

use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};
use std::str::FromStr;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::arguments;
use crate::command::CargoCommand;
use crate::error::{Error, Result};

/// Controls the `RUST_BACKTRACE` setting of the launched process.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum BacktraceMode {
    /// Leave `RUST_BACKTRACE` alone.
    #[default]
    Default,
    Short,
    Full,
}

impl BacktraceMode {
    /// Value for `RUST_BACKTRACE`, if one should be set.
    #[must_use]
    pub fn env_value(self) -> Option<&'static str> {
        match self {
            Self::Default => None,
            Self::Short => Some("short"),
            Self::Full => Some("full"),
        }
    }
}

impl FromStr for BacktraceMode {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self> {
        match value {
            "default" => Ok(Self::Default),
            "short" => Ok(Self::Short),
            "full" => Ok(Self::Full),
            other => Err(Error::UnknownBacktraceMode(other.to_string())),
        }
    }
}

/// The toolchain release track used for an invocation.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Channel {
    /// Whatever toolchain rustup resolves for the working directory.
    #[default]
    Default,
    Stable,
    Beta,
    Nightly,
    Dev,
}

impl Channel {
    /// Toolchain name for a `+<toolchain>` selector, if one should be passed.
    #[must_use]
    pub fn toolchain(self) -> Option<&'static str> {
        match self {
            Self::Default => None,
            Self::Stable => Some("stable"),
            Self::Beta => Some("beta"),
            Self::Nightly => Some("nightly"),
            Self::Dev => Some("dev"),
        }
    }
}

impl FromStr for Channel {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self> {
        match value {
            "default" => Ok(Self::Default),
            "stable" => Ok(Self::Stable),
            "beta" => Ok(Self::Beta),
            "nightly" => Ok(Self::Nightly),
            "dev" => Ok(Self::Dev),
            other => Err(Error::UnknownChannel(other.to_string())),
        }
    }
}

impl Display for Channel {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        formatter.write_str(self.toolchain().unwrap_or("default"))
    }
}

/// Whether the launched process sees the parent environment.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum EnvironmentMode {
    /// System environment plus the overrides.
    #[default]
    Inherit,
    /// Only the listed variables.
    Explicit,
}

/// Environment variables for the invocation, in insertion order.
///
/// Nothing is captured from the current process; [`EnvironmentMode::Inherit`]
/// is resolved by whoever launches the command.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvironmentVariables {
    pub mode: EnvironmentMode,
    pub envs: IndexMap<String, String>,
}

impl EnvironmentVariables {
    #[must_use]
    pub fn inherit() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn explicit() -> Self {
        Self {
            mode: EnvironmentMode::Explicit,
            envs: IndexMap::new(),
        }
    }

    /// Adds or replaces a variable. A replaced variable keeps its position.
    #[must_use]
    pub fn with_env(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.envs.insert(name.into(), value.into());
        self
    }

    #[must_use]
    pub fn is_inherit(&self) -> bool {
        self.mode == EnvironmentMode::Inherit
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.envs.is_empty()
    }
}

/// Everything needed to invoke cargo once.
///
/// A value is built once and then only transformed: `with_*`,
/// [`CommandLine::with_positional_argument`] and [`CommandLine::prepend_argument`]
/// return new values and never modify the one they are called on.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct CommandLine {
    pub command: CargoCommand,
    pub working_directory: PathBuf,
    /// Cargo flags and program arguments, optionally separated by `--`.
    #[serde(default)]
    pub additional_arguments: Vec<String>,
    #[serde(default)]
    pub backtrace_mode: BacktraceMode,
    #[serde(default)]
    pub channel: Channel,
    #[serde(default)]
    pub environment_variables: EnvironmentVariables,
    #[serde(default)]
    pub all_features: bool,
    #[serde(default)]
    pub nocapture: bool,
}

impl CommandLine {
    #[must_use]
    pub fn new(command: CargoCommand, working_directory: impl Into<PathBuf>) -> Self {
        Self {
            command,
            working_directory: working_directory.into(),
            additional_arguments: Vec::new(),
            backtrace_mode: BacktraceMode::default(),
            channel: Channel::default(),
            environment_variables: EnvironmentVariables::default(),
            all_features: false,
            nocapture: false,
        }
    }

    #[must_use]
    pub fn working_directory(&self) -> &Path {
        &self.working_directory
    }

    #[must_use]
    pub fn with_arguments<I, S>(mut self, arguments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.additional_arguments = arguments.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_channel(mut self, channel: Channel) -> Self {
        self.channel = channel;
        self
    }

    #[must_use]
    pub fn with_backtrace_mode(mut self, backtrace_mode: BacktraceMode) -> Self {
        self.backtrace_mode = backtrace_mode;
        self
    }

    #[must_use]
    pub fn with_environment_variables(mut self, environment_variables: EnvironmentVariables) -> Self {
        self.environment_variables = environment_variables;
        self
    }

    #[must_use]
    pub fn with_all_features(mut self, all_features: bool) -> Self {
        self.all_features = all_features;
        self
    }

    #[must_use]
    pub fn with_nocapture(mut self, nocapture: bool) -> Self {
        self.nocapture = nocapture;
        self
    }

    /// Cargo flags and positional arguments, see [`arguments::split_on_double_dash`].
    #[must_use]
    pub fn split_on_double_dash(&self) -> (&[String], &[String]) {
        arguments::split_on_double_dash(&self.additional_arguments)
    }

    /// Returns a copy with `argument` as the first positional argument.
    ///
    /// Returns an unchanged copy if `argument` is already positional.
    #[must_use]
    pub fn with_positional_argument(&self, argument: &str) -> Self {
        Self {
            additional_arguments: arguments::with_positional_argument(
                &self.additional_arguments,
                argument,
            ),
            ..self.clone()
        }
    }

    /// Returns a copy with `argument` in front of all other arguments.
    #[must_use]
    pub fn prepend_argument(&self, argument: &str) -> Self {
        Self {
            additional_arguments: arguments::prepend_argument(&self.additional_arguments, argument),
            ..self.clone()
        }
    }
}
