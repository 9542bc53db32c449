//! Cargo subcommands.
//!
//! Cargo can be extended with user-defined subcommands, so the command is not a
//! closed set. Well-known subcommands get their own variant and anything else
//! is carried through [`CargoCommand::Custom`] after validation.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{Error, Result};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CargoCommand {
    Build,
    Check,
    Clean,
    Doc,
    Run,
    Test,
    Bench,
    /// A subcommand not known to this crate, e.g. `nextest` or `miri`.
    Custom(String),
}

impl CargoCommand {
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Build => "build",
            Self::Check => "check",
            Self::Clean => "clean",
            Self::Doc => "doc",
            Self::Run => "run",
            Self::Test => "test",
            Self::Bench => "bench",
            Self::Custom(command) => command,
        }
    }

    /// Validates and wraps a free-form subcommand.
    ///
    /// Known names are normalized to their curated variant, so
    /// `CargoCommand::custom("run")` is `CargoCommand::Run`.
    ///
    /// # Errors
    ///
    /// Returns an error if the command is empty, contains whitespace or looks
    /// like a flag.
    pub fn custom(command: &str) -> Result<Self> {
        command.parse()
    }
}

impl FromStr for CargoCommand {
    type Err = Error;

    fn from_str(command: &str) -> Result<Self> {
        if command.is_empty() {
            return Err(Error::EmptyCommand);
        }

        if command.starts_with('-') || command.chars().any(char::is_whitespace) {
            return Err(Error::InvalidCommand(command.to_string()));
        }

        Ok(match command {
            "build" => Self::Build,
            "check" => Self::Check,
            "clean" => Self::Clean,
            "doc" => Self::Doc,
            "run" => Self::Run,
            "test" => Self::Test,
            "bench" => Self::Bench,
            other => Self::Custom(other.to_string()),
        })
    }
}

impl Display for CargoCommand {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        formatter.write_str(self.as_str())
    }
}

impl Serialize for CargoCommand {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for CargoCommand {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let command = String::deserialize(deserializer)?;
        command.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_commands_parse_to_curated_variants() {
        assert_eq!("build".parse::<CargoCommand>().unwrap(), CargoCommand::Build);
        assert_eq!("run".parse::<CargoCommand>().unwrap(), CargoCommand::Run);
        assert_eq!("test".parse::<CargoCommand>().unwrap(), CargoCommand::Test);
        assert_eq!("bench".parse::<CargoCommand>().unwrap(), CargoCommand::Bench);
    }

    #[test]
    fn test_unknown_command_is_custom() {
        let command = CargoCommand::custom("nextest").unwrap();
        assert_eq!(command, CargoCommand::Custom("nextest".to_string()));
        assert_eq!(command.to_string(), "nextest");
    }

    #[test]
    fn test_custom_normalizes_known_names() {
        assert_eq!(CargoCommand::custom("check").unwrap(), CargoCommand::Check);
    }

    #[test]
    fn test_empty_command() {
        assert!(matches!(CargoCommand::custom(""), Err(Error::EmptyCommand)));
    }

    #[test]
    fn test_invalid_commands() {
        assert!(matches!(
            CargoCommand::custom("run --release"),
            Err(Error::InvalidCommand(_))
        ));
        assert!(matches!(
            CargoCommand::custom("--release"),
            Err(Error::InvalidCommand(_))
        ));
    }

    #[test]
    fn test_serde_as_plain_string() {
        let yaml = serde_yaml::to_string(&CargoCommand::Custom("miri".to_string())).unwrap();
        assert_eq!(yaml.trim(), "miri");

        let command: CargoCommand = serde_yaml::from_str("doc").unwrap();
        assert_eq!(command, CargoCommand::Doc);

        let invalid: serde_yaml::Result<CargoCommand> = serde_yaml::from_str("\"\"");
        assert!(invalid.is_err());
    }
}
