use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("At least one target is required to build an invocation.")]
    NoTargets,

    #[error(
        "Targets span more than one package: `{}` and `{}`. Filter targets by package first.",
        .first.display(),
        .other.display()
    )]
    MixedPackages { first: PathBuf, other: PathBuf },

    #[error("Invalid command: command may not be empty")]
    EmptyCommand,

    #[error("Invalid command `{}`: command may not contain whitespace or start with `-`", .0)]
    InvalidCommand(String),

    #[error("Unknown toolchain channel: \"{}\"", .0)]
    UnknownChannel(String),

    #[error("Unknown backtrace mode: \"{}\"", .0)]
    UnknownBacktraceMode(String),

    #[error("Unknown target kind: \"{}\"", .0)]
    UnknownTargetKind(String),

    #[error("Environment variable `{}` must be given as NAME=VALUE", .0)]
    EnvironmentFormat(String),

    #[error("Error {} {} file at `{}`: {}", .action, .file_description, .path, .original)]
    Yaml {
        action: String,
        file_description: String,
        path: String,
        original: serde_yaml::Error,
    },

    #[error("IO error with {} file at path `{}`: {}", .file_description, .path, .original)]
    Io {
        file_description: String,
        path: String,
        original: std::io::Error,
    },

    #[error("No packages were found in the project definition. Is `{}` empty?", .path)]
    EmptyProjectDefinition { path: String },

    #[error("Invalid package name: name may not be empty")]
    EmptyPackageName,

    #[error("Invalid target name in package `{}`: name may not be empty", .0)]
    EmptyTargetName(String),

    #[error("Found a non-unique package name: `{}`", .0)]
    NonUniquePackageName(String),

    #[error("Found a non-unique {} target in package {}: `{}`", .kind, .package, .name)]
    NonUniqueTargetName {
        package: String,
        kind: String,
        name: String,
    },

    #[error("Package not found: `{}`", .0)]
    PackageNotFound(String),

    #[error("Target not found: `{}`", .0)]
    TargetNotFound(String),

    #[error("Target name `{}` matches targets in more than one package, use --package", .0)]
    AmbiguousTarget(String),

    #[error("Target `{}` has no launch command, pass one explicitly", .0)]
    NoLaunchCommand(String),
}

impl Error {
    pub fn empty_project_definition(path: String) -> Self {
        Self::EmptyProjectDefinition { path }
    }

    pub fn mixed_packages(first: PathBuf, other: PathBuf) -> Self {
        Self::MixedPackages { first, other }
    }

    pub fn yaml_error(
        action: String,
        file_description: String,
        path: String,
        original: serde_yaml::Error,
    ) -> Self {
        Self::Yaml {
            action,
            file_description,
            path,
            original,
        }
    }

    pub fn io_error(file_description: String, path: String, original: std::io::Error) -> Self {
        Self::Io {
            file_description,
            path,
            original,
        }
    }
}
