//! Building [`CommandLine`]s from targets, packages and projects.
//!
//! Target and package invocations always run from the workspace manifest
//! directory and select the package with `--package`, so cargo resolves the same
//! workspace no matter where the caller is.

use indexmap::IndexMap;
use log::{debug, error};

use crate::command::CargoCommand;
use crate::command_line::{Channel, CommandLine};
use crate::error::{Error, Result};
use crate::workspace::{Package, Project, Target, TargetKind};

const PACKAGE_FLAG: &str = "--package";

/// Builds an invocation of `command` restricted to `targets`.
///
/// Targets are selected once per name, in the order they are first seen. When
/// targets of different kinds share a name the first one wins. `--lib` is
/// emitted at most once. `extra_arguments` follow the selection flags.
///
/// # Errors
///
/// Returns [`Error::NoTargets`] for an empty slice and [`Error::MixedPackages`]
/// when the targets belong to more than one package. Both are caller mistakes;
/// filter targets by package before calling.
pub fn for_targets(
    targets: &[&Target],
    command: CargoCommand,
    extra_arguments: &[String],
) -> Result<CommandLine> {
    let Some(first) = targets.first() else {
        error!("Refusing to build a `{command}` invocation without targets");
        return Err(Error::NoTargets);
    };
    let package = &first.package;

    if let Some(other) = targets
        .iter()
        .find(|target| target.package.root_directory != package.root_directory)
    {
        error!("Targets `{first}` and `{other}` belong to different packages");
        return Err(Error::mixed_packages(
            package.root_directory.clone(),
            other.package.root_directory.clone(),
        ));
    }

    let mut selected: IndexMap<&str, TargetKind> = IndexMap::new();
    for target in targets {
        selected.entry(target.name.as_str()).or_insert(target.kind);
    }

    let mut arguments = vec![PACKAGE_FLAG.to_string(), package.name.clone()];
    let mut lib_selected = false;
    for (name, kind) in selected {
        let Some(flag) = kind.flag() else {
            debug!("Target `{name}` has an unknown kind, no selection flag added");
            continue;
        };

        if kind.takes_name() {
            arguments.push(flag.to_string());
            arguments.push(name.to_string());
        } else if !lib_selected {
            // `--lib` may only be given once
            lib_selected = true;
            arguments.push(flag.to_string());
        }
    }
    arguments.extend_from_slice(extra_arguments);

    let command_line = CommandLine::new(command, package.workspace.manifest_directory())
        .with_arguments(arguments);
    debug!("Built target invocation: {command_line:?}");
    Ok(command_line)
}

/// Builds an invocation of `command` restricted to a single target.
///
/// # Errors
///
/// Never fails in practice; the signature matches [`for_targets`].
pub fn for_target(
    target: &Target,
    command: CargoCommand,
    extra_arguments: &[String],
) -> Result<CommandLine> {
    for_targets(&[target], command, extra_arguments)
}

/// Builds an invocation of `command` over a whole package.
#[must_use]
pub fn for_package(
    package: &Package,
    command: CargoCommand,
    extra_arguments: &[String],
) -> CommandLine {
    let mut arguments = vec![PACKAGE_FLAG.to_string(), package.name.clone()];
    arguments.extend_from_slice(extra_arguments);

    let command_line = CommandLine::new(command, package.workspace.manifest_directory())
        .with_arguments(arguments);
    debug!("Built package invocation: {command_line:?}");
    command_line
}

/// Builds an invocation of `command` over everything below the project root.
///
/// This is the only factory that takes a toolchain channel.
#[must_use]
pub fn for_project(
    project: &Project,
    command: CargoCommand,
    extra_arguments: &[String],
    channel: Channel,
) -> CommandLine {
    let command_line = CommandLine::new(command, project.root_directory.clone())
        .with_arguments(extra_arguments.iter().cloned())
        .with_channel(channel);
    debug!("Built project invocation: {command_line:?}");
    command_line
}
