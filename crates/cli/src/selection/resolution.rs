//! Resolving target selectors against a project and building the invocation for a scope.

use cargo_cmdline_core::command::CargoCommand;
use cargo_cmdline_core::command_line::{Channel, CommandLine};
use cargo_cmdline_core::error::{Error, Result};
use cargo_cmdline_core::invocation::{for_package, for_project, for_targets};
use cargo_cmdline_core::launch::launch_command;
use cargo_cmdline_core::workspace::{Package, Project, Target, TargetKind};
use itertools::Itertools;
use log::debug;

use crate::selection::Scope;

/// Splits a `[kind:]name` selector.
fn parse_selector(selector: &str) -> Result<(Option<TargetKind>, &str)> {
    match selector.split_once(':') {
        Some((kind, name)) => Ok((Some(kind.parse()?), name)),
        None => Ok((None, selector)),
    }
}

/// Looks up the targets matching each `[kind:]name` selector.
///
/// Without a kind, every target with the name is selected. Without a package,
/// a name must not match targets in more than one package.
///
/// # Errors
///
/// Returns an error if the package or a target doesn't exist, a kind is unknown,
/// or a selector is ambiguous.
pub fn resolve_targets<'a>(
    project: &'a Project,
    package: Option<&str>,
    selectors: &[String],
) -> Result<Vec<&'a Target>> {
    let package: Option<&Package> = match package {
        Some(name) => Some(
            project
                .package(name)
                .ok_or_else(|| Error::PackageNotFound(name.to_string()))?,
        ),
        None => None,
    };

    let mut resolved = Vec::new();
    for selector in selectors {
        let (kind, name) = parse_selector(selector)?;

        let matches: Vec<&Target> = project
            .targets_named(name)
            .into_iter()
            .filter(|target| kind.map_or(true, |kind| target.kind == kind))
            .filter(|target| {
                package.map_or(true, |package| {
                    target.package.root_directory == package.root_directory
                })
            })
            .collect();

        if matches.is_empty() {
            return Err(Error::TargetNotFound(selector.clone()));
        }

        if matches
            .iter()
            .map(|target| &target.package.root_directory)
            .unique()
            .count()
            > 1
        {
            return Err(Error::AmbiguousTarget(selector.clone()));
        }

        resolved.extend(matches);
    }

    debug!("Resolved targets: {}", resolved.iter().join(", "));
    Ok(resolved)
}

/// Builds the invocation for a selection scope.
///
/// Targets default to the command that launches the first of them, packages
/// and the project default to `build`. The channel is applied on top for target
/// and package scopes.
///
/// # Errors
///
/// Returns an error if targets can't be resolved, belong to different packages,
/// or have no launch command and none was given.
pub fn command_line_for_scope(
    project: &Project,
    scope: &Scope,
    command: Option<CargoCommand>,
    extra_arguments: &[String],
    channel: Channel,
) -> Result<CommandLine> {
    match scope {
        Scope::Project => Ok(for_project(
            project,
            command.unwrap_or(CargoCommand::Build),
            extra_arguments,
            channel,
        )),
        Scope::Package(name) => {
            let package = project
                .package(name)
                .ok_or_else(|| Error::PackageNotFound(name.clone()))?;
            Ok(for_package(
                package,
                command.unwrap_or(CargoCommand::Build),
                extra_arguments,
            )
            .with_channel(channel))
        }
        Scope::Targets { package, targets } => {
            let targets = resolve_targets(project, package.as_deref(), targets)?;
            let command = match command {
                Some(command) => command,
                None => {
                    let first = targets.first().ok_or(Error::NoTargets)?;
                    launch_command(first).ok_or_else(|| Error::NoLaunchCommand(first.name.clone()))?
                }
            };
            Ok(for_targets(&targets, command, extra_arguments)?.with_channel(channel))
        }
    }
}
