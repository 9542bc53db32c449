//! Reading and validating project definitions.
//!
//! The project definition is a YAML description of an already resolved cargo
//! project. It is validated before use so the invocation factory can rely on
//! package names and target names being unambiguous.

use std::collections::HashSet;
use std::fs::File;

use log::debug;

use crate::error::Error::{EmptyPackageName, EmptyTargetName, NonUniquePackageName};
use crate::error::{Error, Result};
use crate::project_definitions::{PackageDefinition, ProjectDefinition};
use crate::workspace::Project;

fn get_reader(file_description: &str, path: &str) -> Result<File> {
    File::open(path)
        .map_err(|e| Error::io_error(file_description.to_string(), path.to_string(), e))
}

fn validate_targets(package: &PackageDefinition) -> Result<()> {
    let mut seen = HashSet::new();

    for target in &package.targets {
        if target.name.is_empty() {
            return Err(EmptyTargetName(package.name.clone()));
        }

        if !seen.insert((target.kind, target.name.as_str())) {
            // Same name is fine across kinds, not within one
            return Err(Error::NonUniqueTargetName {
                package: package.name.clone(),
                kind: target.kind.to_string(),
                name: target.name.clone(),
            });
        }
    }

    Ok(())
}

fn validate_packages(project: &ProjectDefinition) -> Result<()> {
    let mut names = HashSet::new();

    for package in project.packages() {
        if package.name.is_empty() {
            return Err(EmptyPackageName);
        }

        if !names.insert(package.name.as_str()) {
            return Err(NonUniquePackageName(package.name.clone()));
        }

        validate_targets(package)?;
    }

    Ok(())
}

/// Loads and validates a project definition.
///
/// # Errors
///
/// Returns an error if:
/// - The file cannot be read
/// - The YAML is malformed or doesn't match the expected structure
/// - The project has no packages
/// - Package names are empty or non-unique
/// - Target names are empty or repeated within a package and kind
///
/// # Examples
///
/// ```no_run
/// use cargo_cmdline_core::file_handling::get_project_definition;
///
/// let definition = get_project_definition("cargo-project.yml")?;
/// println!("Loaded {} packages", definition.packages().count());
/// # Ok::<(), cargo_cmdline_core::error::Error>(())
/// ```
pub fn get_project_definition(project_path: &str) -> Result<ProjectDefinition> {
    let reader = get_reader("project", project_path)?;

    let definition: ProjectDefinition = serde_yaml::from_reader(reader).map_err(|e| {
        Error::yaml_error(
            "reading".to_string(),
            "project".to_string(),
            project_path.to_string(),
            e,
        )
    })?;

    if definition.packages().next().is_none() {
        return Err(Error::empty_project_definition(project_path.to_string()));
    }

    validate_packages(&definition)?;

    debug!(
        "Loaded {} packages from `{}`",
        definition.packages().count(),
        project_path
    );
    Ok(definition)
}

/// Loads a project definition and resolves it into a [`Project`].
///
/// # Errors
///
/// See [`get_project_definition`].
pub fn get_project(project_path: &str) -> Result<Project> {
    Ok(get_project_definition(project_path)?.to_project())
}
