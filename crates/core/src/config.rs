//! Configuration path utilities.
//!
//! This module provides functions for resolving the project definition path
//! and expanding shell variables like `~` in paths.

use std::path::PathBuf;

/// Default path for the project definition file, relative to the current directory
const DEFAULT_PROJECT_PATH: &str = "cargo-project.yml";

/// Default program used to launch invocations
pub const DEFAULT_PROGRAM: &str = "cargo";

/// Resolves the project definition file path.
///
/// If a custom path is provided, uses that path. Otherwise, uses the default
/// project path. Shell expansions like `~` are resolved.
///
/// # Examples
///
/// ```
/// use cargo_cmdline_core::config::get_project_path;
///
/// // Use default path
/// let default_path = get_project_path(None);
/// assert_eq!(default_path, "cargo-project.yml");
///
/// // Use custom path
/// let custom_path = get_project_path(Some("/path/to/project.yml"));
/// ```
#[must_use]
pub fn get_project_path(project_path_arg: Option<&str>) -> String {
    let project_path = project_path_arg.unwrap_or(DEFAULT_PROJECT_PATH);

    shellexpand::tilde(project_path).to_string()
}

/// Expands `~` in a path from a project definition.
#[must_use]
pub fn expand_path(path: &str) -> PathBuf {
    PathBuf::from(shellexpand::tilde(path).as_ref())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_project_path_with_custom_path() {
        let result = get_project_path(Some("/custom/path/project.yml"));
        assert_eq!(result, "/custom/path/project.yml");
    }

    #[test]
    fn test_get_project_path_with_none() {
        assert_eq!(get_project_path(None), DEFAULT_PROJECT_PATH);
    }

    #[test]
    fn test_get_project_path_with_tilde() {
        let result = get_project_path(Some("~/my-project.yml"));
        assert!(!result.starts_with('~'));
        assert!(result.ends_with("my-project.yml"));
    }

    #[test]
    fn test_expand_path_with_tilde() {
        let expanded = expand_path("~/projects/demo");
        assert!(!expanded.starts_with("~"));
        assert!(expanded.ends_with("projects/demo"));
    }

    #[test]
    fn test_expand_path_without_tilde() {
        assert_eq!(expand_path("/absolute/path"), PathBuf::from("/absolute/path"));
    }

    #[test]
    fn test_default_program_constant() {
        assert_eq!(DEFAULT_PROGRAM, "cargo");
    }
}
