//! Selection scope determination.
//!
//! An invocation covers either some targets, a single package or the whole
//! project, depending on which of `--target` and `--package` were given.

/// What an invocation is restricted to.
#[derive(PartialEq, Eq, Clone, Debug)]
pub enum Scope {
    /// Nothing selected, the invocation covers the whole project
    Project,
    /// A package selected with `--package` and no targets
    Package(String),
    /// Targets selected with `--target`, optionally narrowed to one package
    Targets {
        package: Option<String>,
        targets: Vec<String>,
    },
}

/// Trait for objects that can determine their selection scope.
pub trait Provider {
    fn get_scope(&self) -> Scope;
}

/// Determines the scope from the `--package` and `--target` values.
///
/// # Examples
///
/// ```rust
/// use cargo_cmdline_cli::selection::{determine, Scope};
///
/// assert_eq!(determine(None, &[]), Scope::Project);
/// assert_eq!(determine(Some("app"), &[]), Scope::Package("app".to_string()));
/// ```
#[must_use]
pub fn determine(package: Option<&str>, targets: &[String]) -> Scope {
    match (package, targets.is_empty()) {
        (None, true) => Scope::Project,
        (Some(package), true) => Scope::Package(package.to_string()),
        (package, false) => Scope::Targets {
            package: package.map(ToString::to_string),
            targets: targets.to_vec(),
        },
    }
}
