//! Read-only view of an already resolved cargo project.
//!
//! Nothing here discovers or parses manifests. Targets point at their package and
//! packages at their workspace through shared [`Arc`]s, which is what the
//! invocation factory needs to check that targets belong together.

use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Workspace {
    pub manifest_path: PathBuf,
}

impl Workspace {
    #[must_use]
    pub fn new(manifest_path: impl Into<PathBuf>) -> Self {
        Self {
            manifest_path: manifest_path.into(),
        }
    }

    /// Directory holding the workspace `Cargo.toml`.
    #[must_use]
    pub fn manifest_directory(&self) -> &Path {
        self.manifest_path
            .parent()
            .unwrap_or_else(|| Path::new(""))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Package {
    pub name: String,
    pub root_directory: PathBuf,
    pub workspace: Arc<Workspace>,
}

#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum TargetKind {
    Bin,
    Lib,
    Test,
    Example,
    Bench,
    #[serde(other)]
    Unknown,
}

impl TargetKind {
    /// Cargo target selection flag, `None` for kinds cargo cannot select.
    #[must_use]
    pub fn flag(self) -> Option<&'static str> {
        match self {
            Self::Bin => Some("--bin"),
            Self::Lib => Some("--lib"),
            Self::Test => Some("--test"),
            Self::Example => Some("--example"),
            Self::Bench => Some("--bench"),
            Self::Unknown => None,
        }
    }

    /// Whether the flag is followed by the target name. `--lib` is not.
    #[must_use]
    pub fn takes_name(self) -> bool {
        matches!(self, Self::Bin | Self::Test | Self::Example | Self::Bench)
    }
}

impl Display for TargetKind {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Bin => "bin",
            Self::Lib => "lib",
            Self::Test => "test",
            Self::Example => "example",
            Self::Bench => "bench",
            Self::Unknown => "unknown",
        };
        formatter.write_str(name)
    }
}

impl FromStr for TargetKind {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self> {
        match value {
            "bin" => Ok(Self::Bin),
            "lib" => Ok(Self::Lib),
            "test" => Ok(Self::Test),
            "example" => Ok(Self::Example),
            "bench" => Ok(Self::Bench),
            other => Err(Error::UnknownTargetKind(other.to_string())),
        }
    }
}

/// Artifact types a target produces, as listed in `crate-type`.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum CrateType {
    Bin,
    Lib,
    Rlib,
    Dylib,
    Cdylib,
    Staticlib,
    ProcMacro,
    #[serde(untagged)]
    Unknown(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    pub name: String,
    pub kind: TargetKind,
    pub crate_types: Vec<CrateType>,
    pub package: Arc<Package>,
}

impl Target {
    /// Whether the only artifact is an executable.
    #[must_use]
    pub fn is_executable_only(&self) -> bool {
        matches!(self.crate_types.as_slice(), [CrateType::Bin])
    }
}

impl Display for Target {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "{} ({} in {})", self.name, self.kind, self.package.name)
    }
}

/// All packages and targets below a project root.
#[derive(Debug, Clone, Default)]
pub struct Project {
    pub root_directory: PathBuf,
    pub packages: Vec<Arc<Package>>,
    pub targets: Vec<Target>,
}

impl Project {
    #[must_use]
    pub fn package(&self, name: &str) -> Option<&Arc<Package>> {
        self.packages.iter().find(|package| package.name == name)
    }

    /// Targets of the given package, in definition order.
    #[must_use]
    pub fn targets_of(&self, package: &Package) -> Vec<&Target> {
        self.targets
            .iter()
            .filter(|target| target.package.root_directory == package.root_directory)
            .collect()
    }

    /// Targets with the given name across all packages and kinds.
    #[must_use]
    pub fn targets_named(&self, name: &str) -> Vec<&Target> {
        self.targets
            .iter()
            .filter(|target| target.name == name)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn package() -> Arc<Package> {
        Arc::new(Package {
            name: "demo".to_string(),
            root_directory: PathBuf::from("/projects/demo/demo"),
            workspace: Arc::new(Workspace::new("/projects/demo/Cargo.toml")),
        })
    }

    fn target(kind: TargetKind, crate_types: Vec<CrateType>) -> Target {
        Target {
            name: "demo".to_string(),
            kind,
            crate_types,
            package: package(),
        }
    }

    #[test]
    fn test_manifest_directory() {
        let workspace = Workspace::new("/projects/demo/Cargo.toml");
        assert_eq!(workspace.manifest_directory(), Path::new("/projects/demo"));
    }

    #[test]
    fn test_kind_flags() {
        assert_eq!(TargetKind::Bin.flag(), Some("--bin"));
        assert_eq!(TargetKind::Lib.flag(), Some("--lib"));
        assert_eq!(TargetKind::Unknown.flag(), None);
        assert!(!TargetKind::Lib.takes_name());
        assert!(TargetKind::Bench.takes_name());
    }

    #[test]
    fn test_kind_from_str() {
        assert_eq!("example".parse::<TargetKind>().unwrap(), TargetKind::Example);
        assert!(matches!(
            "proc-macro".parse::<TargetKind>(),
            Err(Error::UnknownTargetKind(_))
        ));
    }

    #[test]
    fn test_executable_only() {
        assert!(target(TargetKind::Example, vec![CrateType::Bin]).is_executable_only());
        assert!(!target(TargetKind::Example, vec![CrateType::Cdylib]).is_executable_only());
        assert!(!target(TargetKind::Example, vec![CrateType::Bin, CrateType::Lib]).is_executable_only());
        assert!(!target(TargetKind::Example, vec![]).is_executable_only());
    }

    #[test]
    fn test_crate_type_deserialize() {
        let types: Vec<CrateType> = serde_yaml::from_str("[bin, proc-macro, wasm]").unwrap();
        assert_eq!(
            types,
            vec![
                CrateType::Bin,
                CrateType::ProcMacro,
                CrateType::Unknown("wasm".to_string())
            ]
        );
    }

    #[test]
    fn test_unknown_kind_deserialize() {
        let kind: TargetKind = serde_yaml::from_str("custom-build").unwrap();
        assert_eq!(kind, TargetKind::Unknown);
    }

    #[test]
    fn test_target_display() {
        let target = target(TargetKind::Bin, vec![CrateType::Bin]);
        assert_eq!(target.to_string(), "demo (bin in demo)");
    }
}
