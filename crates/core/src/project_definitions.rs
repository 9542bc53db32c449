//! On-disk project definitions and their conversion into a linked [`Project`].

use std::path::PathBuf;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::config::expand_path;
use crate::workspace::{CrateType, Package, Project, Target, TargetKind, Workspace};

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct TargetDefinition {
    pub name: String,
    pub kind: TargetKind,
    /// Defaults to what cargo produces for the kind when omitted.
    pub crate_types: Option<Vec<CrateType>>,
}

impl TargetDefinition {
    #[must_use]
    pub fn resolved_crate_types(&self) -> Vec<CrateType> {
        if let Some(crate_types) = &self.crate_types {
            return crate_types.clone();
        }

        match self.kind {
            TargetKind::Lib => vec![CrateType::Lib],
            TargetKind::Unknown => Vec::new(),
            TargetKind::Bin | TargetKind::Test | TargetKind::Example | TargetKind::Bench => {
                vec![CrateType::Bin]
            }
        }
    }
}

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct PackageDefinition {
    pub name: String,
    pub root_directory: String,
    #[serde(default)]
    pub targets: Vec<TargetDefinition>,
}

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct WorkspaceDefinition {
    pub manifest_path: String,
    #[serde(default)]
    pub packages: Vec<PackageDefinition>,
}

/// An already resolved project as stored on disk.
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct ProjectDefinition {
    /// Defaults to the manifest directory of the first workspace.
    pub root_directory: Option<String>,
    pub workspaces: Vec<WorkspaceDefinition>,
}

impl ProjectDefinition {
    pub fn packages(&self) -> impl Iterator<Item = &PackageDefinition> {
        self.workspaces
            .iter()
            .flat_map(|workspace| workspace.packages.iter())
    }

    /// Links packages and targets together, expanding `~` in all paths.
    #[must_use]
    pub fn to_project(&self) -> Project {
        let mut packages = Vec::new();
        let mut targets = Vec::new();

        for workspace_definition in &self.workspaces {
            let workspace = Arc::new(Workspace::new(expand_path(
                &workspace_definition.manifest_path,
            )));

            for package_definition in &workspace_definition.packages {
                let package = Arc::new(Package {
                    name: package_definition.name.clone(),
                    root_directory: expand_path(&package_definition.root_directory),
                    workspace: Arc::clone(&workspace),
                });

                targets.extend(package_definition.targets.iter().map(|target| Target {
                    name: target.name.clone(),
                    kind: target.kind,
                    crate_types: target.resolved_crate_types(),
                    package: Arc::clone(&package),
                }));
                packages.push(package);
            }
        }

        let root_directory = match &self.root_directory {
            Some(root_directory) => expand_path(root_directory),
            None => self
                .workspaces
                .first()
                .map(|workspace| {
                    Workspace::new(expand_path(&workspace.manifest_path))
                        .manifest_directory()
                        .to_path_buf()
                })
                .unwrap_or_else(PathBuf::new),
        };

        Project {
            root_directory,
            packages,
            targets,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;

    fn definition() -> ProjectDefinition {
        serde_yaml::from_str(
            r#"
workspaces:
  - manifest_path: /projects/demo/Cargo.toml
    packages:
      - name: app
        root_directory: /projects/demo/app
        targets:
          - name: app
            kind: bin
          - name: app
            kind: lib
          - name: plugin
            kind: example
            crate_types: [cdylib]
      - name: util
        root_directory: /projects/demo/util
"#,
        )
        .unwrap()
    }

    #[test]
    fn test_to_project_links_targets() {
        let project = definition().to_project();

        assert_eq!(project.root_directory, Path::new("/projects/demo"));
        assert_eq!(project.packages.len(), 2);
        assert_eq!(project.targets.len(), 3);

        let app = project.package("app").unwrap();
        assert!(project
            .targets_of(app)
            .iter()
            .all(|target| Arc::ptr_eq(&target.package, app)));
        assert!(project.targets_of(project.package("util").unwrap()).is_empty());
        assert_eq!(
            app.workspace.manifest_directory(),
            Path::new("/projects/demo")
        );
    }

    #[test]
    fn test_default_crate_types() {
        let project = definition().to_project();
        let kinds: Vec<(TargetKind, Vec<CrateType>)> = project
            .targets
            .iter()
            .map(|target| (target.kind, target.crate_types.clone()))
            .collect();

        assert_eq!(
            kinds,
            vec![
                (TargetKind::Bin, vec![CrateType::Bin]),
                (TargetKind::Lib, vec![CrateType::Lib]),
                (TargetKind::Example, vec![CrateType::Cdylib]),
            ]
        );
    }

    #[test]
    fn test_explicit_root_directory() {
        let mut definition = definition();
        definition.root_directory = Some("/projects".to_string());
        assert_eq!(definition.to_project().root_directory, Path::new("/projects"));
    }

    #[test]
    fn test_packages_across_workspaces() {
        let definition: ProjectDefinition = serde_yaml::from_str(
            r#"
root_directory: /projects
workspaces:
  - manifest_path: /projects/one/Cargo.toml
    packages:
      - name: one
        root_directory: /projects/one
  - manifest_path: /projects/two/Cargo.toml
    packages:
      - name: two
        root_directory: /projects/two
"#,
        )
        .unwrap();

        let names: Vec<&str> = definition.packages().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["one", "two"]);

        let project = definition.to_project();
        assert_eq!(
            project.package("two").unwrap().workspace.manifest_directory(),
            Path::new("/projects/two")
        );
    }
}
