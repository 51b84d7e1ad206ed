//! Default filesystem/process-backed port implementations.

use crate::ports::{ArchivePort, InstallerPort, ProjectPort};
use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use fs_err as fs;
use serde::Deserialize;
use std::cell::RefCell;
use std::collections::BTreeSet;
use std::io::BufReader;
use std::process::Command;
use stencil_types::{BlueprintManifest, PackageInfo, SearchOptions, manifest::PACKAGE_MANIFEST};
use stencil_walk::search;
use tracing::debug;

/// Root project manifest: the `package.json` carrying a `workspaces` array.
#[derive(Debug, Deserialize)]
struct RootManifest {
    #[serde(default)]
    workspaces: Option<Vec<String>>,
}

/// Per-package manifest, as found inside each workspace folder.
#[derive(Debug, Deserialize)]
struct MemberManifest {
    name: String,

    #[serde(rename = "packageBlueprints", default)]
    package_blueprints: Option<BlueprintManifest>,
}

/// Project configuration backed by `package.json` manifests on disk.
#[derive(Debug, Clone)]
pub struct FsProject {
    root: Utf8PathBuf,
    packages_dir: Utf8PathBuf,
}

impl FsProject {
    /// Open a project whose root is already known.
    pub fn open(root: Utf8PathBuf, packages_root: &str) -> Self {
        let packages_dir = root.join(packages_root);
        Self { root, packages_dir }
    }

    /// Locate the project root by walking up from `start` to the nearest
    /// `package.json` that declares a `workspaces` array.
    pub fn discover(start: &Utf8Path, packages_root: &str) -> anyhow::Result<Self> {
        Ok(Self::open(find_project_root(start)?, packages_root))
    }

    fn root_manifest_path(&self) -> Utf8PathBuf {
        self.root.join(PACKAGE_MANIFEST)
    }

    fn workspaces(&self) -> anyhow::Result<Vec<String>> {
        let path = self.root_manifest_path();
        let contents =
            fs::read_to_string(path.as_std_path()).with_context(|| format!("read {path}"))?;
        let manifest: RootManifest =
            serde_json::from_str(&contents).with_context(|| format!("parse {path}"))?;
        Ok(manifest.workspaces.unwrap_or_default())
    }
}

impl ProjectPort for FsProject {
    fn root(&self) -> &Utf8Path {
        &self.root
    }

    fn packages_dir(&self) -> &Utf8Path {
        &self.packages_dir
    }

    fn installed_packages(&self) -> anyhow::Result<Vec<PackageInfo>> {
        let mut packages = Vec::new();
        for folder in self.workspaces()? {
            let package_root = self.root.join(&folder);
            let manifest_path = package_root.join(PACKAGE_MANIFEST);
            if !manifest_path.exists() {
                debug!(path = manifest_path.as_str(), "workspace folder has no manifest");
                continue;
            }
            let contents = fs::read_to_string(manifest_path.as_std_path())
                .with_context(|| format!("read {manifest_path}"))?;
            let manifest: MemberManifest =
                serde_json::from_str(&contents).with_context(|| format!("parse {manifest_path}"))?;
            packages.push(PackageInfo {
                name: manifest.name,
                root: package_root,
                blueprints: manifest.package_blueprints,
            });
        }
        Ok(packages)
    }

    fn has_package(&self, name: &str) -> anyhow::Result<bool> {
        Ok(self.installed_packages()?.iter().any(|p| p.name == name))
    }

    fn register_workspace(&self, project_folder: &str) -> anyhow::Result<()> {
        let path = self.root_manifest_path();
        let contents =
            fs::read_to_string(path.as_std_path()).with_context(|| format!("read {path}"))?;
        let mut manifest: serde_json::Value =
            serde_json::from_str(&contents).with_context(|| format!("parse {path}"))?;

        let workspaces = manifest
            .as_object_mut()
            .context("root manifest is not a JSON object")?
            .entry("workspaces")
            .or_insert_with(|| serde_json::Value::Array(vec![]));
        let entries = workspaces
            .as_array_mut()
            .context("workspaces is not an array")?;

        let folder = serde_json::Value::String(project_folder.to_string());
        if !entries.contains(&folder) {
            entries.push(folder);
        }

        let mut serialized = serde_json::to_string_pretty(&manifest).context("serialize manifest")?;
        serialized.push('\n');
        fs::write(path.as_std_path(), serialized).with_context(|| format!("write {path}"))?;
        Ok(())
    }
}

/// Walk up from `start` to the nearest `package.json` declaring a
/// `workspaces` array and return its directory.
pub fn find_project_root(start: &Utf8Path) -> anyhow::Result<Utf8PathBuf> {
    let options = SearchOptions {
        include_file_names: BTreeSet::from([PACKAGE_MANIFEST.to_string()]),
        ..SearchOptions::default()
    }
    .reversed();

    // Reverse search yields manifests nearest-first.
    let candidates = search(start, &options).with_context(|| format!("walk up from {start}"))?;
    for manifest_path in candidates {
        let contents = fs::read_to_string(manifest_path.as_std_path())
            .with_context(|| format!("read {manifest_path}"))?;
        let manifest: RootManifest = match serde_json::from_str(&contents) {
            Ok(m) => m,
            Err(err) => {
                debug!(path = manifest_path.as_str(), %err, "skipping unparseable manifest");
                continue;
            }
        };
        if manifest.workspaces.is_some() {
            let root = manifest_path
                .parent()
                .context("manifest has no parent directory")?
                .to_path_buf();
            debug!(root = root.as_str(), "found project root");
            return Ok(root);
        }
    }
    anyhow::bail!("no workspace manifest found above {start}")
}

/// Blueprint archives as gzip-compressed tarballs.
#[derive(Debug, Clone, Default)]
pub struct TarGzArchive;

impl ArchivePort for TarGzArchive {
    fn expand(&self, archive: &Utf8Path, dest: &Utf8Path) -> anyhow::Result<()> {
        let file =
            fs::File::open(archive.as_std_path()).with_context(|| format!("open {archive}"))?;
        let decoder = flate2::read::GzDecoder::new(BufReader::new(file));
        let mut tarball = tar::Archive::new(decoder);
        tarball
            .unpack(dest.as_std_path())
            .with_context(|| format!("unpack {archive} into {dest}"))?;
        Ok(())
    }
}

/// Runs the configured install command in the project root.
#[derive(Debug, Clone)]
pub struct ShellInstaller {
    command: Vec<String>,
}

impl ShellInstaller {
    pub fn new(command: Vec<String>) -> Self {
        Self { command }
    }
}

impl Default for ShellInstaller {
    fn default() -> Self {
        Self::new(vec!["npm".to_string(), "install".to_string()])
    }
}

impl InstallerPort for ShellInstaller {
    fn install(&self, project_root: &Utf8Path) -> anyhow::Result<()> {
        let (program, args) = self
            .command
            .split_first()
            .context("install command is empty")?;
        debug!(command = ?self.command, root = project_root.as_str(), "running installer");
        let status = Command::new(program)
            .args(args)
            .current_dir(project_root.as_std_path())
            .status()
            .with_context(|| format!("spawn {program}"))?;
        anyhow::ensure!(
            status.success(),
            "install command {:?} exited with {status}",
            self.command
        );
        Ok(())
    }
}

/// In-memory project for embedding and testing.
///
/// Holds a fixed package list and records workspace registrations instead
/// of touching a manifest on disk.
#[derive(Debug)]
pub struct InMemoryProject {
    root: Utf8PathBuf,
    packages_dir: Utf8PathBuf,
    packages: Vec<PackageInfo>,
    registered: RefCell<Vec<String>>,
}

impl InMemoryProject {
    pub fn new(root: Utf8PathBuf, packages_dir: Utf8PathBuf, packages: Vec<PackageInfo>) -> Self {
        Self {
            root,
            packages_dir,
            packages,
            registered: RefCell::new(Vec::new()),
        }
    }

    /// Workspace folders registered so far, in call order.
    pub fn registered(&self) -> Vec<String> {
        self.registered.borrow().clone()
    }
}

impl ProjectPort for InMemoryProject {
    fn root(&self) -> &Utf8Path {
        &self.root
    }

    fn packages_dir(&self) -> &Utf8Path {
        &self.packages_dir
    }

    fn installed_packages(&self) -> anyhow::Result<Vec<PackageInfo>> {
        Ok(self.packages.clone())
    }

    fn has_package(&self, name: &str) -> anyhow::Result<bool> {
        Ok(self.packages.iter().any(|p| p.name == name))
    }

    fn register_workspace(&self, project_folder: &str) -> anyhow::Result<()> {
        self.registered.borrow_mut().push(project_folder.to_string());
        Ok(())
    }
}
