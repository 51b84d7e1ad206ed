//! Port traits abstracting all external collaborators away from the
//! pipeline.

use camino::Utf8Path;
use stencil_types::PackageInfo;

/// Project configuration and installed-package metadata.
pub trait ProjectPort {
    /// Absolute project root (the directory holding the root manifest).
    fn root(&self) -> &Utf8Path;

    /// Absolute directory new packages are created under.
    fn packages_dir(&self) -> &Utf8Path;

    /// Metadata for every package currently wired into the project.
    fn installed_packages(&self) -> anyhow::Result<Vec<PackageInfo>>;

    /// True when a package of this name is already known to the project.
    fn has_package(&self, name: &str) -> anyhow::Result<bool>;

    /// Persist a new workspace folder (relative to the project root) in
    /// the project configuration.
    fn register_workspace(&self, project_folder: &str) -> anyhow::Result<()>;
}

/// Blueprint archive decompression.
pub trait ArchivePort {
    /// Expand `archive` into the existing directory `dest`.
    fn expand(&self, archive: &Utf8Path, dest: &Utf8Path) -> anyhow::Result<()>;
}

/// Package-manager invocation.
pub trait InstallerPort {
    /// Install dependencies across the project, blocking to completion.
    fn install(&self, project_root: &Utf8Path) -> anyhow::Result<()>;
}
