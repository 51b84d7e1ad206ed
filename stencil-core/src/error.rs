//! Error taxonomy for the scaffold pipeline.
//!
//! Validation failures (bad name, unknown blueprint, occupied target) are
//! raised before any filesystem mutation and map to exit code 2. Everything
//! else is a runtime failure mapping to exit code 1.

use camino::Utf8PathBuf;
use stencil_domain::NameError;
use stencil_walk::WalkError;
use thiserror::Error;

/// The top-level error type for scaffold operations.
#[derive(Debug, Error)]
pub enum ScaffoldError {
    /// The requested package name violates the `(@scope/)?name` grammar.
    #[error(transparent)]
    InvalidName(#[from] NameError),

    /// No installed package declares a blueprint of this name.
    #[error("blueprint not found: {name:?} (available: {})", available.join(", "))]
    BlueprintNotFound { name: String, available: Vec<String> },

    /// A package of this name is already registered in the project.
    #[error("package already exists in project: {name}")]
    PackageAlreadyExists { name: String },

    /// The target filesystem path is already occupied.
    #[error("target directory already exists: {path}")]
    TargetDirectoryExists { path: Utf8PathBuf },

    /// Blueprint archive decompression failed. Triggers rollback.
    #[error("failed to expand blueprint archive {archive}")]
    ArchiveExpansion {
        archive: Utf8PathBuf,
        #[source]
        source: anyhow::Error,
    },

    /// The blueprint's post-copy resolver failed or is unknown. Triggers
    /// rollback.
    #[error("resolver hook {identifier:?} failed")]
    ResolverHook {
        identifier: String,
        #[source]
        source: anyhow::Error,
    },

    /// Registering the new package in the project config failed. The
    /// package directory stays on disk (no rollback at this stage).
    #[error("failed to register package in project config")]
    ProjectRegistration(#[source] anyhow::Error),

    /// The dependency install command failed. No rollback.
    #[error("dependency installation failed")]
    DependencyInstall(#[source] anyhow::Error),

    /// Traversal/copy/rewrite failure from the filesystem engine.
    #[error(transparent)]
    Walk(#[from] WalkError),

    /// Direct filesystem failure (e.g. creating the target directory).
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Collaborator failure outside the named taxonomy.
    #[error("{0:#}")]
    Internal(#[from] anyhow::Error),
}

impl ScaffoldError {
    /// True for failures raised before any filesystem mutation.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            ScaffoldError::InvalidName(_)
                | ScaffoldError::BlueprintNotFound { .. }
                | ScaffoldError::PackageAlreadyExists { .. }
                | ScaffoldError::TargetDirectoryExists { .. }
        )
    }

    /// Recommended process exit code: 2 for validation, 1 otherwise.
    pub fn exit_code(&self) -> u8 {
        if self.is_validation() { 2 } else { 1 }
    }
}

/// Result type alias using ScaffoldError.
pub type ScaffoldResult<T> = Result<T, ScaffoldError>;
