//! Shared DTOs (schemas-as-code) for the stencil workspace.
//!
//! # Design constraints
//! - The manifest types in [`blueprint`] mirror on-disk `package.json` keys.
//! - Be conservative with breaking changes.
//! - Prefer adding optional fields over changing semantics.

pub mod blueprint;
pub mod request;
pub mod search;

pub use blueprint::{Blueprint, BlueprintManifest, PackageInfo};
pub use request::{FileTokens, ScaffoldRequest};
pub use search::{SearchDirection, SearchOptions};

/// Well-known manifest keys and file names.
pub mod manifest {
    /// Per-package metadata file scanned during blueprint discovery.
    pub const PACKAGE_MANIFEST: &str = "package.json";
}
