use camino::Utf8PathBuf;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Blueprint declaration carried in a package's `package.json` under the
/// `packageBlueprints` key. Field names follow the on-disk manifest keys.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlueprintManifest {
    /// Identifier of the resolver hook run after the blueprint is copied.
    #[serde(rename = "resolveClass")]
    pub resolve_class: String,

    /// Blueprint name to archive path, relative to the owning package root.
    #[serde(default)]
    pub packages: BTreeMap<String, String>,
}

/// Metadata for one installed package, as read from its manifest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageInfo {
    pub name: String,

    /// Absolute install location of the package.
    pub root: Utf8PathBuf,

    /// Present only for packages that ship blueprints.
    #[serde(
        rename = "packageBlueprints",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub blueprints: Option<BlueprintManifest>,
}

/// One installable blueprint, resolved to its owning package.
///
/// Immutable once constructed; owned by the registry for the lifetime of a
/// single CLI invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Blueprint {
    /// Metadata of the package that declared this blueprint.
    pub owner: PackageInfo,

    /// Resolver hook identifier (`resolveClass` in the manifest).
    pub resolver: String,

    /// Absolute path to the compressed blueprint file tree.
    pub archive_path: Utf8PathBuf,
}
