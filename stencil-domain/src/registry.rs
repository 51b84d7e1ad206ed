//! Blueprint discovery over installed package metadata.

use std::collections::BTreeMap;
use stencil_types::{Blueprint, PackageInfo};
use tracing::{debug, warn};

/// Name-keyed lookup of every blueprint declared by the installed packages.
///
/// Built once per CLI invocation and immutable afterwards.
#[derive(Debug, Clone, Default)]
pub struct BlueprintRegistry {
    blueprints: BTreeMap<String, Blueprint>,
}

impl BlueprintRegistry {
    /// Scan package metadata for `packageBlueprints` declarations.
    ///
    /// Packages without a declaration are skipped. Relative archive paths
    /// resolve against the owning package's install location. When two
    /// packages declare the same blueprint name the later declaration wins;
    /// the collision is logged but not an error.
    pub fn discover(packages: &[PackageInfo]) -> Self {
        let mut blueprints = BTreeMap::new();

        for package in packages {
            let Some(manifest) = &package.blueprints else {
                continue;
            };
            for (name, relative_archive) in &manifest.packages {
                let blueprint = Blueprint {
                    owner: package.clone(),
                    resolver: manifest.resolve_class.clone(),
                    archive_path: package.root.join(relative_archive),
                };
                debug!(
                    blueprint = name.as_str(),
                    owner = package.name.as_str(),
                    archive = blueprint.archive_path.as_str(),
                    "discovered blueprint"
                );
                if let Some(previous) = blueprints.insert(name.clone(), blueprint) {
                    warn!(
                        blueprint = name.as_str(),
                        shadowed_owner = previous.owner.name.as_str(),
                        owner = package.name.as_str(),
                        "duplicate blueprint name, last declaration wins"
                    );
                }
            }
        }

        Self { blueprints }
    }

    pub fn get(&self, name: &str) -> Option<&Blueprint> {
        self.blueprints.get(name)
    }

    /// Sorted blueprint names.
    pub fn names(&self) -> Vec<String> {
        self.blueprints.keys().cloned().collect()
    }

    pub fn is_empty(&self) -> bool {
        self.blueprints.is_empty()
    }

    pub fn len(&self) -> usize {
        self.blueprints.len()
    }
}
