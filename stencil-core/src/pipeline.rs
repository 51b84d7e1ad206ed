//! The scaffold orchestrator: a linear state machine with one rollback
//! branch.
//!
//! `ValidateNames -> ResolveBlueprint -> CheckTargetFree -> CreateTargetDir
//! -> ExpandArchive -> RunResolverHook -> RegisterInProject ->
//! InstallDependencies`. Failures between CreateTargetDir and
//! RunResolverHook delete the target directory (best-effort) and re-raise
//! the original error; later failures leave the directory in place.

use crate::error::{ScaffoldError, ScaffoldResult};
use crate::ports::{ArchivePort, InstallerPort, ProjectPort};
use crate::settings::CreateSettings;
use camino::Utf8Path;
use fs_err as fs;
use stencil_domain::{
    BlueprintRegistry, derive_tokens, lookup_resolver, naming, validate_package_name,
};
use stencil_domain::resolver::{ResolveContext, builtin_resolvers};
use stencil_types::{Blueprint, FileTokens, ScaffoldRequest};
use tracing::{debug, info, warn};

/// Outcome of a successful `run_create`.
#[derive(Debug, Clone)]
pub struct CreateOutcome {
    pub request: ScaffoldRequest,
    pub tokens: FileTokens,

    /// Workspace folder registered in the project config, relative to the
    /// project root.
    pub project_folder: String,

    /// Whether the dependency installer ran.
    pub installed: bool,
}

/// Sorted names of every blueprint discoverable in the project.
///
/// Read-only; never mutates the filesystem.
pub fn run_list(project: &dyn ProjectPort) -> anyhow::Result<Vec<String>> {
    let packages = project.installed_packages()?;
    Ok(BlueprintRegistry::discover(&packages).names())
}

/// Scaffold one package from a blueprint.
///
/// Every operation is attempted exactly once; there are no retries.
pub fn run_create(
    settings: &CreateSettings,
    blueprint_name: &str,
    package_name: &str,
    project: &dyn ProjectPort,
    archive: &dyn ArchivePort,
    installer: &dyn InstallerPort,
) -> ScaffoldResult<CreateOutcome> {
    // ValidateNames
    validate_package_name(package_name)?;

    // ResolveBlueprint
    let packages = project.installed_packages()?;
    let registry = BlueprintRegistry::discover(&packages);
    let blueprint = registry
        .get(blueprint_name)
        .ok_or_else(|| ScaffoldError::BlueprintNotFound {
            name: blueprint_name.to_string(),
            available: registry.names(),
        })?;

    // CheckTargetFree
    if project.has_package(package_name)? {
        return Err(ScaffoldError::PackageAlreadyExists {
            name: package_name.to_string(),
        });
    }
    let package_id = naming::package_id(package_name);
    let target_dir = project.packages_dir().join(&package_id);
    if target_dir.exists() {
        return Err(ScaffoldError::TargetDirectoryExists { path: target_dir });
    }

    let tokens = derive_tokens(package_name, &settings.packages_root);
    let request = ScaffoldRequest {
        blueprint_name: blueprint_name.to_string(),
        package_name: package_name.to_string(),
        target_dir,
    };
    info!(
        blueprint = blueprint_name,
        package = package_name,
        target = request.target_dir.as_str(),
        "scaffolding package"
    );

    // CreateTargetDir through RunResolverHook, with rollback on failure.
    if let Err(err) = materialize(&request, &tokens, blueprint, archive) {
        rollback(&request.target_dir);
        return Err(err);
    }

    // RegisterInProject — failures from here on are not rolled back.
    project
        .register_workspace(&tokens.project_folder)
        .map_err(ScaffoldError::ProjectRegistration)?;
    debug!(folder = tokens.project_folder.as_str(), "registered workspace");

    // InstallDependencies
    let installed = if settings.install {
        installer
            .install(project.root())
            .map_err(ScaffoldError::DependencyInstall)?;
        true
    } else {
        false
    };

    Ok(CreateOutcome {
        project_folder: tokens.project_folder.clone(),
        request,
        tokens,
        installed,
    })
}

/// CreateTargetDir, ExpandArchive, and RunResolverHook.
fn materialize(
    request: &ScaffoldRequest,
    tokens: &FileTokens,
    blueprint: &Blueprint,
    archive: &dyn ArchivePort,
) -> ScaffoldResult<()> {
    fs::create_dir_all(request.target_dir.as_std_path())?;

    archive
        .expand(&blueprint.archive_path, &request.target_dir)
        .map_err(|source| ScaffoldError::ArchiveExpansion {
            archive: blueprint.archive_path.clone(),
            source,
        })?;

    let resolvers = builtin_resolvers();
    let resolver = lookup_resolver(&resolvers, &blueprint.resolver).ok_or_else(|| {
        ScaffoldError::ResolverHook {
            identifier: blueprint.resolver.clone(),
            source: anyhow::anyhow!("unknown resolver identifier"),
        }
    })?;
    resolver
        .after_copy(&ResolveContext { request, tokens })
        .map_err(|source| ScaffoldError::ResolverHook {
            identifier: blueprint.resolver.clone(),
            source,
        })?;

    Ok(())
}

/// Best-effort removal of the target directory. Never masks the causal
/// error: a rollback failure is logged and dropped.
fn rollback(target_dir: &Utf8Path) {
    match fs::remove_dir_all(target_dir.as_std_path()) {
        Ok(()) => warn!(target = target_dir.as_str(), "rolled back target directory"),
        Err(err) => warn!(
            target = target_dir.as_str(),
            error = %err,
            "rollback failed, leaving partial directory behind"
        ),
    }
}
