//! Package-name grammar and placeholder-token derivation.

use regex::Regex;
use std::sync::LazyLock;
use stencil_types::FileTokens;
use thiserror::Error;

/// `(@scope/)?name`: scope and name each start with `[a-z0-9~-]` and
/// continue with `[a-z0-9._~-]`; the scope may alternatively start with
/// (or contain) `*`.
static PACKAGE_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:@[a-z0-9~*-][a-z0-9._~*-]*/)?[a-z0-9~-][a-z0-9._~-]*$")
        .unwrap()
});

/// Blueprint names are bare lowercase identifiers.
static BLUEPRINT_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z0-9-]+$").unwrap());

#[derive(Debug, Error, PartialEq, Eq)]
pub enum NameError {
    #[error("invalid package name: {name:?} (expected (@scope/)?name in lowercase)")]
    InvalidName { name: String },
}

/// Validate a package name against the `(@scope/)?name` grammar.
pub fn validate_package_name(name: &str) -> Result<(), NameError> {
    if PACKAGE_NAME.is_match(name) {
        Ok(())
    } else {
        Err(NameError::InvalidName {
            name: name.to_string(),
        })
    }
}

/// True when `name` is a plausible blueprint name.
pub fn is_blueprint_name(name: &str) -> bool {
    BLUEPRINT_NAME.is_match(name)
}

/// Filesystem-safe id for a package name: the leading `@` is stripped and
/// the scope separator becomes `-`, e.g. `@scope/my-lib` -> `scope-my-lib`.
pub fn package_id(name: &str) -> String {
    name.trim_start_matches('@').replace('/', "-")
}

/// Derive the per-request placeholder tokens.
///
/// `packages_root` is the folder the project keeps packages under,
/// relative to the project root (typically `packages`).
pub fn derive_tokens(package_name: &str, packages_root: &str) -> FileTokens {
    let id = package_id(package_name);
    let project_folder = format!("{packages_root}/{id}");
    let hops = project_folder.split('/').count();
    let root_project_folder = vec![".."; hops].join("/");

    FileTokens {
        package_id_name: id,
        package_name: package_name.to_string(),
        project_folder,
        root_project_folder,
    }
}
