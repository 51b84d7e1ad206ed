use camino::Utf8PathBuf;

/// One scaffold request, created from user input and consumed once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldRequest {
    pub blueprint_name: String,

    /// Full package name, e.g. `my-lib` or `@scope/my-lib`.
    pub package_name: String,

    /// Absolute directory the blueprint is materialized into.
    pub target_dir: Utf8PathBuf,
}

/// The fixed placeholder-token map substituted into blueprint files.
///
/// Files reference tokens as literal `{{KEY}}` substrings. The map is
/// derived once per request and never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileTokens {
    /// Normalized id, e.g. `scope-my-lib`; also names the new directory.
    pub package_id_name: String,

    /// Full package name as requested, e.g. `@scope/my-lib`.
    pub package_name: String,

    /// Package directory relative to the project root, e.g. `packages/my-lib`.
    pub project_folder: String,

    /// Relative path from the package directory back to the project root.
    pub root_project_folder: String,
}

impl FileTokens {
    pub const PACKAGE_ID_NAME: &'static str = "{{PACKAGE_ID_NAME}}";
    pub const PACKAGE_NAME: &'static str = "{{PACKAGE_NAME}}";
    pub const PROJECT_FOLDER: &'static str = "{{PROJECT_FOLDER}}";
    pub const ROOT_PROJECT_FOLDER: &'static str = "{{ROOT_PROJECT_FOLDER}}";

    /// Marker/replacement pairs in a fixed order.
    ///
    /// The markers are disjoint literal strings, so substitution order does
    /// not affect the result.
    pub fn pairs(&self) -> [(&'static str, &str); 4] {
        [
            (Self::PACKAGE_ID_NAME, self.package_id_name.as_str()),
            (Self::PACKAGE_NAME, self.package_name.as_str()),
            (Self::PROJECT_FOLDER, self.project_folder.as_str()),
            (Self::ROOT_PROJECT_FOLDER, self.root_project_folder.as_str()),
        ]
    }
}
