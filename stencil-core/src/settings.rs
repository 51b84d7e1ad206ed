//! Clap-free settings for the scaffold pipeline.

/// Settings for one `create` run.
#[derive(Debug, Clone)]
pub struct CreateSettings {
    /// Folder new packages live under, relative to the project root.
    pub packages_root: String,

    /// Run the dependency installer after registration.
    pub install: bool,
}

impl Default for CreateSettings {
    fn default() -> Self {
        Self {
            packages_root: "packages".to_string(),
            install: true,
        }
    }
}
