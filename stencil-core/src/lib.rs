//! Embeddable core library for stencil.
//!
//! Provides a clap-free, I/O-abstracted scaffold pipeline suitable for
//! linking into other host processes.
//!
//! # Port traits
//!
//! All external collaborators sit behind port traits in [`ports`]:
//! - [`ProjectPort`](ports::ProjectPort) — project config, package metadata
//! - [`ArchivePort`](ports::ArchivePort) — blueprint archive expansion
//! - [`InstallerPort`](ports::InstallerPort) — dependency installation
//!
//! The [`adapters`] module provides default filesystem/process-backed
//! implementations plus an in-memory project for embedding and testing.
//!
//! # Entry points
//!
//! - [`run_create`](pipeline::run_create) — scaffold one package
//! - [`run_list`](pipeline::run_list) — list discoverable blueprints

pub mod adapters;
pub mod error;
pub mod pipeline;
pub mod ports;
pub mod settings;

pub use error::{ScaffoldError, ScaffoldResult};
pub use pipeline::{CreateOutcome, run_create, run_list};
pub use settings::CreateSettings;

// Re-export the registry so callers don't need stencil-domain directly.
pub use stencil_domain::BlueprintRegistry;
