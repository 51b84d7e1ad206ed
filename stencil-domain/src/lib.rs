//! Decision layer for stencil: package-name grammar, placeholder token
//! derivation, blueprint discovery, and the resolver-hook catalog.
//!
//! Nothing in this crate talks to the project configuration or spawns
//! processes; those concerns live behind the ports in `stencil-core`.

pub mod naming;
pub mod registry;
pub mod resolver;

pub use naming::{NameError, derive_tokens, is_blueprint_name, package_id, validate_package_name};
pub use registry::BlueprintRegistry;
pub use resolver::{BlueprintResolver, ResolveContext, builtin_resolvers, lookup_resolver};
