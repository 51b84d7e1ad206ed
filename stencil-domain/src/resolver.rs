//! Post-copy resolver hooks, selected per blueprint by identifier.
//!
//! A blueprint's `resolveClass` names the hook that runs after its files
//! are expanded into the target directory. The catalog is closed: hooks
//! are compiled in and looked up by identifier, never loaded dynamically.

use anyhow::Context;
use stencil_types::{FileTokens, ScaffoldRequest, SearchOptions};
use stencil_walk::{rewrite, search};

/// Everything a resolver may inspect after the copy step.
pub struct ResolveContext<'a> {
    pub request: &'a ScaffoldRequest,
    pub tokens: &'a FileTokens,
}

pub trait BlueprintResolver {
    /// Identifier matched against the blueprint's `resolveClass`.
    fn identifier(&self) -> &'static str;

    /// Run the blueprint's post-copy behavior inside the target directory.
    fn after_copy(&self, ctx: &ResolveContext<'_>) -> anyhow::Result<()>;
}

/// Rewrites `{{TOKEN}}` placeholders in every file of the new package.
pub struct TemplateTokenResolver;

impl BlueprintResolver for TemplateTokenResolver {
    fn identifier(&self) -> &'static str {
        "TemplateTokenResolver"
    }

    fn after_copy(&self, ctx: &ResolveContext<'_>) -> anyhow::Result<()> {
        let files = search(&ctx.request.target_dir, &SearchOptions::all())
            .with_context(|| format!("enumerate files under {}", ctx.request.target_dir))?;
        rewrite(&files, ctx.tokens)
            .with_context(|| format!("rewrite placeholders under {}", ctx.request.target_dir))?;
        Ok(())
    }
}

/// Leaves the expanded blueprint exactly as copied.
pub struct PassthroughResolver;

impl BlueprintResolver for PassthroughResolver {
    fn identifier(&self) -> &'static str {
        "PassthroughResolver"
    }

    fn after_copy(&self, _ctx: &ResolveContext<'_>) -> anyhow::Result<()> {
        Ok(())
    }
}

pub fn builtin_resolvers() -> Vec<Box<dyn BlueprintResolver>> {
    vec![Box::new(TemplateTokenResolver), Box::new(PassthroughResolver)]
}

/// Find a resolver by its `resolveClass` identifier.
pub fn lookup_resolver<'a>(
    resolvers: &'a [Box<dyn BlueprintResolver>],
    identifier: &str,
) -> Option<&'a dyn BlueprintResolver> {
    resolvers
        .iter()
        .find(|r| r.identifier() == identifier)
        .map(|r| r.as_ref())
}
