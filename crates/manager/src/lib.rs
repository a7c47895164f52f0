//! Link manager — the collection → normalization → dedup → alter → group
//! pipeline.
//!
//! The manager owns the ordered registries of sources and alterers plus the
//! route resolver, and runs the whole pipeline synchronously per request.
//! It holds no per-request state: every invocation operates on locally
//! constructed data only.

mod group;
mod normalize;

pub use group::group;

use linkdeck_core::link::{DEFAULT_CATEGORY, Link, LinkGroup};
use linkdeck_core::routing::RouteResolver;
use linkdeck_core::source::{LinkAlterer, LinkSource};
use linkdeck_core::{Member, SourceError, Viewer};
use std::collections::HashSet;
use tracing::{debug, info};

/// Collects, filters, deduplicates, and groups member profile links.
pub struct LinkManager {
    sources: Vec<Box<dyn LinkSource>>,
    alterers: Vec<Box<dyn LinkAlterer>>,
    router: Box<dyn RouteResolver>,
    fallback_category: String,
}

impl LinkManager {
    /// Create a manager with no registered sources.
    pub fn new(router: Box<dyn RouteResolver>) -> Self {
        Self {
            sources: Vec::new(),
            alterers: Vec::new(),
            router,
            fallback_category: DEFAULT_CATEGORY.to_string(),
        }
    }

    /// Override the category label applied to uncategorized links.
    pub fn with_fallback_category(mut self, label: impl Into<String>) -> Self {
        self.fallback_category = label.into();
        self
    }

    /// Register a link source. Sources run in registration order.
    pub fn register_source(&mut self, source: Box<dyn LinkSource>) {
        info!(source = source.name(), "Registered link source");
        self.sources.push(source);
    }

    /// Register an alterer. Alterers run in registration order, after
    /// dedup and before grouping.
    pub fn register_alterer(&mut self, alterer: Box<dyn LinkAlterer>) {
        info!(alterer = alterer.name(), "Registered link alterer");
        self.alterers.push(alterer);
    }

    /// Names of registered sources, in invocation order.
    pub fn source_names(&self) -> Vec<&str> {
        self.sources.iter().map(|s| s.name()).collect()
    }

    /// Names of registered alterers, in invocation order.
    pub fn alterer_names(&self) -> Vec<&str> {
        self.alterers.iter().map(|a| a.name()).collect()
    }

    /// Collect and normalize links from every source.
    ///
    /// Definitions failing normalization are dropped silently (debug log
    /// only). Duplicate non-empty ids are dropped first-seen-wins across
    /// all sources. Source and alterer failures propagate.
    pub fn collect(&self, member: &Member, viewer: &Viewer) -> Result<Vec<Link>, SourceError> {
        let mut links: Vec<Link> = Vec::new();
        let mut seen: HashSet<String> = HashSet::new();

        for source in &self.sources {
            let definitions = source.links(member, viewer)?;
            debug!(
                source = source.name(),
                count = definitions.len(),
                "Collected link definitions"
            );

            for definition in &definitions {
                let link = match normalize::normalize(definition, viewer, self.router.as_ref()) {
                    Ok(link) => link,
                    Err(rejection) => {
                        debug!(
                            source = source.name(),
                            id = definition.id.as_deref().unwrap_or(""),
                            reason = %rejection,
                            "Dropped link definition"
                        );
                        continue;
                    }
                };

                if let Some(id) = link.id.as_deref().filter(|id| !id.is_empty()) {
                    if !seen.insert(id.to_string()) {
                        debug!(source = source.name(), id, "Dropped duplicate link id");
                        continue;
                    }
                }
                links.push(link);
            }
        }

        for alterer in &self.alterers {
            let before = links.len();
            alterer.alter(&mut links, member, viewer)?;
            debug!(
                alterer = alterer.name(),
                before,
                after = links.len(),
                "Applied link alterer"
            );
        }

        Ok(links)
    }

    /// Full pipeline: collect, then group and order for rendering.
    pub fn grouped_links(
        &self,
        member: &Member,
        viewer: &Viewer,
    ) -> Result<Vec<LinkGroup>, SourceError> {
        let links = self.collect(member, viewer)?;
        Ok(group::group(links, &self.fallback_category))
    }
}
