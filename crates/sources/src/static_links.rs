//! Declarative link source.
//!
//! Serves link definitions supplied up front — typically the `[[links]]`
//! tables of `linkdeck.toml`. The definitions pass through the same
//! normalization and access filtering as any other contribution, so config
//! authors can use `permissions`, `route_name`, categories, and weights
//! exactly like a programmatic source would.

use linkdeck_core::link::LinkDefinition;
use linkdeck_core::source::LinkSource;
use linkdeck_core::{Member, SourceError, Viewer};

/// A `LinkSource` returning a fixed list of definitions.
pub struct StaticLinkSource {
    name: String,
    definitions: Vec<LinkDefinition>,
}

impl StaticLinkSource {
    /// Create the standard config-backed source.
    pub fn new(definitions: Vec<LinkDefinition>) -> Self {
        Self::named("static_links", definitions)
    }

    /// Create a named instance, for registering several static sets.
    pub fn named(name: impl Into<String>, definitions: Vec<LinkDefinition>) -> Self {
        Self {
            name: name.into(),
            definitions,
        }
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }
}

impl LinkSource for StaticLinkSource {
    fn name(&self) -> &str {
        &self.name
    }

    fn links(&self, _member: &Member, _viewer: &Viewer) -> Result<Vec<LinkDefinition>, SourceError> {
        Ok(self.definitions.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn returns_configured_definitions() {
        let source = StaticLinkSource::new(vec![
            LinkDefinition::titled("Wiki").uri("https://wiki.example.com/"),
            LinkDefinition::titled("Handbook").uri("/handbook"),
        ]);

        let defs = source
            .links(&Member::new(1, "Ada"), &Viewer::new(2))
            .unwrap();
        assert_eq!(defs.len(), 2);
        assert_eq!(source.name(), "static_links");
    }

    #[test]
    fn named_instances_keep_their_name() {
        let source = StaticLinkSource::named("intranet", vec![]);
        assert_eq!(source.name(), "intranet");
        assert!(source.is_empty());
    }
}
