//! Deny-list alterer.
//!
//! Removes collected links whose id is on a configured deny list. This is
//! the declarative version of the common alter-hook pattern of filtering an
//! unwanted contribution out by id. Links without an id are never affected.

use linkdeck_core::link::Link;
use linkdeck_core::source::LinkAlterer;
use linkdeck_core::{Member, SourceError, Viewer};
use std::collections::HashSet;
use tracing::debug;

/// A `LinkAlterer` dropping links by id.
pub struct DenyListAlterer {
    deny: HashSet<String>,
}

impl DenyListAlterer {
    pub fn new<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            deny: ids.into_iter().map(Into::into).collect(),
        }
    }

    pub fn denies(&self, id: &str) -> bool {
        self.deny.contains(id)
    }
}

impl LinkAlterer for DenyListAlterer {
    fn name(&self) -> &str {
        "deny_list"
    }

    fn alter(
        &self,
        links: &mut Vec<Link>,
        _member: &Member,
        _viewer: &Viewer,
    ) -> Result<(), SourceError> {
        let before = links.len();
        links.retain(|link| {
            link.id
                .as_deref()
                .is_none_or(|id| !self.deny.contains(id))
        });
        if links.len() != before {
            debug!(removed = before - links.len(), "Deny list removed links");
        }
        Ok(())
    }
}
