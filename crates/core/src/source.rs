//! Contribution traits — the extension points of the pipeline.
//!
//! A `LinkSource` contributes raw link definitions for a member profile; a
//! `LinkAlterer` gets one shot at the collected, deduplicated list before it
//! is grouped. Both are registered on the manager and invoked in
//! registration order. Failures propagate: a broken contributor must be
//! visible to the surrounding system, not papered over.

use crate::account::{Member, Viewer};
use crate::error::SourceError;
use crate::link::{Link, LinkDefinition};

/// Contributes candidate links for a member profile page.
///
/// Returning an empty list is the normal way to offer nothing for a given
/// member or viewer. Access control belongs in the definitions themselves
/// (`permissions` / `access`), not in the source: definitions are filtered
/// per viewer during normalization either way.
pub trait LinkSource: Send + Sync {
    /// The unique name of this source (e.g., "member_admin").
    fn name(&self) -> &str;

    /// Produce raw link definitions for the given member and viewer.
    fn links(&self, member: &Member, viewer: &Viewer) -> Result<Vec<LinkDefinition>, SourceError>;
}

/// Mutates the collected link list after dedup, before grouping.
///
/// Alterers may remove, add, or reorder entries in place. They run in
/// registration order and see the effects of earlier alterers.
pub trait LinkAlterer: Send + Sync {
    /// The unique name of this alterer (e.g., "deny_list").
    fn name(&self) -> &str;

    fn alter(
        &self,
        links: &mut Vec<Link>,
        member: &Member,
        viewer: &Viewer,
    ) -> Result<(), SourceError>;
}
