//! Cache scoping for rendered output.
//!
//! The widget's markup varies by route, by path, and by the viewer's
//! permission set, and must be invalidated when the viewed member changes.
//! The surrounding system consumes these declarations; nothing here caches
//! anything itself.

use linkdeck_core::Member;
use serde::Serialize;

/// Cache contexts and tags for a rendered link block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CacheMetadata {
    /// What the output varies by.
    pub contexts: Vec<String>,

    /// Invalidation tags tied to the subject entity.
    pub tags: Vec<String>,
}

impl CacheMetadata {
    pub fn for_member(member: &Member) -> Self {
        Self {
            contexts: vec![
                "route".to_string(),
                "url.path".to_string(),
                "user.permissions".to_string(),
            ],
            tags: member.cache_tags(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn carries_contexts_and_member_tags() {
        let meta = CacheMetadata::for_member(&Member::new(42, "Ada"));
        assert_eq!(meta.contexts, vec!["route", "url.path", "user.permissions"]);
        assert_eq!(meta.tags, vec!["member:42"]);
    }
}
