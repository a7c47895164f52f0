//! Subject and viewer identities.
//!
//! The pipeline is invoked for a *member profile* (the page being viewed) on
//! behalf of a *viewer* (the account looking at it). Both are passed
//! explicitly into every entry point — there is no ambient "current user"
//! service anywhere in the pipeline.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// The member whose profile page is being viewed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    /// Stable numeric identifier, used in route parameters and cache tags.
    pub id: u64,

    /// Display name shown in headings and logs.
    pub display_name: String,
}

impl Member {
    pub fn new(id: u64, display_name: impl Into<String>) -> Self {
        Self {
            id,
            display_name: display_name.into(),
        }
    }

    /// Cache tags a renderer should attach to output derived from this
    /// member, so the surrounding system can invalidate it on change.
    pub fn cache_tags(&self) -> Vec<String> {
        vec![format!("member:{}", self.id)]
    }
}

/// The account viewing the profile page.
///
/// Carries the flat permission set consulted by the access filter. A link
/// definition listing permissions is visible only when the viewer holds
/// every one of them.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Viewer {
    pub id: u64,

    #[serde(default)]
    pub permissions: HashSet<String>,
}

impl Viewer {
    /// A viewer with no permissions.
    pub fn new(id: u64) -> Self {
        Self {
            id,
            permissions: HashSet::new(),
        }
    }

    /// A viewer holding the given permissions.
    pub fn with_permissions<I, S>(id: u64, permissions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            id,
            permissions: permissions.into_iter().map(Into::into).collect(),
        }
    }

    /// Grant an additional permission.
    pub fn grant(&mut self, permission: impl Into<String>) {
        self.permissions.insert(permission.into());
    }

    /// Whether this viewer holds the given permission (exact match).
    pub fn has_permission(&self, permission: &str) -> bool {
        self.permissions.contains(permission)
    }
}
