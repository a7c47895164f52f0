//! Link data model.
//!
//! `LinkDefinition` is the raw, contributor-supplied shape: every field is
//! optional and nothing is validated. `Link` is the canonical record the
//! normalizer produces from it; by construction a `Link` always has a
//! non-empty title and a resolved destination. `LinkGroup` is the grouped,
//! ordered output handed to renderers.

use crate::destination::{ResolvedUrl, UrlOptions};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Category label applied to links that do not declare one.
pub const DEFAULT_CATEGORY: &str = "Admin Links";

/// A directly supplied destination: either a pre-built `ResolvedUrl` or a
/// raw string to be parsed as a URI reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DirectUrl {
    Raw(String),
    Built(ResolvedUrl),
}

impl From<&str> for DirectUrl {
    fn from(raw: &str) -> Self {
        Self::Raw(raw.to_string())
    }
}

impl From<ResolvedUrl> for DirectUrl {
    fn from(url: ResolvedUrl) -> Self {
        Self::Built(url)
    }
}

/// A raw link definition as contributed by a source.
///
/// The destination is taken from the first of these that is present:
/// `url`, then `route_name` (+ `route_parameters`/`route_options`), then
/// `uri` (+ `url_options`). Definitions with no usable destination, no
/// title, or failing the access checks are dropped during normalization.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LinkDefinition {
    /// Optional identifier used for deduplication and alter-hook removal.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Required display text; the definition is rejected without it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Direct destination, used in preference to `route_name` and `uri`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<DirectUrl>,

    /// Named route to resolve when no direct `url` is given.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub route_name: Option<String>,

    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub route_parameters: BTreeMap<String, String>,

    #[serde(default, skip_serializing_if = "UrlOptions::is_empty")]
    pub route_options: UrlOptions,

    /// Raw URI reference, used when neither `url` nor `route_name` is given.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uri: Option<String>,

    #[serde(default, skip_serializing_if = "UrlOptions::is_empty")]
    pub url_options: UrlOptions,

    /// Supplementary text shown under the link.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Category heading; `DEFAULT_CATEGORY` when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    /// Sort weight within the category. Lower sorts earlier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<i32>,

    /// Sort weight of the category wrapper. Lower sorts earlier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_weight: Option<i32>,

    /// HTML attributes merged into the destination's rendering options.
    /// Attributes already set on the destination win on key collision.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub attributes: BTreeMap<String, String>,

    /// Permissions the viewer must *all* hold to see the link.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub permissions: Vec<String>,

    /// Explicit visibility override. `Some(false)` rejects unconditionally.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub access: Option<bool>,
}

impl LinkDefinition {
    /// Start a definition with the given display text.
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Self::default()
        }
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn url(mut self, url: impl Into<DirectUrl>) -> Self {
        self.url = Some(url.into());
        self
    }

    pub fn route(mut self, route_name: impl Into<String>) -> Self {
        self.route_name = Some(route_name.into());
        self
    }

    pub fn route_parameter(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.route_parameters.insert(key.into(), value.into());
        self
    }

    pub fn uri(mut self, uri: impl Into<String>) -> Self {
        self.uri = Some(uri.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn weight(mut self, weight: i32) -> Self {
        self.weight = Some(weight);
        self
    }

    pub fn group_weight(mut self, group_weight: i32) -> Self {
        self.group_weight = Some(group_weight);
        self
    }

    pub fn attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    pub fn permission(mut self, permission: impl Into<String>) -> Self {
        self.permissions.push(permission.into());
        self
    }

    pub fn access(mut self, access: bool) -> Self {
        self.access = Some(access);
        self
    }
}

/// A normalized link: validated, access-checked, destination resolved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Link {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    pub title: String,

    pub url: ResolvedUrl,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    pub weight: i32,

    pub group_weight: i32,
}

/// An ordered category of links, ready for rendering.
///
/// `weight` is the `group_weight` of the link that created the group — the
/// first link, in sorted-link order, carrying this category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinkGroup {
    pub label: String,

    pub weight: i32,

    pub links: Vec<Link>,
}
