//! Resolved destinations.
//!
//! A link destination is either an absolute URI or a site-relative path,
//! plus rendering options (HTML attributes, query string, fragment). The
//! pipeline never fetches anything — a `ResolvedUrl` is purely a value the
//! renderer turns into an `href`.

use crate::error::UrlError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Where a link points.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum UrlTarget {
    /// A full URI with a scheme (`https://…`, `mailto:…`).
    Absolute(url::Url),

    /// A site-relative path (`/member/42/edit`).
    Internal(String),
}

impl UrlTarget {
    /// Parse a raw string as a URI reference.
    ///
    /// Accepted forms:
    /// - a site-relative path starting with `/`
    /// - an `internal:` prefixed path (`internal:/member/42`)
    /// - an absolute URI parseable by `url::Url`
    pub fn parse(input: &str) -> Result<Self, UrlError> {
        if input.is_empty() {
            return Err(UrlError::Invalid {
                uri: input.into(),
                reason: "empty URI reference".into(),
            });
        }
        if input.starts_with('/') {
            return Ok(Self::Internal(input.to_string()));
        }
        if let Some(path) = input.strip_prefix("internal:") {
            if !path.starts_with('/') {
                return Err(UrlError::Invalid {
                    uri: input.into(),
                    reason: "internal: URIs must use an absolute path".into(),
                });
            }
            return Ok(Self::Internal(path.to_string()));
        }
        url::Url::parse(input)
            .map(Self::Absolute)
            .map_err(|e| UrlError::Invalid {
                uri: input.into(),
                reason: e.to_string(),
            })
    }
}

impl fmt::Display for UrlTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Absolute(url) => write!(f, "{url}"),
            Self::Internal(path) => write!(f, "{path}"),
        }
    }
}

/// Rendering options attached to a destination.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UrlOptions {
    /// HTML attributes emitted on the anchor (`target`, `rel`, `class`, …).
    #[serde(default)]
    pub attributes: BTreeMap<String, String>,

    /// Query parameters appended to the href.
    #[serde(default)]
    pub query: BTreeMap<String, String>,

    /// Fragment appended to the href.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fragment: Option<String>,
}

impl UrlOptions {
    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty() && self.query.is_empty() && self.fragment.is_none()
    }
}

/// A fully resolved link destination: target plus rendering options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedUrl {
    pub target: UrlTarget,

    #[serde(default)]
    pub options: UrlOptions,
}

impl ResolvedUrl {
    pub fn new(target: UrlTarget) -> Self {
        Self {
            target,
            options: UrlOptions::default(),
        }
    }

    pub fn with_options(target: UrlTarget, options: UrlOptions) -> Self {
        Self { target, options }
    }

    /// Parse a raw URI reference with default options.
    pub fn parse(input: &str) -> Result<Self, UrlError> {
        UrlTarget::parse(input).map(Self::new)
    }

    /// The href string for this destination, with query parameters and
    /// fragment applied. Query values are form-urlencoded.
    pub fn href(&self) -> String {
        let mut href = self.target.to_string();
        if !self.options.query.is_empty() {
            let encoded = url::form_urlencoded::Serializer::new(String::new())
                .extend_pairs(self.options.query.iter())
                .finish();
            href.push(if href.contains('?') { '&' } else { '?' });
            href.push_str(&encoded);
        }
        if let Some(fragment) = &self.options.fragment {
            href.push('#');
            href.push_str(fragment);
        }
        href
    }
}
