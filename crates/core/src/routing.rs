//! Route resolution.
//!
//! Link definitions may name a route instead of carrying a URL. The
//! `RouteResolver` turns a route name plus parameters into a site-relative
//! path. The resolver is handed to the pipeline explicitly; resolution
//! failure rejects only the definition that referenced the route.

use crate::error::RouteError;
use std::collections::{BTreeMap, HashMap};

/// Resolves route names to site-relative paths.
pub trait RouteResolver: Send + Sync {
    fn resolve(
        &self,
        route_name: &str,
        parameters: &BTreeMap<String, String>,
    ) -> Result<String, RouteError>;
}

/// A static route table mapping names to path patterns.
///
/// Patterns use `{param}` placeholders substituted from the definition's
/// route parameters: `/member/{member}/edit` with `member = 42` resolves to
/// `/member/42/edit`.
#[derive(Debug, Clone, Default)]
pub struct RouteTable {
    routes: HashMap<String, String>,
}

impl RouteTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a route pattern. Replaces any existing route with the name.
    pub fn insert(&mut self, name: impl Into<String>, pattern: impl Into<String>) {
        self.routes.insert(name.into(), pattern.into());
    }

    /// Build a table from an iterator of (name, pattern) pairs.
    pub fn from_iter<I, K, V>(routes: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            routes: routes
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.routes.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

impl RouteResolver for RouteTable {
    fn resolve(
        &self,
        route_name: &str,
        parameters: &BTreeMap<String, String>,
    ) -> Result<String, RouteError> {
        let pattern = self
            .routes
            .get(route_name)
            .ok_or_else(|| RouteError::UnknownRoute(route_name.to_string()))?;

        let mut path = String::with_capacity(pattern.len());
        let mut rest = pattern.as_str();
        while let Some(open) = rest.find('{') {
            path.push_str(&rest[..open]);
            let after = &rest[open + 1..];
            let close = after.find('}').ok_or_else(|| RouteError::InvalidPattern {
                route: route_name.to_string(),
                reason: "unbalanced '{' in pattern".into(),
            })?;
            let key = &after[..close];
            let value = parameters
                .get(key)
                .ok_or_else(|| RouteError::MissingParameter {
                    route: route_name.to_string(),
                    parameter: key.to_string(),
                })?;
            path.push_str(value);
            rest = &after[close + 1..];
        }
        path.push_str(rest);
        Ok(path)
    }
}
