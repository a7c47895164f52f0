//! # Linkdeck Core
//!
//! Domain types, traits, and error definitions for the linkdeck link
//! pipeline. This crate has **zero framework dependencies** — it defines the
//! domain model that all other crates implement against.
//!
//! ## Design Philosophy
//!
//! Every extension point is defined as a trait here. Implementations live in
//! their respective crates. This enables:
//! - Contributing links from any crate without touching the pipeline
//! - Easy testing with mock/stub implementations
//! - Clean dependency graph (all crates depend inward on core)

pub mod account;
pub mod destination;
pub mod error;
pub mod link;
pub mod routing;
pub mod source;

// Re-export key types at crate root for ergonomics
pub use account::{Member, Viewer};
pub use destination::{ResolvedUrl, UrlOptions, UrlTarget};
pub use error::{Error, Result, RouteError, SourceError, UrlError};
pub use link::{DEFAULT_CATEGORY, DirectUrl, Link, LinkDefinition, LinkGroup};
pub use routing::{RouteResolver, RouteTable};
pub use source::{LinkAlterer, LinkSource};
