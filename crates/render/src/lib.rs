//! Presentation layer for grouped links.
//!
//! Strictly a consumer of the pipeline: takes the ordered `LinkGroup` list
//! verbatim — no filtering, no reordering — and produces markup or plain
//! text, plus the cache metadata the surrounding system needs to scope the
//! rendered widget. The pipeline itself carries no cache awareness;
//! recomputation per invocation is assumed cheap.

mod cache;
mod html;
mod text;

pub use cache::CacheMetadata;
pub use html::render_html;
pub use text::render_text;

use linkdeck_core::link::LinkGroup;
use linkdeck_core::Member;
use serde::{Deserialize, Serialize};

/// Rendering knobs, typically taken from the `[render]` config section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderOptions {
    /// Emit link descriptions under each anchor.
    pub show_descriptions: bool,

    /// Heading level for group labels (1–6).
    pub heading_level: u8,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            show_descriptions: true,
            heading_level: 3,
        }
    }
}

/// A rendered widget: markup plus the cache scoping it requires.
#[derive(Debug, Clone, Serialize)]
pub struct BlockOutput {
    pub body: String,
    pub cache: CacheMetadata,
}

/// Render the grouped links as an HTML block for the given member's page.
pub fn render_block(groups: &[LinkGroup], member: &Member, options: &RenderOptions) -> BlockOutput {
    BlockOutput {
        body: html::render_html(groups, options),
        cache: CacheMetadata::for_member(member),
    }
}
