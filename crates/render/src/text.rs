//! Plain-text rendering, used by the CLI.

use linkdeck_core::link::LinkGroup;

/// Render grouped links as an indented text listing.
pub fn render_text(groups: &[LinkGroup]) -> String {
    if groups.is_empty() {
        return "No links available.\n".to_string();
    }

    let mut out = String::new();
    for group in groups {
        out.push_str(&format!("{}\n", group.label));
        for link in &group.links {
            out.push_str(&format!("  {} — {}\n", link.title, link.url.href()));
            if let Some(description) = &link.description {
                out.push_str(&format!("      {description}\n"));
            }
        }
    }
    out
}
