//! HTML rendering.
//!
//! Produces a `<nav>` of `<section>` groups, each a heading plus a `<ul>`
//! of anchors. All text and attribute values are escaped; destination
//! attributes (target, rel, …) are emitted on the anchor in sorted key
//! order so output is deterministic.

use crate::RenderOptions;
use linkdeck_core::link::{Link, LinkGroup};

/// Render grouped links to an HTML fragment.
pub fn render_html(groups: &[LinkGroup], options: &RenderOptions) -> String {
    if groups.is_empty() {
        return "<p class=\"member-links__empty\">No links available.</p>\n".to_string();
    }

    let heading = options.heading_level.clamp(1, 6);
    let mut out = String::new();
    out.push_str("<nav class=\"member-links\" aria-label=\"Member administration links\">\n");
    for group in groups {
        out.push_str("  <section class=\"member-links__group\">\n");
        out.push_str(&format!(
            "    <h{heading} class=\"member-links__heading\">{}</h{heading}>\n",
            escape(&group.label)
        ));
        out.push_str("    <ul class=\"member-links__list\">\n");
        for link in &group.links {
            out.push_str("      <li class=\"member-links__item\">");
            push_anchor(&mut out, link);
            if options.show_descriptions {
                if let Some(description) = &link.description {
                    out.push_str(&format!(
                        "<p class=\"member-links__description\">{}</p>",
                        escape(description)
                    ));
                }
            }
            out.push_str("</li>\n");
        }
        out.push_str("    </ul>\n");
        out.push_str("  </section>\n");
    }
    out.push_str("</nav>\n");
    out
}

fn push_anchor(out: &mut String, link: &Link) {
    out.push_str(&format!("<a href=\"{}\"", escape(&link.url.href())));
    for (key, value) in &link.url.options.attributes {
        out.push_str(&format!(" {}=\"{}\"", escape(key), escape(value)));
    }
    out.push_str(&format!(">{}</a>", escape(&link.title)));
}

/// Minimal HTML escaping for text and double-quoted attribute contexts.
fn escape(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use linkdeck_core::destination::ResolvedUrl;

    fn link(title: &str, href: &str) -> Link {
        Link {
            id: None,
            title: title.into(),
            url: ResolvedUrl::parse(href).unwrap(),
            description: None,
            category: None,
            weight: 0,
            group_weight: 0,
        }
    }

    fn one_group(links: Vec<Link>) -> Vec<LinkGroup> {
        vec![LinkGroup {
            label: "Tools".into(),
            weight: 0,
            links,
        }]
    }

    #[test]
    fn renders_groups_headings_and_anchors() {
        let html = render_html(
            &one_group(vec![link("Laser cutter", "/tools/laser")]),
            &RenderOptions::default(),
        );
        assert!(html.contains("<h3 class=\"member-links__heading\">Tools</h3>"));
        assert!(html.contains("<a href=\"/tools/laser\">Laser cutter</a>"));
    }

    #[test]
    fn escapes_titles_labels_and_hrefs() {
        let mut groups = one_group(vec![link("Wood & metal <shop>", "/tools")]);
        groups[0].label = "Shops \"A\"".into();
        let html = render_html(&groups, &RenderOptions::default());
        assert!(html.contains("Wood &amp; metal &lt;shop&gt;"));
        assert!(html.contains("Shops &quot;A&quot;"));
        assert!(!html.contains("<shop>"));
    }

    #[test]
    fn renders_destination_attributes_on_anchor() {
        let mut l = link("Wiki", "https://wiki.example.com/");
        l.url.options.attributes.insert("target".into(), "_blank".into());
        l.url.options.attributes.insert("rel".into(), "noopener".into());
        let html = render_html(&one_group(vec![l]), &RenderOptions::default());
        // BTreeMap order: rel before target.
        assert!(html.contains("<a href=\"https://wiki.example.com/\" rel=\"noopener\" target=\"_blank\">Wiki</a>"));
    }

    #[test]
    fn descriptions_respect_the_toggle() {
        let mut l = link("Billing", "/billing");
        l.description = Some("Invoices & payments".into());

        let shown = render_html(&one_group(vec![l.clone()]), &RenderOptions::default());
        assert!(shown.contains("Invoices &amp; payments"));

        let hidden = render_html(
            &one_group(vec![l]),
            &RenderOptions {
                show_descriptions: false,
                ..RenderOptions::default()
            },
        );
        assert!(!hidden.contains("Invoices"));
    }

    #[test]
    fn heading_level_is_clamped() {
        let html = render_html(
            &one_group(vec![link("A", "/a")]),
            &RenderOptions {
                heading_level: 9,
                ..RenderOptions::default()
            },
        );
        assert!(html.contains("<h6"));
    }

    #[test]
    fn empty_groups_render_fallback_message() {
        let html = render_html(&[], &RenderOptions::default());
        assert!(html.contains("No links available."));
        assert!(!html.contains("<nav"));
    }
}
