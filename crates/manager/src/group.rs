//! Grouping and ordering.
//!
//! This is the subtle half of the pipeline: a two-level sort (links within
//! category, then categories) where a group's weight is fixed by whichever
//! link created the group. The sort MUST be stable — links with equal
//! weight and equal title keep their collection order.

use indexmap::IndexMap;
use linkdeck_core::link::{Link, LinkGroup};

/// Bucket sorted links into ordered category groups.
///
/// 1. Stable-sort links by weight, ties by case-insensitive title.
/// 2. Bucket by category label (or `fallback_label`), keyed by the exact
///    label string, preserving first-appearance order of groups.
/// 3. Stable-sort groups by weight, ties by case-insensitive label.
///
/// A group's weight is the `group_weight` of the first link (in sorted-link
/// order) carrying its category — intentionally NOT an aggregate over the
/// group's members. Renderers depend on this exact behavior.
pub fn group(mut links: Vec<Link>, fallback_label: &str) -> Vec<LinkGroup> {
    links.sort_by(|a, b| {
        a.weight
            .cmp(&b.weight)
            .then_with(|| a.title.to_lowercase().cmp(&b.title.to_lowercase()))
    });

    let mut grouped: IndexMap<String, LinkGroup> = IndexMap::new();
    for link in links {
        let label = link
            .category
            .clone()
            .unwrap_or_else(|| fallback_label.to_string());
        grouped
            .entry(label.clone())
            .or_insert_with(|| LinkGroup {
                label,
                weight: link.group_weight,
                links: Vec::new(),
            })
            .links
            .push(link);
    }

    let mut groups: Vec<LinkGroup> = grouped.into_values().collect();
    groups.sort_by(|a, b| {
        a.weight
            .cmp(&b.weight)
            .then_with(|| a.label.to_lowercase().cmp(&b.label.to_lowercase()))
    });
    groups
}
