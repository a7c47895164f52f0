//! `linkdeck doctor` — Diagnose configuration problems.
//!
//! Rejections are silent at render time by design, so this is where a site
//! finds out *why* a configured link never shows up: unresolvable routes,
//! duplicate ids, deny-list entries that match nothing.

use linkdeck_core::routing::{RouteResolver, RouteTable};
use linkdeck_sources::member_admin::{EDIT_ROUTE, VIEW_ROUTE};
use std::collections::HashSet;
use std::path::Path;

pub fn run(config_path: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    let config = super::load_config(config_path)?;
    let router = RouteTable::from_iter(config.routes.clone());
    let mut warnings = 0usize;

    println!("Linkdeck Doctor");
    println!("===============");
    println!("  Routes:        {}", config.routes.len());
    println!("  Static links:  {}", config.links.len());
    println!("  Deny ids:      {}", config.alter.deny_ids.len());
    println!();

    // Built-in member admin links need their routes registered.
    if config.member_admin.enabled {
        for route in [VIEW_ROUTE, EDIT_ROUTE] {
            if !router.contains(route) {
                println!("  ⚠️  member_admin is enabled but route '{route}' is not configured");
                warnings += 1;
            }
        }
    }

    // Static links referencing routes must resolve with their own
    // parameters; there is no runtime fallback.
    for (index, def) in config.links.iter().enumerate() {
        let label = def
            .id
            .as_deref()
            .or(def.title.as_deref())
            .map(String::from)
            .unwrap_or_else(|| format!("#{index}"));

        if def.title.as_deref().is_none_or(str::is_empty) {
            println!("  ⚠️  link {label} has no title and will never render");
            warnings += 1;
        }

        if let Some(route_name) = def.route_name.as_deref() {
            if def.url.is_none() {
                if let Err(e) = router.resolve(route_name, &def.route_parameters) {
                    println!("  ⚠️  link {label}: {e}");
                    warnings += 1;
                }
            }
        } else if def.url.is_none() && def.uri.as_deref().is_none_or(str::is_empty) {
            println!("  ⚠️  link {label} has no destination and will never render");
            warnings += 1;
        }
    }

    // Duplicate ids are dropped first-seen-wins at runtime.
    let mut seen: HashSet<&str> = HashSet::new();
    for def in &config.links {
        if let Some(id) = def.id.as_deref().filter(|id| !id.is_empty()) {
            if !seen.insert(id) {
                println!("  ⚠️  duplicate static link id '{id}' (later entries are dropped)");
                warnings += 1;
            }
        }
    }

    // Deny ids matching no static link may still target runtime sources;
    // mention them without counting a warning.
    let static_ids: HashSet<&str> = config
        .links
        .iter()
        .filter_map(|def| def.id.as_deref())
        .collect();
    for id in &config.alter.deny_ids {
        if !static_ids.contains(id.as_str()) {
            println!("  ℹ️  deny id '{id}' matches no static link (may target a runtime source)");
        }
    }

    if warnings == 0 {
        println!("  ✅ No problems found");
    } else {
        println!("\n  {warnings} warning(s)");
    }

    Ok(())
}
