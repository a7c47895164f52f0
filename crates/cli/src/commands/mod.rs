//! CLI subcommands and shared wiring.

pub mod doctor;
pub mod init;
pub mod links;

use linkdeck_config::AppConfig;
use linkdeck_core::routing::RouteTable;
use linkdeck_manager::LinkManager;
use linkdeck_sources::{DenyListAlterer, MemberAdminSource, StaticLinkSource};
use std::path::Path;

/// Load configuration from an explicit path or the default location.
pub(crate) fn load_config(path: Option<&Path>) -> Result<AppConfig, Box<dyn std::error::Error>> {
    let config = match path {
        Some(path) => AppConfig::load_from(path)?,
        None => AppConfig::load()?,
    };
    Ok(config)
}

/// Assemble the link manager from configuration: route table, built-in
/// sources, static links, and the deny-list alterer.
pub(crate) fn build_manager(config: &AppConfig) -> LinkManager {
    let router = RouteTable::from_iter(config.routes.clone());

    let mut manager = LinkManager::new(Box::new(router))
        .with_fallback_category(config.fallback_category.clone());

    if config.member_admin.enabled {
        manager.register_source(Box::new(MemberAdminSource::new()));
    }
    if !config.links.is_empty() {
        manager.register_source(Box::new(StaticLinkSource::new(config.links.clone())));
    }
    if !config.alter.deny_ids.is_empty() {
        manager.register_alterer(Box::new(DenyListAlterer::new(
            config.alter.deny_ids.clone(),
        )));
    }

    manager
}
