//! Core member administration links.
//!
//! The links every member profile page offers staff: view the canonical
//! profile and edit it. Destinations are route-based, so sites control the
//! actual paths through their route table; if a route is not registered the
//! affected link is silently dropped by normalization, which `linkdeck
//! doctor` reports.

use linkdeck_core::link::LinkDefinition;
use linkdeck_core::source::LinkSource;
use linkdeck_core::{Member, SourceError, Viewer};

pub const VIEW_ROUTE: &str = "entity.member.canonical";
pub const EDIT_ROUTE: &str = "entity.member.edit_form";

/// Built-in source for profile administration links.
#[derive(Debug, Clone, Default)]
pub struct MemberAdminSource;

impl MemberAdminSource {
    pub fn new() -> Self {
        Self
    }
}

impl LinkSource for MemberAdminSource {
    fn name(&self) -> &str {
        "member_admin"
    }

    fn links(&self, member: &Member, _viewer: &Viewer) -> Result<Vec<LinkDefinition>, SourceError> {
        let member_id = member.id.to_string();
        Ok(vec![
            LinkDefinition::titled("View profile")
                .id("member_admin.view")
                .route(VIEW_ROUTE)
                .route_parameter("member", member_id.as_str())
                .description("Open the member's public profile.")
                .category("Account")
                .weight(-20)
                .group_weight(-10)
                .permission("access member profiles"),
            LinkDefinition::titled("Edit profile")
                .id("member_admin.edit")
                .route(EDIT_ROUTE)
                .route_parameter("member", member_id.as_str())
                .description("Change the member's account details.")
                .category("Account")
                .weight(-10)
                .group_weight(-10)
                .permission("administer members"),
        ])
    }
}
