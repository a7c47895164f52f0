//! Definition normalization and access filtering.
//!
//! Turns one raw `LinkDefinition` into a canonical `Link`, or rejects it.
//! Rejection is not an error: any source may legitimately decline to offer a
//! link to a given viewer, so dropped definitions surface only as a debug
//! log line in the collector.

use linkdeck_core::destination::{ResolvedUrl, UrlTarget};
use linkdeck_core::link::{DirectUrl, Link, LinkDefinition};
use linkdeck_core::routing::RouteResolver;
use linkdeck_core::Viewer;
use thiserror::Error;

/// Why a definition was dropped. Internal to the pipeline; never crosses
/// the public API.
#[derive(Debug, Clone, Error)]
pub(crate) enum Rejection {
    #[error("access explicitly denied")]
    AccessDenied,

    #[error("viewer lacks permission '{0}'")]
    MissingPermission(String),

    #[error("missing or empty title")]
    MissingTitle,

    #[error("no destination supplied")]
    NoDestination,

    #[error("destination resolution failed: {0}")]
    Destination(String),
}

/// Normalize a single definition for the given viewer.
///
/// Checks run in a fixed order; the first failure rejects:
/// 1. explicit `access: false`
/// 2. any listed permission the viewer lacks
/// 3. missing/empty title
/// 4. destination resolution
pub(crate) fn normalize(
    def: &LinkDefinition,
    viewer: &Viewer,
    router: &dyn RouteResolver,
) -> Result<Link, Rejection> {
    if def.access == Some(false) {
        return Err(Rejection::AccessDenied);
    }

    for permission in &def.permissions {
        if !viewer.has_permission(permission) {
            return Err(Rejection::MissingPermission(permission.clone()));
        }
    }

    let title = match def.title.as_deref() {
        Some(title) if !title.is_empty() => title.to_string(),
        _ => return Err(Rejection::MissingTitle),
    };

    let mut url = resolve_destination(def, router)?;

    // Contributed attributes fill gaps only; the destination's own
    // attributes win on key collision.
    for (key, value) in &def.attributes {
        url.options
            .attributes
            .entry(key.clone())
            .or_insert_with(|| value.clone());
    }

    Ok(Link {
        id: def.id.clone(),
        title,
        url,
        description: def.description.clone(),
        category: def.category.clone(),
        weight: def.weight.unwrap_or(0),
        group_weight: def.group_weight.unwrap_or(0),
    })
}

/// Pick and resolve the definition's destination.
///
/// Priority: direct `url`, then `route_name`, then `uri`. A raw direct URL
/// that is an empty string counts as absent and falls through, matching the
/// permissive inputs contributors actually produce; any other present but
/// unresolvable destination rejects.
fn resolve_destination(
    def: &LinkDefinition,
    router: &dyn RouteResolver,
) -> Result<ResolvedUrl, Rejection> {
    match &def.url {
        Some(DirectUrl::Built(url)) => return Ok(url.clone()),
        Some(DirectUrl::Raw(raw)) if !raw.is_empty() => {
            return ResolvedUrl::parse(raw).map_err(|e| Rejection::Destination(e.to_string()));
        }
        _ => {}
    }

    if let Some(route_name) = def.route_name.as_deref().filter(|name| !name.is_empty()) {
        let path = router
            .resolve(route_name, &def.route_parameters)
            .map_err(|e| Rejection::Destination(e.to_string()))?;
        return Ok(ResolvedUrl::with_options(
            UrlTarget::Internal(path),
            def.route_options.clone(),
        ));
    }

    if let Some(uri) = def.uri.as_deref().filter(|uri| !uri.is_empty()) {
        let target =
            UrlTarget::parse(uri).map_err(|e| Rejection::Destination(e.to_string()))?;
        return Ok(ResolvedUrl::with_options(target, def.url_options.clone()));
    }

    Err(Rejection::NoDestination)
}

#[cfg(test)]
mod tests {
    use super::*;
    use linkdeck_core::destination::UrlOptions;
    use linkdeck_core::routing::RouteTable;

    fn router() -> RouteTable {
        RouteTable::from_iter([
            ("entity.member.canonical", "/member/{member}"),
            ("entity.member.edit_form", "/member/{member}/edit"),
        ])
    }

    fn viewer() -> Viewer {
        Viewer::with_permissions(1, ["access member profiles"])
    }

    #[test]
    fn explicit_access_false_rejects_before_anything_else() {
        // Every other field is valid; access alone must reject.
        let def = LinkDefinition::titled("Edit")
            .uri("/member/1/edit")
            .access(false);
        let err = normalize(&def, &viewer(), &router()).unwrap_err();
        assert!(matches!(err, Rejection::AccessDenied));
    }

    #[test]
    fn access_false_bypasses_permission_check() {
        // Even with a permission the viewer lacks, the rejection reason is
        // the explicit access flag (checked first).
        let def = LinkDefinition::titled("Edit")
            .uri("/member/1/edit")
            .permission("administer members")
            .access(false);
        let err = normalize(&def, &viewer(), &router()).unwrap_err();
        assert!(matches!(err, Rejection::AccessDenied));
    }

    #[test]
    fn access_true_does_not_bypass_permissions() {
        let def = LinkDefinition::titled("Edit")
            .uri("/member/1/edit")
            .permission("administer members")
            .access(true);
        let err = normalize(&def, &viewer(), &router()).unwrap_err();
        assert!(matches!(err, Rejection::MissingPermission(_)));
    }

    #[test]
    fn all_permissions_must_be_held() {
        let def = LinkDefinition::titled("Billing")
            .uri("/member/1/billing")
            .permission("access member profiles")
            .permission("view billing");
        let err = normalize(&def, &viewer(), &router()).unwrap_err();
        assert!(matches!(err, Rejection::MissingPermission(p) if p == "view billing"));

        let privileged = Viewer::with_permissions(2, ["access member profiles", "view billing"]);
        assert!(normalize(&def, &privileged, &router()).is_ok());
    }

    #[test]
    fn missing_or_empty_title_rejects() {
        let def = LinkDefinition::default().uri("/somewhere");
        assert!(matches!(
            normalize(&def, &viewer(), &router()).unwrap_err(),
            Rejection::MissingTitle
        ));

        let def = LinkDefinition::titled("").uri("/somewhere");
        assert!(matches!(
            normalize(&def, &viewer(), &router()).unwrap_err(),
            Rejection::MissingTitle
        ));
    }

    #[test]
    fn direct_url_wins_over_route_and_uri() {
        let def = LinkDefinition::titled("Wiki")
            .url("https://wiki.example.com/")
            .route("entity.member.canonical")
            .route_parameter("member", "1")
            .uri("/fallback");
        let link = normalize(&def, &viewer(), &router()).unwrap();
        assert_eq!(link.url.href(), "https://wiki.example.com/");
    }

    #[test]
    fn empty_direct_url_falls_through_to_route() {
        let def = LinkDefinition::titled("Profile")
            .url("")
            .route("entity.member.canonical")
            .route_parameter("member", "7");
        let link = normalize(&def, &viewer(), &router()).unwrap();
        assert_eq!(link.url.href(), "/member/7");
    }

    #[test]
    fn invalid_direct_url_rejects_without_fallback() {
        let def = LinkDefinition::titled("Broken")
            .url("not a uri")
            .uri("/would-work");
        let err = normalize(&def, &viewer(), &router()).unwrap_err();
        assert!(matches!(err, Rejection::Destination(_)));
    }

    #[test]
    fn route_resolution_failure_rejects() {
        let def = LinkDefinition::titled("Nowhere").route("no.such.route");
        let err = normalize(&def, &viewer(), &router()).unwrap_err();
        assert!(matches!(err, Rejection::Destination(_)));
    }

    #[test]
    fn uri_used_when_url_and_route_absent() {
        let mut def = LinkDefinition::titled("External").uri("https://example.com/help");
        def.url_options.attributes.insert("rel".into(), "help".into());
        let link = normalize(&def, &viewer(), &router()).unwrap();
        assert_eq!(link.url.href(), "https://example.com/help");
        assert_eq!(
            link.url.options.attributes.get("rel").map(String::as_str),
            Some("help")
        );
    }

    #[test]
    fn no_destination_rejects() {
        let def = LinkDefinition::titled("Nothing");
        assert!(matches!(
            normalize(&def, &viewer(), &router()).unwrap_err(),
            Rejection::NoDestination
        ));
    }

    #[test]
    fn contributed_attributes_do_not_overwrite_destination_attributes() {
        let mut options = UrlOptions::default();
        options.attributes.insert("target".into(), "_self".into());
        let built = ResolvedUrl::with_options(UrlTarget::Internal("/tools".into()), options);

        let def = LinkDefinition::titled("Tools")
            .url(built)
            .attribute("target", "_blank")
            .attribute("rel", "noopener");

        let link = normalize(&def, &viewer(), &router()).unwrap();
        // Existing key kept, missing key added.
        assert_eq!(
            link.url.options.attributes.get("target").map(String::as_str),
            Some("_self")
        );
        assert_eq!(
            link.url.options.attributes.get("rel").map(String::as_str),
            Some("noopener")
        );
    }

    #[test]
    fn weights_default_to_zero() {
        let def = LinkDefinition::titled("Plain").uri("/plain");
        let link = normalize(&def, &viewer(), &router()).unwrap();
        assert_eq!(link.weight, 0);
        assert_eq!(link.group_weight, 0);
    }

    #[test]
    fn route_options_carry_over() {
        let mut def = LinkDefinition::titled("Edit")
            .route("entity.member.edit_form")
            .route_parameter("member", "3");
        def.route_options.query.insert("destination".into(), "/members".into());
        let link = normalize(&def, &viewer(), &router()).unwrap();
        assert_eq!(link.url.href(), "/member/3/edit?destination=%2Fmembers");
    }
}
