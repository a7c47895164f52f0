//! Built-in link sources and alterers.
//!
//! Sources give the pipeline something to aggregate out of the box:
//! the member administration links every profile page carries, plus a
//! declarative source fed from configuration. Site-specific extensions
//! implement `LinkSource`/`LinkAlterer` themselves and register alongside
//! these.

pub mod deny_list;
pub mod member_admin;
pub mod static_links;

pub use deny_list::DenyListAlterer;
pub use member_admin::MemberAdminSource;
pub use static_links::StaticLinkSource;
