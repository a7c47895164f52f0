//! `linkdeck links` — Run the pipeline and print grouped links.

use crate::OutputFormat;
use linkdeck_core::{Member, Viewer};
use linkdeck_render::{CacheMetadata, RenderOptions, render_block, render_text};
use std::path::Path;

pub fn run(
    config_path: Option<&Path>,
    member_id: u64,
    member_name: &str,
    permissions: Vec<String>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = super::load_config(config_path)?;
    let manager = super::build_manager(&config);

    let member = Member::new(member_id, member_name);
    let viewer = Viewer::with_permissions(0, permissions);

    let groups = manager.grouped_links(&member, &viewer)?;

    match format {
        OutputFormat::Text => print!("{}", render_text(&groups)),
        OutputFormat::Html => {
            let options = RenderOptions {
                show_descriptions: config.render.show_descriptions,
                heading_level: config.render.heading_level,
            };
            let block = render_block(&groups, &member, &options);
            print!("{}", block.body);
        }
        OutputFormat::Json => {
            let payload = serde_json::json!({
                "groups": groups,
                "cache": CacheMetadata::for_member(&member),
            });
            println!("{}", serde_json::to_string_pretty(&payload)?);
        }
    }

    Ok(())
}
