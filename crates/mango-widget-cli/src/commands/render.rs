use clap::Args;
use mango_widget_core::{renderer_for, Platform, WidgetConfig};

use super::resolve::Variant;
use super::{print_json, Source};

#[derive(Args, Debug)]
pub struct RenderArgs {
    #[command(flatten)]
    pub source: Source,
    #[command(flatten)]
    pub variant: Variant,
    /// Host platform (ios, android); defaults to the config
    #[arg(long)]
    pub platform: Option<String>,
}

pub fn run(args: RenderArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = WidgetConfig::load_or_default();
    let platform = match &args.platform {
        Some(name) => Platform::parse(name).ok_or_else(|| format!("unknown platform: {name}"))?,
        None => config.display.platform,
    };

    let entry = args.source.visible_entry(&config, args.variant.at)?;
    let layout = args.variant.layout(&entry, &config)?;
    let visual = renderer_for(platform).render(&entry, &layout);
    print_json(&visual)
}
