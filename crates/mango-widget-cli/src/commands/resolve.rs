use chrono::{DateTime, Utc};
use clap::Args;
use mango_widget_core::{
    resolve_host, DisplayClass, LayoutDescriptor, TimelineEntry, WidgetConfig, WidgetKind,
};

use super::{parse_instant, print_json, Source};

/// Which presentation variant to resolve.
#[derive(Args, Debug, Clone)]
pub struct Variant {
    /// Theme name (mango, ocean, forest, minimal); defaults to the config
    #[arg(long)]
    pub theme: Option<String>,
    /// Display class or host family (e.g. small, accessoryCircular, streak_medium)
    #[arg(long, default_value = "medium")]
    pub class: String,
    /// Resolve as a catalog widget (e.g. StreakWidget), overriding --theme
    #[arg(long)]
    pub widget: Option<String>,
    /// Instant whose visible entry is resolved (defaults to the generation instant)
    #[arg(long, value_parser = parse_instant)]
    pub at: Option<DateTime<Utc>>,
}

impl Variant {
    /// Resolve `entry`. Unknown theme or class names degrade to defaults;
    /// an unknown widget name is an error.
    pub fn layout(
        &self,
        entry: &TimelineEntry,
        config: &WidgetConfig,
    ) -> Result<LayoutDescriptor, Box<dyn std::error::Error>> {
        if let Some(name) = &self.widget {
            let widget =
                WidgetKind::parse(name).ok_or_else(|| format!("unknown widget: {name}"))?;
            let class = DisplayClass::from_host(&self.class);
            return Ok(widget.layout(entry, class));
        }

        let theme = self
            .theme
            .clone()
            .unwrap_or_else(|| config.display.theme.as_str().to_string());
        Ok(resolve_host(entry, &theme, &self.class))
    }
}

#[derive(Args, Debug)]
pub struct ResolveArgs {
    #[command(flatten)]
    pub source: Source,
    #[command(flatten)]
    pub variant: Variant,
}

pub fn run(args: ResolveArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = WidgetConfig::load_or_default();
    let entry = args.source.visible_entry(&config, args.variant.at)?;
    let layout = args.variant.layout(&entry, &config)?;
    print_json(&layout)
}
