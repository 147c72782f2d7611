use chrono::{DateTime, Utc};
use clap::Args;
use mango_widget_core::WidgetConfig;

use super::{parse_instant, print_json, Source};

#[derive(Args, Debug)]
pub struct TimelineArgs {
    #[command(flatten)]
    pub source: Source,
    /// Hours to plan ahead (defaults to the config)
    #[arg(long)]
    pub horizon: Option<u32>,
    /// Print the refresh instruction for this instant instead of the entries
    #[arg(long, value_parser = parse_instant)]
    pub at: Option<DateTime<Utc>>,
}

pub fn run(args: TimelineArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = WidgetConfig::load_or_default();
    let timeline = args.source.timeline(&config, args.horizon)?;

    match args.at {
        Some(at) => print_json(&timeline.refresh_instruction(at)),
        None => print_json(&timeline),
    }
}
