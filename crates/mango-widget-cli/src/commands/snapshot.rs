use clap::Args;
use mango_widget_core::store::ReadIssue;
use mango_widget_core::{StateSnapshot, WidgetConfig};
use serde::Serialize;

use super::{print_json, Source};

#[derive(Args, Debug)]
pub struct SnapshotArgs {
    #[command(flatten)]
    pub source: Source,
    /// Also list the keys that were missing or malformed
    #[arg(long)]
    pub explain: bool,
}

#[derive(Serialize)]
struct Explained<'a> {
    snapshot: &'a StateSnapshot,
    issues: &'a [ReadIssue],
}

pub fn run(args: SnapshotArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = WidgetConfig::load_or_default();
    let (snapshot, report) = args.source.snapshot(&config)?;

    if args.explain {
        print_json(&Explained {
            snapshot: &snapshot,
            issues: &report.issues,
        })
    } else {
        print_json(&snapshot)
    }
}
