use clap::Subcommand;
use mango_widget_core::{DisplayClass, Theme, WidgetKind};
use serde::Serialize;

#[derive(Subcommand)]
pub enum WidgetsAction {
    /// List the widgets the extension registers
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show which display class a widget renders for a host family
    Family {
        /// Widget kind or short name (e.g. StreakWidget, ocean)
        widget: String,
        /// Host family (e.g. systemSmall, accessoryInline)
        family: String,
    },
}

#[derive(Serialize)]
struct CatalogRow {
    kind: &'static str,
    name: &'static str,
    description: &'static str,
    theme: Theme,
    families: &'static [DisplayClass],
}

pub fn run(action: WidgetsAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        WidgetsAction::List { json } => {
            if json {
                let rows: Vec<CatalogRow> = WidgetKind::ALL
                    .into_iter()
                    .map(|w| CatalogRow {
                        kind: w.kind(),
                        name: w.display_name(),
                        description: w.description(),
                        theme: w.theme(),
                        families: w.supported_classes(),
                    })
                    .collect();
                println!("{}", serde_json::to_string_pretty(&rows)?);
            } else {
                for widget in WidgetKind::ALL {
                    let families: Vec<&str> = widget
                        .supported_classes()
                        .iter()
                        .map(|c| c.as_str())
                        .collect();
                    println!(
                        "{:<14} {:<14} [{}] {}",
                        widget.kind(),
                        widget.display_name(),
                        families.join(", "),
                        widget.description()
                    );
                }
            }
        }
        WidgetsAction::Family { widget, family } => {
            let kind = WidgetKind::parse(&widget).ok_or_else(|| format!("unknown widget: {widget}"))?;
            let class = kind.display_class_for(DisplayClass::from_host(&family));
            println!("{class}");
        }
    }
    Ok(())
}
