pub mod config;
pub mod render;
pub mod resolve;
pub mod snapshot;
pub mod timeline;
pub mod widgets;

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use clap::Args;
use mango_widget_core::{
    MemoryStore, ReadReport, StateSnapshot, Timeline, TimelineEntry, WidgetConfig,
};

/// Where the store comes from and which instant to plan for.
#[derive(Args, Debug, Clone)]
pub struct Source {
    /// JSON object file standing in for the shared store
    /// (defaults to `store.snapshot_path` from the config)
    #[arg(long)]
    pub store: Option<PathBuf>,
    /// Generation instant in RFC 3339 (defaults to the current time)
    #[arg(long, value_parser = parse_instant)]
    pub now: Option<DateTime<Utc>>,
}

impl Source {
    pub fn now(&self) -> DateTime<Utc> {
        self.now.unwrap_or_else(Utc::now)
    }

    /// Read a snapshot from the chosen fixture, or from an empty store
    /// when none is configured.
    pub fn snapshot(
        &self,
        config: &WidgetConfig,
    ) -> Result<(StateSnapshot, ReadReport), Box<dyn std::error::Error>> {
        let path = self
            .store
            .clone()
            .or_else(|| config.store.snapshot_path.as_ref().map(PathBuf::from));

        let store = match path {
            Some(path) => {
                tracing::debug!(path = %path.display(), "loading store fixture");
                MemoryStore::load(&path)?
            }
            None => {
                tracing::debug!(
                    app_group = %config.store.app_group,
                    "no store fixture, reading empty store"
                );
                MemoryStore::new()
            }
        };
        Ok(StateSnapshot::read_with_report(&store))
    }

    /// Build a timeline with the configured horizon, optionally overridden.
    pub fn timeline(
        &self,
        config: &WidgetConfig,
        horizon: Option<u32>,
    ) -> Result<Timeline, Box<dyn std::error::Error>> {
        let (snapshot, _) = self.snapshot(config)?;
        let mut builder = config.timeline_builder();
        if let Some(hours) = horizon {
            builder = builder.with_horizon(hours);
        }
        Ok(builder.build(&snapshot, self.now()))
    }

    /// The entry the host would show at `at` (or at the generation instant).
    pub fn visible_entry(
        &self,
        config: &WidgetConfig,
        at: Option<DateTime<Utc>>,
    ) -> Result<TimelineEntry, Box<dyn std::error::Error>> {
        let timeline = self.timeline(config, None)?;
        let at = at.unwrap_or_else(|| self.now());
        Ok(timeline.refresh_instruction(at).visible_now)
    }
}

pub fn parse_instant(value: &str) -> Result<DateTime<Utc>, String> {
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| format!("invalid RFC 3339 instant '{value}': {e}"))
}

pub fn print_json<T: serde::Serialize>(value: &T) -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
