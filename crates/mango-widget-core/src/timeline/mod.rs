//! Timeline generation.
//!
//! This module provides:
//! - Parsing of the `|||`-delimited affirmation list
//! - Hourly timeline entries over a bounded horizon
//! - Refresh instructions telling the host what to show now and when to rebuild

mod builder;
mod entry;
mod parser;
mod refresh;

pub use builder::{Timeline, TimelineBuilder, DEFAULT_HORIZON_HOURS};
pub use entry::TimelineEntry;
pub use parser::{parse_affirmations, AFFIRMATION_DELIMITER};
pub use refresh::{next_refresh, RefreshInstruction};
