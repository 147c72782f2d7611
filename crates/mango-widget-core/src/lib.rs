//! # Mango Widget Core Library
//!
//! This library provides the timeline and presentation logic behind the
//! Mango affirmation widgets. The companion app writes its state into a
//! shared key-value store; the widget side reads one snapshot per
//! generation cycle, plans a short hourly timeline of affirmations and
//! resolves each entry into a platform-neutral layout.
//!
//! ## Architecture
//!
//! - **Store**: Read-only snapshot of the shared key-value store with
//!   per-field defaults, so reading never fails
//! - **Timeline**: Affirmation list parsing, hourly entries over a bounded
//!   horizon and refresh instructions for the host
//! - **Layout**: Theme and display-class tables combined into a
//!   [`LayoutDescriptor`]
//! - **Render**: Thin adapters from a descriptor to a WidgetKit or
//!   AppWidget description
//!
//! ## Key Components
//!
//! - [`StateSnapshot`]: One consistent read of the shared store
//! - [`TimelineBuilder`]: Hourly timeline generation
//! - [`resolve`]: Presentation-variant resolution
//! - [`WidgetConfig`]: Preview and generation configuration

pub mod channel;
pub mod config;
pub mod error;
pub mod layout;
pub mod render;
pub mod store;
pub mod timeline;
pub mod widgets;

pub use channel::{handle_call, ChannelReply, WidgetGallery};
pub use config::WidgetConfig;
pub use error::{ConfigError, CoreError, StoreError};
pub use layout::{resolve, resolve_host, DisplayClass, LayoutDescriptor, Theme};
pub use render::{renderer_for, Platform, RendererAdapter, VisualDescription};
pub use store::{MemoryStore, ReadReport, SharedStore, StateSnapshot, StoreValue};
pub use timeline::{RefreshInstruction, Timeline, TimelineBuilder, TimelineEntry};
pub use widgets::WidgetKind;
