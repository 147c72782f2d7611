//! App-to-widget control channel.
//!
//! The app talks to the native side over a single method channel. Only one
//! method is recognised; it asks the OS to show its widget-placement
//! surface. Nothing here touches timeline generation.

use serde::Serialize;

/// Method channel name shared with the app.
pub const CHANNEL_NAME: &str = "com.mango.app/widgets";

pub const OPEN_WIDGET_GALLERY: &str = "openWidgetGallery";

/// Error code reported when the placement surface cannot be opened at all.
pub const UNAVAILABLE: &str = "UNAVAILABLE";

/// Opens the OS widget-placement surface.
pub trait WidgetGallery {
    /// `None` when no surface can be opened, otherwise whether the OS
    /// reported success.
    fn open(&self) -> Option<bool>;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ChannelReply {
    Success { value: bool },
    Error { code: String, message: String },
    NotImplemented,
}

/// Dispatch one method call.
pub fn handle_call(method: &str, gallery: &impl WidgetGallery) -> ChannelReply {
    match method {
        OPEN_WIDGET_GALLERY => match gallery.open() {
            Some(value) => ChannelReply::Success { value },
            None => ChannelReply::Error {
                code: UNAVAILABLE.to_string(),
                message: "Cannot open settings".to_string(),
            },
        },
        other => {
            tracing::debug!(method = other, channel = CHANNEL_NAME, "method not implemented");
            ChannelReply::NotImplemented
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Gallery(Option<bool>);

    impl WidgetGallery for Gallery {
        fn open(&self) -> Option<bool> {
            self.0
        }
    }

    #[test]
    fn open_gallery_reports_outcome() {
        assert_eq!(
            handle_call(OPEN_WIDGET_GALLERY, &Gallery(Some(true))),
            ChannelReply::Success { value: true }
        );
        assert_eq!(
            handle_call(OPEN_WIDGET_GALLERY, &Gallery(Some(false))),
            ChannelReply::Success { value: false }
        );
    }

    #[test]
    fn unavailable_gallery_is_an_error() {
        match handle_call(OPEN_WIDGET_GALLERY, &Gallery(None)) {
            ChannelReply::Error { code, .. } => assert_eq!(code, UNAVAILABLE),
            other => panic!("unexpected reply {other:?}"),
        }
    }

    #[test]
    fn unknown_method_is_not_implemented() {
        assert_eq!(
            handle_call("reloadAllTimelines", &Gallery(Some(true))),
            ChannelReply::NotImplemented
        );
    }
}
