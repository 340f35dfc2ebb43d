//! Overlay lifecycle notifications
//!
//! Overlays publish straight into the [`EventSink`] they were built with.
//! There is no global bus: whoever constructs an overlay decides where its
//! events go.

mod sink;

pub use sink::{ChannelSink, FanoutSink, NullSink, OverlayNotice, TracingSink};

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::overlay::Overlay;

/// What happened to an overlay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OverlayEventKind {
    /// The overlay became live
    Created,
    /// Attributes changed, shape did not
    Updated,
    /// Axis count or ordering changed
    Restructured,
    Deleted,
}

impl OverlayEventKind {
    /// Get the event kind name for metrics and logs
    pub fn as_str(self) -> &'static str {
        match self {
            OverlayEventKind::Created => "created",
            OverlayEventKind::Updated => "updated",
            OverlayEventKind::Restructured => "restructured",
            OverlayEventKind::Deleted => "deleted",
        }
    }
}

impl fmt::Display for OverlayEventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A notification about one overlay
#[derive(Debug, Clone, Copy)]
pub struct OverlayEvent<'a> {
    pub overlay: &'a Overlay,
    pub kind: OverlayEventKind,
}

impl OverlayEvent<'_> {
    pub fn overlay_id(&self) -> Uuid {
        self.overlay.id()
    }
}

/// Receiver of overlay lifecycle notifications.
///
/// `publish` is called synchronously from the overlay method that caused the
/// event, once per call, in call order.
pub trait EventSink: Send + Sync {
    fn publish(&self, event: &OverlayEvent<'_>);
}
