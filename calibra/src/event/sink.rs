//! Stock event sinks

use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{debug, info};
use uuid::Uuid;

use super::{EventSink, OverlayEvent, OverlayEventKind};

/// Discards every event
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl EventSink for NullSink {
    fn publish(&self, _event: &OverlayEvent<'_>) {}
}

/// Logs every event through `tracing`
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl EventSink for TracingSink {
    fn publish(&self, event: &OverlayEvent<'_>) {
        info!(
            "Overlay {} ({:?}) {}",
            event.overlay_id(),
            event.overlay.name(),
            event.kind
        );
    }
}

/// Owned summary of an event, safe to move across tasks
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverlayNotice {
    pub overlay_id: Uuid,
    pub name: String,
    pub kind: OverlayEventKind,
}

impl From<&OverlayEvent<'_>> for OverlayNotice {
    fn from(event: &OverlayEvent<'_>) -> Self {
        Self {
            overlay_id: event.overlay_id(),
            name: event.overlay.name().to_string(),
            kind: event.kind,
        }
    }
}

/// Forwards events to an async consumer over an unbounded channel.
///
/// Sending never blocks, so the publishing overlay is not held up by a slow
/// receiver.
#[derive(Debug, Clone)]
pub struct ChannelSink {
    tx: mpsc::UnboundedSender<OverlayNotice>,
}

impl ChannelSink {
    pub fn new() -> (Self, mpsc::UnboundedReceiver<OverlayNotice>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }
}

impl EventSink for ChannelSink {
    fn publish(&self, event: &OverlayEvent<'_>) {
        if self.tx.send(OverlayNotice::from(event)).is_err() {
            debug!(
                "Dropping {} event for overlay {}: receiver closed",
                event.kind,
                event.overlay_id()
            );
        }
    }
}

/// Publishes each event to several sinks, in registration order
#[derive(Default, Clone)]
pub struct FanoutSink {
    sinks: Vec<Arc<dyn EventSink>>,
}

impl FanoutSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, sink: Arc<dyn EventSink>) -> Self {
        self.sinks.push(sink);
        self
    }

    pub fn len(&self) -> usize {
        self.sinks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sinks.is_empty()
    }
}

impl std::fmt::Debug for FanoutSink {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FanoutSink")
            .field("sinks", &self.sinks.len())
            .finish()
    }
}

impl EventSink for FanoutSink {
    fn publish(&self, event: &OverlayEvent<'_>) {
        for sink in &self.sinks {
            sink.publish(event);
        }
    }
}
