//! Test Utilities Module
//!
//! Fixtures shared by the unit tests. Only compiled when running tests.

#![cfg(test)]

use std::sync::{Arc, Mutex};
use uuid::Uuid;

use crate::event::{EventSink, OverlayEvent, OverlayEventKind};
use crate::overlay::{Overlay, RegionOfInterest};

// ============================================================================
// Event recording
// ============================================================================

/// Sink that remembers every event it receives
#[derive(Debug, Default)]
pub struct RecordingSink {
    events: Mutex<Vec<(Uuid, OverlayEventKind)>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn kinds(&self) -> Vec<OverlayEventKind> {
        self.events.lock().unwrap().iter().map(|(_, k)| *k).collect()
    }

    pub fn ids(&self) -> Vec<Uuid> {
        self.events.lock().unwrap().iter().map(|(id, _)| *id).collect()
    }

    pub fn count(&self, kind: OverlayEventKind) -> usize {
        self.kinds().into_iter().filter(|k| *k == kind).count()
    }

    pub fn is_empty(&self) -> bool {
        self.events.lock().unwrap().is_empty()
    }
}

impl EventSink for RecordingSink {
    fn publish(&self, event: &OverlayEvent<'_>) {
        self.events
            .lock()
            .unwrap()
            .push((event.overlay_id(), event.kind));
    }
}

/// A default overlay wired to a fresh recording sink
pub fn recording_overlay() -> (Overlay, Arc<RecordingSink>) {
    let sink = Arc::new(RecordingSink::new());
    (Overlay::new(sink.clone()), sink)
}

// ============================================================================
// Geometry
// ============================================================================

/// Region with fixed bounds per dimension
#[derive(Debug, Clone)]
pub struct FixedRoi {
    min: Vec<f64>,
    max: Vec<f64>,
}

impl FixedRoi {
    pub fn new(min: Vec<f64>, max: Vec<f64>) -> Self {
        assert_eq!(min.len(), max.len(), "bounds must have equal length");
        Self { min, max }
    }
}

impl RegionOfInterest for FixedRoi {
    fn num_dimensions(&self) -> usize {
        self.min.len()
    }

    fn real_min(&self, d: usize) -> f64 {
        self.min[d]
    }

    fn real_max(&self, d: usize) -> f64 {
        self.max[d]
    }
}
