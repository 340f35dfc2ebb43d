//! Common Test Utilities for Integration Tests
//!
//! Shared helpers used across integration test modules.

#![allow(dead_code)]

use calibra::overlay::RegionOfInterest;
use calibra::{EventSink, Overlay, OverlayEvent, OverlayEventKind};
use std::sync::{Arc, Mutex};
use uuid::Uuid;

/// Event sink that records every publish for later inspection
#[derive(Debug, Default)]
pub struct RecordingSink {
    events: Mutex<Vec<(Uuid, OverlayEventKind)>>,
}

impl RecordingSink {
    pub fn count(&self, kind: OverlayEventKind) -> usize {
        self.events
            .lock()
            .unwrap()
            .iter()
            .filter(|(_, k)| *k == kind)
            .count()
    }

    pub fn total(&self) -> usize {
        self.events.lock().unwrap().len()
    }

    pub fn events(&self) -> Vec<(Uuid, OverlayEventKind)> {
        self.events.lock().unwrap().clone()
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

/// Create an overlay with default settings and a recording sink
pub fn create_test_overlay() -> (Overlay, Arc<RecordingSink>) {
    let sink = Arc::new(RecordingSink::default());
    (Overlay::new(sink.clone()), sink)
}

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

    /// Shared planar box, ready to attach
    pub fn planar(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Arc<Self> {
        Arc::new(Self::new(vec![min_x, min_y], vec![max_x, max_y]))
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
