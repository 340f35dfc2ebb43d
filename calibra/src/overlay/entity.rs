//! The overlay entity: a calibrated annotation placed on an image display

use bytes::{Buf, BufMut, Bytes};
use indexmap::IndexMap;
use metrics::counter;
use std::fmt;
use std::io::{Read, Write};
use std::sync::{Arc, Weak};
use tracing::{debug, warn};
use uuid::Uuid;

use crate::event::{EventSink, OverlayEvent, OverlayEventKind};

use super::codec::{self, Externalizable, get_str, put_str};
use super::roi::RegionOfInterest;
use super::space::CalibratedSpace;
use super::style::{ArrowStyle, ColorRGB, LineStyle, OverlaySettings, SettingsProvider, Style};
use super::types::{AxisType, OverlayError, Result};

const ROI: &str = "region of interest";

/// Lifecycle of an overlay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecycleState {
    /// Constructed, not yet announced
    Unregistered,
    Active,
    /// Terminal
    Deleted,
}

/// Fields shared by every data object, written after the overlay's own
/// fields in the binary form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DataHeader {
    pub name: String,
}

impl Externalizable for DataHeader {
    fn write_external<B: BufMut>(&self, out: &mut B) {
        put_str(out, &self.name);
    }

    fn read_external<B: Buf>(input: &mut B) -> Result<Self> {
        Ok(Self {
            name: get_str(input, "name")?,
        })
    }
}

/// Complete binary record of an overlay: style, then base fields
#[derive(Debug, Clone, PartialEq)]
pub struct OverlayRecord {
    pub style: Style,
    pub header: DataHeader,
}

impl Externalizable for OverlayRecord {
    fn write_external<B: BufMut>(&self, out: &mut B) {
        self.style.write_external(out);
        self.header.write_external(out);
    }

    fn read_external<B: Buf>(input: &mut B) -> Result<Self> {
        let style = Style::read_external(input)?;
        let header = DataHeader::read_external(input)?;
        Ok(Self { style, header })
    }
}

/// Extent queries for overlays backed by a pixel grid.
///
/// Continuous overlays refuse every query with
/// [`OverlayError::UnsupportedOperation`].
pub trait DiscreteInterval {
    fn is_discrete(&self) -> bool;

    fn min(&self, d: usize) -> Result<i64>;

    fn max(&self, d: usize) -> Result<i64>;

    fn dimension(&self, d: usize) -> Result<u64>;

    fn min_into(&self, target: &mut [i64]) -> Result<()>;

    fn max_into(&self, target: &mut [i64]) -> Result<()>;

    fn dimensions_into(&self, target: &mut [u64]) -> Result<()>;
}

/// A user-placed annotation with per-axis calibration, a position within
/// the display space, and a visual style.
///
/// The overlay carries metadata only. Its geometry lives in an optional
/// [`RegionOfInterest`] owned elsewhere.
pub struct Overlay {
    id: Uuid,
    header: DataHeader,
    state: LifecycleState,
    positions: IndexMap<AxisType, i64>,
    space: CalibratedSpace,
    style: Style,
    roi: Option<Weak<dyn RegionOfInterest>>,
    events: Arc<dyn EventSink>,
}

impl Overlay {
    /// Create a planar overlay styled with the default settings
    pub fn new(events: Arc<dyn EventSink>) -> Self {
        Self::with_settings(events, &OverlaySettings::default())
    }

    /// Create a planar overlay styled from `settings`
    pub fn with_settings(events: Arc<dyn EventSink>, settings: &dyn SettingsProvider) -> Self {
        let overlay = Self {
            id: Uuid::new_v4(),
            header: DataHeader::default(),
            state: LifecycleState::Unregistered,
            positions: IndexMap::new(),
            space: CalibratedSpace::planar(),
            style: Style::from_settings(settings),
            roi: None,
            events,
        };
        debug!("Constructed overlay {}", overlay.id);
        overlay
    }

    /// Replace the calibrated space, e.g. for a volumetric overlay
    pub fn with_space(mut self, space: CalibratedSpace) -> Self {
        self.space = space;
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.header.name = name.into();
        self
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.header.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.header.name = name.into();
    }

    pub fn state(&self) -> LifecycleState {
        self.state
    }

    // -- Lifecycle --

    /// Announce the overlay as live. Only the first call has any effect.
    pub fn register(&mut self) {
        if self.state != LifecycleState::Unregistered {
            warn!(
                "Ignoring repeated registration of overlay {} ({:?})",
                self.id, self.state
            );
            return;
        }
        self.state = LifecycleState::Active;
        self.publish(OverlayEventKind::Created);
    }

    /// Notify that attributes changed without altering shape
    pub fn update(&self) {
        self.publish(OverlayEventKind::Updated);
    }

    /// Notify that the axis count or ordering changed
    pub fn rebuild(&self) {
        self.publish(OverlayEventKind::Restructured);
    }

    /// Mark the overlay deleted. Every call publishes; removing the overlay
    /// from any registry is up to the caller.
    pub fn delete(&mut self) {
        self.state = LifecycleState::Deleted;
        self.publish(OverlayEventKind::Deleted);
    }

    fn publish(&self, kind: OverlayEventKind) {
        if self.state == LifecycleState::Deleted && kind != OverlayEventKind::Deleted {
            warn!("Overlay {} is deleted but published {}", self.id, kind);
        }
        debug!("Overlay {} {}", self.id, kind);
        counter!("calibra_overlay_events_total", "kind" => kind.as_str()).increment(1);
        self.events.publish(&OverlayEvent {
            overlay: self,
            kind,
        });
    }

    // -- Position --

    /// Position along `axis`, if one was ever set
    pub fn position(&self, axis: &AxisType) -> Option<i64> {
        self.positions.get(axis).copied()
    }

    /// Set the position along any display axis, including axes this overlay
    /// has no extent in
    pub fn set_position(&mut self, axis: AxisType, position: i64) {
        self.positions.insert(axis, position);
    }

    /// Positions in the order their axes were first set
    pub fn positions(&self) -> impl Iterator<Item = (&AxisType, i64)> {
        self.positions.iter().map(|(axis, pos)| (axis, *pos))
    }

    // -- Calibrated space --

    pub fn num_dimensions(&self) -> usize {
        self.space.num_dimensions()
    }

    /// Slot of `axis`, -1 if absent
    pub fn axis_index(&self, axis: &AxisType) -> i32 {
        self.space.axis_index(axis)
    }

    pub fn axis(&self, d: usize) -> Result<&AxisType> {
        self.space.axis(d)
    }

    pub fn set_axis(&mut self, axis: AxisType, d: usize) -> Result<()> {
        self.space.set_axis(axis, d)
    }

    pub fn axes_into(&self, target: &mut [AxisType]) -> Result<()> {
        self.space.axes_into(target)
    }

    pub fn calibration(&self, d: usize) -> Result<f64> {
        self.space.calibration(d)
    }

    pub fn set_calibration(&mut self, value: f64, d: usize) -> Result<()> {
        self.space.set_calibration(value, d)
    }

    pub fn calibration_into(&self, target: &mut [f64]) -> Result<()> {
        self.space.calibration_into(target)
    }

    pub fn space(&self) -> &CalibratedSpace {
        &self.space
    }

    // -- Region of interest --

    /// Attach a region of interest. Only a weak reference is kept.
    pub fn attach_region_of_interest<R: RegionOfInterest + 'static>(&mut self, roi: &Arc<R>) {
        let weak: Weak<R> = Arc::downgrade(roi);
        self.roi = Some(weak as Weak<dyn RegionOfInterest>);
    }

    pub fn detach_region_of_interest(&mut self) {
        self.roi = None;
    }

    /// The attached region, if it is still alive
    pub fn region_of_interest(&self) -> Option<Arc<dyn RegionOfInterest>> {
        self.roi.as_ref().and_then(Weak::upgrade)
    }

    pub fn real_min(&self, d: usize) -> Result<f64> {
        let roi = self.live_roi()?;
        check_roi_index(&*roi, d)?;
        Ok(roi.real_min(d))
    }

    pub fn real_max(&self, d: usize) -> Result<f64> {
        let roi = self.live_roi()?;
        check_roi_index(&*roi, d)?;
        Ok(roi.real_max(d))
    }

    pub fn real_min_into(&self, target: &mut [f64]) -> Result<()> {
        self.fill_from_roi(target, |roi, d| roi.real_min(d))
    }

    pub fn real_max_into(&self, target: &mut [f64]) -> Result<()> {
        self.fill_from_roi(target, |roi, d| roi.real_max(d))
    }

    fn live_roi(&self) -> Result<Arc<dyn RegionOfInterest>> {
        self.region_of_interest()
            .ok_or(OverlayError::MissingCollaborator(ROI))
    }

    fn fill_from_roi(
        &self,
        target: &mut [f64],
        extent: impl Fn(&dyn RegionOfInterest, usize) -> f64,
    ) -> Result<()> {
        let roi = self.live_roi()?;
        if let Some(last) = target.len().checked_sub(1) {
            check_roi_index(&*roi, last)?;
        }
        for (d, slot) in target.iter_mut().enumerate() {
            *slot = extent(&*roi, d);
        }
        Ok(())
    }

    // -- Style --

    pub fn style(&self) -> &Style {
        &self.style
    }

    pub fn set_style(&mut self, style: Style) {
        self.style = style;
    }

    pub fn alpha(&self) -> i32 {
        self.style.alpha
    }

    pub fn set_alpha(&mut self, alpha: i32) {
        self.style.alpha = alpha;
    }

    pub fn fill_color(&self) -> ColorRGB {
        self.style.fill_color
    }

    pub fn set_fill_color(&mut self, color: ColorRGB) {
        self.style.fill_color = color;
    }

    pub fn line_color(&self) -> ColorRGB {
        self.style.line_color
    }

    pub fn set_line_color(&mut self, color: ColorRGB) {
        self.style.line_color = color;
    }

    pub fn line_width(&self) -> f64 {
        self.style.line_width
    }

    pub fn set_line_width(&mut self, width: f64) {
        self.style.line_width = width;
    }

    pub fn line_style(&self) -> LineStyle {
        self.style.line_style
    }

    pub fn set_line_style(&mut self, style: LineStyle) {
        self.style.line_style = style;
    }

    pub fn start_arrow_style(&self) -> ArrowStyle {
        self.style.start_arrow_style
    }

    pub fn set_start_arrow_style(&mut self, style: ArrowStyle) {
        self.style.start_arrow_style = style;
    }

    pub fn end_arrow_style(&self) -> ArrowStyle {
        self.style.end_arrow_style
    }

    pub fn set_end_arrow_style(&mut self, style: ArrowStyle) {
        self.style.end_arrow_style = style;
    }

    // -- Binary form --

    pub fn record(&self) -> OverlayRecord {
        OverlayRecord {
            style: self.style,
            header: self.header.clone(),
        }
    }

    pub fn write_external<B: BufMut>(&self, out: &mut B) {
        self.style.write_external(out);
        self.header.write_external(out);
    }

    /// Read style and base fields from `input`. On error nothing is changed.
    pub fn read_external<B: Buf>(&mut self, input: &mut B) -> Result<()> {
        let record = OverlayRecord::read_external(input)?;
        self.apply_record(record);
        Ok(())
    }

    pub fn to_bytes(&self) -> Bytes {
        codec::encode(&self.record())
    }

    /// Like [`Overlay::read_external`], but `data` must hold exactly one record
    pub fn load_bytes(&mut self, data: &[u8]) -> Result<()> {
        let record: OverlayRecord = codec::decode(data)?;
        self.apply_record(record);
        Ok(())
    }

    /// Write the binary record to `writer`
    pub fn write_to<W: Write>(&self, mut writer: W) -> Result<()> {
        writer.write_all(&self.to_bytes())?;
        writer.flush()?;
        Ok(())
    }

    /// Read `reader` to its end and load the single record it holds
    pub fn load_from<R: Read>(&mut self, mut reader: R) -> Result<()> {
        let mut data = Vec::new();
        reader.read_to_end(&mut data)?;
        self.load_bytes(&data)
    }

    fn apply_record(&mut self, record: OverlayRecord) {
        self.style = record.style;
        self.header = record.header;
    }
}

fn check_roi_index(roi: &dyn RegionOfInterest, d: usize) -> Result<()> {
    let dimensions = roi.num_dimensions();
    if d < dimensions {
        Ok(())
    } else {
        Err(OverlayError::IndexOutOfRange {
            index: d,
            dimensions,
        })
    }
}

impl DiscreteInterval for Overlay {
    fn is_discrete(&self) -> bool {
        false
    }

    fn min(&self, _d: usize) -> Result<i64> {
        Err(OverlayError::UnsupportedOperation("min"))
    }

    fn max(&self, _d: usize) -> Result<i64> {
        Err(OverlayError::UnsupportedOperation("max"))
    }

    fn dimension(&self, _d: usize) -> Result<u64> {
        Err(OverlayError::UnsupportedOperation("dimension"))
    }

    fn min_into(&self, _target: &mut [i64]) -> Result<()> {
        Err(OverlayError::UnsupportedOperation("min"))
    }

    fn max_into(&self, _target: &mut [i64]) -> Result<()> {
        Err(OverlayError::UnsupportedOperation("max"))
    }

    fn dimensions_into(&self, _target: &mut [u64]) -> Result<()> {
        Err(OverlayError::UnsupportedOperation("dimensions"))
    }
}

impl fmt::Debug for Overlay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Overlay")
            .field("id", &self.id)
            .field("name", &self.header.name)
            .field("state", &self.state)
            .field("positions", &self.positions)
            .field("space", &self.space)
            .field("style", &self.style)
            .field("roi_attached", &self.region_of_interest().is_some())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{FixedRoi, RecordingSink, recording_overlay};

    #[test]
    fn test_new_overlay_is_planar() {
        let (overlay, _) = recording_overlay();
        assert_eq!(overlay.num_dimensions(), 2);
        assert_eq!(overlay.axis(0).unwrap(), &AxisType::X);
        assert_eq!(overlay.axis(1).unwrap(), &AxisType::Y);
        assert_eq!(overlay.calibration(0).unwrap(), 1.0);
        assert_eq!(overlay.calibration(1).unwrap(), 1.0);
        assert_eq!(overlay.state(), LifecycleState::Unregistered);
        assert_eq!(overlay.style(), &Style::default());
    }

    #[test]
    fn test_construction_publishes_nothing() {
        let (_overlay, sink) = recording_overlay();
        assert!(sink.is_empty());
    }

    #[test]
    fn test_set_axis_and_calibration() {
        let (mut overlay, _) = recording_overlay();
        overlay.set_axis(AxisType::Z, 1).unwrap();
        overlay.set_calibration(0.65, 0).unwrap();

        assert_eq!(overlay.axis(1).unwrap(), &AxisType::Z);
        assert_eq!(overlay.calibration(0).unwrap(), 0.65);
        assert_eq!(overlay.axis_index(&AxisType::Z), 1);
        assert_eq!(overlay.axis_index(&AxisType::Y), -1);
    }

    #[test]
    fn test_axis_index_out_of_range() {
        let (mut overlay, _) = recording_overlay();
        assert!(matches!(
            overlay.axis(2),
            Err(OverlayError::IndexOutOfRange { index: 2, .. })
        ));
        assert!(overlay.set_axis(AxisType::Z, 2).is_err());
        assert!(overlay.calibration(5).is_err());
        assert!(overlay.set_calibration(1.0, 2).is_err());
    }

    #[test]
    fn test_positions_track_foreign_axes() {
        let (mut overlay, _) = recording_overlay();
        assert_eq!(overlay.position(&AxisType::Z), None);

        overlay.set_position(AxisType::Z, 5);
        overlay.set_position(AxisType::Time, 2);
        overlay.set_position(AxisType::Z, 7);

        assert_eq!(overlay.position(&AxisType::Z), Some(7));
        assert_eq!(overlay.position(&AxisType::Channel), None);
        assert_eq!(overlay.axis_index(&AxisType::Z), -1);

        let order: Vec<_> = overlay.positions().map(|(axis, _)| axis.clone()).collect();
        assert_eq!(order, vec![AxisType::Z, AxisType::Time]);
    }

    #[test]
    fn test_discrete_queries_unsupported() {
        let (overlay, _) = recording_overlay();
        assert!(!overlay.is_discrete());
        assert!(matches!(
            overlay.min(0),
            Err(OverlayError::UnsupportedOperation("min"))
        ));
        assert!(matches!(
            overlay.max(1),
            Err(OverlayError::UnsupportedOperation(_))
        ));
        assert!(overlay.dimension(0).is_err());
        assert!(overlay.min_into(&mut [0i64; 0]).is_err());
        assert!(overlay.max_into(&mut [0; 2]).is_err());
        assert!(overlay.dimensions_into(&mut [0; 2]).is_err());
    }

    #[test]
    fn test_real_extent_delegates_to_roi() {
        let (mut overlay, _) = recording_overlay();
        assert!(matches!(
            overlay.real_min(0),
            Err(OverlayError::MissingCollaborator(_))
        ));

        let roi = Arc::new(FixedRoi::new(vec![-1.0, 0.0], vec![3.0, 4.0]));
        overlay.attach_region_of_interest(&roi);
        assert_eq!(overlay.real_min(0).unwrap(), -1.0);
        assert_eq!(overlay.real_max(0).unwrap(), 3.0);

        let mut max = [0.0; 2];
        overlay.real_max_into(&mut max).unwrap();
        assert_eq!(max, [3.0, 4.0]);
        assert!(overlay.real_min(2).is_err());

        overlay.detach_region_of_interest();
        assert!(matches!(
            overlay.real_max(0),
            Err(OverlayError::MissingCollaborator(_))
        ));
    }

    #[test]
    fn test_dropped_roi_counts_as_missing() {
        let (mut overlay, _) = recording_overlay();
        let roi = Arc::new(FixedRoi::new(vec![1.0], vec![2.0]));
        overlay.attach_region_of_interest(&roi);
        assert!(overlay.real_min(0).is_ok());

        drop(roi);
        assert!(overlay.region_of_interest().is_none());
        assert!(matches!(
            overlay.real_min_into(&mut [0.0]),
            Err(OverlayError::MissingCollaborator(_))
        ));
    }

    #[test]
    fn test_style_setters_store_without_validation() {
        let (mut overlay, sink) = recording_overlay();
        overlay.set_alpha(-20);
        overlay.set_line_width(-3.0);
        overlay.set_fill_color(ColorRGB::BLACK);
        overlay.set_line_color(ColorRGB::WHITE);
        overlay.set_line_style(LineStyle::DotDash);
        overlay.set_start_arrow_style(ArrowStyle::Arrow);
        overlay.set_end_arrow_style(ArrowStyle::Arrow);

        assert_eq!(overlay.alpha(), -20);
        assert_eq!(overlay.line_width(), -3.0);
        assert_eq!(overlay.fill_color(), ColorRGB::BLACK);
        assert_eq!(overlay.line_color(), ColorRGB::WHITE);
        assert_eq!(overlay.line_style(), LineStyle::DotDash);
        assert_eq!(overlay.start_arrow_style(), ArrowStyle::Arrow);
        assert_eq!(overlay.end_arrow_style(), ArrowStyle::Arrow);
        // setters never notify on their own
        assert!(sink.is_empty());
    }

    #[test]
    fn test_lifecycle_event_counts() {
        let (mut overlay, sink) = recording_overlay();

        overlay.register();
        overlay.update();
        overlay.update();
        overlay.rebuild();
        assert_eq!(overlay.state(), LifecycleState::Active);

        overlay.delete();
        assert_eq!(overlay.state(), LifecycleState::Deleted);
        overlay.delete();

        assert_eq!(
            sink.kinds(),
            vec![
                OverlayEventKind::Created,
                OverlayEventKind::Updated,
                OverlayEventKind::Updated,
                OverlayEventKind::Restructured,
                OverlayEventKind::Deleted,
                OverlayEventKind::Deleted,
            ]
        );
        assert!(sink.ids().iter().all(|id| *id == overlay.id()));
    }

    #[test]
    fn test_register_only_once() {
        let (mut overlay, sink) = recording_overlay();
        overlay.register();
        overlay.register();
        assert_eq!(sink.count(OverlayEventKind::Created), 1);
    }

    #[test]
    fn test_register_after_delete_is_ignored() {
        let sink = Arc::new(RecordingSink::new());
        let mut overlay = Overlay::new(sink.clone());
        overlay.delete();
        overlay.register();
        assert_eq!(overlay.state(), LifecycleState::Deleted);
        assert_eq!(sink.kinds(), vec![OverlayEventKind::Deleted]);
    }

    #[test]
    fn test_binary_round_trip_through_overlay() {
        let (mut source, _) = recording_overlay();
        source.set_name("membrane");
        source.set_alpha(128);
        source.set_line_width(2.5);
        source.set_line_style(LineStyle::Dash);

        let bytes = source.to_bytes();
        let (mut target, _) = recording_overlay();
        target.load_bytes(&bytes).unwrap();

        assert_eq!(target.name(), "membrane");
        assert_eq!(target.style(), source.style());
        assert_ne!(target.id(), source.id());
    }

    #[test]
    fn test_failed_decode_leaves_overlay_untouched() {
        let (mut source, _) = recording_overlay();
        source.set_name("kept");
        source.set_alpha(99);
        let bytes = source.to_bytes();

        let (mut target, _) = recording_overlay();
        target.set_name("existing");
        let before = target.record();

        let err = target.load_bytes(&bytes[..bytes.len() - 1]).unwrap_err();
        assert!(matches!(err, OverlayError::InvalidFormat(_)));
        assert_eq!(target.record(), before);
    }

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    impl Read for BrokenPipe {
        fn read(&mut self, _buf: &mut [u8]) -> std::io::Result<usize> {
            Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed"))
        }
    }

    #[test]
    fn test_write_to_and_load_from_stream() {
        let (mut source, _) = recording_overlay();
        source.set_name("nucleus");
        source.set_line_style(LineStyle::Dot);

        let mut file = Vec::new();
        source.write_to(&mut file).unwrap();
        assert_eq!(file, &source.to_bytes()[..]);

        let (mut target, _) = recording_overlay();
        target.load_from(file.as_slice()).unwrap();
        assert_eq!(target.record(), source.record());
    }

    #[test]
    fn test_stream_failures_surface_as_io_errors() {
        let (mut overlay, _) = recording_overlay();
        overlay.set_name("kept");
        let before = overlay.record();

        assert!(matches!(
            overlay.write_to(BrokenPipe),
            Err(OverlayError::Io(e)) if e.kind() == std::io::ErrorKind::BrokenPipe
        ));
        assert!(matches!(overlay.load_from(BrokenPipe), Err(OverlayError::Io(_))));
        assert_eq!(overlay.record(), before);
    }

    #[derive(Debug)]
    struct UnitSquare;

    impl RegionOfInterest for UnitSquare {
        fn num_dimensions(&self) -> usize {
            2
        }

        fn real_min(&self, _d: usize) -> f64 {
            0.0
        }

        fn real_max(&self, _d: usize) -> f64 {
            1.0
        }
    }

    #[test]
    fn test_attach_accepts_any_concrete_region() {
        let (mut overlay, _) = recording_overlay();
        let square = Arc::new(UnitSquare);
        overlay.attach_region_of_interest(&square);
        assert_eq!(overlay.real_max(1).unwrap(), 1.0);

        let fixed = Arc::new(FixedRoi::new(vec![2.0, 3.0], vec![4.0, 5.0]));
        overlay.attach_region_of_interest(&fixed);
        assert_eq!(overlay.real_min(1).unwrap(), 3.0);
        assert_eq!(Arc::strong_count(&square), 1);
        assert_eq!(Arc::weak_count(&square), 0);
    }

    #[test]
    fn test_volumetric_space() {
        let space = CalibratedSpace::with_calibration([
            (AxisType::X, 0.2),
            (AxisType::Y, 0.2),
            (AxisType::Z, 1.5),
        ]);
        let (overlay, _) = recording_overlay();
        let overlay = overlay.with_space(space);

        assert_eq!(overlay.num_dimensions(), 3);
        assert_eq!(overlay.calibration(2).unwrap(), 1.5);
        let mut axes = [AxisType::Unknown, AxisType::Unknown, AxisType::Unknown];
        overlay.axes_into(&mut axes).unwrap();
        assert_eq!(axes, [AxisType::X, AxisType::Y, AxisType::Z]);
    }
}
