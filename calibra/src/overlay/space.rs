//! Calibrated space: ordered axes with one calibration factor per axis
//!
//! The axis and calibration lists are allocated together at construction and
//! never change length afterwards. Slots are replaced one at a time.

use super::types::{AxisType, OverlayError, Result};

/// Index-aligned axis and calibration lists
#[derive(Debug, Clone, PartialEq)]
pub struct CalibratedSpace {
    axes: Box<[AxisType]>,
    calibration: Box<[f64]>,
}

impl Default for CalibratedSpace {
    fn default() -> Self {
        Self::planar()
    }
}

impl CalibratedSpace {
    /// Two-dimensional XY space with unit calibration
    pub fn planar() -> Self {
        Self::new([AxisType::X, AxisType::Y])
    }

    /// Space over the given axes, each calibrated at 1.0
    pub fn new(axes: impl IntoIterator<Item = AxisType>) -> Self {
        Self::with_calibration(axes.into_iter().map(|axis| (axis, 1.0)))
    }

    /// Space from explicit (axis, calibration) pairs
    pub fn with_calibration(slots: impl IntoIterator<Item = (AxisType, f64)>) -> Self {
        let (axes, calibration): (Vec<_>, Vec<_>) = slots.into_iter().unzip();
        Self {
            axes: axes.into_boxed_slice(),
            calibration: calibration.into_boxed_slice(),
        }
    }

    pub fn num_dimensions(&self) -> usize {
        self.axes.len()
    }

    /// Slot of `axis`, or -1 when the space does not contain it
    pub fn axis_index(&self, axis: &AxisType) -> i32 {
        self.axes
            .iter()
            .position(|a| a == axis)
            .map_or(-1, |i| i as i32)
    }

    pub fn axis(&self, d: usize) -> Result<&AxisType> {
        self.check(d)?;
        Ok(&self.axes[d])
    }

    pub fn set_axis(&mut self, axis: AxisType, d: usize) -> Result<()> {
        self.check(d)?;
        self.axes[d] = axis;
        Ok(())
    }

    pub fn calibration(&self, d: usize) -> Result<f64> {
        self.check(d)?;
        Ok(self.calibration[d])
    }

    pub fn set_calibration(&mut self, value: f64, d: usize) -> Result<()> {
        self.check(d)?;
        self.calibration[d] = value;
        Ok(())
    }

    /// Copy the leading `target.len()` axes into `target`
    pub fn axes_into(&self, target: &mut [AxisType]) -> Result<()> {
        self.check_len(target.len())?;
        target.clone_from_slice(&self.axes[..target.len()]);
        Ok(())
    }

    /// Copy the leading `target.len()` calibration factors into `target`
    pub fn calibration_into(&self, target: &mut [f64]) -> Result<()> {
        self.check_len(target.len())?;
        target.copy_from_slice(&self.calibration[..target.len()]);
        Ok(())
    }

    pub fn axes(&self) -> &[AxisType] {
        &self.axes
    }

    pub fn calibrations(&self) -> &[f64] {
        &self.calibration
    }

    fn check(&self, d: usize) -> Result<()> {
        if d < self.num_dimensions() {
            Ok(())
        } else {
            Err(OverlayError::IndexOutOfRange {
                index: d,
                dimensions: self.num_dimensions(),
            })
        }
    }

    fn check_len(&self, len: usize) -> Result<()> {
        match len.checked_sub(1) {
            Some(last) => self.check(last),
            None => Ok(()),
        }
    }
}
