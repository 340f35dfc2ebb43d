//! Geometry collaborator consumed by overlays

/// Region of interest supplying the real-valued extent of an overlay.
///
/// Overlays only hold a weak reference; whoever builds the region keeps it
/// alive.
pub trait RegionOfInterest: Send + Sync {
    fn num_dimensions(&self) -> usize;

    /// Lower bound along dimension `d`
    fn real_min(&self, d: usize) -> f64;

    /// Upper bound along dimension `d`
    fn real_max(&self, d: usize) -> f64;
}
