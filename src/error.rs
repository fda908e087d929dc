/// Convenient type alias of Result type for bitmap operations.
pub type Result<T> = std::result::Result<T, BitmapError>;

/// Errors returned by bitmap construction and strict-bounds access.
///
/// Out-of-range coordinates are normally remapped to pixel `(0, 0)` and never
/// reach this type; `OutOfBounds` only appears under [`BoundsPolicy::Strict`].
///
/// [`BoundsPolicy::Strict`]: crate::config::BoundsPolicy::Strict
#[non_exhaustive]
#[derive(thiserror::Error, Debug)]
pub enum BitmapError {
    /// The requested dimensions cannot be backed by an allocation.
    #[error("bitmap dimensions {width}x{height} are too large to allocate")]
    DimensionsTooLarge {
        /// Requested width after flooring
        width: f64,
        /// Requested height after flooring
        height: f64,
    },
    /// A coordinate fell outside the pixel grid.
    #[error("pixel ({x}, {y}) is outside the {width}x{height} grid")]
    OutOfBounds {
        /// Requested x coordinate
        x: f64,
        /// Requested y coordinate
        y: f64,
        /// Bitmap width
        width: usize,
        /// Bitmap height
        height: usize,
    },
    /// Image decoding failed.
    #[error(transparent)]
    Image(#[from] image::ImageError),
}
