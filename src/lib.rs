//! mono_raster - packed 1-bit-per-pixel monochrome raster buffer
//!
//! Colors are `RRGGBBAA` values. Each write thresholds the color's BT.709
//! luminance (white at 200 and above) and stores a single bit; reads return
//! canonical black or white. Coordinates outside the grid address pixel
//! `(0, 0)` rather than failing.
//!
//! ```
//! use mono_raster::{PackedBitmap, WHITE, BLACK};
//!
//! let mut bitmap = PackedBitmap::new(10, 3);
//! assert_eq!(bitmap.byte_len(), 4);
//!
//! bitmap.set_pixel(4, 1, 0xFFFF_FF00u32);
//! assert_eq!(bitmap.get_pixel(4, 1), WHITE);
//! bitmap.set_pixel(4, 1, 0xFF00_0000u32);
//! assert_eq!(bitmap.get_pixel(4, 1), BLACK);
//! ```

#![warn(missing_docs)]
#![allow(clippy::missing_docs_in_private_items)]

/// Environment-driven settings (bounds policy, parallel cutoff)
pub mod config;
/// Drawing handle bound to a bitmap
pub mod context;
/// Error type and result alias
pub mod error;
/// Core data structures (PackedBitmap, Rgba, coordinates, raw views)
pub mod models;
/// Image file loading
pub mod tools;
/// Utility functions (luminance, thresholding)
pub mod utils;

pub use config::BoundsPolicy;
pub use context::DrawingContext;
pub use error::{BitmapError, Result};
pub use models::{
    BLACK, BitmapOptions, Coordinate, MonoPixel, PackedBitmap, RawChannels, RawChannelsMut, Rgba,
    TRANSPARENT, WHITE, decode_color,
};
pub use utils::luminance::{WHITE_THRESHOLD, luminance, to_monochrome};
pub use utils::threshold::{threshold_image, threshold_rgba};
