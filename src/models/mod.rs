pub mod bitmap;
pub mod color;
pub mod coord;
pub mod raw;

pub use bitmap::{BitmapOptions, MonoPixel, PackedBitmap};
pub use color::{BLACK, Rgba, TRANSPARENT, WHITE, decode_color};
pub use coord::Coordinate;
pub use raw::{RawChannels, RawChannelsMut};
