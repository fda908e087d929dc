use crate::config::{self, BoundsPolicy};
use crate::context::DrawingContext;
use crate::error::{BitmapError, Result};
use crate::models::color::{BLACK, Rgba, TRANSPARENT, WHITE, decode_color};
use crate::models::coord::Coordinate;
use crate::models::raw::{RawChannels, RawChannelsMut};
use crate::utils::luminance::to_monochrome;

/// State of a single stored bit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum MonoPixel {
    /// Bit `0`
    Black = 0,
    /// Bit `1`
    White = 1,
}

impl MonoPixel {
    /// Interpret a raw bit
    #[inline]
    pub fn from_bit(bit: bool) -> Self {
        if bit { Self::White } else { Self::Black }
    }

    /// Threshold an `RRGGBBAA` color
    #[inline]
    pub fn from_rgba(color: Rgba) -> Self {
        let (r, g, b) = decode_color(color.0);
        to_monochrome(r, g, b)
    }

    /// Whether the bit is set
    #[inline]
    pub fn is_white(self) -> bool {
        self == Self::White
    }

    /// Canonical color for this bit
    #[inline]
    pub fn to_rgba(self) -> Rgba {
        match self {
            Self::Black => BLACK,
            Self::White => WHITE,
        }
    }
}

/// Construction options. Reserved; no field currently changes behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[non_exhaustive]
pub struct BitmapOptions {}

/// Monochrome raster storing one bit per pixel
///
/// Pixel `i = width * y + x` lives in byte `i / 8` at bit `i % 8`
/// (least significant bit first). `0` is black, `1` is white.
///
/// Coordinates outside the grid are remapped to pixel `(0, 0)` instead of
/// failing. Use the `try_*` accessors for a configurable bounds check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackedBitmap {
    width: usize,
    height: usize,
    data: Vec<u8>,
}

impl PackedBitmap {
    /// Create a bitmap with every pixel set from [`TRANSPARENT`]
    ///
    /// # Panics
    /// If `width * height` overflows or the allocation fails.
    /// Use [`PackedBitmap::create`] to get an error instead.
    pub fn new(width: usize, height: usize) -> Self {
        let bytes_needed = pixel_count_of(width, height).div_ceil(8);
        let mut bitmap = Self {
            width,
            height,
            data: vec![0; bytes_needed],
        };
        bitmap.initialize();
        bitmap
    }

    /// Create a bitmap from possibly fractional dimensions
    ///
    /// Dimensions are floored. Negative or NaN dimensions give an empty
    /// bitmap. `options` is accepted for forward compatibility and ignored.
    pub fn create(width: f64, height: f64, options: BitmapOptions) -> Result<Self> {
        let _ = options;
        let too_large = || BitmapError::DimensionsTooLarge {
            width: width.floor(),
            height: height.floor(),
        };

        let w = floor_dimension(width).ok_or_else(too_large)?;
        let h = floor_dimension(height).ok_or_else(too_large)?;
        let pixels = w.checked_mul(h).ok_or_else(too_large)?;
        let bytes_needed = pixels.div_ceil(8);

        let mut data = Vec::new();
        data.try_reserve_exact(bytes_needed).map_err(|_| too_large())?;
        data.resize(bytes_needed, 0);

        let mut bitmap = Self {
            width: w,
            height: h,
            data,
        };
        bitmap.initialize();
        Ok(bitmap)
    }

    /// Wrap already packed storage. `data` must be exactly `ceil(width * height / 8)` bytes.
    pub(crate) fn from_packed(width: usize, height: usize, data: Vec<u8>) -> Self {
        debug_assert_eq!(data.len(), (width * height).div_ceil(8));
        Self {
            width,
            height,
            data,
        }
    }

    fn initialize(&mut self) {
        log::debug!(
            "allocated {}x{} packed bitmap ({} bytes)",
            self.width,
            self.height,
            self.data.len()
        );
        for y in 0..self.height {
            for x in 0..self.width {
                self.set_pixel(x, y, TRANSPARENT);
            }
        }
    }

    /// Get bitmap width
    pub fn width(&self) -> usize {
        self.width
    }

    /// Get bitmap height
    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of addressable pixels
    pub fn pixel_count(&self) -> usize {
        self.width * self.height
    }

    /// Length of the packed storage in bytes
    pub fn byte_len(&self) -> usize {
        self.data.len()
    }

    /// Get raw packed data as bytes
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Row-major pixel index of `(x, y)`, or `0` when outside the grid
    pub fn index_of<C: Coordinate>(&self, x: C, y: C) -> usize {
        match self.locate(x, y) {
            Some(index) => index,
            None => {
                log::trace!(
                    "({}, {}) outside {}x{}, using pixel 0",
                    x.as_f64(),
                    y.as_f64(),
                    self.width,
                    self.height
                );
                0
            }
        }
    }

    /// Row-major pixel index of `(x, y)` under an explicit bounds policy
    pub fn checked_index_of<C: Coordinate>(
        &self,
        x: C,
        y: C,
        policy: BoundsPolicy,
    ) -> Result<usize> {
        match (self.locate(x, y), policy) {
            (Some(index), _) => Ok(index),
            (None, BoundsPolicy::Clamp) => Ok(0),
            (None, BoundsPolicy::Strict) => Err(BitmapError::OutOfBounds {
                x: x.as_f64(),
                y: y.as_f64(),
                width: self.width,
                height: self.height,
            }),
        }
    }

    fn locate<C: Coordinate>(&self, x: C, y: C) -> Option<usize> {
        let x = usize::try_from(x.floor_i64()?).ok()?;
        let y = usize::try_from(y.floor_i64()?).ok()?;
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.width * y + x)
    }

    /// Threshold `color` and store the bit at `(x, y)`
    pub fn set_pixel<C: Coordinate>(&mut self, x: C, y: C, color: impl Into<Rgba>) {
        let index = self.index_of(x, y);
        self.write_bit(index, MonoPixel::from_rgba(color.into()));
    }

    /// Threshold `color` and store the bit at a raw pixel index
    ///
    /// # Panics
    /// If `index / 8` is past the end of storage. No bounds policy applies here.
    pub fn set_pixel_at(&mut self, index: usize, color: impl Into<Rgba>) {
        let (byte_index, bit_index) = bit_position(index);
        let bit = MonoPixel::from_rgba(color.into());
        apply_bit(&mut self.data[byte_index], bit_index, bit);
    }

    /// Store a bit directly at `(x, y)`
    pub fn set_mono<C: Coordinate>(&mut self, x: C, y: C, value: MonoPixel) {
        let index = self.index_of(x, y);
        self.write_bit(index, value);
    }

    /// Checked write honoring [`config::bounds_policy`]
    pub fn try_set_pixel<C: Coordinate>(
        &mut self,
        x: C,
        y: C,
        color: impl Into<Rgba>,
    ) -> Result<()> {
        self.checked_set_pixel(x, y, color, config::bounds_policy())
    }

    /// Write under an explicit bounds policy
    pub fn checked_set_pixel<C: Coordinate>(
        &mut self,
        x: C,
        y: C,
        color: impl Into<Rgba>,
        policy: BoundsPolicy,
    ) -> Result<()> {
        let index = self.checked_index_of(x, y, policy)?;
        self.write_bit(index, MonoPixel::from_rgba(color.into()));
        Ok(())
    }

    /// Canonical black or white for the bit at `(x, y)`
    ///
    /// Original color and alpha are never recoverable.
    pub fn get_pixel<C: Coordinate>(&self, x: C, y: C) -> Rgba {
        self.get_mono(x, y).to_rgba()
    }

    /// Bit stored at `(x, y)`
    pub fn get_mono<C: Coordinate>(&self, x: C, y: C) -> MonoPixel {
        self.read_bit(self.index_of(x, y))
    }

    /// Bit stored at a raw pixel index
    ///
    /// # Panics
    /// If `index / 8` is past the end of storage.
    pub fn get_mono_at(&self, index: usize) -> MonoPixel {
        let (byte_index, bit_index) = bit_position(index);
        MonoPixel::from_bit((self.data[byte_index] >> bit_index) & 1 == 1)
    }

    /// Checked read honoring [`config::bounds_policy`]
    pub fn try_get_pixel<C: Coordinate>(&self, x: C, y: C) -> Result<Rgba> {
        self.checked_get_pixel(x, y, config::bounds_policy())
    }

    /// Read under an explicit bounds policy
    pub fn checked_get_pixel<C: Coordinate>(
        &self,
        x: C,
        y: C,
        policy: BoundsPolicy,
    ) -> Result<Rgba> {
        let index = self.checked_index_of(x, y, policy)?;
        Ok(self.read_bit(index).to_rgba())
    }

    /// Threshold `color` once and store it in every pixel
    pub fn fill(&mut self, color: impl Into<Rgba>) {
        let bit = MonoPixel::from_rgba(color.into());
        let full = match bit {
            MonoPixel::Black => 0x00,
            MonoPixel::White => 0xFF,
        };
        let pixels = self.pixel_count();
        self.data.fill(full);
        // keep padding bits past the last pixel at zero
        if pixels % 8 != 0 {
            if let Some(last) = self.data.last_mut() {
                *last &= (1u8 << (pixels % 8)) - 1;
            }
        }
    }

    /// Reset every pixel to the [`TRANSPARENT`] default
    pub fn clear(&mut self) {
        self.fill(TRANSPARENT);
    }

    /// Iterate bits in row-major order
    pub fn iter_mono(&self) -> impl Iterator<Item = MonoPixel> + '_ {
        (0..self.pixel_count()).map(|i| self.get_mono_at(i))
    }

    /// Unpacked 4-bytes-per-pixel view over the same storage
    ///
    /// The view addresses bytes at the pixel index, not the packed bit.
    /// Reading it after packed writes (or the reverse) yields meaningless data.
    pub fn raw_channels(&self) -> RawChannels<'_> {
        RawChannels::new(self.width, self.height, &self.data)
    }

    /// Mutable unpacked view, see [`PackedBitmap::raw_channels`]
    pub fn raw_channels_mut(&mut self) -> RawChannelsMut<'_> {
        RawChannelsMut::new(self.width, self.height, &mut self.data)
    }

    /// Drawing handle bound to this bitmap
    pub fn create_context(&mut self) -> DrawingContext<'_> {
        DrawingContext::new(self)
    }

    fn write_bit(&mut self, index: usize, value: MonoPixel) {
        let (byte_index, bit_index) = bit_position(index);
        // only reachable for index 0 of an empty bitmap
        if let Some(byte) = self.data.get_mut(byte_index) {
            apply_bit(byte, bit_index, value);
        }
    }

    fn read_bit(&self, index: usize) -> MonoPixel {
        let (byte_index, bit_index) = bit_position(index);
        let byte = self.data.get(byte_index).copied().unwrap_or(0);
        MonoPixel::from_bit((byte >> bit_index) & 1 == 1)
    }
}

impl Default for PackedBitmap {
    fn default() -> Self {
        Self::new(0, 0)
    }
}

/// `width * height`
///
/// # Panics
/// If the product overflows `usize`.
pub(crate) fn pixel_count_of(width: usize, height: usize) -> usize {
    match width.checked_mul(height) {
        Some(count) => count,
        None => panic!("{width}x{height} pixel grid overflows usize"),
    }
}

#[inline]
const fn bit_position(index: usize) -> (usize, u32) {
    (index / 8, (index % 8) as u32)
}

#[inline]
fn apply_bit(byte: &mut u8, bit_index: u32, value: MonoPixel) {
    match value {
        MonoPixel::White => *byte |= 1 << bit_index,
        MonoPixel::Black => *byte &= !(1 << bit_index),
    }
}

fn floor_dimension(value: f64) -> Option<usize> {
    let floored = value.floor();
    if floored.is_nan() || floored <= 0.0 {
        return Some(0);
    }
    // usize::MAX as f64 rounds up past usize::MAX
    if floored >= usize::MAX as f64 {
        return None;
    }
    Some(floored as usize)
}
