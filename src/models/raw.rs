//! Unpacked channel access over packed storage
//!
//! These views treat the pixel index as a byte offset and read or write four
//! consecutive bytes `(r, g, b, a)` there. They share storage with the
//! one-bit-per-pixel layout but not its addressing: mixing the two on one
//! bitmap produces meaningless results, and nothing here reconciles them.
//!
//! Packed storage is only `ceil(width * height / 8)` bytes long, so most
//! offsets run past the end. Reads return the in-bounds prefix and writes
//! drop the bytes that do not fit.

use crate::models::coord::Coordinate;

/// Bytes per pixel in the unpacked layout
pub const CHANNELS: usize = 4;

fn unpacked_offset<C: Coordinate>(width: usize, height: usize, x: C, y: C) -> usize {
    let x = x.floor_i64().and_then(|v| usize::try_from(v).ok());
    let y = y.floor_i64().and_then(|v| usize::try_from(v).ok());
    match (x, y) {
        (Some(x), Some(y)) if x < width && y < height => width * y + x,
        _ => 0,
    }
}

fn region_range(len: usize, offset: usize) -> std::ops::Range<usize> {
    let start = offset.min(len);
    let end = offset.saturating_add(CHANNELS).min(len);
    start..end
}

/// Read-only unpacked view
#[derive(Debug, Clone, Copy)]
pub struct RawChannels<'a> {
    width: usize,
    height: usize,
    data: &'a [u8],
}

impl<'a> RawChannels<'a> {
    pub(crate) fn new(width: usize, height: usize, data: &'a [u8]) -> Self {
        Self {
            width,
            height,
            data,
        }
    }

    /// Up to four bytes starting at the pixel index of `(x, y)`
    ///
    /// Out-of-range coordinates read from offset `0`. The slice is shorter
    /// than four bytes (possibly empty) near the end of storage.
    pub fn region<C: Coordinate>(&self, x: C, y: C) -> &'a [u8] {
        let offset = unpacked_offset(self.width, self.height, x, y);
        &self.data[region_range(self.data.len(), offset)]
    }
}

/// Mutable unpacked view
#[derive(Debug)]
pub struct RawChannelsMut<'a> {
    width: usize,
    height: usize,
    data: &'a mut [u8],
}

impl<'a> RawChannelsMut<'a> {
    pub(crate) fn new(width: usize, height: usize, data: &'a mut [u8]) -> Self {
        Self {
            width,
            height,
            data,
        }
    }

    /// See [`RawChannels::region`]
    pub fn region<C: Coordinate>(&self, x: C, y: C) -> &[u8] {
        let offset = unpacked_offset(self.width, self.height, x, y);
        &self.data[region_range(self.data.len(), offset)]
    }

    /// Write `r, g, b, a` starting at the pixel index of `(x, y)`
    ///
    /// Out-of-range coordinates write at offset `0`. Bytes past the end of
    /// storage are dropped.
    pub fn set<C: Coordinate>(&mut self, x: C, y: C, r: u8, g: u8, b: u8, a: u8) {
        let offset = unpacked_offset(self.width, self.height, x, y);
        let range = region_range(self.data.len(), offset);
        let count = range.len();
        self.data[range].copy_from_slice(&[r, g, b, a][..count]);
    }
}
