//! Drawing handle bound to a [`PackedBitmap`]
//!
//! Shapes, text and compositing live in higher layers built on this handle.
//! It only carries the current fill color and forwards pixel access.

use crate::models::PackedBitmap;
use crate::models::color::{BLACK, Rgba};
use crate::models::coord::Coordinate;

/// Exclusive drawing handle over one bitmap
#[derive(Debug)]
pub struct DrawingContext<'a> {
    bitmap: &'a mut PackedBitmap,
    fill_color: Rgba,
}

impl<'a> DrawingContext<'a> {
    /// Bind a context to `bitmap` with a black fill color
    pub fn new(bitmap: &'a mut PackedBitmap) -> Self {
        Self {
            bitmap,
            fill_color: BLACK,
        }
    }

    /// Current fill color
    pub fn fill_color(&self) -> Rgba {
        self.fill_color
    }

    /// Change the fill color used by [`DrawingContext::plot`]
    pub fn set_fill_color(&mut self, color: impl Into<Rgba>) {
        self.fill_color = color.into();
    }

    /// Write the fill color at `(x, y)`
    pub fn plot<C: Coordinate>(&mut self, x: C, y: C) {
        self.bitmap.set_pixel(x, y, self.fill_color);
    }

    /// Canonical color stored at `(x, y)`
    pub fn pixel<C: Coordinate>(&self, x: C, y: C) -> Rgba {
        self.bitmap.get_pixel(x, y)
    }

    /// Bitmap width
    pub fn width(&self) -> usize {
        self.bitmap.width()
    }

    /// Bitmap height
    pub fn height(&self) -> usize {
        self.bitmap.height()
    }

    /// The bound bitmap
    pub fn bitmap(&self) -> &PackedBitmap {
        &*self.bitmap
    }

    /// The bound bitmap, mutably
    pub fn bitmap_mut(&mut self) -> &mut PackedBitmap {
        &mut *self.bitmap
    }
}
