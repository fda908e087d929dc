//! Convert an RGBA byte image (4 bytes per pixel, alpha ignored) to a packed bitmap
//! Every pixel goes through the same luminance threshold as `PackedBitmap::set_pixel`
//!
//! Missing trailing pixels in a short input are left at the transparent default.

use crate::config;
use crate::models::PackedBitmap;
use crate::models::bitmap::pixel_count_of;
use crate::models::color::Rgba;
use crate::utils::luminance::{WHITE_THRESHOLD, rgba_to_luminance_parallel};
use rayon::prelude::*;

fn warn_if_short(rgba: &[u8], pixel_count: usize) {
    let expected = pixel_count * 4;
    if rgba.len() < expected {
        log::warn!(
            "rgba input holds {} bytes, expected {}; missing pixels stay transparent",
            rgba.len(),
            expected
        );
    }
}

/// Threshold pixel by pixel
///
/// # Panics
/// If `width * height` overflows.
pub fn threshold_rgba(rgba: &[u8], width: usize, height: usize) -> PackedBitmap {
    let mut bitmap = PackedBitmap::new(width, height);
    let pixel_count = bitmap.pixel_count();
    warn_if_short(rgba, pixel_count);

    for (i, px) in rgba.chunks_exact(4).take(pixel_count).enumerate() {
        bitmap.set_pixel_at(i, Rgba::from([px[0], px[1], px[2], px[3]]));
    }

    bitmap
}

/// Threshold a parallel luminance pass, then pack one output byte per rayon task
///
/// Output is bit-identical to [`threshold_rgba`].
///
/// # Panics
/// If `width * height` overflows.
pub fn threshold_rgba_parallel(rgba: &[u8], width: usize, height: usize) -> PackedBitmap {
    let pixel_count = pixel_count_of(width, height);
    warn_if_short(rgba, pixel_count);

    let luma = rgba_to_luminance_parallel(rgba, width, height);
    let mut data = vec![0u8; pixel_count.div_ceil(8)];
    data.par_iter_mut().zip(luma.par_chunks(8)).for_each(|(byte, chunk)| {
        for (bit, &l) in chunk.iter().enumerate() {
            if l >= WHITE_THRESHOLD {
                *byte |= 1 << bit;
            }
        }
    });

    PackedBitmap::from_packed(width, height, data)
}

/// Pick serial or parallel thresholding by image size
///
/// # Panics
/// If `width * height` overflows.
pub fn threshold_rgba_auto(rgba: &[u8], width: usize, height: usize) -> PackedBitmap {
    if pixel_count_of(width, height) >= config::parallel_min_pixels() {
        threshold_rgba_parallel(rgba, width, height)
    } else {
        threshold_rgba(rgba, width, height)
    }
}

/// Threshold a decoded `image` buffer
pub fn threshold_image(image: &image::RgbaImage) -> PackedBitmap {
    let (width, height) = image.dimensions();
    threshold_rgba_auto(image.as_raw(), width as usize, height as usize)
}
