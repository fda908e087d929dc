//! Relative luminance and the black/white decision
//! L = 0.2126*R + 0.7152*G + 0.0722*B (ITU-R BT.709), rounded half up
//!
//! Uses exact integer arithmetic on the weights scaled by 10_000, so ties
//! such as L = 199.5 always round up instead of depending on float error.

use crate::models::MonoPixel;
use crate::models::bitmap::pixel_count_of;
use rayon::prelude::*;

/// Coefficients scaled by 10_000
const COEF_R: u32 = 2126;
const COEF_G: u32 = 7152;
const COEF_B: u32 = 722;
const SCALE: u32 = 10_000;

/// Luminance at or above this value is white
pub const WHITE_THRESHOLD: u8 = 200;

/// Rounded BT.709 luminance in `[0, 255]`
#[inline]
pub fn luminance(r: u8, g: u8, b: u8) -> u8 {
    let weighted = COEF_R * r as u32 + COEF_G * g as u32 + COEF_B * b as u32;
    ((weighted + SCALE / 2) / SCALE) as u8
}

/// Threshold a color into a single monochrome bit
#[inline]
pub fn to_monochrome(r: u8, g: u8, b: u8) -> MonoPixel {
    if luminance(r, g, b) >= WHITE_THRESHOLD {
        MonoPixel::White
    } else {
        MonoPixel::Black
    }
}

/// Luminance of an RGBA image (alpha ignored), rows processed in parallel
///
/// Only whole 4-byte pixels are read. Pixels missing from a short input
/// get luminance 0.
///
/// # Panics
/// If `width * height` overflows.
pub fn rgba_to_luminance_parallel(rgba: &[u8], width: usize, height: usize) -> Vec<u8> {
    let pixel_count = pixel_count_of(width, height);
    let mut out = vec![0u8; pixel_count];
    if width == 0 {
        return out;
    }

    out.par_chunks_mut(width).enumerate().for_each(|(y, row)| {
        let row_start = y * width * 4;
        for (x, dst) in row.iter_mut().enumerate() {
            let idx = row_start + x * 4;
            if let Some(px) = rgba.get(idx..idx + 4) {
                *dst = luminance(px[0], px[1], px[2]);
            }
        }
    });

    out
}
