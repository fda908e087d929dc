//! Integration tests for the packed bitmap contract
//!
//! These cover the indexing policy, the luminance threshold over the whole
//! RGB cube, and bit isolation within shared bytes. They protect call sites
//! that depend on the silent remap to pixel (0, 0) and the exact threshold.

use mono_raster::{
    BLACK, BitmapOptions, MonoPixel, PackedBitmap, Rgba, TRANSPARENT, WHITE, decode_color,
    luminance, to_monochrome,
};
use std::collections::HashSet;
use std::sync::Once;

static INIT_LOGGER: Once = Once::new();

fn init_logger() {
    INIT_LOGGER.call_once(|| {
        let _ = env_logger::builder().is_test(true).try_init();
    });
}

/// White iff 0.2126 r + 0.7152 g + 0.0722 b, rounded half up, is at least 200
fn reference_is_white(r: u32, g: u32, b: u32) -> bool {
    2126 * r + 7152 * g + 722 * b >= 1_995_000
}

#[test]
fn test_index_covers_grid_exactly() {
    init_logger();
    for (width, height) in [(1, 1), (4, 4), (10, 3), (7, 5), (16, 1)] {
        let bitmap = PackedBitmap::new(width, height);
        let mut seen = HashSet::new();
        for y in 0..height {
            for x in 0..width {
                let index = bitmap.index_of(x, y);
                assert!(index < width * height);
                assert!(seen.insert(index), "duplicate index {index} at ({x}, {y})");
            }
        }
        assert_eq!(seen.len(), width * height);
    }
}

#[test]
fn test_out_of_range_indexes_zero() {
    init_logger();
    let bitmap = PackedBitmap::new(6, 4);
    for (x, y) in [(-1, 0), (0, -1), (6, 0), (0, 4), (100, 100), (i32::MIN, 2)] {
        assert_eq!(bitmap.index_of(x, y), 0, "({x}, {y})");
    }
    for (x, y) in [(-0.01, 1.0), (5.0, 4.0), (f64::NAN, 0.0), (0.0, f64::NEG_INFINITY)] {
        assert_eq!(bitmap.index_of(x, y), 0, "({x}, {y})");
    }
    assert_eq!(bitmap.index_of(5.99, 3.99), 23);
}

#[test]
fn test_threshold_over_full_rgb_cube() {
    init_logger();
    let mut bitmap = PackedBitmap::new(3, 3);
    for r in 0..=255u32 {
        for g in 0..=255u32 {
            for b in 0..=255u32 {
                let color = Rgba::new(r as u8, g as u8, b as u8, (r ^ b) as u8);
                bitmap.set_pixel(1, 1, color);
                let expected = if reference_is_white(r, g, b) { WHITE } else { BLACK };
                let actual = bitmap.get_pixel(1, 1);
                if actual != expected {
                    panic!("rgb({r}, {g}, {b}) read back {actual:?}, expected {expected:?}");
                }
            }
        }
    }
}

#[test]
fn test_alpha_does_not_affect_threshold() {
    let mut bitmap = PackedBitmap::new(2, 1);
    for alpha in [0u8, 1, 128, 255] {
        bitmap.set_pixel(0, 0, Rgba::new(255, 255, 255, alpha));
        assert_eq!(bitmap.get_pixel(0, 0), WHITE);
        bitmap.set_pixel(1, 0, Rgba::new(0, 0, 0, alpha));
        assert_eq!(bitmap.get_pixel(1, 0), BLACK);
    }
}

#[test]
fn test_write_is_idempotent() {
    let mut once = PackedBitmap::new(5, 5);
    let mut twice = PackedBitmap::new(5, 5);
    for color in [WHITE, BLACK, Rgba(0xC8C8_C8FF), Rgba(0x00FF_00FF)] {
        once.set_pixel(2, 3, color);
        twice.set_pixel(2, 3, color);
        twice.set_pixel(2, 3, color);
        assert_eq!(once.as_bytes(), twice.as_bytes());
    }
}

#[test]
fn test_write_leaves_rest_of_byte_untouched() {
    init_logger();
    // 8x2: row 0 fills byte 0, row 1 fills byte 1
    let mut bitmap = PackedBitmap::new(8, 2);
    for x in (0..8).step_by(2) {
        bitmap.set_pixel(x, 0, WHITE);
    }

    for target in 0..8usize {
        let before: Vec<MonoPixel> = (0..8).map(|x| bitmap.get_mono(x, 0)).collect();
        let flipped = if before[target].is_white() { BLACK } else { WHITE };
        bitmap.set_pixel(target, 0, flipped);

        for x in 0..8usize {
            let now = bitmap.get_mono(x, 0);
            if x == target {
                assert_eq!(now.to_rgba(), flipped);
            } else {
                assert_eq!(now, before[x], "bit {x} changed while writing bit {target}");
            }
        }
        assert_eq!(bitmap.as_bytes()[1], 0, "second byte touched");
        bitmap.set_pixel(target, 0, before[target].to_rgba());
    }
    assert_eq!(bitmap.as_bytes(), &[0b0101_0101, 0]);
}

#[test]
fn test_construction_fills_with_transparent() {
    init_logger();
    let bitmap = PackedBitmap::new(4, 4);
    let (r, g, b) = decode_color(TRANSPARENT.0);
    let expected = to_monochrome(r, g, b).to_rgba();
    assert_eq!(expected, BLACK);
    for y in 0..4 {
        for x in 0..4 {
            assert_eq!(bitmap.get_pixel(x, y), expected);
        }
    }
    assert_eq!(bitmap.as_bytes(), &[0, 0]);
}

#[test]
fn test_buffer_sizing() {
    let bitmap = PackedBitmap::create(10.0, 3.0, BitmapOptions::default()).unwrap();
    assert_eq!(bitmap.byte_len(), 4);
    assert_eq!(PackedBitmap::new(8, 8).byte_len(), 8);
    assert_eq!(PackedBitmap::new(1, 1).byte_len(), 1);
    assert_eq!(PackedBitmap::new(9, 1).byte_len(), 2);
}

#[test]
fn test_documented_examples() {
    assert_eq!(decode_color(0xFF00_0000), (255, 0, 0));
    assert_eq!(luminance(255, 0, 0), 54);
    assert_eq!(to_monochrome(255, 0, 0), MonoPixel::Black);

    assert_eq!(decode_color(0xFFFF_FF00), (255, 255, 255));
    assert_eq!(luminance(255, 255, 255), 255);
    assert_eq!(to_monochrome(255, 255, 255), MonoPixel::White);
}

#[test]
fn test_options_do_not_change_behavior() {
    let a = PackedBitmap::create(7.5, 3.5, BitmapOptions::default()).unwrap();
    let b = PackedBitmap::new(7, 3);
    assert_eq!(a, b);
}
