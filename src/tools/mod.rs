//! Loading images from disk into packed bitmaps

use crate::error::Result;
use crate::models::PackedBitmap;
use crate::utils::threshold::threshold_image;
use std::path::Path;

/// Load an image as RGBA bytes along with its dimensions.
pub fn load_rgba<P: AsRef<Path>>(path: P) -> Result<(Vec<u8>, usize, usize)> {
    let rgba = image::open(path)?.to_rgba8();
    let (width, height) = rgba.dimensions();
    Ok((rgba.into_raw(), width as usize, height as usize))
}

/// Decode an image file and threshold it into a packed bitmap.
pub fn load_bitmap<P: AsRef<Path>>(path: P) -> Result<PackedBitmap> {
    let path = path.as_ref();
    let rgba = image::open(path)?.to_rgba8();
    log::debug!(
        "loaded {} ({}x{})",
        path.display(),
        rgba.width(),
        rgba.height()
    );
    Ok(threshold_image(&rgba))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::BitmapError;
    use crate::models::color::{BLACK, WHITE};

    #[test]
    fn test_load_missing_file() {
        let err = load_bitmap("does/not/exist.png").unwrap_err();
        assert!(matches!(err, BitmapError::Image(_)));
    }

    #[test]
    fn test_load_png_roundtrip() {
        let dir = std::env::temp_dir().join(format!("mono_raster_tools_{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("checker.png");

        let img = image::RgbaImage::from_fn(4, 2, |x, y| {
            if (x + y) % 2 == 0 {
                image::Rgba([255, 255, 255, 255])
            } else {
                image::Rgba([0, 0, 0, 255])
            }
        });
        img.save(&path).unwrap();

        let (bytes, width, height) = load_rgba(&path).unwrap();
        assert_eq!((width, height), (4, 2));
        assert_eq!(bytes.len(), 4 * 2 * 4);

        let bitmap = load_bitmap(&path).unwrap();
        assert_eq!(bitmap.get_pixel(0, 0), WHITE);
        assert_eq!(bitmap.get_pixel(1, 0), BLACK);
        assert_eq!(bitmap.get_pixel(1, 1), WHITE);

        std::fs::remove_dir_all(&dir).ok();
    }
}
