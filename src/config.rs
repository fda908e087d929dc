//! Process-wide settings read once from the environment

use std::sync::OnceLock;

fn parse_env_usize(name: &str, default: usize) -> usize {
    std::env::var(name)
        .ok()
        .and_then(|v| v.trim().parse::<usize>().ok())
        .unwrap_or(default)
}

fn parse_env_bool_u8(name: &str, default: bool) -> bool {
    std::env::var(name)
        .ok()
        .and_then(|v| v.trim().parse::<u8>().ok())
        .map(|v| v != 0)
        .unwrap_or(default)
}

/// How checked accessors treat coordinates outside the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BoundsPolicy {
    /// Remap to pixel `(0, 0)`, the same as the unchecked accessors
    #[default]
    Clamp,
    /// Report [`BitmapError::OutOfBounds`](crate::BitmapError::OutOfBounds)
    Strict,
}

static BOUNDS_POLICY: OnceLock<BoundsPolicy> = OnceLock::new();

/// Policy for `try_*` accessors, `MONO_STRICT_BOUNDS=1` selects [`BoundsPolicy::Strict`]
pub fn bounds_policy() -> BoundsPolicy {
    *BOUNDS_POLICY.get_or_init(|| {
        if parse_env_bool_u8("MONO_STRICT_BOUNDS", false) {
            BoundsPolicy::Strict
        } else {
            BoundsPolicy::Clamp
        }
    })
}

static PARALLEL_MIN_PIXELS: OnceLock<usize> = OnceLock::new();

/// Pixel count from which bulk thresholding switches to the rayon path
pub fn parallel_min_pixels() -> usize {
    *PARALLEL_MIN_PIXELS.get_or_init(|| parse_env_usize("MONO_PARALLEL_MIN_PIXELS", 65_536))
}
