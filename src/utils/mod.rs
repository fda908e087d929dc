//! Utility functions for color processing
//!
//! This module provides the conversions behind the packed bitmap:
//! - Luminance (BT.709, rounded) and the black/white threshold
//! - Bulk thresholding of RGBA images into packed bitmaps

pub mod luminance;
pub mod threshold;
