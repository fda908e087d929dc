/// 32-bit color packed as `RRGGBBAA` (red in the most significant byte)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgba(pub u32);

/// Canonical black, returned for every unset bit
pub const BLACK: Rgba = Rgba(0x0000_00FF);
/// Canonical white, returned for every set bit
pub const WHITE: Rgba = Rgba(0xFFFF_FFFF);
/// Fully transparent, written to every pixel at construction
pub const TRANSPARENT: Rgba = Rgba(0x0000_0000);

static NAMED_COLORS: [(&str, Rgba); 3] = [
    ("black", BLACK),
    ("transparent", TRANSPARENT),
    ("white", WHITE),
];

impl Rgba {
    /// Build a color from its four channels
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self(u32::from_be_bytes([r, g, b, a]))
    }

    /// Split into `(r, g, b, a)`
    pub const fn channels(self) -> (u8, u8, u8, u8) {
        let [r, g, b, a] = self.0.to_be_bytes();
        (r, g, b, a)
    }

    /// Alpha channel. Carried for callers, ignored by thresholding.
    pub const fn alpha(self) -> u8 {
        self.0.to_be_bytes()[3]
    }

    /// Look up one of the canonical named colors (case-insensitive)
    pub fn from_name(name: &str) -> Option<Self> {
        NAMED_COLORS
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|&(_, color)| color)
    }
}

impl From<u32> for Rgba {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

impl From<Rgba> for u32 {
    fn from(color: Rgba) -> Self {
        color.0
    }
}

impl From<[u8; 4]> for Rgba {
    fn from(bytes: [u8; 4]) -> Self {
        Self(u32::from_be_bytes(bytes))
    }
}

/// Decode an `RRGGBBAA` value into its color channels, dropping alpha
pub const fn decode_color(rgba: u32) -> (u8, u8, u8) {
    let [r, g, b, _] = rgba.to_be_bytes();
    (r, g, b)
}
