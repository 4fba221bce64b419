use crate::color::Rgb;

/// Color with a dedicated white channel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgbw {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub w: u8,
}

impl Rgbw {
    pub const fn new(r: u8, g: u8, b: u8, w: u8) -> Self {
        Self { r, g, b, w }
    }
}

/// Color value accepted by the pixel buffer
///
/// `Packed` and `Rgb` values with equal channels are moved onto the white
/// channel on strips that have one. `Rgbw` values are written as given.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    /// `0xRRGGBB`; the upper byte is ignored
    Packed(u32),
    Rgb(Rgb),
    Rgbw(Rgbw),
}

impl Color {
    /// All channels off
    pub const OFF: Self = Self::Packed(0);

    /// Resolve into channel values for a strip with or without white
    pub(crate) const fn resolve(self, has_white: bool) -> Rgbw {
        let (r, g, b) = match self {
            Self::Packed(value) => (
                ((value >> 16) & 0xFF) as u8,
                ((value >> 8) & 0xFF) as u8,
                (value & 0xFF) as u8,
            ),
            Self::Rgb(rgb) => (rgb.r, rgb.g, rgb.b),
            Self::Rgbw(rgbw) => {
                let w = if has_white { rgbw.w } else { 0 };
                return Rgbw::new(rgbw.r, rgbw.g, rgbw.b, w);
            }
        };

        if has_white && r == g && g == b {
            return Rgbw::new(0, 0, 0, r);
        }
        Rgbw::new(r, g, b, 0)
    }
}

impl From<u32> for Color {
    fn from(value: u32) -> Self {
        Self::Packed(value)
    }
}

impl From<Rgb> for Color {
    fn from(value: Rgb) -> Self {
        Self::Rgb(value)
    }
}

impl From<Rgbw> for Color {
    fn from(value: Rgbw) -> Self {
        Self::Rgbw(value)
    }
}

impl From<(u8, u8, u8)> for Color {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self::Rgb(Rgb { r, g, b })
    }
}

impl From<(u8, u8, u8, u8)> for Color {
    fn from((r, g, b, w): (u8, u8, u8, u8)) -> Self {
        Self::Rgbw(Rgbw::new(r, g, b, w))
    }
}
