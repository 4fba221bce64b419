//! Per-pixel channel layout on the wire

use core::fmt;

use crate::color::Rgbw;
use crate::error::ConfigError;

/// Channel order of a pixel on the wire, e.g. `GRB` or `WBGR`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ByteOrder {
    bpp: u8,
    r: u8,
    g: u8,
    b: u8,
    w: Option<u8>,
}

impl ByteOrder {
    /// Green, red, blue (WS2812)
    pub const GRB: Self = Self {
        bpp: 3,
        r: 1,
        g: 0,
        b: 2,
        w: None,
    };

    /// Blue, green, red
    pub const BGR: Self = Self {
        bpp: 3,
        r: 2,
        g: 1,
        b: 0,
        w: None,
    };

    /// Green, red, blue, white (SK6812 RGBW)
    pub const GRBW: Self = Self {
        bpp: 4,
        r: 1,
        g: 0,
        b: 2,
        w: Some(3),
    };

    /// White, blue, green, red
    pub const WBGR: Self = Self {
        bpp: 4,
        r: 3,
        g: 2,
        b: 1,
        w: Some(0),
    };

    /// Parse a byte order string
    ///
    /// The string must be 3 or 4 distinct letters from `RGBW` and contain
    /// R, G and B.
    #[allow(clippy::cast_possible_truncation)]
    pub fn parse(order: &str) -> Result<Self, ConfigError> {
        let bytes = order.as_bytes();
        if !(3..=4).contains(&bytes.len()) {
            return Err(ConfigError::InvalidByteOrder);
        }

        let mut slots: [Option<u8>; 4] = [None; 4];
        for (position, channel) in bytes.iter().enumerate() {
            let slot = match channel {
                b'R' => 0,
                b'G' => 1,
                b'B' => 2,
                b'W' => 3,
                _ => return Err(ConfigError::InvalidByteOrder),
            };
            if slots[slot].is_some() {
                return Err(ConfigError::InvalidByteOrder);
            }
            slots[slot] = Some(position as u8);
        }

        let [Some(r), Some(g), Some(b), w] = slots else {
            return Err(ConfigError::InvalidByteOrder);
        };

        Ok(Self {
            bpp: bytes.len() as u8,
            r,
            g,
            b,
            w,
        })
    }

    /// Bytes per pixel
    pub const fn bpp(self) -> usize {
        self.bpp as usize
    }

    /// Whether the layout carries a white channel
    pub const fn has_white(self) -> bool {
        self.w.is_some()
    }

    /// Write a pixel into `out` (exactly `bpp` bytes)
    pub(crate) fn encode(self, color: Rgbw, out: &mut [u8]) {
        out[self.r as usize] = color.r;
        out[self.g as usize] = color.g;
        out[self.b as usize] = color.b;
        if let Some(w) = self.w {
            out[w as usize] = color.w;
        }
    }

    /// Read a pixel from `bytes` (exactly `bpp` bytes)
    pub fn decode(self, bytes: &[u8]) -> Rgbw {
        Rgbw {
            r: bytes[self.r as usize],
            g: bytes[self.g as usize],
            b: bytes[self.b as usize],
            w: self.w.map_or(0, |w| bytes[w as usize]),
        }
    }
}

impl Default for ByteOrder {
    fn default() -> Self {
        Self::BGR
    }
}

impl fmt::Display for ByteOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut letters = [' '; 4];
        letters[self.r as usize] = 'R';
        letters[self.g as usize] = 'G';
        letters[self.b as usize] = 'B';
        if let Some(w) = self.w {
            letters[w as usize] = 'W';
        }
        for letter in &letters[..self.bpp()] {
            write!(f, "{}", letter)?;
        }
        Ok(())
    }
}
