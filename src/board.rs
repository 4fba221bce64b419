//! Board pin designations
//!
//! Pins are opaque handles. The pixel buffer stores one and hands it to the
//! raw transmitter on every flush.

use core::fmt;

/// Output pin handle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pin {
    gpio: u8,
}

impl Pin {
    /// Create a pin handle from a GPIO line number
    pub const fn gpio(gpio: u8) -> Self {
        Self { gpio }
    }

    /// GPIO line number
    pub const fn id(self) -> u8 {
        self.gpio
    }
}

impl fmt::Display for Pin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "GPIO{}", self.gpio)
    }
}

macro_rules! header_pins {
    ($($name:ident = $gpio:literal),* $(,)?) => {
        $(
            #[doc = concat!("Header pin `", stringify!($name), "` (GPIO ", stringify!($gpio), ")")]
            pub const $name: Pin = Pin::gpio($gpio);
        )*
    };
}

// Raspberry Pi 40-pin header: `Dn` maps to GPIO n.
header_pins!(
    D0 = 0, D1 = 1, D2 = 2, D3 = 3, D4 = 4, D5 = 5, D6 = 6, D7 = 7,
    D8 = 8, D9 = 9, D10 = 10, D11 = 11, D12 = 12, D13 = 13, D14 = 14,
    D15 = 15, D16 = 16, D17 = 17, D18 = 18, D19 = 19, D20 = 20, D21 = 21,
    D22 = 22, D23 = 23, D24 = 24, D25 = 25, D26 = 26, D27 = 27,
);
