//! Strip preview drawn in the terminal
//!
//! Stands in for the hardware transmitter on the host: each frame is decoded
//! with the strip byte order and printed on a single line as 24-bit colour
//! cells.

use std::io::{self, Stdout, Write};

use myrtio_light_sequence::{ByteOrder, Pin, RawTransmitter, Rgbw};

const CELL: &str = "\u{2588}";
const RESET: &str = "\x1b[0m";

pub(crate) struct TerminalTransmitter {
    order: ByteOrder,
    out: Stdout,
    frames: u64,
}

impl TerminalTransmitter {
    pub(crate) fn new(order: ByteOrder) -> Self {
        Self {
            order,
            out: io::stdout(),
            frames: 0,
        }
    }

    pub(crate) const fn frames(&self) -> u64 {
        self.frames
    }
}

impl RawTransmitter for TerminalTransmitter {
    type Error = io::Error;

    fn transmit(&mut self, pin: Pin, buf: &[u8]) -> Result<(), Self::Error> {
        let mut out = self.out.lock();
        write!(out, "\r{pin} ")?;
        for pixel in buf.chunks_exact(self.order.bpp()) {
            let (r, g, b) = to_terminal(self.order.decode(pixel));
            write!(out, "\x1b[38;2;{r};{g};{b}m{CELL}")?;
        }
        write!(out, "{RESET}")?;
        out.flush()?;

        self.frames += 1;
        Ok(())
    }
}

/// The terminal has no white channel, mix it into the colour
fn to_terminal(color: Rgbw) -> (u8, u8, u8) {
    (
        color.r.saturating_add(color.w),
        color.g.saturating_add(color.w),
        color.b.saturating_add(color.w),
    )
}
