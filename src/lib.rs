#![no_std]

pub mod animation;
pub mod board;
pub mod byte_order;
pub mod canvas;
pub mod color;
pub mod error;
pub mod pixel_buf;
pub mod preset;
pub mod sequence;
pub mod session;
pub mod signal;

pub use animation::{Animation, AnimationId, AnimationKind};
pub use board::Pin;
pub use byte_order::ByteOrder;
pub use canvas::Canvas;
pub use error::{ConfigError, Error};
pub use pixel_buf::{FrameBuffer, PixelBuf, PixelBufConfig};
pub use sequence::{AnimationSequence, Tick};
pub use session::{Session, run};
pub use signal::{StopReason, StopSignal};

pub use color::{Color, Rgb, Rgbw};
pub use embassy_time::{Duration, Instant};

/// Raw transmitter trait
///
/// Implement this trait to push a frame of wire-ordered bytes to the strip
/// on a specific platform. The pixel buffer is generic over this trait.
pub trait RawTransmitter {
    type Error: core::fmt::Debug;

    /// Write `buf` to the strip attached to `pin`
    fn transmit(&mut self, pin: Pin, buf: &[u8]) -> Result<(), Self::Error>;
}

impl<T: RawTransmitter + ?Sized> RawTransmitter for &mut T {
    type Error = T::Error;

    fn transmit(&mut self, pin: Pin, buf: &[u8]) -> Result<(), Self::Error> {
        (**self).transmit(pin, buf)
    }
}
