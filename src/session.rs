//! LED session and the animation loop
//!
//! A [`Session`] borrows the pixel buffer for the lifetime of the loop and
//! turns the strip off when it ends, on every exit path.

use embassy_time::Instant;
use log::{info, warn};

use crate::RawTransmitter;
use crate::canvas::Canvas;
use crate::color::Color;
use crate::error::Error;
use crate::pixel_buf::PixelBuf;
use crate::sequence::AnimationSequence;
use crate::signal::{StopReason, StopSignal};

/// Scoped ownership of a lit strip
///
/// Releasing the session blanks the buffer and transmits it once. Call
/// [`Session::close`] to observe the result; if the session is dropped
/// without closing (early return, unwinding) the release is best-effort and
/// a failure is only logged.
pub struct Session<'a, T: RawTransmitter, const MAX_BYTES: usize> {
    pixels: &'a mut PixelBuf<T, MAX_BYTES>,
    released: bool,
}

impl<'a, T: RawTransmitter, const MAX_BYTES: usize> Session<'a, T, MAX_BYTES> {
    pub fn open(pixels: &'a mut PixelBuf<T, MAX_BYTES>) -> Self {
        info!(
            "LED session opened: {} pixels on {}, {}",
            pixels.len(),
            pixels.pin(),
            pixels.byte_order()
        );
        Self {
            pixels,
            released: false,
        }
    }

    pub fn pixels(&mut self) -> &mut PixelBuf<T, MAX_BYTES> {
        self.pixels
    }

    /// Turn the strip off and end the session
    pub fn close(mut self) -> Result<(), Error<T::Error>> {
        self.release()
    }

    fn release(&mut self) -> Result<(), Error<T::Error>> {
        if self.released {
            return Ok(());
        }
        self.released = true;

        self.pixels.canvas().fill(Color::OFF);
        self.pixels.show()?;
        info!("LED session closed, strip is off");
        Ok(())
    }
}

impl<T: RawTransmitter, const MAX_BYTES: usize> Drop for Session<'_, T, MAX_BYTES> {
    fn drop(&mut self) {
        if let Err(err) = self.release() {
            warn!("failed to turn the strip off: {:?}", err);
        }
    }
}

/// Run `sequence` until a stop is requested
///
/// Every iteration hands the current time from `clock` to the sequence;
/// the loop itself does no pacing. The strip is turned off exactly once
/// when the loop exits, whether it was stopped or failed.
///
/// A failure to turn the strip off takes precedence over the loop result.
pub fn run<T, const MAX_BYTES: usize, const N: usize>(
    sequence: &mut AnimationSequence<N>,
    pixels: &mut PixelBuf<T, MAX_BYTES>,
    stop: &StopSignal,
    mut clock: impl FnMut() -> Instant,
) -> Result<StopReason, Error<T::Error>>
where
    T: RawTransmitter,
{
    let mut session = Session::open(pixels);

    let outcome = loop {
        if let Some(reason) = stop.take() {
            info!("stop requested: {:?}", reason);
            break Ok(reason);
        }
        if let Err(err) = sequence.animate(clock(), session.pixels()) {
            break Err(err);
        }
    };

    match session.close() {
        Ok(()) => outcome,
        Err(cleanup) => {
            if let Err(err) = &outcome {
                warn!("animation loop failed before cleanup: {:?}", err);
            }
            Err(cleanup)
        }
    }
}
