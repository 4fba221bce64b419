//! Pixel buffer bound to a raw transmitter
//!
//! [`PixelBuf`] keeps the strip colors in wire order and hands the bytes to
//! a [`RawTransmitter`] together with the stored pin on every flush.

use heapless::Vec;

use crate::RawTransmitter;
use crate::board::Pin;
use crate::byte_order::ByteOrder;
use crate::canvas::Canvas;
use crate::color::{Color, Rgbw};
use crate::error::{ConfigError, Error};

/// Brightness changes smaller than this are ignored
const BRIGHTNESS_EPSILON: f32 = 0.001;

/// Pixel buffer configuration
#[derive(Debug, Clone, Copy)]
pub struct PixelBufConfig {
    /// Channel order on the wire
    pub byte_order: ByteOrder,
    /// Brightness scale, clamped to 0.0-1.0
    pub brightness: f32,
    /// Flush after every mutation made through [`PixelBuf`]
    pub auto_write: bool,
}

impl Default for PixelBufConfig {
    fn default() -> Self {
        Self {
            byte_order: ByteOrder::default(),
            brightness: 1.0,
            auto_write: false,
        }
    }
}

/// Strip colors in wire order
///
/// `MAX_BYTES` is the capacity in bytes; the pixel count is fixed at
/// construction and must fit `len * bpp <= MAX_BYTES`.
#[derive(Debug, Clone)]
pub struct FrameBuffer<const MAX_BYTES: usize> {
    order: ByteOrder,
    len: usize,
    brightness: f32,
    /// Bytes as written
    raw: Vec<u8, MAX_BYTES>,
    /// Bytes after brightness scaling, kept in sync while brightness < 1.0
    scaled: Vec<u8, MAX_BYTES>,
}

impl<const MAX_BYTES: usize> FrameBuffer<MAX_BYTES> {
    /// Create a blank frame buffer
    pub fn new(order: ByteOrder, len: usize, brightness: f32) -> Result<Self, ConfigError> {
        let too_small = |required| ConfigError::BufferTooSmall {
            required,
            capacity: MAX_BYTES,
        };
        let required = len
            .checked_mul(order.bpp())
            .ok_or_else(|| too_small(usize::MAX))?;

        let mut raw = Vec::new();
        raw.resize(required, 0).map_err(|()| too_small(required))?;
        let mut scaled = Vec::new();
        scaled.resize(required, 0).map_err(|()| too_small(required))?;

        Ok(Self {
            order,
            len,
            brightness: clamp_brightness(brightness),
            raw,
            scaled,
        })
    }

    pub const fn byte_order(&self) -> ByteOrder {
        self.order
    }

    pub const fn brightness(&self) -> f32 {
        self.brightness
    }

    /// Bytes to put on the wire
    pub fn as_bytes(&self) -> &[u8] {
        if self.is_scaled() {
            &self.scaled
        } else {
            &self.raw
        }
    }

    /// Set brightness. Returns `false` if the change was too small to apply.
    pub fn set_brightness(&mut self, brightness: f32) -> bool {
        let brightness = clamp_brightness(brightness);
        let change = brightness - self.brightness;
        if change > -BRIGHTNESS_EPSILON && change < BRIGHTNESS_EPSILON {
            return false;
        }

        self.brightness = brightness;
        if self.is_scaled() {
            for (scaled, raw) in self.scaled.iter_mut().zip(self.raw.iter()) {
                *scaled = scale(*raw, brightness);
            }
        }
        true
    }

    fn is_scaled(&self) -> bool {
        self.brightness < 1.0
    }

    fn write(&mut self, index: usize, color: Rgbw) {
        let bpp = self.order.bpp();
        let offset = index * bpp;
        let pixel = offset..offset + bpp;
        self.order.encode(color, &mut self.raw[pixel.clone()]);
        if self.is_scaled() {
            let brightness = self.brightness;
            for (scaled, raw) in self.scaled[pixel.clone()].iter_mut().zip(&self.raw[pixel]) {
                *scaled = scale(*raw, brightness);
            }
        }
    }
}

impl<const MAX_BYTES: usize> Canvas for FrameBuffer<MAX_BYTES> {
    fn len(&self) -> usize {
        self.len
    }

    fn set(&mut self, index: usize, color: Color) {
        if index < self.len {
            let color = color.resolve(self.order.has_white());
            self.write(index, color);
        }
    }

    fn get(&self, index: usize) -> Option<Rgbw> {
        if index >= self.len {
            return None;
        }
        let bpp = self.order.bpp();
        let offset = index * bpp;
        Some(self.order.decode(&self.raw[offset..offset + bpp]))
    }

    fn fill(&mut self, color: Color) {
        let color = color.resolve(self.order.has_white());
        for index in 0..self.len {
            self.write(index, color);
        }
    }
}

/// Pixel buffer that flushes through a raw transmitter
pub struct PixelBuf<T: RawTransmitter, const MAX_BYTES: usize> {
    transmitter: T,
    pin: Pin,
    auto_write: bool,
    frame: FrameBuffer<MAX_BYTES>,
}

impl<T: RawTransmitter, const MAX_BYTES: usize> PixelBuf<T, MAX_BYTES> {
    /// Create a blank pixel buffer with `size` pixels
    ///
    /// Nothing is transmitted until the first flush.
    pub fn new(
        transmitter: T,
        pin: Pin,
        size: usize,
        config: PixelBufConfig,
    ) -> Result<Self, ConfigError> {
        let frame = FrameBuffer::new(config.byte_order, size, config.brightness)?;
        Ok(Self {
            transmitter,
            pin,
            auto_write: config.auto_write,
            frame,
        })
    }

    pub fn len(&self) -> usize {
        self.frame.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frame.is_empty()
    }

    pub const fn pin(&self) -> Pin {
        self.pin
    }

    pub const fn byte_order(&self) -> ByteOrder {
        self.frame.byte_order()
    }

    pub const fn auto_write(&self) -> bool {
        self.auto_write
    }

    pub fn set_auto_write(&mut self, auto_write: bool) {
        self.auto_write = auto_write;
    }

    pub const fn brightness(&self) -> f32 {
        self.frame.brightness()
    }

    /// Set brightness (clamped to 0.0-1.0) and flush if auto-write is on
    pub fn set_brightness(&mut self, brightness: f32) -> Result<(), Error<T::Error>> {
        if self.frame.set_brightness(brightness) && self.auto_write {
            self.show()?;
        }
        Ok(())
    }

    /// Set one pixel and flush if auto-write is on
    pub fn set(&mut self, index: usize, color: impl Into<Color>) -> Result<(), Error<T::Error>> {
        let len = self.len();
        if index >= len {
            return Err(Error::IndexOutOfRange { index, len });
        }
        self.frame.set(index, color.into());
        if self.auto_write {
            self.show()?;
        }
        Ok(())
    }

    /// Read back a pixel before brightness scaling
    pub fn get(&self, index: usize) -> Option<Rgbw> {
        self.frame.get(index)
    }

    /// Set every pixel and flush once if auto-write is on
    pub fn fill(&mut self, color: impl Into<Color>) -> Result<(), Error<T::Error>> {
        self.frame.fill(color.into());
        if self.auto_write {
            self.show()?;
        }
        Ok(())
    }

    /// Transmit the current buffer
    pub fn show(&mut self) -> Result<(), Error<T::Error>> {
        self.transmitter
            .transmit(self.pin, self.frame.as_bytes())
            .map_err(Error::Transmit)
    }

    /// Bytes that the next flush transmits
    pub fn as_bytes(&self) -> &[u8] {
        self.frame.as_bytes()
    }

    /// Drawing surface that never flushes, regardless of auto-write
    pub fn canvas(&mut self) -> &mut FrameBuffer<MAX_BYTES> {
        &mut self.frame
    }

    pub const fn transmitter(&self) -> &T {
        &self.transmitter
    }

    /// Release the transmitter
    pub fn into_inner(self) -> T {
        self.transmitter
    }
}

fn clamp_brightness(brightness: f32) -> f32 {
    // `max` discards NaN
    brightness.max(0.0).min(1.0)
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn scale(value: u8, brightness: f32) -> u8 {
    (f32::from(value) * brightness) as u8
}
