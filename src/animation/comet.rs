//! Comet effect
//!
//! A bright head with a fading tail travelling along the strip.

use embassy_time::Instant;

use super::Effect;
use crate::{
    canvas::Canvas,
    color::{BLACK, Rgb, calculate_intensity, colorwheel},
};

/// Intensity of the faintest tail pixel
const TAIL_FLOOR: f32 = 0.05;

/// What happens when the comet leaves the strip
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CometMotion {
    /// Start over from the same end
    #[default]
    Restart,
    /// Turn around and travel back
    Bounce,
    /// Wrap around to the other end
    Ring,
}

#[derive(Debug, Clone, Copy)]
enum TailColors {
    Solid(Rgb),
    /// `step == 0` spreads the wheel over the tail length
    Rainbow { step: u8, offset: u8 },
}

/// Travelling comet
#[derive(Debug, Clone)]
pub struct CometEffect {
    colors: TailColors,
    background: Rgb,
    /// Tail length in pixels, a quarter of the strip when zero
    tail_length: usize,
    initial_reverse: bool,
    motion: CometMotion,
    reverse: bool,
    /// Position of the first drawn pixel, unset until the first frame
    tail_start: Option<isize>,
}

impl CometEffect {
    /// Comet in one solid color
    pub const fn new(color: Rgb, tail_length: usize) -> Self {
        Self {
            colors: TailColors::Solid(color),
            background: BLACK,
            tail_length,
            initial_reverse: false,
            motion: CometMotion::Restart,
            reverse: false,
            tail_start: None,
        }
    }

    /// Comet with a tail running through the color wheel
    pub const fn rainbow(tail_length: usize) -> Self {
        let mut comet = Self::new(BLACK, tail_length);
        comet.colors = TailColors::Rainbow { step: 0, offset: 0 };
        comet
    }

    /// Travel toward the start of the strip
    #[must_use]
    pub const fn with_reverse(mut self, reverse: bool) -> Self {
        self.initial_reverse = reverse;
        self.reverse = reverse;
        self
    }

    #[must_use]
    pub const fn with_motion(mut self, motion: CometMotion) -> Self {
        self.motion = motion;
        self
    }

    #[must_use]
    pub const fn with_background(mut self, background: Rgb) -> Self {
        self.background = background;
        self
    }

    /// Wheel distance between tail pixels of the rainbow variant
    #[must_use]
    pub const fn with_step(mut self, step: u8) -> Self {
        if let TailColors::Rainbow { offset, .. } = self.colors {
            self.colors = TailColors::Rainbow { step, offset };
        }
        self
    }

    /// Wheel position of the head of the rainbow variant
    #[must_use]
    pub const fn with_colorwheel_offset(mut self, offset: u8) -> Self {
        if let TailColors::Rainbow { step, .. } = self.colors {
            self.colors = TailColors::Rainbow { step, offset };
        }
        self
    }

    pub const fn is_rainbow(&self) -> bool {
        matches!(self.colors, TailColors::Rainbow { .. })
    }

    fn tail_for(&self, len: usize) -> usize {
        if self.tail_length == 0 {
            (len / 4).max(1)
        } else {
            self.tail_length
        }
    }

    #[allow(clippy::cast_possible_wrap)]
    fn restart(&mut self, len: usize, tail: usize) -> isize {
        self.reverse = self.initial_reverse;
        let mut start = if self.reverse {
            (len + tail + 1) as isize
        } else {
            -(tail as isize) - 1
        };
        if self.motion == CometMotion::Ring {
            start = start.rem_euclid(len as isize);
        }
        self.tail_start = Some(start);
        start
    }

    /// Color of drawn pixel `pixel` of `tail + 1`, background first, head last
    #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
    fn color_at(&self, pixel: usize, tail: usize) -> Rgb {
        if pixel == 0 {
            return self.background;
        }
        let n = pixel - 1;
        let intensity = n as f32 * ((1.0 - TAIL_FLOOR) / tail as f32) + TAIL_FLOOR;
        let color = match self.colors {
            TailColors::Solid(color) => color,
            TailColors::Rainbow { step, offset } => {
                let step = if step == 0 {
                    256 / tail
                } else {
                    usize::from(step)
                };
                let invert = tail - n - 1;
                colorwheel(((invert * step + usize::from(offset)) % 256) as u8)
            }
        };
        calculate_intensity(color, intensity)
    }
}

impl Effect for CometEffect {
    #[allow(clippy::cast_possible_wrap, clippy::cast_sign_loss)]
    fn draw<C: Canvas + ?Sized>(&mut self, _now: Instant, canvas: &mut C) -> bool {
        let len = canvas.len();
        if len == 0 {
            return false;
        }
        let tail = self.tail_for(len);
        let mut start = match self.tail_start {
            Some(start) => start,
            None => self.restart(len, tail),
        };

        canvas.fill(self.background.into());
        let num_pixels = len as isize;
        for pixel in 0..=tail {
            let mut draw_at = start + pixel as isize;
            if !(0..num_pixels).contains(&draw_at) {
                if self.motion != CometMotion::Ring {
                    continue;
                }
                draw_at = draw_at.rem_euclid(num_pixels);
            }
            // Reversed comets run head first
            let color_index = if self.reverse { tail - pixel } else { pixel };
            canvas.set(draw_at as usize, self.color_at(color_index, tail).into());
        }

        start += if self.reverse { -1 } else { 1 };

        let left_side = if self.motion == CometMotion::Ring {
            0
        } else {
            -(tail as isize)
        };
        let mut completed = false;
        if start < left_side || (start >= num_pixels && !self.reverse) {
            match self.motion {
                CometMotion::Bounce => self.reverse = !self.reverse,
                CometMotion::Ring => start = start.rem_euclid(num_pixels),
                CometMotion::Restart => start = self.restart(len, tail),
            }
            completed = self.reverse == self.initial_reverse;
        }
        self.tail_start = Some(start);

        completed
    }

    fn reset(&mut self) {
        self.reverse = self.initial_reverse;
        self.tail_start = None;
    }
}
