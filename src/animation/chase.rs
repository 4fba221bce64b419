//! Chase effect
//!
//! Bars of lit pixels separated by dark gaps, moving one pixel per frame.
//! The rainbow variant colors every bar with its own wheel position.

use embassy_time::Instant;

use super::Effect;
use crate::{
    canvas::Canvas,
    color::{BLACK, Rgb, colorwheel},
    error::ConfigError,
};

const DEFAULT_RAINBOW_STEP: u8 = 8;
/// Wheel positions are spread over two turns
const RAINBOW_SPAN: usize = 512;

#[derive(Debug, Clone, Copy)]
enum BarColors {
    Solid(Rgb),
    Rainbow { step: u8, index: usize },
}

/// Moving bars of light
#[derive(Debug, Clone)]
pub struct ChaseEffect {
    colors: BarColors,
    /// Lit pixels per bar
    size: usize,
    /// Dark pixels between bars
    spacing: usize,
    reverse: bool,
    offset: usize,
    draws: usize,
}

impl ChaseEffect {
    /// Bars in one solid color
    pub fn new(color: Rgb, size: usize, spacing: usize) -> Result<Self, ConfigError> {
        if size + spacing == 0 {
            return Err(ConfigError::InvalidParameter("chase size and spacing are both zero"));
        }
        Ok(Self {
            colors: BarColors::Solid(color),
            size,
            spacing,
            reverse: false,
            offset: 0,
            draws: 0,
        })
    }

    /// Bars colored along the color wheel
    pub fn rainbow(size: usize, spacing: usize) -> Result<Self, ConfigError> {
        let mut chase = Self::new(BLACK, size, spacing)?;
        chase.colors = BarColors::Rainbow {
            step: DEFAULT_RAINBOW_STEP,
            index: 0,
        };
        Ok(chase)
    }

    /// Move the bars toward the start of the strip
    #[must_use]
    pub fn with_reverse(mut self, reverse: bool) -> Self {
        self.reverse = reverse;
        self
    }

    /// Set the wheel distance between neighbouring bars
    ///
    /// Only applies to the rainbow variant.
    pub fn with_step(mut self, step: u8) -> Result<Self, ConfigError> {
        if step == 0 {
            return Err(ConfigError::InvalidParameter("chase step must be non-zero"));
        }
        if let BarColors::Rainbow { index, .. } = self.colors {
            self.colors = BarColors::Rainbow { step, index };
        }
        Ok(self)
    }

    pub const fn is_rainbow(&self) -> bool {
        matches!(self.colors, BarColors::Rainbow { .. })
    }

    const fn repeat_width(&self) -> usize {
        self.size + self.spacing
    }

    fn bar_color(&self, bar: usize) -> Rgb {
        match self.colors {
            BarColors::Solid(color) => color,
            BarColors::Rainbow { step, index } => rainbow_bar_color(step, index, bar),
        }
    }

    fn advance_colors(&mut self) {
        if let BarColors::Rainbow { step, index } = self.colors {
            let len = RAINBOW_SPAN.div_ceil(usize::from(step));
            let index = if self.reverse {
                (index + len - 1) % len
            } else {
                (index + 1) % len
            };
            self.colors = BarColors::Rainbow { step, index };
        }
    }
}

/// Wheel color of bar `bar` when the palette is rotated to `index`
#[allow(clippy::cast_possible_truncation)]
fn rainbow_bar_color(step: u8, index: usize, bar: usize) -> Rgb {
    let step = usize::from(step);
    let len = RAINBOW_SPAN.div_ceil(step);
    let slot = (index + len - bar % len) % len;
    colorwheel(((slot * step) % 256) as u8)
}

impl Effect for ChaseEffect {
    fn draw<C: Canvas + ?Sized>(&mut self, _now: Instant, canvas: &mut C) -> bool {
        let len = canvas.len();
        let pattern = ChasePattern::new(self.offset, self.size, self.spacing);
        for (index, segment) in pattern.take(len).enumerate() {
            let color = match segment {
                Segment::Bar(bar) => self.bar_color(bar),
                Segment::Gap => BLACK,
            };
            canvas.set(index, color.into());
        }

        self.draws += 1;
        let completed = len > 0 && self.draws.is_multiple_of(len);
        if completed {
            self.advance_colors();
        }

        let width = self.repeat_width();
        self.offset = if self.reverse {
            (self.offset + width - 1) % width
        } else {
            (self.offset + 1) % width
        };

        completed
    }

    fn reset(&mut self) {
        self.offset = 0;
        self.draws = 0;
        if let BarColors::Rainbow { step, .. } = self.colors {
            self.colors = BarColors::Rainbow { step, index: 0 };
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Segment {
    /// Lit pixel of the bar with the given number
    Bar(usize),
    Gap,
}

/// Endless bar/gap sequence starting at a given offset
///
/// The first `offset` pixels are the tail end of bar 0 and its gap, then
/// full bars follow.
struct ChasePattern {
    lead: usize,
    size: usize,
    spacing: usize,
    bar: usize,
    position: usize,
}

impl ChasePattern {
    const fn new(offset: usize, size: usize, spacing: usize) -> Self {
        Self {
            lead: offset,
            size,
            spacing,
            bar: 0,
            position: 0,
        }
    }
}

impl Iterator for ChasePattern {
    type Item = Segment;

    fn next(&mut self) -> Option<Segment> {
        if self.lead > 0 {
            let remaining = self.lead;
            self.lead -= 1;
            if remaining > self.spacing {
                return Some(Segment::Bar(self.bar));
            }
            self.bar = 1;
            return Some(Segment::Gap);
        }

        let segment = if self.position < self.size {
            Segment::Bar(self.bar)
        } else {
            Segment::Gap
        };
        self.position += 1;
        if self.position == self.size + self.spacing {
            self.position = 0;
            self.bar += 1;
        }
        Some(segment)
    }
}
