//! Sparkle effect
//!
//! Random pixels flash in one color and leave a fading spark behind.

use embassy_time::Instant;
use heapless::Vec;
use rand::{Rng, SeedableRng, rngs::SmallRng};

use super::{DEFAULT_SEED, Effect};
use crate::{canvas::Canvas, color::Rgb, error::ConfigError};

/// Most sparkles a single frame can hold
pub const MAX_SPARKLES: usize = 64;

/// Random sparkles in one color
#[derive(Debug, Clone)]
pub struct SparkleEffect {
    color: Rgb,
    /// Left on a sparkled pixel after the flash
    half_color: Rgb,
    /// Left on the neighbour of a sparkled pixel
    dim_color: Rgb,
    num_sparkles: usize,
    sparkles: Vec<usize, MAX_SPARKLES>,
    rng: SmallRng,
}

impl SparkleEffect {
    pub fn new(color: Rgb, num_sparkles: usize) -> Result<Self, ConfigError> {
        if num_sparkles == 0 || num_sparkles > MAX_SPARKLES {
            return Err(ConfigError::InvalidParameter("sparkle count out of range"));
        }
        Ok(Self {
            color,
            half_color: scale_down(color, 4),
            dim_color: scale_down(color, 10),
            num_sparkles,
            sparkles: Vec::new(),
            rng: SmallRng::seed_from_u64(DEFAULT_SEED),
        })
    }

    /// Seed the sparkle placement
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = SmallRng::seed_from_u64(seed);
        self
    }
}

const fn scale_down(color: Rgb, divisor: u8) -> Rgb {
    Rgb {
        r: color.r / divisor,
        g: color.g / divisor,
        b: color.b / divisor,
    }
}

impl Effect for SparkleEffect {
    const OVERLAY: bool = true;

    fn draw<C: Canvas + ?Sized>(&mut self, _now: Instant, canvas: &mut C) -> bool {
        self.sparkles.clear();
        let len = canvas.len();
        if len == 0 {
            return false;
        }
        for _ in 0..self.num_sparkles {
            let index = self.rng.gen_range(0..len);
            // Capacity is checked at construction
            let _ = self.sparkles.push(index);
            canvas.set(index, self.color.into());
        }
        false
    }

    fn after_draw<C: Canvas + ?Sized>(&mut self, canvas: &mut C) {
        let len = canvas.len();
        for &index in &self.sparkles {
            canvas.set(index, self.half_color.into());
            // The last pixel wraps onto the first
            canvas.set((index + 1) % len, self.dim_color.into());
        }
    }
}
