//! Rainbow cycling effects
//!
//! - `RainbowEffect`: the color wheel scrolled along the strip, one full
//!   turn per period
//! - `RainbowSparkleEffect`: a dimmed rainbow with full-brightness sparkles

use embassy_time::{Duration, Instant};
use rand::{Rng, SeedableRng, rngs::SmallRng};

use super::{DEFAULT_SEED, Effect};
use crate::{
    canvas::Canvas,
    color::{Rgb, calculate_intensity, colorwheel},
    error::ConfigError,
};

const DEFAULT_PERIOD_MS: u64 = 5_000;
const DEFAULT_BACKGROUND_BRIGHTNESS: f32 = 0.2;
/// One sparkle per this many pixels when the count is not set
const PIXELS_PER_SPARKLE: usize = 20;

/// Color wheel scrolled along the strip
#[derive(Debug, Clone)]
pub struct RainbowEffect {
    /// Duration of one complete turn of the wheel
    period: Duration,
    /// Distance between wheel positions of neighbouring pixels
    step: u8,
    /// Position inside the period
    position_ms: u64,
    last_update: Option<Instant>,
    wheel_index: usize,
}

impl Default for RainbowEffect {
    fn default() -> Self {
        Self::new(Duration::from_millis(DEFAULT_PERIOD_MS))
    }
}

impl RainbowEffect {
    pub const fn new(period: Duration) -> Self {
        Self {
            period,
            step: 1,
            position_ms: 0,
            last_update: None,
            wheel_index: 0,
        }
    }

    /// Set the wheel step
    pub fn with_step(mut self, step: u8) -> Result<Self, ConfigError> {
        if step == 0 {
            return Err(ConfigError::InvalidParameter("rainbow step must be non-zero"));
        }
        self.step = step;
        Ok(self)
    }

    pub const fn period(&self) -> Duration {
        self.period
    }

    /// Number of distinct wheel colors
    fn wheel_len(&self) -> usize {
        256usize.div_ceil(usize::from(self.step))
    }

    #[allow(clippy::cast_possible_truncation)]
    fn wheel_color(&self, index: usize) -> Rgb {
        colorwheel((index * usize::from(self.step)) as u8)
    }

    /// Move along the period. Returns `true` when the wheel wrapped around.
    #[allow(clippy::cast_possible_truncation)]
    fn advance(&mut self, now: Instant) -> bool {
        let period_ms = self.period.as_millis().max(1);
        let elapsed_ms = self
            .last_update
            .and_then(|last| now.checked_duration_since(last))
            .map_or(0, |elapsed| elapsed.as_millis());
        self.last_update = Some(now);

        let last_position = self.position_ms;
        self.position_ms = (self.position_ms + elapsed_ms) % period_ms;
        self.wheel_index = ((self.position_ms * self.wheel_len() as u64) / period_ms) as usize;

        self.position_ms < last_position
    }

    fn paint<C: Canvas + ?Sized>(&self, canvas: &mut C, intensity: Option<f32>) {
        let wheel_len = self.wheel_len();
        for index in 0..canvas.len() {
            let color = self.wheel_color((self.wheel_index + index) % wheel_len);
            let color = match intensity {
                Some(intensity) => calculate_intensity(color, intensity),
                None => color,
            };
            canvas.set(index, color.into());
        }
    }
}

impl Effect for RainbowEffect {
    fn draw<C: Canvas + ?Sized>(&mut self, now: Instant, canvas: &mut C) -> bool {
        let wrapped = self.advance(now);
        self.paint(canvas, None);
        wrapped
    }

    fn reset(&mut self) {
        self.position_ms = 0;
        self.last_update = None;
        self.wheel_index = 0;
    }
}

/// Dimmed rainbow with random full-brightness sparkles
///
/// The dimmed frame is transmitted first, then the sparkles are drawn on
/// top and transmitted in turn.
#[derive(Debug, Clone)]
pub struct RainbowSparkleEffect {
    rainbow: RainbowEffect,
    /// Sparkles per frame, derived from the strip length when unset
    num_sparkles: Option<usize>,
    background_brightness: f32,
    rng: SmallRng,
}

impl Default for RainbowSparkleEffect {
    fn default() -> Self {
        Self::new(Duration::from_millis(DEFAULT_PERIOD_MS))
    }
}

impl RainbowSparkleEffect {
    pub fn new(period: Duration) -> Self {
        Self {
            rainbow: RainbowEffect::new(period),
            num_sparkles: None,
            background_brightness: DEFAULT_BACKGROUND_BRIGHTNESS,
            rng: SmallRng::seed_from_u64(DEFAULT_SEED),
        }
    }

    /// Set the number of sparkles per frame
    #[must_use]
    pub fn with_num_sparkles(mut self, num_sparkles: usize) -> Self {
        self.num_sparkles = Some(num_sparkles);
        self
    }

    /// Set the brightness of the rainbow behind the sparkles (0.0-1.0)
    #[must_use]
    pub fn with_background_brightness(mut self, brightness: f32) -> Self {
        self.background_brightness = brightness.max(0.0).min(1.0);
        self
    }

    /// Set the wheel step
    pub fn with_step(mut self, step: u8) -> Result<Self, ConfigError> {
        self.rainbow = self.rainbow.with_step(step)?;
        Ok(self)
    }

    /// Seed the sparkle placement
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = SmallRng::seed_from_u64(seed);
        self
    }

    fn sparkles_for(&self, len: usize) -> usize {
        self.num_sparkles
            .unwrap_or_else(|| (len / PIXELS_PER_SPARKLE).max(1))
    }
}

impl Effect for RainbowSparkleEffect {
    const OVERLAY: bool = true;

    fn draw<C: Canvas + ?Sized>(&mut self, now: Instant, canvas: &mut C) -> bool {
        let wrapped = self.rainbow.advance(now);
        self.rainbow.paint(canvas, Some(self.background_brightness));
        wrapped
    }

    fn after_draw<C: Canvas + ?Sized>(&mut self, canvas: &mut C) {
        let len = canvas.len();
        if len == 0 {
            return;
        }
        let wheel_len = self.rainbow.wheel_len();
        for _ in 0..self.sparkles_for(len) {
            let index = self.rng.gen_range(0..len);
            let color = self
                .rainbow
                .wheel_color((self.rainbow.wheel_index + index) % wheel_len);
            canvas.set(index, color.into());
        }
    }

    fn reset(&mut self) {
        self.rainbow.reset();
    }
}
