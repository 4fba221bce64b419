//! Animation system with compile-time known effect variants
//!
//! All effects are stored in an enum to avoid heap allocations.
//! Each effect implements the `Effect` trait; [`Animation`] adds frame
//! pacing on top and flushes the pixel buffer.

mod chase;
mod comet;
mod rainbow;
mod solid;
mod sparkle;

use embassy_time::{Duration, Instant};
pub use chase::ChaseEffect;
pub use comet::{CometEffect, CometMotion};
pub use rainbow::{RainbowEffect, RainbowSparkleEffect};
pub use solid::SolidEffect;
pub use sparkle::{MAX_SPARKLES, SparkleEffect};

use crate::{RawTransmitter, canvas::Canvas, error::Error, pixel_buf::PixelBuf};

/// Seed of effects with random placement
const DEFAULT_SEED: u64 = 0x5EED_1ED5;

const ANIMATION_NAME_SOLID: &str = "solid";
const ANIMATION_NAME_RAINBOW: &str = "rainbow";
const ANIMATION_NAME_CHASE: &str = "chase";
const ANIMATION_NAME_RAINBOW_CHASE: &str = "rainbow_chase";
const ANIMATION_NAME_COMET: &str = "comet";
const ANIMATION_NAME_RAINBOW_COMET: &str = "rainbow_comet";
const ANIMATION_NAME_SPARKLE: &str = "sparkle";
const ANIMATION_NAME_RAINBOW_SPARKLE: &str = "rainbow_sparkle";

const ANIMATION_ID_SOLID: u8 = 0;
const ANIMATION_ID_RAINBOW: u8 = 1;
const ANIMATION_ID_CHASE: u8 = 2;
const ANIMATION_ID_RAINBOW_CHASE: u8 = 3;
const ANIMATION_ID_COMET: u8 = 4;
const ANIMATION_ID_RAINBOW_COMET: u8 = 5;
const ANIMATION_ID_SPARKLE: u8 = 6;
const ANIMATION_ID_RAINBOW_SPARKLE: u8 = 7;

pub trait Effect {
    /// Sets if the effect draws an overlay after its frame is transmitted
    ///
    /// The overlay is transmitted as a second write of the same frame.
    const OVERLAY: bool = false;

    /// Draw a single frame
    ///
    /// Returns `true` when the effect completed a cycle with this frame.
    fn draw<C: Canvas + ?Sized>(&mut self, now: Instant, canvas: &mut C) -> bool;

    /// Draw the overlay on top of the transmitted frame
    fn after_draw<C: Canvas + ?Sized>(&mut self, _canvas: &mut C) {}

    /// Reset effect state
    fn reset(&mut self) {}
}

/// Animation kind - enum containing all possible effects
#[derive(Debug, Clone)]
pub enum AnimationKind {
    Solid(SolidEffect),
    /// Color wheel scrolled along the strip
    Rainbow(RainbowEffect),
    /// Moving bars, solid or rainbow colored
    Chase(ChaseEffect),
    /// Travelling comet, solid or rainbow colored
    Comet(CometEffect),
    /// Random sparkles in one color
    Sparkle(SparkleEffect),
    /// Dimmed rainbow with bright sparkles
    RainbowSparkle(RainbowSparkleEffect),
}

/// Known animation ids.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum AnimationId {
    Solid = ANIMATION_ID_SOLID,
    Rainbow = ANIMATION_ID_RAINBOW,
    Chase = ANIMATION_ID_CHASE,
    RainbowChase = ANIMATION_ID_RAINBOW_CHASE,
    Comet = ANIMATION_ID_COMET,
    RainbowComet = ANIMATION_ID_RAINBOW_COMET,
    Sparkle = ANIMATION_ID_SPARKLE,
    RainbowSparkle = ANIMATION_ID_RAINBOW_SPARKLE,
}

impl AnimationId {
    pub fn from_raw(value: u8) -> Option<Self> {
        Some(match value {
            ANIMATION_ID_SOLID => Self::Solid,
            ANIMATION_ID_RAINBOW => Self::Rainbow,
            ANIMATION_ID_CHASE => Self::Chase,
            ANIMATION_ID_RAINBOW_CHASE => Self::RainbowChase,
            ANIMATION_ID_COMET => Self::Comet,
            ANIMATION_ID_RAINBOW_COMET => Self::RainbowComet,
            ANIMATION_ID_SPARKLE => Self::Sparkle,
            ANIMATION_ID_RAINBOW_SPARKLE => Self::RainbowSparkle,
            _ => return None,
        })
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Solid => ANIMATION_NAME_SOLID,
            Self::Rainbow => ANIMATION_NAME_RAINBOW,
            Self::Chase => ANIMATION_NAME_CHASE,
            Self::RainbowChase => ANIMATION_NAME_RAINBOW_CHASE,
            Self::Comet => ANIMATION_NAME_COMET,
            Self::RainbowComet => ANIMATION_NAME_RAINBOW_COMET,
            Self::Sparkle => ANIMATION_NAME_SPARKLE,
            Self::RainbowSparkle => ANIMATION_NAME_RAINBOW_SPARKLE,
        }
    }

    pub fn parse_from_str(s: &str) -> Option<Self> {
        match s {
            ANIMATION_NAME_SOLID => Some(Self::Solid),
            ANIMATION_NAME_RAINBOW => Some(Self::Rainbow),
            ANIMATION_NAME_CHASE => Some(Self::Chase),
            ANIMATION_NAME_RAINBOW_CHASE => Some(Self::RainbowChase),
            ANIMATION_NAME_COMET => Some(Self::Comet),
            ANIMATION_NAME_RAINBOW_COMET => Some(Self::RainbowComet),
            ANIMATION_NAME_SPARKLE => Some(Self::Sparkle),
            ANIMATION_NAME_RAINBOW_SPARKLE => Some(Self::RainbowSparkle),
            _ => None,
        }
    }
}

impl AnimationKind {
    /// Returns if the effect draws an overlay after transmitting its frame
    ///
    /// Derived from each effect's `Effect::OVERLAY` constant.
    pub fn has_overlay(&self) -> bool {
        match self {
            Self::Solid(_) => SolidEffect::OVERLAY,
            Self::Rainbow(_) => RainbowEffect::OVERLAY,
            Self::Chase(_) => ChaseEffect::OVERLAY,
            Self::Comet(_) => CometEffect::OVERLAY,
            Self::Sparkle(_) => SparkleEffect::OVERLAY,
            Self::RainbowSparkle(_) => RainbowSparkleEffect::OVERLAY,
        }
    }

    /// Draw the current effect
    pub fn draw<C: Canvas + ?Sized>(&mut self, now: Instant, canvas: &mut C) -> bool {
        match self {
            Self::Solid(effect) => effect.draw(now, canvas),
            Self::Rainbow(effect) => effect.draw(now, canvas),
            Self::Chase(effect) => effect.draw(now, canvas),
            Self::Comet(effect) => effect.draw(now, canvas),
            Self::Sparkle(effect) => effect.draw(now, canvas),
            Self::RainbowSparkle(effect) => effect.draw(now, canvas),
        }
    }

    /// Draw the overlay of the current effect
    pub fn after_draw<C: Canvas + ?Sized>(&mut self, canvas: &mut C) {
        match self {
            Self::Solid(effect) => effect.after_draw(canvas),
            Self::Rainbow(effect) => effect.after_draw(canvas),
            Self::Chase(effect) => effect.after_draw(canvas),
            Self::Comet(effect) => effect.after_draw(canvas),
            Self::Sparkle(effect) => effect.after_draw(canvas),
            Self::RainbowSparkle(effect) => effect.after_draw(canvas),
        }
    }

    /// Reset the effect state
    pub fn reset(&mut self) {
        match self {
            Self::Solid(effect) => Effect::reset(effect),
            Self::Rainbow(effect) => Effect::reset(effect),
            Self::Chase(effect) => Effect::reset(effect),
            Self::Comet(effect) => Effect::reset(effect),
            Self::Sparkle(effect) => Effect::reset(effect),
            Self::RainbowSparkle(effect) => Effect::reset(effect),
        }
    }

    /// Get the animation ID for external observation
    pub fn id(&self) -> AnimationId {
        match self {
            Self::Solid(_) => AnimationId::Solid,
            Self::Rainbow(_) => AnimationId::Rainbow,
            Self::Chase(effect) if effect.is_rainbow() => AnimationId::RainbowChase,
            Self::Chase(_) => AnimationId::Chase,
            Self::Comet(effect) if effect.is_rainbow() => AnimationId::RainbowComet,
            Self::Comet(_) => AnimationId::Comet,
            Self::Sparkle(_) => AnimationId::Sparkle,
            Self::RainbowSparkle(_) => AnimationId::RainbowSparkle,
        }
    }
}

impl From<SolidEffect> for AnimationKind {
    fn from(effect: SolidEffect) -> Self {
        Self::Solid(effect)
    }
}

impl From<RainbowEffect> for AnimationKind {
    fn from(effect: RainbowEffect) -> Self {
        Self::Rainbow(effect)
    }
}

impl From<ChaseEffect> for AnimationKind {
    fn from(effect: ChaseEffect) -> Self {
        Self::Chase(effect)
    }
}

impl From<CometEffect> for AnimationKind {
    fn from(effect: CometEffect) -> Self {
        Self::Comet(effect)
    }
}

impl From<SparkleEffect> for AnimationKind {
    fn from(effect: SparkleEffect) -> Self {
        Self::Sparkle(effect)
    }
}

impl From<RainbowSparkleEffect> for AnimationKind {
    fn from(effect: RainbowSparkleEffect) -> Self {
        Self::RainbowSparkle(effect)
    }
}

/// Effect paced at a fixed speed
#[derive(Debug, Clone)]
pub struct Animation {
    kind: AnimationKind,
    /// Time between frames
    speed: Duration,
    /// Earliest time of the next frame, unset before the first frame
    next_update: Option<Instant>,
    paused: bool,
    draw_count: u32,
    cycle_count: u32,
}

impl Animation {
    pub fn new(kind: impl Into<AnimationKind>, speed: Duration) -> Self {
        Self {
            kind: kind.into(),
            speed,
            next_update: None,
            paused: false,
            draw_count: 0,
            cycle_count: 0,
        }
    }

    pub fn id(&self) -> AnimationId {
        self.kind.id()
    }

    pub const fn kind(&self) -> &AnimationKind {
        &self.kind
    }

    pub const fn speed(&self) -> Duration {
        self.speed
    }

    /// Frames drawn so far
    pub const fn draw_count(&self) -> u32 {
        self.draw_count
    }

    /// Cycles the effect completed so far
    pub const fn cycle_count(&self) -> u32 {
        self.cycle_count
    }

    pub const fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn pause(&mut self) {
        self.paused = true;
    }

    pub fn resume(&mut self) {
        self.paused = false;
    }

    /// Reset the effect; the next call to `animate` draws immediately
    pub fn reset(&mut self) {
        self.kind.reset();
        self.next_update = None;
    }

    /// Draw and transmit a frame if one is due
    ///
    /// Returns `Ok(false)` when paused or when the next frame is not due yet.
    pub fn animate<T: RawTransmitter, const MAX_BYTES: usize>(
        &mut self,
        now: Instant,
        pixels: &mut PixelBuf<T, MAX_BYTES>,
    ) -> Result<bool, Error<T::Error>> {
        if self.paused {
            return Ok(false);
        }
        if let Some(next_update) = self.next_update {
            if now < next_update {
                return Ok(false);
            }
        }

        self.draw_count = self.draw_count.wrapping_add(1);
        let completed = self.kind.draw(now, pixels.canvas());
        if self.kind.has_overlay() {
            pixels.show()?;
            self.kind.after_draw(pixels.canvas());
        }
        pixels.show()?;

        if completed {
            self.cycle_count = self.cycle_count.wrapping_add(1);
        }
        self.next_update = Some(now + self.speed);

        Ok(true)
    }
}
