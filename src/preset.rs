//! Rainbow showcase preset
//!
//! A 120 pixel WBGR strip on `D13` cycling through four rainbow animations,
//! five seconds each.

use embassy_time::Duration;

use crate::animation::{
    Animation, ChaseEffect, CometEffect, CometMotion, RainbowEffect, RainbowSparkleEffect,
};
use crate::board::{self, Pin};
use crate::byte_order::ByteOrder;
use crate::error::ConfigError;
use crate::pixel_buf::PixelBufConfig;
use crate::sequence::AnimationSequence;

pub const NUM_PIXELS: usize = 120;
pub const PIN: Pin = board::D13;
pub const BYTE_ORDER: &str = "WBGR";
/// Buffer capacity for `NUM_PIXELS` four-channel pixels
pub const MAX_BYTES: usize = NUM_PIXELS * 4;
/// Number of animations in the sequence
pub const MEMBERS: usize = 4;

/// Time between frames of every animation
pub const SPEED: Duration = Duration::from_millis(20);
/// Time each animation stays on
pub const ADVANCE_INTERVAL: Duration = Duration::from_secs(5);

const RAINBOW_PERIOD: Duration = Duration::from_secs(2);
const CHASE_SIZE: usize = 5;
const CHASE_SPACING: usize = 3;
const COMET_TAIL: usize = 7;
const NUM_SPARKLES: usize = 15;

/// Buffer settings of the preset strip, flushing on every write
pub fn pixel_config() -> Result<PixelBufConfig, ConfigError> {
    Ok(PixelBufConfig {
        byte_order: ByteOrder::parse(BYTE_ORDER)?,
        auto_write: true,
        ..PixelBufConfig::default()
    })
}

/// Rainbow, rainbow chase, bouncing rainbow comet and rainbow sparkle
///
/// `seed` drives the sparkle placement.
pub fn rainbow_sequence(seed: u64) -> Result<AnimationSequence<MEMBERS>, ConfigError> {
    let sequence = AnimationSequence::new([
        Animation::new(RainbowEffect::new(RAINBOW_PERIOD), SPEED),
        Animation::new(ChaseEffect::rainbow(CHASE_SIZE, CHASE_SPACING)?, SPEED),
        Animation::new(
            CometEffect::rainbow(COMET_TAIL).with_motion(CometMotion::Bounce),
            SPEED,
        ),
        Animation::new(
            RainbowSparkleEffect::default()
                .with_num_sparkles(NUM_SPARKLES)
                .with_seed(seed),
            SPEED,
        ),
    ])?
    .with_advance_interval(ADVANCE_INTERVAL)
    .with_auto_clear(true);
    Ok(sequence)
}
