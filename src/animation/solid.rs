use embassy_time::Instant;

use super::Effect;
use crate::{canvas::Canvas, color::Rgb};

/// Solid color fill
#[derive(Debug, Clone)]
pub struct SolidEffect {
    color: Rgb,
}

impl SolidEffect {
    pub const fn new(color: Rgb) -> Self {
        Self { color }
    }
}

impl Effect for SolidEffect {
    fn draw<C: Canvas + ?Sized>(&mut self, _now: Instant, canvas: &mut C) -> bool {
        canvas.fill(self.color.into());
        // Every frame is a full cycle
        true
    }
}
