//! Animation sequence
//!
//! Cycles through a fixed list of animations, switching on a fixed interval
//! and optionally when the active animation completes a cycle.

use embassy_time::{Duration, Instant};
use heapless::Vec;
use log::debug;

use crate::RawTransmitter;
use crate::animation::Animation;
use crate::canvas::Canvas;
use crate::color::Color;
use crate::error::{ConfigError, Error};
use crate::pixel_buf::PixelBuf;

/// Result of a single [`AnimationSequence::animate`] call
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tick {
    /// The active animation drew and transmitted a frame
    pub drawn: bool,
    /// Index of the animation activated during this call, if any
    pub switched_to: Option<usize>,
}

/// Ordered list of animations played one after another
///
/// `N` is the maximum number of members.
#[derive(Debug, Clone)]
pub struct AnimationSequence<const N: usize> {
    members: Vec<Animation, N>,
    current: usize,
    /// Time each member stays active, unset to switch manually
    advance_interval: Option<Duration>,
    /// Blank the buffer before activating the next member
    auto_clear: bool,
    /// Reset the next member before activating it
    auto_reset: bool,
    /// Switch as soon as the active member completes a cycle
    advance_on_cycle_complete: bool,
    /// Anchor of the advance interval, unset before the first frame
    last_advance: Option<Instant>,
    paused: bool,
    cycle_count: u32,
}

impl<const N: usize> AnimationSequence<N> {
    /// Create a sequence starting at the first member
    ///
    /// Auto-clear is on and there is no advance interval.
    pub fn new(members: impl IntoIterator<Item = Animation>) -> Result<Self, ConfigError> {
        let mut list = Vec::new();
        for member in members {
            list.push(member)
                .map_err(|_| ConfigError::TooManyMembers { capacity: N })?;
        }
        if list.is_empty() {
            return Err(ConfigError::EmptySequence);
        }

        Ok(Self {
            members: list,
            current: 0,
            advance_interval: None,
            auto_clear: true,
            auto_reset: false,
            advance_on_cycle_complete: false,
            last_advance: None,
            paused: false,
            cycle_count: 0,
        })
    }

    /// Switch to the next member every `interval`; a zero interval disables it
    #[must_use]
    pub fn with_advance_interval(mut self, interval: Duration) -> Self {
        self.advance_interval = (interval.as_ticks() > 0).then_some(interval);
        self
    }

    #[must_use]
    pub fn with_auto_clear(mut self, auto_clear: bool) -> Self {
        self.auto_clear = auto_clear;
        self
    }

    #[must_use]
    pub fn with_auto_reset(mut self, auto_reset: bool) -> Self {
        self.auto_reset = auto_reset;
        self
    }

    #[must_use]
    pub fn with_advance_on_cycle_complete(mut self, advance: bool) -> Self {
        self.advance_on_cycle_complete = advance;
        self
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub const fn current_index(&self) -> usize {
        self.current
    }

    /// Active animation
    pub fn current(&self) -> &Animation {
        &self.members[self.current]
    }

    pub const fn advance_interval(&self) -> Option<Duration> {
        self.advance_interval
    }

    /// Full passes through all members so far
    pub const fn cycle_count(&self) -> u32 {
        self.cycle_count
    }

    pub const fn is_paused(&self) -> bool {
        self.paused
    }

    /// Freeze the active member and the advance timer
    pub fn pause(&mut self) {
        self.paused = true;
    }

    /// Continue after `pause`; the advance interval restarts at `now`
    pub fn resume(&mut self, now: Instant) {
        self.paused = false;
        self.last_advance = Some(now);
    }

    /// Switch to member `index`
    ///
    /// The advance interval restarts at `now`. Out of range indices wrap.
    pub fn activate<C: Canvas + ?Sized>(&mut self, index: usize, now: Instant, canvas: &mut C) {
        self.switch_to(index % self.members.len(), canvas);
        self.last_advance = Some(now);
    }

    /// Switch to the following member
    pub fn next<C: Canvas + ?Sized>(&mut self, now: Instant, canvas: &mut C) {
        self.advance(canvas);
        self.last_advance = Some(now);
    }

    /// Switch to the preceding member
    pub fn previous<C: Canvas + ?Sized>(&mut self, now: Instant, canvas: &mut C) {
        let len = self.members.len();
        self.activate((self.current + len - 1) % len, now, canvas);
    }

    /// Reset every member and return to the first one
    pub fn reset(&mut self) {
        for member in &mut self.members {
            member.reset();
        }
        self.current = 0;
        self.last_advance = None;
    }

    /// Advance the sequence and animate the active member
    ///
    /// The first call anchors the advance interval. Each elapsed interval
    /// moves one member forward, so the active member is always
    /// `floor(elapsed / interval) mod len`.
    pub fn animate<T: RawTransmitter, const MAX_BYTES: usize>(
        &mut self,
        now: Instant,
        pixels: &mut PixelBuf<T, MAX_BYTES>,
    ) -> Result<Tick, Error<T::Error>> {
        let mut tick = Tick::default();
        if self.paused {
            return Ok(tick);
        }

        let mut last_advance = *self.last_advance.get_or_insert(now);
        if let Some(interval) = self.advance_interval {
            while now >= last_advance + interval {
                self.advance(pixels.canvas());
                last_advance += interval;
                tick.switched_to = Some(self.current);
            }
            self.last_advance = Some(last_advance);
        }

        let member = &mut self.members[self.current];
        let cycles = member.cycle_count();
        tick.drawn = member.animate(now, pixels)?;

        if self.advance_on_cycle_complete && member.cycle_count() != cycles {
            self.next(now, pixels.canvas());
            tick.switched_to = Some(self.current);
        }

        Ok(tick)
    }

    fn advance<C: Canvas + ?Sized>(&mut self, canvas: &mut C) {
        let next = self.current + 1;
        if next >= self.members.len() {
            self.cycle_count = self.cycle_count.wrapping_add(1);
        }
        self.switch_to(next % self.members.len(), canvas);
    }

    fn switch_to<C: Canvas + ?Sized>(&mut self, index: usize, canvas: &mut C) {
        if self.auto_clear {
            canvas.fill(Color::OFF);
        }
        self.current = index;
        if self.auto_reset {
            self.members[index].reset();
        }
        debug!(
            "sequence switched to #{} ({})",
            index,
            self.members[index].id().as_str()
        );
    }
}
