//! Explicit source of "now" and the viewer's local offset
//!
//! Nothing else in the crate reads the system clock or time zone; callers pass a [`Clock`].

use chrono::{Duration, FixedOffset, Local, Offset, Utc};

use crate::types::Instant;

/// Supplies the current instant and the local UTC offset
pub trait Clock {
    fn now(&self) -> Instant;
    fn local_offset(&self) -> FixedOffset;
}

/// Reads the operating system clock and zone
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Utc::now()
    }

    fn local_offset(&self) -> FixedOffset {
        Local::now().offset().fix()
    }
}

/// A clock frozen at one instant and offset
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    now: Instant,
    offset: FixedOffset,
}

impl FixedClock {
    pub fn new(now: Instant, offset: FixedOffset) -> Self {
        Self { now, offset }
    }

    /// A frozen clock for a viewer sitting at UTC
    pub fn utc(now: Instant) -> Self {
        Self::new(now, Utc.fix())
    }
}

impl Clock for FixedClock {
    fn now(&self) -> Instant {
        self.now
    }

    fn local_offset(&self) -> FixedOffset {
        self.offset
    }
}

/// Shift `now` so that its UTC fields read like the local wall clock
///
/// Formatting always happens at UTC, so a viewer at +02:00 looking at 10:00Z must be seeded with
/// 12:00Z to see their own 12:00.
pub fn wall_clock_instant(now: Instant, offset: FixedOffset) -> Instant {
    let shift = Duration::seconds(i64::from(offset.local_minus_utc()));
    now.checked_add_signed(shift).unwrap_or(now)
}
