//! Ready-made tick sources.

use crate::core::{Tick, TickSource};
use std::cell::Cell;
use std::rc::Rc;
use std::time::Instant;

/// Hand-driven counter for deterministic hosts and tests.
///
/// Clones share the same counter, so one copy can be handed to a
/// [`Scheduler`](crate::scheduler::Scheduler) while another advances time.
///
/// # Example
///
/// ```rust
/// use stateful_loop::core::TickSource;
/// use stateful_loop::scheduler::ManualClock;
///
/// let clock = ManualClock::new(250u8);
/// let mut source = clock.clone();
///
/// clock.advance(10);
/// assert_eq!(source.now(), 4);
/// ```
#[derive(Clone, Debug, Default)]
pub struct ManualClock<T: Tick> {
    ticks: Rc<Cell<T>>,
}

impl<T: Tick> ManualClock<T> {
    /// Create a clock reading `start`.
    pub fn new(start: T) -> Self {
        Self {
            ticks: Rc::new(Cell::new(start)),
        }
    }

    /// Jump to an absolute reading. Moving backwards models a wrap.
    pub fn set(&self, ticks: T) {
        self.ticks.set(ticks);
    }

    /// Move forward by `ticks`, wrapping at the counter's maximum.
    pub fn advance(&self, ticks: T) {
        self.ticks.set(self.ticks.get().wrapping_add(ticks));
    }

    /// Current reading.
    pub fn get(&self) -> T {
        self.ticks.get()
    }
}

impl<T: Tick> TickSource for ManualClock<T> {
    type Tick = T;

    fn now(&mut self) -> T {
        self.ticks.get()
    }
}

/// Millisecond counter for hosted targets, backed by [`Instant`].
///
/// Reads the milliseconds since construction truncated to the width of `T`,
/// so it wraps exactly like a free-running hardware counter of that width.
#[derive(Clone, Copy, Debug)]
pub struct MonotonicMillis<T: Tick> {
    origin: Instant,
    offset: T,
}

impl<T: Tick> MonotonicMillis<T> {
    /// Start counting from zero now.
    pub fn new() -> Self {
        Self::starting_at(T::ZERO)
    }

    /// Start counting from `offset` now.
    ///
    /// Useful for starting a narrow counter close to its wrap point.
    pub fn starting_at(offset: T) -> Self {
        Self {
            origin: Instant::now(),
            offset,
        }
    }
}

impl<T: Tick> Default for MonotonicMillis<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Tick> TickSource for MonotonicMillis<T> {
    type Tick = T;

    fn now(&mut self) -> T {
        let elapsed = self.origin.elapsed().as_millis();
        T::truncate(elapsed + u128::from(self.offset.to_u64()))
    }
}
