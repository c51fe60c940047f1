//! Free-running tick counters and the sources that produce them.
//!
//! A tick is one millisecond read from an unsigned counter that wraps at its
//! maximum value. All arithmetic here is modular: nothing saturates and
//! nothing panics on overflow.

use std::fmt::Debug;

/// Unsigned fixed-width tick counter.
///
/// Implemented for `u8`, `u16`, `u32`, `u64` and `usize`. The width defines
/// the wraparound period; a `u32` millisecond counter wraps after roughly
/// 49.7 days, a `u8` one every 256 ms.
///
/// # Example
///
/// ```rust
/// use stateful_loop::core::Tick;
///
/// assert_eq!(<u8 as Tick>::MAX, 255);
/// assert_eq!(Tick::wrapping_sub(3u8, 250u8), 9);
/// assert_eq!(<u8 as Tick>::truncate(300), 44);
/// ```
pub trait Tick: Copy + Ord + Debug + 'static {
    /// Start of an epoch.
    const ZERO: Self;

    /// Last value before the counter wraps back to `ZERO`.
    const MAX: Self;

    /// `self - rhs` modulo the counter range.
    fn wrapping_sub(self, rhs: Self) -> Self;

    /// `self + rhs` modulo the counter range.
    fn wrapping_add(self, rhs: Self) -> Self;

    /// Keep the low bits of a wide millisecond count, the way a hardware
    /// counter of this width would read after `millis` milliseconds.
    fn truncate(millis: u128) -> Self;

    /// Convert a millisecond delay, clamping it to `MAX`.
    ///
    /// Returns the converted value and whether clamping happened.
    fn saturating_from_millis(millis: u64) -> (Self, bool);

    /// Widen to `u64` for diagnostics.
    fn to_u64(self) -> u64;
}

macro_rules! impl_tick {
    ($($t:ty),* $(,)?) => {
        $(
            impl Tick for $t {
                const ZERO: Self = 0;
                const MAX: Self = <$t>::MAX;

                #[inline]
                fn wrapping_sub(self, rhs: Self) -> Self {
                    <$t>::wrapping_sub(self, rhs)
                }

                #[inline]
                fn wrapping_add(self, rhs: Self) -> Self {
                    <$t>::wrapping_add(self, rhs)
                }

                #[inline]
                fn truncate(millis: u128) -> Self {
                    millis as $t
                }

                #[inline]
                fn saturating_from_millis(millis: u64) -> (Self, bool) {
                    if millis > <$t>::MAX as u64 {
                        (<$t>::MAX, true)
                    } else {
                        (millis as $t, false)
                    }
                }

                #[inline]
                fn to_u64(self) -> u64 {
                    self as u64
                }
            }
        )*
    };
}

impl_tick!(u8, u16, u32, u64, usize);

/// Host-supplied reading of the free-running tick counter.
///
/// The scheduler only ever reads it, once per poll and once per external
/// `arm`. Any `FnMut() -> T` closure is a tick source, so a platform's
/// `millis()` function can be injected directly.
///
/// # Example
///
/// ```rust
/// use stateful_loop::core::TickSource;
///
/// let mut ticks = 0u16;
/// let mut source = move || {
///     ticks = ticks.wrapping_add(1);
///     ticks
/// };
/// assert_eq!(source.now(), 1);
/// assert_eq!(source.now(), 2);
/// ```
pub trait TickSource {
    /// Counter width produced by this source.
    type Tick: Tick;

    /// Current counter value.
    fn now(&mut self) -> Self::Tick;
}

impl<T, F> TickSource for F
where
    T: Tick,
    F: FnMut() -> T,
{
    type Tick = T;

    fn now(&mut self) -> T {
        self()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrapping_sub_crosses_the_boundary() {
        assert_eq!(Tick::wrapping_sub(2u8, 254u8), 4);
        assert_eq!(Tick::wrapping_sub(3u32, u32::MAX - 4), 8);
        assert_eq!(Tick::wrapping_sub(10u16, 4u16), 6);
    }

    #[test]
    fn wrapping_add_rolls_over_to_zero() {
        assert_eq!(Tick::wrapping_add(u8::MAX, 1u8), 0);
        assert_eq!(Tick::wrapping_add(u32::MAX - 1, 3u32), 1);
    }

    #[test]
    fn truncate_keeps_low_bits() {
        assert_eq!(<u8 as Tick>::truncate(256), 0);
        assert_eq!(<u16 as Tick>::truncate(65_537), 1);
        assert_eq!(<u32 as Tick>::truncate(u128::from(u32::MAX) + 6), 5);
    }

    #[test]
    fn saturating_from_millis_clamps_to_max() {
        assert_eq!(<u8 as Tick>::saturating_from_millis(200), (200, false));
        assert_eq!(<u8 as Tick>::saturating_from_millis(1_000), (u8::MAX, true));
        assert_eq!(
            <u64 as Tick>::saturating_from_millis(u64::MAX),
            (u64::MAX, false)
        );
    }

    #[test]
    fn closures_are_tick_sources() {
        let readings = [7u32, 9, 12];
        let mut index = 0;
        let mut source = || {
            let value = readings[index];
            index += 1;
            value
        };

        assert_eq!(TickSource::now(&mut source), 7);
        assert_eq!(TickSource::now(&mut source), 9);
        assert_eq!(TickSource::now(&mut source), 12);
    }
}
