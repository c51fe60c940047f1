//! The pending transition record and its wraparound-safe elapsed check.

use super::tick::Tick;
use serde::{Deserialize, Serialize};

/// How [`PendingTransition::has_elapsed`] decides that a delay is over.
///
/// # Example
///
/// ```rust
/// use stateful_loop::core::ElapsedPolicy;
///
/// assert_eq!(ElapsedPolicy::default(), ElapsedPolicy::Legacy);
/// let policy: ElapsedPolicy = serde_json::from_str("\"modular\"").unwrap();
/// assert_eq!(policy, ElapsedPolicy::Modular);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ElapsedPolicy {
    /// Epoch carry-over on wrap and a strict `>` comparison.
    ///
    /// A transition armed at `A` with delay `D` fires once `now - A > D`.
    /// When a wrap is seen and `MAX - A < D`, the remaining delay is carried
    /// into the new epoch (`D -= MAX - A`, `A = 0`); otherwise the transition
    /// fires on the poll that observes the wrap.
    #[default]
    Legacy,

    /// Plain modular distance: fires once `now.wrapping_sub(A) >= D`, or when
    /// that distance shrinks between two polls because a poll gap jumped past
    /// the end of the counter range.
    ///
    /// A zero delay fires on the next poll even at an unchanged tick, and the
    /// fire tick is exact across one wrap.
    Modular,
}

/// The single transition waiting to fire.
///
/// Re-arming replaces the record wholesale; nothing is queued.
///
/// # Example
///
/// ```rust
/// use stateful_loop::core::{ElapsedPolicy, PendingTransition};
///
/// let mut pending = PendingTransition::<&str, u32>::new();
/// pending.arm(Some("lit"), 100, 20);
///
/// assert!(!pending.has_elapsed(120, ElapsedPolicy::Legacy));
/// assert!(pending.has_elapsed(121, ElapsedPolicy::Legacy));
/// assert_eq!(pending.fire(), Some("lit"));
/// assert!(!pending.is_active());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PendingTransition<S, T> {
    armed_at: T,
    delay: T,
    last_observed: T,
    target: Option<S>,
    active: bool,
}

impl<S, T: Tick> PendingTransition<S, T> {
    /// Create an inactive record.
    pub fn new() -> Self {
        Self {
            armed_at: T::ZERO,
            delay: T::ZERO,
            last_observed: T::ZERO,
            target: None,
            active: false,
        }
    }

    /// Arm `target` at tick `now`, replacing whatever was pending.
    ///
    /// Returns the target that was dropped, if a transition was still active.
    pub fn arm(&mut self, target: Option<S>, now: T, delay: T) -> Option<Option<S>> {
        let was_active = self.active;
        let dropped = std::mem::replace(&mut self.target, target);
        self.armed_at = now;
        self.last_observed = now;
        self.delay = delay;
        self.active = true;
        was_active.then_some(dropped)
    }

    /// Check whether the delay is over at tick `now`.
    ///
    /// Tolerates one counter wraparound between arming and `now`. Updates the
    /// wrap baseline on every call, and under [`ElapsedPolicy::Legacy`] may
    /// move the record into the post-wrap epoch. An inactive record never
    /// elapses.
    pub fn has_elapsed(&mut self, now: T, policy: ElapsedPolicy) -> bool {
        if !self.active {
            return false;
        }

        let elapsed = match policy {
            ElapsedPolicy::Legacy => self.legacy_elapsed(now),
            ElapsedPolicy::Modular => self.modular_elapsed(now),
        };
        self.last_observed = now;
        elapsed
    }

    fn modular_elapsed(&self, now: T) -> bool {
        let distance = now.wrapping_sub(self.armed_at);
        // A shrinking distance means a poll gap carried it past `MAX`.
        distance >= self.delay || distance < self.last_observed.wrapping_sub(self.armed_at)
    }

    fn legacy_elapsed(&mut self, now: T) -> bool {
        if now < self.last_observed {
            let consumed = T::MAX.wrapping_sub(self.armed_at);
            if consumed >= self.delay {
                return true;
            }
            self.delay = self.delay.wrapping_sub(consumed);
            self.armed_at = T::ZERO;
            tracing::trace!(
                consumed = consumed.to_u64(),
                remaining = self.delay.to_u64(),
                "tick counter wrapped, carrying delay into new epoch"
            );
        }
        now.wrapping_sub(self.armed_at) > self.delay
    }

    /// Deactivate the record and hand over its target.
    pub fn fire(&mut self) -> Option<S> {
        self.active = false;
        self.target.take()
    }

    /// Whether a transition is pending.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Tick the transition counts from. Reset to zero on a legacy wrap.
    pub fn armed_at(&self) -> T {
        self.armed_at
    }

    /// Remaining delay in ticks relative to [`armed_at`](Self::armed_at).
    pub fn delay(&self) -> T {
        self.delay
    }

    /// Tick seen by the most recent elapsed check.
    pub fn last_observed(&self) -> T {
        self.last_observed
    }

    /// Target of the pending transition.
    pub fn target(&self) -> Option<&S> {
        self.target.as_ref()
    }
}

impl<S, T: Tick> Default for PendingTransition<S, T> {
    fn default() -> Self {
        Self::new()
    }
}
