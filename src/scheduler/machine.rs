//! Scheduler that drives the current state from the host's polling loop.

use crate::core::{ElapsedPolicy, Next, PendingTransition, State, Tick, TickSource};

/// Cooperative transition scheduler.
///
/// Holds the current state, one pending transition and the last tick
/// reading. The host calls [`poll`](Self::poll) on every iteration of its
/// loop. A state becoming current is invoked exactly once, on the poll after
/// the one that activated it.
pub struct Scheduler<S: State, C: TickSource> {
    clock: C,
    current: Option<S>,
    pending_invocation: bool,
    last_poll: C::Tick,
    transition: PendingTransition<S, C::Tick>,
    policy: ElapsedPolicy,
}

impl<S: State, C: TickSource> Scheduler<S, C> {
    /// Create an idle scheduler with no current state and nothing armed.
    pub fn new(clock: C) -> Self {
        Self {
            clock,
            current: None,
            pending_invocation: false,
            last_poll: <C::Tick as Tick>::ZERO,
            transition: PendingTransition::new(),
            policy: ElapsedPolicy::default(),
        }
    }

    /// Use `policy` for every subsequent elapsed check.
    pub fn with_policy(mut self, policy: ElapsedPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Arm a transition to `target` after `delay_ms` milliseconds.
    ///
    /// `target` may be a state or `None` for an empty target, which leaves
    /// the scheduler with nothing to invoke once it fires. Any transition
    /// still pending is discarded. The current state is unchanged until a
    /// poll sees the delay elapse. Delays wider than the tick counter are
    /// clamped to its maximum, the same as [`Next::after`].
    pub fn arm(&mut self, target: impl Into<Option<S>>, delay_ms: u64) {
        let now = self.clock.now();
        self.arm_at(target.into(), now, delay_ms);
    }

    /// Arm a transition to `target` for the next poll.
    pub fn arm_now(&mut self, target: impl Into<Option<S>>) {
        self.arm(target, 0);
    }

    fn arm_at(&mut self, target: Option<S>, now: C::Tick, delay_ms: u64) {
        let (delay, clamped) = <C::Tick as Tick>::saturating_from_millis(delay_ms);
        if clamped {
            tracing::warn!(
                requested = delay_ms,
                max = delay.to_u64(),
                "requested delay exceeds tick counter range, clamping"
            );
        }

        let dropped = self.transition.arm(target, now, delay);
        let next_state = self.transition.target().map_or("<none>", |s| s.name());
        if let Some(dropped) = dropped {
            tracing::debug!(
                dropped = dropped.as_ref().map_or("<none>", |s| s.name()),
                next_state,
                "pending transition replaced"
            );
        }
        tracing::debug!(
            next_state,
            armed_at = now.to_u64(),
            delay = delay.to_u64(),
            "transition armed"
        );
    }

    /// The state presently current, if any.
    pub fn current_state(&self) -> Option<&S> {
        self.current.as_ref()
    }

    /// Whether a transition is waiting to fire.
    pub fn is_armed(&self) -> bool {
        self.transition.is_active()
    }

    /// The pending transition record.
    pub fn pending(&self) -> &PendingTransition<S, C::Tick> {
        &self.transition
    }

    /// Tick read by the most recent poll.
    pub fn last_poll_tick(&self) -> C::Tick {
        self.last_poll
    }

    /// Policy used for elapsed checks.
    pub fn policy(&self) -> ElapsedPolicy {
        self.policy
    }

    /// Run one iteration: invoke a freshly activated state, then fire the
    /// pending transition if its delay is over.
    ///
    /// Never blocks and never fails. A request the invoked state leaves in
    /// its [`Next`] handle is armed at this poll's tick.
    pub fn poll(&mut self) {
        let now = self.clock.now();
        self.last_poll = now;

        if self.pending_invocation {
            self.pending_invocation = false;
            self.invoke_current(now);
        }

        if self.transition.has_elapsed(now, self.policy) {
            self.current = self.transition.fire();
            self.pending_invocation = true;
            tracing::debug!(
                state = self.current.as_ref().map_or("<none>", |s| s.name()),
                tick = now.to_u64(),
                "transition fired"
            );
        }
    }

    fn invoke_current(&mut self, now: C::Tick) {
        let Some(state) = &self.current else {
            return;
        };

        let mut next = Next::new();
        state.run(&mut next);

        if let Some(request) = next.take() {
            let (target, delay_ms) = request.into_parts();
            self.arm_at(target, now, delay_ms);
        }
    }
}
