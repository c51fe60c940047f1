//! The `State` trait and the handle a state uses to schedule its successor.
//!
//! A state is a behavior the scheduler invokes once per activation. It
//! carries no execution context; anything it needs to remember between
//! activations lives in the host.

use std::fmt::Debug;

/// Trait for scheduler states.
///
/// States are small identifiers, usually the variants of a closed enum,
/// each mapped to one behavior. Prefer the [`state_enum!`](crate::state_enum)
/// macro over writing the impl by hand.
///
/// # Example
///
/// ```rust
/// use stateful_loop::core::{Next, State};
///
/// #[derive(Clone, PartialEq, Debug)]
/// enum Door {
///     Closed,
///     Open,
/// }
///
/// impl State for Door {
///     fn name(&self) -> &str {
///         match self {
///             Self::Closed => "Closed",
///             Self::Open => "Open",
///         }
///     }
///
///     fn run(&self, next: &mut Next<Self>) {
///         match self {
///             Self::Closed => next.after(Door::Open, 1_000),
///             Self::Open => next.after(Door::Closed, 5_000),
///         }
///     }
/// }
///
/// let mut next = Next::new();
/// Door::Closed.run(&mut next);
/// assert_eq!(next.request().map(|r| r.target()), Some(Some(&Door::Open)));
/// ```
pub trait State: PartialEq + Debug + Sized {
    /// Name used in log output.
    fn name(&self) -> &str;

    /// The state's behavior, invoked once each time the state becomes current.
    ///
    /// To move on, record the following transition in `next`; leaving it
    /// untouched keeps the state current until the host arms something else.
    fn run(&self, next: &mut Next<Self>);
}

/// A transition requested from inside a state's behavior.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Request<S> {
    target: Option<S>,
    delay_ms: u64,
}

impl<S> Request<S> {
    /// State to become current, `None` for an empty target.
    pub fn target(&self) -> Option<&S> {
        self.target.as_ref()
    }

    /// Requested delay in milliseconds.
    pub fn delay_ms(&self) -> u64 {
        self.delay_ms
    }

    pub(crate) fn into_parts(self) -> (Option<S>, u64) {
        (self.target, self.delay_ms)
    }
}

/// Handle passed to [`State::run`] for arming the next transition.
///
/// Holds at most one request; a later call replaces an earlier one, the same
/// last-writer-wins rule the scheduler applies to armed transitions.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Next<S> {
    request: Option<Request<S>>,
}

impl<S> Next<S> {
    /// Create an empty handle.
    pub fn new() -> Self {
        Self { request: None }
    }

    /// Move to `target` on the following poll.
    pub fn go(&mut self, target: S) {
        self.after(target, 0);
    }

    /// Move to `target` once `delay_ms` milliseconds have elapsed.
    ///
    /// Delays wider than the scheduler's tick counter are clamped to the
    /// counter's maximum.
    pub fn after(&mut self, target: S, delay_ms: u64) {
        self.request = Some(Request {
            target: Some(target),
            delay_ms,
        });
    }

    /// Arm an empty target: after `delay_ms` the scheduler has no current
    /// state and invokes nothing.
    pub fn clear(&mut self, delay_ms: u64) {
        self.request = Some(Request {
            target: None,
            delay_ms,
        });
    }

    /// The recorded request, if any.
    pub fn request(&self) -> Option<&Request<S>> {
        self.request.as_ref()
    }

    pub(crate) fn take(&mut self) -> Option<Request<S>> {
        self.request.take()
    }
}

impl<S> Default for Next<S> {
    fn default() -> Self {
        Self::new()
    }
}
