//! Stateful Loop: a cooperative, tick-driven state scheduler
//!
//! The host calls [`Scheduler::poll`] from its control loop as often as it
//! can. The scheduler invokes the current state's behavior once per
//! activation and moves to the next state once that transition's delay has
//! elapsed on a free-running millisecond counter, including across the
//! counter's wraparound.
//!
//! # Core Concepts
//!
//! - **State**: A behavior invoked once each time it becomes current, via the `State` trait
//! - **Tick source**: The host's free-running counter, injected as a `TickSource`
//! - **Pending transition**: At most one armed transition; re-arming replaces it
//! - **Elapsed policy**: Legacy strict comparison with epoch carry-over, or plain modular distance
//!
//! The scheduler never allocates, blocks or fails at runtime.
//!
//! # Example
//!
//! ```rust
//! use stateful_loop::core::Next;
//! use stateful_loop::scheduler::ManualClock;
//! use stateful_loop::{state_enum, SchedulerBuilder};
//!
//! state_enum! {
//!     enum Led {
//!         Off => off,
//!         On => on,
//!     }
//! }
//!
//! fn off(next: &mut Next<Led>) {
//!     next.after(Led::On, 500);
//! }
//!
//! fn on(next: &mut Next<Led>) {
//!     next.after(Led::Off, 500);
//! }
//!
//! let clock = ManualClock::new(0u32);
//! let mut scheduler = SchedulerBuilder::new()
//!     .clock(clock.clone())
//!     .initial(Led::Off)
//!     .build()
//!     .unwrap();
//!
//! for _ in 0..2_000 {
//!     clock.advance(1);
//!     scheduler.poll();
//! }
//! assert_eq!(scheduler.current_state(), Some(&Led::On));
//! ```

pub mod builder;
pub mod core;
pub mod scheduler;

// Re-export commonly used types
pub use crate::builder::{BuildError, SchedulerBuilder, SchedulerConfig};
pub use crate::core::{ElapsedPolicy, Next, State, Tick, TickSource};
pub use crate::scheduler::{ManualClock, MonotonicMillis, Scheduler};
