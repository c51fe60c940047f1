//! The transition scheduler and the tick sources that drive it.
//!
//! This is the imperative shell around `core`: it owns the tick source,
//! reads it once per poll and invokes state behaviors.
//!
//! # Example
//!
//! ```rust
//! use stateful_loop::scheduler::{ManualClock, Scheduler};
//! use stateful_loop::state_enum;
//! use stateful_loop::core::Next;
//!
//! state_enum! {
//!     enum Valve {
//!         Closed => closed,
//!         Open => open,
//!     }
//! }
//!
//! fn closed(next: &mut Next<Valve>) {
//!     next.after(Valve::Open, 100);
//! }
//!
//! fn open(next: &mut Next<Valve>) {
//!     next.after(Valve::Closed, 20);
//! }
//!
//! let clock = ManualClock::new(0u32);
//! let mut scheduler: Scheduler<Valve, _> = Scheduler::new(clock.clone());
//! scheduler.arm_now(Valve::Closed);
//!
//! clock.advance(1);
//! scheduler.poll(); // Closed becomes current
//! scheduler.poll(); // Closed runs and arms Open
//! assert_eq!(scheduler.current_state(), Some(&Valve::Closed));
//!
//! clock.advance(101);
//! scheduler.poll();
//! assert_eq!(scheduler.current_state(), Some(&Valve::Open));
//! ```

mod clock;
mod machine;

pub use clock::{ManualClock, MonotonicMillis};
pub use machine::Scheduler;
