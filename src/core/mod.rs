//! Core scheduler types.
//!
//! - Tick counters and tick sources via the `Tick` and `TickSource` traits
//! - State definitions via the `State` trait and its `Next` handle
//! - The pending transition record and its wraparound-safe elapsed check
//!
//! Nothing in this module allocates or reads a clock on its own; the
//! scheduler feeds it tick readings.

mod state;
mod tick;
mod transition;

pub use state::{Next, Request, State};
pub use tick::{Tick, TickSource};
pub use transition::{ElapsedPolicy, PendingTransition};
