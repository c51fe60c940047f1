//! Builder API for configuring schedulers.
//!
//! This module provides a fluent builder, a serde-loadable configuration and
//! the `state_enum!` macro for declaring states with minimal boilerplate.

pub mod config;
pub mod error;
pub mod machine;
pub mod macros;

pub use config::SchedulerConfig;
pub use error::BuildError;
pub use machine::SchedulerBuilder;
