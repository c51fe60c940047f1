//! Builder for constructing schedulers.

use crate::builder::config::SchedulerConfig;
use crate::builder::error::BuildError;
use crate::core::{ElapsedPolicy, State, Tick, TickSource};
use crate::scheduler::Scheduler;

/// Builder for constructing schedulers with a fluent API.
pub struct SchedulerBuilder<S: State, C: TickSource> {
    clock: Option<C>,
    initial: Option<S>,
    config: SchedulerConfig,
}

impl<S: State, C: TickSource> SchedulerBuilder<S, C> {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            clock: None,
            initial: None,
            config: SchedulerConfig::default(),
        }
    }

    /// Set the tick source (required).
    pub fn clock(mut self, clock: C) -> Self {
        self.clock = Some(clock);
        self
    }

    /// Arm a transition to `state` when the scheduler is built.
    pub fn initial(mut self, state: S) -> Self {
        self.initial = Some(state);
        self
    }

    /// Set the elapsed-time policy.
    pub fn policy(mut self, policy: ElapsedPolicy) -> Self {
        self.config.policy = policy;
        self
    }

    /// Delay before the initial state becomes current.
    pub fn initial_delay_ms(mut self, delay_ms: u64) -> Self {
        self.config.initial_delay_ms = delay_ms;
        self
    }

    /// Replace all settings with a loaded configuration.
    pub fn config(mut self, config: SchedulerConfig) -> Self {
        self.config = config;
        self
    }

    /// Build the scheduler.
    /// Returns an error if the tick source is missing or the initial delay
    /// does not fit the tick counter.
    pub fn build(self) -> Result<Scheduler<S, C>, BuildError> {
        let clock = self.clock.ok_or(BuildError::MissingClock)?;

        let delay_ms = self.config.initial_delay_ms;
        let (max, clamped) = <C::Tick as Tick>::saturating_from_millis(delay_ms);
        if clamped {
            return Err(BuildError::InitialDelayOutOfRange {
                delay: delay_ms,
                max: max.to_u64(),
            });
        }

        let mut scheduler = Scheduler::new(clock).with_policy(self.config.policy);
        if let Some(initial) = self.initial {
            scheduler.arm(initial, delay_ms);
        }

        Ok(scheduler)
    }
}

impl<S: State, C: TickSource> Default for SchedulerBuilder<S, C> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Next;
    use crate::scheduler::ManualClock;

    #[derive(Clone, PartialEq, Debug)]
    enum TestState {
        Booting,
        Running,
    }

    impl State for TestState {
        fn name(&self) -> &str {
            match self {
                Self::Booting => "Booting",
                Self::Running => "Running",
            }
        }

        fn run(&self, next: &mut Next<Self>) {
            if let Self::Booting = self {
                next.go(Self::Running);
            }
        }
    }

    #[test]
    fn builder_validates_required_fields() {
        let result = SchedulerBuilder::<TestState, ManualClock<u32>>::new().build();

        assert!(matches!(result, Err(BuildError::MissingClock)));
    }

    #[test]
    fn builder_rejects_delay_wider_than_counter() {
        let result = SchedulerBuilder::<TestState, _>::new()
            .clock(ManualClock::new(0u8))
            .initial(TestState::Booting)
            .initial_delay_ms(300)
            .build();

        assert_eq!(
            result.err(),
            Some(BuildError::InitialDelayOutOfRange {
                delay: 300,
                max: 255
            })
        );
    }

    #[test]
    fn builder_without_initial_is_idle() {
        let scheduler = SchedulerBuilder::<TestState, _>::new()
            .clock(ManualClock::new(0u32))
            .build()
            .unwrap();

        assert!(!scheduler.is_armed());
        assert!(scheduler.current_state().is_none());
    }

    #[test]
    fn fluent_api_arms_initial_state() {
        let clock = ManualClock::new(10u32);
        let mut scheduler = SchedulerBuilder::new()
            .clock(clock.clone())
            .initial(TestState::Booting)
            .initial_delay_ms(20)
            .build()
            .unwrap();

        assert!(scheduler.is_armed());
        assert_eq!(scheduler.pending().armed_at(), 10);
        assert_eq!(scheduler.pending().delay(), 20);

        clock.set(31);
        scheduler.poll();
        assert_eq!(scheduler.current_state(), Some(&TestState::Booting));
    }

    #[test]
    fn config_sets_policy() {
        let config = SchedulerConfig {
            policy: ElapsedPolicy::Modular,
            initial_delay_ms: 0,
        };
        let mut scheduler = SchedulerBuilder::new()
            .clock(ManualClock::new(0u16))
            .initial(TestState::Booting)
            .config(config)
            .build()
            .unwrap();

        assert_eq!(scheduler.policy(), ElapsedPolicy::Modular);
        scheduler.poll();
        assert_eq!(scheduler.current_state(), Some(&TestState::Booting));
    }
}
