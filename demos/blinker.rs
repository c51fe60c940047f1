//! Blinker
//!
//! A two-state blinker driven by a hosted millisecond counter. The counter
//! is 16 bits wide and starts just before its wrap point, so the first
//! cycle crosses the wraparound.
//!
//! Run with: RUST_LOG=stateful_loop=debug cargo run --example blinker

use std::time::{Duration, Instant};
use stateful_loop::core::Next;
use stateful_loop::scheduler::MonotonicMillis;
use stateful_loop::{state_enum, SchedulerBuilder};
use tracing_subscriber::EnvFilter;

state_enum! {
    enum Blink {
        Dark => dark,
        Lit => lit,
    }
}

fn dark(next: &mut Next<Blink>) {
    println!("  .");
    next.after(Blink::Lit, 400);
}

fn lit(next: &mut Next<Blink>) {
    println!("  *");
    next.after(Blink::Dark, 100);
}

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();

    println!("=== Blinker ===\n");

    let mut scheduler = match SchedulerBuilder::new()
        .clock(MonotonicMillis::starting_at(u16::MAX - 200))
        .initial(Blink::Dark)
        .build()
    {
        Ok(scheduler) => scheduler,
        Err(err) => {
            eprintln!("failed to build scheduler: {err}");
            return;
        }
    };

    let stop = Instant::now() + Duration::from_secs(3);
    while Instant::now() < stop {
        scheduler.poll();
        std::thread::sleep(Duration::from_micros(200));
    }

    println!("\nFinal state: {:?}", scheduler.current_state());
    println!("=== Example Complete ===");
}
