//! Traffic Light State Machine
//!
//! This example demonstrates a simple cyclic state machine.
//!
//! Key concepts:
//! - Cyclic state transitions (states repeat)
//! - One event reused across every state
//! - Table introspection with events_for_state / states_for_event
//!
//! Run with: cargo run --example traffic_light

use std::sync::Arc;
use switchboard::{id_enum, Machine, Transition, TransitionTable};

id_enum! {
    enum Light {
        Red,
        Green,
        Yellow,
    }
}

id_enum! {
    enum Input {
        Timer,
    }
}

fn main() {
    println!("=== Traffic Light State Machine ===\n");

    let table = Arc::new(
        TransitionTable::builder()
            .transition(Light::Red, Input::Timer, Transition::to(Light::Green))
            .transition(Light::Green, Input::Timer, Transition::to(Light::Yellow))
            .transition(Light::Yellow, Input::Timer, Transition::to(Light::Red))
            .build(),
    );

    println!(
        "every state answers the timer: {:?}",
        table.states_for_event(Input::Timer)
    );

    let mut machine = Machine::new(Arc::clone(&table));
    machine.start(Light::Red).expect("start at Red");

    println!("\ncycling twice around the loop:");
    for _ in 0..6 {
        let before = machine.current().unwrap();
        machine.send(Input::Timer).expect("timer always legal");
        println!("  {before:?} -> {:?}", machine.current().unwrap());
    }

    println!("\n{} transitions recorded", machine.history().len());
    println!("machine still running: {}", machine.is_running());

    println!("\n=== Example Complete ===");
}
