//! Job Workflow State Machine
//!
//! This example walks a three-phase job through its lifecycle, including a
//! guarded final transition that fails on the first attempt.
//!
//! Key concepts:
//! - Guard predicates with shared mutable flags
//! - on_success / on_fail lifecycle hooks
//! - Final transitions stopping the machine
//! - Reset and replay
//!
//! Run with: cargo run --example job_workflow

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use switchboard::{id_enum, Machine, Transition, TransitionTable};

id_enum! {
    enum Phase {
        Begin,
        Middle,
        End,
    }
}

id_enum! {
    enum Signal {
        SetupDone,
        WorkComplete,
    }
}

fn main() {
    println!("=== Job Workflow State Machine ===\n");

    let work_really_complete = Arc::new(AtomicBool::new(false));
    let guard_flag = Arc::clone(&work_really_complete);
    let retry_flag = Arc::clone(&work_really_complete);

    let table = TransitionTable::builder()
        .transition(
            Phase::Begin,
            Signal::SetupDone,
            Transition::to(Phase::Middle).on_success(|from, _| {
                println!("left {from:?}, entered Middle");
            }),
        )
        .transition(
            Phase::Middle,
            Signal::WorkComplete,
            Transition::to(Phase::End)
                .when(move |_, _| guard_flag.load(Ordering::SeqCst))
                .on_fail(move |_, event| {
                    println!("{event:?} arrived early; marking work complete for the retry");
                    retry_flag.store(true, Ordering::SeqCst);
                })
                .on_success(|from, _| {
                    println!("left {from:?}, entered End");
                })
                .terminal(),
        )
        .state(Phase::End)
        .build();

    let mut machine = Machine::new(Arc::new(table));

    machine.start(Phase::Begin).expect("start from Begin");
    println!("started in {:?}", machine.current().unwrap());

    machine.send(Signal::SetupDone).expect("setup transition");
    machine.send(Signal::WorkComplete).expect("guard blocks, still ok");
    machine.send(Signal::WorkComplete).expect("guard passes");

    println!("\nmachine stopped: {}", machine.is_stopped());
    println!("history:");
    for record in machine.history() {
        println!("  left {:?} on {:?} at {}", record.state, record.event, record.at);
    }

    machine.reset().expect("reset a stopped machine");
    println!("\nafter reset: current = {:?}, history = {} records",
        machine.current().unwrap(),
        machine.history().len()
    );

    println!("\n=== Example Complete ===");
}
