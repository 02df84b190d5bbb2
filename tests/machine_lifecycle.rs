//! End-to-end lifecycle tests driving a machine the way a host would.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;
use switchboard::{id_enum, Machine, MachineError, Transition, TransitionTable};

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

/// The canonical workflow: setup moves Begin to Middle unconditionally;
/// completion moves Middle to End behind a guard that only passes once the
/// first failed attempt has flipped a flag, and ends the machine.
fn workflow_table(
    work_done: Arc<AtomicBool>,
    failures: Arc<AtomicUsize>,
    successes: Arc<AtomicUsize>,
) -> TransitionTable<Phase, Signal> {
    let guard_flag = Arc::clone(&work_done);
    let success_count = Arc::clone(&successes);
    let setup_successes = Arc::clone(&successes);

    TransitionTable::builder()
        .transition(
            Phase::Begin,
            Signal::SetupDone,
            Transition::to(Phase::Middle).on_success(move |_, _| {
                setup_successes.fetch_add(1, Ordering::SeqCst);
            }),
        )
        .transition(
            Phase::Middle,
            Signal::WorkComplete,
            Transition::to(Phase::End)
                .when(move |_, _| guard_flag.load(Ordering::SeqCst))
                .on_fail(move |_, _| {
                    failures.fetch_add(1, Ordering::SeqCst);
                    work_done.store(true, Ordering::SeqCst);
                })
                .on_success(move |_, _| {
                    success_count.fetch_add(1, Ordering::SeqCst);
                })
                .terminal(),
        )
        .state(Phase::End)
        .build()
}

#[test]
fn guarded_final_transition_walkthrough() {
    let work_done = Arc::new(AtomicBool::new(false));
    let failures = Arc::new(AtomicUsize::new(0));
    let successes = Arc::new(AtomicUsize::new(0));

    let table = workflow_table(
        Arc::clone(&work_done),
        Arc::clone(&failures),
        Arc::clone(&successes),
    );
    let mut machine = Machine::new(Arc::new(table));

    machine.start(Phase::Begin).unwrap();
    assert_eq!(machine.current(), Some(Phase::Begin));

    machine.send(Signal::SetupDone).unwrap();
    assert_eq!(machine.current(), Some(Phase::Middle));
    let history = machine.history();
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].state, Phase::Begin);
    assert_eq!(history[0].event, Signal::SetupDone);

    // First attempt: guard blocks, on_fail flips the flag, no error.
    machine.send(Signal::WorkComplete).unwrap();
    assert_eq!(machine.current(), Some(Phase::Middle));
    assert_eq!(failures.load(Ordering::SeqCst), 1);
    assert_eq!(machine.history().len(), 1);

    // Second attempt: guard passes, machine ends itself.
    machine.send(Signal::WorkComplete).unwrap();
    assert_eq!(machine.current(), Some(Phase::End));
    assert_eq!(successes.load(Ordering::SeqCst), 2);
    assert!(machine.is_stopped());

    let history = machine.history();
    assert_eq!(history.len(), 2);
    assert_eq!(history[1].state, Phase::Middle);
    assert_eq!(history[1].event, Signal::WorkComplete);

    // Third attempt: the machine is done and names the event that ended it.
    assert_eq!(
        machine.send(Signal::WorkComplete),
        Err(MachineError::MachineStopped {
            final_event: Some(Signal::WorkComplete),
        })
    );
}

#[test]
fn start_stop_reset_round_trip() {
    let work_done = Arc::new(AtomicBool::new(false));
    let failures = Arc::new(AtomicUsize::new(0));
    let successes = Arc::new(AtomicUsize::new(0));

    let table = workflow_table(work_done, failures, successes);
    let mut machine = Machine::new(Arc::new(table));

    machine.start(Phase::Begin).unwrap();
    machine.send(Signal::SetupDone).unwrap();
    machine.stop();
    machine.reset().unwrap();

    assert_eq!(machine.current(), Some(Phase::Begin));
    assert!(machine.history().is_empty());

    // The same start state is accepted again after the reset.
    machine.start(Phase::Begin).unwrap();
    assert!(machine.is_running());
}

#[test]
fn double_stop_matches_single_stop() {
    let work_done = Arc::new(AtomicBool::new(false));
    let failures = Arc::new(AtomicUsize::new(0));
    let successes = Arc::new(AtomicUsize::new(0));

    let table = workflow_table(work_done, failures, successes);
    let mut machine = Machine::new(Arc::new(table));

    machine.start(Phase::Begin).unwrap();
    machine.send(Signal::SetupDone).unwrap();

    machine.stop();
    let first = machine.start(Phase::Begin);
    machine.stop();
    let second = machine.start(Phase::Begin);

    assert_eq!(first, second);
    assert_eq!(
        first,
        Err(MachineError::MachineStopped {
            final_event: Some(Signal::SetupDone),
        })
    );
}

#[test]
fn distinct_machines_share_one_table() {
    let work_done = Arc::new(AtomicBool::new(true));
    let failures = Arc::new(AtomicUsize::new(0));
    let successes = Arc::new(AtomicUsize::new(0));

    let table = Arc::new(workflow_table(work_done, failures, successes));

    let mut first = Machine::new(Arc::clone(&table));
    let mut second = Machine::new(Arc::clone(&table));

    first.start(Phase::Begin).unwrap();
    second.start(Phase::Middle).unwrap();

    first.send(Signal::SetupDone).unwrap();
    second.send(Signal::WorkComplete).unwrap();

    assert_eq!(first.current(), Some(Phase::Middle));
    assert!(first.is_running());
    assert_eq!(second.current(), Some(Phase::End));
    assert!(second.is_stopped());
}
