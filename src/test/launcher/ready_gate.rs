use super::ReadyGate;
use std::sync::{
    Arc,
    atomic::{AtomicUsize, Ordering},
    mpsc,
};
use std::thread;
use std::time::Duration;

fn counting_gate() -> (Arc<ReadyGate>, Arc<AtomicUsize>) {
    let runs = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&runs);
    let gate = ReadyGate::new(move || {
        counter.fetch_add(1, Ordering::SeqCst);
    });
    (gate, runs)
}

#[test]
fn action_runs_once_no_matter_how_often_triggered() {
    let (gate, runs) = counting_gate();
    assert!(!gate.has_fired());

    assert!(gate.trigger());
    assert!(!gate.trigger());
    assert!(!gate.trigger());

    assert!(gate.has_fired());
    assert_eq!(runs.load(Ordering::SeqCst), 1);
}

#[test]
fn concurrent_triggers_run_the_action_once() {
    let (gate, runs) = counting_gate();
    let handles: Vec<_> = (0..8)
        .map(|_| {
            let gate = Arc::clone(&gate);
            thread::spawn(move || gate.trigger())
        })
        .collect();

    let winners = handles.into_iter().map(|handle| handle.join().expect("trigger thread")).filter(|won| *won).count();
    assert_eq!(winners, 1);
    assert_eq!(runs.load(Ordering::SeqCst), 1);
}

#[test]
fn timer_fires_when_no_signal_arrives() {
    let (tx, rx) = mpsc::channel();
    let gate = ReadyGate::new(move || {
        let _ = tx.send("sent");
    });
    gate.arm_timeout(Duration::from_millis(10)).expect("arm timer");

    assert_eq!(rx.recv_timeout(Duration::from_secs(5)), Ok("sent"));
    assert!(gate.has_fired());
}

#[test]
fn early_signal_makes_the_timer_a_no_op() {
    let (gate, runs) = counting_gate();
    gate.arm_timeout(Duration::from_millis(20)).expect("arm timer");
    assert!(gate.trigger());

    thread::sleep(Duration::from_millis(100));
    assert_eq!(runs.load(Ordering::SeqCst), 1);
}
