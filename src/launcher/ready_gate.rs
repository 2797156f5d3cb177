//! One-shot gate between a readiness signal and a fallback timer.

use crate::log_debug;
use std::io;
use std::sync::{
    Arc, Mutex,
    atomic::{AtomicBool, Ordering},
};
use std::thread;
use std::time::Duration;

type GateAction = Box<dyn FnOnce() + Send>;

/// Runs its action exactly once, on the first call to [`ReadyGate::trigger`].
pub struct ReadyGate {
    fired: AtomicBool,
    action: Mutex<Option<GateAction>>,
}

impl ReadyGate {
    pub fn new(action: impl FnOnce() + Send + 'static) -> Arc<Self> {
        Arc::new(Self {
            fired: AtomicBool::new(false),
            action: Mutex::new(Some(Box::new(action))),
        })
    }

    /// Run the action if nobody has yet. Returns whether this call ran it.
    pub fn trigger(&self) -> bool {
        if self.fired.swap(true, Ordering::AcqRel) {
            return false;
        }

        let action = match self.action.lock() {
            Ok(mut guard) => guard.take(),
            Err(poisoned) => poisoned.into_inner().take(),
        };
        if let Some(action) = action {
            action();
        }
        true
    }

    pub fn has_fired(&self) -> bool {
        self.fired.load(Ordering::Acquire)
    }

    /// Trigger the gate from a background timer after `timeout`.
    pub fn arm_timeout(self: &Arc<Self>, timeout: Duration) -> io::Result<()> {
        let gate = Arc::clone(self);
        thread::Builder::new().name("ready-gate-timer".to_string()).spawn(move || {
            thread::sleep(timeout);
            if gate.trigger() {
                log_debug!("Readiness signal not seen within {:?}, firing anyway", timeout);
            }
        })?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "../test/launcher/ready_gate.rs"]
mod tests;
