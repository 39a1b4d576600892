//! Shared publish/teardown plumbing for view states.

use std::sync::Mutex;
use tokio::sync::watch;

/// Observable state cell with a close gate.
///
/// State goes out through a watch channel, so a late subscriber observes
/// the most recent value immediately rather than waiting for the next
/// transition. `close` flips the gate and signals shutdown; publishes
/// after that are no-ops, so a fetch that outlives its owner can never
/// push another transition. The gate check and the flip share one lock,
/// which makes "no publish after close returns" exact rather than
/// best-effort.
pub(crate) struct StatePublisher<S> {
    tx: watch::Sender<S>,
    closed: Mutex<bool>,
    shutdown_tx: watch::Sender<bool>,
}

impl<S: Clone> StatePublisher<S> {
    pub(crate) fn new(initial: S) -> Self {
        let (tx, _) = watch::channel(initial);
        let (shutdown_tx, _) = watch::channel(false);
        Self {
            tx,
            closed: Mutex::new(false),
            shutdown_tx,
        }
    }

    /// Subscribe to state transitions. The receiver's current value is
    /// the latest published state.
    pub(crate) fn subscribe(&self) -> watch::Receiver<S> {
        self.tx.subscribe()
    }

    /// Snapshot of the latest published state.
    pub(crate) fn current(&self) -> S {
        self.tx.borrow().clone()
    }

    /// Publish the next state unless the owner has been closed.
    pub(crate) fn publish(&self, next: S) {
        let closed = self.closed.lock().unwrap();
        if *closed {
            return;
        }
        self.tx.send_replace(next);
    }

    /// Receiver that resolves once `close` is called.
    pub(crate) fn shutdown(&self) -> watch::Receiver<bool> {
        self.shutdown_tx.subscribe()
    }

    /// Close the gate and signal shutdown. Idempotent.
    pub(crate) fn close(&self) {
        let mut closed = self.closed.lock().unwrap();
        if *closed {
            return;
        }
        *closed = true;
        self.shutdown_tx.send_replace(true);
    }

    pub(crate) fn is_closed(&self) -> bool {
        *self.closed.lock().unwrap()
    }
}
