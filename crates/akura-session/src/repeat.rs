//! Key-repeat scheduling for hosts without native repeat events.
//!
//! A press arms the scheduler; the tick callback fires only after the
//! initial delay has elapsed and then once per interval until `cancel`.
//! The press itself is never a tick, so the caller applies the first
//! deletion (or insertion) directly and lets the scheduler take over for
//! the held key.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use akura_core::settings;

enum RepeatCommand {
    Start { generation: u64 },
    Shutdown,
}

/// Fires a callback on key-repeat cadence from a dedicated worker thread.
///
/// `cancel` only bumps the generation counter, so it is cheap, idempotent
/// and safe to call whether or not a repeat is armed. The worker notices
/// the stale generation before its next tick.
pub struct RepeatScheduler {
    tx: mpsc::Sender<RepeatCommand>,
    generation: Arc<AtomicU64>,
    worker: Option<thread::JoinHandle<()>>,
}

impl RepeatScheduler {
    /// Scheduler with delay and interval taken from the loaded settings.
    pub fn spawn<F>(tick: F) -> Self
    where
        F: FnMut() + Send + 'static,
    {
        let repeat = &settings::settings().repeat;
        Self::with_timing(repeat.initial_delay(), repeat.interval(), tick)
    }

    /// Scheduler with explicit timing, for tests and custom hosts.
    pub fn with_timing<F>(initial_delay: Duration, interval: Duration, tick: F) -> Self
    where
        F: FnMut() + Send + 'static,
    {
        let generation = Arc::new(AtomicU64::new(0));
        let (tx, rx) = mpsc::channel::<RepeatCommand>();
        let worker = {
            let generation = Arc::clone(&generation);
            thread::Builder::new()
                .name("akura-repeat".into())
                .spawn(move || worker_loop(rx, generation, initial_delay, interval, tick))
                .expect("failed to spawn repeat worker")
        };
        Self {
            tx,
            generation,
            worker: Some(worker),
        }
    }

    /// Arm the scheduler for a fresh press. Any earlier repeat becomes
    /// stale, so pressing again while held restarts the initial delay.
    pub fn press(&self) {
        let armed = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        let _ = self.tx.send(RepeatCommand::Start { generation: armed });
    }

    /// Stop repeating. No-op when nothing is armed.
    pub fn cancel(&self) {
        self.generation.fetch_add(1, Ordering::SeqCst);
    }
}

impl Drop for RepeatScheduler {
    fn drop(&mut self) {
        self.cancel();
        let _ = self.tx.send(RepeatCommand::Shutdown);
        if let Some(worker) = self.worker.take() {
            let _ = worker.join();
        }
    }
}

// ---------------------------------------------------------------------------
// Worker thread
// ---------------------------------------------------------------------------

fn worker_loop<F: FnMut()>(
    rx: mpsc::Receiver<RepeatCommand>,
    generation: Arc<AtomicU64>,
    initial_delay: Duration,
    interval: Duration,
    mut tick: F,
) {
    // A command that interrupted an armed repeat, carried into the next
    // round instead of being dropped.
    let mut next = None;
    loop {
        let command = match next.take() {
            Some(command) => command,
            None => match rx.recv() {
                Ok(command) => command,
                Err(_) => return,
            },
        };
        let armed = match command {
            RepeatCommand::Start { generation } => generation,
            RepeatCommand::Shutdown => return,
        };

        let mut wait = initial_delay;
        loop {
            match rx.recv_timeout(wait) {
                Ok(command) => {
                    next = Some(command);
                    break;
                }
                Err(mpsc::RecvTimeoutError::Timeout) => {
                    // Check staleness before every tick
                    if generation.load(Ordering::SeqCst) != armed {
                        break;
                    }
                    tick();
                    wait = interval;
                }
                Err(mpsc::RecvTimeoutError::Disconnected) => return,
            }
        }
    }
}
