use super::state::{CopyOutcome, CopyState};
use crate::clipboard::Clipboard;
use anyhow::{Context, Result, anyhow};
use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::sync::{mpsc, watch};
use tokio::task::{AbortHandle, JoinHandle};
use tracing::{debug, warn};

/// How long a control shows its "copied" state after a successful write.
pub const ACK_WINDOW: Duration = Duration::from_millis(2000);

/// Reported when a clipboard write fails. The control itself stays idle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopyFailure {
    pub control: String,
    pub message: String,
}

/// A button that copies a fixed payload and briefly acknowledges it.
///
/// `activate` never blocks: the write runs as a task on the runtime the
/// control was created on. A successful write flips the state to
/// `Acknowledged` and (re)starts the expiry timer. Dropping the control
/// cancels the timer and any write still in flight; tasks that are already
/// running check liveness before touching state.
pub struct CopyControl {
    name: String,
    payload: Arc<str>,
    window: Duration,
    clipboard: Arc<dyn Clipboard>,
    runtime: Handle,
    failures: Option<mpsc::UnboundedSender<CopyFailure>>,
    shared: Arc<Shared>,
    pending_write: Option<AbortHandle>,
}

struct Shared {
    state: watch::Sender<CopyState>,
    timer: Mutex<Timer>,
}

struct Timer {
    live: bool,
    // Bumped on every successful write; an expiry only applies to its own epoch.
    epoch: u64,
    handle: Option<JoinHandle<()>>,
}

impl Shared {
    fn lock_timer(&self) -> MutexGuard<'_, Timer> {
        self.timer.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn expire(&self, epoch: u64) {
        let mut timer = self.lock_timer();
        if timer.live && timer.epoch == epoch {
            self.state.send_replace(CopyState::Idle);
            timer.handle = None;
        }
    }
}

impl CopyControl {
    /// Create a control bound to the current tokio runtime.
    pub fn new(
        name: impl Into<String>,
        payload: impl Into<Arc<str>>,
        clipboard: Arc<dyn Clipboard>,
    ) -> Result<Self> {
        let runtime = Handle::try_current().context("Copy controls need a tokio runtime")?;
        let (state, _) = watch::channel(CopyState::Idle);

        Ok(Self {
            name: name.into(),
            payload: payload.into(),
            window: ACK_WINDOW,
            clipboard,
            runtime,
            failures: None,
            shared: Arc::new(Shared {
                state,
                timer: Mutex::new(Timer {
                    live: true,
                    epoch: 0,
                    handle: None,
                }),
            }),
            pending_write: None,
        })
    }

    #[cfg(test)]
    pub fn with_window(mut self, window: Duration) -> Self {
        self.window = window;
        self
    }

    pub fn with_failure_reporter(mut self, failures: mpsc::UnboundedSender<CopyFailure>) -> Self {
        self.failures = Some(failures);
        self
    }

    /// Accessible name, e.g. "Copy install command".
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn payload(&self) -> &str {
        &self.payload
    }

    pub fn window(&self) -> Duration {
        self.window
    }

    pub fn state(&self) -> CopyState {
        *self.shared.state.borrow()
    }

    pub fn is_acknowledged(&self) -> bool {
        self.state().is_acknowledged()
    }

    pub fn subscribe(&self) -> watch::Receiver<CopyState> {
        self.shared.state.subscribe()
    }

    /// Start copying the payload. Callers that don't care about the result
    /// can drop the returned handle; the write keeps running.
    pub fn activate(&mut self) -> JoinHandle<CopyOutcome> {
        debug!(control = %self.name, "copy activated");

        let write = Write {
            name: self.name.clone(),
            payload: Arc::clone(&self.payload),
            window: self.window,
            clipboard: Arc::clone(&self.clipboard),
            runtime: self.runtime.clone(),
            failures: self.failures.clone(),
            shared: Arc::clone(&self.shared),
        };

        let handle = self.runtime.spawn(write.run());
        self.pending_write = Some(handle.abort_handle());
        handle
    }
}

impl Drop for CopyControl {
    fn drop(&mut self) {
        let mut timer = self.shared.lock_timer();
        timer.live = false;
        if let Some(handle) = timer.handle.take() {
            handle.abort();
        }
        drop(timer);

        if let Some(write) = self.pending_write.take() {
            write.abort();
        }
    }
}

impl fmt::Debug for CopyControl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CopyControl")
            .field("name", &self.name)
            .field("payload", &self.payload)
            .field("window", &self.window)
            .field("state", &self.state())
            .finish()
    }
}

struct Write {
    name: String,
    payload: Arc<str>,
    window: Duration,
    clipboard: Arc<dyn Clipboard>,
    runtime: Handle,
    failures: Option<mpsc::UnboundedSender<CopyFailure>>,
    shared: Arc<Shared>,
}

impl Write {
    async fn run(self) -> CopyOutcome {
        let result = if self.clipboard.needs_blocking_pool() {
            let clipboard = Arc::clone(&self.clipboard);
            let payload = Arc::clone(&self.payload);
            tokio::task::spawn_blocking(move || clipboard.set_text(&payload))
                .await
                .unwrap_or_else(|e| Err(anyhow!("Clipboard write panicked: {e}")))
        } else {
            self.clipboard.set_text(&self.payload)
        };

        match result {
            Ok(()) => self.acknowledge(),
            Err(err) => self.report(err),
        }
    }

    fn acknowledge(&self) -> CopyOutcome {
        let mut timer = self.shared.lock_timer();
        if !timer.live {
            debug!(control = %self.name, "copy finished after teardown, ignoring");
            return CopyOutcome::Discarded;
        }

        timer.epoch += 1;
        if let Some(previous) = timer.handle.take() {
            previous.abort();
        }
        self.shared.state.send_replace(CopyState::Acknowledged);

        let epoch = timer.epoch;
        let window = self.window;
        let shared = Arc::clone(&self.shared);
        timer.handle = Some(self.runtime.spawn(async move {
            tokio::time::sleep(window).await;
            shared.expire(epoch);
        }));

        debug!(control = %self.name, bytes = self.payload.len(), "copied to clipboard");
        CopyOutcome::Copied
    }

    fn report(&self, err: anyhow::Error) -> CopyOutcome {
        if !self.shared.lock_timer().live {
            return CopyOutcome::Discarded;
        }

        let message = format!("{err:#}");
        warn!(control = %self.name, error = %message, "clipboard write failed");

        if let Some(failures) = &self.failures {
            let failure = CopyFailure {
                control: self.name.clone(),
                message,
            };
            if failures.send(failure).is_err() {
                debug!(control = %self.name, "failure dropped, page no longer listening");
            }
        }
        CopyOutcome::Failed
    }
}
