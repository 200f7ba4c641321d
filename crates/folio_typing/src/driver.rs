//! Timer driver
//!
//! Runs the cycler as a self-rescheduling loop on the current tokio runtime:
//! render one frame, sleep for the delay that frame requested, repeat. Each
//! wait is a one-shot sleep started after the step completes, so drift is
//! never corrected and steps never overlap.

use crate::cycler::TypingCycler;
use crate::error::Result;
use crate::sink::TextSink;
use std::time::Duration;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;

/// Handle to a running cycler loop
///
/// Dropping the handle also ends the loop.
pub struct CyclerHandle {
    stop_tx: Option<oneshot::Sender<()>>,
    task: JoinHandle<TypingCycler>,
}

impl CyclerHandle {
    /// Stop the loop and wait for it to exit
    ///
    /// Returns the cycler as of its last rendered frame.
    pub async fn stop(mut self) -> Result<TypingCycler> {
        if let Some(tx) = self.stop_tx.take() {
            // The loop may already be gone if it was aborted
            let _ = tx.send(());
        }
        let cycler = (&mut self.task).await?;
        Ok(cycler)
    }

    /// Abort the loop without waiting
    pub fn abort(&self) {
        self.task.abort();
    }
}

/// Start the typewriter loop, rendering onto `sink`
///
/// Must be called from within a tokio runtime. The loop runs until
/// [`CyclerHandle::stop`] is called or the handle is dropped.
pub fn spawn<S>(cycler: TypingCycler, sink: S) -> CyclerHandle
where
    S: TextSink + Send + 'static,
{
    let (stop_tx, mut stop_rx) = oneshot::channel::<()>();

    let task = tokio::spawn(async move {
        let mut cycler = cycler;
        let mut sink = sink;
        let mut steps: u64 = 0;

        tracing::info!(roles = cycler.roles().len(), "typing cycler started");

        loop {
            let delay = cycler.render(&mut sink);
            steps += 1;

            tokio::select! {
                // Fires on an explicit stop or when the handle is dropped
                _ = &mut stop_rx => break,
                _ = tokio::time::sleep(delay) => {}
            }
        }

        tracing::debug!(
            steps,
            role = cycler.state().role_index,
            "typing cycler stopped"
        );
        cycler
    });

    CyclerHandle {
        stop_tx: Some(stop_tx),
        task,
    }
}

impl TypingCycler {
    /// Start typing onto `sink` on the current tokio runtime
    ///
    /// Shorthand for [`spawn`].
    pub fn start<S>(self, sink: S) -> CyclerHandle
    where
        S: TextSink + Send + 'static,
    {
        spawn(self, sink)
    }
}

/// Render exactly `steps` frames, sleeping between them
///
/// Returns the delay requested by the last frame, or `None` if no frame was
/// rendered. The caller decides whether to honor it.
pub async fn run_steps<S>(
    cycler: &mut TypingCycler,
    sink: &mut S,
    steps: usize,
) -> Option<Duration>
where
    S: TextSink + ?Sized,
{
    let mut last = None;
    for i in 0..steps {
        let delay = cycler.render(sink);
        last = Some(delay);
        if i + 1 < steps {
            tokio::time::sleep(delay).await;
        }
    }
    last
}
