//! Wall-clock timer for the running attempt.
//!
//! The start instant lives in the `SessionStore`, so elapsed time survives the
//! quiz screen being left and re-entered. Only the redraw loop is owned here.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use log::debug;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

use concurso_core::Clock;
use concurso_core::time::{elapsed_seconds, format_elapsed};
use storage::{SessionKey, SessionStore};

const TICK: Duration = Duration::from_secs(1);

/// Where the formatted elapsed time is drawn.
pub trait ElapsedDisplay: Send + Sync {
    /// Draw `text`. Returns `false` once the display no longer exists, which
    /// stops the redraw loop.
    fn show(&self, text: &str) -> bool;
}

pub struct ElapsedTimer {
    store: SessionStore,
    clock: Clock,
    runtime: Handle,
    display: Option<Arc<dyn ElapsedDisplay>>,
    task: Option<JoinHandle<()>>,
}

impl ElapsedTimer {
    #[must_use]
    pub fn new(store: SessionStore, clock: Clock, runtime: Handle) -> Self {
        Self {
            store,
            clock,
            runtime,
            display: None,
            task: None,
        }
    }

    /// Attach the display the loop draws into. Takes effect on the next `start`.
    pub fn bind_display(&mut self, display: Arc<dyn ElapsedDisplay>) {
        self.display = Some(display);
    }

    /// Start or resume the timer.
    ///
    /// The start instant is only recorded when none is persisted, so resuming
    /// never resets elapsed time. Any previous loop is cancelled first and the
    /// display is redrawn immediately.
    pub fn start(&mut self) {
        if !self.store.contains(SessionKey::SimuladoStartTime) {
            self.store
                .set(SessionKey::SimuladoStartTime, &self.clock.now_millis());
        }
        self.stop();

        let Some(display) = self.display.clone() else {
            debug!("timer started without a display");
            return;
        };
        if !render(&self.store, self.clock, display.as_ref()) {
            return;
        }

        let store = self.store.clone();
        let clock = self.clock;
        self.task = Some(self.runtime.spawn(async move {
            let mut interval = tokio::time::interval(TICK);
            interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
            interval.tick().await;
            loop {
                interval.tick().await;
                if !render(&store, clock, display.as_ref()) {
                    debug!("timer loop stopped");
                    break;
                }
            }
        }));
    }

    /// Stop redrawing. The persisted start instant is kept.
    pub fn stop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }

    /// Stop and forget the start instant.
    pub fn clear(&mut self) {
        self.stop();
        self.store.remove(SessionKey::SimuladoStartTime);
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.task.as_ref().is_some_and(|task| !task.is_finished())
    }

    /// Persisted start instant in epoch milliseconds.
    #[must_use]
    pub fn started_at(&self) -> Option<i64> {
        self.store.get(SessionKey::SimuladoStartTime)
    }

    #[must_use]
    pub fn elapsed_seconds(&self) -> Option<u64> {
        self.started_at()
            .map(|start| elapsed_seconds(start, self.clock.now_millis()))
    }

    /// Current reading as `HH:MM:SS`.
    #[must_use]
    pub fn elapsed_text(&self) -> Option<String> {
        self.elapsed_seconds().map(format_elapsed)
    }
}

impl Drop for ElapsedTimer {
    fn drop(&mut self) {
        self.stop();
    }
}

impl fmt::Debug for ElapsedTimer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ElapsedTimer")
            .field("clock", &self.clock)
            .field("has_display", &self.display.is_some())
            .field("running", &self.is_running())
            .finish_non_exhaustive()
    }
}

fn render(store: &SessionStore, clock: Clock, display: &dyn ElapsedDisplay) -> bool {
    let Some(start) = store.get::<i64>(SessionKey::SimuladoStartTime) else {
        return false;
    };
    let text = format_elapsed(elapsed_seconds(start, clock.now_millis()));
    display.show(&text)
}
