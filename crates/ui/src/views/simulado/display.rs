use dioxus::prelude::*;

use services::ElapsedDisplay;

/// Clock text slot written from the timer task.
///
/// Once the owning component unmounts the signal is dropped, `try_write`
/// fails, and the timer loop ends on its next tick.
pub(super) struct SignalDisplay {
    text: SyncSignal<String>,
}

impl SignalDisplay {
    pub(super) fn new(text: SyncSignal<String>) -> Self {
        Self { text }
    }
}

impl ElapsedDisplay for SignalDisplay {
    fn show(&self, text: &str) -> bool {
        let mut slot = self.text;
        match slot.try_write() {
            Ok(mut current) => {
                if *current != text {
                    *current = text.to_string();
                }
                true
            }
            Err(_) => false,
        }
    }
}
