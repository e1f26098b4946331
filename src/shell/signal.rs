use std::sync::Arc;

use tokio::sync::watch;

use crate::foundation::core::ViewMode;

/// Shared broadcast state linking independently mounted views.
///
/// Carries the active [`ViewMode`] (last value wins) and a one-shot
/// intro-complete flag. Cloning shares the same channels.
#[derive(Clone, Debug)]
pub struct Signals {
    inner: Arc<Channels>,
}

#[derive(Debug)]
struct Channels {
    view_mode: watch::Sender<ViewMode>,
    intro_complete: watch::Sender<bool>,
}

impl Default for Signals {
    fn default() -> Self {
        Self::new()
    }
}

impl Signals {
    /// Fresh signals: network view, intro not yet complete.
    pub fn new() -> Self {
        let (view_mode, _) = watch::channel(ViewMode::default());
        let (intro_complete, _) = watch::channel(false);
        Self {
            inner: Arc::new(Channels {
                view_mode,
                intro_complete,
            }),
        }
    }

    /// Current view mode.
    pub fn view_mode(&self) -> ViewMode {
        *self.inner.view_mode.borrow()
    }

    /// Publish `mode`; subscribers are only woken on an actual change.
    pub fn set_view_mode(&self, mode: ViewMode) {
        self.inner.view_mode.send_if_modified(|current| {
            let changed = *current != mode;
            *current = mode;
            changed
        });
        tracing::debug!(?mode, "view mode");
    }

    /// Flip between network and calendar and return the new mode.
    pub fn toggle_view_mode(&self) -> ViewMode {
        let next = self.view_mode().toggled();
        self.set_view_mode(next);
        next
    }

    /// Receiver observing view-mode changes.
    pub fn subscribe_view_mode(&self) -> watch::Receiver<ViewMode> {
        self.inner.view_mode.subscribe()
    }

    /// Mark the intro animation complete. Returns `true` only the first time.
    pub fn complete_intro(&self) -> bool {
        let fired = self.inner.intro_complete.send_if_modified(|done| {
            if *done {
                false
            } else {
                *done = true;
                true
            }
        });
        if fired {
            tracing::debug!("intro complete");
        }
        fired
    }

    /// Whether the intro animation has completed.
    pub fn intro_complete(&self) -> bool {
        *self.inner.intro_complete.borrow()
    }

    /// Receiver observing the intro-complete flag.
    pub fn subscribe_intro(&self) -> watch::Receiver<bool> {
        self.inner.intro_complete.subscribe()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/shell/signal.rs"]
mod tests;
