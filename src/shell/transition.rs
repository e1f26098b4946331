use std::time::Duration;

use crate::{
    foundation::core::Viewport,
    shell::{
        anchors::{Direction, SlotStyle, slot_style},
        neighbors::{NeighborWindow, Role},
        route::Route,
    },
};

/// Delay between a click on a side date and the route change.
pub const NAVIGATION_DELAY: Duration = Duration::from_millis(800);

/// Slide state of the detail-page date row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TransitionState {
    /// Dates at rest; prev/next are clickable.
    Idle,
    /// A slide is in flight; navigation fires at `due`.
    Sliding {
        direction: Direction,
        target: Route,
        due: Duration,
        fired: bool,
    },
}

/// Detail-page navigation shell: a five-slot date row that slides before
/// navigating to the clicked neighbour.
///
/// Only one slide may be in flight. The state returns to idle when the new
/// window arrives via [`TransitionShell::set_window`] (the route change
/// landed) or [`TransitionShell::cancel`] (the shell was torn down).
#[derive(Clone, Debug)]
pub struct TransitionShell {
    window: NeighborWindow,
    state: TransitionState,
    delay: Duration,
}

impl TransitionShell {
    pub fn new(window: NeighborWindow) -> Self {
        Self::with_delay(window, NAVIGATION_DELAY)
    }

    pub fn with_delay(window: NeighborWindow, delay: Duration) -> Self {
        Self {
            window,
            state: TransitionState::Idle,
            delay,
        }
    }

    pub fn window(&self) -> &NeighborWindow {
        &self.window
    }

    pub fn state(&self) -> &TransitionState {
        &self.state
    }

    /// Direction of the slide in flight.
    pub fn direction(&self) -> Option<Direction> {
        match self.state {
            TransitionState::Idle => None,
            TransitionState::Sliding { direction, .. } => Some(direction),
        }
    }

    /// Click on the date in `role` at `now`. Returns `true` if a slide started.
    pub fn click(&mut self, role: Role, now: Duration) -> bool {
        if self.state != TransitionState::Idle {
            tracing::debug!(?role, "click ignored during transition");
            return false;
        }
        let Some(direction) = Direction::from_role(role) else {
            return false;
        };
        let Some(entry) = self.window.get(role) else {
            return false;
        };
        let target = Route::diary(entry.id.clone());
        tracing::debug!(?direction, %target, "transition started");
        self.state = TransitionState::Sliding {
            direction,
            target,
            due: now + self.delay,
            fired: false,
        };
        true
    }

    /// Advance the timer; yields the route change exactly once when due.
    pub fn tick(&mut self, now: Duration) -> Option<Route> {
        match &mut self.state {
            TransitionState::Sliding {
                target, due, fired, ..
            } if !*fired && now >= *due => {
                *fired = true;
                Some(target.clone())
            }
            _ => None,
        }
    }

    /// Time at which the pending navigation fires.
    pub fn due(&self) -> Option<Duration> {
        match self.state {
            TransitionState::Sliding {
                due, fired: false, ..
            } => Some(due),
            _ => None,
        }
    }

    /// New neighbours after navigation; resets to idle.
    pub fn set_window(&mut self, window: NeighborWindow) {
        self.window = window;
        self.state = TransitionState::Idle;
    }

    /// Drop any pending navigation.
    pub fn cancel(&mut self) {
        if self.state != TransitionState::Idle {
            tracing::debug!("pending navigation cancelled");
        }
        self.state = TransitionState::Idle;
    }

    /// Presentation of the date in `role` right now.
    pub fn slot_style(&self, role: Role, viewport: Viewport) -> SlotStyle {
        slot_style(role, self.direction(), viewport)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/shell/transition.rs"]
mod tests;
