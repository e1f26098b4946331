use std::time::Duration;

use crate::{
    config::SketchHost,
    content::{
        document::{DocumentLine, document_lines},
        model::{DiaryEntry, SketchLinks},
        store::EntryStore,
    },
    foundation::{core::Viewport, error::DiaryResult},
    shell::{
        anchors::SlotStyle,
        neighbors::{NeighborWindow, Role},
        route::Route,
        transition::TransitionShell,
    },
};

/// Delay before the body fades in after mounting.
pub const CONTENT_FADE_DELAY: Duration = Duration::from_millis(100);

/// A side or centre date in the navigation row.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct DateLabel {
    pub role: Role,
    /// Entry shown in this slot.
    pub entry_id: String,
    /// `YY\nMM\nDD`.
    pub text: String,
    pub style: SlotStyle,
}

/// One diary entry with its document body, sketch links and navigation row.
#[derive(Clone, Debug)]
pub struct DetailPage {
    entry: DiaryEntry,
    lines: Vec<DocumentLine>,
    links: SketchLinks,
    shell: TransitionShell,
    mounted_at: Duration,
}

impl DetailPage {
    /// Page for `window`'s current entry, mounted at `now`.
    pub fn from_window(window: NeighborWindow, host: &SketchHost, now: Duration) -> Option<Self> {
        let entry = window.current()?.clone();
        Some(Self {
            lines: document_lines(&entry),
            links: entry.sketch_links(host),
            entry,
            shell: TransitionShell::new(window),
            mounted_at: now,
        })
    }

    /// Load the page for `id`; `None` when no such entry exists.
    #[tracing::instrument(skip(store, host))]
    pub async fn load(
        store: &EntryStore,
        id: &str,
        host: &SketchHost,
        now: Duration,
    ) -> DiaryResult<Option<Self>> {
        let window = store.neighbor_window(id).await?;
        if window.is_none() {
            tracing::debug!("no such entry");
        }
        Ok(window.and_then(|w| Self::from_window(w, host, now)))
    }

    pub fn entry(&self) -> &DiaryEntry {
        &self.entry
    }

    /// Numbered document lines.
    pub fn lines(&self) -> &[DocumentLine] {
        &self.lines
    }

    pub fn links(&self) -> &SketchLinks {
        &self.links
    }

    pub fn shell(&self) -> &TransitionShell {
        &self.shell
    }

    pub fn route(&self) -> Route {
        Route::diary(self.entry.id.clone())
    }

    /// Whether the body has faded in at `now`.
    pub fn content_visible(&self, now: Duration) -> bool {
        now.saturating_sub(self.mounted_at) >= CONTENT_FADE_DELAY
    }

    /// Click on the date in `role`.
    pub fn click(&mut self, role: Role, now: Duration) -> bool {
        self.shell.click(role, now)
    }

    /// Advance timers; yields the route to navigate to once the slide is done.
    pub fn tick(&mut self, now: Duration) -> Option<Route> {
        self.shell.tick(now)
    }

    /// Unmount: drop any pending navigation.
    pub fn unmount(&mut self) {
        self.shell.cancel();
    }

    /// Date row for `viewport`, left to right.
    pub fn date_labels(&self, viewport: Viewport) -> Vec<DateLabel> {
        self.shell
            .window()
            .iter()
            .map(|(role, entry)| DateLabel {
                role,
                entry_id: entry.id.clone(),
                text: entry.stacked_date(),
                style: self.shell.slot_style(role, viewport),
            })
            .collect()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/page/detail.rs"]
mod tests;
