use crate::{
    content::model::DiaryEntry,
    foundation::core::{ViewMode, Viewport},
    layout::generator::{DiaryLayout, LayoutConfig, compute_layout},
};

/// Session layout whose node positions are drawn once and then frozen.
///
/// The first [`FrozenLayout::layout`] call computes positions for the viewport
/// at that moment. Later calls with a different viewport only refresh the
/// aggregate container heights so that nodes never jump while resizing.
#[derive(Clone, Debug)]
pub struct FrozenLayout {
    entries: Vec<DiaryEntry>,
    config: LayoutConfig,
    seed: u64,
    fixed: Option<DiaryLayout>,
}

impl FrozenLayout {
    /// Layout for `entries`, drawn with `seed` on first use.
    pub fn new(entries: Vec<DiaryEntry>, config: LayoutConfig, seed: u64) -> Self {
        Self {
            entries,
            config,
            seed,
            fixed: None,
        }
    }

    /// Return `true` once positions have been drawn.
    pub fn is_frozen(&self) -> bool {
        self.fixed.is_some()
    }

    /// Layout for `viewport`; positions come from the first call.
    pub fn layout(&mut self, viewport: Viewport) -> &DiaryLayout {
        let config = &self.config;
        match &mut self.fixed {
            Some(layout) => {
                layout.network_height = (layout.months.len() as f64) * viewport.height;
                layout.calendar_height = layout.calendar_content_bottom() + config.padding_bottom;
                layout
            }
            slot @ None => {
                tracing::debug!(
                    width = viewport.width,
                    height = viewport.height,
                    seed = self.seed,
                    "freezing layout"
                );
                slot.insert(compute_layout(&self.entries, viewport, config, self.seed))
            }
        }
    }

    /// Frozen layout, if already computed.
    pub fn current(&self) -> Option<&DiaryLayout> {
        self.fixed.as_ref()
    }

    /// Container height in `mode`, or `None` before the first layout.
    pub fn height(&self, mode: ViewMode) -> Option<f64> {
        self.fixed.as_ref().map(|l| l.height(mode))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/frozen.rs"]
mod tests;
