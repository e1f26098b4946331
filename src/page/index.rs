use std::time::Duration;

use crate::{
    animation::frame_loop::{Animate, Frame},
    content::model::DiaryEntry,
    foundation::{
        core::{Point, REM_PX, Rgba8, ViewMode, Viewport},
        error::DiaryResult,
    },
    layout::{
        frozen::FrozenLayout,
        generator::{DiaryLayout, LayoutConfig},
    },
    render::{
        connector::{ConnectorAnimator, ConnectorConfig, ConnectorFrame},
        scene::Scene,
        surface::CanvasSurface,
    },
    shell::signal::Signals,
};

/// Diameter of the gray marker under each date.
const MARKER_DIAMETER: f64 = REM_PX;
/// `text-sm`, the network month label size.
const NETWORK_MONTH_FONT_PX: f64 = 14.0;
/// `text-xs`, the calendar month label size.
const CALENDAR_MONTH_FONT_PX: f64 = 12.0;
/// Inset of the calendar month label from its cell corner.
const CALENDAR_MONTH_INSET: f64 = 8.0;

/// Mount parameters of an [`IndexPage`].
#[derive(Clone, Debug, PartialEq)]
pub struct IndexOptions {
    pub viewport: Viewport,
    pub dpr: f64,
    pub layout: LayoutConfig,
    pub connector: ConnectorConfig,
    /// Seed of the frozen positions.
    pub seed: u64,
}

impl IndexOptions {
    /// Defaults at device pixel ratio 1.
    pub fn new(viewport: Viewport, seed: u64) -> Self {
        Self {
            viewport,
            dpr: 1.0,
            layout: LayoutConfig::default(),
            connector: ConnectorConfig::default(),
            seed,
        }
    }
}

/// The index page: every entry in the network or calendar view, linked by
/// the animated connector.
///
/// Positions are frozen on construction. The view mode is read from the
/// shared [`Signals`] so the navigation shell can toggle it.
#[derive(Debug)]
pub struct IndexPage {
    layout: FrozenLayout,
    connector: ConnectorAnimator,
    signals: Signals,
    viewport: Viewport,
    surface: CanvasSurface,
    mode: ViewMode,
}

impl IndexPage {
    /// Mount the page at `now` (time since session start).
    pub fn new(
        entries: &[DiaryEntry],
        options: IndexOptions,
        signals: Signals,
        now: Duration,
    ) -> DiaryResult<Self> {
        let IndexOptions {
            viewport,
            dpr,
            layout: layout_config,
            connector: connector_config,
            seed,
        } = options;
        let mut layout = FrozenLayout::new(entries.to_vec(), layout_config, seed);
        let mode = signals.view_mode();
        let height = layout.layout(viewport).height(mode);
        let surface = CanvasSurface::new(viewport.width, height, dpr)?;
        let mut connector = ConnectorAnimator::new(connector_config, signals.clone());
        if let Some(current) = layout.current() {
            connector.update(&current.nodes, mode, now);
        }
        tracing::info!(
            entries = entries.len(),
            ?mode,
            width = viewport.width,
            height,
            "index page mounted"
        );
        Ok(Self {
            layout,
            connector,
            signals,
            viewport,
            surface,
            mode,
        })
    }

    pub fn mode(&self) -> ViewMode {
        self.mode
    }

    pub fn surface(&self) -> &CanvasSurface {
        &self.surface
    }

    /// Frozen layout.
    pub fn layout(&self) -> Option<&DiaryLayout> {
        self.layout.current()
    }

    /// Pick up a view-mode change published on the shared signals.
    /// Returns `true` if the connector restarted.
    pub fn sync(&mut self, now: Duration) -> DiaryResult<bool> {
        let mode = self.signals.view_mode();
        if mode == self.mode {
            return Ok(false);
        }
        self.mode = mode;
        self.restart(now)?;
        Ok(true)
    }

    /// Flip the view mode through the shared signals and restart the morph.
    pub fn toggle(&mut self, now: Duration) -> DiaryResult<ViewMode> {
        self.signals.toggle_view_mode();
        self.sync(now)?;
        Ok(self.mode)
    }

    /// Follow a viewport resize. Node positions stay put; only the container
    /// height is refreshed, restarting the connector if it changed.
    pub fn resize(&mut self, viewport: Viewport, now: Duration) -> DiaryResult<bool> {
        self.viewport = viewport;
        let height = self.layout.layout(viewport).height(self.mode);
        let resized = self.surface.resize(viewport.width, height)?;
        if resized {
            self.restart_connector(now);
        }
        Ok(resized)
    }

    fn restart(&mut self, now: Duration) -> DiaryResult<()> {
        let height = self.layout.layout(self.viewport).height(self.mode);
        self.surface.resize(self.viewport.width, height)?;
        self.restart_connector(now);
        Ok(())
    }

    fn restart_connector(&mut self, now: Duration) {
        if let Some(current) = self.layout.current() {
            self.connector.update(&current.nodes, self.mode, now);
        }
    }

    /// Compose the scene for one connector frame.
    fn compose(&self, frame: &ConnectorFrame) -> Scene {
        let mut scene = Scene::new();
        frame.draw(&mut scene, self.connector.config());

        let show_dates = self.signals.intro_complete();
        for p in &frame.points {
            scene.circle(*p, MARKER_DIAMETER / 2.0, Rgba8::GRAY, 1.0);
        }

        let Some(layout) = self.layout.current() else {
            return scene;
        };
        let date_px = match self.mode {
            ViewMode::Network => 2.0 * REM_PX,
            ViewMode::Calendar => 1.5 * REM_PX,
        };
        for (node, at) in layout.nodes.iter().zip(&frame.points) {
            scene.label(
                node.display_date.clone(),
                *at,
                date_px,
                if show_dates { 1.0 } else { 0.0 },
            );
        }
        for (i, month) in layout.months.iter().enumerate() {
            match self.mode {
                ViewMode::Network => scene.label(
                    month.label.clone(),
                    month.network_label_at(i, self.viewport),
                    NETWORK_MONTH_FONT_PX,
                    1.0,
                ),
                ViewMode::Calendar => scene.label(
                    month.label.clone(),
                    Point::new(
                        month.cell.x0 + CALENDAR_MONTH_INSET,
                        month.cell.y0 + CALENDAR_MONTH_INSET,
                    ),
                    CALENDAR_MONTH_FONT_PX,
                    1.0,
                ),
            }
        }
        scene
    }
}

impl Animate for IndexPage {
    type Output = Scene;

    fn frame(&mut self, now: Duration) -> Frame<Scene> {
        let frame = self.connector.frame(now);
        Frame {
            value: self.compose(&frame.value),
            state: frame.state,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/page/index.rs"]
mod tests;
