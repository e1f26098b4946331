use std::time::Duration;

use crate::{
    animation::{
        ease::Ease,
        frame_loop::{Animate, Frame, FrameState},
        tween::Tween,
    },
    foundation::core::{BezPath, Point, Rgba8, ViewMode},
    layout::generator::DateNode,
    render::{
        curve::{curve_seed, rough_polyline},
        scene::{CONNECTOR_LINE_WIDTH, Scene},
    },
    shell::signal::Signals,
};

/// Timing and styling of the connector line between consecutive entries.
#[derive(Clone, Debug, PartialEq)]
pub struct ConnectorConfig {
    /// Fade-in length on first load.
    pub stroke_in: Duration,
    /// Network/calendar morph length.
    pub morph: Duration,
    /// Easing applied to the morph progress.
    pub morph_ease: Ease,
    /// Wobble multiplier for the rough curves.
    pub curve_scale: f64,
    /// Stroke width in logical pixels.
    pub line_width: f64,
    /// Stroke color.
    pub color: Rgba8,
}

impl Default for ConnectorConfig {
    fn default() -> Self {
        Self {
            stroke_in: Duration::from_millis(200),
            morph: Duration::from_millis(700),
            morph_ease: Ease::InOutCubic,
            curve_scale: 3.0,
            line_width: CONNECTOR_LINE_WIDTH,
            color: Rgba8::BLACK,
        }
    }
}

/// What the connector draws on one frame.
#[derive(Clone, Debug, PartialEq)]
pub struct ConnectorFrame {
    /// Line opacity (below 1 only while stroking in).
    pub alpha: f64,
    /// Eased morph progress in `[0, 1]`.
    pub morph: f64,
    /// Interpolated node positions, ascending date order.
    pub points: Vec<Point>,
    /// Rough curves through `points`.
    pub path: BezPath,
}

impl ConnectorFrame {
    fn empty() -> Self {
        Self {
            alpha: 1.0,
            morph: 1.0,
            points: Vec::new(),
            path: BezPath::new(),
        }
    }

    /// Queue this frame's stroke on `scene`.
    pub fn draw(&self, scene: &mut Scene, config: &ConnectorConfig) {
        scene.stroke(
            self.path.clone(),
            config.color,
            config.line_width,
            self.alpha as f32,
        );
    }
}

/// Animates the line through all nodes between the two view modes.
///
/// Every [`ConnectorAnimator::update`] restarts the morph from the node set
/// and mode of the previous update. The very first run additionally fades the
/// stroke in and, once finished, publishes intro-complete on [`Signals`].
#[derive(Debug)]
pub struct ConnectorAnimator {
    config: ConnectorConfig,
    signals: Signals,
    start_nodes: Vec<DateNode>,
    target_nodes: Vec<DateNode>,
    start_mode: ViewMode,
    mode: ViewMode,
    started_at: Option<Duration>,
    initial_load: bool,
    stroke_progress: f64,
}

impl ConnectorAnimator {
    pub fn new(config: ConnectorConfig, signals: Signals) -> Self {
        Self {
            config,
            signals,
            start_nodes: Vec::new(),
            target_nodes: Vec::new(),
            start_mode: ViewMode::default(),
            mode: ViewMode::default(),
            started_at: None,
            initial_load: true,
            stroke_progress: 0.0,
        }
    }

    pub fn config(&self) -> &ConnectorConfig {
        &self.config
    }

    /// Return `true` until the first animation has completed.
    pub fn is_initial_load(&self) -> bool {
        self.initial_load
    }

    /// New target nodes and/or mode at time `now`; restarts the animation.
    ///
    /// An empty node set leaves the animator untouched.
    pub fn update(&mut self, nodes: &[DateNode], mode: ViewMode, now: Duration) {
        if nodes.is_empty() {
            return;
        }
        let first = self.started_at.is_none();
        let previous = std::mem::replace(&mut self.target_nodes, nodes.to_vec());
        self.start_nodes = if first { nodes.to_vec() } else { previous };
        self.start_mode = if first { mode } else { self.mode };
        self.mode = mode;
        if self.initial_load {
            self.stroke_progress = 0.0;
        }
        self.started_at = Some(now);
        tracing::debug!(
            nodes = nodes.len(),
            from = ?self.start_mode,
            to = ?mode,
            "connector animation restarted"
        );
    }

    fn node_tween(&self, index: usize, target: &DateNode) -> Tween<Point> {
        let to = target.position(self.mode);
        let from = match self.start_nodes.get(index) {
            Some(start) if start.id == target.id => start.position(self.start_mode),
            _ => to,
        };
        Tween::start(from, to, self.config.morph, self.config.morph_ease)
    }
}

impl Animate for ConnectorAnimator {
    type Output = ConnectorFrame;

    fn frame(&mut self, now: Duration) -> Frame<ConnectorFrame> {
        let Some(started_at) = self.started_at else {
            return Frame {
                value: ConnectorFrame::empty(),
                state: FrameState::Complete,
            };
        };
        let elapsed = now.saturating_sub(started_at);

        let stroking_in = self.initial_load && self.stroke_progress < 1.0;
        let mut stroke = 1.0;
        if stroking_in {
            stroke = Tween::start(0.0, 1.0, self.config.stroke_in, Ease::InQuad).sample(elapsed);
            self.stroke_progress = stroke;
        }

        let mut morph = 1.0;
        let mut points = Vec::with_capacity(self.target_nodes.len());
        for (i, node) in self.target_nodes.iter().enumerate() {
            let tween = self.node_tween(i, node);
            morph = tween.eased(elapsed);
            points.push(tween.sample(elapsed));
        }
        let morph_done = elapsed >= self.config.morph;

        let nodes = &self.target_nodes;
        let path = rough_polyline(&points, self.config.curve_scale, |i| {
            curve_seed(&nodes[i].id, i)
        });

        let complete = morph_done && (!stroking_in || stroke >= 1.0);
        if complete && self.initial_load {
            self.initial_load = false;
            self.signals.complete_intro();
        }

        Frame {
            value: ConnectorFrame {
                alpha: if stroking_in { stroke } else { 1.0 },
                morph,
                points,
                path,
            },
            state: if complete {
                FrameState::Complete
            } else {
                FrameState::Running
            },
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/connector.rs"]
mod tests;
