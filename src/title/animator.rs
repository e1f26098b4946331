use std::time::Duration;

use crate::{
    animation::{
        frame_loop::{Animate, Frame, FrameState},
        tween::approach,
    },
    foundation::{
        core::{BezPath, Point, REM_PX, Rgba8, Viewport},
        rng::Rng64,
    },
    render::{curve::rough_polyline, scene::Scene},
    shell::signal::Signals,
    title::idle::IdleTimer,
};

/// Constants of the decorative title.
#[derive(Clone, Debug, PartialEq)]
pub struct TitleConfig {
    /// Characters of the title, in reading order.
    pub text: String,
    /// Character pinned to the centre of the wide title box.
    pub pinned_mid: usize,
    /// Inactivity before the characters start drifting.
    pub idle_after: Duration,
    /// Smoothing factor while the user is active.
    pub active_smoothing: f64,
    /// Smoothing factor while drifting idle.
    pub idle_smoothing: f64,
    /// Distance below which an idle character picks a new target.
    pub retarget_distance: f64,
    /// Wobble multiplier for the connecting curves.
    pub curve_scale: f64,
    /// Curve seed increment per character.
    pub curve_seed_step: f64,
    /// Inset from the edges of the home area.
    pub pad: f64,
    /// Narrow layout: first character x as a fraction of the width.
    pub narrow_x_min: f64,
    /// Narrow layout: last character x as a fraction of the width.
    pub narrow_x_max: f64,
    /// Narrow layout: minimum step between neighbours (fraction of width).
    pub narrow_x_step: f64,
    /// Narrow layout: space reserved per remaining character.
    pub narrow_x_reserve: f64,
    /// Wide layout: offset of the title box from the viewport corner.
    pub wide_offset: Point,
    /// Wide layout: vertical spacing is `base + seed * range`.
    pub wide_spacing_base: f64,
    /// Wide layout: random part of the vertical spacing.
    pub wide_spacing_range: f64,
    /// Character size below the breakpoint.
    pub narrow_font_px: f64,
    /// Character size at and above the breakpoint.
    pub wide_font_px: f64,
}

impl Default for TitleConfig {
    fn default() -> Self {
        Self {
            text: "Walking●Coding".to_string(),
            pinned_mid: 8,
            idle_after: Duration::from_secs(30),
            active_smoothing: 0.08,
            idle_smoothing: 0.01,
            retarget_distance: 10.0,
            curve_scale: 1.0,
            curve_seed_step: 0.1,
            pad: 10.0,
            narrow_x_min: 0.05,
            narrow_x_max: 0.95,
            narrow_x_step: 0.02,
            narrow_x_reserve: 0.03,
            wide_offset: Point::new(8.0, 8.0),
            wide_spacing_base: 20.0,
            wide_spacing_range: 15.0,
            narrow_font_px: 2.0 * REM_PX,
            wide_font_px: 2.75 * REM_PX,
        }
    }
}

impl TitleConfig {
    /// Size of the wide title box for `viewport`: one grid column plus 3rem
    /// wide, three quarters of the viewport tall.
    pub fn wide_box(&self, viewport: Viewport) -> (f64, f64) {
        (
            (viewport.width - REM_PX * 11.0) / 6.0 + REM_PX * 3.0,
            viewport.height * 0.75,
        )
    }
}

/// Per-character random triple, drawn once per session.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CharSeed {
    /// Horizontal draw in `[0, 1)`.
    pub x: f64,
    /// Vertical draw in `[0, 1)`.
    pub y: f64,
    /// Draw for the wide-layout vertical spacing.
    pub spacing: f64,
}

/// One frame of the title.
#[derive(Clone, Debug, PartialEq)]
pub struct TitleFrame {
    /// Characters and their displayed centres.
    pub glyphs: Vec<(char, Point)>,
    /// Rough curves linking consecutive characters.
    pub path: BezPath,
    /// Whether the title is shown at all.
    pub visible: bool,
    /// Whether the characters were drifting this frame.
    pub idle: bool,
}

impl TitleFrame {
    /// Queue the connecting curve and character labels on `scene`.
    pub fn draw(&self, scene: &mut Scene, font_px: f64) {
        if !self.visible {
            return;
        }
        scene.stroke(self.path.clone(), Rgba8::BLACK, 1.0, 1.0);
        for (ch, at) in &self.glyphs {
            scene.label(ch.to_string(), *at, font_px, 1.0);
        }
    }
}

/// Title characters that sit at "home" while the user is active and drift
/// around the viewport once idle.
#[derive(Clone, Debug)]
pub struct TitleAnimator {
    config: TitleConfig,
    chars: Vec<char>,
    seeds: Vec<CharSeed>,
    positions: Vec<Point>,
    targets: Vec<Point>,
    idle: IdleTimer,
    rng: Rng64,
    viewport: Viewport,
    visible: bool,
}

impl TitleAnimator {
    /// Title mounted at `now` for `viewport`; the seeds are drawn from `seed`
    /// and kept. Idle detection counts from the mount time.
    ///
    /// On the index page the title stays hidden until the intro completes.
    pub fn new(
        config: TitleConfig,
        viewport: Viewport,
        seed: u64,
        on_index: bool,
        now: Duration,
    ) -> Self {
        let chars: Vec<char> = config.text.chars().collect();
        let mut rng = Rng64::new(seed);
        let seeds = chars
            .iter()
            .map(|_| CharSeed {
                x: rng.next_f64(),
                y: rng.next_f64(),
                spacing: rng.next_f64(),
            })
            .collect();
        let origin = vec![Point::ZERO; chars.len()];
        Self {
            idle: IdleTimer::new(config.idle_after, now),
            config,
            seeds,
            positions: origin.clone(),
            targets: origin,
            chars,
            rng,
            viewport,
            visible: !on_index,
        }
    }

    pub fn config(&self) -> &TitleConfig {
        &self.config
    }

    pub fn seeds(&self) -> &[CharSeed] {
        &self.seeds
    }

    pub fn positions(&self) -> &[Point] {
        &self.positions
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Reveal the title once the intro animation has completed.
    pub fn sync_intro(&mut self, signals: &Signals) {
        if signals.intro_complete() {
            self.visible = true;
        }
    }

    /// Track a viewport resize at `now`. Crossing from narrow to wide starts
    /// idle detection afresh.
    pub fn set_viewport(&mut self, viewport: Viewport, now: Duration) {
        if self.viewport.is_narrow() && !viewport.is_narrow() {
            self.idle.reset(now);
        }
        self.viewport = viewport;
    }

    /// Pointer movement or scrolling at `now`.
    pub fn note_input(&mut self, now: Duration) {
        self.idle.reset(now);
    }

    /// Whether the characters drift at `now`. Never on narrow viewports.
    pub fn is_idle(&self, now: Duration) -> bool {
        !self.viewport.is_narrow() && self.idle.is_idle(now)
    }

    /// Resting position of every character for the current viewport.
    pub fn home_positions(&self) -> Vec<Point> {
        if self.viewport.is_narrow() {
            self.narrow_homes()
        } else {
            self.wide_homes()
        }
    }

    /// Left-to-right in a band along the bottom edge, x strictly increasing.
    fn narrow_homes(&self) -> Vec<Point> {
        let c = &self.config;
        let width = self.viewport.width;
        let band = width / 4.0;
        let top = self.viewport.height - band;
        let last = self.chars.len().saturating_sub(1);

        let mut prev = c.narrow_x_min;
        self.seeds
            .iter()
            .enumerate()
            .map(|(i, seed)| {
                let frac = if i == 0 {
                    c.narrow_x_min
                } else if i == last {
                    c.narrow_x_max
                } else {
                    let min = prev + c.narrow_x_step;
                    let remaining = (last - i) as f64;
                    let max = (c.narrow_x_max - remaining * c.narrow_x_reserve)
                        .max(min + c.narrow_x_step);
                    prev = min + seed.x * (max - min);
                    prev
                };
                let y = top + c.pad + seed.y * (band - c.pad * 2.0);
                Point::new(width * frac, y)
            })
            .collect()
    }

    /// Top-to-bottom in a box at the top-left, on a seeded sine wave.
    fn wide_homes(&self) -> Vec<Point> {
        let c = &self.config;
        let (w, h) = c.wide_box(self.viewport);
        let pad = c.pad;
        let mid = c.pinned_mid;
        let last = self.chars.len().saturating_sub(1);
        let spacing: Vec<f64> = self
            .seeds
            .iter()
            .map(|s| c.wide_spacing_base + s.spacing * c.wide_spacing_range)
            .collect();

        self.seeds
            .iter()
            .enumerate()
            .map(|(i, seed)| {
                let local = if i == 0 {
                    Point::new(pad, pad)
                } else if i == last {
                    Point::new(w - pad, h - pad)
                } else if i == mid {
                    Point::new(w / 2.0, h / 2.0)
                } else {
                    let wave = i as f64 * 0.618 + seed.x * 100.0;
                    let x = (wave.sin() * 0.5 + 0.5) * (w - pad * 2.0) + pad;
                    let (start_y, first, limit) = if i < mid {
                        (pad, 1, h / 2.0)
                    } else {
                        (h / 2.0, mid + 1, h)
                    };
                    let y = start_y + spacing[first..=i].iter().sum::<f64>();
                    Point::new(x, y.min(limit - pad))
                };
                local + c.wide_offset.to_vec2()
            })
            .collect()
    }

    /// Advance one frame at `now`.
    pub fn step(&mut self, now: Duration) -> TitleFrame {
        let idle = self.is_idle(now);
        let homes = self.home_positions();
        let smoothing = if idle {
            self.config.idle_smoothing
        } else {
            self.config.active_smoothing
        };

        for (i, home) in homes.into_iter().enumerate() {
            if idle {
                let target = self.targets[i];
                if target.distance(self.positions[i]) < self.config.retarget_distance
                    || target == Point::ZERO
                {
                    self.targets[i] = Point::new(
                        self.rng.next_f64() * self.viewport.width,
                        self.rng.next_f64() * self.viewport.height,
                    );
                }
            } else {
                self.targets[i] = home;
            }
            self.positions[i] = approach(&self.positions[i], &self.targets[i], smoothing);
        }

        let step = self.config.curve_seed_step;
        TitleFrame {
            glyphs: self.chars.iter().copied().zip(self.positions.iter().copied()).collect(),
            path: rough_polyline(&self.positions, self.config.curve_scale, |i| i as f64 * step),
            visible: self.visible,
            idle,
        }
    }

    /// Font size of the characters for the current viewport.
    pub fn font_px(&self) -> f64 {
        if self.viewport.is_narrow() {
            self.config.narrow_font_px
        } else {
            self.config.wide_font_px
        }
    }
}

impl Animate for TitleAnimator {
    type Output = TitleFrame;

    /// The title loops for as long as it is mounted.
    fn frame(&mut self, now: Duration) -> Frame<TitleFrame> {
        Frame {
            value: self.step(now),
            state: FrameState::Running,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/title/animator.rs"]
mod tests;
