use crate::foundation::core::{BezPath, Point, Rgba8};

/// Stroke width of connector curves, in logical pixels.
pub const CONNECTOR_LINE_WIDTH: f64 = 1.0;

/// One drawing command in logical (CSS pixel) coordinates.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawOp {
    /// Stroke an open path.
    StrokePath {
        path: BezPath,
        color: Rgba8,
        width: f64,
        opacity: f32,
    },
    /// Fill a disc, used for node markers.
    FillCircle {
        center: Point,
        radius: f64,
        color: Rgba8,
        opacity: f32,
    },
}

/// Text placed on the scene; exported as data, not rasterized.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct Label {
    pub text: String,
    /// Anchor point in container coordinates.
    pub at: Point,
    pub font_px: f64,
    pub opacity: f64,
}

/// Everything drawn for one frame.
#[derive(Clone, Debug, PartialEq)]
pub struct Scene {
    pub background: Rgba8,
    pub ops: Vec<DrawOp>,
    pub labels: Vec<Label>,
}

impl Default for Scene {
    fn default() -> Self {
        Self {
            background: Rgba8::WHITE,
            ops: Vec::new(),
            labels: Vec::new(),
        }
    }
}

impl Scene {
    /// Empty scene on a white page.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a stroke; fully transparent or empty paths are skipped.
    pub fn stroke(&mut self, path: BezPath, color: Rgba8, width: f64, opacity: f32) {
        if opacity <= 0.0 || path.elements().is_empty() {
            return;
        }
        self.ops.push(DrawOp::StrokePath {
            path,
            color,
            width,
            opacity: opacity.min(1.0),
        });
    }

    /// Queue a filled disc.
    pub fn circle(&mut self, center: Point, radius: f64, color: Rgba8, opacity: f32) {
        if opacity <= 0.0 || radius <= 0.0 {
            return;
        }
        self.ops.push(DrawOp::FillCircle {
            center,
            radius,
            color,
            opacity: opacity.min(1.0),
        });
    }

    /// Place a text label.
    pub fn label(&mut self, text: impl Into<String>, at: Point, font_px: f64, opacity: f64) {
        self.labels.push(Label {
            text: text.into(),
            at,
            font_px,
            opacity,
        });
    }
}
