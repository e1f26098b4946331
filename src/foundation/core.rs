use std::time::Duration;

use crate::foundation::error::{DiaryError, DiaryResult};

pub use kurbo::{Affine, BezPath, Point, Rect, Vec2};

/// Viewport width (px) at and above which the wide layouts apply.
pub const WIDE_BREAKPOINT_PX: f64 = 768.0;

/// Root font size used to resolve `rem` based anchors.
pub const REM_PX: f64 = 16.0;

/// Size of the visible browser viewport in CSS pixels.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Viewport {
    /// Width in CSS pixels.
    pub width: f64,
    /// Height in CSS pixels.
    pub height: f64,
}

impl Viewport {
    /// Create a validated viewport with finite, positive dimensions.
    pub fn new(width: f64, height: f64) -> DiaryResult<Self> {
        if !(width.is_finite() && height.is_finite()) || width <= 0.0 || height <= 0.0 {
            return Err(DiaryError::validation(format!(
                "viewport must be positive and finite, got {width}x{height}"
            )));
        }
        Ok(Self { width, height })
    }

    /// Breakpoint class for this viewport.
    pub fn class(self) -> ViewportClass {
        if self.width >= WIDE_BREAKPOINT_PX {
            ViewportClass::Wide
        } else {
            ViewportClass::Narrow
        }
    }

    /// Return `true` for the narrow (phone) layout.
    pub fn is_narrow(self) -> bool {
        self.class() == ViewportClass::Narrow
    }
}

/// Responsive breakpoint class.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewportClass {
    /// Below [`WIDE_BREAKPOINT_PX`].
    Narrow,
    /// At or above [`WIDE_BREAKPOINT_PX`].
    Wide,
}

/// Which of the two coordinate systems is on screen.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewMode {
    /// Scatter view, one viewport-height band per month.
    #[default]
    Network,
    /// Month grid view.
    Calendar,
}

impl ViewMode {
    /// The other mode.
    pub fn toggled(self) -> Self {
        match self {
            Self::Network => Self::Calendar,
            Self::Calendar => Self::Network,
        }
    }
}

/// Frames-per-second represented as a rational `num/den`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Fps {
    /// Numerator (frames).
    pub num: u32,
    /// Denominator (seconds), must be non-zero.
    pub den: u32,
}

impl Fps {
    /// Create a validated FPS value.
    pub fn new(num: u32, den: u32) -> DiaryResult<Self> {
        if den == 0 {
            return Err(DiaryError::validation("Fps den must be > 0"));
        }
        if num == 0 {
            return Err(DiaryError::validation("Fps num must be > 0"));
        }
        Ok(Self { num, den })
    }

    /// Convert to floating-point FPS.
    pub fn as_f64(self) -> f64 {
        f64::from(self.num) / f64::from(self.den)
    }

    /// Elapsed time at the start of frame `frame`.
    pub fn frame_time(self, frame: u64) -> Duration {
        let nanos = u128::from(frame) * u128::from(self.den) * 1_000_000_000 / u128::from(self.num);
        Duration::from_nanos(u64::try_from(nanos).unwrap_or(u64::MAX))
    }

    /// Number of whole frames needed to cover `duration`.
    pub fn frames_for(self, duration: Duration) -> u64 {
        (duration.as_secs_f64() * self.as_f64()).ceil().max(0.0) as u64
    }
}

/// Straight (non-premultiplied) RGBA8 color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Rgba8 {
    /// Red.
    pub r: u8,
    /// Green.
    pub g: u8,
    /// Blue.
    pub b: u8,
    /// Alpha.
    pub a: u8,
}

impl Rgba8 {
    /// Opaque black, the stroke color of every connector.
    pub const BLACK: Self = Self::opaque(0, 0, 0);
    /// Opaque white page background.
    pub const WHITE: Self = Self::opaque(255, 255, 255);
    /// Tailwind `gray-500`, used for node markers and side dates.
    pub const GRAY: Self = Self::opaque(107, 114, 128);

    /// Opaque color from channels.
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
