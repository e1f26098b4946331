use crate::foundation::{
    core::Affine,
    error::{DiaryError, DiaryResult},
};

/// Drawing surface sized in logical pixels and backed at device resolution.
///
/// Mirrors a high-DPI canvas: the backing store is `logical × dpr` and every
/// draw is scaled by `dpr`. [`CanvasSurface::resize`] is a no-op when the
/// logical size is unchanged, so the backing store is only reallocated when
/// the container actually changes. A [`CanvasSurface::window`] views a
/// scrolled slice of a tall container at viewport height.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CanvasSurface {
    width: f64,
    height: f64,
    dpr: f64,
    scroll_y: f64,
    generation: u64,
}

impl CanvasSurface {
    /// Surface of `width × height` logical pixels at device pixel ratio `dpr`.
    pub fn new(width: f64, height: f64, dpr: f64) -> DiaryResult<Self> {
        if !(dpr.is_finite() && dpr > 0.0) {
            return Err(DiaryError::validation(format!(
                "device pixel ratio must be positive, got {dpr}"
            )));
        }
        validate_size(width, height)?;
        Ok(Self {
            width,
            height,
            dpr,
            scroll_y: 0.0,
            generation: 0,
        })
    }

    /// Slice of this surface `height` logical pixels tall, scrolled down by
    /// `scroll_y`. The slice is clipped to the container bottom.
    pub fn window(&self, scroll_y: f64, height: f64) -> DiaryResult<Self> {
        if !(scroll_y.is_finite() && scroll_y >= 0.0) {
            return Err(DiaryError::validation(format!(
                "scroll offset must be finite and non-negative, got {scroll_y}"
            )));
        }
        validate_size(self.width, height)?;
        Ok(Self {
            height: height.min((self.height - scroll_y).max(0.0)),
            scroll_y,
            ..*self
        })
    }

    /// Logical width.
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Logical height.
    pub fn height(&self) -> f64 {
        self.height
    }

    /// Device pixel ratio.
    pub fn dpr(&self) -> f64 {
        self.dpr
    }

    /// Logical offset of the top edge within the container.
    pub fn scroll_y(&self) -> f64 {
        self.scroll_y
    }

    /// Number of backing-store reallocations so far.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Backing-store size in device pixels.
    pub fn pixel_size(&self) -> (u32, u32) {
        (
            (self.width * self.dpr).floor() as u32,
            (self.height * self.dpr).floor() as u32,
        )
    }

    /// Container → device transform.
    pub fn transform(&self) -> Affine {
        Affine::scale(self.dpr) * Affine::translate((0.0, -self.scroll_y))
    }

    /// Match the container size. Returns `true` when the backing store changed.
    pub fn resize(&mut self, width: f64, height: f64) -> DiaryResult<bool> {
        validate_size(width, height)?;
        if width == self.width && height == self.height {
            return Ok(false);
        }
        self.width = width;
        self.height = height;
        self.generation += 1;
        tracing::debug!(width, height, dpr = self.dpr, "canvas resized");
        Ok(true)
    }
}

fn validate_size(width: f64, height: f64) -> DiaryResult<()> {
    if !(width.is_finite() && height.is_finite()) || width < 0.0 || height < 0.0 {
        return Err(DiaryError::validation(format!(
            "canvas size must be finite and non-negative, got {width}x{height}"
        )));
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/render/surface.rs"]
mod tests;
