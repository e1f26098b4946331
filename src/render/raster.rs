use std::path::Path;

use kurbo::Shape;

use crate::{
    foundation::{
        core::{Affine, BezPath, Point, Rgba8},
        error::{DiaryError, DiaryResult},
    },
    render::{
        scene::{DrawOp, Scene},
        surface::CanvasSurface,
    },
};

/// Flattening tolerance for node-marker circles, in logical pixels.
const CIRCLE_TOLERANCE: f64 = 0.1;
/// Largest backing-store side, in device pixels.
const MAX_SIDE_PX: u32 = u16::MAX as u32;

/// Rendered frame pixels in RGBA8 order.
#[derive(Clone, Debug)]
pub struct FrameRGBA {
    pub width: u32,
    pub height: u32,
    pub data: Vec<u8>,
    pub premultiplied: bool,
}

impl FrameRGBA {
    /// Convert to straight alpha in place.
    pub fn unpremultiply(&mut self) {
        if !self.premultiplied {
            return;
        }
        for px in self.data.chunks_exact_mut(4) {
            let a = u16::from(px[3]);
            if a == 0 {
                px[..3].fill(0);
                continue;
            }
            for c in &mut px[..3] {
                *c = ((u16::from(*c) * 255 + a / 2) / a).min(255) as u8;
            }
        }
        self.premultiplied = false;
    }

    /// Pixel at `(x, y)` as stored.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = (y as usize * self.width as usize + x as usize) * 4;
        self.data.get(i..i + 4).and_then(|s| s.try_into().ok())
    }

    /// Write a straight-alpha PNG.
    pub fn save_png(&self, path: &Path) -> DiaryResult<()> {
        let mut straight = self.clone();
        straight.unpremultiply();
        let img = image::RgbaImage::from_raw(straight.width, straight.height, straight.data)
            .ok_or_else(|| DiaryError::render("invalid rgba buffer size"))?;
        img.save(path)
            .map_err(|e| DiaryError::render(format!("write {}: {e}", path.display())))
    }
}

/// Software rasterizer for [`Scene`]s, backed by `vello_cpu`.
#[derive(Debug, Default)]
pub struct CpuRasterizer {
    frames: u64,
}

impl CpuRasterizer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Frames rendered by this rasterizer.
    pub fn frames_rendered(&self) -> u64 {
        self.frames
    }

    /// Rasterize `scene` onto a backing store sized for `surface`.
    #[tracing::instrument(skip_all, fields(ops = scene.ops.len()))]
    pub fn render(&mut self, scene: &Scene, surface: &CanvasSurface) -> DiaryResult<FrameRGBA> {
        let (width, height) = surface.pixel_size();
        let w: u16 = width.try_into().map_err(|_| {
            DiaryError::render(format!("surface width {width}px exceeds {MAX_SIDE_PX}"))
        })?;
        let h: u16 = height.try_into().map_err(|_| {
            DiaryError::render(format!(
                "surface height {height}px exceeds {MAX_SIDE_PX}; render a scrolled window"
            ))
        })?;
        if w == 0 || h == 0 {
            return Err(DiaryError::render(format!(
                "cannot rasterize an empty surface ({width}x{height})"
            )));
        }

        let mut pixmap = vello_cpu::Pixmap::new(w, h);
        let mut ctx = vello_cpu::RenderContext::new(w, h);

        ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
        ctx.set_paint(color_to_cpu(scene.background));
        ctx.fill_rect(&vello_cpu::kurbo::Rect::new(
            0.0,
            0.0,
            f64::from(w),
            f64::from(h),
        ));

        let transform = affine_to_cpu(surface.transform());
        for op in &scene.ops {
            draw_op(&mut ctx, op, transform);
        }
        ctx.flush();
        ctx.render_to_pixmap(&mut pixmap);
        self.frames += 1;

        Ok(FrameRGBA {
            width,
            height,
            data: pixmap.data_as_u8_slice().to_vec(),
            premultiplied: true,
        })
    }
}

fn draw_op(ctx: &mut vello_cpu::RenderContext, op: &DrawOp, transform: vello_cpu::kurbo::Affine) {
    ctx.set_transform(transform);
    match op {
        DrawOp::StrokePath {
            path,
            color,
            width,
            opacity,
        } => {
            ctx.set_paint(color_to_cpu(*color));
            ctx.set_stroke(vello_cpu::kurbo::Stroke::new(*width));
            with_opacity(ctx, *opacity, |ctx| ctx.stroke_path(&bezpath_to_cpu(path)));
        }
        DrawOp::FillCircle {
            center,
            radius,
            color,
            opacity,
        } => {
            let disc = kurbo::Circle::new(*center, *radius).to_path(CIRCLE_TOLERANCE);
            ctx.set_paint(color_to_cpu(*color));
            with_opacity(ctx, *opacity, |ctx| ctx.fill_path(&bezpath_to_cpu(&disc)));
        }
    }
}

fn with_opacity(
    ctx: &mut vello_cpu::RenderContext,
    opacity: f32,
    draw: impl FnOnce(&mut vello_cpu::RenderContext),
) {
    if opacity < 1.0 {
        ctx.push_opacity_layer(opacity);
        draw(ctx);
        ctx.pop_layer();
    } else {
        draw(ctx);
    }
}

fn color_to_cpu(c: Rgba8) -> vello_cpu::peniko::Color {
    vello_cpu::peniko::Color::from_rgba8(c.r, c.g, c.b, c.a)
}

fn affine_to_cpu(a: Affine) -> vello_cpu::kurbo::Affine {
    vello_cpu::kurbo::Affine::new(a.as_coeffs())
}

fn point_to_cpu(p: Point) -> vello_cpu::kurbo::Point {
    vello_cpu::kurbo::Point::new(p.x, p.y)
}

fn bezpath_to_cpu(path: &BezPath) -> vello_cpu::kurbo::BezPath {
    use kurbo::PathEl;

    let mut out = vello_cpu::kurbo::BezPath::new();
    for &el in path.elements() {
        match el {
            PathEl::MoveTo(p) => out.move_to(point_to_cpu(p)),
            PathEl::LineTo(p) => out.line_to(point_to_cpu(p)),
            PathEl::QuadTo(p1, p2) => out.quad_to(point_to_cpu(p1), point_to_cpu(p2)),
            PathEl::CurveTo(p1, p2, p3) => {
                out.curve_to(point_to_cpu(p1), point_to_cpu(p2), point_to_cpu(p3));
            }
            PathEl::ClosePath => out.close_path(),
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/render/raster.rs"]
mod tests;
