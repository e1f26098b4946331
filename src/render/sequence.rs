use rayon::prelude::*;

use crate::{
    foundation::error::{DiaryError, DiaryResult},
    render::{
        raster::{CpuRasterizer, FrameRGBA},
        scene::Scene,
        surface::CanvasSurface,
    },
};

/// Rasterize `scenes` in parallel, one rasterizer per worker thread.
///
/// Output order matches `scenes`. `threads = None` uses the rayon default.
#[tracing::instrument(skip(scenes, surface), fields(frames = scenes.len()))]
pub fn render_sequence(
    scenes: &[Scene],
    surface: &CanvasSurface,
    threads: Option<usize>,
) -> DiaryResult<Vec<FrameRGBA>> {
    let pool = build_thread_pool(threads)?;
    pool.install(|| {
        scenes
            .par_iter()
            .map_init(CpuRasterizer::new, |raster, scene| raster.render(scene, surface))
            .collect::<DiaryResult<Vec<_>>>()
    })
}

fn build_thread_pool(threads: Option<usize>) -> DiaryResult<rayon::ThreadPool> {
    if let Some(n) = threads
        && n == 0
    {
        return Err(DiaryError::validation("'threads' must be >= 1 when set"));
    }
    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(n) = threads {
        builder = builder.num_threads(n);
    }
    builder
        .build()
        .map_err(|e| DiaryError::render(format!("failed to build rayon thread pool: {e}")))
}

#[cfg(test)]
#[path = "../../tests/unit/render/sequence.rs"]
mod tests;
