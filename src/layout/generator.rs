use chrono::NaiveDate;

use crate::{
    content::model::{DiaryEntry, format_display_date},
    foundation::{
        core::{Point, Rect, ViewMode, Viewport, ViewportClass},
        rng::Rng64,
    },
    layout::month::{MonthKey, group_by_month},
};

/// Constants of the two coordinate systems.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct LayoutConfig {
    /// Inset of the network scatter inside each month band.
    pub network_padding: f64,
    /// Grid columns on wide viewports.
    pub grid_cols_wide: u32,
    /// Grid columns on narrow viewports.
    pub grid_cols_narrow: u32,
    /// Gap between grid cells.
    pub grid_gap: f64,
    /// Horizontal container padding on wide viewports.
    pub padding_x_wide: f64,
    /// Horizontal container padding on narrow viewports.
    pub padding_x_narrow: f64,
    /// Space above the grid (navigation area).
    pub padding_top: f64,
    /// Space below the last grid row.
    pub padding_bottom: f64,
    /// Lower bound of the in-cell random fraction.
    pub cell_random_min: f64,
    /// Upper bound of the in-cell random fraction.
    pub cell_random_max: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            network_padding: 100.0,
            grid_cols_wide: 3,
            grid_cols_narrow: 1,
            grid_gap: 8.0,
            padding_x_wide: 192.0,
            padding_x_narrow: 32.0,
            padding_top: 192.0,
            padding_bottom: 64.0,
            cell_random_min: 0.2,
            cell_random_max: 0.8,
        }
    }
}

/// Positioned entry in both views.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct DateNode {
    /// Entry id.
    pub id: String,
    /// Entry day.
    pub date: NaiveDate,
    /// `YY/MM/DD` label.
    pub display_date: String,
    /// 0-based chronological month index.
    pub month_index: usize,
    /// Network view x.
    pub network_x: f64,
    /// Network view y.
    pub network_y: f64,
    /// Calendar view x.
    pub calendar_x: f64,
    /// Calendar view y.
    pub calendar_y: f64,
    /// Thumbnail shown on hover.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail_url: Option<String>,
}

impl DateNode {
    /// Position in `mode`.
    pub fn position(&self, mode: ViewMode) -> Point {
        match mode {
            ViewMode::Network => Point::new(self.network_x, self.network_y),
            ViewMode::Calendar => Point::new(self.calendar_x, self.calendar_y),
        }
    }
}

/// One month: its grid cell and label.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct MonthBand {
    /// Month.
    pub key: MonthKey,
    /// `YYYY/MM`.
    pub label: String,
    /// Square calendar cell.
    pub cell: Rect,
}

impl MonthBand {
    /// Centre of this month's network band label for `viewport`.
    pub fn network_label_at(&self, index: usize, viewport: Viewport) -> Point {
        Point::new(
            viewport.width / 2.0,
            (index as f64) * viewport.height + viewport.height / 2.0,
        )
    }
}

/// Both coordinate systems for a list of entries, plus container heights.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct DiaryLayout {
    /// Nodes in ascending date order.
    pub nodes: Vec<DateNode>,
    /// Month bands in ascending order.
    pub months: Vec<MonthBand>,
    /// Network container height: one viewport height per month.
    pub network_height: f64,
    /// Calendar container height: lowest cell bottom plus bottom padding.
    pub calendar_height: f64,
    /// Seed the positions were drawn with.
    pub seed: u64,
}

impl DiaryLayout {
    /// Container height in `mode`.
    pub fn height(&self, mode: ViewMode) -> f64 {
        match mode {
            ViewMode::Network => self.network_height,
            ViewMode::Calendar => self.calendar_height,
        }
    }

    /// Lowest calendar cell edge.
    pub fn calendar_content_bottom(&self) -> f64 {
        self.months
            .iter()
            .map(|m| m.cell.y1)
            .fold(0.0, f64::max)
    }
}

struct GridMetrics {
    cols: u32,
    padding_x: f64,
    square: f64,
}

impl GridMetrics {
    fn new(config: &LayoutConfig, viewport: Viewport) -> Self {
        let (cols, padding_x) = match viewport.class() {
            ViewportClass::Wide => (config.grid_cols_wide, config.padding_x_wide),
            ViewportClass::Narrow => (config.grid_cols_narrow, config.padding_x_narrow),
        };
        let cols = cols.max(1);
        let available = viewport.width - padding_x * 2.0;
        let gaps = config.grid_gap * f64::from(cols - 1);
        let square = ((available - gaps) / f64::from(cols)).max(0.0);
        Self {
            cols,
            padding_x,
            square,
        }
    }

    fn cell(&self, config: &LayoutConfig, month_index: usize) -> Rect {
        let cols = self.cols as usize;
        let row = (month_index / cols) as f64;
        let col = (month_index % cols) as f64;
        let left = self.padding_x + col * (self.square + config.grid_gap);
        let top = config.padding_top + row * (self.square + config.grid_gap);
        Rect::new(left, top, left + self.square, top + self.square)
    }
}

/// Compute both coordinate systems.
///
/// Pure in `(entries, viewport, config, seed)`: the same inputs always yield
/// the same layout. Each entry consumes four draws in order: network x,
/// network y, calendar x fraction, calendar y fraction.
#[tracing::instrument(skip(entries, config), fields(entries = entries.len()))]
pub fn compute_layout(
    entries: &[DiaryEntry],
    viewport: Viewport,
    config: &LayoutConfig,
    seed: u64,
) -> DiaryLayout {
    let mut rng = Rng64::new(seed);
    let grid = GridMetrics::new(config, viewport);
    let pad = config.network_padding;
    let span_x = (viewport.width - pad * 2.0).max(0.0);
    let span_y = (viewport.height - pad * 2.0).max(0.0);
    let right_limit = viewport.width - grid.padding_x;

    let buckets = group_by_month(entries);
    let mut nodes = Vec::with_capacity(entries.len());
    let mut months = Vec::with_capacity(buckets.len());

    for (month_index, bucket) in buckets.iter().enumerate() {
        let cell = grid.cell(config, month_index);
        months.push(MonthBand {
            key: bucket.key,
            label: bucket.key.label(),
            cell,
        });

        let band_top = (month_index as f64) * viewport.height;
        for entry in &bucket.entries {
            let network_x = pad + rng.next_f64() * span_x;
            let network_y = band_top + pad + rng.next_f64() * span_y;

            let fx = rng.range(config.cell_random_min, config.cell_random_max);
            let fy = rng.range(config.cell_random_min, config.cell_random_max);
            let max_x = cell.x1.min(right_limit);
            let calendar_x = (cell.x0 + fx * grid.square).min(max_x);
            let calendar_y = cell.y0 + fy * grid.square;

            nodes.push(DateNode {
                id: entry.id.clone(),
                date: entry.date,
                display_date: format_display_date(entry.date),
                month_index,
                network_x,
                network_y,
                calendar_x,
                calendar_y,
                thumbnail_url: entry.thumbnail_url.clone(),
            });
        }
    }

    let mut layout = DiaryLayout {
        nodes,
        months,
        network_height: 0.0,
        calendar_height: 0.0,
        seed,
    };
    layout.network_height = (layout.months.len() as f64) * viewport.height;
    layout.calendar_height = layout.calendar_content_bottom() + config.padding_bottom;
    layout
}

#[cfg(test)]
#[path = "../../tests/unit/layout/generator.rs"]
mod tests;
