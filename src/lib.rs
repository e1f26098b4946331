//! A creative-coding diary engine.
//!
//! Entries are fetched from a Notion data source, cached once per process and
//! laid out in two coordinate systems: a per-month "network" scatter and a
//! month "calendar" grid. A rough, hand-drawn connector morphs between the
//! two, a decorative title drifts when the user goes idle, and the detail
//! pages slide between neighbouring entries before navigating.
//!
//! # Pipeline overview
//!
//! 1. **Fetch**: [`ContentSource`] → [`EntryCache`] → [`EntryStore`] (newest first)
//! 2. **Layout**: [`FrozenLayout`] draws positions once per session from a seed
//! 3. **Animate**: [`ConnectorAnimator`], [`TitleAnimator`], [`TransitionShell`]
//!    advance on a caller-supplied monotonic clock ([`Animate`], [`drive`])
//! 4. **Render**: [`Scene`] → [`CpuRasterizer`] → [`FrameRGBA`] / PNG
//!
//! Everything past the fetch is deterministic for a given seed and clock, so
//! animations can be stepped and rendered headless.
#![forbid(unsafe_code)]

mod animation;
mod config;
mod content;
mod foundation;
mod layout;
mod page;
mod render;
mod shell;
mod title;

pub use animation::ease::Ease;
pub use animation::frame_loop::{Animate, Frame, FrameClock, FrameState, drive};
pub use animation::tween::{Lerp, Tween, approach, progress};
pub use config::{
    DEFAULT_NOTION_API_BASE, DEFAULT_NOTION_VERSION, DEFAULT_SKETCH_USER, DiaryConfig,
    NotionConfig, PropertyNames, SketchHost,
};
pub use content::cache::{CachePhase, EntryCache, EntryList};
pub use content::document::{DocumentLine, document_lines};
pub use content::model::{
    Annotations, ContentBlock, DiaryEntry, RichTextItem, SketchLinks, format_display_date,
    sort_newest_first,
};
pub use content::source::{ContentSource, NotionSource, SnapshotSource};
pub use content::store::{EntryStore, next_of, position_of, previous_of};
pub use content::thumbnail::ThumbnailMirror;
pub use foundation::core::{
    Affine, BezPath, Fps, Point, REM_PX, Rect, Rgba8, Vec2, ViewMode, Viewport, ViewportClass,
    WIDE_BREAKPOINT_PX,
};
pub use foundation::error::{DiaryError, DiaryResult};
pub use foundation::rng::{Rng64, session_seed};
pub use layout::frozen::FrozenLayout;
pub use layout::generator::{DateNode, DiaryLayout, LayoutConfig, MonthBand, compute_layout};
pub use layout::month::{MonthBucket, MonthKey, group_by_month};
pub use page::detail::{CONTENT_FADE_DELAY, DateLabel, DetailPage};
pub use page::index::{IndexOptions, IndexPage};
pub use page::statement::{HEADING, PARAGRAPHS, heading_curve, heading_positions, statement_scene};
pub use render::connector::{ConnectorAnimator, ConnectorConfig, ConnectorFrame};
pub use render::curve::{SEED_STEP, curve_seed, rough_control_point, rough_polyline, rough_quad_to};
pub use render::raster::{CpuRasterizer, FrameRGBA};
pub use render::scene::{CONNECTOR_LINE_WIDTH, DrawOp, Label, Scene};
pub use render::sequence::render_sequence;
pub use render::surface::CanvasSurface;
pub use shell::anchors::{
    Anchor, Direction, HAlign, SlotStyle, VAlign, anchor_for, displayed_slot, slot_style,
};
pub use shell::neighbors::{NeighborWindow, Role};
pub use shell::route::Route;
pub use shell::signal::Signals;
pub use shell::transition::{NAVIGATION_DELAY, TransitionShell, TransitionState};
pub use title::animator::{CharSeed, TitleAnimator, TitleConfig, TitleFrame};
pub use title::idle::IdleTimer;
