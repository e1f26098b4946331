use std::{
    path::{Path, PathBuf},
    sync::Arc,
    time::Duration,
};

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand, ValueEnum};
use sketch_diary::{
    Animate as _, CanvasSurface, ContentSource, CpuRasterizer, DetailPage, DiaryConfig, EntryCache,
    EntryStore, Fps, FrameClock, IndexOptions, IndexPage, NotionSource, Role, Scene, Signals,
    SnapshotSource, ThumbnailMirror, ViewMode, Viewport, compute_layout, drive, render_sequence,
    session_seed,
};
use tracing_subscriber::{EnvFilter, fmt};

#[derive(Parser, Debug)]
#[command(name = "sketch-diary", version)]
struct Cli {
    /// Read entries from a JSON snapshot instead of Notion.
    #[arg(long, global = true)]
    entries: Option<PathBuf>,

    /// Log filter (overridden by RUST_LOG).
    #[arg(long, global = true, default_value = "info")]
    log: String,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print all entries (newest first) as JSON.
    Entries,
    /// Print the frozen layout as JSON.
    Layout(ViewArgs),
    /// Render the index page at one point in time as a PNG.
    Frame(FrameArgs),
    /// Render a network/calendar morph as a PNG sequence.
    Morph(MorphArgs),
    /// Print an entry's document, sketch links and neighbours.
    Show(ShowArgs),
    /// Mirror thumbnails into a local directory and print the rewritten entries.
    Mirror(MirrorArgs),
}

#[derive(Args, Debug, Clone)]
struct ViewArgs {
    /// Viewport width in CSS pixels.
    #[arg(long, default_value_t = 1440.0)]
    width: f64,

    /// Viewport height in CSS pixels.
    #[arg(long, default_value_t = 900.0)]
    height: f64,

    /// Device pixel ratio.
    #[arg(long, default_value_t = 1.0)]
    dpr: f64,

    /// Layout seed (random per run when omitted).
    #[arg(long)]
    seed: Option<u64>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ModeChoice {
    Network,
    Calendar,
}

impl From<ModeChoice> for ViewMode {
    fn from(m: ModeChoice) -> Self {
        match m {
            ModeChoice::Network => ViewMode::Network,
            ModeChoice::Calendar => ViewMode::Calendar,
        }
    }
}

#[derive(Args, Debug)]
struct FrameArgs {
    #[command(flatten)]
    view: ViewArgs,

    /// View mode to render.
    #[arg(long, value_enum, default_value_t = ModeChoice::Network)]
    mode: ModeChoice,

    /// Milliseconds after mount.
    #[arg(long, default_value_t = 1000)]
    at_ms: u64,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,

    /// Also write the positioned text labels as JSON.
    #[arg(long)]
    labels: Option<PathBuf>,

    /// Render one viewport-high window scrolled down by this many CSS pixels.
    /// Full-height output is limited to 65535 device pixels per side.
    #[arg(long)]
    scroll_y: Option<f64>,
}

#[derive(Args, Debug)]
struct MorphArgs {
    #[command(flatten)]
    view: ViewArgs,

    /// Mode the morph ends in.
    #[arg(long, value_enum, default_value_t = ModeChoice::Calendar)]
    to: ModeChoice,

    /// Frames per second.
    #[arg(long, default_value_t = 60)]
    fps: u32,

    /// Output directory for `frame_NNNN.png`.
    #[arg(long)]
    out_dir: PathBuf,

    /// Render threads (rayon default when omitted).
    #[arg(long)]
    threads: Option<usize>,

    /// Render one viewport-high window scrolled down by this many CSS pixels.
    /// Full-height output is limited to 65535 device pixels per side.
    #[arg(long)]
    scroll_y: Option<f64>,
}

#[derive(Args, Debug)]
struct ShowArgs {
    /// Entry id.
    id: String,
}

#[derive(Args, Debug)]
struct MirrorArgs {
    /// Directory receiving `<entry-id>.png`.
    #[arg(long, default_value = "public/thumbnails")]
    dir: PathBuf,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli.log);

    let config = DiaryConfig::from_env();
    let store = open_store(&config, cli.entries.as_deref())?;
    match cli.cmd {
        Command::Entries => cmd_entries(&store).await,
        Command::Layout(args) => cmd_layout(&store, args).await,
        Command::Frame(args) => cmd_frame(&store, args).await,
        Command::Morph(args) => cmd_morph(&store, args).await,
        Command::Show(args) => cmd_show(&store, &config, args).await,
        Command::Mirror(args) => cmd_mirror(&store, args).await,
    }
}

fn init_tracing(level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .unwrap_or_else(|_| EnvFilter::new("info"));
    fmt().with_env_filter(filter).with_writer(std::io::stderr).init();
}

fn open_store(config: &DiaryConfig, snapshot: Option<&Path>) -> anyhow::Result<EntryStore> {
    let source: Arc<dyn ContentSource> = match snapshot {
        Some(path) => Arc::new(SnapshotSource::new(path)),
        None => Arc::new(NotionSource::new(config.notion.clone()).context("build notion client")?),
    };
    Ok(EntryStore::new(Arc::new(EntryCache::new(source))))
}

fn viewport(args: &ViewArgs) -> anyhow::Result<Viewport> {
    Ok(Viewport::new(args.width, args.height)?)
}

fn print_json(value: &impl serde::Serialize) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn seed_or_random(args: &ViewArgs) -> u64 {
    let seed = args.seed.unwrap_or_else(session_seed);
    tracing::info!(seed, "layout seed");
    seed
}

async fn cmd_entries(store: &EntryStore) -> anyhow::Result<()> {
    let entries = store.all().await.context("load entries")?;
    print_json(&entries.to_vec())
}

async fn cmd_layout(store: &EntryStore, args: ViewArgs) -> anyhow::Result<()> {
    let entries = store.all().await.context("load entries")?;
    let vp = viewport(&args)?;
    let layout = compute_layout(&entries, vp, &Default::default(), seed_or_random(&args));
    print_json(&layout)
}

fn create_parent(path: &Path) -> anyhow::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    Ok(())
}

fn visible_surface(
    container: &CanvasSurface,
    scroll_y: Option<f64>,
    height: f64,
) -> anyhow::Result<CanvasSurface> {
    match scroll_y {
        Some(y) => Ok(container.window(y, height)?),
        None => Ok(*container),
    }
}

async fn cmd_frame(store: &EntryStore, args: FrameArgs) -> anyhow::Result<()> {
    let entries = store.all().await.context("load entries")?;
    let view = &args.view;
    let mut options = IndexOptions::new(viewport(view)?, seed_or_random(view));
    options.dpr = view.dpr;

    let signals = Signals::new();
    signals.set_view_mode(args.mode.into());
    let mut page = IndexPage::new(&entries, options, signals, Duration::ZERO)?;
    let scene = page.frame(Duration::from_millis(args.at_ms)).value;

    let surface = visible_surface(page.surface(), args.scroll_y, view.height)?;
    let frame = CpuRasterizer::new().render(&scene, &surface)?;
    create_parent(&args.out)?;
    frame
        .save_png(&args.out)
        .with_context(|| format!("write png '{}'", args.out.display()))?;
    if let Some(path) = &args.labels {
        create_parent(path)?;
        std::fs::write(path, serde_json::to_vec_pretty(&scene.labels)?)
            .with_context(|| format!("write labels '{}'", path.display()))?;
    }
    eprintln!("wrote {}", args.out.display());
    Ok(())
}

async fn cmd_morph(store: &EntryStore, args: MorphArgs) -> anyhow::Result<()> {
    let entries = store.all().await.context("load entries")?;
    let view = &args.view;
    let mut options = IndexOptions::new(viewport(view)?, seed_or_random(view));
    options.dpr = view.dpr;
    let morph_len = options.connector.morph;

    let to: ViewMode = args.to.into();
    let signals = Signals::new();
    signals.set_view_mode(to.toggled());
    let mut page = IndexPage::new(&entries, options, signals.clone(), Duration::ZERO)?;

    // settle the intro, then toggle
    let start = page.frame(morph_len).state;
    anyhow::ensure!(start.is_complete(), "intro animation did not settle");
    let clock = FrameClock {
        fps: Fps::new(args.fps, 1)?,
        origin: morph_len,
    };
    page.toggle(clock.origin)?;
    let surface = visible_surface(page.surface(), args.scroll_y, view.height)?;

    let cap = clock.fps.frames_for(morph_len) + 1;
    let mut scenes: Vec<Scene> = Vec::new();
    drive(&mut page, clock, cap, |_, scene| {
        scenes.push(scene);
        Ok(())
    })?;

    let frames = render_sequence(&scenes, &surface, args.threads)?;
    std::fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("create output dir '{}'", args.out_dir.display()))?;
    for (i, frame) in frames.iter().enumerate() {
        let path = args.out_dir.join(format!("frame_{i:04}.png"));
        frame
            .save_png(&path)
            .with_context(|| format!("write png '{}'", path.display()))?;
    }
    eprintln!("wrote {} frames to {}", frames.len(), args.out_dir.display());
    Ok(())
}

async fn cmd_show(store: &EntryStore, config: &DiaryConfig, args: ShowArgs) -> anyhow::Result<()> {
    let page = DetailPage::load(store, &args.id, &config.sketch, Duration::ZERO)
        .await?
        .with_context(|| format!("no entry with id '{}'", args.id))?;

    for line in page.lines() {
        println!("{:>4}  {}", line.number, line.text);
    }
    println!();
    println!("embed:  {}", page.links().embed_url);
    println!("editor: {}", page.links().editor_url);
    for role in [Role::Prev, Role::Next] {
        if let Some(entry) = page.shell().window().get(role) {
            println!("{role:?}: {} ({})", entry.id, entry.display_date());
        }
    }
    Ok(())
}

async fn cmd_mirror(store: &EntryStore, args: MirrorArgs) -> anyhow::Result<()> {
    let entries = store.all().await.context("load entries")?;
    std::fs::create_dir_all(&args.dir)
        .with_context(|| format!("create thumbnail dir '{}'", args.dir.display()))?;
    let mirror = ThumbnailMirror::new(reqwest::Client::new(), &args.dir);
    let mirrored = mirror.mirror_all(&entries).await;
    print_json(&mirrored)
}
