use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use folio::{
    CpuRasterizer, FfmpegSink, FfmpegSinkOpts, FolioConfig, RecordSession, ScriptPreset,
};

#[derive(Parser, Debug)]
#[command(name = "folio", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render the typing animation at a time offset as a PNG.
    Frame(FrameArgs),
    /// Record the typing animation as an MP4 (requires `ffmpeg` on PATH).
    Render(RenderArgs),
    /// Print the tracker state for a list of scroll offsets, one JSON object per line.
    Track(TrackArgs),
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum PresetArg {
    Portfolio,
    Sparta,
}

impl From<PresetArg> for ScriptPreset {
    fn from(p: PresetArg) -> Self {
        match p {
            PresetArg::Portfolio => ScriptPreset::Portfolio,
            PresetArg::Sparta => ScriptPreset::Sparta,
        }
    }
}

#[derive(Parser, Debug)]
struct EditorArgs {
    /// Config JSON. Defaults reproduce the portfolio site.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Built-in script, replacing the config's.
    #[arg(long, value_enum)]
    preset: Option<PresetArg>,

    /// Editor container width in CSS pixels.
    #[arg(long)]
    width: Option<f64>,

    /// TTF/OTF font for the code. Without a font, only rectangles are drawn.
    #[arg(long)]
    font: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct FrameArgs {
    #[command(flatten)]
    editor: EditorArgs,

    /// Animation time in milliseconds.
    #[arg(long, default_value_t = 0.0)]
    at_ms: f64,

    /// Simulated frame rate used to reach `at_ms`.
    #[arg(long, default_value_t = 60)]
    fps: u32,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Parser, Debug)]
struct RenderArgs {
    #[command(flatten)]
    editor: EditorArgs,

    /// Recording length in milliseconds.
    #[arg(long, default_value_t = 10_000.0)]
    duration_ms: f64,

    /// Output frame rate.
    #[arg(long, default_value_t = 30)]
    fps: u32,

    /// Output MP4 path.
    #[arg(long)]
    out: PathBuf,

    /// Fail instead of replacing an existing output file.
    #[arg(long)]
    no_overwrite: bool,
}

#[derive(Parser, Debug)]
struct TrackArgs {
    /// Config JSON with viewport and section extents.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Scroll offsets to visit, in order.
    #[arg(long, value_delimiter = ',', required = true)]
    offsets: Vec<f64>,
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();
    match cli.cmd {
        Command::Frame(args) => cmd_frame(args),
        Command::Render(args) => cmd_render(args),
        Command::Track(args) => cmd_track(args),
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn load_config(path: Option<&Path>) -> anyhow::Result<FolioConfig> {
    let cfg = match path {
        Some(p) => FolioConfig::from_path(p)?,
        None => FolioConfig::default(),
    };
    Ok(cfg)
}

fn editor_config(args: &EditorArgs) -> anyhow::Result<FolioConfig> {
    let mut cfg = load_config(args.config.as_deref())?;
    if let Some(p) = args.preset {
        cfg.editor.preset = p.into();
        cfg.editor.lines = None;
    }
    if let Some(w) = args.width {
        cfg.editor.container_width = Some(w);
    }
    if let Some(font) = &args.font {
        cfg.font_path = Some(font.clone());
    }
    cfg.validate()?;
    Ok(cfg)
}

fn rasterizer(cfg: &FolioConfig) -> anyhow::Result<CpuRasterizer> {
    match &cfg.font_path {
        Some(p) => CpuRasterizer::with_font_path(p)
            .with_context(|| format!("load font '{}'", p.display())),
        None => Ok(CpuRasterizer::new()),
    }
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let cfg = editor_config(&args.editor)?;
    let mut sess = RecordSession::new(cfg.animation()?, rasterizer(&cfg)?, args.fps)?;
    let frame = sess
        .render_frame_at(args.at_ms)?
        .context("editor surface is empty, pass a larger --width")?;

    if let Some(parent) = args.out.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    image::save_buffer_with_format(
        &args.out,
        &frame.data,
        frame.width,
        frame.height,
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .with_context(|| format!("write png '{}'", args.out.display()))?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let cfg = editor_config(&args.editor)?;
    let background = cfg.editor_options().palette.background;
    let mut sess = RecordSession::new(cfg.animation()?, rasterizer(&cfg)?, args.fps)?;

    let mut sink = FfmpegSink::new(FfmpegSinkOpts {
        out_path: args.out.clone(),
        overwrite: !args.no_overwrite,
        background,
    });
    let stats = sess.render_range(args.duration_ms, &mut sink)?;

    eprintln!("wrote {} ({} frames)", args.out.display(), stats.frames);
    Ok(())
}

#[derive(serde::Serialize)]
struct TrackLine<'a> {
    requested: f64,
    scroll_y: f64,
    active: &'a str,
    show_scroll_top: bool,
    header_opaque: bool,
}

fn cmd_track(args: TrackArgs) -> anyhow::Result<()> {
    let cfg = load_config(args.config.as_deref())?;
    cfg.validate()?;
    let mut page = cfg.page()?;
    let nav = cfg.navigation()?;
    nav.mount(&mut page)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    for y in args.offsets {
        page.scroll_to(y);
        let active = nav.active_section();
        let line = TrackLine {
            requested: y,
            scroll_y: page.scroll_y(),
            active: &active,
            show_scroll_top: nav.show_scroll_top(),
            header_opaque: nav.header_opaque(),
        };
        serde_json::to_writer(&mut out, &line).context("write tracker line")?;
        use std::io::Write as _;
        writeln!(out).context("write tracker line")?;
    }
    nav.unmount(&mut page);
    Ok(())
}
