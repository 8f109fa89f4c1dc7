use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand};

mod demos;

use demos::Demo;

#[derive(Parser, Debug)]
#[command(name = "banim", version)]
struct Cli {
    /// Log library events to stderr.
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Play a demo scene to completion and write a PNG per frame.
    Frames(FramesArgs),
    /// Render a single moment of a demo scene as a PNG.
    Frame(FrameArgs),
}

#[derive(Parser, Debug)]
struct SceneArgs {
    /// Which built-in scene to play.
    #[arg(long, value_enum)]
    demo: Demo,

    /// Output width in pixels.
    #[arg(long, default_value_t = 960)]
    width: u32,

    /// Output height in pixels.
    #[arg(long, default_value_t = 540)]
    height: u32,

    /// Frames per second.
    #[arg(long, default_value_t = 30)]
    fps: u32,

    /// Grid configuration JSON replacing the demo's default grid.
    #[arg(long)]
    grid: Option<PathBuf>,

    /// TTF/OTF font used for labels; text is skipped without one.
    #[arg(long)]
    font: Option<PathBuf>,

    /// Draw the grid overlay.
    #[arg(long)]
    show_grid: bool,
}

#[derive(Parser, Debug)]
struct FramesArgs {
    #[command(flatten)]
    scene: SceneArgs,

    /// Output directory for `frame_00000.png`, ...
    #[arg(long)]
    out: PathBuf,

    /// Stop after this many frames even if the scene is still running.
    #[arg(long, default_value_t = 1800)]
    max_frames: u64,

    /// Frames to hold after the last action finishes.
    #[arg(long, default_value_t = 15)]
    tail_frames: u64,
}

#[derive(Parser, Debug)]
struct FrameArgs {
    #[command(flatten)]
    scene: SceneArgs,

    /// Time in seconds.
    #[arg(long)]
    at: f64,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    if cli.verbose {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_writer(std::io::stderr)
            .init();
    }
    match cli.cmd {
        Command::Frames(args) => cmd_frames(args),
        Command::Frame(args) => cmd_frame(args),
    }
}

fn read_grid_json(path: &Path) -> anyhow::Result<banim::GridConfig> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("read grid config '{}'", path.display()))?;
    let grid = banim::GridConfig::from_json(&json)
        .with_context(|| format!("parse grid config '{}'", path.display()))?;
    Ok(grid)
}

fn prepare(args: &SceneArgs) -> anyhow::Result<(banim::Scene, banim::CpuSurface, banim::Fps)> {
    let grid = match &args.grid {
        Some(path) => read_grid_json(path)?,
        None => demos::default_grid()?,
    };
    let grid = if args.show_grid {
        grid.with_display_grid(true)
    } else {
        grid
    };
    let scene = demos::build(args.demo, grid).context("build demo scene")?;

    let mut surface = banim::CpuSurface::new(args.width, args.height)?.with_clear_rgba([18, 20, 28, 255]);
    if let Some(path) = &args.font {
        let bytes =
            std::fs::read(path).with_context(|| format!("read font '{}'", path.display()))?;
        surface = surface
            .with_font(&bytes)
            .with_context(|| format!("load font '{}'", path.display()))?;
    }

    let fps = banim::Fps::new(args.fps, 1)?;
    Ok((scene, surface, fps))
}

fn cmd_frames(args: FramesArgs) -> anyhow::Result<()> {
    let (mut scene, mut surface, fps) = prepare(&args.scene)?;
    let mut sink = banim::PngSequenceSink::new(&args.out);
    let opts = banim::PlayerOpts {
        fps,
        max_frames: args.max_frames,
        tail_frames: args.tail_frames,
    };

    let stats = banim::play_to_sink(&mut scene, &mut surface, &mut sink, opts)?;
    if !stats.completed() {
        eprintln!("warning: stopped at the {}-frame cap before the scene finished", args.max_frames);
    }
    eprintln!("wrote {} frames to {}", stats.frames, args.out.display());
    Ok(())
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let (mut scene, mut surface, fps) = prepare(&args.scene)?;
    let frame = banim::render_frame_at(&mut scene, &mut surface, fps, args.at)?;

    if let Some(parent) = args.out.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    banim::write_png(&args.out, &frame)?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}
