use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "spritely", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the metadata of an animation container.
    Info(InfoArgs),
    /// Decode a bitmap, transform it and write a PNG.
    Convert(ConvertArgs),
    /// Play an animation and write every frame as a PNG.
    Export(ExportArgs),
}

#[derive(Parser, Debug)]
struct InfoArgs {
    /// Animation container (`.cgai`).
    path: PathBuf,

    /// Print JSON instead of text.
    #[arg(long)]
    json: bool,
}

#[derive(Parser, Debug)]
struct ConvertArgs {
    /// Input bitmap.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,

    /// Target width; 0 or absent derives it from the height and aspect ratio.
    #[arg(long)]
    width: Option<u32>,

    /// Target height; 0 or absent derives it from the width and aspect ratio.
    #[arg(long)]
    height: Option<u32>,

    /// Resampling used when resizing.
    #[arg(long, value_enum, default_value_t = MethodChoice::Nearest)]
    method: MethodChoice,

    /// Colour filter applied after resizing.
    #[arg(long, value_enum)]
    filter: Option<FilterChoice>,

    /// Mirror left-to-right.
    #[arg(long)]
    flip_h: bool,

    /// Mirror top-to-bottom.
    #[arg(long)]
    flip_v: bool,
}

#[derive(Parser, Debug)]
struct ExportArgs {
    /// Animation container (`.cgai`).
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Directory receiving `frame_NNNNNN.png` files.
    #[arg(long)]
    out_dir: PathBuf,

    /// Export config JSON; defaults apply when absent.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override the number of frames to render.
    #[arg(long)]
    ticks: Option<u32>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum MethodChoice {
    Nearest,
    Bilinear,
    Area,
}

impl From<MethodChoice> for spritely::InterpolationMethod {
    fn from(m: MethodChoice) -> Self {
        match m {
            MethodChoice::Nearest => Self::NearestNeighbor,
            MethodChoice::Bilinear => Self::Bilinear,
            MethodChoice::Area => Self::AreaAveraging,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum FilterChoice {
    Grayscale,
    WeightedGrayscale,
    Invert,
}

impl From<FilterChoice> for spritely::FilterType {
    fn from(f: FilterChoice) -> Self {
        match f {
            FilterChoice::Grayscale => Self::Grayscale,
            FilterChoice::WeightedGrayscale => Self::WeightedGrayscale,
            FilterChoice::Invert => Self::Invert,
        }
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Info(args) => cmd_info(args),
        Command::Convert(args) => cmd_convert(args),
        Command::Export(args) => cmd_export(args),
    }
}

fn read_animation(path: &Path) -> anyhow::Result<spritely::AnimationDocument> {
    spritely::load_animation(path).with_context(|| format!("load animation '{}'", path.display()))
}

fn cmd_info(args: InfoArgs) -> anyhow::Result<()> {
    let info = read_animation(&args.path)?.info();
    if args.json {
        println!("{}", serde_json::to_string_pretty(&info)?);
        return Ok(());
    }

    println!("version:        {}", info.version);
    println!("canvas:         {}x{}", info.canvas_width, info.canvas_height);
    println!("sheet:          {}x{}", info.sheet_width, info.sheet_height);
    println!("frames:         {}", info.frame_count);
    println!("frame duration: {} ms", info.frame_duration_ms);
    println!("mode:           {:?}", info.mode);
    println!("max cycles:     {}", info.max_cycles);
    println!("cycle time:     {} ms", info.cycle_time_ms);
    for (i, r) in info.regions.iter().enumerate() {
        println!(
            "region {i}:       src ({}, {}) dst ({}, {}) size {}x{} {:?}{}",
            r.src_x,
            r.src_y,
            r.dst_x,
            r.dst_y,
            r.width,
            r.height,
            r.axis,
            if r.uses_transparency { " blended" } else { "" }
        );
    }
    Ok(())
}

fn cmd_convert(args: ConvertArgs) -> anyhow::Result<()> {
    let mut img = spritely::load_image(&args.in_path)
        .with_context(|| format!("load image '{}'", args.in_path.display()))?;

    let (w, h) = (args.width.unwrap_or(0), args.height.unwrap_or(0));
    if w != 0 || h != 0 {
        let outcome = img.resize(w, h, args.method.into());
        if !outcome.is_resized() {
            eprintln!(
                "warning: {:?} cannot produce {w}x{h}; size left at {}x{}",
                args.method,
                img.width(),
                img.height()
            );
        }
    }
    if let Some(filter) = args.filter {
        img.filter(spritely::FilterType::from(filter));
    }
    if args.flip_h {
        img.flip_horizontal();
    }
    if args.flip_v {
        img.flip_vertical();
    }

    if let Some(parent) = args.out.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    img.save_png(&args.out)?;
    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_export(args: ExportArgs) -> anyhow::Result<()> {
    let doc = read_animation(&args.in_path)?;
    let mut cfg = match &args.config {
        Some(path) => spritely::ExportConfig::load(path)?,
        None => spritely::ExportConfig {
            tick_ms: doc.frame_duration_ms.max(1),
            ticks: doc.frame_count.max(1),
            ..spritely::ExportConfig::default()
        },
    };
    if let Some(ticks) = args.ticks {
        cfg.ticks = ticks;
    }

    let mut session = spritely::PlaybackSession::new(doc, cfg)?;
    let mut sink = spritely::PngSequencePresenter::new(&args.out_dir);
    let stats = session.run(&mut sink)?;
    eprintln!(
        "wrote {} frames to {}",
        stats.frames_presented,
        args.out_dir.display()
    );
    Ok(())
}
