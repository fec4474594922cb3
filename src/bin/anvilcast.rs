use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use sha2::Digest as _;

use anvilcast::{AssetConfig, AssetKind, Face, FrameIndex, RenderSession, Weight};

#[derive(Parser, Debug)]
#[command(name = "anvilcast", version)]
struct Cli {
    /// Log every frame batch and font lookup.
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render assets into the output directory.
    Render(RenderArgs),
    /// Render a single frame of one asset as a PNG.
    Frame(FrameArgs),
    /// List the assets with their file names and sizes.
    List,
    /// Print which font file each weight resolved to.
    Fonts(FontsArgs),
}

#[derive(Parser, Debug)]
struct RenderArgs {
    /// JSON config file.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Output directory (overrides the config).
    #[arg(long)]
    out: Option<PathBuf>,

    /// Only render these assets (repeatable).
    #[arg(long, value_enum)]
    only: Vec<AssetKind>,
}

#[derive(Parser, Debug)]
struct FrameArgs {
    /// Asset to render.
    #[arg(long, value_enum)]
    asset: AssetKind,

    /// Frame index (0-based).
    #[arg(long)]
    frame: u64,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,

    /// JSON config file.
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct FontsArgs {
    /// JSON config file.
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    match cli.cmd {
        Command::Render(args) => cmd_render(args),
        Command::Frame(args) => cmd_frame(args),
        Command::List => cmd_list(),
        Command::Fonts(args) => cmd_fonts(args),
    }
}

fn read_config(path: Option<&Path>) -> anyhow::Result<AssetConfig> {
    match path {
        Some(p) => {
            AssetConfig::load(p).with_context(|| format!("load config '{}'", p.display()))
        }
        None => Ok(AssetConfig::default()),
    }
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let mut config = read_config(args.config.as_deref())?;
    if let Some(out) = args.out {
        config.output_dir = out;
    }
    let dir = config.output_dir.clone();
    let kinds = if args.only.is_empty() {
        AssetKind::ALL.to_vec()
    } else {
        args.only
    };

    let mut session = RenderSession::new(config).context("create render session")?;
    let written = session
        .render_to_dir(&kinds, &dir)
        .with_context(|| format!("render assets into '{}'", dir.display()))?;

    for asset in &written {
        eprintln!(
            "wrote {} ({} bytes, {} frame{})",
            asset.path.display(),
            asset.bytes,
            asset.frames,
            if asset.frames == 1 { "" } else { "s" }
        );
    }
    Ok(())
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let config = read_config(args.config.as_deref())?;
    let mut session = RenderSession::new(config).context("create render session")?;
    let canvas = session
        .render_frame(args.asset, FrameIndex(args.frame))
        .with_context(|| format!("render frame {} of {}", args.frame, args.asset))?;
    let png = anvilcast::encode_static(&canvas).context("encode png")?;

    if let Some(parent) = args.out.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    std::fs::write(&args.out, png)
        .with_context(|| format!("write png '{}'", args.out.display()))?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_list() -> anyhow::Result<()> {
    for kind in AssetKind::ALL {
        let size = kind.size();
        let timing = match kind.duration_s() {
            Some(d) => format!("{d} s animation"),
            None => "still".to_string(),
        };
        println!("{:<22} {:>4}x{:<4} {timing}", kind.file_name(), size.width, size.height);
    }
    Ok(())
}

fn cmd_fonts(args: FontsArgs) -> anyhow::Result<()> {
    let config = read_config(args.config.as_deref())?;
    let session = RenderSession::new(config).context("create render session")?;
    for (label, weight) in [("regular", Weight::Regular), ("bold", Weight::Bold)] {
        println!("{label}:");
        match session.typesetter().face(weight) {
            Face::Outline(face) => {
                println!("  family: {}", face.family());
                println!("  file:   {} (face {})", face.source().path.display(), face.source().index);
                println!("  sha256: {}", sha256_hex(face.bytes()));
            }
            Face::Builtin => println!("  built-in 5x7 bitmap font"),
        }
    }
    Ok(())
}

fn sha256_hex(bytes: &[u8]) -> String {
    let digest = sha2::Sha256::digest(bytes);
    let mut out = String::with_capacity(digest.len() * 2);
    for b in digest {
        out.push_str(&format!("{:02x}", b));
    }
    out
}
