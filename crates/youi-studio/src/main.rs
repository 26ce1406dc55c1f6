use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use youi_engine::coords::ColorRgba;
use youi_engine::logging::{LoggingConfig, init_logging};
use youi_ui::prelude::*;

/// Load a YUML document and drive it through a few headless frames.
#[derive(Debug, Parser)]
#[command(name = "youi-studio", version)]
struct Args {
    /// Document to load. Runs the bundled demo when omitted.
    file: Option<PathBuf>,

    #[arg(long, default_value_t = 1280)]
    width: i32,

    #[arg(long, default_value_t = 720)]
    height: i32,

    /// Frames to attempt; the second one follows a resize to half size.
    #[arg(long, default_value_t = 3)]
    frames: u32,

    /// TrueType font used to measure labels.
    #[arg(long)]
    font: Option<PathBuf>,

    /// Surface clear color as `#rrggbb` or `#rrggbbaa`.
    #[arg(long, default_value = "#000000")]
    background: String,

    /// Only redraw dirty components after the first frame.
    #[arg(long)]
    dirty_only: bool,

    /// Log filter, e.g. `youi_ui=trace`. Defaults to RUST_LOG, then `info`.
    #[arg(long)]
    log: Option<String>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let mut logging = LoggingConfig::default();
    if let Some(filter) = &args.log {
        logging = logging.with_filter(filter.as_str());
    }
    init_logging(logging);

    let src = match &args.file {
        Some(path) => fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?,
        None => include_str!("../ui/hello.yuml").to_string(),
    };

    // ── Parse ─────────────────────────────────────────────────────────────
    let element = youi_yuml::parse_str(&src).context("parsing document")?;
    println!("{element}");
    println!();

    // ── Build ─────────────────────────────────────────────────────────────
    let mut registry = Registry::new();
    register_builtins(&mut registry);
    let tree = Builder::new(&registry).build(&element).context("building component tree")?;

    let policy = if args.dirty_only { RedrawPolicy::DirtyOnly } else { RedrawPolicy::Full };
    let background = ColorRgba::from_hex(&args.background)
        .with_context(|| format!("invalid --background color {:?}", args.background))?;
    let config = FormConfig::default()
        .size(args.width, args.height)
        .redraw(policy)
        .clear_color(background);
    let mut form = Form::new(tree, HeadlessBackend::new(), config)?;

    if let Some(path) = &args.font {
        let bytes = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
        let mut fonts = FontSystem::new();
        fonts.load_font("default", &bytes)?;
        form.set_fonts(fonts)?;
    }

    // ── Frames ────────────────────────────────────────────────────────────
    for i in 0..args.frames {
        if i == 1 {
            form.resize(args.width / 2, args.height / 2)?;
        }
        let drawn = form.frame();
        let commands = form.backend().last_frame().map_or(0, |frame| frame.commands.len());
        log::info!("frame {i}: {}", if drawn { format!("{commands} commands") } else { "skipped".to_string() });
    }

    println!("{}", form.tree());
    Ok(())
}
