use anyhow::{Context, Result};
use clap::Parser;
use photomark::draw::Background;
use photomark::export::{self, SaveOptions};
use photomark::input::Tool;
use photomark::script::Script;
use photomark::{Config, DrawingSurface};
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("PHOTOMARK_GIT_HASH"),
    ")"
);

#[derive(Parser, Debug)]
#[command(name = "photomark")]
#[command(version, long_version = LONG_VERSION)]
#[command(about = "Annotate a photo with freehand, rectangle and ellipse marks")]
struct Cli {
    /// PNG image to draw on
    #[arg(long, short = 'b', value_name = "PNG")]
    background: Option<PathBuf>,

    /// Gesture script (TOML) to replay onto the surface
    #[arg(long, short = 's', value_name = "TOML")]
    script: Option<PathBuf>,

    /// Where to write the exported PNG (default: configured export directory)
    #[arg(long, short = 'o', value_name = "PNG")]
    output: Option<PathBuf>,

    /// Surface width in pixels (default: background width, then config)
    #[arg(long, value_name = "PX")]
    width: Option<i32>,

    /// Surface height in pixels (default: background height, then config)
    #[arg(long, value_name = "PX")]
    height: Option<i32>,

    /// Starting tool, overriding the config default
    #[arg(long, short = 't', value_enum)]
    tool: Option<Tool>,

    /// Starting stroke width, overriding the config default
    #[arg(long, value_name = "PX")]
    stroke_width: Option<f64>,

    /// Config file to use instead of ~/.config/photomark/config.toml
    #[arg(long, short = 'c', value_name = "TOML")]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    if cli.background.is_none() && cli.script.is_none() {
        print_usage();
        return Ok(());
    }

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    let background = cli.background.as_deref().map(load_background).transpose()?;

    let width = cli
        .width
        .or(background.as_ref().map(Background::width))
        .unwrap_or(config.surface.width);
    let height = cli
        .height
        .or(background.as_ref().map(Background::height))
        .unwrap_or(config.surface.height);
    if width <= 0 || height <= 0 {
        anyhow::bail!("Surface size must be positive, got {width}x{height}");
    }

    let mut surface =
        DrawingSurface::with_defaults(width, height, config.tolerances(), config.surface.max_shapes);
    if let Some(background) = background {
        surface.set_background(background);
    }

    let mut session = config
        .initial_session()
        .context("Invalid drawing defaults")?;
    if let Some(tool) = cli.tool {
        session.set_tool(tool);
    }
    if let Some(stroke_width) = cli.stroke_width {
        session
            .set_stroke_width(stroke_width)
            .context("Invalid --stroke-width")?;
    }

    if let Some(script_path) = &cli.script {
        let script = Script::load(script_path)?;
        script.replay(&mut surface, &mut session)?;
    }

    let image = surface.export_image().context("Failed to export surface")?;
    let saved = match &cli.output {
        Some(path) => {
            export::write_png(&image, path)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            path.clone()
        }
        None => export::save_image(&image, &SaveOptions::from(&config.export))
            .context("Failed to save exported image")?,
    };

    log::info!(
        "Exported {} shape(s) at {}x{}",
        surface.scene().len(),
        width,
        height
    );
    println!("{}", saved.display());

    Ok(())
}

fn load_background(path: &Path) -> Result<Background> {
    let file =
        File::open(path).with_context(|| format!("Failed to open background {}", path.display()))?;
    let background = Background::from_png(&mut BufReader::new(file))
        .with_context(|| format!("Failed to decode background {}", path.display()))?;
    log::info!(
        "Loaded background {} ({}x{})",
        path.display(),
        background.width(),
        background.height()
    );
    Ok(background)
}

fn print_usage() {
    println!("photomark: Annotate a photo with freehand, rectangle and ellipse marks");
    println!();
    println!("Usage:");
    println!("  photomark --background photo.png --script marks.toml   Draw on a photo");
    println!("  photomark --script marks.toml --output out.png        Draw on a blank page");
    println!("  photomark --help                                      Show help");
    println!();
    println!("Scripts are TOML files of [[step]] tables:");
    println!("  action = \"tool\"    tool = \"freehand\" | \"rectangle\" | \"ellipse\"");
    println!("  action = \"color\"   color = \"red\" | [r, g, b]");
    println!("  action = \"width\"   width = 5.0");
    println!("  action = \"down\" | \"move\"   x, y (pointers = 1)");
    println!("  action = \"up\"      (pointers = 1)");
    println!("  action = \"undo\"");
    println!();
    println!("Without --output the image is saved to the configured export directory.");
}
