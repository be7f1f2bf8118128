use anyhow::Context;
use clap::{Parser, Subcommand};
use sketchpad::config::Config;
use sketchpad::document;
use sketchpad::draw::{Canvas, Surface};
use sketchpad::input::{ToolController, parse_script};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(name = "sketchpad")]
#[command(version, about = "Headless drawing surface with JSON document persistence")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Replay an input script onto a blank canvas and save it as canvas.json
    Replay {
        /// JSON array of input events
        script: PathBuf,

        /// Directory receiving canvas.json (defaults to the configured save directory)
        #[arg(long, short = 'o', value_name = "DIR")]
        output: Option<PathBuf>,

        /// Canvas width in pixels
        #[arg(long)]
        width: Option<i32>,

        /// Canvas height in pixels
        #[arg(long)]
        height: Option<i32>,

        /// Config file to use instead of ~/.config/sketchpad/config.toml
        #[arg(long, value_name = "PATH")]
        config: Option<PathBuf>,
    },

    /// Load a saved document and write its image as PNG
    Export {
        /// Saved canvas.json document
        document: PathBuf,

        /// Destination PNG file
        png: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    match cli.command {
        Command::Replay {
            script,
            output,
            width,
            height,
            config,
        } => replay(&script, output, width, height, config.as_deref()),
        Command::Export { document, png } => export(&document, &png),
    }
}

fn replay(
    script: &Path,
    output: Option<PathBuf>,
    width: Option<i32>,
    height: Option<i32>,
    config_path: Option<&Path>,
) -> anyhow::Result<()> {
    let config = match config_path {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    let json = fs::read_to_string(script)
        .with_context(|| format!("Failed to read script {}", script.display()))?;
    let events = parse_script(&json)
        .with_context(|| format!("Failed to parse script {}", script.display()))?;

    let mut canvas = Canvas::new(
        width.unwrap_or(config.canvas.width),
        height.unwrap_or(config.canvas.height),
    )?
    .with_origin(config.canvas.origin());
    let mut controller = ToolController::for_surface(&canvas, config.style(), config.font());

    log::info!("Replaying {} events from {}", events.len(), script.display());
    controller.replay(&mut canvas, &events)?;

    let directory = output.unwrap_or_else(|| config.persistence.resolved_directory());
    let path = document::save_to_directory(&canvas, &directory)
        .with_context(|| format!("Failed to save document into {}", directory.display()))?;

    println!("{}", path.display());
    Ok(())
}

fn export(document_path: &Path, png_path: &Path) -> anyhow::Result<()> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("Failed to start async runtime")?;

    let document = runtime
        .block_on(document::read_document(document_path))
        .with_context(|| format!("Failed to load document {}", document_path.display()))?;

    let canvas = document::to_canvas(&document)
        .with_context(|| format!("Failed to decode document {}", document_path.display()))?;

    let png = canvas.encode_png()?;
    fs::write(png_path, &png)
        .with_context(|| format!("Failed to write {}", png_path.display()))?;

    log::info!(
        "Exported {}x{} image to {}",
        canvas.width(),
        canvas.height(),
        png_path.display()
    );
    println!("{}", png_path.display());
    Ok(())
}
