//! flexcanvas - render scene files to PNG.
//!
//! Main entry point for the command line.

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use flexcanvas::edit::{FontDirectory, TextRenderer};
use flexcanvas::{FsImageLoader, Scene, SceneContext, encode_png};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "flexcanvas", version, about = "Flexbox-style image composition")]
struct Cli {
    /// Log layout decisions (equivalent to RUST_LOG=debug).
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Render a JSON scene to a PNG file.
    Render {
        /// Scene description.
        scene: PathBuf,

        /// Output PNG path.
        #[arg(short, long, default_value = "out.png")]
        output: PathBuf,

        /// Directory searched for font files used by text children.
        /// May be repeated.
        #[arg(long = "fonts")]
        font_dirs: Vec<PathBuf>,
    },
    /// Parse a scene and report problems without writing anything.
    Check {
        scene: PathBuf,

        /// Directory searched for font files used by text children.
        /// May be repeated.
        #[arg(long = "fonts")]
        font_dirs: Vec<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Set up logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    match cli.command {
        Command::Render { scene, output, font_dirs } => render(&scene, &output, &font_dirs),
        Command::Check { scene, font_dirs } => check(&scene, &font_dirs),
    }
}

fn load_scene(path: &Path) -> anyhow::Result<Scene> {
    let scene = Scene::from_path(path)
        .with_context(|| format!("failed to read scene {}", path.display()))?;
    tracing::debug!("Loaded scene {:?} ({}x{})", path, scene.width, scene.height);
    Ok(scene)
}

/// Relative image paths in a scene resolve against the scene's directory.
fn scene_root(path: &Path) -> PathBuf {
    path.parent().map(Path::to_path_buf).unwrap_or_default()
}

/// Text renderer over the `--fonts` directories, if any were given.
fn text_renderer(font_dirs: &[PathBuf]) -> Option<TextRenderer> {
    let (first, rest) = font_dirs.split_first()?;
    let fonts = rest.iter().fold(FontDirectory::new(first), |f, d| f.with_dir(d));
    Some(TextRenderer::new(fonts))
}

fn render(path: &Path, output: &Path, font_dirs: &[PathBuf]) -> anyhow::Result<()> {
    let scene = load_scene(path)?;
    let images = FsImageLoader::new(scene_root(path));
    let mut renderer = text_renderer(font_dirs);
    let mut ctx = SceneContext::new(&images);
    if let Some(renderer) = renderer.as_mut() {
        ctx = ctx.with_text(renderer);
    }

    let image = scene
        .render(&mut ctx)
        .with_context(|| format!("failed to render {}", path.display()))?;
    let png = encode_png(&image)?;
    std::fs::write(output, &png).with_context(|| format!("failed to write {}", output.display()))?;

    tracing::info!(
        "Wrote {}x{} image ({} bytes) to {:?}",
        image.width(),
        image.height(),
        png.len(),
        output
    );
    Ok(())
}

fn check(path: &Path, font_dirs: &[PathBuf]) -> anyhow::Result<()> {
    let scene = load_scene(path)?;
    let images = FsImageLoader::new(scene_root(path));
    let mut renderer = text_renderer(font_dirs);
    let mut ctx = SceneContext::new(&images);
    if let Some(renderer) = renderer.as_mut() {
        ctx = ctx.with_text(renderer);
    }

    let layout = scene
        .build(&mut ctx)
        .with_context(|| format!("invalid scene {}", path.display()))?;
    tracing::info!("{:?}: {} top-level children, canvas {}x{}", path, layout.len(), layout.width(), layout.height());
    Ok(())
}
