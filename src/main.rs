use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use minipaint::canvas::RepaintFlag;
use minipaint::replay::{self, GestureScript};
use minipaint::{CanvasSettings, Config, LayeredCanvas};

#[derive(Parser, Debug)]
#[command(name = "minipaint")]
#[command(
    version,
    long_version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("MINIPAINT_GIT_HASH"), ")"),
    about = "Freehand drawing surface with a persistent off-screen raster"
)]
struct Cli {
    /// Config file to use instead of ~/.config/minipaint/config.toml
    #[arg(long, short = 'c', value_name = "FILE", global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Replay a JSON gesture script headlessly and save the canvas as PNG
    Replay {
        /// Gesture script to replay
        script: PathBuf,

        /// PNG file to write
        #[arg(long, short = 'o', value_name = "PNG")]
        output: PathBuf,

        /// Viewport width (overrides the script)
        #[arg(long, requires = "height")]
        width: Option<i32>,

        /// Viewport height (overrides the script)
        #[arg(long, requires = "width")]
        height: Option<i32>,
    },
    /// Print the effective configuration as TOML
    PrintConfig,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    match cli.command {
        Command::Replay {
            script,
            output,
            width,
            height,
        } => {
            let script = GestureScript::load(&script)?;
            let viewport = script.initial_viewport(width.zip(height));

            let settings = CanvasSettings::from_config(&config);
            let mut canvas = LayeredCanvas::new(settings, RepaintFlag::new());
            let stats = replay::replay(&script, &mut canvas, viewport)?;
            let surface = canvas.snapshot().context("Failed to render canvas")?;
            replay::write_png(&surface, &output)?;

            println!(
                "Replayed {} gestures ({} segments, {} dropped moves) into {}",
                stats.gestures,
                stats.segments,
                stats.dropped,
                output.display()
            );
        }
        Command::PrintConfig => {
            print!("{}", config.to_toml_string()?);
        }
    }

    Ok(())
}
