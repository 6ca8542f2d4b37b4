#[macro_use]
extern crate tracing;

use placegen_common::{GridSpec, ROW_COLORS, ROW_LABELS};
use std::{fs, path::PathBuf};

mod draw;
mod font;
mod sheet;

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

#[derive(argh::FromArgs)]
/// Generate a labeled placeholder sprite sheet
struct Args {
    #[argh(option, default = "default_output()")]
    /// where to write the sheet (PNG)
    output: PathBuf,

    #[argh(option, default = "32")]
    /// width of a single frame in pixels
    frame_width: u32,

    #[argh(option, default = "32")]
    /// height of a single frame in pixels
    frame_height: u32,

    #[argh(option, default = "4")]
    /// frames per animation row
    cols: u32,

    #[argh(option, default = "9")]
    /// animation rows, top to bottom: idle plus the 8 compass directions
    rows: u32,
}

fn default_output() -> PathBuf {
    PathBuf::from("assets/art/sprites/characters/Astronaut_Placeholder.png")
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();
    let args: Args = argh::from_env();

    let spec = GridSpec {
        frame_width: args.frame_width,
        frame_height: args.frame_height,
        cols: args.cols,
        rows: args.rows,
    };

    let sheet = sheet::compose(&spec, &ROW_LABELS, &ROW_COLORS)?;

    if let Some(dir) = args.output.parent() {
        fs::create_dir_all(dir)?;
    }
    sheet.save(&args.output)?;

    info!("created placeholder sprite sheet at {}", args.output.display());

    Ok(())
}
