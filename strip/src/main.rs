#[macro_use]
extern crate tracing;

use image::RgbaImage;
use placegen_common::{STRIPPED, is_near_white};
use std::path::{Path, PathBuf};

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

#[derive(argh::FromArgs)]
/// Make the near-white background of an image transparent, in place
struct Args {
    #[argh(positional)]
    /// image file to rewrite; nothing happens when omitted
    path: Option<PathBuf>,
}

/// Rewrite every near-white pixel to transparent white; everything else is
/// left untouched, alpha included. Returns the number of pixels cleared.
fn strip_background(img: &mut RgbaImage) -> usize {
    let mut cleared = 0;
    for pixel in img.pixels_mut() {
        if is_near_white(pixel) {
            *pixel = STRIPPED;
            cleared += 1;
        }
    }

    cleared
}

fn run(path: &Path) -> anyhow::Result<()> {
    // fills in an opaque alpha channel for formats that lack one
    let mut img = image::open(path)?.into_rgba8();

    let cleared = strip_background(&mut img);
    img.save(path)?;

    info!(cleared, "removed background from {}", path.display());

    Ok(())
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();
    let args: Args = argh::from_env();

    let Some(path) = args.path else {
        return Ok(());
    };

    // best effort: report the failure and exit cleanly either way
    if let Err(error) = run(&path) {
        error!(?error, "failed to remove background");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    fn image_of(pixels: &[Rgba<u8>]) -> RgbaImage {
        let mut img = RgbaImage::new(pixels.len() as u32, 1);
        for (x, pixel) in pixels.iter().enumerate() {
            img.put_pixel(x as u32, 0, *pixel);
        }
        img
    }

    #[test]
    fn threshold_is_strictly_above_240() {
        let mut img = image_of(&[Rgba([241, 241, 241, 255]), Rgba([240, 240, 240, 255])]);
        assert_eq!(strip_background(&mut img), 1);

        assert_eq!(*img.get_pixel(0, 0), STRIPPED);
        assert_eq!(*img.get_pixel(1, 0), Rgba([240, 240, 240, 255]));
    }

    #[test]
    fn one_dark_channel_keeps_the_pixel() {
        let mut img = image_of(&[Rgba([255, 255, 239, 255])]);
        assert_eq!(strip_background(&mut img), 0);
        assert_eq!(*img.get_pixel(0, 0), Rgba([255, 255, 239, 255]));
    }

    #[test]
    fn cleared_pixels_become_pure_white() {
        // the original near-white shade is not preserved
        let mut img = image_of(&[Rgba([250, 245, 242, 255])]);
        assert_eq!(strip_background(&mut img), 1);
        assert_eq!(*img.get_pixel(0, 0), Rgba([255, 255, 255, 0]));
    }

    #[test]
    fn foreground_pixels_keep_color_and_alpha() {
        let pixels = [Rgba([10, 20, 30, 128]), Rgba([0, 0, 0, 0])];
        let mut img = image_of(&pixels);
        assert_eq!(strip_background(&mut img), 0);

        assert_eq!(*img.get_pixel(0, 0), pixels[0]);
        assert_eq!(*img.get_pixel(1, 0), pixels[1]);
    }

    #[test]
    fn stripping_is_idempotent() {
        let mut img = image_of(&[
            Rgba([255, 255, 255, 255]),
            Rgba([241, 250, 255, 255]),
            Rgba([200, 200, 200, 255]),
            Rgba([0, 0, 0, 255]),
        ]);
        strip_background(&mut img);
        let once = img.clone();

        strip_background(&mut img);
        assert_eq!(img, once);
    }
}
