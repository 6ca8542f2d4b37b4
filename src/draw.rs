//! Pixel-level drawing primitives for the sheet composer.

use image::{Rgba, RgbaImage};

use crate::font;

/// Vertical gap between label lines, in pixels.
const LINE_SPACING: u32 = 1;

/// Fill a `w` x `h` rectangle at (x, y) with `fill`, giving it a 1-pixel
/// `outline` border. Pixels falling outside the image are clipped.
pub fn fill_cell(
    img: &mut RgbaImage,
    x: u32,
    y: u32,
    w: u32,
    h: u32,
    fill: Rgba<u8>,
    outline: Rgba<u8>,
) {
    for dy in 0..h {
        for dx in 0..w {
            let (px, py) = (x + dx, y + dy);
            if px >= img.width() || py >= img.height() {
                continue;
            }

            let on_border = dx == 0 || dy == 0 || dx == w - 1 || dy == h - 1;
            img.put_pixel(px, py, if on_border { outline } else { fill });
        }
    }
}

/// Render `text` with the built-in font, top-left corner at (x, y).
///
/// `'\n'` starts a new line under the first. Characters without a glyph are
/// skipped but still advance the cursor, so rendering never fails; it just
/// leaves a gap. Pixels outside the image are clipped.
pub fn draw_text(img: &mut RgbaImage, text: &str, x: u32, y: u32, color: Rgba<u8>) {
    let mut cursor_x = x;
    let mut cursor_y = y;

    for c in text.chars() {
        if c == '\n' {
            cursor_x = x;
            cursor_y += font::GLYPH_HEIGHT + LINE_SPACING;
            continue;
        }

        if let Some(bitmap) = font::glyph(c) {
            blit_glyph(img, bitmap, cursor_x, cursor_y, color);
        }
        cursor_x += font::GLYPH_WIDTH;
    }
}

fn blit_glyph(img: &mut RgbaImage, bitmap: &[u8; 8], x: u32, y: u32, color: Rgba<u8>) {
    for (row, &bits) in bitmap.iter().enumerate() {
        for col in 0..font::GLYPH_WIDTH {
            if (bits >> (7 - col)) & 1 == 0 {
                continue;
            }

            let (px, py) = (x + col, y + row as u32);
            if px < img.width() && py < img.height() {
                img.put_pixel(px, py, color);
            }
        }
    }
}
