//! Composition of the placeholder sheet image.

use anyhow::{bail, ensure};
use image::{Rgba, RgbaImage};
use itertools::Itertools;
use placegen_common::GridSpec;

use crate::draw;

const OUTLINE: Rgba<u8> = Rgba([0, 0, 0, 255]);
const LABEL_INK: Rgba<u8> = Rgba([0, 0, 0, 255]);

/// Offset of the label from the cell's top-left corner.
const LABEL_INSET: u32 = 2;

/// Build the sheet: a transparent canvas of exactly
/// `(cols * frame_width, rows * frame_height)` pixels, every cell filled with
/// its row color, outlined, and labeled `"{label}\n{frame index}"`.
///
/// Colors wrap when there are fewer colors than rows; labels do not, a short
/// label list is an error.
pub fn compose(spec: &GridSpec, labels: &[&str], colors: &[Rgba<u8>]) -> anyhow::Result<RgbaImage> {
    ensure!(
        spec.frame_width > 0 && spec.frame_height > 0 && spec.cols > 0 && spec.rows > 0,
        "all grid dimensions must be non-zero"
    );
    ensure!(
        labels.len() >= spec.rows as usize,
        "{} row labels for {} rows",
        labels.len(),
        spec.rows
    );
    ensure!(!colors.is_empty(), "row color list is empty");

    let (Some(width), Some(height)) = (spec.sheet_width(), spec.sheet_height()) else {
        bail!(
            "sheet size overflows: {}x{} cells of {}x{} pixels",
            spec.cols,
            spec.rows,
            spec.frame_width,
            spec.frame_height
        );
    };

    // a fresh buffer is zeroed, i.e. fully transparent
    let mut sheet = RgbaImage::new(width, height);

    for (row, col) in (0..spec.rows).cartesian_product(0..spec.cols) {
        let (x, y) = spec.cell_origin(row, col);
        let color = colors[row as usize % colors.len()];

        draw::fill_cell(
            &mut sheet,
            x,
            y,
            spec.frame_width,
            spec.frame_height,
            color,
            OUTLINE,
        );
    }

    // labels go on top in a second pass so a wide label is not painted over
    // by its right-hand neighbor's fill
    for (row, col) in (0..spec.rows).cartesian_product(0..spec.cols) {
        let (x, y) = spec.cell_origin(row, col);
        let label = format!("{}\n{col}", labels[row as usize]);
        draw::draw_text(&mut sheet, &label, x + LABEL_INSET, y + LABEL_INSET, LABEL_INK);
    }

    Ok(sheet)
}
