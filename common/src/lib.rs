use image::Rgba;

/// Channel value a pixel has to exceed on red, green *and* blue to count as
/// background. Strictly greater-than, so (240, 240, 240) is kept.
pub const NEAR_WHITE_MIN: u8 = 240;

/// What stripped pixels become: pure white with zero alpha. Still satisfies
/// [`is_near_white`], which is what makes stripping idempotent.
pub const STRIPPED: Rgba<u8> = Rgba([255, 255, 255, 0]);

pub fn is_near_white(pixel: &Rgba<u8>) -> bool {
    let Rgba([r, g, b, _a]) = *pixel;
    r > NEAR_WHITE_MIN && g > NEAR_WHITE_MIN && b > NEAR_WHITE_MIN
}

/// Dimensions of a placeholder sprite sheet: a `cols` x `rows` grid of
/// fixed-size frames.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GridSpec {
    pub frame_width: u32,
    pub frame_height: u32,
    pub cols: u32,
    pub rows: u32,
}

impl GridSpec {
    /// Total sheet width in pixels, `None` when it overflows u32.
    pub fn sheet_width(&self) -> Option<u32> {
        self.cols.checked_mul(self.frame_width)
    }

    /// Total sheet height in pixels, `None` when it overflows u32.
    pub fn sheet_height(&self) -> Option<u32> {
        self.rows.checked_mul(self.frame_height)
    }

    /// Top-left pixel of the cell at (row, col).
    pub fn cell_origin(&self, row: u32, col: u32) -> (u32, u32) {
        (col * self.frame_width, row * self.frame_height)
    }
}

impl Default for GridSpec {
    // 4 frames per animation, 1 idle row + 8 direction rows
    fn default() -> Self {
        Self {
            frame_width: 32,
            frame_height: 32,
            cols: 4,
            rows: 9,
        }
    }
}

/// Row labels of the default astronaut sheet, top to bottom.
pub const ROW_LABELS: [&str; 9] = ["Idle", "N", "NE", "E", "SE", "S", "SW", "W", "NW"];

/// One pastel color per row for visual distinction, matching [`ROW_LABELS`]
/// by index.
pub const ROW_COLORS: [Rgba<u8>; 9] = [
    Rgba([200, 200, 255, 255]), // Idle - light blue
    Rgba([255, 200, 200, 255]), // N - light red
    Rgba([255, 225, 200, 255]), // NE
    Rgba([255, 255, 200, 255]), // E - light yellow
    Rgba([225, 255, 200, 255]), // SE
    Rgba([200, 255, 200, 255]), // S - light green
    Rgba([200, 255, 225, 255]), // SW
    Rgba([200, 255, 255, 255]), // W - light cyan
    Rgba([200, 225, 255, 255]), // NW
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn near_white_boundary_is_exclusive() {
        assert!(is_near_white(&Rgba([241, 241, 241, 255])));
        assert!(!is_near_white(&Rgba([240, 240, 240, 255])));
    }

    #[test]
    fn every_channel_must_exceed_the_floor() {
        assert!(!is_near_white(&Rgba([255, 255, 239, 255])));
        assert!(!is_near_white(&Rgba([239, 255, 255, 255])));
        assert!(!is_near_white(&Rgba([255, 239, 255, 255])));
        assert!(is_near_white(&Rgba([255, 255, 255, 255])));
    }

    #[test]
    fn alpha_does_not_affect_classification() {
        assert!(is_near_white(&Rgba([250, 250, 250, 0])));
        assert!(is_near_white(&STRIPPED));
    }

    #[test]
    fn sheet_dimensions_multiply_out() {
        let spec = GridSpec::default();
        assert_eq!(spec.sheet_width(), Some(128));
        assert_eq!(spec.sheet_height(), Some(288));

        let spec = GridSpec {
            frame_width: 16,
            frame_height: 24,
            cols: 3,
            rows: 5,
        };
        assert_eq!(spec.sheet_width(), Some(48));
        assert_eq!(spec.sheet_height(), Some(120));
        assert_eq!(spec.cell_origin(2, 1), (16, 48));
    }

    #[test]
    fn oversized_sheet_dimensions_are_none() {
        let spec = GridSpec {
            frame_width: 65_536,
            frame_height: 2,
            cols: 65_536,
            rows: 3,
        };
        assert_eq!(spec.sheet_width(), None);
        assert_eq!(spec.sheet_height(), Some(6));
    }

    #[test]
    fn default_layout_is_consistent() {
        assert_eq!(ROW_LABELS.len(), ROW_COLORS.len());
        assert_eq!(GridSpec::default().rows as usize, ROW_LABELS.len());
    }
}
