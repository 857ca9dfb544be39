use image::{Rgba, RgbaImage};

/// Brand background (#667eea)
pub const BACKGROUND: Rgba<u8> = Rgba([0x66, 0x7e, 0xea, 0xff]);
/// Accent for the body outline and the clip (#764ba2)
pub const ACCENT: Rgba<u8> = Rgba([0x76, 0x4b, 0xa2, 0xff]);
/// Clipboard body fill
pub const BODY: Rgba<u8> = Rgba([0xff, 0xff, 0xff, 0xff]);

/// Glyph measurements, all derived from the target size by integer
/// division so the same drawing code serves every resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Geometry {
    pub margin: u32,
    pub outline: u32,
    pub clip_width: u32,
    pub clip_height: u32,
    pub line_spacing: u32,
    pub line_width: u32,
}

impl Geometry {
    pub fn for_size(size: u32) -> Self {
        Geometry {
            margin: size / 8,
            outline: (size / 32).max(1),
            clip_width: size / 3,
            clip_height: size / 10,
            line_spacing: size / 8,
            line_width: (size / 64).max(1),
        }
    }
}

// Generate the placeholder clipboard app icon (brand background + white
// board with accent outline + clip straddling the top edge + ruled lines)
pub fn generate_icon(size: u32) -> RgbaImage {
    let g = Geometry::for_size(size);
    let mut img = RgbaImage::from_pixel(size, size, BACKGROUND);

    // Board, outline stroke running inward from its edge
    let board = size - 2 * g.margin;
    fill_rect(&mut img, g.margin, g.margin, board, board, ACCENT);
    let inner = board.saturating_sub(2 * g.outline);
    fill_rect(
        &mut img,
        g.margin + g.outline,
        g.margin + g.outline,
        inner,
        inner,
        BODY,
    );

    // Clip, horizontally centered, top lifted by half its own height so it
    // sits across the board edge
    let clip_x = (size - g.clip_width) / 2;
    let clip_y = g.margin - g.clip_height / 2;
    fill_rect(&mut img, clip_x, clip_y, g.clip_width, g.clip_height, ACCENT);

    // Three ruled lines across the board
    let line_x = g.margin + size / 6;
    let line_span = size - 2 * line_x;
    for i in 0..3 {
        let y = g.margin + size / 4 + i * g.line_spacing;
        fill_rect(
            &mut img,
            line_x,
            y - g.line_width / 2,
            line_span,
            g.line_width,
            BACKGROUND,
        );
    }

    img
}

/// Fill a rectangle clamped to the canvas, so degenerate geometry at tiny
/// sizes draws nothing instead of going out of bounds.
#[inline]
fn fill_rect(img: &mut RgbaImage, x0: u32, y0: u32, w: u32, h: u32, color: Rgba<u8>) {
    let (iw, ih) = img.dimensions();
    for y in y0..(y0 + h).min(ih) {
        for x in x0..(x0 + w).min(iw) {
            img.put_pixel(x, y, color);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn margin_is_an_eighth_of_the_size() {
        for size in [8, 32, 100, 128, 256, 512, 1024] {
            let g = Geometry::for_size(size);
            assert_eq!(g.margin, size / 8);
            assert!(g.margin > 0, "margin collapsed for size {}", size);
        }
    }

    #[test]
    fn strokes_never_drop_below_one_pixel() {
        let small = Geometry::for_size(16);
        assert_eq!(small.outline, 1);
        assert_eq!(small.line_width, 1);

        let large = Geometry::for_size(1024);
        assert_eq!(large.outline, 32);
        assert_eq!(large.line_width, 16);
    }

    #[test]
    fn canvas_matches_the_requested_size() {
        for size in [16, 32, 48, 64, 128, 256, 512, 1024] {
            assert_eq!(generate_icon(size).dimensions(), (size, size));
        }
    }

    #[test]
    fn tiny_sizes_render_without_panicking() {
        for size in 1..=8 {
            assert_eq!(generate_icon(size).dimensions(), (size, size));
        }
    }

    #[test]
    fn glyph_regions_carry_the_expected_colors() {
        // At 256: margin 32, outline 8, clip 85x25 at (85, 20), lines at
        // y 96/128/160 spanning x 74..182 with a 4px stroke.
        let img = generate_icon(256);

        // corner stays background
        assert_eq!(img.get_pixel(0, 0), &BACKGROUND);
        // outline band just inside the margin
        assert_eq!(img.get_pixel(36, 128), &ACCENT);
        // clip above the board's top edge
        assert_eq!(img.get_pixel(128, 20), &ACCENT);
        // board interior left of the ruled lines
        assert_eq!(img.get_pixel(50, 128), &BODY);
        // first ruled line
        assert_eq!(img.get_pixel(128, 96), &BACKGROUND);
        // interior between the first two lines
        assert_eq!(img.get_pixel(128, 110), &BODY);
    }
}
