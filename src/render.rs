//! Scene drawing for the 128x64 monochrome display.
//!
//! The scene is redrawn in full every frame:
//! 1. clear the buffer
//! 2. draw the border (single or double outline)
//! 3. draw the filled 8x8 marker
//!
//! All functions are generic over [`DrawTarget`] so they run against the
//! SSD1306 frame buffer on the device and against a plain array in tests.

use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, PrimitiveStyleBuilder, Rectangle, StrokeAlignment};

use crate::config::{
    BORDER_HEIGHT,
    BORDER_WIDTH,
    INNER_BORDER_HEIGHT,
    INNER_BORDER_INSET,
    INNER_BORDER_WIDTH,
    MARKER_SIZE,
};

use crate::control::FramePlan;
use crate::state::BorderStyle;

/// 1px outline drawn entirely inside the rectangle bounds.
fn outline_style() -> PrimitiveStyle<BinaryColor> {
    PrimitiveStyleBuilder::new()
        .stroke_color(BinaryColor::On)
        .stroke_width(1)
        .stroke_alignment(StrokeAlignment::Inside)
        .build()
}

/// Draw the screen border.
///
/// The outer outline is 127x63 from the origin, so column 127 and row 63
/// stay dark. `Double` adds a 125x61 outline at [`INNER_BORDER_INSET`].
pub fn draw_border<D>(
    display: &mut D,
    style: BorderStyle,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = BinaryColor>,
{
    let stroke = outline_style();

    Rectangle::new(Point::zero(), Size::new(BORDER_WIDTH, BORDER_HEIGHT))
        .into_styled(stroke)
        .draw(display)?;

    if style.is_double() {
        Rectangle::new(
            Point::new(INNER_BORDER_INSET, INNER_BORDER_INSET),
            Size::new(INNER_BORDER_WIDTH, INNER_BORDER_HEIGHT),
        )
        .into_styled(stroke)
        .draw(display)?;
    }

    Ok(())
}

/// Draw the filled square marker with its top-left corner at `top_left`.
pub fn draw_marker<D>(
    display: &mut D,
    top_left: Point,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = BinaryColor>,
{
    Rectangle::new(top_left, Size::new(MARKER_SIZE, MARKER_SIZE))
        .into_styled(PrimitiveStyle::with_fill(BinaryColor::On))
        .draw(display)
}

/// Clear the buffer and draw a complete frame.
pub fn draw_scene<D>(
    display: &mut D,
    plan: &FramePlan,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = BinaryColor>,
{
    display.clear(BinaryColor::Off)?;
    draw_border(display, plan.border)?;
    draw_marker(display, plan.marker)
}

#[cfg(test)]
mod tests {
    use core::convert::Infallible;

    use super::*;
    use crate::config::{SCREEN_HEIGHT, SCREEN_WIDTH};
    use crate::leds::LedLevels;

    const W: usize = SCREEN_WIDTH as usize;
    const H: usize = SCREEN_HEIGHT as usize;

    /// In-memory 128x64 frame buffer.
    struct TestFrame {
        pixels: [[bool; W]; H],
    }

    impl TestFrame {
        fn new() -> Self { Self { pixels: [[false; W]; H] } }

        fn is_on(
            &self,
            x: usize,
            y: usize,
        ) -> bool {
            self.pixels[y][x]
        }

        fn lit_count(&self) -> usize { self.pixels.iter().flatten().filter(|p| **p).count() }
    }

    impl OriginDimensions for TestFrame {
        fn size(&self) -> Size { Size::new(SCREEN_WIDTH, SCREEN_HEIGHT) }
    }

    impl DrawTarget for TestFrame {
        type Color = BinaryColor;
        type Error = Infallible;

        fn draw_iter<I>(
            &mut self,
            pixels: I,
        ) -> Result<(), Self::Error>
        where
            I: IntoIterator<Item = Pixel<Self::Color>>,
        {
            for Pixel(point, color) in pixels {
                if let (Ok(x), Ok(y)) = (usize::try_from(point.x), usize::try_from(point.y))
                    && x < W
                    && y < H
                {
                    self.pixels[y][x] = color.is_on();
                }
            }
            Ok(())
        }
    }

    fn plan(
        marker: Point,
        border: BorderStyle,
    ) -> FramePlan {
        FramePlan {
            leds: LedLevels::OFF,
            marker,
            border,
        }
    }

    /// Lit pixels of a 1px outline: 2 full rows + 2 columns without the corners.
    const fn outline_pixels(
        w: usize,
        h: usize,
    ) -> usize {
        2 * w + 2 * (h - 2)
    }

    const OUTER: usize = outline_pixels(BORDER_WIDTH as usize, BORDER_HEIGHT as usize);
    const INNER: usize = outline_pixels(INNER_BORDER_WIDTH as usize, INNER_BORDER_HEIGHT as usize);

    #[test]
    fn test_single_border() {
        let mut frame = TestFrame::new();
        draw_border(&mut frame, BorderStyle::Single).unwrap();

        for (x, y) in [(0, 0), (126, 0), (0, 62), (126, 62), (64, 0), (0, 32), (126, 32), (64, 62)] {
            assert!(frame.is_on(x, y), "expected border pixel at ({x}, {y})");
        }
        assert!(!frame.is_on(1, 1));
        assert!(!frame.is_on(64, 32));
        assert_eq!(frame.lit_count(), OUTER);
    }

    #[test]
    fn test_border_leaves_last_column_and_row_dark() {
        for style in [BorderStyle::Single, BorderStyle::Double] {
            let mut frame = TestFrame::new();
            draw_border(&mut frame, style).unwrap();

            for y in 0..H {
                assert!(!frame.is_on(W - 1, y), "column 127 lit at y={y}");
            }
            for x in 0..W {
                assert!(!frame.is_on(x, H - 1), "row 63 lit at x={x}");
            }
        }
    }

    #[test]
    fn test_double_border() {
        let mut frame = TestFrame::new();
        draw_border(&mut frame, BorderStyle::Double).unwrap();

        for (x, y) in [(0, 0), (1, 1), (125, 1), (1, 61), (125, 61), (64, 1), (1, 32), (126, 62)] {
            assert!(frame.is_on(x, y), "expected border pixel at ({x}, {y})");
        }
        assert!(!frame.is_on(2, 2));
        assert!(!frame.is_on(124, 60));
        assert_eq!(frame.lit_count(), OUTER + INNER);
    }

    #[test]
    fn test_marker_is_filled_square() {
        let mut frame = TestFrame::new();
        draw_marker(&mut frame, Point::new(10, 20)).unwrap();

        for y in 20..28 {
            for x in 10..18 {
                assert!(frame.is_on(x, y), "expected marker pixel at ({x}, {y})");
            }
        }
        assert!(!frame.is_on(18, 20));
        assert!(!frame.is_on(10, 28));
        assert!(!frame.is_on(9, 19));
        assert_eq!(frame.lit_count(), 64);
    }

    #[test]
    fn test_scene_clears_previous_frame() {
        let mut frame = TestFrame::new();
        draw_scene(&mut frame, &plan(Point::new(100, 40), BorderStyle::Double)).unwrap();
        assert!(frame.is_on(100, 40));
        assert!(frame.is_on(1, 1));

        draw_scene(&mut frame, &plan(Point::new(30, 10), BorderStyle::Single)).unwrap();
        assert!(!frame.is_on(100, 40), "old marker must be erased");
        assert!(!frame.is_on(1, 1), "inner border must be erased");
        assert!(frame.is_on(30, 10));
        assert_eq!(frame.lit_count(), OUTER + 64);
    }

    #[test]
    fn test_marker_at_far_corner_stays_inside_inner_border() {
        let mut frame = TestFrame::new();
        draw_scene(&mut frame, &plan(Point::new(113, 52), BorderStyle::Double)).unwrap();
        assert!(frame.is_on(120, 59));
        assert!(!frame.is_on(121, 60));
        assert!(!frame.is_on(124, 60));
    }
}
