//! Stroke adapter for drawing a curve with embedded-graphics
//!
//! Connects consecutive command end points with `Line` primitives, or marks a
//! dot when the whole curve rounds to a single pixel. Fills,
//! gradients and glow belong to the presentation layer and are not handled
//! here.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Circle, Line, PrimitiveStyle};
use num_traits::Float;

use super::path::CurvePath;
use super::viewport::Point2D;

/// A [`CurvePath`] styled for stroking onto a `DrawTarget`
#[derive(Debug, Clone, Copy)]
pub struct CurveStroke<'a> {
    path: &'a CurvePath,
    color: Rgb565,
    width: u32,
}

impl<'a> CurveStroke<'a> {
    /// Stroke `path` with a solid color and line width in pixels
    pub fn new(path: &'a CurvePath, color: Rgb565, width: u32) -> Self {
        Self { path, color, width }
    }
}

fn to_pixel(point: Point2D) -> Point {
    Point::new(point.x.round() as i32, point.y.round() as i32)
}

impl Drawable for CurveStroke<'_> {
    type Color = Rgb565;
    type Output = ();

    fn draw<D>(&self, display: &mut D) -> Result<Self::Output, D::Error>
    where
        D: DrawTarget<Color = Self::Color>,
    {
        let line_style = PrimitiveStyle::with_stroke(self.color, self.width);
        let mut prev_screen: Option<Point> = None;
        let mut drew_line = false;

        for point in self.path.end_points().map(to_pixel) {
            // Dense sampling lands several commands on the same pixel
            if prev_screen == Some(point) {
                continue;
            }

            if let Some(prev) = prev_screen {
                Line::new(prev, point)
                    .into_styled(line_style)
                    .draw(display)?;
                drew_line = true;
            }
            prev_screen = Some(point);
        }

        // The whole curve landed on one pixel: mark it with a dot
        if let (false, Some(point)) = (drew_line, prev_screen) {
            match self.width {
                0 => {}
                1 => Pixel(point, self.color).draw(display)?,
                width => Circle::with_center(point, width)
                    .into_styled(PrimitiveStyle::with_fill(self.color))
                    .draw(display)?,
            }
        }

        Ok(())
    }
}
