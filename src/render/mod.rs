//! Scene drawing.
//!
//! Everything draws through [`Surface`], so the grid and curve code never
//! touches the browser directly. [`render_scene`] is the single redraw entry
//! point: it clears the surface and repaints grid then curve, every time.

mod canvas;
pub mod curve;
pub mod grid;

use thiserror::Error;

use crate::config::PlotConfig;
use crate::expr::Function;
use crate::state::Viewport;

pub use canvas::CanvasSurface;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("2d context unavailable")]
    NoContext,
    #[error("canvas call failed: {0}")]
    Canvas(String),
}

pub type DrawResult = Result<(), RenderError>;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextAlign {
    Start,
    Center,
}

/// Minimal 2D raster API the renderers need.
pub trait Surface {
    fn clear(&mut self, width: f64, height: f64);
    fn set_stroke_color(&mut self, color: &str);
    fn set_fill_color(&mut self, color: &str);
    fn set_line_width(&mut self, width: f64);
    fn set_font(&mut self, font: &str);
    fn set_text_align(&mut self, align: TextAlign);
    /// Strokes one straight segment.
    fn line(&mut self, x0: f64, y0: f64, x1: f64, y1: f64);
    /// Strokes a connected path through `points`.
    fn polyline(&mut self, points: &[(f64, f64)]);
    fn text(&mut self, text: &str, x: f64, y: f64) -> DrawResult;
}

pub fn render_scene<S: Surface>(
    surface: &mut S,
    viewport: &Viewport,
    function: &Function,
    cfg: &PlotConfig,
) -> DrawResult {
    surface.clear(viewport.width, viewport.height);
    grid::draw_grid(surface, viewport, cfg)?;
    curve::draw_curve(surface, viewport, function, cfg);
    Ok(())
}

#[cfg(test)]
pub(crate) mod recording {
    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    pub enum Op {
        Clear(f64, f64),
        Stroke(String),
        Fill(String),
        LineWidth(f64),
        Font(String),
        Align(TextAlign),
        Line(f64, f64, f64, f64),
        Polyline(Vec<(f64, f64)>),
        Text(String, f64, f64),
    }

    /// Surface that logs every call instead of drawing.
    #[derive(Default, Debug)]
    pub struct RecordingSurface {
        pub ops: Vec<Op>,
    }

    impl RecordingSurface {
        pub fn texts(&self) -> Vec<(String, f64, f64)> {
            self.ops
                .iter()
                .filter_map(|op| match op {
                    Op::Text(t, x, y) => Some((t.clone(), *x, *y)),
                    _ => None,
                })
                .collect()
        }

        pub fn polylines(&self) -> Vec<Vec<(f64, f64)>> {
            self.ops
                .iter()
                .filter_map(|op| match op {
                    Op::Polyline(p) => Some(p.clone()),
                    _ => None,
                })
                .collect()
        }
    }

    impl Surface for RecordingSurface {
        fn clear(&mut self, width: f64, height: f64) {
            self.ops.push(Op::Clear(width, height));
        }
        fn set_stroke_color(&mut self, color: &str) {
            self.ops.push(Op::Stroke(color.into()));
        }
        fn set_fill_color(&mut self, color: &str) {
            self.ops.push(Op::Fill(color.into()));
        }
        fn set_line_width(&mut self, width: f64) {
            self.ops.push(Op::LineWidth(width));
        }
        fn set_font(&mut self, font: &str) {
            self.ops.push(Op::Font(font.into()));
        }
        fn set_text_align(&mut self, align: TextAlign) {
            self.ops.push(Op::Align(align));
        }
        fn line(&mut self, x0: f64, y0: f64, x1: f64, y1: f64) {
            self.ops.push(Op::Line(x0, y0, x1, y1));
        }
        fn polyline(&mut self, points: &[(f64, f64)]) {
            self.ops.push(Op::Polyline(points.to_vec()));
        }
        fn text(&mut self, text: &str, x: f64, y: f64) -> DrawResult {
            self.ops.push(Op::Text(text.into(), x, y));
            Ok(())
        }
    }
}
