use crate::config::PlotConfig;
use crate::expr::{Function, ParseError};
use crate::state::{PanSession, Viewport};
use crate::util::{clog, cwarn};

/// Everything the render loop reads and the input handlers mutate.
///
/// Mutators return `true` when the scene must be redrawn; the caller then
/// invokes the single render entry point.
#[derive(Debug, Clone)]
pub struct PlotState {
    pub viewport: Viewport,
    pub pan: PanSession,
    pub function: Function,
    /// Message from the last rejected expression, cleared on the next accepted one.
    pub error: Option<String>,
    zoom_divisor: f64,
}

impl Default for PlotState {
    fn default() -> Self {
        Self::new(&PlotConfig::default())
    }
}

impl PlotState {
    pub fn new(cfg: &PlotConfig) -> Self {
        let function = Function::compile(&cfg.default_expression).unwrap_or_else(|e| {
            cwarn(&format!(
                "default expression '{}' rejected: {}",
                cfg.default_expression, e
            ));
            Function::default()
        });
        Self {
            viewport: Viewport::new(cfg.scale, cfg.min_zoom),
            pan: PanSession::default(),
            function,
            error: None,
            zoom_divisor: cfg.zoom_divisor,
        }
    }

    pub fn resize(&mut self, width: f64, height: f64) -> bool {
        self.viewport.resize(width, height);
        true
    }

    /// Primary-button press. A second press while already panning is ignored.
    pub fn begin_pan(&mut self, screen_x: f64, screen_y: f64) -> bool {
        if !self.pan.active {
            self.pan
                .begin(screen_x, screen_y, self.viewport.pan_x, self.viewport.pan_y);
        }
        false
    }

    pub fn drag_to(&mut self, screen_x: f64, screen_y: f64) -> bool {
        match self.pan.offsets_at(screen_x, screen_y) {
            Some((x, y)) => {
                self.viewport.pan_x = x;
                self.viewport.pan_y = y;
                true
            }
            None => false,
        }
    }

    pub fn end_pan(&mut self) -> bool {
        self.pan.end();
        false
    }

    /// Wheel zoom keeping the math point under (cursor_x, cursor_y) fixed on screen.
    ///
    /// Zoom has no ceiling, but a step that would overflow to a non-finite
    /// zoom or pan is dropped and the view stays as it was.
    pub fn zoom_at(&mut self, cursor_x: f64, cursor_y: f64, delta: f64) -> bool {
        let mut next = self.viewport.clone();
        let before = next.to_math(cursor_x, cursor_y);
        next.set_zoom(next.zoom * (1.0 - delta / self.zoom_divisor));
        let after = next.to_math(cursor_x, cursor_y);
        let ppu = next.pixels_per_unit();
        next.pan_x += (after.x - before.x) * ppu;
        next.pan_y += (after.y - before.y) * ppu;
        if ![next.zoom, ppu, next.pan_x, next.pan_y]
            .iter()
            .all(|v| v.is_finite())
        {
            return false;
        }
        self.viewport = next;
        true
    }

    pub fn zoom_centered(&mut self, delta: f64) -> bool {
        let (cx, cy) = (self.viewport.width / 2.0, self.viewport.height / 2.0);
        self.zoom_at(cx, cy, delta)
    }

    pub fn reset_view(&mut self) -> bool {
        self.viewport.pan_x = 0.0;
        self.viewport.pan_y = 0.0;
        self.viewport.set_zoom(1.0);
        true
    }

    /// Installs `text` as the active function. On a parse error the previous
    /// function stays active and the message is kept in `error`.
    pub fn submit_expression(&mut self, text: &str) -> Result<(), ParseError> {
        match Function::compile(text) {
            Ok(f) => {
                clog(&format!("plotting {}", f.source()));
                self.function = f;
                self.error = None;
                Ok(())
            }
            Err(e) => {
                cwarn(&format!("rejected '{}': {}", text, e));
                self.error = Some(e.to_string());
                Err(e)
            }
        }
    }
}
