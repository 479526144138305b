// Drag-to-pan session: lives from primary-button press to release.
#[derive(Default, Debug, Clone, PartialEq)]
pub struct PanSession {
    pub active: bool,
    pub start_x: f64,
    pub start_y: f64,
    pub initial_pan_x: f64,
    pub initial_pan_y: f64,
}

impl PanSession {
    pub fn begin(&mut self, screen_x: f64, screen_y: f64, pan_x: f64, pan_y: f64) {
        *self = Self {
            active: true,
            start_x: screen_x,
            start_y: screen_y,
            initial_pan_x: pan_x,
            initial_pan_y: pan_y,
        };
    }

    /// Pan offsets for the cursor now at (screen_x, screen_y), or None when idle.
    pub fn offsets_at(&self, screen_x: f64, screen_y: f64) -> Option<(f64, f64)> {
        self.active.then(|| {
            (
                self.initial_pan_x + (screen_x - self.start_x),
                self.initial_pan_y + (screen_y - self.start_y),
            )
        })
    }

    pub fn end(&mut self) {
        self.active = false;
    }
}
