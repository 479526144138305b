// Pan/zoom state and the screen <-> math coordinate mapping.

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Viewport {
    pub pan_x: f64,
    pub pan_y: f64,
    pub width: f64,
    pub height: f64,
    /// Never below `min_zoom`.
    pub zoom: f64,
    /// Pixels per unit at zoom 1.
    pub scale: f64,
    pub min_zoom: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            pan_x: 0.0,
            pan_y: 0.0,
            width: 0.0,
            height: 0.0,
            zoom: 1.0,
            scale: 100.0,
            min_zoom: 0.5,
        }
    }
}

impl Viewport {
    pub fn new(scale: f64, min_zoom: f64) -> Self {
        Self {
            scale,
            min_zoom,
            ..Default::default()
        }
    }

    pub fn pixels_per_unit(&self) -> f64 {
        self.zoom * self.scale
    }

    fn origin_x(&self) -> f64 {
        self.width / 2.0 + self.pan_x
    }

    fn origin_y(&self) -> f64 {
        self.height / 2.0 + self.pan_y
    }

    /// Whole-pixel screen X for a math X.
    pub fn to_screen_x(&self, x: f64) -> f64 {
        (self.origin_x() + x * self.pixels_per_unit()).round()
    }

    /// Whole-pixel screen Y for a math Y. Not flipped: callers negate.
    pub fn to_screen_y(&self, y: f64) -> f64 {
        (self.origin_y() + y * self.pixels_per_unit()).round()
    }

    /// Exact inverse of the screen mapping (no rounding).
    pub fn to_math(&self, px: f64, py: f64) -> Point {
        Point::new(
            (px - self.origin_x()) / self.zoom / self.scale,
            (py - self.origin_y()) / self.zoom / self.scale,
        )
    }

    pub fn set_zoom(&mut self, zoom: f64) {
        self.zoom = zoom.max(self.min_zoom);
    }

    pub fn resize(&mut self, width: f64, height: f64) {
        self.width = width.max(0.0);
        self.height = height.max(0.0);
    }

    /// Math-space corners at screen (0,0) and (width,height).
    pub fn visible_range(&self) -> (Point, Point) {
        (self.to_math(0.0, 0.0), self.to_math(self.width, self.height))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vp(width: f64, height: f64) -> Viewport {
        let mut v = Viewport::default();
        v.resize(width, height);
        v
    }

    #[test]
    fn origin_is_centre_of_800_by_600() {
        let v = vp(800.0, 600.0);
        assert_eq!(v.to_screen_x(0.0), 400.0);
        assert_eq!(v.to_screen_y(0.0), 300.0);
        assert_eq!(v.to_screen_x(1.0), 500.0);
        assert_eq!(v.to_screen_y(-1.0), 200.0);
    }

    #[test]
    fn screen_coords_are_whole_pixels() {
        let mut v = vp(801.0, 601.0);
        v.set_zoom(1.337);
        v.pan_x = 12.25;
        let sx = v.to_screen_x(0.123);
        assert_eq!(sx, sx.round());
    }

    #[test]
    fn round_trip_within_one_pixel() {
        let mut v = vp(800.0, 600.0);
        v.pan_x = -37.3;
        v.pan_y = 121.9;
        v.set_zoom(2.71);
        for px in (0..=800).step_by(37) {
            for py in (0..=600).step_by(41) {
                let (px, py) = (px as f64, py as f64);
                let m = v.to_math(px, py);
                assert!((v.to_screen_x(m.x) - px).abs() <= 1.0);
                assert!((v.to_screen_y(m.y) - py).abs() <= 1.0);
            }
        }
    }

    #[test]
    fn zoom_has_a_floor() {
        let mut v = vp(100.0, 100.0);
        v.set_zoom(0.1);
        assert_eq!(v.zoom, 0.5);
        v.set_zoom(40.0);
        assert_eq!(v.zoom, 40.0);
    }

    #[test]
    fn visible_range_spans_the_surface() {
        let v = vp(800.0, 600.0);
        let (from, to) = v.visible_range();
        assert_eq!(from, Point::new(-4.0, -3.0));
        assert_eq!(to, Point::new(4.0, 3.0));
    }
}
