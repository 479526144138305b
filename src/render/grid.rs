// Axes, unit gridlines, ticks and labels.

use super::{DrawResult, Surface, TextAlign};
use crate::config::PlotConfig;
use crate::state::Viewport;

// Hard stop for absurd configs (tiny scale); normal views draw a few dozen lines.
const MAX_LINES: usize = 4096;

/// Integer coordinates from `round(from)` up to (not including) `to + overscan`, zero excluded.
pub fn unit_steps(from: f64, to: f64, overscan: f64) -> impl Iterator<Item = i64> {
    let start = from.round() as i64;
    let end = to + overscan;
    (start..)
        .take_while(move |&v| (v as f64) < end)
        .filter(|&v| v != 0)
        .take(MAX_LINES)
}

pub fn draw_grid<S: Surface>(s: &mut S, vp: &Viewport, cfg: &PlotConfig) -> DrawResult {
    let ox = vp.to_screen_x(0.0);
    let oy = vp.to_screen_y(0.0);
    let tick = cfg.tick_half_length;

    s.set_line_width(cfg.line_width);
    s.set_font(&cfg.font);
    s.set_text_align(TextAlign::Center);
    s.set_stroke_color(&cfg.axis_color);
    s.set_fill_color(&cfg.axis_color);
    s.line(0.0, oy, vp.width, oy);
    s.line(ox, 0.0, ox, vp.height);

    let (from, to) = vp.visible_range();

    for x in unit_steps(from.x, to.x, cfg.grid_overscan) {
        let gx = vp.to_screen_x(x as f64);
        s.set_stroke_color(&cfg.grid_color);
        s.line(gx, 0.0, gx, vp.height);
        s.set_stroke_color(&cfg.axis_color);
        s.line(gx, oy - tick, gx, oy + tick);
        s.text(&x.to_string(), gx, oy + cfg.x_label_drop)?;
    }

    // screen Y grows downward, so the label shows the negated value
    for y in unit_steps(from.y, to.y, cfg.grid_overscan) {
        let gy = vp.to_screen_y(y as f64);
        s.set_stroke_color(&cfg.grid_color);
        s.line(0.0, gy, vp.width, gy);
        s.set_stroke_color(&cfg.axis_color);
        s.line(ox - tick, gy, ox + tick, gy);
        s.text(&(-y).to_string(), ox - cfg.y_label_inset, gy + cfg.y_label_drop)?;
    }

    s.text("0", ox - cfg.y_label_inset, oy + cfg.x_label_drop)?;
    s.text("x", vp.width - 10.0, oy - 10.0)?;
    s.text("y", ox + 10.0, 10.0)?;
    s.set_text_align(TextAlign::Start);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::recording::{Op, RecordingSurface};

    fn draw(vp: &Viewport) -> RecordingSurface {
        let mut s = RecordingSurface::default();
        draw_grid(&mut s, vp, &PlotConfig::default()).unwrap();
        s
    }

    #[test]
    fn steps_skip_zero_and_overscan_far_edge() {
        let v: Vec<i64> = unit_steps(-2.4, 1.5, 2.0).collect();
        assert_eq!(v, vec![-2, -1, 1, 2, 3]);
    }

    #[test]
    fn steps_include_rounded_start() {
        let v: Vec<i64> = unit_steps(-3.5, -3.2, 0.0).collect();
        assert_eq!(v, vec![-4]);
        assert_eq!(unit_steps(1.0, 0.5, 0.0).count(), 0);
    }

    #[test]
    fn steps_are_capped() {
        assert_eq!(unit_steps(-1e9, 1e9, 0.0).count(), MAX_LINES);
    }

    #[test]
    fn axes_pass_through_origin() {
        let mut vp = Viewport::default();
        vp.resize(800.0, 600.0);
        let s = draw(&vp);
        assert!(s.ops.contains(&Op::Line(0.0, 300.0, 800.0, 300.0)));
        assert!(s.ops.contains(&Op::Line(400.0, 0.0, 400.0, 600.0)));
    }

    #[test]
    fn labels_sit_at_fixed_offsets() {
        let mut vp = Viewport::default();
        vp.resize(800.0, 600.0);
        let texts = draw(&vp).texts();
        // x = 1 at screen 500, 24px under the axis
        assert!(texts.contains(&("1".into(), 500.0, 324.0)));
        // math y = 1 is screen 400 and shows as "-1"
        assert!(texts.contains(&("-1".into(), 380.0, 404.0)));
        assert!(texts.contains(&("2".into(), 380.0, 104.0)));
        assert!(texts.contains(&("0".into(), 380.0, 324.0)));
        assert!(texts.contains(&("x".into(), 790.0, 290.0)));
        assert!(texts.contains(&("y".into(), 410.0, 10.0)));
        assert!(!texts.iter().any(|(t, x, _)| t == "0" && *x == 400.0));
    }

    #[test]
    fn gridlines_cover_visible_range_plus_overscan() {
        let mut vp = Viewport::default();
        vp.resize(800.0, 600.0);
        let s = draw(&vp);
        let vertical: Vec<f64> = s
            .ops
            .iter()
            .filter_map(|op| match op {
                Op::Line(x0, y0, x1, y1) if x0 == x1 && *y0 == 0.0 && *y1 == 600.0 => Some(*x0),
                _ => None,
            })
            .collect();
        // axis plus -4..=23 without zero
        assert_eq!(vertical.len(), 1 + 27);
        assert!(vertical.contains(&0.0));
        assert!(vertical.contains(&2700.0));
    }

    #[test]
    fn ticks_straddle_axis() {
        let mut vp = Viewport::default();
        vp.resize(800.0, 600.0);
        let s = draw(&vp);
        assert!(s.ops.contains(&Op::Line(600.0, 295.0, 600.0, 305.0)));
        assert!(s.ops.contains(&Op::Line(395.0, 100.0, 405.0, 100.0)));
    }
}
