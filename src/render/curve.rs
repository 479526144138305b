// Samples the active function across the surface and strokes it as polylines.

use super::Surface;
use crate::config::PlotConfig;
use crate::expr::Function;
use crate::state::Viewport;

/// Screen-space runs of consecutive valid samples.
///
/// Screen X steps from 0 while `< width + step`, with `step = zoom * sample_step_px`.
/// A sample whose evaluation fails ends the current run; the next valid one
/// starts a new run.
pub fn trace(vp: &Viewport, f: &Function, cfg: &PlotConfig) -> Vec<Vec<(f64, f64)>> {
    let step = vp.zoom * cfg.sample_step_px;
    let mut runs = Vec::new();
    let mut current: Vec<(f64, f64)> = Vec::new();
    let mut n = 0u32;
    loop {
        let i = n as f64 * step;
        if i >= vp.width + step {
            break;
        }
        n += 1;
        let x = vp.to_math(i, 0.0).x;
        match f.eval(x) {
            Ok(y) => current.push((i, vp.to_screen_y(-y))),
            Err(_) if !current.is_empty() => runs.push(std::mem::take(&mut current)),
            Err(_) => {}
        }
    }
    if !current.is_empty() {
        runs.push(current);
    }
    runs
}

pub fn draw_curve<S: Surface>(s: &mut S, vp: &Viewport, f: &Function, cfg: &PlotConfig) {
    s.set_stroke_color(&cfg.curve_color);
    s.set_line_width(cfg.line_width);
    for run in trace(vp, f, cfg) {
        // a lone sample has no segment to draw
        if run.len() > 1 {
            s.polyline(&run);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::recording::RecordingSurface;

    fn vp(width: f64, height: f64) -> Viewport {
        let mut v = Viewport::default();
        v.resize(width, height);
        v
    }

    fn f(src: &str) -> Function {
        Function::compile(src).unwrap()
    }

    #[test]
    fn samples_every_step_past_the_right_edge() {
        let runs = trace(&vp(100.0, 100.0), &f("0"), &PlotConfig::default());
        assert_eq!(runs.len(), 1);
        let xs: Vec<f64> = runs[0].iter().map(|p| p.0).collect();
        assert_eq!(xs, vec![0.0, 10.0, 20.0, 30.0, 40.0, 50.0, 60.0, 70.0, 80.0, 90.0, 100.0]);
        assert!(runs[0].iter().all(|p| p.1 == 50.0));
    }

    #[test]
    fn step_grows_with_zoom() {
        let mut v = vp(100.0, 100.0);
        v.set_zoom(2.0);
        let runs = trace(&v, &f("x"), &PlotConfig::default());
        let xs: Vec<f64> = runs[0].iter().map(|p| p.0).collect();
        assert_eq!(xs, vec![0.0, 20.0, 40.0, 60.0, 80.0, 100.0]);
    }

    #[test]
    fn rising_values_move_up_the_screen() {
        let runs = trace(&vp(800.0, 600.0), &f("x"), &PlotConfig::default());
        let pts = &runs[0];
        // screen x 500 is math x 1, drawn one unit above the axis
        assert!(pts.contains(&(500.0, 200.0)));
        assert!(pts.windows(2).all(|w| w[1].1 <= w[0].1));
    }

    #[test]
    fn failing_samples_split_the_curve() {
        // sqrt undefined for x < 0: left half is a gap
        let runs = trace(&vp(800.0, 600.0), &f("sqrt(x)"), &PlotConfig::default());
        assert_eq!(runs.len(), 1);
        assert_eq!(runs[0][0].0, 400.0);

        // 1/x fails exactly at x = 0 (screen 400)
        let runs = trace(&vp(800.0, 600.0), &f("1/x"), &PlotConfig::default());
        assert_eq!(runs.len(), 2);
        assert_eq!(runs[0].last().unwrap().0, 390.0);
        assert_eq!(runs[1][0].0, 410.0);
    }

    #[test]
    fn nothing_drawn_when_every_sample_fails() {
        let mut s = RecordingSurface::default();
        draw_curve(&mut s, &vp(200.0, 200.0), &f("ln(0)"), &PlotConfig::default());
        assert!(s.polylines().is_empty());
    }

    #[test]
    fn draws_one_polyline_per_run() {
        let mut s = RecordingSurface::default();
        draw_curve(&mut s, &vp(800.0, 600.0), &f("1/x"), &PlotConfig::default());
        assert_eq!(s.polylines().len(), 2);
    }
}
