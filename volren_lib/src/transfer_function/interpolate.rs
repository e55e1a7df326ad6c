use crate::color::{self, RGBA};

use super::ControlPoint;

/// Uniform Catmull-Rom spline through `p1` and `p2`, `t` in `[0;1]`
pub fn catmull_rom(t: f32, p0: f32, p1: f32, p2: f32, p3: f32) -> f32 {
    let t2 = t * t;
    let t3 = t2 * t;
    0.5 * ((2.0 * p1)
        + (-p0 + p2) * t
        + (2.0 * p0 - 5.0 * p1 + 4.0 * p2 - p3) * t2
        + (-p0 + 3.0 * p1 - 3.0 * p2 + p3) * t3)
}

/// Evaluate the transfer function at normalized `value`.
///
/// `points` must be sorted by value. Color is blended linearly between the
/// two surrounding knots, opacity follows a Catmull-Rom spline whose outer
/// knots are clamped at both ends. Outside the knot range the boundary knot
/// is returned. No points give transparent black.
///
/// Opacity is not clamped here, the spline can overshoot when neighbouring
/// opacities are not monotonic.
pub fn interpolate(value: f32, points: &[ControlPoint]) -> RGBA {
    match points {
        [] => color::zero(),
        [single] => single.rgba(),
        _ => {
            let upper = points.partition_point(|p| p.value < value);

            if upper == 0 {
                return points[0].rgba();
            }
            if upper == points.len() {
                return points[points.len() - 1].rgba();
            }

            let lower = upper - 1;
            let low = &points[lower];
            let high = &points[upper];

            let span = high.value - low.value;
            if span <= f32::EPSILON {
                // zero width interval, jump to the upper knot
                return high.rgba();
            }
            let t = ((value - low.value) / span).clamp(0.0, 1.0);

            let rgb = color::mix(&low.color, &high.color, t);

            let p0 = &points[lower.saturating_sub(1)];
            let p3 = &points[(upper + 1).min(points.len() - 1)];
            let opacity = catmull_rom(t, p0.opacity, low.opacity, high.opacity, p3.opacity);

            color::with_opacity(rgb, opacity)
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::color::{mono, rgb};

    fn close(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-5
    }

    fn black_to_white() -> Vec<ControlPoint> {
        vec![
            ControlPoint::new(0.0, mono(0.0), 0.0),
            ControlPoint::new(1.0, mono(1.0), 1.0),
        ]
    }

    #[test]
    fn empty_is_transparent() {
        assert_eq!(interpolate(0.3, &[]), color::zero());
    }

    #[test]
    fn single_point_is_constant() {
        let p = ControlPoint::new(0.4, rgb(0.1, 0.2, 0.3), 0.7);
        for v in [0.0, 0.4, 0.9, 1.0] {
            assert_eq!(interpolate(v, &[p]), p.rgba());
        }
    }

    #[test]
    fn knots_are_hit_exactly() {
        let points = crate::TransferFunction::default();
        for p in points.points() {
            let res = interpolate(p.value, points.points());
            assert!(close(res.x, p.color.x));
            assert!(close(res.y, p.color.y));
            assert!(close(res.z, p.color.z));
            assert!(close(res.w, p.opacity));
        }
    }

    #[test]
    fn outside_range_clamps_to_boundary() {
        let points = vec![
            ControlPoint::new(0.2, rgb(1.0, 0.0, 0.0), 0.3),
            ControlPoint::new(0.8, rgb(0.0, 0.0, 1.0), 0.6),
        ];
        assert_eq!(interpolate(0.0, &points), points[0].rgba());
        assert_eq!(interpolate(1.0, &points), points[1].rgba());
    }

    #[test]
    fn midpoint_of_black_to_white_is_gray() {
        let res = interpolate(0.5, &black_to_white());
        assert!(close(res.x, 0.5));
        assert!(close(res.y, 0.5));
        assert!(close(res.z, 0.5));
    }

    #[test]
    fn default_function_quarter() {
        let tf = crate::TransferFunction::default();
        let res = interpolate(0.25, tf.points());
        assert!(close(res.x, 0.5));
        assert!(close(res.y, 0.25));
        assert!(close(res.z, 0.0));
        assert!(res.w.is_finite());
        assert!((0.0..=1.0).contains(&res.w));
        // knots 0, 0, 0.5, 1 at t = 0.5
        assert!(close(res.w, 0.21875));
    }

    #[test]
    fn value_on_duplicate_knots_takes_first() {
        let points = vec![
            ControlPoint::new(0.0, mono(0.0), 0.0),
            ControlPoint::new(0.5, rgb(1.0, 0.0, 0.0), 0.2),
            ControlPoint::new(0.5, rgb(0.0, 1.0, 0.0), 0.8),
            ControlPoint::new(1.0, mono(1.0), 1.0),
        ];
        let res = interpolate(0.5, &points);
        assert!(res.iter().all(|c| c.is_finite()));
        // lower_bound lands on the first duplicate
        assert!(close(res.x, 1.0));
        assert!(close(res.w, 0.2));
    }

    #[test]
    fn narrow_interval_returns_upper_knot() {
        let lo = 0.1f32;
        let hi = lo + 5e-8;
        let x = lo + 2e-8;
        assert!(lo < x && x < hi);
        assert!(hi - lo <= f32::EPSILON);

        let points = vec![
            ControlPoint::new(0.0, mono(0.0), 0.0),
            ControlPoint::new(lo, rgb(1.0, 0.0, 0.0), 0.2),
            ControlPoint::new(hi, rgb(0.0, 1.0, 0.0), 0.9),
            ControlPoint::new(1.0, mono(1.0), 1.0),
        ];
        assert_eq!(interpolate(x, &points), points[2].rgba());
    }

    #[test]
    fn catmull_rom_passes_through_inner_knots() {
        assert!(close(catmull_rom(0.0, 0.3, 0.1, 0.9, 0.4), 0.1));
        assert!(close(catmull_rom(1.0, 0.3, 0.1, 0.9, 0.4), 0.9));
    }

    #[test]
    fn catmull_rom_linear_data_stays_linear() {
        assert!(close(catmull_rom(0.5, 0.0, 0.25, 0.5, 0.75), 0.375));
    }
}
