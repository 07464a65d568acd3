//! Overlap correction via exact time of impact
//!
//! Rewinds a colliding pair by one tick of velocity and solves
//! `|dx + t·dv|² = (r1 + r2)²` for the fractional time at which the two
//! circles just touch.

use super::body::Body;
use super::quadratic::QuadraticEquation;
use super::vector::Vector2d;

/// Time-of-impact equation for a pair, in the frame one tick back
pub fn impact_equation(first: &Body, second: &Body) -> QuadraticEquation {
    let dx = (first.pos - first.vel) - (second.pos - second.vel);
    let dv = first.vel - second.vel;
    let reach = first.radius + second.radius;
    QuadraticEquation::new(
        dv.magnitude_squared(),
        2.0 * dx.inner_product(dv),
        dx.magnitude_squared() - reach * reach,
    )
}

/// Move both bodies to their touching positions
///
/// Each real root with `-1 < t < 1` places the bodies at
/// `rewound + t·velocity`; roots come `+` branch first, so the earlier
/// contact wins when both qualify. Returns the applied `t`, or `None` when
/// no root qualified (bodies left where they were).
pub fn correct_overlap(first: &mut Body, second: &mut Body) -> Option<f64> {
    let equation = impact_equation(first, second);
    let roots = match equation.roots() {
        Ok(roots) => roots,
        Err(e) => {
            log::debug!("Skipping overlap correction: {}", e);
            return None;
        }
    };

    let rewound_first = first.pos - first.vel;
    let rewound_second = second.pos - second.vel;

    let mut applied = None;
    for t in roots.iter() {
        if t > -1.0 && t < 1.0 {
            first.pos = rewound_first + first.vel * t;
            second.pos = rewound_second + second.vel * t;
            applied = Some(t);
        }
    }
    applied
}

/// Position a body would have at fractional time `t` measured from one tick back
#[inline]
pub fn position_at(body: &Body, t: f64) -> Vector2d {
    body.pos - body.vel + body.vel * t
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::body::Color;

    fn body(x: f64, y: f64, vx: f64, vy: f64, radius: f64) -> Body {
        Body::new(
            Vector2d::new(x, y),
            Vector2d::new(vx, vy),
            radius,
            Color::default(),
            1.0,
        )
    }

    #[test]
    fn test_head_on_correction_lands_on_contact() {
        let mut b1 = body(0.0, 0.0, 2.0, 0.0, 5.0);
        let mut b2 = body(9.0, 0.0, -2.0, 0.0, 5.0);

        let t = correct_overlap(&mut b1, &mut b2).unwrap();
        assert!((t - 0.75).abs() < 1e-12);
        assert!((b1.pos.x() + 0.5).abs() < 1e-12);
        assert!((b2.pos.x() - 9.5).abs() < 1e-12);
        assert!((b1.pos.distance_to(b2.pos) - 10.0).abs() < 1e-9);
    }

    #[test]
    fn test_impact_root_gives_touching_separation() {
        // Oblique approach with different radii
        let b1 = body(10.0, 10.0, 1.5, 0.5, 6.0);
        let b2 = body(19.0, 13.0, -2.0, -1.0, 4.0);
        let roots = impact_equation(&b1, &b2).roots().unwrap();
        assert_eq!(roots.len(), 2);

        for t in roots.iter() {
            let gap = position_at(&b1, t).distance_to(position_at(&b2, t));
            assert!((gap - 10.0).abs() < 1e-9, "t={} gap={}", t, gap);
        }

        let mut c1 = b1;
        let mut c2 = b2;
        let t = correct_overlap(&mut c1, &mut c2).unwrap();
        assert!(t > -1.0 && t < 1.0);
        assert!((c1.pos.distance_to(c2.pos) - 10.0).abs() < 1e-9);
    }

    #[test]
    fn test_zero_relative_velocity_skips() {
        let mut b1 = body(0.0, 0.0, 1.0, 1.0, 5.0);
        let mut b2 = body(6.0, 0.0, 1.0, 1.0, 5.0);
        assert!(impact_equation(&b1, &b2).is_degenerate());
        assert_eq!(correct_overlap(&mut b1, &mut b2), None);
        assert_eq!(b1.pos, Vector2d::new(0.0, 0.0));
        assert_eq!(b2.pos, Vector2d::new(6.0, 0.0));
    }

    #[test]
    fn test_deep_overlap_out_of_window_skips() {
        // Contact happened more than a tick ago
        let mut b1 = body(0.0, 0.0, 0.5, 0.0, 5.0);
        let mut b2 = body(2.0, 0.0, -0.5, 0.0, 5.0);
        assert_eq!(correct_overlap(&mut b1, &mut b2), None);
        assert_eq!(b1.pos, Vector2d::new(0.0, 0.0));
    }
}
