//! Compass-bearing to draw-angle conversion
//!
//! Painting backends measure angles from the positive x axis ("0 is right",
//! y growing downward), while compass bearings run clockwise from north
//! ("0 is up"). The conversion here shifts a bearing by a quarter turn so
//! that 0 degrees lands straight up on screen and angles increase clockwise.

use std::f64::consts::PI;

/// Wrap any angle in degrees into [0, 360).
///
/// Bearing arithmetic (for example `bearing - heading` in track-up mode)
/// must pass through here before the result is used as a bearing again.
pub fn wrap_degrees(deg: f64) -> f64 {
    deg.rem_euclid(360.0)
}

/// Convert a compass bearing in degrees to a draw angle in radians.
///
/// For any bearing in [0, 360) the result is in [0, 2π). A bearing of 0
/// degrees maps to straight up (negative y in screen coordinates) and 90
/// degrees maps to the positive x axis.
pub fn draw_angle_rad(bearing_deg: f64) -> f64 {
    // 0 deg is up, not right as the backend draws by default
    let shifted = if bearing_deg - 90.0 < 0.0 {
        bearing_deg + 270.0
    } else {
        bearing_deg - 90.0
    };
    shifted * PI / 180.0
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_draw_angle_cardinal_points() {
        // North is up: 3/2 pi points at (0, -1) with y down
        assert!((draw_angle_rad(0.0) - 3.0 * PI / 2.0).abs() < EPS);
        // East is right
        assert!(draw_angle_rad(90.0).abs() < EPS);
        // South is down
        assert!((draw_angle_rad(180.0) - PI / 2.0).abs() < EPS);
        // West is left
        assert!((draw_angle_rad(270.0) - PI).abs() < EPS);
    }

    #[test]
    fn test_draw_angle_range() {
        for deg in 0..360 {
            let rad = draw_angle_rad(f64::from(deg));
            assert!(rad >= 0.0, "bearing {deg} gave negative angle {rad}");
            assert!(rad < 2.0 * PI, "bearing {deg} gave angle {rad} >= 2pi");
        }
    }

    #[test]
    fn test_draw_angle_direction() {
        // Bearing 0 should point straight up in screen coordinates
        let rad = draw_angle_rad(0.0);
        assert!(rad.cos().abs() < EPS);
        assert!((rad.sin() + 1.0).abs() < EPS);
    }

    #[test]
    fn test_wrap_degrees() {
        assert!((wrap_degrees(0.0)).abs() < EPS);
        assert!((wrap_degrees(360.0)).abs() < EPS);
        assert!((wrap_degrees(370.0) - 10.0).abs() < EPS);
        assert!((wrap_degrees(-30.0) - 330.0).abs() < EPS);
        assert!((wrap_degrees(-360.0)).abs() < EPS);
        assert!((wrap_degrees(725.5) - 5.5).abs() < EPS);
    }
}
