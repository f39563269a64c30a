//! Curve primitives shared by the trajectory builders.

use bevy::math::DVec3;

use crate::types::DEG_TO_RAD;

/// Quadratic Bezier: B(t) = (1-t)²·P0 + 2(1-t)t·P1 + t²·P2
///
/// Returns `p0` exactly at t = 0 and `p2` exactly at t = 1.
#[inline]
pub fn quadratic_bezier(p0: DVec3, p1: DVec3, p2: DVec3, t: f64) -> DVec3 {
    let u = 1.0 - t;
    p0 * (u * u) + p1 * (2.0 * u * t) + p2 * (t * t)
}

/// Cubic ease-in-out on [0, 1].
#[inline]
pub fn ease_in_out_cubic(t: f64) -> f64 {
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}

/// Linear interpolation written so that s = 0 yields `a` bit-for-bit.
#[inline]
pub fn lerp(a: DVec3, b: DVec3, s: f64) -> DVec3 {
    a * (1.0 - s) + b * s
}

/// Point on a sphere from geographic coordinates (degrees).
///
/// Y is up; longitude 0 lies on +X and longitude 90 on +Z.
pub fn lat_long_to_vec3(latitude: f64, longitude: f64, radius: f64) -> DVec3 {
    let lat = latitude * DEG_TO_RAD;
    let lon = longitude * DEG_TO_RAD;
    DVec3::new(
        radius * lat.cos() * lon.cos(),
        radius * lat.sin(),
        radius * lat.cos() * lon.sin(),
    )
}
