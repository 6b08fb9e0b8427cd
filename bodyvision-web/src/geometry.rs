//! Planar angles and point distances over landmarks
//!
//! Angles use the screen (x, y) plane only; distances include depth.

use crate::landmarks::Landmark;

/// Angle at vertex `b` between rays b→a and b→c, in degrees (0-180)
///
/// Computed from the difference of the two ray headings, so the
/// result is the smaller of the two angles the rays form.
/// A ray of zero length has heading 0; callers guard missing landmarks.
pub fn angle_degrees(a: &Landmark, b: &Landmark, c: &Landmark) -> f32 {
    let radians = (c.y - b.y).atan2(c.x - b.x) - (a.y - b.y).atan2(a.x - b.x);
    let angle = radians.to_degrees().abs();

    if angle > 180.0 {
        360.0 - angle
    } else {
        angle
    }
}

/// 3-D Euclidean distance
pub fn distance(a: &Landmark, b: &Landmark) -> f32 {
    let dx = a.x - b.x;
    let dy = a.y - b.y;
    let dz = a.z - b.z;
    (dx * dx + dy * dy + dz * dz).sqrt()
}

/// Distance in the screen plane, ignoring depth
pub fn distance_2d(a: &Landmark, b: &Landmark) -> f32 {
    let dx = a.x - b.x;
    let dy = a.y - b.y;
    (dx * dx + dy * dy).sqrt()
}

/// Screen-plane midpoint; depth is dropped
pub fn midpoint(a: &Landmark, b: &Landmark) -> Landmark {
    Landmark::new((a.x + b.x) / 2.0, (a.y + b.y) / 2.0, 0.0)
}
