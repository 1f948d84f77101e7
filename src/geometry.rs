//! Screen-to-plank coordinate mapping.
//!
//! Item positions are stored in the plank's own unrotated frame: a signed
//! distance from the pivot along the plank. The plank is drawn rotated by the
//! current animated angle, so pointer coordinates are rotated back by that
//! angle before they are interpreted.

#[cfg(test)]
#[path = "geometry_test.rs"]
mod geometry_test;

/// A point in either screen or plank-local space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`.
    #[must_use]
    pub fn distance_to(self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// Convert a screen-space point to the plank's unrotated frame.
///
/// `pivot` is the pivot's screen position and `angle_deg` the plank's current
/// clockwise rotation. The result's `x` runs along the plank (positive to the
/// right of the pivot) and `y` across it (positive below the centre line).
#[must_use]
pub fn to_plank_local(pointer: Point, pivot: Point, angle_deg: f64) -> Point {
    let dx = pointer.x - pivot.x;
    let dy = pointer.y - pivot.y;
    let (sin, cos) = (-angle_deg).to_radians().sin_cos();
    Point { x: dx * cos - dy * sin, y: dx * sin + dy * cos }
}

/// Clamp a plank-local distance to the plank's extent.
#[must_use]
pub fn clamp_position(position: f64, half_plank_length: f64) -> f64 {
    position.clamp(-half_plank_length, half_plank_length)
}

/// Signed distance from the pivot, along the plank, of a pointer position.
#[must_use]
pub fn local_position(pointer: Point, pivot: Point, angle_deg: f64, half_plank_length: f64) -> f64 {
    clamp_position(to_plank_local(pointer, pivot, angle_deg).x, half_plank_length)
}
