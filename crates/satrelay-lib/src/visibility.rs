use crate::error::Result;
use crate::geometry::Vec3;

/// Floor for the marching step, in kilometres. Near-tangent rays can approach
/// the sphere surface without ever entering it, driving the adaptive step
/// towards zero; the floor keeps the march moving so the loop terminates.
pub const MIN_STEP_KM: f64 = 1.0e-4;

/// Line-of-sight test between two points against a sphere centred at the
/// origin, using adaptive ray marching.
///
/// The march starts at `from` and steps towards `to` by the current distance
/// to the sphere surface (floored at [`MIN_STEP_KM`]). Once the remaining
/// straight-line distance cannot re-enter the sphere the segment is declared
/// visible; a march point inside the sphere declares it occluded.
///
/// Fails when `from` and `to` coincide, since the segment then has no
/// direction to march along.
pub fn line_of_sight(from: &Vec3, to: &Vec3, sphere_radius: f64) -> Result<bool> {
    let path = from.delta(to);
    let length = path.length();
    let dir = path.normalized()?;

    let mut point = *from;
    let mut traveled = 0.0;

    loop {
        let dist_to_sphere = point.length() - sphere_radius;

        if traveled + dist_to_sphere >= length {
            return Ok(true);
        }
        if dist_to_sphere < 0.0 {
            return Ok(false);
        }

        let step = dist_to_sphere.max(MIN_STEP_KM);
        point.scale_add(&dir, step);
        traveled += step;
    }
}
