use crate::error::{Error, Result};

/// Mean Earth radius in kilometres, used as the occluding sphere of the
/// line-of-sight test.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Cartesian coordinates in the body-centred frame, in kilometres.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vec3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vec3 {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Project spherical coordinates onto the body-centred Cartesian frame.
    ///
    /// `latitude` and `longitude` are in degrees; `radius` and `altitude`
    /// share a unit and are added before projection. The axis convention is
    /// fixed: x points away from (0°, 0°), y towards the north pole.
    pub fn from_lat_lon(latitude: f64, longitude: f64, radius: f64, altitude: f64) -> Self {
        let r = radius + altitude;
        let lat = latitude.to_radians();
        let lon = longitude.to_radians();

        Self {
            x: -r * lat.cos() * lon.cos(),
            y: r * lat.sin(),
            z: r * lat.cos() * lon.sin(),
        }
    }

    /// Vector pointing from `self` to `other`.
    pub fn delta(&self, other: &Vec3) -> Vec3 {
        Vec3 {
            x: other.x - self.x,
            y: other.y - self.y,
            z: other.z - self.z,
        }
    }

    /// Euclidean norm.
    pub fn length(&self) -> f64 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    /// Euclidean distance to another point.
    pub fn distance_to(&self, other: &Vec3) -> f64 {
        self.delta(other).length()
    }

    /// Unit-length copy of this vector. A zero-length input has no direction
    /// and fails instead of propagating NaN.
    pub fn normalized(&self) -> Result<Vec3> {
        let length = self.length();
        if length == 0.0 {
            return Err(Error::ZeroLengthVector);
        }

        Ok(Vec3 {
            x: self.x / length,
            y: self.y / length,
            z: self.z / length,
        })
    }

    /// In-place `self += v * s`, the marching step.
    pub fn scale_add(&mut self, v: &Vec3, s: f64) {
        self.x += v.x * s;
        self.y += v.y * s;
        self.z += v.z * s;
    }
}
