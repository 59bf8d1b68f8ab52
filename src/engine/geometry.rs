use crate::engine::constants::*;

use arrayvec::ArrayVec;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub latitude: f64,
    pub longitude: f64,
}

impl LatLng {
    pub fn new(latitude: f64, longitude: f64) -> LatLng {
        LatLng { latitude, longitude }
    }
}

impl fmt::Display for LatLng {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({:.7}, {:.7})", self.latitude, self.longitude)
    }
}

/// Great-circle distance in meters between two points (haversine).
pub fn distance(from: LatLng, to: LatLng) -> f64 {
    let lat1 = from.latitude.to_radians();
    let lat2 = to.latitude.to_radians();
    let d_lat = lat2 - lat1;
    let d_lng = (to.longitude - from.longitude).to_radians();

    let h = (d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lng / 2.0).sin().powi(2);
    2.0 * EARTH_RADIUS_METERS * h.sqrt().min(1.0).asin()
}

pub fn same(a: f64, b: f64) -> bool {
    (a - b).abs() < COORDINATE_EPSILON
}

/// Integer address of a grid cell. Nothing about the type guarantees it lies inside a grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CellCoord {
    pub x: i32,
    pub y: i32,
}

impl CellCoord {
    pub fn new(x: i32, y: i32) -> CellCoord {
        CellCoord { x, y }
    }

    /// Shares one axis value and differs by exactly one on the other.
    pub fn is_adjacent(&self, other: &CellCoord) -> bool {
        let dx = (self.x - other.x).abs();
        let dy = (self.y - other.y).abs();
        dx + dy == 1
    }

    pub fn neighbours(&self) -> ArrayVec<CellCoord, MAX_NEIGHBOURS> {
        let mut result = ArrayVec::new();
        result.push(CellCoord::new(self.x, self.y + 1));
        result.push(CellCoord::new(self.x + 1, self.y));
        result.push(CellCoord::new(self.x, self.y - 1));
        result.push(CellCoord::new(self.x - 1, self.y));
        result
    }
}

impl fmt::Display for CellCoord {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{},{}", self.x, self.y)
    }
}
