/// Mean Earth radius in meters, as used by the map SDK's spherical utilities.
pub const EARTH_RADIUS_METERS: f64 = 6_371_009.0;

/// Two coordinates (degrees, or fractional bin positions) closer than this are the same line.
pub const COORDINATE_EPSILON: f64 = 1e-9;

pub const TEAM_COUNT: usize = 4;
pub const MAX_NEIGHBOURS: usize = 4;
