use thiserror::Error;

use super::geometry::LatLng;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum GridError {
    #[error("area bounds do not enclose a region: north {north} south {south} east {east} west {west}")]
    InvalidBounds {
        north: f64,
        south: f64,
        east: f64,
        west: f64,
    },
    #[error("cell size must be positive, got {0}")]
    NonPositiveCellSize(i32),
    #[error("area spans no distance along the {0} axis")]
    EmptyAxis(Axis),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

impl std::fmt::Display for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Axis::X => write!(f, "x (west-east)"),
            Axis::Y => write!(f, "y (south-north)"),
        }
    }
}

/// The play area of one game and the requested side length of its cells.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridSpec {
    pub north: f64,
    pub south: f64,
    pub east: f64,
    pub west: f64,
    pub cell_size_meters: i32,
}

impl GridSpec {
    pub fn new(north: f64, east: f64, south: f64, west: f64, cell_size_meters: i32) -> Result<GridSpec, GridError> {
        let spec = GridSpec::unchecked(north, east, south, west, cell_size_meters);
        spec.validate()?;
        Ok(spec)
    }

    /// Argument order matches the server's `areaNorth, areaEast, areaSouth, areaWest`.
    pub fn unchecked(north: f64, east: f64, south: f64, west: f64, cell_size_meters: i32) -> GridSpec {
        GridSpec { north, south, east, west, cell_size_meters }
    }

    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }

    pub fn validate(&self) -> Result<(), GridError> {
        if !(self.north > self.south && self.east > self.west) {
            return Err(GridError::InvalidBounds {
                north: self.north,
                south: self.south,
                east: self.east,
                west: self.west,
            });
        }
        if self.cell_size_meters <= 0 {
            return Err(GridError::NonPositiveCellSize(self.cell_size_meters));
        }
        Ok(())
    }

    pub fn south_west(&self) -> LatLng {
        LatLng::new(self.south, self.west)
    }

    pub fn south_east(&self) -> LatLng {
        LatLng::new(self.south, self.east)
    }

    pub fn north_west(&self) -> LatLng {
        LatLng::new(self.north, self.west)
    }
}
