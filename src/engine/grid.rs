use super::geometry::{distance, same, CellCoord, LatLng};
use super::settings::{Axis, GridError, GridSpec};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridDimensions {
    pub cells_x: u32,
    pub cells_y: u32,
}

impl GridDimensions {
    /// Partitions the spec's area without validating it. An invalid spec gives meaningless counts.
    pub fn of(spec: &GridSpec) -> GridDimensions {
        let x_span = distance(spec.south_west(), spec.south_east());
        let y_span = distance(spec.south_west(), spec.north_west());
        GridDimensions {
            cells_x: cells_along(x_span, spec.cell_size_meters),
            cells_y: cells_along(y_span, spec.cell_size_meters),
        }
    }

    pub fn cell_count(&self) -> u64 {
        self.cells_x as u64 * self.cells_y as u64
    }
}

fn cells_along(span_meters: f64, cell_size_meters: i32) -> u32 {
    let size = cell_size_meters as f64;
    if span_meters == 0.0 {
        0
    } else if span_meters < size {
        1
    } else {
        (span_meters / size).ceil() as u32
    }
}

/// South-west and north-east corners of a single cell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellBounds {
    pub south_west: LatLng,
    pub north_east: LatLng,
}

impl CellBounds {
    pub fn center(&self) -> LatLng {
        LatLng::new(
            (self.south_west.latitude + self.north_east.latitude) / 2.0,
            (self.south_west.longitude + self.north_east.longitude) / 2.0,
        )
    }
}

/// A full-span line of the grid drawing: one of the four outer boundaries or an internal divider.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridLine {
    pub from: LatLng,
    pub to: LatLng,
}

/// A validated area together with its partition. Every grid has at least one cell on each axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Grid {
    spec: GridSpec,
    dimensions: GridDimensions,
}

impl Grid {
    pub fn new(spec: GridSpec) -> Result<Grid, GridError> {
        spec.validate()?;
        let dimensions = GridDimensions::of(&spec);
        if dimensions.cells_x == 0 {
            return Err(GridError::EmptyAxis(Axis::X));
        }
        if dimensions.cells_y == 0 {
            return Err(GridError::EmptyAxis(Axis::Y));
        }
        Ok(Grid { spec, dimensions })
    }

    pub fn spec(&self) -> &GridSpec {
        &self.spec
    }

    pub fn dimensions(&self) -> GridDimensions {
        self.dimensions
    }

    pub fn cells_x(&self) -> u32 {
        self.dimensions.cells_x
    }

    pub fn cells_y(&self) -> u32 {
        self.dimensions.cells_y
    }

    fn cell_width(&self) -> f64 {
        (self.spec.east - self.spec.west) / self.dimensions.cells_x as f64
    }

    fn cell_height(&self) -> f64 {
        (self.spec.north - self.spec.south) / self.dimensions.cells_y as f64
    }

    pub fn x_index(&self, longitude: f64) -> Option<i32> {
        self.bin_index(longitude, self.spec.west, self.spec.east, self.dimensions.cells_x)
    }

    pub fn y_index(&self, latitude: f64) -> Option<i32> {
        self.bin_index(latitude, self.spec.south, self.spec.north, self.dimensions.cells_y)
    }

    /// The cell containing `point`, or `None` if the point is on or beyond the area boundary.
    pub fn cell_at(&self, point: LatLng) -> Option<CellCoord> {
        match (self.x_index(point.longitude), self.y_index(point.latitude)) {
            (Some(x), Some(y)) => Some(CellCoord::new(x, y)),
            _ => None,
        }
    }

    pub fn contains_point(&self, point: LatLng) -> bool {
        self.cell_at(point).is_some()
    }

    pub fn contains(&self, coord: CellCoord) -> bool {
        coord.x >= 0
            && coord.y >= 0
            && (coord.x as i64) < self.dimensions.cells_x as i64
            && (coord.y as i64) < self.dimensions.cells_y as i64
    }

    pub fn cell_bounds(&self, coord: CellCoord) -> Option<CellBounds> {
        if !self.contains(coord) {
            return None;
        }
        let width = self.cell_width();
        let height = self.cell_height();
        Some(CellBounds {
            south_west: LatLng::new(
                self.spec.south + height * coord.y as f64,
                self.spec.west + width * coord.x as f64,
            ),
            north_east: LatLng::new(
                self.line_position(self.spec.south, self.spec.north, height, coord.y as u32 + 1, self.dimensions.cells_y),
                self.line_position(self.spec.west, self.spec.east, width, coord.x as u32 + 1, self.dimensions.cells_x),
            ),
        })
    }

    /// Outer boundaries plus the dividers between rows and columns, each spanning the whole area.
    pub fn grid_lines(&self) -> Vec<GridLine> {
        let spec = &self.spec;
        let width = self.cell_width();
        let height = self.cell_height();

        let columns = (0..=self.dimensions.cells_x).map(|i| {
            let longitude = self.line_position(spec.west, spec.east, width, i, self.dimensions.cells_x);
            GridLine {
                from: LatLng::new(spec.south, longitude),
                to: LatLng::new(spec.north, longitude),
            }
        });
        let rows = (0..=self.dimensions.cells_y).map(|j| {
            let latitude = self.line_position(spec.south, spec.north, height, j, self.dimensions.cells_y);
            GridLine {
                from: LatLng::new(latitude, spec.west),
                to: LatLng::new(latitude, spec.east),
            }
        });
        columns.chain(rows).collect()
    }

    // The far boundary is taken verbatim so the last line never drifts off the area edge.
    fn line_position(&self, low: f64, high: f64, step: f64, line: u32, cells: u32) -> f64 {
        if line >= cells {
            high
        } else {
            low + step * line as f64
        }
    }

    // Outer boundaries are excluded; an internal line belongs to the bin above it. Both
    // tests compare degrees against the lines as `line_position` draws them.
    fn bin_index(&self, value: f64, low: f64, high: f64, cells: u32) -> Option<i32> {
        if cells == 0 || value.is_nan() {
            return None;
        }
        if value <= low || same(value, low) || value >= high || same(value, high) {
            return None;
        }

        let step = (high - low) / cells as f64;
        let floored = ((value - low) / step).floor();
        let mut index = if floored < 0.0 { 0 } else { (floored as u32).min(cells - 1) };
        if index + 1 < cells && same(value, self.line_position(low, high, step, index + 1, cells)) {
            index += 1;
        }
        Some(index as i32)
    }
}
