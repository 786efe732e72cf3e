//! 2D vector/point aliases, polygon measures, and the pixelated-field grid
//! specification.

use nalgebra::{Point2, Vector2};

use crate::error::Error;

/// A 2D force, field sample, or displacement.
pub type Vec2 = Vector2<f64>;

/// A 2D vertex position.
pub type Pos2 = Point2<f64>;

pub fn line_length(points: &[Pos2; 2]) -> f64 {
    Vector2::new(points[1].x - points[0].x, points[1].y - points[0].y).norm()
}

/// Rotated counter-clockwise and normalized.
pub fn line_normal(points: &[Pos2; 2]) -> Vec2 {
    Vector2::new(points[0].y - points[1].y, points[1].x - points[0].x).normalize()
}

/// Signed area of a simple polygon via the shoelace formula. Positive for
/// counter-clockwise winding.
///
/// # Example
///
/// ```rust
/// use vertex_model_forces::geometry::{polygon_signed_area, Pos2};
///
/// let square = [
///     Pos2::new(0.0, 0.0),
///     Pos2::new(1.0, 0.0),
///     Pos2::new(1.0, 1.0),
///     Pos2::new(0.0, 1.0),
/// ];
/// assert!((polygon_signed_area(&square) - 1.0).abs() < 1e-12);
/// ```
pub fn polygon_signed_area(vertices: &[Pos2]) -> f64 {
    let n = vertices.len();
    let mut sum = 0.0;
    for i in 0..n {
        let p = vertices[i];
        let q = vertices[(i + 1) % n];
        sum += p.x * q.y - q.x * p.y;
    }
    0.5 * sum
}

/// Unsigned area of a simple polygon.
pub fn polygon_area(vertices: &[Pos2]) -> f64 {
    polygon_signed_area(vertices).abs()
}

/// Perimeter of a (not necessarily closed-as-given) polygon: sum of the
/// lengths of the cyclic edges `v[i] -> v[i+1]`.
pub fn polygon_perimeter(vertices: &[Pos2]) -> f64 {
    let n = vertices.len();
    (0..n)
        .map(|i| line_length(&[vertices[i], vertices[(i + 1) % n]]))
        .sum()
}

/// Integer coordinate of a pixel in a [`GridSpec`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct GridCoord {
    pub i: i32,
    pub j: i32,
}

impl GridCoord {
    pub fn new(i: i32, j: i32) -> Self {
        Self { i, j }
    }
}

/// A rectilinear grid of field samples.
///
/// Pixel `(i, j)` occupies
/// `[origin_x + i*spacing_x, origin_x + (i+1)*spacing_x) x
///  [origin_y + j*spacing_y, origin_y + (j+1)*spacing_y)`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct GridSpec {
    pub origin_x: f64,
    pub origin_y: f64,
    pub spacing_x: f64,
    pub spacing_y: f64,
    pub ncells_x: usize,
    pub ncells_y: usize,
}

impl GridSpec {
    pub fn new(
        origin_x: f64,
        origin_y: f64,
        spacing_x: f64,
        spacing_y: f64,
        ncells_x: usize,
        ncells_y: usize,
    ) -> Result<Self, Error> {
        if spacing_x <= 0.0 || spacing_y <= 0.0 {
            return Err(Error::InvalidGridSpacing {
                spacing_x,
                spacing_y,
            });
        }
        if ncells_x == 0 || ncells_y == 0 {
            return Err(Error::InvalidGridCellCount {
                ncells_x,
                ncells_y,
            });
        }
        Ok(Self {
            origin_x,
            origin_y,
            spacing_x,
            spacing_y,
            ncells_x,
            ncells_y,
        })
    }

    /// The lower-left corner of pixel `gc`, in world coordinates.
    pub fn vec_of(&self, gc: GridCoord) -> Pos2 {
        Pos2::new(
            self.origin_x + gc.i as f64 * self.spacing_x,
            self.origin_y + gc.j as f64 * self.spacing_y,
        )
    }

    /// The pixel containing world position `v`. Points exactly on a grid
    /// line map to the pixel to their upper-right, since this uses `floor`.
    pub fn grid_of(&self, v: Pos2) -> GridCoord {
        GridCoord::new(
            ((v.x - self.origin_x) / self.spacing_x).floor() as i32,
            ((v.y - self.origin_y) / self.spacing_y).floor() as i32,
        )
    }

    pub fn contains(&self, gc: GridCoord) -> bool {
        gc.i >= 0 && (gc.i as usize) < self.ncells_x && gc.j >= 0 && (gc.j as usize) < self.ncells_y
    }

    /// Row-major flattened index `i * ncells_y + j`.
    pub fn flat_index(&self, gc: GridCoord) -> Option<usize> {
        if !self.contains(gc) {
            return None;
        }
        Some(gc.i as usize * self.ncells_y + gc.j as usize)
    }

    pub fn len(&self) -> usize {
        self.ncells_x * self.ncells_y
    }

    pub fn is_empty(&self) -> bool {
        false
    }
}
