use crate::error::{Error, Result};

/// Bounding box in page space with a bottom-left origin.
///
/// Coordinates follow the PDF user-space convention:
/// - `x0`: left edge
/// - `y0`: bottom edge
/// - `x1`: right edge
/// - `y1`: top edge (y grows upward)
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BBox {
    pub x0: f64,
    pub y0: f64,
    pub x1: f64,
    pub y1: f64,
}

impl BBox {
    pub fn new(x0: f64, y0: f64, x1: f64, y1: f64) -> Self {
        Self { x0, y0, x1, y1 }
    }

    /// Create a bounding box, rejecting inverted coordinates.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidCoordinates`] if `x1 < x0` or `y1 < y0`.
    pub fn try_new(x0: f64, y0: f64, x1: f64, y1: f64) -> Result<Self> {
        if x1 < x0 {
            return Err(Error::InvalidCoordinates(format!(
                "x1 is smaller than x0 ({x1}<{x0})"
            )));
        }
        if y1 < y0 {
            return Err(Error::InvalidCoordinates(format!(
                "y1 is smaller than y0 ({y1}<{y0})"
            )));
        }
        Ok(Self::new(x0, y0, x1, y1))
    }

    /// Width of the bounding box.
    pub fn width(&self) -> f64 {
        self.x1 - self.x0
    }

    /// Height of the bounding box.
    pub fn height(&self) -> f64 {
        self.y1 - self.y0
    }

    /// Compute the union of two bounding boxes.
    pub fn union(&self, other: &BBox) -> BBox {
        BBox {
            x0: self.x0.min(other.x0),
            y0: self.y0.min(other.y0),
            x1: self.x1.max(other.x1),
            y1: self.y1.max(other.y1),
        }
    }

    /// Returns `true` if the two boxes share at least one point.
    ///
    /// Intervals are closed, so boxes that merely touch along an edge overlap.
    pub fn overlaps(&self, other: &BBox) -> bool {
        self.x0 <= other.x1 && other.x0 <= self.x1 && self.y0 <= other.y1 && other.y0 <= self.y1
    }

    /// Returns `true` if every edge of `self` lies inside `other`.
    pub fn within(&self, other: &BBox) -> bool {
        self.x0 >= other.x0 && self.x1 <= other.x1 && self.y0 >= other.y0 && self.y1 <= other.y1
    }

    /// Returns `true` if the point lies inside the box or on its boundary.
    pub fn contains_point(&self, x: f64, y: f64) -> bool {
        self.x0 <= x && x <= self.x1 && self.y0 <= y && y <= self.y1
    }

    /// The y-range of this box shrunk by `tolerance` on both sides.
    ///
    /// The tolerance is capped at half the height so the band never inverts.
    pub fn row_band(&self, tolerance: f64) -> (f64, f64) {
        let tolerance = tolerance.min(self.height() / 2.0);
        (self.y0 + tolerance, self.y1 - tolerance)
    }

    /// The x-range of this box shrunk by `tolerance` on both sides.
    ///
    /// The tolerance is capped at half the width so the band never inverts.
    pub fn column_band(&self, tolerance: f64) -> (f64, f64) {
        let tolerance = tolerance.min(self.width() / 2.0);
        (self.x0 + tolerance, self.x1 - tolerance)
    }

    /// Returns `true` if `self` overlaps the horizontal band of `reference`.
    ///
    /// Boxes that only share an edge, such as vertically stacked table cells,
    /// are not in line.
    pub fn is_horizontally_in_line_with(&self, reference: &BBox, tolerance: f64) -> bool {
        let (bottom, top) = reference.row_band(tolerance);
        spans_meet((self.y0, self.y1), (bottom, top))
    }

    /// Returns `true` if `self` overlaps the vertical band of `reference`.
    ///
    /// Boxes that only share an edge are not in line.
    pub fn is_vertically_in_line_with(&self, reference: &BBox, tolerance: f64) -> bool {
        let (left, right) = reference.column_band(tolerance);
        spans_meet((self.x0, self.x1), (left, right))
    }

    /// Returns `true` if `self` reaches the region extending rightwards from the
    /// right edge of `reference`, within its horizontal band.
    pub fn is_right_of(&self, reference: &BBox, tolerance: f64) -> bool {
        self.x1 >= reference.x1 && self.is_horizontally_in_line_with(reference, tolerance)
    }

    /// Returns `true` if `self` reaches the region extending leftwards from the
    /// left edge of `reference`, within its horizontal band.
    pub fn is_left_of(&self, reference: &BBox, tolerance: f64) -> bool {
        self.x0 <= reference.x0 && self.is_horizontally_in_line_with(reference, tolerance)
    }

    /// Returns `true` if `self` reaches the region extending upwards from the
    /// top edge of `reference`, within its vertical band.
    pub fn is_above(&self, reference: &BBox, tolerance: f64) -> bool {
        self.y1 >= reference.y1 && self.is_vertically_in_line_with(reference, tolerance)
    }

    /// Returns `true` if `self` reaches the region extending downwards from the
    /// bottom edge of `reference`, within its vertical band.
    pub fn is_below(&self, reference: &BBox, tolerance: f64) -> bool {
        self.y0 <= reference.y0 && self.is_vertically_in_line_with(reference, tolerance)
    }
}

/// Whether two intervals share more than an endpoint. A degenerate interval
/// (a point) meets any interval containing it.
fn spans_meet((a0, a1): (f64, f64), (b0, b1): (f64, f64)) -> bool {
    if a0 < a1 && b0 < b1 {
        a0 < b1 && b0 < a1
    } else {
        a0 <= b1 && b0 <= a1
    }
}
