//! Half-open integer rectangles in pixel space

use std::fmt;

/// Rectangle covering `[min.x, max.x) × [min.y, max.y)`
///
/// Constructors keep `min <= max` on both axes; a rectangle with a zero
/// extent on either axis is empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rect {
    /// Inclusive top-left corner `[x, y]`
    pub min: [i32; 2],
    /// Exclusive bottom-right corner `[x, y]`
    pub max: [i32; 2],
}

impl Rect {
    /// Rectangle spanning two corners in any order
    pub const fn new(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        let (x0, x1) = if x0 <= x1 { (x0, x1) } else { (x1, x0) };
        let (y0, y1) = if y0 <= y1 { (y0, y1) } else { (y1, y0) };
        Self {
            min: [x0, y0],
            max: [x1, y1],
        }
    }

    /// Origin-anchored `width` by `height` rectangle
    pub fn from_size(width: usize, height: usize) -> Self {
        Self::new(0, 0, to_coord(width), to_coord(height))
    }

    /// Horizontal extent
    pub const fn width(&self) -> usize {
        self.max[0].abs_diff(self.min[0]) as usize
    }

    /// Vertical extent
    pub const fn height(&self) -> usize {
        self.max[1].abs_diff(self.min[1]) as usize
    }

    /// Number of pixels covered
    pub const fn area(&self) -> usize {
        self.width() * self.height()
    }

    /// Whether the rectangle covers no pixel
    pub const fn is_empty(&self) -> bool {
        self.min[0] >= self.max[0] || self.min[1] >= self.max[1]
    }

    /// Whether the pixel `(x, y)` lies inside
    pub const fn contains(&self, x: i32, y: i32) -> bool {
        self.min[0] <= x && x < self.max[0] && self.min[1] <= y && y < self.max[1]
    }

    /// Largest rectangle inside both, empty and anchored at `self.min` if disjoint
    pub fn intersect(&self, other: &Self) -> Self {
        let x0 = self.min[0].max(other.min[0]);
        let y0 = self.min[1].max(other.min[1]);
        let x1 = self.max[0].min(other.max[0]);
        let y1 = self.max[1].min(other.max[1]);
        if x0 >= x1 || y0 >= y1 {
            return Self {
                min: self.min,
                max: self.min,
            };
        }
        Self::new(x0, y0, x1, y1)
    }

    /// Same size moved so `min` is the origin
    pub const fn to_origin(&self) -> Self {
        Self {
            min: [0, 0],
            max: [
                self.max[0] - self.min[0],
                self.max[1] - self.min[1],
            ],
        }
    }

    /// Pixels in row-major order
    pub fn points(&self) -> impl Iterator<Item = (i32, i32)> + use<> {
        let [x0, y0] = self.min;
        let [x1, y1] = self.max;
        (y0..y1).flat_map(move |y| (x0..x1).map(move |x| (x, y)))
    }
}

impl fmt::Display for Rect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({},{})-({},{})",
            self.min[0], self.min[1], self.max[0], self.max[1]
        )
    }
}

/// Saturating `usize` to coordinate conversion
pub fn to_coord(v: usize) -> i32 {
    i32::try_from(v).unwrap_or(i32::MAX)
}
