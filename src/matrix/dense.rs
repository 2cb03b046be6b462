//! Dense row-major matrix storage, access and structural reshaping
//!
//! A matrix is `width` columns by `height` rows backed by a single
//! standard-layout `Array2` of shape `(height, width)`. Any matrix with a
//! zero dimension is the canonical empty value.

use ndarray::{Array2, s};
use std::fmt;

use crate::io::error::{Cause, Result, dimension_error};
use crate::matrix::element::Scalar;

/// Ordered `(x, y)` pair used for coordinates and shape diagnostics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub struct Index2 {
    /// Column, or width when describing a shape
    pub x: usize,
    /// Row, or height when describing a shape
    pub y: usize,
}

impl Index2 {
    /// Create a new pair
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }
}

impl From<[usize; 2]> for Index2 {
    fn from([x, y]: [usize; 2]) -> Self {
        Self::new(x, y)
    }
}

impl fmt::Display for Index2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.x, self.y)
    }
}

/// Rectangular grid of numeric elements
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix<T> {
    pub(crate) cells: Array2<T>,
}

impl<T: Scalar> Default for Matrix<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T: Scalar> Matrix<T> {
    /// The canonical empty matrix
    pub fn empty() -> Self {
        Self {
            cells: Array2::zeros((0, 0)),
        }
    }

    /// Zero-filled `width` by `height` matrix, empty if either is zero
    pub fn new(width: usize, height: usize) -> Self {
        if width == 0 || height == 0 {
            return Self::empty();
        }
        Self {
            cells: Array2::zeros((height, width)),
        }
    }

    /// Matrix filled row-major from `values`
    ///
    /// Missing trailing values stay zero and surplus values are ignored.
    pub fn from_values<I>(width: usize, height: usize, values: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let mut matrix = Self::new(width, height);
        for (cell, value) in matrix.cells.iter_mut().zip(values) {
            *cell = value;
        }
        matrix
    }

    /// Wrap an `ndarray` array of shape `(rows, cols)`
    pub fn from_array(array: Array2<T>) -> Self {
        let (rows, cols) = array.dim();
        if rows == 0 || cols == 0 {
            return Self::empty();
        }
        let cells = if array.is_standard_layout() {
            array
        } else {
            array.as_standard_layout().into_owned()
        };
        Self { cells }
    }

    /// Unwrap into the backing array of shape `(height, width)`
    pub fn into_array(self) -> Array2<T> {
        self.cells
    }

    /// Borrow the backing array of shape `(height, width)`
    pub const fn as_array(&self) -> &Array2<T> {
        &self.cells
    }

    /// `n` by `n` identity matrix
    pub fn identity(n: usize) -> Self {
        let mut matrix = Self::new(n, n);
        for i in 0..n {
            if let Some(cell) = matrix.cells.get_mut([i, i]) {
                *cell = T::one();
            }
        }
        matrix
    }

    /// `width` by `height` matrix with every element set to `value`
    pub fn uniform(width: usize, height: usize, value: T) -> Self {
        if width == 0 || height == 0 {
            return Self::empty();
        }
        Self {
            cells: Array2::from_elem((height, width), value),
        }
    }

    /// Number of columns
    pub fn width(&self) -> usize {
        self.cells.ncols()
    }

    /// Number of rows
    pub fn height(&self) -> usize {
        self.cells.nrows()
    }

    /// Shape as `(width, height)`
    pub fn dims(&self) -> Index2 {
        Index2::new(self.width(), self.height())
    }

    /// Number of stored elements
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether either dimension is zero
    pub fn is_empty(&self) -> bool {
        self.width() == 0 || self.height() == 0
    }

    /// Elements in row-major order
    pub fn values(&self) -> impl Iterator<Item = T> + '_ {
        self.cells.iter().copied()
    }

    /// Row-major copy of the elements
    pub fn to_vec(&self) -> Vec<T> {
        self.values().collect()
    }

    pub(crate) fn value_or_zero(&self, x: usize, y: usize) -> T {
        self.cells.get([y, x]).copied().unwrap_or_else(T::zero)
    }

    /// Element at `(x, y)` if inside the matrix
    pub fn get(&self, x: usize, y: usize) -> Option<T> {
        self.cells.get([y, x]).copied()
    }

    /// Element at `(x, y)`
    ///
    /// # Errors
    ///
    /// Returns `OutOfBounds` if the coordinate is outside the matrix
    pub fn at(&self, x: usize, y: usize) -> Result<T> {
        self.get(x, y).ok_or_else(|| {
            dimension_error("Matrix::at", vec![Index2::new(x, y)], Cause::OutOfBounds)
        })
    }

    /// Overwrite the element at `(x, y)`
    ///
    /// # Errors
    ///
    /// Returns `OutOfBounds` if the coordinate is outside the matrix
    pub fn assign(&mut self, x: usize, y: usize, value: T) -> Result<()> {
        let cell = self.cells.get_mut([y, x]).ok_or_else(|| {
            dimension_error(
                "Matrix::assign",
                vec![Index2::new(x, y)],
                Cause::OutOfBounds,
            )
        })?;
        *cell = value;
        Ok(())
    }

    /// Copy of row `y`
    ///
    /// # Errors
    ///
    /// Returns `OutOfBounds` if `y` is not a row index
    pub fn row(&self, y: usize) -> Result<Vec<T>> {
        if y >= self.height() {
            return Err(dimension_error(
                "Matrix::row",
                vec![Index2::new(0, y), self.dims()],
                Cause::OutOfBounds,
            ));
        }
        Ok(self.cells.row(y).to_vec())
    }

    /// Copy of column `x`
    ///
    /// # Errors
    ///
    /// Returns `OutOfBounds` if `x` is not a column index
    pub fn column(&self, x: usize) -> Result<Vec<T>> {
        if x >= self.width() {
            return Err(dimension_error(
                "Matrix::column",
                vec![Index2::new(x, 0), self.dims()],
                Cause::OutOfBounds,
            ));
        }
        Ok(self.cells.column(x).to_vec())
    }

    /// Lazy iteration over every `dx`-th column of every `dy`-th row
    ///
    /// # Errors
    ///
    /// Returns `InvalidStep` if either step is zero
    pub fn elements(&self, dx: usize, dy: usize) -> Result<Elements<'_, T>> {
        check_steps("Matrix::elements", dx, dy)?;
        Ok(Elements {
            matrix: self,
            dx,
            dy,
            x: 0,
            y: 0,
        })
    }

    /// Downsample by keeping every `dx`-th column of every `dy`-th row
    ///
    /// # Errors
    ///
    /// Returns `InvalidStep` if either step is zero
    pub fn step(&self, dx: usize, dy: usize) -> Result<Self> {
        check_steps("Matrix::step", dx, dy)?;
        if self.is_empty() {
            return Ok(Self::empty());
        }
        let width = (self.width() - 1) / dx + 1;
        let height = (self.height() - 1) / dy + 1;
        Ok(Self::from_values(
            width,
            height,
            self.elements(dx, dy)?.map(|(_, value)| value),
        ))
    }

    /// Copy of the half-open region `[x0, x1) × [y0, y1)`
    ///
    /// # Errors
    ///
    /// Returns `OutOfBounds` if the region is inverted, empty or exceeds the matrix
    pub fn sub_matrix(&self, x0: usize, y0: usize, x1: usize, y1: usize) -> Result<Self> {
        if x0 >= x1 || x1 > self.width() || y0 >= y1 || y1 > self.height() {
            return Err(dimension_error(
                "Matrix::sub_matrix",
                vec![Index2::new(x0, y0), Index2::new(x1, y1)],
                Cause::OutOfBounds,
            ));
        }
        Ok(Self::from_array(
            self.cells.slice(s![y0..y1, x0..x1]).to_owned(),
        ))
    }

    /// Lazy iteration over `width` by `height` windows advancing by `(dx, dy)`
    ///
    /// Every window whose top-left corner keeps it fully inside the matrix is
    /// visited once, row by row. The iterator is `Clone`, so a copy taken
    /// before consumption restarts the sequence.
    ///
    /// # Errors
    ///
    /// Returns `InvalidStep` if a step is zero and `OutOfBounds` if the window
    /// has a zero dimension
    pub fn windows(
        &self,
        dx: usize,
        dy: usize,
        width: usize,
        height: usize,
    ) -> Result<Windows<'_, T>> {
        check_steps("Matrix::windows", dx, dy)?;
        if width == 0 || height == 0 {
            return Err(dimension_error(
                "Matrix::windows",
                vec![Index2::new(width, height)],
                Cause::OutOfBounds,
            ));
        }
        Ok(Windows {
            matrix: self,
            dx,
            dy,
            width,
            height,
            x: 0,
            y: 0,
        })
    }

    /// Resize to `width` by `height`, zero filling or cropping around an anchor
    ///
    /// Anchors are numbered row-major on a 3x3 grid: `0` top-left, `4`
    /// centre, `8` bottom-right. Anything else falls back to top-left.
    pub fn expand(&self, width: usize, height: usize, anchor: usize) -> Self {
        let anchor = if anchor >= 9 { 0 } else { anchor };
        let mut expanded = Self::new(width, height);
        let offset = |target: usize, source: usize, slot: usize| -> isize {
            let gap = target as isize - source as isize;
            match slot {
                0 => 0,
                1 => gap / 2,
                _ => gap,
            }
        };
        let ox = offset(width, self.width(), anchor % 3);
        let oy = offset(height, self.height(), anchor / 3);

        for ((row, col), &value) in self.cells.indexed_iter() {
            let target_row = row as isize + oy;
            let target_col = col as isize + ox;
            if target_row < 0 || target_col < 0 {
                continue;
            }
            if let Some(cell) = expanded
                .cells
                .get_mut([target_row as usize, target_col as usize])
            {
                *cell = value;
            }
        }
        expanded
    }

    /// Transpose into a `height` by `width` matrix
    pub fn transpose(&self) -> Self {
        Self::from_array(self.cells.t().to_owned())
    }

    /// Apply `f` to every element
    pub fn map<U, F>(&self, f: F) -> Matrix<U>
    where
        U: Scalar,
        F: FnMut(T) -> U,
    {
        Matrix::from_array(self.cells.mapv(f))
    }
}

pub(crate) fn check_steps(operation: &'static str, dx: usize, dy: usize) -> Result<()> {
    if dx == 0 || dy == 0 {
        return Err(dimension_error(
            operation,
            vec![Index2::new(dx, dy)],
            Cause::InvalidStep,
        ));
    }
    Ok(())
}

/// Stepped element iterator returned by [`Matrix::elements`]
#[derive(Debug, Clone)]
pub struct Elements<'a, T> {
    matrix: &'a Matrix<T>,
    dx: usize,
    dy: usize,
    x: usize,
    y: usize,
}

impl<T: Scalar> Iterator for Elements<'_, T> {
    type Item = (Index2, T);

    fn next(&mut self) -> Option<Self::Item> {
        if self.matrix.is_empty() || self.y >= self.matrix.height() {
            return None;
        }
        let position = Index2::new(self.x, self.y);
        let value = self.matrix.get(self.x, self.y)?;
        self.x += self.dx;
        if self.x >= self.matrix.width() {
            self.x = 0;
            self.y += self.dy;
        }
        Some((position, value))
    }
}

/// Sliding window iterator returned by [`Matrix::windows`]
#[derive(Debug, Clone)]
pub struct Windows<'a, T> {
    matrix: &'a Matrix<T>,
    dx: usize,
    dy: usize,
    width: usize,
    height: usize,
    x: usize,
    y: usize,
}

impl<T: Scalar> Iterator for Windows<'_, T> {
    type Item = (Index2, Matrix<T>);

    fn next(&mut self) -> Option<Self::Item> {
        if self.width > self.matrix.width() || self.height > self.matrix.height() {
            return None;
        }
        let last_x = self.matrix.width() - self.width;
        let last_y = self.matrix.height() - self.height;
        if self.y > last_y {
            return None;
        }
        let position = Index2::new(self.x, self.y);
        let window = self
            .matrix
            .sub_matrix(
                self.x,
                self.y,
                self.x + self.width,
                self.y + self.height,
            )
            .ok()?;
        self.x += self.dx;
        if self.x > last_x {
            self.x = 0;
            self.y += self.dy;
        }
        Some((position, window))
    }
}
