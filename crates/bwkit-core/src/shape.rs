//! Array shapes
//!
//! A [`Shape`] is the list of axis extents of a dense array. Elements are
//! stored in row-major order: the last axis varies fastest, so for a matrix
//! `[rows, cols]` the element at `(r, c)` lives at flat index `r * cols + c`.

use crate::error::{Error, Result};

/// Extents of a dense N-dimensional array
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Shape {
    dims: Vec<usize>,
}

impl Shape {
    /// Create a shape from its axis extents
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidShape`] if there are no axes or any axis
    /// has zero length.
    ///
    /// # Examples
    ///
    /// ```
    /// use bwkit_core::Shape;
    ///
    /// let shape = Shape::new([4, 5, 6]).unwrap();
    /// assert_eq!(shape.numel(), 120);
    /// assert_eq!(shape.strides(), vec![30, 6, 1]);
    /// ```
    pub fn new(dims: impl Into<Vec<usize>>) -> Result<Self> {
        let dims = dims.into();
        if dims.is_empty() || dims.contains(&0) {
            return Err(Error::InvalidShape(dims));
        }
        Ok(Self { dims })
    }

    /// Axis extents
    #[inline]
    pub fn dims(&self) -> &[usize] {
        &self.dims
    }

    /// Number of axes
    #[inline]
    pub fn ndim(&self) -> usize {
        self.dims.len()
    }

    /// Total number of elements
    #[inline]
    pub fn numel(&self) -> usize {
        self.dims.iter().product()
    }

    /// Flat-index distance between neighbours along each axis
    pub fn strides(&self) -> Vec<usize> {
        let mut strides = vec![1; self.dims.len()];
        for axis in (0..self.dims.len().saturating_sub(1)).rev() {
            strides[axis] = strides[axis + 1] * self.dims[axis + 1];
        }
        strides
    }

    /// `(rows, cols)` if this is a matrix
    pub fn as_2d(&self) -> Option<(usize, usize)> {
        match self.dims[..] {
            [rows, cols] => Some((rows, cols)),
            _ => None,
        }
    }

    /// Whether `coords` addresses an element of this shape
    pub fn contains(&self, coords: &[usize]) -> bool {
        coords.len() == self.dims.len() && coords.iter().zip(&self.dims).all(|(&c, &d)| c < d)
    }

    /// Flat index of `coords`, or `None` if out of bounds
    pub fn index_of(&self, coords: &[usize]) -> Option<usize> {
        if !self.contains(coords) {
            return None;
        }
        Some(
            coords
                .iter()
                .zip(&self.dims)
                .fold(0, |acc, (&c, &d)| acc * d + c),
        )
    }

    /// Coordinates of flat index `index`
    ///
    /// The caller must pass `index < self.numel()`.
    pub fn coords_of(&self, mut index: usize) -> Vec<usize> {
        let mut coords = vec![0; self.dims.len()];
        for axis in (0..self.dims.len()).rev() {
            coords[axis] = index % self.dims[axis];
            index /= self.dims[axis];
        }
        coords
    }

    /// Advance `coords` to the next element in row-major order.
    ///
    /// Returns `false` after wrapping past the last element.
    pub fn increment(&self, coords: &mut [usize]) -> bool {
        for axis in (0..self.dims.len()).rev() {
            coords[axis] += 1;
            if coords[axis] < self.dims[axis] {
                return true;
            }
            coords[axis] = 0;
        }
        false
    }

    /// This shape grown by `border` elements on both sides of every axis
    pub fn padded(&self, border: usize) -> Self {
        Self {
            dims: self.dims.iter().map(|&d| d + 2 * border).collect(),
        }
    }

    /// This shape with singleton axes prepended up to `ndim` axes
    ///
    /// Shapes that already have `ndim` or more axes are returned unchanged.
    pub fn with_leading_axes(&self, ndim: usize) -> Self {
        let missing = ndim.saturating_sub(self.dims.len());
        let mut dims = vec![1; missing];
        dims.extend_from_slice(&self.dims);
        Self { dims }
    }
}

impl std::fmt::Display for Shape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let parts: Vec<String> = self.dims.iter().map(ToString::to_string).collect();
        write!(f, "{}", parts.join("x"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_empty_and_zero_axes() {
        assert_eq!(Shape::new(Vec::new()), Err(Error::InvalidShape(vec![])));
        assert_eq!(Shape::new([3, 0]), Err(Error::InvalidShape(vec![3, 0])));
    }

    #[test]
    fn test_index_coords_agree() {
        let shape = Shape::new([2, 3, 4]).unwrap();
        for index in 0..shape.numel() {
            let coords = shape.coords_of(index);
            assert_eq!(shape.index_of(&coords), Some(index));
        }
        assert_eq!(shape.index_of(&[1, 3, 0]), None);
        assert_eq!(shape.index_of(&[1, 2]), None);
    }

    #[test]
    fn test_increment_walks_row_major() {
        let shape = Shape::new([2, 2]).unwrap();
        let mut coords = vec![0, 0];
        let mut seen = vec![coords.clone()];
        while shape.increment(&mut coords) {
            seen.push(coords.clone());
        }
        assert_eq!(seen, vec![vec![0, 0], vec![0, 1], vec![1, 0], vec![1, 1]]);
    }

    #[test]
    fn test_padded_and_leading_axes() {
        let shape = Shape::new([3, 4]).unwrap();
        assert_eq!(shape.padded(1).dims(), &[5, 6]);
        assert_eq!(shape.with_leading_axes(4).dims(), &[1, 1, 3, 4]);
        assert_eq!(shape.with_leading_axes(1).dims(), &[3, 4]);
        assert_eq!(shape.to_string(), "3x4");
    }
}
