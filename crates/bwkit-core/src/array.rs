//! NdArray - Dense N-dimensional array
//!
//! `NdArray<T>` is the input and output buffer of every kernel: binary
//! images come in as `NdArray<T: Sample>`, label images go out as
//! `NdArray<u32>` and distance maps as `NdArray<f32>`.
//!
//! # Examples
//!
//! ```
//! use bwkit_core::NdArray;
//!
//! let mut array = NdArray::from_rows(&[[0u8, 1, 0], [1, 1, 0]]).unwrap();
//! assert_eq!(array.dims(), &[2, 3]);
//!
//! array.set(&[1, 2], 7).unwrap();
//! assert_eq!(array.get(&[1, 2]), Some(&7));
//! ```

use crate::error::{Error, Result};
use crate::sample::Sample;
use crate::shape::Shape;

/// Dense N-dimensional array
///
/// # Memory Layout
///
/// Data is stored in row-major order with no padding. The element at
/// `coords` is at index `shape.index_of(coords)`.
#[derive(Debug, Clone, PartialEq)]
pub struct NdArray<T> {
    shape: Shape,
    data: Vec<T>,
}

impl<T: Clone> NdArray<T> {
    /// Create an array with every element set to `value`
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidShape`] if `dims` is empty or contains 0.
    pub fn new_with_value(dims: &[usize], value: T) -> Result<Self> {
        let shape = Shape::new(dims)?;
        let data = vec![value; shape.numel()];
        Ok(Self { shape, data })
    }

    /// Create a matrix from a list of equally long rows
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidShape`] for no rows or empty rows and
    /// [`Error::RaggedRows`] if the rows differ in length.
    pub fn from_rows<R: AsRef<[T]>>(rows: &[R]) -> Result<Self> {
        let cols = rows.first().map_or(0, |row| row.as_ref().len());
        let shape = Shape::new([rows.len(), cols])?;

        let mut data = Vec::with_capacity(shape.numel());
        for (row, values) in rows.iter().enumerate() {
            let values = values.as_ref();
            if values.len() != cols {
                return Err(Error::RaggedRows {
                    row,
                    expected: cols,
                    actual: values.len(),
                });
            }
            data.extend_from_slice(values);
        }

        Ok(Self { shape, data })
    }

    /// Copy a matrix out as a list of rows
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotTwoDimensional`] for other dimensionalities.
    pub fn to_rows(&self) -> Result<Vec<Vec<T>>> {
        let (_, cols) = self
            .shape
            .as_2d()
            .ok_or(Error::NotTwoDimensional(self.ndim()))?;
        Ok(self.data.chunks(cols).map(<[T]>::to_vec).collect())
    }

    /// Set every element to `value`
    pub fn fill(&mut self, value: T) {
        self.data.fill(value);
    }
}

impl<T: Clone + Default> NdArray<T> {
    /// Create an array of default-valued elements
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidShape`] if `dims` is empty or contains 0.
    pub fn zeros(dims: &[usize]) -> Result<Self> {
        Self::new_with_value(dims, T::default())
    }
}

impl<T> NdArray<T> {
    /// Wrap existing row-major data
    ///
    /// # Errors
    ///
    /// Returns an error if the shape is invalid or `data.len()` does not
    /// match the number of elements.
    pub fn from_vec(dims: &[usize], data: Vec<T>) -> Result<Self> {
        let shape = Shape::new(dims)?;
        Self::from_shape_vec(shape, data)
    }

    /// Wrap existing row-major data with an already validated shape
    ///
    /// # Errors
    ///
    /// Returns [`Error::DataLength`] if `data.len()` does not match.
    pub fn from_shape_vec(shape: Shape, data: Vec<T>) -> Result<Self> {
        let expected = shape.numel();
        if data.len() != expected {
            return Err(Error::DataLength {
                dims: shape.dims().to_vec(),
                expected,
                actual: data.len(),
            });
        }
        Ok(Self { shape, data })
    }

    /// Array shape
    #[inline]
    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    /// Axis extents
    #[inline]
    pub fn dims(&self) -> &[usize] {
        self.shape.dims()
    }

    /// Number of axes
    #[inline]
    pub fn ndim(&self) -> usize {
        self.shape.ndim()
    }

    /// Number of elements
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Always `false`; shapes never contain a zero-length axis
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Raw row-major data
    #[inline]
    pub fn data(&self) -> &[T] {
        &self.data
    }

    /// Mutable raw row-major data
    #[inline]
    pub fn data_mut(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Consume the array, returning its row-major data
    pub fn into_data(self) -> Vec<T> {
        self.data
    }

    /// Element at `coords`, or `None` if out of bounds
    #[inline]
    pub fn get(&self, coords: &[usize]) -> Option<&T> {
        self.shape.index_of(coords).map(|idx| &self.data[idx])
    }

    /// Overwrite the element at `coords`
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] if `coords` is out of range.
    pub fn set(&mut self, coords: &[usize], value: T) -> Result<()> {
        let idx = self
            .shape
            .index_of(coords)
            .ok_or_else(|| Error::IndexOutOfBounds {
                index: coords.to_vec(),
                dims: self.dims().to_vec(),
            })?;
        self.data[idx] = value;
        Ok(())
    }

    /// Apply `f` to every element, keeping the shape
    pub fn map<U>(&self, f: impl FnMut(&T) -> U) -> NdArray<U> {
        NdArray {
            shape: self.shape.clone(),
            data: self.data.iter().map(f).collect(),
        }
    }

    /// Same data viewed with another shape of equal size
    ///
    /// # Errors
    ///
    /// Returns an error if the new shape is invalid or holds a different
    /// number of elements.
    pub fn reshape(self, dims: &[usize]) -> Result<Self> {
        Self::from_vec(dims, self.data)
    }
}

impl<T: Sample> NdArray<T> {
    /// Foreground mask: `true` wherever the element is non-zero
    pub fn foreground(&self) -> NdArray<bool> {
        self.map(|&v| v.is_foreground())
    }

    /// Whether every element is exactly 0 or 1
    pub fn is_binary(&self) -> bool {
        self.data.iter().all(|&v| v.is_binary())
    }

    /// Number of foreground elements
    pub fn count_foreground(&self) -> usize {
        self.data.iter().filter(|&&v| v.is_foreground()).count()
    }
}
