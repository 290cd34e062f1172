//! Conversions between [`NdArray`] and single-channel `image` buffers
//!
//! A `W x H` luma image maps to a `[H, W]` array with identical row-major
//! data, so kernels can run directly on buffers produced by the `image`
//! crate and hand their results back as images.

use image::{ImageBuffer, Luma, Primitive};

use crate::array::NdArray;
use crate::error::{Error, Result};

impl<P: Primitive> TryFrom<&ImageBuffer<Luma<P>, Vec<P>>> for NdArray<P> {
    type Error = Error;

    fn try_from(image: &ImageBuffer<Luma<P>, Vec<P>>) -> Result<Self> {
        let (width, height) = image.dimensions();
        NdArray::from_vec(&[height as usize, width as usize], image.as_raw().clone())
    }
}

impl<P: Primitive> NdArray<P> {
    /// Copy a matrix into a luma image buffer
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotTwoDimensional`] for non-matrix arrays and
    /// [`Error::InvalidParameter`] if an extent does not fit in `u32`.
    pub fn to_luma_image(&self) -> Result<ImageBuffer<Luma<P>, Vec<P>>> {
        let (rows, cols) = self
            .shape()
            .as_2d()
            .ok_or(Error::NotTwoDimensional(self.ndim()))?;
        let width = u32::try_from(cols)
            .map_err(|_| Error::InvalidParameter(format!("width {cols} exceeds u32")))?;
        let height = u32::try_from(rows)
            .map_err(|_| Error::InvalidParameter(format!("height {rows} exceeds u32")))?;

        ImageBuffer::from_raw(width, height, self.data().to_vec()).ok_or_else(|| {
            Error::InvalidParameter(format!("buffer does not fit a {width}x{height} image"))
        })
    }
}
