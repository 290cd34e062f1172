//! bwkit-core - Basic data structures for the bwkit kernels
//!
//! This crate provides the containers every kernel consumes and produces:
//!
//! - [`Shape`] - Axis extents and row-major index arithmetic
//! - [`NdArray`] - Dense N-dimensional array (binary inputs, label images,
//!   distance maps)
//! - [`Sample`] - Element types that can be read as foreground/background
//!
//! With the `image` feature (enabled by default) matrices convert to and
//! from `image::ImageBuffer<Luma<_>>`.

pub mod array;
pub mod error;
#[cfg(feature = "image")]
pub mod luma;
pub mod sample;
pub mod shape;

pub use array::NdArray;
pub use error::{Error, Result};
pub use sample::Sample;
pub use shape::Shape;
