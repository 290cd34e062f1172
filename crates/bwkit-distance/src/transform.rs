//! Distance transform entry point
//!
//! Validates the input, runs the sweep engine for the selected metric and
//! packages distances (and optionally nearest-foreground indices) with the
//! input's shape.

use bwkit_core::{NdArray, Sample};

use crate::error::{DistanceError, DistanceResult};
use crate::metric::{Metric, Warning};
use crate::sweep::{
    Chessboard, Cityblock, Cost, Displacements, MAX_EXTENT, QuasiEuclidean, SquaredEuclidean,
    propagate,
};

/// Options for [`distance_transform`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DistanceOptions {
    /// Metric (default: Euclidean)
    pub metric: Metric,
    /// Also report the nearest foreground pixel of every pixel
    pub with_index: bool,
}

impl DistanceOptions {
    /// Euclidean distances without indices
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the metric
    pub fn with_metric(mut self, metric: Metric) -> Self {
        self.metric = metric;
        self
    }

    /// Request the nearest-index map
    pub fn with_index(mut self, with_index: bool) -> Self {
        self.with_index = with_index;
        self
    }
}

/// Result of a distance transform
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceMap {
    /// Distance to the nearest foreground pixel; 0 on foreground, `+∞`
    /// everywhere if the image has no foreground
    pub distances: NdArray<f32>,
    /// 1-based row-major index of the nearest foreground pixel; 0 if the
    /// image has no foreground. Present only when requested.
    pub nearest: Option<NdArray<u64>>,
    /// Sweeps run until convergence
    pub sweeps: usize,
    /// Advisory conditions encountered
    pub warnings: Vec<Warning>,
}

/// Distance from every pixel to the nearest foreground pixel
///
/// # Arguments
///
/// * `image` - Binary matrix; any non-zero element is foreground
/// * `options` - Metric and whether to compute nearest indices
///
/// # Errors
///
/// Returns [`DistanceError::UnsupportedDimensionality`] unless `image` is a
/// matrix, and [`DistanceError::ImageTooLarge`] if an extent exceeds
/// 2^24.
///
/// # Examples
///
/// ```
/// use bwkit_core::NdArray;
/// use bwkit_distance::{DistanceOptions, Metric, distance_transform};
///
/// let image = NdArray::from_rows(&[[0u8, 0, 1, 0]]).unwrap();
/// let options = DistanceOptions::new().with_metric(Metric::Cityblock);
/// let map = distance_transform(&image, &options).unwrap();
/// assert_eq!(map.distances.data(), &[2.0, 1.0, 0.0, 1.0]);
/// ```
pub fn distance_transform<T: Sample>(
    image: &NdArray<T>,
    options: &DistanceOptions,
) -> DistanceResult<DistanceMap> {
    let (rows, cols) = image
        .shape()
        .as_2d()
        .ok_or(DistanceError::UnsupportedDimensionality(image.ndim()))?;
    if rows > MAX_EXTENT || cols > MAX_EXTENT {
        return Err(DistanceError::ImageTooLarge { rows, cols });
    }

    let mut warnings = Vec::new();
    if !image.is_binary() {
        log::warn!("{}", Warning::NonBinaryInput);
        warnings.push(Warning::NonBinaryInput);
    }

    let foreground: Vec<bool> = image.data().iter().map(|v| v.is_foreground()).collect();
    let (distances, field) = match options.metric {
        Metric::Euclidean => run::<SquaredEuclidean>(&foreground, rows, cols),
        Metric::Chessboard => run::<Chessboard>(&foreground, rows, cols),
        Metric::Cityblock => run::<Cityblock>(&foreground, rows, cols),
        Metric::QuasiEuclidean => run::<QuasiEuclidean>(&foreground, rows, cols),
    };
    log::debug!(
        "distance_transform: {} metric on {} converged after {} sweeps",
        options.metric,
        image.shape(),
        field.sweeps
    );

    let nearest = if options.with_index {
        let index = (0..foreground.len())
            .map(|i| field.nearest(i).map_or(0, |n| n as u64 + 1))
            .collect();
        Some(NdArray::from_shape_vec(image.shape().clone(), index)?)
    } else {
        None
    };

    Ok(DistanceMap {
        distances: NdArray::from_shape_vec(image.shape().clone(), distances)?,
        nearest,
        sweeps: field.sweeps,
        warnings,
    })
}

fn run<C: Cost>(foreground: &[bool], rows: usize, cols: usize) -> (Vec<f32>, Displacements) {
    let field = propagate::<C>(foreground, rows, cols);
    let distances = (0..foreground.len())
        .map(|i| match field.get(i) {
            Some((dx, dy)) => C::finish(C::cost(dx, dy)),
            None => f32::INFINITY,
        })
        .collect();
    (distances, field)
}
