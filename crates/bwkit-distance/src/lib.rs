//! bwkit-distance - Distance transforms for binary images
//!
//! - [`distance_transform`] runs repeated forward/backward sweeps that
//!   propagate nearest-foreground displacements until nothing changes. It
//!   supports the Euclidean, chessboard, cityblock and quasi-Euclidean
//!   metrics and can report the index of each pixel's nearest foreground
//!   pixel.
//! - [`exact_euclidean_distance`] computes the exact Euclidean transform by
//!   the separable lower-envelope method, in any number of dimensions.
//!
//! # Examples
//!
//! ```
//! use bwkit_core::NdArray;
//! use bwkit_distance::{DistanceOptions, Metric, distance_transform};
//!
//! let image = NdArray::from_rows(&[[0u8, 0, 0], [0, 1, 0], [0, 0, 0]]).unwrap();
//! let options = DistanceOptions::new()
//!     .with_metric(Metric::Chessboard)
//!     .with_index(true);
//! let map = distance_transform(&image, &options).unwrap();
//!
//! assert!(map.distances.data().iter().all(|&d| d <= 1.0));
//! assert!(map.nearest.unwrap().data().iter().all(|&i| i == 5));
//! ```

pub mod error;
pub mod exact;
pub mod metric;
mod sweep;
pub mod transform;

pub use error::{DistanceError, DistanceResult};
pub use exact::exact_euclidean_distance;
pub use metric::{Metric, Warning};
pub use transform::{DistanceMap, DistanceOptions, distance_transform};
