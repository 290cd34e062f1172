//! bwkit - Binary image analysis kernels
//!
//! Connected-component labeling and distance transforms for binary arrays
//! of any dimensionality.
//!
//! # Overview
//!
//! - [`region`]: labeling of matrices, N-D arrays and sparse point sets
//!   under 4/6/8 or arbitrary mask connectivity
//! - [`distance`]: two-pass sweep distance transforms (euclidean,
//!   chessboard, cityblock, quasi-euclidean) and an exact N-D Euclidean
//!   transform
//! - [`host`]: name-based dispatch for scripting front ends
//!
//! # Example
//!
//! ```
//! use bwkit::NdArray;
//! use bwkit::distance::{DistanceOptions, distance_transform};
//! use bwkit::region::{ConnectivityType, label};
//!
//! let image = NdArray::from_rows(&[[1u8, 0, 0], [0, 0, 0], [0, 0, 1]]).unwrap();
//!
//! let labeling = label(&image, ConnectivityType::EightWay).unwrap();
//! assert_eq!(labeling.count, 2);
//!
//! let map = distance_transform(&image, &DistanceOptions::new()).unwrap();
//! let centre = map.distances.get(&[1, 1]).copied().unwrap();
//! assert!((centre - std::f32::consts::SQRT_2).abs() < 1e-6);
//! ```

// Re-export core types (primary data structures used everywhere)
pub use bwkit_core::*;

// Re-export domain crates as modules to avoid name conflicts
pub use bwkit_distance as distance;
pub use bwkit_region as region;

pub mod error;
pub mod host;

pub use error::{HostError, HostResult};
pub use host::{Host, Value, call};
