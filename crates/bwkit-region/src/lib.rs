//! bwkit-region - Connected-component labeling
//!
//! This crate provides:
//!
//! - **Connectivity descriptors** - Numeric codes (4, 6, 8, 18, 26) and
//!   validated N-dimensional neighbourhood masks
//! - **2-D labeling** - Single-pass fast path for 4-, 6- (hexagonal) and
//!   8-connectivity
//! - **N-D labeling** - Padded raster scan for any dimensionality and mask
//! - **Sparse labeling** - Components of a list of integer coordinates
//! - **Measurements** - Component sizes and bounding boxes
//!
//! # Examples
//!
//! ## Labeling a matrix
//!
//! ```
//! use bwkit_core::NdArray;
//! use bwkit_region::{ConnectivityType, label};
//!
//! let image = NdArray::from_rows(&[[1u8, 1, 0], [0, 0, 0], [0, 1, 1]]).unwrap();
//! let result = label(&image, ConnectivityType::FourWay).unwrap();
//! assert_eq!(result.count, 2);
//! ```
//!
//! ## Labeling a volume
//!
//! ```
//! use bwkit_core::NdArray;
//! use bwkit_region::{Connectivity, label_nd};
//!
//! let mut volume = NdArray::<u8>::zeros(&[3, 3, 3]).unwrap();
//! volume.set(&[0, 0, 0], 1).unwrap();
//! volume.set(&[1, 1, 1], 1).unwrap();
//!
//! let corners = label_nd(&volume, &Connectivity::from_code(26).unwrap()).unwrap();
//! assert_eq!(corners.count, 1);
//! let faces = label_nd(&volume, &Connectivity::from_code(6).unwrap()).unwrap();
//! assert_eq!(faces.count, 2);
//! ```

pub mod connectivity;
pub mod error;
pub mod label;
pub mod labeln;
pub mod measure;
pub mod points;
pub mod union_find;

pub use connectivity::{Connectivity, ConnectivityType, check_connectivity};
pub use error::{RegionError, RegionResult};
pub use label::{LabelOptions, Labeling, Warning, label, label_with_options};
pub use labeln::label_nd;
pub use measure::{ComponentBounds, component_bounds, component_sizes};
pub use points::{PointLabeling, label_points};
pub use union_find::{DisjointSet, KeyedDisjointSet};
