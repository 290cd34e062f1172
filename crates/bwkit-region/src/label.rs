//! Connected-component labeling
//!
//! Two engines produce identical label images:
//!
//! - [`label`] is the 2-D fast path. It scans the image once in raster
//!   order, looks only at the already visited neighbours of each pixel and
//!   records label equivalences in a [`DisjointSet`] keyed by provisional
//!   label.
//! - [`crate::label_nd`] handles any dimensionality and any mask.
//!
//! [`label_with_options`] picks the fast path whenever the input is a
//! matrix and the connectivity is one of the planar 4/6/8 masks.
//!
//! Components are numbered `1..=count` in raster order of their first
//! pixel; background is 0.

use std::fmt;

use bwkit_core::{NdArray, Sample};

use crate::connectivity::{Connectivity, ConnectivityType};
use crate::error::{RegionError, RegionResult};
use crate::labeln::label_nd;
use crate::union_find::DisjointSet;

/// Advisory condition detected while labeling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Warning {
    /// Input held values other than 0 and 1; every non-zero value was
    /// treated as foreground
    NonBinaryInput,
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonBinaryInput => {
                write!(f, "input is not binary; non-zero values treated as foreground")
            }
        }
    }
}

/// Result of a labeling run
#[derive(Debug, Clone, PartialEq)]
pub struct Labeling {
    /// Label image with the input's shape: 0 for background, `1..=count`
    /// for foreground
    pub labels: NdArray<u32>,
    /// Number of components
    pub count: u32,
    /// Advisory conditions encountered
    pub warnings: Vec<Warning>,
}

/// Options for [`label_with_options`]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LabelOptions {
    /// Neighbourhood; `None` selects the maximal connectivity of the
    /// input's dimensionality
    pub connectivity: Option<Connectivity>,
}

impl LabelOptions {
    /// Options with the default connectivity
    pub fn new() -> Self {
        Self::default()
    }

    /// Use an explicit connectivity mask
    pub fn with_connectivity(mut self, connectivity: Connectivity) -> Self {
        self.connectivity = Some(connectivity);
        self
    }

    /// Use one of the codes 4, 6, 8, 18 or 26
    ///
    /// # Errors
    ///
    /// Returns [`RegionError::InvalidConnectivity`] for other codes.
    pub fn with_code(self, code: u32) -> RegionResult<Self> {
        Ok(self.with_connectivity(Connectivity::from_code(code)?))
    }

    /// Use a planar connectivity (the hexagonal rule for `SixWay`)
    pub fn with_type(self, connectivity: ConnectivityType) -> RegionResult<Self> {
        Ok(self.with_connectivity(connectivity.to_connectivity()?))
    }
}

/// Warnings raised by the input itself
pub(crate) fn input_warnings<T: Sample>(image: &NdArray<T>) -> Vec<Warning> {
    if image.is_binary() {
        Vec::new()
    } else {
        log::warn!("{}", Warning::NonBinaryInput);
        vec![Warning::NonBinaryInput]
    }
}

/// Label the connected components of a 2-D image
///
/// # Arguments
///
/// * `image` - Binary matrix; any non-zero element is foreground
/// * `connectivity` - Planar neighbourhood
///
/// # Errors
///
/// Returns [`RegionError::DimensionMismatch`] if `image` is not a matrix.
///
/// # Examples
///
/// ```
/// use bwkit_core::NdArray;
/// use bwkit_region::{ConnectivityType, label};
///
/// let image = NdArray::from_rows(&[[0u8, 1, 0], [0, 0, 0], [1, 0, 1]]).unwrap();
/// let result = label(&image, ConnectivityType::EightWay).unwrap();
/// assert_eq!(result.count, 3);
/// assert_eq!(result.labels.data(), &[0, 1, 0, 0, 0, 0, 2, 0, 3]);
/// ```
pub fn label<T: Sample>(
    image: &NdArray<T>,
    connectivity: ConnectivityType,
) -> RegionResult<Labeling> {
    let (rows, cols) = image
        .shape()
        .as_2d()
        .ok_or(RegionError::DimensionMismatch {
            mask: 2,
            image: image.ndim(),
        })?;
    let warnings = input_warnings(image);

    let (labels, count) = label_planar(image.data(), rows, cols, connectivity)?;
    log::debug!(
        "label: {count} components in {} ({}-connected)",
        image.shape(),
        connectivity.code()
    );

    Ok(Labeling {
        labels: NdArray::from_shape_vec(image.shape().clone(), labels)?,
        count,
        warnings,
    })
}

/// Label connected components with an optional explicit connectivity
///
/// # Errors
///
/// Returns [`RegionError::DimensionMismatch`] if the connectivity cannot be
/// broadcast to the input.
pub fn label_with_options<T: Sample>(
    image: &NdArray<T>,
    options: &LabelOptions,
) -> RegionResult<Labeling> {
    let connectivity = match &options.connectivity {
        Some(conn) => conn.broadcast_to(image.ndim())?,
        None => Connectivity::maximal(image.ndim())?,
    };

    if image.ndim() == 2 {
        if let Some(planar) = ConnectivityType::from_connectivity(&connectivity) {
            return label(image, planar);
        }
    }

    label_nd(image, &connectivity)
}

/// Single raster pass with provisional labels, then compaction
fn label_planar<T: Sample>(
    data: &[T],
    rows: usize,
    cols: usize,
    connectivity: ConnectivityType,
) -> RegionResult<(Vec<u32>, u32)> {
    let mut provisional = vec![0usize; data.len()];
    // Element 0 stands for background and never joins a set.
    let mut sets = DisjointSet::new(1);

    for row in 0..rows {
        for col in 0..cols {
            let idx = row * cols + col;
            if !data[idx].is_foreground() {
                continue;
            }

            let mut seen = [0usize; 4];
            if col > 0 {
                seen[0] = provisional[idx - 1];
            }
            if row > 0 {
                seen[1] = provisional[idx - cols];
                if col > 0 && connectivity != ConnectivityType::FourWay {
                    seen[2] = provisional[idx - cols - 1];
                }
                if col + 1 < cols && connectivity == ConnectivityType::EightWay {
                    seen[3] = provisional[idx - cols + 1];
                }
            }

            let mut roots = [0usize; 4];
            let mut n = 0;
            for &prov in seen.iter().filter(|&&p| p != 0) {
                roots[n] = sets.find(prov);
                n += 1;
            }

            provisional[idx] = match roots[..n].iter().min() {
                None => sets.make_set(),
                Some(&smallest) => {
                    for &root in &roots[..n] {
                        if root != smallest {
                            sets.union(smallest, root);
                        }
                    }
                    smallest
                }
            };
        }
    }

    // A root is never larger than the labels it represents, so its final
    // number is known by the time any member is visited.
    let total = sets.len();
    let mut final_label = vec![0u32; total];
    let mut count = 0u32;
    for prov in 1..total {
        let root = sets.find(prov);
        if root == prov {
            count = count
                .checked_add(1)
                .ok_or(RegionError::TooManyLabels(total - 1))?;
            final_label[prov] = count;
        } else {
            final_label[prov] = final_label[root];
        }
    }

    let labels = provisional.iter().map(|&p| final_label[p]).collect();
    Ok((labels, count))
}
