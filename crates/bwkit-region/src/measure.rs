//! Per-component measurements on label images

use bwkit_core::NdArray;

use crate::error::{RegionError, RegionResult};

/// Inclusive bounding box of a component
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentBounds {
    /// Smallest coordinate along each axis
    pub min: Vec<usize>,
    /// Largest coordinate along each axis
    pub max: Vec<usize>,
}

impl ComponentBounds {
    /// Extent along each axis
    pub fn extent(&self) -> Vec<usize> {
        self.min
            .iter()
            .zip(&self.max)
            .map(|(&lo, &hi)| hi - lo + 1)
            .collect()
    }
}

fn check_label(label: u32, count: u32) -> RegionResult<()> {
    if label > count {
        return Err(RegionError::InvalidParameters(format!(
            "label {label} exceeds component count {count}"
        )));
    }
    Ok(())
}

/// Number of pixels in each component
///
/// Entry `i` holds the size of label `i + 1`.
///
/// # Errors
///
/// Returns [`RegionError::InvalidParameters`] if a label exceeds `count`.
pub fn component_sizes(labels: &NdArray<u32>, count: u32) -> RegionResult<Vec<usize>> {
    let mut sizes = vec![0usize; count as usize];
    for &label in labels.data() {
        check_label(label, count)?;
        if label > 0 {
            sizes[label as usize - 1] += 1;
        }
    }
    Ok(sizes)
}

/// Bounding box of each component
///
/// Entry `i` holds the box of label `i + 1`.
///
/// # Errors
///
/// Returns [`RegionError::InvalidParameters`] if a label exceeds `count` or
/// a label in `1..=count` has no pixels.
pub fn component_bounds(
    labels: &NdArray<u32>,
    count: u32,
) -> RegionResult<Vec<ComponentBounds>> {
    let shape = labels.shape();
    let mut bounds: Vec<Option<ComponentBounds>> = vec![None; count as usize];

    let mut coords = vec![0usize; shape.ndim()];
    for &label in labels.data() {
        check_label(label, count)?;
        if label > 0 {
            let slot = label as usize - 1;
            match bounds[slot].as_mut() {
                Some(b) => {
                    for (axis, &c) in coords.iter().enumerate() {
                        b.min[axis] = b.min[axis].min(c);
                        b.max[axis] = b.max[axis].max(c);
                    }
                }
                None => {
                    bounds[slot] = Some(ComponentBounds {
                        min: coords.clone(),
                        max: coords.clone(),
                    });
                }
            }
        }
        shape.increment(&mut coords);
    }

    bounds
        .into_iter()
        .enumerate()
        .map(|(i, b)| {
            b.ok_or_else(|| {
                RegionError::InvalidParameters(format!("label {} has no pixels", i + 1))
            })
        })
        .collect()
}
