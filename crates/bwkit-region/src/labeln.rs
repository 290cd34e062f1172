//! N-dimensional connected-component labeling
//!
//! The input is copied into a foreground mask padded by one background
//! element on every side, so every neighbour offset of an interior element
//! stays in bounds without per-axis checks. A raster scan unions each
//! foreground element with its already visited foreground neighbours; the
//! disjoint set is keyed directly by padded flat index.

use bwkit_core::{NdArray, Sample};

use crate::connectivity::Connectivity;
use crate::error::{RegionError, RegionResult};
use crate::label::{Labeling, input_warnings};
use crate::union_find::DisjointSet;

/// Label connected components of an array of any dimensionality
///
/// # Arguments
///
/// * `image` - Binary array; any non-zero element is foreground
/// * `connectivity` - Neighbourhood mask, broadcast to the input's
///   dimensionality
///
/// # Errors
///
/// Returns [`RegionError::DimensionMismatch`] if the mask has surplus
/// non-singleton axes.
pub fn label_nd<T: Sample>(
    image: &NdArray<T>,
    connectivity: &Connectivity,
) -> RegionResult<Labeling> {
    let conn = connectivity.broadcast_to(image.ndim())?;
    let warnings = input_warnings(image);

    let shape = image.shape();
    let padded = shape.padded(1);
    let strides = padded.strides();

    // Padded flat index of every input element, in raster order.
    let mut interior = Vec::with_capacity(image.len());
    let mut coords = vec![0usize; shape.ndim()];
    loop {
        let idx: usize = coords
            .iter()
            .zip(&strides)
            .map(|(&c, &s)| (c + 1) * s)
            .sum();
        interior.push(idx);
        if !shape.increment(&mut coords) {
            break;
        }
    }

    let mut foreground = vec![false; padded.numel()];
    for (&idx, value) in interior.iter().zip(image.data()) {
        foreground[idx] = value.is_foreground();
    }

    let offsets: Vec<isize> = conn
        .causal_deltas()
        .iter()
        .map(|delta| {
            delta
                .iter()
                .zip(&strides)
                .map(|(&d, &s)| d * s as isize)
                .sum()
        })
        .collect();

    let mut sets = DisjointSet::new(padded.numel());
    for &idx in &interior {
        if !foreground[idx] {
            continue;
        }
        for &offset in &offsets {
            let neighbour = idx.wrapping_add_signed(offset);
            if foreground[neighbour] {
                sets.union(idx, neighbour);
            }
        }
    }

    // Roots are the lowest padded index of their component, i.e. the
    // component's first element in raster order.
    let mut final_label = vec![0u32; padded.numel()];
    let mut count = 0u32;
    let mut labels = Vec::with_capacity(image.len());
    for &idx in &interior {
        if !foreground[idx] {
            labels.push(0);
            continue;
        }
        let root = sets.find(idx);
        if final_label[root] == 0 {
            count = count
                .checked_add(1)
                .ok_or(RegionError::TooManyLabels(image.len()))?;
            final_label[root] = count;
        }
        labels.push(final_label[root]);
    }

    log::debug!(
        "label_nd: {count} components in {shape} ({} neighbours)",
        conn.neighbour_count()
    );

    Ok(Labeling {
        labels: NdArray::from_shape_vec(shape.clone(), labels)?,
        count,
        warnings,
    })
}
