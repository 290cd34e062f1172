//! Exact Euclidean distance transform
//!
//! Separable lower-envelope algorithm (Felzenszwalb & Huttenlocher): the
//! squared distance field is the minimum of parabolas rooted at foreground
//! pixels, computed by one 1-D pass per axis. Unlike the sweep engine it is
//! exact for every input and works in any number of dimensions.

use bwkit_core::{NdArray, Sample};

use crate::error::DistanceResult;

/// Reusable scratch buffers for the 1-D pass
#[derive(Default)]
struct Envelope {
    /// Positions of the parabolas in the lower envelope
    roots: Vec<usize>,
    /// Left boundary of each parabola's interval
    bounds: Vec<f64>,
}

impl Envelope {
    /// Squared distance transform of a single line, in place
    fn transform(&mut self, line: &mut [f64], scratch: &mut Vec<f64>) {
        self.roots.clear();
        self.bounds.clear();

        for q in 0..line.len() {
            if line[q].is_infinite() {
                continue;
            }
            let fq = line[q] + (q * q) as f64;
            while let Some(&p) = self.roots.last() {
                let fp = line[p] + (p * p) as f64;
                let s = (fq - fp) / (2.0 * (q - p) as f64);
                if self.bounds.last().is_some_and(|&b| s <= b) {
                    self.roots.pop();
                    self.bounds.pop();
                } else {
                    self.roots.push(q);
                    self.bounds.push(s);
                    break;
                }
            }
            if self.roots.is_empty() {
                self.roots.push(q);
                self.bounds.push(f64::NEG_INFINITY);
            }
        }

        if self.roots.is_empty() {
            return;
        }

        scratch.clear();
        scratch.extend_from_slice(line);
        let mut k = 0;
        for (q, out) in line.iter_mut().enumerate() {
            while k + 1 < self.roots.len() && self.bounds[k + 1] < q as f64 {
                k += 1;
            }
            let p = self.roots[k];
            let d = q.abs_diff(p) as f64;
            *out = d * d + scratch[p];
        }
    }
}

/// Exact Euclidean distance from every element to the nearest foreground
/// element, for arrays of any dimensionality
///
/// Without foreground every distance is `+∞`.
pub fn exact_euclidean_distance<T: Sample>(image: &NdArray<T>) -> DistanceResult<NdArray<f32>> {
    let mut field: Vec<f64> = image
        .data()
        .iter()
        .map(|v| if v.is_foreground() { 0.0 } else { f64::INFINITY })
        .collect();

    let shape = image.shape();
    let strides = shape.strides();
    let mut envelope = Envelope::default();
    let mut line = Vec::new();
    let mut scratch = Vec::new();

    for (axis, (&extent, &stride)) in shape.dims().iter().zip(&strides).enumerate() {
        if extent == 1 {
            continue;
        }
        let span = extent * stride;
        for start in 0..field.len() {
            // Lines along `axis` begin where that coordinate is 0.
            if start % span >= stride {
                continue;
            }
            line.clear();
            line.extend((0..extent).map(|i| field[start + i * stride]));
            envelope.transform(&mut line, &mut scratch);
            for (i, &v) in line.iter().enumerate() {
                field[start + i * stride] = v;
            }
        }
        log::trace!("exact_euclidean_distance: axis {axis} done");
    }

    let distances = field.into_iter().map(|d| d.sqrt() as f32).collect();
    Ok(NdArray::from_shape_vec(shape.clone(), distances)?)
}
