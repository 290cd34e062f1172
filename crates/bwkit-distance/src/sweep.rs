//! Two-pass vector propagation (8SSEDT-style sweeps)
//!
//! Every pixel carries the displacement `(dx, dy) = (x - xn, y - yn)` to the
//! nearest foreground pixel found so far. Foreground pixels start at
//! `(0, 0)`; background pixels start unset.
//!
//! One sweep is a forward pass (rows top to bottom; each row left to right
//! against the left, up-left, up and up-right neighbours, then right to left
//! against the right neighbour) followed by a backward pass mirroring it
//! (rows bottom to top; right to left against the right, down-right, down
//! and down-left neighbours, then left to right against the left
//! neighbour). A neighbour's displacement extended by one step is adopted
//! when it is strictly cheaper under the metric. Sweeps repeat until one
//! changes nothing.
//!
//! The metric is a type parameter so the inner loop is monomorphized per
//! metric.

use std::marker::PhantomData;

/// Marker for a pixel with no known nearest foreground pixel
const UNSET: i32 = i32::MIN;

/// Largest supported extent along either axis
pub(crate) const MAX_EXTENT: usize = 1 << 24;

/// Cost of a displacement under one metric
pub(crate) trait Cost {
    /// Monotone cost used for comparisons
    type Value: Copy + PartialOrd;

    /// Cost of a zero displacement
    const ZERO: Self::Value;

    /// Cost of a pixel with no known foreground
    const UNREACHABLE: Self::Value;

    fn cost(dx: i32, dy: i32) -> Self::Value;

    /// Distance reported for a cost
    fn finish(cost: Self::Value) -> f32;
}

/// Euclidean metric, compared on integer squared length
pub(crate) struct SquaredEuclidean;

impl Cost for SquaredEuclidean {
    type Value = i64;
    const ZERO: i64 = 0;
    const UNREACHABLE: i64 = i64::MAX;

    #[inline]
    fn cost(dx: i32, dy: i32) -> i64 {
        let (x, y) = (i64::from(dx), i64::from(dy));
        x * x + y * y
    }

    #[inline]
    fn finish(cost: i64) -> f32 {
        (cost as f64).sqrt() as f32
    }
}

pub(crate) struct Chessboard;

impl Cost for Chessboard {
    type Value = i64;
    const ZERO: i64 = 0;
    const UNREACHABLE: i64 = i64::MAX;

    #[inline]
    fn cost(dx: i32, dy: i32) -> i64 {
        i64::from(dx.unsigned_abs().max(dy.unsigned_abs()))
    }

    #[inline]
    fn finish(cost: i64) -> f32 {
        cost as f32
    }
}

pub(crate) struct Cityblock;

impl Cost for Cityblock {
    type Value = i64;
    const ZERO: i64 = 0;
    const UNREACHABLE: i64 = i64::MAX;

    #[inline]
    fn cost(dx: i32, dy: i32) -> i64 {
        i64::from(dx.unsigned_abs()) + i64::from(dy.unsigned_abs())
    }

    #[inline]
    fn finish(cost: i64) -> f32 {
        cost as f32
    }
}

pub(crate) struct QuasiEuclidean;

impl Cost for QuasiEuclidean {
    type Value = f64;
    const ZERO: f64 = 0.0;
    const UNREACHABLE: f64 = f64::INFINITY;

    #[inline]
    fn cost(dx: i32, dy: i32) -> f64 {
        let (ax, ay) = (f64::from(dx.unsigned_abs()), f64::from(dy.unsigned_abs()));
        let k = std::f64::consts::SQRT_2 - 1.0;
        if ax > ay { ax + k * ay } else { k * ax + ay }
    }

    #[inline]
    fn finish(cost: f64) -> f32 {
        cost as f32
    }
}

/// Converged displacement field
pub(crate) struct Displacements {
    dx: Vec<i32>,
    dy: Vec<i32>,
    cols: usize,
    /// Number of sweeps run, including the final unchanged one
    pub sweeps: usize,
}

impl Displacements {
    /// Displacement of pixel `idx`, or `None` if no foreground exists
    #[inline]
    pub fn get(&self, idx: usize) -> Option<(i32, i32)> {
        (self.dx[idx] != UNSET).then(|| (self.dx[idx], self.dy[idx]))
    }

    /// Row-major flat index of the nearest foreground pixel of `idx`
    pub fn nearest(&self, idx: usize) -> Option<usize> {
        let (dx, dy) = self.get(idx)?;
        let (y, x) = (idx / self.cols, idx % self.cols);
        let ny = y as i64 - i64::from(dy);
        let nx = x as i64 - i64::from(dx);
        Some(ny as usize * self.cols + nx as usize)
    }
}

struct Field<C> {
    dx: Vec<i32>,
    dy: Vec<i32>,
    changed: bool,
    _metric: PhantomData<C>,
}

impl<C: Cost> Field<C> {
    #[inline]
    fn cost(&self, idx: usize) -> C::Value {
        if self.dx[idx] == UNSET {
            C::UNREACHABLE
        } else {
            C::cost(self.dx[idx], self.dy[idx])
        }
    }

    /// Offer pixel `idx` the nearest pixel of `from`, which is reached from
    /// `idx` by moving `(step_x, step_y)` back towards `from`
    #[inline]
    fn relax(
        &mut self,
        idx: usize,
        from: usize,
        step_x: i32,
        step_y: i32,
        best: C::Value,
    ) -> C::Value {
        if self.dx[from] == UNSET {
            return best;
        }
        let cx = self.dx[from] + step_x;
        let cy = self.dy[from] + step_y;
        let candidate = C::cost(cx, cy);
        if candidate < best {
            self.dx[idx] = cx;
            self.dy[idx] = cy;
            self.changed = true;
            candidate
        } else {
            best
        }
    }

    fn forward(&mut self, rows: usize, cols: usize) {
        for y in 0..rows {
            let row = y * cols;
            for x in 0..cols {
                let idx = row + x;
                let mut best = self.cost(idx);
                if best == C::ZERO {
                    continue;
                }
                if x > 0 {
                    best = self.relax(idx, idx - 1, 1, 0, best);
                }
                if y > 0 {
                    let up = idx - cols;
                    if x > 0 {
                        best = self.relax(idx, up - 1, 1, 1, best);
                    }
                    best = self.relax(idx, up, 0, 1, best);
                    if x + 1 < cols {
                        self.relax(idx, up + 1, -1, 1, best);
                    }
                }
            }
            for x in (0..cols - 1).rev() {
                let idx = row + x;
                let best = self.cost(idx);
                if best != C::ZERO {
                    self.relax(idx, idx + 1, -1, 0, best);
                }
            }
        }
    }

    fn backward(&mut self, rows: usize, cols: usize) {
        for y in (0..rows).rev() {
            let row = y * cols;
            for x in (0..cols).rev() {
                let idx = row + x;
                let mut best = self.cost(idx);
                if best == C::ZERO {
                    continue;
                }
                if x + 1 < cols {
                    best = self.relax(idx, idx + 1, -1, 0, best);
                }
                if y + 1 < rows {
                    let down = idx + cols;
                    if x + 1 < cols {
                        best = self.relax(idx, down + 1, -1, -1, best);
                    }
                    best = self.relax(idx, down, 0, -1, best);
                    if x > 0 {
                        self.relax(idx, down - 1, 1, -1, best);
                    }
                }
            }
            for x in 1..cols {
                let idx = row + x;
                let best = self.cost(idx);
                if best != C::ZERO {
                    self.relax(idx, idx - 1, 1, 0, best);
                }
            }
        }
    }
}

/// Propagate nearest-foreground displacements until stable
///
/// `foreground` is a row-major `rows x cols` mask with both extents in
/// `1..=MAX_EXTENT`.
pub(crate) fn propagate<C: Cost>(foreground: &[bool], rows: usize, cols: usize) -> Displacements {
    let init: Vec<i32> = foreground
        .iter()
        .map(|&fg| if fg { 0 } else { UNSET })
        .collect();
    let mut field = Field::<C> {
        dx: init.clone(),
        dy: init,
        changed: false,
        _metric: PhantomData,
    };

    let mut sweeps = 0;
    // Without foreground nothing can ever be set.
    if foreground.iter().any(|&fg| fg) {
        loop {
            sweeps += 1;
            field.changed = false;
            field.forward(rows, cols);
            field.backward(rows, cols);
            if !field.changed {
                break;
            }
        }
    }

    Displacements {
        dx: field.dx,
        dy: field.dy,
        cols,
        sweeps,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn distances<C: Cost>(foreground: &[bool], rows: usize, cols: usize) -> Vec<f32> {
        let field = propagate::<C>(foreground, rows, cols);
        (0..foreground.len())
            .map(|i| match field.get(i) {
                Some((dx, dy)) => C::finish(C::cost(dx, dy)),
                None => f32::INFINITY,
            })
            .collect()
    }

    #[test]
    fn test_costs() {
        assert_eq!(SquaredEuclidean::cost(3, -4), 25);
        assert_eq!(SquaredEuclidean::finish(25), 5.0);
        assert_eq!(Chessboard::cost(-3, 2), 3);
        assert_eq!(Cityblock::cost(-3, 2), 5);
        let q = QuasiEuclidean::cost(1, 2);
        assert!((q - (2.0 + std::f64::consts::SQRT_2 - 1.0)).abs() < 1e-12);
        assert_eq!(QuasiEuclidean::cost(2, 0), 2.0);
    }

    #[test]
    fn test_squared_euclidean_exact_at_extent_limit() {
        // Two displacements whose squared lengths differ by one near the
        // largest supported extent still compare correctly.
        let far = (MAX_EXTENT - 1) as i32;
        let a = SquaredEuclidean::cost(far, far);
        let b = SquaredEuclidean::cost(far, far - 1);
        assert_eq!(a - b, 2 * i64::from(far) - 1);
        assert!(b < a);
        assert!(a < SquaredEuclidean::UNREACHABLE);
    }

    #[test]
    fn test_single_row() {
        let fg = [false, false, true, false, false, false];
        assert_eq!(
            distances::<SquaredEuclidean>(&fg, 1, 6),
            vec![2.0, 1.0, 0.0, 1.0, 2.0, 3.0]
        );
    }

    #[test]
    fn test_single_column() {
        let fg = [false, true, false, false];
        assert_eq!(distances::<Cityblock>(&fg, 4, 1), vec![1.0, 0.0, 1.0, 2.0]);
    }

    #[test]
    fn test_nearest_index() {
        // Foreground at (0, 3) and (2, 0) in a 3x4 grid.
        let mut fg = vec![false; 12];
        fg[3] = true;
        fg[8] = true;
        let field = propagate::<Chessboard>(&fg, 3, 4);
        assert_eq!(field.nearest(3), Some(3));
        assert_eq!(field.nearest(0), Some(8));
        assert_eq!(field.nearest(7), Some(3));
        assert_eq!(field.nearest(9), Some(8));
    }

    #[test]
    fn test_no_foreground() {
        let field = propagate::<Cityblock>(&[false; 6], 2, 3);
        assert_eq!(field.sweeps, 0);
        assert!((0..6).all(|i| field.get(i).is_none() && field.nearest(i).is_none()));
    }
}
