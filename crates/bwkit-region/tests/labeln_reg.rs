//! N-dimensional labeling regression test
//!
//! Labels random volumes and 4-D arrays under face, edge and full
//! connectivity and compares with a flood-fill reference, checks that
//! sparse point labeling agrees with dense labeling, and exercises
//! component measurements.

use std::collections::VecDeque;

use bwkit_core::NdArray;
use bwkit_region::{
    Connectivity, LabelOptions, component_bounds, component_sizes, label_nd, label_points,
    label_with_options,
};
use bwkit_test::RegParams;
use rand::prelude::*;

fn flood_fill_count(image: &NdArray<bool>, conn: &Connectivity) -> (Vec<u32>, u32) {
    let shape = image.shape();
    let deltas = conn.neighbour_deltas();
    let mut labels = vec![0u32; image.len()];
    let mut count = 0;

    for start in 0..image.len() {
        if !image.data()[start] || labels[start] != 0 {
            continue;
        }
        count += 1;
        labels[start] = count;
        let mut queue = VecDeque::from([start]);
        while let Some(idx) = queue.pop_front() {
            let coords = shape.coords_of(idx);
            for delta in &deltas {
                let next: Option<Vec<usize>> = coords
                    .iter()
                    .zip(delta)
                    .map(|(&c, &d)| c.checked_add_signed(d))
                    .collect();
                if let Some(n) = next.and_then(|c| shape.index_of(&c)) {
                    if image.data()[n] && labels[n] == 0 {
                        labels[n] = count;
                        queue.push_back(n);
                    }
                }
            }
        }
    }

    (labels, count)
}

fn random_image(rng: &mut StdRng, dims: &[usize], density: f64) -> NdArray<bool> {
    let n = dims.iter().product();
    let data = (0..n).map(|_| rng.random_bool(density)).collect();
    NdArray::from_vec(dims, data).unwrap()
}

#[test]
fn labeln_reg() {
    let mut rp = RegParams::new("labeln");
    let mut rng = StdRng::seed_from_u64(1926);

    // --- Test 1: volumes under 6/18/26 connectivity ---
    eprintln!("=== Random volumes ===");
    for trial in 0..30 {
        let dims = [
            rng.random_range(1..=7),
            rng.random_range(1..=7),
            rng.random_range(1..=7),
        ];
        let density = [0.15, 0.3, 0.5][trial % 3];
        let volume = random_image(&mut rng, &dims, density);

        let mut counts = Vec::new();
        for code in [6, 18, 26] {
            let conn = Connectivity::from_code(code).unwrap();
            let result = label_nd(&volume, &conn).unwrap();
            let (reference, count) = flood_fill_count(&volume, &conn);
            let expected = NdArray::from_vec(&dims, reference).unwrap();
            rp.compare_labels(&expected, &result.labels);
            rp.compare_values(f64::from(count), f64::from(result.count), 0.0);
            counts.push(result.count);
        }
        let monotone = counts[0] >= counts[1] && counts[1] >= counts[2];
        rp.compare_values(1.0, monotone as u8 as f64, 0.0);

        // Default options use the maximal connectivity.
        let default = label_with_options(&volume, &LabelOptions::new()).unwrap();
        rp.compare_values(f64::from(counts[2]), f64::from(default.count), 0.0);
    }

    // --- Test 2: 4-D arrays ---
    eprintln!("=== 4-D arrays ===");
    for _ in 0..8 {
        let dims = [
            rng.random_range(1..=4),
            rng.random_range(1..=4),
            rng.random_range(1..=4),
            rng.random_range(1..=4),
        ];
        let array = random_image(&mut rng, &dims, 0.35);
        for conn in [
            Connectivity::minimal(4).unwrap(),
            Connectivity::maximal(4).unwrap(),
        ] {
            let result = label_nd(&array, &conn).unwrap();
            let (reference, count) = flood_fill_count(&array, &conn);
            rp.compare_labels(&NdArray::from_vec(&dims, reference).unwrap(), &result.labels);
            rp.compare_values(f64::from(count), f64::from(result.count), 0.0);
        }
    }

    assert!(rp.cleanup(), "labeln regression test failed");
}

#[test]
fn labeln_points_reg() {
    let mut rp = RegParams::new("labeln_points");
    let mut rng = StdRng::seed_from_u64(7);

    // Points listed in raster order label exactly like the dense array.
    for _ in 0..10 {
        let dims = [rng.random_range(1..=8), rng.random_range(1..=8), 3];
        let volume = random_image(&mut rng, &dims, 0.3);
        let shape = volume.shape();
        let points: Vec<Vec<i64>> = (0..volume.len())
            .filter(|&i| volume.data()[i])
            .map(|i| shape.coords_of(i).iter().map(|&c| c as i64).collect())
            .collect();

        for code in [6, 26] {
            let conn = Connectivity::from_code(code).unwrap();
            let dense = label_nd(&volume, &conn).unwrap();
            let sparse = label_points(&points, &conn).unwrap();
            let dense_fg: Vec<u32> = dense
                .labels
                .data()
                .iter()
                .copied()
                .filter(|&l| l != 0)
                .collect();
            rp.compare_values(f64::from(dense.count), f64::from(sparse.count), 0.0);
            rp.compare_values(1.0, (dense_fg == sparse.labels) as u8 as f64, 0.0);
        }
    }

    // Translation far from the origin does not matter.
    let shifted: Vec<[i64; 2]> = vec![[-1_000_000, 5], [-999_999, 6], [40, 40]];
    let result = label_points(&shifted, &Connectivity::from_code(8).unwrap()).unwrap();
    rp.compare_values(2.0, f64::from(result.count), 0.0);

    assert!(rp.cleanup(), "labeln points regression test failed");
}

#[test]
fn labeln_measure_reg() {
    let mut rp = RegParams::new("labeln_measure");

    // Two bars in a 3x4x5 volume: one along the last axis, one diagonal.
    let mut volume = NdArray::<u8>::zeros(&[3, 4, 5]).unwrap();
    for x in 0..5 {
        volume.set(&[0, 0, x], 1).unwrap();
    }
    for k in 0..3 {
        volume.set(&[k, k + 1, k + 2], 1).unwrap();
    }

    let conn = Connectivity::from_code(26).unwrap();
    let result = label_nd(&volume, &conn).unwrap();
    // (0, 1, 2) touches the bar at (0, 0, 1..=3), so everything merges.
    rp.compare_values(1.0, f64::from(result.count), 0.0);
    let sizes = component_sizes(&result.labels, result.count).unwrap();
    rp.compare_values(8.0, sizes[0] as f64, 0.0);
    let bounds = component_bounds(&result.labels, result.count).unwrap();
    rp.compare_values(1.0, (bounds[0].min == vec![0, 0, 0]) as u8 as f64, 0.0);
    rp.compare_values(1.0, (bounds[0].max == vec![2, 3, 4]) as u8 as f64, 0.0);

    // Under face connectivity only (0, 1, 2) still joins the bar.
    let faces = label_nd(&volume, &Connectivity::from_code(6).unwrap()).unwrap();
    rp.compare_values(3.0, f64::from(faces.count), 0.0);
    let sizes = component_sizes(&faces.labels, faces.count).unwrap();
    rp.compare_values(1.0, (sizes == vec![6, 1, 1]) as u8 as f64, 0.0);

    assert!(rp.cleanup(), "labeln measure regression test failed");
}
