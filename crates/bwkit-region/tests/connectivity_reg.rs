//! Connectivity regression test
//!
//! Minimal and maximal neighbourhoods in several dimensions, agreement of
//! numeric codes with their masks, mask validation and flat offsets.

use bwkit_core::{NdArray, Shape};
use bwkit_region::{Connectivity, ConnectivityType, RegionError, check_connectivity};
use bwkit_test::RegParams;

#[test]
fn connectivity_reg() {
    let mut rp = RegParams::new("connectivity");

    // --- Test 1: element counts ---
    eprintln!("=== Minimal and maximal ===");
    for ndims in 1..=6 {
        let minimal = Connectivity::minimal(ndims).unwrap();
        let maximal = Connectivity::maximal(ndims).unwrap();
        rp.compare_values(
            (2 * ndims + 1) as f64,
            minimal.mask().count_foreground() as f64,
            0.0,
        );
        rp.compare_values(
            3f64.powi(ndims as i32),
            maximal.mask().count_foreground() as f64,
            0.0,
        );
        rp.compare_values(1.0, check_connectivity(minimal.mask()).is_ok() as u8 as f64, 0.0);
        rp.compare_values(1.0, check_connectivity(maximal.mask()).is_ok() as u8 as f64, 0.0);
    }

    // --- Test 2: codes agree with constructed masks ---
    eprintln!("=== Codes ===");
    let same = |code, conn: Connectivity| Connectivity::from_code(code).unwrap() == conn;
    rp.compare_values(1.0, same(4, Connectivity::minimal(2).unwrap()) as u8 as f64, 0.0);
    rp.compare_values(1.0, same(8, Connectivity::maximal(2).unwrap()) as u8 as f64, 0.0);
    rp.compare_values(1.0, same(6, Connectivity::minimal(3).unwrap()) as u8 as f64, 0.0);
    rp.compare_values(1.0, same(26, Connectivity::maximal(3).unwrap()) as u8 as f64, 0.0);
    rp.compare_values(
        18.0,
        Connectivity::from_code(18).unwrap().neighbour_count() as f64,
        0.0,
    );
    for code in [0, 1, 5, 10, 27] {
        rp.compare_values(1.0, Connectivity::from_code(code).is_err() as u8 as f64, 0.0);
    }

    // The planar six-way rule is not the 3-D face connectivity.
    let hex = ConnectivityType::SixWay.to_connectivity().unwrap();
    rp.compare_values(2.0, hex.ndim() as f64, 0.0);
    rp.compare_values(6.0, hex.neighbour_count() as f64, 0.0);

    // --- Test 3: mask validation ---
    eprintln!("=== Mask validation ===");
    let cases: [(&[usize], Vec<u8>, bool); 9] = [
        (&[3, 3], vec![0, 1, 0, 1, 1, 1, 0, 1, 0], true),
        (&[1, 1], vec![1], true),
        (&[3, 1], vec![1, 1, 1], true),
        (&[3, 3], vec![0, 1, 0, 1, 0, 1, 0, 1, 0], false),
        (&[3, 3], vec![1, 0, 0, 0, 1, 0, 0, 0, 0], false),
        (&[2, 2], vec![1, 1, 1, 1], false),
        (&[1, 3], vec![1, 1, 1], false),
        (&[3, 1, 3], vec![1; 9], false),
        (&[3, 3, 1], vec![1; 9], false),
    ];
    for (dims, values, valid) in cases {
        let mask = NdArray::from_vec(dims, values).unwrap();
        let result = Connectivity::from_values(&mask);
        rp.compare_values(valid as u8 as f64, result.is_ok() as u8 as f64, 0.0);
        if let Err(err) = result {
            let reported = matches!(err, RegionError::InvalidConnectivity(_));
            rp.compare_values(1.0, reported as u8 as f64, 0.0);
        }
    }

    // Anything beyond two axes must be a full cube.
    let slabs: [&[usize]; 3] = [&[3, 1, 3], &[3, 3, 1], &[1, 3, 3, 3]];
    for dims in slabs {
        let n = dims.iter().product();
        let slab = NdArray::from_vec(dims, vec![true; n]).unwrap();
        let err = Connectivity::from_mask(slab).unwrap_err();
        rp.compare_values(
            1.0,
            (err == RegionError::InvalidConnectivity("is not 3x3x...x3".to_string())) as u8
                as f64,
            0.0,
        );
    }
    let cube = NdArray::new_with_value(&[3, 3, 3, 3], true).unwrap();
    rp.compare_values(1.0, Connectivity::from_mask(cube).is_ok() as u8 as f64, 0.0);

    // --- Test 4: offsets ---
    eprintln!("=== Offsets ===");
    let shape = Shape::new([5, 7]).unwrap();
    let offsets = Connectivity::from_code(8).unwrap().offsets(&shape).unwrap();
    let expected = [-8isize, -7, -6, -1, 0, 1, 6, 7, 8];
    rp.compare_values(1.0, (offsets == expected) as u8 as f64, 0.0);

    let mismatch = Connectivity::from_code(26).unwrap().offsets(&shape);
    rp.compare_values(
        1.0,
        (mismatch == Err(RegionError::DimensionMismatch { mask: 3, image: 2 })) as u8 as f64,
        0.0,
    );

    assert!(rp.cleanup(), "connectivity regression test failed");
}
