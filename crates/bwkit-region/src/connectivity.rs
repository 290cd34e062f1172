//! Connectivity descriptors
//!
//! A connectivity is a boolean mask with extent 1 or 3 along every axis
//! whose centre element is the pixel itself. Every other `true` element
//! marks a neighbour at the corresponding offset. Masks must be point
//! symmetric about the centre, so "a neighbours b" implies "b neighbours a".
//!
//! The usual shorthands are accepted as numeric codes:
//!
//! | code | dims    | neighbours                          |
//! |------|---------|-------------------------------------|
//! | 4    | 3x3     | edge-adjacent                       |
//! | 8    | 3x3     | edge- and corner-adjacent           |
//! | 6    | 3x3x3   | face-adjacent                       |
//! | 18   | 3x3x3   | face- and edge-adjacent             |
//! | 26   | 3x3x3   | face-, edge- and corner-adjacent    |

use bwkit_core::{NdArray, Sample, Shape};

use crate::error::{RegionError, RegionResult};

const INVALID_CODE: &str = "must be in the set [4 6 8 18 26]";
const INVALID_VALUES: &str = "must be logical or in the set [4 6 8 18 26]";
const INVALID_EXTENTS: &str = "is not 1x1, 3x1, 3x3, or 3x3x...x3";
const INVALID_CUBE: &str = "is not 3x3x...x3";
const CENTER_NOT_SET: &str = "center is not true";
const NOT_SYMMETRIC: &str = "is not symmetric relative to its center";

/// Neighbourhood definition for N-dimensional labeling
#[derive(Debug, Clone, PartialEq)]
pub struct Connectivity {
    mask: NdArray<bool>,
}

impl Connectivity {
    /// Build a connectivity from one of the codes 4, 6, 8, 18 or 26
    ///
    /// # Errors
    ///
    /// Returns [`RegionError::InvalidConnectivity`] for any other code.
    pub fn from_code(code: u32) -> RegionResult<Self> {
        match code {
            4 => Self::cube(2, 1),
            8 => Self::cube(2, 2),
            6 => Self::cube(3, 1),
            18 => Self::cube(3, 2),
            26 => Self::cube(3, 3),
            _ => Err(RegionError::InvalidConnectivity(INVALID_CODE.to_string())),
        }
    }

    /// Build a connectivity from an explicit boolean mask
    ///
    /// # Errors
    ///
    /// Returns [`RegionError::InvalidConnectivity`] if an extent is not 1 or
    /// 3, the centre is `false` or the mask is not point symmetric.
    pub fn from_mask(mask: NdArray<bool>) -> RegionResult<Self> {
        check_connectivity(&mask)?;
        Ok(Self { mask })
    }

    /// Build a connectivity from a numeric mask of zeros and ones
    ///
    /// # Errors
    ///
    /// Returns [`RegionError::InvalidConnectivity`] if any element is not 0
    /// or 1, or if the resulting mask fails [`Connectivity::from_mask`].
    pub fn from_values<T: Sample>(mask: &NdArray<T>) -> RegionResult<Self> {
        if !mask.is_binary() {
            return Err(RegionError::InvalidConnectivity(
                INVALID_VALUES.to_string(),
            ));
        }
        Self::from_mask(mask.foreground())
    }

    /// Face-adjacent neighbourhood in `ndims` dimensions (`2 * ndims + 1`
    /// elements including the centre)
    ///
    /// # Errors
    ///
    /// Returns [`RegionError::InvalidConnectivity`] if `ndims` is 0.
    pub fn minimal(ndims: usize) -> RegionResult<Self> {
        Self::cube(ndims, 1)
    }

    /// Full `3^ndims` neighbourhood
    ///
    /// # Errors
    ///
    /// Returns [`RegionError::InvalidConnectivity`] if `ndims` is 0.
    pub fn maximal(ndims: usize) -> RegionResult<Self> {
        Self::cube(ndims, ndims)
    }

    /// `3^ndims` mask keeping offsets that move along at most
    /// `max_axes` axes at once
    fn cube(ndims: usize, max_axes: usize) -> RegionResult<Self> {
        if ndims == 0 {
            return Err(RegionError::InvalidConnectivity(
                "number of dimensions must be positive".to_string(),
            ));
        }
        let shape = Shape::new(vec![3; ndims])?;
        let data = (0..shape.numel())
            .map(|idx| {
                let moved = shape.coords_of(idx).iter().filter(|&&c| c != 1).count();
                moved <= max_axes
            })
            .collect();
        let mask = NdArray::from_shape_vec(shape, data)?;
        Ok(Self { mask })
    }

    /// The underlying boolean mask
    pub fn mask(&self) -> &NdArray<bool> {
        &self.mask
    }

    /// Mask extents
    pub fn dims(&self) -> &[usize] {
        self.mask.dims()
    }

    /// Number of mask axes
    pub fn ndim(&self) -> usize {
        self.mask.ndim()
    }

    /// Number of neighbours, not counting the centre
    pub fn neighbour_count(&self) -> usize {
        self.mask.count_foreground() - 1
    }

    fn center(&self) -> usize {
        self.mask.len() / 2
    }

    fn delta_of(&self, idx: usize) -> Vec<isize> {
        self.mask
            .shape()
            .coords_of(idx)
            .iter()
            .zip(self.dims())
            .map(|(&c, &extent)| c as isize - (extent / 2) as isize)
            .collect()
    }

    /// Coordinate offsets of every neighbour, in mask raster order
    pub fn neighbour_deltas(&self) -> Vec<Vec<isize>> {
        let center = self.center();
        (0..self.mask.len())
            .filter(|&idx| idx != center && self.mask.data()[idx])
            .map(|idx| self.delta_of(idx))
            .collect()
    }

    /// Offsets of the neighbours that precede the centre in raster order
    ///
    /// By symmetry these are exactly half of [`Self::neighbour_deltas`],
    /// and they are the only neighbours already visited by a raster scan.
    pub fn causal_deltas(&self) -> Vec<Vec<isize>> {
        (0..self.center())
            .filter(|&idx| self.mask.data()[idx])
            .map(|idx| self.delta_of(idx))
            .collect()
    }

    /// Reconcile the mask with an `ndim`-dimensional input
    ///
    /// Missing axes are added as leading singletons. Surplus leading axes
    /// are dropped when they have extent 1.
    ///
    /// # Errors
    ///
    /// Returns [`RegionError::DimensionMismatch`] if a surplus axis has
    /// extent 3.
    pub fn broadcast_to(&self, ndim: usize) -> RegionResult<Self> {
        let have = self.ndim();
        if have == ndim {
            return Ok(self.clone());
        }

        let dims = if have < ndim {
            self.mask.shape().with_leading_axes(ndim).dims().to_vec()
        } else {
            let surplus = have - ndim;
            if self.dims()[..surplus].iter().any(|&d| d != 1) {
                return Err(RegionError::DimensionMismatch {
                    mask: have,
                    image: ndim,
                });
            }
            self.dims()[surplus..].to_vec()
        };

        let mask = NdArray::from_vec(&dims, self.mask.data().to_vec())?;
        Ok(Self { mask })
    }

    /// Flat offsets of every `true` element, centre included, for an
    /// array of the given shape
    ///
    /// # Errors
    ///
    /// Returns [`RegionError::DimensionMismatch`] if the mask cannot be
    /// broadcast to `shape`.
    pub fn offsets(&self, shape: &Shape) -> RegionResult<Vec<isize>> {
        let conn = self.broadcast_to(shape.ndim())?;
        let strides = shape.strides();
        let offsets = (0..conn.mask.len())
            .filter(|&idx| conn.mask.data()[idx])
            .map(|idx| {
                conn.delta_of(idx)
                    .iter()
                    .zip(&strides)
                    .map(|(&d, &s)| d * s as isize)
                    .sum()
            })
            .collect();
        Ok(offsets)
    }
}

/// Validate a connectivity mask
///
/// # Errors
///
/// Returns [`RegionError::InvalidConnectivity`] describing the first
/// violated rule.
pub fn check_connectivity(mask: &NdArray<bool>) -> RegionResult<()> {
    // Matrices may degenerate to a single pixel or a column; anything
    // with more axes must be a full cube.
    match *mask.dims() {
        [1] | [3] | [1, 1] | [3, 1] | [3, 3] => {}
        [_] | [_, _] => {
            return Err(RegionError::InvalidConnectivity(
                INVALID_EXTENTS.to_string(),
            ));
        }
        ref dims if dims.iter().all(|&d| d == 3) => {}
        _ => {
            return Err(RegionError::InvalidConnectivity(INVALID_CUBE.to_string()));
        }
    }

    let data = mask.data();
    let n = data.len();
    if !data[n / 2] {
        return Err(RegionError::InvalidConnectivity(
            CENTER_NOT_SET.to_string(),
        ));
    }

    // All extents are odd, so reflecting through the centre maps flat
    // index i to n - 1 - i.
    if (0..n / 2).any(|i| data[i] != data[n - 1 - i]) {
        return Err(RegionError::InvalidConnectivity(NOT_SYMMETRIC.to_string()));
    }

    Ok(())
}

/// Planar connectivity handled by the 2-D fast path
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConnectivityType {
    /// Left, right, up and down
    FourWay,
    /// Hexagonal rule: four-way plus the up-left/down-right diagonal
    SixWay,
    /// All eight surrounding pixels
    #[default]
    EightWay,
}

#[rustfmt::skip]
const FOUR_WAY: [bool; 9] = [
    false, true, false,
    true,  true, true,
    false, true, false,
];

#[rustfmt::skip]
const SIX_WAY: [bool; 9] = [
    true,  true, false,
    true,  true, true,
    false, true, true,
];

const EIGHT_WAY: [bool; 9] = [true; 9];

impl ConnectivityType {
    /// Numeric code (4, 6 or 8)
    pub fn code(self) -> u32 {
        match self {
            Self::FourWay => 4,
            Self::SixWay => 6,
            Self::EightWay => 8,
        }
    }

    /// Parse a numeric code (4, 6 or 8)
    pub fn from_code(code: u32) -> Option<Self> {
        match code {
            4 => Some(Self::FourWay),
            6 => Some(Self::SixWay),
            8 => Some(Self::EightWay),
            _ => None,
        }
    }

    fn mask_data(self) -> &'static [bool; 9] {
        match self {
            Self::FourWay => &FOUR_WAY,
            Self::SixWay => &SIX_WAY,
            Self::EightWay => &EIGHT_WAY,
        }
    }

    /// Equivalent 3x3 mask connectivity
    pub fn to_connectivity(self) -> RegionResult<Connectivity> {
        let mask = NdArray::from_vec(&[3, 3], self.mask_data().to_vec())?;
        Ok(Connectivity { mask })
    }

    /// Recognise a 3x3 mask equal to one of the planar connectivities
    pub fn from_connectivity(conn: &Connectivity) -> Option<Self> {
        if conn.dims() != [3, 3] {
            return None;
        }
        [Self::FourWay, Self::SixWay, Self::EightWay]
            .into_iter()
            .find(|ty| conn.mask.data() == ty.mask_data().as_slice())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes() {
        let four = Connectivity::from_code(4).unwrap();
        assert_eq!(four.dims(), &[3, 3]);
        assert_eq!(four.neighbour_count(), 4);
        assert_eq!(Connectivity::from_code(8).unwrap().neighbour_count(), 8);
        assert_eq!(Connectivity::from_code(6).unwrap().neighbour_count(), 6);
        assert_eq!(Connectivity::from_code(18).unwrap().neighbour_count(), 18);
        assert_eq!(Connectivity::from_code(26).unwrap().neighbour_count(), 26);

        let err = Connectivity::from_code(5).unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid connectivity: must be in the set [4 6 8 18 26]"
        );
    }

    #[test]
    fn test_minimal_maximal() {
        for (ndims, nnz) in [(3, 7), (4, 9), (5, 11), (6, 13)] {
            let conn = Connectivity::minimal(ndims).unwrap();
            assert_eq!(conn.neighbour_count() + 1, nnz);
        }
        assert_eq!(Connectivity::maximal(4).unwrap().neighbour_count(), 80);
        assert_eq!(
            Connectivity::minimal(2).unwrap(),
            Connectivity::from_code(4).unwrap()
        );
        assert!(Connectivity::maximal(0).is_err());
    }

    #[test]
    fn test_mask_validation() {
        let wide = NdArray::new_with_value(&[3, 4], true).unwrap();
        assert!(matches!(
            Connectivity::from_mask(wide),
            Err(RegionError::InvalidConnectivity(msg)) if msg == INVALID_EXTENTS
        ));

        let hollow = NdArray::from_rows(&[[1u8, 1, 1], [1, 0, 1], [1, 1, 1]]).unwrap();
        assert!(matches!(
            Connectivity::from_values(&hollow),
            Err(RegionError::InvalidConnectivity(msg)) if msg == CENTER_NOT_SET
        ));

        let lopsided = NdArray::from_rows(&[[1u8, 0, 0], [1, 1, 0], [0, 0, 0]]).unwrap();
        assert!(matches!(
            Connectivity::from_values(&lopsided),
            Err(RegionError::InvalidConnectivity(msg)) if msg == NOT_SYMMETRIC
        ));

        let twos = NdArray::from_rows(&[[0u8, 2, 0], [1, 1, 1], [0, 2, 0]]).unwrap();
        assert!(matches!(
            Connectivity::from_values(&twos),
            Err(RegionError::InvalidConnectivity(msg)) if msg == INVALID_VALUES
        ));

        let column = NdArray::from_vec(&[3, 1], vec![true; 3]).unwrap();
        assert!(Connectivity::from_mask(column).is_ok());

        let row = NdArray::from_vec(&[1, 3], vec![true; 3]).unwrap();
        assert!(matches!(
            Connectivity::from_mask(row),
            Err(RegionError::InvalidConnectivity(msg)) if msg == INVALID_EXTENTS
        ));

        for dims in [[3, 1, 3], [3, 3, 1], [1, 3, 3]] {
            let n = dims.iter().product();
            let slab = NdArray::from_vec(&dims, vec![true; n]).unwrap();
            assert!(matches!(
                Connectivity::from_mask(slab),
                Err(RegionError::InvalidConnectivity(msg)) if msg == INVALID_CUBE
            ));
        }
    }

    #[test]
    fn test_causal_deltas_are_half() {
        let conn = Connectivity::from_code(26).unwrap();
        let causal = conn.causal_deltas();
        assert_eq!(causal.len(), 13);
        // Every causal offset is lexicographically negative.
        for delta in &causal {
            let first = delta.iter().find(|&&d| d != 0).copied();
            assert_eq!(first, Some(-1));
        }

        let four = Connectivity::from_code(4).unwrap();
        assert_eq!(four.causal_deltas(), vec![vec![-1, 0], vec![0, -1]]);
        assert_eq!(
            four.neighbour_deltas(),
            vec![vec![-1, 0], vec![0, -1], vec![0, 1], vec![1, 0]]
        );
    }

    #[test]
    fn test_broadcast() {
        let four = Connectivity::from_code(4).unwrap();
        let lifted = four.broadcast_to(3).unwrap();
        assert_eq!(lifted.dims(), &[1, 3, 3]);
        assert_eq!(lifted.neighbour_count(), 4);
        assert_eq!(lifted.broadcast_to(2).unwrap(), four);

        let six = Connectivity::from_code(6).unwrap();
        assert_eq!(
            six.broadcast_to(2),
            Err(RegionError::DimensionMismatch { mask: 3, image: 2 })
        );
    }

    #[test]
    fn test_offsets() {
        let shape = Shape::new([4, 5]).unwrap();
        let offsets = Connectivity::from_code(4)
            .unwrap()
            .offsets(&shape)
            .unwrap();
        assert_eq!(offsets, vec![-5, -1, 0, 1, 5]);

        let volume = Shape::new([2, 3, 4]).unwrap();
        let offsets = Connectivity::minimal(3).unwrap().offsets(&volume).unwrap();
        assert_eq!(offsets, vec![-12, -4, -1, 0, 1, 4, 12]);
    }

    #[test]
    fn test_planar_types() {
        for ty in [
            ConnectivityType::FourWay,
            ConnectivityType::SixWay,
            ConnectivityType::EightWay,
        ] {
            let conn = ty.to_connectivity().unwrap();
            assert!(check_connectivity(conn.mask()).is_ok());
            assert_eq!(ConnectivityType::from_connectivity(&conn), Some(ty));
            assert_eq!(ConnectivityType::from_code(ty.code()), Some(ty));
        }
        assert_eq!(ConnectivityType::default(), ConnectivityType::EightWay);

        let column = Connectivity::from_mask(NdArray::from_vec(&[3, 1], vec![true; 3]).unwrap())
            .unwrap();
        assert_eq!(ConnectivityType::from_connectivity(&column), None);
    }
}
