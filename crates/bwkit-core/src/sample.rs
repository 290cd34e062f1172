//! Element types accepted as binary images
//!
//! Any numeric array can be used where a binary image is expected: zero is
//! background and every other value is foreground. [`Sample`] gives each
//! primitive element type that interpretation once, so kernels are written
//! once and monomorphized per element type.

/// A scalar that can be read as foreground or background
pub trait Sample: Copy {
    /// `true` for every non-zero value
    fn is_foreground(self) -> bool;

    /// `true` if the value is exactly 0 or 1
    fn is_binary(self) -> bool;
}

impl Sample for bool {
    #[inline]
    fn is_foreground(self) -> bool {
        self
    }

    #[inline]
    fn is_binary(self) -> bool {
        true
    }
}

macro_rules! impl_sample_int {
    ($($t:ty),*) => {
        $(
            impl Sample for $t {
                #[inline]
                fn is_foreground(self) -> bool {
                    self != 0
                }

                #[inline]
                fn is_binary(self) -> bool {
                    self == 0 || self == 1
                }
            }
        )*
    };
}

macro_rules! impl_sample_float {
    ($($t:ty),*) => {
        $(
            impl Sample for $t {
                // NaN compares unequal to zero and counts as foreground.
                #[inline]
                fn is_foreground(self) -> bool {
                    self != 0.0
                }

                #[inline]
                fn is_binary(self) -> bool {
                    self == 0.0 || self == 1.0
                }
            }
        )*
    };
}

impl_sample_int!(u8, u16, u32, u64, usize, i8, i16, i32, i64, isize);
impl_sample_float!(f32, f64);
