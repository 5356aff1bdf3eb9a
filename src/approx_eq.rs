//! Compare two scalars with a fixed absolute tolerance

/// f32 tolerance.
///
/// Two components are equal when they differ by at most this much.
pub const ZERO_TOLERANCE: f32 = 1e-6;

pub trait ApproxEq {
    /// Compare two objects with some tolerance
    fn approx_eq(self, rhs: Self) -> bool;
}

impl ApproxEq for f32 {
    /// The bound is inclusive. A NaN on either side never compares equal.
    #[inline]
    fn approx_eq(self, rhs: f32) -> bool {
        (self - rhs).abs() <= ZERO_TOLERANCE
    }
}
