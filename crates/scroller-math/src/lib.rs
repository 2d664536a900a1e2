//! # scroller-math
//!  a tiny wrapper around glam plus the integer helpers used for tiling

pub use glam;

pub type Vec2 = glam::Vec2; pub type IVec2 = glam::IVec2;
pub type UVec2 = glam::UVec2;

/// wraps `value` into `[0, period)`.
///
/// unlike `%` the result is never negative, a value that steps below zero
/// comes back in from the top of the range
///
/// # panics
///
/// panics if `period` is zero
#[inline]
pub fn wrap(value: i32, period: i32) -> i32
{
    value.rem_euclid(period)
}

#[cfg(test)]
mod tests
{
    use super::*;

    #[test]
    fn wrap_keeps_values_inside_the_period()
    {
        assert_eq!(wrap(0, 1600), 0);
        assert_eq!(wrap(1599, 1600), 1599);
        assert_eq!(wrap(1600, 1600), 0);
        assert_eq!(wrap(3205, 1600), 5);
    }

    #[test]
    fn wrap_of_negative_values_is_not_a_truncating_remainder()
    {
        assert_eq!(-4 % 1600, -4);
        assert_eq!(wrap(-4, 1600), 1596);
        assert_eq!(wrap(-1600, 1600), 0);
        assert_eq!(wrap(-1601, 1600), 1599);
    }
}
