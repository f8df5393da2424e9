use super::FloatNum;

#[inline]
pub(crate) fn is_approx_zero(value: FloatNum, tolerance: FloatNum) -> bool {
    value.abs() <= tolerance
}

#[inline]
pub(crate) fn is_approx_eq(a: FloatNum, b: FloatNum, tolerance: FloatNum) -> bool {
    is_approx_zero(a - b, tolerance)
}

pub(crate) fn is_in_range(value: FloatNum, start: FloatNum, end: FloatNum, tolerance: FloatNum) -> bool {
    value >= start - tolerance && value <= end + tolerance
}
