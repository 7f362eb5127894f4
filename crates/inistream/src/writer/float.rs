use core::fmt;

/// General notation for floats: the shortest digits that parse back to the
/// same value, switching to exponent form for very large or very small
/// magnitudes.
///
/// `1.0` renders as `1`, `0.25` as `0.25`, `1e20` as `1e20`.
#[derive(Debug, Clone, Copy)]
pub(crate) struct GeneralFloat(pub(crate) f64);

const EXPONENT_ABOVE: f64 = 1e16;
const EXPONENT_BELOW: f64 = 1e-5;

impl fmt::Display for GeneralFloat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = self.0;
        let magnitude = value.abs();
        if value.is_finite()
            && magnitude != 0.0
            && !(EXPONENT_BELOW..EXPONENT_ABOVE).contains(&magnitude)
        {
            write!(f, "{value:e}")
        } else {
            write!(f, "{value}")
        }
    }
}
