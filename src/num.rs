//! Numeric predicates shared by all vector types.

/// Tolerance used throughout the crate for deciding that a magnitude is
/// effectively zero, that two values are equal within tolerance and that
/// points or vectors are coplanar.
pub const EPSILON: f32 = 1e-6;

/// Cosine of the half-angle between two quaternions above which slerp falls
/// back to normalized linear interpolation.
pub const SLERP_LINEAR_THRESHOLD: f32 = 0.9995;

/// Dot product of two unit vectors above which they are treated as parallel
/// (or, when negated, antiparallel).
pub const PARALLEL_THRESHOLD: f32 = 0.99999;

/// Magnitude of the x-component of a unit normal above which the world
/// y-axis instead of the world x-axis seeds an orthonormal basis.
pub const BASIS_SEED_THRESHOLD: f32 = 0.9;

/// Classification of a single floating point component.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ComponentClass {
    Finite,
    Nan,
    Infinite,
}

/// Classifies the given value as finite, NaN or infinite.
#[inline]
pub fn classify(value: f32) -> ComponentClass {
    if value.is_nan() {
        ComponentClass::Nan
    } else if value.is_infinite() {
        ComponentClass::Infinite
    } else {
        ComponentClass::Finite
    }
}

/// Whether the absolute value of the given value is below [`EPSILON`].
#[inline]
pub fn is_effectively_zero(value: f32) -> bool {
    value.abs() < EPSILON
}

/// Whether the two values differ by at most [`EPSILON`].
#[inline]
pub fn approx_eq(a: f32, b: f32) -> bool {
    (a - b).abs() <= EPSILON
}

/// Whether none of the given components is NaN or infinite.
#[inline]
pub fn all_finite(components: &[f32]) -> bool {
    components.iter().all(|component| component.is_finite())
}

/// Whether any of the given components is NaN.
#[inline]
pub fn any_nan(components: &[f32]) -> bool {
    components.iter().any(|component| component.is_nan())
}

/// Whether any of the given components is positive or negative infinity.
#[inline]
pub fn any_infinite(components: &[f32]) -> bool {
    components.iter().any(|component| component.is_infinite())
}

/// Clamps a cosine to `[-1, 1]` so that round-off cannot push it outside the
/// domain of `acos`.
#[inline]
pub(crate) fn clamp_cosine(cosine: f32) -> f32 {
    cosine.clamp(-1.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifying_values_works() {
        assert_eq!(classify(1.5), ComponentClass::Finite);
        assert_eq!(classify(-0.0), ComponentClass::Finite);
        assert_eq!(classify(f32::NAN), ComponentClass::Nan);
        assert_eq!(classify(f32::INFINITY), ComponentClass::Infinite);
        assert_eq!(classify(f32::NEG_INFINITY), ComponentClass::Infinite);
    }

    #[test]
    fn effectively_zero_uses_strict_bound() {
        assert!(is_effectively_zero(0.0));
        assert!(is_effectively_zero(-0.5 * EPSILON));
        assert!(!is_effectively_zero(EPSILON));
        assert!(!is_effectively_zero(f32::NAN));
    }

    #[test]
    fn approx_eq_accepts_differences_up_to_epsilon() {
        assert!(approx_eq(1.0, 1.0 + 0.5 * EPSILON));
        assert!(!approx_eq(1.0, 1.0 + 10.0 * EPSILON));
        assert!(!approx_eq(f32::NAN, f32::NAN));
    }

    #[test]
    fn aggregate_classification_works() {
        assert!(all_finite(&[0.0, 1.0, -2.0]));
        assert!(!all_finite(&[0.0, f32::INFINITY]));
        assert!(any_nan(&[0.0, f32::NAN]));
        assert!(!any_nan(&[0.0, f32::INFINITY]));
        assert!(any_infinite(&[f32::NEG_INFINITY, 1.0]));
        assert!(!any_infinite(&[f32::NAN, 1.0]));
    }

    #[test]
    fn clamping_cosine_works() {
        assert_eq!(clamp_cosine(1.0000001), 1.0);
        assert_eq!(clamp_cosine(-1.5), -1.0);
        assert_eq!(clamp_cosine(0.25), 0.25);
    }
}
