//! Two-component vectors.

use crate::{
    buffer::FlatComponents,
    error::{self, Result, VectorError},
    num::{self, ComponentClass, EPSILON},
    vector3::Vector3,
};
use bytemuck::{Pod, Zeroable};
use core::fmt;
use rand::Rng;
use std::f32::consts::TAU;

/// A 2-dimensional vector.
#[repr(transparent)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
#[derive(Clone, Copy, Default, Zeroable, Pod)]
pub struct Vector2 {
    inner: glam::Vec2,
}

impl Vector2 {
    /// The zero vector.
    pub const ZERO: Self = Self::new(0.0, 0.0);

    /// A vector with all components set to one.
    pub const ONE: Self = Self::new(1.0, 1.0);

    /// The x-axis unit vector.
    pub const UNIT_X: Self = Self::new(1.0, 0.0);

    /// The y-axis unit vector.
    pub const UNIT_Y: Self = Self::new(0.0, 1.0);

    /// A vector with all components set to positive infinity.
    pub const INFINITY: Self = Self::new(f32::INFINITY, f32::INFINITY);

    /// A vector with all components set to negative infinity.
    pub const NEG_INFINITY: Self = Self::new(f32::NEG_INFINITY, f32::NEG_INFINITY);

    /// Creates a new vector with the given components.
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self::wrap(glam::Vec2::new(x, y))
    }

    /// Creates a new vector with the same value for both components.
    #[inline]
    pub const fn same(value: f32) -> Self {
        Self::new(value, value)
    }

    /// Creates a vector from polar coordinates, with the angle in radians
    /// measured counterclockwise from the x-axis.
    #[inline]
    pub fn from_polar(radius: f32, angle: f32) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self::new(radius * cos, radius * sin)
    }

    /// The x-component.
    #[inline]
    pub const fn x(&self) -> f32 {
        self.inner.x
    }

    /// The y-component.
    #[inline]
    pub const fn y(&self) -> f32 {
        self.inner.y
    }

    /// A mutable reference to the x-component.
    #[inline]
    pub const fn x_mut(&mut self) -> &mut f32 {
        &mut self.inner.x
    }

    /// A mutable reference to the y-component.
    #[inline]
    pub const fn y_mut(&mut self) -> &mut f32 {
        &mut self.inner.y
    }

    /// Returns the component with the given index (0 for x, 1 for y).
    ///
    /// # Errors
    /// Returns [`VectorError::IndexOutOfRange`] for any other index.
    #[inline]
    pub fn at(&self, index: usize) -> Result<f32> {
        self.component_ref(index).copied()
    }

    /// Sets the component with the given index (0 for x, 1 for y).
    ///
    /// # Errors
    /// Returns [`VectorError::IndexOutOfRange`] for any other index, leaving
    /// the vector unchanged.
    #[inline]
    pub fn set(&mut self, index: usize, value: f32) -> Result<&mut Self> {
        *self.component_mut(index)? = value;
        Ok(self)
    }

    /// Returns the components as an array.
    #[inline]
    pub fn to_array(&self) -> [f32; 2] {
        self.inner.to_array()
    }

    /// Converts the vector to 3D by appending the given z-component.
    #[inline]
    pub const fn extended(&self, z: f32) -> Vector3 {
        Vector3::new(self.x(), self.y(), z)
    }

    /// Returns the polar coordinates `(radius, angle)` of the vector. The
    /// angle lies in `(-π, π]` and is zero when the radius is effectively
    /// zero.
    pub fn to_polar(&self) -> (f32, f32) {
        let radius = self.norm();
        if radius < EPSILON {
            (radius, 0.0)
        } else {
            (radius, self.y().atan2(self.x()))
        }
    }

    /// Computes the norm (length) of the vector.
    #[inline]
    pub fn norm(&self) -> f32 {
        self.inner.length()
    }

    /// Computes the square of the norm of the vector.
    #[inline]
    pub fn norm_squared(&self) -> f32 {
        self.inner.length_squared()
    }

    /// Computes the normalized version of the vector. If the norm is below
    /// [`EPSILON`], the zero vector is returned.
    #[inline]
    pub fn normalized(&self) -> Self {
        let norm = self.norm();
        if norm < EPSILON {
            Self::ZERO
        } else {
            Self::wrap(self.inner / norm)
        }
    }

    /// Normalizes the vector in place, following the same rules as
    /// [`Self::normalized`].
    #[inline]
    pub fn normalize_mut(&mut self) -> &mut Self {
        *self = self.normalized();
        self
    }

    /// Negates the vector in place.
    #[inline]
    pub fn negate_mut(&mut self) -> &mut Self {
        self.inner = -self.inner;
        self
    }

    /// Divides each component by the given scalar.
    ///
    /// # Errors
    /// Returns [`VectorError::DivisionByZero`] if the scalar is zero.
    #[inline]
    pub fn div_scalar(&self, scalar: f32) -> Result<Self> {
        if scalar == 0.0 {
            return Err(VectorError::DivisionByZero);
        }
        Ok(Self::wrap(self.inner / scalar))
    }

    /// Divides each component by the given scalar in place.
    ///
    /// # Errors
    /// Returns [`VectorError::DivisionByZero`] if the scalar is zero, leaving
    /// the vector unchanged.
    #[inline]
    pub fn div_scalar_mut(&mut self, scalar: f32) -> Result<&mut Self> {
        *self = self.div_scalar(scalar)?;
        Ok(self)
    }

    /// Multiplies each component by the corresponding component in another
    /// vector.
    #[inline]
    pub fn component_mul(&self, other: &Self) -> Self {
        Self::wrap(self.inner * other.inner)
    }

    /// Divides each component by the corresponding component in another
    /// vector.
    ///
    /// # Errors
    /// Returns [`VectorError::ZeroComponent`] if any component of `other` is
    /// zero.
    #[inline]
    pub fn component_div(&self, other: &Self) -> Result<Self> {
        if let Some(index) = error::first_zero_component(&other.to_array()) {
            return Err(VectorError::ZeroComponent { index });
        }
        Ok(Self::wrap(self.inner / other.inner))
    }

    /// Returns a vector with the absolute value of each component.
    #[inline]
    pub fn component_abs(&self) -> Self {
        Self::wrap(self.inner.abs())
    }

    /// Returns a vector where each component is the minimum of the
    /// corresponding component in this and another vector.
    #[inline]
    pub fn component_min(&self, other: &Self) -> Self {
        Self::wrap(self.inner.min(other.inner))
    }

    /// Returns a vector where each component is the maximum of the
    /// corresponding component in this and another vector.
    #[inline]
    pub fn component_max(&self, other: &Self) -> Self {
        Self::wrap(self.inner.max(other.inner))
    }

    /// Returns a vector with the given closure applied to each component.
    #[inline]
    pub fn mapped(&self, mut f: impl FnMut(f32) -> f32) -> Self {
        Self::new(f(self.x()), f(self.y()))
    }

    /// Returns the smallest component in the vector.
    #[inline]
    pub fn min_component(&self) -> f32 {
        self.inner.min_element()
    }

    /// Returns the largest component in the vector.
    #[inline]
    pub fn max_component(&self) -> f32 {
        self.inner.max_element()
    }

    /// Computes the dot product of this vector with another.
    #[inline]
    pub fn dot(&self, other: &Self) -> f32 {
        self.inner.dot(other.inner)
    }

    /// Computes the 2D cross product with another vector, which is the
    /// z-component of the 3D cross product of the two vectors embedded in the
    /// xy-plane.
    #[inline]
    pub fn cross(&self, other: &Self) -> f32 {
        self.x() * other.y() - self.y() * other.x()
    }

    /// Rotates the vector counterclockwise by the given angle in radians.
    #[inline]
    pub fn rotated(&self, angle: f32) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self::new(
            self.x() * cos - self.y() * sin,
            self.x() * sin + self.y() * cos,
        )
    }

    /// Rotates the vector counterclockwise by the given angle in radians
    /// about the given center point.
    #[inline]
    pub fn rotated_about(&self, center: &Self, angle: f32) -> Self {
        (self - center).rotated(angle) + center
    }

    /// Rotates the vector counterclockwise by exactly 90 degrees.
    #[inline]
    pub fn rotated_90(&self) -> Self {
        Self::new(-self.y(), self.x())
    }

    /// Rotates the vector clockwise by exactly 90 degrees.
    #[inline]
    pub fn rotated_neg_90(&self) -> Self {
        Self::new(self.y(), -self.x())
    }

    /// Returns the vector perpendicular to this one obtained by a
    /// counterclockwise quarter turn. It has the same norm as this vector.
    #[inline]
    pub fn perpendicular(&self) -> Self {
        self.rotated_90()
    }

    /// Computes the Euclidean distance to another vector.
    #[inline]
    pub fn distance(&self, other: &Self) -> f32 {
        self.inner.distance(other.inner)
    }

    /// Computes the squared Euclidean distance to another vector.
    #[inline]
    pub fn distance_squared(&self, other: &Self) -> f32 {
        self.inner.distance_squared(other.inner)
    }

    /// Computes the Manhattan (taxicab) distance to another vector.
    #[inline]
    pub fn manhattan_distance(&self, other: &Self) -> f32 {
        (self.inner - other.inner).abs().element_sum()
    }

    /// Computes the unsigned angle in radians between this vector and
    /// another. Returns zero if either vector has an effectively zero norm.
    pub fn angle_to(&self, other: &Self) -> f32 {
        let denominator = (self.norm_squared() * other.norm_squared()).sqrt();
        if denominator < EPSILON {
            return 0.0;
        }
        num::clamp_cosine(self.dot(other) / denominator).acos()
    }

    /// Linearly interpolates between this vector (`t = 0`) and another
    /// (`t = 1`).
    #[inline]
    pub fn lerp(&self, other: &Self, t: f32) -> Self {
        Self::wrap(self.inner + (other.inner - self.inner) * t)
    }

    /// Spherically interpolates from this vector (`t = 0`) toward another
    /// (`t = 1`).
    ///
    /// The sweep angle is `acos` of the clamped raw dot product, so the
    /// direction is only interpolated along the true arc when both inputs
    /// are unit vectors. The norm is interpolated linearly. When the two
    /// vectors are parallel or antiparallel there is no well-defined sweep
    /// direction, and the result stays along this vector's direction.
    pub fn slerp(&self, other: &Self, t: f32) -> Self {
        let dot = num::clamp_cosine(self.dot(other));
        let theta = dot.acos() * t;
        let relative = (other - self * dot).normalized();
        let (sin, cos) = theta.sin_cos();
        let direction = self.normalized() * cos + relative * sin;
        direction * (self.norm() + (other.norm() - self.norm()) * t)
    }

    /// Reflects this vector off a surface with the given unit normal.
    #[inline]
    pub fn reflected(&self, normal: &Self) -> Self {
        self - normal * (2.0 * self.dot(normal))
    }

    /// Computes the projection of this vector onto another. Returns the zero
    /// vector if the other vector has an effectively zero norm.
    #[inline]
    pub fn projected_onto(&self, other: &Self) -> Self {
        let norm_squared = other.norm_squared();
        if norm_squared < EPSILON {
            return Self::ZERO;
        }
        other * (self.dot(other) / norm_squared)
    }

    /// Computes the component of this vector perpendicular to another (the
    /// rejection).
    #[inline]
    pub fn rejected_from(&self, other: &Self) -> Self {
        self - self.projected_onto(other)
    }

    /// Computes the signed area of the triangle with the given vertices. The
    /// area is positive when the vertices wind counterclockwise.
    #[inline]
    pub fn signed_triangle_area(a: &Self, b: &Self, c: &Self) -> f32 {
        0.5 * (b - a).cross(&(c - a))
    }

    /// Computes the barycentric coordinates `(u, v, w)` of this point with
    /// respect to the triangle `(a, b, c)`, so that the point equals
    /// `u·a + v·b + w·c`.
    ///
    /// The computation divides by twice the triangle's area, so a degenerate
    /// triangle yields non-finite coordinates. Callers must avoid degenerate
    /// triangles.
    pub fn barycentric(&self, a: &Self, b: &Self, c: &Self) -> Vector3 {
        let v0 = b - a;
        let v1 = c - a;
        let v2 = self - a;

        let d00 = v0.dot(&v0);
        let d01 = v0.dot(&v1);
        let d11 = v1.dot(&v1);
        let d20 = v2.dot(&v0);
        let d21 = v2.dot(&v1);

        let denominator = d00 * d11 - d01 * d01;
        let v = (d11 * d20 - d01 * d21) / denominator;
        let w = (d00 * d21 - d01 * d20) / denominator;
        Vector3::new(1.0 - v - w, v, w)
    }

    /// Whether this point lies inside or on the boundary of the triangle
    /// `(a, b, c)`, regardless of winding.
    pub fn is_in_triangle(&self, a: &Self, b: &Self, c: &Self) -> bool {
        let d1 = (b - a).cross(&(self - a));
        let d2 = (c - b).cross(&(self - b));
        let d3 = (a - c).cross(&(self - c));

        let has_negative = d1 < 0.0 || d2 < 0.0 || d3 < 0.0;
        let has_positive = d1 > 0.0 || d2 > 0.0 || d3 > 0.0;

        !(has_negative && has_positive)
    }

    /// Generates a unit vector with a uniformly distributed direction.
    pub fn random_unit(rng: &mut impl Rng) -> Self {
        Self::from_polar(1.0, rng.random::<f32>() * TAU)
    }

    /// Generates a point uniformly distributed over the area of the disk with
    /// the given radius centered at the origin.
    pub fn random_in_disk(rng: &mut impl Rng, radius: f32) -> Self {
        let angle = rng.random::<f32>() * TAU;
        let distance = radius * rng.random::<f32>().sqrt();
        Self::from_polar(distance, angle)
    }

    /// Generates a point uniformly distributed over the axis-aligned
    /// rectangle spanned by the given corners.
    pub fn random_in_rectangle(rng: &mut impl Rng, min: &Self, max: &Self) -> Self {
        let fractions = Self::new(rng.random::<f32>(), rng.random::<f32>());
        min + (max - min).component_mul(&fractions)
    }

    /// Whether no component is NaN or infinite.
    #[inline]
    pub fn is_valid(&self) -> bool {
        num::all_finite(&self.to_array())
    }

    /// Whether any component is NaN.
    #[inline]
    pub fn has_nan(&self) -> bool {
        num::any_nan(&self.to_array())
    }

    /// Whether any component is positive or negative infinity.
    #[inline]
    pub fn has_infinite(&self) -> bool {
        num::any_infinite(&self.to_array())
    }

    /// Classifies each component as finite, NaN or infinite.
    #[inline]
    pub fn component_classes(&self) -> [ComponentClass; 2] {
        self.to_array().map(num::classify)
    }

    /// Whether every component differs from the corresponding component of
    /// `other` by at most [`EPSILON`].
    #[inline]
    pub fn approx_eq(&self, other: &Self) -> bool {
        self.inner.abs_diff_eq(other.inner, EPSILON)
    }

    pub(crate) fn component_ref(&self, index: usize) -> Result<&f32> {
        match index {
            0 => Ok(&self.inner.x),
            1 => Ok(&self.inner.y),
            _ => Err(VectorError::IndexOutOfRange {
                index,
                dimension: 2,
            }),
        }
    }

    pub(crate) fn component_mut(&mut self, index: usize) -> Result<&mut f32> {
        match index {
            0 => Ok(&mut self.inner.x),
            1 => Ok(&mut self.inner.y),
            _ => Err(VectorError::IndexOutOfRange {
                index,
                dimension: 2,
            }),
        }
    }

    #[inline]
    pub(crate) const fn wrap(inner: glam::Vec2) -> Self {
        Self { inner }
    }
}

impl From<[f32; 2]> for Vector2 {
    #[inline]
    fn from([x, y]: [f32; 2]) -> Self {
        Self::new(x, y)
    }
}

impl From<Vector2> for [f32; 2] {
    #[inline]
    fn from(vector: Vector2) -> Self {
        vector.to_array()
    }
}

impl FlatComponents for Vector2 {
    const COMPONENT_COUNT: usize = 2;
}

impl_vector_arithmetic!(Vector2);

impl_checked_index!(Vector2);

impl_exact_eq_and_hash!(Vector2);

impl_tolerance_eq!(Vector2);

impl fmt::Debug for Vector2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Vector2")
            .field("x", &self.inner.x)
            .field("y", &self.inner.y)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::op_ref)]

    use super::*;
    use approx::assert_abs_diff_eq;
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;
    use std::f32::consts::{FRAC_PI_2, PI};

    #[test]
    fn computing_vector2_norm_works() {
        let v = Vector2::new(3.0, 4.0);
        assert_abs_diff_eq!(v.norm(), 5.0, epsilon = EPSILON);
        assert_abs_diff_eq!(v.norm_squared(), 25.0, epsilon = EPSILON);
    }

    #[test]
    fn normalizing_vector2_gives_unit_vector() {
        let normalized = Vector2::new(3.0, 4.0).normalized();
        assert_abs_diff_eq!(normalized.norm(), 1.0, epsilon = EPSILON);
        assert_abs_diff_eq!(normalized, Vector2::new(0.6, 0.8));
    }

    #[test]
    fn normalizing_zero_vector2_gives_zero() {
        assert_eq!(Vector2::ZERO.normalized(), Vector2::ZERO);
        assert_eq!(Vector2::new(1e-8, -1e-8).normalized(), Vector2::ZERO);
    }

    #[test]
    fn normalizing_in_place_returns_receiver_for_chaining() {
        let mut v = Vector2::new(0.0, 2.0);
        v.normalize_mut().negate_mut();
        assert_eq!(v, Vector2::new(-0.0, -1.0));
    }

    #[test]
    fn arithmetic_operators_work_for_all_reference_combinations() {
        let a = Vector2::new(1.0, 2.0);
        let b = Vector2::new(3.0, -4.0);
        assert_eq!(&a + &b, Vector2::new(4.0, -2.0));
        assert_eq!(a - b, Vector2::new(-2.0, 6.0));
        assert_eq!(&a * 2.0, Vector2::new(2.0, 4.0));
        assert_eq!(2.0 * a, Vector2::new(2.0, 4.0));
        assert_eq!(-a, Vector2::new(-1.0, -2.0));
        assert_eq!(b / 2.0, Vector2::new(1.5, -2.0));

        let mut c = a;
        c += b;
        c -= &a;
        c *= 2.0;
        c /= 4.0;
        assert_eq!(c, Vector2::new(1.5, -2.0));
    }

    #[test]
    fn dividing_vector2_by_zero_scalar_fails() {
        let mut v = Vector2::new(1.0, 2.0);
        assert_eq!(v.div_scalar(0.0), Err(VectorError::DivisionByZero));
        assert_eq!(
            v.div_scalar_mut(-0.0).map(|v| *v),
            Err(VectorError::DivisionByZero)
        );
        assert_eq!(v, Vector2::new(1.0, 2.0));
    }

    #[test]
    #[should_panic(expected = "Division by zero")]
    fn dividing_vector2_by_zero_with_operator_panics() {
        let _ = Vector2::new(1.0, 2.0) / 0.0;
    }

    #[test]
    fn component_division_by_vector_with_zero_component_fails() {
        let v = Vector2::new(4.0, 9.0);
        assert_eq!(
            v.component_div(&Vector2::new(2.0, 3.0)),
            Ok(Vector2::new(2.0, 3.0))
        );
        assert_eq!(
            v.component_div(&Vector2::new(2.0, 0.0)),
            Err(VectorError::ZeroComponent { index: 1 })
        );
    }

    #[test]
    fn vector2_component_operations_work() {
        let v1 = Vector2::new(-1.0, 2.0);
        let v2 = Vector2::new(3.0, -4.0);

        assert_eq!(v1.component_abs(), Vector2::new(1.0, 2.0));
        assert_eq!(v1.component_mul(&v2), Vector2::new(-3.0, -8.0));
        assert_eq!(v1.component_min(&v2), Vector2::new(-1.0, -4.0));
        assert_eq!(v1.component_max(&v2), Vector2::new(3.0, 2.0));
        assert_eq!(v1.min_component(), -1.0);
        assert_eq!(v1.max_component(), 2.0);
        assert_eq!(v1.mapped(|c| c * 10.0), Vector2::new(-10.0, 20.0));
    }

    #[test]
    fn indexing_vector2_works() {
        let mut v = Vector2::new(5.0, 6.0);
        assert_eq!(v.at(0), Ok(5.0));
        assert_eq!(v[1], 6.0);
        v[0] = 7.0;
        v.set(1, 8.0).unwrap();
        assert_eq!(v, Vector2::new(7.0, 8.0));
    }

    #[test]
    fn out_of_range_vector2_index_fails() {
        let mut v = Vector2::new(5.0, 6.0);
        let err = VectorError::IndexOutOfRange {
            index: 2,
            dimension: 2,
        };
        assert_eq!(v.at(2), Err(err));
        assert_eq!(v.set(2, 1.0).map(|v| *v), Err(err));
        assert_eq!(v, Vector2::new(5.0, 6.0));
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn out_of_range_vector2_index_operator_panics() {
        let v = Vector2::new(5.0, 6.0);
        let _ = v[2];
    }

    #[test]
    fn vector2_cross_is_z_of_embedded_cross() {
        let a = Vector2::new(1.0, 2.0);
        let b = Vector2::new(-3.0, 0.5);
        let embedded = a.extended(0.0).cross(&b.extended(0.0));
        assert_abs_diff_eq!(a.cross(&b), embedded.z(), epsilon = EPSILON);
    }

    #[test]
    fn rotating_vector2_works() {
        let v = Vector2::new(1.0, 0.0);
        assert_abs_diff_eq!(v.rotated(FRAC_PI_2), Vector2::new(0.0, 1.0));
        assert_eq!(v.rotated_90(), Vector2::new(-0.0, 1.0));
        assert_eq!(v.rotated_neg_90(), Vector2::new(0.0, -1.0));
        assert_abs_diff_eq!(
            Vector2::new(2.0, 1.0).rotated_about(&Vector2::new(1.0, 1.0), PI),
            Vector2::new(0.0, 1.0)
        );
    }

    #[test]
    fn exact_quarter_turns_match_trigonometric_rotation() {
        let v = Vector2::new(3.0, -2.0);
        assert_abs_diff_eq!(v.rotated_90(), v.rotated(FRAC_PI_2), epsilon = 1e-5);
        assert_abs_diff_eq!(v.rotated_neg_90(), v.rotated(-FRAC_PI_2), epsilon = 1e-5);
        assert_eq!(v.perpendicular().dot(&v), 0.0);
    }

    #[test]
    fn polar_conversion_roundtrips() {
        let v = Vector2::new(-1.0, 1.0);
        let (radius, angle) = v.to_polar();
        assert_abs_diff_eq!(radius, 2.0_f32.sqrt(), epsilon = EPSILON);
        assert_abs_diff_eq!(angle, 3.0 * PI / 4.0, epsilon = EPSILON);
        assert_abs_diff_eq!(Vector2::from_polar(radius, angle), v);
    }

    #[test]
    fn polar_angle_of_zero_vector_is_zero() {
        assert_eq!(Vector2::ZERO.to_polar(), (0.0, 0.0));
    }

    #[test]
    fn distances_work() {
        let a = Vector2::new(1.0, 2.0);
        let b = Vector2::new(4.0, -2.0);
        assert_abs_diff_eq!(a.distance(&b), 5.0, epsilon = EPSILON);
        assert_abs_diff_eq!(a.distance_squared(&b), 25.0, epsilon = EPSILON);
        assert_abs_diff_eq!(a.manhattan_distance(&b), 7.0, epsilon = EPSILON);
        assert_eq!(a.distance(&b), b.distance(&a));
    }

    #[test]
    fn angle_between_vector2s_works() {
        let a = Vector2::new(2.0, 0.0);
        assert_abs_diff_eq!(a.angle_to(&Vector2::new(0.0, 3.0)), FRAC_PI_2, epsilon = EPSILON);
        assert_abs_diff_eq!(a.angle_to(&Vector2::new(-1.0, 0.0)), PI, epsilon = EPSILON);
        assert_eq!(a.angle_to(&Vector2::ZERO), 0.0);
    }

    #[test]
    fn angle_between_identical_vectors_is_not_nan() {
        let a = Vector2::new(0.1, 0.7);
        let angle = a.angle_to(&a);
        assert!(!angle.is_nan());
        assert_abs_diff_eq!(angle, 0.0, epsilon = 1e-3);
    }

    #[test]
    fn lerp_vector2_works() {
        let a = Vector2::new(0.0, 10.0);
        let b = Vector2::new(10.0, 0.0);
        assert_eq!(a.lerp(&b, 0.0), a);
        assert_eq!(a.lerp(&b, 1.0), b);
        assert_abs_diff_eq!(a.lerp(&b, 0.25), Vector2::new(2.5, 7.5));
    }

    #[test]
    fn slerp_between_unit_vector2s_follows_arc() {
        let a = Vector2::UNIT_X;
        let b = Vector2::UNIT_Y;
        assert_abs_diff_eq!(a.slerp(&b, 0.0), a);
        assert_abs_diff_eq!(a.slerp(&b, 1.0), b);
        let halfway = a.slerp(&b, 0.5);
        assert_abs_diff_eq!(halfway.norm(), 1.0, epsilon = EPSILON);
        assert_abs_diff_eq!(halfway, Vector2::new(0.5_f32.sqrt(), 0.5_f32.sqrt()));
    }

    #[test]
    fn slerp_blends_norms_linearly() {
        let a = Vector2::new(2.0, 0.0);
        let b = Vector2::new(4.0, 0.0);
        assert_abs_diff_eq!(a.slerp(&b, 0.5).norm(), 3.0, epsilon = EPSILON);
    }

    #[test]
    fn reflecting_vector2_works() {
        let v = Vector2::new(1.0, -1.0);
        assert_abs_diff_eq!(v.reflected(&Vector2::UNIT_Y), Vector2::new(1.0, 1.0));
    }

    #[test]
    fn projection_and_rejection_sum_to_vector() {
        let v = Vector2::new(3.0, 4.0);
        let onto = Vector2::new(2.0, 0.0);
        let projection = v.projected_onto(&onto);
        let rejection = v.rejected_from(&onto);
        assert_abs_diff_eq!(projection, Vector2::new(3.0, 0.0));
        assert_abs_diff_eq!(rejection, Vector2::new(0.0, 4.0));
        assert_abs_diff_eq!(projection + rejection, v);
        assert_eq!(v.projected_onto(&Vector2::ZERO), Vector2::ZERO);
    }

    #[test]
    fn signed_triangle_area_gives_winding() {
        let a = Vector2::new(0.0, 0.0);
        let b = Vector2::new(2.0, 0.0);
        let c = Vector2::new(0.0, 2.0);
        assert_abs_diff_eq!(Vector2::signed_triangle_area(&a, &b, &c), 2.0, epsilon = EPSILON);
        assert_abs_diff_eq!(Vector2::signed_triangle_area(&a, &c, &b), -2.0, epsilon = EPSILON);
    }

    #[test]
    fn point_in_triangle_test_works_for_both_windings() {
        let a = Vector2::new(0.0, 0.0);
        let b = Vector2::new(4.0, 0.0);
        let c = Vector2::new(0.0, 4.0);
        let inside = Vector2::new(1.0, 1.0);
        let outside = Vector2::new(3.0, 3.0);
        assert!(inside.is_in_triangle(&a, &b, &c));
        assert!(inside.is_in_triangle(&a, &c, &b));
        assert!(!outside.is_in_triangle(&a, &b, &c));
        assert!(Vector2::new(2.0, 0.0).is_in_triangle(&a, &b, &c));
    }

    #[test]
    fn barycentric_coordinates_reconstruct_point() {
        let a = Vector2::new(0.0, 0.0);
        let b = Vector2::new(4.0, 0.0);
        let c = Vector2::new(0.0, 4.0);
        let p = Vector2::new(1.0, 2.0);
        let bary = p.barycentric(&a, &b, &c);
        assert_abs_diff_eq!(bary, Vector3::new(0.25, 0.25, 0.5));
        let reconstructed = a * bary.x() + b * bary.y() + c * bary.z();
        assert_abs_diff_eq!(reconstructed, p);
    }

    #[test]
    fn barycentric_coordinates_of_degenerate_triangle_are_not_finite() {
        let a = Vector2::new(0.0, 0.0);
        let b = Vector2::new(1.0, 1.0);
        let c = Vector2::new(2.0, 2.0);
        assert!(!Vector2::new(0.5, 0.0).barycentric(&a, &b, &c).is_valid());
    }

    #[test]
    fn random_unit_vector2_has_unit_norm() {
        let mut rng = Pcg64Mcg::seed_from_u64(0);
        for _ in 0..100 {
            assert_abs_diff_eq!(Vector2::random_unit(&mut rng).norm(), 1.0, epsilon = 1e-5);
        }
    }

    #[test]
    fn random_points_stay_in_their_regions() {
        let mut rng = Pcg64Mcg::seed_from_u64(1);
        let min = Vector2::new(-1.0, 2.0);
        let max = Vector2::new(3.0, 5.0);
        for _ in 0..100 {
            assert!(Vector2::random_in_disk(&mut rng, 2.0).norm() <= 2.0 + EPSILON);
            let p = Vector2::random_in_rectangle(&mut rng, &min, &max);
            assert!(p.x() >= min.x() && p.x() <= max.x());
            assert!(p.y() >= min.y() && p.y() <= max.y());
        }
    }

    #[test]
    fn random_disk_points_have_uniform_area_density() {
        let mut rng = Pcg64Mcg::seed_from_u64(2);
        let n = 20_000;
        let inner = (0..n)
            .filter(|_| Vector2::random_in_disk(&mut rng, 1.0).norm() < 0.5)
            .count();
        // A quarter of the area lies within half the radius
        let fraction = inner as f32 / n as f32;
        assert_abs_diff_eq!(fraction, 0.25, epsilon = 0.02);
    }

    #[test]
    fn validity_checks_work() {
        assert!(Vector2::new(1.0, 2.0).is_valid());
        assert!(!Vector2::INFINITY.is_valid());
        assert!(Vector2::NEG_INFINITY.has_infinite());
        assert!(Vector2::new(f32::NAN, 0.0).has_nan());
        assert_eq!(
            Vector2::new(f32::NAN, f32::INFINITY).component_classes(),
            [ComponentClass::Nan, ComponentClass::Infinite]
        );
    }

    #[test]
    fn exact_equality_compares_bits() {
        assert_ne!(Vector2::new(0.0, 1.0), Vector2::new(-0.0, 1.0));
        let nan = Vector2::new(f32::NAN, 1.0);
        assert_eq!(nan, nan);
        assert!(Vector2::new(1.0, 1.0).approx_eq(&Vector2::new(1.0 + 1e-7, 1.0)));
    }

    #[test]
    fn constants_are_unaffected_by_mutating_copies() {
        let mut v = Vector2::UNIT_X;
        v *= 5.0;
        v.normalize_mut().negate_mut();
        assert_eq!(Vector2::UNIT_X, Vector2::new(1.0, 0.0));
    }
}
