//! Three-component vectors.

use crate::{
    buffer::FlatComponents,
    error::{self, Result, VectorError},
    num::{self, BASIS_SEED_THRESHOLD, ComponentClass, EPSILON},
    vector2::Vector2,
    vector4::Vector4,
};
use bytemuck::{Pod, Zeroable};
use core::fmt;
use rand::Rng;
use std::f32::consts::TAU;

/// A 3-dimensional vector.
#[repr(transparent)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
#[derive(Clone, Copy, Default, Zeroable, Pod)]
pub struct Vector3 {
    inner: glam::Vec3,
}

impl Vector3 {
    /// The zero vector.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);

    /// A vector with all components set to one.
    pub const ONE: Self = Self::new(1.0, 1.0, 1.0);

    /// The x-axis unit vector.
    pub const UNIT_X: Self = Self::new(1.0, 0.0, 0.0);

    /// The y-axis unit vector.
    pub const UNIT_Y: Self = Self::new(0.0, 1.0, 0.0);

    /// The z-axis unit vector.
    pub const UNIT_Z: Self = Self::new(0.0, 0.0, 1.0);

    /// A vector with all components set to positive infinity.
    pub const INFINITY: Self = Self::same(f32::INFINITY);

    /// A vector with all components set to negative infinity.
    pub const NEG_INFINITY: Self = Self::same(f32::NEG_INFINITY);

    /// Creates a new vector with the given components.
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self::wrap(glam::Vec3::new(x, y, z))
    }

    /// Creates a new vector with the same value for all components.
    #[inline]
    pub const fn same(value: f32) -> Self {
        Self::new(value, value, value)
    }

    /// Creates a vector from spherical coordinates: the radius, the polar
    /// angle `φ` measured from the z-axis and the azimuthal angle `θ`
    /// measured counterclockwise from the x-axis in the xy-plane.
    #[inline]
    pub fn from_spherical(radius: f32, polar_angle: f32, azimuthal_angle: f32) -> Self {
        let (sin_polar, cos_polar) = polar_angle.sin_cos();
        let (sin_azimuth, cos_azimuth) = azimuthal_angle.sin_cos();
        Self::new(
            radius * sin_polar * cos_azimuth,
            radius * sin_polar * sin_azimuth,
            radius * cos_polar,
        )
    }

    /// Creates a vector from cylindrical coordinates: the radial distance
    /// from the z-axis, the azimuthal angle measured counterclockwise from
    /// the x-axis and the height along the z-axis.
    #[inline]
    pub fn from_cylindrical(radius: f32, azimuthal_angle: f32, height: f32) -> Self {
        let (sin, cos) = azimuthal_angle.sin_cos();
        Self::new(radius * cos, radius * sin, height)
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

    /// The z-component.
    #[inline]
    pub const fn z(&self) -> f32 {
        self.inner.z
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

    /// A mutable reference to the z-component.
    #[inline]
    pub const fn z_mut(&mut self) -> &mut f32 {
        &mut self.inner.z
    }

    /// Returns the component with the given index (0 for x, 1 for y, 2 for
    /// z).
    ///
    /// # Errors
    /// Returns [`VectorError::IndexOutOfRange`] for any other index.
    #[inline]
    pub fn at(&self, index: usize) -> Result<f32> {
        self.component_ref(index).copied()
    }

    /// Sets the component with the given index.
    ///
    /// # Errors
    /// Returns [`VectorError::IndexOutOfRange`] if the index is not below 3,
    /// leaving the vector unchanged.
    #[inline]
    pub fn set(&mut self, index: usize, value: f32) -> Result<&mut Self> {
        *self.component_mut(index)? = value;
        Ok(self)
    }

    /// Returns the components as an array.
    #[inline]
    pub fn to_array(&self) -> [f32; 3] {
        self.inner.to_array()
    }

    /// The x- and y-components.
    #[inline]
    pub const fn xy(&self) -> Vector2 {
        Vector2::new(self.x(), self.y())
    }

    /// Converts the vector to 4D by appending the given w-component.
    #[inline]
    pub fn extended(&self, w: f32) -> Vector4 {
        Vector4::new(self.x(), self.y(), self.z(), w)
    }

    /// Returns the spherical coordinates `(radius, polar_angle,
    /// azimuthal_angle)` of the vector, with the polar angle in `[0, π]` and
    /// the azimuthal angle in `(-π, π]`. Both angles are zero when the radius
    /// is effectively zero.
    pub fn to_spherical(&self) -> (f32, f32, f32) {
        let radius = self.norm();
        if radius < EPSILON {
            return (radius, 0.0, 0.0);
        }
        let polar_angle = num::clamp_cosine(self.z() / radius).acos();
        let azimuthal_angle = self.y().atan2(self.x());
        (radius, polar_angle, azimuthal_angle)
    }

    /// Returns the cylindrical coordinates `(radius, azimuthal_angle,
    /// height)` of the vector. The azimuthal angle is zero when the vector
    /// lies effectively on the z-axis.
    pub fn to_cylindrical(&self) -> (f32, f32, f32) {
        let (radius, azimuthal_angle) = self.xy().to_polar();
        (radius, azimuthal_angle, self.z())
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

    #[inline]
    pub fn component_abs(&self) -> Self {
        Self::wrap(self.inner.abs())
    }

    #[inline]
    pub fn component_min(&self, other: &Self) -> Self {
        Self::wrap(self.inner.min(other.inner))
    }

    #[inline]
    pub fn component_max(&self, other: &Self) -> Self {
        Self::wrap(self.inner.max(other.inner))
    }

    /// Returns a vector with the given closure applied to each component.
    #[inline]
    pub fn mapped(&self, mut f: impl FnMut(f32) -> f32) -> Self {
        Self::new(f(self.x()), f(self.y()), f(self.z()))
    }

    #[inline]
    pub fn min_component(&self) -> f32 {
        self.inner.min_element()
    }

    #[inline]
    pub fn max_component(&self) -> f32 {
        self.inner.max_element()
    }

    /// Computes the dot product of this vector with another.
    #[inline]
    pub fn dot(&self, other: &Self) -> f32 {
        self.inner.dot(other.inner)
    }

    /// Computes the right-handed cross product of this vector with another.
    #[inline]
    pub fn cross(&self, other: &Self) -> Self {
        Self::wrap(self.inner.cross(other.inner))
    }

    /// Computes the scalar triple product `self · (b × c)`.
    #[inline]
    pub fn triple_product(&self, b: &Self, c: &Self) -> f32 {
        self.dot(&b.cross(c))
    }

    /// Whether this vector and the two given vectors lie in a common plane
    /// through the origin.
    #[inline]
    pub fn is_coplanar_with(&self, b: &Self, c: &Self) -> bool {
        num::is_effectively_zero(self.triple_product(b, c))
    }

    /// Whether the four given points lie in a common plane.
    #[inline]
    pub fn are_points_coplanar(p0: &Self, p1: &Self, p2: &Self, p3: &Self) -> bool {
        (p1 - p0).is_coplanar_with(&(p2 - p0), &(p3 - p0))
    }

    /// Computes the area of the triangle with the given vertices.
    #[inline]
    pub fn triangle_area(a: &Self, b: &Self, c: &Self) -> f32 {
        0.5 * (b - a).cross(&(c - a)).norm()
    }

    /// Computes the signed volume of the tetrahedron with the given
    /// vertices. The volume is positive when `d` lies on the side of the
    /// triangle `(a, b, c)` that its counterclockwise winding faces.
    #[inline]
    pub fn signed_tetrahedron_volume(a: &Self, b: &Self, c: &Self, d: &Self) -> f32 {
        (b - a).triple_product(&(c - a), &(d - a)) / 6.0
    }

    /// Computes the volume of the tetrahedron with the given vertices.
    #[inline]
    pub fn tetrahedron_volume(a: &Self, b: &Self, c: &Self, d: &Self) -> f32 {
        Self::signed_tetrahedron_volume(a, b, c, d).abs()
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

    #[inline]
    pub fn lerp(&self, other: &Self, t: f32) -> Self {
        Self::wrap(self.inner + (other.inner - self.inner) * t)
    }

    /// Spherically interpolates from this vector (`t = 0`) toward another
    /// (`t = 1`), using the same formula as [`Vector2::slerp`]. The direction
    /// only follows the true great arc when both inputs are unit vectors.
    pub fn slerp(&self, other: &Self, t: f32) -> Self {
        let dot = num::clamp_cosine(self.dot(other));
        let theta = dot.acos() * t;
        let relative = (other - self * dot).normalized();
        let (sin, cos) = theta.sin_cos();
        let direction = self.normalized() * cos + relative * sin;
        direction * (self.norm() + (other.norm() - self.norm()) * t)
    }

    /// Rotates the vector by the given angle in radians about the given
    /// axis, using Rodrigues' rotation formula. The axis must be normalized.
    pub fn rotated_about_axis(&self, axis: &Self, angle: f32) -> Self {
        let (sin, cos) = angle.sin_cos();
        self * cos + axis.cross(self) * sin + axis * (axis.dot(self) * (1.0 - cos))
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

    /// Projects this vector onto the plane through the origin with the given
    /// normal. The normal need not be normalized.
    #[inline]
    pub fn projected_onto_plane(&self, normal: &Self) -> Self {
        self.rejected_from(normal)
    }

    /// Returns a unit vector perpendicular to this one, namely the tangent of
    /// [`Self::orthonormal_basis`] for the normalized vector. Returns the
    /// zero vector if this vector has an effectively zero norm.
    pub fn perpendicular(&self) -> Self {
        let normal = self.normalized();
        if normal == Self::ZERO {
            return Self::ZERO;
        }
        normal.orthonormal_basis().0
    }

    /// Constructs a tangent and a bitangent that together with this vector,
    /// which must be normalized, form a right-handed orthonormal basis
    /// `(tangent, bitangent, normal)`.
    ///
    /// The tangent is obtained by rejecting a world axis from the normal:
    /// the y-axis if the normal's x-component exceeds
    /// [`BASIS_SEED_THRESHOLD`] in magnitude, and the x-axis otherwise. The
    /// bitangent is `normal × tangent`.
    pub fn orthonormal_basis(&self) -> (Self, Self) {
        let seed = if self.x().abs() > BASIS_SEED_THRESHOLD {
            Self::UNIT_Y
        } else {
            Self::UNIT_X
        };
        let tangent = (seed - self * seed.dot(self)).normalized();
        let bitangent = self.cross(&tangent);
        (tangent, bitangent)
    }

    /// Computes the barycentric coordinates `(u, v, w)` of this point with
    /// respect to the triangle `(a, b, c)`, so that the projection of the
    /// point onto the triangle's plane equals `u·a + v·b + w·c`.
    ///
    /// A degenerate triangle yields non-finite coordinates.
    pub fn barycentric(&self, a: &Self, b: &Self, c: &Self) -> Self {
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
        Self::new(1.0 - v - w, v, w)
    }

    /// Generates a unit vector with a direction uniformly distributed over
    /// the sphere.
    pub fn random_unit(rng: &mut impl Rng) -> Self {
        let polar_angle = (2.0 * rng.random::<f32>() - 1.0).clamp(-1.0, 1.0).acos();
        let azimuthal_angle = rng.random::<f32>() * TAU;
        Self::from_spherical(1.0, polar_angle, azimuthal_angle)
    }

    /// Generates a point uniformly distributed over the volume of the sphere
    /// with the given radius centered at the origin.
    pub fn random_in_sphere(rng: &mut impl Rng, radius: f32) -> Self {
        let direction = Self::random_unit(rng);
        direction * (radius * rng.random::<f32>().cbrt())
    }

    /// Generates a point uniformly distributed over the axis-aligned box
    /// spanned by the given corners.
    pub fn random_in_box(rng: &mut impl Rng, min: &Self, max: &Self) -> Self {
        let fractions = Self::new(rng.random(), rng.random(), rng.random());
        min + (max - min).component_mul(&fractions)
    }

    /// Whether no component is NaN or infinite.
    #[inline]
    pub fn is_valid(&self) -> bool {
        num::all_finite(&self.to_array())
    }

    #[inline]
    pub fn has_nan(&self) -> bool {
        num::any_nan(&self.to_array())
    }

    #[inline]
    pub fn has_infinite(&self) -> bool {
        num::any_infinite(&self.to_array())
    }

    #[inline]
    pub fn component_classes(&self) -> [ComponentClass; 3] {
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
            2 => Ok(&self.inner.z),
            _ => Err(VectorError::IndexOutOfRange {
                index,
                dimension: 3,
            }),
        }
    }

    pub(crate) fn component_mut(&mut self, index: usize) -> Result<&mut f32> {
        match index {
            0 => Ok(&mut self.inner.x),
            1 => Ok(&mut self.inner.y),
            2 => Ok(&mut self.inner.z),
            _ => Err(VectorError::IndexOutOfRange {
                index,
                dimension: 3,
            }),
        }
    }

    #[inline]
    pub(crate) const fn wrap(inner: glam::Vec3) -> Self {
        Self { inner }
    }
}

impl From<[f32; 3]> for Vector3 {
    #[inline]
    fn from([x, y, z]: [f32; 3]) -> Self {
        Self::new(x, y, z)
    }
}

impl From<Vector3> for [f32; 3] {
    #[inline]
    fn from(vector: Vector3) -> Self {
        vector.to_array()
    }
}

impl FlatComponents for Vector3 {
    const COMPONENT_COUNT: usize = 3;
}

impl_vector_arithmetic!(Vector3);

impl_checked_index!(Vector3);

impl_exact_eq_and_hash!(Vector3);

impl_tolerance_eq!(Vector3);

impl fmt::Debug for Vector3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Vector3")
            .field("x", &self.inner.x)
            .field("y", &self.inner.y)
            .field("z", &self.inner.z)
            .finish()
    }
}
