//! Four-component vectors used as homogeneous points and colors.
//!
//! A [`Vector4`] never acts as a rotation. Rotations use
//! [`Quaternion`](crate::Quaternion), which shares the same storage layout
//! and converts explicitly through
//! [`Quaternion::from_vector4`](crate::Quaternion::from_vector4) and
//! [`Quaternion::to_vector4`](crate::Quaternion::to_vector4).

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

/// A 4-dimensional vector.
#[repr(transparent)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
#[derive(Clone, Copy, Default, Zeroable, Pod)]
pub struct Vector4 {
    inner: glam::Vec4,
}

impl Vector4 {
    /// The zero vector.
    pub const ZERO: Self = Self::same(0.0);

    /// A vector with all components set to one.
    pub const ONE: Self = Self::same(1.0);

    /// The x-axis unit vector.
    pub const UNIT_X: Self = Self::new(1.0, 0.0, 0.0, 0.0);

    /// The y-axis unit vector.
    pub const UNIT_Y: Self = Self::new(0.0, 1.0, 0.0, 0.0);

    /// The z-axis unit vector.
    pub const UNIT_Z: Self = Self::new(0.0, 0.0, 1.0, 0.0);

    /// The w-axis unit vector.
    pub const UNIT_W: Self = Self::new(0.0, 0.0, 0.0, 1.0);

    /// A vector with all components set to positive infinity.
    pub const INFINITY: Self = Self::same(f32::INFINITY);

    /// A vector with all components set to negative infinity.
    pub const NEG_INFINITY: Self = Self::same(f32::NEG_INFINITY);

    /// Creates a new vector with the given components.
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self::wrap(glam::Vec4::new(x, y, z, w))
    }

    /// Creates a new vector with the same value for all components.
    #[inline]
    pub const fn same(value: f32) -> Self {
        Self::new(value, value, value, value)
    }

    /// Creates a homogeneous vector from the given 3D vector and
    /// w-component.
    #[inline]
    pub fn from_vector3(vector: &Vector3, w: f32) -> Self {
        vector.extended(w)
    }

    /// Creates the homogeneous representation of the given point, with `w`
    /// set to one.
    #[inline]
    pub fn from_point(point: &Vector3) -> Self {
        point.extended(1.0)
    }

    /// Creates the homogeneous representation of the given direction, with
    /// `w` set to zero.
    #[inline]
    pub fn from_direction(direction: &Vector3) -> Self {
        direction.extended(0.0)
    }

    #[inline]
    pub fn x(&self) -> f32 {
        self.inner.x
    }

    #[inline]
    pub fn y(&self) -> f32 {
        self.inner.y
    }

    #[inline]
    pub fn z(&self) -> f32 {
        self.inner.z
    }

    #[inline]
    pub fn w(&self) -> f32 {
        self.inner.w
    }

    #[inline]
    pub fn x_mut(&mut self) -> &mut f32 {
        &mut self.inner.x
    }

    #[inline]
    pub fn y_mut(&mut self) -> &mut f32 {
        &mut self.inner.y
    }

    #[inline]
    pub fn z_mut(&mut self) -> &mut f32 {
        &mut self.inner.z
    }

    #[inline]
    pub fn w_mut(&mut self) -> &mut f32 {
        &mut self.inner.w
    }

    /// Returns the component with the given index (0 for x through 3 for w).
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
    /// Returns [`VectorError::IndexOutOfRange`] if the index is not below 4,
    /// leaving the vector unchanged.
    #[inline]
    pub fn set(&mut self, index: usize, value: f32) -> Result<&mut Self> {
        *self.component_mut(index)? = value;
        Ok(self)
    }

    /// Returns the components as an array.
    #[inline]
    pub fn to_array(&self) -> [f32; 4] {
        self.inner.to_array()
    }

    /// The x-, y- and z-components.
    #[inline]
    pub fn xyz(&self) -> Vector3 {
        Vector3::new(self.x(), self.y(), self.z())
    }

    /// Projects the homogeneous vector to Cartesian 3D space by dividing the
    /// x-, y- and z-components by w.
    ///
    /// # Errors
    /// Returns [`VectorError::DivisionByZero`] if w is zero, which is the
    /// case for directions.
    #[inline]
    pub fn to_cartesian(&self) -> Result<Vector3> {
        self.xyz().div_scalar(self.w())
    }

    #[inline]
    pub fn norm(&self) -> f32 {
        self.inner.length()
    }

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

    #[inline]
    pub fn normalize_mut(&mut self) -> &mut Self {
        *self = self.normalized();
        self
    }

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

    #[inline]
    pub fn mapped(&self, mut f: impl FnMut(f32) -> f32) -> Self {
        Self::new(f(self.x()), f(self.y()), f(self.z()), f(self.w()))
    }

    #[inline]
    pub fn min_component(&self) -> f32 {
        self.inner.min_element()
    }

    #[inline]
    pub fn max_component(&self) -> f32 {
        self.inner.max_element()
    }

    #[inline]
    pub fn dot(&self, other: &Self) -> f32 {
        self.inner.dot(other.inner)
    }

    #[inline]
    pub fn distance(&self, other: &Self) -> f32 {
        self.inner.distance(other.inner)
    }

    #[inline]
    pub fn distance_squared(&self, other: &Self) -> f32 {
        self.inner.distance_squared(other.inner)
    }

    #[inline]
    pub fn manhattan_distance(&self, other: &Self) -> f32 {
        (self.inner - other.inner).abs().element_sum()
    }

    #[inline]
    pub fn lerp(&self, other: &Self, t: f32) -> Self {
        Self::wrap(self.inner + (other.inner - self.inner) * t)
    }

    /// Generates a unit vector with a direction uniformly distributed over
    /// the 3-sphere, from three independent uniform samples.
    pub fn random_unit(rng: &mut impl Rng) -> Self {
        let u1 = rng.random::<f32>();
        let u2 = rng.random::<f32>();
        let u3 = rng.random::<f32>();

        let lower = (1.0 - u1).sqrt();
        let upper = u1.sqrt();
        let (sin2, cos2) = (TAU * u2).sin_cos();
        let (sin3, cos3) = (TAU * u3).sin_cos();

        Self::new(lower * sin2, lower * cos2, upper * sin3, upper * cos3)
    }

    /// Generates a point uniformly distributed over the volume of the
    /// 4-dimensional ball with the given radius centered at the origin.
    pub fn random_in_hypersphere(rng: &mut impl Rng, radius: f32) -> Self {
        let direction = Self::random_unit(rng);
        direction * (radius * rng.random::<f32>().sqrt().sqrt())
    }

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
    pub fn component_classes(&self) -> [ComponentClass; 4] {
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
            3 => Ok(&self.inner.w),
            _ => Err(VectorError::IndexOutOfRange {
                index,
                dimension: 4,
            }),
        }
    }

    pub(crate) fn component_mut(&mut self, index: usize) -> Result<&mut f32> {
        match index {
            0 => Ok(&mut self.inner.x),
            1 => Ok(&mut self.inner.y),
            2 => Ok(&mut self.inner.z),
            3 => Ok(&mut self.inner.w),
            _ => Err(VectorError::IndexOutOfRange {
                index,
                dimension: 4,
            }),
        }
    }

    #[inline]
    pub(crate) const fn wrap(inner: glam::Vec4) -> Self {
        Self { inner }
    }

    #[inline]
    pub(crate) const fn unwrap(self) -> glam::Vec4 {
        self.inner
    }
}

impl From<[f32; 4]> for Vector4 {
    #[inline]
    fn from([x, y, z, w]: [f32; 4]) -> Self {
        Self::new(x, y, z, w)
    }
}

impl From<Vector4> for [f32; 4] {
    #[inline]
    fn from(vector: Vector4) -> Self {
        vector.to_array()
    }
}

impl FlatComponents for Vector4 {
    const COMPONENT_COUNT: usize = 4;
}

impl_vector_arithmetic!(Vector4);

impl_checked_index!(Vector4);

impl_exact_eq_and_hash!(Vector4);

impl_tolerance_eq!(Vector4);

impl fmt::Debug for Vector4 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Vector4")
            .field("x", &self.inner.x)
            .field("y", &self.inner.y)
            .field("z", &self.inner.z)
            .field("w", &self.inner.w)
            .finish()
    }
}
