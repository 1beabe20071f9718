//! Quaternions representing 3D rotations.

use crate::{
    buffer::FlatComponents,
    error::{Result, VectorError},
    num::{self, ComponentClass, EPSILON, PARALLEL_THRESHOLD, SLERP_LINEAR_THRESHOLD},
    vector3::Vector3,
    vector4::Vector4,
};
use bytemuck::{Pod, Zeroable};
use core::fmt;
use rand::Rng;
use std::f32::consts::{FRAC_PI_2, PI};

/// A quaternion `x i + y j + z k + w` with vector part `(x, y, z)` and real
/// part `w`.
///
/// Rotations are represented by unit quaternions and compose through the
/// Hamilton product, so that `a * b` applies `b` first and then `a`.
/// Operations that interpret the quaternion as a rotation assume that it is
/// normalized unless stated otherwise.
#[repr(transparent)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
#[derive(Clone, Copy, Zeroable, Pod)]
pub struct Quaternion {
    inner: glam::Quat,
}

impl Quaternion {
    /// The identity rotation.
    pub const IDENTITY: Self = Self::new(0.0, 0.0, 0.0, 1.0);

    /// The zero quaternion, which does not represent a rotation.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    /// Creates a new quaternion with the given components.
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self::wrap(glam::Quat::from_xyzw(x, y, z, w))
    }

    /// Creates a new quaternion with the given real and imaginary parts.
    #[inline]
    pub fn from_parts(real: f32, imag: Vector3) -> Self {
        Self::new(imag.x(), imag.y(), imag.z(), real)
    }

    /// Reinterprets the components of the given 4D vector as a quaternion.
    #[inline]
    pub fn from_vector4(vector: &Vector4) -> Self {
        Self::wrap(glam::Quat::from_vec4(vector.unwrap()))
    }

    /// Creates the quaternion rotating by the given angle in radians about
    /// the given axis, which must be normalized.
    #[inline]
    pub fn from_axis_angle(axis: &Vector3, angle: f32) -> Self {
        let (sin, cos) = (0.5 * angle).sin_cos();
        Self::from_parts(cos, axis * sin)
    }

    /// Creates the quaternion for the given Euler angles in radians. The
    /// rotation applies `roll` about the x-axis, then `pitch` about the
    /// y-axis and finally `yaw` about the z-axis, all about the fixed world
    /// axes.
    pub fn from_euler_angles(roll: f32, pitch: f32, yaw: f32) -> Self {
        let (sr, cr) = (0.5 * roll).sin_cos();
        let (sp, cp) = (0.5 * pitch).sin_cos();
        let (sy, cy) = (0.5 * yaw).sin_cos();

        Self::new(
            sr * cp * cy - cr * sp * sy,
            cr * sp * cy + sr * cp * sy,
            cr * cp * sy - sr * sp * cy,
            cr * cp * cy + sr * sp * sy,
        )
    }

    /// Creates the shortest rotation taking the direction of `from` to the
    /// direction of `to`. The vectors need not be normalized.
    ///
    /// Parallel directions give the identity, and antiparallel directions
    /// give a half turn about the tangent of
    /// [`Vector3::orthonormal_basis`] for `from`. If either vector has an
    /// effectively zero norm, the identity is returned.
    pub fn rotation_between(from: &Vector3, to: &Vector3) -> Self {
        let from = from.normalized();
        let to = to.normalized();
        if from == Vector3::ZERO || to == Vector3::ZERO {
            return Self::IDENTITY;
        }

        let dot = from.dot(&to);
        if dot > PARALLEL_THRESHOLD {
            Self::IDENTITY
        } else if dot < -PARALLEL_THRESHOLD {
            let (axis, _) = from.orthonormal_basis();
            Self::from_axis_angle(&axis, PI)
        } else {
            Self::from_axis_angle(&from.cross(&to).normalized(), dot.acos())
        }
    }

    /// Generates a unit quaternion uniformly distributed over the rotation
    /// group.
    pub fn random(rng: &mut impl Rng) -> Self {
        Self::from_vector4(&Vector4::random_unit(rng))
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

    /// The real part `w`.
    #[inline]
    pub fn real(&self) -> f32 {
        self.w()
    }

    /// The imaginary part `(x, y, z)`.
    #[inline]
    pub fn imag(&self) -> Vector3 {
        Vector3::new(self.x(), self.y(), self.z())
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
    /// leaving the quaternion unchanged.
    #[inline]
    pub fn set(&mut self, index: usize, value: f32) -> Result<&mut Self> {
        *self.component_mut(index)? = value;
        Ok(self)
    }

    /// Returns the components `[x, y, z, w]` as an array.
    #[inline]
    pub fn to_array(&self) -> [f32; 4] {
        self.inner.to_array()
    }

    /// Reinterprets the components of the quaternion as a 4D vector.
    #[inline]
    pub fn to_vector4(&self) -> Vector4 {
        Vector4::wrap(glam::Vec4::from(self.inner))
    }

    #[inline]
    pub fn norm(&self) -> f32 {
        self.inner.length()
    }

    #[inline]
    pub fn norm_squared(&self) -> f32 {
        self.inner.length_squared()
    }

    /// Computes the normalized version of the quaternion. If the norm is
    /// below [`EPSILON`], the identity is returned.
    #[inline]
    pub fn normalized(&self) -> Self {
        let norm = self.norm();
        if norm < EPSILON {
            Self::IDENTITY
        } else {
            Self::wrap(self.inner * norm.recip())
        }
    }

    /// Normalizes the quaternion in place, following the same rules as
    /// [`Self::normalized`].
    #[inline]
    pub fn normalize_mut(&mut self) -> &mut Self {
        *self = self.normalized();
        self
    }

    /// Computes the quaternion with all components negated. It represents
    /// the same rotation.
    #[inline]
    pub fn negated(&self) -> Self {
        Self::wrap(-self.inner)
    }

    /// Computes the conjugate, which has the vector part negated.
    #[inline]
    pub fn conjugate(&self) -> Self {
        Self::new(-self.x(), -self.y(), -self.z(), self.w())
    }

    #[inline]
    pub fn conjugate_mut(&mut self) -> &mut Self {
        *self = self.conjugate();
        self
    }

    /// Computes the multiplicative inverse, the conjugate divided by the
    /// squared norm. If the squared norm is below [`EPSILON`], the zero
    /// quaternion is returned.
    #[inline]
    pub fn inverse(&self) -> Self {
        let norm_squared = self.norm_squared();
        if norm_squared < EPSILON {
            return Self::ZERO;
        }
        Self::wrap(self.conjugate().inner * norm_squared.recip())
    }

    /// Inverts the quaternion in place, following the same rules as
    /// [`Self::inverse`].
    #[inline]
    pub fn invert_mut(&mut self) -> &mut Self {
        *self = self.inverse();
        self
    }

    /// Computes the Hamilton product `self * other`. As a rotation, the
    /// result applies `other` first and then `self`.
    #[inline]
    pub fn multiplied(&self, other: &Self) -> Self {
        let (ax, ay, az, aw) = (self.x(), self.y(), self.z(), self.w());
        let (bx, by, bz, bw) = (other.x(), other.y(), other.z(), other.w());
        Self::new(
            aw * bx + ax * bw + ay * bz - az * by,
            aw * by - ax * bz + ay * bw + az * bx,
            aw * bz + ax * by - ay * bx + az * bw,
            aw * bw - ax * bx - ay * by - az * bz,
        )
    }

    /// Computes the Hamilton product `other * self`.
    #[inline]
    pub fn premultiplied(&self, other: &Self) -> Self {
        other.multiplied(self)
    }

    /// Replaces this quaternion with `self * other`.
    #[inline]
    pub fn multiply_mut(&mut self, other: &Self) -> &mut Self {
        *self = self.multiplied(other);
        self
    }

    /// Replaces this quaternion with `other * self`.
    #[inline]
    pub fn premultiply_mut(&mut self, other: &Self) -> &mut Self {
        *self = self.premultiplied(other);
        self
    }

    #[inline]
    pub fn dot(&self, other: &Self) -> f32 {
        self.inner.dot(other.inner)
    }

    /// Computes the angle in radians of the rotation taking this orientation
    /// to the other. Both quaternions are normalized first.
    pub fn angle_to(&self, other: &Self) -> f32 {
        let dot = self.normalized().dot(&other.normalized()).abs();
        2.0 * num::clamp_cosine(dot).acos()
    }

    /// Rotates the given vector.
    ///
    /// Evaluates `q v q⁻¹` as `v + w t + q_v × t` with `t = 2 q_v × v`,
    /// where `q_v` is the vector part.
    #[inline]
    pub fn rotate_vector(&self, vector: &Vector3) -> Vector3 {
        let imag = self.imag();
        let t = imag.cross(vector) * 2.0;
        vector + t * self.w() + imag.cross(&t)
    }

    /// Applies the inverse rotation to the given vector.
    #[inline]
    pub fn inverse_rotate_vector(&self, vector: &Vector3) -> Vector3 {
        self.conjugate().rotate_vector(vector)
    }

    /// Returns the normalized rotation axis and the rotation angle in
    /// radians, in `[0, 2π]`. For an effectively zero angle, the axis is the
    /// x-axis.
    pub fn to_axis_angle(&self) -> (Vector3, f32) {
        let q = self.normalized();
        let w = num::clamp_cosine(q.w());
        let angle = 2.0 * w.acos();
        let sin_half_angle = (1.0 - w * w).sqrt();
        if sin_half_angle < EPSILON {
            (Vector3::UNIT_X, angle)
        } else {
            (q.imag() / sin_half_angle, angle)
        }
    }

    /// Computes the Euler angles `(roll, pitch, yaw)` in radians, following
    /// the convention of [`Self::from_euler_angles`].
    ///
    /// Pitch lies in `[-π/2, π/2]`. At the gimbal singularity, where the
    /// pitch is a quarter turn, the pitch is clamped rather than producing
    /// NaN.
    pub fn to_euler_angles(&self) -> (f32, f32, f32) {
        let (x, y, z, w) = (self.x(), self.y(), self.z(), self.w());

        let roll = (2.0 * (w * x + y * z)).atan2(1.0 - 2.0 * (x * x + y * y));

        let sin_pitch = 2.0 * (w * y - z * x);
        let pitch = if sin_pitch.abs() >= 1.0 {
            FRAC_PI_2.copysign(sin_pitch)
        } else {
            sin_pitch.asin()
        };

        let yaw = (2.0 * (w * z + x * y)).atan2(1.0 - 2.0 * (y * y + z * z));

        (roll, pitch, yaw)
    }

    /// Normalized linear interpolation from this quaternion (`t = 0`) to
    /// another (`t = 1`), along the shorter of the two paths.
    pub fn nlerp(&self, end: &Self, t: f32) -> Self {
        let end = if self.dot(end) < 0.0 {
            end.negated()
        } else {
            *end
        };
        Self::wrap(self.inner + (end.inner - self.inner) * t).normalized()
    }

    /// Spherical linear interpolation from this quaternion (`t = 0`) to
    /// another (`t = 1`), along the shorter of the two paths.
    ///
    /// The end quaternion is negated when the dot product is negative.
    /// When the corrected dot product exceeds [`SLERP_LINEAR_THRESHOLD`],
    /// the quaternions are so close that `sin θ` approaches zero, and
    /// normalized linear interpolation is used instead.
    pub fn slerp(&self, end: &Self, t: f32) -> Self {
        let mut end = *end;
        let mut dot = self.dot(&end);
        if dot < 0.0 {
            end = end.negated();
            dot = -dot;
        }

        if dot > SLERP_LINEAR_THRESHOLD {
            return Self::wrap(self.inner + (end.inner - self.inner) * t).normalized();
        }

        let theta = dot.acos();
        let sin_theta = theta.sin();
        let start_weight = ((1.0 - t) * theta).sin() / sin_theta;
        let end_weight = (t * theta).sin() / sin_theta;

        Self::wrap(self.inner * start_weight + end.inner * end_weight)
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
    /// `other` by at most [`EPSILON`]. Note that `q` and `-q` represent the
    /// same rotation but are not approximately equal.
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
    const fn wrap(inner: glam::Quat) -> Self {
        Self { inner }
    }
}

impl Default for Quaternion {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl FlatComponents for Quaternion {
    const COMPONENT_COUNT: usize = 4;
}

impl_binop!(Mul, mul, Quaternion, Quaternion, Quaternion, |a, b| {
    a.multiplied(b)
});

impl_binop!(Add, add, Quaternion, Quaternion, Quaternion, |a, b| {
    Quaternion::wrap(a.inner + b.inner)
});

impl_binop!(Sub, sub, Quaternion, Quaternion, Quaternion, |a, b| {
    Quaternion::wrap(a.inner - b.inner)
});

impl_binop!(Mul, mul, Quaternion, f32, Quaternion, |a, b| {
    Quaternion::wrap(a.inner * *b)
});

impl_binop!(Mul, mul, f32, Quaternion, Quaternion, |a, b| {
    Quaternion::wrap(b.inner * *a)
});

impl_binop_assign!(MulAssign, mul_assign, Quaternion, Quaternion, |a, b| {
    a.multiply_mut(b);
});

impl_unary_op!(Neg, neg, Quaternion, Quaternion, |val| { val.negated() });

impl_checked_index!(Quaternion);

impl_exact_eq_and_hash!(Quaternion);

impl_tolerance_eq!(Quaternion);

impl fmt::Debug for Quaternion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Quaternion")
            .field("x", &self.inner.x)
            .field("y", &self.inner.y)
            .field("z", &self.inner.z)
            .field("w", &self.inner.w)
            .finish()
    }
}
