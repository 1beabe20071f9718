//! Vectors, colors and rotation quaternions.

#[macro_use]
mod macros;

pub mod buffer;
pub mod color;
pub mod error;
pub mod num;
pub mod quaternion;
pub mod vector2;
pub mod vector3;
pub mod vector4;

pub use buffer::FlatComponents;
pub use error::{Result, VectorError};
pub use num::EPSILON;
pub use quaternion::Quaternion;
pub use vector2::Vector2;
pub use vector3::Vector3;
pub use vector4::Vector4;
