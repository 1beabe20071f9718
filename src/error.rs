//! Contract errors.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, VectorError>;

/// Violation of the calling contract of a vector or quaternion operation.
///
/// Numerical edge cases such as normalizing a zero vector are not errors;
/// they have defined fallbacks documented on each operation.
#[derive(Error, Clone, Copy, Debug, PartialEq, Eq)]
pub enum VectorError {
    #[error("Division by zero")]
    DivisionByZero,

    #[error("Component-wise division by a vector whose component {index} is zero")]
    ZeroComponent { index: usize },

    #[error("Component index {index} is out of range for a {dimension}-component value")]
    IndexOutOfRange { index: usize, dimension: usize },

    #[error("Expected {expected} components but got {actual}")]
    WrongLength { expected: usize, actual: usize },

    #[error("Buffer of length {len} has no room for {required} components at offset {offset}")]
    BufferTooShort {
        len: usize,
        offset: usize,
        required: usize,
    },

    #[error("Buffer length {len} is not a multiple of the component count {stride}")]
    RaggedBuffer { len: usize, stride: usize },
}

/// Returns the index of the first zero component of the divisor, if any.
pub(crate) fn first_zero_component(divisor: &[f32]) -> Option<usize> {
    divisor.iter().position(|&component| component == 0.0)
}

/// Checks that `required` components starting at `offset` fit in a buffer
/// of length `buffer_len`.
pub(crate) fn check_buffer_range(buffer_len: usize, offset: usize, required: usize) -> Result<()> {
    match offset.checked_add(required) {
        Some(end) if end <= buffer_len => Ok(()),
        _ => Err(VectorError::BufferTooShort {
            len: buffer_len,
            offset,
            required,
        }),
    }
}
