//! Conversion between vector values and flat `f32` buffers.

use crate::error::{self, Result, VectorError};
use bytemuck::Pod;
use log::{debug, trace};
use std::slice;

/// Value types whose memory is a fixed number of contiguous `f32`
/// components, so that they can be read from and written to flat numeric
/// buffers.
pub trait FlatComponents: Pod {
    /// The number of `f32` components making up a value.
    const COMPONENT_COUNT: usize;

    /// Creates a value from a slice holding exactly
    /// [`Self::COMPONENT_COUNT`] components.
    ///
    /// # Errors
    /// Returns [`VectorError::WrongLength`] if the slice has any other
    /// length.
    fn from_slice(components: &[f32]) -> Result<Self> {
        if components.len() != Self::COMPONENT_COUNT {
            return Err(VectorError::WrongLength {
                expected: Self::COMPONENT_COUNT,
                actual: components.len(),
            });
        }
        Ok(read_value(components))
    }

    /// Creates a value from the [`Self::COMPONENT_COUNT`] components starting
    /// at `offset` in the given buffer.
    ///
    /// # Errors
    /// Returns [`VectorError::BufferTooShort`] if the buffer ends before all
    /// components are read.
    fn from_buffer(buffer: &[f32], offset: usize) -> Result<Self> {
        error::check_buffer_range(buffer.len(), offset, Self::COMPONENT_COUNT)?;
        Ok(read_value(
            &buffer[offset..offset + Self::COMPONENT_COUNT],
        ))
    }

    /// Returns the components of the value as a slice.
    fn components(&self) -> &[f32] {
        bytemuck::cast_slice(slice::from_ref(self))
    }

    /// Writes the components of the value into the given buffer starting at
    /// `offset`.
    ///
    /// # Errors
    /// Returns [`VectorError::BufferTooShort`] if the buffer ends before all
    /// components are written. The buffer is then left untouched.
    fn write_to_buffer(&self, buffer: &mut [f32], offset: usize) -> Result<()> {
        error::check_buffer_range(buffer.len(), offset, Self::COMPONENT_COUNT)?;
        buffer[offset..offset + Self::COMPONENT_COUNT].copy_from_slice(self.components());
        Ok(())
    }
}

/// Views the given values as a flat slice of their components, without
/// copying.
pub fn as_flat_slice<V: FlatComponents>(values: &[V]) -> &[f32] {
    bytemuck::cast_slice(values)
}

/// Packs the components of the given values into a new buffer, in order.
pub fn pack<V: FlatComponents>(values: &[V]) -> Vec<f32> {
    trace!(
        "Packing {} values with {} components each",
        values.len(),
        V::COMPONENT_COUNT
    );
    as_flat_slice(values).to_vec()
}

/// Writes the components of the given values into the buffer, starting at
/// `offset`.
///
/// # Errors
/// Returns [`VectorError::BufferTooShort`] if the buffer cannot hold all the
/// values. The buffer is then left untouched.
pub fn pack_into<V: FlatComponents>(values: &[V], buffer: &mut [f32], offset: usize) -> Result<()> {
    let flat = as_flat_slice(values);
    if let Err(err) = error::check_buffer_range(buffer.len(), offset, flat.len()) {
        debug!("Rejected packing of {} values: {err}", values.len());
        return Err(err);
    }
    trace!(
        "Packing {} values with {} components each at offset {offset}",
        values.len(),
        V::COMPONENT_COUNT
    );
    buffer[offset..offset + flat.len()].copy_from_slice(flat);
    Ok(())
}

/// Unpacks a buffer of consecutive values into a new vector.
///
/// # Errors
/// Returns [`VectorError::RaggedBuffer`] if the buffer length is not a
/// multiple of [`FlatComponents::COMPONENT_COUNT`].
pub fn unpack<V: FlatComponents>(buffer: &[f32]) -> Result<Vec<V>> {
    let mut values = Vec::with_capacity(buffer.len() / V::COMPONENT_COUNT);
    unpack_into(buffer, &mut values)?;
    Ok(values)
}

/// Unpacks a buffer of consecutive values and appends them to the given
/// vector.
///
/// # Errors
/// Returns [`VectorError::RaggedBuffer`] if the buffer length is not a
/// multiple of [`FlatComponents::COMPONENT_COUNT`]. Nothing is appended in
/// that case.
pub fn unpack_into<V: FlatComponents>(buffer: &[f32], values: &mut Vec<V>) -> Result<()> {
    let stride = V::COMPONENT_COUNT;
    if buffer.len() % stride != 0 {
        let err = VectorError::RaggedBuffer {
            len: buffer.len(),
            stride,
        };
        debug!("Rejected buffer for unpacking: {err}");
        return Err(err);
    }
    trace!(
        "Unpacking {} values with {stride} components each",
        buffer.len() / stride
    );
    values.extend(buffer.chunks_exact(stride).map(read_value::<V>));
    Ok(())
}

// The buffer may be less aligned than the value type, so the bytes are
// copied rather than reinterpreted in place.
fn read_value<V: FlatComponents>(components: &[f32]) -> V {
    bytemuck::pod_read_unaligned(bytemuck::cast_slice(components))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Quaternion, Vector2, Vector3, Vector4};

    #[test]
    fn component_counts_match_type_sizes() {
        assert_eq!(Vector2::COMPONENT_COUNT, 2);
        assert_eq!(Vector3::COMPONENT_COUNT, 3);
        assert_eq!(Vector4::COMPONENT_COUNT, 4);
        assert_eq!(Quaternion::COMPONENT_COUNT, 4);
        assert_eq!(size_of::<Vector4>(), 4 * size_of::<f32>());
    }

    #[test]
    fn creating_vector_from_slice_of_wrong_length_fails() {
        assert_eq!(
            Vector3::from_slice(&[1.0, 2.0]),
            Err(VectorError::WrongLength {
                expected: 3,
                actual: 2
            })
        );
        assert_eq!(
            Vector3::from_slice(&[1.0, 2.0, 3.0, 4.0]),
            Err(VectorError::WrongLength {
                expected: 3,
                actual: 4
            })
        );
        assert_eq!(
            Vector3::from_slice(&[1.0, 2.0, 3.0]),
            Ok(Vector3::new(1.0, 2.0, 3.0))
        );
    }

    #[test]
    fn reading_vector_at_offset_works() {
        let buffer = [9.0, 1.0, 2.0, 3.0, 4.0];
        assert_eq!(
            Vector4::from_buffer(&buffer, 1),
            Ok(Vector4::new(1.0, 2.0, 3.0, 4.0))
        );
        assert_eq!(
            Vector4::from_buffer(&buffer, 2),
            Err(VectorError::BufferTooShort {
                len: 5,
                offset: 2,
                required: 4
            })
        );
    }

    #[test]
    fn writing_vector_at_offset_works() {
        let mut buffer = [0.0; 4];
        Vector2::new(1.0, 2.0).write_to_buffer(&mut buffer, 2).unwrap();
        assert_eq!(buffer, [0.0, 0.0, 1.0, 2.0]);
        assert!(Vector2::new(5.0, 6.0).write_to_buffer(&mut buffer, 3).is_err());
        assert_eq!(buffer, [0.0, 0.0, 1.0, 2.0]);
    }

    #[test]
    fn components_view_matches_fields() {
        let q = Quaternion::from_parts(4.0, Vector3::new(1.0, 2.0, 3.0));
        assert_eq!(q.components(), &[1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn packing_and_unpacking_preserves_order() {
        let values = [Vector2::new(1.0, 2.0), Vector2::new(3.0, 4.0)];
        let packed = pack(&values);
        assert_eq!(packed, vec![1.0, 2.0, 3.0, 4.0]);
        assert_eq!(as_flat_slice(&values), packed.as_slice());
        assert_eq!(unpack::<Vector2>(&packed), Ok(values.to_vec()));
    }

    #[test]
    fn unpacking_ragged_buffer_fails_without_appending() {
        let mut values = vec![Vector3::ZERO];
        assert_eq!(
            unpack_into::<Vector3>(&[1.0, 2.0, 3.0, 4.0], &mut values),
            Err(VectorError::RaggedBuffer { len: 4, stride: 3 })
        );
        assert_eq!(values, vec![Vector3::ZERO]);
    }

    #[test]
    fn unpacking_empty_buffer_gives_no_values() {
        assert_eq!(unpack::<Vector4>(&[]), Ok(Vec::new()));
    }

    #[test]
    fn packing_into_short_buffer_fails() {
        let values = [Vector2::ONE, Vector2::ONE];
        let mut buffer = [0.0; 5];
        assert!(pack_into(&values, &mut buffer, 2).is_err());
        assert_eq!(buffer, [0.0; 5]);
        pack_into(&values, &mut buffer, 1).unwrap();
        assert_eq!(buffer, [0.0, 1.0, 1.0, 1.0, 1.0]);
    }
}
