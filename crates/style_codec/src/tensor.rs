use crate::error::{CodecError, Result};

/// Colour channels carried per pixel (R, G, B). Alpha never enters a tensor.
pub const CHANNELS: usize = 3;

/// Leading batch dimension of every model-facing tensor. The codec converts
/// one image per call, so this is always 1 and never materializes in memory;
/// it only scales the logical shape `[BATCH_SIZE, height, width, CHANNELS]`.
pub const BATCH_SIZE: usize = 1;

/// Spatial shape of a tensor buffer. The flat storage is row-major: the row
/// (height) axis is the outer stride, the column (width) axis the inner one,
/// with the three channel values interleaved per pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TensorShape {
    pub height: u32,
    pub width: u32,
}

impl TensorShape {
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(CodecError::InvalidDimensions { width, height });
        }
        Ok(Self { height, width })
    }

    /// Total number of f32 elements a buffer of this shape holds.
    pub fn element_count(&self) -> usize {
        BATCH_SIZE * self.height as usize * self.width as usize * CHANNELS
    }

    /// Flat offset of `(row, col, channel)`.
    pub fn index(&self, row: u32, col: u32, channel: usize) -> usize {
        (row as usize * self.width as usize + col as usize) * CHANNELS + channel
    }
}

/// Flat, contiguous f32 buffer with a known spatial shape.
///
/// Encoding allocates one of these fresh per call; ownership passes to the
/// caller, which typically hands it to an inference executor and gets a
/// buffer of the same element count back.
#[derive(Debug, Clone, PartialEq)]
pub struct TensorBuffer {
    shape: TensorShape,
    data: Vec<f32>,
}

impl TensorBuffer {
    /// Wrap an existing vector, validating its length against `shape`.
    pub fn from_vec(shape: TensorShape, data: Vec<f32>) -> Result<Self> {
        let expected = shape.element_count();
        if data.len() != expected {
            return Err(CodecError::TensorSizeMismatch {
                expected,
                actual: data.len(),
                width: shape.width,
                height: shape.height,
            });
        }
        Ok(Self { shape, data })
    }

    pub fn shape(&self) -> TensorShape {
        self.shape
    }

    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }

    pub fn into_vec(self) -> Vec<f32> {
        self.data
    }

    /// Channel value at `(row, col, channel)`.
    pub fn get(&self, row: u32, col: u32, channel: usize) -> f32 {
        self.data[self.shape.index(row, col, channel)]
    }

    /// Byte image of the buffer in native byte order, the exact layout an
    /// inference runtime maps its input region onto.
    pub fn to_ne_bytes(&self) -> Vec<u8> {
        self.data.iter().flat_map(|v| v.to_ne_bytes()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_element_count() {
        let shape = TensorShape::new(4, 3).unwrap();
        assert_eq!(shape.element_count(), 4 * 3 * 3);
    }

    #[test]
    fn test_index_is_row_major() {
        let shape = TensorShape::new(4, 3).unwrap();
        assert_eq!(shape.index(0, 0, 0), 0);
        assert_eq!(shape.index(0, 0, 2), 2);
        assert_eq!(shape.index(0, 1, 0), 3);
        // Advancing one row skips a full row of interleaved channels
        assert_eq!(shape.index(1, 0, 0), 4 * 3);
        assert_eq!(shape.index(2, 3, 2), (2 * 4 + 3) * 3 + 2);
    }

    #[test]
    fn test_zero_dimension_rejected() {
        assert!(matches!(
            TensorShape::new(0, 3),
            Err(CodecError::InvalidDimensions { width: 0, height: 3 })
        ));
        assert!(TensorShape::new(3, 0).is_err());
    }

    #[test]
    fn test_from_vec_validates_length() {
        let shape = TensorShape::new(2, 2).unwrap();
        assert!(TensorBuffer::from_vec(shape, vec![0.0; 12]).is_ok());

        let err = TensorBuffer::from_vec(shape, vec![0.0; 11]).unwrap_err();
        assert!(matches!(
            err,
            CodecError::TensorSizeMismatch {
                expected: 12,
                actual: 11,
                ..
            }
        ));
    }

    #[test]
    fn test_native_byte_export() {
        let shape = TensorShape::new(1, 1).unwrap();
        let buffer = TensorBuffer::from_vec(shape, vec![1.0, 0.5, 0.0]).unwrap();

        let bytes = buffer.to_ne_bytes();
        assert_eq!(bytes.len(), 3 * 4);
        assert_eq!(&bytes[0..4], &1.0f32.to_ne_bytes());
        assert_eq!(&bytes[4..8], &0.5f32.to_ne_bytes());
    }
}
