use crate::error::Result;
use crate::tensor::TensorBuffer;

/// The inference side of the pipeline, as the codec sees it.
///
/// An executor is a black box that accepts an encoded content tensor and
/// returns a tensor of the same element count holding the stylized result.
/// Backend concerns (model files, delegates, threading) belong entirely to
/// the implementation; the codec only fixes the buffer contract at this seam.
/// Implementations that fail should surface a
/// [`CodecError::Executor`](crate::error::CodecError::Executor).
pub trait TensorExecutor {
    fn execute(&self, input: &TensorBuffer) -> Result<TensorBuffer>;
}

/// Executor that returns its input unchanged.
///
/// Stands in for a real model in tests and round-trip checks, where only the
/// codec's own layout contracts are under scrutiny.
#[derive(Debug, Default, Clone, Copy)]
pub struct PassthroughExecutor;

impl TensorExecutor for PassthroughExecutor {
    fn execute(&self, input: &TensorBuffer) -> Result<TensorBuffer> {
        Ok(input.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tensor::TensorShape;

    #[test]
    fn test_passthrough_preserves_buffer() {
        let shape = TensorShape::new(2, 2).unwrap();
        let input = TensorBuffer::from_vec(shape, (0..12).map(|v| v as f32).collect()).unwrap();

        let output = PassthroughExecutor.execute(&input).unwrap();

        assert_eq!(output, input);
    }
}
