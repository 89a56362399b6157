use image::DynamicImage;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{CodecError, Result};
use crate::resample::resize_fill;
use crate::tensor::{TensorBuffer, TensorShape};

/// Per-channel linear remapping applied while encoding:
/// `normalized = (channel - mean) / std`, identically for R, G and B.
///
/// Which output range a model expects is model-dependent, so the parameters
/// travel with every call instead of living in a hidden default.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Normalization {
    pub mean: f32,
    pub std: f32,
}

impl Normalization {
    /// Maps `[0, 255]` channel values onto `[0.0, 1.0]`.
    pub const UNIT: Self = Self {
        mean: 0.0,
        std: 255.0,
    };

    /// Maps `[0, 255]` channel values onto `[-1.0, 1.0]`.
    pub const SYMMETRIC: Self = Self {
        mean: 127.5,
        std: 127.5,
    };

    fn apply(&self, channel: u8) -> f32 {
        (f32::from(channel) - self.mean) / self.std
    }
}

impl Default for Normalization {
    fn default() -> Self {
        Self::UNIT
    }
}

/// Encode an image into a model-input tensor buffer.
///
/// The image is stretched to `width` x `height` (see
/// [`resize_fill`](crate::resample::resize_fill)), then walked row-major with
/// three normalized floats appended per pixel in R, G, B order. Alpha is
/// dropped. The result always holds exactly `width * height * 3` elements.
///
/// Pure: the output depends only on the pixel data and the arguments.
pub fn image_to_tensor(
    image: &DynamicImage,
    width: u32,
    height: u32,
    norm: Normalization,
) -> Result<TensorBuffer> {
    let shape = TensorShape::new(width, height)?;
    if norm.std == 0.0 {
        return Err(CodecError::ZeroStd);
    }

    let resized = resize_fill(image, width, height)?;
    let rgb = resized.to_rgb8();

    let mut data = Vec::with_capacity(shape.element_count());
    for y in 0..height {
        for x in 0..width {
            let pixel = rgb.get_pixel(x, y);
            data.push(norm.apply(pixel[0]));
            data.push(norm.apply(pixel[1]));
            data.push(norm.apply(pixel[2]));
        }
    }

    debug!("encoded {width}x{height} image into {} floats", data.len());
    TensorBuffer::from_vec(shape, data)
}
