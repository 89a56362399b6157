use image::{Rgba, RgbaImage};
use tracing::debug;

use crate::error::{CodecError, Result};
use crate::tensor::TensorShape;

/// Map a tensor position to the pixel it describes.
///
/// The first spatial axis of a model tensor is the image row and the second
/// the column, while pixel setters take `(x, y)`; the arguments therefore
/// swap here. Regressing this swap transposes every stylized output.
fn pixel_position(row: u32, col: u32) -> (u32, u32) {
    (col, row)
}

/// Decode a model-output tensor into a displayable image.
///
/// `data` is the flat row-major form of a `[1][height][width][3]` tensor
/// whose channel values the model already scaled to `[0.0, 1.0]`. Unlike
/// encoding there are no normalization parameters: every channel is scaled by
/// a fixed 255 and truncated into `[0, 255]`, saturating on out-of-range
/// values. The output is opaque RGBA of exactly `width` x `height`.
pub fn tensor_to_image(data: &[f32], width: u32, height: u32) -> Result<RgbaImage> {
    let shape = TensorShape::new(width, height)?;
    let expected = shape.element_count();
    if data.len() != expected {
        return Err(CodecError::TensorSizeMismatch {
            expected,
            actual: data.len(),
            width,
            height,
        });
    }

    let mut image = RgbaImage::new(width, height);
    for row in 0..height {
        for col in 0..width {
            let base = shape.index(row, col, 0);
            let r = (data[base] * 255.0) as u8;
            let g = (data[base + 1] * 255.0) as u8;
            let b = (data[base + 2] * 255.0) as u8;

            let (x, y) = pixel_position(row, col);
            image.put_pixel(x, y, Rgba([r, g, b, 255]));
        }
    }

    debug!("decoded {expected} floats into a {width}x{height} image");
    Ok(image)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encode::{image_to_tensor, Normalization};
    use image::{DynamicImage, Rgb};

    #[test]
    fn test_pixel_position_swaps_axes() {
        assert_eq!(pixel_position(0, 0), (0, 0));
        assert_eq!(pixel_position(5, 2), (2, 5));
    }

    #[test]
    fn test_all_ones_decodes_to_white() {
        let image = tensor_to_image(&[1.0; 12], 2, 2).unwrap();

        assert_eq!(image.dimensions(), (2, 2));
        assert!(image.pixels().all(|p| *p == Rgba([255, 255, 255, 255])));
    }

    #[test]
    fn test_axis_swap_on_non_square_tensor() {
        // 3 wide, 2 tall; pure red at tensor position (row 0, col 1)
        let (width, height) = (3u32, 2u32);
        let shape = TensorShape::new(width, height).unwrap();
        let mut data = vec![0.0f32; shape.element_count()];
        data[shape.index(0, 1, 0)] = 1.0;

        let image = tensor_to_image(&data, width, height).unwrap();

        // Row becomes y, column becomes x
        assert_eq!(*image.get_pixel(1, 0), Rgba([255, 0, 0, 255]));
        // The transposed position stays black
        assert_eq!(*image.get_pixel(0, 1), Rgba([0, 0, 0, 255]));
    }

    #[test]
    fn test_short_buffer_rejected() {
        let err = tensor_to_image(&[0.0; 11], 2, 2).unwrap_err();

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
    fn test_oversized_buffer_rejected() {
        assert!(tensor_to_image(&[0.0; 13], 2, 2).is_err());
    }

    #[test]
    fn test_zero_dimensions_rejected() {
        assert!(tensor_to_image(&[], 0, 0).is_err());
    }

    #[test]
    fn test_out_of_range_values_saturate() {
        let data = [1.7, -0.3, 0.5];
        let image = tensor_to_image(&data, 1, 1).unwrap();

        assert_eq!(*image.get_pixel(0, 0), Rgba([255, 0, 127, 255]));
    }

    #[test]
    fn test_round_trip_solid_color() {
        let color = [200u8, 64, 17];
        let source =
            DynamicImage::ImageRgb8(image::RgbImage::from_pixel(4, 4, Rgb(color)));

        let tensor = image_to_tensor(&source, 4, 4, Normalization::default()).unwrap();
        let decoded = tensor_to_image(tensor.as_slice(), 4, 4).unwrap();

        for pixel in decoded.pixels() {
            for channel in 0..3 {
                let diff = i16::from(pixel[channel]) - i16::from(color[channel]);
                assert!(diff.abs() <= 1, "channel {channel} off by {diff}");
            }
            assert_eq!(pixel[3], 255);
        }
    }

    #[test]
    fn test_round_trip_preserves_orientation() {
        // Distinct corners on a non-square image survive encode + decode in
        // place, which fails if either side drops the axis swap
        let mut rgb = image::RgbImage::from_pixel(3, 2, Rgb([0, 0, 0]));
        rgb.put_pixel(0, 0, Rgb([255, 0, 0]));
        rgb.put_pixel(2, 0, Rgb([0, 0, 255]));
        rgb.put_pixel(0, 1, Rgb([0, 255, 0]));
        let source = DynamicImage::ImageRgb8(rgb);

        let tensor = image_to_tensor(&source, 3, 2, Normalization::default()).unwrap();
        let decoded = tensor_to_image(tensor.as_slice(), 3, 2).unwrap();

        assert_eq!(*decoded.get_pixel(0, 0), Rgba([255, 0, 0, 255]));
        assert_eq!(*decoded.get_pixel(2, 0), Rgba([0, 0, 255, 255]));
        assert_eq!(*decoded.get_pixel(0, 1), Rgba([0, 255, 0, 255]));
        assert_eq!(*decoded.get_pixel(1, 1), Rgba([0, 0, 0, 255]));
    }
}
