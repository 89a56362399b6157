use std::borrow::Cow;

use image::{imageops::FilterType, DynamicImage, GenericImageView, Rgba, RgbaImage};
use tracing::debug;

use crate::error::{CodecError, Result};

/// Stretch `image` to exactly `width` x `height`.
///
/// X and Y are scaled independently with a bilinear filter, so the aspect
/// ratio is not preserved: the full source rectangle maps onto the full
/// target rectangle. The ancestor of this routine was named "keep ratio"
/// despite doing exactly this stretch; the behavior is kept, the name is not.
///
/// When the source already has the requested dimensions it is returned
/// borrowed, without copying.
pub fn resize_fill(image: &DynamicImage, width: u32, height: u32) -> Result<Cow<'_, DynamicImage>> {
    if width == 0 || height == 0 {
        return Err(CodecError::InvalidDimensions { width, height });
    }

    let (src_width, src_height) = image.dimensions();
    if src_width == width && src_height == height {
        return Ok(Cow::Borrowed(image));
    }

    debug!("resizing {src_width}x{src_height} -> {width}x{height}");
    Ok(Cow::Owned(image.resize_exact(
        width,
        height,
        FilterType::Triangle,
    )))
}

/// Allocate a `width` x `height` RGBA image.
///
/// A fully transparent black `fill` leaves the buffer in its zero-initialized
/// state; any other fill paints every pixel with it. Used for placeholder
/// imagery while no capture or result exists yet.
pub fn blank_image(width: u32, height: u32, fill: Rgba<u8>) -> Result<RgbaImage> {
    if width == 0 || height == 0 {
        return Err(CodecError::InvalidDimensions { width, height });
    }

    if fill == Rgba([0, 0, 0, 0]) {
        Ok(RgbaImage::new(width, height))
    } else {
        Ok(RgbaImage::from_pixel(width, height, fill))
    }
}
