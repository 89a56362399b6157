//! # Style Codec
//!
//! Image ↔ tensor conversion for on-device neural style transfer models.
//!
//! A style transfer pipeline has three stations: encode a photo into the
//! flat float buffer a model consumes, run the model, and decode the model's
//! output buffer back into a displayable image. This crate owns the two
//! conversion ends and the resampling they depend on; running the model is an
//! external collaborator's job, pinned down by the [`TensorExecutor`] trait.
//!
//! The numeric contracts matter more than the code size here: channel order
//! (R, G, B), row-major traversal, the `(mean, std)` normalization window and
//! the row/column axis swap on decode all have to line up with what the model
//! was trained against, or the output comes back garbled or transposed.
//!
//! ## Quick Start
//!
//! ```rust
//! use style_codec::{image_to_tensor, tensor_to_image, Normalization};
//! use image::DynamicImage;
//!
//! # fn main() -> style_codec::Result<()> {
//! let photo = DynamicImage::new_rgb8(640, 480);
//!
//! // Stretch to the model's input size and normalize [0,255] -> [0.0,1.0]
//! let tensor = image_to_tensor(&photo, 384, 384, Normalization::default())?;
//! assert_eq!(tensor.as_slice().len(), 384 * 384 * 3);
//!
//! // ... hand `tensor` to an executor, get a buffer of the same shape back ...
//!
//! let stylized = tensor_to_image(tensor.as_slice(), 384, 384)?;
//! assert_eq!(stylized.dimensions(), (384, 384));
//! # Ok(())
//! # }
//! ```
//!
//! Every operation is a bounded, synchronous, pure computation over
//! caller-owned data; the crate keeps no state between calls and is safe to
//! use from any number of threads.

pub mod decode;
pub mod encode;
pub mod error;
pub mod executor;
pub mod resample;
pub mod tensor;

// Re-exports for convenience
pub use decode::tensor_to_image;
pub use encode::{image_to_tensor, Normalization};
pub use error::{CodecError, Result};
pub use executor::{PassthroughExecutor, TensorExecutor};
pub use resample::{blank_image, resize_fill};
pub use tensor::{TensorBuffer, TensorShape, BATCH_SIZE, CHANNELS};
