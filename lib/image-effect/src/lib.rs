pub mod codec;
pub mod complement_effect;
pub mod pixel_buffer;

pub use codec::{DecodedImage, PngCompression, PngConfig};
pub use complement_effect::{complement, complement_in_place, complement_raw};
pub use pixel_buffer::{ChannelLayout, PixelBuffer};

pub type ImageEffectResult<T> = Result<T, ImageEffectError>;

#[derive(thiserror::Error, Debug)]
pub enum ImageEffectError {
    #[error("Unsupported channel count: {0} (expected 3 for RGB or 4 for RGBA)")]
    UnsupportedChannels(u8),
    #[error("Buffer size mismatch: expected {expected} bytes, got {actual}")]
    BufferSize { expected: usize, actual: usize },
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),
    #[error("PNG encoding error: {0}")]
    PngEncoding(#[from] png::EncodingError),
}

pub trait Effect {
    fn apply(&self, buffer: &mut PixelBuffer) -> ImageEffectResult<()>;
}

#[derive(Debug, Clone)]
pub enum ImageEffect {
    Complement,
}

impl Effect for ImageEffect {
    fn apply(&self, buffer: &mut PixelBuffer) -> ImageEffectResult<()> {
        match self {
            ImageEffect::Complement => {
                complement_effect::complement_in_place(buffer);
                Ok(())
            }
        }
    }
}
