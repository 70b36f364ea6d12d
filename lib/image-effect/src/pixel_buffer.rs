//! Raw interleaved pixel storage
//!
//! A `PixelBuffer` is decoded image data without any container metadata:
//! `width * height` pixels, each made of 3 (RGB) or 4 (RGBA) `u8` samples.

use crate::{ImageEffectError, ImageEffectResult};
use num_enum::TryFromPrimitive;

/// Number and order of the interleaved samples of one pixel
#[derive(Debug, Clone, Copy, PartialEq, Eq, TryFromPrimitive)]
#[repr(u8)]
pub enum ChannelLayout {
    Rgb = 3,
    Rgba = 4,
}

impl ChannelLayout {
    pub fn channels(self) -> u8 {
        self as u8
    }

    pub fn has_alpha(self) -> bool {
        matches!(self, ChannelLayout::Rgba)
    }

    pub fn from_channels(channels: u8) -> ImageEffectResult<Self> {
        Self::try_from(channels).map_err(|e| ImageEffectError::UnsupportedChannels(e.number))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    data: Vec<u8>,
    width: u32,
    height: u32,
    layout: ChannelLayout,
}

impl PixelBuffer {
    /// Wrap `data` after checking the channel count and that the length
    /// is exactly `width * height * channels`.
    pub fn new(data: Vec<u8>, width: u32, height: u32, channels: u8) -> ImageEffectResult<Self> {
        let layout = ChannelLayout::from_channels(channels)?;
        let expected = expected_len(width, height, layout)?;

        if data.len() != expected {
            return Err(ImageEffectError::BufferSize {
                expected,
                actual: data.len(),
            });
        }

        Ok(Self {
            data,
            width,
            height,
            layout,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn layout(&self) -> ChannelLayout {
        self.layout
    }

    pub fn channels(&self) -> u8 {
        self.layout.channels()
    }

    pub fn has_alpha(&self) -> bool {
        self.layout.has_alpha()
    }

    pub fn pixel_count(&self) -> usize {
        self.data.len() / self.channels() as usize
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn as_raw(&self) -> &[u8] {
        &self.data
    }

    pub(crate) fn as_raw_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    pub fn into_raw(self) -> Vec<u8> {
        self.data
    }

    /// Iterate over pixels as `channels()`-sized slices
    pub fn pixels(&self) -> std::slice::ChunksExact<'_, u8> {
        self.data.chunks_exact(self.channels() as usize)
    }
}

fn expected_len(width: u32, height: u32, layout: ChannelLayout) -> ImageEffectResult<usize> {
    (width as usize)
        .checked_mul(height as usize)
        .and_then(|n| n.checked_mul(layout.channels() as usize))
        .ok_or_else(|| {
            ImageEffectError::InvalidParameter(format!(
                "{width}x{height}x{} overflows the addressable size",
                layout.channels()
            ))
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_channel_layout_from_channels() {
        assert_eq!(ChannelLayout::from_channels(3).unwrap(), ChannelLayout::Rgb);
        assert_eq!(ChannelLayout::from_channels(4).unwrap(), ChannelLayout::Rgba);

        for channels in [0u8, 1, 2, 5, 255] {
            let err = ChannelLayout::from_channels(channels).unwrap_err();
            assert!(matches!(err, ImageEffectError::UnsupportedChannels(n) if n == channels));
        }
    }

    #[test]
    fn test_new_validates_length() {
        let buffer = PixelBuffer::new(vec![0; 2 * 3 * 4], 2, 3, 4).unwrap();
        assert_eq!(buffer.width(), 2);
        assert_eq!(buffer.height(), 3);
        assert_eq!(buffer.pixel_count(), 6);
        assert!(buffer.has_alpha());

        let err = PixelBuffer::new(vec![0; 11], 2, 2, 3).unwrap_err();
        assert!(matches!(
            err,
            ImageEffectError::BufferSize {
                expected: 12,
                actual: 11
            }
        ));
    }

    #[test]
    fn test_new_rejects_grayscale() {
        let err = PixelBuffer::new(vec![0; 4], 2, 2, 1).unwrap_err();
        assert!(matches!(err, ImageEffectError::UnsupportedChannels(1)));
    }

    #[test]
    fn test_empty_buffer() {
        let buffer = PixelBuffer::new(Vec::new(), 0, 7, 3).unwrap();
        assert!(buffer.is_empty());
        assert_eq!(buffer.pixels().count(), 0);
    }

    #[test]
    fn test_pixels_iteration() {
        let buffer = PixelBuffer::new(vec![1, 2, 3, 4, 5, 6], 2, 1, 3).unwrap();
        let pixels: Vec<&[u8]> = buffer.pixels().collect();
        assert_eq!(pixels, vec![&[1, 2, 3][..], &[4, 5, 6][..]]);
    }
}
