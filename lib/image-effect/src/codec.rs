//! Container boundary: raster files in, PNG files out
//!
//! Decoding goes through the `image` crate and always lands on 8-bit RGB
//! or RGBA. Encoding uses the `png` crate directly so the palette, sRGB
//! and compression settings can be controlled.

use crate::{ImageEffectError, ImageEffectResult, PixelBuffer};
use derivative::Derivative;
use derive_setters::Setters;
use image::DynamicImage;
use std::{
    borrow::Cow,
    collections::{HashMap, HashSet},
    fs,
    path::Path,
};

const MAX_PALETTE_LEN: usize = 256;

#[derive(Debug, Clone)]
pub struct DecodedImage {
    pub buffer: PixelBuffer,
    /// Size of the source file in bytes
    pub file_size: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PngCompression {
    Fast,
    Default,
    Best,
}

impl From<PngCompression> for png::Compression {
    fn from(compression: PngCompression) -> Self {
        match compression {
            PngCompression::Fast => png::Compression::Fast,
            PngCompression::Default => png::Compression::Default,
            PngCompression::Best => png::Compression::Best,
        }
    }
}

/// PNG encoder profile
#[derive(Debug, Clone, Derivative, Setters)]
#[derivative(Default)]
#[setters(prefix = "with_")]
#[non_exhaustive]
pub struct PngConfig {
    #[derivative(Default(value = "PngCompression::Best"))]
    pub compression: PngCompression,

    /// Write an indexed image when there are at most 256 distinct colors
    #[derivative(Default(value = "true"))]
    pub palette: bool,

    /// Tag the output with an sRGB chunk
    #[derivative(Default(value = "true"))]
    pub srgb: bool,
}

impl PngConfig {
    pub fn new() -> Self {
        Self::default()
    }
}

pub fn decode_bytes(bytes: &[u8]) -> ImageEffectResult<PixelBuffer> {
    let img = image::load_from_memory(bytes)?;
    let (width, height) = (img.width(), img.height());

    let buffer = match img {
        DynamicImage::ImageRgb8(rgb) => PixelBuffer::new(rgb.into_raw(), width, height, 3)?,
        DynamicImage::ImageRgba8(rgba) => PixelBuffer::new(rgba.into_raw(), width, height, 4)?,
        other if other.color().has_alpha() => {
            log::debug!("normalizing {:?} to rgba8", other.color());
            PixelBuffer::new(other.to_rgba8().into_raw(), width, height, 4)?
        }
        other => {
            log::debug!("normalizing {:?} to rgb8", other.color());
            PixelBuffer::new(other.to_rgb8().into_raw(), width, height, 3)?
        }
    };

    Ok(buffer)
}

pub fn decode_file(path: impl AsRef<Path>) -> ImageEffectResult<DecodedImage> {
    let bytes = fs::read(path.as_ref())?;
    let buffer = decode_bytes(&bytes)?;

    log::debug!(
        "decoded {}: {}x{}, {} channels, {} raw bytes",
        path.as_ref().display(),
        buffer.width(),
        buffer.height(),
        buffer.channels(),
        buffer.len()
    );

    Ok(DecodedImage {
        buffer,
        file_size: bytes.len() as u64,
    })
}

pub fn encode_png(buffer: &PixelBuffer, config: &PngConfig) -> ImageEffectResult<Vec<u8>> {
    if buffer.is_empty() {
        return Err(ImageEffectError::InvalidParameter(format!(
            "can not encode an empty {}x{} image",
            buffer.width(),
            buffer.height()
        )));
    }

    let palette = if config.palette {
        Palette::build(buffer)
    } else {
        None
    };

    let mut out = Vec::new();
    {
        let mut encoder = png::Encoder::new(&mut out, buffer.width(), buffer.height());
        encoder.set_depth(png::BitDepth::Eight);
        encoder.set_compression(config.compression.into());

        if config.srgb {
            encoder.set_srgb(png::SrgbRenderingIntent::Perceptual);
        }

        let data = match palette {
            Some(palette) => {
                log::debug!("writing indexed png with {} colors", palette.len());

                // Filtering rarely helps index data
                encoder.set_color(png::ColorType::Indexed);
                encoder.set_filter(png::FilterType::NoFilter);
                encoder.set_adaptive_filter(png::AdaptiveFilterType::NonAdaptive);
                encoder.set_palette(palette.plte);
                if let Some(trns) = palette.trns {
                    encoder.set_trns(trns);
                }
                Cow::Owned(palette.indices)
            }
            None => {
                encoder.set_color(if buffer.has_alpha() {
                    png::ColorType::Rgba
                } else {
                    png::ColorType::Rgb
                });
                encoder.set_adaptive_filter(png::AdaptiveFilterType::Adaptive);
                Cow::Borrowed(buffer.as_raw())
            }
        };

        let mut writer = encoder.write_header()?;
        writer.write_image_data(&data)?;
        writer.finish()?;
    }

    Ok(out)
}

/// Encode `buffer` and write it to `path`, creating missing parent
/// directories first. Returns the number of bytes written.
pub fn write_png(
    buffer: &PixelBuffer,
    path: impl AsRef<Path>,
    config: &PngConfig,
) -> ImageEffectResult<u64> {
    let path = path.as_ref();

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let bytes = encode_png(buffer, config)?;
    fs::write(path, &bytes)?;

    log::debug!("wrote {} ({} bytes)", path.display(), bytes.len());
    Ok(bytes.len() as u64)
}

/// Lossless palette for images with few distinct colors
struct Palette {
    plte: Vec<u8>,
    trns: Option<Vec<u8>>,
    indices: Vec<u8>,
}

impl Palette {
    fn build(buffer: &PixelBuffer) -> Option<Self> {
        let mut colors: Vec<[u8; 4]> = Vec::new();
        let mut seen: HashSet<[u8; 4]> = HashSet::new();

        for pixel in buffer.pixels() {
            let color = rgba_of(pixel);
            if seen.insert(color) {
                if colors.len() == MAX_PALETTE_LEN {
                    return None;
                }
                colors.push(color);
            }
        }

        // Translucent entries first so the tRNS chunk can stop early
        colors.sort_by_key(|c| c[3] == u8::MAX);

        let lookup: HashMap<[u8; 4], u8> = colors
            .iter()
            .enumerate()
            .map(|(i, c)| (*c, i as u8))
            .collect();

        let indices = buffer
            .pixels()
            .map(|pixel| lookup[&rgba_of(pixel)])
            .collect();

        let plte = colors.iter().flat_map(|c| [c[0], c[1], c[2]]).collect();

        let trns: Vec<u8> = colors
            .iter()
            .map(|c| c[3])
            .take_while(|a| *a != u8::MAX)
            .collect();

        Some(Self {
            plte,
            trns: (!trns.is_empty()).then_some(trns),
            indices,
        })
    }

    fn len(&self) -> usize {
        self.plte.len() / 3
    }
}

fn rgba_of(pixel: &[u8]) -> [u8; 4] {
    [
        pixel[0],
        pixel[1],
        pixel[2],
        pixel.get(3).copied().unwrap_or(u8::MAX),
    ]
}
