use crate::{ImageEffectResult, PixelBuffer};

/// Complement the colors of an image: every R, G and B sample becomes
/// `255 - value`, alpha is left untouched.
pub fn complement(input: &PixelBuffer) -> PixelBuffer {
    let mut output = input.clone();
    complement_in_place(&mut output);
    output
}

pub fn complement_in_place(buffer: &mut PixelBuffer) {
    let channels = buffer.channels() as usize;

    for pixel in buffer.as_raw_mut().chunks_exact_mut(channels) {
        pixel[0] = 255 - pixel[0];
        pixel[1] = 255 - pixel[1];
        pixel[2] = 255 - pixel[2];
    }
}

/// Same as [`complement`] on bare interleaved bytes
pub fn complement_raw(
    data: &[u8],
    width: u32,
    height: u32,
    channels: u8,
) -> ImageEffectResult<Vec<u8>> {
    let mut buffer = PixelBuffer::new(data.to_vec(), width, height, channels)?;
    complement_in_place(&mut buffer);
    Ok(buffer.into_raw())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Effect, ImageEffect, ImageEffectError};

    fn gradient(width: u32, height: u32, channels: u8) -> PixelBuffer {
        let len = (width * height) as usize * channels as usize;
        let data = (0..len).map(|i| (i * 37 % 256) as u8).collect();
        PixelBuffer::new(data, width, height, channels).unwrap()
    }

    #[test]
    fn test_single_rgb_pixel() {
        let output = complement_raw(&[10, 20, 30], 1, 1, 3).unwrap();
        assert_eq!(output, vec![245, 235, 225]);
    }

    #[test]
    fn test_single_rgba_pixel_keeps_alpha() {
        let output = complement_raw(&[0, 128, 255, 200], 1, 1, 4).unwrap();
        assert_eq!(output, vec![255, 127, 0, 200]);
    }

    #[test]
    fn test_white_becomes_black() {
        let output = complement_raw(&[255; 12], 2, 2, 3).unwrap();
        assert_eq!(output, vec![0; 12]);
    }

    #[test]
    fn test_every_sample_value() {
        // 256 pixels, R=G=B=v
        let data: Vec<u8> = (0..=255u8).flat_map(|v| [v, v, v]).collect();
        let output = complement_raw(&data, 16, 16, 3).unwrap();

        for (v, pixel) in output.chunks_exact(3).enumerate() {
            let expected = 255 - v as u8;
            assert_eq!(pixel, &[expected, expected, expected]);
        }

        assert_eq!(complement_raw(&[0, 255, 0], 1, 1, 3).unwrap(), vec![255, 0, 255]);
    }

    #[test]
    fn test_double_complement_restores_input() {
        for channels in [3, 4] {
            let input = gradient(7, 5, channels);
            let twice = complement(&complement(&input));
            assert_eq!(twice, input);
        }
    }

    #[test]
    fn test_alpha_is_untouched() {
        let input = gradient(9, 4, 4);
        let output = complement(&input);

        for (before, after) in input.pixels().zip(output.pixels()) {
            assert_eq!(before[3], after[3]);
            assert_ne!(&before[..3], &after[..3]);
        }
    }

    #[test]
    fn test_dimensions_preserved() {
        let input = gradient(3, 11, 4);
        let output = complement(&input);

        assert_eq!(output.len(), input.len());
        assert_eq!(output.width(), input.width());
        assert_eq!(output.height(), input.height());
        assert_eq!(output.layout(), input.layout());
    }

    #[test]
    fn test_unsupported_channels() {
        let err = complement_raw(&[1, 2], 1, 1, 2).unwrap_err();
        assert!(matches!(err, ImageEffectError::UnsupportedChannels(2)));

        let err = complement_raw(&[1, 2, 3, 4, 5], 1, 1, 5).unwrap_err();
        assert!(matches!(err, ImageEffectError::UnsupportedChannels(5)));
    }

    #[test]
    fn test_effect_matches_function() {
        let input = gradient(4, 4, 3);
        let mut buffer = input.clone();
        ImageEffect::Complement.apply(&mut buffer).unwrap();
        assert_eq!(buffer, complement(&input));
    }

    #[test]
    fn test_empty_buffer() {
        let output = complement_raw(&[], 0, 0, 4).unwrap();
        assert!(output.is_empty());
    }
}
