//! PNG encoding, the lossless path.
//!
//! Always encodes at the encoder's best compression with adaptive row
//! filtering. Alpha is kept.

use image::codecs::png::{CompressionType, FilterType as PngFilterType, PngEncoder};
use image::ImageEncoder;

use super::{check_dimensions, EncodeError};
use crate::grid::PixelGrid;

/// Encode a grid to PNG bytes at maximum compression.
pub fn encode_png(grid: &PixelGrid) -> Result<Vec<u8>, EncodeError> {
    check_dimensions(grid)?;

    let mut buffer = Vec::new();
    let encoder =
        PngEncoder::new_with_quality(&mut buffer, CompressionType::Best, PngFilterType::Adaptive);

    encoder
        .write_image(
            grid.pixels(),
            grid.width(),
            grid.height(),
            grid.layout().extended(),
        )
        .map_err(|e| EncodeError::EncodingFailed(e.to_string()))?;

    Ok(buffer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::ColorLayout;

    const PNG_SIGNATURE: [u8; 8] = [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];

    #[test]
    fn test_encode_png_signature() {
        let grid = PixelGrid::from_raw(10, 10, ColorLayout::Rgb8, vec![0u8; 300]).unwrap();
        let bytes = encode_png(&grid).unwrap();
        assert_eq!(&bytes[0..8], &PNG_SIGNATURE);
    }

    #[test]
    fn test_encode_png_is_lossless() {
        let pixels: Vec<u8> = (0..16 * 8 * 3).map(|i| ((i * 31) % 256) as u8).collect();
        let grid = PixelGrid::from_raw(16, 8, ColorLayout::Rgb8, pixels.clone()).unwrap();

        let bytes = encode_png(&grid).unwrap();
        let decoded = image::load_from_memory(&bytes).unwrap().into_rgb8();

        assert_eq!(decoded.dimensions(), (16, 8));
        assert_eq!(decoded.into_raw(), pixels);
    }

    #[test]
    fn test_encode_png_keeps_alpha() {
        let pixels = [10u8, 20, 30, 40].repeat(4 * 4);
        let grid = PixelGrid::from_raw(4, 4, ColorLayout::Rgba8, pixels.clone()).unwrap();

        let bytes = encode_png(&grid).unwrap();
        let decoded = image::load_from_memory(&bytes).unwrap();

        assert!(decoded.color().has_alpha());
        assert_eq!(decoded.into_rgba8().into_raw(), pixels);
    }

    #[test]
    fn test_encode_png_zero_height() {
        let grid = PixelGrid::from(image::RgbaImage::new(10, 0));
        let result = encode_png(&grid);
        assert!(matches!(result, Err(EncodeError::InvalidDimensions { .. })));
    }
}
