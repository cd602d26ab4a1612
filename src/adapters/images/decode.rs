//! Raster decoding for banner images.

use crate::domain::layout::RasterImage;
use crate::ports::ImageLoadError;

/// Decodes PNG, JPEG, GIF or BMP bytes into an 8-bit RGB raster.
///
/// Translucent pixels are composited onto white, the page colour.
pub fn decode_raster(bytes: &[u8]) -> Result<RasterImage, ImageLoadError> {
    let decoded = image::load_from_memory(bytes).map_err(|e| ImageLoadError::decode(e.to_string()))?;
    let rgba = decoded.to_rgba8();
    let (width_px, height_px) = rgba.dimensions();
    if width_px == 0 || height_px == 0 {
        return Err(ImageLoadError::decode("image has no pixels"));
    }

    let rgb = rgba
        .pixels()
        .flat_map(|pixel| {
            let [r, g, b, a] = pixel.0;
            [r, g, b].map(|channel| over_white(channel, a))
        })
        .collect();

    Ok(RasterImage {
        width_px,
        height_px,
        rgb,
    })
}

fn over_white(channel: u8, alpha: u8) -> u8 {
    let (c, a) = (u32::from(channel), u32::from(alpha));
    ((c * a + 255 * (255 - a) + 127) / 255) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{DynamicImage, ImageOutputFormat, Rgb, RgbImage, Rgba, RgbaImage};
    use std::io::Cursor;

    fn encode(image: DynamicImage) -> Vec<u8> {
        let mut bytes = Cursor::new(Vec::new());
        image.write_to(&mut bytes, ImageOutputFormat::Png).unwrap();
        bytes.into_inner()
    }

    fn png(width: u32, height: u32) -> Vec<u8> {
        encode(DynamicImage::ImageRgb8(RgbImage::from_pixel(
            width,
            height,
            Rgb([10, 20, 30]),
        )))
    }

    fn rgba_png(pixel: [u8; 4]) -> Vec<u8> {
        encode(DynamicImage::ImageRgba8(RgbaImage::from_pixel(4, 1, Rgba(pixel))))
    }

    #[test]
    fn decodes_png_to_rgb() {
        let raster = decode_raster(&png(3, 2)).unwrap();
        assert_eq!((raster.width_px, raster.height_px), (3, 2));
        assert_eq!(raster.rgb.len(), 3 * 2 * 3);
        assert_eq!(&raster.rgb[..3], &[10, 20, 30]);
    }

    #[test]
    fn transparent_pixels_become_white() {
        let raster = decode_raster(&rgba_png([0, 0, 0, 0])).unwrap();
        assert_eq!(raster.rgb.len(), 4 * 3);
        assert!(raster.rgb.iter().all(|&c| c == 255));
    }

    #[test]
    fn translucent_pixels_blend_with_white() {
        let raster = decode_raster(&rgba_png([0, 0, 0, 128])).unwrap();
        assert_eq!(&raster.rgb[..3], &[127, 127, 127]);
    }

    #[test]
    fn opaque_rgba_pixels_keep_their_colour() {
        let raster = decode_raster(&rgba_png([200, 100, 50, 255])).unwrap();
        assert_eq!(&raster.rgb[..3], &[200, 100, 50]);
    }

    #[test]
    fn garbage_is_a_decode_error() {
        assert!(matches!(
            decode_raster(b"definitely not an image"),
            Err(ImageLoadError::Decode(_))
        ));
    }
}
