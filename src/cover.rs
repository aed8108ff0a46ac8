//! Cover image handling.

use std::io::Cursor;
use std::path::Path;

use image::ImageFormat;

use crate::error::Result;

/// Re-encode an image file as JPEG bytes suitable for embedding as a cover.
///
/// Decodes any supported input format (JPEG, PNG, GIF, WebP), flattens to
/// RGB, and encodes JPEG. Decoding and encoding errors propagate to the
/// caller.
pub fn reencode_jpeg<P: AsRef<Path>>(path: P) -> Result<Vec<u8>> {
    let img = image::open(path)?;
    let rgb = image::DynamicImage::ImageRgb8(img.to_rgb8());
    let mut buf = Cursor::new(Vec::new());
    rgb.write_to(&mut buf, ImageFormat::Jpeg)?;
    Ok(buf.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_reencode_png_to_jpeg() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cover.png");

        let img = image::RgbaImage::from_pixel(4, 4, image::Rgba([200, 10, 10, 255]));
        img.save_with_format(&path, ImageFormat::Png).unwrap();

        let jpeg = reencode_jpeg(&path).unwrap();
        // JPEG SOI marker
        assert_eq!(&jpeg[..2], &[0xFF, 0xD8]);
    }

    #[test]
    fn test_missing_file_is_error() {
        assert!(reencode_jpeg("does/not/exist.png").is_err());
    }

    #[test]
    fn test_garbage_input_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cover.png");
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(b"not an image").unwrap();
        drop(file);
        assert!(reencode_jpeg(&path).is_err());
    }
}
