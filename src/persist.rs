use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};

use image::codecs::jpeg::JpegEncoder;
use image::codecs::png::PngEncoder;
use image::{DynamicImage, ImageEncoder, RgbaImage};
use log::{debug, info};

use crate::common::QRResult;

/// Quality used for JPEG output.
pub const JPEG_QUALITY: u8 = 75;

const FALLBACK_EXTENSION: &str = "PNG";

// Output format
//------------------------------------------------------------------------------

#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum OutputFormat {
    Png,
    Jpeg,
}

impl OutputFormat {
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_uppercase().as_str() {
            "PNG" => Some(Self::Png),
            "JPG" | "JPEG" => Some(Self::Jpeg),
            _ => None,
        }
    }
}

/// Picks the container format for `file_name` and the name the file is written under.
///
/// A recognised extension keeps the name as is. Anything else, including a name without
/// any `.`, is written as PNG with the last extension (if any) replaced by `.PNG`.
/// Dots inside the stem are kept, so `my.code.gif` becomes `my.code.PNG`.
pub fn resolve_output(file_name: &str) -> (String, OutputFormat) {
    let (stem, ext) = match file_name.rsplit_once('.') {
        Some((stem, ext)) => (stem, Some(ext)),
        None => (file_name, None),
    };

    match ext.and_then(OutputFormat::from_extension) {
        Some(format) => (file_name.to_string(), format),
        None => (format!("{stem}.{FALLBACK_EXTENSION}"), OutputFormat::Png),
    }
}

// Persistence
//------------------------------------------------------------------------------

/// Encodes `buffer` in `format`. JPEG drops the alpha channel.
pub fn encode(buffer: &RgbaImage, format: OutputFormat) -> QRResult<Vec<u8>> {
    let mut bytes = Vec::new();
    let (w, h) = buffer.dimensions();
    match format {
        OutputFormat::Png => {
            let encoder = PngEncoder::new(Cursor::new(&mut bytes));
            encoder.write_image(buffer.as_raw(), w, h, image::ExtendedColorType::Rgba8)?;
        }
        OutputFormat::Jpeg => {
            let rgb = DynamicImage::ImageRgba8(buffer.clone()).into_rgb8();
            let encoder = JpegEncoder::new_with_quality(Cursor::new(&mut bytes), JPEG_QUALITY);
            encoder.write_image(rgb.as_raw(), w, h, image::ExtendedColorType::Rgb8)?;
        }
    }
    debug!("Encoded {w}x{h} buffer as {format:?}, {} bytes", bytes.len());
    Ok(bytes)
}

/// Writes `buffer` to `dir` under the name chosen by [`resolve_output`] and returns the
/// path written. An existing file is overwritten; the directory is not created.
pub fn persist(buffer: &RgbaImage, dir: impl AsRef<Path>, file_name: &str) -> QRResult<PathBuf> {
    let (name, format) = resolve_output(file_name);
    let bytes = encode(buffer, format)?;

    let path = dir.as_ref().join(name);
    fs::write(&path, bytes)?;
    info!("Saved {format:?} to {}", path.display());
    Ok(path)
}

#[cfg(test)]
mod persist_tests {
    use std::fs;
    use std::path::PathBuf;

    use image::{ImageFormat, Rgba, RgbaImage};
    use proptest::prelude::*;
    use test_case::test_case;

    use super::{encode, persist, resolve_output, OutputFormat};
    use crate::common::QRError;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("qrcanvas-{}-{name}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    fn checker(w: u32, h: u32) -> RgbaImage {
        RgbaImage::from_fn(w, h, |x, y| {
            if (x / 4 + y / 4) % 2 == 0 {
                Rgba([0, 0, 0, 255])
            } else {
                Rgba([255, 255, 255, 255])
            }
        })
    }

    #[test_case("qr.png", "qr.png", OutputFormat::Png)]
    #[test_case("qr.PNG", "qr.PNG", OutputFormat::Png)]
    #[test_case("qr.Png", "qr.Png", OutputFormat::Png)]
    #[test_case("qr.jpg", "qr.jpg", OutputFormat::Jpeg)]
    #[test_case("qr.JPG", "qr.JPG", OutputFormat::Jpeg)]
    #[test_case("qr.jpeg", "qr.jpeg", OutputFormat::Jpeg)]
    #[test_case("code", "code.PNG", OutputFormat::Png)]
    #[test_case("code.bmp", "code.PNG", OutputFormat::Png)]
    #[test_case("my.code.gif", "my.code.PNG", OutputFormat::Png)]
    #[test_case("archive.png.txt", "archive.png.PNG", OutputFormat::Png)]
    #[test_case("code.", "code.PNG", OutputFormat::Png)]
    #[test_case("png", "png.PNG", OutputFormat::Png)]
    fn test_resolve_output(name: &str, exp_name: &str, exp_format: OutputFormat) {
        assert_eq!(resolve_output(name), (exp_name.to_string(), exp_format));
    }

    #[test]
    fn test_encode_png_keeps_pixels() {
        let img = checker(16, 12);
        let bytes = encode(&img, OutputFormat::Png).unwrap();
        assert_eq!(image::guess_format(&bytes).unwrap(), ImageFormat::Png);
        let decoded = image::load_from_memory(&bytes).unwrap().to_rgba8();
        assert_eq!(decoded, img);
    }

    #[test]
    fn test_encode_jpeg_drops_alpha() {
        let img = RgbaImage::from_pixel(8, 8, Rgba([200, 10, 10, 0]));
        let bytes = encode(&img, OutputFormat::Jpeg).unwrap();
        assert_eq!(image::guess_format(&bytes).unwrap(), ImageFormat::Jpeg);
        let decoded = image::load_from_memory(&bytes).unwrap();
        assert_eq!((decoded.width(), decoded.height()), (8, 8));
        assert!(!decoded.color().has_alpha());
    }

    #[test_case("out.png", "out.png", ImageFormat::Png)]
    #[test_case("out.JPEG", "out.JPEG", ImageFormat::Jpeg)]
    #[test_case("code", "code.PNG", ImageFormat::Png)]
    #[test_case("code.bmp", "code.PNG", ImageFormat::Png)]
    fn test_persist(name: &str, exp_name: &str, exp_format: ImageFormat) {
        let dir = scratch_dir(&format!("persist-{name}"));
        let path = persist(&checker(32, 32), &dir, name).unwrap();

        assert_eq!(path, dir.join(exp_name));
        let bytes = fs::read(&path).unwrap();
        assert_eq!(image::guess_format(&bytes).unwrap(), exp_format);
        let decoded = image::load_from_memory(&bytes).unwrap();
        assert_eq!((decoded.width(), decoded.height()), (32, 32));
        fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn test_persist_overwrites() {
        let dir = scratch_dir("overwrite");
        persist(&checker(8, 8), &dir, "qr.png").unwrap();
        let path = persist(&checker(20, 10), &dir, "qr.png").unwrap();

        let decoded = image::open(&path).unwrap();
        assert_eq!((decoded.width(), decoded.height()), (20, 10));
        fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn test_persist_missing_dir() {
        let root = scratch_dir("missing");
        let res = persist(&checker(8, 8), root.join("does").join("not").join("exist"), "qr.png");
        assert!(matches!(res, Err(QRError::Io(_))));
        fs::remove_dir_all(root).unwrap();
    }

    proptest! {
        #[test]
        fn proptest_unknown_extension_falls_back(stem in "[a-z0-9_]{1,12}", ext in "[a-z]{1,5}") {
            prop_assume!(OutputFormat::from_extension(&ext).is_none());
            let (name, format) = resolve_output(&format!("{stem}.{ext}"));
            prop_assert_eq!(name, format!("{stem}.PNG"));
            prop_assert_eq!(format, OutputFormat::Png);
        }

        #[test]
        fn proptest_known_extension_any_case(
            stem in "[a-z0-9_]{1,12}",
            upper in proptest::collection::vec(any::<bool>(), 4),
        ) {
            for ext in ["png", "jpg", "jpeg"] {
                let ext: String = ext
                    .chars()
                    .zip(upper.iter().cycle())
                    .map(|(c, &u)| if u { c.to_ascii_uppercase() } else { c })
                    .collect();
                let file_name = format!("{stem}.{ext}");
                let (name, _) = resolve_output(&file_name);
                prop_assert_eq!(name, file_name);
            }
        }
    }
}
