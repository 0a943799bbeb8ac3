use encoding_rs::Encoding;
use log::{debug, warn};
use qrcode::QrCode;

use crate::common::{EncodeOptions, ModuleGrid, QRError, QRResult};

// Module matrix source
//------------------------------------------------------------------------------

/// Turns content into a module grid laid out on a `width` x `height` canvas.
pub trait ModuleMatrixSource {
    fn encode(
        &self,
        content: &str,
        width: u32,
        height: u32,
        opts: &EncodeOptions,
    ) -> QRResult<ModuleGrid>;
}

/// [`ModuleMatrixSource`] backed by the `qrcode` crate.
///
/// The symbol and its quiet zone are scaled by the largest integer factor that fits the
/// canvas and centered on it. A canvas smaller than the symbol plus its quiet zone is
/// grown to fit, so the returned grid can be larger than requested.
#[derive(Debug, Default, Clone, Copy)]
pub struct QrCodeSource;

impl QrCodeSource {
    pub fn new() -> Self {
        Self
    }

    fn to_bytes(content: &str, charset: &str) -> QRResult<Vec<u8>> {
        let encoding = Encoding::for_label(charset.trim().as_bytes())
            .ok_or_else(|| QRError::UnsupportedCharset(charset.to_string()))?;
        let (bytes, used, unmappable) = encoding.encode(content);
        if used != encoding {
            debug!("Charset {} encodes as {}", encoding.name(), used.name());
        }
        if unmappable {
            warn!("Content has characters not representable in {}", used.name());
        }
        Ok(bytes.into_owned())
    }
}

impl ModuleMatrixSource for QrCodeSource {
    fn encode(
        &self,
        content: &str,
        width: u32,
        height: u32,
        opts: &EncodeOptions,
    ) -> QRResult<ModuleGrid> {
        if content.is_empty() {
            return Err(QRError::EmptyContent);
        }
        if width == 0 || height == 0 {
            return Err(QRError::InvalidDimensions { width, height });
        }

        let data = Self::to_bytes(content, &opts.charset)?;
        let code = QrCode::with_error_correction_level(&data, opts.ec_level.into())?;
        let sym_w = code.width() as u32;
        let colors = code.to_colors();
        debug!("Encoded {} bytes into {sym_w}x{sym_w} modules {opts}", data.len());

        let qz_w = opts
            .margin
            .checked_mul(2)
            .and_then(|m| m.checked_add(sym_w))
            .ok_or(QRError::InvalidDimensions { width, height })?;
        let out_w = width.max(qz_w);
        let out_h = height.max(qz_w);
        let scale = (out_w / qz_w).min(out_h / qz_w);
        let left = (out_w - sym_w * scale) / 2;
        let top = (out_h - sym_w * scale) / 2;
        let span = sym_w * scale;

        if (out_w, out_h) != (width, height) {
            warn!("Canvas {width}x{height} is too small for the symbol, using {out_w}x{out_h}");
        }

        ModuleGrid::from_fn(out_w, out_h, |r, c| {
            if r < top || c < left || r >= top + span || c >= left + span {
                return false;
            }
            let mr = ((r - top) / scale) as usize;
            let mc = ((c - left) / scale) as usize;
            colors[mr * sym_w as usize + mc] == qrcode::Color::Dark
        })
    }
}
