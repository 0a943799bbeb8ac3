use std::fmt::{Display, Error, Formatter};
use std::str::FromStr;

use image::Rgba;
use serde::{Deserialize, Serialize};

use super::error::{QRError, QRResult};

// Error correction level
//------------------------------------------------------------------------------

#[derive(Debug, PartialEq, Eq, Copy, Clone, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ECLevel {
    L = 0,
    M = 1,
    Q = 2,
    H = 3,
}

impl From<ECLevel> for qrcode::EcLevel {
    fn from(ecl: ECLevel) -> Self {
        match ecl {
            ECLevel::L => qrcode::EcLevel::L,
            ECLevel::M => qrcode::EcLevel::M,
            ECLevel::Q => qrcode::EcLevel::Q,
            ECLevel::H => qrcode::EcLevel::H,
        }
    }
}

impl FromStr for ECLevel {
    type Err = QRError;

    fn from_str(s: &str) -> QRResult<Self> {
        match s.to_ascii_uppercase().as_str() {
            "L" => Ok(Self::L),
            "M" => Ok(Self::M),
            "Q" => Ok(Self::Q),
            "H" => Ok(Self::H),
            _ => Err(QRError::InvalidECLevel(s.to_string())),
        }
    }
}

impl Display for ECLevel {
    fn fmt(&self, f: &mut Formatter) -> Result<(), Error> {
        write!(f, "{self:?}")
    }
}

// Encode options
//------------------------------------------------------------------------------

/// Options handed to a [`ModuleMatrixSource`](crate::ModuleMatrixSource).
///
/// Defaults to the highest error correction level, UTF-8 and a one module margin.
#[derive(Debug, PartialEq, Eq, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EncodeOptions {
    pub ec_level: ECLevel,
    pub charset: String,
    pub margin: u32,
}

impl Default for EncodeOptions {
    fn default() -> Self {
        Self { ec_level: ECLevel::H, charset: "UTF-8".to_string(), margin: 1 }
    }
}

impl Display for EncodeOptions {
    fn fmt(&self, f: &mut Formatter) -> Result<(), Error> {
        write!(
            f,
            "{{ Ec level: {}, Charset: {}, Margin: {} }}",
            self.ec_level, self.charset, self.margin
        )
    }
}

// Color
//------------------------------------------------------------------------------

pub const BLACK: Rgba<u8> = Rgba([0, 0, 0, 255]);
pub const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);

/// Mark and background colors used when painting a module grid.
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub struct ColorPair {
    pub mark: Rgba<u8>,
    pub background: Rgba<u8>,
}

impl ColorPair {
    pub const fn new(mark: Rgba<u8>, background: Rgba<u8>) -> Self {
        Self { mark, background }
    }

    pub fn select(&self, is_mark: bool) -> Rgba<u8> {
        if is_mark {
            self.mark
        } else {
            self.background
        }
    }
}

impl Default for ColorPair {
    fn default() -> Self {
        Self::new(BLACK, WHITE)
    }
}

/// Parses `#RRGGBB` or `#RRGGBBAA`, the leading `#` being optional.
pub fn parse_color(s: &str) -> QRResult<Rgba<u8>> {
    let hex = s.trim().trim_start_matches('#');
    if !matches!(hex.len(), 6 | 8) || !hex.is_ascii() {
        return Err(QRError::InvalidColor(s.to_string()));
    }

    let channel = |i: usize| {
        u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| QRError::InvalidColor(s.to_string()))
    };
    let alpha = if hex.len() == 8 { channel(6)? } else { 255 };
    Ok(Rgba([channel(0)?, channel(2)?, channel(4)?, alpha]))
}

pub fn format_color(color: Rgba<u8>) -> String {
    let Rgba([r, g, b, a]) = color;
    if a == 255 {
        format!("#{r:02X}{g:02X}{b:02X}")
    } else {
        format!("#{r:02X}{g:02X}{b:02X}{a:02X}")
    }
}
