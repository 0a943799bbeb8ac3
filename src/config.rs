use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::common::{
    format_color, parse_color, ColorPair, EncodeOptions, QRResult, BLACK, WHITE,
};
use crate::json::JsonMapper;
use crate::render::{DEFAULT_FRACTION, FIXED_SIZE};

// Render config
//------------------------------------------------------------------------------

/// One render-and-save job, as read from a JSON file or assembled from flags.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    pub content: String,
    pub width: u32,
    pub height: u32,
    /// `#RRGGBB` or `#RRGGBBAA`
    pub mark: String,
    pub background: String,
    pub icon: Option<PathBuf>,
    pub fraction: f32,
    pub encode: EncodeOptions,
    /// Render 256x256 black on white, ignoring size, colors and icon.
    pub fixed: bool,
    pub output_dir: PathBuf,
    pub file_name: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            content: String::new(),
            width: FIXED_SIZE,
            height: FIXED_SIZE,
            mark: format_color(BLACK),
            background: format_color(WHITE),
            icon: None,
            fraction: DEFAULT_FRACTION,
            encode: EncodeOptions::default(),
            fixed: false,
            output_dir: PathBuf::from("."),
            file_name: "qrcode.png".to_string(),
        }
    }
}

impl RenderConfig {
    pub fn load(mapper: &JsonMapper, path: impl AsRef<Path>) -> QRResult<Self> {
        let path = path.as_ref();
        mapper.read_file(path)?.ok_or_else(|| {
            io::Error::new(io::ErrorKind::NotFound, format!("{} not found", path.display()))
                .into()
        })
    }

    pub fn colors(&self) -> QRResult<ColorPair> {
        Ok(ColorPair::new(parse_color(&self.mark)?, parse_color(&self.background)?))
    }
}
