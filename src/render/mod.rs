mod overlay;

pub use overlay::{composite, icon_size, scale_icon, DEFAULT_FRACTION};

use image::RgbaImage;
use log::debug;

use crate::common::{ColorPair, ModuleGrid, QRError, QRResult};

/// Edge length of the fixed-size rendering mode.
pub const FIXED_SIZE: u32 = 256;

// Pixel synthesis
//------------------------------------------------------------------------------

/// Paints `grid` onto a `width` x `height` buffer, one pixel per module.
///
/// Pixel `(x, y)` takes the mark color iff module `(row = y, col = x)` is set. The grid
/// must already have the requested dimensions.
pub fn synthesize(
    grid: &ModuleGrid,
    width: u32,
    height: u32,
    colors: &ColorPair,
) -> QRResult<RgbaImage> {
    if width == 0 || height == 0 {
        return Err(QRError::InvalidDimensions { width, height });
    }
    if grid.dimensions() != (width, height) {
        return Err(QRError::DimensionMismatch {
            exp_w: width,
            exp_h: height,
            found_w: grid.width(),
            found_h: grid.height(),
        });
    }

    debug!("Synthesizing {width}x{height} buffer");
    Ok(RgbaImage::from_fn(width, height, |x, y| colors.select(grid.get(y, x))))
}

/// Paints a [`FIXED_SIZE`] square grid black on white.
pub fn synthesize_fixed(grid: &ModuleGrid) -> QRResult<RgbaImage> {
    synthesize(grid, FIXED_SIZE, FIXED_SIZE, &ColorPair::default())
}
