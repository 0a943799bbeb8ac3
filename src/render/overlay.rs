use image::imageops::{self, FilterType};
use image::RgbaImage;
use log::{debug, warn};

/// Share of the buffer width taken by the icon when the caller does not pick one.
pub const DEFAULT_FRACTION: f32 = 0.2;

// Overlay
//------------------------------------------------------------------------------

/// Edge length of the scaled icon for a buffer `base_w` pixels wide.
///
/// Saturates at `u32::MAX`; NaN and non-positive products give 0.
pub fn icon_size(base_w: u32, fraction: f32) -> u32 {
    let sz = (base_w as f32 * fraction).floor();
    if sz > 0.0 {
        sz as u32
    } else {
        0
    }
}

/// Point-samples `icon` to `size` x `size` so module edges stay sharp.
pub fn scale_icon(icon: &RgbaImage, size: u32) -> RgbaImage {
    imageops::resize(icon, size, size, FilterType::Nearest)
}

/// Scales `icon` to `floor(base.width * fraction)` and stamps it over the center of `base`.
///
/// Returns whether anything was drawn. A non-square icon leaves `base` untouched: this is
/// not an error, callers that care must check the return value. Icon pixels replace the
/// base pixels outright, alpha included.
///
/// A base pixel at offset `(ox, oy)` from `(width / 2, height / 2)` is replaced when
/// `|ox| <= size / 2`, `|oy| <= size / 2` and `(ox + size / 2, oy + size / 2)` lies inside
/// the scaled icon. The stamped area is therefore `size` pixels per side, clipped to `base`.
///
/// `size` never exceeds the longer side of `base`, so any larger fraction covers the whole
/// buffer with the icon scaled to that side.
pub fn composite(base: &mut RgbaImage, icon: &RgbaImage, fraction: f32) -> bool {
    if icon.width() != icon.height() {
        warn!("Icon is {}x{}, not square; skipping overlay", icon.width(), icon.height());
        return false;
    }
    if icon.width() == 0 {
        warn!("Icon is empty; skipping overlay");
        return false;
    }

    let sz = icon_size(base.width(), fraction);
    if sz == 0 {
        debug!("Icon size is 0 for width {} and fraction {fraction}", base.width());
        return false;
    }
    let max_sz = base.width().max(base.height());
    if sz > max_sz {
        debug!("Icon size {sz} exceeds the buffer, using {max_sz}");
    }
    let sz = sz.min(max_sz);
    let icon = scale_icon(icon, sz);

    let (cx, cy) = (i64::from(base.width() / 2), i64::from(base.height() / 2));
    let half = i64::from(sz / 2);
    let sz = i64::from(sz);

    let (x0, x1) = ((cx - half).max(0), (cx - half + sz).min(i64::from(base.width())));
    let (y0, y1) = ((cy - half).max(0), (cy - half + sz).min(i64::from(base.height())));
    debug!("Stamping {sz}x{sz} icon over x in [{x0}, {x1}), y in [{y0}, {y1})");

    for y in y0..y1 {
        for x in x0..x1 {
            let u = (x - cx + half) as u32;
            let v = (y - cy + half) as u32;
            base.put_pixel(x as u32, y as u32, *icon.get_pixel(u, v));
        }
    }

    true
}
