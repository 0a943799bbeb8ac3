mod source;

pub use source::{ModuleMatrixSource, QrCodeSource};

use std::path::{Path, PathBuf};

use image::RgbaImage;
use log::{info, warn};

use crate::common::{ColorPair, EncodeOptions, QRResult};
use crate::config::RenderConfig;
use crate::persist::persist;
use crate::render::{composite, synthesize, synthesize_fixed, DEFAULT_FRACTION, FIXED_SIZE};

// QR tool
//------------------------------------------------------------------------------

/// Renders content into pixel buffers and saves them.
///
/// Holds no state between calls besides its source and encode options, so one instance
/// can be shared by reference wherever QR images are needed.
pub struct QRTool<S: ModuleMatrixSource = QrCodeSource> {
    source: S,
    opts: EncodeOptions,
}

impl QRTool {
    pub fn new() -> Self {
        Self::with_source(QrCodeSource::new())
    }
}

impl Default for QRTool {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: ModuleMatrixSource> QRTool<S> {
    pub fn with_source(source: S) -> Self {
        Self { source, opts: EncodeOptions::default() }
    }

    pub fn encode_options(&mut self, opts: EncodeOptions) -> &mut Self {
        self.opts = opts;
        self
    }

    pub fn options(&self) -> &EncodeOptions {
        &self.opts
    }

    /// Renders `content` at 256x256, black on white.
    pub fn draw(&self, content: &str) -> QRResult<RgbaImage> {
        info!("Drawing fixed size QR...");
        let grid = self.source.encode(content, FIXED_SIZE, FIXED_SIZE, &self.opts)?;
        synthesize_fixed(&grid)
    }

    /// Renders `content` at `width` x `height`, black on white unless `colors` says otherwise.
    pub fn draw_sized(
        &self,
        content: &str,
        width: u32,
        height: u32,
        colors: Option<ColorPair>,
    ) -> QRResult<RgbaImage> {
        info!("Drawing {width}x{height} QR...");
        let colors = colors.unwrap_or_default();
        let grid = self.source.encode(content, width, height, &self.opts)?;
        synthesize(&grid, width, height, &colors)
    }

    /// Like [`draw_sized`](Self::draw_sized), then stamps `icon` over the center.
    ///
    /// `fraction` defaults to [`DEFAULT_FRACTION`]. A non-square icon is skipped and the
    /// plain code is returned.
    pub fn draw_with_icon(
        &self,
        content: &str,
        width: u32,
        height: u32,
        icon: &RgbaImage,
        fraction: Option<f32>,
        colors: Option<ColorPair>,
    ) -> QRResult<RgbaImage> {
        let mut img = self.draw_sized(content, width, height, colors)?;
        composite(&mut img, icon, fraction.unwrap_or(DEFAULT_FRACTION));
        Ok(img)
    }

    pub fn save(
        &self,
        img: &RgbaImage,
        dir: impl AsRef<Path>,
        file_name: &str,
    ) -> QRResult<PathBuf> {
        persist(img, dir, file_name)
    }

    /// Runs a whole render-and-save job. The config's encode options apply to this job only.
    pub fn render(&self, config: &RenderConfig) -> QRResult<PathBuf>
    where
        S: Clone,
    {
        let mut tool = QRTool::with_source(self.source.clone());
        tool.encode_options(config.encode.clone());

        let img = if config.fixed {
            if config.icon.is_some() {
                warn!("Fixed size mode does not support icons; ignoring icon");
            }
            tool.draw(&config.content)?
        } else {
            let colors = config.colors()?;
            match &config.icon {
                Some(path) => {
                    let icon = image::open(path)?.into_rgba8();
                    tool.draw_with_icon(
                        &config.content,
                        config.width,
                        config.height,
                        &icon,
                        Some(config.fraction),
                        Some(colors),
                    )?
                }
                None => {
                    tool.draw_sized(&config.content, config.width, config.height, Some(colors))?
                }
            }
        };

        tool.save(&img, &config.output_dir, &config.file_name)
    }
}

#[cfg(test)]
mod qrtool_tests {
    use image::{Rgba, RgbaImage};

    use super::{ModuleMatrixSource, QRTool};
    use crate::common::{ColorPair, EncodeOptions, ModuleGrid, QRError, QRResult, BLACK, WHITE};

    const RED: Rgba<u8> = Rgba([255, 0, 0, 255]);
    const GREEN: Rgba<u8> = Rgba([0, 255, 0, 255]);

    /// Marks the left half of the canvas; expects the default encode options.
    #[derive(Clone, Default)]
    struct HalfSource;

    impl ModuleMatrixSource for HalfSource {
        fn encode(&self, _: &str, w: u32, h: u32, opts: &EncodeOptions) -> QRResult<ModuleGrid> {
            assert_eq!(*opts, EncodeOptions::default());
            ModuleGrid::from_fn(w, h, |_, c| c < w / 2)
        }
    }

    /// Ignores the requested size.
    struct TinySource;

    impl ModuleMatrixSource for TinySource {
        fn encode(&self, _: &str, _: u32, _: u32, _: &EncodeOptions) -> QRResult<ModuleGrid> {
            ModuleGrid::new(2, 2, vec![true; 4])
        }
    }

    #[test]
    fn test_draw_fixed() {
        let img = QRTool::with_source(HalfSource).draw("x").unwrap();
        assert_eq!(img.dimensions(), (256, 256));
        assert_eq!(*img.get_pixel(0, 0), BLACK);
        assert_eq!(*img.get_pixel(255, 0), WHITE);
    }

    #[test]
    fn test_draw_sized_colors() {
        let tool = QRTool::with_source(HalfSource);
        let img = tool.draw_sized("x", 40, 30, Some(ColorPair::new(RED, GREEN))).unwrap();
        assert_eq!(img.dimensions(), (40, 30));
        assert_eq!(*img.get_pixel(19, 29), RED);
        assert_eq!(*img.get_pixel(20, 0), GREEN);
    }

    #[test]
    fn test_draw_with_icon_default_fraction() {
        let tool = QRTool::with_source(HalfSource);
        let icon = RgbaImage::from_pixel(10, 10, RED);
        let img = tool.draw_with_icon("x", 100, 100, &icon, None, None).unwrap();
        // 20 pixel icon over [40, 60)
        assert_eq!(*img.get_pixel(39, 50), BLACK);
        assert_eq!(*img.get_pixel(40, 50), RED);
        assert_eq!(*img.get_pixel(59, 50), RED);
        assert_eq!(*img.get_pixel(60, 50), WHITE);
    }

    #[test]
    fn test_draw_with_non_square_icon() {
        let tool = QRTool::with_source(HalfSource);
        let plain = tool.draw_sized("x", 100, 100, None).unwrap();
        let icon = RgbaImage::from_pixel(10, 12, RED);
        let img = tool.draw_with_icon("x", 100, 100, &icon, Some(0.5), None).unwrap();
        assert_eq!(img, plain);
    }

    #[test]
    fn test_source_size_mismatch() {
        let res = QRTool::with_source(TinySource).draw_sized("x", 10, 10, None);
        assert!(matches!(res, Err(QRError::DimensionMismatch { found_w: 2, found_h: 2, .. })));
    }

    #[test]
    fn test_encode_options() {
        let mut tool = QRTool::new();
        let opts = EncodeOptions { margin: 4, ..Default::default() };
        tool.encode_options(opts.clone());
        assert_eq!(*tool.options(), opts);
    }
}
