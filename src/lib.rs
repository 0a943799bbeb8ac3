//! # qrcanvas
//!
//! A Rust library for rendering QR codes into pixel buffers, stamping a logo over their
//! center and saving the result as PNG or JPEG.
//!
//! ## Features
//!
//! - **Arbitrary output size**: the symbol is laid out directly on a canvas of the requested
//!   width and height, one pixel per grid cell
//! - **Custom colors**: any RGBA mark and background colors
//! - **Center logo**: square icons are point-sampled to a fraction of the output width and
//!   stamped opaquely over the center
//! - **Format from file name**: `.png` and `.jpg`/`.jpeg` pick the encoder, anything else
//!   falls back to PNG
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use qrcanvas::QRTool;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let tool = QRTool::new();
//!
//! // 300x300, black on white
//! let img = tool.draw_sized("Hello, World!", 300, 300, None)?;
//! tool.save(&img, "output", "hello.png")?;
//! # Ok(())
//! # }
//! ```
//!
//! ### With colors and a logo
//!
//! ```rust,no_run
//! use image::Rgba;
//! use qrcanvas::{ColorPair, QRTool};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let tool = QRTool::new();
//! let logo = image::open("logo.png")?.into_rgba8();
//! let colors = ColorPair::new(Rgba([20, 40, 120, 255]), Rgba([250, 250, 250, 255]));
//!
//! // Logo spans a quarter of the width. Non-square logos are skipped.
//! let img = tool.draw_with_icon("https://example.com", 400, 400, &logo, Some(0.25), Some(colors))?;
//! tool.save(&img, "output", "styled.jpg")?;
//! # Ok(())
//! # }
//! ```
//!
//! ### Custom module sources
//!
//! Any [`ModuleMatrixSource`] can stand in for the bundled `qrcode` backed encoder:
//!
//! ```rust
//! use qrcanvas::{EncodeOptions, ModuleGrid, ModuleMatrixSource, QRResult, QRTool};
//!
//! struct Stripes;
//!
//! impl ModuleMatrixSource for Stripes {
//!     fn encode(&self, _: &str, w: u32, h: u32, _: &EncodeOptions) -> QRResult<ModuleGrid> {
//!         ModuleGrid::from_fn(w, h, |r, _| r % 2 == 0)
//!     }
//! }
//!
//! let img = QRTool::with_source(Stripes).draw_sized("ignored", 8, 8, None).unwrap();
//! assert_eq!(img.dimensions(), (8, 8));
//! ```

pub mod builder;
pub mod common;
pub mod config;
pub mod json;
pub mod persist;
pub mod registry;
pub mod render;

pub use builder::{ModuleMatrixSource, QRTool, QrCodeSource};
pub use common::{ColorPair, ECLevel, EncodeOptions, ModuleGrid, QRError, QRResult};
pub use config::RenderConfig;
pub use json::{JsonBackend, JsonMapper};
pub use persist::{persist, resolve_output, OutputFormat};
pub use registry::Registry;
pub use render::{composite, synthesize, synthesize_fixed};
