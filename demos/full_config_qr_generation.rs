use std::error::Error;

use image::Rgba;
use qrcanvas::{ColorPair, ECLevel, EncodeOptions, QRTool};

fn main() -> Result<(), Box<dyn Error>> {
    let data = "This example shows all available options for rendering a QR code.";

    let mut tool = QRTool::new();
    tool.encode_options(EncodeOptions {
        ec_level: ECLevel::H,         // Error correction level - defaults to ECLevel::H
        charset: "UTF-8".to_string(), // Character set of the content - defaults to UTF-8
        margin: 2,                    // Quiet zone in modules - defaults to 1
    });

    // Any mark and background colors, alpha included
    let colors = ColorPair::new(Rgba([20, 40, 120, 255]), Rgba([250, 245, 230, 255]));

    // A square logo stamped over the center, a quarter of the output width
    let logo = image::RgbaImage::from_fn(64, 64, |x, y| {
        if (x / 8 + y / 8) % 2 == 0 {
            Rgba([230, 60, 40, 255])
        } else {
            Rgba([255, 255, 255, 255])
        }
    });
    let img = tool.draw_with_icon(data, 480, 480, &logo, Some(0.25), Some(colors))?;

    // ".jpg" picks JPEG; an unknown extension would fall back to ".PNG"
    let path = tool.save(&img, ".", "configured_qr.jpg")?;

    println!("Configured QR code saved to: {}", path.display());
    println!("Encode options: {}", tool.options());

    Ok(())
}
