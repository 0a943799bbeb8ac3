use std::error::Error;

use qrcanvas::QRTool;

fn main() -> Result<(), Box<dyn Error>> {
    // Simplest usage - 256x256, black on white, highest error correction
    let tool = QRTool::new();
    let img = tool.draw("Hello, World!")?;

    let path = tool.save(&img, ".", "simple_qr.png")?;

    println!("Simple QR code saved to: {}", path.display());
    Ok(())
}
