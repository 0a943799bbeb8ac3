use std::error::Error;
use std::path::PathBuf;

use clap::Parser;
use env_logger::Env;

use qrcanvas::{ECLevel, JsonBackend, JsonMapper, QRTool, Registry, RenderConfig};

/// Render a QR code, optionally with a centered logo, and save it as PNG or JPEG.
#[derive(Parser, Debug)]
#[command(name = "qrcanvas", version, about)]
struct Args {
    /// Text to encode
    content: Option<String>,

    /// JSON job file; flags override its fields
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[arg(long)]
    width: Option<u32>,

    #[arg(long)]
    height: Option<u32>,

    /// Mark color, #RRGGBB or #RRGGBBAA
    #[arg(long)]
    mark: Option<String>,

    /// Background color, #RRGGBB or #RRGGBBAA
    #[arg(long)]
    background: Option<String>,

    /// Square image stamped over the center
    #[arg(short, long)]
    icon: Option<PathBuf>,

    /// Icon edge as a share of the output width
    #[arg(short, long)]
    fraction: Option<f32>,

    /// L, M, Q or H
    #[arg(short, long)]
    ec_level: Option<ECLevel>,

    #[arg(long)]
    charset: Option<String>,

    /// Quiet zone in modules
    #[arg(long)]
    margin: Option<u32>,

    #[arg(short, long)]
    out_dir: Option<PathBuf>,

    /// Output file name; unknown extensions are saved as .PNG
    #[arg(short, long)]
    name: Option<String>,

    /// 256x256 black on white, no icon
    #[arg(long)]
    fixed: bool,

    /// Also write the effective job to this path (".json" is appended)
    #[arg(long)]
    save_config: Option<PathBuf>,
}

impl Args {
    fn into_config(self, mapper: &JsonMapper) -> Result<RenderConfig, Box<dyn Error>> {
        let mut config = match &self.config {
            Some(path) => RenderConfig::load(mapper, path)?,
            None => RenderConfig::default(),
        };

        if let Some(content) = self.content {
            config.content = content;
        }
        if let Some(width) = self.width {
            config.width = width;
        }
        if let Some(height) = self.height {
            config.height = height;
        }
        if let Some(mark) = self.mark {
            config.mark = mark;
        }
        if let Some(background) = self.background {
            config.background = background;
        }
        if let Some(icon) = self.icon {
            config.icon = Some(icon);
        }
        if let Some(fraction) = self.fraction {
            config.fraction = fraction;
        }
        if let Some(ec_level) = self.ec_level {
            config.encode.ec_level = ec_level;
        }
        if let Some(charset) = self.charset {
            config.encode.charset = charset;
        }
        if let Some(margin) = self.margin {
            config.encode.margin = margin;
        }
        if let Some(out_dir) = self.out_dir {
            config.output_dir = out_dir;
        }
        if let Some(name) = self.name {
            config.file_name = name;
        }
        config.fixed |= self.fixed;

        if config.content.is_empty() {
            return Err("nothing to encode: pass CONTENT or a config with \"content\"".into());
        }
        Ok(config)
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let save_config = args.save_config.clone();

    let mut services = Registry::new();
    let mapper = *services.get_or_insert_with(|| JsonMapper::new(JsonBackend::Pretty));

    let config = args.into_config(&mapper)?;
    if let Some(path) = save_config {
        let path = mapper.save_to_file(&config, path)?;
        log::info!("Saved job to {}", path.display());
    }

    let tool = services.get_or_insert_with(QRTool::new);
    let path = tool.render(&config)?;
    println!("{}", path.display());

    Ok(())
}
