//! Render command - generates one QR code image offline

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::Args;
use tracing::info;

use crate::config::{AppConfig, LogFormat};
use crate::domain::qr::{ContentType, CorrectionLevel, ImageFormat, QrCodeRequest};
use crate::infrastructure::qr::QrcodeRenderer;
use crate::infrastructure::services::QrCodeService;

/// Arguments for the render command
#[derive(Args, Debug, Clone)]
pub struct RenderArgs {
    /// Content to encode
    #[arg(long)]
    pub content: String,

    /// Kind of content (URL, TEXT, CONTACT)
    #[arg(long, default_value = "URL")]
    pub content_type: ContentType,

    /// Image size in pixels; the module scale is size / 40
    #[arg(long, default_value_t = 300)]
    pub size: i64,

    /// Fill color, e.g. "#00008B" or "darkblue"
    #[arg(long, default_value = "#000000")]
    pub color: String,

    /// Error-correction level (L, M, Q, H)
    #[arg(long, default_value = "M")]
    pub correction_level: CorrectionLevel,

    /// Output format (PNG, SVG)
    #[arg(long, default_value = "PNG")]
    pub format: ImageFormat,

    /// File to write the image to
    #[arg(long, short)]
    pub output: PathBuf,
}

impl From<&RenderArgs> for QrCodeRequest {
    fn from(args: &RenderArgs) -> Self {
        Self {
            content_type: args.content_type,
            content: args.content.clone(),
            size: args.size,
            color: args.color.clone(),
            correction_level: args.correction_level,
            format: args.format,
        }
    }
}

/// Render the image and write it to `args.output`
pub async fn run(args: RenderArgs) -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let mut config = AppConfig::load().context("Failed to load configuration")?;
    config.logging.format = LogFormat::Compact;
    super::init_logging(&config);

    let service = QrCodeService::new(Arc::new(QrcodeRenderer::new()));
    let request = QrCodeRequest::from(&args);
    let image = tokio::task::spawn_blocking(move || service.render(&request)).await??;

    tokio::fs::write(&args.output, &image.bytes).await?;

    info!(
        path = %args.output.display(),
        format = image.format.extension(),
        bytes = image.bytes.len(),
        "QR code written"
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Parser)]
    struct TestCli {
        #[command(flatten)]
        args: RenderArgs,
    }

    #[test]
    fn test_defaults() {
        let cli = TestCli::try_parse_from(["render", "--content", "hello", "-o", "out.png"]).unwrap();
        let request = QrCodeRequest::from(&cli.args);

        assert_eq!(request.content, "hello");
        assert_eq!(request.content_type, ContentType::Url);
        assert_eq!(request.size, 300);
        assert_eq!(request.color, "#000000");
        assert_eq!(request.correction_level, CorrectionLevel::M);
        assert_eq!(request.format, ImageFormat::Png);
    }

    #[test]
    fn test_explicit_values() {
        let cli = TestCli::try_parse_from([
            "render",
            "--content",
            "BEGIN:VCARD",
            "--content-type",
            "contact",
            "--size",
            "120",
            "--color",
            "darkblue",
            "--correction-level",
            "H",
            "--format",
            "svg",
            "--output",
            "card.svg",
        ])
        .unwrap();

        assert_eq!(cli.args.content_type, ContentType::Contact);
        assert_eq!(cli.args.size, 120);
        assert_eq!(cli.args.correction_level, CorrectionLevel::H);
        assert_eq!(cli.args.format, ImageFormat::Svg);
        assert_eq!(cli.args.output, PathBuf::from("card.svg"));
    }

    #[test]
    fn test_rejects_unknown_format() {
        let result = TestCli::try_parse_from([
            "render", "--content", "x", "--format", "gif", "-o", "x.gif",
        ]);
        assert!(result.is_err());
    }
}
