//! QR renderer backed by the `qrcode` and `image` crates

use std::io::Cursor;

use image::{ImageBuffer, Rgb};
use qrcode::render::svg;
use qrcode::{EcLevel, QrCode};

use super::color::{parse_color, to_hex};
use crate::domain::qr::{
    BORDER_MODULES, CorrectionLevel, ImageFormat, QrRenderer, RenderSpec, RenderedImage,
};
use crate::domain::DomainError;

const BACKGROUND: [u8; 3] = [0xff, 0xff, 0xff];

/// Largest accepted image side in pixels, quiet zone included
pub const MAX_IMAGE_DIMENSION: u32 = 8192;

/// Map a correction level to the encoder's redundancy constant
pub fn ec_level(level: CorrectionLevel) -> EcLevel {
    match level {
        CorrectionLevel::L => EcLevel::L,
        CorrectionLevel::M => EcLevel::M,
        CorrectionLevel::Q => EcLevel::Q,
        CorrectionLevel::H => EcLevel::H,
    }
}

/// Renders QR symbols with the `qrcode` crate.
///
/// The symbol version is chosen automatically to fit the content. The quiet
/// zone is the encoder's standard four modules. Images wider than
/// [`MAX_IMAGE_DIMENSION`] are refused before any buffer is allocated.
#[derive(Debug, Default, Clone, Copy)]
pub struct QrcodeRenderer;

impl QrcodeRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl QrRenderer for QrcodeRenderer {
    fn render(&self, spec: &RenderSpec) -> Result<RenderedImage, DomainError> {
        let module_size = module_size(spec.module_scale)?;
        let dark = parse_color(&spec.color)?;

        let code = QrCode::with_error_correction_level(
            spec.content.as_bytes(),
            ec_level(spec.correction_level),
        )
        .map_err(|e| DomainError::render(format!("Failed to encode content: {}", e)))?;

        image_dimension(&code, module_size)?;

        let bytes = match spec.format {
            ImageFormat::Png => render_png(&code, module_size, dark)?,
            ImageFormat::Svg => render_svg(&code, module_size, dark).into_bytes(),
        };

        Ok(RenderedImage {
            format: spec.format,
            bytes,
        })
    }
}

fn module_size(module_scale: i64) -> Result<u32, DomainError> {
    if module_scale <= 0 {
        return Err(DomainError::render(format!(
            "module scale must be positive, got {}",
            module_scale
        )));
    }

    u32::try_from(module_scale).map_err(|_| {
        DomainError::render(format!("module scale too large, got {}", module_scale))
    })
}

/// Side of the rendered image in pixels, refusing anything over the cap
fn image_dimension(code: &QrCode, module_size: u32) -> Result<u32, DomainError> {
    let modules = u32::try_from(code.width())
        .ok()
        .and_then(|width| width.checked_add(2 * BORDER_MODULES));

    modules
        .and_then(|modules| modules.checked_mul(module_size))
        .filter(|pixels| *pixels <= MAX_IMAGE_DIMENSION)
        .ok_or_else(|| {
            DomainError::render(format!(
                "image too large: module scale {} exceeds the {} pixel limit",
                module_size, MAX_IMAGE_DIMENSION
            ))
        })
}

fn render_png(code: &QrCode, module_size: u32, dark: [u8; 3]) -> Result<Vec<u8>, DomainError> {
    let image: ImageBuffer<Rgb<u8>, Vec<u8>> = code
        .render::<Rgb<u8>>()
        .quiet_zone(true)
        .module_dimensions(module_size, module_size)
        .dark_color(Rgb(dark))
        .light_color(Rgb(BACKGROUND))
        .build();

    let mut bytes = Vec::new();
    image
        .write_to(&mut Cursor::new(&mut bytes), image::ImageFormat::Png)
        .map_err(|e| DomainError::render(format!("Failed to write PNG: {}", e)))?;

    Ok(bytes)
}

fn render_svg(code: &QrCode, module_size: u32, dark: [u8; 3]) -> String {
    let dark = to_hex(dark);
    let light = to_hex(BACKGROUND);

    code.render::<svg::Color<'_>>()
        .quiet_zone(true)
        .module_dimensions(module_size, module_size)
        .dark_color(svg::Color(&dark))
        .light_color(svg::Color(&light))
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a];

    fn spec(content: &str, module_scale: i64, level: CorrectionLevel, format: ImageFormat) -> RenderSpec {
        RenderSpec {
            content: content.to_string(),
            module_scale,
            color: "#00008B".to_string(),
            correction_level: level,
            format,
        }
    }

    #[test]
    fn test_png_output() {
        let renderer = QrcodeRenderer::new();
        let image = renderer
            .render(&spec("https://example.com", 7, CorrectionLevel::Q, ImageFormat::Png))
            .unwrap();

        assert_eq!(image.format, ImageFormat::Png);
        assert_eq!(&image.bytes[..8], &PNG_SIGNATURE);
    }

    #[test]
    fn test_png_dimensions_include_border() {
        let renderer = QrcodeRenderer::new();
        let image = renderer
            .render(&spec("https://example.com", 7, CorrectionLevel::Q, ImageFormat::Png))
            .unwrap();

        let code = QrCode::with_error_correction_level("https://example.com", EcLevel::Q).unwrap();
        let expected = (code.width() as u32 + 2 * BORDER_MODULES) * 7;

        let decoded = image::load_from_memory(&image.bytes).unwrap();
        assert_eq!(decoded.width(), expected);
        assert_eq!(decoded.height(), expected);
    }

    #[test]
    fn test_png_uses_fill_color_on_white() {
        let renderer = QrcodeRenderer::new();
        let image = renderer
            .render(&spec("hello", 2, CorrectionLevel::M, ImageFormat::Png))
            .unwrap();

        let decoded = image::load_from_memory(&image.bytes).unwrap().to_rgb8();
        // Top-left pixel is quiet zone; the finder pattern starts after the border.
        let border_px = BORDER_MODULES * 2;
        assert_eq!(decoded.get_pixel(0, 0).0, [0xff, 0xff, 0xff]);
        assert_eq!(decoded.get_pixel(border_px, border_px).0, [0x00, 0x00, 0x8b]);
    }

    #[test]
    fn test_svg_output() {
        let renderer = QrcodeRenderer::new();
        let image = renderer
            .render(&spec("hello", 3, CorrectionLevel::L, ImageFormat::Svg))
            .unwrap();

        let svg = String::from_utf8(image.bytes).unwrap();
        assert_eq!(image.format, ImageFormat::Svg);
        assert!(svg.contains("<svg"));
        assert!(svg.contains("#00008b"));
    }

    #[test]
    fn test_zero_scale_fails() {
        let renderer = QrcodeRenderer::new();

        for format in [ImageFormat::Png, ImageFormat::Svg] {
            let result = renderer.render(&spec("hello", 0, CorrectionLevel::M, format));
            assert!(matches!(result, Err(DomainError::Render { .. })));
        }
    }

    #[test]
    fn test_negative_scale_fails() {
        let renderer = QrcodeRenderer::new();
        let result = renderer.render(&spec("hello", -1, CorrectionLevel::M, ImageFormat::Png));
        assert!(result.is_err());
    }

    #[test]
    fn test_scale_beyond_u32_reports_too_large() {
        let renderer = QrcodeRenderer::new();
        let scale = i64::from(u32::MAX) + 1;

        let err = renderer
            .render(&spec("hello", scale, CorrectionLevel::M, ImageFormat::Svg))
            .unwrap_err();
        assert!(err.to_string().contains("module scale too large"));
    }

    #[test]
    fn test_huge_scale_is_refused_for_both_formats() {
        let renderer = QrcodeRenderer::new();

        // 100_000 px modules would need terabytes; 148_102_321 overflows u32 pixel math.
        for scale in [100_000, 148_102_321] {
            for format in [ImageFormat::Png, ImageFormat::Svg] {
                let err = renderer
                    .render(&spec("hello", scale, CorrectionLevel::M, format))
                    .unwrap_err();
                assert!(matches!(err, DomainError::Render { .. }));
                assert!(err.to_string().contains("image too large"));
            }
        }
    }

    #[test]
    fn test_image_at_dimension_limit_renders() {
        let renderer = QrcodeRenderer::new();
        let code = QrCode::with_error_correction_level("hello", EcLevel::M).unwrap();
        let side = code.width() as u32 + 2 * BORDER_MODULES;
        let scale = MAX_IMAGE_DIMENSION / side;

        let image = renderer
            .render(&spec("hello", i64::from(scale), CorrectionLevel::M, ImageFormat::Svg))
            .unwrap();
        assert!(String::from_utf8(image.bytes).unwrap().contains("<svg"));

        let over = renderer.render(&spec(
            "hello",
            i64::from(scale + 1),
            CorrectionLevel::M,
            ImageFormat::Png,
        ));
        assert!(over.is_err());
    }

    #[test]
    fn test_invalid_color_fails() {
        let renderer = QrcodeRenderer::new();
        let mut bad = spec("hello", 2, CorrectionLevel::M, ImageFormat::Png);
        bad.color = "not-a-color".to_string();

        assert!(matches!(renderer.render(&bad), Err(DomainError::Render { .. })));
    }

    #[test]
    fn test_content_over_capacity_fails() {
        let renderer = QrcodeRenderer::new();
        // Version 40-L holds 2953 bytes.
        let too_long = "a".repeat(2954);
        let result = renderer.render(&spec(&too_long, 1, CorrectionLevel::L, ImageFormat::Png));

        assert!(matches!(result, Err(DomainError::Render { .. })));
    }

    #[test]
    fn test_higher_level_fits_where_lower_fits_near_version_one_capacity() {
        let renderer = QrcodeRenderer::new();
        // Version 1-L holds exactly 17 bytes; H must still encode by growing the version.
        let content = "x".repeat(17);

        for level in [CorrectionLevel::L, CorrectionLevel::M, CorrectionLevel::Q, CorrectionLevel::H] {
            let result = renderer.render(&spec(&content, 2, level, ImageFormat::Png));
            assert!(result.is_ok(), "level {:?} failed", level);
        }
    }

    #[test]
    fn test_higher_level_uses_larger_or_equal_version() {
        let content = "x".repeat(17);
        let mut previous = 0;

        for level in [CorrectionLevel::L, CorrectionLevel::M, CorrectionLevel::Q, CorrectionLevel::H] {
            let code = QrCode::with_error_correction_level(&content, ec_level(level)).unwrap();
            assert!(code.width() >= previous);
            previous = code.width();
        }
    }
}
