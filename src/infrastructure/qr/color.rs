//! Fill color parsing

use crate::domain::DomainError;

/// Parse any CSS color: names, `#RGB`, `#RRGGBB`, `#RRGGBBAA`, `rgb()`,
/// `hsl()` and friends. A bare hex string without `#` is accepted too.
///
/// Only the RGB channels are kept; images are rendered opaque.
pub fn parse_color(spec: &str) -> Result<[u8; 3], DomainError> {
    let trimmed = spec.trim();

    let parsed = if !trimmed.is_empty() && trimmed.chars().all(|c| c.is_ascii_hexdigit()) {
        csscolorparser::parse(&format!("#{}", trimmed))
    } else {
        csscolorparser::parse(trimmed)
    };

    let color = parsed
        .map_err(|e| DomainError::render(format!("unknown color specifier: '{}' ({})", spec, e)))?;
    let [r, g, b, _] = color.to_rgba8();

    Ok([r, g, b])
}

/// Format as `#rrggbb`
pub fn to_hex(rgb: [u8; 3]) -> String {
    format!("#{:02x}{:02x}{:02x}", rgb[0], rgb[1], rgb[2])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_long_hex() {
        assert_eq!(parse_color("#00008B").unwrap(), [0x00, 0x00, 0x8b]);
        assert_eq!(parse_color("ff8000").unwrap(), [0xff, 0x80, 0x00]);
    }

    #[test]
    fn test_parse_short_hex() {
        assert_eq!(parse_color("#fff").unwrap(), [0xff, 0xff, 0xff]);
        assert_eq!(parse_color("#0a0").unwrap(), [0x00, 0xaa, 0x00]);
    }

    #[test]
    fn test_parse_hex_with_alpha_keeps_rgb() {
        assert_eq!(parse_color("#00008bff").unwrap(), [0x00, 0x00, 0x8b]);
    }

    #[test]
    fn test_parse_named() {
        assert_eq!(parse_color("DarkBlue").unwrap(), [0x00, 0x00, 0x8b]);
        assert_eq!(parse_color("black").unwrap(), [0, 0, 0]);
        assert_eq!(parse_color("cornflowerblue").unwrap(), [0x64, 0x95, 0xed]);
        assert_eq!(parse_color("darkslategray").unwrap(), [0x2f, 0x4f, 0x4f]);
    }

    #[test]
    fn test_parse_functional_notation() {
        assert_eq!(parse_color("rgb(0,0,139)").unwrap(), [0x00, 0x00, 0x8b]);
        assert_eq!(parse_color("rgb(255, 128, 0)").unwrap(), [0xff, 0x80, 0x00]);
        assert_eq!(parse_color("hsl(0, 100%, 50%)").unwrap(), [0xff, 0x00, 0x00]);
    }

    #[test]
    fn test_rejects_garbage() {
        assert!(parse_color("").is_err());
        assert!(parse_color("#12345").is_err());
        assert!(parse_color("#gggggg").is_err());
        assert!(parse_color("not-a-color").is_err());

        let err = parse_color("chartreuse-ish").unwrap_err();
        assert!(matches!(err, DomainError::Render { .. }));
        assert!(err.to_string().contains("chartreuse-ish"));
    }

    #[test]
    fn test_to_hex() {
        assert_eq!(to_hex([0x00, 0x00, 0x8b]), "#00008b");
    }
}
