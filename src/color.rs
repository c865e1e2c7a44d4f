use thiserror::Error;

use crate::tokens::TRANSPARENT;

#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum ColorError {
    #[error("color value is empty")]
    Empty,
    #[error("color `{0}` does not start with `#`")]
    MissingHash(String),
    #[error("color `{0}` must have 3, 4, 6 or 8 hex digits")]
    InvalidLength(String),
    #[error("color `{0}` contains a non-hex digit")]
    InvalidDigit(String),
}

/// An sRGB color with 8-bit channels.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct Rgb8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgb8 {
    pub const TRANSPARENT: Rgb8 = Rgb8 {
        r: 0,
        g: 0,
        b: 0,
        a: 0,
    };

    /// WCAG 2.x relative luminance of the opaque color.
    pub fn relative_luminance(self) -> f64 {
        fn channel(value: u8) -> f64 {
            let srgb = f64::from(value) / 255.0;
            if srgb <= 0.03928 {
                srgb / 12.92
            } else {
                ((srgb + 0.055) / 1.055).powf(2.4)
            }
        }

        0.2126 * channel(self.r) + 0.7152 * channel(self.g) + 0.0722 * channel(self.b)
    }

    pub fn to_hsla(self) -> gpui::Hsla {
        gpui::Rgba {
            r: f32::from(self.r) / 255.0,
            g: f32::from(self.g) / 255.0,
            b: f32::from(self.b) / 255.0,
            a: f32::from(self.a) / 255.0,
        }
        .into()
    }
}

/// Parses `#rgb`, `#rgba`, `#rrggbb` or `#rrggbbaa`, and the literal `transparent`.
pub fn parse_hex(value: &str) -> Result<Rgb8, ColorError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(ColorError::Empty);
    }
    if value.eq_ignore_ascii_case(TRANSPARENT) {
        return Ok(Rgb8::TRANSPARENT);
    }
    let digits = value
        .strip_prefix('#')
        .ok_or_else(|| ColorError::MissingHash(value.to_string()))?;
    if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(ColorError::InvalidDigit(value.to_string()));
    }

    let nibble = |index: usize| -> Result<u8, ColorError> {
        let raw = &digits[index..index + 1];
        let n = u8::from_str_radix(raw, 16)
            .map_err(|_| ColorError::InvalidDigit(value.to_string()))?;
        Ok(n * 17)
    };
    let byte = |index: usize| -> Result<u8, ColorError> {
        u8::from_str_radix(&digits[index..index + 2], 16)
            .map_err(|_| ColorError::InvalidDigit(value.to_string()))
    };

    match digits.len() {
        3 => Ok(Rgb8 {
            r: nibble(0)?,
            g: nibble(1)?,
            b: nibble(2)?,
            a: 255,
        }),
        4 => Ok(Rgb8 {
            r: nibble(0)?,
            g: nibble(1)?,
            b: nibble(2)?,
            a: nibble(3)?,
        }),
        6 => Ok(Rgb8 {
            r: byte(0)?,
            g: byte(2)?,
            b: byte(4)?,
            a: 255,
        }),
        8 => Ok(Rgb8 {
            r: byte(0)?,
            g: byte(2)?,
            b: byte(4)?,
            a: byte(6)?,
        }),
        _ => Err(ColorError::InvalidLength(value.to_string())),
    }
}

/// Resolves a color token for rendering. Unparsable tokens render black.
pub fn to_hsla(value: &str) -> gpui::Hsla {
    match parse_hex(value) {
        Ok(color) => color.to_hsla(),
        Err(err) => {
            log::warn!("unresolvable color token: {err}");
            gpui::black()
        }
    }
}
