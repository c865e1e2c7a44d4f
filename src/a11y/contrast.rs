use crate::color::{ColorError, parse_hex};

/// WCAG 2.x conformance target.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum WcagLevel {
    Aa,
    AaLarge,
    Aaa,
    AaaLarge,
}

impl WcagLevel {
    pub const fn minimum_ratio(self) -> f64 {
        match self {
            Self::Aa => 4.5,
            Self::AaLarge => 3.0,
            Self::Aaa => 7.0,
            Self::AaaLarge => 4.5,
        }
    }
}

/// Contrast ratio between two hex colors, in `1.0..=21.0`.
pub fn contrast_ratio(foreground: &str, background: &str) -> Result<f64, ColorError> {
    let fg = parse_hex(foreground)?.relative_luminance();
    let bg = parse_hex(background)?.relative_luminance();
    let (lighter, darker) = if fg >= bg { (fg, bg) } else { (bg, fg) };
    Ok((lighter + 0.05) / (darker + 0.05))
}

/// Unparsable input never meets a level.
pub fn meets_contrast_ratio(foreground: &str, background: &str, level: WcagLevel) -> bool {
    match contrast_ratio(foreground, background) {
        Ok(ratio) => ratio >= level.minimum_ratio(),
        Err(err) => {
            log::warn!("contrast check skipped: {err}");
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::SemanticColor;
    use crate::tokens::colors;

    #[test]
    fn black_on_white_is_the_maximum_ratio() {
        let ratio = contrast_ratio("#000000", "#ffffff");
        assert!(ratio.is_ok_and(|value| (value - 21.0).abs() < 1e-9));
        assert_eq!(contrast_ratio("#fff", "#000"), contrast_ratio("#000", "#fff"));
    }

    #[test]
    fn identical_colors_have_no_contrast() {
        assert_eq!(contrast_ratio("#777777", "#777777"), Ok(1.0));
    }

    #[test]
    fn levels_apply_their_thresholds() {
        assert!(meets_contrast_ratio("#000000", "#ffffff", WcagLevel::Aa));
        assert!(!meets_contrast_ratio("#777777", "#888888", WcagLevel::Aaa));
        assert!(!meets_contrast_ratio("#777777", "#888888", WcagLevel::AaLarge));
        assert!(!meets_contrast_ratio("not-a-color", "#ffffff", WcagLevel::AaLarge));
    }

    #[test]
    fn contrast_text_is_readable_on_every_main_color() {
        for color in SemanticColor::ALL {
            let scale = colors::scale(color);
            assert!(
                meets_contrast_ratio(scale.contrast_text, scale.main, WcagLevel::Aa),
                "{color:?}"
            );
        }
    }
}
