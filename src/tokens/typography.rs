//! Font families, sizes, weights and the named text styles built from them.

pub const FONT_SANS: &str = "Inter";
pub const FONT_MONO: &str = "JetBrains Mono";

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FontSizes {
    pub xs: f32,
    pub sm: f32,
    pub md: f32,
    pub lg: f32,
    pub xl: f32,
    pub xxl: f32,
    pub xxxl: f32,
}

pub const FONT_SIZES: FontSizes = FontSizes {
    xs: 12.0,
    sm: 14.0,
    md: 16.0,
    lg: 18.0,
    xl: 20.0,
    xxl: 24.0,
    xxxl: 30.0,
};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct FontWeights {
    pub light: u16,
    pub regular: u16,
    pub medium: u16,
    pub semibold: u16,
    pub bold: u16,
}

pub const FONT_WEIGHTS: FontWeights = FontWeights {
    light: 300,
    regular: 400,
    medium: 500,
    semibold: 600,
    bold: 700,
};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LineHeights {
    pub tight: f32,
    pub normal: f32,
    pub relaxed: f32,
}

pub const LINE_HEIGHTS: LineHeights = LineHeights {
    tight: 1.25,
    normal: 1.5,
    relaxed: 1.75,
};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LetterSpacing {
    pub tight: f32,
    pub normal: f32,
    pub wide: f32,
}

/// In pixels.
pub const LETTER_SPACING: LetterSpacing = LetterSpacing {
    tight: -0.25,
    normal: 0.0,
    wide: 0.5,
};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextStyle {
    pub font_family: &'static str,
    pub font_size: f32,
    pub font_weight: u16,
    pub line_height: f32,
    pub letter_spacing: f32,
}

impl TextStyle {
    const fn sans(font_size: f32, font_weight: u16, line_height: f32, letter_spacing: f32) -> Self {
        Self {
            font_family: FONT_SANS,
            font_size,
            font_weight,
            line_height,
            letter_spacing,
        }
    }

    /// Line height in pixels.
    pub fn line_height_px(&self) -> f32 {
        self.font_size * self.line_height
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum TextVariant {
    H1,
    H2,
    H3,
    H4,
    H5,
    H6,
    Body1,
    Body2,
    Caption,
    Button,
    Overline,
}

pub const fn text_style(variant: TextVariant) -> TextStyle {
    let (fs, fw, lh, ls) = (&FONT_SIZES, &FONT_WEIGHTS, &LINE_HEIGHTS, &LETTER_SPACING);
    let (size, weight, line_height, letter_spacing) = match variant {
        TextVariant::H1 => (36.0, fw.bold, lh.tight, ls.tight),
        TextVariant::H2 => (30.0, fw.bold, lh.tight, ls.tight),
        TextVariant::H3 => (fs.xxl, fw.semibold, lh.tight, ls.normal),
        TextVariant::H4 => (fs.xl, fw.semibold, lh.tight, ls.normal),
        TextVariant::H5 => (fs.lg, fw.semibold, lh.normal, ls.normal),
        TextVariant::H6 => (fs.md, fw.semibold, lh.normal, ls.normal),
        TextVariant::Body1 => (fs.md, fw.regular, lh.normal, ls.normal),
        TextVariant::Body2 => (fs.sm, fw.regular, lh.normal, ls.normal),
        TextVariant::Caption => (fs.xs, fw.regular, lh.normal, ls.normal),
        TextVariant::Button => (fs.sm, fw.medium, lh.tight, ls.normal),
        TextVariant::Overline => (fs.xs, fw.semibold, lh.normal, ls.wide),
    };
    TextStyle::sans(size, weight, line_height, letter_spacing)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn headings_shrink_from_h1_to_h6() {
        let headings = [
            TextVariant::H1,
            TextVariant::H2,
            TextVariant::H3,
            TextVariant::H4,
            TextVariant::H5,
            TextVariant::H6,
        ]
        .map(text_style);
        assert!(headings.windows(2).all(|pair| pair[0].font_size > pair[1].font_size));
    }

    #[test]
    fn body_line_height_is_resolved_in_pixels() {
        assert_eq!(text_style(TextVariant::Body1).line_height_px(), 24.0);
    }
}
