//! Color scales for the seven semantic colors plus the shared common colors.

use crate::style::SemanticColor;

pub const SHADE_COUNT: usize = 10;

/// Numeric shade key of a [`ColorScale`].
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Shade {
    S50,
    S100,
    S200,
    S300,
    S400,
    S500,
    S600,
    S700,
    S800,
    S900,
}

impl Shade {
    pub const ALL: [Shade; SHADE_COUNT] = [
        Shade::S50,
        Shade::S100,
        Shade::S200,
        Shade::S300,
        Shade::S400,
        Shade::S500,
        Shade::S600,
        Shade::S700,
        Shade::S800,
        Shade::S900,
    ];

    pub const fn value(self) -> u16 {
        match self {
            Self::S50 => 50,
            Self::S100 => 100,
            Self::S200 => 200,
            Self::S300 => 300,
            Self::S400 => 400,
            Self::S500 => 500,
            Self::S600 => 600,
            Self::S700 => 700,
            Self::S800 => 800,
            Self::S900 => 900,
        }
    }
}

/// Full shade, alias and alpha set for one semantic color.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ColorScale {
    pub s50: &'static str,
    pub s100: &'static str,
    pub s200: &'static str,
    pub s300: &'static str,
    pub s400: &'static str,
    pub s500: &'static str,
    pub s600: &'static str,
    pub s700: &'static str,
    pub s800: &'static str,
    pub s900: &'static str,
    pub main: &'static str,
    pub light: &'static str,
    pub dark: &'static str,
    pub contrast_text: &'static str,
    pub alpha8: &'static str,
    pub alpha12: &'static str,
    pub alpha16: &'static str,
    pub alpha24: &'static str,
    pub alpha32: &'static str,
    pub alpha40: &'static str,
}

impl ColorScale {
    pub const fn shade(&self, shade: Shade) -> &'static str {
        match shade {
            Shade::S50 => self.s50,
            Shade::S100 => self.s100,
            Shade::S200 => self.s200,
            Shade::S300 => self.s300,
            Shade::S400 => self.s400,
            Shade::S500 => self.s500,
            Shade::S600 => self.s600,
            Shade::S700 => self.s700,
            Shade::S800 => self.s800,
            Shade::S900 => self.s900,
        }
    }

    pub fn shades(&self) -> [&'static str; SHADE_COUNT] {
        Shade::ALL.map(|shade| self.shade(shade))
    }

    pub fn alphas(&self) -> [&'static str; 6] {
        [
            self.alpha8,
            self.alpha12,
            self.alpha16,
            self.alpha24,
            self.alpha32,
            self.alpha40,
        ]
    }
}

pub const PRIMARY: ColorScale = ColorScale {
    s50: "#eff6ff",
    s100: "#dbeafe",
    s200: "#bfdbfe",
    s300: "#93c5fd",
    s400: "#60a5fa",
    s500: "#3b82f6",
    s600: "#2563eb",
    s700: "#1d4ed8",
    s800: "#1e40af",
    s900: "#1e3a8a",
    main: "#2563eb",
    light: "#60a5fa",
    dark: "#1e40af",
    contrast_text: "#ffffff",
    alpha8: "#2563eb14",
    alpha12: "#2563eb1f",
    alpha16: "#2563eb29",
    alpha24: "#2563eb3d",
    alpha32: "#2563eb52",
    alpha40: "#2563eb66",
};

pub const SECONDARY: ColorScale = ColorScale {
    s50: "#f5f3ff",
    s100: "#ede9fe",
    s200: "#ddd6fe",
    s300: "#c4b5fd",
    s400: "#a78bfa",
    s500: "#8b5cf6",
    s600: "#7c3aed",
    s700: "#6d28d9",
    s800: "#5b21b6",
    s900: "#4c1d95",
    main: "#7c3aed",
    light: "#a78bfa",
    dark: "#5b21b6",
    contrast_text: "#ffffff",
    alpha8: "#7c3aed14",
    alpha12: "#7c3aed1f",
    alpha16: "#7c3aed29",
    alpha24: "#7c3aed3d",
    alpha32: "#7c3aed52",
    alpha40: "#7c3aed66",
};

pub const SUCCESS: ColorScale = ColorScale {
    s50: "#f0fdf4",
    s100: "#dcfce7",
    s200: "#bbf7d0",
    s300: "#86efac",
    s400: "#4ade80",
    s500: "#22c55e",
    s600: "#16a34a",
    s700: "#15803d",
    s800: "#166534",
    s900: "#14532d",
    main: "#15803d",
    light: "#22c55e",
    dark: "#14532d",
    contrast_text: "#ffffff",
    alpha8: "#15803d14",
    alpha12: "#15803d1f",
    alpha16: "#15803d29",
    alpha24: "#15803d3d",
    alpha32: "#15803d52",
    alpha40: "#15803d66",
};

pub const WARNING: ColorScale = ColorScale {
    s50: "#fffbeb",
    s100: "#fef3c7",
    s200: "#fde68a",
    s300: "#fcd34d",
    s400: "#fbbf24",
    s500: "#f59e0b",
    s600: "#d97706",
    s700: "#b45309",
    s800: "#92400e",
    s900: "#78350f",
    main: "#f59e0b",
    light: "#fcd34d",
    dark: "#b45309",
    contrast_text: "#111827",
    alpha8: "#f59e0b14",
    alpha12: "#f59e0b1f",
    alpha16: "#f59e0b29",
    alpha24: "#f59e0b3d",
    alpha32: "#f59e0b52",
    alpha40: "#f59e0b66",
};

pub const DANGER: ColorScale = ColorScale {
    s50: "#fef2f2",
    s100: "#fee2e2",
    s200: "#fecaca",
    s300: "#fca5a5",
    s400: "#f87171",
    s500: "#ef4444",
    s600: "#dc2626",
    s700: "#b91c1c",
    s800: "#991b1b",
    s900: "#7f1d1d",
    main: "#dc2626",
    light: "#f87171",
    dark: "#991b1b",
    contrast_text: "#ffffff",
    alpha8: "#dc262614",
    alpha12: "#dc26261f",
    alpha16: "#dc262629",
    alpha24: "#dc26263d",
    alpha32: "#dc262652",
    alpha40: "#dc262666",
};

pub const INFO: ColorScale = ColorScale {
    s50: "#f0f9ff",
    s100: "#e0f2fe",
    s200: "#bae6fd",
    s300: "#7dd3fc",
    s400: "#38bdf8",
    s500: "#0ea5e9",
    s600: "#0284c7",
    s700: "#0369a1",
    s800: "#075985",
    s900: "#0c4a6e",
    main: "#0369a1",
    light: "#0ea5e9",
    dark: "#0c4a6e",
    contrast_text: "#ffffff",
    alpha8: "#0369a114",
    alpha12: "#0369a11f",
    alpha16: "#0369a129",
    alpha24: "#0369a13d",
    alpha32: "#0369a152",
    alpha40: "#0369a166",
};

pub const NEUTRAL: ColorScale = ColorScale {
    s50: "#f9fafb",
    s100: "#f3f4f6",
    s200: "#e5e7eb",
    s300: "#d1d5db",
    s400: "#9ca3af",
    s500: "#6b7280",
    s600: "#4b5563",
    s700: "#374151",
    s800: "#1f2937",
    s900: "#111827",
    main: "#4b5563",
    light: "#9ca3af",
    dark: "#1f2937",
    contrast_text: "#ffffff",
    alpha8: "#4b556314",
    alpha12: "#4b55631f",
    alpha16: "#4b556329",
    alpha24: "#4b55633d",
    alpha32: "#4b556352",
    alpha40: "#4b556366",
};
pub const fn scale(color: SemanticColor) -> &'static ColorScale {
    match color {
        SemanticColor::Primary => &PRIMARY,
        SemanticColor::Secondary => &SECONDARY,
        SemanticColor::Success => &SUCCESS,
        SemanticColor::Warning => &WARNING,
        SemanticColor::Danger => &DANGER,
        SemanticColor::Info => &INFO,
        SemanticColor::Neutral => &NEUTRAL,
    }
}

pub const WHITE: &str = "#ffffff";
pub const BLACK: &str = "#000000";
pub const TRANSPARENT: &str = "transparent";

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct BackgroundColors {
    pub default: &'static str,
    pub paper: &'static str,
    pub backdrop: &'static str,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct TextColors {
    pub primary: &'static str,
    pub secondary: &'static str,
    pub disabled: &'static str,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct CommonColors {
    pub white: &'static str,
    pub black: &'static str,
    pub background: BackgroundColors,
    pub text: TextColors,
    pub divider: &'static str,
}

pub const COMMON: CommonColors = CommonColors {
    white: WHITE,
    black: BLACK,
    background: BackgroundColors {
        default: "#ffffff",
        paper: "#ffffff",
        backdrop: "#11182780",
    },
    text: TextColors {
        primary: "#111827",
        secondary: "#4b5563",
        disabled: "#9ca3af",
    },
    divider: "#e5e7eb",
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::parse_hex;

    #[test]
    fn every_scale_entry_is_a_valid_hex_color() {
        for color in SemanticColor::ALL {
            let scale = scale(color);
            let aliases = [scale.main, scale.light, scale.dark, scale.contrast_text];
            for value in scale.shades().into_iter().chain(aliases).chain(scale.alphas()) {
                assert!(parse_hex(value).is_ok(), "{color:?}: {value}");
            }
        }
    }

    #[test]
    fn alpha_blends_derive_from_main() {
        for color in SemanticColor::ALL {
            let scale = scale(color);
            for alpha in scale.alphas() {
                assert!(alpha.starts_with(scale.main));
                assert_eq!(alpha.len(), 9);
            }
        }
    }

    #[test]
    fn aliases_point_into_the_scale() {
        for color in SemanticColor::ALL {
            let scale = scale(color);
            let shades = scale.shades();
            assert!(shades.contains(&scale.main));
            assert!(shades.contains(&scale.light));
            assert!(shades.contains(&scale.dark));
        }
    }

    #[test]
    fn shade_lookup_matches_fields() {
        assert_eq!(PRIMARY.shade(Shade::S50), PRIMARY.s50);
        assert_eq!(DANGER.shade(Shade::S900), DANGER.s900);
        assert_eq!(Shade::S700.value(), 700);
    }
}
