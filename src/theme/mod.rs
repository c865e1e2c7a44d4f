use std::collections::BTreeMap;
use std::sync::{Arc, OnceLock};

use crate::motion::MotionConfig;
use crate::presets::{VariantStyle, resolve_variant_style};
use crate::style::{SemanticColor, Variant};
use crate::tokens::colors::{self, COMMON, ColorScale, CommonColors};
use crate::tokens::sizing::{RADIUS, RadiusScale};
use crate::tokens::typography::FONT_SANS;

#[derive(Clone, Debug, PartialEq)]
pub struct Theme {
    pub palettes: BTreeMap<SemanticColor, ColorScale>,
    pub common: CommonColors,
    pub radius: RadiusScale,
    pub font_family: &'static str,
    pub motion: MotionConfig,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            palettes: SemanticColor::ALL
                .into_iter()
                .map(|color| (color, *colors::scale(color)))
                .collect(),
            common: COMMON,
            radius: RADIUS,
            font_family: FONT_SANS,
            motion: MotionConfig::default(),
        }
    }
}

impl Theme {
    pub fn with_palette(mut self, color: SemanticColor, scale: ColorScale) -> Self {
        self.palettes.insert(color, scale);
        self
    }

    pub fn with_common(mut self, common: CommonColors) -> Self {
        self.common = common;
        self
    }

    pub fn with_radius(mut self, radius: RadiusScale) -> Self {
        self.radius = radius;
        self
    }

    pub fn with_font_family(mut self, family: &'static str) -> Self {
        self.font_family = family;
        self
    }

    pub fn with_motion(mut self, motion: MotionConfig) -> Self {
        self.motion = motion;
        self
    }

    /// Palette for `color`, falling back to the built-in scale.
    pub fn scale(&self, color: SemanticColor) -> &ColorScale {
        self.palettes
            .get(&color)
            .unwrap_or_else(|| colors::scale(color))
    }

    pub fn variant_style(&self, variant: Variant, color: SemanticColor) -> VariantStyle {
        resolve_variant_style(variant, self.scale(color), self.scale(SemanticColor::Neutral))
    }
}

/// Per-component view of the provider theme, synced at render time.
#[derive(Clone, Default)]
pub struct LocalTheme {
    resolved: Option<Arc<Theme>>,
}

impl LocalTheme {
    pub fn sync_from_provider(&mut self, cx: &gpui::App) {
        self.resolved = Some(crate::provider::SunProvider::theme(cx));
    }

    fn fallback_theme() -> &'static Theme {
        static FALLBACK: OnceLock<Theme> = OnceLock::new();
        FALLBACK.get_or_init(Theme::default)
    }
}

impl std::ops::Deref for LocalTheme {
    type Target = Theme;

    fn deref(&self) -> &Self::Target {
        if let Some(resolved) = self.resolved.as_deref() {
            resolved
        } else {
            Self::fallback_theme()
        }
    }
}
