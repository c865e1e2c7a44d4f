//! Variant × semantic color → style record resolution.
//!
//! Every component that accepts a [`Variant`] takes its colors from
//! [`resolve_variant_style`]; there are no per-component color tables.

use crate::style::{InteractionState, SemanticColor, Size, StyleMap, StyleSheet, Variant};
use crate::tokens::animations::{DURATIONS, Easing, transition};
use crate::tokens::colors::{self, ColorScale, NEUTRAL, TRANSPARENT};
use crate::tokens::sizing::{ComponentKind, SizePreset, size_preset as lookup_size_preset};

pub const BORDER_WIDTH_PX: f32 = 1.0;
pub const FOCUS_OUTLINE_WIDTH_PX: f32 = 2.0;
pub const FOCUS_OUTLINE_OFFSET_PX: f32 = 2.0;
pub const DISABLED_OPACITY: f32 = 0.6;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StateColors {
    pub background_color: &'static str,
    pub color: &'static str,
    pub border_color: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FocusOutline {
    pub color: &'static str,
    pub width: f32,
    pub offset: f32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DisabledStyle {
    pub background_color: &'static str,
    pub color: &'static str,
    pub border_color: &'static str,
    pub opacity: f32,
}

/// Fully populated style record for one variant and color.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VariantStyle {
    pub background_color: &'static str,
    pub color: &'static str,
    pub border_color: &'static str,
    pub border_width: f32,
    pub hover: StateColors,
    pub active: StateColors,
    pub focus_outline: FocusOutline,
    pub disabled: DisabledStyle,
}

impl VariantStyle {
    pub fn state(&self, state: InteractionState) -> StateColors {
        match state {
            InteractionState::Normal | InteractionState::Focus => StateColors {
                background_color: self.background_color,
                color: self.color,
                border_color: self.border_color,
            },
            InteractionState::Hover => self.hover,
            InteractionState::Active => self.active,
            InteractionState::Disabled => StateColors {
                background_color: self.disabled.background_color,
                color: self.disabled.color,
                border_color: self.disabled.border_color,
            },
        }
    }
}

/// Resolves against the built-in palettes.
pub fn variant_style(variant: Variant, color: SemanticColor) -> VariantStyle {
    resolve_variant_style(variant, colors::scale(color), &NEUTRAL)
}

/// Resolves against arbitrary scales; `neutral` supplies the disabled colors.
pub fn resolve_variant_style(
    variant: Variant,
    scale: &ColorScale,
    neutral: &ColorScale,
) -> VariantStyle {
    let focus_outline = FocusOutline {
        color: scale.alpha40,
        width: FOCUS_OUTLINE_WIDTH_PX,
        offset: FOCUS_OUTLINE_OFFSET_PX,
    };

    match variant {
        Variant::Solid => VariantStyle {
            background_color: scale.main,
            color: scale.contrast_text,
            border_color: scale.main,
            border_width: BORDER_WIDTH_PX,
            hover: StateColors {
                background_color: scale.dark,
                color: scale.contrast_text,
                border_color: scale.dark,
            },
            active: StateColors {
                background_color: scale.s900,
                color: scale.contrast_text,
                border_color: scale.s900,
            },
            focus_outline,
            disabled: DisabledStyle {
                background_color: neutral.s100,
                color: neutral.s400,
                border_color: neutral.s100,
                opacity: DISABLED_OPACITY,
            },
        },
        Variant::Soft => VariantStyle {
            background_color: scale.alpha12,
            color: scale.s800,
            border_color: TRANSPARENT,
            border_width: BORDER_WIDTH_PX,
            hover: StateColors {
                background_color: scale.alpha16,
                color: scale.s800,
                border_color: TRANSPARENT,
            },
            active: StateColors {
                background_color: scale.alpha24,
                color: scale.s900,
                border_color: TRANSPARENT,
            },
            focus_outline,
            disabled: DisabledStyle {
                background_color: neutral.s50,
                color: neutral.s400,
                border_color: TRANSPARENT,
                opacity: DISABLED_OPACITY,
            },
        },
        Variant::Outlined => VariantStyle {
            background_color: TRANSPARENT,
            color: scale.main,
            border_color: scale.light,
            border_width: BORDER_WIDTH_PX,
            hover: StateColors {
                background_color: scale.alpha8,
                color: scale.dark,
                border_color: scale.main,
            },
            active: StateColors {
                background_color: scale.alpha16,
                color: scale.dark,
                border_color: scale.dark,
            },
            focus_outline,
            disabled: DisabledStyle {
                background_color: TRANSPARENT,
                color: neutral.s400,
                border_color: neutral.s200,
                opacity: DISABLED_OPACITY,
            },
        },
        Variant::Ghost => VariantStyle {
            background_color: TRANSPARENT,
            color: scale.main,
            border_color: TRANSPARENT,
            border_width: BORDER_WIDTH_PX,
            hover: StateColors {
                background_color: scale.alpha8,
                color: scale.dark,
                border_color: TRANSPARENT,
            },
            active: StateColors {
                background_color: scale.alpha12,
                color: scale.dark,
                border_color: TRANSPARENT,
            },
            focus_outline,
            disabled: DisabledStyle {
                background_color: TRANSPARENT,
                color: neutral.s400,
                border_color: TRANSPARENT,
                opacity: DISABLED_OPACITY,
            },
        },
        Variant::Plain => VariantStyle {
            background_color: TRANSPARENT,
            color: scale.main,
            border_color: TRANSPARENT,
            border_width: BORDER_WIDTH_PX,
            hover: StateColors {
                background_color: TRANSPARENT,
                color: scale.dark,
                border_color: TRANSPARENT,
            },
            active: StateColors {
                background_color: TRANSPARENT,
                color: scale.s900,
                border_color: TRANSPARENT,
            },
            focus_outline,
            disabled: DisabledStyle {
                background_color: TRANSPARENT,
                color: neutral.s400,
                border_color: TRANSPARENT,
                opacity: DISABLED_OPACITY,
            },
        },
    }
}

fn state_declarations(state: StateColors) -> StyleMap {
    StyleMap::new()
        .declare("background-color", state.background_color)
        .declare("color", state.color)
        .declare("border-color", state.border_color)
}

const TRANSITION_PROPERTIES: [&str; 4] =
    ["background-color", "color", "border-color", "box-shadow"];

/// CSS-in-JS shaped style: base declarations plus pseudo-state blocks.
pub fn variant_sx(variant: Variant, color: SemanticColor) -> StyleSheet {
    style_sheet(&variant_style(variant, color))
}

pub fn style_sheet(style: &VariantStyle) -> StyleSheet {
    let base = state_declarations(style.state(InteractionState::Normal))
        .declare("border-width", format!("{}px", style.border_width))
        .declare("border-style", "solid")
        .declare(
            "transition",
            transition(&TRANSITION_PROPERTIES, DURATIONS.shortest, Easing::EaseInOut),
        );

    let focus = StyleMap::new()
        .declare(
            "outline",
            format!("{}px solid {}", style.focus_outline.width, style.focus_outline.color),
        )
        .declare("outline-offset", format!("{}px", style.focus_outline.offset));

    let disabled = state_declarations(style.state(InteractionState::Disabled))
        .declare("opacity", style.disabled.opacity.to_string())
        .declare("cursor", "not-allowed")
        .declare("pointer-events", "none");

    StyleSheet::new(base)
        .state(InteractionState::Hover, state_declarations(style.hover))
        .state(InteractionState::Active, state_declarations(style.active))
        .state(InteractionState::Focus, focus)
        .state(InteractionState::Disabled, disabled)
}

/// Focus ring declarations for components that draw their own outline.
pub fn focus_ring(color: SemanticColor) -> StyleMap {
    let scale = colors::scale(color);
    StyleMap::new()
        .declare("outline", format!("{FOCUS_OUTLINE_WIDTH_PX}px solid {}", scale.alpha40))
        .declare("outline-offset", format!("{FOCUS_OUTLINE_OFFSET_PX}px"))
}

pub fn size_preset(kind: ComponentKind, size: Size) -> SizePreset {
    lookup_size_preset(kind, size)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn populated(value: &str) -> bool {
        !value.trim().is_empty()
    }

    #[test]
    fn every_variant_and_color_resolves_a_complete_record() {
        for variant in Variant::ALL {
            for color in SemanticColor::ALL {
                let style = variant_style(variant, color);
                assert!(populated(style.background_color), "{variant:?}/{color:?}");
                assert!(populated(style.color));
                assert!(populated(style.border_color));
                assert!(style.border_width > 0.0);
                for state in [style.hover, style.active] {
                    assert!(populated(state.background_color));
                    assert!(populated(state.color));
                    assert!(populated(state.border_color));
                }
                assert!(populated(style.focus_outline.color));
                assert!(style.focus_outline.width > 0.0);
                assert!(populated(style.disabled.background_color));
                assert!(populated(style.disabled.color));
                assert!(populated(style.disabled.border_color));
                assert!(style.disabled.opacity > 0.0 && style.disabled.opacity < 1.0);
            }
        }
    }

    #[test]
    fn resolution_is_deterministic() {
        for variant in Variant::ALL {
            for color in SemanticColor::ALL {
                assert_eq!(variant_style(variant, color), variant_style(variant, color));
                assert_eq!(variant_sx(variant, color), variant_sx(variant, color));
            }
        }
    }

    #[test]
    fn solid_uses_main_and_contrast_text() {
        let style = variant_style(Variant::Solid, SemanticColor::Danger);
        assert_eq!(style.background_color, colors::DANGER.main);
        assert_eq!(style.color, colors::DANGER.contrast_text);
        assert_eq!(style.hover.background_color, colors::DANGER.dark);
    }

    #[test]
    fn transparent_variants_change_only_what_they_paint() {
        let plain = variant_style(Variant::Plain, SemanticColor::Info);
        assert_eq!(plain.background_color, TRANSPARENT);
        assert_eq!(plain.hover.background_color, TRANSPARENT);
        assert_ne!(plain.hover.color, plain.color);

        let ghost = variant_style(Variant::Ghost, SemanticColor::Info);
        assert_eq!(ghost.background_color, TRANSPARENT);
        assert_eq!(ghost.hover.background_color, colors::INFO.alpha8);

        let outlined = variant_style(Variant::Outlined, SemanticColor::Info);
        assert_eq!(outlined.border_color, colors::INFO.light);
    }

    #[test]
    fn style_sheet_layers_pseudo_states_over_the_base() {
        let sheet = variant_sx(Variant::Soft, SemanticColor::Success);
        assert_eq!(sheet.base.read("background-color"), Some(colors::SUCCESS.alpha12));
        assert!(sheet.base.read("transition").is_some_and(|t| t.contains("150ms")));

        let selectors = sheet.selectors().map(|(selector, _)| selector).collect::<Vec<_>>();
        assert_eq!(
            selectors,
            vec!["&:hover", "&:active", "&:focus-visible", "&:disabled"]
        );

        let disabled = sheet.read(InteractionState::Disabled);
        assert_eq!(disabled.and_then(|s| s.read("cursor")), Some("not-allowed"));
        let focus = sheet.read(InteractionState::Focus);
        assert_eq!(
            focus.and_then(|s| s.read("outline")).map(str::to_string),
            Some(format!("2px solid {}", colors::SUCCESS.alpha40))
        );
    }

    #[test]
    fn focus_ring_tracks_the_semantic_color() {
        let ring = focus_ring(SemanticColor::Warning);
        assert_eq!(
            ring.read("outline").map(str::to_string),
            Some(format!("2px solid {}", colors::WARNING.alpha40))
        );
        assert_eq!(ring.read("outline-offset"), Some("2px"));
    }
}
