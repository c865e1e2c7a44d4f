//! Spacing, radius, elevation and per-component size presets.

use crate::style::Size;

pub const SPACING_UNIT_PX: f32 = 8.0;

pub const fn spacing(factor: f32) -> f32 {
    SPACING_UNIT_PX * factor
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NamedScale {
    pub xs: f32,
    pub sm: f32,
    pub md: f32,
    pub lg: f32,
    pub xl: f32,
}

impl NamedScale {
    pub const fn new(xs: f32, sm: f32, md: f32, lg: f32, xl: f32) -> Self {
        Self { xs, sm, md, lg, xl }
    }

    pub const fn get(&self, size: Size) -> f32 {
        match size {
            Size::Xs => self.xs,
            Size::Sm => self.sm,
            Size::Md => self.md,
            Size::Lg => self.lg,
            Size::Xl => self.xl,
        }
    }
}

pub const SPACE: NamedScale = NamedScale::new(4.0, 8.0, 16.0, 24.0, 32.0);

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RadiusScale {
    pub none: f32,
    pub xs: f32,
    pub sm: f32,
    pub md: f32,
    pub lg: f32,
    pub xl: f32,
    pub full: f32,
}

pub const RADIUS: RadiusScale = RadiusScale {
    none: 0.0,
    xs: 2.0,
    sm: 4.0,
    md: 8.0,
    lg: 12.0,
    xl: 16.0,
    full: 9999.0,
};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ShadowScale {
    pub none: &'static str,
    pub sm: &'static str,
    pub md: &'static str,
    pub lg: &'static str,
    pub xl: &'static str,
}

pub const SHADOWS: ShadowScale = ShadowScale {
    none: "none",
    sm: "0 1px 2px 0 rgba(17, 24, 39, 0.06)",
    md: "0 4px 6px -1px rgba(17, 24, 39, 0.10), 0 2px 4px -2px rgba(17, 24, 39, 0.08)",
    lg: "0 10px 15px -3px rgba(17, 24, 39, 0.10), 0 4px 6px -4px rgba(17, 24, 39, 0.08)",
    xl: "0 20px 25px -5px rgba(17, 24, 39, 0.12), 0 8px 10px -6px rgba(17, 24, 39, 0.08)",
};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ZIndexLayers {
    pub app_bar: u16,
    pub popover: u16,
    pub drawer: u16,
    pub modal: u16,
    pub snackbar: u16,
    pub tooltip: u16,
}

pub const Z_INDEX: ZIndexLayers = ZIndexLayers {
    app_bar: 1100,
    popover: 1150,
    drawer: 1200,
    modal: 1300,
    snackbar: 1400,
    tooltip: 1500,
};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Breakpoints {
    pub xs: u16,
    pub sm: u16,
    pub md: u16,
    pub lg: u16,
    pub xl: u16,
}

pub const BREAKPOINTS: Breakpoints = Breakpoints {
    xs: 0,
    sm: 600,
    md: 900,
    lg: 1200,
    xl: 1536,
};

#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum ComponentKind {
    Button,
    Input,
    Checkbox,
    Radio,
    Switch,
    Avatar,
    Chip,
    Badge,
}

impl ComponentKind {
    pub const ALL: [ComponentKind; 8] = [
        ComponentKind::Button,
        ComponentKind::Input,
        ComponentKind::Checkbox,
        ComponentKind::Radio,
        ComponentKind::Switch,
        ComponentKind::Avatar,
        ComponentKind::Chip,
        ComponentKind::Badge,
    ];
}

/// Literal dimensions for one component kind at one size.
///
/// `height` is the control's box height (the square edge for checkbox, radio
/// and avatar, the track height for switch). `width` is only meaningful for
/// the switch track and equals `height` elsewhere.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SizePreset {
    pub height: f32,
    pub width: f32,
    pub padding_x: f32,
    pub font_size: f32,
    pub icon_size: f32,
    pub gap: f32,
}

impl SizePreset {
    const fn new(
        height: f32,
        width: f32,
        padding_x: f32,
        font_size: f32,
        icon_size: f32,
        gap: f32,
    ) -> Self {
        Self {
            height,
            width,
            padding_x,
            font_size,
            icon_size,
            gap,
        }
    }
}

pub const fn size_preset(kind: ComponentKind, size: Size) -> SizePreset {
    match kind {
        ComponentKind::Button => match size {
            Size::Xs => SizePreset::new(24.0, 24.0, 8.0, 12.0, 14.0, 4.0),
            Size::Sm => SizePreset::new(30.0, 30.0, 12.0, 13.0, 16.0, 6.0),
            Size::Md => SizePreset::new(36.0, 36.0, 16.0, 14.0, 18.0, 8.0),
            Size::Lg => SizePreset::new(42.0, 42.0, 20.0, 16.0, 20.0, 10.0),
            Size::Xl => SizePreset::new(50.0, 50.0, 24.0, 18.0, 22.0, 12.0),
        },
        ComponentKind::Input => match size {
            Size::Xs => SizePreset::new(26.0, 26.0, 8.0, 12.0, 14.0, 4.0),
            Size::Sm => SizePreset::new(32.0, 32.0, 10.0, 13.0, 16.0, 6.0),
            Size::Md => SizePreset::new(38.0, 38.0, 12.0, 14.0, 18.0, 8.0),
            Size::Lg => SizePreset::new(44.0, 44.0, 14.0, 16.0, 20.0, 10.0),
            Size::Xl => SizePreset::new(52.0, 52.0, 16.0, 18.0, 22.0, 12.0),
        },
        ComponentKind::Checkbox => match size {
            Size::Xs => SizePreset::new(12.0, 12.0, 0.0, 12.0, 8.0, 6.0),
            Size::Sm => SizePreset::new(14.0, 14.0, 0.0, 13.0, 10.0, 8.0),
            Size::Md => SizePreset::new(18.0, 18.0, 0.0, 14.0, 12.0, 8.0),
            Size::Lg => SizePreset::new(22.0, 22.0, 0.0, 16.0, 14.0, 10.0),
            Size::Xl => SizePreset::new(26.0, 26.0, 0.0, 18.0, 16.0, 12.0),
        },
        ComponentKind::Radio => match size {
            Size::Xs => SizePreset::new(12.0, 12.0, 0.0, 12.0, 4.0, 6.0),
            Size::Sm => SizePreset::new(14.0, 14.0, 0.0, 13.0, 6.0, 8.0),
            Size::Md => SizePreset::new(18.0, 18.0, 0.0, 14.0, 8.0, 8.0),
            Size::Lg => SizePreset::new(22.0, 22.0, 0.0, 16.0, 10.0, 10.0),
            Size::Xl => SizePreset::new(26.0, 26.0, 0.0, 18.0, 12.0, 12.0),
        },
        ComponentKind::Switch => match size {
            Size::Xs => SizePreset::new(14.0, 26.0, 2.0, 12.0, 10.0, 6.0),
            Size::Sm => SizePreset::new(18.0, 32.0, 2.0, 13.0, 14.0, 8.0),
            Size::Md => SizePreset::new(22.0, 40.0, 2.0, 14.0, 18.0, 8.0),
            Size::Lg => SizePreset::new(26.0, 48.0, 3.0, 16.0, 20.0, 10.0),
            Size::Xl => SizePreset::new(30.0, 56.0, 3.0, 18.0, 24.0, 12.0),
        },
        ComponentKind::Avatar => match size {
            Size::Xs => SizePreset::new(20.0, 20.0, 0.0, 10.0, 12.0, 0.0),
            Size::Sm => SizePreset::new(28.0, 28.0, 0.0, 12.0, 16.0, 0.0),
            Size::Md => SizePreset::new(40.0, 40.0, 0.0, 16.0, 22.0, 0.0),
            Size::Lg => SizePreset::new(56.0, 56.0, 0.0, 20.0, 30.0, 0.0),
            Size::Xl => SizePreset::new(80.0, 80.0, 0.0, 28.0, 40.0, 0.0),
        },
        ComponentKind::Chip => match size {
            Size::Xs => SizePreset::new(18.0, 18.0, 6.0, 11.0, 12.0, 4.0),
            Size::Sm => SizePreset::new(22.0, 22.0, 8.0, 12.0, 14.0, 4.0),
            Size::Md => SizePreset::new(28.0, 28.0, 10.0, 13.0, 16.0, 6.0),
            Size::Lg => SizePreset::new(32.0, 32.0, 12.0, 14.0, 18.0, 6.0),
            Size::Xl => SizePreset::new(38.0, 38.0, 14.0, 16.0, 20.0, 8.0),
        },
        ComponentKind::Badge => match size {
            Size::Xs => SizePreset::new(14.0, 14.0, 4.0, 9.0, 8.0, 2.0),
            Size::Sm => SizePreset::new(16.0, 16.0, 5.0, 10.0, 10.0, 2.0),
            Size::Md => SizePreset::new(20.0, 20.0, 6.0, 11.0, 12.0, 4.0),
            Size::Lg => SizePreset::new(24.0, 24.0, 8.0, 12.0, 14.0, 4.0),
            Size::Xl => SizePreset::new(28.0, 28.0, 10.0, 14.0, 16.0, 6.0),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn size_presets_grow_from_xs_to_xl() {
        for kind in ComponentKind::ALL {
            let presets = Size::ALL.map(|size| size_preset(kind, size));
            for pair in presets.windows(2) {
                assert!(pair[0].height < pair[1].height, "{kind:?} height");
                assert!(pair[0].width < pair[1].width, "{kind:?} width");
                assert!(pair[0].font_size < pair[1].font_size, "{kind:?} font");
                assert!(pair[0].padding_x <= pair[1].padding_x, "{kind:?} padding");
            }
        }
    }

    #[test]
    fn overlay_layers_stack_tooltips_on_top() {
        assert!(Z_INDEX.tooltip > Z_INDEX.snackbar);
        assert!(Z_INDEX.snackbar > Z_INDEX.modal);
        assert!(Z_INDEX.modal > Z_INDEX.drawer);
        assert!(Z_INDEX.drawer > Z_INDEX.popover);
    }

    #[test]
    fn spacing_is_a_multiple_of_the_unit() {
        assert_eq!(spacing(0.5), 4.0);
        assert_eq!(spacing(3.0), 24.0);
        assert_eq!(SPACE.get(Size::Md), 16.0);
    }
}
