use crate::motion::MotionConfig;
use crate::presets::VariantStyle;
use crate::style::{SemanticColor, Size, Variant};

/// Accessibility role reported by the widget a component wraps.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Role {
    Alert,
    Button,
    Checkbox,
    Combobox,
    Dialog,
    Generic,
    Group,
    Img,
    Presentation,
    Radio,
    Status,
    Switch,
    Textbox,
    Tooltip,
}

impl Role {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Alert => "alert",
            Self::Button => "button",
            Self::Checkbox => "checkbox",
            Self::Combobox => "combobox",
            Self::Dialog => "dialog",
            Self::Generic => "generic",
            Self::Group => "group",
            Self::Img => "img",
            Self::Presentation => "presentation",
            Self::Radio => "radio",
            Self::Status => "status",
            Self::Switch => "switch",
            Self::Textbox => "textbox",
            Self::Tooltip => "tooltip",
        }
    }
}

pub trait Accessible {
    fn role(&self) -> Role;

    fn accessible_label(&self) -> Option<&str> {
        None
    }
}

pub trait Variantable: Sized {
    fn variant(self, value: Variant) -> Self;
}

pub trait Colorable: Sized {
    fn color(self, value: SemanticColor) -> Self;
}

pub trait Sizeable: Sized {
    fn size(self, value: Size) -> Self;
}

/// Resolved colors of a variant-aware component.
pub trait StyleRecord {
    fn style_record(&self) -> VariantStyle;
}

pub trait Disableable: Sized {
    fn disabled(self, value: bool) -> Self;
}

pub trait Openable: Sized {
    fn opened(self, value: bool) -> Self;
}

pub trait Placeable<P>: Sized {
    fn placement(self, value: P) -> Self;
}

pub trait MotionAware: Sized {
    fn motion(self, value: MotionConfig) -> Self;
}

/// Adds `variant`, `color`, `size` and `style_record` to a component with
/// `variant`, `color`, `size` and `theme` fields, plus the matching contracts.
///
/// The inherent methods shadow `gpui::Styled::size` at call sites.
#[macro_export]
macro_rules! impl_variant_color_size {
    ($type:ty) => {
        impl $type {
            pub fn variant(mut self, value: $crate::style::Variant) -> Self {
                self.variant = value;
                self
            }

            pub fn color(mut self, value: $crate::style::SemanticColor) -> Self {
                self.color = value;
                self
            }

            pub fn size(mut self, value: $crate::style::Size) -> Self {
                self.size = value;
                self
            }

            pub fn style_record(&self) -> $crate::presets::VariantStyle {
                self.theme.variant_style(self.variant, self.color)
            }
        }

        impl $crate::contracts::Variantable for $type {
            fn variant(self, value: $crate::style::Variant) -> Self {
                <$type>::variant(self, value)
            }
        }

        impl $crate::contracts::Colorable for $type {
            fn color(self, value: $crate::style::SemanticColor) -> Self {
                <$type>::color(self, value)
            }
        }

        impl $crate::contracts::Sizeable for $type {
            fn size(self, value: $crate::style::Size) -> Self {
                <$type>::size(self, value)
            }
        }

        impl $crate::contracts::StyleRecord for $type {
            fn style_record(&self) -> $crate::presets::VariantStyle {
                <$type>::style_record(self)
            }
        }
    };
}

#[macro_export]
macro_rules! impl_disableable {
    ($type:ty) => {
        impl $crate::contracts::Disableable for $type {
            fn disabled(self, value: bool) -> Self {
                <$type>::disabled(self, value)
            }
        }
    };
}

#[macro_export]
macro_rules! impl_openable {
    ($type:ty) => {
        impl $crate::contracts::Openable for $type {
            fn opened(self, value: bool) -> Self {
                <$type>::opened(self, value)
            }
        }
    };
}

#[macro_export]
macro_rules! impl_placeable {
    ($type:ty, $placement:ty) => {
        impl $crate::contracts::Placeable<$placement> for $type {
            fn placement(self, value: $placement) -> Self {
                <$type>::placement(self, value)
            }
        }
    };
}

#[macro_export]
macro_rules! impl_motion_aware {
    ($type:ty) => {
        impl $crate::contracts::MotionAware for $type {
            fn motion(mut self, value: $crate::motion::MotionConfig) -> Self {
                self.motion = value.into();
                self
            }
        }
    };
}

#[macro_export]
macro_rules! impl_styled {
    ($type:ty) => {
        impl gpui::Styled for $type {
            fn style(&mut self) -> &mut gpui::StyleRefinement {
                &mut self.style
            }
        }
    };
}
