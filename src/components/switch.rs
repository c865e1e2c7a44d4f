use std::rc::Rc;

use gpui::{
    ClickEvent, InteractiveElement, IntoElement, ParentElement, RenderOnce, SharedString, Styled,
    Window, div, px,
};

use crate::color::to_hsla;
use crate::contracts::{Accessible, Role};
use crate::id::ComponentId;
use crate::style::{SemanticColor, Size, Variant};
use crate::tokens::sizing::{ComponentKind, SizePreset, size_preset};

use super::utils::{ToggleHandler, apply_variant_colors, bind_activation};

/// Left offset of the thumb inside the track.
pub fn thumb_offset(preset: &SizePreset, checked: bool) -> f32 {
    if checked {
        preset.width - preset.icon_size - preset.padding_x
    } else {
        preset.padding_x
    }
}

#[derive(IntoElement)]
pub struct Switch {
    id: ComponentId,
    label: Option<SharedString>,
    checked: bool,
    disabled: bool,
    variant: Variant,
    color: SemanticColor,
    size: Size,
    theme: crate::theme::LocalTheme,
    style: gpui::StyleRefinement,
    on_change: Option<ToggleHandler>,
}

impl Switch {
    #[track_caller]
    pub fn new() -> Self {
        Self {
            id: ComponentId::auto("switch"),
            label: None,
            checked: false,
            disabled: false,
            variant: Variant::Solid,
            color: SemanticColor::Primary,
            size: Size::Md,
            theme: crate::theme::LocalTheme::default(),
            style: gpui::StyleRefinement::default(),
            on_change: None,
        }
    }

    pub fn with_id(mut self, id: impl Into<ComponentId>) -> Self {
        self.id = id.into();
        self
    }

    pub fn label(mut self, value: impl Into<SharedString>) -> Self {
        self.label = Some(value.into());
        self
    }

    pub fn checked(mut self, value: bool) -> Self {
        self.checked = value;
        self
    }

    pub fn disabled(mut self, value: bool) -> Self {
        self.disabled = value;
        self
    }

    pub fn on_change(
        mut self,
        handler: impl Fn(bool, &mut Window, &mut gpui::App) + 'static,
    ) -> Self {
        self.on_change = Some(Rc::new(handler));
        self
    }
}

crate::impl_variant_color_size!(Switch);
crate::impl_disableable!(Switch);
crate::impl_styled!(Switch);

impl Accessible for Switch {
    fn role(&self) -> Role {
        Role::Switch
    }

    fn accessible_label(&self) -> Option<&str> {
        self.label.as_ref().map(|label| label.as_ref())
    }
}

impl RenderOnce for Switch {
    fn render(mut self, _window: &mut Window, cx: &mut gpui::App) -> impl IntoElement {
        self.theme.sync_from_provider(cx);
        let preset = size_preset(ComponentKind::Switch, self.size);
        let record = self.style_record();

        let (track_style, thumb_color) = if self.checked {
            (record, to_hsla(record.color))
        } else {
            let neutral = self.theme.variant_style(Variant::Soft, SemanticColor::Neutral);
            (neutral, to_hsla(self.theme.common.background.paper))
        };
        let track = div()
            .id(self.id.slot("track"))
            .relative()
            .flex_none()
            .w(px(preset.width))
            .h(px(preset.height))
            .rounded_full();
        let track = apply_variant_colors(track, &track_style).child(
            div()
                .absolute()
                .top(px(preset.padding_x))
                .left(px(thumb_offset(&preset, self.checked)))
                .size(px(preset.icon_size))
                .rounded_full()
                .bg(thumb_color),
        );

        let mut root = div()
            .id(self.id.clone())
            .flex()
            .flex_row()
            .items_center()
            .gap(px(preset.gap))
            .text_size(px(preset.font_size))
            .text_color(to_hsla(self.theme.common.text.primary))
            .child(track);
        if let Some(label) = self.label.clone() {
            root = root.child(label);
        }

        if self.disabled {
            root = root.opacity(record.disabled.opacity).cursor_default();
        } else if let Some(handler) = self.on_change.clone() {
            let next = !self.checked;
            root = bind_activation(
                root,
                Rc::new(
                    move |_: &ClickEvent, window: &mut Window, cx: &mut gpui::App| {
                        (handler)(next, window, cx)
                    },
                ),
            );
        }

        root = root.font_family(self.theme.font_family);
        gpui::Refineable::refine(gpui::Styled::style(&mut root), &self.style);
        root
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thumb_stays_inside_the_track() {
        for size in Size::ALL {
            let preset = size_preset(ComponentKind::Switch, size);
            let off = thumb_offset(&preset, false);
            let on = thumb_offset(&preset, true);
            assert!(off >= 0.0, "{size:?}");
            assert!(on > off, "{size:?}");
            assert!(on + preset.icon_size <= preset.width, "{size:?}");
            assert!(preset.icon_size + 2.0 * preset.padding_x <= preset.height, "{size:?}");
        }
    }

    #[test]
    fn reports_the_switch_role() {
        let switch = Switch::new().label("Wi-Fi").checked(true);
        assert_eq!(switch.role(), Role::Switch);
        assert_eq!(switch.accessible_label(), Some("Wi-Fi"));
    }
}
