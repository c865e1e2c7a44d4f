use std::rc::Rc;

use gpui::{
    AnyElement, ClickEvent, InteractiveElement, IntoElement, ParentElement, RenderOnce,
    SharedString, Styled, Window, div, px,
};

use crate::contracts::{Accessible, Role};
use crate::id::ComponentId;
use crate::style::{SemanticColor, Size, Variant};
use crate::tokens::animations::{DURATIONS, PULSE};
use crate::tokens::sizing::{ComponentKind, size_preset};

use super::transition::TransitionExt;
use super::utils::{PressHandler, apply_variant_surface, bind_activation};

type SlotRenderer = Box<dyn FnOnce() -> AnyElement>;

#[derive(IntoElement)]
pub struct Button {
    id: ComponentId,
    label: Option<SharedString>,
    variant: Variant,
    color: SemanticColor,
    size: Size,
    disabled: bool,
    loading: bool,
    full_width: bool,
    start_icon: Option<SlotRenderer>,
    end_icon: Option<SlotRenderer>,
    theme: crate::theme::LocalTheme,
    style: gpui::StyleRefinement,
    on_click: Option<PressHandler>,
}

impl Button {
    #[track_caller]
    pub fn new(label: impl Into<SharedString>) -> Self {
        Self::without_label().label(label)
    }

    #[track_caller]
    pub fn without_label() -> Self {
        Self {
            id: ComponentId::auto("button"),
            label: None,
            variant: Variant::Solid,
            color: SemanticColor::Primary,
            size: Size::Md,
            disabled: false,
            loading: false,
            full_width: false,
            start_icon: None,
            end_icon: None,
            theme: crate::theme::LocalTheme::default(),
            style: gpui::StyleRefinement::default(),
            on_click: None,
        }
    }

    pub fn with_id(mut self, id: impl Into<ComponentId>) -> Self {
        self.id = id.into();
        self
    }

    pub fn label(mut self, label: impl Into<SharedString>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// A loading button is inert and pulses its label.
    pub fn loading(mut self, loading: bool) -> Self {
        self.loading = loading;
        self
    }

    pub fn full_width(mut self, value: bool) -> Self {
        self.full_width = value;
        self
    }

    pub fn start_icon(mut self, content: impl IntoElement + 'static) -> Self {
        self.start_icon = Some(Box::new(|| content.into_any_element()));
        self
    }

    pub fn end_icon(mut self, content: impl IntoElement + 'static) -> Self {
        self.end_icon = Some(Box::new(|| content.into_any_element()));
        self
    }

    pub fn on_click(
        mut self,
        handler: impl Fn(&ClickEvent, &mut Window, &mut gpui::App) + 'static,
    ) -> Self {
        self.on_click = Some(Rc::new(handler));
        self
    }

    fn is_inert(&self) -> bool {
        self.disabled || self.loading
    }
}

crate::impl_variant_color_size!(Button);
crate::impl_disableable!(Button);
crate::impl_styled!(Button);

impl Accessible for Button {
    fn role(&self) -> Role {
        Role::Button
    }

    fn accessible_label(&self) -> Option<&str> {
        self.label.as_ref().map(|label| label.as_ref())
    }
}

impl RenderOnce for Button {
    fn render(mut self, _window: &mut Window, cx: &mut gpui::App) -> impl IntoElement {
        self.theme.sync_from_provider(cx);
        let preset = size_preset(ComponentKind::Button, self.size);
        let record = self.style_record();
        let inert = self.is_inert();

        let mut root = div()
            .id(self.id.clone())
            .flex()
            .flex_row()
            .items_center()
            .justify_center()
            .gap(px(preset.gap))
            .h(px(preset.height))
            .px(px(preset.padding_x))
            .text_size(px(preset.font_size))
            .font_weight(gpui::FontWeight::MEDIUM)
            .rounded(px(self.theme.radius.sm));
        if self.full_width {
            root = root.w_full();
        }
        root = apply_variant_surface(root, &record, self.disabled);

        if let Some(icon) = self.start_icon.take() {
            root = root.child(div().size(px(preset.icon_size)).child(icon()));
        }
        if let Some(label) = self.label.clone() {
            if self.loading {
                root = root.child(
                    div()
                        .child(label)
                        .with_keyframes(self.id.slot("loading"), PULSE, DURATIONS.complex * 3),
                );
            } else {
                root = root.child(label);
            }
        }
        if let Some(icon) = self.end_icon.take() {
            root = root.child(div().size(px(preset.icon_size)).child(icon()));
        }

        if !inert {
            if let Some(handler) = self.on_click.clone() {
                root = bind_activation(root, handler);
            }
        }

        root = root.font_family(self.theme.font_family);
        gpui::Refineable::refine(gpui::Styled::style(&mut root), &self.style);
        root
    }
}
