use std::rc::Rc;

use gpui::{
    ClickEvent, InteractiveElement, IntoElement, ParentElement, RenderOnce, SharedString,
    StatefulInteractiveElement, Styled, Window, div, px,
};

use crate::contracts::{Accessible, Role};
use crate::id::ComponentId;
use crate::style::{SemanticColor, Size, Variant};
use crate::tokens::sizing::{ComponentKind, size_preset};

use super::utils::{CloseHandler, PressHandler, apply_variant_surface, bind_activation};

#[derive(IntoElement)]
pub struct Chip {
    id: ComponentId,
    label: SharedString,
    disabled: bool,
    variant: Variant,
    color: SemanticColor,
    size: Size,
    theme: crate::theme::LocalTheme,
    style: gpui::StyleRefinement,
    on_click: Option<PressHandler>,
    on_delete: Option<CloseHandler>,
}

impl Chip {
    #[track_caller]
    pub fn new(label: impl Into<SharedString>) -> Self {
        Self {
            id: ComponentId::auto("chip"),
            label: label.into(),
            disabled: false,
            variant: Variant::Soft,
            color: SemanticColor::Neutral,
            size: Size::Md,
            theme: crate::theme::LocalTheme::default(),
            style: gpui::StyleRefinement::default(),
            on_click: None,
            on_delete: None,
        }
    }

    pub fn with_id(mut self, id: impl Into<ComponentId>) -> Self {
        self.id = id.into();
        self
    }

    pub fn disabled(mut self, value: bool) -> Self {
        self.disabled = value;
        self
    }

    pub fn on_click(
        mut self,
        handler: impl Fn(&ClickEvent, &mut Window, &mut gpui::App) + 'static,
    ) -> Self {
        self.on_click = Some(Rc::new(handler));
        self
    }

    /// Adds a trailing delete control.
    pub fn on_delete(mut self, handler: impl Fn(&mut Window, &mut gpui::App) + 'static) -> Self {
        self.on_delete = Some(Rc::new(handler));
        self
    }

    pub fn is_clickable(&self) -> bool {
        self.on_click.is_some()
    }
}

crate::impl_variant_color_size!(Chip);
crate::impl_disableable!(Chip);
crate::impl_styled!(Chip);

impl Accessible for Chip {
    fn role(&self) -> Role {
        if self.is_clickable() {
            Role::Button
        } else {
            Role::Generic
        }
    }

    fn accessible_label(&self) -> Option<&str> {
        Some(self.label.as_ref())
    }
}

impl RenderOnce for Chip {
    fn render(mut self, _window: &mut Window, cx: &mut gpui::App) -> impl IntoElement {
        self.theme.sync_from_provider(cx);
        let preset = size_preset(ComponentKind::Chip, self.size);
        let record = self.style_record();

        let root = div()
            .id(self.id.clone())
            .flex()
            .flex_row()
            .flex_none()
            .items_center()
            .gap(px(preset.gap))
            .h(px(preset.height))
            .px(px(preset.padding_x))
            .rounded_full()
            .text_size(px(preset.font_size))
            .child(self.label.clone());
        let mut root = apply_variant_surface(root, &record, self.disabled);

        if let Some(on_delete) = self.on_delete.clone() {
            let mut delete = div()
                .id(self.id.slot("delete"))
                .flex()
                .items_center()
                .justify_center()
                .size(px(preset.icon_size))
                .rounded_full()
                .child("×");
            if !self.disabled {
                delete = delete.cursor_pointer().on_click(move |_, window, cx| {
                    cx.stop_propagation();
                    (on_delete)(window, cx);
                });
            }
            root = root.child(delete);
        }

        if !self.disabled {
            if let Some(handler) = self.on_click.clone() {
                root = bind_activation(root, handler);
            }
        }

        root = root.font_family(self.theme.font_family);
        gpui::Refineable::refine(gpui::Styled::style(&mut root), &self.style);
        root
    }
}
