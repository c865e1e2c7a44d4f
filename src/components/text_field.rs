use std::rc::Rc;

use gpui::{
    AnyElement, ClickEvent, InteractiveElement, IntoElement, ParentElement, RenderOnce,
    SharedString, StatefulInteractiveElement, Styled, Window, div, px,
};

use crate::color::to_hsla;
use crate::contracts::{Accessible, Role};
use crate::id::ComponentId;
use crate::presets::VariantStyle;
use crate::style::{SemanticColor, Size, Variant};
use crate::tokens::sizing::{ComponentKind, SPACE, size_preset};
use crate::tokens::typography::{TextVariant, text_style};

use super::utils::{PressHandler, apply_variant_surface};

type SlotRenderer = Box<dyn FnOnce() -> AnyElement>;

/// Labelled input chrome. The editable element itself is supplied through
/// [`TextField::input`]; without one the field shows `value` or the placeholder.
#[derive(IntoElement)]
pub struct TextField {
    id: ComponentId,
    label: Option<SharedString>,
    placeholder: Option<SharedString>,
    value: Option<SharedString>,
    helper_text: Option<SharedString>,
    error: Option<SharedString>,
    required: bool,
    disabled: bool,
    start_adornment: Option<SlotRenderer>,
    end_adornment: Option<SlotRenderer>,
    input: Option<SlotRenderer>,
    variant: Variant,
    color: SemanticColor,
    size: Size,
    theme: crate::theme::LocalTheme,
    style: gpui::StyleRefinement,
    on_click: Option<PressHandler>,
}

impl TextField {
    #[track_caller]
    pub fn new() -> Self {
        Self {
            id: ComponentId::auto("text-field"),
            label: None,
            placeholder: None,
            value: None,
            helper_text: None,
            error: None,
            required: false,
            disabled: false,
            start_adornment: None,
            end_adornment: None,
            input: None,
            variant: Variant::Outlined,
            color: SemanticColor::Primary,
            size: Size::Md,
            theme: crate::theme::LocalTheme::default(),
            style: gpui::StyleRefinement::default(),
            on_click: None,
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

    pub fn placeholder(mut self, value: impl Into<SharedString>) -> Self {
        self.placeholder = Some(value.into());
        self
    }

    pub fn value(mut self, value: impl Into<SharedString>) -> Self {
        self.value = Some(value.into());
        self
    }

    pub fn helper_text(mut self, value: impl Into<SharedString>) -> Self {
        self.helper_text = Some(value.into());
        self
    }

    /// Error message; replaces the helper text and paints the field in danger.
    pub fn error(mut self, value: impl Into<SharedString>) -> Self {
        self.error = Some(value.into());
        self
    }

    pub fn required(mut self, value: bool) -> Self {
        self.required = value;
        self
    }

    pub fn disabled(mut self, value: bool) -> Self {
        self.disabled = value;
        self
    }

    pub fn start_adornment(mut self, content: impl IntoElement + 'static) -> Self {
        self.start_adornment = Some(Box::new(|| content.into_any_element()));
        self
    }

    pub fn end_adornment(mut self, content: impl IntoElement + 'static) -> Self {
        self.end_adornment = Some(Box::new(|| content.into_any_element()));
        self
    }

    pub fn input(mut self, content: impl IntoElement + 'static) -> Self {
        self.input = Some(Box::new(|| content.into_any_element()));
        self
    }

    /// Fired when the field chrome is clicked, typically to focus the editor.
    pub fn on_click(
        mut self,
        handler: impl Fn(&ClickEvent, &mut Window, &mut gpui::App) + 'static,
    ) -> Self {
        self.on_click = Some(Rc::new(handler));
        self
    }

    pub fn has_error(&self) -> bool {
        self.error.is_some()
    }

    /// Colors actually painted: the danger palette while an error is shown.
    pub fn effective_style(&self) -> VariantStyle {
        let color = if self.has_error() {
            SemanticColor::Danger
        } else {
            self.color
        };
        self.theme.variant_style(self.variant, color)
    }

    /// Line shown under the field: the error if any, else the helper text.
    pub fn supporting_text(&self) -> Option<&SharedString> {
        self.error.as_ref().or(self.helper_text.as_ref())
    }
}

crate::impl_variant_color_size!(TextField);
crate::impl_disableable!(TextField);
crate::impl_styled!(TextField);

impl Accessible for TextField {
    fn role(&self) -> Role {
        Role::Textbox
    }

    fn accessible_label(&self) -> Option<&str> {
        self.label
            .as_ref()
            .or(self.placeholder.as_ref())
            .map(|label| label.as_ref())
    }
}

impl RenderOnce for TextField {
    fn render(mut self, _window: &mut Window, cx: &mut gpui::App) -> impl IntoElement {
        self.theme.sync_from_provider(cx);
        let preset = size_preset(ComponentKind::Input, self.size);
        let record = self.effective_style();
        let caption = text_style(TextVariant::Caption);
        let secondary = to_hsla(self.theme.common.text.secondary);

        let mut root = div()
            .id(self.id.clone())
            .flex()
            .flex_col()
            .gap(px(SPACE.xs));

        if let Some(label) = self.label.clone() {
            let mut label_row = div()
                .flex()
                .flex_row()
                .gap(px(2.0))
                .text_size(px(preset.font_size))
                .text_color(to_hsla(self.theme.common.text.primary))
                .child(label);
            if self.required {
                label_row = label_row.child(
                    div()
                        .text_color(to_hsla(self.theme.scale(SemanticColor::Danger).main))
                        .child("*"),
                );
            }
            root = root.child(label_row);
        }

        let field = div()
            .id(self.id.slot("field"))
            .flex()
            .flex_row()
            .items_center()
            .gap(px(preset.gap))
            .h(px(preset.height))
            .px(px(preset.padding_x))
            .rounded(px(self.theme.radius.sm))
            .text_size(px(preset.font_size));
        let mut field = apply_variant_surface(field, &record, self.disabled);

        if let Some(adornment) = self.start_adornment.take() {
            field = field.child(div().flex_none().text_color(secondary).child(adornment()));
        }
        field = match (self.input.take(), self.value.clone(), self.placeholder.clone()) {
            (Some(input), _, _) => field.child(div().flex_1().child(input())),
            (None, Some(value), _) if !value.is_empty() => {
                field.child(div().flex_1().child(value))
            }
            (None, _, Some(placeholder)) => {
                field.child(div().flex_1().text_color(secondary).child(placeholder))
            }
            (None, _, None) => field.child(div().flex_1()),
        };
        if let Some(adornment) = self.end_adornment.take() {
            field = field.child(div().flex_none().text_color(secondary).child(adornment()));
        }

        if !self.disabled {
            field = field.cursor_text();
            if let Some(handler) = self.on_click.clone() {
                field = field.on_click(move |event, window, cx| (handler)(event, window, cx));
            }
        }
        root = root.child(field);

        if let Some(text) = self.supporting_text().cloned() {
            let color = if self.has_error() {
                to_hsla(record.border_color)
            } else {
                secondary
            };
            root = root.child(
                div()
                    .id(self.id.slot("supporting-text"))
                    .text_size(px(caption.font_size))
                    .line_height(px(caption.line_height_px()))
                    .text_color(color)
                    .child(text),
            );
        }

        root = root.font_family(self.theme.font_family);
        gpui::Refineable::refine(gpui::Styled::style(&mut root), &self.style);
        root
    }
}
