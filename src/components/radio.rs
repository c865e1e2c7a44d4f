use std::rc::Rc;

use gpui::{
    ClickEvent, InteractiveElement, IntoElement, ParentElement, RenderOnce, SharedString, Styled,
    Window, div, px,
};

use crate::a11y::Key;
use crate::color::to_hsla;
use crate::contracts::{Accessible, Role};
use crate::id::ComponentId;
use crate::style::{SemanticColor, Size, Variant};
use crate::tokens::sizing::{ComponentKind, size_preset};

use super::utils::{apply_variant_colors, bind_activation};

type SelectHandler = Rc<dyn Fn(&mut Window, &mut gpui::App)>;
type ValueHandler = Rc<dyn Fn(SharedString, &mut Window, &mut gpui::App)>;

#[derive(IntoElement)]
pub struct Radio {
    id: ComponentId,
    label: Option<SharedString>,
    checked: bool,
    disabled: bool,
    variant: Variant,
    color: SemanticColor,
    size: Size,
    theme: crate::theme::LocalTheme,
    style: gpui::StyleRefinement,
    on_select: Option<SelectHandler>,
}

impl Radio {
    #[track_caller]
    pub fn new() -> Self {
        Self {
            id: ComponentId::auto("radio"),
            label: None,
            checked: false,
            disabled: false,
            variant: Variant::Solid,
            color: SemanticColor::Primary,
            size: Size::Md,
            theme: crate::theme::LocalTheme::default(),
            style: gpui::StyleRefinement::default(),
            on_select: None,
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

    /// Fired on activation of an unchecked radio.
    pub fn on_select(mut self, handler: impl Fn(&mut Window, &mut gpui::App) + 'static) -> Self {
        self.on_select = Some(Rc::new(handler));
        self
    }

    /// Whether the radio takes keyboard focus. A checked radio stays focusable.
    fn is_focusable(&self) -> bool {
        !self.disabled && self.on_select.is_some()
    }

    fn activation_selects(&self) -> bool {
        self.is_focusable() && !self.checked
    }
}

crate::impl_variant_color_size!(Radio);
crate::impl_disableable!(Radio);
crate::impl_styled!(Radio);

impl Accessible for Radio {
    fn role(&self) -> Role {
        Role::Radio
    }

    fn accessible_label(&self) -> Option<&str> {
        self.label.as_ref().map(|label| label.as_ref())
    }
}

impl RenderOnce for Radio {
    fn render(mut self, _window: &mut Window, cx: &mut gpui::App) -> impl IntoElement {
        self.theme.sync_from_provider(cx);
        let preset = size_preset(ComponentKind::Radio, self.size);
        let record = self.style_record();

        let ring = div()
            .id(self.id.slot("control"))
            .flex()
            .flex_none()
            .items_center()
            .justify_center()
            .size(px(preset.height))
            .rounded_full();
        let ring = if self.checked {
            apply_variant_colors(ring, &record).child(
                div()
                    .size(px(preset.icon_size))
                    .rounded_full()
                    .bg(to_hsla(record.color)),
            )
        } else {
            let neutral = self
                .theme
                .variant_style(Variant::Outlined, SemanticColor::Neutral);
            apply_variant_colors(ring, &neutral)
        };

        let mut root = div()
            .id(self.id.clone())
            .flex()
            .flex_row()
            .items_center()
            .gap(px(preset.gap))
            .text_size(px(preset.font_size))
            .text_color(to_hsla(self.theme.common.text.primary))
            .child(ring);
        if let Some(label) = self.label.clone() {
            root = root.child(label);
        }

        if self.disabled {
            root = root.opacity(record.disabled.opacity).cursor_default();
        } else if let Some(handler) = self.on_select.clone() {
            let selects = self.activation_selects();
            root = bind_activation(
                root,
                Rc::new(
                    move |_: &ClickEvent, window: &mut Window, cx: &mut gpui::App| {
                        if selects {
                            (handler)(window, cx)
                        }
                    },
                ),
            );
        }

        root = root.font_family(self.theme.font_family);
        gpui::Refineable::refine(gpui::Styled::style(&mut root), &self.style);
        root
    }
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub enum GroupOrientation {
    #[default]
    Vertical,
    Horizontal,
}

/// Value selected by a navigation key, wrapping at both ends.
///
/// Home and End jump to the first and last option. Non-navigation keys and
/// empty groups select nothing.
pub fn navigate_options(
    values: &[SharedString],
    current: Option<&str>,
    key: Key,
) -> Option<usize> {
    if values.is_empty() || !key.is_navigation() {
        return None;
    }
    let last = values.len() - 1;
    let position =
        current.and_then(|current| values.iter().position(|value| &**value == current));
    let index = match key {
        Key::Home => 0,
        Key::End => last,
        Key::ArrowDown | Key::ArrowRight => match position {
            Some(index) if index < last => index + 1,
            _ => 0,
        },
        _ => match position {
            Some(0) | None => last,
            Some(index) => index - 1,
        },
    };
    Some(index)
}

/// A set of radios sharing one value. Arrow keys move the selection.
#[derive(IntoElement)]
pub struct RadioGroup {
    id: ComponentId,
    label: Option<SharedString>,
    options: Vec<(SharedString, SharedString)>,
    value: Option<SharedString>,
    disabled: bool,
    orientation: GroupOrientation,
    variant: Variant,
    color: SemanticColor,
    size: Size,
    theme: crate::theme::LocalTheme,
    style: gpui::StyleRefinement,
    on_change: Option<ValueHandler>,
}

impl RadioGroup {
    #[track_caller]
    pub fn new() -> Self {
        Self {
            id: ComponentId::auto("radio-group"),
            label: None,
            options: Vec::new(),
            value: None,
            disabled: false,
            orientation: GroupOrientation::Vertical,
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

    pub fn option(
        mut self,
        value: impl Into<SharedString>,
        label: impl Into<SharedString>,
    ) -> Self {
        self.options.push((value.into(), label.into()));
        self
    }

    pub fn value(mut self, value: impl Into<SharedString>) -> Self {
        self.value = Some(value.into());
        self
    }

    pub fn disabled(mut self, value: bool) -> Self {
        self.disabled = value;
        self
    }

    pub fn orientation(mut self, value: GroupOrientation) -> Self {
        self.orientation = value;
        self
    }

    pub fn on_change(
        mut self,
        handler: impl Fn(SharedString, &mut Window, &mut gpui::App) + 'static,
    ) -> Self {
        self.on_change = Some(Rc::new(handler));
        self
    }
}

crate::impl_variant_color_size!(RadioGroup);
crate::impl_disableable!(RadioGroup);
crate::impl_styled!(RadioGroup);

impl Accessible for RadioGroup {
    fn role(&self) -> Role {
        Role::Group
    }

    fn accessible_label(&self) -> Option<&str> {
        self.label.as_ref().map(|label| label.as_ref())
    }
}

impl RenderOnce for RadioGroup {
    fn render(mut self, _window: &mut Window, cx: &mut gpui::App) -> impl IntoElement {
        self.theme.sync_from_provider(cx);
        let preset = size_preset(ComponentKind::Radio, self.size);

        let mut root = div().id(self.id.clone()).flex().gap(px(preset.gap * 1.5));
        root = match self.orientation {
            GroupOrientation::Vertical => root.flex_col(),
            GroupOrientation::Horizontal => root.flex_row().flex_wrap(),
        };

        for (index, (value, label)) in self.options.iter().enumerate() {
            let mut radio = Radio::new()
                .with_id(format!("{}-option-{index}", self.id))
                .label(label.clone())
                .checked(self.value.as_ref() == Some(value))
                .disabled(self.disabled)
                .variant(self.variant)
                .color(self.color)
                .size(self.size);
            if let Some(handler) = self.on_change.clone() {
                let value = value.clone();
                radio = radio.on_select(move |window, cx| (handler)(value.clone(), window, cx));
            }
            root = root.child(radio);
        }

        if !self.disabled {
            if let Some(handler) = self.on_change.clone() {
                let values = self
                    .options
                    .iter()
                    .map(|(value, _)| value.clone())
                    .collect::<Vec<_>>();
                let current = self.value.clone();
                root = root.on_key_down(move |event, window, cx| {
                    let Some(key) = Key::parse(&event.keystroke.key) else {
                        return;
                    };
                    if let Some(index) = navigate_options(&values, current.as_deref(), key) {
                        (handler)(values[index].clone(), window, cx);
                        cx.stop_propagation();
                    }
                });
            }
        }

        root = root.font_family(self.theme.font_family);
        gpui::Refineable::refine(gpui::Styled::style(&mut root), &self.style);
        root
    }
}
