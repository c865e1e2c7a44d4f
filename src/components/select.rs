use std::rc::Rc;

use gpui::{
    ClickEvent, InteractiveElement, IntoElement, ParentElement, RenderOnce, SharedString,
    StatefulInteractiveElement, Styled, Window, div, px,
};

use crate::a11y::Key;
use crate::color::to_hsla;
use crate::contracts::{Accessible, Role};
use crate::id::ComponentId;
use crate::motion::MotionConfig;
use crate::style::{SemanticColor, Size, Variant};
use crate::tokens::sizing::{ComponentKind, SPACE, size_preset};

use super::overlay::panel_background;
use super::popup::{PopupPlacement, anchored_host};
use super::radio::navigate_options;
use super::transition::TransitionExt;
use super::utils::{ToggleHandler, apply_variant_surface};

type ValueHandler = Rc<dyn Fn(SharedString, &mut Window, &mut gpui::App)>;

/// Effect of a key pressed on a focused select trigger.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SelectKeyAction {
    SetOpen(bool),
    /// Index into the enabled option values.
    Choose(usize),
}

/// Maps a key to its effect. Enter/Space toggle the menu, Escape closes an
/// open one, and navigation keys move through `values`.
pub fn select_key_action(
    values: &[SharedString],
    current: Option<&str>,
    opened: bool,
    key: Key,
) -> Option<SelectKeyAction> {
    if key.is_activation() {
        return Some(SelectKeyAction::SetOpen(!opened));
    }
    if key == Key::Escape {
        return opened.then_some(SelectKeyAction::SetOpen(false));
    }
    navigate_options(values, current, key).map(SelectKeyAction::Choose)
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SelectOption {
    pub value: SharedString,
    pub label: SharedString,
    pub disabled: bool,
}

impl SelectOption {
    pub fn new(value: impl Into<SharedString>, label: impl Into<SharedString>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
            disabled: false,
        }
    }

    pub fn disabled(mut self, value: bool) -> Self {
        self.disabled = value;
        self
    }
}

#[derive(IntoElement)]
pub struct Select {
    id: ComponentId,
    label: Option<SharedString>,
    placeholder: SharedString,
    options: Vec<SelectOption>,
    value: Option<SharedString>,
    opened: bool,
    disabled: bool,
    variant: Variant,
    color: SemanticColor,
    size: Size,
    motion: Option<MotionConfig>,
    theme: crate::theme::LocalTheme,
    style: gpui::StyleRefinement,
    on_change: Option<ValueHandler>,
    on_open_change: Option<ToggleHandler>,
}

impl Select {
    #[track_caller]
    pub fn new() -> Self {
        Self {
            id: ComponentId::auto("select"),
            label: None,
            placeholder: SharedString::default(),
            options: Vec::new(),
            value: None,
            opened: false,
            disabled: false,
            variant: Variant::Outlined,
            color: SemanticColor::Primary,
            size: Size::Md,
            motion: None,
            theme: crate::theme::LocalTheme::default(),
            style: gpui::StyleRefinement::default(),
            on_change: None,
            on_open_change: None,
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
        self.placeholder = value.into();
        self
    }

    pub fn option(mut self, option: SelectOption) -> Self {
        self.options.push(option);
        self
    }

    pub fn options(mut self, options: impl IntoIterator<Item = SelectOption>) -> Self {
        self.options.extend(options);
        self
    }

    pub fn value(mut self, value: impl Into<SharedString>) -> Self {
        self.value = Some(value.into());
        self
    }

    pub fn opened(mut self, value: bool) -> Self {
        self.opened = value;
        self
    }

    pub fn disabled(mut self, value: bool) -> Self {
        self.disabled = value;
        self
    }

    pub fn on_change(
        mut self,
        handler: impl Fn(SharedString, &mut Window, &mut gpui::App) + 'static,
    ) -> Self {
        self.on_change = Some(Rc::new(handler));
        self
    }

    pub fn on_open_change(
        mut self,
        handler: impl Fn(bool, &mut Window, &mut gpui::App) + 'static,
    ) -> Self {
        self.on_open_change = Some(Rc::new(handler));
        self
    }

    /// Label of the selected option, or the placeholder.
    pub fn display_text(&self) -> SharedString {
        self.value
            .as_ref()
            .and_then(|value| self.options.iter().find(|option| &option.value == value))
            .map(|option| option.label.clone())
            .unwrap_or_else(|| self.placeholder.clone())
    }

    fn handles_keys(&self) -> bool {
        !self.disabled && (self.on_change.is_some() || self.on_open_change.is_some())
    }

    fn enabled_values(&self) -> Vec<SharedString> {
        self.options
            .iter()
            .filter(|option| !option.disabled)
            .map(|option| option.value.clone())
            .collect()
    }

    fn render_menu(&self, width: f32) -> gpui::AnyElement {
        let record = self.style_record();
        let preset = size_preset(ComponentKind::Input, self.size);
        let hover_bg = to_hsla(self.theme.scale(self.color).alpha8);
        let selected_bg = to_hsla(self.theme.scale(self.color).alpha16);

        let mut menu = div()
            .id(self.id.slot("menu"))
            .flex()
            .flex_col()
            .min_w(px(width))
            .py(px(SPACE.xs))
            .rounded(px(self.theme.radius.sm))
            .bg(panel_background(&record, &self.theme))
            .font_family(self.theme.font_family)
            .text_color(to_hsla(self.theme.common.text.primary))
            .border(px(1.0))
            .border_color(to_hsla(self.theme.common.divider))
            .text_size(px(preset.font_size));

        if let Some(handler) = self.on_open_change.clone() {
            menu = menu.on_mouse_down_out(move |_, window, cx| (handler)(false, window, cx));
        }

        for (index, option) in self.options.iter().enumerate() {
            let selected = self.value.as_ref() == Some(&option.value);
            let mut item = div()
                .id(self.id.slot(&format!("option-{index}")))
                .h(px(preset.height))
                .px(px(preset.padding_x))
                .flex()
                .items_center()
                .child(option.label.clone());
            if selected {
                item = item.bg(selected_bg);
            }
            if option.disabled {
                item = item.opacity(record.disabled.opacity).cursor_default();
            } else {
                item = item.cursor_pointer().hover(move |style| style.bg(hover_bg));
                let value = option.value.clone();
                let on_change = self.on_change.clone();
                let on_open_change = self.on_open_change.clone();
                item = item.on_click(
                    move |_: &ClickEvent, window: &mut Window, cx: &mut gpui::App| {
                        if let Some(handler) = on_change.as_ref() {
                            (handler)(value.clone(), window, cx);
                        }
                        if let Some(handler) = on_open_change.as_ref() {
                            (handler)(false, window, cx);
                        }
                    },
                );
            }
            menu = menu.child(item);
        }

        let motion = self.motion.unwrap_or(self.theme.motion);
        menu.with_enter_transition(self.id.slot("menu-enter"), motion)
            .into_any_element()
    }
}

crate::impl_variant_color_size!(Select);
crate::impl_disableable!(Select);
crate::impl_openable!(Select);
crate::impl_motion_aware!(Select);
crate::impl_styled!(Select);

impl Accessible for Select {
    fn role(&self) -> Role {
        Role::Combobox
    }

    fn accessible_label(&self) -> Option<&str> {
        self.label.as_ref().map(|label| label.as_ref())
    }
}

impl RenderOnce for Select {
    fn render(mut self, _window: &mut Window, cx: &mut gpui::App) -> impl IntoElement {
        self.theme.sync_from_provider(cx);
        let preset = size_preset(ComponentKind::Input, self.size);
        let record = self.style_record();
        let opened = self.opened && !self.disabled;
        let has_value = self
            .value
            .as_ref()
            .is_some_and(|value| self.options.iter().any(|option| &option.value == value));
        let width = preset.height * 6.0;

        let text_color = if has_value {
            to_hsla(record.color)
        } else {
            to_hsla(self.theme.common.text.secondary)
        };
        let trigger = div()
            .id(self.id.slot("trigger"))
            .relative()
            .flex()
            .flex_row()
            .items_center()
            .justify_between()
            .gap(px(preset.gap))
            .min_w(px(width))
            .h(px(preset.height))
            .px(px(preset.padding_x))
            .rounded(px(self.theme.radius.sm))
            .text_size(px(preset.font_size));
        let mut trigger = apply_variant_surface(trigger, &record, self.disabled)
            .child(div().text_color(text_color).child(self.display_text()))
            .child(div().child(if opened { "▴" } else { "▾" }));

        if !self.disabled {
            trigger = trigger.focusable().cursor_pointer();
            if let Some(handler) = self.on_open_change.clone() {
                trigger = trigger.on_click(
                    move |_: &ClickEvent, window: &mut Window, cx: &mut gpui::App| {
                        (handler)(!opened, window, cx);
                    },
                );
            }
            if self.handles_keys() {
                let values = self.enabled_values();
                let current = self.value.clone();
                let on_change = self.on_change.clone();
                let on_open_change = self.on_open_change.clone();
                trigger = trigger.on_key_down(move |event, window, cx| {
                    let Some(key) = Key::parse(&event.keystroke.key) else {
                        return;
                    };
                    match select_key_action(&values, current.as_deref(), opened, key) {
                        Some(SelectKeyAction::SetOpen(next)) => {
                            let Some(handler) = on_open_change.as_ref() else {
                                return;
                            };
                            (handler)(next, window, cx);
                        }
                        Some(SelectKeyAction::Choose(index)) => {
                            let Some(handler) = on_change.as_ref() else {
                                return;
                            };
                            (handler)(values[index].clone(), window, cx);
                        }
                        None => return,
                    }
                    cx.stop_propagation();
                });
            }
        }

        if opened {
            trigger = trigger.child(anchored_host(
                &self.id,
                "menu-host",
                PopupPlacement::Bottom,
                SPACE.xs,
                self.render_menu(width),
                20,
            ));
        }

        let mut root = div().id(self.id.clone()).flex().flex_col().gap(px(SPACE.xs));
        if let Some(label) = self.label.clone() {
            root = root.child(
                div()
                    .text_size(px(preset.font_size))
                    .text_color(to_hsla(self.theme.common.text.primary))
                    .child(label),
            );
        }
        root = root.child(trigger);

        root = root.font_family(self.theme.font_family);
        gpui::Refineable::refine(gpui::Styled::style(&mut root), &self.style);
        root
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fruit() -> Select {
        Select::new()
            .placeholder("Pick a fruit")
            .option(SelectOption::new("apple", "Apple"))
            .option(SelectOption::new("pear", "Pear").disabled(true))
            .option(SelectOption::new("plum", "Plum"))
    }

    #[test]
    fn display_text_falls_back_to_the_placeholder() {
        assert_eq!(fruit().display_text(), SharedString::from("Pick a fruit"));
        assert_eq!(fruit().value("plum").display_text(), SharedString::from("Plum"));
        assert_eq!(fruit().value("kiwi").display_text(), SharedString::from("Pick a fruit"));
    }

    #[test]
    fn keyboard_skips_disabled_options() {
        let values = fruit().enabled_values();
        assert_eq!(values, vec![SharedString::from("apple"), SharedString::from("plum")]);
        assert_eq!(navigate_options(&values, Some("apple"), Key::ArrowDown), Some(1));
    }

    #[test]
    fn arrow_keys_choose_without_an_open_change_handler() {
        let select = fruit().value("apple").on_change(|_, _, _| {});
        assert!(select.handles_keys());
        let values = select.enabled_values();
        assert_eq!(
            select_key_action(&values, Some("apple"), false, Key::ArrowDown),
            Some(SelectKeyAction::Choose(1))
        );
        assert_eq!(
            select_key_action(&values, Some("apple"), false, Key::End),
            Some(SelectKeyAction::Choose(1))
        );
        assert_eq!(
            select_key_action(&values, Some("apple"), false, Key::Home),
            Some(SelectKeyAction::Choose(0))
        );
    }

    #[test]
    fn activation_toggles_and_escape_only_closes() {
        let values = fruit().enabled_values();
        assert_eq!(
            select_key_action(&values, None, false, Key::Enter),
            Some(SelectKeyAction::SetOpen(true))
        );
        assert_eq!(
            select_key_action(&values, None, true, Key::Space),
            Some(SelectKeyAction::SetOpen(false))
        );
        assert_eq!(
            select_key_action(&values, None, true, Key::Escape),
            Some(SelectKeyAction::SetOpen(false))
        );
        assert_eq!(select_key_action(&values, None, false, Key::Escape), None);
        assert_eq!(select_key_action(&values, None, false, Key::Tab), None);
    }

    #[test]
    fn keys_are_ignored_without_handlers_or_when_disabled() {
        assert!(!fruit().handles_keys());
        assert!(!fruit().on_change(|_, _, _| {}).disabled(true).handles_keys());
        assert!(fruit().on_open_change(|_, _, _| {}).handles_keys());
    }

    #[test]
    fn reports_the_combobox_role() {
        assert_eq!(fruit().label("Fruit").role(), Role::Combobox);
    }
}
