use std::rc::Rc;

use gpui::{ClickEvent, InteractiveElement, StatefulInteractiveElement, Styled, Window, px};

use crate::a11y::Key;
use crate::color::to_hsla;
use crate::presets::VariantStyle;

pub type PressHandler = Rc<dyn Fn(&ClickEvent, &mut Window, &mut gpui::App)>;
pub type ToggleHandler = Rc<dyn Fn(bool, &mut Window, &mut gpui::App)>;
pub type CloseHandler = Rc<dyn Fn(&mut Window, &mut gpui::App)>;

#[derive(Clone, Default)]
pub struct InteractionStyles {
    pub hover: Option<gpui::StyleRefinement>,
    pub active: Option<gpui::StyleRefinement>,
    pub focus: Option<gpui::StyleRefinement>,
}

impl InteractionStyles {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn hover(mut self, value: gpui::StyleRefinement) -> Self {
        self.hover = Some(value);
        self
    }

    pub fn active(mut self, value: gpui::StyleRefinement) -> Self {
        self.active = Some(value);
        self
    }

    pub fn focus(mut self, value: gpui::StyleRefinement) -> Self {
        self.focus = Some(value);
        self
    }
}

pub fn interaction_style(
    apply: impl FnOnce(gpui::StyleRefinement) -> gpui::StyleRefinement,
) -> gpui::StyleRefinement {
    apply(gpui::StyleRefinement::default())
}

pub fn apply_interaction_styles<T>(mut node: T, styles: InteractionStyles) -> T
where
    T: StatefulInteractiveElement,
{
    if let Some(hover_style) = styles.hover {
        node = node.hover(move |_| hover_style);
    }

    if let Some(active_style) = styles.active {
        node = node.active(move |_| active_style);
    }

    if let Some(focus_style) = styles.focus {
        node = node.focus(move |_| focus_style);
    }

    node
}

pub fn variant_interaction_styles(style: &VariantStyle) -> InteractionStyles {
    let hover_bg = to_hsla(style.hover.background_color);
    let hover_fg = to_hsla(style.hover.color);
    let hover_border = to_hsla(style.hover.border_color);
    let active_bg = to_hsla(style.active.background_color);
    let active_fg = to_hsla(style.active.color);
    let active_border = to_hsla(style.active.border_color);
    let focus_border = to_hsla(style.focus_outline.color);

    InteractionStyles::new()
        .hover(interaction_style(move |s| {
            s.bg(hover_bg).text_color(hover_fg).border_color(hover_border)
        }))
        .active(interaction_style(move |s| {
            s.bg(active_bg)
                .text_color(active_fg)
                .border_color(active_border)
        }))
        .focus(interaction_style(move |s| s.border_color(focus_border)))
}

/// Paints a variant surface. Disabled surfaces get no interaction states.
pub fn apply_variant_surface<T>(node: T, style: &VariantStyle, disabled: bool) -> T
where
    T: Styled + StatefulInteractiveElement,
{
    if disabled {
        return node
            .bg(to_hsla(style.disabled.background_color))
            .text_color(to_hsla(style.disabled.color))
            .border(px(style.border_width))
            .border_color(to_hsla(style.disabled.border_color))
            .opacity(style.disabled.opacity)
            .cursor_default();
    }

    apply_interaction_styles(
        apply_variant_colors(node, style),
        variant_interaction_styles(style),
    )
}

/// Paints the resting colors of a variant, with no interaction states.
pub fn apply_variant_colors<T: Styled>(node: T, style: &VariantStyle) -> T {
    node.bg(to_hsla(style.background_color))
        .text_color(to_hsla(style.color))
        .border(px(style.border_width))
        .border_color(to_hsla(style.border_color))
}

/// Wires click and keyboard activation (Enter/Space) to one handler.
pub fn bind_activation<T>(node: T, handler: PressHandler) -> T
where
    T: Styled + StatefulInteractiveElement,
{
    let click_handler = handler.clone();
    node.focusable()
        .cursor_pointer()
        .on_click(move |event, window, cx| {
            (click_handler)(event, window, cx);
        })
        .on_key_down(move |event, window, cx| {
            if !Key::parse(&event.keystroke.key).is_some_and(Key::is_activation) {
                return;
            }
            (handler)(&ClickEvent::default(), window, cx);
            cx.stop_propagation();
        })
}

/// Wires Escape to `on_close`.
pub fn bind_escape<T>(node: T, on_close: CloseHandler) -> T
where
    T: InteractiveElement,
{
    node.on_key_down(move |event, window, cx| {
        if Key::parse(&event.keystroke.key) == Some(Key::Escape) {
            (on_close)(window, cx);
            cx.stop_propagation();
        }
    })
}
