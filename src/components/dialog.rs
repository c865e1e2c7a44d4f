use std::rc::Rc;

use gpui::{
    AnyElement, InteractiveElement, IntoElement, ParentElement, RenderOnce, SharedString, Styled,
    Window, div, px,
};

use crate::color::to_hsla;
use crate::contracts::{Accessible, Role};
use crate::id::ComponentId;
use crate::motion::MotionConfig;
use crate::style::{SemanticColor, Size, Variant};
use crate::tokens::sizing::SPACE;
use crate::tokens::typography::{TextVariant, text_style};

use super::overlay::{backdrop, modal_focus, panel_background, release_panel_focus};
use super::transition::TransitionExt;
use super::utils::CloseHandler;

type SlotRenderer = Box<dyn FnOnce() -> AnyElement>;

/// Panel width for each size step.
pub fn dialog_width(size: Size) -> f32 {
    match size {
        Size::Xs => 320.0,
        Size::Sm => 400.0,
        Size::Md => 520.0,
        Size::Lg => 680.0,
        Size::Xl => 880.0,
    }
}

#[derive(IntoElement)]
pub struct Dialog {
    id: ComponentId,
    opened: bool,
    title: Option<SharedString>,
    children: Vec<AnyElement>,
    actions: Option<SlotRenderer>,
    close_on_backdrop: bool,
    close_on_escape: bool,
    variant: Variant,
    color: SemanticColor,
    size: Size,
    motion: Option<MotionConfig>,
    theme: crate::theme::LocalTheme,
    style: gpui::StyleRefinement,
    on_close: Option<CloseHandler>,
}

impl Dialog {
    #[track_caller]
    pub fn new() -> Self {
        Self {
            id: ComponentId::auto("dialog"),
            opened: false,
            title: None,
            children: Vec::new(),
            actions: None,
            close_on_backdrop: true,
            close_on_escape: true,
            variant: Variant::Outlined,
            color: SemanticColor::Neutral,
            size: Size::Md,
            motion: None,
            theme: crate::theme::LocalTheme::default(),
            style: gpui::StyleRefinement::default(),
            on_close: None,
        }
    }

    pub fn with_id(mut self, id: impl Into<ComponentId>) -> Self {
        self.id = id.into();
        self
    }

    pub fn opened(mut self, value: bool) -> Self {
        self.opened = value;
        self
    }

    pub fn title(mut self, value: impl Into<SharedString>) -> Self {
        self.title = Some(value.into());
        self
    }

    pub fn actions(mut self, content: impl IntoElement + 'static) -> Self {
        self.actions = Some(Box::new(|| content.into_any_element()));
        self
    }

    pub fn close_on_backdrop(mut self, value: bool) -> Self {
        self.close_on_backdrop = value;
        self
    }

    pub fn close_on_escape(mut self, value: bool) -> Self {
        self.close_on_escape = value;
        self
    }

    /// Called for backdrop clicks and Escape; the caller decides whether to close.
    pub fn on_close(mut self, handler: impl Fn(&mut Window, &mut gpui::App) + 'static) -> Self {
        self.on_close = Some(Rc::new(handler));
        self
    }

    pub fn is_opened(&self) -> bool {
        self.opened
    }
}

impl ParentElement for Dialog {
    fn extend(&mut self, elements: impl IntoIterator<Item = AnyElement>) {
        self.children.extend(elements);
    }
}

crate::impl_variant_color_size!(Dialog);
crate::impl_openable!(Dialog);
crate::impl_motion_aware!(Dialog);
crate::impl_styled!(Dialog);

impl Accessible for Dialog {
    fn role(&self) -> Role {
        Role::Dialog
    }

    fn accessible_label(&self) -> Option<&str> {
        self.title.as_ref().map(|title| title.as_ref())
    }
}

impl RenderOnce for Dialog {
    fn render(mut self, window: &mut Window, cx: &mut gpui::App) -> impl IntoElement {
        self.theme.sync_from_provider(cx);
        if !self.opened {
            release_panel_focus(&self.id);
            return div().into_any_element();
        }

        let record = self.style_record();
        let motion = self.motion.unwrap_or(self.theme.motion);
        let padding = SPACE.lg;
        let heading = text_style(TextVariant::H6);

        let backdrop_close = self.on_close.clone().filter(|_| self.close_on_backdrop);
        let scrim = backdrop(self.id.slot("backdrop"), &self.theme, backdrop_close);

        let mut panel = div()
            .id(self.id.slot("panel"))
            .flex()
            .flex_col()
            .gap(px(SPACE.md))
            .w(px(dialog_width(self.size)))
            .max_w_full()
            .p(px(padding))
            .rounded(px(self.theme.radius.lg))
            .bg(panel_background(&record, &self.theme))
            .text_color(to_hsla(record.color))
            .border(px(record.border_width))
            .border_color(to_hsla(record.border_color))
            .occlude();

        if let Some(title) = self.title.clone() {
            panel = panel.child(
                div()
                    .id(self.id.slot("title"))
                    .text_size(px(heading.font_size))
                    .line_height(px(heading.line_height_px()))
                    .font_weight(gpui::FontWeight(f32::from(heading.font_weight)))
                    .child(title),
            );
        }

        panel = panel.child(
            div()
                .id(self.id.slot("content"))
                .flex()
                .flex_col()
                .children(std::mem::take(&mut self.children)),
        );

        if let Some(actions) = self.actions.take() {
            panel = panel.child(
                div()
                    .id(self.id.slot("actions"))
                    .flex()
                    .flex_row()
                    .justify_end()
                    .gap(px(SPACE.sm))
                    .child(actions()),
            );
        }

        let escape_close = self.on_close.clone().filter(|_| self.close_on_escape);
        panel = modal_focus(panel, &self.id, escape_close, window, cx);
        panel = panel.font_family(self.theme.font_family);
        gpui::Refineable::refine(gpui::Styled::style(&mut panel), &self.style);

        let root = div()
            .id(self.id.clone())
            .absolute()
            .top_0()
            .left_0()
            .size_full()
            .child(scrim)
            .child(
                div()
                    .absolute()
                    .top_0()
                    .left_0()
                    .size_full()
                    .flex()
                    .items_center()
                    .justify_center()
                    .child(panel.with_enter_transition(self.id.slot("panel-enter"), motion)),
            );
        root.into_any_element()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn widths_grow_with_size() {
        let widths = Size::ALL.map(dialog_width);
        assert!(widths.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn title_is_the_accessible_label() {
        let dialog = Dialog::new().title("Delete file?").opened(true);
        assert!(dialog.is_opened());
        assert_eq!(dialog.role(), Role::Dialog);
        assert_eq!(dialog.accessible_label(), Some("Delete file?"));
    }
}
