use std::rc::Rc;

use gpui::{
    AnyElement, ClickEvent, InteractiveElement, IntoElement, ParentElement, RenderOnce,
    StatefulInteractiveElement, Styled, Window, div, px,
};

use crate::color::to_hsla;
use crate::contracts::{Accessible, Role};
use crate::id::ComponentId;
use crate::motion::MotionConfig;
use crate::style::{SemanticColor, Size, Variant};
use crate::tokens::sizing::SPACE;

use super::overlay::panel_background;
use super::popup::{PopupPlacement, anchored_host};
use super::transition::TransitionExt;
use super::utils::ToggleHandler;

pub type PopoverPlacement = PopupPlacement;

const PANEL_GAP_PX: f32 = 6.0;

type SlotRenderer = Box<dyn FnOnce() -> AnyElement>;

#[derive(IntoElement)]
pub struct Popover {
    id: ComponentId,
    opened: bool,
    disabled: bool,
    placement: PopoverPlacement,
    offset_px: f32,
    close_on_click_outside: bool,
    trigger: Option<SlotRenderer>,
    content: Option<SlotRenderer>,
    variant: Variant,
    color: SemanticColor,
    size: Size,
    motion: Option<MotionConfig>,
    theme: crate::theme::LocalTheme,
    style: gpui::StyleRefinement,
    on_open_change: Option<ToggleHandler>,
}

impl Popover {
    #[track_caller]
    pub fn new() -> Self {
        Self {
            id: ComponentId::auto("popover"),
            opened: false,
            disabled: false,
            placement: PopoverPlacement::Bottom,
            offset_px: PANEL_GAP_PX,
            close_on_click_outside: true,
            trigger: None,
            content: None,
            variant: Variant::Outlined,
            color: SemanticColor::Neutral,
            size: Size::Md,
            motion: None,
            theme: crate::theme::LocalTheme::default(),
            style: gpui::StyleRefinement::default(),
            on_open_change: None,
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

    pub fn disabled(mut self, value: bool) -> Self {
        self.disabled = value;
        self
    }

    pub fn placement(mut self, value: PopoverPlacement) -> Self {
        self.placement = value;
        self
    }

    pub fn offset(mut self, value: f32) -> Self {
        self.offset_px = value.max(0.0);
        self
    }

    pub fn close_on_click_outside(mut self, value: bool) -> Self {
        self.close_on_click_outside = value;
        self
    }

    pub fn trigger(mut self, content: impl IntoElement + 'static) -> Self {
        self.trigger = Some(Box::new(|| content.into_any_element()));
        self
    }

    pub fn content(mut self, content: impl IntoElement + 'static) -> Self {
        self.content = Some(Box::new(|| content.into_any_element()));
        self
    }

    /// Receives the requested open state: trigger clicks toggle it, outside
    /// clicks request `false`.
    pub fn on_open_change(
        mut self,
        handler: impl Fn(bool, &mut Window, &mut gpui::App) + 'static,
    ) -> Self {
        self.on_open_change = Some(Rc::new(handler));
        self
    }

    fn is_shown(&self) -> bool {
        self.opened && !self.disabled
    }

    fn render_panel(&mut self) -> AnyElement {
        let record = self.style_record();
        let padding = SPACE.get(self.size);
        let mut panel = div()
            .id(self.id.slot("panel"))
            .flex()
            .flex_col()
            .gap(px(SPACE.sm))
            .p(px(padding * 0.75))
            .rounded(px(self.theme.radius.md))
            .bg(panel_background(&record, &self.theme))
            .text_color(to_hsla(record.color))
            .border(px(record.border_width))
            .border_color(to_hsla(record.border_color));

        if self.close_on_click_outside {
            if let Some(handler) = self.on_open_change.clone() {
                panel = panel.on_mouse_down_out(move |_, window, cx| {
                    (handler)(false, window, cx);
                });
            }
        }

        if let Some(content) = self.content.take() {
            panel = panel.child(content());
        }
        panel = panel.font_family(self.theme.font_family);
        gpui::Refineable::refine(gpui::Styled::style(&mut panel), &self.style);

        let motion = self.motion.unwrap_or(self.theme.motion);
        panel
            .with_enter_transition(self.id.slot("panel-enter"), motion)
            .into_any_element()
    }
}

crate::impl_variant_color_size!(Popover);
crate::impl_disableable!(Popover);
crate::impl_openable!(Popover);
crate::impl_placeable!(Popover, PopoverPlacement);
crate::impl_motion_aware!(Popover);
crate::impl_styled!(Popover);

impl Accessible for Popover {
    fn role(&self) -> Role {
        Role::Presentation
    }
}

impl RenderOnce for Popover {
    fn render(mut self, _window: &mut Window, cx: &mut gpui::App) -> impl IntoElement {
        self.theme.sync_from_provider(cx);
        let opened = self.is_shown();

        let mut trigger = div().id(self.id.slot("trigger")).relative().child(
            self.trigger
                .take()
                .map(|content| content())
                .unwrap_or_else(|| div().into_any_element()),
        );

        if self.disabled {
            trigger = trigger.cursor_default().opacity(self.style_record().disabled.opacity);
        } else if let Some(handler) = self.on_open_change.clone() {
            let next = !opened;
            trigger = trigger.cursor_pointer().on_click(
                move |_: &ClickEvent, window: &mut Window, cx: &mut gpui::App| {
                    (handler)(next, window, cx);
                },
            );
        }

        if opened {
            let panel = self.render_panel();
            trigger = trigger.child(anchored_host(
                &self.id,
                "anchor-host",
                self.placement,
                self.offset_px,
                panel,
                20,
            ));
        }

        div().id(self.id.clone()).relative().child(trigger)
    }
}
