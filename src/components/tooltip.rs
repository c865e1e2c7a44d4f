use std::rc::Rc;

use gpui::{
    AnyElement, InteractiveElement, IntoElement, ParentElement, RenderOnce, SharedString,
    StatefulInteractiveElement, Styled, Window, div, px,
};

use crate::color::to_hsla;
use crate::contracts::{Accessible, Role};
use crate::id::ComponentId;
use crate::motion::MotionConfig;
use crate::style::{SemanticColor, Size, Variant};
use crate::tokens::typography::{TextVariant, text_style};

use super::overlay::panel_background;
use super::popup::{PopupPlacement, anchored_host};
use super::transition::TransitionExt;
use super::utils::ToggleHandler;

pub type TooltipPlacement = PopupPlacement;

const BUBBLE_GAP_PX: f32 = 4.0;
const BUBBLE_MAX_WIDTH_PX: f32 = 280.0;

type SlotRenderer = Box<dyn FnOnce() -> AnyElement>;

/// Hover hint anchored to a trigger. The caller owns the open state and
/// receives hover changes through `on_open_change`.
#[derive(IntoElement)]
pub struct Tooltip {
    id: ComponentId,
    label: SharedString,
    opened: bool,
    disabled: bool,
    placement: TooltipPlacement,
    trigger: Option<SlotRenderer>,
    variant: Variant,
    color: SemanticColor,
    size: Size,
    motion: Option<MotionConfig>,
    theme: crate::theme::LocalTheme,
    style: gpui::StyleRefinement,
    on_open_change: Option<ToggleHandler>,
}

impl Tooltip {
    #[track_caller]
    pub fn new(label: impl Into<SharedString>) -> Self {
        Self {
            id: ComponentId::auto("tooltip"),
            label: label.into(),
            opened: false,
            disabled: false,
            placement: TooltipPlacement::Top,
            trigger: None,
            variant: Variant::Solid,
            color: SemanticColor::Neutral,
            size: Size::Sm,
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

    pub fn placement(mut self, value: TooltipPlacement) -> Self {
        self.placement = value;
        self
    }

    pub fn trigger(mut self, content: impl IntoElement + 'static) -> Self {
        self.trigger = Some(Box::new(|| content.into_any_element()));
        self
    }

    pub fn on_open_change(
        mut self,
        handler: impl Fn(bool, &mut Window, &mut gpui::App) + 'static,
    ) -> Self {
        self.on_open_change = Some(Rc::new(handler));
        self
    }

    fn is_shown(&self) -> bool {
        self.opened && !self.disabled && !self.label.is_empty()
    }

    fn render_bubble(&self) -> AnyElement {
        let record = self.style_record();
        let text = match self.size {
            Size::Xs | Size::Sm => text_style(TextVariant::Caption),
            Size::Md => text_style(TextVariant::Body2),
            Size::Lg | Size::Xl => text_style(TextVariant::Body1),
        };
        let mut bubble = div()
            .id(self.id.slot("bubble"))
            .max_w(px(BUBBLE_MAX_WIDTH_PX))
            .px(px(text.font_size * 0.75))
            .py(px(text.font_size * 0.3))
            .rounded(px(self.theme.radius.sm))
            .text_size(px(text.font_size))
            .line_height(px(text.line_height_px()))
            .bg(panel_background(&record, &self.theme))
            .text_color(to_hsla(record.color))
            .border(px(record.border_width))
            .border_color(to_hsla(record.border_color))
            .child(self.label.clone());
        bubble = bubble.font_family(self.theme.font_family);
        gpui::Refineable::refine(gpui::Styled::style(&mut bubble), &self.style);

        let motion = self.motion.unwrap_or(self.theme.motion);
        bubble
            .with_enter_transition(self.id.slot("bubble-enter"), motion)
            .into_any_element()
    }
}

crate::impl_variant_color_size!(Tooltip);
crate::impl_disableable!(Tooltip);
crate::impl_openable!(Tooltip);
crate::impl_placeable!(Tooltip, TooltipPlacement);
crate::impl_motion_aware!(Tooltip);
crate::impl_styled!(Tooltip);

impl Accessible for Tooltip {
    fn role(&self) -> Role {
        Role::Tooltip
    }

    fn accessible_label(&self) -> Option<&str> {
        Some(self.label.as_ref())
    }
}

impl RenderOnce for Tooltip {
    fn render(mut self, _window: &mut Window, cx: &mut gpui::App) -> impl IntoElement {
        self.theme.sync_from_provider(cx);
        let content = self
            .trigger
            .take()
            .map(|content| content())
            .unwrap_or_else(|| div().into_any_element());

        let mut trigger = div().id(self.id.slot("trigger")).relative().child(content);
        if !self.disabled {
            if let Some(handler) = self.on_open_change.clone() {
                trigger = trigger.on_hover(move |hovered, window, cx| {
                    (handler)(*hovered, window, cx);
                });
            }
        }

        if self.is_shown() {
            trigger = trigger.child(anchored_host(
                &self.id,
                "anchor-host",
                self.placement,
                BUBBLE_GAP_PX,
                self.render_bubble(),
                24,
            ));
        }

        div().id(self.id.clone()).relative().child(trigger)
    }
}
