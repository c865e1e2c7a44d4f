use std::rc::Rc;

use gpui::{
    AnyElement, InteractiveElement, IntoElement, ParentElement, RenderOnce, SharedString, Styled,
    Window, div, px,
};

use crate::color::to_hsla;
use crate::contracts::{Accessible, Placeable, Role};
use crate::id::ComponentId;
use crate::motion::{MotionConfig, TransitionPreset};
use crate::style::{SemanticColor, Size, Variant};
use crate::tokens::sizing::SPACE;

use super::overlay::{backdrop, modal_focus, panel_background, release_panel_focus};
use super::transition::TransitionExt;
use super::utils::CloseHandler;

/// Window edge the drawer is attached to.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub enum DrawerAnchor {
    #[default]
    Left,
    Right,
    Top,
    Bottom,
}

impl DrawerAnchor {
    pub const ALL: [Self; 4] = [Self::Left, Self::Right, Self::Top, Self::Bottom];

    pub const fn is_horizontal(self) -> bool {
        matches!(self, Self::Left | Self::Right)
    }

    /// Slide that brings the panel in from its edge.
    pub const fn enter_preset(self) -> TransitionPreset {
        match self {
            Self::Left => TransitionPreset::SlideRight,
            Self::Right => TransitionPreset::SlideLeft,
            Self::Top => TransitionPreset::SlideDown,
            Self::Bottom => TransitionPreset::SlideUp,
        }
    }
}

/// Panel width (side anchors) or height (top/bottom anchors) per size step.
pub fn drawer_extent(size: Size) -> f32 {
    match size {
        Size::Xs => 200.0,
        Size::Sm => 260.0,
        Size::Md => 320.0,
        Size::Lg => 420.0,
        Size::Xl => 560.0,
    }
}

#[derive(IntoElement)]
pub struct Drawer {
    id: ComponentId,
    opened: bool,
    anchor: DrawerAnchor,
    title: Option<SharedString>,
    children: Vec<AnyElement>,
    close_on_backdrop: bool,
    variant: Variant,
    color: SemanticColor,
    size: Size,
    motion: Option<MotionConfig>,
    theme: crate::theme::LocalTheme,
    style: gpui::StyleRefinement,
    on_close: Option<CloseHandler>,
}

impl Drawer {
    #[track_caller]
    pub fn new() -> Self {
        Self {
            id: ComponentId::auto("drawer"),
            opened: false,
            anchor: DrawerAnchor::Left,
            title: None,
            children: Vec::new(),
            close_on_backdrop: true,
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

    pub fn anchor(mut self, value: DrawerAnchor) -> Self {
        self.anchor = value;
        self
    }

    pub fn title(mut self, value: impl Into<SharedString>) -> Self {
        self.title = Some(value.into());
        self
    }

    pub fn close_on_backdrop(mut self, value: bool) -> Self {
        self.close_on_backdrop = value;
        self
    }

    pub fn on_close(mut self, handler: impl Fn(&mut Window, &mut gpui::App) + 'static) -> Self {
        self.on_close = Some(Rc::new(handler));
        self
    }

    fn resolved_motion(&self) -> MotionConfig {
        match self.motion {
            Some(motion) => motion,
            None => {
                let mut motion = self.theme.motion;
                motion.enter = motion.enter.preset(self.anchor.enter_preset());
                motion
            }
        }
    }
}

impl ParentElement for Drawer {
    fn extend(&mut self, elements: impl IntoIterator<Item = AnyElement>) {
        self.children.extend(elements);
    }
}

impl Placeable<DrawerAnchor> for Drawer {
    fn placement(self, value: DrawerAnchor) -> Self {
        self.anchor(value)
    }
}

crate::impl_variant_color_size!(Drawer);
crate::impl_openable!(Drawer);
crate::impl_motion_aware!(Drawer);
crate::impl_styled!(Drawer);

impl Accessible for Drawer {
    fn role(&self) -> Role {
        Role::Dialog
    }

    fn accessible_label(&self) -> Option<&str> {
        self.title.as_ref().map(|title| title.as_ref())
    }
}

impl RenderOnce for Drawer {
    fn render(mut self, window: &mut Window, cx: &mut gpui::App) -> impl IntoElement {
        self.theme.sync_from_provider(cx);
        if !self.opened {
            release_panel_focus(&self.id);
            return div().into_any_element();
        }

        let record = self.style_record();
        let motion = self.resolved_motion();
        let extent = px(drawer_extent(self.size));

        let backdrop_close = self.on_close.clone().filter(|_| self.close_on_backdrop);
        let scrim = backdrop(self.id.slot("backdrop"), &self.theme, backdrop_close);

        let mut panel = div()
            .id(self.id.slot("panel"))
            .flex()
            .flex_col()
            .gap(px(SPACE.md))
            .p(px(SPACE.lg))
            .bg(panel_background(&record, &self.theme))
            .text_color(to_hsla(record.color))
            .border_color(to_hsla(record.border_color))
            .occlude();
        panel = match self.anchor {
            DrawerAnchor::Left => panel.h_full().w(extent).border_r(px(record.border_width)),
            DrawerAnchor::Right => panel.h_full().w(extent).border_l(px(record.border_width)),
            DrawerAnchor::Top => panel.w_full().h(extent).border_b(px(record.border_width)),
            DrawerAnchor::Bottom => panel.w_full().h(extent).border_t(px(record.border_width)),
        };

        if let Some(title) = self.title.clone() {
            panel = panel.child(
                div()
                    .font_weight(gpui::FontWeight::SEMIBOLD)
                    .child(title),
            );
        }
        panel = panel.children(std::mem::take(&mut self.children));
        let escape_close = self.on_close.clone();
        panel = modal_focus(panel, &self.id, escape_close, window, cx);
        panel = panel.font_family(self.theme.font_family);
        gpui::Refineable::refine(gpui::Styled::style(&mut panel), &self.style);

        let panel = panel.with_enter_transition(self.id.slot("panel-enter"), motion);
        let host = match self.anchor {
            DrawerAnchor::Left => div().absolute().top_0().left_0().h_full().child(panel),
            DrawerAnchor::Right => div().absolute().top_0().right_0().h_full().child(panel),
            DrawerAnchor::Top => div().absolute().top_0().left_0().w_full().child(panel),
            DrawerAnchor::Bottom => div().absolute().bottom_0().left_0().w_full().child(panel),
        };

        let root = div()
            .id(self.id.clone())
            .absolute()
            .top_0()
            .left_0()
            .size_full()
            .child(scrim)
            .child(host);
        root.into_any_element()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::motion::MotionTransition;

    #[test]
    fn each_edge_slides_in_from_itself() {
        assert_eq!(DrawerAnchor::Left.enter_preset(), TransitionPreset::SlideRight);
        assert_eq!(DrawerAnchor::Bottom.enter_preset(), TransitionPreset::SlideUp);
        assert!(DrawerAnchor::Right.is_horizontal());
        assert!(!DrawerAnchor::Top.is_horizontal());
    }

    #[test]
    fn explicit_motion_is_not_overridden() {
        let drawer = Drawer::new().anchor(DrawerAnchor::Right);
        assert_eq!(drawer.resolved_motion().enter.preset, TransitionPreset::SlideLeft);

        let motion = MotionConfig {
            enter: MotionTransition::new().preset(TransitionPreset::Fade),
            ..MotionConfig::default()
        };
        let drawer = crate::contracts::MotionAware::motion(drawer, motion);
        assert_eq!(drawer.resolved_motion().enter.preset, TransitionPreset::Fade);
    }

    #[test]
    fn extents_grow_with_size() {
        let extents = Size::ALL.map(drawer_extent);
        assert!(extents.windows(2).all(|pair| pair[0] < pair[1]));
    }
}
