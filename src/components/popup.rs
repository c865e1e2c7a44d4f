use gpui::{
    AnyElement, Corner, InteractiveElement, IntoElement, ParentElement, Styled, anchored, deferred,
    div, point, px,
};

use crate::id::ComponentId;

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub enum PopupPlacement {
    Top,
    #[default]
    Bottom,
    Left,
    Right,
}

impl PopupPlacement {
    pub const ALL: [Self; 4] = [Self::Top, Self::Bottom, Self::Left, Self::Right];

    /// Corner of the floating panel pinned to the host.
    pub const fn anchor_corner(self) -> Corner {
        match self {
            Self::Top => Corner::BottomLeft,
            Self::Bottom => Corner::TopLeft,
            Self::Left => Corner::TopRight,
            Self::Right => Corner::TopLeft,
        }
    }

    /// Gap between trigger and panel, as an `(x, y)` pixel offset.
    pub fn offset(self, gap_px: f32) -> (f32, f32) {
        let gap = gap_px.max(0.0);
        match self {
            Self::Top => (0.0, -gap),
            Self::Bottom => (0.0, gap),
            Self::Left => (-gap, 0.0),
            Self::Right => (gap, 0.0),
        }
    }
}

/// Zero-sized host placed on the trigger edge that floats `floating` above
/// the rest of the window.
pub fn anchored_host(
    id: &ComponentId,
    slot: &str,
    placement: PopupPlacement,
    gap_px: f32,
    floating: AnyElement,
    priority: usize,
) -> AnyElement {
    let (x, y) = placement.offset(gap_px);
    let panel = anchored()
        .anchor(placement.anchor_corner())
        .offset(point(px(x), px(y)))
        .snap_to_window_with_margin(px(8.0))
        .child(floating);

    let host = div().id(id.slot(slot)).absolute().w(px(0.0)).h(px(0.0));
    let host = match placement {
        PopupPlacement::Top => host.top_0().left_0(),
        PopupPlacement::Bottom => host.bottom_0().left_0(),
        PopupPlacement::Left => host.top_0().left_0(),
        PopupPlacement::Right => host.top_0().right_0(),
    };
    host.child(deferred(panel).priority(priority))
        .into_any_element()
}
