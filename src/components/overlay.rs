use std::collections::HashMap;
use std::sync::{LazyLock, Mutex};

use gpui::{
    ClickEvent, ElementId, FocusHandle, InteractiveElement, Stateful, StatefulInteractiveElement,
    Styled, Window, div,
};

use crate::color::to_hsla;
use crate::id::ComponentId;
use crate::presets::VariantStyle;
use crate::theme::Theme;
use crate::tokens::colors::TRANSPARENT;

use super::utils::{CloseHandler, bind_escape};

static PANEL_FOCUS: LazyLock<Mutex<HashMap<String, FocusHandle>>> =
    LazyLock::new(|| Mutex::new(HashMap::new()));

/// Focus handle of the open modal panel `id`. The flag is true only on the
/// render that opened it.
pub fn claim_panel_focus(id: &ComponentId, cx: &gpui::App) -> (FocusHandle, bool) {
    let Ok(mut handles) = PANEL_FOCUS.lock() else {
        return (cx.focus_handle(), false);
    };
    if let Some(handle) = handles.get(id.as_str()) {
        return (handle.clone(), false);
    }
    let handle = cx.focus_handle();
    handles.insert(id.to_string(), handle.clone());
    (handle, true)
}

pub fn release_panel_focus(id: &ComponentId) {
    if let Ok(mut handles) = PANEL_FOCUS.lock() {
        handles.remove(id.as_str());
    }
}

/// Makes a modal panel hold focus: it tracks the panel's handle, takes focus
/// when the panel opens, and closes on Escape.
pub fn modal_focus(
    panel: Stateful<gpui::Div>,
    id: &ComponentId,
    on_escape: Option<CloseHandler>,
    window: &mut Window,
    cx: &mut gpui::App,
) -> Stateful<gpui::Div> {
    let (focus, opening) = claim_panel_focus(id, cx);
    let mut panel = panel.track_focus(&focus);
    if let Some(on_close) = on_escape {
        panel = bind_escape(panel, on_close);
    }
    if opening {
        log::trace!("focusing modal panel {id}");
        window.focus(&focus, cx);
    }
    panel
}

/// Window-covering scrim behind dialogs and drawers.
pub fn backdrop(
    id: impl Into<ElementId>,
    theme: &Theme,
    on_click: Option<CloseHandler>,
) -> Stateful<gpui::Div> {
    let mut root = div()
        .id(id)
        .absolute()
        .top_0()
        .left_0()
        .size_full()
        .bg(to_hsla(theme.common.background.backdrop));
    if let Some(handler) = on_click {
        root = root.on_click(move |_: &ClickEvent, window: &mut Window, cx: &mut gpui::App| {
            (handler)(window, cx);
        });
    }
    root
}

/// Background for floating panels: the variant surface, or paper where the
/// variant is see-through.
pub fn panel_background(style: &VariantStyle, theme: &Theme) -> gpui::Hsla {
    if style.background_color == TRANSPARENT {
        to_hsla(theme.common.background.paper)
    } else {
        to_hsla(style.background_color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::{SemanticColor, Variant};

    #[test]
    fn see_through_variants_float_on_paper() {
        let theme = Theme::default();
        let paper = to_hsla(theme.common.background.paper);
        let outlined = theme.variant_style(Variant::Outlined, SemanticColor::Neutral);
        assert_eq!(panel_background(&outlined, &theme), paper);
        let solid = theme.variant_style(Variant::Solid, SemanticColor::Primary);
        assert_eq!(
            panel_background(&solid, &theme),
            to_hsla(crate::tokens::colors::PRIMARY.main)
        );
    }
}
