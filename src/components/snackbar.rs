use std::collections::HashMap;
use std::rc::Rc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{LazyLock, Mutex};
use std::time::Duration;

use gpui::{
    AnyElement, InteractiveElement, IntoElement, ParentElement, RenderOnce, SharedString, Styled,
    Window, div, px,
};

use crate::color::to_hsla;
use crate::contracts::{Accessible, Role};
use crate::id::ComponentId;
use crate::motion::{MotionConfig, TransitionPreset};
use crate::style::{SemanticColor, Size, Variant};
use crate::tokens::sizing::{ComponentKind, SPACE, size_preset};

use super::overlay::panel_background;
use super::transition::TransitionExt;
use super::utils::{CloseHandler, bind_escape};

static AUTO_HIDE: LazyLock<Mutex<HashMap<String, u64>>> =
    LazyLock::new(|| Mutex::new(HashMap::new()));
static NEXT_GENERATION: AtomicU64 = AtomicU64::new(1);

/// Registers a pending auto-hide for `id`. Returns its generation, or `None`
/// if one is already pending.
pub fn mark_auto_hide(id: &str) -> Option<u64> {
    let Ok(mut pending) = AUTO_HIDE.lock() else {
        return None;
    };
    if pending.contains_key(id) {
        return None;
    }
    let generation = NEXT_GENERATION.fetch_add(1, Ordering::Relaxed);
    pending.insert(id.to_string(), generation);
    Some(generation)
}

/// Drops the pending auto-hide for `id`, whatever its generation.
pub fn release_auto_hide(id: &str) {
    if let Ok(mut pending) = AUTO_HIDE.lock() {
        pending.remove(id);
    }
}

/// Consumes the pending auto-hide only if it is still `generation`.
pub fn take_auto_hide(id: &str, generation: u64) -> bool {
    let Ok(mut pending) = AUTO_HIDE.lock() else {
        return false;
    };
    if pending.get(id) == Some(&generation) {
        pending.remove(id);
        true
    } else {
        false
    }
}

/// Calls `on_close` once after `delay`, unless the snackbar was closed (and
/// its pending hide released) in the meantime.
pub fn schedule_auto_hide(
    id: &ComponentId,
    delay: Duration,
    on_close: CloseHandler,
    window: &Window,
    cx: &mut gpui::App,
) {
    let Some(generation) = mark_auto_hide(id.as_str()) else {
        return;
    };
    log::debug!("snackbar {id} hides in {}ms", delay.as_millis());
    let id = id.clone();
    let window_handle = window.window_handle();
    cx.spawn(async move |cx| {
        cx.background_executor().timer(delay).await;
        if !take_auto_hide(id.as_str(), generation) {
            return;
        }
        let _ = window_handle.update(cx, |_, window, cx| (on_close)(window, cx));
    })
    .detach();
}

type SlotRenderer = Box<dyn FnOnce() -> AnyElement>;

#[derive(IntoElement)]
pub struct Snackbar {
    id: ComponentId,
    opened: bool,
    message: SharedString,
    action: Option<SlotRenderer>,
    auto_hide: Option<Duration>,
    variant: Variant,
    color: SemanticColor,
    size: Size,
    motion: Option<MotionConfig>,
    theme: crate::theme::LocalTheme,
    style: gpui::StyleRefinement,
    on_close: Option<CloseHandler>,
}

impl Snackbar {
    #[track_caller]
    pub fn new(message: impl Into<SharedString>) -> Self {
        Self {
            id: ComponentId::auto("snackbar"),
            opened: false,
            message: message.into(),
            action: None,
            auto_hide: None,
            variant: Variant::Solid,
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

    pub fn message(mut self, value: impl Into<SharedString>) -> Self {
        self.message = value.into();
        self
    }

    pub fn action(mut self, content: impl IntoElement + 'static) -> Self {
        self.action = Some(Box::new(|| content.into_any_element()));
        self
    }

    /// Requests a close through `on_close` once `delay` has passed.
    pub fn auto_hide(mut self, delay: Duration) -> Self {
        self.auto_hide = Some(delay);
        self
    }

    pub fn on_close(mut self, handler: impl Fn(&mut Window, &mut gpui::App) + 'static) -> Self {
        self.on_close = Some(Rc::new(handler));
        self
    }

    /// Danger and warning messages are announced as alerts.
    fn is_assertive(&self) -> bool {
        matches!(self.color, SemanticColor::Danger | SemanticColor::Warning)
    }
}

crate::impl_variant_color_size!(Snackbar);
crate::impl_openable!(Snackbar);
crate::impl_motion_aware!(Snackbar);
crate::impl_styled!(Snackbar);

impl Accessible for Snackbar {
    fn role(&self) -> Role {
        if self.is_assertive() {
            Role::Alert
        } else {
            Role::Status
        }
    }

    fn accessible_label(&self) -> Option<&str> {
        Some(self.message.as_ref())
    }
}

impl RenderOnce for Snackbar {
    fn render(mut self, window: &mut Window, cx: &mut gpui::App) -> impl IntoElement {
        self.theme.sync_from_provider(cx);
        if !self.opened {
            release_auto_hide(self.id.as_str());
            return div().into_any_element();
        }

        if let (Some(delay), Some(on_close)) = (self.auto_hide, self.on_close.clone()) {
            schedule_auto_hide(&self.id, delay, on_close, window, cx);
        }

        let preset = size_preset(ComponentKind::Button, self.size);
        let record = self.style_record();
        let motion = self.motion.unwrap_or_else(|| {
            let mut motion = self.theme.motion;
            motion.enter = motion.enter.preset(TransitionPreset::SlideUp);
            motion
        });

        let mut panel = div()
            .id(self.id.slot("panel"))
            .flex()
            .flex_row()
            .items_center()
            .justify_between()
            .gap(px(SPACE.md))
            .min_h(px(preset.height + SPACE.sm))
            .px(px(SPACE.md))
            .py(px(SPACE.xs))
            .rounded(px(self.theme.radius.sm))
            .text_size(px(preset.font_size))
            .bg(panel_background(&record, &self.theme))
            .text_color(to_hsla(record.color))
            .border(px(record.border_width))
            .border_color(to_hsla(record.border_color))
            .child(div().flex_1().child(self.message.clone()));
        if let Some(action) = self.action.take() {
            panel = panel.child(div().flex_none().child(action()));
        }
        if let Some(on_close) = self.on_close.clone() {
            panel = bind_escape(panel, on_close);
        }
        panel = panel.font_family(self.theme.font_family);
        gpui::Refineable::refine(gpui::Styled::style(&mut panel), &self.style);

        div()
            .id(self.id.clone())
            .absolute()
            .bottom_0()
            .left_0()
            .w_full()
            .flex()
            .justify_center()
            .p(px(SPACE.lg))
            .child(panel.with_enter_transition(self.id.slot("panel-enter"), motion))
            .into_any_element()
    }
}
