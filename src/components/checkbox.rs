use std::rc::Rc;

use gpui::{
    ClickEvent, InteractiveElement, IntoElement, ParentElement, RenderOnce, SharedString, Styled,
    Window, div, px,
};

use crate::color::to_hsla;
use crate::contracts::{Accessible, Role};
use crate::id::ComponentId;
use crate::style::{SemanticColor, Size, Variant};
use crate::tokens::sizing::{ComponentKind, size_preset};

use super::utils::{ToggleHandler, apply_variant_colors, bind_activation};

/// Checked state as reported to assistive technology.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum CheckState {
    Unchecked,
    Checked,
    Mixed,
}

impl CheckState {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Unchecked => "false",
            Self::Checked => "true",
            Self::Mixed => "mixed",
        }
    }
}

#[derive(IntoElement)]
pub struct Checkbox {
    id: ComponentId,
    label: Option<SharedString>,
    checked: bool,
    indeterminate: bool,
    disabled: bool,
    variant: Variant,
    color: SemanticColor,
    size: Size,
    theme: crate::theme::LocalTheme,
    style: gpui::StyleRefinement,
    on_change: Option<ToggleHandler>,
}

impl Checkbox {
    #[track_caller]
    pub fn new() -> Self {
        Self {
            id: ComponentId::auto("checkbox"),
            label: None,
            checked: false,
            indeterminate: false,
            disabled: false,
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

    pub fn checked(mut self, value: bool) -> Self {
        self.checked = value;
        self
    }

    /// Shows a dash instead of a check mark; activation still reports `true`.
    pub fn indeterminate(mut self, value: bool) -> Self {
        self.indeterminate = value;
        self
    }

    pub fn disabled(mut self, value: bool) -> Self {
        self.disabled = value;
        self
    }

    pub fn on_change(
        mut self,
        handler: impl Fn(bool, &mut Window, &mut gpui::App) + 'static,
    ) -> Self {
        self.on_change = Some(Rc::new(handler));
        self
    }

    pub fn check_state(&self) -> CheckState {
        if self.indeterminate {
            CheckState::Mixed
        } else if self.checked {
            CheckState::Checked
        } else {
            CheckState::Unchecked
        }
    }

    /// Value passed to `on_change` on activation.
    pub fn next_checked(&self) -> bool {
        self.indeterminate || !self.checked
    }
}

crate::impl_variant_color_size!(Checkbox);
crate::impl_disableable!(Checkbox);
crate::impl_styled!(Checkbox);

impl Accessible for Checkbox {
    fn role(&self) -> Role {
        Role::Checkbox
    }

    fn accessible_label(&self) -> Option<&str> {
        self.label.as_ref().map(|label| label.as_ref())
    }
}

impl RenderOnce for Checkbox {
    fn render(mut self, _window: &mut Window, cx: &mut gpui::App) -> impl IntoElement {
        self.theme.sync_from_provider(cx);
        let preset = size_preset(ComponentKind::Checkbox, self.size);
        let state = self.check_state();

        let control = div()
            .id(self.id.slot("control"))
            .flex()
            .flex_none()
            .items_center()
            .justify_center()
            .size(px(preset.height))
            .rounded(px(self.theme.radius.xs))
            .text_size(px(preset.icon_size));
        let control = if state == CheckState::Unchecked {
            let neutral = self
                .theme
                .variant_style(Variant::Outlined, SemanticColor::Neutral);
            apply_variant_colors(control, &neutral)
        } else {
            let mark = if state == CheckState::Mixed { "−" } else { "✓" };
            apply_variant_colors(control, &self.style_record()).child(mark)
        };

        let mut root = div()
            .id(self.id.clone())
            .flex()
            .flex_row()
            .items_center()
            .gap(px(preset.gap))
            .text_size(px(preset.font_size))
            .text_color(to_hsla(self.theme.common.text.primary))
            .child(control);
        if let Some(label) = self.label.clone() {
            root = root.child(label);
        }

        if self.disabled {
            root = root.opacity(self.style_record().disabled.opacity).cursor_default();
        } else if let Some(handler) = self.on_change.clone() {
            let next = self.next_checked();
            root = bind_activation(
                root,
                Rc::new(
                    move |_: &ClickEvent, window: &mut Window, cx: &mut gpui::App| {
                        (handler)(next, window, cx)
                    },
                ),
            );
        }

        root = root.font_family(self.theme.font_family);
        gpui::Refineable::refine(gpui::Styled::style(&mut root), &self.style);
        root
    }
}
