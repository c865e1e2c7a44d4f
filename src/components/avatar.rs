use gpui::{
    InteractiveElement, IntoElement, ParentElement, RenderOnce, SharedString, Styled, Window, div,
    img, px,
};

use crate::contracts::{Accessible, Role};
use crate::id::ComponentId;
use crate::style::{SemanticColor, Size, Variant};
use crate::tokens::sizing::{ComponentKind, size_preset};

use super::utils::apply_variant_colors;

/// Up to two uppercase initials taken from the first two words of `name`.
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .take(2)
        .flat_map(char::to_uppercase)
        .collect()
}

#[derive(IntoElement)]
pub struct Avatar {
    id: ComponentId,
    src: Option<SharedString>,
    name: Option<SharedString>,
    alt: Option<SharedString>,
    variant: Variant,
    color: SemanticColor,
    size: Size,
    theme: crate::theme::LocalTheme,
    style: gpui::StyleRefinement,
}

impl Avatar {
    #[track_caller]
    pub fn new() -> Self {
        Self {
            id: ComponentId::auto("avatar"),
            src: None,
            name: None,
            alt: None,
            variant: Variant::Soft,
            color: SemanticColor::Neutral,
            size: Size::Md,
            theme: crate::theme::LocalTheme::default(),
            style: gpui::StyleRefinement::default(),
        }
    }

    pub fn with_id(mut self, id: impl Into<ComponentId>) -> Self {
        self.id = id.into();
        self
    }

    pub fn src(mut self, value: impl Into<SharedString>) -> Self {
        self.src = Some(value.into());
        self
    }

    /// Full name; its initials are shown when no image is set.
    pub fn name(mut self, value: impl Into<SharedString>) -> Self {
        self.name = Some(value.into());
        self
    }

    pub fn alt(mut self, value: impl Into<SharedString>) -> Self {
        self.alt = Some(value.into());
        self
    }

    pub fn fallback_text(&self) -> String {
        self.name
            .as_ref()
            .map(|name| initials(name))
            .unwrap_or_default()
    }
}

crate::impl_variant_color_size!(Avatar);
crate::impl_styled!(Avatar);

impl Accessible for Avatar {
    fn role(&self) -> Role {
        Role::Img
    }

    fn accessible_label(&self) -> Option<&str> {
        self.alt
            .as_ref()
            .or(self.name.as_ref())
            .map(|label| label.as_ref())
    }
}

impl RenderOnce for Avatar {
    fn render(mut self, _window: &mut Window, cx: &mut gpui::App) -> impl IntoElement {
        self.theme.sync_from_provider(cx);
        let preset = size_preset(ComponentKind::Avatar, self.size);
        let record = self.style_record();

        let root = div()
            .id(self.id.clone())
            .flex()
            .items_center()
            .justify_center()
            .flex_none()
            .overflow_hidden()
            .size(px(preset.height))
            .rounded_full()
            .text_size(px(preset.font_size))
            .font_weight(gpui::FontWeight::SEMIBOLD);
        let mut root = apply_variant_colors(root, &record);

        root = match self.src.clone() {
            Some(src) => root.child(img(src).size_full().rounded_full()),
            None => root.child(self.fallback_text()),
        };

        root = root.font_family(self.theme.font_family);
        gpui::Refineable::refine(gpui::Styled::style(&mut root), &self.style);
        root
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initials_use_the_first_two_words() {
        assert_eq!(initials("ada lovelace"), "AL");
        assert_eq!(initials("Grace Brewster Murray Hopper"), "GB");
        assert_eq!(initials("  linus  "), "L");
        assert_eq!(initials(""), "");
    }

    #[test]
    fn alt_text_wins_over_name_for_the_label() {
        let avatar = Avatar::new().name("Ada Lovelace");
        assert_eq!(avatar.accessible_label(), Some("Ada Lovelace"));
        let avatar = avatar.alt("Profile picture");
        assert_eq!(avatar.accessible_label(), Some("Profile picture"));
        assert_eq!(avatar.fallback_text(), "AL");
    }
}
