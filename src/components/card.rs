use gpui::{
    AnyElement, InteractiveElement, IntoElement, ParentElement, RenderOnce, SharedString, Styled,
    Window, div, px,
};

use crate::contracts::{Accessible, Role};
use crate::id::ComponentId;
use crate::style::{SemanticColor, Size, Variant};
use crate::tokens::sizing::SPACE;
use crate::tokens::typography::{TextVariant, text_style};

use super::utils::apply_variant_colors;

type SlotRenderer = Box<dyn FnOnce() -> AnyElement>;

#[derive(IntoElement)]
pub struct Card {
    id: ComponentId,
    title: Option<SharedString>,
    header: Option<SlotRenderer>,
    actions: Option<SlotRenderer>,
    children: Vec<AnyElement>,
    variant: Variant,
    color: SemanticColor,
    size: Size,
    theme: crate::theme::LocalTheme,
    style: gpui::StyleRefinement,
}

impl Card {
    #[track_caller]
    pub fn new() -> Self {
        Self {
            id: ComponentId::auto("card"),
            title: None,
            header: None,
            actions: None,
            children: Vec::new(),
            variant: Variant::Outlined,
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

    pub fn title(mut self, value: impl Into<SharedString>) -> Self {
        self.title = Some(value.into());
        self
    }

    /// Replaces the title row.
    pub fn header(mut self, content: impl IntoElement + 'static) -> Self {
        self.header = Some(Box::new(|| content.into_any_element()));
        self
    }

    pub fn actions(mut self, content: impl IntoElement + 'static) -> Self {
        self.actions = Some(Box::new(|| content.into_any_element()));
        self
    }
}

impl ParentElement for Card {
    fn extend(&mut self, elements: impl IntoIterator<Item = AnyElement>) {
        self.children.extend(elements);
    }
}

crate::impl_variant_color_size!(Card);
crate::impl_styled!(Card);

impl Accessible for Card {
    fn role(&self) -> Role {
        Role::Generic
    }

    fn accessible_label(&self) -> Option<&str> {
        self.title.as_ref().map(|title| title.as_ref())
    }
}

impl RenderOnce for Card {
    fn render(mut self, _window: &mut Window, cx: &mut gpui::App) -> impl IntoElement {
        self.theme.sync_from_provider(cx);
        let record = self.style_record();
        let padding = SPACE.get(self.size);
        let heading = text_style(TextVariant::H6);

        let root = div()
            .id(self.id.clone())
            .flex()
            .flex_col()
            .gap(px(padding * 0.75))
            .p(px(padding))
            .rounded(px(self.theme.radius.md));
        let mut root = apply_variant_colors(root, &record);

        if let Some(header) = self.header.take() {
            root = root.child(div().id(self.id.slot("header")).child(header()));
        } else if let Some(title) = self.title.clone() {
            root = root.child(
                div()
                    .id(self.id.slot("header"))
                    .text_size(px(heading.font_size))
                    .line_height(px(heading.line_height_px()))
                    .font_weight(gpui::FontWeight(f32::from(heading.font_weight)))
                    .child(title),
            );
        }

        root = root.child(
            div()
                .id(self.id.slot("content"))
                .flex()
                .flex_col()
                .children(std::mem::take(&mut self.children)),
        );

        if let Some(actions) = self.actions.take() {
            root = root.child(
                div()
                    .id(self.id.slot("actions"))
                    .flex()
                    .flex_row()
                    .justify_end()
                    .gap(px(SPACE.sm))
                    .child(actions()),
            );
        }

        root = root.font_family(self.theme.font_family);
        gpui::Refineable::refine(gpui::Styled::style(&mut root), &self.style);
        root
    }
}
