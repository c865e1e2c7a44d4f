use gpui::{IntoElement, div};

fn into_any(element: impl IntoElement) -> gpui::AnyElement {
    element.into_any_element()
}

fn assert_render_once<T: gpui::RenderOnce>() {}

#[test]
fn components_module_exports_render_components() {
    assert_render_once::<crate::components::Avatar>();
    assert_render_once::<crate::components::Button>();
    assert_render_once::<crate::components::Card>();
    assert_render_once::<crate::components::Checkbox>();
    assert_render_once::<crate::components::Chip>();
    assert_render_once::<crate::components::Dialog>();
    assert_render_once::<crate::components::Drawer>();
    assert_render_once::<crate::components::LiveRegion>();
    assert_render_once::<crate::components::Popover>();
    assert_render_once::<crate::components::Radio>();
    assert_render_once::<crate::components::RadioGroup>();
    assert_render_once::<crate::components::Select>();
    assert_render_once::<crate::components::Snackbar>();
    assert_render_once::<crate::components::Switch>();
    assert_render_once::<crate::components::TextField>();
    assert_render_once::<crate::components::Tooltip>();
}

#[test]
fn prelude_smoke_builds_core_components() {
    use crate::prelude::*;

    let _ = into_any(Button::new("button").variant(Variant::Outlined));
    let _ = into_any(TextField::new().label("Name").placeholder("Ada"));
    let _ = into_any(Select::new().option(SelectOption::new("a", "A")).value("a"));
    let _ = into_any(Dialog::new().opened(true).title("dialog"));
    let _ = into_any(Popover::new().trigger(div()).content(div()));
    let _ = into_any(Tooltip::new("tip").placement(TooltipPlacement::Bottom));
    let _ = into_any(Snackbar::new("saved").color(SemanticColor::Success));
}

#[test]
fn tokens_and_presets_are_reachable_from_the_crate_root() {
    let _ = crate::tokens::SPACE.md;
    let _ = crate::tokens::RADIUS.full;
    let _ = crate::tokens::size_preset(
        crate::tokens::ComponentKind::Button,
        crate::style::Size::Lg,
    );
    let _ = crate::presets::variant_sx(
        crate::style::Variant::Solid,
        crate::style::SemanticColor::Primary,
    );
    let _ = crate::Theme::default();
    let _ = crate::SunProvider::new();
    let _ = crate::motion::MotionConfig::default();
}

#[test]
fn a11y_helpers_are_reachable_from_the_prelude() {
    use crate::prelude::*;

    assert!(is_activation_key(" "));
    assert!(is_navigation_key("ArrowDown"));
    assert_eq!(Key::parse("esc"), Some(Key::Escape));
    assert!(meets_contrast_ratio("#000000", "#ffffff", WcagLevel::Aaa));
    assert!(generate_id(Some("field")).starts_with("field-"));
}
