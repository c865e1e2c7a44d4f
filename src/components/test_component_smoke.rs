use super::*;
use crate::contracts::{Colorable, Disableable, MotionAware, Openable, Sizeable, Variantable};
use crate::motion::{MotionConfig, MotionLevel};
use crate::style::{SemanticColor, Size, Variant};
use gpui::{AnyElement, IntoElement, div};

fn into_any(element: impl IntoElement) -> AnyElement {
    element.into_any_element()
}

fn exercise_variant_color_size<T, F>(mut make: F)
where
    T: Variantable + Colorable + Sizeable + IntoElement,
    F: FnMut() -> T,
{
    for variant in Variant::ALL {
        for color in SemanticColor::ALL {
            let _ = into_any(make().variant(variant).color(color));
        }
    }
    for size in Size::ALL {
        let _ = into_any(Sizeable::size(make(), size));
    }
}

fn exercise_disableable<T, F>(mut make: F)
where
    T: Disableable + IntoElement,
    F: FnMut() -> T,
{
    let _ = into_any(make().disabled(false));
    let _ = into_any(make().disabled(true));
}

fn exercise_openable<T, F>(mut make: F)
where
    T: Openable + MotionAware + IntoElement,
    F: FnMut() -> T,
{
    let _ = into_any(make().opened(false));
    let _ = into_any(make().opened(true));
    let reduced = MotionConfig {
        level: MotionLevel::Reduced,
        ..MotionConfig::default()
    };
    let _ = into_any(make().opened(true).motion(reduced));
}

#[test]
fn smoke_inline_components_render_into_any_element() {
    let _ = into_any(Button::new("Save").start_icon(div()).end_icon(div()));
    let _ = into_any(Button::new("Saving").loading(true).full_width(true));
    let _ = into_any(Avatar::new().name("Ada Lovelace"));
    let _ = into_any(Avatar::new().src("https://example.com/ada.png").alt("Ada"));
    let _ = into_any(
        Card::new()
            .title("Card")
            .child(div())
            .actions(Button::new("Ok")),
    );
    let _ = into_any(Checkbox::new().label("Accept").indeterminate(true));
    let _ = into_any(Chip::new("tag").on_delete(|_, _| {}));
    let _ = into_any(Radio::new().label("One").checked(true));
    let _ = into_any(
        RadioGroup::new()
            .option("a", "A")
            .option("b", "B")
            .value("a")
            .orientation(GroupOrientation::Horizontal),
    );
    let _ = into_any(Switch::new().label("Wi-Fi").checked(true));
    let _ = into_any(
        TextField::new()
            .label("Email")
            .placeholder("you@example.com")
            .helper_text("Work address")
            .required(true),
    );
    let _ = into_any(TextField::new().value("ada@example.com").error("Taken"));
    let _ = into_any(TextField::new().input(div()).start_adornment("@"));
    let _ = into_any(LiveRegion::new());
}

#[test]
fn smoke_every_component_accepts_every_variant_color_and_size() {
    exercise_variant_color_size(|| Button::new("Button"));
    exercise_variant_color_size(|| Avatar::new().name("Sun UI"));
    exercise_variant_color_size(|| Card::new().title("Card"));
    exercise_variant_color_size(|| Checkbox::new().checked(true));
    exercise_variant_color_size(|| Chip::new("Chip"));
    exercise_variant_color_size(|| Dialog::new().opened(true).title("Dialog"));
    exercise_variant_color_size(|| Drawer::new().opened(true));
    exercise_variant_color_size(|| Popover::new().opened(true).trigger(div()));
    exercise_variant_color_size(|| Radio::new().checked(true));
    exercise_variant_color_size(|| Select::new().option(SelectOption::new("a", "A")));
    exercise_variant_color_size(|| Snackbar::new("Saved").opened(true));
    exercise_variant_color_size(|| Switch::new().checked(true));
    exercise_variant_color_size(|| TextField::new().label("Name"));
    exercise_variant_color_size(|| Tooltip::new("Tip").opened(true).trigger(div()));
}

#[test]
fn smoke_disableable_components() {
    exercise_disableable(|| Button::new("Button"));
    exercise_disableable(Checkbox::new);
    exercise_disableable(|| Chip::new("Chip").on_click(|_, _, _| {}));
    exercise_disableable(Popover::new);
    exercise_disableable(Radio::new);
    exercise_disableable(RadioGroup::new);
    exercise_disableable(Select::new);
    exercise_disableable(Switch::new);
    exercise_disableable(TextField::new);
    exercise_disableable(|| Tooltip::new("Tip"));
}

#[test]
fn smoke_overlay_components_open_and_close() {
    exercise_openable(|| Dialog::new().title("Dialog").child(div()));
    exercise_openable(|| {
        Drawer::new()
            .anchor(DrawerAnchor::Bottom)
            .on_close(|_, _| {})
    });
    exercise_openable(|| Popover::new().trigger(div()).content(div()));
    exercise_openable(|| Select::new().option(SelectOption::new("a", "A")));
    exercise_openable(|| Snackbar::new("Saved").action(Button::new("Undo")));
    exercise_openable(|| Tooltip::new("Tip").placement(TooltipPlacement::Right));
}
