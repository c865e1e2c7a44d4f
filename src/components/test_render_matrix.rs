use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

use gpui::{
    AnyElement, IntoElement, ParentElement, Styled, TestAppContext, VisualTestContext, div, point,
    px, size,
};

use super::overlay::{claim_panel_focus, release_panel_focus};
use super::*;
use crate::a11y::{Politeness, announce};
use crate::contracts::{Colorable, Variantable};
use crate::id::ComponentId;
use crate::provider::SunProvider;
use crate::style::{SemanticColor, Variant};

fn draw(cx: &mut VisualTestContext, element: AnyElement) {
    cx.draw(
        point(px(0.0), px(0.0)),
        size(px(1280.0), px(800.0)),
        |_, _| div().size_full().child(element),
    );
}

fn styled<T: Variantable + Colorable + IntoElement>(
    component: T,
    variant: Variant,
    color: SemanticColor,
) -> AnyElement {
    component.variant(variant).color(color).into_any_element()
}

fn gallery(scope: &str, variant: Variant, color: SemanticColor) -> Vec<AnyElement> {
    vec![
        styled(Button::new("Save").start_icon(div()), variant, color),
        styled(Button::new("Saving").loading(true), variant, color),
        styled(Button::new("Off").disabled(true), variant, color),
        styled(Avatar::new().name("Ada Lovelace"), variant, color),
        styled(Card::new().title("Card").child("Body"), variant, color),
        styled(Checkbox::new().label("Accept").checked(true), variant, color),
        styled(Checkbox::new().indeterminate(true), variant, color),
        styled(Chip::new("tag").on_delete(|_, _| {}), variant, color),
        styled(Radio::new().label("One").checked(true), variant, color),
        styled(
            RadioGroup::new()
                .option("a", "A")
                .option("b", "B")
                .value("a")
                .on_change(|_, _, _| {}),
            variant,
            color,
        ),
        styled(Switch::new().label("Wi-Fi").checked(true), variant, color),
        styled(Switch::new().disabled(true), variant, color),
        styled(
            TextField::new()
                .label("Email")
                .required(true)
                .error("Taken")
                .start_adornment("@"),
            variant,
            color,
        ),
        styled(
            Select::new()
                .with_id(format!("{scope}-select"))
                .option(SelectOption::new("a", "A"))
                .option(SelectOption::new("b", "B").disabled(true))
                .value("a")
                .opened(true)
                .on_change(|_, _, _| {}),
            variant,
            color,
        ),
        styled(
            Popover::new()
                .with_id(format!("{scope}-popover"))
                .opened(true)
                .trigger(div().child("Open"))
                .content(div().child("Panel")),
            variant,
            color,
        ),
        styled(
            Tooltip::new("Copy")
                .with_id(format!("{scope}-tooltip"))
                .opened(true)
                .trigger(div().child("Hover")),
            variant,
            color,
        ),
        styled(
            Dialog::new()
                .with_id(format!("{scope}-dialog"))
                .opened(true)
                .title("Delete?")
                .actions(Button::new("Delete"))
                .on_close(|_, _| {}),
            variant,
            color,
        ),
        styled(
            Drawer::new()
                .with_id(format!("{scope}-drawer"))
                .opened(true)
                .anchor(DrawerAnchor::Right)
                .title("Filters")
                .on_close(|_, _| {}),
            variant,
            color,
        ),
        styled(
            Snackbar::new("Saved")
                .with_id(format!("{scope}-snackbar"))
                .opened(true)
                .action(Button::new("Undo")),
            variant,
            color,
        ),
    ]
}

#[gpui::test]
fn every_component_renders_in_every_variant_and_color(cx: &mut TestAppContext) {
    cx.update(|cx| SunProvider::new().init(cx));
    let cx = cx.add_empty_window();
    for variant in Variant::ALL {
        for color in SemanticColor::ALL {
            for element in gallery("matrix", variant, color) {
                draw(cx, element);
            }
        }
    }
    cx.run_until_parked();
}

#[gpui::test]
fn components_render_without_a_provider(cx: &mut TestAppContext) {
    let cx = cx.add_empty_window();
    for element in gallery("unthemed", Variant::Outlined, SemanticColor::Neutral) {
        draw(cx, element);
    }
    draw(cx, LiveRegion::new().into_any_element());
}

#[gpui::test]
fn configured_theme_font_reaches_rendered_components(cx: &mut TestAppContext) {
    cx.update(|cx| {
        SunProvider::new()
            .set_theme(|theme| theme.with_font_family("Sun Test Mono"))
            .init(cx)
    });
    let cx = cx.add_empty_window();
    for element in gallery("custom-font", Variant::Solid, SemanticColor::Primary) {
        draw(cx, element);
    }
    let family = cx.update(|_, cx| SunProvider::theme(cx).font_family);
    assert_eq!(family, "Sun Test Mono");
}

#[gpui::test]
fn live_region_renders_the_latest_announcement(cx: &mut TestAppContext) {
    cx.update(|cx| {
        SunProvider::new().init(cx);
        announce(cx, "Connection lost", Politeness::Assertive);
    });
    let cx = cx.add_empty_window();
    draw(cx, LiveRegion::new().into_any_element());
    let current = cx.update(|_, cx| SunProvider::try_announcer(cx).and_then(|a| a.current()));
    assert_eq!(current.map(|a| a.politeness), Some(Politeness::Assertive));
}

#[gpui::test]
fn snackbar_auto_hide_closes_once_after_the_delay(cx: &mut TestAppContext) {
    let executor = cx.executor();
    let cx = cx.add_empty_window();
    let closes = Rc::new(Cell::new(0));
    let counter = closes.clone();
    let on_close = move |_: &mut gpui::Window, _: &mut gpui::App| counter.set(counter.get() + 1);
    let snackbar = || {
        Snackbar::new("Saved")
            .with_id("auto-hide-snackbar")
            .opened(true)
            .auto_hide(Duration::from_millis(100))
            .on_close(on_close.clone())
            .into_any_element()
    };

    draw(cx, snackbar());
    draw(cx, snackbar());
    executor.advance_clock(Duration::from_millis(50));
    executor.run_until_parked();
    assert_eq!(closes.get(), 0);

    executor.advance_clock(Duration::from_millis(100));
    executor.run_until_parked();
    assert_eq!(closes.get(), 1);
}

#[gpui::test]
fn closing_a_snackbar_cancels_its_pending_hide(cx: &mut TestAppContext) {
    let executor = cx.executor();
    let cx = cx.add_empty_window();
    let closes = Rc::new(Cell::new(0));
    let counter = closes.clone();
    let on_close = move |_: &mut gpui::Window, _: &mut gpui::App| counter.set(counter.get() + 1);

    draw(
        cx,
        Snackbar::new("Saved")
            .with_id("cancelled-snackbar")
            .opened(true)
            .auto_hide(Duration::from_millis(100))
            .on_close(on_close.clone())
            .into_any_element(),
    );
    draw(
        cx,
        Snackbar::new("Saved")
            .with_id("cancelled-snackbar")
            .opened(false)
            .into_any_element(),
    );
    executor.advance_clock(Duration::from_millis(200));
    executor.run_until_parked();
    assert_eq!(closes.get(), 0);
}

#[gpui::test]
fn opening_a_dialog_moves_focus_into_its_panel(cx: &mut TestAppContext) {
    let cx = cx.add_empty_window();
    let id = ComponentId::from("focused-dialog");
    let dialog = |opened: bool| {
        Dialog::new()
            .with_id(id.clone())
            .opened(opened)
            .title("Rename")
            .on_close(|_, _| {})
            .into_any_element()
    };

    draw(cx, dialog(true));
    let (focused, reopened) = cx.update(|window, cx| {
        let (handle, opening) = claim_panel_focus(&id, cx);
        (handle.is_focused(window), opening)
    });
    assert!(focused);
    assert!(!reopened);

    draw(cx, dialog(false));
    let reopened = cx.update(|_, cx| claim_panel_focus(&id, cx).1);
    assert!(reopened);
    release_panel_focus(&id);
}

#[gpui::test]
fn opening_a_drawer_moves_focus_into_its_panel(cx: &mut TestAppContext) {
    let cx = cx.add_empty_window();
    let id = ComponentId::from("focused-drawer");
    draw(
        cx,
        Drawer::new()
            .with_id(id.clone())
            .opened(true)
            .on_close(|_, _| {})
            .into_any_element(),
    );
    let focused = cx.update(|window, cx| claim_panel_focus(&id, cx).0.is_focused(window));
    assert!(focused);
    release_panel_focus(&id);
}
