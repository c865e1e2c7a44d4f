use super::*;
use crate::contracts::{Accessible, Colorable, Role};
use crate::style::SemanticColor;

fn assert_role(component: &impl Accessible, role: Role) {
    assert_eq!(component.role(), role, "expected {}", role.as_str());
}

#[test]
fn each_component_reports_its_widget_role() {
    assert_role(&Avatar::new().name("Ada"), Role::Img);
    assert_role(&Button::new("Save"), Role::Button);
    assert_role(&Card::new(), Role::Generic);
    assert_role(&Checkbox::new(), Role::Checkbox);
    assert_role(&Dialog::new(), Role::Dialog);
    assert_role(&Drawer::new(), Role::Dialog);
    assert_role(&Popover::new(), Role::Presentation);
    assert_role(&Radio::new(), Role::Radio);
    assert_role(&RadioGroup::new(), Role::Group);
    assert_role(&Select::new(), Role::Combobox);
    assert_role(&Switch::new(), Role::Switch);
    assert_role(&TextField::new(), Role::Textbox);
    assert_role(&Tooltip::new("Tip"), Role::Tooltip);
    assert_role(&LiveRegion::new(), Role::Status);
}

#[test]
fn chip_is_a_button_only_when_clickable() {
    assert_role(&Chip::new("tag"), Role::Generic);
    assert_role(&Chip::new("tag").on_click(|_, _, _| {}), Role::Button);
}

#[test]
fn snackbar_escalates_to_alert_for_urgent_colors() {
    for color in SemanticColor::ALL {
        let expected = match color {
            SemanticColor::Danger | SemanticColor::Warning => Role::Alert,
            _ => Role::Status,
        };
        assert_role(&Colorable::color(Snackbar::new("Saved"), color), expected);
    }
}

#[test]
fn labels_come_from_visible_text() {
    assert_eq!(Button::new("Save").accessible_label(), Some("Save"));
    assert_eq!(Checkbox::new().label("Accept").accessible_label(), Some("Accept"));
    assert_eq!(Tooltip::new("Copy link").accessible_label(), Some("Copy link"));
    assert_eq!(
        Avatar::new().name("Ada Lovelace").alt("Profile photo").accessible_label(),
        Some("Profile photo")
    );
    assert_eq!(Avatar::new().name("Ada Lovelace").accessible_label(), Some("Ada Lovelace"));
}
