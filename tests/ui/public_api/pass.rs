use sun_ui::prelude::*;

fn configure<T: Variantable + Colorable + Sizeable>(component: T) -> T {
    component
        .variant(Variant::Soft)
        .color(SemanticColor::Success)
        .size(Size::Lg)
}

fn main() {
    let button = configure(Button::new("Save"));
    assert_eq!(
        button.style_record(),
        variant_style(Variant::Soft, SemanticColor::Success)
    );

    let chip = configure(Chip::new("tag"));
    assert_eq!(chip.role(), Role::Generic);

    let dialog = Dialog::new().opened(true).motion(MotionConfig {
        level: MotionLevel::Reduced,
        ..MotionConfig::default()
    });
    assert_eq!(dialog.role(), Role::Dialog);

    let tooltip = Placeable::placement(Tooltip::new("tip"), PopupPlacement::Left);
    assert_eq!(tooltip.accessible_label(), Some("tip"));

    assert!(is_activation_key("Enter"));
    assert!(meets_contrast_ratio("#111827", "#ffffff", WcagLevel::Aa));
}
