use super::*;
use crate::contracts::{Colorable, StyleRecord, Variantable};
use crate::presets::variant_style;
use crate::style::{SemanticColor, Variant};
use crate::tokens::colors::TRANSPARENT;

fn assert_matrix<T, F>(name: &str, mut make: F)
where
    T: Variantable + Colorable + StyleRecord,
    F: FnMut() -> T,
{
    for variant in Variant::ALL {
        for color in SemanticColor::ALL {
            let record = make().variant(variant).color(color).style_record();
            assert_eq!(
                record,
                variant_style(variant, color),
                "{name} {} {}",
                variant.as_str(),
                color.as_str()
            );
        }
    }
}

#[test]
fn every_component_resolves_the_shared_variant_table() {
    assert_matrix("avatar", Avatar::new);
    assert_matrix("button", || Button::new("Button"));
    assert_matrix("card", Card::new);
    assert_matrix("checkbox", Checkbox::new);
    assert_matrix("chip", || Chip::new("Chip"));
    assert_matrix("dialog", Dialog::new);
    assert_matrix("drawer", Drawer::new);
    assert_matrix("popover", Popover::new);
    assert_matrix("radio", Radio::new);
    assert_matrix("radio-group", RadioGroup::new);
    assert_matrix("select", Select::new);
    assert_matrix("snackbar", || Snackbar::new("Saved"));
    assert_matrix("switch", Switch::new);
    assert_matrix("text-field", TextField::new);
    assert_matrix("tooltip", || Tooltip::new("Tip"));
}

#[test]
fn ghost_and_plain_variants_have_no_fill() {
    for color in SemanticColor::ALL {
        for variant in [Variant::Ghost, Variant::Plain] {
            let record = Button::new("Button").variant(variant).color(color).style_record();
            assert_eq!(record.background_color, TRANSPARENT, "{}", variant.as_str());
        }
    }
}

#[test]
fn component_defaults_follow_their_role() {
    assert_eq!(
        Button::new("Save").style_record(),
        variant_style(Variant::Solid, SemanticColor::Primary)
    );
    assert_eq!(
        Card::new().style_record(),
        variant_style(Variant::Outlined, SemanticColor::Neutral)
    );
    assert_eq!(
        Chip::new("tag").style_record(),
        variant_style(Variant::Soft, SemanticColor::Neutral)
    );
    assert_eq!(
        TextField::new().style_record(),
        variant_style(Variant::Outlined, SemanticColor::Primary)
    );
    assert_eq!(
        Tooltip::new("Tip").style_record(),
        variant_style(Variant::Solid, SemanticColor::Neutral)
    );
}
