mod avatar;
mod button;
mod card;
mod checkbox;
mod chip;
mod dialog;
mod drawer;
mod live_region;
mod overlay;
mod popover;
mod popup;
mod radio;
mod select;
mod snackbar;
mod switch;
mod text_field;
mod tooltip;
pub mod transition;
mod utils;

pub use avatar::{Avatar, initials};
pub use button::Button;
pub use card::Card;
pub use checkbox::{CheckState, Checkbox};
pub use chip::Chip;
pub use dialog::{Dialog, dialog_width};
pub use drawer::{Drawer, DrawerAnchor, drawer_extent};
pub use live_region::LiveRegion;
pub use popover::{Popover, PopoverPlacement};
pub use popup::PopupPlacement;
pub use radio::{GroupOrientation, Radio, RadioGroup, navigate_options};
pub use select::{Select, SelectKeyAction, SelectOption, select_key_action};
pub use snackbar::{Snackbar, schedule_auto_hide};
pub use switch::{Switch, thumb_offset};
pub use text_field::TextField;
pub use tooltip::{Tooltip, TooltipPlacement};
pub use transition::TransitionExt;

#[cfg(test)]
mod test_component_smoke;
#[cfg(test)]
mod test_render_matrix;
#[cfg(test)]
mod test_roles;
#[cfg(test)]
mod test_variant_matrix;
