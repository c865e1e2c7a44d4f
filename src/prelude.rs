pub use crate::SunProvider;
pub use crate::a11y::{
    Announcement, Key, LiveAnnouncer, Politeness, WcagLevel, announce, contrast_ratio,
    generate_id, is_activation_key, is_navigation_key, meets_contrast_ratio,
};
pub use crate::components::{
    Avatar, Button, Card, CheckState, Checkbox, Chip, Dialog, Drawer, DrawerAnchor,
    GroupOrientation, LiveRegion, Popover, PopoverPlacement, PopupPlacement, Radio, RadioGroup,
    Select, SelectOption, Snackbar, Switch, TextField, Tooltip, TooltipPlacement, TransitionExt,
};
pub use crate::contracts::{
    Accessible, Colorable, Disableable, MotionAware, Openable, Placeable, Role, Sizeable,
    StyleRecord, Variantable,
};
pub use crate::motion::{MotionConfig, MotionLevel, MotionTransition, TransitionPreset};
pub use crate::presets::{VariantStyle, variant_style, variant_sx};
pub use crate::style::{SemanticColor, Size, Variant};
pub use crate::theme::Theme;
