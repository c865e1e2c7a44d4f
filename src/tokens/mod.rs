pub mod animations;
pub mod colors;
pub mod sizing;
pub mod typography;

pub use animations::{DURATIONS, Easing, transition};
pub use colors::{COMMON, ColorScale, SHADE_COUNT, Shade, TRANSPARENT, scale};
pub use sizing::{
    BREAKPOINTS, ComponentKind, RADIUS, SHADOWS, SPACE, SizePreset, Z_INDEX, size_preset, spacing,
};
pub use typography::{FONT_SIZES, FONT_WEIGHTS, LINE_HEIGHTS, TextStyle, TextVariant, text_style};
