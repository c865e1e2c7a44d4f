pub mod a11y;
pub mod color;
pub mod components;
pub mod contracts;
pub mod id;
pub mod motion;
pub mod prelude;
pub mod presets;
pub mod provider;
pub mod style;
pub mod theme;
pub mod tokens;

pub use provider::SunProvider;
pub use theme::Theme;

#[cfg(test)]
mod test_public_api;
