/// Keys the components react to.
///
/// Accepts DOM `KeyboardEvent.key` identifiers (`"Enter"`, `" "`, `"ArrowUp"`)
/// and gpui keystroke names (`"enter"`, `"space"`, `"up"`).
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Key {
    Enter,
    Space,
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    Home,
    End,
    Escape,
    Tab,
}

impl Key {
    pub fn parse(name: &str) -> Option<Self> {
        if name == " " {
            return Some(Self::Space);
        }
        let key = match name.to_ascii_lowercase().as_str() {
            "enter" | "return" => Self::Enter,
            "space" | "spacebar" => Self::Space,
            "arrowup" | "up" => Self::ArrowUp,
            "arrowdown" | "down" => Self::ArrowDown,
            "arrowleft" | "left" => Self::ArrowLeft,
            "arrowright" | "right" => Self::ArrowRight,
            "home" => Self::Home,
            "end" => Self::End,
            "escape" | "esc" => Self::Escape,
            "tab" => Self::Tab,
            _ => return None,
        };
        Some(key)
    }

    pub const fn is_activation(self) -> bool {
        matches!(self, Self::Enter | Self::Space)
    }

    pub const fn is_navigation(self) -> bool {
        matches!(
            self,
            Self::ArrowUp
                | Self::ArrowDown
                | Self::ArrowLeft
                | Self::ArrowRight
                | Self::Home
                | Self::End
        )
    }
}

pub fn is_activation_key(name: &str) -> bool {
    Key::parse(name).is_some_and(Key::is_activation)
}

pub fn is_navigation_key(name: &str) -> bool {
    Key::parse(name).is_some_and(Key::is_navigation)
}
