use std::collections::BTreeMap;

/// Visual style family shared by every variant-aware component.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Variant {
    Solid,
    Soft,
    Outlined,
    Ghost,
    Plain,
}

impl Variant {
    pub const ALL: [Variant; 5] = [
        Variant::Solid,
        Variant::Soft,
        Variant::Outlined,
        Variant::Ghost,
        Variant::Plain,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Solid => "solid",
            Self::Soft => "soft",
            Self::Outlined => "outlined",
            Self::Ghost => "ghost",
            Self::Plain => "plain",
        }
    }
}

/// Named color role, decoupled from concrete hex values.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum SemanticColor {
    Primary,
    Secondary,
    Success,
    Warning,
    Danger,
    Info,
    Neutral,
}

impl SemanticColor {
    pub const ALL: [SemanticColor; 7] = [
        SemanticColor::Primary,
        SemanticColor::Secondary,
        SemanticColor::Success,
        SemanticColor::Warning,
        SemanticColor::Danger,
        SemanticColor::Info,
        SemanticColor::Neutral,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Secondary => "secondary",
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Danger => "danger",
            Self::Info => "info",
            Self::Neutral => "neutral",
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Size {
    Xs,
    Sm,
    Md,
    Lg,
    Xl,
}

impl Size {
    pub const ALL: [Size; 5] = [Size::Xs, Size::Sm, Size::Md, Size::Lg, Size::Xl];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Xs => "xs",
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
            Self::Xl => "xl",
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum InteractionState {
    Normal,
    Hover,
    Active,
    Focus,
    Disabled,
}

impl InteractionState {
    /// Selector used for this state in a [`StyleSheet`].
    pub const fn selector(self) -> &'static str {
        match self {
            Self::Normal => "&",
            Self::Hover => "&:hover",
            Self::Active => "&:active",
            Self::Focus => "&:focus-visible",
            Self::Disabled => "&:disabled",
        }
    }
}

/// Flat map of CSS property names to literal values.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct StyleMap {
    declarations: BTreeMap<String, String>,
}

impl StyleMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn declare(mut self, property: impl Into<String>, value: impl Into<String>) -> Self {
        self.declarations.insert(property.into(), value.into());
        self
    }

    pub fn extend(mut self, other: Self) -> Self {
        for (property, value) in other.declarations {
            self.declarations.insert(property, value);
        }
        self
    }

    pub fn read(&self, property: &str) -> Option<&str> {
        self.declarations.get(property).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.declarations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.declarations
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// Base declarations layered with per-state selector blocks.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct StyleSheet {
    pub base: StyleMap,
    states: BTreeMap<InteractionState, StyleMap>,
}

impl StyleSheet {
    pub fn new(base: StyleMap) -> Self {
        Self {
            base,
            states: BTreeMap::new(),
        }
    }

    pub fn state(mut self, state: InteractionState, styles: StyleMap) -> Self {
        if state == InteractionState::Normal {
            self.base = self.base.extend(styles);
        } else {
            self.states.insert(state, styles);
        }
        self
    }

    pub fn read(&self, state: InteractionState) -> Option<&StyleMap> {
        match state {
            InteractionState::Normal => Some(&self.base),
            other => self.states.get(&other),
        }
    }

    pub fn selectors(&self) -> impl Iterator<Item = (&'static str, &StyleMap)> {
        self.states
            .iter()
            .map(|(state, styles)| (state.selector(), styles))
    }
}
