use crate::tokens::animations::{DURATIONS, Easing};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum MotionLevel {
    Full,
    Reduced,
    None,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TransitionPreset {
    None,
    Fade,
    SlideUp,
    SlideDown,
    SlideLeft,
    SlideRight,
    /// Rendered as a fade: gpui elements carry no scale transform.
    ScaleIn,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct MotionTransition {
    pub preset: TransitionPreset,
    pub duration_ms: u16,
    pub offset_px: i16,
    pub easing: Easing,
}

impl Default for MotionTransition {
    fn default() -> Self {
        Self {
            preset: TransitionPreset::Fade,
            duration_ms: DURATIONS.entering,
            offset_px: 8,
            easing: Easing::EaseOut,
        }
    }
}

impl MotionTransition {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn preset(mut self, preset: TransitionPreset) -> Self {
        self.preset = preset;
        self
    }

    pub fn duration_ms(mut self, duration_ms: u16) -> Self {
        self.duration_ms = duration_ms;
        self
    }

    pub fn offset_px(mut self, offset_px: i16) -> Self {
        self.offset_px = offset_px;
        self
    }

    pub fn easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct MotionConfig {
    pub level: MotionLevel,
    pub enter: MotionTransition,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            level: MotionLevel::Full,
            enter: MotionTransition::default(),
        }
    }
}

impl MotionConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn level(mut self, level: MotionLevel) -> Self {
        self.level = level;
        self
    }

    pub fn enter(mut self, enter: MotionTransition) -> Self {
        self.enter = enter;
        self
    }

    /// Enter transition after applying the motion level.
    ///
    /// `Reduced` keeps the fade but drops movement and halves the duration;
    /// `None` yields `None`.
    pub fn effective_enter(&self) -> Option<MotionTransition> {
        match self.level {
            MotionLevel::Full => Some(self.enter),
            MotionLevel::Reduced => Some(
                self.enter
                    .preset(TransitionPreset::Fade)
                    .offset_px(0)
                    .duration_ms(self.enter.duration_ms / 2),
            ),
            MotionLevel::None => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_follow_the_duration_tokens() {
        let config = MotionConfig::default();
        assert_eq!(config.level, MotionLevel::Full);
        assert_eq!(config.enter.duration_ms, DURATIONS.entering);
        assert_eq!(config.enter.easing, Easing::EaseOut);
    }

    #[test]
    fn reduced_motion_keeps_only_a_short_fade() {
        let config = MotionConfig::new()
            .enter(MotionTransition::new().preset(TransitionPreset::SlideUp))
            .level(MotionLevel::Reduced);
        let enter = config.effective_enter();
        assert_eq!(enter.map(|t| t.preset), Some(TransitionPreset::Fade));
        assert_eq!(enter.map(|t| t.offset_px), Some(0));
        assert_eq!(enter.map(|t| t.duration_ms), Some(DURATIONS.entering / 2));
        assert_eq!(config.level(MotionLevel::None).effective_enter(), None);
    }
}
