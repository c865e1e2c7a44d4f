use std::time::Duration;

use gpui::{Animation, AnimationElement, AnimationExt, ElementId, Styled, px};

use crate::motion::{MotionConfig, MotionTransition, TransitionPreset};
use crate::tokens::animations::KeyframeSet;

pub trait TransitionExt: Sized + AnimationExt + Styled + 'static {
    fn with_enter_transition(
        self,
        id: impl Into<ElementId>,
        motion: MotionConfig,
    ) -> AnimationElement<Self> {
        let Some(profile) = motion.effective_enter() else {
            return self
                .with_animation(id, Animation::new(Duration::from_millis(1)), |this, _| this);
        };

        let animation = Animation::new(Duration::from_millis(u64::from(profile.duration_ms)))
            .with_easing(move |delta| profile.easing.apply(delta));
        self.with_animation(id, animation, move |this, delta| {
            apply_preset(this, profile, delta)
        })
    }

    /// Loops a keyframe set's opacity, used for busy indicators.
    fn with_keyframes(
        self,
        id: impl Into<ElementId>,
        keyframes: KeyframeSet,
        duration_ms: u16,
    ) -> AnimationElement<Self> {
        let animation = Animation::new(Duration::from_millis(u64::from(duration_ms))).repeat();
        self.with_animation(id, animation, move |this, delta| {
            this.opacity(keyframes.sample(delta).opacity)
        })
    }
}

impl<E> TransitionExt for E where E: Sized + AnimationExt + Styled + 'static {}

pub fn offset_with_progress(offset_px: i16, progress: f32) -> f32 {
    f32::from(offset_px) * (1.0 - progress)
}

/// Horizontal and vertical margin shift of a preset at `offset`. Positive
/// values push right and down.
pub fn preset_offset(preset: TransitionPreset, offset: f32) -> (f32, f32) {
    match preset {
        TransitionPreset::None | TransitionPreset::Fade => (0.0, 0.0),
        TransitionPreset::ScaleIn => (0.0, 0.0),
        TransitionPreset::SlideUp => (0.0, offset),
        TransitionPreset::SlideDown => (0.0, -offset),
        TransitionPreset::SlideLeft => (offset, 0.0),
        TransitionPreset::SlideRight => (-offset, 0.0),
    }
}

fn apply_preset<E: Styled>(element: E, profile: MotionTransition, progress: f32) -> E {
    if profile.preset == TransitionPreset::None {
        return element;
    }
    let progress = progress.clamp(0.0, 1.0);
    let offset = offset_with_progress(profile.offset_px, progress);
    let (x, y) = preset_offset(profile.preset, offset);
    let element = element.opacity(progress);
    match profile.preset {
        TransitionPreset::SlideLeft | TransitionPreset::SlideRight => element.ml(px(x)),
        TransitionPreset::SlideUp | TransitionPreset::SlideDown => element.mt(px(y)),
        _ => element,
    }
}
