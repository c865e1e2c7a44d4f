//! Durations, easing curves and keyframe descriptors.

use std::time::Duration;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Durations {
    pub shortest: u16,
    pub shorter: u16,
    pub short: u16,
    pub standard: u16,
    pub complex: u16,
    pub entering: u16,
    pub leaving: u16,
}

/// In milliseconds.
pub const DURATIONS: Durations = Durations {
    shortest: 150,
    shorter: 200,
    short: 250,
    standard: 300,
    complex: 375,
    entering: 225,
    leaving: 195,
};

pub const fn millis(value: u16) -> Duration {
    Duration::from_millis(value as u64)
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Easing {
    Linear,
    EaseInOut,
    EaseOut,
    EaseIn,
    Sharp,
}

impl Easing {
    pub const fn css(self) -> &'static str {
        match self {
            Self::Linear => "linear",
            Self::EaseInOut => "cubic-bezier(0.4, 0, 0.2, 1)",
            Self::EaseOut => "cubic-bezier(0.0, 0, 0.2, 1)",
            Self::EaseIn => "cubic-bezier(0.4, 0, 1, 1)",
            Self::Sharp => "cubic-bezier(0.4, 0, 0.6, 1)",
        }
    }

    /// Control points `(x1, y1, x2, y2)` of [`Easing::css`]; `None` for linear.
    pub const fn control_points(self) -> Option<[f32; 4]> {
        match self {
            Self::Linear => None,
            Self::EaseInOut => Some([0.4, 0.0, 0.2, 1.0]),
            Self::EaseOut => Some([0.0, 0.0, 0.2, 1.0]),
            Self::EaseIn => Some([0.4, 0.0, 1.0, 1.0]),
            Self::Sharp => Some([0.4, 0.0, 0.6, 1.0]),
        }
    }

    /// Progress along the same curve the CSS string describes.
    pub fn apply(self, delta: f32) -> f32 {
        let delta = delta.clamp(0.0, 1.0);
        match self.control_points() {
            None => delta,
            Some(points) => cubic_bezier(points, delta),
        }
    }
}

/// Solves x(t) = `x` by bisection, then returns y(t). x(t) is monotonic
/// because both x control points lie in `[0, 1]`.
fn cubic_bezier([x1, y1, x2, y2]: [f32; 4], x: f32) -> f32 {
    let sample = |p1: f32, p2: f32, t: f32| {
        let u = 1.0 - t;
        3.0 * u * u * t * p1 + 3.0 * u * t * t * p2 + t * t * t
    };
    let (mut low, mut high) = (0.0_f32, 1.0_f32);
    let mut t = x;
    for _ in 0..32 {
        let current = sample(x1, x2, t);
        if (current - x).abs() < 1e-5 {
            break;
        }
        if current < x {
            low = t;
        } else {
            high = t;
        }
        t = (low + high) / 2.0;
    }
    sample(y1, y2, t)
}

/// Builds a CSS transition declaration covering every listed property.
pub fn transition(properties: &[&str], duration_ms: u16, easing: Easing) -> String {
    if properties.is_empty() {
        return "none".to_string();
    }
    properties
        .iter()
        .map(|property| format!("{property} {duration_ms}ms {}", easing.css()))
        .collect::<Vec<_>>()
        .join(", ")
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Keyframe {
    pub offset: f32,
    pub opacity: f32,
    pub translate_y: f32,
    pub scale: f32,
    pub rotate_deg: f32,
}

impl Keyframe {
    const fn new(offset: f32, opacity: f32, translate_y: f32, scale: f32, rotate_deg: f32) -> Self {
        Self {
            offset,
            opacity,
            translate_y,
            scale,
            rotate_deg,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct KeyframeSet {
    pub name: &'static str,
    pub frames: &'static [Keyframe],
}

pub const FADE_IN: KeyframeSet = KeyframeSet {
    name: "fade-in",
    frames: &[
        Keyframe::new(0.0, 0.0, 0.0, 1.0, 0.0),
        Keyframe::new(1.0, 1.0, 0.0, 1.0, 0.0),
    ],
};

pub const SLIDE_UP: KeyframeSet = KeyframeSet {
    name: "slide-up",
    frames: &[
        Keyframe::new(0.0, 0.0, 8.0, 1.0, 0.0),
        Keyframe::new(1.0, 1.0, 0.0, 1.0, 0.0),
    ],
};

pub const SCALE_IN: KeyframeSet = KeyframeSet {
    name: "scale-in",
    frames: &[
        Keyframe::new(0.0, 0.0, 0.0, 0.95, 0.0),
        Keyframe::new(1.0, 1.0, 0.0, 1.0, 0.0),
    ],
};

pub const PULSE: KeyframeSet = KeyframeSet {
    name: "pulse",
    frames: &[
        Keyframe::new(0.0, 1.0, 0.0, 1.0, 0.0),
        Keyframe::new(0.5, 0.5, 0.0, 1.0, 0.0),
        Keyframe::new(1.0, 1.0, 0.0, 1.0, 0.0),
    ],
};

pub const SPIN: KeyframeSet = KeyframeSet {
    name: "spin",
    frames: &[
        Keyframe::new(0.0, 1.0, 0.0, 1.0, 0.0),
        Keyframe::new(1.0, 1.0, 0.0, 1.0, 360.0),
    ],
};

impl KeyframeSet {
    /// Linear interpolation between the two frames surrounding `progress`.
    pub fn sample(&self, progress: f32) -> Keyframe {
        let progress = progress.clamp(0.0, 1.0);
        let Some(first) = self.frames.first().copied() else {
            return Keyframe::new(progress, 1.0, 0.0, 1.0, 0.0);
        };
        let mut previous = first;
        for frame in self.frames {
            if frame.offset >= progress {
                let span = frame.offset - previous.offset;
                if span <= f32::EPSILON {
                    return *frame;
                }
                let t = (progress - previous.offset) / span;
                let lerp = |a: f32, b: f32| a + (b - a) * t;
                return Keyframe::new(
                    progress,
                    lerp(previous.opacity, frame.opacity),
                    lerp(previous.translate_y, frame.translate_y),
                    lerp(previous.scale, frame.scale),
                    lerp(previous.rotate_deg, frame.rotate_deg),
                );
            }
            previous = *frame;
        }
        previous
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transition_lists_every_property() {
        let value = transition(
            &["background-color", "color"],
            DURATIONS.shortest,
            Easing::EaseInOut,
        );
        assert_eq!(
            value,
            "background-color 150ms cubic-bezier(0.4, 0, 0.2, 1), \
             color 150ms cubic-bezier(0.4, 0, 0.2, 1)"
        );
        assert_eq!(transition(&[], 100, Easing::Linear), "none");
    }

    #[test]
    fn keyframes_interpolate_between_frames() {
        let mid = PULSE.sample(0.25);
        assert!((mid.opacity - 0.75).abs() < 1e-6);
        assert_eq!(FADE_IN.sample(0.0).opacity, 0.0);
        assert_eq!(FADE_IN.sample(2.0).opacity, 1.0);
        assert!((SPIN.sample(0.5).rotate_deg - 180.0).abs() < 1e-4);
    }

    #[test]
    fn easing_endpoints_are_fixed() {
        let all = [
            Easing::Linear,
            Easing::EaseInOut,
            Easing::EaseOut,
            Easing::EaseIn,
            Easing::Sharp,
        ];
        for easing in all {
            assert!(easing.apply(0.0).abs() < 1e-4, "{easing:?}");
            assert!((easing.apply(1.0) - 1.0).abs() < 1e-4, "{easing:?}");
            let mut previous = 0.0;
            for step in 1..=20 {
                let value = easing.apply(step as f32 / 20.0);
                assert!(value + 1e-4 >= previous, "{easing:?} at {step}");
                previous = value;
            }
        }
    }

    #[test]
    fn curves_follow_their_css_control_points() {
        assert!(Easing::EaseIn.apply(0.5) < 0.5);
        assert!(Easing::EaseOut.apply(0.5) > 0.5);
        assert!((Easing::EaseInOut.apply(0.5) - 0.5).abs() < 1e-3);
        assert!((Easing::Sharp.apply(0.5) - 0.5).abs() < 1e-3);
        assert!(Easing::EaseInOut.apply(0.25) - Easing::Sharp.apply(0.25) > 0.05);
        for easing in [Easing::EaseInOut, Easing::EaseOut, Easing::EaseIn, Easing::Sharp] {
            let [x1, _, x2, _] = easing.control_points().unwrap_or_default();
            assert!((0.0..=1.0).contains(&x1) && (0.0..=1.0).contains(&x2));
        }
    }
}
