//! Visual state of an animated element, tween targets and timing.

use serde::{Deserialize, Serialize};

use super::ease::Ease;
use crate::design::utils::lerp;

/// Identity of an element registered with an engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ElementId(pub u64);

impl std::fmt::Display for ElementId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// What a recipe animates: a selector resolved by the engine, or explicit elements.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    Selector(String),
    Element(ElementId),
    Elements(Vec<ElementId>),
}

impl Target {
    pub fn selector(sel: impl Into<String>) -> Self {
        Self::Selector(sel.into())
    }
}

impl From<&str> for Target {
    fn from(sel: &str) -> Self {
        Self::Selector(sel.to_string())
    }
}

impl From<ElementId> for Target {
    fn from(id: ElementId) -> Self {
        Self::Element(id)
    }
}

impl From<&[ElementId]> for Target {
    fn from(ids: &[ElementId]) -> Self {
        Self::Elements(ids.to_vec())
    }
}

impl std::fmt::Display for Target {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Selector(sel) => write!(f, "{}", sel),
            Self::Element(id) => write!(f, "{}", id),
            Self::Elements(ids) => write!(f, "[{} elements]", ids.len()),
        }
    }
}

/// Animatable properties. Offsets in px, rotation in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VisualState {
    pub opacity: f32,
    pub x: f32,
    pub y: f32,
    pub scale: f32,
    pub rotation: f32,
}

impl VisualState {
    /// Fully visible, untransformed
    pub const RESTING: Self = Self {
        opacity: 1.0,
        x: 0.0,
        y: 0.0,
        scale: 1.0,
        rotation: 0.0,
    };

    /// Hidden and shifted down by `y`; the usual entrance start.
    pub fn hidden_below(y: f32) -> Self {
        Self { opacity: 0.0, y, ..Self::RESTING }
    }

    pub fn with_opacity(self, opacity: f32) -> Self {
        Self { opacity, ..self }
    }

    pub fn with_x(self, x: f32) -> Self {
        Self { x, ..self }
    }

    pub fn with_y(self, y: f32) -> Self {
        Self { y, ..self }
    }

    pub fn with_scale(self, scale: f32) -> Self {
        Self { scale, ..self }
    }

    pub fn with_rotation(self, rotation: f32) -> Self {
        Self { rotation, ..self }
    }

    pub fn is_resting(&self) -> bool {
        *self == Self::RESTING
    }

    /// Per-property interpolation; `t` is not clamped so overshooting eases work.
    pub fn lerp(&self, to: &Self, t: f32) -> Self {
        Self {
            opacity: lerp(self.opacity, to.opacity, t),
            x: lerp(self.x, to.x, t),
            y: lerp(self.y, to.y, t),
            scale: lerp(self.scale, to.scale, t),
            rotation: lerp(self.rotation, to.rotation, t),
        }
    }
}

impl Default for VisualState {
    fn default() -> Self {
        Self::RESTING
    }
}

/// Tween timing in seconds
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Timing {
    pub duration: f32,
    pub delay: f32,
    /// Extra delay per element, in target order
    pub stagger: f32,
    pub ease: Ease,
    /// Repeat forever, alternating direction
    pub yoyo: bool,
}

impl Timing {
    pub fn new(duration: f32, ease: Ease) -> Self {
        Self { duration, ease, ..Self::default() }
    }

    pub fn delay(self, delay: f32) -> Self {
        Self { delay, ..self }
    }

    pub fn stagger(self, stagger: f32) -> Self {
        Self { stagger, ..self }
    }

    pub fn yoyo(self) -> Self {
        Self { yoyo: true, ..self }
    }

    /// Seconds until the element at `position` finishes its first pass
    pub fn finish_time(&self, position: usize) -> f32 {
        self.delay + self.stagger * position as f32 + self.duration
    }
}

impl Default for Timing {
    fn default() -> Self {
        Self {
            duration: 0.5,
            delay: 0.0,
            stagger: 0.0,
            ease: Ease::default(),
            yoyo: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resting_and_lerp() {
        let away = VisualState::hidden_below(50.0);
        assert!(!away.is_resting());
        assert_eq!(away.lerp(&VisualState::RESTING, 1.0), VisualState::RESTING);
        let mid = away.lerp(&VisualState::RESTING, 0.5);
        assert_eq!(mid.opacity, 0.5);
        assert_eq!(mid.y, 25.0);
        assert_eq!(mid.scale, 1.0);
        // overshoot is preserved
        assert!(away.lerp(&VisualState::RESTING, 1.2).opacity > 1.0);
    }

    #[test]
    fn test_state_deserialize_defaults() {
        let state: VisualState = serde_json::from_str(r#"{"opacity":0,"y":30}"#).unwrap();
        assert_eq!(state, VisualState::hidden_below(30.0));
    }

    #[test]
    fn test_timing_finish() {
        let t = Timing::new(0.6, Ease::Linear).stagger(0.15).delay(0.1);
        assert!((t.finish_time(0) - 0.7).abs() < 1e-6);
        assert!((t.finish_time(2) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_target_conversions() {
        assert_eq!(Target::from(".card"), Target::Selector(".card".into()));
        assert_eq!(Target::from(ElementId(3)).to_string(), "#3");
        let ids = [ElementId(1), ElementId(2)];
        assert_eq!(Target::from(&ids[..]).to_string(), "[2 elements]");
    }
}
