//! Slider events, published on the event bus.

use serde::Serialize;

use crate::motion::SlideDirection;

/// What moved the slider
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeCause {
    /// `go_to`, `next`, `prev`, `advance`
    Navigation,
    /// Autoplay deadline reached
    Autoplay,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SlideChanged {
    pub slider: String,
    pub from: usize,
    pub to: usize,
    pub direction: SlideDirection,
    pub cause: ChangeCause,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct AutoplayToggled {
    pub slider: String,
    pub enabled: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PauseToggled {
    pub slider: String,
    pub paused: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SliderUnmounted {
    pub slider: String,
    pub last_index: usize,
}
