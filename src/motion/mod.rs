//! Animation helpers: easing, visual state, the engine boundary, named recipes
//! and an in-process engine.

pub mod ease;
pub mod engine;
pub mod handle;
pub mod recipes;
pub mod registry;
pub mod scroll;
pub mod stage;
pub mod state;

pub use ease::{CubicBezier, Ease, EaseDir};
pub use engine::{AnimationEngine, ViewportCallback};
pub use handle::{AnimationHandle, AnimationScope, Done};
pub use recipes::{
    BatchOptions, FadeInOptions, FloatingOptions, Motion, ParallaxOptions, ScaleOptions, SlideDirection,
    SlideTransitionOptions, StaggerOptions, TextRevealOptions,
};
pub use scroll::{Anchor, ScrollPosition, ScrollRange};
pub use stage::Stage;
pub use state::{ElementId, Target, Timing, VisualState};
