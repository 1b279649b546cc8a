//! folio - portfolio site core
//!
//! Design tokens, site content, motion recipes and the hero slider, with a
//! deterministic in-process animation engine for driving all of it offline.

// Design system (tokens, environment, utilities)
pub mod design;

// Static content
pub mod data;

// Animation recipes and engine
pub mod motion;

// Slider state machine and event bus
pub mod core;

// App modules
pub mod cli;
pub mod config;
pub mod paths;
pub mod runner;

pub use self::core::{EventBus, SlideChange, Slider, SliderOptions};
pub use design::{Breakpoint, Environment, StaticEnvironment};
pub use motion::{AnimationEngine, AnimationHandle, AnimationScope, Motion, SlideDirection, Stage, Target};
