//! Core runtime: slider state machine and the event bus it publishes on.

pub mod event_bus;
pub mod slider;
pub mod slider_events;

pub use event_bus::{BoxedEvent, EventBus, EventEmitter, OptionalEmitter, downcast_event};
pub use slider::{SlideChange, Slider, SliderOptions};
pub use slider_events::{AutoplayToggled, ChangeCause, PauseToggled, SlideChanged, SliderUnmounted};
