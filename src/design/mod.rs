//! Design system: tokens, host environment queries and small UI utilities.

pub mod env;
pub mod tokens;
pub mod utils;

pub use env::{Breakpoint, Environment, StaticEnvironment, current_breakpoint, matches_breakpoint, prefers_reduced_motion};
pub use utils::{Debounced, Debouncer, Throttle, Throttled, clamp, class_names, generate_id, lerp};
