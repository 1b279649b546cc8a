//! The boundary to whatever actually moves pixels.
//!
//! Recipes only talk to an [`AnimationEngine`]. Engines resolve targets to
//! elements, run tweens against their own clock and evaluate viewport
//! observers against their own scroll position. Callbacks must be invoked with
//! no engine lock held: handlers start tweens and cancel observers.

use std::sync::Arc;

use super::handle::AnimationHandle;
use super::scroll::ScrollRange;
use super::state::{ElementId, Target, Timing, VisualState};

/// Called with the elements that crossed an observer boundary together
pub type ViewportCallback = Arc<dyn Fn(&[ElementId]) + Send + Sync>;

pub trait AnimationEngine: Send + Sync {
    /// Apply `state` immediately to every element of `target`
    fn set(&self, target: &Target, state: VisualState);

    /// Tween every element of `target` from `from` to `to`
    fn start_tween(&self, target: &Target, from: VisualState, to: VisualState, timing: Timing) -> AnimationHandle;

    /// Watch elements of `target` scroll through `range`.
    ///
    /// `on_enter` fires when elements pass `range.start` scrolling down,
    /// `on_leave` when they pass `range.end`.
    fn observe_viewport(
        &self,
        target: &Target,
        range: ScrollRange,
        on_enter: Option<ViewportCallback>,
        on_leave: Option<ViewportCallback>,
    ) -> AnimationHandle;

    /// Tie `from`..`to` linearly to scroll progress through `range`
    fn start_scrub(&self, target: &Target, from: VisualState, to: VisualState, range: ScrollRange) -> AnimationHandle;

    /// Deregister every viewport observer and scrub. Returns how many were removed.
    fn kill_observers(&self) -> usize;
}
