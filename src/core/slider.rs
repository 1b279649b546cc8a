//! Slider state machine: index, autoplay, pause, direction.
//!
//! # Timing model
//!
//! The slider never reads the clock. Every operation takes `now: Instant`
//! and the caller's loop calls [`Slider::tick`] periodically, the same way a
//! playback loop polls for the next frame. The autoplay timer is live iff
//! autoplay is enabled AND the slider is not paused.
//!
//! - Any index change (manual or automatic) restarts the timer from `now`,
//!   so the interval is measured from the most recent transition.
//! - Unpausing schedules a full fresh interval; there is no remaining-time
//!   countdown.
//! - A late tick advances once; missed intervals are not caught up.
//!
//! # Transitions
//!
//! With a container target configured, every change starts a
//! `slide_transition` on it and cancels the previous one first, so two
//! transitions never run on the container at once.

use std::time::{Duration, Instant};

use anyhow::{Result, bail};
use log::{debug, info, trace, warn};

use super::event_bus::OptionalEmitter;
use super::slider_events::{AutoplayToggled, ChangeCause, PauseToggled, SlideChanged, SliderUnmounted};
use crate::design::tokens::DEFAULT_AUTOPLAY_INTERVAL;
use crate::motion::{AnimationHandle, Motion, SlideDirection, SlideTransitionOptions, Target};

#[derive(Debug, Clone, PartialEq)]
pub struct SliderOptions {
    /// Used in logs and events
    pub name: String,
    pub initial_slide: usize,
    pub autoplay: bool,
    pub interval: Duration,
    /// Element the slide transition animates; `None` disables transitions
    pub container: Option<Target>,
    pub transition: SlideTransitionOptions,
}

impl Default for SliderOptions {
    fn default() -> Self {
        Self {
            name: "slider".to_string(),
            initial_slide: 0,
            autoplay: true,
            interval: DEFAULT_AUTOPLAY_INTERVAL,
            container: None,
            transition: SlideTransitionOptions::default(),
        }
    }
}

impl SliderOptions {
    /// Hero banner: autoplays every 6 s
    pub fn hero() -> Self {
        Self {
            name: "hero".to_string(),
            container: Some(Target::selector(".hero-slide-content")),
            ..Self::default()
        }
    }

    /// Hobbies: manual navigation only
    pub fn hobbies() -> Self {
        Self {
            name: "hobbies".to_string(),
            autoplay: false,
            container: Some(Target::selector(".hobby-content")),
            ..Self::default()
        }
    }
}

/// Outcome of a navigation or autoplay step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlideChange {
    pub from: usize,
    pub to: usize,
    pub direction: SlideDirection,
    pub cause: ChangeCause,
}

pub struct Slider {
    name: String,
    len: usize,
    current: usize,
    direction: SlideDirection,
    autoplay: bool,
    paused: bool,
    interval: Duration,
    /// Next autoplay tick; `Some` only while the timer is live
    deadline: Option<Instant>,
    container: Option<Target>,
    transition_opts: SlideTransitionOptions,
    /// In-flight transition on the container
    transition: Option<AnimationHandle>,
    motion: Motion,
    emitter: OptionalEmitter,
    mounted: bool,
}

impl Slider {
    /// Mount a slider over `len` slides.
    pub fn new(len: usize, options: SliderOptions, motion: Motion, now: Instant) -> Result<Self> {
        if len == 0 {
            bail!("Slider '{}' needs at least one slide", options.name);
        }
        if options.initial_slide >= len {
            bail!(
                "Slider '{}': initial slide {} out of range [0, {}]",
                options.name,
                options.initial_slide,
                len - 1
            );
        }
        if options.interval.is_zero() {
            bail!("Slider '{}': autoplay interval must be positive", options.name);
        }

        let mut slider = Self {
            name: options.name,
            len,
            current: options.initial_slide,
            direction: SlideDirection::Next,
            autoplay: options.autoplay,
            paused: false,
            interval: options.interval,
            deadline: None,
            container: options.container,
            transition_opts: options.transition,
            transition: None,
            motion,
            emitter: OptionalEmitter::dummy(),
            mounted: true,
        };
        slider.reschedule(now);
        info!(
            "Slider '{}' mounted: {} slides, at {}, autoplay {} every {}ms",
            slider.name,
            len,
            slider.current,
            slider.autoplay,
            slider.interval.as_millis()
        );
        Ok(slider)
    }

    /// Publish events through `emitter`
    pub fn with_emitter(mut self, emitter: impl Into<OptionalEmitter>) -> Self {
        self.emitter = emitter.into();
        self
    }

    // ========== Navigation ==========

    /// Jump to `index`.
    ///
    /// Out-of-range indices are rejected and leave the slider untouched.
    /// Jumping to the current slide is a no-op returning `Ok(None)`.
    ///
    /// Direction is the shorter way round the ring, ties going `Next`. It
    /// differs from a plain `index > current` only when wrapping is shorter:
    /// with 4 slides, 0 to 3 is `Prev` and 3 to 0 is `Next`.
    pub fn go_to(&mut self, index: usize, now: Instant) -> Result<Option<SlideChange>> {
        if index >= self.len {
            warn!(
                "Slider '{}': rejected go_to({}), valid range is [0, {}]",
                self.name,
                index,
                self.len - 1
            );
            bail!("Slide index {} out of range [0, {}]", index, self.len - 1);
        }
        if index == self.current {
            trace!("Slider '{}': already at {}", self.name, index);
            return Ok(None);
        }
        let direction = self.direction_to(index);
        Ok(Some(self.change(index, direction, ChangeCause::Navigation, now)))
    }

    /// Step one slide, wrapping. Always succeeds.
    pub fn advance(&mut self, direction: SlideDirection, now: Instant) -> SlideChange {
        let to = self.neighbour(direction);
        self.change(to, direction, ChangeCause::Navigation, now)
    }

    pub fn next(&mut self, now: Instant) -> SlideChange {
        self.advance(SlideDirection::Next, now)
    }

    pub fn prev(&mut self, now: Instant) -> SlideChange {
        self.advance(SlideDirection::Prev, now)
    }

    // ========== Timer ==========

    pub fn set_autoplay(&mut self, enabled: bool, now: Instant) {
        if self.autoplay == enabled {
            return;
        }
        self.autoplay = enabled;
        self.reschedule(now);
        debug!("Slider '{}': autoplay {}", self.name, if enabled { "on" } else { "off" });
        self.emitter.emit(AutoplayToggled {
            slider: self.name.clone(),
            enabled,
        });
    }

    /// Pointer/focus over the slider. Unpausing starts a full fresh interval.
    pub fn set_paused(&mut self, paused: bool, now: Instant) {
        if self.paused == paused {
            return;
        }
        self.paused = paused;
        self.reschedule(now);
        debug!("Slider '{}': {}", self.name, if paused { "paused" } else { "resumed" });
        self.emitter.emit(PauseToggled {
            slider: self.name.clone(),
            paused,
        });
    }

    /// Advance if the autoplay deadline has passed.
    pub fn tick(&mut self, now: Instant) -> Option<SlideChange> {
        let deadline = self.deadline?;
        if now < deadline {
            return None;
        }
        trace!("Slider '{}': autoplay tick", self.name);
        let to = self.neighbour(SlideDirection::Next);
        Some(self.change(to, SlideDirection::Next, ChangeCause::Autoplay, now))
    }

    // ========== Teardown ==========

    /// Cancel the timer and the in-flight transition. Idempotent.
    pub fn unmount(&mut self) {
        if !self.mounted {
            return;
        }
        self.mounted = false;
        self.deadline = None;
        if let Some(mut transition) = self.transition.take() {
            transition.cancel();
        }
        info!("Slider '{}' unmounted at slide {}", self.name, self.current);
        self.emitter.emit(SliderUnmounted {
            slider: self.name.clone(),
            last_index: self.current,
        });
    }

    // ========== Queries ==========

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn len(&self) -> usize {
        self.len
    }

    /// Direction of the last change (`Next` before any)
    pub fn direction(&self) -> SlideDirection {
        self.direction
    }

    pub fn is_autoplay(&self) -> bool {
        self.autoplay
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    pub fn is_timer_live(&self) -> bool {
        self.mounted && self.autoplay && !self.paused
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn next_tick_at(&self) -> Option<Instant> {
        self.deadline
    }

    /// A slide transition is still animating
    pub fn has_transition(&self) -> bool {
        self.transition.as_ref().is_some_and(AnimationHandle::is_running)
    }

    // ========== Internals ==========

    fn neighbour(&self, direction: SlideDirection) -> usize {
        match direction {
            SlideDirection::Next => (self.current + 1) % self.len,
            SlideDirection::Prev => (self.current + self.len - 1) % self.len,
        }
    }

    /// Shorter way round; a tie goes forward.
    fn direction_to(&self, index: usize) -> SlideDirection {
        let forward = (index + self.len - self.current) % self.len;
        if forward * 2 <= self.len {
            SlideDirection::Next
        } else {
            SlideDirection::Prev
        }
    }

    fn reschedule(&mut self, now: Instant) {
        self.deadline = self.is_timer_live().then(|| now + self.interval);
    }

    fn change(&mut self, to: usize, direction: SlideDirection, cause: ChangeCause, now: Instant) -> SlideChange {
        let from = self.current;
        self.current = to;
        self.direction = direction;
        self.reschedule(now);

        if let Some(mut previous) = self.transition.take() {
            previous.cancel();
        }
        if let (true, Some(container)) = (self.mounted, &self.container) {
            let handle = self.motion.slide_transition(container, direction, self.transition_opts);
            self.transition = handle.is_active().then_some(handle);
        }

        debug!(
            "Slider '{}': {} -> {} ({}, {:?})",
            self.name,
            from,
            to,
            direction.as_str(),
            cause
        );
        self.emitter.emit(SlideChanged {
            slider: self.name.clone(),
            from,
            to,
            direction,
            cause,
        });
        SlideChange { from, to, direction, cause }
    }
}

impl Drop for Slider {
    fn drop(&mut self) {
        self.unmount();
    }
}

impl std::fmt::Debug for Slider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Slider")
            .field("name", &self.name)
            .field("current", &self.current)
            .field("len", &self.len)
            .field("autoplay", &self.autoplay)
            .field("paused", &self.paused)
            .field("direction", &self.direction)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::event_bus::{EventBus, downcast_event};
    use crate::design::env::StaticEnvironment;
    use crate::motion::Stage;
    use proptest::prelude::*;
    use std::sync::Arc;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    fn motion_on(stage: &Stage, reduced: bool) -> Motion {
        let env = Arc::new(StaticEnvironment::new(1440, 900).with_reduced_motion(reduced));
        Motion::new(Arc::new(stage.clone()), env)
    }

    fn slider(len: usize, options: SliderOptions, t0: Instant) -> Slider {
        Slider::new(len, options, motion_on(&Stage::default(), false), t0).unwrap()
    }

    #[test]
    fn test_autoplay_scenario() {
        let t0 = Instant::now();
        let mut s = slider(4, SliderOptions::default(), t0);
        assert_eq!(s.current(), 0);
        assert!(s.is_timer_live());
        assert_eq!(s.next_tick_at(), Some(t0 + ms(6000)));

        assert_eq!(s.tick(t0 + ms(5999)), None);
        let change = s.tick(t0 + ms(6000)).unwrap();
        assert_eq!(change.to, 1);
        assert_eq!(change.direction, SlideDirection::Next);
        assert_eq!(change.cause, ChangeCause::Autoplay);
        assert_eq!(s.current(), 1);
    }

    #[test]
    fn test_go_to_resets_clock() {
        let t0 = Instant::now();
        let mut s = slider(4, SliderOptions::default(), t0);
        s.go_to(3, t0 + ms(2000)).unwrap();
        assert_eq!(s.current(), 3);

        assert_eq!(s.tick(t0 + ms(6000)), None);
        assert_eq!(s.current(), 3);
        let change = s.tick(t0 + ms(8000)).unwrap();
        assert_eq!((change.from, change.to), (3, 0));
    }

    #[test]
    fn test_go_to_rejects_out_of_range() {
        let t0 = Instant::now();
        let mut s = slider(4, SliderOptions::default(), t0);
        s.go_to(2, t0).unwrap();
        let deadline = s.next_tick_at();

        assert!(s.go_to(4, t0 + ms(100)).is_err());
        assert!(s.go_to(usize::MAX, t0 + ms(100)).is_err());
        assert_eq!(s.current(), 2);
        assert_eq!(s.next_tick_at(), deadline);
    }

    #[test]
    fn test_go_to_same_is_noop() {
        let t0 = Instant::now();
        let mut s = slider(4, SliderOptions::default(), t0);
        assert_eq!(s.go_to(0, t0 + ms(3000)).unwrap(), None);
        assert_eq!(s.next_tick_at(), Some(t0 + ms(6000)));
    }

    #[test]
    fn test_go_to_direction() {
        let t0 = Instant::now();
        let mut s = slider(4, SliderOptions::default(), t0);
        assert_eq!(s.go_to(1, t0).unwrap().map(|c| c.direction), Some(SlideDirection::Next));
        assert_eq!(s.go_to(0, t0).unwrap().map(|c| c.direction), Some(SlideDirection::Prev));
        // 0 -> 3 is one step back
        assert_eq!(s.go_to(3, t0).unwrap().map(|c| c.direction), Some(SlideDirection::Prev));
        // 3 -> 1: two either way, tie goes forward
        assert_eq!(s.go_to(1, t0).unwrap().map(|c| c.direction), Some(SlideDirection::Next));
        assert_eq!(s.direction(), SlideDirection::Next);
        s.go_to(3, t0).unwrap();
        // 3 -> 0 wraps forward even though 0 < 3
        assert_eq!(s.go_to(0, t0).unwrap().map(|c| c.direction), Some(SlideDirection::Next));
    }

    #[test]
    fn test_advance_wraps() {
        let t0 = Instant::now();
        let mut s = slider(4, SliderOptions::default(), t0);
        assert_eq!(s.prev(t0).to, 3);
        assert_eq!(s.direction(), SlideDirection::Prev);
        assert_eq!(s.next(t0).to, 0);
        for _ in 0..4 {
            s.next(t0);
        }
        assert_eq!(s.current(), 0);
    }

    #[test]
    fn test_single_slide() {
        let t0 = Instant::now();
        let mut s = slider(1, SliderOptions::default(), t0);
        assert_eq!(s.next(t0).to, 0);
        assert_eq!(s.prev(t0).to, 0);
        assert_eq!(s.tick(t0 + ms(6000)).map(|c| c.to), Some(0));
    }

    #[test]
    fn test_invalid_construction() {
        let t0 = Instant::now();
        let motion = motion_on(&Stage::default(), false);
        assert!(Slider::new(0, SliderOptions::default(), motion.clone(), t0).is_err());
        let options = SliderOptions { initial_slide: 4, ..SliderOptions::default() };
        assert!(Slider::new(4, options, motion.clone(), t0).is_err());
        let options = SliderOptions { interval: Duration::ZERO, ..SliderOptions::default() };
        assert!(Slider::new(4, options, motion, t0).is_err());
    }

    #[test]
    fn test_pause_suspends_and_resumes_fresh() {
        let t0 = Instant::now();
        let mut s = slider(4, SliderOptions::default(), t0);
        s.set_paused(true, t0 + ms(5000));
        assert!(!s.is_timer_live());
        assert_eq!(s.next_tick_at(), None);
        assert_eq!(s.tick(t0 + ms(20_000)), None);
        assert_eq!(s.current(), 0);

        s.set_paused(false, t0 + ms(21_000));
        assert_eq!(s.next_tick_at(), Some(t0 + ms(27_000)));
        assert_eq!(s.tick(t0 + ms(26_999)), None);
        assert_eq!(s.tick(t0 + ms(27_000)).map(|c| c.to), Some(1));
    }

    #[test]
    fn test_navigation_while_paused_keeps_timer_off() {
        let t0 = Instant::now();
        let mut s = slider(4, SliderOptions::default(), t0);
        s.set_paused(true, t0);
        s.next(t0 + ms(100));
        assert_eq!(s.next_tick_at(), None);
    }

    #[test]
    fn test_autoplay_toggle() {
        let t0 = Instant::now();
        let options = SliderOptions { autoplay: false, ..SliderOptions::default() };
        let mut s = slider(4, options, t0);
        assert!(!s.is_timer_live());
        assert_eq!(s.tick(t0 + ms(60_000)), None);

        s.set_autoplay(true, t0 + ms(1000));
        assert_eq!(s.next_tick_at(), Some(t0 + ms(7000)));
        s.set_autoplay(true, t0 + ms(2000));
        assert_eq!(s.next_tick_at(), Some(t0 + ms(7000)));
        s.set_autoplay(false, t0 + ms(3000));
        assert_eq!(s.next_tick_at(), None);
    }

    #[test]
    fn test_late_tick_no_catch_up() {
        let t0 = Instant::now();
        let mut s = slider(4, SliderOptions::default(), t0);
        let change = s.tick(t0 + ms(30_000)).unwrap();
        assert_eq!(change.to, 1);
        assert_eq!(s.tick(t0 + ms(30_001)), None);
        assert_eq!(s.next_tick_at(), Some(t0 + ms(36_000)));
    }

    #[test]
    fn test_transition_replaced_not_stacked() {
        let t0 = Instant::now();
        let stage = Stage::default();
        stage.add_element(&[".hero-slide-content"], 0.0, 900.0);
        let mut s = Slider::new(4, SliderOptions::hero(), motion_on(&stage, false), t0).unwrap();
        assert!(!s.has_transition());

        s.next(t0);
        assert!(s.has_transition());
        assert_eq!(stage.live_tweens(), 1);
        s.go_to(3, t0 + ms(100)).unwrap();
        s.prev(t0 + ms(200));
        assert_eq!(stage.live_tweens(), 1);

        s.unmount();
        assert!(!s.has_transition());
        assert_eq!(stage.live_tweens(), 0);
        assert_eq!(s.tick(t0 + ms(60_000)), None);
        s.unmount();
    }

    #[test]
    fn test_transition_ends_with_tween() {
        let t0 = Instant::now();
        let stage = Stage::default();
        stage.add_element(&[".hero-slide-content"], 0.0, 900.0);
        let mut s = Slider::new(4, SliderOptions::hero(), motion_on(&stage, false), t0).unwrap();

        s.next(t0);
        stage.advance(ms(300));
        assert!(s.has_transition());
        stage.advance(ms(5000));
        assert_eq!(stage.live_tweens(), 0);
        assert!(!s.has_transition());

        // the next change starts a fresh one
        s.next(t0 + ms(6000));
        assert!(s.has_transition());
    }

    #[test]
    fn test_reduced_motion_has_no_transition() {
        let t0 = Instant::now();
        let stage = Stage::default();
        stage.add_element(&[".hero-slide-content"], 0.0, 900.0);
        let mut s = Slider::new(4, SliderOptions::hero(), motion_on(&stage, true), t0).unwrap();
        s.next(t0);
        assert!(!s.has_transition());
        assert_eq!(stage.live_tweens(), 0);
    }

    #[test]
    fn test_drop_cancels_transition() {
        let t0 = Instant::now();
        let stage = Stage::default();
        stage.add_element(&[".hero-slide-content"], 0.0, 900.0);
        {
            let mut s = Slider::new(4, SliderOptions::hero(), motion_on(&stage, false), t0).unwrap();
            s.next(t0);
            assert_eq!(stage.live_tweens(), 1);
        }
        assert_eq!(stage.live_tweens(), 0);
    }

    #[test]
    fn test_events_published() {
        let t0 = Instant::now();
        let bus = EventBus::new();
        let mut s = slider(4, SliderOptions::default(), t0).with_emitter(bus.emitter());
        s.go_to(2, t0).unwrap();
        s.set_paused(true, t0);
        s.set_paused(false, t0);
        assert!(s.go_to(9, t0).is_err());
        drop(s);

        let events = bus.poll();
        assert_eq!(events.len(), 4);
        let changed = downcast_event::<SlideChanged>(&events[0]).unwrap();
        assert_eq!((changed.from, changed.to, changed.cause), (0, 2, ChangeCause::Navigation));
        assert_eq!(downcast_event::<PauseToggled>(&events[1]).map(|e| e.paused), Some(true));
        assert_eq!(downcast_event::<SliderUnmounted>(&events[3]).map(|e| e.last_index), Some(2));
    }

    proptest! {
        #[test]
        fn prop_out_of_range_go_to_leaves_state(len in 1usize..12, start in 0usize..12, extra in 0usize..100) {
            let start = start % len;
            let t0 = Instant::now();
            let options = SliderOptions { initial_slide: start, ..SliderOptions::default() };
            let mut s = slider(len, options, t0);
            let deadline = s.next_tick_at();
            prop_assert!(s.go_to(len + extra, t0 + ms(10)).is_err());
            prop_assert_eq!(s.current(), start);
            prop_assert_eq!(s.next_tick_at(), deadline);
        }

        #[test]
        fn prop_full_cycle_returns(len in 1usize..12, start in 0usize..12, forward in any::<bool>()) {
            let start = start % len;
            let t0 = Instant::now();
            let options = SliderOptions { initial_slide: start, ..SliderOptions::default() };
            let mut s = slider(len, options, t0);
            let dir = if forward { SlideDirection::Next } else { SlideDirection::Prev };
            for step in 0..len {
                let change = s.advance(dir, t0 + ms(step as u64));
                prop_assert!(change.to < len);
            }
            prop_assert_eq!(s.current(), start);
        }

        #[test]
        fn prop_index_stays_in_range(len in 1usize..8, ops in prop::collection::vec(0u8..4, 0..40)) {
            let t0 = Instant::now();
            let mut s = slider(len, SliderOptions::default(), t0);
            let mut now = t0;
            for op in ops {
                now += ms(1500);
                match op {
                    0 => { s.next(now); }
                    1 => { s.prev(now); }
                    2 => { let _ = s.go_to(len / 2, now); }
                    _ => { s.tick(now); }
                }
                prop_assert!(s.current() < len);
            }
        }
    }
}
