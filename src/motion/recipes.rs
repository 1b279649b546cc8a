//! Named animation recipes over an [`AnimationEngine`].
//!
//! Every recipe honours reduced motion the same way: the target is put in its
//! resting state right away, nothing is tweened, no observer is registered, and
//! the returned handle is inert.
//!
//! Scroll-triggered recipes hide the target, register a viewport observer and
//! play once on the first enter. The returned handle owns both the observer
//! and the tween it started.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, Weak};

use log::debug;
use serde::{Deserialize, Serialize};

use super::ease::Ease;
use super::engine::{AnimationEngine, ViewportCallback};
use super::handle::AnimationHandle;
use super::registry;
use super::scroll::{Anchor, ScrollPosition, ScrollRange};
use super::state::{ElementId, Target, Timing, VisualState};
use crate::design::env::Environment;
use crate::design::tokens::{ease, tween_duration};

/// Which way a slider moved
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SlideDirection {
    #[default]
    Next,
    Prev,
}

impl SlideDirection {
    /// +1 for next, -1 for prev
    pub fn sign(self) -> f32 {
        match self {
            Self::Next => 1.0,
            Self::Prev => -1.0,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Next => "next",
            Self::Prev => "prev",
        }
    }
}

/// `top 80%`
const TOP_80: ScrollPosition = ScrollPosition::new(Anchor::TOP, Anchor::Percent(80.0));
/// `top 70%`
const TOP_70: ScrollPosition = ScrollPosition::new(Anchor::TOP, Anchor::Percent(70.0));

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextRevealOptions {
    pub stagger: f32,
    pub duration: f32,
    pub delay: f32,
}

impl Default for TextRevealOptions {
    fn default() -> Self {
        Self {
            stagger: 0.03,
            duration: tween_duration::SLOW,
            delay: 0.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FadeInOptions {
    pub start: ScrollPosition,
    pub y: f32,
    pub duration: f32,
}

impl Default for FadeInOptions {
    fn default() -> Self {
        Self {
            start: TOP_80,
            y: 30.0,
            duration: tween_duration::NORMAL,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StaggerOptions {
    pub stagger: f32,
    pub y: f32,
    pub duration: f32,
    pub start: ScrollPosition,
}

impl Default for StaggerOptions {
    fn default() -> Self {
        Self {
            stagger: 0.15,
            y: 50.0,
            duration: tween_duration::SLOW,
            start: TOP_70,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaleOptions {
    pub scale: f32,
    pub duration: f32,
    pub delay: f32,
}

impl Default for ScaleOptions {
    fn default() -> Self {
        Self {
            scale: 0.9,
            duration: tween_duration::NORMAL,
            delay: 0.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParallaxOptions {
    /// Fraction of the viewport height travelled over the range
    pub speed: f32,
    pub range: ScrollRange,
}

impl Default for ParallaxOptions {
    fn default() -> Self {
        Self {
            speed: 0.5,
            range: ScrollRange::ON_SCREEN,
        }
    }
}

/// Batch callbacks default to a staggered entrance and a reset on leave.
#[derive(Clone, Default)]
pub struct BatchOptions {
    pub start: Option<ScrollPosition>,
    pub on_enter: Option<ViewportCallback>,
    pub on_leave: Option<ViewportCallback>,
}

impl std::fmt::Debug for BatchOptions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BatchOptions")
            .field("start", &self.start)
            .field("on_enter", &self.on_enter.is_some())
            .field("on_leave", &self.on_leave.is_some())
            .finish()
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlideTransitionOptions {
    pub duration: f32,
    pub x_offset: f32,
}

impl Default for SlideTransitionOptions {
    fn default() -> Self {
        Self {
            duration: tween_duration::NORMAL,
            x_offset: 100.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FloatingOptions {
    pub y_range: f32,
    pub duration: f32,
    pub delay: f32,
    /// Degrees reached at the top of the float
    pub rotation: f32,
}

impl Default for FloatingOptions {
    fn default() -> Self {
        Self {
            y_range: 10.0,
            duration: 3.0,
            delay: 0.0,
            rotation: 0.0,
        }
    }
}

/// Batch entrance/leave states
const BATCH_AWAY_Y: f32 = 30.0;

/// Elements entering together and the tween bringing them in
type EntranceGroup = (Vec<ElementId>, AnimationHandle);

fn slot_lock<T>(slot: &Mutex<T>) -> std::sync::MutexGuard<'_, T> {
    slot.lock().unwrap_or_else(|e| e.into_inner())
}

/// Recipe facade. Cheap to clone.
#[derive(Clone)]
pub struct Motion {
    engine: Arc<dyn AnimationEngine>,
    env: Arc<dyn Environment>,
}

impl Motion {
    pub fn new(engine: Arc<dyn AnimationEngine>, env: Arc<dyn Environment>) -> Self {
        registry::ensure_registered();
        Self { engine, env }
    }

    pub fn engine(&self) -> &Arc<dyn AnimationEngine> {
        &self.engine
    }

    pub fn env(&self) -> &Arc<dyn Environment> {
        &self.env
    }

    pub fn reduced_motion(&self) -> bool {
        self.env.prefers_reduced_motion()
    }

    /// Reduced-motion path shared by every recipe
    fn settle(&self, recipe: &str, target: &Target) -> AnimationHandle {
        debug!("Reduced motion: {} settles {}", recipe, target);
        self.engine.set(target, VisualState::RESTING);
        AnimationHandle::noop()
    }

    /// Hide `target`, then tween it to rest the first time it enters the viewport.
    fn play_on_enter(
        &self,
        label: &'static str,
        target: &Target,
        away: VisualState,
        timing: Timing,
        start: ScrollPosition,
    ) -> AnimationHandle {
        self.engine.set(target, away);

        let slot: Arc<Mutex<Option<AnimationHandle>>> = Arc::new(Mutex::new(None));
        let played = AtomicBool::new(false);
        let weak: Weak<dyn AnimationEngine> = Arc::downgrade(&self.engine);
        let tween_target = target.clone();
        let tween_slot = slot.clone();
        let on_enter: ViewportCallback = Arc::new(move |_: &[ElementId]| {
            if played.swap(true, Ordering::SeqCst) {
                return;
            }
            let Some(engine) = weak.upgrade() else {
                return;
            };
            let tween = engine.start_tween(&tween_target, away, VisualState::RESTING, timing);
            *slot_lock(&tween_slot) = Some(tween);
        });

        let mut observer = self
            .engine
            .observe_viewport(target, ScrollRange::from_start(start), Some(on_enter), None);
        if !observer.is_active() {
            return AnimationHandle::noop();
        }
        AnimationHandle::new(label, move || {
            observer.cancel();
            let tween = slot_lock(&slot).take();
            if let Some(mut tween) = tween {
                tween.cancel();
            }
        })
    }

    /// Letters/lines rise and fade in, staggered.
    pub fn text_reveal(&self, target: &Target, opts: TextRevealOptions) -> AnimationHandle {
        if self.reduced_motion() {
            return self.settle("text_reveal", target);
        }
        let timing = Timing::new(opts.duration, Ease::named(ease::ENTRANCE))
            .stagger(opts.stagger)
            .delay(opts.delay);
        self.engine
            .start_tween(target, VisualState::hidden_below(50.0), VisualState::RESTING, timing)
    }

    pub fn fade_in_on_scroll(&self, target: &Target, opts: FadeInOptions) -> AnimationHandle {
        if self.reduced_motion() {
            return self.settle("fade_in_on_scroll", target);
        }
        let timing = Timing::new(opts.duration, Ease::named(ease::ENTRANCE));
        self.play_on_enter("fade_in_on_scroll", target, VisualState::hidden_below(opts.y), timing, opts.start)
    }

    pub fn stagger_cards(&self, target: &Target, opts: StaggerOptions) -> AnimationHandle {
        if self.reduced_motion() {
            return self.settle("stagger_cards", target);
        }
        let timing = Timing::new(opts.duration, Ease::named(ease::ENTRANCE)).stagger(opts.stagger);
        self.play_on_enter("stagger_cards", target, VisualState::hidden_below(opts.y), timing, opts.start)
    }

    /// Pop-in for call-to-action buttons
    pub fn scale_up_with_glow(&self, target: &Target, opts: ScaleOptions) -> AnimationHandle {
        if self.reduced_motion() {
            return self.settle("scale_up_with_glow", target);
        }
        let away = VisualState::RESTING.with_opacity(0.0).with_scale(opts.scale);
        let timing = Timing::new(opts.duration, Ease::named(ease::BOUNCE)).delay(opts.delay);
        self.engine.start_tween(target, away, VisualState::RESTING, timing)
    }

    /// Shift `target` down by `viewport_height * speed` as it scrolls through the range.
    pub fn parallax(&self, target: &Target, opts: ParallaxOptions) -> AnimationHandle {
        if self.reduced_motion() {
            return self.settle("parallax", target);
        }
        let travel = self.env.viewport_height() as f32 * opts.speed;
        self.engine
            .start_scrub(target, VisualState::RESTING, VisualState::RESTING.with_y(travel), opts.range)
    }

    /// One observer for many similar elements.
    pub fn batch(&self, targets: &Target, opts: BatchOptions) -> AnimationHandle {
        if self.reduced_motion() {
            return self.settle("batch", targets);
        }
        let away = VisualState::hidden_below(BATCH_AWAY_Y);
        self.engine.set(targets, away);

        // at most one running entrance per element
        let tweens: Arc<Mutex<Vec<EntranceGroup>>> = Arc::new(Mutex::new(Vec::new()));
        let on_enter = opts.on_enter.unwrap_or_else(|| {
            let weak: Weak<dyn AnimationEngine> = Arc::downgrade(&self.engine);
            let tweens = tweens.clone();
            let cb: ViewportCallback = Arc::new(move |ids: &[ElementId]| {
                let Some(engine) = weak.upgrade() else {
                    return;
                };
                let stale: Vec<EntranceGroup> = {
                    let mut groups = slot_lock(&tweens);
                    let (keep, stale): (Vec<_>, Vec<_>) = groups
                        .drain(..)
                        .partition(|(group, tween)| tween.is_running() && !group.iter().any(|id| ids.contains(id)));
                    *groups = keep;
                    stale
                };
                // cancels the replaced entrances outside the slot lock
                drop(stale);

                let timing = Timing::new(tween_duration::NORMAL, Ease::named(ease::ENTRANCE)).stagger(0.15);
                let tween = engine.start_tween(&Target::from(ids), away, VisualState::RESTING, timing);
                if tween.is_active() {
                    slot_lock(&tweens).push((ids.to_vec(), tween));
                }
            });
            cb
        });
        let on_leave = opts.on_leave.unwrap_or_else(|| {
            let weak: Weak<dyn AnimationEngine> = Arc::downgrade(&self.engine);
            let cb: ViewportCallback = Arc::new(move |ids: &[ElementId]| {
                if let Some(engine) = weak.upgrade() {
                    engine.set(&Target::from(ids), away);
                }
            });
            cb
        });

        let range = ScrollRange::from_start(opts.start.unwrap_or(TOP_80));
        let mut observer = self.engine.observe_viewport(targets, range, Some(on_enter), Some(on_leave));
        if !observer.is_active() {
            return AnimationHandle::noop();
        }
        AnimationHandle::new("batch", move || {
            observer.cancel();
            let started: Vec<_> = slot_lock(&tweens).drain(..).collect();
            for (_, mut tween) in started {
                tween.cancel();
            }
        })
    }

    /// Slide content in from the side it is coming from.
    pub fn slide_transition(
        &self,
        target: &Target,
        direction: SlideDirection,
        opts: SlideTransitionOptions,
    ) -> AnimationHandle {
        if self.reduced_motion() {
            return self.settle("slide_transition", target);
        }
        let away = VisualState::RESTING
            .with_opacity(0.0)
            .with_x(direction.sign() * opts.x_offset);
        let timing = Timing::new(opts.duration, Ease::named(ease::TRANSITION));
        self.engine.start_tween(target, away, VisualState::RESTING, timing)
    }

    /// Endless gentle bob for decorations.
    pub fn floating(&self, target: &Target, opts: FloatingOptions) -> AnimationHandle {
        if self.reduced_motion() {
            return self.settle("floating", target);
        }
        let top = VisualState::RESTING.with_y(-opts.y_range).with_rotation(opts.rotation);
        let timing = Timing::new(opts.duration, Ease::named(ease::SMOOTH))
            .delay(opts.delay)
            .yoyo();
        self.engine.start_tween(target, VisualState::RESTING, top, timing)
    }

    /// Kill every observer and scrub the engine knows about.
    pub fn cleanup_all(&self) -> usize {
        self.engine.kill_observers()
    }
}

impl std::fmt::Debug for Motion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Motion")
            .field("reduced_motion", &self.reduced_motion())
            .finish()
    }
}
