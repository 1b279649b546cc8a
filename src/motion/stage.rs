//! In-process animation engine.
//!
//! `Stage` keeps a flat document of elements (selectors, vertical placement,
//! current [`VisualState`]) and runs tweens, scrubs and viewport observers
//! against a clock and scroll offset the caller drives with [`Stage::advance`]
//! and [`Stage::scroll_to`]. The CLI simulation and the tests use it in place
//! of a browser.

use std::any::Any;
use std::sync::atomic::Ordering;
use std::sync::{Arc, Mutex, MutexGuard, Weak};
use std::time::Duration;

use indexmap::IndexMap;
use log::{debug, trace};

use super::engine::{AnimationEngine, ViewportCallback};
use super::handle::{AnimationHandle, Done};
use super::scroll::ScrollRange;
use super::state::{ElementId, Target, Timing, VisualState};

#[derive(Debug, Clone)]
struct Element {
    selectors: Vec<String>,
    top: f32,
    height: f32,
    state: VisualState,
}

impl Element {
    fn matches(&self, selector: &str) -> bool {
        selector
            .split(',')
            .map(str::trim)
            .any(|part| self.selectors.iter().any(|s| s == part))
    }
}

struct Tween {
    targets: Vec<ElementId>,
    from: VisualState,
    to: VisualState,
    timing: Timing,
    elapsed: f32,
    done: Done,
}

struct Scrub {
    targets: Vec<ElementId>,
    from: VisualState,
    to: VisualState,
    range: ScrollRange,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Before,
    Active,
    After,
}

struct Observer {
    targets: Vec<ElementId>,
    range: ScrollRange,
    on_enter: Option<ViewportCallback>,
    on_leave: Option<ViewportCallback>,
    phases: IndexMap<ElementId, Phase>,
}

#[derive(Debug, Clone, Copy)]
enum Kind {
    Tween,
    Scrub,
    Observer,
}

type Events = Vec<(ViewportCallback, Vec<ElementId>)>;

struct StageInner {
    next_element: u64,
    next_anim: u64,
    elements: IndexMap<ElementId, Element>,
    tweens: IndexMap<u64, Tween>,
    scrubs: IndexMap<u64, Scrub>,
    observers: IndexMap<u64, Observer>,
    viewport: (f32, f32),
    scroll_y: f32,
    clock: f32,
}

impl StageInner {
    fn resolve(&self, target: &Target) -> Vec<ElementId> {
        match target {
            Target::Selector(sel) => self
                .elements
                .iter()
                .filter(|(_, el)| el.matches(sel))
                .map(|(id, _)| *id)
                .collect(),
            Target::Element(id) => self.elements.contains_key(id).then_some(*id).into_iter().collect(),
            Target::Elements(ids) => ids.iter().copied().filter(|id| self.elements.contains_key(id)).collect(),
        }
    }

    fn next_anim_id(&mut self) -> u64 {
        self.next_anim += 1;
        self.next_anim
    }

    /// The caller drops the entry after releasing the lock: observers own
    /// callbacks which may own handles whose cancel locks the stage again.
    fn take(&mut self, kind: Kind, id: u64) -> Option<Box<dyn Any + Send>> {
        match kind {
            Kind::Tween => self.tweens.shift_remove(&id).map(|t| Box::new(t) as Box<dyn Any + Send>),
            Kind::Scrub => self.scrubs.shift_remove(&id).map(|s| Box::new(s) as Box<dyn Any + Send>),
            Kind::Observer => self.observers.shift_remove(&id).map(|o| Box::new(o) as Box<dyn Any + Send>),
        }
    }

    fn step_tweens(&mut self, dt: f32) {
        let StageInner { tweens, elements, .. } = self;
        let mut finished = Vec::new();
        for (&tid, tween) in tweens.iter_mut() {
            tween.elapsed += dt;
            let mut done = true;
            for (pos, id) in tween.targets.iter().enumerate() {
                let Some(el) = elements.get_mut(id) else {
                    continue;
                };
                let local = tween.elapsed - tween.timing.delay - tween.timing.stagger * pos as f32;
                if local < 0.0 {
                    done = false;
                    continue;
                }
                let raw = if tween.timing.duration > 0.0 {
                    local / tween.timing.duration
                } else {
                    1.0
                };
                el.state = if tween.timing.yoyo {
                    done = false;
                    let cycle = raw.floor();
                    let mut frac = raw - cycle;
                    if cycle as u64 % 2 == 1 {
                        frac = 1.0 - frac;
                    }
                    tween.from.lerp(&tween.to, tween.timing.ease.apply(frac))
                } else if raw >= 1.0 {
                    tween.to
                } else {
                    done = false;
                    tween.from.lerp(&tween.to, tween.timing.ease.apply(raw))
                };
            }
            if done {
                finished.push(tid);
            }
        }
        for tid in finished {
            trace!("Tween {} complete", tid);
            if let Some(tween) = tweens.shift_remove(&tid) {
                tween.done.store(true, Ordering::Release);
            }
        }
    }

    fn apply_scrubs(&mut self) {
        let StageInner { scrubs, elements, viewport, scroll_y, .. } = self;
        for scrub in scrubs.values() {
            for id in &scrub.targets {
                let Some(el) = elements.get_mut(id) else {
                    continue;
                };
                let p = scrub.range.progress(*scroll_y, el.top, el.height, viewport.1);
                el.state = scrub.from.lerp(&scrub.to, p);
            }
        }
    }

    fn evaluate_observers(&mut self) -> Events {
        let StageInner { observers, elements, viewport, scroll_y, .. } = self;
        let mut events = Events::new();
        for observer in observers.values_mut() {
            let mut entered = Vec::new();
            let mut left = Vec::new();
            for id in &observer.targets {
                let Some(el) = elements.get(id) else {
                    continue;
                };
                let (start, end) = observer.range.offsets(el.top, el.height, viewport.1);
                let now = if *scroll_y < start {
                    Phase::Before
                } else if *scroll_y <= end {
                    Phase::Active
                } else {
                    Phase::After
                };
                let prev = observer.phases.insert(*id, now).unwrap_or(Phase::Before);
                match (prev, now) {
                    (Phase::Before, Phase::Active) => entered.push(*id),
                    (Phase::Before, Phase::After) => {
                        entered.push(*id);
                        left.push(*id);
                    }
                    (Phase::Active, Phase::After) => left.push(*id),
                    _ => {}
                }
            }
            if let (Some(cb), false) = (&observer.on_enter, entered.is_empty()) {
                events.push((cb.clone(), entered));
            }
            if let (Some(cb), false) = (&observer.on_leave, left.is_empty()) {
                events.push((cb.clone(), left));
            }
        }
        events
    }
}

fn fire(events: Events) {
    for (cb, ids) in events {
        cb(&ids);
    }
}

fn lock(inner: &Mutex<StageInner>) -> MutexGuard<'_, StageInner> {
    inner.lock().unwrap_or_else(|e| e.into_inner())
}

/// Shared, cloneable in-process engine.
#[derive(Clone)]
pub struct Stage {
    inner: Arc<Mutex<StageInner>>,
}

impl Stage {
    pub fn new(viewport_width: f32, viewport_height: f32) -> Self {
        Self {
            inner: Arc::new(Mutex::new(StageInner {
                next_element: 0,
                next_anim: 0,
                elements: IndexMap::new(),
                tweens: IndexMap::new(),
                scrubs: IndexMap::new(),
                observers: IndexMap::new(),
                viewport: (viewport_width, viewport_height),
                scroll_y: 0.0,
                clock: 0.0,
            })),
        }
    }

    fn lock(&self) -> MutexGuard<'_, StageInner> {
        lock(&self.inner)
    }

    fn handle(&self, label: &'static str, kind: Kind, id: u64) -> AnimationHandle {
        let weak: Weak<Mutex<StageInner>> = Arc::downgrade(&self.inner);
        AnimationHandle::new(label, move || {
            let Some(inner) = weak.upgrade() else {
                return;
            };
            let removed = lock(&inner).take(kind, id);
            if removed.is_none() {
                trace!("{:?} {} already finished", kind, id);
            }
            drop(removed);
        })
    }

    /// Register an element. `selectors` are matched exactly (e.g. `.card`, `#hero`).
    pub fn add_element(&self, selectors: &[&str], top: f32, height: f32) -> ElementId {
        let mut inner = self.lock();
        inner.next_element += 1;
        let id = ElementId(inner.next_element);
        inner.elements.insert(
            id,
            Element {
                selectors: selectors.iter().map(|s| s.to_string()).collect(),
                top,
                height,
                state: VisualState::RESTING,
            },
        );
        id
    }

    /// Animations still pointing at the element keep running on nothing.
    pub fn remove_element(&self, id: ElementId) -> bool {
        self.lock().elements.shift_remove(&id).is_some()
    }

    pub fn state_of(&self, id: ElementId) -> Option<VisualState> {
        self.lock().elements.get(&id).map(|el| el.state)
    }

    pub fn resolve(&self, target: &Target) -> Vec<ElementId> {
        self.lock().resolve(target)
    }

    pub fn element_count(&self) -> usize {
        self.lock().elements.len()
    }

    /// Step tweens by `dt`
    pub fn advance(&self, dt: Duration) {
        let mut inner = self.lock();
        let secs = dt.as_secs_f32();
        inner.clock += secs;
        inner.step_tweens(secs);
    }

    pub fn clock(&self) -> Duration {
        Duration::from_secs_f32(self.lock().clock)
    }

    /// Move the scroll offset, update scrubs and fire observer callbacks.
    pub fn scroll_to(&self, y: f32) {
        let events = {
            let mut inner = self.lock();
            inner.scroll_y = y.max(0.0);
            inner.apply_scrubs();
            inner.evaluate_observers()
        };
        fire(events);
    }

    pub fn scroll_y(&self) -> f32 {
        self.lock().scroll_y
    }

    pub fn resize(&self, width: f32, height: f32) {
        let events = {
            let mut inner = self.lock();
            inner.viewport = (width, height);
            inner.apply_scrubs();
            inner.evaluate_observers()
        };
        fire(events);
    }

    pub fn viewport(&self) -> (f32, f32) {
        self.lock().viewport
    }

    pub fn live_tweens(&self) -> usize {
        self.lock().tweens.len()
    }

    pub fn live_scrubs(&self) -> usize {
        self.lock().scrubs.len()
    }

    pub fn live_observers(&self) -> usize {
        self.lock().observers.len()
    }
}

impl Default for Stage {
    fn default() -> Self {
        Self::new(1440.0, 900.0)
    }
}

impl std::fmt::Debug for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let inner = self.lock();
        f.debug_struct("Stage")
            .field("elements", &inner.elements.len())
            .field("tweens", &inner.tweens.len())
            .field("scrubs", &inner.scrubs.len())
            .field("observers", &inner.observers.len())
            .field("scroll_y", &inner.scroll_y)
            .finish()
    }
}

impl AnimationEngine for Stage {
    fn set(&self, target: &Target, state: VisualState) {
        let mut inner = self.lock();
        for id in inner.resolve(target) {
            if let Some(el) = inner.elements.get_mut(&id) {
                el.state = state;
            }
        }
    }

    fn start_tween(&self, target: &Target, from: VisualState, to: VisualState, timing: Timing) -> AnimationHandle {
        let (id, done) = {
            let mut inner = self.lock();
            let targets = inner.resolve(target);
            if targets.is_empty() {
                debug!("Tween target {} matched nothing", target);
                return AnimationHandle::noop();
            }
            for t in &targets {
                if let Some(el) = inner.elements.get_mut(t) {
                    el.state = from;
                }
            }
            let id = inner.next_anim_id();
            trace!("Tween {} on {} ({} elements)", id, target, targets.len());
            let done = Done::default();
            inner.tweens.insert(
                id,
                Tween {
                    targets,
                    from,
                    to,
                    timing,
                    elapsed: 0.0,
                    done: done.clone(),
                },
            );
            (id, done)
        };
        self.handle("tween", Kind::Tween, id).with_done(done)
    }

    fn observe_viewport(
        &self,
        target: &Target,
        range: ScrollRange,
        on_enter: Option<ViewportCallback>,
        on_leave: Option<ViewportCallback>,
    ) -> AnimationHandle {
        let (id, events) = {
            let mut inner = self.lock();
            let targets = inner.resolve(target);
            if targets.is_empty() {
                debug!("Observer target {} matched nothing", target);
                return AnimationHandle::noop();
            }
            let id = inner.next_anim_id();
            inner.observers.insert(
                id,
                Observer {
                    targets,
                    range,
                    on_enter,
                    on_leave,
                    phases: IndexMap::new(),
                },
            );
            (id, inner.evaluate_observers())
        };
        fire(events);
        self.handle("observer", Kind::Observer, id)
    }

    fn start_scrub(&self, target: &Target, from: VisualState, to: VisualState, range: ScrollRange) -> AnimationHandle {
        let id = {
            let mut inner = self.lock();
            let targets = inner.resolve(target);
            if targets.is_empty() {
                debug!("Scrub target {} matched nothing", target);
                return AnimationHandle::noop();
            }
            let id = inner.next_anim_id();
            inner.scrubs.insert(id, Scrub { targets, from, to, range });
            inner.apply_scrubs();
            id
        };
        self.handle("scrub", Kind::Scrub, id)
    }

    fn kill_observers(&self) -> usize {
        let (observers, scrubs) = {
            let mut inner = self.lock();
            let observers: Vec<Observer> = inner.observers.drain(..).map(|(_, o)| o).collect();
            let scrubs: Vec<Scrub> = inner.scrubs.drain(..).map(|(_, s)| s).collect();
            (observers, scrubs)
        };
        let killed = observers.len() + scrubs.len();
        if killed > 0 {
            debug!("Killed {} observers and scrubs", killed);
        }
        killed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::motion::ease::Ease;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn test_tween_runs_to_completion() {
        let stage = Stage::default();
        let el = stage.add_element(&[".title"], 0.0, 100.0);
        let away = VisualState::hidden_below(50.0);
        let handle = stage.start_tween(&".title".into(), away, VisualState::RESTING, Timing::new(1.0, Ease::Linear));

        assert_eq!(stage.state_of(el), Some(away));
        stage.advance(ms(500));
        let mid = stage.state_of(el).unwrap();
        assert!((mid.opacity - 0.5).abs() < 1e-4);
        assert!(handle.is_running());
        stage.advance(ms(600));
        assert_eq!(stage.state_of(el), Some(VisualState::RESTING));
        assert_eq!(stage.live_tweens(), 0);
        assert!(handle.is_finished());
        assert!(!handle.is_running());
        drop(handle);
    }

    #[test]
    fn test_stagger_and_cancel() {
        let stage = Stage::default();
        let a = stage.add_element(&[".card"], 0.0, 10.0);
        let b = stage.add_element(&[".card"], 20.0, 10.0);
        let timing = Timing::new(0.5, Ease::Linear).stagger(0.5);
        let mut handle = stage.start_tween(&".card".into(), VisualState::hidden_below(30.0), VisualState::RESTING, timing);

        stage.advance(ms(500));
        assert_eq!(stage.state_of(a), Some(VisualState::RESTING));
        assert_eq!(stage.state_of(b).map(|s| s.opacity), Some(0.0));

        handle.cancel();
        assert_eq!(stage.live_tweens(), 0);
        stage.advance(ms(500));
        // cancelled tweens leave elements where they were
        assert_eq!(stage.state_of(b).map(|s| s.opacity), Some(0.0));
    }

    #[test]
    fn test_cancel_after_element_removed() {
        let stage = Stage::default();
        let el = stage.add_element(&["#logo"], 0.0, 10.0);
        let mut handle = stage.start_tween(&el.into(), VisualState::RESTING, VisualState::hidden_below(10.0), Timing::default());
        assert!(stage.remove_element(el));
        stage.advance(ms(100));
        handle.cancel();
        handle.cancel();
        assert_eq!(stage.live_tweens(), 0);
        assert_eq!(stage.state_of(el), None);
    }

    #[test]
    fn test_unmatched_target_is_noop() {
        let stage = Stage::default();
        let handle = stage.start_tween(&".ghost".into(), VisualState::RESTING, VisualState::RESTING, Timing::default());
        assert!(!handle.is_active());
        assert_eq!(stage.live_tweens(), 0);
    }

    #[test]
    fn test_yoyo_never_finishes() {
        let stage = Stage::default();
        let el = stage.add_element(&[".float"], 0.0, 10.0);
        let h = stage.start_tween(
            &".float".into(),
            VisualState::RESTING,
            VisualState::RESTING.with_y(-10.0),
            Timing::new(1.0, Ease::Linear).yoyo(),
        );
        stage.advance(ms(1000));
        stage.advance(ms(500));
        let y = stage.state_of(el).unwrap().y;
        assert!((y + 5.0).abs() < 1e-3);
        stage.advance(ms(5000));
        assert_eq!(stage.live_tweens(), 1);
        assert!(h.is_running());
    }

    #[test]
    fn test_observer_enter_leave() {
        let stage = Stage::new(1000.0, 1000.0);
        stage.add_element(&[".section"], 2000.0, 400.0);
        let entered = Arc::new(AtomicUsize::new(0));
        let left = Arc::new(AtomicUsize::new(0));
        let (e, l) = (entered.clone(), left.clone());
        let range = ScrollRange::new("top 80%", "bottom top").unwrap();
        let mut handle = stage.observe_viewport(
            &".section".into(),
            range,
            Some(Arc::new(move |ids: &[ElementId]| {
                e.fetch_add(ids.len(), Ordering::SeqCst);
            })),
            Some(Arc::new(move |ids: &[ElementId]| {
                l.fetch_add(ids.len(), Ordering::SeqCst);
            })),
        );
        assert_eq!(stage.live_observers(), 1);

        stage.scroll_to(1100.0);
        assert_eq!(entered.load(Ordering::SeqCst), 0);
        stage.scroll_to(1250.0);
        assert_eq!(entered.load(Ordering::SeqCst), 1);
        stage.scroll_to(1300.0);
        assert_eq!(entered.load(Ordering::SeqCst), 1);
        stage.scroll_to(2500.0);
        assert_eq!(left.load(Ordering::SeqCst), 1);

        handle.cancel();
        assert_eq!(stage.live_observers(), 0);
        stage.scroll_to(0.0);
        stage.scroll_to(1250.0);
        assert_eq!(entered.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_observer_fires_on_register_when_visible() {
        let stage = Stage::new(1000.0, 1000.0);
        stage.add_element(&[".hero"], 0.0, 500.0);
        let entered = Arc::new(AtomicUsize::new(0));
        let e = entered.clone();
        let _h = stage.observe_viewport(
            &".hero".into(),
            ScrollRange::default(),
            Some(Arc::new(move |_: &[ElementId]| {
                e.fetch_add(1, Ordering::SeqCst);
            })),
            None,
        );
        assert_eq!(entered.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_callback_may_reenter() {
        let stage = Stage::new(1000.0, 1000.0);
        stage.add_element(&[".card"], 1500.0, 100.0);
        let engine = stage.clone();
        let _h = stage.observe_viewport(
            &".card".into(),
            ScrollRange::default(),
            Some(Arc::new(move |ids: &[ElementId]| {
                engine
                    .start_tween(&Target::Elements(ids.to_vec()), VisualState::RESTING, VisualState::RESTING, Timing::default())
                    .detach();
            })),
            None,
        );
        stage.scroll_to(800.0);
        assert_eq!(stage.live_tweens(), 1);
    }

    #[test]
    fn test_scrub_and_kill() {
        let stage = Stage::new(1000.0, 1000.0);
        let el = stage.add_element(&[".bg"], 2000.0, 400.0);
        let _h = stage.start_scrub(
            &".bg".into(),
            VisualState::RESTING,
            VisualState::RESTING.with_y(500.0),
            ScrollRange::default(),
        );
        stage.scroll_to(1700.0);
        assert!((stage.state_of(el).unwrap().y - 250.0).abs() < 1e-3);

        let _o = stage.observe_viewport(&".bg".into(), ScrollRange::default(), None, None);
        assert_eq!(stage.kill_observers(), 2);
        assert_eq!(stage.live_scrubs(), 0);
        assert_eq!(stage.live_observers(), 0);
    }

    #[test]
    fn test_selector_lists() {
        let stage = Stage::default();
        let a = stage.add_element(&[".a"], 0.0, 1.0);
        let b = stage.add_element(&[".b", "#bee"], 0.0, 1.0);
        stage.add_element(&[".c"], 0.0, 1.0);
        assert_eq!(stage.resolve(&".a, #bee".into()), vec![a, b]);
        assert_eq!(stage.resolve(&Target::Elements(vec![b, ElementId(99)])), vec![b]);
    }
}
