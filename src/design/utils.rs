//! Small numeric and timing helpers used by components and recipes.
//!
//! `Debouncer` and `Throttle` are poll-driven: callers pass `now` and the
//! struct decides, so they fit a single-threaded event loop and are
//! deterministic under test.

use std::time::{Duration, Instant};

use uuid::Uuid;

/// Clamp `value` into `[min, max]`.
pub fn clamp(value: f32, min: f32, max: f32) -> f32 {
    value.max(min).min(max)
}

/// Linear interpolation. `t` is not clamped; overshoot is allowed.
pub fn lerp(start: f32, end: f32, t: f32) -> f32 {
    start + (end - start) * t
}

/// Unique-ish DOM id: `prefix-` followed by 7 base-36 characters.
pub fn generate_id(prefix: &str) -> String {
    const ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
    let mut bits = Uuid::new_v4().as_u128();
    let suffix: String = (0..7)
        .map(|_| {
            let c = ALPHABET[(bits % 36) as usize] as char;
            bits /= 36;
            c
        })
        .collect();
    format!("{}-{}", prefix, suffix)
}

/// Join class names, skipping `None` and empty entries.
pub fn class_names(classes: &[Option<&str>]) -> String {
    classes
        .iter()
        .flatten()
        .filter(|c| !c.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(" ")
}

// ============================================================================
// Debounce
// ============================================================================

/// Defers a payload until `delay` has passed with no further calls.
///
/// Every `call()` replaces the pending payload and restarts the timer.
/// ```ignore
/// debouncer.call(width, now);          // on every resize event
/// if let Some(w) = debouncer.tick(now) // in the update loop
/// {
///     relayout(w);
/// }
/// ```
#[derive(Debug, Clone)]
pub struct Debouncer<T> {
    delay: Duration,
    pending: Option<(T, Instant)>,
}

impl<T> Debouncer<T> {
    pub fn new(delay: Duration) -> Self {
        Self { delay, pending: None }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub fn set_delay(&mut self, delay: Duration) {
        self.delay = delay;
    }

    /// Record a call; resets the timer.
    pub fn call(&mut self, payload: T, now: Instant) {
        self.pending = Some((payload, now + self.delay));
        log::trace!("Debouncer: scheduled in {}ms", self.delay.as_millis());
    }

    /// Returns the payload once the delay elapsed with no new call.
    pub fn tick(&mut self, now: Instant) -> Option<T> {
        let due = matches!(self.pending, Some((_, fire_at)) if now >= fire_at);
        if !due {
            return None;
        }
        self.pending.take().map(|(payload, _)| payload)
    }

    pub fn cancel(&mut self) {
        if self.pending.take().is_some() {
            log::trace!("Debouncer: cancelled pending call");
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn pending(&self) -> Option<&T> {
        self.pending.as_ref().map(|(payload, _)| payload)
    }
}

/// A callback behind a [`Debouncer`].
pub struct Debounced<T, F: FnMut(T)> {
    inner: Debouncer<T>,
    callback: F,
}

impl<T, F: FnMut(T)> Debounced<T, F> {
    pub fn new(delay: Duration, callback: F) -> Self {
        Self { inner: Debouncer::new(delay), callback }
    }

    pub fn call(&mut self, payload: T, now: Instant) {
        self.inner.call(payload, now);
    }

    /// Invoke the callback if due. Returns true if it ran.
    pub fn tick(&mut self, now: Instant) -> bool {
        match self.inner.tick(now) {
            Some(payload) => {
                (self.callback)(payload);
                true
            }
            None => false,
        }
    }

    pub fn cancel(&mut self) {
        self.inner.cancel();
    }
}

// ============================================================================
// Throttle
// ============================================================================

/// Admits at most one call per `limit` window.
///
/// Calls inside a closed window are dropped, and nothing fires at the end of
/// the window; the next admitted call is the first one after it reopens.
#[derive(Debug, Clone)]
pub struct Throttle {
    limit: Duration,
    open_at: Option<Instant>,
}

impl Throttle {
    pub fn new(limit: Duration) -> Self {
        Self { limit, open_at: None }
    }

    pub fn limit(&self) -> Duration {
        self.limit
    }

    /// True if this call is admitted; closes the window for `limit`.
    pub fn call(&mut self, now: Instant) -> bool {
        if let Some(open_at) = self.open_at
            && now < open_at
        {
            return false;
        }
        self.open_at = Some(now + self.limit);
        true
    }

    pub fn is_open(&self, now: Instant) -> bool {
        self.open_at.is_none_or(|open_at| now >= open_at)
    }

    pub fn reset(&mut self) {
        self.open_at = None;
    }
}

/// A callback behind a [`Throttle`].
pub struct Throttled<T, F: FnMut(T)> {
    gate: Throttle,
    callback: F,
    _payload: std::marker::PhantomData<fn(T)>,
}

impl<T, F: FnMut(T)> Throttled<T, F> {
    pub fn new(limit: Duration, callback: F) -> Self {
        Self {
            gate: Throttle::new(limit),
            callback,
            _payload: std::marker::PhantomData,
        }
    }

    /// Invoke the callback if the window is open. Returns true if it ran.
    pub fn call(&mut self, payload: T, now: Instant) -> bool {
        if self.gate.call(now) {
            (self.callback)(payload);
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn test_clamp() {
        assert_eq!(clamp(5.0, 0.0, 10.0), 5.0);
        assert_eq!(clamp(-1.0, 0.0, 10.0), 0.0);
        assert_eq!(clamp(11.0, 0.0, 10.0), 10.0);
        assert_eq!(clamp(0.0, 0.0, 0.0), 0.0);
    }

    #[test]
    fn test_lerp_unclamped() {
        assert_eq!(lerp(0.0, 10.0, 0.5), 5.0);
        assert_eq!(lerp(10.0, 20.0, 0.0), 10.0);
        assert_eq!(lerp(10.0, 20.0, 1.0), 20.0);
        // Overshoot is intentional
        assert_eq!(lerp(0.0, 10.0, 1.5), 15.0);
        assert_eq!(lerp(0.0, 10.0, -0.5), -5.0);
    }

    #[test]
    fn test_generate_id_shape() {
        let a = generate_id("slide");
        let b = generate_id("slide");
        assert!(a.starts_with("slide-"));
        assert_eq!(a.len(), "slide-".len() + 7);
        assert!(a["slide-".len()..].chars().all(|c| c.is_ascii_digit() || c.is_ascii_lowercase()));
        assert_ne!(a, b);

        let ids: std::collections::HashSet<String> = (0..1000).map(|_| generate_id("card")).collect();
        assert_eq!(ids.len(), 1000);
    }

    #[test]
    fn test_class_names() {
        assert_eq!(class_names(&[Some("a"), None, Some(""), Some("b")]), "a b");
        assert_eq!(class_names(&[]), "");
    }

    #[test]
    fn test_debounce_fires_after_quiet_period() {
        let t0 = Instant::now();
        let mut d = Debouncer::new(ms(100));
        d.call(1, t0);
        assert!(d.tick(t0 + ms(50)).is_none());
        assert_eq!(d.tick(t0 + ms(100)), Some(1));
        assert!(!d.is_pending());
        assert!(d.tick(t0 + ms(500)).is_none());
    }

    #[test]
    fn test_debounce_resets_timer() {
        let t0 = Instant::now();
        let mut d = Debouncer::new(ms(100));
        d.call("a", t0);
        d.call("b", t0 + ms(80));
        // Original deadline passed, but the second call pushed it out
        assert!(d.tick(t0 + ms(120)).is_none());
        assert_eq!(d.pending(), Some(&"b"));
        assert_eq!(d.tick(t0 + ms(180)), Some("b"));
    }

    #[test]
    fn test_debounced_callback_and_cancel() {
        let t0 = Instant::now();
        let mut seen = Vec::new();
        {
            let mut d = Debounced::new(ms(10), |v: i32| seen.push(v));
            d.call(1, t0);
            d.call(2, t0 + ms(5));
            assert!(!d.tick(t0 + ms(10)));
            assert!(d.tick(t0 + ms(15)));
            d.call(3, t0 + ms(20));
            d.cancel();
            assert!(!d.tick(t0 + ms(100)));
        }
        assert_eq!(seen, vec![2]);
    }

    #[test]
    fn test_throttle_drops_intermediate_calls() {
        let t0 = Instant::now();
        let mut t = Throttle::new(ms(100));
        assert!(t.call(t0));
        assert!(!t.call(t0 + ms(10)));
        assert!(!t.call(t0 + ms(99)));
        assert!(!t.is_open(t0 + ms(99)));
        // No trailing call: window reopens, next call is admitted fresh
        assert!(t.is_open(t0 + ms(100)));
        assert!(t.call(t0 + ms(150)));
        assert!(!t.call(t0 + ms(200)));
        assert!(t.call(t0 + ms(250)));
    }

    #[test]
    fn test_throttled_callback() {
        let t0 = Instant::now();
        let mut count = 0;
        {
            let mut t = Throttled::new(ms(50), |_: ()| count += 1);
            for i in 0..10 {
                t.call((), t0 + ms(i * 10));
            }
        }
        // Admitted at 0ms and 50ms
        assert_eq!(count, 2);
    }
}
