//! Cancellable animation handles.
//!
//! Every recipe returns an [`AnimationHandle`]. Cancelling stops the tweens and
//! deregisters the observers it owns; cancelling twice, or after the animated
//! element is gone, does nothing. Dropping a handle cancels it.
//!
//! Engines may attach a [`Done`] flag they set once the animation has run its
//! course. Handles without one (observers, scrubs) never finish on their own.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use log::trace;

/// Cancel callback handed out by engines
pub type Cancel = Box<dyn FnOnce() + Send>;

/// Completion flag shared between an engine and a handle
pub type Done = Arc<AtomicBool>;

#[must_use = "dropping an AnimationHandle cancels the animation"]
pub struct AnimationHandle {
    cancel: Option<Cancel>,
    done: Vec<Done>,
    label: &'static str,
}

impl AnimationHandle {
    pub fn new(label: &'static str, cancel: impl FnOnce() + Send + 'static) -> Self {
        Self {
            cancel: Some(Box::new(cancel)),
            done: Vec::new(),
            label,
        }
    }

    /// Inert handle (reduced motion, nothing matched)
    pub fn noop() -> Self {
        Self {
            cancel: None,
            done: Vec::new(),
            label: "noop",
        }
    }

    /// Attach the engine's completion flag
    pub fn with_done(mut self, done: Done) -> Self {
        self.done.push(done);
        self
    }

    /// One handle cancelling all of `handles`
    pub fn merge(label: &'static str, handles: Vec<AnimationHandle>) -> Self {
        let mut handles: Vec<_> = handles.into_iter().filter(|h| h.is_active()).collect();
        match handles.len() {
            0 => Self::noop(),
            1 => {
                let mut only = handles.remove(0);
                only.label = label;
                only
            }
            _ => {
                // finishes only if every part can
                let done: Vec<Done> = if handles.iter().all(|h| !h.done.is_empty()) {
                    handles.iter().flat_map(|h| h.done.iter().cloned()).collect()
                } else {
                    Vec::new()
                };
                let mut merged = Self::new(label, move || {
                    for mut h in handles {
                        h.cancel();
                    }
                });
                merged.done = done;
                merged
            }
        }
    }

    pub fn label(&self) -> &'static str {
        self.label
    }

    /// Still holds a cancel that has not run
    pub fn is_active(&self) -> bool {
        self.cancel.is_some()
    }

    /// The engine reported completion
    pub fn is_finished(&self) -> bool {
        !self.done.is_empty() && self.done.iter().all(|d| d.load(Ordering::Acquire))
    }

    /// Active and not yet finished
    pub fn is_running(&self) -> bool {
        self.is_active() && !self.is_finished()
    }

    /// Idempotent
    pub fn cancel(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            trace!("Cancelling animation '{}'", self.label);
            cancel();
        }
    }

    /// Let the animation run unowned; it can no longer be cancelled.
    pub fn detach(mut self) {
        self.cancel = None;
    }
}

impl Drop for AnimationHandle {
    fn drop(&mut self) {
        self.cancel();
    }
}

impl Default for AnimationHandle {
    fn default() -> Self {
        Self::noop()
    }
}

impl std::fmt::Debug for AnimationHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AnimationHandle")
            .field("label", &self.label)
            .field("active", &self.is_active())
            .field("finished", &self.is_finished())
            .finish()
    }
}

/// Handles owned by one component; cancelled together on unmount.
#[derive(Debug, Default)]
pub struct AnimationScope {
    name: String,
    handles: Vec<AnimationHandle>,
}

impl AnimationScope {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            handles: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Inert handles are not kept
    pub fn add(&mut self, handle: AnimationHandle) {
        if handle.is_active() {
            self.handles.push(handle);
        }
    }

    /// Run `build` and collect the handles it returns
    pub fn with<F>(&mut self, build: F)
    where
        F: FnOnce() -> Vec<AnimationHandle>,
    {
        for h in build() {
            self.add(h);
        }
    }

    pub fn len(&self) -> usize {
        self.handles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }

    pub fn cancel_all(&mut self) {
        if !self.handles.is_empty() {
            trace!("Scope '{}': cancelling {} animations", self.name, self.handles.len());
        }
        for mut h in self.handles.drain(..) {
            h.cancel();
        }
    }
}

impl Drop for AnimationScope {
    fn drop(&mut self) {
        self.cancel_all();
    }
}
