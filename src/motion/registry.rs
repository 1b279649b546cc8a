//! Process-wide plugin registration.
//!
//! The scroll-observation plugin must be registered with the animation runtime
//! once per process before any recipe runs. [`Motion::new`](super::Motion::new)
//! calls [`ensure_registered`]; extra calls are free.

use std::sync::atomic::{AtomicUsize, Ordering};

use log::{debug, info};
use once_cell::sync::OnceCell;

/// Plugins registered on first use
pub const PLUGINS: &[&str] = &["scroll-trigger"];

static REGISTERED: OnceCell<()> = OnceCell::new();
static REGISTRATIONS: AtomicUsize = AtomicUsize::new(0);

/// Register plugins if nobody has yet. Returns true on the registering call.
pub fn ensure_registered() -> bool {
    let mut registered_now = false;
    REGISTERED.get_or_init(|| {
        REGISTRATIONS.fetch_add(1, Ordering::SeqCst);
        info!("Registered animation plugins: {}", PLUGINS.join(", "));
        registered_now = true;
    });
    if !registered_now {
        debug!("Animation plugins already registered");
    }
    registered_now
}

pub fn is_registered() -> bool {
    REGISTERED.get().is_some()
}

/// How many times registration actually ran (0 or 1)
pub fn registration_count() -> usize {
    REGISTRATIONS.load(Ordering::SeqCst)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registers_once() {
        ensure_registered();
        assert!(is_registered());
        assert!(!ensure_registered());

        let threads: Vec<_> = (0..8).map(|_| std::thread::spawn(ensure_registered)).collect();
        let firsts = threads.into_iter().filter_map(|t| t.join().ok()).filter(|&first| first).count();
        assert_eq!(firsts, 0);
        assert_eq!(registration_count(), 1);
    }
}
