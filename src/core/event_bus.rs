//! Pub/Sub event bus.
//!
//! - `subscribe()` registers a typed callback
//! - `emit()` invokes matching callbacks immediately AND queues the event
//! - `poll()` drains queued events for batch processing in the caller's loop
//!
//! Callback order: FIFO within one event type. Callbacks run after the
//! subscriber lock is released, so a callback may subscribe or emit.

use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, RwLock};

use log::warn;

/// Maximum events in queue before oldest are evicted
const MAX_QUEUE_SIZE: usize = 1000;

/// Marker trait for events. Events must be Send + Sync + 'static.
pub trait Event: Any + Send + Sync + 'static {
    fn as_any(&self) -> &dyn Any;
    fn type_name(&self) -> &'static str;
}

impl<T: Any + Send + Sync + 'static> Event for T {
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn type_name(&self) -> &'static str {
        std::any::type_name::<T>()
    }
}

/// Type-erased callback
type Callback = Arc<dyn Fn(&dyn Any) + Send + Sync>;

/// Boxed event for queue storage
pub type BoxedEvent = Box<dyn Event>;

/// Subscriber table and queue shared by a bus and all of its emitters
#[derive(Default)]
struct Channels {
    subscribers: RwLock<HashMap<TypeId, Vec<Callback>>>,
    queue: Mutex<Vec<BoxedEvent>>,
}

impl Channels {
    fn callbacks(&self, type_id: TypeId) -> Vec<Callback> {
        self.subscribers
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .get(&type_id)
            .cloned()
            .unwrap_or_default()
    }

    fn dispatch(&self, event: BoxedEvent) {
        // Explicit deref: `Box<dyn Event>` is itself an `Event` via the blanket impl
        let type_id = (*event).as_any().type_id();
        for cb in self.callbacks(type_id) {
            cb((*event).as_any());
        }

        let mut queue = self.queue.lock().unwrap_or_else(|e| e.into_inner());
        if queue.len() >= MAX_QUEUE_SIZE {
            let evict_count = queue.len() / 2;
            warn!("Event queue full ({} events), evicting oldest {}", queue.len(), evict_count);
            queue.drain(0..evict_count);
        }
        queue.push(event);
    }
}

/// Pub/Sub event bus with deferred processing.
#[derive(Clone, Default)]
pub struct EventBus {
    channels: Arc<Channels>,
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Subscribe to events of type E.
    ///
    /// # Example
    /// ```ignore
    /// bus.subscribe::<SlideChanged, _>(|e| println!("now at {}", e.to));
    /// ```
    pub fn subscribe<E, F>(&self, callback: F)
    where
        E: Event,
        F: Fn(&E) + Send + Sync + 'static,
    {
        let wrapped: Callback = Arc::new(move |any: &dyn Any| {
            if let Some(event) = any.downcast_ref::<E>() {
                callback(event);
            }
        });
        self.channels
            .subscribers
            .write()
            .unwrap_or_else(|e| e.into_inner())
            .entry(TypeId::of::<E>())
            .or_default()
            .push(wrapped);
    }

    /// Invoke callbacks and queue for `poll()`.
    pub fn emit<E: Event>(&self, event: E) {
        self.channels.dispatch(Box::new(event));
    }

    pub fn emit_boxed(&self, event: BoxedEvent) {
        self.channels.dispatch(event);
    }

    /// All events emitted since the last poll, oldest first.
    pub fn poll(&self) -> Vec<BoxedEvent> {
        std::mem::take(&mut *self.channels.queue.lock().unwrap_or_else(|e| e.into_inner()))
    }

    /// Cloneable handle that emits into this bus
    pub fn emitter(&self) -> EventEmitter {
        EventEmitter {
            channels: Arc::clone(&self.channels),
        }
    }

    /// Clear subscribers for type E
    pub fn unsubscribe_all<E: Event>(&self) {
        self.channels
            .subscribers
            .write()
            .unwrap_or_else(|e| e.into_inner())
            .remove(&TypeId::of::<E>());
    }

    /// Clear all subscribers and queue
    pub fn clear(&self) {
        self.channels.subscribers.write().unwrap_or_else(|e| e.into_inner()).clear();
        self.channels.queue.lock().unwrap_or_else(|e| e.into_inner()).clear();
    }

    pub fn has_subscribers<E: Event>(&self) -> bool {
        !self.channels.callbacks(TypeId::of::<E>()).is_empty()
    }

    pub fn queue_len(&self) -> usize {
        self.channels.queue.lock().unwrap_or_else(|e| e.into_inner()).len()
    }
}

/// Emitter handle given to components.
#[derive(Clone)]
pub struct EventEmitter {
    channels: Arc<Channels>,
}

impl std::fmt::Debug for EventEmitter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventEmitter")
            .field("subscriber_types", &self.channels.subscribers.read().map(|s| s.len()).unwrap_or(0))
            .field("queue_len", &self.channels.queue.lock().map(|q| q.len()).unwrap_or(0))
            .finish()
    }
}

impl EventEmitter {
    pub fn emit<E: Event>(&self, event: E) {
        self.channels.dispatch(Box::new(event));
    }
}

/// Optional emitter; components built before the bus exists use `dummy()`.
#[derive(Clone, Default, Debug)]
pub struct OptionalEmitter {
    inner: Option<EventEmitter>,
}

impl OptionalEmitter {
    /// No-op emitter
    pub fn dummy() -> Self {
        Self { inner: None }
    }

    pub fn from_emitter(emitter: EventEmitter) -> Self {
        Self { inner: Some(emitter) }
    }

    pub fn is_connected(&self) -> bool {
        self.inner.is_some()
    }

    /// Emit event (no-op if dummy)
    pub fn emit<E: Event>(&self, event: E) {
        if let Some(ref emitter) = self.inner {
            emitter.emit(event);
        }
    }
}

impl From<EventEmitter> for OptionalEmitter {
    fn from(emitter: EventEmitter) -> Self {
        Self::from_emitter(emitter)
    }
}

/// Downcast a queued event to its concrete type.
///
/// Derefs to `dyn Event` first: calling `as_any()` on the `Box` would hit the
/// blanket impl and yield the box itself.
#[inline]
pub fn downcast_event<E: Event>(event: &BoxedEvent) -> Option<&E> {
    (**event).as_any().downcast_ref::<E>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicI32, Ordering};

    #[derive(Clone, Debug)]
    struct TestEvent {
        value: i32,
    }

    #[derive(Clone, Debug)]
    struct OtherEvent {
        msg: String,
    }

    #[test]
    fn test_subscribe_emit_immediate() {
        let bus = EventBus::new();
        let counter = Arc::new(AtomicI32::new(0));
        let c = Arc::clone(&counter);

        bus.subscribe::<TestEvent, _>(move |e| {
            c.fetch_add(e.value, Ordering::SeqCst);
        });

        bus.emit(TestEvent { value: 10 });
        assert_eq!(counter.load(Ordering::SeqCst), 10);
        bus.emit(TestEvent { value: 5 });
        assert_eq!(counter.load(Ordering::SeqCst), 15);
    }

    #[test]
    fn test_emit_queues_for_poll() {
        let bus = EventBus::new();
        bus.emit(TestEvent { value: 1 });
        bus.emit(OtherEvent { msg: "hello".into() });

        let events = bus.poll();
        assert_eq!(events.len(), 2);
        assert_eq!(downcast_event::<OtherEvent>(&events[1]).map(|e| e.msg.as_str()), Some("hello"));
        assert!(downcast_event::<OtherEvent>(&events[0]).is_none());
        assert_eq!(bus.poll().len(), 0);
    }

    #[test]
    fn test_emitter_shares_bus() {
        let bus = EventBus::new();
        let counter = Arc::new(AtomicI32::new(0));
        let c = Arc::clone(&counter);
        bus.subscribe::<TestEvent, _>(move |e| {
            c.fetch_add(e.value, Ordering::SeqCst);
        });

        OptionalEmitter::from(bus.emitter()).emit(TestEvent { value: 42 });
        OptionalEmitter::dummy().emit(TestEvent { value: 1000 });

        assert_eq!(counter.load(Ordering::SeqCst), 42);
        assert_eq!(bus.queue_len(), 1);
    }

    #[test]
    fn test_callback_may_emit() {
        let bus = EventBus::new();
        let inner = bus.clone();
        bus.subscribe::<TestEvent, _>(move |e| {
            inner.emit(OtherEvent { msg: format!("saw {}", e.value) });
        });
        bus.emit(TestEvent { value: 7 });
        assert_eq!(bus.queue_len(), 2);
    }

    #[test]
    fn test_unsubscribe() {
        let bus = EventBus::new();
        let counter = Arc::new(AtomicI32::new(0));
        let c = Arc::clone(&counter);
        bus.subscribe::<TestEvent, _>(move |e| {
            c.fetch_add(e.value, Ordering::SeqCst);
        });
        assert!(bus.has_subscribers::<TestEvent>());

        bus.unsubscribe_all::<TestEvent>();
        assert!(!bus.has_subscribers::<TestEvent>());
        bus.emit(TestEvent { value: 10 });
        assert_eq!(counter.load(Ordering::SeqCst), 0);
        // still queued
        assert_eq!(bus.poll().len(), 1);
    }

    #[test]
    fn test_queue_eviction() {
        let bus = EventBus::new();
        for value in 0..(MAX_QUEUE_SIZE as i32 + 1) {
            bus.emit(TestEvent { value });
        }
        let events = bus.poll();
        assert_eq!(events.len(), MAX_QUEUE_SIZE / 2 + 1);
        assert_eq!(downcast_event::<TestEvent>(&events[0]).map(|e| e.value), Some(500));
    }
}
