// palaver/palaver-core
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::any::Any;
use std::fmt::{Debug, Formatter};
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::Arc;

use parking_lot::Mutex;
use tracing::{debug, error, trace};

/// An insertion-ordered set of listener handles.
///
/// Handles are compared by the address of the listener they point to and a handle is never
/// registered twice. Vtable pointers of trait object handles are ignored.
/// Events are always dispatched to a snapshot which is taken under the lock, the lock is released
/// before the first listener is invoked. Listeners may therefore add or remove listeners
/// (themselves included) from within a callback. Those changes become visible with the next
/// dispatch.
pub struct ListenerRegistry<L: ?Sized> {
    name: &'static str,
    listeners: Mutex<Vec<Arc<L>>>,
}

impl<L: ?Sized> ListenerRegistry<L> {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            listeners: Mutex::new(vec![]),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Registers `listener`. Returns `false` if the same handle was registered already.
    pub fn add(&self, listener: Arc<L>) -> bool {
        let mut listeners = self.listeners.lock();

        if listeners.iter().any(|l| same_listener(l, &listener)) {
            debug!(registry = self.name, "Ignoring listener which is already registered.");
            return false;
        }

        listeners.push(listener);
        trace!(registry = self.name, count = listeners.len(), "Added listener.");
        true
    }

    /// Removes the first registration of `listener`. Returns `false` if it wasn't registered.
    pub fn remove(&self, listener: &Arc<L>) -> bool {
        let mut listeners = self.listeners.lock();

        let Some(idx) = listeners.iter().position(|l| same_listener(l, listener)) else {
            return false;
        };

        listeners.remove(idx);
        trace!(registry = self.name, count = listeners.len(), "Removed listener.");
        true
    }

    pub fn contains(&self, listener: &Arc<L>) -> bool {
        self.listeners
            .lock()
            .iter()
            .any(|l| same_listener(l, listener))
    }

    /// Returns a point-in-time copy of the registered listeners.
    pub fn snapshot(&self) -> Vec<Arc<L>> {
        self.listeners.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.listeners.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.lock().is_empty()
    }

    pub fn clear(&self) {
        self.listeners.lock().clear()
    }

    /// Invokes `notify` for every listener of a fresh snapshot in insertion order.
    ///
    /// A listener that panics is logged and skipped, the remaining listeners are still notified.
    /// Returns the number of listeners which were notified successfully.
    pub fn dispatch(&self, mut notify: impl FnMut(&L)) -> usize {
        let listeners = self.snapshot();
        let mut delivered = 0;

        for listener in listeners.iter() {
            match catch_unwind(AssertUnwindSafe(|| notify(listener.as_ref()))) {
                Ok(()) => delivered += 1,
                Err(panic) => error!(
                    registry = self.name,
                    reason = panic_message(panic.as_ref()),
                    "Listener failed while handling event."
                ),
            }
        }

        delivered
    }
}

impl<L: ?Sized> Debug for ListenerRegistry<L> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ListenerRegistry")
            .field("name", &self.name)
            .field("count", &self.len())
            .finish()
    }
}

fn same_listener<L: ?Sized>(lhs: &Arc<L>, rhs: &Arc<L>) -> bool {
    std::ptr::eq(Arc::as_ptr(lhs).cast::<()>(), Arc::as_ptr(rhs).cast::<()>())
}

fn panic_message(panic: &(dyn Any + Send)) -> &str {
    if let Some(msg) = panic.downcast_ref::<&'static str>() {
        return msg;
    }
    if let Some(msg) = panic.downcast_ref::<String>() {
        return msg.as_str();
    }
    "<unknown>"
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::OnceLock;

    use pretty_assertions::assert_eq;

    use super::*;

    trait Listener: Send + Sync {
        fn notify(&self, value: u32);
    }

    #[derive(Default)]
    struct Counter {
        calls: AtomicUsize,
    }

    impl Listener for Counter {
        fn notify(&self, _value: u32) {
            self.calls.fetch_add(1, Ordering::SeqCst);
        }
    }

    impl Counter {
        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    struct Panicking;

    impl Listener for Panicking {
        fn notify(&self, _value: u32) {
            panic!("listener exploded")
        }
    }

    #[test]
    fn test_add_ignores_duplicate_handles() {
        let registry = ListenerRegistry::<dyn Listener>::new("test");
        let listener: Arc<dyn Listener> = Arc::new(Counter::default());

        assert!(registry.add(listener.clone()));
        assert!(!registry.add(listener.clone()));
        assert_eq!(registry.len(), 1);

        // A different handle with an identical value is a different listener.
        assert!(registry.add(Arc::new(Counter::default())));
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_remove() {
        let registry = ListenerRegistry::<dyn Listener>::new("test");
        let listener: Arc<dyn Listener> = Arc::new(Counter::default());

        assert!(!registry.remove(&listener));
        registry.add(listener.clone());
        assert!(registry.contains(&listener));
        assert!(registry.remove(&listener));
        assert!(!registry.contains(&listener));
        assert!(registry.is_empty());
    }

    #[test]
    fn test_remove_handle_coerced_elsewhere() {
        // The handle may carry a different vtable pointer than the registered one.
        #[inline(never)]
        fn coerce(counter: &Arc<Counter>) -> Arc<dyn Listener> {
            counter.clone()
        }

        let registry = ListenerRegistry::<dyn Listener>::new("test");
        let counter = Arc::new(Counter::default());

        assert!(registry.add(counter.clone()));
        assert!(!registry.add(coerce(&counter)));
        assert!(registry.contains(&coerce(&counter)));
        assert!(registry.remove(&coerce(&counter)));
        assert!(registry.is_empty());
    }

    #[test]
    fn test_dispatch_in_insertion_order() {
        struct Recorder {
            id: u32,
            log: Arc<Mutex<Vec<u32>>>,
        }

        impl Listener for Recorder {
            fn notify(&self, _value: u32) {
                self.log.lock().push(self.id)
            }
        }

        let log = Arc::new(Mutex::new(vec![]));
        let registry = ListenerRegistry::<dyn Listener>::new("test");

        for id in [3, 1, 2] {
            registry.add(Arc::new(Recorder {
                id,
                log: log.clone(),
            }));
        }

        assert_eq!(registry.dispatch(|l| l.notify(0)), 3);
        assert_eq!(*log.lock(), vec![3, 1, 2]);
    }

    #[test]
    fn test_panicking_listener_does_not_abort_dispatch() {
        let registry = ListenerRegistry::<dyn Listener>::new("test");
        let before = Arc::new(Counter::default());
        let after = Arc::new(Counter::default());

        registry.add(before.clone());
        registry.add(Arc::new(Panicking));
        registry.add(after.clone());

        assert_eq!(registry.dispatch(|l| l.notify(1)), 2);
        assert_eq!(before.calls(), 1);
        assert_eq!(after.calls(), 1);
    }

    #[test]
    fn test_dispatch_uses_snapshot() {
        struct Mutating {
            registry: Arc<ListenerRegistry<dyn Listener>>,
            this: OnceLock<Arc<dyn Listener>>,
            victim: Arc<dyn Listener>,
            newcomer: Arc<dyn Listener>,
        }

        impl Listener for Mutating {
            fn notify(&self, _value: u32) {
                if let Some(this) = self.this.get() {
                    self.registry.remove(this);
                }
                self.registry.remove(&self.victim);
                self.registry.add(self.newcomer.clone());
            }
        }

        let registry = Arc::new(ListenerRegistry::<dyn Listener>::new("test"));
        let victim = Arc::new(Counter::default());
        let newcomer = Arc::new(Counter::default());

        let mutating = Arc::new(Mutating {
            registry: registry.clone(),
            this: OnceLock::new(),
            victim: victim.clone(),
            newcomer: newcomer.clone(),
        });
        let handle: Arc<dyn Listener> = mutating.clone();
        _ = mutating.this.set(handle.clone());

        registry.add(handle);
        registry.add(victim.clone());

        assert_eq!(registry.dispatch(|l| l.notify(1)), 2);

        // The removed listener was part of the snapshot, the added one was not.
        assert_eq!(victim.calls(), 1);
        assert_eq!(newcomer.calls(), 0);
        assert_eq!(registry.len(), 1);

        registry.dispatch(|l| l.notify(2));
        assert_eq!(victim.calls(), 1);
        assert_eq!(newcomer.calls(), 1);
    }

    #[test]
    fn test_concurrent_add_and_dispatch() {
        let registry = Arc::new(ListenerRegistry::<dyn Listener>::new("test"));
        let counters = (0..16)
            .map(|_| Arc::new(Counter::default()))
            .collect::<Vec<_>>();

        let threads = counters
            .iter()
            .cloned()
            .map(|counter| {
                let registry = registry.clone();
                std::thread::spawn(move || {
                    registry.add(counter);
                    registry.dispatch(|l| l.notify(0));
                })
            })
            .collect::<Vec<_>>();

        for thread in threads {
            thread.join().unwrap();
        }

        assert_eq!(registry.len(), 16);
        // Every listener saw at least the dispatch of its own thread.
        for counter in counters {
            assert!(counter.calls() >= 1);
        }
    }
}
