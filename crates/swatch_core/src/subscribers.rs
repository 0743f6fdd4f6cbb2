//! Listener table for single-threaded change notification
//!
//! State owners keep a `Subscribers<E>` and call [`Subscribers::notify`]
//! after every observable mutation. Listeners are plain `FnMut(&E)` closures
//! and are not required to be `Send`: the owner and all of its listeners
//! live on the UI thread.
//!
//! ```rust
//! use swatch_core::Subscribers;
//! use std::cell::Cell;
//! use std::rc::Rc;
//!
//! let mut subs = Subscribers::<u32>::new();
//! let seen = Rc::new(Cell::new(0));
//! let seen_clone = seen.clone();
//! let id = subs.subscribe(move |v| seen_clone.set(*v));
//!
//! subs.notify(&7);
//! assert_eq!(seen.get(), 7);
//!
//! assert!(subs.unsubscribe(id));
//! subs.notify(&9);
//! assert_eq!(seen.get(), 7);
//! ```

use slotmap::{new_key_type, SlotMap};

new_key_type! {
    /// Handle returned by [`Subscribers::subscribe`]
    pub struct ListenerId;
}

/// A boxed change listener
pub type Listener<E> = Box<dyn FnMut(&E)>;

/// Ordered table of change listeners
pub struct Subscribers<E> {
    listeners: SlotMap<ListenerId, Listener<E>>,
}

impl<E> Default for Subscribers<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> Subscribers<E> {
    pub fn new() -> Self {
        Self {
            listeners: SlotMap::with_key(),
        }
    }

    /// Register a listener, returning a handle for later removal
    pub fn subscribe<F>(&mut self, listener: F) -> ListenerId
    where
        F: FnMut(&E) + 'static,
    {
        self.listeners.insert(Box::new(listener))
    }

    /// Remove a listener. Returns false if the handle was already removed.
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        self.listeners.remove(id).is_some()
    }

    /// Deliver an event to every listener
    pub fn notify(&mut self, event: &E) {
        for (_, listener) in self.listeners.iter_mut() {
            listener(event);
        }
    }

    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }

    pub fn clear(&mut self) {
        self.listeners.clear();
    }
}

impl<E> std::fmt::Debug for Subscribers<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscribers")
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_notify_reaches_every_listener() {
        let mut subs = Subscribers::<&'static str>::new();
        let log = Rc::new(RefCell::new(Vec::new()));

        let a = log.clone();
        subs.subscribe(move |e| a.borrow_mut().push(format!("a:{e}")));
        let b = log.clone();
        subs.subscribe(move |e| b.borrow_mut().push(format!("b:{e}")));

        subs.notify(&"changed");

        let mut entries = log.borrow().clone();
        entries.sort();
        assert_eq!(entries, vec!["a:changed", "b:changed"]);
    }

    #[test]
    fn test_unsubscribe_twice() {
        let mut subs = Subscribers::<()>::new();
        let id = subs.subscribe(|_| {});
        assert_eq!(subs.len(), 1);
        assert!(subs.unsubscribe(id));
        assert!(!subs.unsubscribe(id));
        assert!(subs.is_empty());
    }

    #[test]
    fn test_clear_drops_listeners() {
        let mut subs = Subscribers::<u8>::new();
        subs.subscribe(|_| {});
        subs.subscribe(|_| {});
        subs.clear();
        assert!(subs.is_empty());
    }
}
