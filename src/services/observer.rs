//! Observer list shared by the scroll observer and the theme controller.
//!
//! Listeners are plain closures registered under an id. Views register on
//! mount and must call [`Subscribers::unsubscribe`] on teardown; nothing
//! else removes them.

use std::fmt;

/// Handle returned by [`Subscribers::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener<T> = Box<dyn FnMut(&T)>;

/// Ordered list of listeners notified synchronously.
pub struct Subscribers<T> {
    next_id: u64,
    listeners: Vec<(SubscriptionId, Listener<T>)>,
}

impl<T> Subscribers<T> {
    /// Creates an empty list.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            next_id: 0,
            listeners: Vec::new(),
        }
    }

    /// Registers a listener. Listeners run in registration order.
    pub fn subscribe(&mut self, listener: impl FnMut(&T) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Removes a listener. Returns `false` if the id was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(existing, _)| *existing != id);
        self.listeners.len() != before
    }

    /// Calls every listener with `value`.
    pub fn notify(&mut self, value: &T) {
        for (_, listener) in &mut self.listeners {
            listener(value);
        }
    }

    /// Number of registered listeners.
    #[must_use]
    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    /// Whether no listener is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }
}

impl<T> Default for Subscribers<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for Subscribers<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
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
    fn test_notify_in_registration_order() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut subscribers = Subscribers::new();

        let first = Rc::clone(&log);
        subscribers.subscribe(move |v: &u32| first.borrow_mut().push(("first", *v)));
        let second = Rc::clone(&log);
        subscribers.subscribe(move |v: &u32| second.borrow_mut().push(("second", *v)));

        subscribers.notify(&7);
        assert_eq!(*log.borrow(), vec![("first", 7), ("second", 7)]);
    }

    #[test]
    fn test_unsubscribed_listener_is_not_called() {
        let calls = Rc::new(RefCell::new(0));
        let mut subscribers = Subscribers::new();

        let counter = Rc::clone(&calls);
        let id = subscribers.subscribe(move |_: &()| *counter.borrow_mut() += 1);
        subscribers.notify(&());
        assert!(subscribers.unsubscribe(id));
        subscribers.notify(&());

        assert_eq!(*calls.borrow(), 1);
        assert!(subscribers.is_empty());
    }

    #[test]
    fn test_unsubscribe_unknown_id() {
        let mut subscribers: Subscribers<()> = Subscribers::new();
        let id = subscribers.subscribe(|_| {});
        assert!(subscribers.unsubscribe(id));
        assert!(!subscribers.unsubscribe(id));
    }

    #[test]
    fn test_ids_are_not_reused() {
        let mut subscribers: Subscribers<()> = Subscribers::new();
        let a = subscribers.subscribe(|_| {});
        subscribers.unsubscribe(a);
        let b = subscribers.subscribe(|_| {});
        assert_ne!(a, b);
        assert_eq!(subscribers.len(), 1);
    }
}
