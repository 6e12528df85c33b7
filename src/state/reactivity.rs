// ============================================================================
// REACTIVITY - Subscriber notifications for reactive state
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

type Callback = Box<dyn Fn()>;

/// Reactive value: every `set`/`update` notifies all subscribers.
///
/// Clones share both the value and the subscriber list, so a callback
/// registered through any clone fires for writes through any other.
pub struct ReactiveState<T> {
    value: Rc<RefCell<T>>,
    subscribers: Rc<RefCell<Vec<Callback>>>,
}

impl<T> ReactiveState<T> {
    pub fn new(value: T) -> Self {
        Self {
            value: Rc::new(RefCell::new(value)),
            subscribers: Rc::new(RefCell::new(Vec::new())),
        }
    }

    /// Read the value through a closure; the borrow ends when it returns
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.value.borrow())
    }

    /// Replace the value and notify subscribers
    pub fn set(&self, new_value: T) {
        *self.value.borrow_mut() = new_value;
        self.notify();
    }

    /// Mutate the value in place and notify subscribers
    pub fn update<F>(&self, updater: F)
    where
        F: FnOnce(&mut T),
    {
        updater(&mut *self.value.borrow_mut());
        self.notify();
    }

    pub fn subscribe<F>(&self, callback: F)
    where
        F: Fn() + 'static,
    {
        self.subscribers.borrow_mut().push(Box::new(callback));
    }

    fn notify(&self) {
        // Value borrow is released before this runs; callbacks may read freely
        for callback in self.subscribers.borrow().iter() {
            callback();
        }
    }
}

impl<T> Clone for ReactiveState<T> {
    fn clone(&self) -> Self {
        Self {
            value: self.value.clone(),
            subscribers: self.subscribers.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_notifies_subscribers() {
        let state = ReactiveState::new(0);
        let fired = Rc::new(RefCell::new(0));

        let fired_clone = fired.clone();
        state.subscribe(move || *fired_clone.borrow_mut() += 1);

        state.set(1);
        state.update(|v| *v += 1);

        assert_eq!(state.with(|v| *v), 2);
        assert_eq!(*fired.borrow(), 2);
    }

    #[test]
    fn clones_share_value_and_subscribers() {
        let state = ReactiveState::new(String::new());
        let clone = state.clone();

        let fired = Rc::new(RefCell::new(false));
        let fired_clone = fired.clone();
        state.subscribe(move || *fired_clone.borrow_mut() = true);

        clone.set("hallo".to_string());

        assert!(*fired.borrow());
        assert_eq!(state.with(|v| v.clone()), "hallo");
    }
}
