//! Synchronous listener lists for outward notifications
//!
//! Small subject type used by the score tracker and round timer. Callbacks
//! run in registration order, on the same tick that raised the event. There
//! is no global bus; each subject owns its own list.

/// Ordered list of callbacks for one event type.
pub struct Listeners<E> {
    callbacks: Vec<Box<dyn FnMut(&E)>>,
}

impl<E> Default for Listeners<E> {
    fn default() -> Self {
        Self {
            callbacks: Vec::new(),
        }
    }
}

impl<E> std::fmt::Debug for Listeners<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Listeners")
            .field("count", &self.callbacks.len())
            .finish()
    }
}

impl<E> Listeners<E> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a callback. Callbacks cannot be removed; subjects live as
    /// long as the game state that owns them.
    pub fn subscribe(&mut self, callback: impl FnMut(&E) + 'static) {
        self.callbacks.push(Box::new(callback));
    }

    /// Invoke every callback in registration order.
    pub fn emit(&mut self, event: &E) {
        for callback in &mut self.callbacks {
            callback(event);
        }
    }

    pub fn len(&self) -> usize {
        self.callbacks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.callbacks.is_empty()
    }
}
