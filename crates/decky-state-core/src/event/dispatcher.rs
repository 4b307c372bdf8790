use std::any::Any;
use std::fmt;
use std::panic::{self, AssertUnwindSafe};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use log::{error, trace};

use crate::event::{Listener, ListenerId};

struct RegistryInner {
    listeners: Vec<(ListenerId, Listener)>,
    next_listener_id: ListenerId,
}

/// Ordered list of change listeners owned by the state store.
///
/// Listeners are called in registration order. Delivery works on a copy of
/// the list taken when the notification starts, so a listener that
/// unsubscribes itself (or another listener) mid-delivery only affects the
/// next notification.
pub struct ListenerRegistry {
    inner: Mutex<RegistryInner>,
}

// Manual Debug implementation for ListenerRegistry
impl fmt::Debug for ListenerRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.lock();
        f.debug_struct("ListenerRegistry")
         .field("listener_count", &inner.listeners.len())
         .field("next_listener_id", &inner.next_listener_id)
         .finish()
    }
}

impl ListenerRegistry {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(RegistryInner {
                listeners: Vec::new(),
                next_listener_id: 1,
            }),
        }
    }

    /// Register a listener and return its handle
    pub fn subscribe<F>(&self, listener: F) -> ListenerId
    where
        F: Fn() + Send + Sync + 'static,
    {
        let mut inner = self.lock();
        let id = inner.next_listener_id;
        inner.next_listener_id += 1;
        inner.listeners.push((id, Arc::new(listener)));
        trace!("Registered change listener {}", id);
        id
    }

    /// Remove a listener. Returns `false` if the handle was unknown.
    pub fn unsubscribe(&self, id: ListenerId) -> bool {
        let mut inner = self.lock();
        let len_before = inner.listeners.len();
        inner.listeners.retain(|(listener_id, _)| *listener_id != id);
        let removed = inner.listeners.len() < len_before;
        if removed {
            trace!("Removed change listener {}", id);
        }
        removed
    }

    pub fn len(&self) -> usize {
        self.lock().listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().listeners.is_empty()
    }

    /// Deliver one notification to every listener registered right now.
    ///
    /// A panicking listener is logged and skipped; the rest still run.
    /// Returns how many listeners completed normally.
    pub fn notify(&self) -> usize {
        // Never hold the lock while calling out: listeners may (un)subscribe.
        let listeners: Vec<(ListenerId, Listener)> = self.lock().listeners.clone();
        let mut delivered = 0;
        for (id, listener) in listeners {
            trace!("Delivering change notification to listener {}", id);
            match panic::catch_unwind(AssertUnwindSafe(|| (*listener)())) {
                Ok(()) => delivered += 1,
                Err(payload) => {
                    error!(
                        "Change listener {} panicked during notification: {}",
                        id,
                        panic_message(payload.as_ref())
                    );
                }
            }
        }
        delivered
    }

    fn lock(&self) -> MutexGuard<'_, RegistryInner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for ListenerRegistry { fn default() -> Self { Self::new() } }

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    if let Some(message) = payload.downcast_ref::<&'static str>() {
        message
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.as_str()
    } else {
        "<non-string panic payload>"
    }
}
