use std::fmt;
use std::marker::PhantomData;
use std::rc::Rc;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, RwLock};

use log::{debug, info};

use crate::event::ListenerId;
use crate::state::{DeckyState, PublicDeckyState};
use crate::ui_bridge::context::{self, BoundMutators, DeckyStateContext};
use crate::ui_bridge::error::UiBridgeError;
use crate::ui_bridge::RenderTarget;

/// State shared between the provider, its store listener and the scope registry
pub(crate) struct ProviderShared {
    store: Arc<DeckyState>,
    published: RwLock<PublicDeckyState>,
    render_targets: Mutex<Vec<Arc<dyn RenderTarget>>>,
    mutators: BoundMutators,
}

impl ProviderShared {
    fn republish(&self) {
        let snapshot = self.store.public_state();
        *self.published.write().unwrap_or_else(PoisonError::into_inner) = snapshot.clone();

        // Clone the list so a target may register another target while redrawing.
        let targets: Vec<Arc<dyn RenderTarget>> = self.targets().clone();
        for target in targets {
            debug!("Scheduling redraw on render target '{}'", target.name());
            target.schedule_redraw(&snapshot);
        }
    }

    fn published(&self) -> PublicDeckyState {
        self.published.read().unwrap_or_else(PoisonError::into_inner).clone()
    }

    pub(crate) fn context(&self) -> DeckyStateContext {
        DeckyStateContext::new(self.published(), self.mutators.clone())
    }

    fn targets(&self) -> MutexGuard<'_, Vec<Arc<dyn RenderTarget>>> {
        self.render_targets.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Keeps one published copy of a store's state in sync for a UI tree.
///
/// Attaching captures the current snapshot, subscribes to the store and makes
/// the state reachable through [`use_decky_state`](crate::ui_bridge::use_decky_state)
/// on the current thread. Detaching (explicitly or on drop) unsubscribes and
/// closes the scope; the store itself is left untouched.
pub struct StateContextProvider {
    shared: Arc<ProviderShared>,
    listener_id: Option<ListenerId>,
    // The scope is thread-local, so the provider must stay on its thread.
    _not_send: PhantomData<Rc<()>>,
}

impl fmt::Debug for StateContextProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StateContextProvider")
         .field("listener_id", &self.listener_id)
         .field("render_targets", &self.shared.targets().len())
         .finish_non_exhaustive()
    }
}

impl StateContextProvider {
    /// Attach to `store` and open the state context scope on this thread
    pub fn attach(store: Arc<DeckyState>) -> Result<Self, UiBridgeError> {
        let shared = Arc::new(ProviderShared {
            published: RwLock::new(store.public_state()),
            mutators: BoundMutators::bind(&store),
            render_targets: Mutex::new(Vec::new()),
            store,
        });

        context::enter_scope(Arc::clone(&shared))?;

        // Weak: the store's listener list must not own the provider.
        let weak = Arc::downgrade(&shared);
        let listener_id = shared.store.subscribe(move || {
            if let Some(shared) = weak.upgrade() {
                shared.republish();
            }
        });
        info!("State context provider attached (listener {})", listener_id);

        Ok(Self {
            shared,
            listener_id: Some(listener_id),
            _not_send: PhantomData,
        })
    }

    /// Add a rendering collaborator that is asked to redraw after each republish
    pub fn register_render_target(&self, target: Arc<dyn RenderTarget>) {
        info!("Registered render target: {}", target.name());
        self.shared.targets().push(target);
    }

    /// The snapshot most recently published to consumers
    pub fn published(&self) -> PublicDeckyState {
        self.shared.published()
    }

    /// Same as [`use_decky_state`](crate::ui_bridge::use_decky_state), without
    /// going through the scope
    pub fn context(&self) -> DeckyStateContext {
        self.shared.context()
    }

    pub fn is_attached(&self) -> bool {
        self.listener_id.is_some()
    }

    /// Stop following the store and close the scope
    pub fn detach(mut self) {
        self.teardown();
    }

    fn teardown(&mut self) {
        if let Some(listener_id) = self.listener_id.take() {
            self.shared.store.unsubscribe(listener_id);
            context::leave_scope(&self.shared);
            info!("State context provider detached (listener {})", listener_id);
        }
    }
}

impl Drop for StateContextProvider {
    fn drop(&mut self) {
        self.teardown();
    }
}
