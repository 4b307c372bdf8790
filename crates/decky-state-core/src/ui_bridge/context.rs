use std::cell::RefCell;
use std::fmt;
use std::ops::Deref;
use std::sync::Arc;

use crate::plugin_system::{DisabledPlugin, VersionInfo};
use crate::state::{DeckyState, PublicDeckyState};
use crate::ui_bridge::error::UiBridgeError;
use crate::ui_bridge::provider::ProviderShared;

/// The store mutators UI consumers may call, bound to one store at attach time.
///
/// Everything else is written by collaborators that hold the store directly.
#[derive(Clone)]
pub(crate) struct BoundMutators {
    set_version_info: Arc<dyn Fn(VersionInfo) + Send + Sync>,
    set_is_loader_updating: Arc<dyn Fn(bool) + Send + Sync>,
    set_active_plugin: Arc<dyn Fn(&str) + Send + Sync>,
    set_plugin_order: Arc<dyn Fn(Vec<String>) + Send + Sync>,
    set_disabled_plugins: Arc<dyn Fn(Vec<DisabledPlugin>) + Send + Sync>,
    close_active_plugin: Arc<dyn Fn() + Send + Sync>,
}

impl BoundMutators {
    pub(crate) fn bind(store: &Arc<DeckyState>) -> Self {
        let s = Arc::clone(store);
        let set_version_info = Arc::new(move |info: VersionInfo| s.set_version_info(info));
        let s = Arc::clone(store);
        let set_is_loader_updating = Arc::new(move |updating: bool| s.set_is_loader_updating(updating));
        let s = Arc::clone(store);
        let set_active_plugin = Arc::new(move |name: &str| s.set_active_plugin(name));
        let s = Arc::clone(store);
        let set_plugin_order = Arc::new(move |order: Vec<String>| s.set_plugin_order(order));
        let s = Arc::clone(store);
        let set_disabled_plugins =
            Arc::new(move |disabled: Vec<DisabledPlugin>| s.set_disabled_plugins(disabled));
        let s = Arc::clone(store);
        let close_active_plugin = Arc::new(move || s.close_active_plugin());

        Self {
            set_version_info,
            set_is_loader_updating,
            set_active_plugin,
            set_plugin_order,
            set_disabled_plugins,
            close_active_plugin,
        }
    }
}

/// What a UI consumer gets from [`use_decky_state`]: the published snapshot
/// (through `Deref`) plus the bound mutators.
#[derive(Clone)]
pub struct DeckyStateContext {
    state: PublicDeckyState,
    mutators: BoundMutators,
}

impl fmt::Debug for DeckyStateContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DeckyStateContext")
         .field("state", &self.state)
         .finish_non_exhaustive()
    }
}

impl DeckyStateContext {
    pub(crate) fn new(state: PublicDeckyState, mutators: BoundMutators) -> Self {
        Self { state, mutators }
    }

    /// The snapshot published when this context was looked up
    pub fn state(&self) -> &PublicDeckyState {
        &self.state
    }

    pub fn set_version_info(&self, version_info: VersionInfo) {
        (self.mutators.set_version_info)(version_info)
    }

    pub fn set_is_loader_updating(&self, is_updating: bool) {
        (self.mutators.set_is_loader_updating)(is_updating)
    }

    pub fn set_active_plugin(&self, name: &str) {
        (self.mutators.set_active_plugin)(name)
    }

    pub fn set_plugin_order(&self, plugin_order: Vec<String>) {
        (self.mutators.set_plugin_order)(plugin_order)
    }

    pub fn set_disabled_plugins(&self, disabled_plugins: Vec<DisabledPlugin>) {
        (self.mutators.set_disabled_plugins)(disabled_plugins)
    }

    pub fn close_active_plugin(&self) {
        (self.mutators.close_active_plugin)()
    }
}

impl Deref for DeckyStateContext {
    type Target = PublicDeckyState;

    fn deref(&self) -> &Self::Target {
        &self.state
    }
}

thread_local! {
    // One provider per thread; a UI tree lives on a single thread.
    static ACTIVE_SCOPE: RefCell<Option<Arc<ProviderShared>>> = const { RefCell::new(None) };
}

pub(crate) fn enter_scope(shared: Arc<ProviderShared>) -> Result<(), UiBridgeError> {
    ACTIVE_SCOPE.with(|scope| {
        let mut scope = scope.borrow_mut();
        if scope.is_some() {
            return Err(UiBridgeError::ScopeAlreadyActive);
        }
        *scope = Some(shared);
        Ok(())
    })
}

/// Clear the scope if it still belongs to `shared`
pub(crate) fn leave_scope(shared: &Arc<ProviderShared>) -> bool {
    ACTIVE_SCOPE.with(|scope| {
        let mut scope = scope.borrow_mut();
        let owned = scope.as_ref().is_some_and(|active| Arc::ptr_eq(active, shared));
        if owned {
            *scope = None;
        }
        owned
    })
}

/// Look up the state context of the provider attached on this thread
pub fn current_context() -> Result<DeckyStateContext, UiBridgeError> {
    ACTIVE_SCOPE.with(|scope| {
        scope
            .borrow()
            .as_ref()
            .map(|shared| shared.context())
            .ok_or(UiBridgeError::NoActiveScope)
    })
}

/// Look up the state context of the enclosing provider.
///
/// # Panics
///
/// Panics when no [`StateContextProvider`](crate::ui_bridge::StateContextProvider)
/// is attached on the current thread. That is a wiring bug, not a runtime
/// condition to recover from.
pub fn use_decky_state() -> DeckyStateContext {
    match current_context() {
        Ok(context) => context,
        Err(e) => panic!("{}", e),
    }
}
