//! Process-wide registry of transcript bindings.
//!
//! At most one binding is live per key. Binding a key that is already bound
//! unsubscribes the previous binding first; an unsubscribed binding drops its
//! render target, so anything still holding it talks to nothing.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, OnceLock, Weak};

use super::render::RenderTarget;

type Slot = Arc<Mutex<Option<Box<dyn RenderTarget>>>>;
type BindingMap = Mutex<HashMap<String, Binding>>;

fn lock<T: ?Sized>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    match mutex.lock() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    }
}

/// Handle to a render target registered under a key.
#[derive(Clone)]
pub struct Binding {
    key: String,
    id: u64,
    slot: Slot,
    registry: Weak<BindingMap>,
}

impl Binding {
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Whether this binding still owns its render target.
    pub fn is_live(&self) -> bool {
        lock(&self.slot).is_some()
    }

    /// Detach the render target. Idempotent.
    ///
    /// The registry entry stays until [`Binding::release`] or a rebind.
    pub fn unsubscribe(&self) {
        lock(&self.slot).take();
    }

    /// Remove this binding from its registry (if it is still the current one
    /// for its key) and detach the target.
    pub fn release(&self) {
        match self.registry.upgrade() {
            Some(bindings) => {
                let mut bindings = lock(&bindings);
                if bindings
                    .get(&self.key)
                    .is_some_and(|current| current.same_as(self))
                {
                    bindings.remove(&self.key);
                }
                self.unsubscribe();
            }
            None => self.unsubscribe(),
        }
    }

    /// Run `f` against the target if the binding is still live.
    pub fn with_target<R>(&self, f: impl FnOnce(&mut dyn RenderTarget) -> R) -> Option<R> {
        let mut slot = lock(&self.slot);
        slot.as_mut().map(|target| f(target.as_mut()))
    }

    /// Live and attached to a visible container.
    pub fn is_visible(&self) -> bool {
        self.with_target(|target| target.is_visible())
            .unwrap_or(false)
    }

    fn same_as(&self, other: &Binding) -> bool {
        self.id == other.id
    }
}

impl std::fmt::Debug for Binding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Binding")
            .field("key", &self.key)
            .field("id", &self.id)
            .field("live", &self.is_live())
            .finish()
    }
}

/// Keyed map of live bindings.
#[derive(Default)]
pub struct Registry {
    bindings: Arc<BindingMap>,
    next_id: AtomicU64,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// The registry shared by the whole process.
    pub fn global() -> &'static Registry {
        static GLOBAL: OnceLock<Registry> = OnceLock::new();
        GLOBAL.get_or_init(Registry::new)
    }

    /// Register `target` under `key`, evicting any previous binding.
    pub fn bind(&self, key: &str, target: Box<dyn RenderTarget>) -> Binding {
        let binding = Binding {
            key: key.to_string(),
            id: self.next_id.fetch_add(1, Ordering::Relaxed),
            slot: Arc::new(Mutex::new(Some(target))),
            registry: Arc::downgrade(&self.bindings),
        };

        let mut bindings = lock(&self.bindings);
        if let Some(previous) = bindings.insert(key.to_string(), binding.clone()) {
            tracing::debug!(key, "evicting previous transcript binding");
            previous.unsubscribe();
        }

        binding
    }

    /// Unsubscribe and remove the binding for `key`.
    ///
    /// Returns false if nothing was bound.
    pub fn unbind(&self, key: &str) -> bool {
        let mut bindings = lock(&self.bindings);
        match bindings.remove(key) {
            Some(binding) => {
                binding.unsubscribe();
                true
            }
            None => false,
        }
    }

    /// Remove `binding` only if it is still the one registered for its key.
    ///
    /// Same as [`Binding::release`]; the binding always goes back to the
    /// registry that created it.
    pub fn release(&self, binding: &Binding) {
        binding.release();
    }

    pub fn is_bound(&self, key: &str) -> bool {
        lock(&self.bindings).contains_key(key)
    }

    pub fn len(&self) -> usize {
        lock(&self.bindings).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
