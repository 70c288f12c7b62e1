use std::any::Any;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::deps::DepList;
use crate::error::RenderError;
use crate::state::Setter;

thread_local! {
    static DEFAULT_RUNTIME: Runtime = Runtime::new();
}

/// One addressable location in the slot store.
pub(crate) enum Slot {
    State(Box<dyn Any>),
    Deps(DepList),
}

/// A hook runtime: the slot store plus the cursor that maps sequential hook
/// calls onto it.
///
/// The store is populated lazily, one slot per call position, on the first
/// pass that reaches it. It never shrinks and is never reset; only the
/// cursor rewinds between passes. Hooks must therefore be called in the
/// same order and number on every pass — the runtime cannot tell a reorder
/// from a value change, it can only warn when a slot's shape stops
/// matching (see [`Runtime::render`] for the pass-level diagnostic).
///
/// Cloning a `Runtime` clones the handle; both handles address the same
/// store. Independent stores come from independent [`Runtime::new`] calls.
#[derive(Clone, Default)]
pub struct Runtime {
    pub(crate) inner: Rc<Inner>,
}

#[derive(Default)]
pub(crate) struct Inner {
    pub(crate) slots: RefCell<Vec<Slot>>,
    pub(crate) cursor: Cell<usize>,
    rendering: Cell<bool>,
    /// Slot count observed at the end of the previous pass.
    watermark: Cell<Option<usize>>,
}

/// Clears the rendering flag even if the pass unwinds.
struct PassGuard {
    inner: Rc<Inner>,
}

impl Drop for PassGuard {
    fn drop(&mut self) {
        self.inner.rendering.set(false);
    }
}

impl Runtime {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drives one pass: rewinds the cursor to slot 0 and invokes `pass`
    /// exactly once, synchronously, returning whatever it returns.
    ///
    /// The driver itself never touches the slot store; only the hooks
    /// called from `pass` read or write it. Calling `render` again from
    /// inside the pass (e.g. from an effect callback) fails with
    /// [`RenderError::Reentrant`] rather than corrupting the shared cursor.
    ///
    /// As a purely diagnostic aid, a change in the store's final length
    /// between two passes is reported with `log::warn!` — that is the one
    /// misuse the runtime can observe cheaply.
    pub fn render<R>(&self, pass: impl FnOnce() -> R) -> Result<R, RenderError> {
        if self.inner.rendering.replace(true) {
            return Err(RenderError::Reentrant);
        }
        let guard = PassGuard {
            inner: self.inner.clone(),
        };

        self.inner.cursor.set(0);
        let out = pass();
        drop(guard);

        let len = self.inner.slots.borrow().len();
        if let Some(prev) = self.inner.watermark.replace(Some(len))
            && prev != len
        {
            log::warn!(
                "render: hook count changed between passes ({prev} -> {len}); \
                 slot alignment is no longer reliable"
            );
        }
        Ok(out)
    }
}

/// The per-thread default runtime, for callers that want the original
/// "one process-wide instance" shape instead of threading a [`Runtime`]
/// through explicitly.
pub fn default_runtime() -> Runtime {
    DEFAULT_RUNTIME.with(|rt| rt.clone())
}

/// [`Runtime::render`] on the default runtime.
pub fn render<R>(pass: impl FnOnce() -> R) -> Result<R, RenderError> {
    default_runtime().render(pass)
}

/// [`Runtime::use_state`] on the default runtime.
pub fn use_state<T: Clone + 'static>(init: impl FnOnce() -> T) -> (T, Setter<T>) {
    default_runtime().use_state(init)
}

/// [`Runtime::use_effect`] on the default runtime.
pub fn use_effect(callback: impl FnOnce(), deps: impl Into<DepList>) {
    default_runtime().use_effect(callback, deps)
}
