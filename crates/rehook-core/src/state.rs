use std::marker::PhantomData;

use crate::runtime::{Runtime, Slot};

impl Runtime {
    /// Slot-based state cell (sequential composition only): the Nth
    /// `use_state` in a pass always addresses the Nth slot.
    ///
    /// `init` runs only on the first pass that reaches this position;
    /// later passes ignore it and return whatever the slot holds at the
    /// time the pass reads it. The returned [`Setter`] stays bound to this
    /// slot index for the life of the runtime.
    pub fn use_state<T: Clone + 'static>(&self, init: impl FnOnce() -> T) -> (T, Setter<T>) {
        let cursor = self.inner.cursor.get();
        self.inner.cursor.set(cursor + 1);

        let mut slots = self.inner.slots.borrow_mut();
        if cursor >= slots.len() {
            let value = init();
            slots.push(Slot::State(Box::new(value.clone())));
            return (value, Setter::new(self.clone(), cursor));
        }

        if let Slot::State(stored) = &slots[cursor]
            && let Some(value) = stored.downcast_ref::<T>()
        {
            return (value.clone(), Setter::new(self.clone(), cursor));
        }

        // kind or type mismatch; replace (else the slot is unusable)
        log::warn!(
            "use_state: slot {cursor} no longer holds a {}; replacing. \
             Hook call order probably differs from the previous pass.",
            std::any::type_name::<T>()
        );
        let value = init();
        slots[cursor] = Slot::State(Box::new(value.clone()));
        (value, Setter::new(self.clone(), cursor))
    }
}

/// A write handle bound permanently to one slot.
///
/// `set` overwrites the slot unconditionally — no equality check, and
/// nothing is scheduled. The new value becomes visible the next time a
/// pass reads that slot. Setters may be invoked at any time, including
/// from inside a pass.
pub struct Setter<T> {
    runtime: Runtime,
    slot: usize,
    _value: PhantomData<fn(T)>,
}

impl<T: 'static> Setter<T> {
    pub(crate) fn new(runtime: Runtime, slot: usize) -> Self {
        Self {
            runtime,
            slot,
            _value: PhantomData,
        }
    }

    pub fn set(&self, value: T) {
        // Slot indices are stable and the store never shrinks, so the
        // bound index is always in range.
        self.runtime.inner.slots.borrow_mut()[self.slot] = Slot::State(Box::new(value));
    }
}

impl<T> Clone for Setter<T> {
    fn clone(&self) -> Self {
        Self {
            runtime: self.runtime.clone(),
            slot: self.slot,
            _value: PhantomData,
        }
    }
}
