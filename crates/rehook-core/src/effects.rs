use crate::deps::DepList;
use crate::runtime::{Runtime, Slot};

impl Runtime {
    /// Conditional effect cell.
    ///
    /// Runs `callback` when this is the first pass to reach the position,
    /// or when any dependency differs from the stored snapshot under
    /// [`Dep::same`](crate::deps::Dep::same). The comparison walks the
    /// *new* list only: a missing stored element counts as different,
    /// surplus stored elements are ignored. The snapshot is replaced after
    /// the callback returns, never merged.
    ///
    /// An empty list therefore runs the callback exactly once, on the
    /// first pass.
    pub fn use_effect(&self, callback: impl FnOnce(), deps: impl Into<DepList>) {
        let deps = deps.into();
        let cursor = self.inner.cursor.get();

        let changed = {
            let slots = self.inner.slots.borrow();
            match slots.get(cursor) {
                Some(Slot::Deps(old)) => deps
                    .iter()
                    .enumerate()
                    .any(|(i, dep)| !old.get(i).is_some_and(|o| dep.same(o))),
                Some(Slot::State(_)) => {
                    log::warn!(
                        "use_effect: slot {cursor} holds state, not a dependency \
                         snapshot. Hook call order probably differs from the \
                         previous pass."
                    );
                    true
                }
                None => true,
            }
        };

        // Store borrow is released here: the callback may call setters.
        if changed {
            callback();
        }

        let mut slots = self.inner.slots.borrow_mut();
        if cursor >= slots.len() {
            slots.push(Slot::Deps(deps));
        } else {
            slots[cursor] = Slot::Deps(deps);
        }
        self.inner.cursor.set(cursor + 1);
    }
}
