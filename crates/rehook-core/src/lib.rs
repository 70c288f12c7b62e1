//! # Slots, hooks, and the render driver
//!
//! `rehook-core` is a miniature hooks runtime. A component is a plain
//! closure with no fields of its own; the runtime lends it memory between
//! invocations through an ordered slot store. Three pieces:
//!
//! - [`Runtime::use_state`] — a state cell, addressed by call order.
//! - [`Runtime::use_effect`] — a callback gated on a dependency snapshot.
//! - [`Runtime::render`] — the driver that rewinds the cursor and replays
//!   the closure against the same store.
//!
//! ## A counter
//!
//! ```rust
//! use rehook_core::{Runtime, deps};
//!
//! let rt = Runtime::new();
//!
//! let component = |rt: &Runtime| {
//!     let (count, set_count) = rt.use_state(|| 0);
//!     rt.use_effect(|| println!("mounted"), deps![]);
//!     set_count.set(count + 1);
//!     count
//! };
//!
//! assert_eq!(rt.render(|| component(&rt)), Ok(0));
//! assert_eq!(rt.render(|| component(&rt)), Ok(1));
//! ```
//!
//! Nothing re-renders on its own: a setter only writes the slot, and the
//! caller decides when the next pass happens.
//!
//! ## Dependencies are compared shallowly
//!
//! A [`deps::Dep`] compares like `Object.is`: numbers, booleans, and
//! strings by value, shared objects by pointer identity. Structural
//! equality is never consulted.
//!
//! ```rust
//! use std::rc::Rc;
//! use rehook_core::{Runtime, deps};
//!
//! let rt = Runtime::new();
//! let user = Rc::new(String::from("ada"));
//!
//! // Same Rc on both passes: the effect runs once.
//! for _ in 0..2 {
//!     let user = user.clone();
//!     rt.render(|| {
//!         rt.use_effect(|| println!("user changed"), deps![user.clone()]);
//!     })
//!     .unwrap();
//! }
//! ```
//!
//! ## Rules of use
//!
//! Hooks are order-addressed: every pass must make the same hook calls in
//! the same order. The runtime cannot detect a reorder — it only sees a
//! slot whose shape stopped matching, which it reports via `log::warn!`
//! and repairs by replacing the slot. The one hard error is re-entering
//! [`Runtime::render`] from inside a pass ([`error::RenderError`]).
//!
//! Callers that want the classic module-level singleton can use the free
//! functions [`use_state`], [`use_effect`], and [`render`], which share a
//! per-thread default [`Runtime`].

pub mod deps;
pub mod effects;
pub mod error;
pub mod prelude;
pub mod runtime;
pub mod state;

pub use deps::*;
pub use error::*;
pub use prelude::*;
pub use runtime::*;
pub use state::*;
