pub use crate::deps::{Dep, DepList};
pub use crate::error::RenderError;
pub use crate::runtime::{Runtime, default_runtime, render, use_effect, use_state};
pub use crate::state::Setter;
