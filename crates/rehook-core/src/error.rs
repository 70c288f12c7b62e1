use thiserror::Error;

/// Errors surfaced by the render driver.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RenderError {
    /// `render` was invoked from inside an in-progress pass on the same
    /// runtime. The cursor is shared by every pass on a runtime, so a
    /// nested pass would silently misalign every slot behind it; the
    /// driver rejects it instead.
    #[error("render re-entered while a pass is in progress")]
    Reentrant,
}
