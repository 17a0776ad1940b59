use thiserror::Error;

/// Errors that can occur while rendering a view tree headlessly.
#[derive(Debug, Clone, Error)]
pub enum RenderError {
    /// The view hierarchy did not terminate in native views.
    #[error("view hierarchy exceeded the maximum depth of {0}")]
    DepthExceeded(usize),
}
