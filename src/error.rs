use thiserror::Error;

pub type NavigationResult<T> = Result<T, NavigationError>;

/// Errors surfaced by the navigation coordinator.
///
/// Every internal failure funnels into one of exactly two kinds so callers
/// can branch on "the navigation was vetoed" vs "something broke". Downstream
/// causes (resolver errors, hook errors) are preserved through
/// [`std::error::Error::source`].
#[derive(Error, Debug)]
pub enum NavigationError {
    /// Configuration error or wrapped downstream failure
    #[error("navigation failed: {message}")]
    Failed {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// A cancellation token fired, or the departing view-model declined the
    /// transition
    #[error("navigation was cancelled")]
    Cancelled,
}

impl NavigationError {
    /// A navigation failure with no underlying cause.
    pub fn failed(message: impl Into<String>) -> Self {
        NavigationError::Failed {
            message: message.into(),
            source: None,
        }
    }

    /// A navigation failure wrapping a downstream cause.
    pub fn with_source(message: impl Into<String>, source: anyhow::Error) -> Self {
        NavigationError::Failed {
            message: message.into(),
            source: Some(source.into()),
        }
    }

    /// True for the cancelled/declined kind.
    pub fn is_cancelled(&self) -> bool {
        matches!(self, NavigationError::Cancelled)
    }

    pub(crate) fn not_initialized() -> Self {
        Self::failed("navigator has not been initialized; call initialize with a view host and resolver first")
    }

    pub(crate) fn already_initialized() -> Self {
        Self::failed("navigator is already initialized")
    }

    pub(crate) fn not_registered(view_model: &str) -> Self {
        Self::failed(format!("no view registered for view-model type {view_model}"))
    }

    pub(crate) fn duplicate_registration(view_model: &str) -> Self {
        Self::failed(format!("a view is already registered for view-model type {view_model}"))
    }

    pub(crate) fn at_root() -> Self {
        Self::failed("cannot go back; this is the first entry in the navigation stack")
    }

    pub(crate) fn no_window_host() -> Self {
        Self::failed("no window host attached; call attach_window_host before showing windows or dialogs")
    }
}
