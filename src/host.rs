use crate::lifecycle::ViewModel;
use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;

/// A toolkit-side renderable bound to exactly one view-model at a time.
pub trait View: Send {
    /// Attach the view-model this view renders. Called once per instance,
    /// immediately before the view is installed or shown.
    fn bind(&mut self, view_model: Arc<dyn ViewModel>);
}

/// Host container owning a single displayable child.
///
/// The navigator replaces the child on every successful embedded
/// navigation; the previous child is the host's to drop or recycle.
pub trait ViewHost: Send {
    fn set_content(&mut self, view: Box<dyn View>);
}

/// Top-level application context for window and dialog presentation.
///
/// Only required for [`Navigator::show_window`] and
/// [`Navigator::show_dialog`]; embedded navigation works without one.
///
/// [`Navigator::show_window`]: crate::Navigator::show_window
/// [`Navigator::show_dialog`]: crate::Navigator::show_dialog
#[async_trait]
pub trait WindowHost: Send + Sync {
    /// Show a bound view as a top-level window without blocking.
    fn show_window(&self, view: Box<dyn View>) -> Result<()>;

    /// Show a bound view as a dialog anchored to the main window, resolving
    /// once it is dismissed.
    async fn show_dialog(&self, view: Box<dyn View>) -> Result<()>;
}
