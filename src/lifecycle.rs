use crate::params::NavigationParams;
use anyhow::Result;
use async_trait::async_trait;
use std::any::Any;

/// Base trait for anything the navigator can route between.
///
/// View-models are shared as `Arc<dyn ViewModel>` between the back-stack,
/// the bound view, and UI bindings watching the current entry; mutability is
/// the implementor's concern (interior, as usual for bound UI state).
pub trait ViewModel: Any + Send + Sync {
    /// Downcasting access for hosts and tests.
    fn as_any(&self) -> &dyn Any;

    /// Capability check for lifecycle participation.
    ///
    /// The default is `None`: a view-model that does not opt in is navigated
    /// through unconditionally, with no hooks consulted.
    fn navigation_aware(&self) -> Option<&dyn NavigationAware> {
        None
    }
}

/// Optional capability for view-models that want a say in navigation
/// transitions.
///
/// All three hooks are independently optional; the defaults permit and do
/// nothing, so an implementor overrides only what it needs. Hooks are
/// awaited to completion, strictly one at a time, before the transition
/// proceeds. A hook error aborts the transition and surfaces as a
/// navigation failure.
#[async_trait]
pub trait NavigationAware: Send + Sync {
    /// Runs after this view-model becomes the navigation target, before its
    /// view is installed or shown.
    async fn on_navigated_to(&self, _params: &NavigationParams) -> Result<()> {
        Ok(())
    }

    /// Runs when navigation is leaving this view-model, after it has
    /// permitted the departure.
    async fn on_navigated_from(&self, _params: &NavigationParams) -> Result<()> {
        Ok(())
    }

    /// Asked before leaving; returning `false` vetoes the pending transition
    /// and the caller sees the cancelled/declined error.
    async fn can_navigate_away(&self) -> bool {
        true
    }
}
