use crate::host::View;
use crate::lifecycle::ViewModel;
use anyhow::{Result, anyhow};
use std::any::TypeId;
use std::collections::HashMap;
use std::sync::Arc;

/// Capability-lookup seam to the embedding application's object graph.
///
/// Implementations are typically thin adapters over a DI container or a
/// hand-built factory map. Failures are opaque to the navigator, which
/// wraps them as navigation failures with the cause preserved.
pub trait Resolver: Send + Sync {
    /// Produce the view-model instance for `type_id`.
    fn resolve_view_model(&self, type_id: TypeId) -> Result<Arc<dyn ViewModel>>;

    /// Produce the view instance for `type_id`.
    fn resolve_view(&self, type_id: TypeId) -> Result<Box<dyn View>>;
}

/// Factory-map resolver for embedders without a DI container.
///
/// Closures keyed by type identity, registered once at startup. Every
/// resolution constructs a fresh instance (transient semantics); embedders
/// wanting singletons register a closure that clones a shared `Arc`.
#[derive(Default)]
pub struct FactoryResolver {
    view_models: HashMap<TypeId, Box<dyn Fn() -> Arc<dyn ViewModel> + Send + Sync>>,
    views: HashMap<TypeId, Box<dyn Fn() -> Box<dyn View> + Send + Sync>>,
}

impl FactoryResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register_view_model<VM, F>(&mut self, factory: F)
    where
        VM: ViewModel,
        F: Fn() -> VM + Send + Sync + 'static,
    {
        self.view_models
            .insert(TypeId::of::<VM>(), Box::new(move || Arc::new(factory())));
    }

    pub fn register_view<V, F>(&mut self, factory: F)
    where
        V: View + 'static,
        F: Fn() -> V + Send + Sync + 'static,
    {
        self.views
            .insert(TypeId::of::<V>(), Box::new(move || Box::new(factory())));
    }
}

impl Resolver for FactoryResolver {
    fn resolve_view_model(&self, type_id: TypeId) -> Result<Arc<dyn ViewModel>> {
        self.view_models
            .get(&type_id)
            .map(|factory| factory())
            .ok_or_else(|| anyhow!("no view-model factory registered for {type_id:?}"))
    }

    fn resolve_view(&self, type_id: TypeId) -> Result<Box<dyn View>> {
        self.views
            .get(&type_id)
            .map(|factory| factory())
            .ok_or_else(|| anyhow!("no view factory registered for {type_id:?}"))
    }
}
