use std::any::{TypeId, type_name};
use std::sync::Arc;

use log::{debug, info};
use tokio::sync::watch;
use tokio_util::sync::CancellationToken;

use crate::config::{BackParams, NavigatorConfig};
use crate::error::{NavigationError, NavigationResult};
use crate::host::{View, ViewHost, WindowHost};
use crate::lifecycle::ViewModel;
use crate::params::NavigationParams;
use crate::registry::{ViewRegistration, ViewRegistry};
use crate::resolver::Resolver;

/// One visited (view-model, parameters) pair on the back-stack.
///
/// Owned exclusively by the stack; dropped when popped or when the
/// navigator is torn down.
struct NavigationEntry {
    view_model: Arc<dyn ViewModel>,
    params: NavigationParams,
    view_model_type: TypeId,
    view_model_name: &'static str,
}

/// Navigation coordinator: owns the view registry, the back-stack, and the
/// currently displayed view/view-model pair.
///
/// Hooks are awaited strictly in sequence; no operation is re-entrant.
/// Every mutating operation takes `&mut self`, so overlapping calls on one
/// navigator cannot compile. Embedders sharing a navigator across tasks
/// supply their own lock.
pub struct Navigator {
    config: NavigatorConfig,
    registry: ViewRegistry,
    stack: Vec<NavigationEntry>,
    container: Option<Box<dyn ViewHost>>,
    resolver: Option<Arc<dyn Resolver>>,
    window_host: Option<Arc<dyn WindowHost>>,

    /// Observable handle to the top-of-stack view-model. UI bindings
    /// subscribe and react; only successful transitions publish.
    current: watch::Sender<Option<Arc<dyn ViewModel>>>,
}

impl Navigator {
    pub fn new() -> Self {
        Self::with_config(NavigatorConfig::default())
    }

    pub fn with_config(config: NavigatorConfig) -> Self {
        let (current, _) = watch::channel(None);
        Self {
            config,
            registry: ViewRegistry::new(),
            stack: Vec::new(),
            container: None,
            resolver: None,
            window_host: None,
            current,
        }
    }

    /// Bind the navigator to its display container and object resolver.
    ///
    /// Must be called exactly once before any navigation operation; every
    /// operation fails with an "uninitialized" navigation failure until
    /// then, and a second call fails rather than silently re-binding.
    pub fn initialize(
        &mut self,
        container: Box<dyn ViewHost>,
        resolver: Arc<dyn Resolver>,
    ) -> NavigationResult<()> {
        if self.container.is_some() {
            return Err(NavigationError::already_initialized());
        }
        self.container = Some(container);
        self.resolver = Some(resolver);
        debug!("Navigator initialized");
        Ok(())
    }

    /// Attach the top-level window host used by [`show_window`] and
    /// [`show_dialog`]. Optional; embedded navigation works without one.
    ///
    /// [`show_window`]: Navigator::show_window
    /// [`show_dialog`]: Navigator::show_dialog
    pub fn attach_window_host(&mut self, host: Arc<dyn WindowHost>) {
        self.window_host = Some(host);
    }

    /// Map view-model type `VM` to view type `V`.
    ///
    /// Registering the same view-model twice fails and leaves the registry
    /// unchanged.
    pub fn register_view<VM, V>(&mut self) -> NavigationResult<()>
    where
        VM: ViewModel,
        V: View + 'static,
    {
        debug!(
            "Registering view {} for view-model {}",
            type_name::<V>(),
            type_name::<VM>()
        );
        self.registry
            .register(TypeId::of::<VM>(), ViewRegistration::of::<VM, V>())
    }

    /// Forward navigation to `VM`.
    ///
    /// Resolves a fresh view-model, runs the leave-side hooks on the
    /// current entry (may-leave query first; a veto aborts with
    /// [`NavigationError::Cancelled`]), awaits the target's navigated-to
    /// hook, installs the bound view, and only then pushes the new entry
    /// and publishes the current-view-model change. A failure at any step
    /// leaves the stack and displayed content as they were.
    pub async fn navigate_to<VM: ViewModel>(
        &mut self,
        params: NavigationParams,
        token: &CancellationToken,
    ) -> NavigationResult<()> {
        let Some(resolver) = self.resolver.clone() else {
            return Err(NavigationError::not_initialized());
        };
        let vm_type = TypeId::of::<VM>();
        let vm_name = type_name::<VM>();
        let Some(registration) = self.registry.lookup(vm_type).cloned() else {
            return Err(NavigationError::not_registered(vm_name));
        };
        if token.is_cancelled() {
            debug!("Navigation to {} cancelled before it started", vm_name);
            return Err(NavigationError::Cancelled);
        }

        debug!("Navigating to {}", vm_name);

        let view_model = resolver.resolve_view_model(vm_type).map_err(|err| {
            NavigationError::with_source(format!("failed to resolve view-model {vm_name}"), err)
        })?;

        self.leave_current(&params).await?;

        if let Some(aware) = view_model.navigation_aware() {
            aware.on_navigated_to(&params).await.map_err(|err| {
                NavigationError::with_source(
                    format!("navigated-to hook of {vm_name} failed"),
                    err,
                )
            })?;
        }

        let view = self.resolve_bound_view(&resolver, &registration, &view_model)?;
        let Some(container) = self.container.as_mut() else {
            return Err(NavigationError::not_initialized());
        };
        container.set_content(view);

        self.stack.push(NavigationEntry {
            view_model: Arc::clone(&view_model),
            params,
            view_model_type: vm_type,
            view_model_name: vm_name,
        });
        self.current.send_replace(Some(view_model));
        info!("Navigated to {} (stack depth {})", vm_name, self.stack.len());
        Ok(())
    }

    /// Reverse navigation to the entry below the top of the stack.
    ///
    /// Fails with "already at root" on a single-entry stack. Which bag the
    /// revealed view-model's navigated-to hook receives is governed by
    /// [`BackParams`]. The departed entry is popped only after the revealed
    /// view is installed, so a failing step leaves depth and content
    /// unchanged.
    pub async fn go_back(
        &mut self,
        params: NavigationParams,
        token: &CancellationToken,
    ) -> NavigationResult<()> {
        let Some(resolver) = self.resolver.clone() else {
            return Err(NavigationError::not_initialized());
        };
        if self.stack.len() <= 1 {
            return Err(NavigationError::at_root());
        }
        if token.is_cancelled() {
            debug!("Back navigation cancelled before it started");
            return Err(NavigationError::Cancelled);
        }

        self.leave_current(&params).await?;

        let revealed = &self.stack[self.stack.len() - 2];
        let revealed_name = revealed.view_model_name;
        let Some(registration) = self.registry.lookup(revealed.view_model_type).cloned() else {
            return Err(NavigationError::not_registered(revealed_name));
        };
        let view_model = Arc::clone(&revealed.view_model);
        let hook_params = match self.config.back_params {
            BackParams::CallerSupplied => params,
            BackParams::Original => revealed.params.clone(),
        };

        debug!("Navigating back to {}", revealed_name);

        if let Some(aware) = view_model.navigation_aware() {
            aware.on_navigated_to(&hook_params).await.map_err(|err| {
                NavigationError::with_source(
                    format!("navigated-to hook of {revealed_name} failed"),
                    err,
                )
            })?;
        }

        let view = self.resolve_bound_view(&resolver, &registration, &view_model)?;
        let Some(container) = self.container.as_mut() else {
            return Err(NavigationError::not_initialized());
        };
        container.set_content(view);

        self.stack.pop();
        self.current.send_replace(Some(view_model));
        info!(
            "Navigated back to {} (stack depth {})",
            revealed_name,
            self.stack.len()
        );
        Ok(())
    }

    /// Resolve `VM` and its registered view, run its navigated-to hook, and
    /// show the bound view as a non-blocking top-level window.
    ///
    /// The back-stack and the current view-model are untouched.
    pub async fn show_window<VM: ViewModel>(
        &self,
        params: NavigationParams,
    ) -> NavigationResult<()> {
        let Some(host) = self.window_host.clone() else {
            return Err(NavigationError::no_window_host());
        };
        let view = self.prepare_top_level::<VM>(&params).await?;
        info!("Showing window for {}", type_name::<VM>());
        host.show_window(view).map_err(|err| {
            NavigationError::with_source(
                format!("window host failed to show {}", type_name::<VM>()),
                err,
            )
        })
    }

    /// Like [`show_window`], but shown as a dialog anchored to the main
    /// window and awaited until dismissed.
    ///
    /// [`show_window`]: Navigator::show_window
    pub async fn show_dialog<VM: ViewModel>(
        &self,
        params: NavigationParams,
    ) -> NavigationResult<()> {
        let Some(host) = self.window_host.clone() else {
            return Err(NavigationError::no_window_host());
        };
        let view = self.prepare_top_level::<VM>(&params).await?;
        info!("Showing dialog for {}", type_name::<VM>());
        host.show_dialog(view).await.map_err(|err| {
            NavigationError::with_source(
                format!("window host failed to show dialog {}", type_name::<VM>()),
                err,
            )
        })
    }

    /// Snapshot of the currently displayed view-model, if any.
    pub fn current_view_model(&self) -> Option<Arc<dyn ViewModel>> {
        self.current.borrow().clone()
    }

    /// Watch receiver for UI bindings; yields on every successful
    /// transition.
    pub fn subscribe(&self) -> watch::Receiver<Option<Arc<dyn ViewModel>>> {
        self.current.subscribe()
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    pub fn can_go_back(&self) -> bool {
        self.stack.len() > 1
    }

    pub fn is_registered<VM: ViewModel>(&self) -> bool {
        self.registry.contains(TypeId::of::<VM>())
    }

    pub fn is_initialized(&self) -> bool {
        self.container.is_some()
    }

    /// May-leave query and navigated-from hook for the departing entry.
    ///
    /// No-op when the stack is empty or the current view-model is not
    /// navigation-aware. A veto surfaces as `Cancelled` with all state
    /// untouched.
    async fn leave_current(&self, params: &NavigationParams) -> NavigationResult<()> {
        let Some(entry) = self.stack.last() else {
            return Ok(());
        };
        let Some(aware) = entry.view_model.navigation_aware() else {
            return Ok(());
        };
        if !aware.can_navigate_away().await {
            info!("{} declined to navigate away", entry.view_model_name);
            return Err(NavigationError::Cancelled);
        }
        aware.on_navigated_from(params).await.map_err(|err| {
            NavigationError::with_source(
                format!("navigated-from hook of {} failed", entry.view_model_name),
                err,
            )
        })
    }

    fn resolve_bound_view(
        &self,
        resolver: &Arc<dyn Resolver>,
        registration: &ViewRegistration,
        view_model: &Arc<dyn ViewModel>,
    ) -> NavigationResult<Box<dyn View>> {
        let mut view = resolver.resolve_view(registration.view).map_err(|err| {
            NavigationError::with_source(
                format!(
                    "failed to resolve view {} for {}",
                    registration.view_name, registration.view_model_name
                ),
                err,
            )
        })?;
        view.bind(Arc::clone(view_model));
        Ok(view)
    }

    async fn prepare_top_level<VM: ViewModel>(
        &self,
        params: &NavigationParams,
    ) -> NavigationResult<Box<dyn View>> {
        let Some(resolver) = self.resolver.clone() else {
            return Err(NavigationError::not_initialized());
        };
        let vm_type = TypeId::of::<VM>();
        let vm_name = type_name::<VM>();
        let Some(registration) = self.registry.lookup(vm_type).cloned() else {
            return Err(NavigationError::not_registered(vm_name));
        };

        let view_model = resolver.resolve_view_model(vm_type).map_err(|err| {
            NavigationError::with_source(format!("failed to resolve view-model {vm_name}"), err)
        })?;

        if let Some(aware) = view_model.navigation_aware() {
            aware.on_navigated_to(params).await.map_err(|err| {
                NavigationError::with_source(
                    format!("navigated-to hook of {vm_name} failed"),
                    err,
                )
            })?;
        }

        self.resolve_bound_view(&resolver, &registration, &view_model)
    }
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new()
    }
}
