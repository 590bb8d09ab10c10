use crate::error::{NavigationError, NavigationResult};
use crate::host::View;
use crate::lifecycle::ViewModel;
use std::any::{TypeId, type_name};
use std::collections::HashMap;

/// A single view-model → view mapping, with type names kept for diagnostics.
#[derive(Debug, Clone)]
pub(crate) struct ViewRegistration {
    pub(crate) view: TypeId,
    pub(crate) view_model_name: &'static str,
    pub(crate) view_name: &'static str,
}

impl ViewRegistration {
    pub(crate) fn of<VM, V>() -> Self
    where
        VM: ViewModel,
        V: View + 'static,
    {
        Self {
            view: TypeId::of::<V>(),
            view_model_name: type_name::<VM>(),
            view_name: type_name::<V>(),
        }
    }
}

/// Type-to-type registry pairing each view-model with the view that renders
/// it.
///
/// Populated once at startup and read-only afterward; registering the same
/// view-model twice fails and leaves the registry unchanged.
#[derive(Default)]
pub(crate) struct ViewRegistry {
    mappings: HashMap<TypeId, ViewRegistration>,
}

impl ViewRegistry {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn register(
        &mut self,
        view_model: TypeId,
        registration: ViewRegistration,
    ) -> NavigationResult<()> {
        if self.mappings.contains_key(&view_model) {
            return Err(NavigationError::duplicate_registration(
                registration.view_model_name,
            ));
        }
        self.mappings.insert(view_model, registration);
        Ok(())
    }

    pub(crate) fn lookup(&self, view_model: TypeId) -> Option<&ViewRegistration> {
        self.mappings.get(&view_model)
    }

    pub(crate) fn contains(&self, view_model: TypeId) -> bool {
        self.mappings.contains_key(&view_model)
    }
}
