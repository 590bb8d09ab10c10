//! Toolkit-agnostic view-model navigation: a coordinator that swaps the
//! visible view/view-model pair inside a host container, keeps a back-stack
//! of visited pairs, and runs async lifecycle hooks on the way through.
//!
//! The embedding application supplies the toolkit side behind four trait
//! seams ([`ViewHost`], [`View`], [`WindowHost`], [`Resolver`]); everything
//! else is owned by the [`Navigator`].

pub mod config;
pub mod error;
pub mod host;
pub mod lifecycle;
pub mod navigator;
pub mod params;
mod registry;
pub mod resolver;


pub use config::{BackParams, NavigatorConfig};
pub use error::{NavigationError, NavigationResult};
pub use host::{View, ViewHost, WindowHost};
pub use lifecycle::{NavigationAware, ViewModel};
pub use navigator::Navigator;
pub use params::NavigationParams;
pub use resolver::{FactoryResolver, Resolver};

// Re-exported so embedders don't need a direct tokio-util dependency just to
// pass a token into `navigate_to`/`go_back`.
pub use tokio_util::sync::CancellationToken;
