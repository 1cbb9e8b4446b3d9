//! Static controller registry.
//!
//! Controllers are registered under their qualified path
//! (`app::controller::<Name>Controller`) with a zero-argument factory.
//! Each controller type lists its actions in a static table.

use std::{
    collections::HashMap,
    fmt,
    sync::{Arc, RwLock},
};

use tracing::{debug, warn};

use lumenite_core::{
    application::{
        ApplicationError,
        ports::{Controller, ControllerRegistry, ResponseSink},
    },
    domain::{DomainError, qualify_controller},
    error::LumeniteResult,
};

/// An action: takes the controller and the response, writes output.
pub type Action<C> = fn(&mut C, &dyn ResponseSink) -> LumeniteResult<()>;

/// Zero-argument constructor for a controller instance.
pub type ControllerFactory = Arc<dyn Fn() -> Box<dyn Controller> + Send + Sync>;

/// Static action table for a controller type.
///
/// ```
/// use lumenite_adapters::controllers::{Action, Actions};
/// use lumenite_core::{application::ports::ResponseSink, error::LumeniteResult};
///
/// #[derive(Default)]
/// struct UsersController;
///
/// impl UsersController {
///     fn index(&mut self, response: &dyn ResponseSink) -> LumeniteResult<()> {
///         response.write_body(b"<ul></ul>")
///     }
/// }
///
/// impl Actions for UsersController {
///     const NAME: &'static str = "UsersController";
///     const ACTIONS: &'static [(&'static str, Action<Self>)] = &[("index", Self::index)];
/// }
/// ```
pub trait Actions: Default + Send + 'static {
    /// Controller type name, e.g. `WelcomeController`.
    const NAME: &'static str;

    const ACTIONS: &'static [(&'static str, Action<Self>)];

    fn action(name: &str) -> Option<Action<Self>> {
        Self::ACTIONS
            .iter()
            .find(|(action, _)| *action == name)
            .map(|(_, f)| *f)
    }
}

/// Adapts an [`Actions`] type to the [`Controller`] port.
pub struct ActionController<C: Actions> {
    inner: C,
}

impl<C: Actions> ActionController<C> {
    pub fn new(inner: C) -> Self {
        Self { inner }
    }

    pub fn into_inner(self) -> C {
        self.inner
    }
}

impl<C: Actions> Default for ActionController<C> {
    fn default() -> Self {
        Self::new(C::default())
    }
}

impl<C: Actions> Controller for ActionController<C> {
    fn has_action(&self, action: &str) -> bool {
        C::action(action).is_some()
    }

    fn call(&mut self, action: &str, response: &dyn ResponseSink) -> LumeniteResult<()> {
        let f = C::action(action).ok_or_else(|| DomainError::ActionNotFound {
            controller: C::NAME.to_string(),
            action: action.to_string(),
        })?;
        f(&mut self.inner, response)
    }
}

/// Registry backed by a map of qualified path to factory.
///
/// Cheap to clone; clones share the map.
#[derive(Clone, Default)]
pub struct StaticControllerRegistry {
    factories: Arc<RwLock<HashMap<String, ControllerFactory>>>,
}

impl StaticControllerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a factory under `name`. Bare type names are qualified.
    pub fn register(&self, name: &str, factory: ControllerFactory) -> LumeniteResult<()> {
        let path = qualify_controller(name);
        let mut factories = self
            .factories
            .write()
            .map_err(|_| ApplicationError::RegistryLock)?;
        if factories.insert(path.clone(), factory).is_some() {
            debug!(controller = %path, "controller registration replaced");
        } else {
            debug!(controller = %path, "controller registered");
        }
        Ok(())
    }

    /// Register an [`Actions`] type under its own name.
    pub fn register_actions<C: Actions>(&self) -> LumeniteResult<()> {
        self.register(
            C::NAME,
            Arc::new(|| Box::new(ActionController::<C>::default()) as Box<dyn Controller>),
        )
    }

    /// Builder form of [`Self::register_actions`].
    pub fn with<C: Actions>(self) -> LumeniteResult<Self> {
        self.register_actions::<C>()?;
        Ok(self)
    }

    /// Registered qualified paths, sorted.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .factories
            .read()
            .map(|f| f.keys().cloned().collect())
            .unwrap_or_default();
        names.sort();
        names
    }

    pub fn len(&self) -> usize {
        self.factories.read().map(|f| f.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl ControllerRegistry for StaticControllerRegistry {
    fn contains(&self, path: &str) -> bool {
        match self.factories.read() {
            Ok(factories) => factories.contains_key(path),
            Err(_) => {
                warn!("controller registry lock poisoned");
                false
            }
        }
    }

    fn instantiate(&self, path: &str) -> Option<Box<dyn Controller>> {
        let factory = match self.factories.read() {
            Ok(factories) => factories.get(path).cloned()?,
            Err(_) => {
                warn!("controller registry lock poisoned");
                return None;
            }
        };
        Some(factory())
    }
}

impl fmt::Debug for StaticControllerRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StaticControllerRegistry")
            .field("controllers", &self.names())
            .finish()
    }
}
