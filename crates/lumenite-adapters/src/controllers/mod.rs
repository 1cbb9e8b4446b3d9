//! Controller registry and built-in controllers.

mod registry;
mod welcome;

pub use registry::{Action, ActionController, Actions, ControllerFactory, StaticControllerRegistry};
pub use welcome::WelcomeController;
