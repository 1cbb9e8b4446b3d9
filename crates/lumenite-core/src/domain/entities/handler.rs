use std::fmt;
use std::str::FromStr;

use crate::domain::error::DomainError;

/// Module root every controller type is resolved under.
pub const CONTROLLER_NAMESPACE: &str = "app::controller";

/// Suffix appended to the controller part of a descriptor.
pub const CONTROLLER_SUFFIX: &str = "Controller";

const SEPARATOR: char = '@';

/// A parsed `"Controller@action"` handler descriptor.
///
/// Invariant: both parts are non-empty and neither contains `@`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct HandlerDescriptor {
    controller: String,
    action: String,
}

impl HandlerDescriptor {
    /// Parse a descriptor, requiring exactly one `@`.
    pub fn parse(descriptor: &str) -> Result<Self, DomainError> {
        let malformed = |reason: &str| DomainError::MalformedHandler {
            descriptor: descriptor.to_string(),
            reason: reason.to_string(),
        };

        let separators = descriptor.matches(SEPARATOR).count();
        if separators == 0 {
            return Err(malformed("missing '@' separator"));
        }
        if separators > 1 {
            return Err(malformed("more than one '@' separator"));
        }

        let (controller, action) = descriptor
            .split_once(SEPARATOR)
            .ok_or_else(|| malformed("missing '@' separator"))?;

        let (controller, action) = (controller.trim(), action.trim());
        if controller.is_empty() {
            return Err(malformed("controller name is empty"));
        }
        if action.is_empty() {
            return Err(malformed("action name is empty"));
        }

        Ok(Self {
            controller: controller.to_string(),
            action: action.to_string(),
        })
    }

    /// Controller part as written, e.g. `Welcome`.
    pub fn controller(&self) -> &str {
        &self.controller
    }

    pub fn action(&self) -> &str {
        &self.action
    }

    /// `Welcome` -> `WelcomeController`.
    pub fn controller_type(&self) -> String {
        format!("{}{}", self.controller, CONTROLLER_SUFFIX)
    }

    /// `Welcome` -> `app::controller::WelcomeController`.
    pub fn controller_path(&self) -> String {
        qualify_controller(&self.controller_type())
    }
}

impl FromStr for HandlerDescriptor {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for HandlerDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.controller, SEPARATOR, self.action)
    }
}

/// Place a controller type name under [`CONTROLLER_NAMESPACE`].
///
/// Already-qualified names are returned unchanged.
pub fn qualify_controller(type_name: &str) -> String {
    let prefix = format!("{CONTROLLER_NAMESPACE}::");
    if type_name.starts_with(&prefix) {
        type_name.to_string()
    } else {
        format!("{prefix}{type_name}")
    }
}
