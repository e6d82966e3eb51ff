use serde::{Deserialize, Serialize};

/// Identifies a role class uniquely enough to key the metadata cache.
/// Created once per role at registration time.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RoleDescriptor {
  class_name: String,
  class_module: String,
}

impl RoleDescriptor {
  pub fn new(class_name: impl Into<String>, class_module: impl Into<String>) -> Self {
    Self {
      class_name: class_name.into(),
      class_module: class_module.into(),
    }
  }

  /// Derives the descriptor from the concrete role type.
  pub fn of<T>() -> Self {
    let full = std::any::type_name::<T>();
    match full.rsplit_once("::") {
      Some((module, name)) => Self::new(name, module),
      None => Self::new(full, ""),
    }
  }

  pub fn class_name(&self) -> &str {
    &self.class_name
  }

  pub fn class_module(&self) -> &str {
    &self.class_module
  }
}
