use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The sole routing identifier of an actor: `class_id + ":" + uuid4`.
///
/// Immutable for the actor's lifetime; every proxy, weak ref and action
/// addressing the same actor carries an equal key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ActorKey(String);

impl ActorKey {
  pub(crate) fn generate(class_id: &str) -> Self {
    ActorKey(format!("{}:{}", class_id, Uuid::new_v4()))
  }

  pub fn as_str(&self) -> &str {
    &self.0
  }

  /// The class-id prefix, i.e. everything before the uuid segment.
  pub fn class_id(&self) -> &str {
    match self.0.rsplit_once(':') {
      Some((class_id, _)) => class_id,
      None => &self.0,
    }
  }
}

impl Display for ActorKey {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    write!(f, "{}", self.0)
  }
}

impl From<String> for ActorKey {
  fn from(value: String) -> Self {
    ActorKey(value)
  }
}

impl From<&str> for ActorKey {
  fn from(value: &str) -> Self {
    ActorKey(value.to_string())
  }
}
