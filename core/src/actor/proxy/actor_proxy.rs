use std::fmt::{Display, Formatter};
use std::hash::{Hash, Hasher};

use serde::{Serialize, Serializer};
use static_assertions::assert_impl_all;

use crate::actor::actor_error::InvokeError;
use crate::actor::actor_key::ActorKey;
use crate::actor::director::Director;
use crate::actor::message::MailboxMessage;
use crate::actor::proxy::method_handler::MethodHandler;
use crate::actor::proxy::weak_ref::WeakRef;
use crate::actor::role::MethodSignatures;

/// An actor proxy or handle: the only artifact through which user code may
/// address an actor.
///
/// Method dispatch goes through [`ActorProxy::method`], which consults the
/// role's signature snapshot; there is one fixed table per role rather than
/// one synthesized callable per proxy instance.
#[derive(Debug, Clone)]
pub struct ActorProxy {
  actor_key: ActorKey,
  method_signatures: MethodSignatures,
  class_name: String,
  class_id: String,
  director: Director,
}

assert_impl_all!(ActorProxy: Send, Sync);

impl ActorProxy {
  pub(crate) fn new(
    actor_key: ActorKey,
    method_signatures: MethodSignatures,
    class_name: String,
    class_id: String,
    director: Director,
  ) -> Self {
    Self {
      actor_key,
      method_signatures,
      class_name,
      class_id,
      director,
    }
  }

  pub fn actor_key(&self) -> &ActorKey {
    &self.actor_key
  }

  pub fn class_name(&self) -> &str {
    &self.class_name
  }

  pub fn class_id(&self) -> &str {
    &self.class_id
  }

  /// The callable surface of this actor, sorted by name.
  pub fn method_names(&self) -> Vec<String> {
    let mut names: Vec<String> = self.method_signatures.keys().cloned().collect();
    names.sort();
    names
  }

  /// Looks up the dispatch handle for one declared method. Any other name is
  /// plain data access on this handle, never a remote call.
  pub fn method(&self, name: &str) -> Result<MethodHandler, InvokeError> {
    if !self.method_signatures.contains_key(name) {
      return Err(InvokeError::UnknownMethod {
        class_name: self.class_name.clone(),
        method: name.to_string(),
      });
    }
    Ok(MethodHandler::new(self.clone(), name.to_string()))
  }

  /// Sends the stop sentinel to this actor's own mailbox. Does not wait for
  /// an acknowledgement; pending actions still run first.
  pub async fn stop(&self) {
    self.director.route(&self.actor_key, MailboxMessage::Stop).await;
  }

  pub fn to_weak(&self) -> WeakRef {
    WeakRef::new(
      self.actor_key.clone(),
      self.method_signatures.clone(),
      self.class_name.clone(),
      self.class_id.clone(),
    )
  }

  pub fn from_weak(weak: &WeakRef, director: Director) -> ActorProxy {
    ActorProxy::new(
      weak.actor_key().clone(),
      weak.method_signatures().clone(),
      weak.class_name().to_string(),
      weak.class_id().to_string(),
      director,
    )
  }

  pub(crate) fn director(&self) -> &Director {
    &self.director
  }
}

impl PartialEq for ActorProxy {
  fn eq(&self, other: &Self) -> bool {
    self.actor_key == other.actor_key
  }
}

impl Eq for ActorProxy {}

impl Hash for ActorProxy {
  fn hash<H: Hasher>(&self, state: &mut H) {
    self.actor_key.hash(state);
  }
}

impl Display for ActorProxy {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    write!(f, "Actor({}, {})", self.class_name, self.actor_key)
  }
}

// The persisted form of a proxy is its actor key, nothing else.
impl Serialize for ActorProxy {
  fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
    self.actor_key.serialize(serializer)
  }
}
