use crate::actor::actor_error::{InvokeError, SpawnError};
use crate::actor::actor_key::ActorKey;
use crate::actor::director::Director;
use crate::actor::message::Invocation;
use crate::actor::proxy::ActorProxy;
use crate::actor::role::role_metadata::RoleMetadata;

/// An actor role class: the factory for actors of one registered role.
///
/// Obtained only through `RoleBuilder::register`; actors are obtained only
/// through [`RoleClass::spawn`] (fresh key) or [`RoleClass::attach`]
/// (existing key), never by constructing the user type behind the runtime's
/// back.
#[derive(Debug, Clone)]
pub struct RoleClass {
  metadata: RoleMetadata,
}

impl RoleClass {
  pub(crate) fn from_metadata(metadata: RoleMetadata) -> Self {
    Self { metadata }
  }

  pub fn metadata(&self) -> &RoleMetadata {
    &self.metadata
  }

  pub fn class_name(&self) -> &str {
    self.metadata.class_name()
  }

  pub fn class_id(&self) -> &str {
    self.metadata.class_id()
  }

  /// Materializes a new actor of this role and returns its proxy.
  ///
  /// Generates a fresh actor key, asks the director for a worker, and blocks
  /// until that worker is at its mailbox; a message sent through the
  /// returned proxy can therefore never be lost to a late consumer.
  pub async fn spawn(&self, director: &Director, invocation: impl Into<Invocation>) -> Result<ActorProxy, SpawnError> {
    if !director.is_started() {
      return Err(SpawnError::DirectorNotStarted);
    }
    let actor_key = ActorKey::generate(self.metadata.class_id());
    let proxy = ActorProxy::new(
      actor_key,
      self.metadata.method_signatures(),
      self.metadata.class_name().to_string(),
      self.metadata.class_id().to_string(),
      director.clone(),
    );
    director.spawn_actor(&self.metadata, proxy.to_weak(), invocation.into()).await?;
    Ok(proxy)
  }

  /// Returns a proxy bound to an existing key without creating anything.
  ///
  /// No liveness check is performed: it is the caller's responsibility that
  /// the key refers to a live actor. Sending to a dead key is a silent
  /// no-op, or queues forever if the registry still holds the mailbox.
  pub fn attach(&self, director: &Director, actor_key: ActorKey) -> Result<ActorProxy, InvokeError> {
    if actor_key.class_id() != self.metadata.class_id() {
      return Err(InvokeError::ForeignKey {
        actor_key,
        class_name: self.metadata.class_name().to_string(),
        class_id: self.metadata.class_id().to_string(),
      });
    }
    Ok(ActorProxy::new(
      actor_key,
      self.metadata.method_signatures(),
      self.metadata.class_name().to_string(),
      self.metadata.class_id().to_string(),
      director.clone(),
    ))
  }
}
