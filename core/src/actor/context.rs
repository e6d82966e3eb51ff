use crate::actor::actor_key::ActorKey;
use crate::actor::director::Director;
use crate::actor::proxy::{ActorProxy, WeakRef};

/// The bookkeeping every worker holds and every method handler receives:
/// the actor's own identity plus the runtime handle used for routing.
///
/// Exists before the user constructor runs, so initialization code can
/// already reference its own key and self-handle.
#[derive(Debug, Clone)]
pub struct ActorContext {
  self_ref: WeakRef,
  director: Director,
}

impl ActorContext {
  pub(crate) fn new(self_ref: WeakRef, director: Director) -> Self {
    Self { self_ref, director }
  }

  pub fn actor_key(&self) -> &ActorKey {
    self.self_ref.actor_key()
  }

  pub fn class_name(&self) -> &str {
    self.self_ref.class_name()
  }

  pub fn class_id(&self) -> &str {
    self.self_ref.class_id()
  }

  /// A live handle to this actor itself.
  pub fn self_proxy(&self) -> ActorProxy {
    self.self_ref.build_proxy(&self.director)
  }

  pub fn director(&self) -> &Director {
    &self.director
  }
}
