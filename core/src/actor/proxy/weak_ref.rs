use serde::{Deserialize, Serialize};

use crate::actor::actor_key::ActorKey;
use crate::actor::director::Director;
use crate::actor::proxy::actor_proxy::ActorProxy;
use crate::actor::role::MethodSignatures;

/// The ownership-free, payload-safe form of a proxy: the same four identity
/// fields, no dispatch capability and no runtime handle.
///
/// A proxy converts to a weak ref before being embedded as an action
/// argument; the destination worker converts it back. The conversions are
/// pure inverses on `(actor_key, method_signatures, class_name, class_id)`,
/// and all three forms share one signature snapshot: method signatures never
/// change after actor creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeakRef {
  actor_key: ActorKey,
  method_signatures: MethodSignatures,
  class_name: String,
  class_id: String,
}

impl WeakRef {
  pub(crate) fn new(
    actor_key: ActorKey,
    method_signatures: MethodSignatures,
    class_name: String,
    class_id: String,
  ) -> Self {
    Self {
      actor_key,
      method_signatures,
      class_name,
      class_id,
    }
  }

  pub fn actor_key(&self) -> &ActorKey {
    &self.actor_key
  }

  pub fn method_signatures(&self) -> &MethodSignatures {
    &self.method_signatures
  }

  pub fn class_name(&self) -> &str {
    &self.class_name
  }

  pub fn class_id(&self) -> &str {
    &self.class_id
  }

  /// Rebuilds a live proxy around this identity, attaching `director` as the
  /// routing context.
  pub fn build_proxy(&self, director: &Director) -> ActorProxy {
    ActorProxy::from_weak(self, director.clone())
  }
}
