use std::any::Any;
use std::collections::HashMap;
use std::fmt::{Debug, Formatter};
use std::future::Future;
use std::sync::Arc;

use dashmap::DashMap;
use futures::future::BoxFuture;
use once_cell::sync::Lazy;

use crate::actor::actor_error::ActionError;
use crate::actor::context::ActorContext;
use crate::actor::message::Invocation;
use crate::actor::role::method_signature::{MethodSignature, MethodSignatures};
use crate::actor::role::role_descriptor::RoleDescriptor;

/// A running actor's state, owned exclusively by its worker.
pub type ActorInstance = Box<dyn Any + Send>;

/// The erased constructor of a role. Runs inside the worker context, after
/// the actor's bookkeeping context exists, so user initialization code can
/// already reference its own key and self-handle.
#[derive(Clone)]
pub struct ConstructorFn(
  Arc<dyn Fn(ActorContext, Invocation) -> BoxFuture<'static, Result<ActorInstance, ActionError>> + Send + Sync>,
);

impl Debug for ConstructorFn {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    write!(f, "ConstructorFn")
  }
}

impl ConstructorFn {
  pub fn new<F, Fut>(f: F) -> Self
  where
    F: Fn(ActorContext, Invocation) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<ActorInstance, ActionError>> + Send + 'static, {
    ConstructorFn(Arc::new(move |ctx, invocation| Box::pin(f(ctx, invocation))))
  }

  pub async fn run(&self, ctx: ActorContext, invocation: Invocation) -> Result<ActorInstance, ActionError> {
    (self.0)(ctx, invocation).await
  }
}

/// The erased invoker of one actor method: the single generic entry point
/// every remote call funnels through.
#[allow(clippy::type_complexity)]
#[derive(Clone)]
pub struct MethodFn(
  Arc<
    dyn for<'a> Fn(&'a mut (dyn Any + Send), ActorContext, Invocation) -> BoxFuture<'a, Result<(), ActionError>>
      + Send
      + Sync,
  >,
);

impl Debug for MethodFn {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    write!(f, "MethodFn")
  }
}

impl MethodFn {
  pub fn new<F>(f: F) -> Self
  where
    F: for<'a> Fn(&'a mut (dyn Any + Send), ActorContext, Invocation) -> BoxFuture<'a, Result<(), ActionError>>
      + Send
      + Sync
      + 'static, {
    MethodFn(Arc::new(f))
  }

  pub async fn run(
    &self,
    instance: &mut (dyn Any + Send),
    ctx: ActorContext,
    invocation: Invocation,
  ) -> Result<(), ActionError> {
    (self.0)(instance, ctx, invocation).await
  }
}

/// One row of a role's method table.
#[derive(Debug, Clone)]
pub struct MethodEntry {
  signature: MethodSignature,
  invoker: MethodFn,
}

impl MethodEntry {
  pub fn new(signature: MethodSignature, invoker: MethodFn) -> Self {
    Self { signature, invoker }
  }

  pub fn signature(&self) -> &MethodSignature {
    &self.signature
  }

  pub fn invoker(&self) -> &MethodFn {
    &self.invoker
  }
}

/// Metadata for a role class: identity, the signature snapshot handed to
/// proxies, and the erased constructor and method table the worker drives.
/// Built once, read-only afterwards.
#[derive(Debug, Clone)]
pub struct RoleMetadata {
  descriptor: RoleDescriptor,
  class_name: String,
  class_id: String,
  method_signatures: MethodSignatures,
  method_table: Arc<HashMap<String, MethodEntry>>,
  constructor: ConstructorFn,
}

impl RoleMetadata {
  pub(crate) fn new(
    descriptor: RoleDescriptor,
    class_name: String,
    class_id: String,
    method_table: HashMap<String, MethodEntry>,
    constructor: ConstructorFn,
  ) -> Self {
    let method_signatures: MethodSignatures = Arc::new(
      method_table
        .iter()
        .map(|(name, entry)| (name.clone(), entry.signature().clone()))
        .collect(),
    );
    Self {
      descriptor,
      class_name,
      class_id,
      method_signatures,
      method_table: Arc::new(method_table),
      constructor,
    }
  }

  pub fn descriptor(&self) -> &RoleDescriptor {
    &self.descriptor
  }

  pub fn class_name(&self) -> &str {
    &self.class_name
  }

  pub fn class_id(&self) -> &str {
    &self.class_id
  }

  pub fn method_signatures(&self) -> MethodSignatures {
    self.method_signatures.clone()
  }

  pub fn method_entry(&self, name: &str) -> Option<&MethodEntry> {
    self.method_table.get(name)
  }

  pub fn constructor(&self) -> &ConstructorFn {
    &self.constructor
  }
}

// Registration is idempotent: repeated registration of the same role type
// reuses the cached metadata until the cache is explicitly cleared.
static ROLE_CACHE: Lazy<DashMap<RoleDescriptor, RoleMetadata>> = Lazy::new(DashMap::new);

pub(crate) fn cached_metadata(descriptor: &RoleDescriptor) -> Option<RoleMetadata> {
  ROLE_CACHE.get(descriptor).map(|entry| entry.value().clone())
}

pub(crate) fn cache_metadata(metadata: RoleMetadata) {
  ROLE_CACHE.insert(metadata.descriptor().clone(), metadata);
}

/// Drops every cached role metadata value.
pub fn clear_role_cache() {
  ROLE_CACHE.clear();
}
