use std::any::Any;
use std::collections::HashMap;
use std::future::Future;
use std::marker::PhantomData;

use futures::future::BoxFuture;

use crate::actor::actor_error::{ActionError, RoleError};
use crate::actor::context::ActorContext;
use crate::actor::message::Invocation;
use crate::actor::role::method_signature::extract_signature;
use crate::actor::role::role_class::RoleClass;
use crate::actor::role::role_descriptor::RoleDescriptor;
use crate::actor::role::role_metadata::{
  cache_metadata, cached_metadata, ActorInstance, ConstructorFn, MethodEntry, MethodFn, RoleMetadata,
};

// Names the proxy reserves for its own control surface.
const RESERVED_METHOD_NAMES: &[&str] = &["stop"];

/// The registration surface that turns a plain type into an actor role.
///
/// Replaces decoration-time metaprogramming: the builder collects a
/// constructor and one invocation descriptor per public method, then
/// `register` produces the immutable role metadata and its proxy factory.
///
/// ```ignore
/// let role = RoleBuilder::<Counter>::new("Counter")
///   .constructor(|_ctx, _inv| async move { Ok(Counter { value: 0 }) })
///   .method("add", &["amount"], |counter: &mut Counter, _ctx, inv| {
///     Box::pin(async move {
///       counter.value += inv.arg(0).and_then(|v| v.as_int()).unwrap_or(1);
///       Ok(())
///     })
///   })
///   .register()?;
/// ```
pub struct RoleBuilder<T> {
  class_name: String,
  class_id: Option<String>,
  constructor: Option<ConstructorFn>,
  methods: Vec<(String, MethodEntry)>,
  _marker: PhantomData<fn() -> T>,
}

impl<T: Send + 'static> RoleBuilder<T> {
  pub fn new(class_name: impl Into<String>) -> Self {
    Self {
      class_name: class_name.into(),
      class_id: None,
      constructor: None,
      methods: Vec::new(),
      _marker: PhantomData,
    }
  }

  /// Overrides the class identifier. Defaults to `"troupe:" + class_name`.
  pub fn class_id(mut self, class_id: impl Into<String>) -> Self {
    self.class_id = Some(class_id.into());
    self
  }

  /// Registers the initializer. It runs inside the worker context with the
  /// caller-supplied constructor arguments, never in the caller's context.
  pub fn constructor<F, Fut>(mut self, f: F) -> Self
  where
    F: Fn(ActorContext, Invocation) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<T, ActionError>> + Send + 'static, {
    self.constructor = Some(ConstructorFn::new(move |ctx, invocation| {
      let constructed = f(ctx, invocation);
      async move { constructed.await.map(|actor| Box::new(actor) as ActorInstance) }
    }));
    self
  }

  /// Declares one remotely callable method with its ordered parameter names.
  pub fn method<F>(mut self, name: impl Into<String>, params: &[&str], f: F) -> Self
  where
    F: for<'a> Fn(&'a mut T, ActorContext, Invocation) -> BoxFuture<'a, Result<(), ActionError>>
      + Send
      + Sync
      + 'static, {
    let signature = extract_signature(params);
    let invoker = MethodFn::new(
      move |instance: &mut (dyn Any + Send), ctx: ActorContext, invocation: Invocation| match instance
        .downcast_mut::<T>()
      {
        Some(actor) => f(actor, ctx, invocation),
        None => Box::pin(futures::future::ready(Err(ActionError::InstanceMismatch {
          expected: std::any::type_name::<T>(),
        }))),
      },
    );
    self.methods.push((name.into(), MethodEntry::new(signature, invoker)));
    self
  }

  /// Validates the definition and produces the role class, reusing cached
  /// metadata when this role type was registered before.
  pub fn register(self) -> Result<RoleClass, RoleError> {
    if self.class_name.is_empty() {
      return Err(RoleError::EmptyClassName);
    }

    let descriptor = RoleDescriptor::of::<T>();
    if let Some(metadata) = cached_metadata(&descriptor) {
      return Ok(RoleClass::from_metadata(metadata));
    }

    let constructor = self.constructor.ok_or(RoleError::MissingConstructor {
      class_name: self.class_name.clone(),
    })?;

    let mut method_table = HashMap::with_capacity(self.methods.len());
    for (name, entry) in self.methods {
      if RESERVED_METHOD_NAMES.contains(&name.as_str()) {
        tracing::warn!(
          class_name = %self.class_name,
          method = %name,
          "role method shadows a proxy control attribute"
        );
      }
      if method_table.insert(name.clone(), entry).is_some() {
        return Err(RoleError::DuplicateMethod {
          class_name: self.class_name,
          method: name,
        });
      }
    }

    let class_id = self.class_id.unwrap_or_else(|| format!("troupe:{}", self.class_name));
    let metadata = RoleMetadata::new(descriptor, self.class_name, class_id, method_table, constructor);
    cache_metadata(metadata.clone());
    Ok(RoleClass::from_metadata(metadata))
  }
}
