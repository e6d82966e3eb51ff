use std::any::Any;
use std::fmt::{Display, Formatter};

use uuid::Uuid;

use crate::actor::actor_error::ActionError;
use crate::actor::actor_key::ActorKey;
use crate::actor::context::ActorContext;
use crate::actor::message::invocation::Invocation;
use crate::actor::role::RoleMetadata;

/// One deferred method invocation: "invoke `method_name` on the actor behind
/// `actor_key` with these arguments".
///
/// Built once per remote call, sent exactly once, consumed exactly once by
/// the destination worker, then discarded. The argument scan in [`Action::build`]
/// is unconditional and covers top-level arguments only; a proxy nested
/// inside a `List` or `Map` value is not rewritten and must not be sent.
#[derive(Debug, Clone)]
pub struct Action {
  actor_key: ActorKey,
  method_name: String,
  action_id: String,
  invocation: Invocation,
  refs: bool,
}

impl Action {
  /// Creates an action with a caller-supplied id. If no id is given, a new
  /// one is generated.
  pub fn new(actor_key: ActorKey, method_name: impl Into<String>, action_id: Option<String>, invocation: Invocation) -> Self {
    let (invocation, refs) = invocation.seal_handles();
    Self {
      actor_key,
      method_name: method_name.into(),
      action_id: action_id.unwrap_or_else(|| Uuid::new_v4().simple().to_string()),
      invocation,
      refs,
    }
  }

  pub fn build(actor_key: ActorKey, method_name: impl Into<String>, invocation: Invocation) -> Self {
    Self::new(actor_key, method_name, None, invocation)
  }

  pub fn actor_key(&self) -> &ActorKey {
    &self.actor_key
  }

  pub fn method_name(&self) -> &str {
    &self.method_name
  }

  pub fn action_id(&self) -> &str {
    &self.action_id
  }

  /// Whether any argument is a handle requiring the inverse rewrite on arrival.
  pub fn refs(&self) -> bool {
    self.refs
  }

  pub fn invocation(&self) -> &Invocation {
    &self.invocation
  }

  /// Runs this action against `instance` inside the destination worker.
  ///
  /// Restores embedded handles first, then resolves the method through the
  /// role's method table and binds the arguments against its signature.
  pub(crate) async fn run(
    self,
    instance: &mut (dyn Any + Send),
    ctx: ActorContext,
    metadata: &RoleMetadata,
  ) -> Result<(), ActionError> {
    let invocation = if self.refs {
      self.invocation.hydrate_handles(ctx.director())
    } else {
      self.invocation
    };
    let entry = metadata.method_entry(&self.method_name).ok_or(ActionError::MethodNotFound {
      method: self.method_name.clone(),
    })?;
    let bound = entry.signature().bind(&self.method_name, invocation)?;
    entry.invoker().run(instance, ctx, bound).await
  }
}

impl Display for Action {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    write!(f, "Action({}, {}, {})", self.actor_key, self.method_name, self.action_id)
  }
}
