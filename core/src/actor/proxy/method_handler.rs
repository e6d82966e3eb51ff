use crate::actor::actor_error::InvokeError;
use crate::actor::message::{Action, Invocation, MailboxMessage};
use crate::actor::proxy::actor_proxy::ActorProxy;

/// The dispatch handle for one method of one actor.
#[derive(Debug, Clone)]
pub struct MethodHandler {
  proxy: ActorProxy,
  method_name: String,
}

impl MethodHandler {
  pub(crate) fn new(proxy: ActorProxy, method_name: String) -> Self {
    Self { proxy, method_name }
  }

  pub fn method_name(&self) -> &str {
    &self.method_name
  }

  /// Always fails: actor methods are never executed synchronously in the
  /// caller's own context. Use [`MethodHandler::remote`].
  pub fn call(&self) -> Result<(), InvokeError> {
    Err(InvokeError::DirectInvocation {
      class_name: self.proxy.class_name().to_string(),
      method: self.method_name.clone(),
    })
  }

  /// Builds an action and sends it to the actor's mailbox, fire-and-forget.
  ///
  /// Returns immediately once the action is enqueued. There is no reply
  /// path: delivery and execution failures are never observed by the sender.
  pub async fn remote(&self, invocation: impl Into<Invocation>) {
    let action = Action::build(self.proxy.actor_key().clone(), &self.method_name, invocation.into());
    tracing::debug!(
      actor_key = %self.proxy.actor_key(),
      method = %self.method_name,
      action_id = %action.action_id(),
      "sending action"
    );
    self
      .proxy
      .director()
      .route(self.proxy.actor_key(), MailboxMessage::Action(action))
      .await;
  }

  /// The future-returning variant of this call path. Constructing it works;
  /// resolving it does not — see [`FutureStub`].
  pub fn future(&self) -> FutureMethodHandler {
    FutureMethodHandler { handler: self.clone() }
  }
}

/// Like [`MethodHandler`], but `remote` hands back a [`FutureStub`].
#[derive(Debug, Clone)]
pub struct FutureMethodHandler {
  handler: MethodHandler,
}

impl FutureMethodHandler {
  /// Sends exactly like [`MethodHandler::remote`] and returns a placeholder
  /// for the result.
  pub async fn remote(&self, invocation: impl Into<Invocation>) -> FutureStub {
    let action = Action::build(
      self.handler.proxy.actor_key().clone(),
      &self.handler.method_name,
      invocation.into(),
    );
    let stub = FutureStub {
      action_id: action.action_id().to_string(),
    };
    tracing::debug!(
      actor_key = %self.handler.proxy.actor_key(),
      method = %self.handler.method_name,
      action_id = %action.action_id(),
      "sending action (future stub)"
    );
    self
      .handler
      .proxy
      .director()
      .route(self.handler.proxy.actor_key(), MailboxMessage::Action(action))
      .await;
    stub
  }
}

/// A placeholder for a deferred result that can never resolve.
///
/// Actions carry no return channel, so there is nothing for this stub to
/// wait on. It exists so the call path can be constructed; result delivery
/// is unimplemented and unsupported until a real design exists.
#[derive(Debug, Clone)]
pub struct FutureStub {
  action_id: String,
}

impl FutureStub {
  pub fn action_id(&self) -> &str {
    &self.action_id
  }
}
