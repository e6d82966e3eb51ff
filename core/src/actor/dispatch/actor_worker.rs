use troupe_utils_rs::concurrent::CountDownLatch;

use crate::actor::context::ActorContext;
use crate::actor::director::Director;
use crate::actor::dispatch::mailbox::Mailbox;
use crate::actor::message::{Invocation, MailboxMessage};
use crate::actor::proxy::WeakRef;
use crate::actor::role::RoleMetadata;

/// The body that runs inside each actor's isolated execution context.
///
/// Lifecycle: build the actor's context first, run the user constructor with
/// the caller-supplied arguments, signal readiness exactly once, then take
/// one mailbox message at a time until the stop sentinel. An action is
/// always executed to completion before the next receive, which is what
/// keeps the actor's state single-threaded no matter how many senders exist.
pub(crate) async fn run_actor_worker(
  director: Director,
  metadata: RoleMetadata,
  self_ref: WeakRef,
  invocation: Invocation,
  mailbox: Mailbox,
  ready: CountDownLatch,
) {
  let ctx = ActorContext::new(self_ref, director);
  let constructed = metadata.constructor().run(ctx.clone(), invocation).await;

  // Readiness is signalled even when construction failed, so the spawning
  // context is never left blocked on the rendezvous.
  ready.count_down().await;

  let mut instance = match constructed {
    Ok(instance) => instance,
    Err(err) => {
      tracing::error!(actor_key = %ctx.actor_key(), error = %err, "actor constructor failed");
      return;
    }
  };
  tracing::debug!(actor_key = %ctx.actor_key(), "actor ready");

  loop {
    match mailbox.take().await {
      Some(MailboxMessage::Action(action)) => {
        let action_id = action.action_id().to_string();
        if let Err(err) = action.run(instance.as_mut(), ctx.clone(), &metadata).await {
          // Fatal to the action, never to the mailbox: subsequent actions
          // still run, in order.
          tracing::error!(
            actor_key = %ctx.actor_key(),
            action_id = %action_id,
            error = %err,
            "action failed"
          );
        }
      }
      Some(MailboxMessage::Stop) | None => break,
    }
  }

  // The mailbox stays registered and is abandoned: anything enqueued after
  // the stop sentinel is accepted but never processed.
  tracing::debug!(actor_key = %ctx.actor_key(), "actor stopped");
}
