use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use static_assertions::assert_impl_all;
use troupe_utils_rs::concurrent::CountDownLatch;

use crate::actor::actor_error::SpawnError;
use crate::actor::actor_key::ActorKey;
use crate::actor::dispatch::mailbox::Mailbox;
use crate::actor::dispatch::mailbox_registry::MailboxRegistry;
use crate::actor::dispatch::run_actor_worker;
use crate::actor::message::{Invocation, MailboxMessage};
use crate::actor::proxy::WeakRef;
use crate::actor::role::RoleMetadata;

/// The runtime handle owning actor lifecycle and message routing.
///
/// An explicit, clonable value rather than a process-wide global: every
/// proxy and every worker holds a clone, and all of them share one mailbox
/// registry, so routing from the top-level caller context and from inside a
/// worker context is the same code path with the same observable ordering.
#[derive(Debug, Clone)]
pub struct Director {
  inner: Arc<DirectorInner>,
}

#[derive(Debug)]
struct DirectorInner {
  registry: MailboxRegistry,
  started: AtomicBool,
}

assert_impl_all!(Director: Send, Sync);

impl Default for Director {
  fn default() -> Self {
    Self::new()
  }
}

impl Director {
  pub fn new() -> Self {
    Self {
      inner: Arc::new(DirectorInner {
        registry: MailboxRegistry::new(),
        started: AtomicBool::new(false),
      }),
    }
  }

  /// Starts the director. Starting an already-started director reports the
  /// condition and returns false instead of failing.
  pub fn start(&self) -> bool {
    if self.inner.started.swap(true, Ordering::SeqCst) {
      tracing::warn!("director already started");
      return false;
    }
    tracing::info!("director started");
    true
  }

  pub fn is_started(&self) -> bool {
    self.inner.started.load(Ordering::SeqCst)
  }

  /// Tears the runtime down: best-effort stop of every actor, then marks
  /// the director stopped. Shutting down a never-started director reports
  /// the condition and returns false instead of failing.
  pub async fn shutdown(&self) -> bool {
    if !self.is_started() {
      tracing::warn!("director not started; nothing to shut down");
      return false;
    }
    self.stop_all().await;
    tracing::info!("director shut down");
    true
  }

  /// Sends the stop sentinel to every currently-registered actor key, then
  /// marks the director stopped. Does not wait for workers to terminate.
  pub async fn stop_all(&self) {
    for actor_key in self.inner.registry.keys() {
      self.route(&actor_key, MailboxMessage::Stop).await;
    }
    self.inner.started.store(false, Ordering::SeqCst);
  }

  /// The number of actor keys currently registered.
  pub fn actor_count(&self) -> usize {
    self.inner.registry.len()
  }

  pub(crate) fn registry(&self) -> &MailboxRegistry {
    &self.inner.registry
  }

  /// Allocates a mailbox, registers it, launches the worker execution
  /// context, and blocks until the worker signals readiness.
  ///
  /// The rendezvous is mandatory: without it a message sent right after
  /// spawn could reach a mailbox whose consumer has not started yet and be
  /// lost on an early stop.
  pub(crate) async fn spawn_actor(
    &self,
    metadata: &RoleMetadata,
    self_ref: WeakRef,
    invocation: Invocation,
  ) -> Result<(), SpawnError> {
    let actor_key = self_ref.actor_key().clone();
    let mailbox = Mailbox::new();
    if !self.inner.registry.insert(actor_key.clone(), mailbox.clone()) {
      return Err(SpawnError::DuplicateKey(actor_key));
    }
    let ready = CountDownLatch::new(1);
    tokio::spawn(run_actor_worker(
      self.clone(),
      metadata.clone(),
      self_ref,
      invocation,
      mailbox,
      ready.clone(),
    ));
    ready.wait().await;
    tracing::debug!(actor_key = %actor_key, "actor spawned");
    Ok(())
  }

  /// Looks the mailbox up in the shared registry and enqueues the message.
  ///
  /// A key with no mailbox is a dead letter: reported, then dropped. The
  /// sender never observes it.
  pub async fn route(&self, actor_key: &ActorKey, message: MailboxMessage) {
    match self.inner.registry.get(actor_key) {
      Some(mailbox) => mailbox.post(message).await,
      None => {
        tracing::warn!(actor_key = %actor_key, "dead letter: no mailbox registered for actor");
      }
    }
  }
}
