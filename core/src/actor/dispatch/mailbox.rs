use troupe_utils_rs::collections::{
  BlockingDequeBehavior, MpscUnboundedChannelQueue, QueueBase, QueueError, QueueSize, QueueWriter,
};

use crate::actor::message::MailboxMessage;

/// The per-actor inbox: an ordered, unbounded, multi-producer
/// single-consumer FIFO of actions and the stop sentinel.
///
/// Posting never blocks the sender; the single consumer is the actor's own
/// worker loop.
#[derive(Debug, Clone)]
pub struct Mailbox {
  queue: MpscUnboundedChannelQueue<MailboxMessage>,
}

impl Mailbox {
  pub(crate) fn new() -> Self {
    Self {
      queue: MpscUnboundedChannelQueue::new(),
    }
  }

  pub async fn post(&self, message: MailboxMessage) {
    let mut writer = self.queue.clone();
    if let Err(QueueError::OfferError(message)) = writer.offer(message).await {
      // Fire-and-forget: a closed inbox is the receiver's business only.
      tracing::debug!(message = ?message, "mailbox closed; message dropped");
    }
  }

  pub(crate) async fn take(&self) -> Option<MailboxMessage> {
    let mut reader = self.queue.clone();
    match reader.take().await {
      Ok(message) => message,
      Err(_) => None,
    }
  }

  pub async fn len(&self) -> QueueSize {
    self.queue.len().await
  }
}
