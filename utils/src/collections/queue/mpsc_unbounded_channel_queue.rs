use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;

use crate::collections::element::Element;
use crate::collections::{BlockingDequeBehavior, QueueBase, QueueError, QueueReader, QueueSize, QueueWriter};
use async_trait::async_trait;
use tokio::sync::mpsc::error::TryRecvError;
use tokio::sync::{mpsc, Mutex};

#[derive(Debug)]
struct MpscUnboundedChannelQueueInner<E> {
  receiver: Mutex<mpsc::UnboundedReceiver<E>>,
  count: AtomicUsize,
  is_closed: AtomicBool,
}

/// An unbounded multi-producer single-consumer FIFO over a tokio channel.
///
/// Writers never block and never lock the consumer side; the single
/// consumer may either `poll` (non-blocking) or `take` (wait for mail).
#[derive(Debug, Clone)]
pub struct MpscUnboundedChannelQueue<E> {
  sender: mpsc::UnboundedSender<E>,
  inner: Arc<MpscUnboundedChannelQueueInner<E>>,
}

impl<T> MpscUnboundedChannelQueue<T> {
  pub fn new() -> Self {
    let (sender, receiver) = mpsc::unbounded_channel();
    Self {
      sender,
      inner: Arc::new(MpscUnboundedChannelQueueInner {
        receiver: Mutex::new(receiver),
        count: AtomicUsize::new(0),
        is_closed: AtomicBool::new(false),
      }),
    }
  }

  fn send(&self, element: T) -> Result<(), T> {
    if self.inner.is_closed.load(Ordering::SeqCst) {
      return Err(element);
    }
    self.sender.send(element).map_err(|e| e.0)
  }

  fn decrement_count(&self) {
    let _ = self
      .inner
      .count
      .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |c| Some(c.saturating_sub(1)));
  }
}

impl<T> Default for MpscUnboundedChannelQueue<T> {
  fn default() -> Self {
    Self::new()
  }
}

#[async_trait]
impl<E: Element> QueueBase<E> for MpscUnboundedChannelQueue<E> {
  async fn len(&self) -> QueueSize {
    QueueSize::Limited(self.inner.count.load(Ordering::SeqCst))
  }

  async fn capacity(&self) -> QueueSize {
    QueueSize::Limitless
  }
}

#[async_trait]
impl<E: Element> QueueWriter<E> for MpscUnboundedChannelQueue<E> {
  async fn offer(&mut self, element: E) -> Result<(), QueueError<E>> {
    match self.send(element) {
      Ok(_) => {
        self.inner.count.fetch_add(1, Ordering::SeqCst);
        Ok(())
      }
      Err(element) => Err(QueueError::OfferError(element)),
    }
  }
}

#[async_trait]
impl<E: Element> QueueReader<E> for MpscUnboundedChannelQueue<E> {
  async fn poll(&mut self) -> Result<Option<E>, QueueError<E>> {
    let mut receiver_mg = self.inner.receiver.lock().await;
    match receiver_mg.try_recv() {
      Ok(element) => {
        self.decrement_count();
        Ok(Some(element))
      }
      Err(TryRecvError::Empty) => Ok(None),
      Err(TryRecvError::Disconnected) => Err(QueueError::<E>::PollError),
    }
  }

  async fn clean_up(&mut self) {
    self.inner.is_closed.store(true, Ordering::SeqCst);
    let mut receiver_mg = self.inner.receiver.lock().await;
    receiver_mg.close();
    while receiver_mg.try_recv().is_ok() {}
    self.inner.count.store(0, Ordering::SeqCst);
  }
}

#[async_trait]
impl<E: Element> BlockingDequeBehavior<E> for MpscUnboundedChannelQueue<E> {
  async fn take(&mut self) -> Result<Option<E>, QueueError<E>> {
    let mut receiver_mg = self.inner.receiver.lock().await;
    match receiver_mg.recv().await {
      Some(element) => {
        self.decrement_count();
        Ok(Some(element))
      }
      // recv yields None only after close with an empty buffer.
      None => Ok(None),
    }
  }
}
