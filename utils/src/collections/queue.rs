use std::fmt::Debug;

use async_trait::async_trait;

use thiserror::Error;

mod mpsc_unbounded_channel_queue;

pub use self::mpsc_unbounded_channel_queue::*;

use crate::collections::element::Element;

/// An error that occurs when a queue operation fails.<br/>
/// キューの操作に失敗した場合に発生するエラー。
#[derive(Error, Debug, PartialEq)]
pub enum QueueError<E> {
  #[error("Failed to offer an element: {0:?}")]
  OfferError(E),
  #[error("Failed to poll an element")]
  PollError,
}

/// The size of the queue.<br/>
/// キューのサイズ。
#[derive(Debug, Clone)]
pub enum QueueSize {
  /// The queue has no capacity limit.<br/>
  /// キューに容量制限がない。
  Limitless,
  /// The queue has a capacity limit.<br/>
  /// キューに容量制限がある。
  Limited(usize),
}

impl QueueSize {
  /// Returns whether the queue has no capacity limit.<br/>
  /// キューに容量制限がないかどうかを返します。
  pub fn is_limitless(&self) -> bool {
    matches!(self, QueueSize::Limitless)
  }

  /// Converts to a usize type. `Limitless` maps to `usize::MAX`.<br/>
  /// usize型に変換します。`Limitless` は `usize::MAX` になります。
  pub fn to_usize(&self) -> usize {
    match self {
      QueueSize::Limitless => usize::MAX,
      QueueSize::Limited(c) => *c,
    }
  }
}

impl PartialEq<Self> for QueueSize {
  fn eq(&self, other: &Self) -> bool {
    match (self, other) {
      (QueueSize::Limitless, QueueSize::Limitless) => true,
      (QueueSize::Limited(l), QueueSize::Limited(r)) => l == r,
      _ => false,
    }
  }
}

/// A trait that defines the behavior of a queue.<br/>
/// キューの振る舞いを定義するトレイト。
#[async_trait]
pub trait QueueBase<E: Element>: Debug + Send + Sync {
  /// Returns whether this queue is empty.<br/>
  /// このキューが空かどうかを返します。
  async fn is_empty(&self) -> bool {
    self.len().await == QueueSize::Limited(0)
  }

  /// Returns the length of this queue.<br/>
  /// このキューの長さを返します。
  async fn len(&self) -> QueueSize;

  /// Returns the capacity of this queue.<br/>
  /// このキューの最大容量を返します。
  async fn capacity(&self) -> QueueSize;
}

#[async_trait]
pub trait QueueWriter<E: Element>: QueueBase<E> {
  /// Inserts the specified element into this queue without blocking.<br/>
  /// 指定された要素をブロックせずにこのキューに挿入します。
  ///
  /// # Return Value / 戻り値
  /// - `Ok(())` - If the element is inserted successfully. / 要素が正常に挿入された場合。
  /// - `Err(QueueError::OfferError(element))` - If the queue is closed. / キューがクローズされている場合。
  async fn offer(&mut self, element: E) -> Result<(), QueueError<E>>;
}

#[async_trait]
pub trait QueueReader<E: Element>: QueueBase<E> {
  /// Retrieves and deletes the head of the queue. Returns None if the queue is empty.<br/>
  /// キューの先頭を取得および削除します。キューが空の場合は None を返します。
  async fn poll(&mut self) -> Result<Option<E>, QueueError<E>>;

  /// Closes the queue and discards pending elements.<br/>
  /// キューをクローズし、残っている要素を破棄します。
  async fn clean_up(&mut self);
}

/// A trait for the single consumer of a queue that can wait for mail.<br/>
/// メールを待機できるキューの単一コンシューマ用トレイト。
#[async_trait]
pub trait BlockingDequeBehavior<E: Element>: QueueReader<E> {
  /// Retrieves and deletes the head of the queue, waiting until an element
  /// becomes available. Returns None once the queue is closed and drained.<br/>
  /// キューの先頭を取得および削除します。要素が利用可能になるまで待機します。
  /// キューがクローズされて空になった場合は None を返します。
  async fn take(&mut self) -> Result<Option<E>, QueueError<E>>;
}
