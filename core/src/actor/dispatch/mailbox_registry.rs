use std::hash::{Hash, Hasher};
use std::sync::Arc;

use dashmap::DashMap;
use siphasher::sip::SipHasher;

use crate::actor::actor_key::ActorKey;
use crate::actor::dispatch::mailbox::Mailbox;

const BUCKET_COUNT: usize = 1024;

/// The shared actor-key → mailbox map, visible to every worker so any actor
/// can route to any other without a central coordinator hop.
///
/// Sharded into SipHash-selected buckets: concurrent inserts (actor
/// creation) and lookups (routing) from every worker never contend on one
/// global lock.
#[derive(Debug, Clone)]
pub struct MailboxRegistry {
  buckets: Arc<Vec<DashMap<ActorKey, Mailbox>>>,
}

impl MailboxRegistry {
  pub(crate) fn new() -> Self {
    let mut buckets = Vec::with_capacity(BUCKET_COUNT);
    for _ in 0..BUCKET_COUNT {
      buckets.push(DashMap::new());
    }
    Self {
      buckets: Arc::new(buckets),
    }
  }

  fn bucket(&self, actor_key: &ActorKey) -> &DashMap<ActorKey, Mailbox> {
    let mut hasher = SipHasher::new();
    actor_key.hash(&mut hasher);
    let index = (hasher.finish() % BUCKET_COUNT as u64) as usize;
    &self.buckets[index]
  }

  /// Registers a mailbox under a new key. Returns false if the key was
  /// already present (the mailbox is not replaced).
  pub(crate) fn insert(&self, actor_key: ActorKey, mailbox: Mailbox) -> bool {
    let bucket = self.bucket(&actor_key);
    match bucket.entry(actor_key) {
      dashmap::mapref::entry::Entry::Occupied(_) => false,
      dashmap::mapref::entry::Entry::Vacant(entry) => {
        entry.insert(mailbox);
        true
      }
    }
  }

  pub fn get(&self, actor_key: &ActorKey) -> Option<Mailbox> {
    self.bucket(actor_key).get(actor_key).map(|entry| entry.value().clone())
  }

  pub fn contains(&self, actor_key: &ActorKey) -> bool {
    self.bucket(actor_key).contains_key(actor_key)
  }

  pub fn keys(&self) -> Vec<ActorKey> {
    self
      .buckets
      .iter()
      .flat_map(|bucket| bucket.iter().map(|entry| entry.key().clone()).collect::<Vec<_>>())
      .collect()
  }

  pub fn len(&self) -> usize {
    self.buckets.iter().map(|bucket| bucket.len()).sum()
  }

  pub fn is_empty(&self) -> bool {
    self.buckets.iter().all(|bucket| bucket.is_empty())
  }
}
