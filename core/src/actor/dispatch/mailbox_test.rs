#[cfg(test)]
mod tests {
  use troupe_utils_rs::collections::QueueSize;

  use crate::actor::actor_key::ActorKey;
  use crate::actor::dispatch::mailbox::Mailbox;
  use crate::actor::dispatch::mailbox_registry::MailboxRegistry;
  use crate::actor::message::{Action, Invocation, MailboxMessage};

  fn action(method: &str) -> MailboxMessage {
    MailboxMessage::Action(Action::build(
      ActorKey::from("troupe:Counter:abc"),
      method,
      Invocation::empty(),
    ))
  }

  #[tokio::test]
  async fn test_post_and_take_preserve_order() {
    let mailbox = Mailbox::new();

    mailbox.post(action("first")).await;
    mailbox.post(action("second")).await;
    assert_eq!(mailbox.len().await, QueueSize::Limited(2));

    match mailbox.take().await {
      Some(MailboxMessage::Action(a)) => assert_eq!(a.method_name(), "first"),
      other => panic!("expected an action, got {:?}", other),
    }
    match mailbox.take().await {
      Some(MailboxMessage::Action(a)) => assert_eq!(a.method_name(), "second"),
      other => panic!("expected an action, got {:?}", other),
    }
  }

  #[tokio::test]
  async fn test_stop_sentinel_travels_in_the_same_fifo() {
    let mailbox = Mailbox::new();

    mailbox.post(action("work")).await;
    mailbox.post(MailboxMessage::Stop).await;
    mailbox.post(action("late")).await;

    assert!(matches!(mailbox.take().await, Some(MailboxMessage::Action(_))));
    assert!(matches!(mailbox.take().await, Some(MailboxMessage::Stop)));
  }

  #[tokio::test]
  async fn test_registry_insert_and_lookup() {
    let registry = MailboxRegistry::new();
    let key = ActorKey::from("troupe:Counter:abc");

    assert!(registry.get(&key).is_none());
    assert!(registry.insert(key.clone(), Mailbox::new()));
    assert!(!registry.insert(key.clone(), Mailbox::new()));
    assert!(registry.contains(&key));
    assert_eq!(registry.len(), 1);
    assert_eq!(registry.keys(), vec![key.clone()]);

    let mailbox = registry.get(&key).unwrap();
    mailbox.post(action("work")).await;
    assert_eq!(mailbox.len().await, QueueSize::Limited(1));
  }

  #[tokio::test]
  async fn test_registry_concurrent_inserts_and_lookups() {
    let registry = MailboxRegistry::new();
    let mut handles = vec![];

    for i in 0..16 {
      let registry = registry.clone();
      handles.push(tokio::spawn(async move {
        for j in 0..64 {
          let key = ActorKey::from(format!("troupe:Load:{}-{}", i, j));
          assert!(registry.insert(key.clone(), Mailbox::new()));
          assert!(registry.get(&key).is_some());
        }
      }));
    }

    for handle in handles {
      handle.await.unwrap();
    }
    assert_eq!(registry.len(), 16 * 64);
    assert!(!registry.is_empty());
  }
}
