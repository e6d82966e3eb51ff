#[cfg(test)]
mod tests {
  use std::sync::Arc;
  use std::time::Duration;

  use tokio::sync::Mutex;
  use troupe_utils_rs::concurrent::CountDownLatch;

  use crate::actor::actor_error::{ActionError, SpawnError};
  use crate::actor::director::Director;
  use crate::actor::message::MailboxMessage;
  use crate::actor::role::{RoleBuilder, RoleClass};

  // Each test registers its own local role type: the metadata cache is
  // keyed by type, and tests run in parallel.
  macro_rules! counter_role {
    ($name:ident, $reported:expr, $latch:expr) => {{
      struct $name {
        value: i64,
      }
      let reported = $reported.clone();
      let latch = $latch.clone();
      let role: RoleClass = RoleBuilder::<$name>::new(stringify!($name))
        .constructor(|_ctx, _inv| async move { Ok($name { value: 0 }) })
        .method("increment", &[], |actor: &mut $name, _ctx, _inv| {
          Box::pin(async move {
            actor.value += 1;
            Ok(())
          })
        })
        .method("report", &[], move |actor: &mut $name, _ctx, _inv| {
          let reported = reported.clone();
          let latch = latch.clone();
          let value = actor.value;
          Box::pin(async move {
            reported.lock().await.push(value);
            latch.count_down().await;
            Ok(())
          })
        })
        .register()
        .unwrap();
      role
    }};
  }

  #[tokio::test]
  async fn test_start_and_shutdown_are_idempotent_by_report() {
    let director = Director::new();
    assert!(!director.is_started());

    assert!(director.start());
    assert!(!director.start());
    assert!(director.is_started());

    assert!(director.shutdown().await);
    assert!(!director.is_started());
    assert!(!director.shutdown().await);
  }

  #[tokio::test]
  async fn test_spawn_before_start_fails() {
    let reported = Arc::new(Mutex::new(Vec::new()));
    let latch = CountDownLatch::new(1);
    let role = counter_role!(NotStartedCounter, reported, latch);

    let director = Director::new();
    let result = role.spawn(&director, ()).await;
    assert_eq!(result.err(), Some(SpawnError::DirectorNotStarted));
    assert_eq!(director.actor_count(), 0);
  }

  #[tokio::test]
  async fn test_spawn_then_send_never_loses_the_message() {
    let reported = Arc::new(Mutex::new(Vec::new()));
    let latch = CountDownLatch::new(1);
    let role = counter_role!(RendezvousCounter, reported, latch);

    let director = Director::new();
    director.start();

    let counter = role.spawn(&director, ()).await.unwrap();
    for _ in 0..10 {
      counter.method("increment").unwrap().remote(()).await;
    }
    counter.method("report").unwrap().remote(()).await;

    latch.wait().await;
    assert_eq!(*reported.lock().await, vec![10]);

    director.shutdown().await;
  }

  #[tokio::test]
  async fn test_stop_abandons_the_mailbox_but_keeps_it_registered() {
    let reported = Arc::new(Mutex::new(Vec::new()));
    let latch = CountDownLatch::new(1);
    let role = counter_role!(StoppableCounter, reported, latch);

    let director = Director::new();
    director.start();

    let counter = role.spawn(&director, ()).await.unwrap();
    counter.method("report").unwrap().remote(()).await;
    latch.wait().await;

    counter.stop().await;
    // Sent after the sentinel from the same sender: accepted, never run.
    counter.method("report").unwrap().remote(()).await;

    tokio::time::sleep(Duration::from_millis(100)).await;
    assert_eq!(*reported.lock().await, vec![0]);
    assert!(director.registry().contains(counter.actor_key()));

    director.shutdown().await;
  }

  #[tokio::test]
  async fn test_stop_all_reaches_every_actor_and_marks_the_director_stopped() {
    let reported = Arc::new(Mutex::new(Vec::new()));
    let latch = CountDownLatch::new(3);
    let role = counter_role!(FleetCounter, reported, latch);

    let director = Director::new();
    director.start();

    let mut proxies = Vec::new();
    for _ in 0..3 {
      proxies.push(role.spawn(&director, ()).await.unwrap());
    }
    for proxy in &proxies {
      proxy.method("report").unwrap().remote(()).await;
    }
    latch.wait().await;

    director.stop_all().await;
    assert!(!director.is_started());
    assert_eq!(director.actor_count(), 3);

    // Nothing sent after stop_all is executed.
    for proxy in &proxies {
      proxy.method("report").unwrap().remote(()).await;
    }
    tokio::time::sleep(Duration::from_millis(100)).await;
    assert_eq!(reported.lock().await.len(), 3);
  }

  #[tokio::test]
  async fn test_route_to_an_unknown_key_is_a_silent_no_op() {
    let director = Director::new();
    director.start();
    director.route(&"troupe:Ghost:never".into(), MailboxMessage::Stop).await;
    director.shutdown().await;
  }

  #[tokio::test]
  async fn test_constructor_failure_never_blocks_the_spawner() {
    struct Doomed;
    let role = RoleBuilder::<Doomed>::new("Doomed")
      .constructor(|_ctx, _inv| async move { Err::<Doomed, _>(ActionError::failed("boom")) })
      .register()
      .unwrap();

    let director = Director::new();
    director.start();

    // The rendezvous must complete even though construction failed.
    let proxy = tokio::time::timeout(Duration::from_secs(1), role.spawn(&director, ()))
      .await
      .unwrap()
      .unwrap();
    assert!(director.registry().contains(proxy.actor_key()));

    director.shutdown().await;
  }
}
