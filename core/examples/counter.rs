use std::time::Duration;

use tracing_subscriber::EnvFilter;
use troupe_core_rs::{ActionError, ActorContext, CallValue, Director, Invocation, RoleBuilder, RoleClass, RoleError};

#[derive(Debug)]
struct Counter {
  value: i64,
}

fn counter_role() -> Result<RoleClass, RoleError> {
  RoleBuilder::<Counter>::new("Counter")
    .constructor(|ctx: ActorContext, _inv| async move {
      tracing::info!(actor_key = %ctx.actor_key(), "running counter init");
      Ok(Counter { value: 0 })
    })
    .method("increment", &[], |actor: &mut Counter, _ctx, _inv| {
      Box::pin(async move {
        actor.value += 1;
        tracing::info!(value = actor.value, "ran increment");
        Ok(())
      })
    })
    .method("get_counter", &[], |actor: &mut Counter, ctx: ActorContext, _inv| {
      let value = actor.value;
      Box::pin(async move {
        tracing::info!(actor_key = %ctx.actor_key(), value, "ran get");
        Ok(())
      })
    })
    .method(
      "set_self",
      &["handle"],
      |_actor: &mut Counter, _ctx, inv: Invocation| {
        Box::pin(async move {
          let handle = inv
            .arg(0)
            .and_then(CallValue::as_proxy)
            .cloned()
            .ok_or_else(|| ActionError::failed("expected a handle argument"))?;
          tracing::info!(handle = %handle, "received own handle as payload");
          let getter = handle
            .method("get_counter")
            .map_err(|err| ActionError::failed(err.to_string()))?;
          getter.remote(()).await;
          Ok(())
        })
      },
    )
    .method("check_proxy", &[], |_actor: &mut Counter, ctx: ActorContext, _inv| {
      Box::pin(async move {
        let handle = ctx.self_proxy();
        tracing::info!(handle = %handle, "rebuilt own handle from context");
        let getter = handle
          .method("get_counter")
          .map_err(|err| ActionError::failed(err.to_string()))?;
        getter.remote(()).await;
        Ok(())
      })
    })
    .register()
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
    .init();

  let director = Director::new();
  director.start();

  let role = counter_role()?;
  let counter = role.spawn(&director, ()).await?;

  for _ in 0..10 {
    counter.method("increment")?.remote(()).await;
  }

  // Returns do not work yet: the future path only hands back a stub.
  let stub = counter.method("get_counter")?.future().remote(()).await;
  tracing::info!(action_id = %stub.action_id(), "got a future stub; result delivery is unimplemented");

  counter.method("set_self")?.remote([CallValue::from(&counter)]).await;
  counter.method("check_proxy")?.remote(()).await;

  // A second caller can attach to the same actor by key.
  let attached = role.attach(&director, counter.actor_key().clone())?;
  attached.method("increment")?.remote(()).await;

  tokio::time::sleep(Duration::from_millis(500)).await;
  director.shutdown().await;
  Ok(())
}
