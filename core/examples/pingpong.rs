use std::time::{Duration, Instant};

use tracing_subscriber::EnvFilter;
use troupe_core_rs::{ActionError, ActorContext, ActorProxy, CallValue, Director, Invocation, RoleBuilder, RoleClass, RoleError};

const NUM_PINGS: i64 = 1000;

struct Pinger {
  pings_left: i64,
  judge: Option<ActorProxy>,
  ponger: Option<ActorProxy>,
}

struct Ponger {
  pinger: Option<ActorProxy>,
}

struct Judge {
  pings: i64,
  pinger: Option<ActorProxy>,
  ponger: Option<ActorProxy>,
  ping_ok: bool,
  pong_ok: bool,
  init: Option<Instant>,
}

async fn fire(proxy: &ActorProxy, method: &str, invocation: impl Into<Invocation>) -> Result<(), ActionError> {
  let handler = proxy.method(method).map_err(|err| ActionError::failed(err.to_string()))?;
  handler.remote(invocation).await;
  Ok(())
}

fn int_arg(invocation: &Invocation, index: usize) -> Result<i64, ActionError> {
  invocation
    .arg(index)
    .and_then(CallValue::as_int)
    .ok_or_else(|| ActionError::failed(format!("expected an int at argument {}", index)))
}

fn proxy_arg(invocation: &Invocation, index: usize) -> Result<ActorProxy, ActionError> {
  invocation
    .arg(index)
    .and_then(CallValue::as_proxy)
    .cloned()
    .ok_or_else(|| ActionError::failed(format!("expected a handle at argument {}", index)))
}

async fn judge_run(actor: &mut Judge) -> Result<(), ActionError> {
  if actor.ping_ok && actor.pong_ok && actor.init.is_none() {
    actor.init = Some(Instant::now());
    let pinger = actor.pinger.clone().ok_or_else(|| ActionError::failed("judge has no pinger"))?;
    fire(&pinger, "pong", ()).await?;
    tracing::info!("first sent");
  }
  Ok(())
}

fn pinger_role() -> Result<RoleClass, RoleError> {
  RoleBuilder::<Pinger>::new("Pinger")
    .constructor(|_ctx, _inv| async move {
      Ok(Pinger {
        pings_left: 0,
        judge: None,
        ponger: None,
      })
    })
    .method(
      "set_up",
      &["pings", "judge", "ponger"],
      |actor: &mut Pinger, _ctx, inv: Invocation| {
        Box::pin(async move {
          actor.pings_left = int_arg(&inv, 0)?;
          let judge = proxy_arg(&inv, 1)?;
          actor.ponger = Some(proxy_arg(&inv, 2)?);
          fire(&judge, "ping_ready", ()).await?;
          actor.judge = Some(judge);
          tracing::info!("ping ready");
          Ok(())
        })
      },
    )
    .method("pong", &[], |actor: &mut Pinger, _ctx, _inv| {
      Box::pin(async move {
        if actor.pings_left > 0 {
          actor.pings_left -= 1;
          let ponger = actor.ponger.clone().ok_or_else(|| ActionError::failed("pinger has no ponger"))?;
          fire(&ponger, "ping", ()).await
        } else {
          let judge = actor.judge.clone().ok_or_else(|| ActionError::failed("pinger has no judge"))?;
          fire(&judge, "finish", ()).await
        }
      })
    })
    .register()
}

fn ponger_role() -> Result<RoleClass, RoleError> {
  RoleBuilder::<Ponger>::new("Ponger")
    .constructor(|_ctx, _inv| async move { Ok(Ponger { pinger: None }) })
    .method(
      "set_up",
      &["judge", "pinger"],
      |actor: &mut Ponger, _ctx, inv: Invocation| {
        Box::pin(async move {
          let judge = proxy_arg(&inv, 0)?;
          actor.pinger = Some(proxy_arg(&inv, 1)?);
          fire(&judge, "pong_ready", ()).await?;
          tracing::info!("pong ready");
          Ok(())
        })
      },
    )
    .method("ping", &[], |actor: &mut Ponger, _ctx, _inv| {
      Box::pin(async move {
        let pinger = actor.pinger.clone().ok_or_else(|| ActionError::failed("ponger has no pinger"))?;
        fire(&pinger, "pong", ()).await
      })
    })
    .register()
}

fn judge_role() -> Result<RoleClass, RoleError> {
  RoleBuilder::<Judge>::new("Judge")
    .constructor(|_ctx, _inv| async move {
      Ok(Judge {
        pings: 0,
        pinger: None,
        ponger: None,
        ping_ok: false,
        pong_ok: false,
        init: None,
      })
    })
    .method(
      "set_up",
      &["num_pings", "pinger", "ponger"],
      |actor: &mut Judge, ctx: ActorContext, inv: Invocation| {
        Box::pin(async move {
          actor.pings = int_arg(&inv, 0)?;
          let pinger = proxy_arg(&inv, 1)?;
          let ponger = proxy_arg(&inv, 2)?;
          fire(
            &pinger,
            "set_up",
            [
              CallValue::from(actor.pings),
              CallValue::from(ctx.self_proxy()),
              CallValue::from(&ponger),
            ],
          )
          .await?;
          fire(
            &ponger,
            "set_up",
            [CallValue::from(ctx.self_proxy()), CallValue::from(&pinger)],
          )
          .await?;
          actor.pinger = Some(pinger);
          actor.ponger = Some(ponger);
          tracing::info!("judge ready");
          Ok(())
        })
      },
    )
    .method("ping_ready", &[], |actor: &mut Judge, _ctx, _inv| {
      Box::pin(async move {
        actor.ping_ok = true;
        judge_run(actor).await
      })
    })
    .method("pong_ready", &[], |actor: &mut Judge, _ctx, _inv| {
      Box::pin(async move {
        actor.pong_ok = true;
        judge_run(actor).await
      })
    })
    .method("finish", &[], |actor: &mut Judge, _ctx, _inv| {
      let pings = actor.pings;
      let init = actor.init;
      Box::pin(async move {
        let started = init.ok_or_else(|| ActionError::failed("finish before first volley"))?;
        let total = started.elapsed().as_secs_f64();
        tracing::info!(pings, seconds = total, "finished");
        tracing::info!(pings_per_second = pings as f64 / total, "throughput");
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

  let judge = judge_role()?.spawn(&director, ()).await?;
  let pinger = pinger_role()?.spawn(&director, ()).await?;
  let ponger = ponger_role()?.spawn(&director, ()).await?;

  judge
    .method("set_up")?
    .remote([
      CallValue::from(NUM_PINGS),
      CallValue::from(&pinger),
      CallValue::from(&ponger),
    ])
    .await;

  tokio::time::sleep(Duration::from_secs(2)).await;
  director.shutdown().await;
  Ok(())
}
